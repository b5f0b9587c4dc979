//! Data access for player rating histories.
//!
//! This module provides abstractions for storage operations via the
//! Repository pattern, allowing different backends to be swapped easily.
//!
//! The module includes:
//! - `services`: High-level data-access functions (use these in application
//!   code)
//! - `repository`: Trait definition and error types
//! - `repositories::local`: In-memory implementation for unit testing and
//!   local development
//!
//! Durable persistence is out of scope for this backend; the in-memory
//! repository holds a fixed snapshot of per-player observations for the
//! lifetime of the process.

#[cfg(not(feature = "local-repo"))]
compile_error!("Enable at least one repository backend feature.");

pub mod repositories;
pub mod repository;
pub mod services;


pub use repositories::LocalRepository;
pub use repository::{PlayerRepository, RepositoryError, RepositoryResult};

use anyhow::{Context, Result};
use std::sync::{Arc, OnceLock};

/// Global repository instance initialized once per process.
static REPOSITORY: OnceLock<Arc<dyn PlayerRepository>> = OnceLock::new();

#[cfg(feature = "local-repo")]
fn create_selected_repository() -> RepositoryResult<Arc<dyn PlayerRepository>> {
    Ok(Arc::new(LocalRepository::new()))
}

/// Initialize the global repository singleton for the selected backend.
pub fn init_repository() -> Result<()> {
    if REPOSITORY.get().is_some() {
        return Ok(());
    }

    let repo = create_selected_repository().map_err(|e| anyhow::Error::msg(e.to_string()))?;
    let _ = REPOSITORY.set(repo);
    Ok(())
}

/// Get a reference to the global repository instance.
pub fn get_repository() -> Result<&'static Arc<dyn PlayerRepository>> {
    if REPOSITORY.get().is_none() {
        let _ = init_repository();
    }

    REPOSITORY
        .get()
        .context("Repository not initialized. Call init_repository() first.")
}
