//! # Tennis Career Tracker Rust Backend
//!
//! Rating-trajectory alignment engine.
//!
//! This crate provides the Rust backend for the Tennis Career Tracker (TCT)
//! charting system. It ingests irregular, sparsely-sampled rating histories
//! (one observation per completed match) for multiple players and produces
//! jointly-indexed series suitable for comparative visualization. The backend
//! exposes a REST API via Axum for the React frontend.
//!
//! ## Features
//!
//! - **Data Loading**: Store and fetch per-player rating records
//! - **Alignment**: Three resampling policies (by career match ordinal, by
//!   exact calendar date, by interpolated calendar day) over one shared
//!   aligner contract
//! - **Domain Derivation**: Value-axis ranges with headroom and baselines
//! - **Rating Systems**: ELO, TSR, and Glicko-2 columns selected per request
//! - **HTTP API**: RESTful endpoints for frontend integration
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifiers, rating-system selection, and DTO re-exports
//! - [`models`]: Canonical rating-history models and date handling
//! - [`services`]: Alignment strategies, domain calculator, orchestration
//! - [`db`]: Repository seam and the in-memory backend
//! - [`routes`]: Route-specific data types and wrapper functions
//! - [`http`]: Axum-based HTTP server and request handlers

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
