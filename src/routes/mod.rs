//! Route-specific data types and wrapper functions.
//!
//! Each module owns the DTO types for one view of the data and a thin wrapper
//! that applies request defaults before delegating to the service layer.

pub mod players;
pub mod trajectory;
