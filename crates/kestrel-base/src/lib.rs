//! # kestrel-base
//!
//! Core types and utilities for the Kestrel SAT solver.
//!
//! This crate provides the foundational building blocks used across all other
//! Kestrel crates, including:
//!
//! - **Literals and Values**: DIMACS-style signed literals and three-valued
//!   assignments
//! - **Models**: total assignment witnesses produced on SAT
//! - **Error Types**: unified error handling across the solver
//! - **Utilities**: seeded PRNG for randomized testing

pub mod error;
pub mod model;
pub mod types;
pub mod utils;

pub use error::{Error, Result};
pub use model::Model;
pub use types::{Lit, Value, Var};
