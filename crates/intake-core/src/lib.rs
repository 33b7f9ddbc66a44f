//! Core types and form logic for the IEDC Execom intake system.
//!
//! This crate is deliberately free of HTTP and I/O dependencies.
//! The relay and server crates depend on it; it depends on nothing heavier
//! than serde.

pub mod applicant;
pub mod error;
pub mod field;
pub mod outcome;
pub mod requiredness;
pub mod session;
pub mod validation;

pub use error::{Error, Result};
