//! Error types for the front end.
//!
//! This module defines the syntax errors the parser accumulates. It includes:
//!
//! - Error structures with source position information
//! - Specific error variants for each kind of expectation failure
//! - Error names and suggestions for display

pub mod errors;
