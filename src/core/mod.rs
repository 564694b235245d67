//! Core library components.
//!
//! This module contains the reusable logic for turning an env file into a
//! Secret manifest.

pub mod constants;
pub mod env;
pub mod manifest;
pub mod types;
