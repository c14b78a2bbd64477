//! # Acervo Library
//!
//! This library exposes the Acervo modules for testing and integration.
//!
//! The main binary uses these modules through the `main.rs` entry point.

pub mod api;
pub mod cli;
pub mod config;
pub mod error;

// Re-export acervo_core for convenience
pub use acervo_core;
