//! dirspace - A directory space accounting and cleanup utility
//!
//! This crate provides functionality for:
//! - Inventorying the immediate entries of a directory with a skip set
//! - Deleting inventoried files behind an explicit confirmation gate
//! - Persisting cumulative deletion statistics across runs

pub mod cli;
pub mod commands;
pub mod config;
pub mod console;
pub mod deletion;
pub mod error;
pub mod inventory;
pub mod session;
pub mod stats;

// Re-export commonly used types
pub use config::Config;
pub use error::{Result, SpaceError};
