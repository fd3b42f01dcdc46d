//! Structured logging facility for TagRoute
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - Stable schema constants for field keys and event names
//!
//! # Usage
//!
//! ```rust
//! use tagroute_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod schema;

pub use init::{init, Profile};
