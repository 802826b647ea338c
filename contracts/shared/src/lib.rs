#![no_std]
//! # Shared Colonization Contracts Library
//!
//! Reusable error codes and configuration constants for the exoplanet
//! colonization Soroban contracts.
//!
//! ## Modules
//!
//! - `errors` - Common error type returned by both registries
//! - `constants` - Configuration constants for governance thresholds
//!
//! ## Usage
//!
//! Import the shared library in your contract's Cargo.toml:
//!
//! ```toml
//! [dependencies]
//! shared = { path = "../shared" }
//! ```
//!
//! Then use it in your code:
//!
//! ```rust,ignore
//! use shared::errors::ContractError;
//! use shared::constants::RESOURCE_ALLOCATION_VOTE_THRESHOLD;
//! ```

pub mod constants;
pub mod errors;

// Re-export commonly used items
pub use constants::RESOURCE_ALLOCATION_VOTE_THRESHOLD;
pub use errors::ContractError;
