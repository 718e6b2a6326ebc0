#![forbid(unsafe_code)]

//! Zekken badge attribute validation + typed identity model (headless).
//!
//! Design goals:
//! - fail-fast validation with user-displayable Japanese messages
//! - a typed identity that cannot exist in an invalid state
//! - deterministic, I/O-free evaluation (safe for unsynchronized concurrent use)

pub mod alphabet;
pub mod category;
pub mod config;
pub mod error;
pub mod identity;

pub use category::{Category, Theme};
pub use config::BadgeConfig;
pub use error::{Error, Result};
pub use identity::{IdentityRecord, validate_attributes};
