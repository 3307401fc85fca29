//! Environment-driven configuration for skillet.
//!
//! This crate resolves the two layered skill roots - the user-personal
//! directory and the shared/vendored checkout - from environment variables
//! with home-relative defaults. It owns no on-disk state of its own.

#![deny(unsafe_code)]
#![warn(missing_docs)]

/// Environment variable handling and root resolution.
pub mod env;

pub use env::{
    home_dir, personal_skills_dir, shared_skills_dir, skill_roots, ENV_PERSONAL_DIR,
    ENV_SHARED_DIR,
};
