//! Platform detection and system helpers for Shark
//!
//! This crate provides cross-platform queries with special handling for
//! Windows:
//! - OS family, release, and architecture detection
//! - Path normalization and well-known directories
//! - Privilege checks and registry-backed environment lookups

mod error;
mod info;
mod paths;
#[cfg(windows)]
mod registry;
mod windows;

pub use error::PlatformError;
pub use info::{Arch, Os, PlatformInfo};
pub use paths::{ensure_dir, home_dir, normalize_path, temp_dir, to_posix_path};
pub use windows::{EnvScope, get_environment_variable, is_admin};
