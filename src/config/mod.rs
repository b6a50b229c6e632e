//! Configuration module for the `pixell` front end
//!
//! This module provides configuration management including:
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::PixellPaths;
pub use settings::Settings;
