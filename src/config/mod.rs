//! Unified configuration loading for VastuKhoj.
//!
//! Loads all configuration from a single YAML file.

mod defaults;
mod environment;
mod error;
mod khoj;
mod render;

// Re-export main types
pub use error::ConfigLoadError;
pub use khoj::KhojConfig;

// Re-export section types
pub use environment::EnvironmentSection;
pub use render::RenderSection;
