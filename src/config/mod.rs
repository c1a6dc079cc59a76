//! Configuration module for ProfitFirst
//!
//! - XDG-compliant path resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::ProfitFirstPaths;
pub use settings::{ProviderSettings, Settings};
