//! Configuration and path management for spendlog

pub mod paths;
pub mod settings;

pub use paths::DataPaths;
pub use settings::Settings;
