pub mod bootstrap;
pub mod config;
pub mod log;
pub mod version;
