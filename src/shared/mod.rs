pub mod config;

pub use config::EnhancerConfig;
