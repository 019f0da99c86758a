mod config;

pub use config::PreviewArgs;
