pub mod light_core;
pub mod light_runtime;
pub mod preview;
