pub mod blend;
pub mod color;
pub mod config;
pub mod light_set;
pub mod store;
pub mod tables;
