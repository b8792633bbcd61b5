//! CLI Commands

pub mod demo;
pub mod serve;

pub use demo::DemoCommand;
pub use serve::ServeCommand;
