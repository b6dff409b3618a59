//! CLI module graph.

pub mod about;
pub mod command;
pub mod curve;
pub mod diagnostic;
pub mod output;
pub mod paths;
pub mod report;
pub mod scenario;
pub mod solve;
pub mod value;
