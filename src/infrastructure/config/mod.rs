//! Configuration loading: application settings and scenario files.

pub mod logging;
pub mod project;
pub mod report;
pub mod scenario;
pub mod settings;
pub mod solver;
