// Library crate exposing modules for integration tests

pub mod chunker;
pub mod cli;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod logging;
pub mod model;
pub mod progress;
pub mod repository;
pub mod translator;
pub mod util;
pub mod verifier;
