//! inventa CLI library
//!
//! Argument definitions, configuration, logging and output rendering for the
//! `inventa` binary.

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod render;
