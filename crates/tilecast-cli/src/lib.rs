//! Library surface of the tilecast CLI.
//!
//! The binary is a thin clap dispatcher over the modules here; keeping the
//! command implementations in a library makes them testable without
//! spawning the binary.

pub mod commands;
pub mod input;
