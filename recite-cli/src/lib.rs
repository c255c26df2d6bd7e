//! recite-check library
//!
//! Argument parsing and report rendering, split from `main.rs` so they can
//! be tested without spawning the binary.

pub mod cli;
pub mod render;
