//! rsproc: minimal CLI scaffold with demonstration commands.
//!
//! Library surface behind the `rsproc` binary: argument definitions and
//! command dispatch, the file-processing core, layered configuration, and
//! the error taxonomy.

pub mod cli;
pub mod config;
pub mod errors;
pub mod processor;
pub mod util;
