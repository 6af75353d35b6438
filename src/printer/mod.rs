//! Printers and their argument handling.
//!
//! This module provides:
//!
//! - [`Printer`]: A sink wrapper that styles output only when enabled
//! - [`Arg`]: One entry of a mixed value/style `printf` argument list
//! - [`template`]: The runtime positional template syntax used by `printf`

mod args;
#[allow(clippy::module_inception)]
mod printer;
pub mod template;

pub use args::{partition, Arg};
pub use printer::Printer;
