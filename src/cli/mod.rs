//! Command-line front end for the `lzfsekit` binary.
//!
//! - [`args`]    — clap definition and resolution into a [`Settings`] value
//! - [`op_mode`] — operation modes and extension-based inference

pub mod args;
pub mod op_mode;

pub use args::{Args, Settings, Target};
pub use op_mode::{determine_op_mode, OpMode};
