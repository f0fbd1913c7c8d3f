//! Operation mode selection.

use crate::config::LZFSE_EXTENSION;
use crate::file::FileOp;

/// What the CLI should do with its inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpMode {
    /// Decide per input: decompress `.lzfse` files, compress everything else.
    Auto,
    Compress,
    Decompress,
    /// Verify that inputs decode, writing nothing.
    Test,
}

/// Infer the mode from `filename`'s extension.
pub fn determine_op_mode(filename: &str) -> OpMode {
    if filename.ends_with(LZFSE_EXTENSION) {
        OpMode::Decompress
    } else {
        OpMode::Compress
    }
}

impl OpMode {
    /// Settle [`OpMode::Auto`] against a concrete input name.
    pub fn resolve(self, filename: &str) -> OpMode {
        match self {
            OpMode::Auto => determine_op_mode(filename),
            other => other,
        }
    }

    /// The file operation for a resolved mode.
    ///
    /// [`OpMode::Auto`] maps to compression; callers resolve it first.
    pub fn file_op(self) -> FileOp {
        match self {
            OpMode::Auto | OpMode::Compress => FileOp::Compress,
            OpMode::Decompress => FileOp::Decompress,
            OpMode::Test => FileOp::Test,
        }
    }
}
