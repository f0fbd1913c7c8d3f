//! Codec error type.

use core::fmt;

/// Why a compress or decompress call produced no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    /// The encoder rejected the input or produced no output.
    EncodeFailed,
    /// The input is not a complete, valid LZFSE stream.
    MalformedInput,
    /// Every scratch-buffer size tried by the probing path was rejected.
    ProbeExhausted {
        /// Number of buffer sizes that were tried.
        attempts: usize,
    },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::EncodeFailed => f.write_str("LZFSE encoding failed"),
            CodecError::MalformedInput => f.write_str("input is not a valid LZFSE stream"),
            CodecError::ProbeExhausted { attempts } => {
                write!(f, "no output after {attempts} scratch buffer attempt(s)")
            }
        }
    }
}

impl std::error::Error for CodecError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_mentions_attempt_count() {
        let msg = CodecError::ProbeExhausted { attempts: 4 }.to_string();
        assert!(msg.contains('4'), "got: {msg}");
    }

    #[test]
    fn usable_as_boxed_error() {
        let e: Box<dyn std::error::Error> = Box::new(CodecError::MalformedInput);
        assert_eq!(e.to_string(), "input is not a valid LZFSE stream");
    }
}
