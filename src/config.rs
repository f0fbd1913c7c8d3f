// config.rs — Runtime and compile-time configuration.
//
// Environment overrides follow one pattern: a thin `init_*` wrapper reads the
// variable, and a `*_from(Option<&str>)` core does the parsing so it can be
// unit-tested without touching the process environment.

use core::fmt;
use core::str::FromStr;

// ── Probing path constants ───────────────────────────────────────────────────

/// First decompression scratch buffer is `input_len * DECODE_SCRATCH_FACTOR`.
pub const DECODE_SCRATCH_FACTOR: usize = 8;

/// Number of decompression attempts; attempt `i` (1-based) uses
/// `input_len * DECODE_SCRATCH_FACTOR * i` bytes.
pub const DECODE_PROBE_ATTEMPTS: usize = 4;

// ── CLI constants ────────────────────────────────────────────────────────────

/// File extension appended on compression and stripped on decompression.
pub const LZFSE_EXTENSION: &str = ".lzfse";

/// Environment variable selecting the codec strategy.
pub const ENV_STRATEGY: &str = "LZFSEKIT_PATH";

/// Environment variable selecting the default worker count (0 = auto).
pub const ENV_NBWORKERS: &str = "LZFSEKIT_NBWORKERS";

/// Worker count used when `LZFSEKIT_NBWORKERS` is unset or invalid.
pub const NB_WORKERS_DEFAULT: usize = 0;

/// Upper bound on worker threads selectable at runtime.
pub const NB_WORKERS_MAX: usize = 200;

// ── Strategy ─────────────────────────────────────────────────────────────────

/// How the codec is invoked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// One-shot call into a codec that sizes its own output and reports
    /// errors.
    #[default]
    Direct,
    /// Caller-sized scratch buffers passed to the backend's buffer primitive,
    /// retried at growing multiples on decompression.
    Probing,
}

impl Strategy {
    pub fn as_str(self) -> &'static str {
        match self {
            Strategy::Direct => "direct",
            Strategy::Probing => "probing",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "direct" => Ok(Strategy::Direct),
            "probing" | "legacy" => Ok(Strategy::Probing),
            other => Err(format!("unknown strategy '{other}' (expected direct or probing)")),
        }
    }
}

/// Read the strategy from the `LZFSEKIT_PATH` environment variable.
pub fn init_strategy() -> Strategy {
    strategy_from(std::env::var(ENV_STRATEGY).ok().as_deref())
}

/// Testable core of [`init_strategy`].
///
/// Unset or unrecognised values fall back to [`Strategy::Direct`].
pub fn strategy_from(env_val: Option<&str>) -> Strategy {
    env_val.and_then(|s| s.parse().ok()).unwrap_or_default()
}

/// Read the default worker count from `LZFSEKIT_NBWORKERS`.
pub fn init_nb_workers() -> usize {
    nb_workers_from(std::env::var(ENV_NBWORKERS).ok().as_deref())
}

/// Testable core of [`init_nb_workers`].
///
/// Accepts a leading run of decimal digits; anything else yields
/// [`NB_WORKERS_DEFAULT`]. Values are clamped to [`NB_WORKERS_MAX`].
pub fn nb_workers_from(env_val: Option<&str>) -> usize {
    let Some(s) = env_val else {
        return NB_WORKERS_DEFAULT;
    };
    let digits: &str = {
        let end = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
        &s[..end]
    };
    match digits.parse::<usize>() {
        Ok(n) => n.min(NB_WORKERS_MAX),
        Err(_) => NB_WORKERS_DEFAULT,
    }
}
