//! Binary entry point for the `lzfsekit` command-line tool.
//!
//! 1. [`Args::parse_env`] reads the command line.
//! 2. [`Args::resolve`] applies environment defaults and expands inputs.
//! 3. [`run`] dispatches each input and returns the process exit code.

use std::process::ExitCode;

use lzfsekit::cli::{Args, OpMode, Settings, Target};
use lzfsekit::display::set_display_level;
use lzfsekit::file::{output_name, process_file, process_files, FileStats, STDIN_MARK, STDOUT_MARK};
use lzfsekit::{displaylevel, Compressor};

fn report(src: &str, dst: Option<&str>, mode: OpMode, stats: &FileStats) {
    match mode {
        OpMode::Test => displaylevel!(2, "{:<30} : OK ({} bytes)\n", src, stats.bytes_out),
        OpMode::Compress => displaylevel!(
            2,
            "{:<30} : {} => {} bytes, {:.2}%{}\n",
            src,
            stats.bytes_in,
            stats.bytes_out,
            stats.ratio_percent(),
            dst.map(|d| format!(" ==> {d}")).unwrap_or_default()
        ),
        _ => displaylevel!(
            2,
            "{:<30} : decoded {} bytes{}\n",
            src,
            stats.bytes_out,
            dst.map(|d| format!(" ==> {d}")).unwrap_or_default()
        ),
    }
}

/// Execute the resolved settings. Returns 0 when every input succeeded.
fn run(settings: Settings) -> u8 {
    let compressor = Compressor::new(settings.strategy);
    displaylevel!(
        3,
        "*** lzfsekit v{} ({} strategy, {} backend) ***\n",
        lzfsekit::VERSION_STRING,
        compressor.strategy(),
        compressor.backend().name()
    );

    match settings.target {
        Target::Single { input, output } => {
            // stdin has no name to infer from; compress by default.
            let mode = match settings.mode {
                OpMode::Auto if input == STDIN_MARK => OpMode::Compress,
                m => m.resolve(&input),
            };
            let op = mode.file_op();
            let dst = match (mode, output) {
                (OpMode::Test, _) => None,
                (_, Some(out)) => Some(out),
                (_, None) => match output_name(op, &input) {
                    Some(name) => Some(name),
                    None => {
                        displaylevel!(
                            1,
                            "lzfsekit: {}: unknown suffix, cannot derive output name\n",
                            input
                        );
                        return 1;
                    }
                },
            };
            match process_file(op, &compressor, &input, dst.as_deref(), &settings.opts) {
                Ok(stats) => {
                    let shown = dst.as_deref().filter(|d| *d != STDOUT_MARK);
                    report(&input, shown, mode, &stats);
                    0
                }
                Err(e) => {
                    displaylevel!(1, "lzfsekit: {:#}\n", e);
                    1
                }
            }
        }
        Target::Multiple(paths) => {
            if paths.is_empty() {
                displaylevel!(1, "lzfsekit: no input files found\n");
                return 1;
            }
            // Auto mode splits the inputs by extension and runs each group
            // with its own operation.
            let groups: Vec<(OpMode, Vec<_>)> = match settings.mode {
                OpMode::Auto => {
                    let (packed, plain): (Vec<_>, Vec<_>) = paths.into_iter().partition(|p| {
                        OpMode::Auto.resolve(&p.to_string_lossy()) == OpMode::Decompress
                    });
                    vec![(OpMode::Compress, plain), (OpMode::Decompress, packed)]
                }
                mode => vec![(mode, paths)],
            };

            let mut failures = 0usize;
            for (mode, srcs) in groups.into_iter().filter(|(_, s)| !s.is_empty()) {
                let op = mode.file_op();
                let reports =
                    process_files(op, &compressor, &srcs, &settings.opts, settings.nb_workers);
                for r in reports {
                    let src = r.src.to_string_lossy();
                    match r.result {
                        Ok(stats) => report(&src, output_name(op, &src).as_deref(), mode, &stats),
                        Err(e) => {
                            failures += 1;
                            displaylevel!(1, "lzfsekit: {:#}\n", e);
                        }
                    }
                }
            }
            if failures > 0 {
                displaylevel!(2, "{} file(s) failed\n", failures);
                1
            } else {
                0
            }
        }
    }
}

fn main() -> ExitCode {
    let settings = match Args::parse_env().resolve() {
        Ok(s) => s,
        Err(e) => {
            lzfsekit::display!("lzfsekit: bad usage: {e:#}\n");
            return ExitCode::from(1);
        }
    };
    set_display_level(settings.display_level);
    ExitCode::from(run(settings))
}
