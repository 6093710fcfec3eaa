//! Shared plumbing for the `check_sharpness`, `sharpen_image` and
//! `deps_selftest` binaries: logger setup and argument parsing.

pub mod args;

use clap::{Parser, error::ErrorKind};

/// Initializes the logger.
///
/// Format: `[HH:MM:SS LEVEL file line] message`. Defaults to `info` so the
/// diagnostics show up; override with `RUST_LOG`.
pub fn init_logger() {
    use std::io::Write;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let style = buf.default_level_style(record.level());
            let ts = chrono::Local::now().format("%H:%M:%S");

            writeln!(
                buf,
                "[{} {style}{}{style:#} {} {}] {}",
                ts,
                record.level(),
                record
                    .file()
                    .unwrap_or("None")
                    .split('/')
                    .next_back()
                    .unwrap_or("None"),
                record.line().unwrap_or(0),
                record.args()
            )
        })
        .init();
}

/// Parses the process arguments. Usage errors print the usage and exit with
/// status 1; `--help` and `--version` exit normally.
pub fn parse_args<T: Parser>() -> T {
    match T::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                std::process::exit(1);
            }
        },
    }
}
