use focus_cli::{args::SelfTestArgs, init_logger, parse_args};
use image_focus::selftest;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let _: SelfTestArgs = parse_args();
    init_logger();

    let mut out = io::stdout().lock();
    writeln!(out, "Testing image-focus runtime...")?;

    let report = selftest::run_all();
    for check in &report.checks {
        let status = if check.passed { "passed" } else { "failed" };
        writeln!(out, "{} check {status}. {}", check.name, check.detail)?;
    }

    if report.passed() {
        writeln!(out, "✓ All checks passed!")?;
        Ok(())
    } else {
        writeln!(out, "✗ Some checks failed!")?;
        out.flush()?;
        std::process::exit(1);
    }
}
