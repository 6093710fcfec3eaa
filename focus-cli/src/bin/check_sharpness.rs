use focus_cli::{args::CheckSharpnessArgs, init_logger, parse_args};
use image_focus::SharpnessConfig;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let args: CheckSharpnessArgs = parse_args();
    init_logger();

    let verdict = SharpnessConfig::new()
        .with_threshold(args.threshold)
        .classify(&args.image_path);

    writeln!(io::stdout().lock(), "{verdict}")?;
    Ok(())
}
