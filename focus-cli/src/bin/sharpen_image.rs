use focus_cli::{args::SharpenImageArgs, init_logger, parse_args};
use image_focus::SharpenConfig;
use std::io::{self, Write};

fn main() -> anyhow::Result<()> {
    let args: SharpenImageArgs = parse_args();
    init_logger();

    // Failures are logged by the library; the exit status stays 0 either way.
    if SharpenConfig::new().sharpen_image(&args.image_path) {
        writeln!(
            io::stdout().lock(),
            "Sharpened image saved: {}",
            args.image_path.display()
        )?;
    }

    Ok(())
}
