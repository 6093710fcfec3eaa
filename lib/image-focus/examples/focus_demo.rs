/// Focus demo
/// Scores data/test.png, sharpens a copy in tmp/ and scores it again

use image_focus::{SharpnessConfig, sharpen_image};
use std::path::Path;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let output_dir = Path::new("tmp");
    std::fs::create_dir_all(output_dir)?;

    let img_path = Path::new("data/test.png");
    let copy_path = output_dir.join("sharpen_effect.png");
    std::fs::copy(img_path, &copy_path)?;

    let config = SharpnessConfig::new();
    let before = config.measure(&copy_path)?;

    if !sharpen_image(&copy_path) {
        anyhow::bail!("sharpening {} failed", copy_path.display());
    }

    let after = config.measure(&copy_path)?;

    println!("✓ Sharpen effect applied successfully!");
    println!("  Before:   {:.2} ({})", before.score, before.verdict);
    println!("  After:    {:.2} ({})", after.score, after.verdict);
    println!("  Effect:   {}", copy_path.display());

    Ok(())
}
