use anyhow::{Context, anyhow};
use clap::Parser;
use env_logger::Env;
use rom_image::{RomImage, boot};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(version, about = "Write a 32KB 6502 boot ROM image")]
struct Args {
    /// Output file path
    #[arg(short = 'o', long, default_value = "rom.bin")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let image = boot::build_boot_rom().context("Failed to build boot ROM")?;
    image.write_to(&args.output)?;
    verify(&image, &args.output)?;

    log::info!("{} byte(s) written to '{}'", image.len(), args.output.display());
    if let Some(reset_vector) = image.reset_vector() {
        log::info!("RESET vector points to ${reset_vector:04X}");
    }

    Ok(())
}

fn verify(image: &RomImage, path: &Path) -> anyhow::Result<()> {
    let written = rom_image::read_image(path, image.len())
        .with_context(|| format!("Failed to verify '{}'", path.display()))?;

    if let Some(offset) = written.iter().zip(image.as_bytes()).position(|(a, b)| a != b) {
        return Err(anyhow!(
            "'{}' does not match the built image at offset ${offset:04X}",
            path.display()
        ));
    }

    Ok(())
}
