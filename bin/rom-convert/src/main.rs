use anyhow::{anyhow, Context, Result};
use clap::Parser;
use fs_err as fs;
use log::{info, warn};
use reality_ultra::rom::{self, Rom, RomError};
use reality_ultra::RomFormat;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Convert between n64 rom types [n64, z64, v64]
///
/// The output format is taken from the extension of the output file.
#[derive(Debug, Parser)]
#[command(name = "rom-convert", override_usage = "rom-convert -i <FILE> -o <FILE>")]
struct Args {
    /// The file that needs to be converted
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    /// The destination file
    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

/// A missing input counts as empty.
fn input_len(path: &Path) -> Result<u64> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.len()),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(0),
        Err(e) => Err(e.into()),
    }
}

/// Names the input the way a user would look for it.
fn input_error(path: &Path, e: RomError) -> anyhow::Error {
    match e {
        RomError::EmptyOrMissing => anyhow!("{} {}", path.display(), e),
        e => anyhow::Error::new(e).context(format!("can't convert {}", path.display())),
    }
}

fn run(args: &Args) -> Result<()> {
    let input = args.input.display();

    // Checked before reading so an oversized file is never loaded.
    rom::check_size(input_len(&args.input)?).map_err(|e| input_error(&args.input, e))?;

    let rom = Rom::new(fs::read(&args.input)?).map_err(|e| input_error(&args.input, e))?;
    let source = rom.format();
    let target = RomFormat::from_path(&args.output);

    if target.is_none() {
        warn!(
            "{} has no n64, z64 or v64 extension, copying {} unchanged",
            args.output.display(),
            input
        );
    }

    let data = rom
        .convert(target)
        .with_context(|| format!("can't convert {} to {}", input, args.output.display()))?;

    fs::write(&args.output, &data)?;

    info!(
        "{} ({}) -> {} ({}), {:#x} bytes",
        input,
        source,
        args.output.display(),
        target.unwrap_or(source),
        data.len()
    );

    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
