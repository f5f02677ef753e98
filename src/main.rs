use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use framesync::{
    DEFAULT_TOLERANCE, MatchConfig, associate_with_config, read_record_file, write_associations,
};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// First record list (e.g. rgb.txt); one match is sought per entry of this file
    a_file: PathBuf,

    /// Second record list (e.g. depth.txt)
    b_file: PathBuf,

    /// Output file for matched pairs
    out_file: PathBuf,

    /// Maximum allowed time difference between matched records, in seconds
    #[arg(short, long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) => {
            // Wrong or missing arguments are a usage notice, not a failure.
            err.print()?;
            return Ok(());
        }
    };

    for path in [&args.a_file, &args.b_file] {
        if !path.exists() {
            println!("input file not found: {}", path.display());
            return Ok(());
        }
    }

    let config = MatchConfig::new(args.tolerance).context("invalid --tolerance")?;

    let seq_a = read_record_file(&args.a_file)?;
    let seq_b = read_record_file(&args.b_file)?;

    let matches = associate_with_config(&seq_a, &seq_b, &config);
    write_associations(&args.out_file, &matches)?;

    println!(
        "wrote {} associations to {}",
        matches.len(),
        args.out_file.display()
    );
    Ok(())
}
