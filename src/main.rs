use anyhow::Result;
use clap::Parser;
use placeholder_gen::{generate_placeholders, Args};

fn main() -> Result<()> {
    let args = Args::parse();

    generate_placeholders(&args)?;
    Ok(())
}
