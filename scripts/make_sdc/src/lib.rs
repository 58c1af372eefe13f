use std::io::{BufWriter, Write};

use clap::Parser;
use sdcgen::error::{with_err_context, ErrorContext};
use sdcgen::validation::ports::ensure_valid;
use sdcgen::{ConstraintSet, Variant};

/// Writes the SDC port constraints for `variant` to `out`.
pub fn run(variant: Variant, out: impl Write) -> sdcgen::error::Result<()> {
    let set = ConstraintSet::for_variant(variant);
    ensure_valid(set.ports())?;

    let mut out = BufWriter::new(out);
    with_err_context(
        set.write(&mut out).and_then(|_| Ok(out.flush()?)),
        || ErrorContext::WriteVariant(variant.name().into()),
    )
}

/// Emits per-bit SDC port constraints to standard output.
///
/// Takes no options; redirect the output to a `.sdc` file.
#[derive(Parser)]
#[command(author, version, about)]
pub struct Args {}

/// Entry point shared by the per-variant binaries.
pub fn main(variant: Variant) {
    let _args = Args::parse();
    let stdout = std::io::stdout();
    if let Err(err) = run(variant, stdout.lock()) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}
