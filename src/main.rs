use std::io::{self, Write};

use color_eyre::{eyre::WrapErr, Result};
use reverse_xor::reverse_xor;

const KNOWN_HEX: &str = "1BE3D13267E6993C1194F434281DDA43";
const TARGET_HEX: &str = "D4B40305EE2B6F1833D77439129ACADE";

fn run(known: &str, target: &str, out: &mut impl Write) -> Result<()> {
    let unknown =
        reverse_xor(known, target).wrap_err("failed to recover the unknown hex string")?;
    writeln!(out, "The unknown hex string is: {unknown}")?;
    Ok(())
}

fn main() -> Result<()> {
    color_eyre::install()?;
    run(KNOWN_HEX, TARGET_HEX, &mut io::stdout().lock())
}
