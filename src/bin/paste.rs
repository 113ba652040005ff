//! Converts team JSON read from stdin into a Showdown paste on stdout.
//!
//! The team is validated first and nothing is written when it is invalid.

use std::{
    error,
    io::{self, BufWriter, Read, Write},
};
use teampaste::{text::PasteWriter, Team};

fn main() -> Result<(), Box<dyn error::Error>> {
    let mut json = String::new();
    io::stdin().read_to_string(&mut json)?;
    let team = Team::from_json(&json)?;

    let stdout = io::stdout().lock();
    let mut writer = PasteWriter::new(BufWriter::new(stdout));
    writer.write_team(&team)?;
    writer.into_inner().flush()?;
    Ok(())
}
