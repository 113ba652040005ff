//! Converts a Showdown paste read from stdin into team JSON on stdout.
//!
//! Pass `--pretty` to pretty print the output.

use std::{
    env, error,
    io::{self, BufWriter, Read, Write},
};
use teampaste::{json::JsonOptions, Showdown, Team};

fn main() -> Result<(), Box<dyn error::Error>> {
    let pretty = env::args().skip(1).any(|x| x == "--pretty");

    let mut paste = String::new();
    io::stdin().read_to_string(&mut paste)?;
    let team = Team::from_showdown(&paste)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    let options = JsonOptions::new().with_prettyprint(pretty);
    team.to_json_writer(&mut writer, options)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
