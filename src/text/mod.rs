//! Types for reading and writing the Showdown paste format
//!
//! See the top level module documentation for an overview. Most callers only
//! need the [`Showdown`](crate::Showdown) trait; the items here expose the
//! individual steps: splitting a paste into blocks, classifying lines, and
//! writing records to any [`std::io::Write`].
mod line;
mod lines;
mod reader;
mod writer;

pub use self::line::{Line, NameLine, StatLineKind, TeamHeader};
pub use self::lines::{split_blocks, trim_lines};
pub use self::reader::{read_pokemon, read_stats, read_team};
pub use self::writer::PasteWriter;
