/*!

A parser and writer for [Pokémon Showdown](https://pokemonshowdown.com/) team
pastes, the line oriented plaintext format produced by the Showdown
teambuilder's import / export screen.

## Features

- ✔ Bidirectional: read a paste into typed records and write them back out
- ✔ Forgiving: whitespace tolerant, unknown lines are skipped
- ✔ Strict on output: records are validated before a single byte is written
- ✔ Interchange: convert pastes to and from JSON (`json` feature, on by default)

## Quick Start

```rust
use teampaste::{Showdown, Team};

# fn main() -> Result<(), Box<dyn std::error::Error>> {
let paste = r#"=== [gen7] Folder 1/Example Team ===

Smogon (Koffing) (F) @ Eviolite
Level: 5
Ability: Levitate
Shiny: Yes
Happiness: 255
EVs: 36 HP / 236 Def / 236 SpD
IVs: 31 HP / 30 Atk / 31 SpA / 30 SpD / 31 Spe
Bold Nature
- Will-O-Wisp
- Pain Split
- Sludge Bomb
- Fire Blast
"#;

let team = Team::from_showdown(paste)?;
assert_eq!(team.format, "gen7");
assert_eq!(team.folder, "Folder 1");
assert_eq!(team.name, "Example Team");

let koffing = &team.pokemon[0];
assert_eq!(koffing.nickname, "Smogon");
assert_eq!(koffing.name, "Koffing");
assert_eq!(koffing.ivs.atk, 30);
assert!(koffing.shiny);

team.validate()?;
let out = team.to_showdown()?;
assert!(out.starts_with("=== [gen7] Folder 1/Example Team ===\n\nSmogon (Koffing) (F) @ Eviolite\n"));
# Ok(())
# }
```

## Caveats

Parsing never validates. A paste with a happiness of 999 or with nine moves
will parse; call [`Showdown::validate`] when well formed data is required.
Writing always validates.

Writing is not byte for byte reversible. Values at their default (an effort
value of 0, an individual value of 31) are left out, and the `Happiness` line
is only written when a level is set.

## One Level Lower

The [`text`] module exposes the individual steps when more control is
needed, such as writing straight to a file or classifying lines one at a time.

```rust
use teampaste::text::{split_blocks, Line};

let blocks = split_blocks("Koffing\nAbility: Levitate\n\n\nWeezing\n- Haze\n");
assert_eq!(blocks.len(), 2);
assert_eq!(Line::classify(blocks[1][1]), Some(Line::Move("Haze")));
```

*/

mod errors;
#[cfg(feature = "json")]
pub mod json;
mod pokemon;
mod showdown;
mod stats;
mod team;
pub mod text;

pub use self::errors::*;
pub use self::pokemon::Pokemon;
pub use self::showdown::Showdown;
pub use self::stats::{Stat, StatSpread};
pub use self::team::Team;
