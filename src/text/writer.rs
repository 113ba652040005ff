use crate::{Error, Pokemon, Showdown, StatSpread, Team};
use std::io::Write;

/// Write pokemon and teams in the Showdown paste format.
///
/// Every record is validated before any of it is written, so an invalid
/// record never leaves partial output behind.
///
/// ```
/// use teampaste::{text::PasteWriter, Pokemon};
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let koffing = Pokemon {
///     name: String::from("Koffing"),
///     item: String::from("Eviolite"),
///     ability: String::from("Levitate"),
///     level: 5,
///     happiness: 255,
///     nature: String::from("Bold"),
///     ivs: teampaste::StatSpread::IV_DEFAULT,
///     moves: vec![String::from("Pain Split")],
///     ..Default::default()
/// };
///
/// let mut out: Vec<u8> = Vec::new();
/// let mut writer = PasteWriter::new(&mut out);
/// writer.write_pokemon(&koffing)?;
/// assert_eq!(
///     std::str::from_utf8(&out).unwrap(),
///     "Koffing @ Eviolite\nLevel: 5\nAbility: Levitate\nHappiness: 255\nBold Nature\n- Pain Split\n"
/// );
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct PasteWriter<W> {
    writer: W,
    scratch: Vec<String>,
}

impl<W> PasteWriter<W>
where
    W: Write,
{
    /// Creates a paste writer that writes to the given sink
    pub fn new(writer: W) -> PasteWriter<W> {
        PasteWriter {
            writer,
            scratch: Vec::with_capacity(6),
        }
    }

    /// Get inner writer, keeping ownership
    pub fn inner(&mut self) -> &mut W {
        &mut self.writer
    }

    /// Consumes this Writer, returning the underlying writer
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write out a team: the header line (when the team is named) followed by
    /// each pokemon.
    ///
    /// Every member is validated before anything is written.
    ///
    /// ```
    /// use teampaste::{text::PasteWriter, Pokemon, Team};
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let team = Team {
    ///     name: String::from("Test"),
    ///     format: String::from("gen8"),
    ///     folder: String::from("Folder 0"),
    ///     pokemon: vec![Pokemon {
    ///         name: String::from("Koffing"),
    ///         ability: String::from("Neutralizing Gas"),
    ///         nature: String::from("Bold"),
    ///         ivs: teampaste::StatSpread { hp: 31, def: 31, spd: 31, ..Default::default() },
    ///         moves: vec![String::from("Haze")],
    ///         ..Default::default()
    ///     }],
    /// };
    ///
    /// let mut out: Vec<u8> = Vec::new();
    /// PasteWriter::new(&mut out).write_team(&team)?;
    /// assert_eq!(
    ///     std::str::from_utf8(&out).unwrap(),
    ///     "=== [gen8] Folder 0/Test ===\n\nKoffing\nAbility: Neutralizing Gas\nBold Nature\nIVs: 0 Atk / 0 SpA / 0 Spe\n- Haze\n"
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub fn write_team(&mut self, team: &Team) -> Result<(), Error> {
        for (index, pokemon) in team.pokemon.iter().enumerate() {
            pokemon
                .validate()
                .map_err(|e| Error::member(index, e.into()))?;
        }

        if !team.name.is_empty() {
            self.write_team_header(&team.format, &team.folder, &team.name)?;
        }

        for pokemon in &team.pokemon {
            self.write_valid_pokemon(pokemon)?;
        }

        Ok(())
    }

    /// Write a `=== [format] folder/name ===` line followed by a blank line.
    /// The folder segment is left out when empty.
    pub fn write_team_header(&mut self, format: &str, folder: &str, name: &str) -> Result<(), Error> {
        if folder.is_empty() {
            writeln!(self.writer, "=== [{}] {} ===\n", format, name)?;
        } else {
            writeln!(self.writer, "=== [{}] {}/{} ===\n", format, folder, name)?;
        }
        Ok(())
    }

    /// Validate and write a single pokemon block. The block ends with a line
    /// terminator.
    pub fn write_pokemon(&mut self, pokemon: &Pokemon) -> Result<(), Error> {
        pokemon.validate()?;
        self.write_valid_pokemon(pokemon)
    }

    fn write_valid_pokemon(&mut self, pokemon: &Pokemon) -> Result<(), Error> {
        if pokemon.nickname.is_empty() {
            self.writer.write_all(pokemon.name.as_bytes())?;
        } else {
            write!(self.writer, "{} ({})", pokemon.nickname, pokemon.name)?;
        }

        if !pokemon.gender.is_empty() {
            write!(self.writer, " ({})", pokemon.gender.to_uppercase())?;
        }

        if !pokemon.item.is_empty() {
            write!(self.writer, " @ {}", pokemon.item)?;
        }
        self.writer.write_all(b"\n")?;

        if pokemon.level > 0 {
            writeln!(self.writer, "Level: {}", pokemon.level)?;
        }

        writeln!(self.writer, "Ability: {}", pokemon.ability)?;

        if pokemon.shiny {
            self.writer.write_all(b"Shiny: Yes\n")?;
        }

        // happiness is only surfaced alongside a level
        if pokemon.level > 0 {
            writeln!(self.writer, "Happiness: {}", pokemon.happiness)?;
        }

        self.write_stats("EVs", &pokemon.evs, &StatSpread::EV_DEFAULT)?;
        writeln!(self.writer, "{} Nature", pokemon.nature)?;
        self.write_stats("IVs", &pokemon.ivs, &StatSpread::IV_DEFAULT)?;

        for mv in pokemon.moves.iter().filter(|x| !x.is_empty()) {
            writeln!(self.writer, "- {}", mv)?;
        }

        Ok(())
    }

    /// Writes the stats that differ from their default, or nothing at all
    /// when none do
    fn write_stats(
        &mut self,
        label: &str,
        spread: &StatSpread,
        defaults: &StatSpread,
    ) -> Result<(), Error> {
        self.scratch.clear();
        self.scratch.extend(
            spread
                .iter()
                .filter(|&(stat, x)| x != defaults[stat])
                .map(|(stat, x)| format!("{} {}", x, stat)),
        );

        if !self.scratch.is_empty() {
            writeln!(self.writer, "{}: {}", label, self.scratch.join(" / "))?;
        }

        Ok(())
    }
}

impl PasteWriter<Vec<u8>> {
    /// Consumes an in-memory writer and returns what was written
    pub(crate) fn into_string(self) -> String {
        // only utf-8 strings are ever written
        String::from_utf8(self.writer)
            .unwrap_or_else(|e| String::from_utf8_lossy(e.as_bytes()).into_owned())
    }
}
