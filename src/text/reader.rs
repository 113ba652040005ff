use super::{split_blocks, Line, NameLine, StatLineKind, TeamHeader};
use crate::{Error, ErrorKind, Pokemon, Stat, StatSpread, Team};
use log::{debug, trace};

/// Builds a pokemon out of the trimmed, non-empty lines of a single block.
///
/// Lines that aren't recognized are skipped. When a field is given more than
/// once the last line wins.
pub fn read_pokemon(lines: &[&str]) -> Result<Pokemon, Error> {
    let (first, attributes) = match lines {
        [first, rest @ ..] if lines.len() >= 3 => (*first, rest),
        _ => return Err(Error::new(ErrorKind::TooFewLines { found: lines.len() })),
    };

    let name_line =
        NameLine::parse(first).ok_or_else(|| Error::new(ErrorKind::InvalidName(first.to_string())))?;

    let mut pokemon = Pokemon {
        nickname: name_line.nickname.to_string(),
        gender: name_line.gender.to_string(),
        item: name_line.item.to_string(),
        moves: Vec::with_capacity(Pokemon::MAX_MOVES),
        ..Pokemon::new(name_line.name)
    };

    for &line in attributes {
        match Line::classify(line) {
            Some(Line::Ability(x)) => pokemon.ability = x.to_string(),
            Some(Line::Level(x)) => pokemon.level = parse_number("level", x)?,
            Some(Line::Shiny(x)) => pokemon.shiny = x,
            Some(Line::Happiness(x)) => pokemon.happiness = parse_number("happiness", x)?,
            Some(Line::Nature(x)) => pokemon.nature = x.to_string(),
            Some(Line::Stats(StatLineKind::Effort, x)) => {
                pokemon.evs = read_stats(x, StatSpread::EV_DEFAULT)?
            }
            Some(Line::Stats(StatLineKind::Individual, x)) => {
                pokemon.ivs = read_stats(x, StatSpread::IV_DEFAULT)?
            }
            Some(Line::Move(x)) if !x.is_empty() => pokemon.moves.push(x.to_string()),
            Some(Line::Move(_)) => debug!("skipping empty move line of {}", pokemon.name),
            None => debug!("ignoring unrecognized line: {}", line),
        }
    }

    Ok(pokemon)
}

fn parse_number<T>(field: &'static str, value: &str) -> Result<T, Error>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    value.parse().map_err(|source| {
        Error::new(ErrorKind::InvalidNumber {
            field,
            value: value.to_string(),
            source,
        })
    })
}

/// Reads the body of an `EVs:` or `IVs:` line (eg: `252 Atk / 4 SpD`).
/// Stats that aren't listed keep their value from `defaults`.
///
/// ```
/// use teampaste::{text::read_stats, StatSpread};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let ivs = read_stats("0 Atk / 30 Spe", StatSpread::IV_DEFAULT)?;
/// assert_eq!((ivs.hp, ivs.atk, ivs.spe), (31, 0, 30));
/// assert!(read_stats("0 atk", StatSpread::IV_DEFAULT).is_err());
/// # Ok(())
/// # }
/// ```
pub fn read_stats(body: &str, defaults: StatSpread) -> Result<StatSpread, Error> {
    let mut spread = defaults;
    for part in body.split(" / ") {
        let invalid = || Error::new(ErrorKind::InvalidStat(part.to_string()));
        let (value, abbrev) = part.trim().split_once(' ').ok_or_else(invalid)?;
        let stat = Stat::from_abbreviation(abbrev.trim()).ok_or_else(invalid)?;
        spread[stat] = parse_number("stat value", value)?;
    }

    Ok(spread)
}

/// Parses a complete paste into a team. A failing block aborts the read and
/// is reported along with its position among the pokemon blocks.
pub fn read_team(paste: &str) -> Result<Team, Error> {
    let mut blocks = split_blocks(paste);
    let mut team = Team::default();

    let header = blocks
        .first()
        .and_then(|block| block.first())
        .and_then(|line| TeamHeader::parse(line));

    if let Some(header) = header {
        debug!(
            "found team header: format: {}, folder: {}, name: {}",
            header.format, header.folder, header.name
        );
        team.format = header.format.to_string();
        team.folder = header.folder.to_string();
        team.name = header.name.to_string();
        blocks.remove(0);
    }

    team.pokemon = blocks
        .iter()
        .enumerate()
        .map(|(index, block)| {
            trace!("reading pokemon block {} ({} lines)", index, block.len());
            read_pokemon(block).map_err(|e| Error::member(index, e))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(team)
}
