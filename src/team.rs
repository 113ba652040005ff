use crate::{text::read_team, text::PasteWriter, Error, Pokemon, Showdown, ValidationError};
use std::str::FromStr;

/// A list of pokemon along with the name, format, and folder information of
/// the team's header line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Team {
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub name: String,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub format: String,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "String::is_empty"))]
    pub folder: String,

    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Vec::is_empty"))]
    pub pokemon: Vec<Pokemon>,
}

impl Showdown for Team {
    /// Parses a full paste, with or without a `=== [format] folder/name ===`
    /// header.
    ///
    /// ```
    /// use teampaste::{Showdown, Team};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let paste = "=== [gen8vgc2021] Untitled 10 ===
    ///
    /// Charizard-Gmax @ Wacan Berry
    /// Ability: Solar Power
    /// Level: 50
    /// EVs: 4 HP / 252 SpA / 252 Spe
    /// Timid Nature
    /// IVs: 0 Atk
    /// - Blast Burn
    /// - Hurricane
    /// - Ancient Power
    /// - Protect
    /// ";
    ///
    /// let team = Team::from_showdown(paste)?;
    /// assert_eq!(team.format, "gen8vgc2021");
    /// assert_eq!(team.folder, "");
    /// assert_eq!(team.name, "Untitled 10");
    /// assert_eq!(team.pokemon[0].evs.spa, 252);
    /// # Ok(())
    /// # }
    /// ```
    fn from_showdown(paste: &str) -> Result<Self, Error> {
        read_team(paste)
    }

    fn to_showdown(&self) -> Result<String, Error> {
        let mut writer = PasteWriter::new(Vec::with_capacity(300 * self.pokemon.len() + 64));
        writer.write_team(self)?;
        Ok(writer.into_string())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.pokemon.is_empty() {
            return Err(ValidationError::NoMembers);
        }

        for (index, pokemon) in self.pokemon.iter().enumerate() {
            pokemon
                .validate()
                .map_err(|error| ValidationError::Member {
                    index,
                    error: Box::new(error),
                })?;
        }

        Ok(())
    }
}

impl FromStr for Team {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Team::from_showdown(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn koffing() -> Pokemon {
        Pokemon {
            name: String::from("Koffing"),
            ability: String::from("Neutralizing Gas"),
            nature: String::from("Bold"),
            moves: vec![String::from("Haze")],
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_empty() {
        let team = Team {
            name: String::from("Test"),
            format: String::from("gen8"),
            folder: String::from("Folder 0"),
            pokemon: Vec::new(),
        };
        let err = team.validate().unwrap_err();
        assert_eq!(err, ValidationError::NoMembers);
        assert_eq!(err.to_string(), "empty team members");
    }

    #[test]
    fn test_validate_reports_first_invalid_member() {
        let mut bad = koffing();
        bad.moves.clear();
        let mut worse = koffing();
        worse.name.clear();

        let team = Team {
            pokemon: vec![koffing(), bad, worse],
            ..Default::default()
        };

        assert_eq!(
            team.validate(),
            Err(ValidationError::Member {
                index: 1,
                error: Box::new(ValidationError::MoveCount(0))
            })
        );
    }

    #[test]
    fn test_validate_ok() {
        let team = Team {
            pokemon: vec![koffing(), koffing()],
            ..Default::default()
        };
        assert_eq!(team.validate(), Ok(()));
    }
}
