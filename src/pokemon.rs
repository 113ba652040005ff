use crate::{
    text::{read_pokemon, trim_lines, PasteWriter},
    Error, Showdown, Stat, StatSpread, ValidationError,
};
use std::str::FromStr;

/// Everything that can be set on a single pokemon in the teambuilder.
///
/// Optional text fields are empty strings when unset. A `level` of zero means
/// no level was given.
///
/// `Default` zeroes every field, which is what missing JSON keys decode to.
/// Use [`Pokemon::new`] for the values a paste assumes when a line is absent:
/// a happiness of 255 and IVs of 31.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Pokemon {
    pub name: String,
    pub nickname: String,
    pub gender: String,
    pub item: String,
    pub ability: String,
    pub level: u16,
    pub shiny: bool,
    pub happiness: i32,
    pub nature: String,
    pub evs: StatSpread,
    pub ivs: StatSpread,
    pub moves: Vec<String>,
}

impl Pokemon {
    /// The largest effort value a single stat may hold
    pub const MAX_EV: i32 = 252;

    /// The largest individual value a single stat may hold
    pub const MAX_IV: i32 = 31;

    /// The most moves a pokemon can know
    pub const MAX_MOVES: usize = 4;

    /// A pokemon with the values a paste implies for omitted lines.
    ///
    /// ```
    /// use teampaste::{Pokemon, StatSpread};
    ///
    /// let p = Pokemon::new("Koffing");
    /// assert_eq!(p.happiness, 255);
    /// assert_eq!(p.ivs, StatSpread::IV_DEFAULT);
    /// assert_eq!(Pokemon::default().happiness, 0);
    /// ```
    pub fn new(name: impl Into<String>) -> Pokemon {
        Pokemon {
            name: name.into(),
            happiness: 255,
            ivs: StatSpread::IV_DEFAULT,
            ..Default::default()
        }
    }
}

impl Showdown for Pokemon {
    /// Parses a single pokemon block.
    ///
    /// ```
    /// use teampaste::{Pokemon, Showdown};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let paste = "Smogon (Koffing) (F) @ Eviolite
    /// Ability: Levitate
    /// IVs: 0 Atk
    /// Bold Nature
    /// - Pain Split";
    ///
    /// let koffing = Pokemon::from_showdown(paste)?;
    /// assert_eq!(koffing.nickname, "Smogon");
    /// assert_eq!(koffing.ivs.atk, 0);
    /// assert_eq!(koffing.ivs.hp, 31);
    /// assert_eq!(koffing.happiness, 255);
    /// # Ok(())
    /// # }
    /// ```
    fn from_showdown(paste: &str) -> Result<Self, Error> {
        read_pokemon(&trim_lines(paste))
    }

    /// ```
    /// use teampaste::{Pokemon, Showdown};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let koffing = Pokemon {
    ///     ability: String::from("Neutralizing Gas"),
    ///     nature: String::from("Bold"),
    ///     moves: vec![String::from("Haze")],
    ///     ..Pokemon::new("Koffing")
    /// };
    ///
    /// assert_eq!(
    ///     koffing.to_showdown()?,
    ///     "Koffing\nAbility: Neutralizing Gas\nBold Nature\n- Haze\n"
    /// );
    /// # Ok(())
    /// # }
    /// ```
    fn to_showdown(&self) -> Result<String, Error> {
        let mut writer = PasteWriter::new(Vec::with_capacity(300));
        writer.write_pokemon(self)?;
        Ok(writer.into_string())
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::MissingName);
        }

        if self.ability.is_empty() {
            return Err(ValidationError::MissingAbility);
        }

        if self.nature.is_empty() {
            return Err(ValidationError::MissingNature);
        }

        if !(0..=255).contains(&self.happiness) {
            return Err(ValidationError::Happiness(self.happiness));
        }

        if let Some((stat, value)) = out_of_range(&self.evs, Pokemon::MAX_EV) {
            return Err(ValidationError::EffortValue { stat, value });
        }

        if let Some((stat, value)) = out_of_range(&self.ivs, Pokemon::MAX_IV) {
            return Err(ValidationError::IndividualValue { stat, value });
        }

        if self.moves.is_empty() || self.moves.len() > Pokemon::MAX_MOVES {
            return Err(ValidationError::MoveCount(self.moves.len()));
        }

        match self.gender.as_str() {
            "" | "F" | "M" => Ok(()),
            x => Err(ValidationError::Gender(x.to_string())),
        }
    }
}

fn out_of_range(spread: &StatSpread, max: i32) -> Option<(Stat, i32)> {
    spread.iter().find(|&(_, x)| x < 0 || x > max)
}

impl FromStr for Pokemon {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pokemon::from_showdown(s)
    }
}
