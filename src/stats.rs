use std::fmt;
use std::ops::{Index, IndexMut};

/// One of the six battle stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Hp,
    Atk,
    Def,
    SpA,
    SpD,
    Spe,
}

impl Stat {
    /// All stats in the order they are listed in a paste
    pub const ALL: [Stat; 6] = [Stat::Hp, Stat::Atk, Stat::Def, Stat::SpA, Stat::SpD, Stat::Spe];

    /// The abbreviation used on `EVs:` and `IVs:` lines
    ///
    /// ```
    /// use teampaste::Stat;
    /// assert_eq!(Stat::Hp.abbreviation(), "HP");
    /// assert_eq!(Stat::SpA.abbreviation(), "SpA");
    /// ```
    pub fn abbreviation(self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Atk => "Atk",
            Stat::Def => "Def",
            Stat::SpA => "SpA",
            Stat::SpD => "SpD",
            Stat::Spe => "Spe",
        }
    }

    /// Looks up a stat by its exact, case sensitive, abbreviation
    pub fn from_abbreviation(abbrev: &str) -> Option<Stat> {
        Stat::ALL.iter().copied().find(|x| x.abbreviation() == abbrev)
    }
}

impl fmt::Display for Stat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.abbreviation())
    }
}

/// A value for each of the six stats. Used for both effort values and
/// individual values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct StatSpread {
    pub hp: i32,
    pub atk: i32,
    pub def: i32,
    pub spa: i32,
    pub spd: i32,
    pub spe: i32,
}

impl StatSpread {
    /// Effort values of a pokemon without any training
    pub const EV_DEFAULT: StatSpread = StatSpread::splat(0);

    /// Individual values of a pokemon when none are given
    pub const IV_DEFAULT: StatSpread = StatSpread::splat(31);

    /// Creates a spread where every stat has the same value
    pub const fn splat(value: i32) -> StatSpread {
        StatSpread {
            hp: value,
            atk: value,
            def: value,
            spa: value,
            spd: value,
            spe: value,
        }
    }

    /// Iterate through each stat and its value in paste order
    ///
    /// ```
    /// use teampaste::{Stat, StatSpread};
    /// let mut evs = StatSpread::EV_DEFAULT;
    /// evs[Stat::Spe] = 252;
    /// let trained: Vec<_> = evs.iter().filter(|(_, x)| *x != 0).collect();
    /// assert_eq!(trained, vec![(Stat::Spe, 252)]);
    /// ```
    pub fn iter(&self) -> impl Iterator<Item = (Stat, i32)> + '_ {
        Stat::ALL.iter().map(move |&stat| (stat, self[stat]))
    }
}

impl Index<Stat> for StatSpread {
    type Output = i32;

    fn index(&self, stat: Stat) -> &i32 {
        match stat {
            Stat::Hp => &self.hp,
            Stat::Atk => &self.atk,
            Stat::Def => &self.def,
            Stat::SpA => &self.spa,
            Stat::SpD => &self.spd,
            Stat::Spe => &self.spe,
        }
    }
}

impl IndexMut<Stat> for StatSpread {
    fn index_mut(&mut self, stat: Stat) -> &mut i32 {
        match stat {
            Stat::Hp => &mut self.hp,
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::SpA => &mut self.spa,
            Stat::SpD => &mut self.spd,
            Stat::Spe => &mut self.spe,
        }
    }
}
