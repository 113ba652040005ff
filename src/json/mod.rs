//! Conversion between pokemon, teams, and JSON
//!
//! ```
//! use teampaste::{json::JsonOptions, Showdown, Team};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let team = Team::from_showdown("Koffing\nAbility: Levitate\nBold Nature\n- Haze")?;
//! let json = team.to_json_with_options(JsonOptions::new().with_prettyprint(false))?;
//! assert!(json.starts_with(r#"{"pokemon":[{"name":"Koffing","nickname":"","#));
//!
//! // These are the default options
//! assert_eq!(json, team.to_json()?);
//!
//! let back = Team::from_json(&json)?;
//! assert_eq!(back, team);
//! # Ok(())
//! # }
//! ```
//!
//! Decoding is lenient: a missing key takes the zero value of its type and no
//! validation is performed.

use crate::{Error, Pokemon, Team};
use serde::{de::DeserializeOwned, Serialize};

/// Customizes the JSON output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct JsonOptions {
    /// Controls if the JSON should be pretty printed
    pretty: bool,
}

impl JsonOptions {
    /// Creates the structure with default options
    pub fn new() -> Self {
        JsonOptions::default()
    }

    /// Sets if the JSON should be pretty printed or minified
    pub fn with_prettyprint(mut self, pretty: bool) -> JsonOptions {
        self.pretty = pretty;
        self
    }
}

fn writer_json<W, S>(writer: W, options: JsonOptions, ser: &S) -> Result<(), Error>
where
    W: std::io::Write,
    S: Serialize,
{
    let result = if options.pretty {
        serde_json::to_writer_pretty(writer, ser)
    } else {
        serde_json::to_writer(writer, ser)
    };

    result.map_err(|e| e.into())
}

fn string_json<S: Serialize>(options: JsonOptions, ser: &S) -> Result<String, Error> {
    let result = if options.pretty {
        serde_json::to_string_pretty(ser)
    } else {
        serde_json::to_string(ser)
    };

    result.map_err(|e| e.into())
}

fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, Error> {
    serde_json::from_str(json).map_err(|e| e.into())
}

impl Pokemon {
    /// Decodes a pokemon from JSON
    ///
    /// ```
    /// use teampaste::Pokemon;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let p = Pokemon::from_json(r#"{"name": "Koffing", "evs": {"def": 236}}"#)?;
    /// assert_eq!(p.name, "Koffing");
    /// assert_eq!(p.evs.def, 236);
    /// assert_eq!(p.evs.hp, 0);
    /// assert!(Pokemon::from_json(r#""name": "Koffing""#).is_err());
    /// # Ok(())
    /// # }
    /// ```
    pub fn from_json(json: &str) -> Result<Pokemon, Error> {
        from_json(json)
    }

    /// Encodes the pokemon as minified JSON. Every field is written.
    pub fn to_json(&self) -> Result<String, Error> {
        self.to_json_with_options(JsonOptions::default())
    }

    /// Encodes the pokemon as JSON with the given options
    pub fn to_json_with_options(&self, options: JsonOptions) -> Result<String, Error> {
        string_json(options, self)
    }

    /// Encodes the pokemon as JSON to the given writer
    pub fn to_json_writer<W>(&self, writer: W, options: JsonOptions) -> Result<(), Error>
    where
        W: std::io::Write,
    {
        writer_json(writer, options, self)
    }
}

impl Team {
    /// Decodes a team from JSON
    pub fn from_json(json: &str) -> Result<Team, Error> {
        from_json(json)
    }

    /// Encodes the team as minified JSON. Empty team level fields are
    /// omitted.
    pub fn to_json(&self) -> Result<String, Error> {
        self.to_json_with_options(JsonOptions::default())
    }

    /// Encodes the team as JSON with the given options
    pub fn to_json_with_options(&self, options: JsonOptions) -> Result<String, Error> {
        string_json(options, self)
    }

    /// Encodes the team as JSON to the given writer
    pub fn to_json_writer<W>(&self, writer: W, options: JsonOptions) -> Result<(), Error>
    where
        W: std::io::Write,
    {
        writer_json(writer, options, self)
    }
}
