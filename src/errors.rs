use crate::Stat;
use std::error;
use std::fmt;
use std::num::ParseIntError;

/// An error that can occur when reading or writing a paste
#[derive(Debug)]
pub struct Error(Box<ErrorKind>);

impl Error {
    pub(crate) fn new(kind: ErrorKind) -> Error {
        Error(Box::new(kind))
    }

    pub(crate) fn member(index: usize, error: Error) -> Error {
        Error::new(ErrorKind::Member { index, error })
    }

    /// Return the specific type of error
    pub fn kind(&self) -> &ErrorKind {
        &self.0
    }

    /// Returns the position of the team member that caused the error (if
    /// available)
    pub fn member_index(&self) -> Option<usize> {
        match *self.0 {
            ErrorKind::Member { index, .. } => Some(index),
            _ => None,
        }
    }

    /// Returns the validation failure behind this error, looking through any
    /// team member wrapping
    pub fn validation(&self) -> Option<&ValidationError> {
        match *self.0 {
            ErrorKind::Validation(ref err) => Some(err),
            ErrorKind::Member { ref error, .. } => error.validation(),
            _ => None,
        }
    }
}

/// Specific type of error
#[derive(Debug)]
pub enum ErrorKind {
    /// A pokemon block needs a name line and at least two attribute lines
    TooFewLines { found: usize },

    /// The first line of a pokemon block did not contain a recognizable name
    InvalidName(String),

    /// A numeric field could not be parsed
    InvalidNumber {
        field: &'static str,
        value: String,
        source: ParseIntError,
    },

    /// An EVs or IVs component was not of the form `<number> <stat>`
    InvalidStat(String),

    /// The data was structurally sound but broke a validation rule
    Validation(ValidationError),

    /// A team member failed to be read or written
    Member { index: usize, error: Error },

    /// The underlying writer failed
    Io(std::io::Error),

    /// JSON could not be encoded or decoded
    #[cfg(feature = "json")]
    Json(serde_json::Error),
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match *self.0 {
            ErrorKind::InvalidNumber { ref source, .. } => Some(source),
            ErrorKind::Validation(ref err) => Some(err),
            ErrorKind::Member { ref error, .. } => Some(error),
            ErrorKind::Io(ref err) => Some(err),
            #[cfg(feature = "json")]
            ErrorKind::Json(ref err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self.0 {
            ErrorKind::TooFewLines { found } => write!(
                f,
                "invalid pokemon input: expected at least 3 lines, found {}",
                found
            ),
            ErrorKind::InvalidName(ref line) => write!(f, "invalid name: {}", line),
            ErrorKind::InvalidNumber {
                field,
                ref value,
                ref source,
            } => write!(f, "invalid {}: {} ({})", field, value, source),
            ErrorKind::InvalidStat(ref part) => {
                write!(f, "error in parsing evs/ivs line: invalid component: {}", part)
            }
            ErrorKind::Validation(ref err) => write!(f, "{}", err),
            ErrorKind::Member { index, ref error } => {
                write!(f, "team member error: index: {}, error: {}", index, error)
            }
            ErrorKind::Io(ref err) => write!(f, "io error: {}", err),
            #[cfg(feature = "json")]
            ErrorKind::Json(ref err) => write!(f, "json error: {}", err),
        }
    }
}

impl From<ValidationError> for Error {
    fn from(error: ValidationError) -> Self {
        Error::new(ErrorKind::Validation(error))
    }
}

impl From<std::io::Error> for Error {
    fn from(error: std::io::Error) -> Self {
        Error::new(ErrorKind::Io(error))
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(error: serde_json::Error) -> Self {
        Error::new(ErrorKind::Json(error))
    }
}

/// A broken rule found when validating a pokemon or team.
///
/// Rules are checked in a fixed order and only the first failure is
/// reported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The pokemon has no name
    MissingName,

    /// The pokemon has no ability
    MissingAbility,

    /// The pokemon has no nature
    MissingNature,

    /// Happiness outside of 0 to 255
    Happiness(i32),

    /// An effort value outside of 0 to 252
    EffortValue { stat: Stat, value: i32 },

    /// An individual value outside of 0 to 31
    IndividualValue { stat: Stat, value: i32 },

    /// A pokemon must know between 1 and 4 moves
    MoveCount(usize),

    /// Gender must be empty, `F`, or `M`
    Gender(String),

    /// The team has no members
    NoMembers,

    /// A team member is invalid
    Member {
        index: usize,
        error: Box<ValidationError>,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ValidationError::MissingName => write!(f, "name is required"),
            ValidationError::MissingAbility => write!(f, "ability is required"),
            ValidationError::MissingNature => write!(f, "nature is required"),
            ValidationError::Happiness(x) => write!(
                f,
                "happiness should be in range [0, 255], yours: {}",
                x
            ),
            ValidationError::EffortValue { stat, value } => write!(
                f,
                "the {} ev should be in range [0, 252], yours: {}",
                stat, value
            ),
            ValidationError::IndividualValue { stat, value } => write!(
                f,
                "the {} iv should be in range [0, 31], yours: {}",
                stat, value
            ),
            ValidationError::MoveCount(x) => write!(
                f,
                "the number of moves should be in range [1, 4], yours: {}",
                x
            ),
            ValidationError::Gender(x) => write!(f, "invalid gender: [{}]", x),
            ValidationError::NoMembers => write!(f, "empty team members"),
            ValidationError::Member { index, error } => write!(
                f,
                "found an invalid pokemon: index: {}, error: {}",
                index, error
            ),
        }
    }
}

impl error::Error for ValidationError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            ValidationError::Member { error, .. } => Some(error.as_ref()),
            _ => None,
        }
    }
}
