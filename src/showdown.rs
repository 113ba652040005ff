use crate::{Error, ValidationError};

/// Conversion between a record and its Showdown paste text.
///
/// Implemented by both [`Pokemon`](crate::Pokemon) and [`Team`](crate::Team)
/// so callers can be generic over which level of a paste they handle.
///
/// ```
/// use teampaste::{Pokemon, Showdown, Team};
///
/// fn normalize<T: Showdown>(paste: &str) -> Result<String, teampaste::Error> {
///     T::from_showdown(paste)?.to_showdown()
/// }
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let paste = "Koffing\nAbility: Levitate\nBold Nature\n- Haze\n";
/// assert_eq!(normalize::<Pokemon>(paste)?, normalize::<Team>(paste)?);
/// # Ok(())
/// # }
/// ```
pub trait Showdown: Sized {
    /// Parses paste text. The result is not validated.
    fn from_showdown(paste: &str) -> Result<Self, Error>;

    /// Validates and then writes out paste text. Nothing is produced when
    /// validation fails.
    fn to_showdown(&self) -> Result<String, Error>;

    /// Checks the record against the teambuilder's basic rules
    fn validate(&self) -> Result<(), ValidationError>;
}
