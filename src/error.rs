//! Error types for the metar-decoder crate.
use thiserror::Error;

/// Error type for decoding a report.
///
/// Every variant carries the raw text of the group that could not be decoded. When the report
/// ended before a required group, the text is empty.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum DecodeError {
    /// The first group was neither `METAR`, `SPECI`, nor a station identifier.
    #[error("Invalid Report Type '{0}'")]
    InvalidReportType(String),
    /// The station identifier was not four alphanumeric characters.
    #[error("Invalid Station Identifier '{0}'")]
    InvalidStation(String),
    /// The date and time group was missing, malformed, or out of range.
    #[error("Invalid Date and Time '{0}'")]
    InvalidDateTime(String),
    /// A wind group was recognized but is not valid.
    #[error("Invalid Wind '{0}'")]
    InvalidWind(String),
    /// A visibility group was recognized but is not valid.
    #[error("Invalid Visibility '{0}'")]
    InvalidVisibility(String),
    /// A runway visual range group was recognized but is not valid.
    #[error("Invalid Runway Visual Range '{0}'")]
    InvalidRunwayVisualRange(String),
    /// A present weather group was recognized but is not valid.
    #[error("Invalid Present Weather '{0}'")]
    InvalidPresentWeather(String),
    /// A sky condition group was recognized but is not valid.
    #[error("Invalid Sky Condition '{0}'")]
    InvalidSkyCondition(String),
    /// A temperature and dew point group was recognized but is not valid.
    #[error("Invalid Temperature and Dew Point '{0}'")]
    InvalidTemperature(String),
    /// An altimeter group was recognized but is not valid.
    #[error("Invalid Altimeter '{0}'")]
    InvalidAltimeter(String),
    /// Groups were left over after the whole grammar was applied.
    #[error("Leftovers after parsing: {0}")]
    UnconsumedGroups(String),
}

/// Shorthand for results.
pub type Result<T> = ::std::result::Result<T, DecodeError>;

/// Error type for the unit system.
#[derive(Clone, PartialEq, Eq, Debug, Error)]
pub enum UnitError {
    /// The unit tag is not a member of the requested family.
    #[error("Unknown unit '{0}'")]
    UnknownUnit(String),
    /// The polarity marker was something other than `P`, `M`, or nothing.
    #[error("Unknown polarity marker '{0}'")]
    UnknownPolarity(String),
    /// The numeric text could not be read as a number.
    #[error("Invalid magnitude '{0}'")]
    InvalidMagnitude(String),
}
