//! Parsers for the individual groups of a report.
//!
//! Every parser has the same shape. Given the whole list of groups and the index of the current
//! one, it returns
//!  - `Ok(Some((value, next)))` if the group (and possibly the one after it) decoded, where `next`
//!    is the index of the first group it did not use,
//!  - `Ok(None)` if the group doesn't look like this kind of group at all, and
//!  - `Err(_)` if it looks like this kind of group but is malformed.
//!
//! The parsers never look behind the cursor, and never store anything. The order they are tried in
//! and whether a match is required is up to the decoder.
use crate::error::DecodeError;
use std::fmt::{self, Display};
use strum_macros::EnumIter;

pub mod altimeter;
pub mod header;
pub mod remarks;
pub mod runway;
pub mod sky;
pub mod temperature;
pub mod visibility;
pub mod weather;
pub mod wind;

/// A decoded group value and the index of the first group after it, or `None` if the group did
/// not match.
pub type Matched<T> = Option<(T, usize)>;

/// Split a raw report into its groups. Nothing is dropped, reordered, or normalized.
///
/// # Examples
///
/// ```rust
/// use metar_decoder::groups::tokenize;
///
/// assert_eq!(tokenize(" KLRU  241517Z\n00000KT "), vec!["KLRU", "241517Z", "00000KT"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(raw: &str) -> Vec<&str> {
    raw.split_whitespace().collect()
}

/// The kinds of groups, in the order they appear in a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum GroupKind {
    /// `METAR` or `SPECI`.
    ReportType,
    /// Station identifier.
    Station,
    /// Day of month and time of the observation.
    DateTime,
    /// `AUTO` or `COR`.
    Modifier,
    /// Surface wind.
    Wind,
    /// Prevailing visibility.
    Visibility,
    /// Runway visual range.
    RunwayVisualRange,
    /// Present weather.
    PresentWeather,
    /// Sky condition.
    SkyCondition,
    /// Temperature and dew point.
    Temperature,
    /// Altimeter setting.
    Altimeter,
    /// Remarks.
    Remarks,
}

impl GroupKind {
    /// The error for a group of this kind that was required but did not match.
    ///
    /// Modifiers and remarks are never required; if one is reported missing, the group at the
    /// cursor was simply left over.
    pub fn error(self, group: &str) -> DecodeError {
        let group = group.to_owned();

        match self {
            GroupKind::ReportType => DecodeError::InvalidReportType(group),
            GroupKind::Station => DecodeError::InvalidStation(group),
            GroupKind::DateTime => DecodeError::InvalidDateTime(group),
            GroupKind::Wind => DecodeError::InvalidWind(group),
            GroupKind::Visibility => DecodeError::InvalidVisibility(group),
            GroupKind::RunwayVisualRange => DecodeError::InvalidRunwayVisualRange(group),
            GroupKind::PresentWeather => DecodeError::InvalidPresentWeather(group),
            GroupKind::SkyCondition => DecodeError::InvalidSkyCondition(group),
            GroupKind::Temperature => DecodeError::InvalidTemperature(group),
            GroupKind::Altimeter => DecodeError::InvalidAltimeter(group),
            GroupKind::Modifier | GroupKind::Remarks => DecodeError::UnconsumedGroups(group),
        }
    }
}

impl Display for GroupKind {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            GroupKind::ReportType => "report type",
            GroupKind::Station => "station identifier",
            GroupKind::DateTime => "date and time",
            GroupKind::Modifier => "report modifier",
            GroupKind::Wind => "wind",
            GroupKind::Visibility => "visibility",
            GroupKind::RunwayVisualRange => "runway visual range",
            GroupKind::PresentWeather => "present weather",
            GroupKind::SkyCondition => "sky condition",
            GroupKind::Temperature => "temperature and dew point",
            GroupKind::Altimeter => "altimeter",
            GroupKind::Remarks => "remarks",
        };

        write!(formatter, "{}", name)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_tokenize_keeps_everything() {
        let raw = "METAR KLRU 241517Z AUTO 00000KT 10SM CLR 01/M02 A3031 RMK AO2 $";
        let groups = tokenize(raw);
        assert_eq!(groups.len(), 12);
        assert_eq!(groups.first(), Some(&"METAR"));
        assert_eq!(groups.last(), Some(&"$"));
        assert_eq!(groups.join(" "), raw);
    }

    #[test]
    fn test_error_names_group() {
        for kind in GroupKind::iter() {
            let msg = kind.error("XYZ").to_string();
            assert!(msg.contains("XYZ"), "{} -> {}", kind, msg);
        }

        assert_eq!(
            GroupKind::Station.error("LRU").to_string(),
            "Invalid Station Identifier 'LRU'"
        );
    }
}
