//! The sequential group decoder.
//!
//! A report is decoded by walking a fixed, ordered table of rules exactly once. Each rule names a
//! kind of group, whether it must be present, and whether it may repeat. There is no backtracking:
//! once the decoder moves past a rule it never tries that rule again, so a valid wind group that
//! shows up after the sky condition is left over and the decode fails.
use crate::{
    error::{DecodeError, Result},
    groups::{
        altimeter, header, remarks, runway, sky, temperature, tokenize, visibility, weather, wind,
        GroupKind, Matched,
    },
    report::{Modifier, PresentWeather, Report, RunwayVisualRange, SkyLayer, Wind},
    units::{Pressure, Temperature, Visibility},
};
use chrono::{DateTime, Utc};
use tracing::{debug, trace};

/// Decoder settings.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use metar_decoder::Decoder;
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 28, 0, 0, 0).unwrap();
/// let decoder = Decoder::new().with_reference_time(now);
///
/// let rpt = decoder.decode("KLRU 241517Z 00000KT").unwrap();
/// assert_eq!(rpt.observation_time(), Utc.with_ymd_and_hms(2024, 5, 24, 15, 17, 0).unwrap());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Decoder {
    reference_time: Option<DateTime<Utc>>,
}

impl Decoder {
    /// Create a decoder that resolves observation times against the clock at the time of decoding.
    #[inline]
    pub fn new() -> Self {
        Decoder::default()
    }

    /// Builder method to resolve observation times against a fixed instant instead of the clock.
    /// Passing `None` goes back to using the clock.
    #[inline]
    pub fn with_reference_time<T>(mut self, now: T) -> Self
    where
        Option<DateTime<Utc>>: From<T>,
    {
        self.reference_time = Option::from(now);
        self
    }

    /// The fixed reference time, if one was set.
    #[inline]
    pub fn reference_time(&self) -> Option<DateTime<Utc>> {
        self.reference_time
    }

    /// Decode a raw report. The clock is read at most once.
    pub fn decode(&self, raw: &str) -> Result<Report> {
        let now = self.reference_time.unwrap_or_else(Utc::now);
        decode_at(raw, now)
    }
}

/// Decode a raw report, resolving the observation time against the current time.
///
/// # Examples
///
/// ```rust
/// use metar_decoder::{decode, DecodeError};
///
/// let err = decode("METAR LRU").unwrap_err();
/// assert_eq!(err, DecodeError::InvalidStation("LRU".to_owned()));
/// assert_eq!(err.to_string(), "Invalid Station Identifier 'LRU'");
/// ```
pub fn decode(raw: &str) -> Result<Report> {
    Decoder::new().decode(raw)
}

/// Decode a raw report, resolving the observation time against `now`.
///
/// # Examples
///
/// ```rust
/// use chrono::{TimeZone, Utc};
/// use metar_decoder::decode_at;
/// use metar_decoder::units::{Pressure, PressureUnit, Visibility, VisibilityUnit};
///
/// let now = Utc.with_ymd_and_hms(2024, 5, 28, 0, 0, 0).unwrap();
/// let rpt = decode_at("KLRU 261453Z AUTO 00000KT 3SM -RA OVC004 02/02 A3008 RMK AO2", now)
///     .unwrap();
///
/// assert_eq!(rpt.station(), "KLRU");
/// assert_eq!(rpt.visibility(), Some(Visibility::new(3.0, VisibilityUnit::StatuteMiles)));
/// assert_eq!(rpt.present_weather().len(), 1);
/// assert_eq!(rpt.sky_layers().len(), 1);
/// assert_eq!(rpt.altimeter(), Some(Pressure::new(30.08, PressureUnit::InchesOfMercury)));
/// ```
pub fn decode_at(raw: &str, now: DateTime<Utc>) -> Result<Report> {
    let groups = tokenize(raw);

    let mut cursor = 0;
    let mut builder = ReportBuilder::default();

    for rule in GRAMMAR.iter() {
        let mut matched = false;

        loop {
            match (rule.matcher)(&groups, cursor, now) {
                Ok(Some((field, next))) => {
                    let used = &groups[cursor..next];
                    trace!(kind = %rule.kind, groups = ?used, "matched");
                    builder.store(field);
                    matched = true;

                    let consumed = next > cursor;
                    cursor = next;
                    if rule.repeat == Repeat::Once || !consumed {
                        break;
                    }
                }
                Ok(None) if rule.presence == Presence::Mandatory && !matched => {
                    let group = groups.get(cursor).copied().unwrap_or("");
                    let err = rule.kind.error(group);
                    debug!(kind = %rule.kind, %err, "required group missing");
                    return Err(err);
                }
                Ok(None) => {
                    trace!(kind = %rule.kind, cursor, "not present");
                    break;
                }
                Err(err) => {
                    debug!(kind = %rule.kind, %err, "malformed group");
                    return Err(err);
                }
            }
        }
    }

    if cursor < groups.len() {
        let err = DecodeError::UnconsumedGroups(groups[cursor..].join(" "));
        debug!(%err, "groups left over");
        return Err(err);
    }

    let report = builder.finish()?;
    debug!(
        station = %report.station,
        time = %report.observation_time,
        groups = groups.len(),
        "decoded report"
    );

    Ok(report)
}

//
// Grammar table
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Presence {
    Mandatory,
    Optional,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Repeat {
    Once,
    WhileMatching,
}

/// The value of one matched group, tagged with where it goes in the report.
#[derive(Debug)]
enum Field {
    ReportType(bool),
    Station(String),
    ObservationTime(DateTime<Utc>),
    Modifier(Modifier),
    Wind(Wind),
    Visibility(Visibility),
    RunwayVisualRange(RunwayVisualRange),
    PresentWeather(PresentWeather),
    Sky(SkyLayer),
    Temperature(Temperature, Option<Temperature>),
    Altimeter(Pressure),
    Remarks(String),
}

type Matcher = fn(&[&str], usize, DateTime<Utc>) -> Result<Matched<Field>>;

struct Rule {
    kind: GroupKind,
    presence: Presence,
    repeat: Repeat,
    matcher: Matcher,
}

macro_rules! rule {
    ($kind:ident, $presence:ident, $repeat:ident, $matcher:ident) => {
        Rule {
            kind: GroupKind::$kind,
            presence: Presence::$presence,
            repeat: Repeat::$repeat,
            matcher: $matcher,
        }
    };
}

const GRAMMAR: [Rule; 12] = [
    rule!(ReportType, Mandatory, Once, match_report_type),
    rule!(Station, Mandatory, Once, match_station),
    rule!(DateTime, Mandatory, Once, match_date_time),
    rule!(Modifier, Optional, Once, match_modifier),
    rule!(Wind, Optional, Once, match_wind),
    rule!(Visibility, Optional, Once, match_visibility),
    rule!(RunwayVisualRange, Optional, WhileMatching, match_runway),
    rule!(PresentWeather, Optional, WhileMatching, match_weather),
    rule!(SkyCondition, Optional, WhileMatching, match_sky),
    rule!(Temperature, Optional, Once, match_temperature),
    rule!(Altimeter, Optional, Once, match_altimeter),
    rule!(Remarks, Optional, Once, match_remarks),
];

// Adapt a group parser to the `Matcher` signature, tagging its value with a `Field`.
macro_rules! matcher {
    ($name:ident, $parse:path, $wrap:expr) => {
        fn $name(groups: &[&str], cursor: usize, _now: DateTime<Utc>) -> Result<Matched<Field>> {
            Ok($parse(groups, cursor)?.map(|(value, next)| (($wrap)(value), next)))
        }
    };
}

matcher!(match_report_type, header::report_type, Field::ReportType);
matcher!(match_station, header::station, Field::Station);
matcher!(match_modifier, header::modifier, Field::Modifier);
matcher!(match_wind, wind::parse, Field::Wind);
matcher!(match_visibility, visibility::parse, Field::Visibility);
matcher!(match_runway, runway::parse, Field::RunwayVisualRange);
matcher!(match_weather, weather::parse, Field::PresentWeather);
matcher!(match_sky, sky::parse, Field::Sky);
matcher!(match_temperature, temperature::parse, temperature_field);
matcher!(match_altimeter, altimeter::parse, Field::Altimeter);
matcher!(match_remarks, remarks::parse, Field::Remarks);

fn temperature_field((temperature, dew_point): (Temperature, Option<Temperature>)) -> Field {
    Field::Temperature(temperature, dew_point)
}

fn match_date_time(groups: &[&str], cursor: usize, now: DateTime<Utc>) -> Result<Matched<Field>> {
    Ok(header::date_time(groups, cursor, now)?
        .map(|(time, next)| (Field::ObservationTime(time), next)))
}

/// Collects fields as they are matched. Nothing is visible to the caller until `finish`.
#[derive(Debug, Default)]
struct ReportBuilder {
    is_special: bool,
    station: Option<String>,
    observation_time: Option<DateTime<Utc>>,
    modifier: Option<Modifier>,
    wind: Option<Wind>,
    visibility: Option<Visibility>,
    runway_visual_ranges: Vec<RunwayVisualRange>,
    present_weather: Vec<PresentWeather>,
    sky_layers: Vec<SkyLayer>,
    temperature: Option<Temperature>,
    dew_point: Option<Temperature>,
    altimeter: Option<Pressure>,
    remarks: Option<String>,
}

impl ReportBuilder {
    fn store(&mut self, field: Field) {
        match field {
            Field::ReportType(is_special) => self.is_special = is_special,
            Field::Station(station) => self.station = Some(station),
            Field::ObservationTime(time) => self.observation_time = Some(time),
            Field::Modifier(modifier) => self.modifier = Some(modifier),
            Field::Wind(wind) => self.wind = Some(wind),
            Field::Visibility(vis) => self.visibility = Some(vis),
            Field::RunwayVisualRange(rvr) => self.runway_visual_ranges.push(rvr),
            Field::PresentWeather(wx) => self.present_weather.push(wx),
            Field::Sky(layer) => self.sky_layers.push(layer),
            Field::Temperature(t, dp) => {
                self.temperature = Some(t);
                self.dew_point = dp;
            }
            Field::Altimeter(alstg) => self.altimeter = Some(alstg),
            Field::Remarks(remarks) => self.remarks = Some(remarks),
        }
    }

    fn finish(self) -> Result<Report> {
        let station = self
            .station
            .ok_or_else(|| GroupKind::Station.error(""))?;
        let observation_time = self
            .observation_time
            .ok_or_else(|| GroupKind::DateTime.error(""))?;

        Ok(Report {
            is_special: self.is_special,
            station,
            observation_time,
            modifier: self.modifier,
            wind: self.wind,
            visibility: self.visibility,
            runway_visual_ranges: self.runway_visual_ranges,
            present_weather: self.present_weather,
            sky_layers: self.sky_layers,
            temperature: self.temperature,
            dew_point: self.dew_point,
            altimeter: self.altimeter,
            remarks: self.remarks,
        })
    }
}
