//! Data type and methods to store a decoded report.

use crate::{
    error::DecodeError,
    units::{Pressure, Temperature, Visibility},
};
use chrono::{DateTime, Utc};
use std::str::FromStr;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

pub use self::{
    runway::{RunwayVisualRange, VisualRange},
    sky::{ClearSky, CloudType, Cover, SkyLayer},
    weather::{Descriptor, Intensity, Phenomenon, PhenomenonClass, PresentWeather},
    wind::{Wind, WindDirection},
};

/// Report modifier, which says who produced or revised the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum Modifier {
    /// Fully automated report with no human intervention.
    #[strum(serialize = "AUTO")]
    Automated,
    /// A corrected report.
    #[strum(serialize = "COR")]
    Corrected,
}

/// All the groups decoded from a single report.
///
/// A field is only set if its group was present in the report. A missing group is different from a
/// zero value, for instance calm wind is reported as a wind with zero speed, not as no wind.
#[derive(Clone, Debug, PartialEq)]
pub struct Report {
    pub(crate) is_special: bool,
    pub(crate) station: String,
    pub(crate) observation_time: DateTime<Utc>,
    pub(crate) modifier: Option<Modifier>,
    pub(crate) wind: Option<Wind>,
    pub(crate) visibility: Option<Visibility>,
    pub(crate) runway_visual_ranges: Vec<RunwayVisualRange>,
    pub(crate) present_weather: Vec<PresentWeather>,
    pub(crate) sky_layers: Vec<SkyLayer>,
    pub(crate) temperature: Option<Temperature>,
    pub(crate) dew_point: Option<Temperature>,
    pub(crate) altimeter: Option<Pressure>,
    pub(crate) remarks: Option<String>,
}

impl Report {
    /// Was this a SPECI report? SPECI (special) reports are issued when the weather changes
    /// significantly between routine reports.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metar_decoder::decode_at;
    /// # use metar_decoder::doctest::reference_time;
    ///
    /// let rpt = decode_at("SPECI KLRU 241517Z 00000KT", reference_time()).unwrap();
    /// assert!(rpt.is_special());
    ///
    /// let rpt = decode_at("METAR KLRU 241517Z 00000KT", reference_time()).unwrap();
    /// assert!(!rpt.is_special());
    ///
    /// // No report type defaults to a routine report.
    /// let rpt = decode_at("KLRU 241517Z 00000KT", reference_time()).unwrap();
    /// assert!(!rpt.is_special());
    /// ```
    #[inline]
    pub fn is_special(&self) -> bool {
        self.is_special
    }

    /// The four character station identifier.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use metar_decoder::doctest::make_test_report;
    /// let rpt = make_test_report();
    /// assert_eq!(rpt.station(), "KLRU");
    /// ```
    #[inline]
    pub fn station(&self) -> &str {
        &self.station
    }

    /// The time of the observation.
    ///
    /// A report only codes the day of the month and time of day, so the year and month are taken
    /// from the time of decoding, assuming the observation was made within the past month.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use chrono::{TimeZone, Utc};
    /// # use metar_decoder::doctest::make_test_report;
    ///
    /// let rpt = make_test_report();
    /// assert_eq!(rpt.observation_time(), Utc.with_ymd_and_hms(2024, 5, 24, 15, 17, 0).unwrap());
    /// ```
    #[inline]
    pub fn observation_time(&self) -> DateTime<Utc> {
        self.observation_time
    }

    /// The report modifier, if any.
    #[inline]
    pub fn modifier(&self) -> Option<Modifier> {
        self.modifier
    }

    /// Was this report entirely automated?
    #[inline]
    pub fn is_automated(&self) -> bool {
        self.modifier == Some(Modifier::Automated)
    }

    /// Was this report corrected?
    #[inline]
    pub fn is_corrected(&self) -> bool {
        self.modifier == Some(Modifier::Corrected)
    }

    /// Surface wind.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metar_decoder::units::{Speed, SpeedUnit};
    /// # use metar_decoder::doctest::make_test_report;
    ///
    /// let rpt = make_test_report();
    /// let wind = rpt.wind().unwrap();
    ///
    /// assert!(wind.is_calm());
    /// assert_eq!(wind.speed(), Speed::new(0.0, SpeedUnit::Knots));
    /// ```
    #[inline]
    pub fn wind(&self) -> Option<&Wind> {
        self.wind.as_ref()
    }

    /// Prevailing horizontal visibility in statute miles. If it was reported as less than the
    /// stated distance, the polarity is `AtMost`.
    #[inline]
    pub fn visibility(&self) -> Option<Visibility> {
        self.visibility
    }

    /// Runway visual ranges in the order they were reported.
    #[inline]
    pub fn runway_visual_ranges(&self) -> &[RunwayVisualRange] {
        &self.runway_visual_ranges
    }

    /// Present weather groups in the order they were reported.
    #[inline]
    pub fn present_weather(&self) -> &[PresentWeather] {
        &self.present_weather
    }

    /// Sky condition layers in the order they were reported, lowest first.
    #[inline]
    pub fn sky_layers(&self) -> &[SkyLayer] {
        &self.sky_layers
    }

    /// Is the only sky condition `CLR`, clear below 12,000 feet as seen by automated equipment?
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use metar_decoder::doctest::make_test_report;
    /// let rpt = make_test_report();
    /// assert!(rpt.is_clr());
    /// assert!(!rpt.is_skc());
    /// ```
    #[inline]
    pub fn is_clr(&self) -> bool {
        matches!(self.sky_layers.as_slice(), [layer] if layer.is_clr())
    }

    /// Is the only sky condition `SKC`, sky clear as reported by an observer?
    #[inline]
    pub fn is_skc(&self) -> bool {
        matches!(self.sky_layers.as_slice(), [layer] if layer.is_skc())
    }

    /// Air temperature.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metar_decoder::units::{Temperature, TemperatureUnit};
    /// # use metar_decoder::doctest::make_test_report;
    ///
    /// let rpt = make_test_report();
    /// assert_eq!(rpt.temperature().unwrap(), Temperature::new(1.0, TemperatureUnit::Celsius));
    /// assert_eq!(rpt.dew_point().unwrap(), Temperature::new(-2.0, TemperatureUnit::Celsius));
    /// ```
    #[inline]
    pub fn temperature(&self) -> Option<Temperature> {
        self.temperature
    }

    /// Dew point temperature. This may be missing even when the temperature is present.
    #[inline]
    pub fn dew_point(&self) -> Option<Temperature> {
        self.dew_point
    }

    /// Altimeter setting in inches of mercury.
    #[inline]
    pub fn altimeter(&self) -> Option<Pressure> {
        self.altimeter
    }

    /// Everything after `RMK`, verbatim with single spaces between groups.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use metar_decoder::doctest::make_test_report;
    /// let rpt = make_test_report();
    /// assert_eq!(rpt.remarks(), Some("AO2"));
    /// ```
    #[inline]
    pub fn remarks(&self) -> Option<&str> {
        self.remarks.as_deref()
    }
}

impl FromStr for Report {
    type Err = DecodeError;

    /// Decode a report relative to the current time, see [`decode`](crate::decode).
    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        crate::decode(raw)
    }
}

// FIXME: only configure for test and doc tests.
#[doc(hidden)]
pub mod doctest {
    use super::*;
    use chrono::TimeZone;

    /// A fixed instant to decode the documentation examples against.
    pub fn reference_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 5, 28, 0, 0, 0)
            .single()
            .unwrap_or_else(Utc::now)
    }

    pub fn make_test_report() -> Report {
        crate::decode_at(
            "METAR KLRU 241517Z AUTO 00000KT 10SM CLR 01/M02 A3031 RMK AO2",
            reference_time(),
        )
        .unwrap_or_else(|err| panic!("test report failed to decode: {}", err))
    }
}


mod runway;
mod sky;
mod weather;
mod wind;
