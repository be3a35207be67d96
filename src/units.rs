//! A small quantity and unit system for the values found in a report.
//!
//! Each family of units (speed, angle, visibility, height, pressure, temperature) is its own type,
//! so a speed can never be compared with or converted into a pressure. All conversions within a
//! family are linear and go through the family's canonical unit.
//!
//! Visibility in statute miles and heights or runway ranges in feet are separate families. They
//! are never compared with each other:
//!
//! ```compile_fail
//! use metar_decoder::units::{Height, HeightUnit, Visibility, VisibilityUnit};
//!
//! let vis = Visibility::new(1.0, VisibilityUnit::StatuteMiles);
//! let hgt = Height::new(5280.0, HeightUnit::Feet);
//! let _ = vis == hgt;
//! ```
//!
//! A quantity also carries a [`Polarity`], which records whether the value was reported as "at
//! least" (`P` prefix) or "at most" (`M` prefix) the stated magnitude. Polarity is metadata only, it
//! does not take part in equality or ordering.
//!
//! ```rust
//! use metar_decoder::units::{Speed, SpeedUnit};
//!
//! let wind = Speed::parse("10", "KT").unwrap();
//! let metric = wind.convert(SpeedUnit::KilometersPerHour);
//!
//! assert_eq!(wind, metric);
//! assert!((metric.magnitude() - 18.52).abs() < 1.0e-9);
//! ```
use crate::{error::UnitError, utility::approx_equal};
use std::{cmp::Ordering, fmt, str::FromStr};
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Was the value reported as a bound rather than an exact amount?
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Reported as the stated magnitude.
    None,
    /// Reported as at least the stated magnitude, the `P` prefix.
    AtLeast,
    /// Reported as at most the stated magnitude, the `M` prefix.
    AtMost,
}

impl Default for Polarity {
    fn default() -> Self {
        Polarity::None
    }
}

impl FromStr for Polarity {
    type Err = UnitError;

    fn from_str(marker: &str) -> Result<Self, Self::Err> {
        match marker {
            "" => Ok(Polarity::None),
            "P" => Ok(Polarity::AtLeast),
            "M" => Ok(Polarity::AtMost),
            other => Err(UnitError::UnknownPolarity(other.to_owned())),
        }
    }
}

/// A unit belonging to a single family of units.
pub trait Unit: Copy + PartialEq + fmt::Debug + FromStr + Into<&'static str> {
    /// The unit all members of this family are normalized to for comparison.
    const CANONICAL: Self;

    /// Multiply a magnitude in this unit by this factor to express it in the canonical unit.
    fn canonical_factor(self) -> f64;

    /// The tag used to name this unit, e.g. `KT` for knots.
    #[inline]
    fn tag(self) -> &'static str {
        self.into()
    }
}

const KM_PER_NAUTICAL_MILE: f64 = 1.852;
const HPA_PER_INHG: f64 = 33.863_886_666_7;

/// Units of speed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum SpeedUnit {
    /// Nautical miles per hour.
    #[strum(serialize = "KT")]
    Knots,
    /// Kilometers per hour.
    #[strum(serialize = "KMH")]
    KilometersPerHour,
    /// Meters per second.
    #[strum(serialize = "MPS")]
    MetersPerSecond,
}

impl Unit for SpeedUnit {
    const CANONICAL: Self = SpeedUnit::Knots;

    #[inline]
    fn canonical_factor(self) -> f64 {
        match self {
            SpeedUnit::Knots => 1.0,
            SpeedUnit::KilometersPerHour => 1.0 / KM_PER_NAUTICAL_MILE,
            SpeedUnit::MetersPerSecond => 3.6 / KM_PER_NAUTICAL_MILE,
        }
    }
}

/// Units of angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum AngleUnit {
    /// Degrees of arc.
    #[strum(serialize = "deg")]
    Degrees,
}

impl Unit for AngleUnit {
    const CANONICAL: Self = AngleUnit::Degrees;

    #[inline]
    fn canonical_factor(self) -> f64 {
        1.0
    }
}

/// Units of prevailing visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum VisibilityUnit {
    /// Statute miles.
    #[strum(serialize = "SM")]
    StatuteMiles,
}

impl Unit for VisibilityUnit {
    const CANONICAL: Self = VisibilityUnit::StatuteMiles;

    #[inline]
    fn canonical_factor(self) -> f64 {
        1.0
    }
}

/// Units of height, used for cloud bases and runway visual range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum HeightUnit {
    /// Feet.
    #[strum(serialize = "FT")]
    Feet,
}

impl Unit for HeightUnit {
    const CANONICAL: Self = HeightUnit::Feet;

    #[inline]
    fn canonical_factor(self) -> f64 {
        1.0
    }
}

/// Units of pressure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum PressureUnit {
    /// Inches of mercury.
    #[strum(serialize = "inHg")]
    InchesOfMercury,
    /// Millibars, the same as hectopascals.
    #[strum(to_string = "mb", serialize = "hPa")]
    Millibar,
}

impl Unit for PressureUnit {
    const CANONICAL: Self = PressureUnit::InchesOfMercury;

    #[inline]
    fn canonical_factor(self) -> f64 {
        match self {
            PressureUnit::InchesOfMercury => 1.0,
            PressureUnit::Millibar => 1.0 / HPA_PER_INHG,
        }
    }
}

/// Units of temperature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum TemperatureUnit {
    /// Degrees Celsius.
    #[strum(serialize = "C")]
    Celsius,
}

impl Unit for TemperatureUnit {
    const CANONICAL: Self = TemperatureUnit::Celsius;

    #[inline]
    fn canonical_factor(self) -> f64 {
        1.0
    }
}

/// A magnitude tagged with a unit from the family `U` and a polarity.
#[derive(Debug, Clone, Copy)]
pub struct Measure<U> {
    magnitude: f64,
    unit: U,
    polarity: Polarity,
}

/// A speed, canonical unit knots.
pub type Speed = Measure<SpeedUnit>;
/// An angle, canonical unit degrees.
pub type Angle = Measure<AngleUnit>;
/// A prevailing visibility, canonical unit statute miles.
pub type Visibility = Measure<VisibilityUnit>;
/// A height or runway visual range, canonical unit feet.
pub type Height = Measure<HeightUnit>;
/// A pressure, canonical unit inches of mercury.
pub type Pressure = Measure<PressureUnit>;
/// A temperature, canonical unit degrees Celsius.
pub type Temperature = Measure<TemperatureUnit>;

impl<U: Unit> Measure<U> {
    /// Create a quantity with no polarity.
    #[inline]
    pub fn new(magnitude: f64, unit: U) -> Self {
        Measure {
            magnitude,
            unit,
            polarity: Polarity::None,
        }
    }

    /// Build a quantity from the text of a number and a unit tag.
    ///
    /// ```rust
    /// use metar_decoder::units::{Pressure, PressureUnit};
    ///
    /// let alstg = Pressure::parse("30.31", "inHg").unwrap();
    /// assert_eq!(alstg.unit(), PressureUnit::InchesOfMercury);
    ///
    /// assert!(Pressure::parse("30.31", "KT").is_err());
    /// assert!(Pressure::parse("thirty", "inHg").is_err());
    /// ```
    pub fn parse(numeric_text: &str, unit_tag: &str) -> Result<Self, UnitError> {
        let unit =
            U::from_str(unit_tag).map_err(|_| UnitError::UnknownUnit(unit_tag.to_owned()))?;
        let magnitude = f64::from_str(numeric_text)
            .map_err(|_| UnitError::InvalidMagnitude(numeric_text.to_owned()))?;

        Ok(Self::new(magnitude, unit))
    }

    /// The magnitude in this quantity's own unit.
    #[inline]
    pub fn magnitude(&self) -> f64 {
        self.magnitude
    }

    /// The unit the magnitude is expressed in.
    #[inline]
    pub fn unit(&self) -> U {
        self.unit
    }

    /// Whether this was reported as a bound.
    #[inline]
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// Reported as at least the magnitude.
    #[inline]
    pub fn is_at_least(&self) -> bool {
        self.polarity == Polarity::AtLeast
    }

    /// Reported as at most the magnitude.
    #[inline]
    pub fn is_at_most(&self) -> bool {
        self.polarity == Polarity::AtMost
    }

    /// Replace the polarity.
    #[inline]
    pub fn with_polarity(self, polarity: Polarity) -> Self {
        Measure { polarity, ..self }
    }

    /// Replace the polarity using a coded marker, `P`, `M`, or the empty string.
    pub fn with_polarity_marker(self, marker: &str) -> Result<Self, UnitError> {
        Ok(self.with_polarity(Polarity::from_str(marker)?))
    }

    /// Express this quantity in another unit of the same family. Polarity is kept.
    ///
    /// ```rust
    /// use metar_decoder::units::{Speed, SpeedUnit};
    ///
    /// let wind = Speed::new(10.0, SpeedUnit::Knots).with_polarity_marker("P").unwrap();
    /// let metric = wind.convert(SpeedUnit::KilometersPerHour);
    /// assert!((metric.magnitude() - 18.52).abs() < 1.0e-9);
    /// assert!(metric.is_at_least());
    /// ```
    #[inline]
    pub fn convert(self, target: U) -> Self {
        Measure {
            magnitude: self.in_unit(target),
            unit: target,
            polarity: self.polarity,
        }
    }

    /// The magnitude expressed in `target` units.
    #[inline]
    pub fn in_unit(&self, target: U) -> f64 {
        if target == self.unit {
            self.magnitude
        } else {
            self.canonical_magnitude() / target.canonical_factor()
        }
    }

    /// The magnitude in the family's canonical unit.
    #[inline]
    pub fn canonical_magnitude(&self) -> f64 {
        self.magnitude * self.unit.canonical_factor()
    }
}

impl<U: Unit> PartialEq for Measure<U> {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (self.canonical_magnitude(), other.canonical_magnitude());
        let eps = 1.0e-9 * a.abs().max(b.abs()).max(1.0);

        approx_equal(a, b, eps)
    }
}

impl<U: Unit> PartialOrd for Measure<U> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else {
            self.canonical_magnitude()
                .partial_cmp(&other.canonical_magnitude())
        }
    }
}

impl<U: Unit> fmt::Display for Measure<U> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let marker = match self.polarity {
            Polarity::None => "",
            Polarity::AtLeast => "P",
            Polarity::AtMost => "M",
        };
        write!(f, "{}{} {}", marker, self.magnitude, self.unit.tag())
    }
}

//
// Conversions into metfor types for consumers that do their own calculations.
//
impl From<Speed> for metfor::Knots {
    #[inline]
    fn from(spd: Speed) -> Self {
        metfor::Knots(spd.in_unit(SpeedUnit::Knots))
    }
}

impl From<Speed> for metfor::MetersPSec {
    #[inline]
    fn from(spd: Speed) -> Self {
        metfor::MetersPSec(spd.in_unit(SpeedUnit::MetersPerSecond))
    }
}

impl From<Height> for metfor::Feet {
    #[inline]
    fn from(hgt: Height) -> Self {
        metfor::Feet(hgt.in_unit(HeightUnit::Feet))
    }
}

impl From<Visibility> for metfor::StatuteMiles {
    #[inline]
    fn from(vis: Visibility) -> Self {
        metfor::StatuteMiles(vis.in_unit(VisibilityUnit::StatuteMiles))
    }
}

impl From<Pressure> for metfor::HectoPascal {
    #[inline]
    fn from(press: Pressure) -> Self {
        metfor::HectoPascal(press.in_unit(PressureUnit::Millibar))
    }
}

impl From<Temperature> for metfor::Celsius {
    #[inline]
    fn from(t: Temperature) -> Self {
        metfor::Celsius(t.in_unit(TemperatureUnit::Celsius))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::utility::test_tools::*;
    use strum::IntoEnumIterator;

    fn check_round_trips<U: Unit + IntoEnumIterator>(magnitude: f64) {
        for from in U::iter() {
            for to in U::iter() {
                let q = Measure::new(magnitude, from);
                let back = q.convert(to).convert(from);
                assert!(
                    approx_equal(q.magnitude(), back.magnitude(), 1.0e-9),
                    "{:?} -> {:?} -> {:?}",
                    from,
                    to,
                    from
                );
                assert_eq!(q, q.convert(to));
            }
        }
    }

    #[test]
    fn test_round_trips() {
        for &mag in &[0.0, 0.5, 1.875, 10.0, 30.31, 135.0, 6000.0] {
            check_round_trips::<SpeedUnit>(mag);
            check_round_trips::<AngleUnit>(mag);
            check_round_trips::<VisibilityUnit>(mag);
            check_round_trips::<HeightUnit>(mag);
            check_round_trips::<PressureUnit>(mag);
            check_round_trips::<TemperatureUnit>(mag);
        }
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(Speed::parse("20", "KT").unwrap().unit(), SpeedUnit::Knots);
        assert_eq!(
            Speed::parse("20", "KMH").unwrap().unit(),
            SpeedUnit::KilometersPerHour
        );
        assert_eq!(
            Speed::parse("20", "MPS").unwrap().unit(),
            SpeedUnit::MetersPerSecond
        );
        assert_eq!(Height::parse("600", "FT").unwrap().unit(), HeightUnit::Feet);
        assert_eq!(
            Visibility::parse("10", "SM").unwrap().unit(),
            VisibilityUnit::StatuteMiles
        );
        assert_eq!(
            Pressure::parse("1013", "mb").unwrap().unit(),
            PressureUnit::Millibar
        );
        assert_eq!(
            Pressure::parse("1013", "hPa").unwrap(),
            Pressure::new(1013.0, PressureUnit::Millibar)
        );
        assert_eq!(
            Speed::parse("20", "SM"),
            Err(UnitError::UnknownUnit("SM".to_owned()))
        );
        // Miles and feet are different families.
        assert_eq!(
            Height::parse("1", "SM"),
            Err(UnitError::UnknownUnit("SM".to_owned()))
        );
        assert_eq!(
            Visibility::parse("5280", "FT"),
            Err(UnitError::UnknownUnit("FT".to_owned()))
        );
        assert_eq!(
            Temperature::parse("--", "C"),
            Err(UnitError::InvalidMagnitude("--".to_owned()))
        );
    }

    #[test]
    fn test_conversions() {
        let spd = Speed::new(10.0, SpeedUnit::Knots);
        assert!(approx_equal(
            spd.in_unit(SpeedUnit::MetersPerSecond),
            5.144_444,
            1.0e-6
        ));

        let alstg = Pressure::new(29.92, PressureUnit::InchesOfMercury);
        assert!(approx_equal(
            alstg.in_unit(PressureUnit::Millibar),
            1013.21,
            0.01
        ));
    }

    #[test]
    fn test_ordering_uses_canonical_units() {
        let slow = Speed::new(10.0, SpeedUnit::Knots);
        let fast = Speed::new(10.0, SpeedUnit::MetersPerSecond);
        assert!(slow < fast);
        assert!(fast > Speed::new(19.0, SpeedUnit::Knots));
        assert_eq!(
            slow.partial_cmp(&slow.convert(SpeedUnit::KilometersPerHour)),
            Some(Ordering::Equal)
        );
    }

    #[test]
    fn test_polarity() {
        let rvr = Height::new(6000.0, HeightUnit::Feet);
        assert_eq!(rvr.polarity(), Polarity::None);

        let p = rvr.with_polarity_marker("P").unwrap();
        assert!(p.is_at_least());
        assert!(!p.is_at_most());

        let m = rvr.with_polarity_marker("M").unwrap();
        assert!(m.is_at_most());

        // Polarity does not take part in equality.
        assert_eq!(p, m);
        assert_eq!(p.convert(HeightUnit::Feet).polarity(), Polarity::AtLeast);

        assert_eq!(
            rvr.with_polarity_marker("X"),
            Err(UnitError::UnknownPolarity("X".to_owned()))
        );
    }

    #[test]
    fn test_display() {
        let rvr = Height::new(600.0, HeightUnit::Feet).with_polarity(Polarity::AtMost);
        assert_eq!(format!("{}", rvr), "M600 FT");
        assert_eq!(format!("{}", Speed::new(5.0, SpeedUnit::Knots)), "5 KT");
    }

    #[test]
    fn test_metfor_interop() {
        let t: metfor::Celsius = Temperature::new(-2.0, TemperatureUnit::Celsius).into();
        assert_eq!(t, metfor::Celsius(-2.0));

        let kts: metfor::Knots = Speed::new(18.52, SpeedUnit::KilometersPerHour).into();
        assert!(approx_equal(kts.0, 10.0, 1.0e-9));

        let hpa: metfor::HectoPascal = Pressure::new(1013.0, PressureUnit::Millibar).into();
        assert!(approx_equal(hpa.0, 1013.0, 1.0e-9));

        let vis: metfor::StatuteMiles = Visibility::new(0.5, VisibilityUnit::StatuteMiles).into();
        assert!(approx_equal(vis.0, 0.5, 1.0e-9));

        let hgt: metfor::Feet = Height::new(3000.0, HeightUnit::Feet).into();
        assert!(approx_equal(hgt.0, 3000.0, 1.0e-9));
    }
}
