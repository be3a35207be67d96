//! Surface values from a report in the `metfor` types, ready for calculations.
use crate::report::Report;
use metfor::{Celsius, HectoPascal, Knots, StatuteMiles, WindSpdDir};
use optional::Optioned;

/// The surface observation from a report as `metfor` quantities.
///
/// Missing values are `none`. Light and variable wind has no direction, so it is also `none` here
/// even though the report has a wind group.
///
/// # Examples
///
/// ```rust
/// use metar_decoder::SurfaceRow;
/// # use metar_decoder::doctest::make_test_report;
/// use metfor::{Celsius, HectoPascal};
///
/// let rpt = make_test_report();
/// let row = SurfaceRow::from(&rpt);
///
/// assert_eq!(row.temperature.into_option(), Some(Celsius(1.0)));
/// assert_eq!(row.dew_point.into_option(), Some(Celsius(-2.0)));
/// assert!((row.altimeter.unwrap().0 - 1026.4).abs() < 0.1);
/// assert_eq!(row.wind.unwrap().direction, 0.0);
/// ```
#[derive(Clone, Default, Copy, Debug, PartialEq)]
pub struct SurfaceRow {
    /// Temperature.
    pub temperature: Optioned<Celsius>,
    /// Dew point.
    pub dew_point: Optioned<Celsius>,
    /// Wind speed and direction.
    pub wind: Optioned<WindSpdDir<Knots>>,
    /// Altimeter setting.
    pub altimeter: Optioned<HectoPascal>,
    /// Prevailing visibility.
    pub visibility: Optioned<StatuteMiles>,
}

impl From<&Report> for SurfaceRow {
    fn from(rpt: &Report) -> Self {
        SurfaceRow {
            temperature: rpt.temperature().map(Celsius::from).into(),
            dew_point: rpt.dew_point().map(Celsius::from).into(),
            wind: rpt.wind().and_then(|wind| wind.to_spd_dir()).into(),
            altimeter: rpt.altimeter().map(HectoPascal::from).into(),
            visibility: rpt.visibility().map(StatuteMiles::from).into(),
        }
    }
}

impl Report {
    /// The surface values of this report in `metfor` types.
    #[inline]
    pub fn surface_row(&self) -> SurfaceRow {
        SurfaceRow::from(self)
    }
}
