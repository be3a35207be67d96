use crate::units::{Angle, AngleUnit, Speed};
use metfor::{Knots, WindSpdDir};

/// Where the wind is blowing from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WindDirection {
    /// Light and variable, coded as `VRB`.
    Variable,
    /// A fixed direction, degrees clockwise from true north.
    From(Angle),
}

/// Surface wind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Wind {
    pub(crate) speed: Speed,
    pub(crate) direction: WindDirection,
    pub(crate) gust: Option<Speed>,
    pub(crate) variable_range: Option<(Angle, Angle)>,
}

impl Wind {
    /// Sustained wind speed.
    #[inline]
    pub fn speed(&self) -> Speed {
        self.speed
    }

    /// Wind direction, or the variable marker.
    #[inline]
    pub fn direction(&self) -> WindDirection {
        self.direction
    }

    /// Peak gust speed, in the same unit as the sustained speed.
    #[inline]
    pub fn gust(&self) -> Option<Speed> {
        self.gust
    }

    /// If the wind is strong and variable, the limits of the direction range in ascending order.
    ///
    /// Only present when the direction is a fixed angle.
    #[inline]
    pub fn variable_range(&self) -> Option<(Angle, Angle)> {
        self.variable_range
    }

    /// Is the wind calm?
    #[inline]
    pub fn is_calm(&self) -> bool {
        self.speed.magnitude() == 0.0
    }

    /// Is the wind light and variable or strong and variable?
    ///
    /// # Examples
    ///
    /// ```rust
    /// use metar_decoder::decode_at;
    /// # use metar_decoder::doctest::reference_time;
    ///
    /// let rpt = decode_at("KLRU 241517Z VRB02KT", reference_time()).unwrap();
    /// assert!(rpt.wind().unwrap().is_variable());
    ///
    /// let rpt = decode_at("KLRU 241517Z 21010KT 100V240", reference_time()).unwrap();
    /// assert!(rpt.wind().unwrap().is_variable());
    ///
    /// let rpt = decode_at("KLRU 241517Z 21010KT", reference_time()).unwrap();
    /// assert!(!rpt.wind().unwrap().is_variable());
    /// ```
    #[inline]
    pub fn is_variable(&self) -> bool {
        self.variable_range.is_some() || self.direction == WindDirection::Variable
    }

    /// Convert to the speed and direction type used by `metfor`. Light and variable wind has no
    /// direction, so it returns `None`.
    pub fn to_spd_dir(&self) -> Option<WindSpdDir<Knots>> {
        match self.direction {
            WindDirection::Variable => None,
            WindDirection::From(dir) => Some(WindSpdDir {
                speed: Knots::from(self.speed),
                direction: dir.in_unit(AngleUnit::Degrees),
            }),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::units::SpeedUnit;

    fn wind(speed: f64, direction: WindDirection) -> Wind {
        Wind {
            speed: Speed::new(speed, SpeedUnit::Knots),
            direction,
            gust: None,
            variable_range: None,
        }
    }

    #[test]
    fn test_calm() {
        let dir = WindDirection::From(Angle::new(0.0, AngleUnit::Degrees));
        assert!(wind(0.0, dir).is_calm());
        assert!(!wind(3.0, dir).is_calm());
        assert!(!wind(0.0, dir).is_variable());
    }

    #[test]
    fn test_to_spd_dir() {
        let w = Wind {
            speed: Speed::new(10.0, SpeedUnit::MetersPerSecond),
            ..wind(0.0, WindDirection::From(Angle::new(270.0, AngleUnit::Degrees)))
        };

        let spd_dir = w.to_spd_dir().unwrap();
        assert!((spd_dir.speed.0 - 19.438_444_9).abs() < 1.0e-6);
        assert_eq!(spd_dir.direction, 270.0);

        assert!(wind(3.0, WindDirection::Variable).to_spd_dir().is_none());
    }
}
