//! Present weather. The codes follow the Federal Meteorological Handbook No. 1, chapter 12.
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Intensity or proximity qualifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intensity {
    /// Coded `-`.
    Light,
    /// No qualifier coded.
    Moderate,
    /// Coded `+`.
    Heavy,
    /// Coded `VC`, in the vicinity but not at the station.
    Vicinity,
}

impl Default for Intensity {
    fn default() -> Self {
        Intensity::Moderate
    }
}

/// Descriptor qualifying the phenomena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
#[allow(missing_docs)]
pub enum Descriptor {
    #[strum(serialize = "MI")]
    Shallow,
    #[strum(serialize = "PR")]
    Partial,
    #[strum(serialize = "BC")]
    Patches,
    #[strum(serialize = "DR")]
    LowDrifting,
    #[strum(serialize = "BL")]
    Blowing,
    #[strum(serialize = "SH")]
    Showers,
    #[strum(serialize = "TS")]
    Thunderstorm,
    #[strum(serialize = "FZ")]
    Freezing,
}

/// The sub-alphabets of weather phenomena. A single group only draws from one of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhenomenonClass {
    /// Drizzle, rain, snow, etc.
    Precipitation,
    /// Mist, fog, smoke, haze, etc.
    Obscuration,
    /// Whirls, squalls, funnel clouds, and storms.
    Other,
}

/// A single weather phenomenon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
#[allow(missing_docs)]
pub enum Phenomenon {
    // Precipitation
    #[strum(serialize = "DZ")]
    Drizzle,
    #[strum(serialize = "RA")]
    Rain,
    #[strum(serialize = "SN")]
    Snow,
    #[strum(serialize = "SG")]
    SnowGrains,
    #[strum(serialize = "IC")]
    IceCrystals,
    #[strum(serialize = "PE")]
    IcePellets,
    #[strum(serialize = "GR")]
    Hail,
    #[strum(serialize = "GS")]
    SmallHail,
    #[strum(serialize = "UP")]
    UnknownPrecipitation,

    // Obscuration
    #[strum(serialize = "BR")]
    Mist,
    #[strum(serialize = "FG")]
    Fog,
    #[strum(serialize = "FU")]
    Smoke,
    #[strum(serialize = "VA")]
    VolcanicAsh,
    #[strum(serialize = "DU")]
    Dust,
    #[strum(serialize = "SA")]
    Sand,
    #[strum(serialize = "HZ")]
    Haze,
    #[strum(serialize = "PY")]
    Spray,

    // Other
    #[strum(serialize = "PO")]
    DustWhirls,
    #[strum(serialize = "SQ")]
    Squalls,
    #[strum(serialize = "FC")]
    FunnelCloud,
    #[strum(serialize = "SS")]
    Sandstorm,
    #[strum(serialize = "DS")]
    Duststorm,
}

impl Phenomenon {
    /// Which sub-alphabet this code belongs to.
    pub fn class(self) -> PhenomenonClass {
        use Phenomenon::*;

        match self {
            Drizzle | Rain | Snow | SnowGrains | IceCrystals | IcePellets | Hail | SmallHail
            | UnknownPrecipitation => PhenomenonClass::Precipitation,
            Mist | Fog | Smoke | VolcanicAsh | Dust | Sand | Haze | Spray => {
                PhenomenonClass::Obscuration
            }
            DustWhirls | Squalls | FunnelCloud | Sandstorm | Duststorm => PhenomenonClass::Other,
        }
    }

    /// The two letter code.
    #[inline]
    pub fn code(self) -> &'static str {
        self.into()
    }
}

impl Descriptor {
    /// The two letter code.
    #[inline]
    pub fn code(self) -> &'static str {
        self.into()
    }
}

/// One present weather group, e.g. `-SHRA` or `VCFG`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PresentWeather {
    /// Intensity or proximity, `Moderate` when nothing was coded.
    pub intensity: Intensity,
    /// The descriptor, e.g. `SH` for showers.
    pub descriptor: Option<Descriptor>,
    /// The phenomena in the order coded. May be empty if there is a descriptor, e.g. `VCTS`.
    pub phenomena: Vec<Phenomenon>,
}

#[cfg(test)]
mod test {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_codes_are_two_letters() {
        for d in Descriptor::iter() {
            assert_eq!(d.code().len(), 2);
            assert_eq!(Descriptor::from_str(d.code()), Ok(d));
        }

        for p in Phenomenon::iter() {
            assert_eq!(p.code().len(), 2);
            assert_eq!(Phenomenon::from_str(p.code()), Ok(p));
            assert!(Descriptor::from_str(p.code()).is_err());
        }
    }

    #[test]
    fn test_classes() {
        assert_eq!(Phenomenon::Rain.class(), PhenomenonClass::Precipitation);
        assert_eq!(Phenomenon::Fog.class(), PhenomenonClass::Obscuration);
        assert_eq!(Phenomenon::FunnelCloud.class(), PhenomenonClass::Other);

        let counts = Phenomenon::iter().fold((0, 0, 0), |(p, o, x), ph| match ph.class() {
            PhenomenonClass::Precipitation => (p + 1, o, x),
            PhenomenonClass::Obscuration => (p, o + 1, x),
            PhenomenonClass::Other => (p, o, x + 1),
        });
        assert_eq!(counts, (9, 8, 5));
    }

    #[test]
    fn test_default_is_moderate() {
        assert_eq!(PresentWeather::default().intensity, Intensity::Moderate);
    }
}
