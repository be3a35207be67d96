use crate::units::Height;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Clear sky markers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum ClearSky {
    /// Sky clear, only reported by a human observer.
    #[strum(serialize = "SKC")]
    Skc,
    /// Clear below 12,000 feet, reported by automated equipment which can't see any higher.
    #[strum(serialize = "CLR")]
    Clr,
}

/// Amount of sky covered by a layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum Cover {
    /// 1/8 to 2/8 of the sky.
    #[strum(serialize = "FEW")]
    Few,
    /// 3/8 to 4/8 of the sky.
    #[strum(serialize = "SCT")]
    Scattered,
    /// 5/8 to 7/8 of the sky.
    #[strum(serialize = "BKN")]
    Broken,
    /// The whole sky.
    #[strum(serialize = "OVC")]
    Overcast,
    /// Sky obscured, the height is the vertical visibility into the obscuration.
    #[strum(serialize = "VV")]
    VerticalVisibility,
}

/// Significant convective clouds, only reported by a human observer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, IntoStaticStr, EnumIter)]
pub enum CloudType {
    /// Cumulonimbus.
    #[strum(serialize = "CB")]
    Cumulonimbus,
    /// Towering cumulus.
    #[strum(serialize = "TCU")]
    ToweringCumulus,
}

/// One sky condition group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SkyLayer {
    /// No clouds, `SKC` or `CLR`.
    Clear(ClearSky),
    /// A layer of cloud or an obscured sky.
    Layer {
        /// How much of the sky is covered.
        cover: Cover,
        /// Height of the base above ground, in feet. `None` when coded as `///`.
        height: Option<Height>,
        /// Convective cloud type, if reported.
        cloud_type: Option<CloudType>,
    },
}

impl SkyLayer {
    /// Is this `SKC`?
    #[inline]
    pub fn is_skc(&self) -> bool {
        *self == SkyLayer::Clear(ClearSky::Skc)
    }

    /// Is this `CLR`?
    #[inline]
    pub fn is_clr(&self) -> bool {
        *self == SkyLayer::Clear(ClearSky::Clr)
    }

    /// Are there cumulonimbus clouds in this layer?
    #[inline]
    pub fn is_cb(&self) -> bool {
        self.cloud_type() == Some(CloudType::Cumulonimbus)
    }

    /// Are there towering cumulus clouds in this layer?
    #[inline]
    pub fn is_tcu(&self) -> bool {
        self.cloud_type() == Some(CloudType::ToweringCumulus)
    }

    /// Is this a vertical visibility into an obscured sky? Observers can't tell what is above this
    /// height.
    #[inline]
    pub fn is_vv(&self) -> bool {
        self.cover() == Some(Cover::VerticalVisibility)
    }

    /// The cover, `None` for a clear sky.
    #[inline]
    pub fn cover(&self) -> Option<Cover> {
        match self {
            SkyLayer::Clear(_) => None,
            SkyLayer::Layer { cover, .. } => Some(*cover),
        }
    }

    /// Height of the layer base, `None` for a clear sky or an unknown height.
    #[inline]
    pub fn height(&self) -> Option<Height> {
        match self {
            SkyLayer::Clear(_) => None,
            SkyLayer::Layer { height, .. } => *height,
        }
    }

    /// Convective cloud type.
    #[inline]
    pub fn cloud_type(&self) -> Option<CloudType> {
        match self {
            SkyLayer::Clear(_) => None,
            SkyLayer::Layer { cloud_type, .. } => *cloud_type,
        }
    }
}
