use crate::units::Height;

/// The visual range along a runway, in feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum VisualRange {
    /// A single value, possibly reported as more than (`P`) or less than (`M`) the distance.
    Single(Height),
    /// A variable range. The ends are kept in the order they were coded.
    Variable {
        /// First value coded, usually the lower.
        low: Height,
        /// Second value coded, usually the higher.
        high: Height,
    },
}

/// How far down a runway the lights can be seen.
#[derive(Debug, Clone, PartialEq)]
pub struct RunwayVisualRange {
    pub(crate) runway: String,
    pub(crate) range: VisualRange,
}

impl RunwayVisualRange {
    /// Runway designator, two digits and an optional `L`, `C`, or `R`.
    #[inline]
    pub fn runway(&self) -> &str {
        &self.runway
    }

    /// The reported range.
    #[inline]
    pub fn range(&self) -> VisualRange {
        self.range
    }

    /// Is the visual range variable?
    #[inline]
    pub fn is_variable(&self) -> bool {
        matches!(self.range, VisualRange::Variable { .. })
    }
}
