//! Small helpers shared across modules.

/// Compare two floating point values to within `eps`.
#[inline]
pub(crate) fn approx_equal(val1: f64, val2: f64, eps: f64) -> bool {
    debug_assert!(eps > 0.0);

    (val1 - val2).abs() <= eps
}


#[cfg(test)]
mod test {
    use super::test_tools::*;

    #[test]
    fn test_approx_equal() {
        assert!(approx_equal(1.0, 1.0 + 1.0e-12, 1.0e-10));
        assert!(!approx_equal(1.0, 1.1, 1.0e-10));
        assert!(approx_equal(-30.31, -30.31, 1.0e-10));
    }
}
