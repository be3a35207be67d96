//! Remarks. Everything after `RMK` is kept as text, nothing in it is decoded.
use super::Matched;
use crate::error::Result;
use itertools::Itertools;

/// If the current group is `RMK`, join every remaining group with single spaces. This always
/// consumes the rest of the report.
pub fn parse(groups: &[&str], cursor: usize) -> Result<Matched<String>> {
    match groups.get(cursor) {
        Some(&"RMK") => {
            let remarks = groups[cursor + 1..].iter().join(" ");
            Ok(Some((remarks, groups.len())))
        }
        _ => Ok(None),
    }
}
