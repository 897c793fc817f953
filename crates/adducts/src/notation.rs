//! Lenient parsing of adduct notation such as `[M+H]+`, `[2M+Na]+`, or `[M+2H]2+`
//!
//! Neither function here can fail: anything that doesn't spell out a charge or multimer is taken to mean 1.

// Standard Library Imports
use std::{num::NonZeroU32, sync::LazyLock};

// External Crate Imports
use regex::{Captures, Regex};

// Local Crate Imports
use crate::{Charge, Multimer};

// Public API ==========================================================================================================

#[must_use]
pub fn parse(label: &str) -> (Charge, Multimer) {
    (charge(label), multimer(label))
}

/// Reads the charge from the trailing `2+` / `+` / `-]` of a label
#[must_use]
pub fn charge(label: &str) -> Charge {
    Charge(count_or_one(CHARGE_RE.captures(label)))
}

/// Reads the multimer from the leading `[2M` / `[M` of a label
#[must_use]
pub fn multimer(label: &str) -> Multimer {
    Multimer(count_or_one(MULTIMER_RE.captures(label)))
}

/// Whether both the charge and multimer of `label` can be read without falling back to defaults
#[must_use]
pub fn recognizes(label: &str) -> bool {
    CHARGE_RE.is_match(label) && MULTIMER_RE.is_match(label)
}

// Private Helper Code =================================================================================================

// NOTE: Accepts the Unicode minus sign (U+2212) as well as the ASCII hyphen
static CHARGE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"([0-9]*)[+\-−]\]?$").unwrap());
static MULTIMER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([0-9]*)M").unwrap());

// NOTE: Empty digits, a literal zero, and anything overflowing a `u32` all fail to parse, leaving a count of 1
fn count_or_one(captures: Option<Captures>) -> NonZeroU32 {
    captures
        .and_then(|c| c[1].parse().ok())
        .unwrap_or(NonZeroU32::MIN)
}

// Module Tests ========================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(label: &str) -> (u32, u32) {
        let (charge, multimer) = parse(label);
        (charge.get(), multimer.get())
    }

    #[test]
    fn parse_common_adducts() {
        assert_eq!(counts("[M+H]+"), (1, 1));
        assert_eq!(counts("[2M+Na]+"), (1, 2));
        assert_eq!(counts("[M+2H]2+"), (2, 1));
        assert_eq!(counts("[3M-H]-"), (1, 3));
        assert_eq!(counts("[M+H-H2O]+"), (1, 1));
        assert_eq!(counts("[M-2H]2-"), (2, 1));
        assert_eq!(counts("[2M+3H]3+"), (3, 2));
    }

    #[test]
    fn parse_unicode_minus() {
        assert_eq!(counts("[M-H]−"), (1, 1));
        assert_eq!(counts("[M-3H]3−"), (3, 1));
    }

    #[test]
    fn charge_outside_brackets() {
        // The closing bracket is optional, so charges written inside the brackets are read as well
        assert_eq!(counts("[M+2H2+]"), (2, 1));
        assert_eq!(counts("M+H+"), (1, 1));
    }

    #[test]
    fn malformed_labels_fall_back_to_one() {
        assert_eq!(counts(""), (1, 1));
        assert_eq!(counts("sodium"), (1, 1));
        assert_eq!(counts("[M+H]"), (1, 1));
        assert_eq!(counts("2M+H+"), (1, 1));
        assert_eq!(counts("[0M+H]0+"), (1, 1));
        assert_eq!(counts("[99999999999M+H]99999999999+"), (1, 1));
    }

    #[test]
    fn recognized_labels() {
        assert!(recognizes("[M+H]+"));
        assert!(recognizes("[2M+Na]+"));
        assert!(!recognizes("[M+H]"));
        assert!(!recognizes("M+H+"));
        assert!(!recognizes("sodium"));
    }
}
