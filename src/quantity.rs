//! Quantity predicates and parsing of typed amounts

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{config::Policies, error::AmountError};

/// Units that mean "as needed" (quantité suffisante)
///
/// Compared trimmed and case insensitive.
pub const AS_NEEDED_UNITS: [&str; 4] = ["qs", "q.s", "q.s.", "quantité suffisante"];

/// Check if a unit is the "as needed" marker with the default synonyms
///
/// ```
/// # use recipe_scale::quantity::is_as_needed;
/// assert!(is_as_needed(Some(" Q.S. ")));
/// assert!(is_as_needed(Some("Quantité suffisante")));
/// assert!(!is_as_needed(Some("g")));
/// assert!(!is_as_needed(None));
/// ```
pub fn is_as_needed(unit: Option<&str>) -> bool {
    unit.is_some_and(|u| {
        let u = normalize_unit(u);
        AS_NEEDED_UNITS.contains(&u.as_str())
    })
}

/// Set of "as needed" synonyms
///
/// Always contains [`AS_NEEDED_UNITS`], more can be added but never removed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AsNeededUnits {
    extra: Vec<String>,
}

impl From<Vec<String>> for AsNeededUnits {
    fn from(extra: Vec<String>) -> Self {
        Self::with_extra(extra)
    }
}

impl From<AsNeededUnits> for Vec<String> {
    fn from(units: AsNeededUnits) -> Self {
        units.extra
    }
}

impl AsNeededUnits {
    /// Only the default synonyms
    pub fn new() -> Self {
        Self::default()
    }

    /// Default synonyms plus `extra`
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = Self::new();
        for unit in extra {
            set.add(unit.as_ref());
        }
        set
    }

    /// Add a synonym
    ///
    /// Blank text and already known synonyms are ignored.
    pub fn add(&mut self, unit: &str) {
        let unit = normalize_unit(unit);
        if unit.is_empty() || self.contains_normalized(&unit) {
            return;
        }
        self.extra.push(unit);
    }

    /// Check if `unit` is one of the synonyms
    pub fn matches(&self, unit: Option<&str>) -> bool {
        unit.is_some_and(|u| self.contains_normalized(&normalize_unit(u)))
    }

    /// Iterate over all the synonyms, defaults first
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        AS_NEEDED_UNITS
            .iter()
            .copied()
            .chain(self.extra.iter().map(String::as_str))
    }

    fn contains_normalized(&self, unit: &str) -> bool {
        AS_NEEDED_UNITS.contains(&unit) || self.extra.iter().any(|u| u == unit)
    }
}

fn normalize_unit(unit: &str) -> String {
    unit.trim().to_lowercase()
}

/// A number, optionally followed by a unit made of letters
static AMOUNT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<number>[+-]?(?:\d+(?:\.\d*)?|\.\d+)(?:[eE][+-]?\d+)?)\s*(?:\p{L}[\p{L}.]*)?$")
        .expect("valid amount regex")
});

/// Parse an amount typed by the user
///
/// Whitespace around is ignored, a decimal comma is accepted and so is a
/// trailing unit. Anything else, like digit grouping or mixed separators,
/// is rejected.
///
/// ```
/// # use recipe_scale::quantity::parse_amount;
/// assert_eq!(parse_amount("750").unwrap(), 750.0);
/// assert_eq!(parse_amount(" 1,5 ").unwrap(), 1.5);
/// assert_eq!(parse_amount("750 g").unwrap(), 750.0);
/// assert!(parse_amount("").is_err());
/// assert!(parse_amount("abc").is_err());
/// assert!(parse_amount("1 000").is_err());
/// ```
pub fn parse_amount(text: &str) -> Result<f64, AmountError> {
    parse_amount_with(text, Policies::default())
}

pub(crate) fn parse_amount_with(text: &str, policies: Policies) -> Result<f64, AmountError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AmountError::Empty);
    }
    let text = if policies.contains(Policies::DECIMAL_COMMA) {
        std::borrow::Cow::Owned(text.replace(',', "."))
    } else {
        std::borrow::Cow::Borrowed(text)
    };
    let Some(m) = AMOUNT.captures(&text).and_then(|c| c.name("number")) else {
        return Err(AmountError::NotANumber(text.to_string()));
    };
    let value: f64 = m
        .as_str()
        .parse()
        .map_err(|_| AmountError::NotANumber(m.as_str().to_string()))?;
    if !value.is_finite() {
        return Err(AmountError::NotFinite);
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("qs" => true; "lowercase")]
    #[test_case("QS" => true; "uppercase")]
    #[test_case("q.s" => true; "dotted")]
    #[test_case("Q.S." => true; "dotted twice")]
    #[test_case("  qs  " => true; "padded")]
    #[test_case("quantité suffisante" => true; "long form")]
    #[test_case("QUANTITÉ SUFFISANTE" => true; "long form uppercase")]
    #[test_case("qs." => false; "trailing dot only")]
    #[test_case("g" => false; "grams")]
    #[test_case("" => false; "empty unit")]
    fn as_needed(unit: &str) -> bool {
        is_as_needed(Some(unit))
    }

    #[test]
    fn extra_synonyms() {
        let set = AsNeededUnits::with_extra(["À discrétion", "qs", " "]);
        assert!(set.matches(Some("à discrétion")));
        assert!(set.matches(Some("Q.S")));
        assert!(!set.matches(Some("pincée")));
        assert_eq!(set.iter().count(), 5);
    }

    #[test_case("750" => Ok(750.0); "integer")]
    #[test_case("0.5" => Ok(0.5); "decimal")]
    #[test_case(".5" => Ok(0.5); "leading dot")]
    #[test_case("12." => Ok(12.0); "trailing dot")]
    #[test_case("2,25" => Ok(2.25); "decimal comma")]
    #[test_case("1e3" => Ok(1000.0); "exponent")]
    #[test_case("-4" => Ok(-4.0); "negative")]
    #[test_case("300g" => Ok(300.0); "unit suffix")]
    #[test_case("" => Err(AmountError::Empty); "empty")]
    #[test_case("   " => Err(AmountError::Empty); "blank")]
    #[test_case("1e999" => Err(AmountError::NotFinite); "overflow")]
    #[test_case("750 g" => Ok(750.0); "spaced unit")]
    #[test_case("125," => Ok(125.0); "half typed decimal")]
    #[test_case("g300" => Err(AmountError::NotANumber("g300".into())); "unit prefix")]
    #[test_case("1 000" => Err(AmountError::NotANumber("1 000".into())); "digit grouping")]
    #[test_case("1.234,5" => Err(AmountError::NotANumber("1.234.5".into())); "mixed separators")]
    #[test_case("12 3 g" => Err(AmountError::NotANumber("12 3 g".into())); "embedded space")]
    #[test_case("1/2" => Err(AmountError::NotANumber("1/2".into())); "fraction")]
    fn amounts(text: &str) -> Result<f64, AmountError> {
        parse_amount(text)
    }

    #[test]
    fn decimal_comma_disabled() {
        assert_eq!(
            parse_amount_with("1,5", Policies::empty()),
            Err(AmountError::NotANumber("1,5".into()))
        );
        assert_eq!(parse_amount_with("1.5", Policies::empty()), Ok(1.5));
    }
}
