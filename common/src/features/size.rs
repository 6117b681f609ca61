//! Size extraction from free-text titles.
//!
//! Looks for the leftmost `<number>[.<digits>] <unit>` in the lowercased title,
//! where unit is one of `inch`, `ft`, `cm`, `m`. Whitespace between the number
//! and the unit is optional and the unit needs no word boundary after it, so
//! "72 inches" reads as inches and "5mm" reads as meters.

use crate::model::feature_record::SizeFeature;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Inch,
    Ft,
    Cm,
    M,
}

impl Unit {
    /// Tried in this order after each number.
    const ALL: [Unit; 4] = [Unit::Inch, Unit::Ft, Unit::Cm, Unit::M];

    pub fn token(self) -> &'static str {
        match self {
            Unit::Inch => "inch",
            Unit::Ft => "ft",
            Unit::Cm => "cm",
            Unit::M => "m",
        }
    }

    pub fn to_inches(self, value: f64) -> f64 {
        match self {
            Unit::Inch => value,
            Unit::Ft => value * 12.0,
            Unit::Cm => value / 2.54,
            Unit::M => value * 39.37,
        }
    }
}

/// A size mention found in a title.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeMatch {
    pub value: f64,
    pub unit: Unit,
}

/// Returns the first size mention in `title`, if any.
pub fn find_size(title: &str) -> Option<SizeMatch> {
    let lowered = title.to_lowercase();
    let bytes = lowered.as_bytes();
    (0..bytes.len())
        .filter(|&i| bytes[i].is_ascii_digit())
        .find_map(|i| match_at(&lowered, i))
}

/// Size of the item in inches, or `Missing` when the title names none.
pub fn size_feature(title: &str) -> SizeFeature {
    find_size(title)
        .map(|m| SizeFeature::from(Some(m.unit.to_inches(m.value))))
        .unwrap_or(SizeFeature::Missing)
}

// `start` must be the byte index of an ASCII digit.
fn match_at(s: &str, start: usize) -> Option<SizeMatch> {
    let bytes = s.as_bytes();
    let mut end = digits_end(bytes, start);
    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_end(bytes, end + 1);
        if frac_end > end + 1 {
            end = frac_end;
        }
    }

    let rest = s[end..].trim_start();
    let unit = Unit::ALL
        .iter()
        .copied()
        .find(|u| rest.starts_with(u.token()))?;
    let value = s[start..end].parse::<f64>().ok()?;
    Some(SizeMatch { value, unit })
}

fn digits_end(bytes: &[u8], from: usize) -> usize {
    bytes[from..]
        .iter()
        .position(|b| !b.is_ascii_digit())
        .map_or(bytes.len(), |p| from + p)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn inches(title: &str) -> f64 {
        size_feature(title)
            .inches()
            .unwrap_or_else(|| panic!("no size found in {:?}", title))
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn converts_each_unit() {
        assert_eq!(inches("72 inch sofa"), 72.0);
        assert_eq!(inches("6 ft dining table"), 72.0);
        assert!(close(inches("100 cm bench"), 100.0 / 2.54));
        assert!(close(inches("2 m bookshelf"), 78.74));
    }

    #[test]
    fn missing_when_no_size_token() {
        assert!(size_feature("mid century lounge chair").is_missing());
        assert!(size_feature("").is_missing());
        assert!(size_feature("set of 4 chairs").is_missing());
    }

    #[test]
    fn case_insensitive_and_whitespace_optional() {
        assert_eq!(inches("Sofa 80INCH"), 80.0);
        assert_eq!(inches("Sofa 80   Inch"), 80.0);
        assert!(close(inches("Desk 120CM"), 120.0 / 2.54));
    }

    #[test]
    fn decimals_are_kept() {
        assert_eq!(inches("1.5 ft stool"), 18.0);
        assert!(close(inches("45.72cm ottoman"), 18.0));
    }

    #[test]
    fn unit_needs_no_word_boundary() {
        assert_eq!(inches("72 inches wide"), 72.0);
        assert!(close(inches("3 meters long"), 3.0 * 39.37));
        assert!(close(inches("5mm glass top"), 5.0 * 39.37));
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(inches("6 ft x 100 cm table"), 72.0);
    }

    #[test]
    fn numbers_without_units_are_skipped() {
        assert!(close(inches("set of 2, 45 cm stools"), 45.0 / 2.54));
        assert!(close(inches("10 x 20 cm tray"), 20.0 / 2.54));
    }

    #[test]
    fn dangling_decimal_point_does_not_match() {
        assert!(size_feature("size 12. cm").is_missing());
        assert!(close(inches("v1.2.5cm"), 2.5 / 2.54));
    }

    #[test]
    fn reports_the_matched_unit() {
        let m = find_size("a 30 inch nightstand").unwrap();
        assert_eq!(m.unit, Unit::Inch);
        assert_eq!(m.value, 30.0);
    }

    #[test]
    fn non_ascii_text_around_the_size() {
        assert_eq!(inches("Canapé 72 inch – velours"), 72.0);
    }
}
