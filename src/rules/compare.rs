//! Comparisons for any ordered value: numbers, decimals, dates, times.

use crate::core::Rule;

/// Passes when the value is present and equal to `expected`.
pub fn eq<V>(expected: V, message: impl Into<String>) -> Rule<V>
where
    V: PartialEq + Send + Sync + 'static,
{
    Rule::predicate(move |value| value == Some(&expected), message)
}

/// Passes when the value is absent or not less than `min`.
pub fn min<V>(min: V, message: impl Into<String>) -> Rule<V>
where
    V: PartialOrd + Send + Sync + 'static,
{
    Rule::predicate(move |value| value.map_or(true, |v| *v >= min), message)
}

/// Passes when the value is absent or not greater than `max`.
pub fn max<V>(max: V, message: impl Into<String>) -> Rule<V>
where
    V: PartialOrd + Send + Sync + 'static,
{
    Rule::predicate(move |value| value.map_or(true, |v| *v <= max), message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveTime};

    #[test]
    fn eq_fails_on_absent_value() {
        let rule = eq(10_i64, "must be ten");

        assert!(rule.check(Some(&10)).is_valid());
        assert!(rule.check(Some(&11)).is_invalid());
        assert!(rule.check(None).is_invalid());
    }

    #[test]
    fn min_and_max_are_inclusive() {
        let at_least = min(18_i32, "too young");
        let at_most = max(65_i32, "too old");

        assert!(at_least.check(Some(&18)).is_valid());
        assert!(at_least.check(Some(&17)).is_invalid());
        assert!(at_most.check(Some(&65)).is_valid());
        assert!(at_most.check(Some(&66)).is_invalid());
    }

    #[test]
    fn bounds_skip_absent_values() {
        assert!(min(1.5_f64, "min").check(None).is_valid());
        assert!(max(1.5_f64, "max").check(None).is_valid());
    }

    #[test]
    fn nan_never_satisfies_bounds() {
        assert!(min(0.0_f64, "min").check(Some(&f64::NAN)).is_invalid());
        assert!(max(0.0_f64, "max").check(Some(&f64::NAN)).is_invalid());
    }

    #[test]
    fn dates_compare_chronologically() {
        let cutoff = NaiveDate::from_ymd_opt(2000, 1, 1).unwrap();
        let rule = max(cutoff, "Invalid date");

        let before = NaiveDate::from_ymd_opt(1999, 12, 31);
        let after = NaiveDate::from_ymd_opt(2000, 1, 2);

        assert!(rule.check(before.as_ref()).is_valid());
        assert!(rule.check(Some(&cutoff)).is_valid());
        assert!(rule.check(after.as_ref()).is_invalid());
    }

    #[test]
    fn times_compare_chronologically() {
        let opening = NaiveTime::from_hms_opt(9, 0, 0).unwrap();
        let rule = min(opening, "closed");

        let open = NaiveTime::from_hms_opt(9, 30, 0);
        let early = NaiveTime::from_hms_opt(8, 59, 59);

        assert!(rule.check(open.as_ref()).is_valid());
        assert!(rule.check(early.as_ref()).is_invalid());
    }
}
