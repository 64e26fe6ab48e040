//! Validation of fare table entries.
//!
//! Uses Stillwater's `Validation` so that a bad table reports every
//! broken entry at once rather than stopping at the first.

use super::error::FareViolation;
use super::Amount;
use std::collections::HashSet;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of a single entry check.
pub type FareCheck = Validation<(), NonEmptyVec<FareViolation>>;

fn check_station(station: &str) -> FareCheck {
    if station.is_empty() {
        Validation::fail(FareViolation::EmptyStation)
    } else if station.trim() != station {
        Validation::fail(FareViolation::UntrimmedStation {
            station: station.to_string(),
        })
    } else {
        Validation::success(())
    }
}

fn check_fare(station: &str, fare: Amount) -> FareCheck {
    if fare < 0 {
        Validation::fail(FareViolation::NegativeFare {
            station: station.to_string(),
            fare,
        })
    } else {
        Validation::success(())
    }
}

/// Validate every entry, accumulating ALL violations.
pub fn validate_entries<'a, I>(entries: I) -> FareCheck
where
    I: IntoIterator<Item = (&'a str, Amount)>,
{
    let mut seen = HashSet::new();
    let mut checks = Vec::new();

    for (station, fare) in entries {
        checks.push(check_station(station));
        checks.push(check_fare(station, fare));

        if !seen.insert(station) {
            checks.push(Validation::fail(FareViolation::DuplicateStation {
                station: station.to_string(),
            }));
        }
    }

    Validation::all_vec(checks).map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_entries_pass() {
        let result = validate_entries([("A", 180), ("B", 0)]);
        assert!(result.is_success());
    }

    #[test]
    fn empty_input_passes() {
        assert!(validate_entries(std::iter::empty()).is_success());
    }

    #[test]
    fn accumulates_all_violations() {
        let result = validate_entries([("", 100), (" C", -5), ("A", 180), ("A", 200)]);

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 4);
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, FareViolation::EmptyStation)));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, FareViolation::UntrimmedStation { .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, FareViolation::NegativeFare { fare: -5, .. })));
                assert!(errors
                    .iter()
                    .any(|e| matches!(e, FareViolation::DuplicateStation { station } if station == "A")));
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn zero_fare_is_allowed() {
        assert!(check_fare("A", 0).is_success());
        assert!(check_fare("A", -1).is_failure());
    }
}
