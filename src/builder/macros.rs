//! Macros for ergonomic fare table construction.

/// Build a validated [`FareTable`](crate::fare::FareTable) from
/// `station => fare` pairs.
///
/// Expands to a `Result<FareTable, FareTableError>`.
///
/// # Example
///
/// ```
/// use fare_adjust::fares;
///
/// let table = fares! {
///     "A" => 180,
///     "B" => 200,
/// }
/// .unwrap();
///
/// assert_eq!(table.fare_for("B"), Some(200));
/// ```
#[macro_export]
macro_rules! fares {
    () => {
        $crate::fare::FareTable::new(
            ::std::iter::empty::<(::std::string::String, $crate::fare::Amount)>(),
        )
    };
    ($($station:expr => $fare:expr),+ $(,)?) => {
        $crate::fare::FareTable::new([$(($station, $fare)),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::fare::FareViolation;

    #[test]
    fn fares_macro_builds_table() {
        let table = fares! { "A" => 180, "B" => 200 }.unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.fare_for("A"), Some(180));
    }

    #[test]
    fn fares_macro_accepts_expressions() {
        let base = 150;
        let station = String::from("C");
        let table = fares! { station => base + 30 }.unwrap();
        assert_eq!(table.fare_for("C"), Some(180));
    }

    #[test]
    fn fares_macro_validates() {
        let err = fares! { "A" => 1, "A" => 2 }.unwrap_err();
        assert!(matches!(
            err.violations(),
            [FareViolation::DuplicateStation { .. }]
        ));
    }

    #[test]
    fn empty_fares_macro_is_empty_table() {
        assert!(fares! {}.unwrap().is_empty());
    }
}
