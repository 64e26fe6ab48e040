//! Builder for constructing fare machines.

use crate::builder::error::BuildError;
use crate::card::{Card, IcCard};
use crate::fare::{Amount, FareTable};
use crate::settlement::FareMachine;
use std::collections::BTreeMap;
use std::marker::PhantomData;
use uuid::Uuid;

/// Builder for constructing fare machines with a fluent API.
///
/// Fares may come from a ready-made [`FareTable`], individual entries, or
/// both; everything is validated together in [`build`](Self::build).
pub struct FareMachineBuilder<C = IcCard> {
    id: Option<Uuid>,
    table: Option<FareTable>,
    entries: Vec<(String, Amount)>,
    _phantom: PhantomData<fn() -> C>,
}

impl<C: Card> FareMachineBuilder<C> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            id: None,
            table: None,
            entries: Vec::new(),
            _phantom: PhantomData,
        }
    }

    /// Set the terminal identifier (optional, random by default).
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = Some(id);
        self
    }

    /// Start from an existing fare table.
    pub fn fare_table(mut self, table: FareTable) -> Self {
        self.table = Some(table);
        self
    }

    /// Add one station fare.
    pub fn fare(mut self, station: impl Into<String>, fare: Amount) -> Self {
        self.entries.push((station.into(), fare));
        self
    }

    /// Add several station fares at once.
    pub fn fares<I, K>(mut self, fares: I) -> Self
    where
        I: IntoIterator<Item = (K, Amount)>,
        K: Into<String>,
    {
        self.entries
            .extend(fares.into_iter().map(|(station, fare)| (station.into(), fare)));
        self
    }

    /// Build the machine.
    /// Returns an error if no fares were given or any entry is invalid.
    pub fn build(self) -> Result<FareMachine<C>, BuildError> {
        let fares = match (self.table, self.entries.is_empty()) {
            (None, true) => return Err(BuildError::MissingFares),
            (Some(table), true) => table,
            (table, false) => {
                let base: BTreeMap<String, Amount> = table.map(Into::into).unwrap_or_default();
                FareTable::new(base.into_iter().chain(self.entries))?
            }
        };

        Ok(match self.id {
            Some(id) => FareMachine::with_id(id, fares),
            None => FareMachine::new(fares),
        })
    }
}

impl<C: Card> Default for FareMachineBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fare::FareViolation;

    #[test]
    fn builder_requires_fares() {
        let result = FareMachineBuilder::<IcCard>::new().build();
        assert!(matches!(result, Err(BuildError::MissingFares)));
    }

    #[test]
    fn fluent_api_builds_machine() {
        let id = Uuid::new_v4();
        let machine: FareMachine = FareMachine::builder()
            .id(id)
            .fare("A", 180)
            .fares([("B", 200), ("C", 220)])
            .build()
            .unwrap();

        assert_eq!(machine.id(), id);
        assert_eq!(machine.fares().len(), 3);
        assert_eq!(machine.fares().fare_for("C"), Some(220));
        assert!(!machine.is_settling());
    }

    #[test]
    fn table_and_entries_are_merged() {
        let table = FareTable::new([("A", 180)]).unwrap();
        let machine: FareMachine = FareMachine::builder()
            .fare_table(table)
            .fare("B", 200)
            .build()
            .unwrap();

        assert_eq!(machine.fares().fare_for("A"), Some(180));
        assert_eq!(machine.fares().fare_for("B"), Some(200));
    }

    #[test]
    fn entry_repeating_table_station_is_rejected() {
        let table = FareTable::new([("A", 180)]).unwrap();
        let result = FareMachineBuilder::<IcCard>::new()
            .fare_table(table)
            .fare("A", 190)
            .build();

        match result {
            Err(BuildError::InvalidFares(err)) => assert_eq!(
                err.violations(),
                &[FareViolation::DuplicateStation {
                    station: "A".to_string()
                }]
            ),
            other => panic!("Expected InvalidFares, got {other:?}"),
        }
    }

    #[test]
    fn invalid_entries_are_all_reported() {
        let result = FareMachineBuilder::<IcCard>::new()
            .fare("", 100)
            .fare("B", -1)
            .build();

        match result {
            Err(BuildError::InvalidFares(err)) => assert_eq!(err.violations().len(), 2),
            other => panic!("Expected InvalidFares, got {other:?}"),
        }
    }
}
