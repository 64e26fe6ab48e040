//! The settlement state machine.

use super::outcome::{ChargeError, Receipt, SessionId, StartError, StartOutcome};
use super::session::Session;
use crate::builder::FareMachineBuilder;
use crate::card::{Card, CardHandle, IcCard};
use crate::core::{StateHistory, StateTransition, TerminalState};
use crate::fare::{Amount, FareTable};
use chrono::Utc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Fare settlement terminal.
///
/// Holds an immutable fare table and at most one open [`Session`]. The
/// terminal is settling exactly when a session is open, and an open session
/// always owes a positive shortage.
///
/// # Example
///
/// ```rust
/// use fare_adjust::card::{CardHandle, IcCard};
/// use fare_adjust::fare::FareTable;
/// use fare_adjust::settlement::FareMachine;
///
/// let mut machine = FareMachine::new(FareTable::new([("A", 180)]).unwrap());
/// let card = CardHandle::new(IcCard::new("A", 100));
///
/// assert!(machine.start(&card));
/// assert_eq!(machine.shortage(), 80);
///
/// assert!(!machine.charge(50));
/// assert!(machine.charge(80));
/// assert_eq!(card.balance(), 180);
/// assert!(!machine.is_settling());
/// ```
pub struct FareMachine<C = IcCard> {
    id: Uuid,
    fares: FareTable,
    session: Option<Session<C>>,
    history: StateHistory<TerminalState>,
}

impl<C: Card> FareMachine<C> {
    /// Create an idle terminal with a random identifier.
    pub fn new(fares: FareTable) -> Self {
        Self::with_id(Uuid::new_v4(), fares)
    }

    /// Create an idle terminal with a fixed identifier.
    pub fn with_id(id: Uuid, fares: FareTable) -> Self {
        Self {
            id,
            fares,
            session: None,
            history: StateHistory::new(),
        }
    }

    /// Start a fluent builder.
    pub fn builder() -> FareMachineBuilder<C> {
        FareMachineBuilder::new()
    }

    /// Get terminal identifier (pure)
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Get fare table (pure)
    pub fn fares(&self) -> &FareTable {
        &self.fares
    }

    /// Get current state (pure)
    pub fn state(&self) -> TerminalState {
        if self.session.is_some() {
            TerminalState::Settling
        } else {
            TerminalState::Idle
        }
    }

    /// Check if a session is open (pure)
    pub fn is_settling(&self) -> bool {
        self.session.is_some()
    }

    /// Amount still owed by the active session; zero when idle.
    pub fn shortage(&self) -> Amount {
        self.session.as_ref().map_or(0, Session::shortage)
    }

    /// Get the open session, if any (pure)
    pub fn session(&self) -> Option<&Session<C>> {
        self.session.as_ref()
    }

    /// Get state history (pure)
    pub fn history(&self) -> &StateHistory<TerminalState> {
        &self.history
    }

    /// Present a card. Returns `true` only when a session was opened.
    pub fn start(&mut self, card: &CardHandle<C>) -> bool {
        matches!(self.try_start(card), Ok(StartOutcome::Settling { .. }))
    }

    /// Present a card and report exactly why no session was opened.
    ///
    /// Guards run in order: busy terminal, missing entry record, unknown
    /// station, balance already covering the fare.
    pub fn try_start(&mut self, card: &CardHandle<C>) -> Result<StartOutcome, StartError> {
        if let Some(session) = &self.session {
            debug!(terminal = %self.id, session = %session.id, "start rejected: terminal busy");
            return Err(StartError::Busy {
                session: session.id,
                same_card: session.card.points_to(card),
            });
        }

        // Idle from here on; every rejection below leaves it idle.
        let (station, balance) = {
            let card = card.lock();
            (card.entry_station().to_string(), card.balance())
        };

        if station.is_empty() {
            debug!(terminal = %self.id, "start rejected: card has no entry record");
            return Err(StartError::MissingEntry);
        }

        let Some(fare) = self.fares.fare_for(&station) else {
            debug!(terminal = %self.id, station = %station, "start rejected: unknown station");
            return Err(StartError::UnknownStation { station });
        };

        let shortage = fare
            .checked_sub(balance)
            .ok_or(StartError::ShortageOverflow { fare, balance })?;

        if shortage <= 0 {
            debug!(terminal = %self.id, station = %station, fare, balance, "no settlement needed");
            return Ok(StartOutcome::NoShortage { fare, balance });
        }

        let session = Session::open(card.downgrade(), station, fare, shortage);
        let id = session.id;
        info!(
            terminal = %self.id,
            session = %id,
            station = %session.station,
            fare,
            shortage,
            "settlement started"
        );

        self.session = Some(session);
        self.record(TerminalState::Idle, TerminalState::Settling, 0);

        Ok(StartOutcome::Settling {
            session: id,
            fare,
            shortage,
        })
    }

    /// Pay toward the active shortage. Returns `true` when it settled.
    pub fn charge(&mut self, amount: Amount) -> bool {
        self.try_charge(amount).is_ok()
    }

    /// Pay toward the active shortage.
    ///
    /// The payment must cover the whole shortage; any excess is credited
    /// to the card as well. On success the terminal returns to idle. A
    /// session whose card has been released is closed whatever the amount.
    pub fn try_charge(&mut self, amount: Amount) -> Result<Receipt, ChargeError> {
        let Some(session) = self.session.as_mut() else {
            debug!(terminal = %self.id, amount, "charge rejected: not settling");
            return Err(ChargeError::NotSettling);
        };

        session.attempts += 1;

        let Some(card) = session.card.upgrade() else {
            let id = session.id;
            warn!(
                terminal = %self.id,
                session = %id,
                "card released before payment; closing session"
            );
            self.close_session();
            return Err(ChargeError::CardReleased { session: id });
        };

        if amount < session.shortage {
            warn!(
                terminal = %self.id,
                session = %session.id,
                amount,
                shortage = session.shortage,
                "charge rejected: underpayment"
            );
            return Err(ChargeError::Underpayment {
                offered: amount,
                shortage: session.shortage,
            });
        }

        let balance_after = {
            let mut card = card.lock();
            let balance = card.balance();
            if balance.checked_add(amount).is_none() {
                return Err(ChargeError::BalanceOverflow { amount, balance });
            }
            card.credit(amount);
            card.balance()
        };

        let receipt = Receipt {
            session: session.id,
            station: session.station.clone(),
            fare: session.fare,
            shortage: session.shortage,
            paid: amount,
            balance_after,
            attempts: session.attempts,
            settled_at: Utc::now(),
        };

        info!(
            terminal = %self.id,
            session = %receipt.session,
            paid = amount,
            balance_after,
            "settlement complete"
        );
        self.close_session();

        Ok(receipt)
    }

    /// Abandon the active session without touching the card.
    ///
    /// Returns the closed session's id, or `None` when already idle.
    pub fn cancel(&mut self) -> Option<SessionId> {
        let session = self.close_session()?;
        info!(
            terminal = %self.id,
            session = %session.id,
            shortage = session.shortage,
            "settlement cancelled"
        );
        Some(session.id)
    }

    fn close_session(&mut self) -> Option<Session<C>> {
        let session = self.session.take()?;
        self.record(TerminalState::Settling, TerminalState::Idle, session.attempts);
        Some(session)
    }

    fn record(&mut self, from: TerminalState, to: TerminalState, attempt: usize) {
        self.history.push(StateTransition {
            from,
            to,
            timestamp: Utc::now(),
            attempt,
        });
    }
}

impl<C> std::fmt::Debug for FareMachine<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FareMachine")
            .field("id", &self.id)
            .field("fares", &self.fares)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}
