//! Thread-safe access to one fare machine.

use crate::card::{Card, CardHandle, IcCard};
use crate::core::{StateHistory, TerminalState};
use crate::fare::Amount;
use crate::settlement::{ChargeError, FareMachine, Receipt, SessionId, StartError, StartOutcome};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A fare machine shared between threads.
///
/// Every operation takes the machine's lock, so `start`, `charge` and
/// `cancel` from different callers are applied one at a time and at most
/// one session is ever open. Clones share the same machine.
///
/// # Example
///
/// ```rust
/// use fare_adjust::card::{CardHandle, IcCard};
/// use fare_adjust::fares;
/// use fare_adjust::settlement::FareMachine;
/// use fare_adjust::terminal::SharedTerminal;
///
/// let terminal = SharedTerminal::new(FareMachine::new(fares! { "A" => 180 }.unwrap()));
/// let gate = terminal.clone();
///
/// let card = CardHandle::new(IcCard::new("A", 100));
/// assert!(gate.start(&card));
/// assert_eq!(terminal.shortage(), 80);
/// ```
pub struct SharedTerminal<C = IcCard> {
    inner: Arc<Mutex<FareMachine<C>>>,
}

impl<C: Card> SharedTerminal<C> {
    /// Share `machine` behind a lock.
    pub fn new(machine: FareMachine<C>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(machine)),
        }
    }

    /// Lock the machine for a sequence of operations.
    ///
    /// Transitions update the session in a single assignment, so a lock
    /// poisoned by a panicking caller still guards a consistent machine
    /// and is recovered.
    pub fn lock(&self) -> MutexGuard<'_, FareMachine<C>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// See [`FareMachine::start`].
    pub fn start(&self, card: &CardHandle<C>) -> bool {
        self.lock().start(card)
    }

    /// See [`FareMachine::try_start`].
    pub fn try_start(&self, card: &CardHandle<C>) -> Result<StartOutcome, StartError> {
        self.lock().try_start(card)
    }

    /// See [`FareMachine::charge`].
    pub fn charge(&self, amount: Amount) -> bool {
        self.lock().charge(amount)
    }

    /// See [`FareMachine::try_charge`].
    pub fn try_charge(&self, amount: Amount) -> Result<Receipt, ChargeError> {
        self.lock().try_charge(amount)
    }

    /// See [`FareMachine::cancel`].
    pub fn cancel(&self) -> Option<SessionId> {
        self.lock().cancel()
    }

    /// Amount still owed; zero when idle.
    pub fn shortage(&self) -> Amount {
        self.lock().shortage()
    }

    /// Check if a session is open.
    pub fn is_settling(&self) -> bool {
        self.lock().is_settling()
    }

    /// Get current state.
    pub fn state(&self) -> TerminalState {
        self.lock().state()
    }

    /// Copy of the machine's transition history.
    pub fn history(&self) -> StateHistory<TerminalState> {
        self.lock().history().clone()
    }
}

impl<C> Clone for SharedTerminal<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C: Card> From<FareMachine<C>> for SharedTerminal<C> {
    fn from(machine: FareMachine<C>) -> Self {
        Self::new(machine)
    }
}
