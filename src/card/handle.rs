//! Shared, caller-owned card handles.

use super::{Card, IcCard};
use crate::fare::Amount;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};

/// Caller-owned handle to a card.
///
/// Cloning the handle shares the same card. The terminal keeps only a weak
/// reference while a session is open, so a credit applied by `charge` is
/// visible through every handle the caller holds, and dropping the last
/// handle releases the card.
///
/// # Example
///
/// ```rust
/// use fare_adjust::card::{CardHandle, IcCard};
///
/// let card = CardHandle::new(IcCard::new("A", 100));
/// let same = card.clone();
/// assert!(same.ptr_eq(&card));
/// assert_eq!(same.balance(), 100);
/// ```
pub struct CardHandle<C = IcCard> {
    inner: Arc<Mutex<C>>,
}

impl<C> CardHandle<C> {
    /// Wrap a card in a new shared handle.
    pub fn new(card: C) -> Self {
        Self {
            inner: Arc::new(Mutex::new(card)),
        }
    }

    /// Lock the card for reading or mutation.
    ///
    /// A poisoned lock is recovered: card mutations are single field
    /// updates and cannot be observed half-applied.
    ///
    /// Drop the guard before presenting the card or paying. The terminal
    /// locks the same card inside `start` and `charge`, and the lock is
    /// not reentrant, so holding it across those calls deadlocks.
    pub fn lock(&self) -> MutexGuard<'_, C> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of the card as it is right now.
    pub fn snapshot(&self) -> C
    where
        C: Clone,
    {
        self.lock().clone()
    }

    /// Whether both handles point at the same card.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }

    pub(crate) fn downgrade(&self) -> WeakCard<C> {
        WeakCard {
            inner: Arc::downgrade(&self.inner),
        }
    }
}

impl<C: Card> CardHandle<C> {
    /// Current balance of the card.
    pub fn balance(&self) -> Amount {
        self.lock().balance()
    }

    /// Copy of the card's entry station.
    pub fn entry_station(&self) -> String {
        self.lock().entry_station().to_string()
    }
}

impl<C> Clone for CardHandle<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<C> From<C> for CardHandle<C> {
    fn from(card: C) -> Self {
        Self::new(card)
    }
}

impl<C: fmt::Debug> fmt::Debug for CardHandle<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CardHandle").field(&*self.lock()).finish()
    }
}

/// Non-owning reference to a card held by an open session.
pub(crate) struct WeakCard<C> {
    inner: Weak<Mutex<C>>,
}

impl<C> WeakCard<C> {
    pub(crate) fn upgrade(&self) -> Option<CardHandle<C>> {
        self.inner.upgrade().map(|inner| CardHandle { inner })
    }

    pub(crate) fn points_to(&self, handle: &CardHandle<C>) -> bool {
        Weak::ptr_eq(&self.inner, &Arc::downgrade(&handle.inner))
    }
}
