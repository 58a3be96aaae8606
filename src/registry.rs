//! Session registry: at most one round per session.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
#[cfg(feature = "std")]
use core::time::Duration;

#[cfg(all(not(feature = "std"), feature = "alloc"))]
use hashbrown::HashMap;
#[cfg(feature = "std")]
use std::collections::HashMap;
#[cfg(feature = "std")]
use std::time::Instant;

use crate::error::StakeError;
use crate::round::Round;
use crate::sync::{Mutex, MutexGuard, RwLock};

/// Opaque per-player (or per-chat) key.
pub type SessionId = i64;

/// A shared handle to one session's round.
///
/// Locking the session is the lease: while the guard lives no other caller
/// can act on the same round. Handles stay usable after the session is
/// removed from the registry; they simply stop being reachable by id.
#[derive(Clone)]
pub struct Session(Arc<Mutex<Round>>);

impl Session {
    /// Wraps a round in a new session handle.
    #[must_use]
    pub fn new(round: Round) -> Self {
        Self(Arc::new(Mutex::new(round)))
    }

    /// Acquires the exclusive lease on the round.
    ///
    /// The lease is released when the guard is dropped.
    pub fn lock(&self) -> MutexGuard<'_, Round> {
        self.0.lock()
    }

    /// Runs `f` under the lease and releases it afterwards.
    pub fn with<R>(&self, f: impl FnOnce(&mut Round) -> R) -> R {
        let mut round = self.lock();
        f(&mut round)
    }

    /// Returns whether the round still accepts actions.
    pub fn is_active(&self) -> bool {
        self.lock().is_active()
    }

    /// Returns whether two handles refer to the same session.
    #[must_use]
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session").finish_non_exhaustive()
    }
}

struct Entry {
    session: Session,
    #[cfg(feature = "std")]
    started: Instant,
}

impl Entry {
    fn new(session: Session) -> Self {
        Self {
            session,
            #[cfg(feature = "std")]
            started: Instant::now(),
        }
    }
}

/// Maps each session id to at most one round.
///
/// The registry is an ordinary value; share it by reference or `Arc`. The map
/// lock is held only long enough to read or update an entry, never while a
/// round is being played. Acting on a round goes through its [`Session`]
/// lease, so two concurrent actions on the same session run one after the
/// other.
///
/// Nothing expires on its own. Call [`evict_finished`](Self::evict_finished)
/// or, with `std`, [`evict_started_before`](Self::evict_started_before) to
/// drop abandoned rounds.
///
/// # Example
///
/// ```
/// use bjsession::Registry;
///
/// let registry = Registry::new();
/// registry.start(42, 100, 7).unwrap();
///
/// let hits = registry.with(42, |round| round.hit().is_some());
/// assert_eq!(hits, Some(true));
/// registry.delete(42);
/// assert!(registry.get(42).is_none());
/// ```
pub struct Registry {
    sessions: RwLock<HashMap<SessionId, Entry>>,
}

impl Registry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the session for `id`, if any.
    pub fn get(&self, id: SessionId) -> Option<Session> {
        self.sessions
            .read()
            .get(&id)
            .map(|entry| entry.session.clone())
    }

    /// Stores `round` under `id`, replacing any existing round.
    ///
    /// Returns the session that was replaced.
    pub fn set(&self, id: SessionId, round: Round) -> Option<Session> {
        self.insert(id, Session::new(round))
    }

    fn insert(&self, id: SessionId, session: Session) -> Option<Session> {
        let previous = self
            .sessions
            .write()
            .insert(id, Entry::new(session))
            .map(|entry| entry.session);

        if previous.is_some() {
            log::debug!("[registry] session {id} replaced");
        } else {
            log::debug!("[registry] session {id} started");
        }
        previous
    }

    /// Deals a fresh round for `id` and stores it, replacing any existing
    /// round.
    ///
    /// # Errors
    ///
    /// Returns the [`StakeError`] from [`Round::new`] if the stake is zero or
    /// too large.
    pub fn start(&self, id: SessionId, stake: usize, seed: u64) -> Result<Session, StakeError> {
        let session = Session::new(Round::new(stake, seed)?);
        self.insert(id, session.clone());
        Ok(session)
    }

    /// Removes the round for `id`.
    ///
    /// Returns the removed session.
    pub fn delete(&self, id: SessionId) -> Option<Session> {
        let removed = self
            .sessions
            .write()
            .remove(&id)
            .map(|entry| entry.session);

        if removed.is_some() {
            log::debug!("[registry] session {id} removed");
        }
        removed
    }

    /// Runs `f` on the round for `id` under its lease.
    ///
    /// The map lock is released before the lease is taken. Returns `None` if
    /// there is no round for `id`.
    pub fn with<R>(&self, id: SessionId, f: impl FnOnce(&mut Round) -> R) -> Option<R> {
        let session = self.get(id)?;
        Some(session.with(f))
    }

    /// Returns whether a round is stored for `id`.
    pub fn contains(&self, id: SessionId) -> bool {
        self.sessions.read().contains_key(&id)
    }

    /// Returns the number of stored rounds.
    pub fn len(&self) -> usize {
        self.sessions.read().len()
    }

    /// Returns whether no rounds are stored.
    pub fn is_empty(&self) -> bool {
        self.sessions.read().is_empty()
    }

    fn snapshot(&self) -> Vec<(SessionId, Session)> {
        self.sessions
            .read()
            .iter()
            .map(|(&id, entry)| (id, entry.session.clone()))
            .collect()
    }

    /// Removes `stale` entries that still hold the same session.
    fn remove_if_unchanged(&self, stale: &[(SessionId, Session)]) -> usize {
        let mut sessions = self.sessions.write();
        let mut removed = 0;
        for (id, session) in stale {
            if sessions
                .get(id)
                .is_some_and(|entry| entry.session.ptr_eq(session))
            {
                sessions.remove(id);
                removed += 1;
            }
        }
        removed
    }

    /// Removes every session whose round is over.
    ///
    /// Sessions replaced while the sweep runs are left alone. Each session's
    /// lease is taken in turn, so do not call this while holding one.
    /// Returns the number removed.
    pub fn evict_finished(&self) -> usize {
        // Leases are taken without the map lock held.
        let finished: Vec<(SessionId, Session)> = self
            .snapshot()
            .into_iter()
            .filter(|(_, session)| !session.is_active())
            .collect();

        let removed = self.remove_if_unchanged(&finished);
        if removed > 0 {
            log::debug!("[registry] evicted {removed} finished sessions");
        }
        removed
    }

    /// Removes every session registered more than `ttl` ago, finished or not.
    ///
    /// Returns the number removed.
    #[cfg(feature = "std")]
    pub fn evict_started_before(&self, ttl: Duration) -> usize {
        let expired: Vec<(SessionId, Session)> = self
            .sessions
            .read()
            .iter()
            .filter(|(_, entry)| entry.started.elapsed() > ttl)
            .map(|(&id, entry)| (id, entry.session.clone()))
            .collect();

        let removed = self.remove_if_unchanged(&expired);
        if removed > 0 {
            log::debug!("[registry] evicted {removed} sessions older than {ttl:?}");
        }
        removed
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("sessions", &self.len())
            .finish()
    }
}
