//! Lazily initialized, process-wide shared resources.
//!
//! A [`SharedResource`] runs its loader at most once per attempt. Callers
//! arriving while a load is in flight block until it settles and then observe
//! the same outcome: either the shared value or the same error. A failed
//! attempt returns the resource to `Uninitialized`, so the next caller
//! retries.

use std::error::Error;
use std::fmt;
use std::sync::{Arc, Condvar, Mutex, MutexGuard, PoisonError};

use tracing::{info, warn};

#[derive(Debug, Clone, thiserror::Error)]
#[error("{resource} failed to initialize: {source}")]
pub struct ResourceError {
    resource: &'static str,
    source: Arc<dyn Error + Send + Sync>,
}

impl ResourceError {
    pub fn new<E>(resource: &'static str, source: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        Self {
            resource,
            source: Arc::new(source),
        }
    }

    pub fn resource(&self) -> &'static str {
        self.resource
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceState {
    Uninitialized,
    Initializing,
    Ready,
}

type Loader<T> = Box<dyn Fn() -> Result<T, ResourceError> + Send + Sync>;

enum Phase<T> {
    Uninitialized,
    Initializing,
    Ready(Arc<T>),
}

struct Slot<T> {
    phase: Phase<T>,
    /// Incremented every time a caller starts a load.
    attempt: u64,
    /// Error of the most recent failed attempt, tagged with its number.
    failure: Option<(u64, ResourceError)>,
}

pub struct SharedResource<T> {
    name: &'static str,
    loader: Loader<T>,
    slot: Mutex<Slot<T>>,
    settled: Condvar,
}

impl<T> SharedResource<T> {
    pub fn new<F, E>(name: &'static str, loader: F) -> Self
    where
        F: Fn() -> Result<T, E> + Send + Sync + 'static,
        E: Error + Send + Sync + 'static,
    {
        Self {
            name,
            loader: Box::new(move || loader().map_err(|e| ResourceError::new(name, e))),
            slot: Mutex::new(Slot {
                phase: Phase::Uninitialized,
                attempt: 0,
                failure: None,
            }),
            settled: Condvar::new(),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn state(&self) -> ResourceState {
        match self.lock().phase {
            Phase::Uninitialized => ResourceState::Uninitialized,
            Phase::Initializing => ResourceState::Initializing,
            Phase::Ready(_) => ResourceState::Ready,
        }
    }

    /// Return the loaded value, loading it first if needed.
    pub fn get(&self) -> Result<Arc<T>, ResourceError> {
        let mut slot = self.lock();
        loop {
            if let Phase::Ready(value) = &slot.phase {
                return Ok(Arc::clone(value));
            }
            if !matches!(slot.phase, Phase::Initializing) {
                break;
            }
            let attempt = slot.attempt;
            slot = self
                .settled
                .wait_while(slot, |s| {
                    s.attempt == attempt && matches!(s.phase, Phase::Initializing)
                })
                .unwrap_or_else(PoisonError::into_inner);
            if let Some((failed, error)) = &slot.failure {
                if *failed == attempt {
                    return Err(error.clone());
                }
            }
        }

        slot.attempt += 1;
        let attempt = slot.attempt;
        slot.phase = Phase::Initializing;
        drop(slot);

        info!(resource = self.name, attempt, "initializing shared resource");
        let mut in_flight = InFlight {
            owner: self,
            armed: true,
        };
        let result = (self.loader)();
        in_flight.armed = false;

        let mut slot = self.lock();
        let outcome = match result {
            Ok(value) => {
                let value = Arc::new(value);
                slot.phase = Phase::Ready(Arc::clone(&value));
                slot.failure = None;
                info!(resource = self.name, attempt, "shared resource ready");
                Ok(value)
            }
            Err(error) => {
                warn!(resource = self.name, attempt, %error, "shared resource failed");
                slot.phase = Phase::Uninitialized;
                slot.failure = Some((attempt, error.clone()));
                Err(error)
            }
        };
        drop(slot);
        self.settled.notify_all();
        outcome
    }

    fn lock(&self) -> MutexGuard<'_, Slot<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> fmt::Debug for SharedResource<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedResource")
            .field("name", &self.name)
            .field("state", &self.state())
            .finish()
    }
}

/// Resets the slot if the loader unwinds, so waiters are released and the
/// next caller retries.
struct InFlight<'a, T> {
    owner: &'a SharedResource<T>,
    armed: bool,
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if self.armed {
            let mut slot = self.owner.lock();
            slot.phase = Phase::Uninitialized;
            drop(slot);
            self.owner.settled.notify_all();
        }
    }
}
