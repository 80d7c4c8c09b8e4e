use crate::endpoint::Endpoint;
use crate::metrics::Metrics;
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, info};

/// Shuffles `endpoints` and then stable-sorts them by ascending priority.
///
/// The shuffle makes the order inside each priority group random instead of
/// following the order discovery happened to return.
pub fn order_by_priority<R: Rng + ?Sized>(endpoints: &mut [Endpoint], rng: &mut R) {
    endpoints.shuffle(rng);
    endpoints.sort_by_key(Endpoint::priority);
}

/// Priority-ordered list of endpoints shared between the discovery side,
/// which replaces it, and request paths, which pick from it and demote
/// endpoints that failed.
///
/// Reads (`peek`, `snapshot`) share a read lock. `replace` and `mark` take
/// the write lock and never do I/O while holding it.
pub struct ServerList {
    endpoints: RwLock<Vec<Endpoint>>,
    metrics: Metrics,
}

impl Default for ServerList {
    fn default() -> Self {
        Self::new()
    }
}

impl ServerList {
    pub fn new() -> Self {
        Self {
            endpoints: RwLock::new(Vec::new()),
            metrics: Metrics::new(),
        }
    }

    /// Installs a new list, dropping the previous one along with any
    /// demotions made by `mark`.
    pub fn replace(&self, mut endpoints: Vec<Endpoint>) {
        order_by_priority(&mut endpoints, &mut rand::thread_rng());

        let count = endpoints.len();
        let order = join_names(&endpoints);

        *self.write() = endpoints;

        self.metrics.record_replacement(count);
        info!(count, order = %order, "Server list replaced");
    }

    /// Returns the most preferred endpoint, or `None` if the list is empty.
    pub fn peek(&self) -> Option<Endpoint> {
        let endpoint = self.read().first().cloned();
        if endpoint.is_none() {
            self.metrics.increment_peek_empty();
            debug!("No endpoint available");
        }
        endpoint
    }

    /// Returns a copy of the full list in its current order.
    pub fn snapshot(&self) -> Vec<Endpoint> {
        self.read().clone()
    }

    /// Moves the first entry matching `endpoint` to the end of the list,
    /// regardless of its priority. The stored entry is replaced by the value
    /// passed in.
    ///
    /// Returns `false` when no entry matches, e.g. because a concurrent
    /// `replace` already dropped it.
    pub fn mark(&self, endpoint: &Endpoint) -> bool {
        let mut endpoints = self.write();

        let Some(index) = endpoints.iter().position(|e| e == endpoint) else {
            drop(endpoints);
            debug!(endpoint = %endpoint, "Ignoring mark for unknown endpoint");
            return false;
        };

        endpoints.remove(index);
        endpoints.push(endpoint.clone());
        drop(endpoints);

        self.metrics.increment_marks();
        info!(endpoint = %endpoint, "Endpoint demoted to the end of the server list");
        true
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    // No write path can panic halfway through, so a poisoned lock still
    // guards a complete list.
    fn read(&self) -> RwLockReadGuard<'_, Vec<Endpoint>> {
        self.endpoints.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<Endpoint>> {
        self.endpoints.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Display for ServerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join_names(&self.read()))
    }
}

fn join_names(endpoints: &[Endpoint]) -> String {
    endpoints
        .iter()
        .map(Endpoint::name)
        .collect::<Vec<_>>()
        .join(",")
}
