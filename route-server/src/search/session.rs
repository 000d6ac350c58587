//! Search session state.
//!
//! A session is what the result view reads from: the current phase of the
//! most recent search. Searches may overlap (nothing cancels an in-flight
//! one), so every invocation is tagged with a generation number and only
//! the newest generation is allowed to publish its outcome. A slow, stale
//! response therefore can't overwrite the results of a newer search.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::{RouteOption, SearchRequest};
use crate::upstream::SearchTransport;

use super::error::SearchError;
use super::orchestrator::{SearchOrchestrator, SearchParams};

/// Where the latest search is in its lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SearchPhase {
    /// No search has been issued
    #[default]
    Idle,
    Searching {
        generation: u64,
    },
    Succeeded {
        generation: u64,
        routes: Vec<RouteOption>,
    },
    Failed {
        generation: u64,
        error: SearchError,
    },
}

impl SearchPhase {
    pub fn generation(&self) -> Option<u64> {
        match self {
            SearchPhase::Idle => None,
            SearchPhase::Searching { generation }
            | SearchPhase::Succeeded { generation, .. }
            | SearchPhase::Failed { generation, .. } => Some(*generation),
        }
    }

    pub fn is_searching(&self) -> bool {
        matches!(self, SearchPhase::Searching { .. })
    }

    /// Serializable view for read-only subscribers.
    pub fn snapshot(&self) -> PhaseSnapshot<'_> {
        match self {
            SearchPhase::Idle => PhaseSnapshot::Idle,
            SearchPhase::Searching { generation } => PhaseSnapshot::Searching {
                generation: *generation,
            },
            SearchPhase::Succeeded { generation, routes } => PhaseSnapshot::Succeeded {
                generation: *generation,
                routes,
            },
            SearchPhase::Failed { generation, error } => PhaseSnapshot::Failed {
                generation: *generation,
                kind: error.kind(),
                message: error.to_string(),
            },
        }
    }
}

/// JSON form of a [`SearchPhase`].
#[derive(Debug, Serialize)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum PhaseSnapshot<'a> {
    Idle,
    Searching {
        generation: u64,
    },
    Succeeded {
        generation: u64,
        routes: &'a [RouteOption],
    },
    Failed {
        generation: u64,
        kind: &'static str,
        message: String,
    },
}

/// Owns the orchestrator and the published search state.
#[derive(Debug)]
pub struct SearchSession<T> {
    orchestrator: SearchOrchestrator<T>,
    latest: AtomicU64,
    phase: RwLock<SearchPhase>,
}

impl<T: SearchTransport> SearchSession<T> {
    pub fn new(orchestrator: SearchOrchestrator<T>) -> Self {
        Self {
            orchestrator,
            latest: AtomicU64::new(0),
            phase: RwLock::new(SearchPhase::Idle),
        }
    }

    /// Run a search and publish its outcome if it's still the newest.
    ///
    /// The outcome is returned to the caller either way.
    pub async fn search(
        &self,
        request: &SearchRequest,
        params: &SearchParams,
    ) -> Result<Vec<RouteOption>, SearchError> {
        let generation = self.latest.fetch_add(1, Ordering::SeqCst) + 1;

        self.publish(generation, SearchPhase::Searching { generation })
            .await;

        let outcome = self.orchestrator.search(request, params).await;

        let finished = match &outcome {
            Ok(routes) => SearchPhase::Succeeded {
                generation,
                routes: routes.clone(),
            },
            Err(error) => SearchPhase::Failed {
                generation,
                error: error.clone(),
            },
        };
        self.publish(generation, finished).await;

        outcome
    }

    /// Current phase (cloned).
    pub async fn phase(&self) -> SearchPhase {
        self.phase.read().await.clone()
    }

    /// Generation number of the most recently issued search.
    pub fn latest_generation(&self) -> u64 {
        self.latest.load(Ordering::SeqCst)
    }

    /// Replace the phase, unless a newer search has been issued since
    /// `generation` was.
    async fn publish(&self, generation: u64, next: SearchPhase) {
        let mut phase = self.phase.write().await;
        let latest = self.latest.load(Ordering::SeqCst);
        if generation != latest {
            debug!(generation, latest, "dropping stale search outcome");
            return;
        }
        *phase = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::SortBy;
    use crate::upstream::TransportError;
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::sync::Arc;
    use std::sync::Mutex;
    use tokio::sync::oneshot;

    /// Transport whose responses are released by the test, keyed by
    /// destination city.
    #[derive(Default)]
    struct GatedTransport {
        gates: Mutex<HashMap<String, oneshot::Receiver<Result<Value, TransportError>>>>,
    }

    impl GatedTransport {
        fn gate(&self, destination: &str) -> oneshot::Sender<Result<Value, TransportError>> {
            let (tx, rx) = oneshot::channel();
            self.gates
                .lock()
                .unwrap()
                .insert(destination.to_string(), rx);
            tx
        }
    }

    impl SearchTransport for GatedTransport {
        async fn find_routes(&self, request: &SearchRequest) -> Result<Value, TransportError> {
            let rx = self
                .gates
                .lock()
                .unwrap()
                .remove(request.destination_city())
                .expect("test registered a gate for this destination");
            rx.await.expect("test released the gate")
        }
    }

    fn request(destination: &str) -> SearchRequest {
        SearchRequest::parse("Mangalore", destination, "2025-11-01", 450.0).unwrap()
    }

    fn session(transport: GatedTransport) -> Arc<SearchSession<GatedTransport>> {
        Arc::new(SearchSession::new(SearchOrchestrator::new(transport)))
    }

    #[tokio::test]
    async fn starts_idle() {
        let session = session(GatedTransport::default());
        assert_eq!(session.phase().await, SearchPhase::Idle);
        assert_eq!(session.latest_generation(), 0);
    }

    #[tokio::test]
    async fn searching_then_succeeded() {
        let transport = GatedTransport::default();
        let release = transport.gate("Ayodhya");
        let session = session(transport);

        let task = {
            let session = session.clone();
            tokio::spawn(async move {
                session
                    .search(&request("Ayodhya"), &SearchParams::default())
                    .await
            })
        };

        // Wait until the search has been issued
        while !session.phase().await.is_searching() {
            tokio::task::yield_now().await;
        }
        assert_eq!(session.phase().await.generation(), Some(1));

        release
            .send(Ok(json!([{"from_airport": "LKO", "flight_price_inr": 3600}])))
            .unwrap();
        let routes = task.await.unwrap().unwrap();

        match session.phase().await {
            SearchPhase::Succeeded { generation, routes: published } => {
                assert_eq!(generation, 1);
                assert_eq!(published, routes);
            }
            other => panic!("expected Succeeded, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn failure_is_published() {
        let transport = GatedTransport::default();
        let release = transport.gate("Ayodhya");
        let session = session(transport);

        release.send(Ok(json!({"detail": "nope"}))).unwrap();
        let outcome = session
            .search(&request("Ayodhya"), &SearchParams::default())
            .await;

        assert_eq!(outcome, Err(SearchError::Format));
        assert_eq!(
            session.phase().await,
            SearchPhase::Failed {
                generation: 1,
                error: SearchError::Format
            }
        );
    }

    #[tokio::test]
    async fn stale_outcome_does_not_overwrite_newer() {
        let transport = GatedTransport::default();
        let release_old = transport.gate("Varanasi");
        let release_new = transport.gate("Ayodhya");
        let session = session(transport);
        let params = SearchParams::new(SortBy::Price, Default::default());

        let old = {
            let session = session.clone();
            tokio::spawn(async move { session.search(&request("Varanasi"), &params).await })
        };
        while session.phase().await.generation() != Some(1) {
            tokio::task::yield_now().await;
        }

        let new = {
            let session = session.clone();
            tokio::spawn(async move { session.search(&request("Ayodhya"), &params).await })
        };
        while session.phase().await.generation() != Some(2) {
            tokio::task::yield_now().await;
        }

        // Newer search resolves first...
        release_new
            .send(Ok(json!([{"from_airport": "LKO", "flight_price_inr": 3600}])))
            .unwrap();
        new.await.unwrap().unwrap();

        // ...then the stale one.
        release_old
            .send(Ok(json!([{"from_airport": "VNS", "flight_price_inr": 3700}])))
            .unwrap();
        let stale = old.await.unwrap().unwrap();
        assert_eq!(stale[0].from_iata, "VNS", "caller still gets its own outcome");

        match session.phase().await {
            SearchPhase::Succeeded { generation, routes } => {
                assert_eq!(generation, 2);
                assert_eq!(routes[0].from_iata, "LKO");
            }
            other => panic!("expected Succeeded, got {other:?}"),
        }
    }

    #[test]
    fn snapshot_serialization() {
        let phase = SearchPhase::Failed {
            generation: 3,
            error: SearchError::Format,
        };
        let json = serde_json::to_value(phase.snapshot()).unwrap();

        assert_eq!(
            json,
            json!({
                "state": "failed",
                "generation": 3,
                "kind": "format",
                "message": "Unexpected response format from server"
            })
        );

        let json = serde_json::to_value(SearchPhase::Idle.snapshot()).unwrap();
        assert_eq!(json, json!({"state": "idle"}));
    }
}
