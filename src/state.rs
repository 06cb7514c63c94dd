use crate::repository::ColorRepository;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, Ordering};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub repository: ColorRepository,
    pub readiness: Readiness,
}

/// Database readiness as seen by the service
///
/// `Starting` until the first successful contact with the database, then
/// alternating between `Ready` and `NotReady` as connectivity is lost and regained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadinessState {
    Starting,
    Ready,
    NotReady,
}

impl ReadinessState {
    pub fn as_str(self) -> &'static str {
        match self {
            ReadinessState::Starting => "starting",
            ReadinessState::Ready => "ready",
            ReadinessState::NotReady => "not_ready",
        }
    }

    fn from_u8(raw: u8) -> Self {
        match raw {
            1 => ReadinessState::Ready,
            2 => ReadinessState::NotReady,
            _ => ReadinessState::Starting,
        }
    }
}

/// Cloneable handle to the process-wide readiness state
#[derive(Debug, Clone, Default)]
pub struct Readiness {
    state: Arc<AtomicU8>,
}

impl Readiness {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> ReadinessState {
        ReadinessState::from_u8(self.state.load(Ordering::Acquire))
    }

    /// Record a successful contact with the database
    pub fn mark_ready(&self) {
        let previous = self.swap(ReadinessState::Ready);
        if previous != ReadinessState::Ready {
            tracing::info!("Database reachable, service is ready (was {})", previous.as_str());
        }
    }

    /// Record a lost database connection
    ///
    /// A service that never reached the database stays `Starting`.
    pub fn mark_unavailable(&self) {
        let result = self.state.compare_exchange(
            ReadinessState::Ready as u8,
            ReadinessState::NotReady as u8,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
        if result.is_ok() {
            tracing::warn!("Database connection lost, service is not ready");
        }
    }

    fn swap(&self, next: ReadinessState) -> ReadinessState {
        ReadinessState::from_u8(self.state.swap(next as u8, Ordering::AcqRel))
    }
}
