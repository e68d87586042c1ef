//! Sans-IO lifecycle driver for a single request.
//!
//! [`RequestTracker`] owns one [`RemoteData`] and only lets it move along the
//! request lifecycle:
//!
//! ```text
//!            start            resolve
//! Initial ─────────► Loading ─────────► Success ─┐
//!    ▲                 ▲  │    fail              │ start
//!    │ reset           │  └───────────► Error ───┤
//!    └─────────────────┴─────────────────────────┘
//! ```
//!
//! It never performs the request itself. The caller starts a request, keeps
//! the returned [`Ticket`], and hands the outcome back together with that
//! ticket. Outcomes for superseded requests are rejected, which lets callers
//! fire overlapping requests without a late response overwriting a newer one.
//!
//! # Example
//!
//! ```
//! use remote_data::{RequestTracker, TrackerConfig};
//!
//! let mut tracker: RequestTracker<u32, String> = RequestTracker::new(TrackerConfig::default());
//!
//! let first = tracker.start().unwrap();
//! let second = tracker.start().unwrap();
//!
//! // The first response is stale once the second request has started.
//! assert!(tracker.resolve(first, 1).is_err());
//! tracker.resolve(second, 2).unwrap();
//! assert_eq!(tracker.state().data(), Some(&2));
//! ```

use crate::error::TransitionError;
use crate::state::RemoteData;
use crate::tag::Tag;

/// Behaviour switches for a [`RequestTracker`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct TrackerConfig {
    /// Keep showing the last known data while a new request is in flight.
    pub keep_stale_data: bool,
    /// Allow `start` while a request is already in flight. The earlier
    /// request's ticket becomes stale.
    pub restart_while_loading: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            keep_stale_data: true,
            restart_while_loading: true,
        }
    }
}

/// Proof of which request an outcome belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Ticket(u64);

impl Ticket {
    /// Generation of the request this ticket was issued for.
    #[must_use]
    pub fn generation(self) -> u64 {
        self.0
    }
}

/// Sans-IO state machine for one request's [`RemoteData`].
#[derive(Clone, Debug)]
pub struct RequestTracker<T, E> {
    config: TrackerConfig,
    state: RemoteData<T, E>,
    /// Bumped on every start and reset.
    generation: u64,
}

impl<T, E> Default for RequestTracker<T, E> {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}

impl<T, E> RequestTracker<T, E> {
    /// Create a tracker in the `Initial` state.
    #[must_use]
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            state: RemoteData::Initial,
            generation: 0,
        }
    }

    /// Get the current state.
    #[must_use]
    pub fn state(&self) -> &RemoteData<T, E> {
        &self.state
    }

    /// Consume the tracker, returning its state.
    #[must_use]
    pub fn into_state(self) -> RemoteData<T, E> {
        self.state
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// Generation of the most recent start or reset.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start a request, entering `Loading`.
    ///
    /// Previous data is carried into the `Loading` state when
    /// [`TrackerConfig::keep_stale_data`] is set.
    pub fn start(&mut self) -> Result<Ticket, TransitionError> {
        let from = self.state.tag();
        if from == Tag::Loading && !self.config.restart_while_loading {
            return Err(TransitionError::AlreadyLoading);
        }

        let previous = std::mem::take(&mut self.state);
        self.state = if self.config.keep_stale_data {
            previous.into_loading()
        } else {
            RemoteData::Loading(None)
        };
        self.generation += 1;
        self.record(from);
        Ok(Ticket(self.generation))
    }

    /// Complete the request identified by `ticket` with `data`.
    pub fn resolve(&mut self, ticket: Ticket, data: T) -> Result<(), TransitionError> {
        let from = self.check_in_flight(ticket)?;
        self.state = RemoteData::Success(data);
        self.record(from);
        Ok(())
    }

    /// Fail the request identified by `ticket` with `err`.
    pub fn fail(&mut self, ticket: Ticket, err: E) -> Result<(), TransitionError> {
        let from = self.check_in_flight(ticket)?;
        self.state = RemoteData::Error(err);
        self.record(from);
        Ok(())
    }

    /// Forget everything and return to `Initial`.
    ///
    /// Outstanding tickets become stale.
    pub fn reset(&mut self) {
        let from = self.state.tag();
        self.state = RemoteData::Initial;
        self.generation += 1;
        self.record(from);
    }

    fn check_in_flight(&self, ticket: Ticket) -> Result<Tag, TransitionError> {
        let current = self.state.tag();
        if current != Tag::Loading {
            return Err(TransitionError::NotLoading { current });
        }
        if ticket.0 != self.generation {
            return Err(TransitionError::Stale {
                ticket: ticket.0,
                current: self.generation,
            });
        }
        Ok(current)
    }

    fn record(&self, from: Tag) {
        #[cfg(feature = "tracing")]
        tracing::debug!(
            from = %from,
            to = %self.state.tag(),
            generation = self.generation,
            "request state transition"
        );
        #[cfg(not(feature = "tracing"))]
        let _ = from;
    }
}
