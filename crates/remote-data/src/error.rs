//! Error types for the remote-data library.
//!
//! A failed request is not an error of this library: it is represented by the
//! [`RemoteData::Error`](crate::RemoteData::Error) variant. The types here only
//! cover parsing tag strings and rejected tracker transitions.

use thiserror::Error;

use crate::tag::Tag;

/// Error returned when a string is not one of the four tag names.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown remote data tag: {0:?}")]
pub struct ParseTagError(pub String);

/// Transitions rejected by a [`RequestTracker`](crate::RequestTracker).
///
/// A rejected transition leaves the tracker untouched.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum TransitionError {
    /// `start` was called while a request is in flight and restarts are disabled.
    #[error("request already in flight")]
    AlreadyLoading,

    /// A response arrived while no request is in flight.
    #[error("no request in flight (current state: {current})")]
    NotLoading {
        /// State the tracker was in.
        current: Tag,
    },

    /// A response arrived for a request that has since been superseded.
    #[error("stale response for generation {ticket} (current generation: {current})")]
    Stale {
        /// Generation the response belongs to.
        ticket: u64,
        /// Generation of the request currently tracked.
        current: u64,
    },
}
