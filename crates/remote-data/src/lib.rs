//! # remote-data
//!
//! A tagged union for the lifecycle of an asynchronously fetched value, and
//! the combinators that go with it.
//!
//! ## Features
//!
//! - [`RemoteData`] with four variants: `Initial`, `Loading` (optionally with
//!   previous data), `Success` and `Error`
//! - Accessors that never panic ([`unwrap`], [`unwrap_error`])
//! - Structure-preserving maps ([`fmap`], [`fmap_error`]) and exhaustive
//!   [`fold`]
//! - Multi-state folds ([`fold2`], [`fold3`], [`fold_many`]) where the worst
//!   status wins: `Error`, then `Loading`, then `Success`, then `Initial`
//! - A sans-IO [`RequestTracker`] that validates lifecycle transitions
//! - Optional `serde` support for [`Tag`] and [`TrackerConfig`], optional
//!   `tracing` of tracker transitions (on by default)
//!
//! The library performs no I/O: the caller runs the request and records what
//! happened.

#![deny(clippy::all)]
#![warn(missing_docs)]
#![cfg_attr(docsrs, feature(doc_cfg))]

//! ## Quick Start
//!
//! ```rust
//! use remote_data::{fold, fmap, loading_from_previous_state, success, unwrap, RemoteData};
//!
//! let user: RemoteData<&str, String> = success("alice");
//! let greeting = fmap(user, |name| format!("hello, {}", name.unwrap_or("stranger")));
//!
//! let rendered = fold(
//!     greeting.clone(),
//!     || "not requested".to_string(),
//!     |data| data.unwrap_or_else(|| "loading...".to_string()),
//!     |data| data,
//!     |err| format!("failed: {err}"),
//! );
//! assert_eq!(rendered, "hello, alice");
//!
//! // Refreshing keeps the greeting on screen.
//! let refreshing: RemoteData<String, String> = loading_from_previous_state(greeting);
//! assert!(refreshing.is_loading());
//! assert_eq!(unwrap(refreshing).as_deref(), Some("hello, alice"));
//! ```

pub mod combinators;
pub mod error;
pub mod state;
pub mod tag;
pub mod tracker;

pub use self::combinators::{
    any_error, any_loading, any_success, error, fmap, fmap_error, fold, fold2, fold3, fold_many,
    initial, loading, loading_from_previous_state, success, unwrap, unwrap_error,
};
pub use self::error::{ParseTagError, TransitionError};
pub use self::state::RemoteData;
pub use self::tag::{Tag, Tagged};
pub use self::tracker::{RequestTracker, Ticket, TrackerConfig};
