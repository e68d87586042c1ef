//! Free-function forms of the constructors, accessors and combinators.
//!
//! These mirror the methods on [`RemoteData`] and add the operations that
//! work across several states at once: the `any_*` checks and the
//! multi-state folds.
//!
//! # Multi-state folds
//!
//! [`fold2`], [`fold3`] and [`fold_many`] derive one status from several
//! independently tracked requests. The worst status wins, checked in this
//! order:
//!
//! 1. any `Error`: the `error` handler gets every input's error (`None` for
//!    inputs that did not fail);
//! 2. any `Loading`: the `loading` handler gets every input's data;
//! 3. any `Success`: the `success` handler gets every input's data;
//! 4. otherwise `initial` is called.
//!
//! ```
//! use remote_data::{error, fold2, loading};
//!
//! let summary = fold2(
//!     loading::<u32, String>(None),
//!     error::<&str, _>("timed out"),
//!     || "idle".to_string(),
//!     |_, _| "loading".to_string(),
//!     |_, _| "ready".to_string(),
//!     |_, e2| format!("failed: {}", e2.unwrap_or("?")),
//! );
//! assert_eq!(summary, "failed: timed out");
//! ```

use crate::state::RemoteData;
use crate::tag::{Tag, Tagged};

/// A request that has not been started.
#[must_use]
pub const fn initial<T, E>() -> RemoteData<T, E> {
    RemoteData::Initial
}

/// A request in flight, with or without data to keep showing.
#[must_use]
pub fn loading<T, E>(data: impl Into<Option<T>>) -> RemoteData<T, E> {
    RemoteData::loading(data)
}

/// A request that completed with `data`.
#[must_use]
pub const fn success<T, E>(data: T) -> RemoteData<T, E> {
    RemoteData::Success(data)
}

/// A request that failed with `err`.
#[must_use]
pub const fn error<T, E>(err: E) -> RemoteData<T, E> {
    RemoteData::Error(err)
}

/// Data of a `Success`, or of a `Loading` that carries some; otherwise `None`.
#[must_use]
pub fn unwrap<T, E>(rd: RemoteData<T, E>) -> Option<T> {
    rd.into_data()
}

/// Error of an `Error`; otherwise `None`.
#[must_use]
pub fn unwrap_error<T, E>(rd: RemoteData<T, E>) -> Option<E> {
    rd.into_err()
}

fn any_tagged(states: &[&dyn Tagged], tag: Tag) -> bool {
    states.iter().any(|state| state.tag() == tag)
}

/// Check if any of the states is `Loading`. `false` for no states.
///
/// ```
/// use remote_data::{any_loading, initial, loading, RemoteData};
///
/// let profile: RemoteData<String, ()> = loading(None);
/// let avatar: RemoteData<Vec<u8>, String> = initial();
/// assert!(any_loading(&[&profile, &avatar]));
/// ```
#[must_use]
pub fn any_loading(states: &[&dyn Tagged]) -> bool {
    any_tagged(states, Tag::Loading)
}

/// Check if any of the states is `Error`. `false` for no states.
#[must_use]
pub fn any_error(states: &[&dyn Tagged]) -> bool {
    any_tagged(states, Tag::Error)
}

/// Check if any of the states is `Success`. `false` for no states.
#[must_use]
pub fn any_success(states: &[&dyn Tagged]) -> bool {
    any_tagged(states, Tag::Success)
}

/// See [`RemoteData::fmap`].
pub fn fmap<T, E, U>(rd: RemoteData<T, E>, f: impl FnOnce(Option<T>) -> U) -> RemoteData<U, E> {
    rd.fmap(f)
}

/// See [`RemoteData::map_err`].
pub fn fmap_error<T, E, F>(rd: RemoteData<T, E>, f: impl FnOnce(E) -> F) -> RemoteData<T, F> {
    rd.map_err(f)
}

/// A `Loading` carrying the data `prev` shows, if any.
#[must_use]
pub fn loading_from_previous_state<T, E, F>(prev: RemoteData<T, E>) -> RemoteData<T, F> {
    prev.into_loading()
}

/// See [`RemoteData::fold`].
pub fn fold<T, E, R>(
    rd: RemoteData<T, E>,
    initial: impl FnOnce() -> R,
    loading: impl FnOnce(Option<T>) -> R,
    success: impl FnOnce(T) -> R,
    error: impl FnOnce(E) -> R,
) -> R {
    rd.fold(initial, loading, success, error)
}

/// Fold two states into one result, worst status first.
///
/// See the [module documentation](self) for the precedence.
pub fn fold2<T1, E1, T2, E2, R>(
    state1: RemoteData<T1, E1>,
    state2: RemoteData<T2, E2>,
    initial: impl FnOnce() -> R,
    loading: impl FnOnce(Option<T1>, Option<T2>) -> R,
    success: impl FnOnce(Option<T1>, Option<T2>) -> R,
    error: impl FnOnce(Option<E1>, Option<E2>) -> R,
) -> R {
    let states: [&dyn Tagged; 2] = [&state1, &state2];
    if any_error(&states) {
        return error(state1.into_err(), state2.into_err());
    }
    if any_loading(&states) {
        return loading(state1.into_data(), state2.into_data());
    }
    if any_success(&states) {
        return success(state1.into_data(), state2.into_data());
    }
    initial()
}

/// Fold three states into one result, worst status first.
///
/// See the [module documentation](self) for the precedence.
pub fn fold3<T1, E1, T2, E2, T3, E3, R>(
    state1: RemoteData<T1, E1>,
    state2: RemoteData<T2, E2>,
    state3: RemoteData<T3, E3>,
    initial: impl FnOnce() -> R,
    loading: impl FnOnce(Option<T1>, Option<T2>, Option<T3>) -> R,
    success: impl FnOnce(Option<T1>, Option<T2>, Option<T3>) -> R,
    error: impl FnOnce(Option<E1>, Option<E2>, Option<E3>) -> R,
) -> R {
    let states: [&dyn Tagged; 3] = [&state1, &state2, &state3];
    if any_error(&states) {
        return error(state1.into_err(), state2.into_err(), state3.into_err());
    }
    if any_loading(&states) {
        return loading(state1.into_data(), state2.into_data(), state3.into_data());
    }
    if any_success(&states) {
        return success(state1.into_data(), state2.into_data(), state3.into_data());
    }
    initial()
}

/// Fold any number of states sharing payload types, worst status first.
///
/// Handlers receive one entry per input, in input order. No inputs at all
/// counts as all `Initial`.
pub fn fold_many<T, E, R>(
    states: impl IntoIterator<Item = RemoteData<T, E>>,
    initial: impl FnOnce() -> R,
    loading: impl FnOnce(Vec<Option<T>>) -> R,
    success: impl FnOnce(Vec<Option<T>>) -> R,
    error: impl FnOnce(Vec<Option<E>>) -> R,
) -> R {
    let states: Vec<_> = states.into_iter().collect();
    match Tag::worst(states.iter().map(RemoteData::tag)) {
        Some(Tag::Error) => error(states.into_iter().map(RemoteData::into_err).collect()),
        Some(Tag::Loading) => loading(states.into_iter().map(RemoteData::into_data).collect()),
        Some(Tag::Success) => success(states.into_iter().map(RemoteData::into_data).collect()),
        Some(Tag::Initial) | None => initial(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn describe(rd: RemoteData<String, String>) -> String {
        fold(
            rd,
            || "Initial".to_string(),
            |_| "Loading".to_string(),
            |data| data,
            |err| err,
        )
    }

    #[test]
    fn test_fold_dispatch() {
        assert_eq!(describe(initial()), "Initial");
        assert_eq!(describe(loading(None)), "Loading");
        assert_eq!(describe(success("Success".to_string())), "Success");
        assert_eq!(describe(error("Error".to_string())), "Error");
    }

    #[test]
    fn test_any_empty() {
        assert!(!any_loading(&[]));
        assert!(!any_error(&[]));
        assert!(!any_success(&[]));
    }

    #[test]
    fn test_any_mixed_payloads() {
        let a: RemoteData<(), ()> = loading(None);
        let b: RemoteData<u8, String> = initial();
        assert!(any_loading(&[&a, &b]));
        assert!(!any_error(&[&a, &b]));
        assert!(!any_success(&[&a, &b]));

        let c: RemoteData<Vec<u8>, ()> = error(());
        assert!(!any_loading(&[&c, &b]));
        assert!(any_error(&[&b, &c]));
    }

    #[test]
    fn test_fold2_precedence() {
        let err_and_loading = fold2(
            error::<i32, &str>("down"),
            loading::<i32, &str>(1),
            || "initial",
            |_, _| "loading",
            |_, _| "success",
            |_, _| "error",
        );
        assert_eq!(err_and_loading, "error");

        let loading_and_success = fold2(
            success::<i32, ()>(1),
            loading::<i32, ()>(None),
            || "initial",
            |_, _| "loading",
            |_, _| "success",
            |_, _| "error",
        );
        assert_eq!(loading_and_success, "loading");

        let success_and_initial = fold2(
            initial::<i32, ()>(),
            success::<i32, ()>(1),
            || "initial",
            |_, _| "loading",
            |_, _| "success",
            |_, _| "error",
        );
        assert_eq!(success_and_initial, "success");

        let both_initial = fold2(
            initial::<i32, ()>(),
            initial::<i32, ()>(),
            || "initial",
            |_, _| "loading",
            |_, _| "success",
            |_, _| "error",
        );
        assert_eq!(both_initial, "initial");
    }

    #[test]
    fn test_fold2_payloads() {
        let errors = fold2(
            error::<i32, &str>("first"),
            success::<&str, u8>("ok"),
            || None,
            |_, _| None,
            |_, _| None,
            |e1, e2| Some((e1, e2)),
        );
        assert_eq!(errors, Some((Some("first"), None)));

        let data = fold2(
            loading::<i32, ()>(7),
            success::<&str, ()>("ok"),
            || None,
            |d1, d2| Some((d1, d2)),
            |_, _| None,
            |_, _| None,
        );
        assert_eq!(data, Some((Some(7), Some("ok"))));
    }

    #[test]
    fn test_fold3_payloads() {
        let data = fold3(
            success::<i32, ()>(1),
            initial::<u8, ()>(),
            success::<&str, ()>("three"),
            || None,
            |_, _, _| None,
            |d1, d2, d3| Some((d1, d2, d3)),
            |_, _, _| None,
        );
        assert_eq!(data, Some((Some(1), None, Some("three"))));

        let errors = fold3(
            loading::<i32, &str>(None),
            error::<u8, &str>("two"),
            error::<(), u16>(3),
            || None,
            |_, _, _| None,
            |_, _, _| None,
            |e1, e2, e3| Some((e1, e2, e3)),
        );
        assert_eq!(errors, Some((None, Some("two"), Some(3))));
    }

    #[test]
    fn test_fold_many() {
        let summary = |states: Vec<RemoteData<i32, &'static str>>| {
            fold_many(
                states,
                || "initial".to_string(),
                |data| format!("loading {data:?}"),
                |data| format!("success {data:?}"),
                |errors| format!("error {errors:?}"),
            )
        };

        assert_eq!(summary(vec![]), "initial");
        assert_eq!(summary(vec![initial(), initial()]), "initial");
        assert_eq!(
            summary(vec![success(1), initial(), success(3)]),
            "success [Some(1), None, Some(3)]"
        );
        assert_eq!(
            summary(vec![success(1), loading(None), loading(2)]),
            "loading [Some(1), None, Some(2)]"
        );
        assert_eq!(
            summary(vec![loading(1), error("x"), success(2), error("y")]),
            "error [None, Some(\"x\"), None, Some(\"y\")]"
        );
    }
}
