//! The [`RemoteData`] type and its methods.
//!
//! Every method that "changes" a value consumes it and returns a new one;
//! borrowing accessors are provided where a caller only needs to look.

use crate::tag::{Tag, Tagged};

/// Lifecycle of an asynchronously fetched value.
///
/// Exactly one variant is active at a time. `Loading` may carry the data of
/// a previous request so it can still be shown while a new one is in flight.
///
/// No `PartialEq` is provided. Branch with [`fold`](RemoteData::fold) or
/// `match`, or compare the extracted payloads.
#[derive(Clone, Debug)]
pub enum RemoteData<T, E> {
    /// The request has not been started.
    Initial,
    /// The request is in flight, optionally with data from an earlier request.
    Loading(Option<T>),
    /// The request completed with a value.
    Success(T),
    /// The request completed with a failure.
    Error(E),
}

impl<T, E> Default for RemoteData<T, E> {
    fn default() -> Self {
        RemoteData::Initial
    }
}

impl<T, E> RemoteData<T, E> {
    /// A request that has not been started.
    #[must_use]
    pub const fn initial() -> Self {
        RemoteData::Initial
    }

    /// A request in flight.
    ///
    /// Accepts either a value or an `Option`, so both `loading(15)` and
    /// `loading(None)` work.
    #[must_use]
    pub fn loading(data: impl Into<Option<T>>) -> Self {
        RemoteData::Loading(data.into())
    }

    /// A request that completed with `data`.
    #[must_use]
    pub const fn success(data: T) -> Self {
        RemoteData::Success(data)
    }

    /// A request that failed with `err`.
    #[must_use]
    pub const fn error(err: E) -> Self {
        RemoteData::Error(err)
    }

    /// The active variant.
    #[must_use]
    pub const fn tag(&self) -> Tag {
        match self {
            RemoteData::Initial => Tag::Initial,
            RemoteData::Loading(_) => Tag::Loading,
            RemoteData::Success(_) => Tag::Success,
            RemoteData::Error(_) => Tag::Error,
        }
    }

    /// Check if this is `Initial`.
    #[must_use]
    pub const fn is_initial(&self) -> bool {
        matches!(self, RemoteData::Initial)
    }

    /// Check if this is `Loading`, with or without data.
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, RemoteData::Loading(_))
    }

    /// Check if this is `Success`.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, RemoteData::Success(_))
    }

    /// Check if this is `Error`.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self, RemoteData::Error(_))
    }

    /// Borrow the data of a `Success`, or of a `Loading` that carries some.
    #[must_use]
    pub fn data(&self) -> Option<&T> {
        match self {
            RemoteData::Success(data) => Some(data),
            RemoteData::Loading(data) => data.as_ref(),
            RemoteData::Initial | RemoteData::Error(_) => None,
        }
    }

    /// Borrow the error of an `Error`.
    #[must_use]
    pub fn err(&self) -> Option<&E> {
        match self {
            RemoteData::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Take the data out of a `Success`, or of a `Loading` that carries some.
    ///
    /// `Initial` and `Error` yield `None`. Never panics.
    #[must_use]
    pub fn into_data(self) -> Option<T> {
        match self {
            RemoteData::Success(data) => Some(data),
            RemoteData::Loading(data) => data,
            RemoteData::Initial | RemoteData::Error(_) => None,
        }
    }

    /// Take the error out of an `Error`; `None` for every other variant.
    #[must_use]
    pub fn into_err(self) -> Option<E> {
        match self {
            RemoteData::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Convert from `&RemoteData<T, E>` to `RemoteData<&T, &E>`.
    #[must_use]
    pub fn as_ref(&self) -> RemoteData<&T, &E> {
        match self {
            RemoteData::Initial => RemoteData::Initial,
            RemoteData::Loading(data) => RemoteData::Loading(data.as_ref()),
            RemoteData::Success(data) => RemoteData::Success(data),
            RemoteData::Error(err) => RemoteData::Error(err),
        }
    }

    /// Map the data of `Success` and `Loading`, handing `f` the data as an
    /// `Option`.
    ///
    /// `f` is called for every `Success` and every `Loading`, including a
    /// `Loading` without data (it then receives `None`), and its result
    /// becomes the new data. `Initial` and `Error` pass through unchanged.
    pub fn fmap<U, F>(self, f: F) -> RemoteData<U, E>
    where
        F: FnOnce(Option<T>) -> U,
    {
        match self {
            RemoteData::Initial => RemoteData::Initial,
            RemoteData::Loading(data) => RemoteData::Loading(Some(f(data))),
            RemoteData::Success(data) => RemoteData::Success(f(Some(data))),
            RemoteData::Error(err) => RemoteData::Error(err),
        }
    }

    /// Map the data, if any, keeping the variant.
    ///
    /// Unlike [`fmap`](Self::fmap), a `Loading` without data stays empty and
    /// `f` is not called for it.
    pub fn map<U, F>(self, f: F) -> RemoteData<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            RemoteData::Initial => RemoteData::Initial,
            RemoteData::Loading(data) => RemoteData::Loading(data.map(f)),
            RemoteData::Success(data) => RemoteData::Success(f(data)),
            RemoteData::Error(err) => RemoteData::Error(err),
        }
    }

    /// Map the error of an `Error`; every other variant passes through.
    pub fn map_err<F2, F>(self, f: F) -> RemoteData<T, F2>
    where
        F: FnOnce(E) -> F2,
    {
        match self {
            RemoteData::Initial => RemoteData::Initial,
            RemoteData::Loading(data) => RemoteData::Loading(data),
            RemoteData::Success(data) => RemoteData::Success(data),
            RemoteData::Error(err) => RemoteData::Error(f(err)),
        }
    }

    /// Re-enter `Loading`, keeping whatever data this state shows.
    ///
    /// `Success` and `Loading` carry their data forward; `Initial` and
    /// `Error` produce an empty `Loading`. A `Loading` holds no error, so the
    /// error type of the result is free.
    #[must_use]
    pub fn into_loading<F2>(self) -> RemoteData<T, F2> {
        RemoteData::Loading(self.into_data())
    }

    /// Collapse the value by calling exactly one handler, chosen by variant.
    pub fn fold<R>(
        self,
        initial: impl FnOnce() -> R,
        loading: impl FnOnce(Option<T>) -> R,
        success: impl FnOnce(T) -> R,
        error: impl FnOnce(E) -> R,
    ) -> R {
        match self {
            RemoteData::Initial => initial(),
            RemoteData::Loading(data) => loading(data),
            RemoteData::Success(data) => success(data),
            RemoteData::Error(err) => error(err),
        }
    }
}

impl<T, E> Tagged for RemoteData<T, E> {
    fn tag(&self) -> Tag {
        RemoteData::tag(self)
    }
}

impl<T, E> From<Result<T, E>> for RemoteData<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => RemoteData::Success(data),
            Err(err) => RemoteData::Error(err),
        }
    }
}
