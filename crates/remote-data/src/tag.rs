//! Discriminant of a [`RemoteData`](crate::RemoteData) value.

use std::fmt;
use std::str::FromStr;

use crate::error::ParseTagError;

/// Which of the four lifecycle states a value is in.
///
/// Tags are ordered by status precedence, lowest first:
/// `Initial < Success < Loading < Error`. The "worst" status among several
/// requests is therefore the maximum of their tags.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tag {
    /// The request has not been started.
    Initial,
    /// The request completed with a value.
    Success,
    /// The request is in flight.
    Loading,
    /// The request completed with a failure.
    Error,
}

impl Tag {
    /// All tags, in precedence order.
    pub const ALL: [Tag; 4] = [Tag::Initial, Tag::Success, Tag::Loading, Tag::Error];

    /// Get the string representation of this tag.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Tag::Initial => "Initial",
            Tag::Success => "Success",
            Tag::Loading => "Loading",
            Tag::Error => "Error",
        }
    }

    /// Highest-precedence tag of the given tags, `None` if there are none.
    pub fn worst<I>(tags: I) -> Option<Tag>
    where
        I: IntoIterator<Item = Tag>,
    {
        tags.into_iter().max()
    }
}

impl FromStr for Tag {
    type Err = ParseTagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Initial" => Ok(Tag::Initial),
            "Success" => Ok(Tag::Success),
            "Loading" => Ok(Tag::Loading),
            "Error" => Ok(Tag::Error),
            _ => Err(ParseTagError(s.to_string())),
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Anything that can report a [`Tag`].
///
/// Implemented for every `RemoteData<T, E>`, which lets states with different
/// payload types be inspected together through `&dyn Tagged`.
pub trait Tagged {
    /// The active variant.
    fn tag(&self) -> Tag;
}
