//! Tagging of asynchronous requests so that only the newest result lands.
//!
//! Every request (screenshot load, classification) takes a fresh tag from a
//! [`RequestSequencer`]. A result is applied only if its tag is still the
//! latest one issued; anything older, or anything issued before the
//! screenshot was closed, is dropped.

use tracing::debug;

/// Monotonically increasing request identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestTag(u64);

impl RequestTag {
    pub fn value(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Debug, Default)]
pub struct RequestSequencer {
    latest: u64,
}

impl RequestSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue the next tag; it supersedes every earlier one.
    pub fn issue(&mut self) -> RequestTag {
        self.latest += 1;
        RequestTag(self.latest)
    }

    pub fn is_current(&self, tag: RequestTag) -> bool {
        tag.0 == self.latest
    }

    /// Make every tag issued so far stale without issuing a new request.
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }
}

/// What happened to a result offered to a [`LatestSlot`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Apply {
    Applied,
    Stale,
}

/// A single result slot that only accepts values carrying the current tag.
#[derive(Clone, Debug)]
pub struct LatestSlot<T> {
    sequencer: RequestSequencer,
    value: Option<T>,
}

impl<T> Default for LatestSlot<T> {
    fn default() -> Self {
        Self {
            sequencer: RequestSequencer::new(),
            value: None,
        }
    }
}

impl<T> LatestSlot<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new request. The slot keeps its old value until the result arrives.
    pub fn begin(&mut self) -> RequestTag {
        self.sequencer.issue()
    }

    pub fn is_pending(&self, tag: RequestTag) -> bool {
        self.sequencer.is_current(tag)
    }

    /// Store `value` if `tag` is the latest issued tag, otherwise discard it.
    pub fn offer(&mut self, tag: RequestTag, value: T) -> Apply {
        if self.sequencer.is_current(tag) {
            self.value = Some(value);
            Apply::Applied
        } else {
            debug!(tag = tag.value(), "discarding stale result");
            Apply::Stale
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Clear the value and invalidate in-flight requests.
    pub fn clear(&mut self) {
        self.sequencer.invalidate();
        self.value = None;
    }
}
