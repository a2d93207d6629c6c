//! The communicator directory.
//!
//! The parser only ever asks two questions of the set of known
//! communicators: "who answers to exactly this name?" and "does any name
//! start with this text?". [`Directory`] captures those two questions;
//! [`Roster`] is the stock implementation.

use std::ops::Bound;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::callsign::{Callsign, Identity};
use crate::error::{Error, ErrorKind, Result};

/// Read-only lookup of known communicators.
pub trait Directory {
    /// Finds the communicator whose callsign is exactly `name`.
    fn lookup(&self, name: &str) -> Option<Arc<Identity>>;

    /// Returns true if any known callsign starts with `prefix`.
    ///
    /// A callsign equal to `prefix` counts.
    fn has_prefix(&self, prefix: &str) -> bool;
}

impl<D: Directory + ?Sized> Directory for &D {
    fn lookup(&self, name: &str) -> Option<Arc<Identity>> {
        (**self).lookup(name)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        (**self).has_prefix(prefix)
    }
}

impl<D: Directory + ?Sized> Directory for Arc<D> {
    fn lookup(&self, name: &str) -> Option<Arc<Identity>> {
        (**self).lookup(name)
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        (**self).has_prefix(prefix)
    }
}

/// Persistent set of known communicators, ordered by callsign.
///
/// Cloning is O(1): a clone is an independent snapshot sharing structure
/// with the original, so parses can run against one snapshot while another
/// is being edited.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(into = "Vec<Identity>", try_from = "Vec<Identity>")
)]
pub struct Roster {
    members: im::OrdMap<Callsign, Arc<Identity>>,
}

impl Roster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a roster from identities, rejecting duplicates.
    ///
    /// # Errors
    ///
    /// Returns an error if two identities share a callsign or a callsign is
    /// blank.
    pub fn from_identities(identities: impl IntoIterator<Item = Identity>) -> Result<Self> {
        let mut roster = Self::new();
        for identity in identities {
            roster.register(identity)?;
        }
        Ok(roster)
    }

    /// Adds a communicator.
    ///
    /// # Errors
    ///
    /// Returns an error if the callsign is blank or already registered.
    pub fn register(&mut self, identity: Identity) -> Result<Arc<Identity>> {
        if identity.callsign.as_str().trim().is_empty() {
            return Err(Error::new(ErrorKind::EmptyCallsign));
        }
        if self.members.contains_key(&identity.callsign) {
            return Err(Error::duplicate_callsign(identity.callsign.as_str()));
        }
        let identity = Arc::new(identity);
        self.members
            .insert(identity.callsign.clone(), Arc::clone(&identity));
        Ok(identity)
    }

    /// Returns a new roster with the communicator added.
    ///
    /// # Errors
    ///
    /// Returns an error if the callsign is blank or already registered.
    pub fn with(&self, identity: Identity) -> Result<Self> {
        let mut next = self.clone();
        next.register(identity)?;
        Ok(next)
    }

    /// Returns the number of known communicators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if no communicators are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterates communicators in callsign order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Identity>> {
        self.members.values()
    }
}

impl Directory for Roster {
    fn lookup(&self, name: &str) -> Option<Arc<Identity>> {
        self.members.get(name).cloned()
    }

    fn has_prefix(&self, prefix: &str) -> bool {
        // Every name starting with `prefix` sorts at or after it, and the
        // first such key is the smallest one >= prefix.
        self.members
            .range::<_, str>((Bound::Included(prefix), Bound::Unbounded))
            .next()
            .is_some_and(|(name, _)| name.as_str().starts_with(prefix))
    }
}

impl From<Roster> for Vec<Identity> {
    fn from(roster: Roster) -> Self {
        roster.iter().map(|identity| (**identity).clone()).collect()
    }
}

impl TryFrom<Vec<Identity>> for Roster {
    type Error = Error;

    fn try_from(identities: Vec<Identity>) -> Result<Self> {
        Self::from_identities(identities)
    }
}
