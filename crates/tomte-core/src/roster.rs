//! In-session participant roster.
//!
//! The roster is the mutable half of a session: the people still in the
//! upcoming draw. Entries are normalized and validated on the way in, so
//! the draw can assume a clean, unique name set.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One person in the draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    /// Display name, unique within a roster.
    pub name: String,
    /// Address the assignment notice is sent to.
    #[serde(alias = "email")]
    pub contact: String,
}

impl Participant {
    /// Create a participant from raw input.
    pub fn new(name: impl Into<String>, contact: impl Into<String>) -> Self {
        Self { name: name.into(), contact: contact.into() }
    }
}

/// Errors from roster mutation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RosterError {
    /// Participant name was empty after trimming.
    #[error("participant name is empty")]
    EmptyName,

    /// Contact address was empty after trimming.
    #[error("contact address is empty for {name}")]
    EmptyContact {
        /// Name of the entry missing a contact address.
        name: String,
    },

    /// Another participant already uses this name.
    #[error("duplicate participant name: {name}")]
    DuplicateName {
        /// The name that is already taken.
        name: String,
    },

    /// No participant with this name exists.
    #[error("unknown participant: {name}")]
    UnknownParticipant {
        /// The name that was looked up.
        name: String,
    },
}

/// Validated, insertion-ordered participant list for one draw.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    /// Create an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self { participants: Vec::new() }
    }

    /// Number of participants.
    #[must_use]
    pub fn len(&self) -> usize {
        self.participants.len()
    }

    /// Whether the roster has no participants.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    /// Whether a participant with this name is present.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p.name == name)
    }

    /// Contact address for a participant, if present.
    #[must_use]
    pub fn contact(&self, name: &str) -> Option<&str> {
        self.participants.iter().find(|p| p.name == name).map(|p| p.contact.as_str())
    }

    /// Participant names in insertion order.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.participants.iter().map(|p| p.name.clone()).collect()
    }

    /// Iterate over participants in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.participants.iter()
    }

    /// Add a participant, trimming surrounding whitespace from both fields.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::EmptyName`] or [`RosterError::EmptyContact`]
    /// when a field is blank, and [`RosterError::DuplicateName`] when the
    /// name is already taken. The roster is unchanged on error.
    pub fn add(&mut self, participant: Participant) -> Result<(), RosterError> {
        let name = participant.name.trim();
        if name.is_empty() {
            return Err(RosterError::EmptyName);
        }
        let contact = participant.contact.trim();
        if contact.is_empty() {
            return Err(RosterError::EmptyContact { name: name.to_string() });
        }
        if self.contains(name) {
            return Err(RosterError::DuplicateName { name: name.to_string() });
        }

        self.participants.push(Participant::new(name, contact));
        Ok(())
    }

    /// Remove a participant by name, returning the removed entry.
    ///
    /// The lookup name is trimmed the same way [`Roster::add`] trims on
    /// the way in, so `" Alice "` removes the entry stored as `Alice`.
    ///
    /// # Errors
    ///
    /// Returns [`RosterError::UnknownParticipant`] when no entry matches.
    pub fn remove(&mut self, name: &str) -> Result<Participant, RosterError> {
        let name = name.trim();
        let index = self
            .participants
            .iter()
            .position(|p| p.name == name)
            .ok_or_else(|| RosterError::UnknownParticipant { name: name.to_string() })?;

        Ok(self.participants.remove(index))
    }

    /// Discard every participant.
    pub fn clear(&mut self) {
        self.participants.clear();
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn alice() -> Participant {
        Participant::new("Alice", "alice@example.org")
    }

    #[test]
    fn add_stores_participant() {
        let mut roster = Roster::new();
        roster.add(alice()).unwrap();

        assert_eq!(roster.len(), 1);
        assert!(roster.contains("Alice"));
        assert_eq!(roster.contact("Alice"), Some("alice@example.org"));
    }

    #[test]
    fn add_trims_whitespace() {
        let mut roster = Roster::new();
        roster.add(Participant::new("  Alice ", " alice@example.org  ")).unwrap();

        assert!(roster.contains("Alice"));
        assert_eq!(roster.contact("Alice"), Some("alice@example.org"));
    }

    #[test]
    fn add_rejects_empty_name() {
        let mut roster = Roster::new();
        let result = roster.add(Participant::new("   ", "alice@example.org"));

        assert_eq!(result, Err(RosterError::EmptyName));
        assert!(roster.is_empty());
    }

    #[test]
    fn add_rejects_empty_contact() {
        let mut roster = Roster::new();
        let result = roster.add(Participant::new("Alice", " "));

        assert_eq!(result, Err(RosterError::EmptyContact { name: "Alice".to_string() }));
        assert!(roster.is_empty());
    }

    #[test]
    fn add_rejects_duplicate_name() {
        let mut roster = Roster::new();
        roster.add(alice()).unwrap();
        let result = roster.add(Participant::new("Alice", "other@example.org"));

        assert_eq!(result, Err(RosterError::DuplicateName { name: "Alice".to_string() }));
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.contact("Alice"), Some("alice@example.org"));
    }

    #[test]
    fn duplicate_check_applies_after_trimming() {
        let mut roster = Roster::new();
        roster.add(alice()).unwrap();
        let result = roster.add(Participant::new(" Alice ", "other@example.org"));

        assert_eq!(result, Err(RosterError::DuplicateName { name: "Alice".to_string() }));
    }

    #[test]
    fn remove_returns_entry() {
        let mut roster = Roster::new();
        roster.add(alice()).unwrap();
        roster.add(Participant::new("Bob", "bob@example.org")).unwrap();

        let removed = roster.remove("Alice").unwrap();

        assert_eq!(removed, alice());
        assert_eq!(roster.len(), 1);
        assert!(!roster.contains("Alice"));
    }

    #[test]
    fn remove_trims_lookup_name() {
        let mut roster = Roster::new();
        roster.add(Participant::new(" Alice ", "alice@example.org")).unwrap();

        let removed = roster.remove("  Alice ").unwrap();

        assert_eq!(removed, alice());
        assert!(roster.is_empty());
    }

    #[test]
    fn remove_unknown_fails() {
        let mut roster = Roster::new();
        let result = roster.remove("Nobody");

        assert_eq!(result, Err(RosterError::UnknownParticipant { name: "Nobody".to_string() }));
    }

    #[test]
    fn names_follow_insertion_order() {
        let mut roster = Roster::new();
        roster.add(Participant::new("Carol", "carol@example.org")).unwrap();
        roster.add(alice()).unwrap();
        roster.add(Participant::new("Bob", "bob@example.org")).unwrap();

        assert_eq!(roster.names(), vec!["Carol", "Alice", "Bob"]);
    }

    #[test]
    fn clear_empties_roster() {
        let mut roster = Roster::new();
        roster.add(alice()).unwrap();
        roster.clear();

        assert!(roster.is_empty());
    }
}
