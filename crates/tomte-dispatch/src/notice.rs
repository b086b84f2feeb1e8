//! Assignment notices.
//!
//! A notice is the rendered private message for one giver: the address it
//! goes to and the text revealing their assigned receiver. Rendering is
//! separate from delivery so every transport sends the same words.

use tomte_core::SessionAction;

/// Subject line for every assignment notice.
pub const SUBJECT: &str = "Your Secret Santa Assignment! 🎅";

/// One private assignment message, addressed and ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    giver: String,
    to: String,
    receiver: String,
}

impl Notice {
    /// Build the notice for one giver.
    pub fn new(
        giver: impl Into<String>,
        to: impl Into<String>,
        receiver: impl Into<String>,
    ) -> Self {
        Self { giver: giver.into(), to: to.into(), receiver: receiver.into() }
    }

    /// Collect the notices a batch of session actions asks for.
    ///
    /// Log actions pass through untouched; only notify actions become
    /// notices, in the order the session emitted them.
    #[must_use]
    pub fn from_actions(actions: &[SessionAction]) -> Vec<Self> {
        actions
            .iter()
            .filter_map(|action| match action {
                SessionAction::Notify { giver, contact, receiver } => {
                    Some(Self::new(giver.clone(), contact.clone(), receiver.clone()))
                },
                SessionAction::Log { .. } => None,
            })
            .collect()
    }

    /// Giver this notice is for.
    #[must_use]
    pub fn giver(&self) -> &str {
        &self.giver
    }

    /// Address the notice is delivered to.
    #[must_use]
    pub fn to(&self) -> &str {
        &self.to
    }

    /// Receiver the notice reveals.
    #[must_use]
    pub fn receiver(&self) -> &str {
        &self.receiver
    }

    /// Subject line.
    #[must_use]
    pub fn subject(&self) -> &'static str {
        SUBJECT
    }

    /// Plain-text body greeting the giver and naming their receiver.
    #[must_use]
    pub fn body(&self) -> String {
        format!(
            "Hi {giver}!\n\nYou are the Secret Santa for: {receiver}\n\nHappy gifting! 🎁",
            giver = self.giver,
            receiver = self.receiver,
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn subject_is_stable() {
        let notice = Notice::new("Alice", "alice@example.org", "Bob");
        insta::assert_snapshot!(notice.subject(), @"Your Secret Santa Assignment! 🎅");
    }

    #[test]
    fn body_greets_giver_and_names_receiver() {
        let notice = Notice::new("Alice", "alice@example.org", "Bob");
        insta::assert_snapshot!(notice.body(), @r"
        Hi Alice!

        You are the Secret Santa for: Bob

        Happy gifting! 🎁
        ");
    }

    #[test]
    fn body_never_mentions_other_pairings() {
        let notice = Notice::new("Alice", "alice@example.org", "Bob");
        let body = notice.body();

        assert!(body.contains("Bob"));
        assert!(!body.contains("Carol"));
    }

    #[test]
    fn from_actions_keeps_notify_order_and_drops_logs() {
        let actions = vec![
            SessionAction::Notify {
                giver: "Alice".to_string(),
                contact: "alice@example.org".to_string(),
                receiver: "Bob".to_string(),
            },
            SessionAction::Log { message: "halfway".to_string() },
            SessionAction::Notify {
                giver: "Bob".to_string(),
                contact: "bob@example.org".to_string(),
                receiver: "Alice".to_string(),
            },
        ];

        let notices = Notice::from_actions(&actions);

        assert_eq!(
            notices,
            vec![
                Notice::new("Alice", "alice@example.org", "Bob"),
                Notice::new("Bob", "bob@example.org", "Alice"),
            ]
        );
    }
}
