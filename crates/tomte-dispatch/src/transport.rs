//! Outbound transports.
//!
//! [`Transport`] is the seam between notice rendering and actual delivery:
//! one call, one message, one attempt. The production implementation is
//! [`SmtpPost`], mail submission over STARTTLS through lettre; tests plug
//! in scripted implementations instead.

use std::fmt;

use lettre::{
    Message, SmtpTransport,
    message::{Mailbox, header::ContentType},
    transport::smtp::authentication::Credentials,
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use crate::{error::DeliveryError, notice::Notice};

/// Default mail submission port (STARTTLS).
pub const SUBMISSION_PORT: u16 = 587;

/// Single-attempt outbound channel for notices.
pub trait Transport {
    /// Hand one notice to the channel for a single delivery attempt.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError`] on any fault. The caller records the
    /// failure and continues with the next recipient.
    fn deliver(&self, notice: &Notice) -> Result<(), DeliveryError>;
}

/// SMTP submission settings and sender identity.
///
/// The password stays wrapped until connection time and never shows up in
/// `Debug` output or logs.
#[derive(Clone, Deserialize)]
pub struct SmtpConfig {
    /// Relay host, e.g. `smtp.gmail.com`.
    pub relay: String,
    /// Submission port.
    #[serde(default = "default_port")]
    pub port: u16,
    /// Sender mailbox, e.g. `Santa <santa@example.org>` or a bare address.
    pub sender: String,
    /// Login username. Defaults to the sender's bare address.
    #[serde(default)]
    pub username: Option<String>,
    /// Login password.
    #[serde(default)]
    pub password: Option<SecretString>,
}

fn default_port() -> u16 {
    SUBMISSION_PORT
}

impl SmtpConfig {
    /// Username to authenticate as: the explicit `username` when set,
    /// otherwise the sender's bare address.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::InvalidAddress`] when the fallback is
    /// needed and the sender mailbox does not parse.
    pub fn login_user(&self) -> Result<String, DeliveryError> {
        match &self.username {
            Some(user) => Ok(user.clone()),
            None => Ok(self.sender_mailbox()?.email.to_string()),
        }
    }

    pub(crate) fn sender_mailbox(&self) -> Result<Mailbox, DeliveryError> {
        parse_mailbox(&self.sender)
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("relay", &self.relay)
            .field("port", &self.port)
            .field("sender", &self.sender)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

fn parse_mailbox(raw: &str) -> Result<Mailbox, DeliveryError> {
    raw.parse().map_err(|err: lettre::address::AddressError| DeliveryError::InvalidAddress {
        reason: format!("{raw}: {err}"),
    })
}

/// Production transport: SMTP submission with STARTTLS.
///
/// Construction only derives connection parameters; no network contact
/// happens before the first delivery.
pub struct SmtpPost {
    mailer: SmtpTransport,
    sender: Mailbox,
}

impl SmtpPost {
    /// Build the transport from config.
    ///
    /// # Errors
    ///
    /// Returns [`DeliveryError::InvalidAddress`] when the sender mailbox
    /// does not parse and [`DeliveryError::Transport`] when the relay name
    /// is unusable or no password is configured.
    pub fn new(config: &SmtpConfig) -> Result<Self, DeliveryError> {
        let sender = config.sender_mailbox()?;

        let password = config.password.as_ref().ok_or_else(|| DeliveryError::Transport {
            reason: "no SMTP password configured".to_string(),
        })?;
        let credentials =
            Credentials::new(config.login_user()?, password.expose_secret().to_string());

        let mailer = SmtpTransport::starttls_relay(&config.relay)
            .map_err(|err| DeliveryError::Transport { reason: err.to_string() })?
            .port(config.port)
            .credentials(credentials)
            .build();

        Ok(Self { mailer, sender })
    }
}

impl Transport for SmtpPost {
    fn deliver(&self, notice: &Notice) -> Result<(), DeliveryError> {
        let to = parse_mailbox(notice.to())?;

        let message = Message::builder()
            .from(self.sender.clone())
            .to(to)
            .subject(notice.subject())
            .header(ContentType::TEXT_PLAIN)
            .body(notice.body())
            .map_err(|err| DeliveryError::Message { reason: err.to_string() })?;

        use lettre::Transport as _;
        self.mailer
            .send(&message)
            .map_err(|err| DeliveryError::Transport { reason: err.to_string() })?;

        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn config() -> SmtpConfig {
        SmtpConfig {
            relay: "smtp.example.org".to_string(),
            port: SUBMISSION_PORT,
            sender: "Santa <santa@example.org>".to_string(),
            username: None,
            password: Some(SecretString::from("hunter2")),
        }
    }

    #[test]
    fn debug_redacts_password() {
        let rendered = format!("{:?}", config());

        insta::assert_snapshot!(
            rendered,
            @r#"SmtpConfig { relay: "smtp.example.org", port: 587, sender: "Santa <santa@example.org>", username: None, password: Some("<redacted>") }"#
        );
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn login_user_defaults_to_sender_address() {
        assert_eq!(config().login_user().unwrap(), "santa@example.org");
    }

    #[test]
    fn explicit_username_wins() {
        let mut config = config();
        config.username = Some("relay-login".to_string());

        assert_eq!(config.login_user().unwrap(), "relay-login");
    }

    #[test]
    fn post_builds_without_network_contact() {
        assert!(SmtpPost::new(&config()).is_ok());
    }

    #[test]
    fn missing_password_is_rejected() {
        let mut config = config();
        config.password = None;

        let result = SmtpPost::new(&config);

        assert!(matches!(result, Err(DeliveryError::Transport { .. })));
    }

    #[test]
    fn malformed_sender_is_rejected() {
        let mut config = config();
        config.sender = "not an address".to_string();

        let result = SmtpPost::new(&config);

        assert!(matches!(result, Err(DeliveryError::InvalidAddress { .. })));
    }
}
