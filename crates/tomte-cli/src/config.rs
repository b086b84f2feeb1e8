//! Exchange configuration.
//!
//! One TOML file describes a whole draw: the SMTP submission settings and
//! the participant list. The SMTP password may live in the file or arrive
//! through the `TOMTE_SMTP_PASSWORD` environment variable; the variable
//! wins when both are set.
//!
//! ```toml
//! [smtp]
//! relay = "smtp.gmail.com"
//! sender = "Santa <santa@example.org>"
//!
//! [[participants]]
//! name = "Alice"
//! email = "alice@example.org"
//! ```

use std::path::Path;

use secrecy::SecretString;
use serde::Deserialize;
use tomte_core::Participant;
use tomte_dispatch::SmtpConfig;

use crate::error::CliError;

/// Environment variable overriding the configured SMTP password.
pub const PASSWORD_ENV: &str = "TOMTE_SMTP_PASSWORD";

/// Everything one draw needs: transport settings plus the participants.
#[derive(Debug, Clone, Deserialize)]
pub struct ExchangeConfig {
    /// SMTP submission settings.
    pub smtp: SmtpConfig,
    /// Participants in roster order.
    #[serde(default)]
    pub participants: Vec<Participant>,
}

impl ExchangeConfig {
    /// Load a config file and apply the environment password override.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Io`] when the file cannot be read and
    /// [`CliError::Config`] when it does not parse.
    pub fn load(path: &Path) -> Result<Self, CliError> {
        let mut config = Self::from_file(path)?;
        config.apply_password_env();
        Ok(config)
    }

    /// Read and parse a config file, without environment overrides.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Io`] when the file cannot be read and
    /// [`CliError::Config`] when it does not parse.
    pub fn from_file(path: &Path) -> Result<Self, CliError> {
        let content = std::fs::read_to_string(path).map_err(CliError::Io)?;
        Self::from_toml(&content)
    }

    /// Parse config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] when the text does not parse.
    pub fn from_toml(content: &str) -> Result<Self, CliError> {
        toml::from_str(content).map_err(|err| CliError::Config(err.to_string()))
    }

    /// Replace the password with `TOMTE_SMTP_PASSWORD` when the variable
    /// is set and non-empty.
    pub fn apply_password_env(&mut self) {
        self.apply_password_override(std::env::var(PASSWORD_ENV).ok());
    }

    /// Override logic behind [`Self::apply_password_env`]: an unset or
    /// empty variable leaves the configured password alone.
    fn apply_password_override(&mut self, value: Option<String>) {
        if let Some(value) = value
            && !value.is_empty()
        {
            self.smtp.password = Some(SecretString::from(value));
        }
    }

    /// Fail when no password is available from any source.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::Config`] naming both sources when neither the
    /// config file nor the environment supplied a password.
    pub fn require_password(&self) -> Result<(), CliError> {
        if self.smtp.password.is_none() {
            return Err(CliError::Config(format!(
                "no SMTP password: set smtp.password in the config file or the {PASSWORD_ENV} \
                 environment variable"
            )));
        }
        Ok(())
    }
}
