//! # gm-login
//!
//! Source login flow: validates the form, calls the injected `SiteLogin`,
//! mirrors accepted credentials into the tracker and reports an outcome the
//! caller can match on.

use std::future::Future;
use std::sync::Arc;

use gm_core::error::{GalleryError, Result};
use gm_core::traits::{SiteLogin, TrackingService};
use secrecy::{ExposeSecret, SecretString};

/// What the user typed into the login dialog.
#[derive(Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: SecretString,
    pub two_factor_enabled: bool,
    pub two_factor_code: String,
}

impl LoginForm {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: SecretString::from(password.into()),
            two_factor_enabled: false,
            two_factor_code: String::new(),
        }
    }

    pub fn with_two_factor(mut self, code: impl Into<String>) -> Self {
        self.two_factor_enabled = true;
        self.two_factor_code = code.into();
        self
    }

    /// Rejects blank username/password, and a blank code when two-factor is on.
    pub fn validate(&self) -> Result<()> {
        let blank = self.username.trim().is_empty()
            || self.password.expose_secret().trim().is_empty()
            || (self.two_factor_enabled && self.two_factor_code.trim().is_empty());
        if blank {
            return Err(GalleryError::Validation("fields cannot be blank".into()));
        }
        Ok(())
    }

    fn two_factor(&self) -> &str {
        if self.two_factor_enabled {
            self.two_factor_code.trim()
        } else {
            ""
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Success,
    /// The site answered but refused the credentials
    InvalidCredentials,
    /// The login call itself failed; carries the error text
    NetworkFailure(String),
    /// The dialog went away before the site answered
    Cancelled,
}

impl LoginOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, LoginOutcome::Success)
    }

    /// One-shot text for the user. `None` when nothing should be shown.
    pub fn message(&self) -> Option<String> {
        match self {
            LoginOutcome::Success => Some("Login successful".into()),
            LoginOutcome::InvalidCredentials => Some("Invalid username or password".into()),
            LoginOutcome::NetworkFailure(msg) if !msg.is_empty() => Some(msg.clone()),
            LoginOutcome::NetworkFailure(_) => Some("Unknown error".into()),
            LoginOutcome::Cancelled => None,
        }
    }
}

pub struct LoginFlow {
    source: Arc<dyn SiteLogin>,
    tracker: Arc<dyn TrackingService>,
}

impl LoginFlow {
    pub fn new(source: Arc<dyn SiteLogin>, tracker: Arc<dyn TrackingService>) -> Self {
        Self { source, tracker }
    }

    /// Username and password to pre-fill the dialog with.
    pub fn stored_credentials(&self) -> (String, String) {
        (
            self.tracker.username().unwrap_or_default(),
            self.tracker.password().unwrap_or_default(),
        )
    }

    /// Runs a single login attempt.
    ///
    /// Blank fields are a `Validation` error and never reach the site.
    /// Everything after validation is an outcome, not an error. If
    /// `dismissed` resolves first the attempt is dropped.
    pub async fn login<D>(&self, form: &LoginForm, dismissed: D) -> Result<LoginOutcome>
    where
        D: Future<Output = ()>,
    {
        form.validate()?;

        let attempt = self
            .source
            .login(&form.username, form.password.expose_secret(), form.two_factor());

        let result = tokio::select! {
            biased;
            _ = dismissed => {
                tracing::info!(username = %form.username, "login dismissed before completion");
                return Ok(LoginOutcome::Cancelled);
            }
            result = attempt => result,
        };

        let outcome = match result {
            Ok(true) => {
                if let Err(e) = self
                    .tracker
                    .set_credentials(&form.username, form.password.expose_secret())
                {
                    tracing::warn!(error = %e, "logged in but could not store tracker credentials");
                }
                LoginOutcome::Success
            }
            Ok(false) => LoginOutcome::InvalidCredentials,
            Err(e) => LoginOutcome::NetworkFailure(e.to_string()),
        };

        match &outcome {
            LoginOutcome::Success => tracing::info!(username = %form.username, "login succeeded"),
            other => tracing::warn!(username = %form.username, outcome = ?other, "login failed"),
        }
        Ok(outcome)
    }
}
