//! Login flow wired to real preference-backed tracker storage.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use gm_core::traits::{MockSiteLogin, SiteLogin, TrackingService};
use gm_core::GalleryError;
use gm_login::{LoginFlow, LoginForm, LoginOutcome};
use gm_prefs_memory::{MemoryPreferenceStore, StoredTrackingService};

/// Accepts exactly one username/password pair and counts attempts.
struct FakeSite {
    attempts: AtomicUsize,
}

#[async_trait]
impl SiteLogin for FakeSite {
    async fn login(&self, username: &str, password: &str, two_factor_code: &str) -> anyhow::Result<bool> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if two_factor_code == "000000" {
            anyhow::bail!("two-factor service unavailable");
        }
        Ok(username == "reader" && password == "correct horse")
    }
}

fn setup() -> (Arc<FakeSite>, Arc<StoredTrackingService<Arc<MemoryPreferenceStore>>>, LoginFlow) {
    let site = Arc::new(FakeSite {
        attempts: AtomicUsize::new(0),
    });
    let tracker = Arc::new(StoredTrackingService::new(Arc::new(MemoryPreferenceStore::new()), "mdlist"));
    let flow = LoginFlow::new(site.clone(), tracker.clone());
    (site, tracker, flow)
}

#[tokio::test]
async fn successful_login_prefills_next_dialog() {
    let (_, tracker, flow) = setup();
    assert_eq!(flow.stored_credentials(), (String::new(), String::new()));

    let outcome = flow
        .login(&LoginForm::new("reader", "correct horse"), std::future::pending())
        .await
        .unwrap();
    assert_eq!(outcome, LoginOutcome::Success);
    assert_eq!(outcome.message().as_deref(), Some("Login successful"));
    assert_eq!(tracker.username().as_deref(), Some("reader"));
    assert_eq!(
        flow.stored_credentials(),
        ("reader".to_string(), "correct horse".to_string())
    );
}

#[tokio::test]
async fn wrong_password_keeps_tracker_empty() {
    let (site, tracker, flow) = setup();
    let outcome = flow
        .login(&LoginForm::new("reader", "wrong"), std::future::pending())
        .await
        .unwrap();
    assert_eq!(outcome, LoginOutcome::InvalidCredentials);
    assert_eq!(site.attempts.load(Ordering::SeqCst), 1);
    assert_eq!(tracker.username(), None);
}

#[tokio::test]
async fn failures_are_discriminated() {
    let (_, _, flow) = setup();
    let form = LoginForm::new("reader", "correct horse").with_two_factor("000000");
    let outcome = flow.login(&form, std::future::pending()).await.unwrap();
    assert_eq!(
        outcome,
        LoginOutcome::NetworkFailure("two-factor service unavailable".into())
    );
}

#[tokio::test]
async fn blank_two_factor_is_rejected_before_the_site() {
    let (site, _, flow) = setup();
    let form = LoginForm::new("reader", "correct horse").with_two_factor("  ");
    let err = flow.login(&form, std::future::pending()).await.unwrap_err();
    assert!(matches!(err, GalleryError::Validation(_)));
    assert_eq!(site.attempts.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn dismissed_dialog_cancels_the_attempt() {
    let mut site = MockSiteLogin::new();
    site.expect_login().returning(|_, _, _| Ok(true));
    let tracker = Arc::new(StoredTrackingService::new(MemoryPreferenceStore::new(), "mdlist"));
    let flow = LoginFlow::new(Arc::new(site), tracker.clone());

    let outcome = flow
        .login(&LoginForm::new("reader", "correct horse"), async {})
        .await
        .unwrap();
    assert_eq!(outcome, LoginOutcome::Cancelled);
    assert_eq!(tracker.username(), None);
}
