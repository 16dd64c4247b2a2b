//! Scripted interaction with the operator's eligibility form.
//!
//! The page is a Drupal form: a phone input, a GDPR consent checkbox and
//! a submit button, with the verdict injected into an AJAX result panel.
//! The whole interaction runs under one deadline so a stuck page cannot
//! hold a session slot open indefinitely.

use async_trait::async_trait;
use chromiumoxide::element::Element;
use chromiumoxide::page::Page;
use ferrule_application::ports::PageAcquirer;
use ferrule_domain::config::ScraperConfig;
use ferrule_domain::{DomainError, PhoneNumber};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};
use tracing::debug;

use super::BrowserPool;

const PHONE_INPUT: &str = "#edit-phone-number";
const CONSENT_CHECKBOX: &str = "#edit-gdpr";
const SUBMIT_BUTTON: &str = "#edit-submit";
const RESULT_CONTAINER: &str = "#ajax-opt-eligibility-result";

/// How long to keep polling for a single element before giving up on it.
/// The per-call deadline still caps the interaction as a whole.
const ELEMENT_WAIT: Duration = Duration::from_secs(10);
const ELEMENT_POLL: Duration = Duration::from_millis(100);

/// [`PageAcquirer`] backed by a pooled headless Chromium.
pub struct OptScraper {
    settings: ScraperConfig,
    pool: Arc<BrowserPool>,
}

impl OptScraper {
    pub fn new(settings: ScraperConfig, pool: Arc<BrowserPool>) -> Self {
        Self { settings, pool }
    }

    async fn drive_form(&self, page: &Page, phone: &PhoneNumber) -> Result<String, DomainError> {
        page.goto(self.settings.target_url.as_str())
            .await
            .map_err(|e| DomainError::BrowserSession(format!("navigation failed: {e}")))?;

        let settle = Duration::from_millis(self.settings.form_settle_ms);

        let input = wait_for_element(page, PHONE_INPUT).await?;
        input
            .click()
            .await
            .map_err(|e| DomainError::BrowserSession(format!("phone input click failed: {e}")))?
            .type_str(phone.as_str())
            .await
            .map_err(|e| DomainError::BrowserSession(format!("phone input typing failed: {e}")))?;
        tokio::time::sleep(settle).await;

        wait_for_element(page, CONSENT_CHECKBOX)
            .await?
            .click()
            .await
            .map_err(|e| DomainError::BrowserSession(format!("consent click failed: {e}")))?;
        tokio::time::sleep(settle).await;

        wait_for_element(page, SUBMIT_BUTTON)
            .await?
            .click()
            .await
            .map_err(|e| DomainError::BrowserSession(format!("submit click failed: {e}")))?;

        // The verdict arrives over AJAX; give it time to land before
        // looking for the panel.
        tokio::time::sleep(Duration::from_millis(self.settings.result_wait_ms)).await;

        wait_for_element(page, RESULT_CONTAINER).await?;

        let js = format!(
            r#"(() => {{
                const panel = document.querySelector('{RESULT_CONTAINER}');
                return panel ? panel.innerHTML : '';
            }})()"#
        );

        let value = page
            .evaluate(js.as_str())
            .await
            .map_err(|e| DomainError::BrowserSession(format!("result extraction failed: {e}")))?;

        let markup: String = value.into_value().map_err(|e| {
            DomainError::BrowserSession(format!("unexpected result payload: {e}"))
        })?;

        Ok(markup)
    }
}

#[async_trait]
impl PageAcquirer for OptScraper {
    async fn acquire(&self, phone: &PhoneNumber) -> Result<String, DomainError> {
        let deadline = Instant::now() + Duration::from_secs(self.settings.page_timeout_secs);

        // Waiting for a pool slot counts against the deadline too.
        let session = match timeout_at(deadline, self.pool.checkout()).await {
            Ok(result) => result?,
            Err(_) => return Err(DomainError::LookupTimeout),
        };

        debug!(phone = %phone, "Driving eligibility form");

        let outcome = match timeout_at(deadline, self.drive_form(session.page(), phone)).await {
            Ok(result) => result,
            Err(_) => Err(DomainError::LookupTimeout),
        };

        // The page handle outlives the timed-out future, so the tab is
        // closed on every path.
        session.close().await;

        if let Ok(markup) = &outcome {
            debug!(phone = %phone, bytes = markup.len(), "Result panel captured");
        }

        outcome
    }
}

async fn wait_for_element(page: &Page, selector: &str) -> Result<Element, DomainError> {
    let give_up = Instant::now() + ELEMENT_WAIT;

    loop {
        match page.find_element(selector).await {
            Ok(element) => return Ok(element),
            Err(_) if Instant::now() < give_up => {
                tokio::time::sleep(ELEMENT_POLL).await;
            }
            Err(_) => return Err(DomainError::ElementNotFound(selector.to_string())),
        }
    }
}
