use ferrule_domain::{EligibilityReport, PhoneNumber};

/// Turns the raw result-panel markup into a structured report.
///
/// Classification is pure string work, so the port is synchronous. The
/// returned report carries the original markup in `raw_html`; boundaries
/// that do not want it call [`EligibilityReport::without_raw_html`].
pub trait MarkupClassifier: Send + Sync {
    fn classify(&self, markup: &str, phone: &PhoneNumber) -> EligibilityReport;
}
