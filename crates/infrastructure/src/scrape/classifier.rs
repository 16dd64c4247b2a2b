//! Phrase-table classification of the result panel markup.
//!
//! The operator's page announces verdicts with fixed French phrases, so
//! classification is plain substring matching over the panel HTML. The
//! phrases are load-bearing: if the page wording changes, sections come
//! back as `Unknown` rather than wrong.

use ferrule_application::ports::MarkupClassifier;
use ferrule_domain::{
    AdslEligibility, EligibilityReport, EligibilityStatus, FiberEligibility, IspProvider,
    PhoneNumber,
};

const NOT_FOUND_MARKER: &str = "Oups, ce numéro est introuvable";
const NOT_FOUND_MESSAGE: &str =
    "Numéro introuvable. Contactez le 1000 si vous pensez qu'il s'agit d'une erreur.";

const ADSL_SECTION: &str = "Eligibilité ADSL";
// Checked before ELIGIBLE, which it contains as a suffix.
const NON_ELIGIBLE: &str = "non éligible";
const ELIGIBLE: &str = "éligible";
const ADSL_INCOMPATIBLE_MESSAGE: &str =
    "L'offre souscrite sur votre ligne n'est pas compatible avec l'ADSL.";

const FIBER_SECTION: &str = "Eligibilité THD";
const FIBER_UNAVAILABLE: &str = "Fibre optique pas disponible";
const FIBER_AVAILABLE: &str = "Fibre optique disponible";
const FIBER_PENDING_MESSAGE: &str = "Votre ligne n'est pas encore éligible à la fibre optique. \
     La fibre n'est pas encore disponible à votre adresse.";

const CONTACT_PRIMARY: &str = "1016";
const CONTACT_FALLBACK: &str = "1000";

/// Known ISPs, matched and reported in this order.
const ISP_CATALOG: &[(&str, &str)] = &[
    ("can'l", "http://www.canl.nc/"),
    ("InternetNC", "http://www.internetnc.nc/"),
    ("Lagoon", "http://www.lagoon.nc/"),
    ("MLS", "http://www.mls.nc/"),
    ("Nautile", "http://www.nautile.nc/"),
];

/// Classify one result panel into a structured report.
///
/// The returned report always carries the input markup in `raw_html`.
/// An unknown number short-circuits to a not-found report; otherwise each
/// section is read independently, and a section marker without any of its
/// verdict phrases yields [`EligibilityStatus::Unknown`].
pub fn classify_markup(markup: &str, phone: &PhoneNumber) -> EligibilityReport {
    let mut report = EligibilityReport::new(phone.clone());
    report.raw_html = Some(markup.to_string());

    if markup.contains(NOT_FOUND_MARKER) {
        report.error_message = Some(NOT_FOUND_MESSAGE.to_string());
        return report;
    }

    report.found = true;

    if markup.contains(ADSL_SECTION) {
        let adsl = if markup.contains(NON_ELIGIBLE) {
            AdslEligibility {
                status: EligibilityStatus::NonEligible,
                message: Some(ADSL_INCOMPATIBLE_MESSAGE.to_string()),
            }
        } else if markup.contains(ELIGIBLE) {
            AdslEligibility {
                status: EligibilityStatus::Eligible,
                message: None,
            }
        } else {
            AdslEligibility {
                status: EligibilityStatus::Unknown,
                message: None,
            }
        };
        report.adsl = Some(adsl);
    }

    if markup.contains(FIBER_SECTION) {
        let fiber = if markup.contains(FIBER_UNAVAILABLE) {
            FiberEligibility {
                status: EligibilityStatus::NonEligible,
                available: false,
                message: Some(FIBER_PENDING_MESSAGE.to_string()),
                installation: None,
            }
        } else if markup.contains(FIBER_AVAILABLE) {
            FiberEligibility {
                status: EligibilityStatus::Eligible,
                available: true,
                message: None,
                installation: None,
            }
        } else {
            FiberEligibility {
                status: EligibilityStatus::Unknown,
                available: false,
                message: None,
                installation: None,
            }
        };
        report.fiber = Some(fiber);
    }

    if markup.contains(CONTACT_PRIMARY) {
        report.contact_phone = Some(CONTACT_PRIMARY.to_string());
    } else if markup.contains(CONTACT_FALLBACK) {
        report.contact_phone = Some(CONTACT_FALLBACK.to_string());
    }

    for (name, url) in ISP_CATALOG {
        if markup.contains(name) {
            report.isp_providers.push(IspProvider {
                name: (*name).to_string(),
                url: (*url).to_string(),
            });
        }
    }

    report
}

/// [`MarkupClassifier`] over the fixed phrase table.
pub struct PhraseClassifier;

impl PhraseClassifier {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PhraseClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkupClassifier for PhraseClassifier {
    fn classify(&self, markup: &str, phone: &PhoneNumber) -> EligibilityReport {
        classify_markup(markup, phone)
    }
}
