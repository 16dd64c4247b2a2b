use ferrule_domain::{
    AdslEligibility, EligibilityReport, EligibilityStatus, FiberEligibility, IspProvider,
    PhoneNumber,
};

fn phone() -> PhoneNumber {
    PhoneNumber::parse("257364").unwrap()
}

#[test]
fn test_new_report_starts_not_found() {
    let report = EligibilityReport::new(phone());

    assert!(!report.found);
    assert!(report.error_message.is_none());
    assert!(report.adsl.is_none());
    assert!(report.fiber.is_none());
    assert!(report.contact_phone.is_none());
    assert!(report.isp_providers.is_empty());
    assert!(report.raw_html.is_none());
}

#[test]
fn test_status_wire_names_are_kebab_case() {
    assert_eq!(EligibilityStatus::Eligible.as_str(), "eligible");
    assert_eq!(EligibilityStatus::NonEligible.as_str(), "non-eligible");
    assert_eq!(EligibilityStatus::Unknown.as_str(), "unknown");

    let json = serde_json::to_value(EligibilityStatus::NonEligible).unwrap();
    assert_eq!(json, serde_json::json!("non-eligible"));
}

#[test]
fn test_serialized_report_omits_empty_fields() {
    let report = EligibilityReport::new(phone());
    let json = serde_json::to_value(&report).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj["phone_number"], serde_json::json!("257364"));
    assert_eq!(obj["found"], serde_json::json!(false));
    assert!(obj.contains_key("checked_at"));
    assert!(!obj.contains_key("error_message"));
    assert!(!obj.contains_key("adsl"));
    assert!(!obj.contains_key("fiber"));
    assert!(!obj.contains_key("contact_phone"));
    assert!(!obj.contains_key("isp_providers"));
    assert!(!obj.contains_key("raw_html"));
}

#[test]
fn test_serialized_report_includes_populated_fields() {
    let mut report = EligibilityReport::new(phone());
    report.found = true;
    report.adsl = Some(AdslEligibility {
        status: EligibilityStatus::Eligible,
        message: None,
    });
    report.fiber = Some(FiberEligibility {
        status: EligibilityStatus::NonEligible,
        available: false,
        message: Some("pas encore disponible".to_string()),
        installation: None,
    });
    report.contact_phone = Some("1016".to_string());
    report.isp_providers = vec![IspProvider {
        name: "Lagoon".to_string(),
        url: "http://www.lagoon.nc/".to_string(),
    }];

    let json = serde_json::to_value(&report).unwrap();
    let obj = json.as_object().unwrap();

    assert_eq!(obj["adsl"]["status"], serde_json::json!("eligible"));
    assert!(!obj["adsl"].as_object().unwrap().contains_key("message"));
    assert_eq!(obj["fiber"]["status"], serde_json::json!("non-eligible"));
    assert_eq!(obj["fiber"]["available"], serde_json::json!(false));
    assert_eq!(obj["contact_phone"], serde_json::json!("1016"));
    assert_eq!(obj["isp_providers"][0]["name"], serde_json::json!("Lagoon"));
}

#[test]
fn test_without_raw_html_strips_markup_only() {
    let mut report = EligibilityReport::new(phone());
    report.found = true;
    report.raw_html = Some("<div>result</div>".to_string());
    report.contact_phone = Some("1000".to_string());

    let stripped = report.without_raw_html();

    assert!(stripped.raw_html.is_none());
    assert!(stripped.found);
    assert_eq!(stripped.contact_phone.as_deref(), Some("1000"));
}

#[test]
fn test_installation_field_stays_unset() {
    let fiber = FiberEligibility {
        status: EligibilityStatus::Eligible,
        available: true,
        message: None,
        installation: None,
    };
    let json = serde_json::to_value(&fiber).unwrap();
    assert!(!json.as_object().unwrap().contains_key("installation"));
}
