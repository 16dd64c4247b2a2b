use ferrule_domain::EligibilityReport;
use std::fmt::Write;

/// Prints a report in the operator's French terminology.
pub fn print_report(raw_phone: &str, report: &EligibilityReport) {
    print!("{}", render_report(raw_phone, report));
}

fn render_report(raw_phone: &str, report: &EligibilityReport) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Résultat d'éligibilité pour le numéro {raw_phone}:\n");

    if !report.found {
        let message = report.error_message.as_deref().unwrap_or_default();
        let _ = writeln!(out, "❌ {message}");
        return out;
    }

    if let Some(adsl) = &report.adsl {
        let _ = writeln!(out, "📡 ADSL: {}", adsl.status);
        if let Some(message) = &adsl.message {
            let _ = writeln!(out, "   {message}");
        }
    }

    if let Some(fiber) = &report.fiber {
        let _ = writeln!(
            out,
            "🌐 Fibre: {} (disponible: {})",
            fiber.status, fiber.available
        );
        if let Some(message) = &fiber.message {
            let _ = writeln!(out, "   {message}");
        }
    }

    if let Some(contact) = &report.contact_phone {
        let _ = writeln!(out, "\n📞 Contact: {contact}");
    }

    if !report.isp_providers.is_empty() {
        let names: Vec<&str> = report
            .isp_providers
            .iter()
            .map(|isp| isp.name.as_str())
            .collect();
        let _ = writeln!(out, "\n🏢 FAI disponibles: {}", names.join(", "));
    }

    out
}
