/// Markup snapshots shaped like the operator's AJAX result panel.
pub struct TestPanels;

impl TestPanels {
    pub fn fully_eligible() -> &'static str {
        r#"
<div class="eligibility-results">
  <h3>Eligibilité ADSL</h3>
  <p>Votre ligne est éligible.</p>
  <h3>Eligibilité THD</h3>
  <p>Fibre optique disponible à votre adresse.</p>
  <p>Pour souscrire, contactez votre FAI au 1016.</p>
  <ul>
    <li>can'l</li>
    <li>InternetNC</li>
    <li>Lagoon</li>
    <li>MLS</li>
    <li>Nautile</li>
  </ul>
</div>"#
    }

    pub fn not_found() -> &'static str {
        r#"
<div class="messages messages--error">
  <h2>Oups, ce numéro est introuvable</h2>
  <p>Vérifiez votre saisie ou contactez le 1000.</p>
</div>"#
    }
}

/// Valid landline numbers in their accepted spellings.
pub struct TestNumbers;

impl TestNumbers {
    pub fn primary() -> &'static str {
        "257364"
    }

    pub fn primary_dotted() -> &'static str {
        "25.73.64"
    }

    pub fn secondary() -> &'static str {
        "441234"
    }
}
