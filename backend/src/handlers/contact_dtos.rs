use serde::Deserialize;

/// Payload posted by the contact form. Everything is optional at the
/// wire level; the handler decides which fields are actually required.
#[derive(Debug, Default, Deserialize)]
pub struct ContactRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub role: Option<String>,
    pub message: Option<String>,
}

/// Service codes offered on the site, in the order they appear in the
/// contact form's dropdown.
const SERVICE_LABELS: &[(&str, &str)] = &[
    ("ai-mvp", "AI MVP Build"),
    ("ai-standard", "Standard AI Product — Core"),
    ("ai-custom", "Standard AI Product — Plus"),
    ("automation", "Workflow Automation"),
    ("website", "Website Development"),
];

/// Resolve a service code to its human-readable label. Unknown codes
/// pass through verbatim so new form options degrade gracefully.
pub fn service_label(role: Option<&str>) -> String {
    match role {
        Some(code) => SERVICE_LABELS
            .iter()
            .find(|(key, _)| *key == code)
            .map(|(_, label)| (*label).to_string())
            .unwrap_or_else(|| code.to_string()),
        None => "Not specified".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_codes_map_to_labels() {
        assert_eq!(service_label(Some("ai-mvp")), "AI MVP Build");
        assert_eq!(service_label(Some("ai-standard")), "Standard AI Product — Core");
        assert_eq!(service_label(Some("ai-custom")), "Standard AI Product — Plus");
        assert_eq!(service_label(Some("automation")), "Workflow Automation");
        assert_eq!(service_label(Some("website")), "Website Development");
    }

    #[test]
    fn unknown_codes_pass_through() {
        assert_eq!(service_label(Some("unknown-code")), "unknown-code");
    }

    #[test]
    fn missing_role_reads_as_not_specified() {
        assert_eq!(service_label(None), "Not specified");
    }
}
