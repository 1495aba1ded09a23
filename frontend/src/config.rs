/// Canonical origin used for `<link rel="canonical">` and the JSON-LD block.
pub const SITE_URL: &str = "https://dataforgeitsolutions.com";

pub const COMPANY_NAME: &str = "DataForge IT Solutions LLC";

/// Upper bound for one relay attempt before it counts as failed.
pub const RELAY_TIMEOUT_MS: u32 = 15_000;

const DEFAULT_SERVICE_ID: &str = "service_dataforge";
const DEFAULT_TEMPLATE_ID: &str = "template_contact";
const DEFAULT_PUBLIC_KEY: &str = "dataforge_public_key";

#[cfg(debug_assertions)]
pub fn get_relay_url() -> &'static str {
    // Point at a local mock relay with EMAILJS_API_URL=http://localhost:3001/send
    match option_env!("EMAILJS_API_URL") {
        Some(url) => url,
        None => "https://api.emailjs.com/api/v1.0/email/send",
    }
}

#[cfg(not(debug_assertions))]
pub fn get_relay_url() -> &'static str {
    "https://api.emailjs.com/api/v1.0/email/send"
}

/// Credentials for the transactional-email relay. Opaque to the site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
}

impl RelayConfig {
    /// Reads the credentials baked in at build time, falling back to the
    /// hardcoded defaults for any variable that was not set.
    pub fn from_env() -> Self {
        Self::from_parts(
            option_env!("EMAILJS_SERVICE_ID"),
            option_env!("EMAILJS_TEMPLATE_ID"),
            option_env!("EMAILJS_PUBLIC_KEY"),
        )
    }

    fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
    ) -> Self {
        let pick = |value: Option<&str>, fallback: &str| {
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(fallback)
                .to_string()
        };

        Self {
            service_id: pick(service_id, DEFAULT_SERVICE_ID),
            template_id: pick(template_id, DEFAULT_TEMPLATE_ID),
            public_key: pick(public_key, DEFAULT_PUBLIC_KEY),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_variables_fall_back_to_defaults() {
        let config = RelayConfig::from_parts(None, Some(""), None);
        assert_eq!(config.service_id, DEFAULT_SERVICE_ID);
        assert_eq!(config.template_id, DEFAULT_TEMPLATE_ID);
        assert_eq!(config.public_key, DEFAULT_PUBLIC_KEY);
    }

    #[test]
    fn provided_values_pass_through_verbatim() {
        let config = RelayConfig::from_parts(Some("svc_1"), Some(" tpl "), Some("pk-XYZ"));
        assert_eq!(config.service_id, "svc_1");
        assert_eq!(config.template_id, " tpl ");
        assert_eq!(config.public_key, "pk-XYZ");
    }
}
