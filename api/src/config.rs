use std::env;

use crate::subject_id::SubjectId;

/// Connection settings for the wash-history service.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
    default_subject: Option<SubjectId>,
}

impl ApiConfig {
    /// Used when neither the runtime nor the build environment set a base url.
    pub const DEFAULT_BASE_URL: &'static str = "http://localhost:3000/api";

    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            default_subject: None,
        }
    }

    pub fn with_default_subject(mut self, subject: Option<SubjectId>) -> Self {
        self.default_subject = subject;
        self
    }

    /// Creates an ApiConfig from environment variables, with in-code defaults.
    ///
    /// # Environment Variables
    /// - `WASH_API_BASE_URL`: root of the REST service, eg `https://host/api`.
    /// - `WASH_CLIENT_ID`: client shown when the dashboard opens.
    ///
    /// Runtime values win over values baked in at build time, which matters
    /// for the web build where no process environment exists.
    pub fn from_env() -> Self {
        let base_url = env::var("WASH_API_BASE_URL")
            .ok()
            .or_else(|| option_env!("WASH_API_BASE_URL").map(str::to_string));
        let client_id = env::var("WASH_CLIENT_ID")
            .ok()
            .or_else(|| option_env!("WASH_CLIENT_ID").map(str::to_string));

        Self::from_values(base_url, client_id)
    }

    fn from_values(base_url: Option<String>, client_id: Option<String>) -> Self {
        let base_url = base_url
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

        let default_subject = match client_id.as_deref().map(SubjectId::parse_optional) {
            Some(Ok(subject)) => subject,
            Some(Err(e)) => {
                dioxus_logger::tracing::warn!("ignoring WASH_CLIENT_ID: {}", e);
                None
            }
            None => None,
        };

        Self::new(base_url).with_default_subject(default_subject)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_subject(&self) -> Option<SubjectId> {
        self.default_subject
    }

    /// Url of the wash listing for one client.
    pub fn washes_url(&self, subject: SubjectId) -> String {
        format!("{}/clients/{}/washes", self.base_url, subject)
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_default_base_url() {
        let config = ApiConfig::from_values(None, None);
        assert_eq!(config.base_url(), ApiConfig::DEFAULT_BASE_URL);
        assert_eq!(config.default_subject(), None);

        let config = ApiConfig::from_values(Some("  ".into()), None);
        assert_eq!(config.base_url(), ApiConfig::DEFAULT_BASE_URL);
    }

    #[test]
    fn trims_trailing_slashes() {
        let config = ApiConfig::new("https://wash.example.com/api//");
        assert_eq!(
            config.washes_url(SubjectId::new(12)),
            "https://wash.example.com/api/clients/12/washes"
        );
    }

    #[test]
    fn reads_default_subject() {
        let config = ApiConfig::from_values(None, Some("15".into()));
        assert_eq!(config.default_subject(), Some(SubjectId::new(15)));

        let config = ApiConfig::from_values(None, Some("not-a-number".into()));
        assert_eq!(config.default_subject(), None);
    }
}
