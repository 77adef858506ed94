//! Betline endpoint templates.
//!
//! Each template is a full URL. The events and event-detail templates carry
//! a placeholder that is replaced by the numeric id at request time.

use serde::Deserialize;

use crate::domain::{EventId, LeagueId};
use crate::error::{ConfigError, Result};

pub const LEAGUE_ID_PLACEHOLDER: &str = "{league_id}";
pub const EVENT_ID_PLACEHOLDER: &str = "{event_id}";

const DEFAULT_SPORTS_URL: &str = "https://leon.bet/api-2/betline/sports?ctag=en-US&flags=urlv2";
const DEFAULT_EVENTS_URL: &str = "https://leon.bet/api-2/betline/events/all?ctag=en-US&league_id={league_id}&hideClosed=true&flags=reg,urlv2,mm2,rrc,nodup";
const DEFAULT_EVENT_DETAILS_URL: &str = "https://leon.bet/api-2/betline/event/all?ctag=en-US&eventId={event_id}&flags=reg,urlv2,mm2,rrc,nodup,smg,outv2";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub sports_url: String,
    pub events_url: String,
    pub event_details_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            sports_url: DEFAULT_SPORTS_URL.into(),
            events_url: DEFAULT_EVENTS_URL.into(),
            event_details_url: DEFAULT_EVENT_DETAILS_URL.into(),
        }
    }
}

impl ApiConfig {
    /// Build all three templates from one base URL. Handy for local mocks.
    #[must_use]
    pub fn from_base(base: &str) -> Self {
        let base = base.trim_end_matches('/');
        Self {
            sports_url: format!("{base}/sports"),
            events_url: format!("{base}/events?league_id={LEAGUE_ID_PLACEHOLDER}"),
            event_details_url: format!("{base}/event?eventId={EVENT_ID_PLACEHOLDER}"),
        }
    }

    #[must_use]
    pub fn sports_url(&self) -> &str {
        &self.sports_url
    }

    #[must_use]
    pub fn events_url(&self, league_id: LeagueId) -> String {
        self.events_url
            .replace(LEAGUE_ID_PLACEHOLDER, &league_id.to_string())
    }

    #[must_use]
    pub fn event_details_url(&self, event_id: EventId) -> String {
        self.event_details_url
            .replace(EVENT_ID_PLACEHOLDER, &event_id.to_string())
    }

    pub(crate) fn validate(&self) -> Result<()> {
        check_template("sports_url", &self.sports_url, None)?;
        check_template("events_url", &self.events_url, Some(LEAGUE_ID_PLACEHOLDER))?;
        check_template(
            "event_details_url",
            &self.event_details_url,
            Some(EVENT_ID_PLACEHOLDER),
        )?;
        Ok(())
    }
}

fn check_template(field: &'static str, template: &str, placeholder: Option<&str>) -> Result<()> {
    if template.trim().is_empty() {
        return Err(ConfigError::MissingField { field }.into());
    }

    let rendered = match placeholder {
        Some(placeholder) => {
            if !template.contains(placeholder) {
                return Err(ConfigError::InvalidValue {
                    field,
                    reason: format!("must contain {placeholder}"),
                }
                .into());
            }
            template.replace(placeholder, "0")
        }
        None => template.to_string(),
    };

    let url = url::Url::parse(&rendered).map_err(|e| ConfigError::InvalidValue {
        field,
        reason: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidValue {
            field,
            reason: format!("unsupported scheme '{}'", url.scheme()),
        }
        .into());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn default_templates_are_valid() {
        ApiConfig::default().validate().unwrap();
    }

    #[test]
    fn templates_render_ids() {
        let api = ApiConfig::from_base("http://127.0.0.1:8080/");

        assert_eq!(api.sports_url(), "http://127.0.0.1:8080/sports");
        assert_eq!(
            api.events_url(LeagueId::new(42)),
            "http://127.0.0.1:8080/events?league_id=42"
        );
        assert_eq!(
            api.event_details_url(EventId::new(7)),
            "http://127.0.0.1:8080/event?eventId=7"
        );
    }

    #[test]
    fn missing_placeholder_is_rejected() {
        let api = ApiConfig {
            events_url: "https://example.com/events".into(),
            ..ApiConfig::default()
        };

        assert!(matches!(
            api.validate(),
            Err(Error::Config(ConfigError::InvalidValue {
                field: "events_url",
                ..
            }))
        ));
    }

    #[test]
    fn empty_url_is_missing() {
        let api = ApiConfig {
            sports_url: "  ".into(),
            ..ApiConfig::default()
        };

        assert!(matches!(
            api.validate(),
            Err(Error::Config(ConfigError::MissingField {
                field: "sports_url"
            }))
        ));
    }

    #[test]
    fn non_http_scheme_is_rejected() {
        let api = ApiConfig {
            sports_url: "ftp://example.com/sports".into(),
            ..ApiConfig::default()
        };

        assert!(api.validate().is_err());
    }
}
