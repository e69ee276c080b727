//! Per-page configuration for the booking form.

use serde::{Deserialize, Serialize};

/// Path prefix of the availability endpoint; the room id is appended.
pub const DEFAULT_ENDPOINT_BASE: &str = "/booking/check_availability";

/// What the booking form needs from the host page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Room being booked (`data-room-id` on the form). No checks are sent without it.
    pub room_id: Option<String>,
    /// Anti-forgery token from the form's hidden input
    pub csrf_token: Option<String>,
    /// Endpoint path prefix, without trailing slash
    #[serde(default = "default_endpoint_base")]
    pub endpoint_base: String,
}

fn default_endpoint_base() -> String {
    DEFAULT_ENDPOINT_BASE.to_string()
}

impl FormConfig {
    /// Build a config from raw host-page values. Blank strings count as missing.
    pub fn new(room_id: Option<String>, csrf_token: Option<String>) -> Self {
        Self {
            room_id: room_id.filter(|id| !id.trim().is_empty()),
            csrf_token,
            endpoint_base: default_endpoint_base(),
        }
    }

    pub fn for_room(room_id: &str, csrf_token: &str) -> Self {
        Self::new(Some(room_id.to_string()), Some(csrf_token.to_string()))
    }

    /// Override the endpoint prefix (trailing slashes are dropped).
    pub fn with_endpoint_base(mut self, base: &str) -> Self {
        self.endpoint_base = base.trim_end_matches('/').to_string();
        self
    }

    /// Endpoint path for the configured room, if there is one.
    pub fn endpoint(&self) -> Option<String> {
        self.room_id
            .as_ref()
            .map(|room_id| format!("{}/{}", self.endpoint_base, room_id))
    }
}

impl Default for FormConfig {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoint_uses_room_id() {
        let config = FormConfig::for_room("12", "abc");
        assert_eq!(
            config.endpoint().as_deref(),
            Some("/booking/check_availability/12")
        );
    }

    #[test]
    fn blank_room_id_is_missing() {
        let config = FormConfig::new(Some("  ".to_string()), None);
        assert_eq!(config.room_id, None);
        assert_eq!(config.endpoint(), None);
    }

    #[test]
    fn custom_endpoint_base() {
        let config = FormConfig::for_room("3", "t").with_endpoint_base("/api/availability/");
        assert_eq!(config.endpoint().as_deref(), Some("/api/availability/3"));
    }
}
