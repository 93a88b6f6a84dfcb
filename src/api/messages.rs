use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// =============================================================================
// BACKENDS
// =============================================================================

/// An upstream service definition known to the proxy.
/// Missing fields decode to their defaults, matching how the API omits empty settings.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Backend {
    #[serde(rename = "Id")]
    pub id: String,
    /// Backend kind, e.g. "http" or "https"
    #[serde(rename = "Type")]
    pub backend_type: String,
    #[serde(rename = "Settings")]
    pub settings: BackendSettings,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct BackendSettings {
    #[serde(rename = "Timeouts")]
    pub timeouts: Timeouts,
    #[serde(rename = "KeepAlive")]
    pub keep_alive: KeepAlive,
}

/// Connection timeouts, expressed as duration strings ("5s", "1m").
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Timeouts {
    #[serde(rename = "Read")]
    pub read: String,
    #[serde(rename = "Dial")]
    pub dial: String,
    #[serde(rename = "TLSHandshake")]
    pub tls_handshake: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct KeepAlive {
    #[serde(rename = "Period")]
    pub period: String,
    #[serde(rename = "MaxIdleConnsPerHost")]
    pub max_idle_conns_per_host: i64,
}

impl Backend {
    pub fn new(id: impl Into<String>, backend_type: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            backend_type: backend_type.into(),
            settings: BackendSettings::default(),
        }
    }
}

// =============================================================================
// SERVERS
// =============================================================================

/// One network endpoint of a backend. The owning backend is carried by the request path.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Server {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "URL")]
    pub url: String,
}

impl Server {
    pub fn new(id: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            url: url.into(),
        }
    }
}

// =============================================================================
// FRONTENDS
// =============================================================================

/// A routing rule. Only the identifying fields are typed; everything else,
/// `Settings` included, is carried through untouched in `extra`. Keys the API
/// left out stay absent when the frontend is sent back.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Frontend {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(rename = "Route", skip_serializing_if = "Option::is_none")]
    pub route: Option<String>,
    #[serde(rename = "Type", skip_serializing_if = "Option::is_none")]
    pub frontend_type: Option<String>,
    #[serde(rename = "BackendId", skip_serializing_if = "Option::is_none")]
    pub backend_id: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Frontend {
    /// The raw `Settings` object, if the API sent one (possibly `null`).
    pub fn settings(&self) -> Option<&Value> {
        self.extra.get("Settings")
    }
}

// =============================================================================
// LIST ENVELOPES
// =============================================================================

/// Collection key of each list envelope, e.g. `{"Backends": [...]}`.
pub const BACKENDS_KEY: &str = "Backends";
pub const SERVERS_KEY: &str = "Servers";
pub const FRONTENDS_KEY: &str = "Frontends";

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_backend() -> Backend {
        Backend {
            id: "b1".into(),
            backend_type: "http".into(),
            settings: BackendSettings {
                timeouts: Timeouts {
                    read: "5s".into(),
                    dial: "5s".into(),
                    tls_handshake: "10s".into(),
                },
                keep_alive: KeepAlive {
                    period: "30s".into(),
                    max_idle_conns_per_host: 12,
                },
            },
        }
    }

    #[test]
    fn test_backend_serializes_with_api_field_names() {
        let value = serde_json::to_value(sample_backend()).unwrap();

        assert_eq!(
            value,
            json!({
                "Id": "b1",
                "Type": "http",
                "Settings": {
                    "Timeouts": {"Read": "5s", "Dial": "5s", "TLSHandshake": "10s"},
                    "KeepAlive": {"Period": "30s", "MaxIdleConnsPerHost": 12}
                }
            })
        );
    }

    #[test]
    fn test_backend_survives_encode_decode() {
        let backend = sample_backend();
        let encoded = serde_json::to_vec(&backend).unwrap();
        let decoded: Backend = serde_json::from_slice(&encoded).unwrap();
        assert_eq!(decoded, backend);
    }

    #[test]
    fn test_backend_without_settings_uses_defaults() {
        let backend: Backend = serde_json::from_str(r#"{"Id":"b2","Type":"https"}"#).unwrap();
        assert_eq!(backend, Backend::new("b2", "https"));
    }

    #[test]
    fn test_backend_ignores_unknown_fields() {
        let backend: Backend =
            serde_json::from_str(r#"{"Id":"b3","Type":"http","Stats":{"x":1}}"#).unwrap();
        assert_eq!(backend.id, "b3");
    }

    #[test]
    fn test_server_uses_url_tag() {
        let value = serde_json::to_value(Server::new("s1", "http://10.0.0.1:5000")).unwrap();
        assert_eq!(value, json!({"Id": "s1", "URL": "http://10.0.0.1:5000"}));
    }

    #[test]
    fn test_frontend_keeps_unknown_fields() {
        let raw = json!({
            "Id": "f1",
            "Route": "Path(`/`)",
            "Type": "http",
            "BackendId": "b1",
            "Settings": {"Hostname": "example.com"},
            "Middlewares": [{"Id": "rl"}]
        });

        let frontend: Frontend = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(frontend.backend_id.as_deref(), Some("b1"));
        assert_eq!(frontend.settings(), Some(&json!({"Hostname": "example.com"})));
        assert!(frontend.extra.contains_key("Middlewares"));

        assert_eq!(serde_json::to_value(&frontend).unwrap(), raw);
    }

    #[test]
    fn test_minimal_frontend_is_sent_back_unchanged() {
        let raw = json!({"Id": "f1"});

        let frontend: Frontend = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(frontend.route, None);
        assert_eq!(frontend.frontend_type, None);
        assert_eq!(frontend.backend_id, None);
        assert_eq!(serde_json::to_value(&frontend).unwrap(), raw);
    }

    #[test]
    fn test_frontend_keeps_null_settings() {
        let raw = json!({"Id": "f1", "Settings": null});

        let frontend: Frontend = serde_json::from_value(raw.clone()).unwrap();

        assert_eq!(frontend.settings(), Some(&Value::Null));
        assert_eq!(serde_json::to_value(&frontend).unwrap(), raw);
    }
}
