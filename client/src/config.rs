use serde::Deserialize;

/// Connection settings for one appliance.
///
/// Deserializable so a calling application can embed it in its own
/// configuration file; this crate does not read files itself.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    /// Scheme and host of the appliance, e.g. `"https://192.168.1.99"`.
    pub url: String,

    /// REST API administrator token, sent as a bearer token.
    #[serde(default)]
    pub token: Option<String>,

    /// Default virtual domain for every request. Per-call overrides win.
    #[serde(default)]
    pub vdom: Option<String>,

    /// Accept self-signed or otherwise invalid TLS certificates.
    #[serde(default)]
    pub insecure: bool,

    /// Extra PEM-encoded CA certificate to trust.
    #[serde(default)]
    pub ca_cert: Option<String>,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_timeout() -> u64 {
    30
}

impl ClientConfig {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
            token: None,
            vdom: None,
            insecure: false,
            ca_cert: None,
            timeout_secs: default_timeout(),
        }
    }

    pub fn with_token(mut self, token: &str) -> Self {
        self.token = Some(token.to_string());
        self
    }

    pub fn with_vdom(mut self, vdom: &str) -> Self {
        self.vdom = Some(vdom.to_string());
        self
    }

    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }
}
