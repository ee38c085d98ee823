//! Appliance client handle and the shared request executor.
//!
//! Every CMDB operation ends up in [`Client::send`]: one HTTP round trip,
//! bearer authentication, optional `vdom` scoping, and decoding of the JSON
//! envelope the appliance wraps around every answer.

use std::time::Duration;

use reqwest::Method;
use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::config::ClientConfig;
use crate::error::{CmdbError, CmdbResult};
use crate::object::{Singleton, Table};
use crate::ops::{SingletonApi, TableApi};

/// Fields of one object instance to create or update. No schema is enforced
/// locally; the appliance validates.
pub type Params = Map<String, Value>;

/// Decoded JSON object returned by the appliance.
pub type Output = Map<String, Value>;

/// Connection and authentication context for one appliance.
///
/// Cheap to clone and safe to share between tasks. Operations never mutate it.
#[derive(Debug, Clone)]
pub struct Client {
    base_url: String,
    token: Option<String>,
    vdom: Option<String>,
    http: reqwest::Client,
}

impl Client {
    /// Build a client from its configuration.
    pub fn new(config: &ClientConfig) -> CmdbResult<Self> {
        let base_url = config.url.trim_end_matches('/');
        if base_url.is_empty() {
            return Err(CmdbError::Config("appliance url is empty".to_string()));
        }

        let mut builder = reqwest::Client::builder()
            .danger_accept_invalid_certs(config.insecure)
            .timeout(Duration::from_secs(config.timeout_secs));

        if let Some(ref pem) = config.ca_cert {
            let cert = reqwest::Certificate::from_pem(pem.as_bytes())
                .map_err(|e| CmdbError::Config(format!("invalid CA certificate: {e}")))?;
            builder = builder.add_root_certificate(cert);
        }

        let http = builder
            .build()
            .map_err(|e| CmdbError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base_url.to_string(),
            token: config.token.clone().filter(|t| !t.is_empty()),
            vdom: config.vdom.clone().filter(|v| !v.is_empty()),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn default_vdom(&self) -> Option<&str> {
        self.vdom.as_deref()
    }

    /// Operations on a keyed table type.
    pub fn table(&self, table: &'static Table) -> TableApi<'_> {
        TableApi::new(self, table)
    }

    /// Operations on a singleton type.
    pub fn singleton(&self, singleton: &'static Singleton) -> SingletonApi<'_> {
        SingletonApi::new(self, singleton)
    }

    /// Firmware version the appliance reports in its response envelope.
    pub async fn device_version(&self) -> CmdbResult<String> {
        let envelope = self
            .send(
                Method::GET,
                &crate::catalog::SYSTEM_GLOBAL.base_path(),
                None,
                None,
            )
            .await?;
        envelope
            .get("version")
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| CmdbError::Malformed("envelope has no `version` field".to_string()))
    }

    /// POST or PUT `params` as a JSON body and return the status envelope.
    pub(crate) async fn create_update(
        &self,
        method: Method,
        path: &str,
        params: &Params,
        vdom: Option<&str>,
    ) -> CmdbResult<Output> {
        self.send(method, path, Some(params), vdom).await
    }

    /// GET one object. `singleton` selects how `results` is unwrapped.
    pub(crate) async fn read(
        &self,
        path: &str,
        singleton: bool,
        vdom: Option<&str>,
    ) -> CmdbResult<Output> {
        let envelope = self.send(Method::GET, path, None, vdom).await?;
        unwrap_results(envelope, singleton)
    }

    /// GET a whole collection.
    pub(crate) async fn read_all(
        &self,
        path: &str,
        vdom: Option<&str>,
    ) -> CmdbResult<Vec<Output>> {
        let mut envelope = self.send(Method::GET, path, None, vdom).await?;
        match envelope.remove("results") {
            Some(Value::Array(items)) => items
                .into_iter()
                .map(|item| match item {
                    Value::Object(obj) => Ok(obj),
                    other => Err(CmdbError::Malformed(format!(
                        "collection member is not an object: {other}"
                    ))),
                })
                .collect(),
            Some(_) => Err(CmdbError::Malformed(
                "expected an array in `results`".to_string(),
            )),
            None => Err(CmdbError::Malformed("envelope has no `results`".to_string())),
        }
    }

    pub(crate) async fn delete(&self, path: &str, vdom: Option<&str>) -> CmdbResult<()> {
        self.send(Method::DELETE, path, None, vdom).await?;
        Ok(())
    }

    /// Low-level helper: one HTTP round trip, decoded into the envelope.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Params>,
        vdom: Option<&str>,
    ) -> CmdbResult<Output> {
        let url = format!("{}{path}", self.base_url);
        let vdom = vdom.or(self.vdom.as_deref());

        let mut req = self.http.request(method.clone(), &url);
        if let Some(ref token) = self.token {
            req = req.bearer_auth(token);
        }
        if let Some(vdom) = vdom {
            req = req.query(&[("vdom", vdom)]);
        }
        if let Some(params) = body {
            req = req.json(params);
        }

        debug!(method = %method, path, vdom = ?vdom, "Sending CMDB request");

        let resp = req.send().await?;
        let status = resp.status().as_u16();
        let text = resp.text().await?;

        let result = decode_envelope(status, &text);
        if let Err(ref e) = result {
            warn!(method = %method, path, http_status = status, "CMDB request failed: {e}");
        }
        result
    }
}

fn is_success(http_status: u16) -> bool {
    (200..300).contains(&http_status)
}

/// Parse a response body and check the envelope's `status` field.
pub(crate) fn decode_envelope(http_status: u16, body: &str) -> CmdbResult<Output> {
    let parsed: Value = match serde_json::from_str(body) {
        Ok(v) => v,
        Err(_) if !is_success(http_status) => {
            return Err(CmdbError::Status {
                http_status,
                body: body.trim().to_string(),
            })
        }
        Err(e) => return Err(CmdbError::Decode(e)),
    };

    let Value::Object(envelope) = parsed else {
        if !is_success(http_status) {
            return Err(CmdbError::Status {
                http_status,
                body: body.trim().to_string(),
            });
        }
        return Err(CmdbError::Malformed(
            "response body is not a JSON object".to_string(),
        ));
    };

    let status = envelope
        .get("status")
        .and_then(Value::as_str)
        .map(str::to_string);

    match status.as_deref() {
        Some("success") if is_success(http_status) => Ok(envelope),
        None if is_success(http_status) => Err(CmdbError::Malformed(
            "envelope has no `status` field".to_string(),
        )),
        status => {
            // A failed transport status is never overridden by the envelope.
            let reported = if is_success(http_status) {
                envelope
                    .get("http_status")
                    .and_then(Value::as_u64)
                    .and_then(|s| u16::try_from(s).ok())
                    .unwrap_or(http_status)
            } else {
                http_status
            };
            Err(CmdbError::Api {
                http_status: reported,
                error_code: envelope.get("error").and_then(Value::as_i64),
                status: status.unwrap_or_default().to_string(),
            })
        }
    }
}

/// Extract the object from a successful read envelope.
///
/// Singleton endpoints return `results` as a bare object. Keyed reads return
/// a collection holding exactly the one addressed member.
pub(crate) fn unwrap_results(mut envelope: Output, singleton: bool) -> CmdbResult<Output> {
    match (envelope.remove("results"), singleton) {
        (Some(Value::Object(obj)), true) => Ok(obj),
        (Some(Value::Array(items)), false) if items.len() > 1 => Err(CmdbError::Malformed(
            format!("keyed read returned {} members", items.len()),
        )),
        (Some(Value::Array(items)), false) => match items.into_iter().next() {
            Some(Value::Object(obj)) => Ok(obj),
            Some(other) => Err(CmdbError::Malformed(format!(
                "collection member is not an object: {other}"
            ))),
            None => Err(CmdbError::Malformed(
                "keyed read returned an empty collection".to_string(),
            )),
        },
        (Some(_), true) => Err(CmdbError::Malformed(
            "expected a bare object in `results`".to_string(),
        )),
        (Some(_), false) => Err(CmdbError::Malformed(
            "expected an array in `results`".to_string(),
        )),
        (None, _) => Err(CmdbError::Malformed("envelope has no `results`".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Output {
        match v {
            Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    #[test]
    fn test_success_envelope() {
        let body = r#"{"http_method":"POST","status":"success","http_status":200,"vdom":"root","mkey":"x"}"#;
        let out = decode_envelope(200, body).unwrap();
        assert_eq!(out["status"], "success");
        assert_eq!(out["http_status"], 200);
        assert_eq!(out["mkey"], "x");
        assert_eq!(out["vdom"], "root");
    }

    #[test]
    fn test_error_envelope_carries_code() {
        let body = r#"{"status":"error","http_status":500,"error":-5,"vdom":"root"}"#;
        match decode_envelope(500, body) {
            Err(CmdbError::Api {
                http_status,
                error_code,
                status,
            }) => {
                assert_eq!(http_status, 500);
                assert_eq!(error_code, Some(-5));
                assert_eq!(status, "error");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_envelope_prefers_reported_status() {
        let body = r#"{"status":"error","http_status":404}"#;
        let err = decode_envelope(200, body).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.http_status(), Some(404));
    }

    #[test]
    fn test_non_json_error_body() {
        let err = decode_envelope(401, "<html>Unauthorized</html>\n").unwrap_err();
        match err {
            CmdbError::Status { http_status, body } => {
                assert_eq!(http_status, 401);
                assert_eq!(body, "<html>Unauthorized</html>");
            }
            other => panic!("expected Status error, got {other:?}"),
        }
    }

    #[test]
    fn test_non_json_success_body() {
        assert!(matches!(
            decode_envelope(200, "not json"),
            Err(CmdbError::Decode(_))
        ));
        assert!(matches!(
            decode_envelope(200, "[1,2]"),
            Err(CmdbError::Malformed(_))
        ));
        assert!(matches!(
            decode_envelope(200, "{}"),
            Err(CmdbError::Malformed(_))
        ));
    }

    #[test]
    fn test_unwrap_singleton_results() {
        let env = obj(json!({"status": "success", "results": {"hostname": "fw1"}}));
        let out = unwrap_results(env, true).unwrap();
        assert_eq!(out["hostname"], "fw1");
    }

    #[test]
    fn test_unwrap_collection_results() {
        let env = obj(json!({
            "status": "success",
            "results": [{"name": "k1", "subnet": "10.0.0.0 255.255.255.0"}]
        }));
        let out = unwrap_results(env, false).unwrap();
        assert_eq!(out["name"], "k1");
    }

    #[test]
    fn test_unwrap_shape_mismatch() {
        let env = obj(json!({"status": "success", "results": [{"name": "k1"}]}));
        assert!(matches!(
            unwrap_results(env, true),
            Err(CmdbError::Malformed(_))
        ));

        let env = obj(json!({"status": "success", "results": {"name": "k1"}}));
        assert!(matches!(
            unwrap_results(env, false),
            Err(CmdbError::Malformed(_))
        ));

        let env = obj(json!({"status": "success", "results": []}));
        assert!(matches!(
            unwrap_results(env, false),
            Err(CmdbError::Malformed(_))
        ));

        let env = obj(json!({"status": "success", "results": [{"name": "a"}, {"name": "b"}]}));
        match unwrap_results(env, false) {
            Err(CmdbError::Malformed(msg)) => assert!(msg.contains("2 members"), "{msg}"),
            other => panic!("expected Malformed, got {other:?}"),
        }
    }

    #[test]
    fn test_success_envelope_with_failed_http_status() {
        let body = r#"{"status":"success","http_status":200,"vdom":"root"}"#;
        match decode_envelope(500, body) {
            Err(CmdbError::Api {
                http_status,
                status,
                ..
            }) => {
                assert_eq!(http_status, 500);
                assert_eq!(status, "success");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_new_rejects_empty_url() {
        let err = Client::new(&ClientConfig::new("/")).unwrap_err();
        assert!(matches!(err, CmdbError::Config(_)));
    }

    #[test]
    fn test_new_trims_trailing_slash() {
        let cfg = ClientConfig::new("https://fw.example/").with_vdom("root");
        let client = Client::new(&cfg).unwrap();
        assert_eq!(client.base_url(), "https://fw.example");
        assert_eq!(client.default_vdom(), Some("root"));
    }
}
