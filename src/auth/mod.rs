//! Authentication — credentials and URL signing.
//!
//! Two mutually exclusive schemes:
//!
//! - **API key**: `key=<value>` appended to the query string.
//! - **Client ID + signature** (Maps for Work): `client=<id>` appended,
//!   then the whole `path?query` string is HMAC-SHA1 signed with the
//!   URL-safe-base64-decoded shared secret and the digest appended as
//!   `signature=<base64url(digest)>`.
//!
//! The builder guarantees exactly one scheme is selected before a
//! [`Credential`] ever exists, so sign-time matching is exhaustive.

use base64::{engine::general_purpose::URL_SAFE, Engine};
use hmac::{Hmac, Mac};
use sha1::Sha1;

use crate::endpoint::EndpointConfig;
use crate::error::SdkError;
use crate::query::ParameterSet;

type HmacSha1 = Hmac<Sha1>;

/// An immutable credential, owned by the client for its lifetime.
#[derive(Clone)]
pub enum Credential {
    ApiKey(String),
    ClientIdAndSignature {
        client_id: String,
        /// Shared secret, already decoded from URL-safe base64.
        secret: Vec<u8>,
    },
}

impl Credential {
    pub fn api_key(key: impl Into<String>) -> Self {
        Credential::ApiKey(key.into())
    }

    /// Build a signing credential from a client ID and the URL-safe
    /// base64-encoded shared secret issued with it.
    pub fn client_id_and_signature(
        client_id: impl Into<String>,
        secret_b64: impl AsRef<str>,
    ) -> Result<Self, SdkError> {
        let secret = URL_SAFE
            .decode(secret_b64.as_ref())
            .map_err(|e| SdkError::Config(format!("invalid base64 signing secret: {e}")))?;
        Ok(Credential::ClientIdAndSignature {
            client_id: client_id.into(),
            secret,
        })
    }

    /// Produce the final authenticated URL for `endpoint` with `params`.
    ///
    /// All caller parameters are emitted byte-identical and in order; auth
    /// parameters are appended after them.
    pub fn sign(
        &self,
        endpoint: &EndpointConfig,
        params: &ParameterSet,
    ) -> Result<String, SdkError> {
        self.sign_with_host(endpoint.host, endpoint, params)
    }

    /// Like [`Credential::sign`] but against an overridden host (mock
    /// servers in tests). The signature covers only `path?query`, so the
    /// host never affects it.
    pub fn sign_with_host(
        &self,
        host: &str,
        endpoint: &EndpointConfig,
        params: &ParameterSet,
    ) -> Result<String, SdkError> {
        let host = host.trim_end_matches('/');
        match self {
            Credential::ApiKey(key) => {
                let query = params.clone().with("key", key.as_str()).encode();
                Ok(format!("{}{}?{}", host, endpoint.path, query))
            }
            Credential::ClientIdAndSignature { client_id, secret } => {
                if !endpoint.accepts_client_id {
                    return Err(SdkError::Config(format!(
                        "endpoint {} does not accept client ID auth",
                        endpoint.path
                    )));
                }
                let query = params.clone().with("client", client_id.as_str()).encode();
                let signature = Self::digest(secret, &format!("{}?{}", endpoint.path, query));
                Ok(format!(
                    "{}{}?{}&signature={}",
                    host, endpoint.path, query, signature
                ))
            }
        }
    }

    fn digest(secret: &[u8], message: &str) -> String {
        let mut mac =
            HmacSha1::new_from_slice(secret).expect("HMAC can take key of any size");
        mac.update(message.as_bytes());
        URL_SAFE.encode(mac.finalize().into_bytes())
    }
}

// Keep secrets out of debug output.
impl std::fmt::Debug for Credential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credential::ApiKey(_) => f.write_str("Credential::ApiKey(..)"),
            Credential::ClientIdAndSignature { client_id, .. } => f
                .debug_struct("Credential::ClientIdAndSignature")
                .field("client_id", client_id)
                .finish_non_exhaustive(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::endpoint::{EndpointConfig, DEFAULT_STATUS_TABLE};

    const TEST_API: EndpointConfig = EndpointConfig {
        host: "https://maps.googleapis.com",
        path: "/maps/api/timezone/json",
        accepts_client_id: true,
        statuses: DEFAULT_STATUS_TABLE,
    };

    const NO_CLIENT_ID_API: EndpointConfig = EndpointConfig {
        host: "https://maps.googleapis.com",
        path: "/maps/api/timezone/json",
        accepts_client_id: false,
        statuses: DEFAULT_STATUS_TABLE,
    };

    // URL-safe base64 of "test_secret_key_12345".
    const TEST_SECRET_B64: &str = "dGVzdF9zZWNyZXRfa2V5XzEyMzQ1";

    fn sample_params() -> ParameterSet {
        ParameterSet::new()
            .with("location", "-33.86,151.2")
            .with("timestamp", "1331161200")
    }

    #[test]
    fn api_key_appends_exactly_one_key_parameter() {
        let cred = Credential::api_key("AIza-test");
        let url = cred.sign(&TEST_API, &sample_params()).unwrap();
        assert_eq!(
            url,
            "https://maps.googleapis.com/maps/api/timezone/json\
             ?location=-33.86%2C151.2&timestamp=1331161200&key=AIza-test"
        );
        assert_eq!(url.matches("key=").count(), 1);
    }

    #[test]
    fn api_key_leaves_other_params_untouched() {
        let cred = Credential::api_key("k");
        let before = sample_params().encode();
        let url = cred.sign(&TEST_API, &sample_params()).unwrap();
        assert!(url.contains(&before));
    }

    #[test]
    fn invalid_base64_secret_is_a_config_error() {
        let result = Credential::client_id_and_signature("gme-test", "not-valid-base64!!!");
        assert!(matches!(result, Err(SdkError::Config(_))));
    }

    #[test]
    fn signed_url_contains_client_and_signature() {
        let cred = Credential::client_id_and_signature("gme-test", TEST_SECRET_B64).unwrap();
        let url = cred.sign(&TEST_API, &sample_params()).unwrap();
        assert!(url.contains("client=gme-test"));
        assert!(url.contains("&signature="));
    }

    #[test]
    fn signing_is_deterministic() {
        let cred = Credential::client_id_and_signature("gme-test", TEST_SECRET_B64).unwrap();
        let url1 = cred.sign(&TEST_API, &sample_params()).unwrap();
        let url2 = cred.sign(&TEST_API, &sample_params()).unwrap();
        assert_eq!(url1, url2);
    }

    #[test]
    fn changing_any_parameter_changes_the_signature() {
        let cred = Credential::client_id_and_signature("gme-test", TEST_SECRET_B64).unwrap();
        let sig_of = |params: &ParameterSet| {
            let url = cred.sign(&TEST_API, params).unwrap();
            url.rsplit("signature=").next().unwrap().to_string()
        };

        let base = sig_of(&sample_params());
        let perturbed = sig_of(&sample_params().with("language", "es"));
        assert_ne!(base, perturbed);

        let changed_value = sig_of(
            &ParameterSet::new()
                .with("location", "-33.86,151.2")
                .with("timestamp", "1331161201"),
        );
        assert_ne!(base, changed_value);
    }

    #[test]
    fn signature_ignores_the_host() {
        let cred = Credential::client_id_and_signature("gme-test", TEST_SECRET_B64).unwrap();
        let a = cred.sign(&TEST_API, &sample_params()).unwrap();
        let b = cred
            .sign_with_host("http://127.0.0.1:9999", &TEST_API, &sample_params())
            .unwrap();
        let sig = |u: &str| u.rsplit("signature=").next().unwrap().to_string();
        assert_eq!(sig(&a), sig(&b));
    }

    #[test]
    fn client_id_rejected_where_not_accepted() {
        let cred = Credential::client_id_and_signature("gme-test", TEST_SECRET_B64).unwrap();
        let result = cred.sign(&NO_CLIENT_ID_API, &sample_params());
        assert!(matches!(result, Err(SdkError::Config(_))));
    }

    #[test]
    fn signature_is_url_safe_base64_of_sha1_digest() {
        let cred = Credential::client_id_and_signature("gme-test", TEST_SECRET_B64).unwrap();
        let url = cred.sign(&TEST_API, &sample_params()).unwrap();
        let sig = url.rsplit("signature=").next().unwrap();
        let decoded = URL_SAFE.decode(sig).unwrap();
        // HMAC-SHA1 digests are 20 bytes.
        assert_eq!(decoded.len(), 20);
    }
}
