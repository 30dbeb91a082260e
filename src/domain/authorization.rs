//! Authorization request URIs handed to wallets.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

/// How the wallet should fetch the request object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestUriMethod {
    Get,
    Post,
}

/// A JWT-secured authorization request, as returned by the verifier when a
/// transaction is initialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationData {
    pub transaction_id: String,
    pub client_id: String,
    #[serde(default)]
    pub request: Option<String>,
    #[serde(default)]
    pub request_uri: Option<String>,
    #[serde(default)]
    pub request_uri_method: Option<RequestUriMethod>,
}

/// Builds `<scheme>://?client_id=..[&request=..][&request_uri=..][&request_uri_method=get]`.
///
/// Parameters are form-url-encoded in that fixed order. `request_uri_method`
/// is always rendered as `get` when present.
pub fn build_authorization_request_uri(
    scheme: &str,
    data: &AuthorizationData,
) -> Result<Url, DomainError> {
    if scheme.trim().is_empty() {
        return Err(DomainError::invalid_argument("scheme", "Scheme must not be empty"));
    }
    if data.client_id.trim().is_empty() {
        return Err(DomainError::invalid_argument(
            "client_id",
            "Client id must not be empty",
        ));
    }

    let mut url = Url::parse(&format!("{}://", scheme))
        .map_err(|e| DomainError::invalid_argument("scheme", e.to_string()))?;
    {
        let mut query = url.query_pairs_mut();
        query.append_pair("client_id", &data.client_id);
        if let Some(request) = &data.request {
            query.append_pair("request", request);
        }
        if let Some(request_uri) = &data.request_uri {
            query.append_pair("request_uri", request_uri);
        }
        if data.request_uri_method.is_some() {
            query.append_pair("request_uri_method", "get");
        }
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::ErrorCode;

    fn data() -> AuthorizationData {
        AuthorizationData {
            transaction_id: "tx-1".into(),
            client_id: "verifier.example".into(),
            request: None,
            request_uri: Some("https://verifier.example/wallet/request.jwt/abc".into()),
            request_uri_method: Some(RequestUriMethod::Post),
        }
    }

    #[test]
    fn builds_ordered_encoded_query() {
        let uri = build_authorization_request_uri("openid4vp", &data()).unwrap();
        assert_eq!(uri.scheme(), "openid4vp");

        let pairs: Vec<(String, String)> = uri.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("client_id".into(), "verifier.example".into()),
                (
                    "request_uri".into(),
                    "https://verifier.example/wallet/request.jwt/abc".into()
                ),
                ("request_uri_method".into(), "get".into()),
            ]
        );
        assert!(uri
            .as_str()
            .contains("request_uri=https%3A%2F%2Fverifier.example%2Fwallet%2Frequest.jwt%2Fabc"));
    }

    #[test]
    fn omits_absent_parameters() {
        let data = AuthorizationData {
            request: Some("eyJhbGciOi".into()),
            request_uri: None,
            request_uri_method: None,
            ..data()
        };
        let uri = build_authorization_request_uri("eudi-openid4vp", &data).unwrap();
        assert_eq!(uri.query(), Some("client_id=verifier.example&request=eyJhbGciOi"));
    }

    #[test]
    fn rejects_empty_client_id() {
        let data = AuthorizationData {
            client_id: "".into(),
            ..data()
        };
        let err = build_authorization_request_uri("openid4vp", &data).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidArgument);
    }

    #[test]
    fn rejects_empty_scheme() {
        assert!(build_authorization_request_uri(" ", &data()).is_err());
    }

    #[test]
    fn deserializes_verifier_payload() {
        let data: AuthorizationData = serde_json::from_str(
            r#"{"transaction_id":"t","client_id":"c","request_uri":"u","request_uri_method":"post"}"#,
        )
        .unwrap();
        assert_eq!(data.request_uri_method, Some(RequestUriMethod::Post));
        assert_eq!(data.request, None);
    }
}
