//! Client for the host CMS's REST service proxy.
//! See [`ServiceProxy`].

use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};

/// Errors which can occur while dispatching a service request.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// Error while performing the HTTP request.
    #[error("Error while performing service request")]
    Reqwest(#[from] reqwest::Error),
    /// The proxy responded with an unsuccessful HTTP status.
    #[error("Response status unsuccessful, code: {code}, reason: {reason}")]
    ResponseStatusNotSuccessful {
        /// HTTP status code of the response.
        code: StatusCode,
        /// Response body accompanying the status, if any.
        reason: String,
    },
    /// Error while parsing the response body.
    #[error("Error while parsing json")]
    SerdeJson(#[from] serde_json::Error),
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Envelope<'a, P> {
    service_name: &'a str,
    payload: &'a P,
    read_only: bool,
}

/// Dispatches named service actions to the host CMS's REST proxy.
///
/// The host constructs one of these with the proxy endpoint for the current
/// session and injects it into whatever needs to make service calls.
#[derive(Clone, Debug)]
pub struct ServiceProxy {
    http_client: reqwest::Client,
    endpoint: url::Url,
}

impl ServiceProxy {
    /// Construct a new [`ServiceProxy`] dispatching to `endpoint`.
    #[must_use]
    pub fn new(http_client: reqwest::Client, endpoint: url::Url) -> Self {
        Self {
            http_client,
            endpoint,
        }
    }

    /// Dispatch the service action described by `payload` to the service
    /// registered under `service_name`, and decode the response.
    ///
    /// `read_only` marks the request as non-mutating, which lets the proxy
    /// skip the write-path safeguards required for state-changing calls.
    pub async fn service_request<P, R>(
        &self,
        service_name: &str,
        payload: &P,
        read_only: bool,
    ) -> Result<R, Error>
    where
        P: Serialize + Sync,
        R: DeserializeOwned,
    {
        tracing::trace!("POST {} serviceName={}", self.endpoint, service_name);

        let response = self
            .http_client
            .post(self.endpoint.clone())
            .json(&Envelope {
                service_name,
                payload,
                read_only,
            })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            let body = response.text().await?;
            Ok(serde_json::from_str(&body)?)
        } else {
            Err(Error::ResponseStatusNotSuccessful {
                code: status,
                reason: response.text().await.unwrap_or_default(),
            })
        }
    }
}

#[cfg(test)]
mod test {
    use serde::Deserialize;
    use serde_json::json;
    use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

    use super::{Error, ServiceProxy};

    #[derive(Debug, PartialEq, Deserialize)]
    struct Pong {
        pong: String,
    }

    fn proxy_for(mock_server: &MockServer) -> ServiceProxy {
        let endpoint: url::Url = format!("{}/proxy", mock_server.uri()).parse().unwrap();
        ServiceProxy::new(reqwest::Client::new(), endpoint)
    }

    #[tokio::test]
    async fn service_request_dispatches_envelope() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/proxy"))
            .and(matchers::body_json(json!({
                "serviceName": "EchoService",
                "payload": { "action": "ping" },
                "readOnly": true,
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "pong": "ok" })),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let proxy = proxy_for(&mock_server);
        let pong: Pong = proxy
            .service_request("EchoService", &json!({ "action": "ping" }), true)
            .await
            .unwrap();

        assert_eq!(
            Pong {
                pong: "ok".to_string()
            },
            pong
        );
    }

    #[tokio::test]
    async fn service_request_unsuccessful_status() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/proxy"))
            .respond_with(ResponseTemplate::new(500).set_body_string("proxy exploded"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let proxy = proxy_for(&mock_server);
        let error = proxy
            .service_request::<_, Pong>("EchoService", &json!({ "action": "ping" }), true)
            .await
            .unwrap_err();

        match error {
            Error::ResponseStatusNotSuccessful { code, reason } => {
                assert_eq!(500, code.as_u16());
                assert_eq!("proxy exploded", reason);
            }
            error => panic!("unexpected error: {error:?}"),
        }
    }

    #[tokio::test]
    async fn service_request_invalid_body() {
        let mock_server = MockServer::start().await;

        Mock::given(matchers::method("POST"))
            .and(matchers::path("/proxy"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let proxy = proxy_for(&mock_server);
        let error = proxy
            .service_request::<_, Pong>("EchoService", &json!({ "action": "ping" }), true)
            .await
            .unwrap_err();

        assert!(matches!(error, Error::SerdeJson(_)));
    }
}
