//! HTTP transport seam between the bridge client and the network.

use std::future::Future;

use serde_json::Value;
use strum_macros::{Display, EnumString};

use crate::errors::Error;

type Result<T> = std::result::Result<T, Error>;

/// HTTP methods used by the bridge API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// Writes change bridge state and are subject to throttling.
    pub fn is_write(&self) -> bool {
        !matches!(self, HttpMethod::Get)
    }
}

/// Masks the username segment of a bridge URL for logging.
///
/// `http://10.0.0.2/api/abcdef/lights` becomes `http://10.0.0.2/api/***/lights`.
pub(crate) fn redact_username(url: &str) -> String {
    let Some(start) = url.find("/api/").map(|i| i + "/api/".len()) else {
        return url.to_string();
    };
    let end = url[start..].find('/').map_or(url.len(), |i| start + i);
    if start == end {
        return url.to_string();
    }
    format!("{}***{}", &url[..start], &url[end..])
}

/// Sends one JSON request and returns the decoded JSON reply.
///
/// Implementations only move bytes: bridge-level errors inside a successful
/// reply are left for the [`crate::Bridge`] to interpret.
pub trait Transport: Send + Sync {
    fn request(
        &self,
        method: HttpMethod,
        url: &str,
        body: Option<&Value>,
    ) -> impl Future<Output = Result<Value>> + Send;
}

#[cfg(feature = "runtime-tokio")]
pub use self::reqwest_impl::HttpTransport;

#[cfg(feature = "runtime-tokio")]
mod reqwest_impl {
    use log::trace;
    use serde_json::Value;

    use super::{HttpMethod, Result, Transport, redact_username};
    use crate::errors::Error;

    /// [`Transport`] backed by a shared `reqwest` client.
    #[derive(Debug, Clone, Default)]
    pub struct HttpTransport {
        client: reqwest::Client,
    }

    impl HttpTransport {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_client(client: reqwest::Client) -> Self {
            Self { client }
        }
    }

    impl Transport for HttpTransport {
        async fn request(&self, method: HttpMethod, url: &str, body: Option<&Value>) -> Result<Value> {
            let builder = match method {
                HttpMethod::Get => self.client.get(url),
                HttpMethod::Post => self.client.post(url),
                HttpMethod::Put => self.client.put(url),
                HttpMethod::Delete => self.client.delete(url),
            };
            let builder = match body {
                Some(body) => builder.json(body),
                None => builder,
            };

            let response = builder
                .send()
                .await
                .map_err(|e| Error::http("send", e))?;

            let status = response.status();
            trace!("{method} {} -> {status}", redact_username(url));
            if !status.is_success() {
                return Err(Error::http("status", status));
            }

            let bytes = response
                .bytes()
                .await
                .map_err(|e| Error::http("receive", e))?;
            serde_json::from_slice(&bytes).map_err(Error::JsonLoad)
        }
    }
}
