//! Exchange REST client.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use reqwest::{
    header::{HeaderValue, CONTENT_TYPE},
    Client, Method, Request,
};
use serde_json::Value;

use super::signer::{RequestSigner, ADDRESS_HEADER, SIGNATURE_HEADER, TIMESTAMP_HEADER};
use crate::error::{AppError, Result};

const USER_AGENT: &str = concat!("lnexchange-mcp/", env!("CARGO_PKG_VERSION"));

/// HTTP client for one exchange service (spot or perpetual).
///
/// Responses are returned as the raw JSON the exchange sent; nothing is
/// retried, cached or reshaped.
#[derive(Clone)]
pub struct ExchangeClient {
    http: Client,
    base_url: String,
    signer: Option<RequestSigner>,
}

impl ExchangeClient {
    /// Create a new client.
    ///
    /// No network calls are made here.
    pub fn new(base_url: &str, timeout: Duration, signer: Option<RequestSigner>) -> Result<Self> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| AppError::Config(format!("Failed to create HTTP client: {}", e)))?;

        tracing::info!(
            base_url = %base_url,
            signed = signer.is_some(),
            "Exchange client created"
        );

        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string(), signer })
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build a signed request without sending it.
    ///
    /// GET parameters go into the query string (null fields dropped); POST
    /// parameters become the JSON body. `Value::Null` means no parameters.
    pub fn build_request(&self, method: Method, path: &str, params: &Value) -> Result<Request> {
        let url = format!("{}{}", self.base_url, path);
        let mut request = if method == Method::GET {
            let mut request = self.http.get(&url).build()?;
            append_query(&mut request, params)?;
            request
        } else {
            let body = match params {
                Value::Null => "{}".to_string(),
                other => serde_json::to_string(other)?,
            };
            self.http
                .request(method, &url)
                .header(CONTENT_TYPE, "application/json")
                .body(body)
                .build()?
        };

        if let Some(signer) = &self.signer {
            let payload = match request.body().and_then(|b| b.as_bytes()) {
                Some(bytes) => String::from_utf8_lossy(bytes).into_owned(),
                None => request.url().query().unwrap_or_default().to_string(),
            };
            let headers = signer.sign(
                current_timestamp()?,
                request.method().as_str(),
                request.url().path(),
                &payload,
            )?;

            let map = request.headers_mut();
            map.insert(ADDRESS_HEADER, header_value(&headers.address)?);
            map.insert(TIMESTAMP_HEADER, header_value(&headers.timestamp.to_string())?);
            map.insert(SIGNATURE_HEADER, header_value(&headers.signature)?);
        }

        Ok(request)
    }

    /// Send a request and return the response body as JSON.
    pub async fn execute(&self, request: Request) -> Result<Value> {
        let method = request.method().clone();
        let path = request.url().path().to_string();

        tracing::debug!(method = %method, path = %path, "Sending exchange request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            tracing::warn!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                "Exchange request failed"
            );
            return Err(AppError::Api { status: status.as_u16(), body });
        }

        parse_body(&body)
    }

    /// GET `path` with `params` as the query string.
    pub async fn get(&self, path: &str, params: Value) -> Result<Value> {
        let request = self.build_request(Method::GET, path, &params)?;
        self.execute(request).await
    }

    /// POST `params` as JSON to `path`.
    pub async fn post(&self, path: &str, params: Value) -> Result<Value> {
        let request = self.build_request(Method::POST, path, &params)?;
        self.execute(request).await
    }
}

impl std::fmt::Debug for ExchangeClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExchangeClient")
            .field("base_url", &self.base_url)
            .field("signer", &self.signer)
            .finish()
    }
}

/// Append a flat JSON object to the request URL as query pairs.
fn append_query(request: &mut Request, params: &Value) -> Result<()> {
    let fields = match params {
        Value::Null => return Ok(()),
        Value::Object(fields) => fields,
        other => {
            return Err(AppError::Parse(format!(
                "query parameters must be a JSON object, got {}",
                other
            )))
        }
    };

    let pairs: Vec<(&String, String)> = fields
        .iter()
        .filter(|(_, v)| !v.is_null())
        .map(|(k, v)| match v {
            Value::String(s) => (k, s.clone()),
            other => (k, other.to_string()),
        })
        .collect();

    if !pairs.is_empty() {
        let mut query = request.url_mut().query_pairs_mut();
        for (key, value) in pairs {
            query.append_pair(key, &value);
        }
    }
    Ok(())
}

/// Parse a success body. An empty body is reported as `null`.
fn parse_body(body: &str) -> Result<Value> {
    if body.trim().is_empty() {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(body)?)
}

fn current_timestamp() -> Result<u64> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .map_err(|e| AppError::Wallet(format!("System time error: {}", e)))
}

fn header_value(value: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(value).map_err(|e| AppError::Wallet(format!("Invalid header value: {}", e)))
}
