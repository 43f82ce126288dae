use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::runtime::Handle;
use url::Url;

pub const ARM_ENDPOINT: &str = "https://management.azure.com/";
pub const API_VERSION: &str = "2020-09-01";

/// Thin client for the ARM management plane: GET, PUT and list verbs with
/// the api-version query attached and `nextLink` pagination followed. Calls
/// block on the runtime handle until the management API responds, the same
/// sync facade the rest of the crate uses.
///
/// A 404 from GET is reported as `Ok(None)`; every other failure surfaces as
/// an `ArmError` with the response body attached. Retry, backoff and token
/// acquisition are out of scope here.
#[derive(Clone)]
pub struct ArmClient {
    http: reqwest::Client,
    handle: Handle,
    endpoint: Url,
    token: String,
    api_version: String,
}

impl ArmClient {
    pub fn new(handle: &Handle, endpoint: Url, token: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            handle: handle.clone(),
            endpoint,
            token: token.into(),
            api_version: API_VERSION.to_string(),
        }
    }

    fn url(&self, path: &str) -> Result<Url, ArmError> {
        let mut url = self
            .endpoint
            .join(path)
            .map_err(|e| ArmError::InvalidUrl(e.to_string()))?;
        url.query_pairs_mut()
            .append_pair("api-version", &self.api_version);
        Ok(url)
    }

    /// Look a resource up. `Ok(None)` is the NotFound signal.
    pub fn get<T: DeserializeOwned>(&self, path: &str) -> Result<Option<T>, ArmError> {
        let url = self.url(path)?;
        self.handle.block_on(async {
            let response = self
                .http
                .get(url)
                .bearer_auth(&self.token)
                .send()
                .await
                .map_err(|e| ArmError::Transport(e.to_string()))?;
            if response.status() == StatusCode::NOT_FOUND {
                return Ok(None);
            }
            let response = check(response).await?;
            response
                .json::<T>()
                .await
                .map(Some)
                .map_err(|e| ArmError::Decode(e.to_string()))
        })
    }

    pub fn put<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ArmError> {
        let url = self.url(path)?;
        self.handle.block_on(async {
            let response = self
                .http
                .put(url)
                .bearer_auth(&self.token)
                .json(body)
                .send()
                .await
                .map_err(|e| ArmError::Transport(e.to_string()))?;
            let response = check(response).await?;
            response
                .json::<T>()
                .await
                .map_err(|e| ArmError::Decode(e.to_string()))
        })
    }

    /// Collection read, e.g. `listInvitations` or `consumerSourceDataSets`.
    pub fn get_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ArmError> {
        self.list(path, false)
    }

    /// POST-style list action, e.g. `listSourceShareSynchronizationSettings`.
    pub fn post_list<T: DeserializeOwned>(&self, path: &str) -> Result<Vec<T>, ArmError> {
        self.list(path, true)
    }

    fn list<T: DeserializeOwned>(&self, path: &str, post_first: bool) -> Result<Vec<T>, ArmError> {
        let first_url = self.url(path)?;
        self.handle.block_on(async {
            let mut items = Vec::new();
            let mut next = Some(first_url);
            let mut first = true;
            while let Some(url) = next.take() {
                let request = if first && post_first {
                    self.http.post(url)
                } else {
                    // nextLink pages are plain GETs with the continuation baked in
                    self.http.get(url)
                };
                first = false;
                let response = request
                    .bearer_auth(&self.token)
                    .send()
                    .await
                    .map_err(|e| ArmError::Transport(e.to_string()))?;
                let response = check(response).await?;
                let page: Page<T> = response
                    .json()
                    .await
                    .map_err(|e| ArmError::Decode(e.to_string()))?;
                items.extend(page.value);
                next = match page.next_link {
                    Some(link) => {
                        Some(Url::parse(&link).map_err(|e| ArmError::InvalidUrl(e.to_string()))?)
                    }
                    None => None,
                };
            }
            Ok(items)
        })
    }
}

#[derive(Deserialize)]
struct Page<T> {
    #[serde(default = "Vec::new")]
    value: Vec<T>,
    #[serde(rename = "nextLink")]
    next_link: Option<String>,
}

async fn check(response: Response) -> Result<Response, ArmError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(ArmError::Status {
        status: status.as_u16(),
        body,
    })
}

#[derive(Debug, Error)]
pub enum ArmError {
    #[error("InvalidUrl: {0}")]
    InvalidUrl(String),
    #[error("Transport: {0}")]
    Transport(String),
    #[error("Status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Decode: {0}")]
    Decode(String),
}
