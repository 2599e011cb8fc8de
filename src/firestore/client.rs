// Firestore REST API HTTP client.
// Handles the API key, request headers, and status-to-error mapping.

use reqwest::{
    Client, Response, StatusCode,
    header::{ACCEPT, CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT},
};
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::{ArticlesError, Result};

/// Firestore client scoped to one project database.
#[derive(Debug, Clone)]
pub struct FirestoreClient {
    client: Client,
    documents_url: String,
    api_key: Option<String>,
}

impl FirestoreClient {
    /// Create a client for the database named in the configuration.
    pub fn new(config: &Config) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static("articles-directory"));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(ArticlesError::Api)?;

        Ok(Self {
            client,
            documents_url: config.documents_url(),
            api_key: config.api_key.clone(),
        })
    }

    /// Make a POST request to `{documents_url}{endpoint}` with a JSON body.
    pub async fn post<T: Serialize + ?Sized>(
        &self,
        endpoint: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.documents_url, endpoint);
        debug!(%url, "firestore request");

        let mut request = self.client.post(&url).json(body);
        if let Some(key) = &self.api_key {
            request = request.query(&[("key", key)]);
        }

        let response = request.send().await.map_err(ArticlesError::Api)?;
        check_response(response).await
    }
}

/// Check response status and convert errors.
async fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        StatusCode::OK => Ok(response),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ArticlesError::PermissionDenied),
        StatusCode::NOT_FOUND => {
            let url = response.url().to_string();
            Err(ArticlesError::NotFound(url))
        }
        status => Err(ArticlesError::Status {
            status: status.as_u16(),
            body: response.text().await.unwrap_or_default(),
        }),
    }
}
