use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use shared::{
    AddDatesRequest, ApiError, DatesApi, LastDatesResponse, ADD_DATES_PATH, DEFAULT_API_BASE_URL,
    LAST_DATES_PATH,
};

/// API client for the dates service
#[derive(Clone, Debug, PartialEq)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    /// Create a new API client with the default base URL
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Create a new API client with a custom base URL
    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Get the most recent reference date
    pub async fn get_last_dates(&self) -> Result<LastDatesResponse, ApiError> {
        let url = self.url(LAST_DATES_PATH);

        match Request::get(&url).send().await {
            Ok(response) => {
                let response = ensure_success(response).await?;
                response
                    .json::<LastDatesResponse>()
                    .await
                    .map_err(|e| ApiError::Decode(e.to_string()))
            }
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }

    /// Post a new date range; the response body is ignored
    pub async fn post_dates(&self, request: &AddDatesRequest) -> Result<(), ApiError> {
        let url = self.url(ADD_DATES_PATH);

        match Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
        {
            Ok(response) => ensure_success(response).await.map(|_| ()),
            Err(e) => Err(ApiError::Network(e.to_string())),
        }
    }
}

async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());
    Err(ApiError::Status { status, body })
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl DatesApi for ApiClient {
    async fn last_dates(&self) -> Result<LastDatesResponse, ApiError> {
        self.get_last_dates().await
    }

    async fn add_dates(&self, request: &AddDatesRequest) -> Result<(), ApiError> {
        self.post_dates(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_client_targets_local_service() {
        let client = ApiClient::default();
        assert_eq!(client.base_url(), "http://localhost:5001");
        assert_eq!(client.url(LAST_DATES_PATH), "http://localhost:5001/dates/last");
        assert_eq!(client.url(ADD_DATES_PATH), "http://localhost:5001/dates/add");
    }

    #[test]
    fn test_custom_base_url_trailing_slash() {
        let client = ApiClient::with_base_url("http://127.0.0.1:8080/".to_string());
        assert_eq!(client.url(LAST_DATES_PATH), "http://127.0.0.1:8080/dates/last");
    }
}
