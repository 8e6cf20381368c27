use reqwest::{Client, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Display;
use user_admin_api_structs::dtos::ValidationErrorResponse;

#[derive(Debug, Clone, PartialEq)]
pub enum APIErrorVariant {
    /// The request never got a response
    Network,
    /// The response body could not be decoded
    MalformedResponse,
    /// The server rejected the payload. Carries the decoded validation body
    /// when the server sent one.
    BadClientData(Option<ValidationErrorResponse>),
    NotFound,
    UnexpectedStatusCode(u16),
}

#[derive(Debug, Clone)]
pub struct APIError {
    pub variant: APIErrorVariant,
    pub message: String,
}

impl Display for APIError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.variant {
            APIErrorVariant::UnexpectedStatusCode(code) => {
                write!(f, "Unexpected status code {}: {}", code, self.message)
            }
            variant => write!(f, "{:?}: {}", variant, self.message),
        }
    }
}

impl std::error::Error for APIError {}

pub type APIResponse<T> = Result<T, APIError>;

#[derive(Debug, Clone)]
pub(crate) struct BaseClient {
    client: Client,
    address: String,
}

impl BaseClient {
    pub fn new(address: String) -> Self {
        let address = address.trim_end_matches('/').to_string();
        Self {
            client: Client::new(),
            address,
        }
    }

    fn url(&self, path: &str) -> String {
        if path.is_empty() {
            self.address.clone()
        } else {
            format!("{}/{}", self.address, path)
        }
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: String,
        expected_status: StatusCode,
    ) -> APIResponse<T> {
        let text = self
            .send(self.client.get(self.url(&path)), expected_status)
            .await?;
        Self::decode(&text)
    }

    pub async fn post<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status: StatusCode,
    ) -> APIResponse<T> {
        let text = self
            .send(
                self.client.post(self.url(&path)).json(&body),
                expected_status,
            )
            .await?;
        Self::decode(&text)
    }

    pub async fn put<T: DeserializeOwned, S: Serialize>(
        &self,
        body: S,
        path: String,
        expected_status: StatusCode,
    ) -> APIResponse<T> {
        let text = self
            .send(self.client.put(self.url(&path)).json(&body), expected_status)
            .await?;
        Self::decode(&text)
    }

    /// DELETE for endpoints answering without a body
    pub async fn delete(&self, path: String, expected_status: StatusCode) -> APIResponse<()> {
        self.send(self.client.delete(self.url(&path)), expected_status)
            .await
            .map(|_| ())
    }

    async fn send(&self, req: RequestBuilder, expected_status: StatusCode) -> APIResponse<String> {
        let res = req.send().await.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        })?;

        let status = res.status();
        let text = res.text().await.map_err(|e| APIError {
            variant: APIErrorVariant::Network,
            message: e.to_string(),
        })?;

        if status == expected_status {
            return Ok(text);
        }

        let variant = match status {
            StatusCode::NOT_FOUND => APIErrorVariant::NotFound,
            StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => {
                APIErrorVariant::BadClientData(serde_json::from_str(&text).ok())
            }
            status => APIErrorVariant::UnexpectedStatusCode(status.as_u16()),
        };
        Err(APIError {
            variant,
            message: text,
        })
    }

    fn decode<T: DeserializeOwned>(text: &str) -> APIResponse<T> {
        serde_json::from_str(text).map_err(|e| APIError {
            variant: APIErrorVariant::MalformedResponse,
            message: e.to_string(),
        })
    }
}
