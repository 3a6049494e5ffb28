// HTTP client wrapper for the Durg API

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("Not found")]
    NotFound,
}

#[derive(Debug, Clone, Serialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminSignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SessionResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AdminSessionResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub token: String,
    #[serde(rename = "isAdmin")]
    pub is_admin: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogoutResponse {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Fort {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub location: String,
    pub district: String,
    pub history: String,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct FortInput {
    pub name: String,
    pub description: String,
    pub location: String,
    pub district: String,
    pub history: String,
    #[serde(rename = "imageUrl", skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

/// Typed client over the Durg HTTP API
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
    bearer: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
            bearer: None,
        }
    }

    /// Attach a bearer token for admin calls
    pub fn with_bearer(mut self, token: &str) -> Self {
        self.bearer = Some(token.to_string());
        self
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<SessionResponse, ApiError> {
        self.post("/api/signup", req).await
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<SessionResponse, ApiError> {
        self.post("/api/login", req).await
    }

    pub async fn admin_signup(
        &self,
        req: &AdminSignupRequest,
    ) -> Result<AdminSessionResponse, ApiError> {
        self.post("/api/admin/signup", req).await
    }

    pub async fn admin_login(&self, req: &LoginRequest) -> Result<AdminSessionResponse, ApiError> {
        self.post("/api/admin/login", req).await
    }

    pub async fn logout(&self) -> Result<LogoutResponse, ApiError> {
        self.post("/api/logout", &serde_json::json!({})).await
    }

    pub async fn list_forts(&self) -> Result<Vec<Fort>, ApiError> {
        self.get("/api/forts").await
    }

    pub async fn get_fort(&self, id: Uuid) -> Result<Fort, ApiError> {
        self.get(&format!("/api/forts/{}", id)).await
    }

    pub async fn create_fort(&self, input: &FortInput) -> Result<Fort, ApiError> {
        self.post("/api/forts", input).await
    }

    pub async fn update_fort(
        &self,
        id: Uuid,
        input: &serde_json::Value,
    ) -> Result<Fort, ApiError> {
        let url = format!("{}/api/forts/{}", self.base_url, id);
        let response = self.request(self.http.put(&url).json(input)).await?;
        handle_response(response).await
    }

    pub async fn delete_fort(&self, id: Uuid) -> Result<(), ApiError> {
        let url = format!("{}/api/forts/{}", self.base_url, id);
        let response = self.request(self.http.delete(&url)).await?;

        match response.status() {
            StatusCode::OK | StatusCode::NO_CONTENT => Ok(()),
            StatusCode::NOT_FOUND => Err(ApiError::NotFound),
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(ApiError::Api {
                    status: status.as_u16(),
                    message,
                })
            }
        }
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.request(self.http.get(&url)).await?;
        handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self.request(self.http.post(&url).json(body)).await?;
        handle_response(response).await
    }

    async fn request(
        &self,
        mut builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        if let Some(token) = &self.bearer {
            builder = builder.bearer_auth(token);
        }
        Ok(builder.send().await?)
    }
}

async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound);
    }

    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(ApiError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json().await?)
}
