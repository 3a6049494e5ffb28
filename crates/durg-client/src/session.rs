// Session facade tying the API client, token storage, and session reader
// Decision: logout clears local state first and fires the server call in the
// background, so navigation is never blocked on the network

use std::sync::Arc;

use crate::api::{
    AdminSessionResponse, AdminSignupRequest, ApiClient, ApiError, LoginRequest, SessionResponse,
    SignupRequest,
};
use crate::reader::{ClientSession, SessionReader};
use crate::store::SessionAccessor;

pub struct Session {
    api: Arc<ApiClient>,
    accessor: SessionAccessor,
    reader: SessionReader,
}

impl Session {
    pub fn new(base_url: &str) -> Self {
        Self {
            api: Arc::new(ApiClient::new(base_url)),
            accessor: SessionAccessor::new(),
            reader: SessionReader::from_env(),
        }
    }

    pub fn with_parts(api: ApiClient, accessor: SessionAccessor, reader: SessionReader) -> Self {
        Self {
            api: Arc::new(api),
            accessor,
            reader,
        }
    }

    /// Current session state, re-read from storage on every call
    pub fn current(&self) -> ClientSession {
        self.reader.session(self.accessor.token().as_deref())
    }

    pub fn token(&self) -> Option<String> {
        self.accessor.token()
    }

    pub async fn signup(&self, req: &SignupRequest) -> Result<SessionResponse, ApiError> {
        let response = self.api.signup(req).await?;
        self.accessor.set_token(&response.token);
        Ok(response)
    }

    pub async fn login(&self, req: &LoginRequest) -> Result<SessionResponse, ApiError> {
        let response = self.api.login(req).await?;
        self.accessor.set_token(&response.token);
        Ok(response)
    }

    pub async fn admin_signup(
        &self,
        req: &AdminSignupRequest,
    ) -> Result<AdminSessionResponse, ApiError> {
        let response = self.api.admin_signup(req).await?;
        self.accessor.set_token(&response.token);
        Ok(response)
    }

    pub async fn admin_login(&self, req: &LoginRequest) -> Result<AdminSessionResponse, ApiError> {
        let response = self.api.admin_login(req).await?;
        self.accessor.set_token(&response.token);
        Ok(response)
    }

    /// Log out: clear stored tokens, then tell the server in the background.
    ///
    /// The server call removes the HTTP-only cookies; if it fails the local
    /// session is already gone, so the failure is logged and dropped.
    pub fn logout(&self) {
        self.accessor.clear();

        let api = self.api.clone();
        tokio::spawn(async move {
            if let Err(e) = api.logout().await {
                tracing::warn!("server logout failed: {}", e);
            }
        });
    }
}
