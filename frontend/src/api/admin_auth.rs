use super::{
    client::ApiClient,
    types::{AdminLoginRequest, AdminLoginResponse, AdminMeResponse, ApiError},
};
use crate::validation::ensure_valid;

impl ApiClient {
    pub async fn admin_login(
        &self,
        request: &AdminLoginRequest,
    ) -> Result<AdminLoginResponse, ApiError> {
        ensure_valid(request)?;
        self.request("/admin/auth/login", request).await
    }

    pub async fn admin_logout(&self) -> Result<(), ApiError> {
        self.execute_empty("/admin/auth/logout").await.map(|_| ())
    }

    pub async fn admin_me(&self) -> Result<AdminMeResponse, ApiError> {
        self.request_empty("/admin/auth/me").await
    }
}
