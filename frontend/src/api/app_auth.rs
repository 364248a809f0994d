use super::{
    app_types::{
        AppLoginResponse, AppUserInfo, ChangePasswordRequest, LoginRequest, RegisterRequest,
        SetPayPasswordRequest, UpdateProfileRequest,
    },
    client::ApiClient,
    types::ApiError,
};
use crate::validation::ensure_valid;

impl ApiClient {
    /// Returns the server message (shown as the success toast).
    pub async fn register(&self, request: &RegisterRequest) -> Result<String, ApiError> {
        ensure_valid(request)?;
        self.execute("/app/auth/register", request).await
    }

    pub async fn login(&self, request: &LoginRequest) -> Result<AppLoginResponse, ApiError> {
        ensure_valid(request)?;
        self.request("/app/auth/login", request).await
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.execute_empty("/app/auth/logout").await.map(|_| ())
    }

    pub async fn change_password(&self, request: &ChangePasswordRequest) -> Result<(), ApiError> {
        ensure_valid(request)?;
        self.execute("/app/auth/change-password", request)
            .await
            .map(|_| ())
    }

    pub async fn set_pay_password(&self, request: &SetPayPasswordRequest) -> Result<(), ApiError> {
        ensure_valid(request)?;
        self.execute("/app/auth/set-pay-password", request)
            .await
            .map(|_| ())
    }

    pub async fn update_profile(&self, request: &UpdateProfileRequest) -> Result<(), ApiError> {
        self.execute("/app/auth/update-profile", request)
            .await
            .map(|_| ())
    }

    pub async fn user_info(&self) -> Result<AppUserInfo, ApiError> {
        self.request_empty("/app/auth/user-info").await
    }
}
