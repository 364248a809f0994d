use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use validator::Validate;

use crate::validation::rules;

pub const NETWORK_ERROR_MESSAGE: &str = "Network error";

/// Uniform `{code, message|msg, data}` wrapper every response follows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub code: i64,
    #[serde(default, alias = "msg")]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageQuery {
    pub page: u32,
    pub page_size: u32,
}

impl PageQuery {
    pub const DEFAULT_PAGE: u32 = 1;
    pub const DEFAULT_PAGE_SIZE: u32 = 10;
    pub const PAGE_SIZE_OPTIONS: [u32; 4] = [10, 20, 50, 100];

    pub fn new(page: u32, page_size: u32) -> Self {
        Self {
            page: page.max(1),
            page_size: page_size.max(1),
        }
    }

    /// Highest page that still holds rows for `total` records (at least 1).
    pub fn last_page_for(&self, total: u64) -> u32 {
        let pages = total.div_ceil(u64::from(self.page_size));
        pages.clamp(1, u64::from(u32::MAX)) as u32
    }
}

impl Default for PageQuery {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PAGE, Self::DEFAULT_PAGE_SIZE)
    }
}

/// One page of records plus the server-side total. Replaced wholesale on every fetch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedCollection<T> {
    #[serde(alias = "list", default = "Vec::new")]
    pub items: Vec<T>,
    #[serde(default)]
    pub total: u64,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub page_size: u32,
}

impl<T> Default for PagedCollection<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            total: 0,
            page: PageQuery::DEFAULT_PAGE,
            page_size: PageQuery::DEFAULT_PAGE_SIZE,
        }
    }
}

impl<T> PagedCollection<T> {
    /// Pins the page to the query that fetched it, dropping any rows beyond `page_size`.
    pub fn conform_to(mut self, query: &PageQuery) -> Self {
        if self.items.len() > query.page_size as usize {
            log::warn!(
                "Server returned {} rows for page size {}; truncating",
                self.items.len(),
                query.page_size
            );
            self.items.truncate(query.page_size as usize);
        }
        self.page = query.page;
        self.page_size = query.page_size;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

/// Paged request body: page fields and filter fields flattened into one object.
#[derive(Debug, Serialize)]
pub struct ListRequest<'a, F: Serialize> {
    #[serde(flatten)]
    pub query: &'a PageQuery,
    #[serde(flatten)]
    pub filter: &'a F,
}

/// Filter for list endpoints that take nothing beyond the page fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoFilter {}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct IdRequest {
    pub id: i64,
}

/// Update body: the record id next to the draft fields.
#[derive(Debug, Serialize)]
pub struct WithId<'a, D: Serialize> {
    pub id: i64,
    #[serde(flatten)]
    pub draft: &'a D,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },
    #[error("{message}")]
    Application { code: i64, message: String },
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("{0}")]
    Validation(String),
}

impl ApiError {
    pub fn transport(status: Option<u16>, message: impl Into<String>) -> Self {
        Self::Transport {
            status,
            message: message.into(),
        }
    }

    pub fn application(code: i64, message: impl Into<String>) -> Self {
        Self::Application {
            code,
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Failures the server or the form reports as part of normal operation
    /// (bad credentials, duplicate key, invalid input).
    pub fn is_expected(&self) -> bool {
        matches!(self, Self::Application { .. } | Self::Validation(_))
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => *status,
            Self::Unauthorized => Some(401),
            _ => None,
        }
    }

    /// Text for a toast: server messages verbatim, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Transport { .. } => NETWORK_ERROR_MESSAGE.to_string(),
            Self::Application { message, .. } if !message.trim().is_empty() => message.clone(),
            Self::Validation(message) if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<ApiError> for String {
    fn from(error: ApiError) -> Self {
        error.to_string()
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |err| match &err.message {
                    Some(message) => message.to_string(),
                    None => format!("{}: {}", field, err.code),
                })
            })
            .collect();
        messages.sort();
        Self::Validation(messages.join("; "))
    }
}

impl From<validator::ValidationError> for ApiError {
    fn from(error: validator::ValidationError) -> Self {
        match error.message {
            Some(message) => Self::Validation(message.to_string()),
            None => Self::Validation(error.code.to_string()),
        }
    }
}

// ---------------------------------------------------------------------------
// Admin records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AdminLoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminUserInfo {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub nick_name: String,
    pub role: i32,
    #[serde(default)]
    pub status: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminLoginResponse {
    pub token: String,
    #[serde(alias = "userInfo")]
    pub admin_info: AdminUserInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminMeResponse {
    #[serde(alias = "adminId")]
    pub admin_id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeConfig {
    pub id: i64,
    pub is_auto_settle: bool,
    pub settle_time: String,
    pub cycle_days: i32,
    pub start_time: String,
    pub end_time: String,
    pub max_deposit_amount: f64,
    pub min_withdraw_amount: f64,
    pub max_daily_profit: f64,
    pub excess_tax_rate: f64,
    pub min_daily_profit: f64,
    pub daily_platform_subsidy: f64,
    pub uncheck_deduct_rate: f64,
    pub min_uncheck_users: i32,
    pub commission_follow: f64,
    pub commission_join: f64,
    #[serde(rename = "commissionL1")]
    pub commission_l1: f64,
    #[serde(rename = "commissionL2")]
    pub commission_l2: f64,
    #[serde(rename = "commissionL3")]
    pub commission_l3: f64,
    #[serde(default)]
    pub updated_at: String,
}

/// Editable challenge fields, sent as-is on create and next to `id` on update.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeDraft {
    pub is_auto_settle: bool,
    #[validate(length(min = 1, message = "Settle time is required"))]
    pub settle_time: String,
    #[validate(range(min = 1, message = "Cycle days must be at least 1"))]
    pub cycle_days: i32,
    #[validate(length(min = 1, message = "Start time is required"))]
    pub start_time: String,
    #[validate(length(min = 1, message = "End time is required"))]
    pub end_time: String,
    #[validate(range(min = 0.0))]
    pub max_deposit_amount: f64,
    #[validate(range(min = 0.0))]
    pub min_withdraw_amount: f64,
    pub max_daily_profit: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub excess_tax_rate: f64,
    pub min_daily_profit: f64,
    pub daily_platform_subsidy: f64,
    #[validate(range(min = 0.0, max = 1.0))]
    pub uncheck_deduct_rate: f64,
    #[validate(range(min = 0))]
    pub min_uncheck_users: i32,
    pub commission_follow: f64,
    pub commission_join: f64,
    #[serde(rename = "commissionL1")]
    pub commission_l1: f64,
    #[serde(rename = "commissionL2")]
    pub commission_l2: f64,
    #[serde(rename = "commissionL3")]
    pub commission_l3: f64,
}

impl From<&ChallengeConfig> for ChallengeDraft {
    fn from(record: &ChallengeConfig) -> Self {
        Self {
            is_auto_settle: record.is_auto_settle,
            settle_time: record.settle_time.clone(),
            cycle_days: record.cycle_days,
            start_time: record.start_time.clone(),
            end_time: record.end_time.clone(),
            max_deposit_amount: record.max_deposit_amount,
            min_withdraw_amount: record.min_withdraw_amount,
            max_daily_profit: record.max_daily_profit,
            excess_tax_rate: record.excess_tax_rate,
            min_daily_profit: record.min_daily_profit,
            daily_platform_subsidy: record.daily_platform_subsidy,
            uncheck_deduct_rate: record.uncheck_deduct_rate,
            min_uncheck_users: record.min_uncheck_users,
            commission_follow: record.commission_follow,
            commission_join: record.commission_join,
            commission_l1: record.commission_l1,
            commission_l2: record.commission_l2,
            commission_l3: record.commission_l3,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SysConfigEntry {
    pub id: i64,
    pub config_name: String,
    pub config_key: String,
    #[serde(default)]
    pub config_value: String,
    #[serde(default)]
    pub config_type: String,
    #[serde(default)]
    pub is_frontend: String,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub create_by: i64,
    #[serde(default)]
    pub update_by: i64,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDraft {
    #[validate(length(min = 1, message = "Config name is required"))]
    pub config_name: String,
    #[validate(custom(function = "rules::validate_config_key"))]
    pub config_key: String,
    #[validate(length(min = 1, message = "Config value is required"))]
    pub config_value: String,
    #[validate(length(min = 1, message = "Config type is required"))]
    pub config_type: String,
    /// `Y` when the value is exposed to the consumer app.
    #[validate(custom(function = "rules::validate_yes_no"))]
    pub is_frontend: String,
    pub remark: String,
}

impl Default for ConfigDraft {
    fn default() -> Self {
        Self {
            config_name: String::new(),
            config_key: String::new(),
            config_value: String::new(),
            config_type: String::new(),
            is_frontend: "N".to_string(),
            remark: String::new(),
        }
    }
}

impl From<&SysConfigEntry> for ConfigDraft {
    fn from(record: &SysConfigEntry) -> Self {
        Self {
            config_name: record.config_name.clone(),
            config_key: record.config_key.clone(),
            config_value: record.config_value.clone(),
            config_type: record.config_type.clone(),
            is_frontend: record.is_frontend.clone(),
            remark: record.remark.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManagedUser {
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
    pub status: i32,
    pub role: i32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub last_login_at: Option<String>,
}

/// Editable user fields. `password` is only sent when set, so updates keep
/// the stored password unless a new one is typed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserDraft {
    #[validate(custom(function = "rules::validate_username"))]
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::validate_password_strength"))]
    pub password: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email(message = "Invalid email address"))]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(custom(function = "rules::validate_phone"))]
    pub phone: Option<String>,
    #[validate(range(min = 1, max = 3, message = "Unknown role"))]
    pub role: i32,
    #[validate(range(min = 0, max = 2, message = "Unknown status"))]
    pub status: i32,
}

impl Default for UserDraft {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: None,
            email: None,
            phone: None,
            role: 3,
            status: 1,
        }
    }
}

impl From<&ManagedUser> for UserDraft {
    fn from(record: &ManagedUser) -> Self {
        Self {
            username: record.username.clone(),
            password: None,
            email: record.email.clone(),
            phone: record.phone.clone(),
            role: record.role,
            status: record.status,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResetPasswordRequest {
    pub id: i64,
    pub new_password: String,
}
