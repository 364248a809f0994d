//! Records exchanged with the consumer (`/app/...`) endpoints.
//!
//! Amounts travel as decimal strings to avoid float drift; every field the
//! screens can live without defaults when the server omits it.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::types::PageQuery;
use crate::validation::rules;

/// Page size the consumer screens request unless told otherwise.
pub const CONSUMER_PAGE_SIZE: u32 = 20;

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    #[validate(length(min = 6, max = 12, message = "Username must be 6-12 characters"))]
    pub username: String,
    #[validate(length(min = 6, max = 12, message = "Password must be 6-12 characters"))]
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub friend_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppUserInfo {
    #[serde(alias = "userId")]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub ref_code: String,
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppLoginResponse {
    pub token: String,
    pub user_info: AppUserInfo,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    #[validate(length(min = 6, max = 12, message = "Password must be 6-12 characters"))]
    pub old_password: String,
    #[validate(length(min = 6, max = 12, message = "Password must be 6-12 characters"))]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SetPayPasswordRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub old_pay_password: Option<String>,
    #[validate(custom(function = "rules::validate_pay_password"))]
    pub new_pay_password: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct WalletInfo {
    pub user_id: i64,
    pub pay_status: String,
    pub balance: String,
    pub frozen: String,
    pub experience_balance: String,
    pub challenge_balance: String,
    pub total_income: String,
    #[serde(rename = "totalR")]
    pub total_recharge: String,
    #[serde(rename = "totalW")]
    pub total_withdraw: String,
    pub updated_at: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenge {
    pub challenge_id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub duration: i32,
    #[serde(default)]
    pub start_time: String,
    #[serde(default)]
    pub end_time: String,
    #[serde(default)]
    pub check_in_start_time: String,
    #[serde(default)]
    pub check_in_end_time: String,
    #[serde(default)]
    pub entry_fee: String,
    #[serde(default)]
    pub prize_pool: String,
    #[serde(default)]
    pub participant_count: u32,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub rules: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeRef {
    pub challenge_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengeWithPayPassword {
    pub challenge_id: i64,
    pub pay_password: String,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChallengePageRequest {
    pub challenge_id: i64,
    #[serde(flatten)]
    pub query: PageQuery,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub user_id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub join_time: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TodayStats {
    pub checked_in_count: u32,
    pub not_checked_in_count: u32,
    pub total_count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRecord {
    pub user_id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub check_in_time: String,
    /// `success`, `late` or `missed`.
    #[serde(default)]
    pub status: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarDay {
    pub date: String,
    /// `checked`, `unchecked` or `supplemented`.
    pub status: String,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub loss: Option<String>,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarRequest {
    pub challenge_id: i64,
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SupplementRequest {
    pub challenge_id: i64,
    pub date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResult {
    #[serde(default)]
    pub check_in_time: String,
    #[serde(default)]
    pub check_in_date: String,
    /// 1 succeeded, 2 failed.
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingEntry {
    pub user_id: i64,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    pub value: String,
    pub rank_no: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InviteStats {
    pub today_invite_count: u32,
    pub total_invite_count: u32,
    pub invite_income: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvitedUser {
    #[serde(default)]
    pub user_id: i64,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub nickname: String,
    #[serde(default)]
    pub avatar: String,
    #[serde(default)]
    pub invite_time: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InviteCode {
    #[serde(alias = "friendCode")]
    pub friend_code: String,
    #[serde(default, alias = "inviteUrl")]
    pub invite_url: String,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionFilter {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionRecord {
    #[serde(default)]
    pub id: i64,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub amount: String,
    #[serde(default)]
    pub balance_after: String,
    #[serde(default)]
    pub remark: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TransactionTodayStats {
    pub income: String,
    pub expense: String,
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawApplyRequest {
    #[validate(length(min = 1, message = "Amount is required"))]
    pub amount: String,
    #[validate(custom(function = "rules::validate_pay_password"))]
    pub pay_password: String,
    pub withdraw_type: String,
    #[validate(length(min = 1, message = "Account is required"))]
    pub account: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawApplyResponse {
    pub biz_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawRecord {
    pub biz_id: String,
    pub amount: String,
    #[serde(default)]
    pub fee: String,
    #[serde(default)]
    pub actual_amount: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: i32,
    #[serde(default)]
    pub reject_reason: String,
    #[serde(default)]
    pub tx_hash: String,
    #[serde(default)]
    pub reviewed_at: String,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct WalletAddressRequest {
    pub address: String,
}
