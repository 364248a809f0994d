#![cfg(not(coverage))]

use super::*;
use crate::{
    locale::Locale,
    test_support::fixtures::{challenge_config_json, config_json, managed_user_json},
    utils::storage::{KeyValueStorage, MemoryStorage, TOKEN_KEY, USER_INFO_KEY},
};
use httpmock::prelude::*;
use serde_json::json;
use std::{cell::Cell, rc::Rc};

fn ok(data: serde_json::Value) -> serde_json::Value {
    json!({ "code": 0, "message": "success", "data": data })
}

fn storage_with_token(token: &str) -> Rc<MemoryStorage> {
    let storage = Rc::new(MemoryStorage::new());
    storage.set_item(TOKEN_KEY, token).unwrap();
    storage
        .set_item(USER_INFO_KEY, r#"{"id":1,"username":"root","role":1}"#)
        .unwrap();
    storage
}

fn admin_client(server: &MockServer, storage: Rc<MemoryStorage>) -> ApiClient {
    ApiClient::new_with_base_url(ClientOptions::admin(), server.url("/api"))
        .with_storage(storage)
        .with_locale(Locale::En)
}

fn consumer_client(server: &MockServer, locale: Locale) -> ApiClient {
    ApiClient::new_with_base_url(ClientOptions::consumer(), server.url("/api"))
        .with_storage(Rc::new(MemoryStorage::new()))
        .with_locale(locale)
}

#[tokio::test]
async fn admin_login_decodes_token_and_profile() {
    let server = MockServer::start_async().await;
    let login = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/auth/login")
            .header("content-type", "application/json")
            .json_body(json!({ "username": "root", "password": "Secret123" }));
        then.status(200).json_body(ok(json!({
            "token": "abc",
            "adminInfo": { "id": 1, "username": "root", "nickName": "Root", "role": 1, "status": 1 }
        })));
    });

    let client = admin_client(&server, Rc::new(MemoryStorage::new()));
    let response = client
        .admin_login(&AdminLoginRequest {
            username: "root".into(),
            password: "Secret123".into(),
        })
        .await
        .unwrap();

    login.assert();
    assert_eq!(response.token, "abc");
    assert_eq!(response.admin_info.role, 1);
    assert_eq!(response.admin_info.nick_name, "Root");
}

#[tokio::test]
async fn admin_login_rejects_blank_credentials_before_sending() {
    let server = MockServer::start_async().await;
    let login = server.mock(|when, then| {
        when.method(POST).path("/api/admin/auth/login");
        then.status(200).json_body(ok(json!(null)));
    });

    let client = admin_client(&server, Rc::new(MemoryStorage::new()));
    let err = client
        .admin_login(&AdminLoginRequest {
            username: String::new(),
            password: "x".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::validation("Username is required"));
    assert_eq!(login.hits(), 0);
}

#[tokio::test]
async fn application_error_surfaces_server_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/admin/auth/login");
        then.status(200)
            .json_body(json!({ "code": 1001, "message": "invalid credentials", "data": null }));
    });

    let client = admin_client(&server, Rc::new(MemoryStorage::new()));
    let err = client
        .admin_login(&AdminLoginRequest {
            username: "root".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::application(1001, "invalid credentials"));
    assert!(err.is_expected());
    assert_eq!(err.user_message("Login failed"), "invalid credentials");
}

#[tokio::test]
async fn failure_envelope_with_msg_field_is_read() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/app/auth/login");
        then.status(200)
            .json_body(json!({ "code": 2, "msg": "user disabled" }));
    });

    let client = consumer_client(&server, Locale::En);
    let err = client
        .login(&LoginRequest {
            username: "alice1".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err.user_message("Login failed"), "user disabled");
}

#[tokio::test]
async fn empty_application_message_uses_fallback() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/admin/config/delete");
        then.status(200).json_body(json!({ "code": 7, "message": "" }));
    });

    let client = admin_client(&server, storage_with_token("t"));
    let err = client.delete_config(3).await.unwrap_err();
    assert_eq!(err.user_message("Delete failed"), "Delete failed");
}

#[tokio::test]
async fn server_error_becomes_transport_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/admin/challenge/list");
        then.status(500).body("boom");
    });

    let client = admin_client(&server, storage_with_token("t"));
    let err = client
        .list_challenge_configs(&PageQuery::default())
        .await
        .unwrap_err();

    assert_eq!(err.status(), Some(500));
    assert_eq!(
        err,
        ApiError::transport(Some(500), "HTTP error! status: 500")
    );
    assert_eq!(err.user_message("Load failed"), NETWORK_ERROR_MESSAGE);
    assert!(!err.is_expected());
}

#[tokio::test]
async fn non_2xx_with_envelope_keeps_its_message() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/admin/user/create");
        then.status(400)
            .json_body(json!({ "code": 400, "message": "username taken" }));
    });

    let client = admin_client(&server, storage_with_token("t"));
    let draft = UserDraft {
        username: "ops_lead".into(),
        ..UserDraft::default()
    };
    let err = client.create_user(&draft).await.unwrap_err();
    assert_eq!(err, ApiError::transport(Some(400), "username taken"));
}

#[tokio::test]
async fn unauthorized_clears_session_and_runs_hook() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/admin/auth/me");
        then.status(401)
            .json_body(json!({ "code": 401, "message": "token expired" }));
    });

    let storage = storage_with_token("stale");
    let fired = Rc::new(Cell::new(0));
    let hook_counter = Rc::clone(&fired);
    let client = admin_client(&server, Rc::clone(&storage))
        .on_unauthorized(move || hook_counter.set(hook_counter.get() + 1));

    let err = client.admin_me().await.unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(fired.get(), 1);
    assert!(storage.get_item(TOKEN_KEY).is_none());
    assert!(storage.get_item(USER_INFO_KEY).is_none());
}

#[tokio::test]
async fn envelope_code_401_in_success_response_is_application_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/admin/auth/me");
        then.status(200)
            .json_body(json!({ "code": 401, "message": "login required" }));
    });

    let storage = storage_with_token("still-here");
    let fired = Rc::new(Cell::new(false));
    let flag = Rc::clone(&fired);
    let client =
        admin_client(&server, Rc::clone(&storage)).on_unauthorized(move || flag.set(true));

    let err = client.admin_me().await.unwrap_err();
    assert_eq!(err, ApiError::application(401, "login required"));
    assert!(!fired.get());
    assert_eq!(storage.get_item(TOKEN_KEY).as_deref(), Some("still-here"));
}

#[tokio::test]
async fn bearer_token_is_read_at_call_time() {
    let server = MockServer::start_async().await;
    let me = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/auth/me")
            .header("authorization", "Bearer fresh-token")
            .json_body(json!({}));
        then.status(200).json_body(ok(json!({ "admin_id": 9 })));
    });

    let storage = Rc::new(MemoryStorage::new());
    let client = admin_client(&server, Rc::clone(&storage));
    storage.set_item(TOKEN_KEY, "fresh-token").unwrap();

    let response = client.admin_me().await.unwrap();
    me.assert();
    assert_eq!(response.admin_id, 9);
}

#[tokio::test]
async fn consumer_calls_carry_locale_header() {
    let server = MockServer::start_async().await;
    let wallet = server.mock(|when, then| {
        when.method(POST)
            .path("/api/app/wallet/info")
            .header("x-lang", "ms")
            .json_body(json!({}));
        then.status(200).json_body(ok(json!({
            "userId": 5,
            "balance": "12.50",
            "totalR": "100.00",
            "totalW": "20.00"
        })));
    });

    let client = consumer_client(&server, Locale::Ms);
    let info = client.wallet_info().await.unwrap();

    wallet.assert();
    assert_eq!(info.balance, "12.50");
    assert_eq!(info.total_recharge, "100.00");
    assert_eq!(info.frozen, "");
}

#[tokio::test]
async fn admin_challenge_endpoints_round_trip() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/challenge/list")
            .json_body(json!({ "page": 2, "pageSize": 20 }));
        then.status(200).json_body(ok(json!({
            "list": [challenge_config_json(21)],
            "total": 21
        })));
    });
    let get = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/challenge/get")
            .json_body(json!({ "id": 21 }));
        then.status(200).json_body(ok(challenge_config_json(21)));
    });
    let update = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/challenge/update")
            .json_body_partial(r#"{ "id": 21, "cycleDays": 30, "commissionL1": 0.05 }"#);
        then.status(200).json_body(ok(json!(null)));
    });
    let delete = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/challenge/delete")
            .json_body(json!({ "id": 21 }));
        then.status(200).json_body(ok(json!(null)));
    });

    let client = admin_client(&server, storage_with_token("t"));
    let page = client
        .list_challenge_configs(&PageQuery::new(2, 20))
        .await
        .unwrap();
    assert_eq!(page.total, 21);
    assert_eq!(page.items.len(), 1);

    let record = client.get_challenge_config(21).await.unwrap();
    let mut draft = ChallengeDraft::from(&record);
    draft.cycle_days = 30;
    client.update_challenge_config(21, &draft).await.unwrap();
    client.delete_challenge_config(21).await.unwrap();

    list.assert();
    get.assert();
    update.assert();
    delete.assert();
}

#[tokio::test]
async fn admin_config_list_sends_filters_flattened() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/config/list")
            .json_body(json!({ "page": 1, "pageSize": 10, "configKey": "site" }));
        then.status(200).json_body(ok(json!({
            "list": [config_json(1, "site_name")],
            "total": 1,
            "page": 1,
            "pageSize": 10
        })));
    });
    let create = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/config/create")
            .json_body_partial(r#"{ "configKey": "site_title", "isFrontend": "N" }"#);
        then.status(200).json_body(ok(json!(null)));
    });

    let client = admin_client(&server, storage_with_token("t"));
    let filter = ConfigFilter {
        config_key: Some("site".into()),
        ..ConfigFilter::default()
    };
    let page = client
        .list_configs(&PageQuery::default(), &filter)
        .await
        .unwrap();
    assert_eq!(page.items[0].config_key, "site_name");

    let draft = ConfigDraft {
        config_name: "Site title".into(),
        config_key: "site_title".into(),
        config_value: "Habit".into(),
        config_type: "string".into(),
        ..ConfigDraft::default()
    };
    client.create_config(&draft).await.unwrap();

    list.assert();
    create.assert();
}

#[tokio::test]
async fn admin_user_endpoints_succeed() {
    let server = MockServer::start_async().await;
    let list = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/user/list")
            .json_body(json!({ "page": 1, "pageSize": 10, "status": 1 }));
        then.status(200).json_body(ok(json!({
            "list": [managed_user_json(4, "ops_lead")],
            "total": 1
        })));
    });
    let get = server.mock(|when, then| {
        when.method(POST).path("/api/admin/user/get").json_body(json!({ "id": 4 }));
        then.status(200).json_body(ok(managed_user_json(4, "ops_lead")));
    });
    let update = server.mock(|when, then| {
        when.method(POST).path("/api/admin/user/update").json_body(json!({
            "id": 4,
            "username": "ops_lead",
            "email": "ops@example.com",
            "role": 2,
            "status": 0
        }));
        then.status(200).json_body(ok(json!(null)));
    });
    let reset = server.mock(|when, then| {
        when.method(POST)
            .path("/api/admin/user/reset-password")
            .json_body(json!({ "id": 4, "newPassword": "Rotate123" }));
        then.status(200).json_body(ok(json!(null)));
    });

    let client = admin_client(&server, storage_with_token("t"));
    let filter = UserFilter {
        status: Some(1),
        ..UserFilter::default()
    };
    let page = client.list_users(&PageQuery::default(), &filter).await.unwrap();
    assert_eq!(page.items[0].username, "ops_lead");

    let user = client.get_user(4).await.unwrap();
    let mut draft = UserDraft::from(&user);
    draft.status = 0;
    client.update_user(4, &draft).await.unwrap();
    client.reset_user_password(4, "Rotate123").await.unwrap();

    let weak = client.reset_user_password(4, "short").await.unwrap_err();
    assert!(matches!(weak, ApiError::Validation(_)));

    list.assert();
    get.assert();
    update.assert();
    assert_eq!(reset.hits(), 1);
}

#[tokio::test]
async fn consumer_auth_endpoints_succeed() {
    let server = MockServer::start_async().await;
    let register = server.mock(|when, then| {
        when.method(POST).path("/api/app/auth/register").json_body(json!({
            "username": "alice1",
            "password": "secret1",
            "friendCode": "F00D"
        }));
        then.status(200)
            .json_body(json!({ "code": 0, "message": "registered", "data": null }));
    });
    let login = server.mock(|when, then| {
        when.method(POST).path("/api/app/auth/login");
        then.status(200).json_body(ok(json!({
            "token": "cookie-backed",
            "userInfo": { "userId": 7, "username": "alice1", "refCode": "F00E" }
        })));
    });
    let pay = server.mock(|when, then| {
        when.method(POST)
            .path("/api/app/auth/set-pay-password")
            .json_body(json!({ "newPayPassword": "123456" }));
        then.status(200).json_body(ok(json!(null)));
    });
    let info = server.mock(|when, then| {
        when.method(POST).path("/api/app/auth/user-info").json_body(json!({}));
        then.status(200)
            .json_body(ok(json!({ "id": 7, "username": "alice1", "nickname": "Al" })));
    });
    let logout = server.mock(|when, then| {
        when.method(POST).path("/api/app/auth/logout");
        then.status(200).json_body(ok(json!(null)));
    });

    let client = consumer_client(&server, Locale::ZhCn);
    let message = client
        .register(&RegisterRequest {
            username: "alice1".into(),
            password: "secret1".into(),
            friend_code: Some("F00D".into()),
        })
        .await
        .unwrap();
    assert_eq!(message, "registered");

    let session = client
        .login(&LoginRequest {
            username: "alice1".into(),
            password: "secret1".into(),
        })
        .await
        .unwrap();
    assert_eq!(session.user_info.id, 7);
    assert_eq!(session.user_info.ref_code, "F00E");

    client
        .set_pay_password(&SetPayPasswordRequest {
            old_pay_password: None,
            new_pay_password: "123456".into(),
        })
        .await
        .unwrap();
    let bad_pin = client
        .set_pay_password(&SetPayPasswordRequest {
            old_pay_password: None,
            new_pay_password: "12ab".into(),
        })
        .await
        .unwrap_err();
    assert!(matches!(bad_pin, ApiError::Validation(_)));

    assert_eq!(client.user_info().await.unwrap().nickname, "Al");
    client.logout().await.unwrap();

    register.assert();
    login.assert();
    assert_eq!(pay.hits(), 1);
    info.assert();
    logout.assert();
}

#[tokio::test]
async fn consumer_register_enforces_length_rules() {
    let server = MockServer::start_async().await;
    let client = consumer_client(&server, Locale::En);
    let err = client
        .register(&RegisterRequest {
            username: "bob".into(),
            password: "secret1".into(),
            friend_code: None,
        })
        .await
        .unwrap_err();
    assert_eq!(err, ApiError::validation("Username must be 6-12 characters"));
}

#[tokio::test]
async fn consumer_challenge_and_checkin_endpoints_succeed() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/app/challenge/list").json_body(json!({}));
        then.status(200).json_body(ok(json!([
            { "challengeId": 1, "name": "Early riser", "entryFee": "10.00", "participantCount": 12 }
        ])));
    });
    let join = server.mock(|when, then| {
        when.method(POST)
            .path("/api/app/challenge/join")
            .json_body(json!({ "challengeId": 1, "payPassword": "654321" }));
        then.status(200).json_body(ok(json!(null)));
    });
    let participants = server.mock(|when, then| {
        when.method(POST)
            .path("/api/app/challenge/participants")
            .json_body(json!({ "challengeId": 1, "page": 1, "pageSize": 20 }));
        then.status(200).json_body(ok(json!({
            "list": [{ "userId": 3, "nickname": "Kai" }],
            "total": 1
        })));
    });
    server.mock(|when, then| {
        when.method(POST)
            .path("/api/app/checkin/check-in")
            .json_body(json!({ "challengeId": 1 }));
        then.status(200).json_body(ok(json!({
            "checkInTime": "06:30:00",
            "checkInDate": "2025-03-01",
            "status": 1,
            "message": "ok"
        })));
    });
    let calendar = server.mock(|when, then| {
        when.method(POST)
            .path("/api/app/checkin/calendar")
            .json_body(json!({ "challengeId": 1, "year": 2025, "month": 3 }));
        then.status(200).json_body(ok(json!([
            { "date": "2025-03-01", "status": "checked", "amount": "1.20" },
            { "date": "2025-03-02", "status": "unchecked" }
        ])));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/app/checkin/today-stats");
        then.status(200).json_body(ok(json!({ "checkedInCount": 4, "totalCount": 10 })));
    });

    let client = consumer_client(&server, Locale::En);
    let challenges = client.list_challenges().await.unwrap();
    assert_eq!(challenges[0].participant_count, 12);

    client.join_challenge(1, "654321").await.unwrap();
    assert!(client.join_challenge(1, "12").await.is_err());

    let page = client
        .challenge_participants(1, PageQuery::new(1, CONSUMER_PAGE_SIZE))
        .await
        .unwrap();
    assert_eq!(page.items[0].nickname, "Kai");

    assert_eq!(client.check_in(1).await.unwrap().status, 1);

    let days = client.checkin_calendar(1, 2025, 3).await.unwrap();
    assert_eq!(days.len(), 2);
    assert_eq!(days[1].amount, None);
    assert!(client.checkin_calendar(1, 2025, 13).await.is_err());

    let stats = client.checkin_today_stats(1).await.unwrap();
    assert_eq!(stats.not_checked_in_count, 0);
    assert_eq!(stats.total_count, 10);

    assert_eq!(join.hits(), 1);
    participants.assert();
    assert_eq!(calendar.hits(), 1);
}

#[tokio::test]
async fn consumer_wallet_ranking_and_invite_endpoints_succeed() {
    let server = MockServer::start_async().await;
    let transactions = server.mock(|when, then| {
        when.method(POST)
            .path("/api/app/transaction/list")
            .json_body(json!({ "page": 1, "pageSize": 20, "type": "income" }));
        then.status(200).json_body(ok(json!({
            "list": [{ "id": 1, "type": "income", "amount": "3.00" }],
            "total": 1
        })));
    });
    let withdraw = server.mock(|when, then| {
        when.method(POST)
            .path("/api/app/withdraw/apply")
            .json_body(json!({
                "amount": "50",
                "payPassword": "123456",
                "withdrawType": "usdt",
                "account": "T123"
            }));
        then.status(200).json_body(ok(json!({ "bizId": "W-1" })));
    });
    let wealth = server.mock(|when, then| {
        when.method(POST)
            .path("/api/app/ranking/wealth")
            .json_body(json!({ "page": 1, "pageSize": 20 }));
        then.status(200).json_body(ok(json!({
            "list": [{ "userId": 2, "value": "900.00", "rankNo": 1 }],
            "total": 1
        })));
    });
    server.mock(|when, then| {
        when.method(POST).path("/api/app/invite/get-code");
        then.status(200).json_body(ok(json!({ "friendCode": "F00D" })));
    });
    let address = server.mock(|when, then| {
        when.method(POST)
            .path("/api/app/wallet/address")
            .json_body(json!({ "address": "T999" }));
        then.status(200).json_body(ok(json!(null)));
    });

    let client = consumer_client(&server, Locale::En);
    let query = PageQuery::new(1, CONSUMER_PAGE_SIZE);
    let filter = TransactionFilter {
        kind: Some("income".into()),
    };
    let page = client.list_transactions(&query, &filter).await.unwrap();
    assert_eq!(page.items[0].kind, "income");

    let applied = client
        .apply_withdraw(&WithdrawApplyRequest {
            amount: "50".into(),
            pay_password: "123456".into(),
            withdraw_type: "usdt".into(),
            account: "T123".into(),
        })
        .await
        .unwrap();
    assert_eq!(applied.biz_id, "W-1");

    let board = client.ranking(RankingBoard::Wealth, &query).await.unwrap();
    assert_eq!(board.items[0].rank_no, 1);

    assert_eq!(client.invite_code().await.unwrap().friend_code, "F00D");

    client.set_wallet_address(" T999 ").await.unwrap();
    assert!(client.set_wallet_address("  ").await.is_err());

    transactions.assert();
    withdraw.assert();
    wealth.assert();
    address.assert();
}

#[tokio::test]
async fn malformed_data_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server.mock(|when, then| {
        when.method(POST).path("/api/app/invite/stats");
        then.status(200)
            .json_body(ok(json!({ "todayInviteCount": "many" })));
    });

    let client = consumer_client(&server, Locale::En);
    let err = client.invite_stats().await.unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}
