#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod fixtures {
    use crate::api::{AdminUserInfo, AppUserInfo, Challenge};
    use crate::permissions::roles;

    pub fn admin_user(id: i64) -> AdminUserInfo {
        AdminUserInfo {
            id,
            username: format!("admin{}", id),
            nick_name: "Admin".into(),
            role: roles::SUPER_ADMIN,
            status: 1,
        }
    }

    pub fn admin_with_role(role: i32) -> AdminUserInfo {
        AdminUserInfo {
            role,
            ..admin_user(i64::from(role))
        }
    }

    pub fn app_user(id: i64) -> AppUserInfo {
        AppUserInfo {
            id,
            username: format!("member{}", id),
            nickname: "Member".into(),
            avatar: String::new(),
            ref_code: "ABC123".into(),
            status: "active".into(),
        }
    }

    pub fn challenge(id: i64) -> Challenge {
        Challenge {
            challenge_id: id,
            name: format!("Early riser #{}", id),
            duration: 21,
            start_time: "2025-01-01".into(),
            end_time: "2025-01-21".into(),
            check_in_start_time: "06:00".into(),
            check_in_end_time: "08:00".into(),
            entry_fee: "10.00".into(),
            prize_pool: "1000.00".into(),
            participant_count: 100,
            status: "ongoing".into(),
            rules: String::new(),
        }
    }

    /// Minimal record for exercising the generic list/edit screens.
    #[derive(Debug, Clone, PartialEq)]
    pub struct Row {
        pub id: i64,
        pub label: String,
    }

    impl Row {
        pub fn new(id: i64) -> Self {
            Self {
                id,
                label: format!("row {}", id),
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub use self::http::*;

    #[cfg(not(target_arch = "wasm32"))]
    mod http {
        use crate::{
            api::{ApiClient, ClientOptions},
            locale::Locale,
            utils::storage::{KeyValueStorage, MemoryStorage, TOKEN_KEY},
        };
        use httpmock::MockServer;
        use serde_json::{json, Value};
        use std::rc::Rc;

        /// Admin client pointed at `server` with a stored token.
        pub fn admin_api_client(server: &MockServer) -> ApiClient {
            let storage = Rc::new(MemoryStorage::new());
            let _ = storage.set_item(TOKEN_KEY, "test-token");
            ApiClient::new_with_base_url(ClientOptions::admin(), server.url("/api"))
                .with_storage(storage)
                .with_locale(Locale::En)
        }

        pub fn challenge_config_json(id: i64) -> Value {
            json!({
                "id": id,
                "isAutoSettle": true,
                "settleTime": "23:00",
                "cycleDays": 21,
                "startTime": "06:00",
                "endTime": "08:00",
                "maxDepositAmount": 1000.0,
                "minWithdrawAmount": 10.0,
                "maxDailyProfit": 50.0,
                "excessTaxRate": 0.2,
                "minDailyProfit": 1.0,
                "dailyPlatformSubsidy": 0.5,
                "uncheckDeductRate": 0.1,
                "minUncheckUsers": 3,
                "commissionFollow": 0.01,
                "commissionJoin": 0.02,
                "commissionL1": 0.05,
                "commissionL2": 0.03,
                "commissionL3": 0.01,
                "updatedAt": "2025-01-01 00:00:00"
            })
        }

        pub fn config_json(id: i64, key: &str) -> Value {
            json!({
                "id": id,
                "configName": "Site name",
                "configKey": key,
                "configValue": "Habit",
                "configType": "string",
                "isFrontend": "Y",
                "remark": ""
            })
        }

        const SERVER_OWNED: [&str; 6] = [
            "createBy",
            "updateBy",
            "createdAt",
            "updatedAt",
            "avatar",
            "lastLoginAt",
        ];

        /// Update body expected when a fetched `record` is saved untouched:
        /// server-owned and null fields dropped, `id` kept.
        pub fn resubmitted(record: &Value) -> Value {
            let mut body = record.clone();
            if let Some(fields) = body.as_object_mut() {
                fields.retain(|key, value| {
                    !value.is_null() && !SERVER_OWNED.contains(&key.as_str())
                });
            }
            body
        }

        pub fn managed_user_json(id: i64, username: &str) -> Value {
            json!({
                "id": id,
                "username": username,
                "email": "ops@example.com",
                "phone": null,
                "status": 1,
                "role": 2,
                "createdAt": "2025-01-01 00:00:00"
            })
        }
    }
}

#[cfg(test)]
pub mod helpers {
    use super::fixtures::Row;
    use crate::{
        api::{ApiError, PageQuery, PagedCollection},
        pages::crud::CrudRepository,
        utils::navigation::Navigator,
    };
    use async_trait::async_trait;
    use futures::channel::oneshot;
    use std::{
        cell::{Cell, RefCell},
        collections::HashMap,
        rc::Rc,
    };

    pub fn with_runtime<T>(f: impl FnOnce() -> T) -> T {
        let runtime = leptos::create_runtime();
        let result = f();
        runtime.dispose();
        result
    }

    /// Records every navigation instead of leaving the page.
    #[derive(Debug, Clone, Default)]
    pub struct RecordingNavigator {
        visited: Rc<RefCell<Vec<String>>>,
    }

    impl RecordingNavigator {
        pub fn visited(&self) -> Vec<String> {
            self.visited.borrow().clone()
        }
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&self, path: &str) {
            self.visited.borrow_mut().push(path.to_string());
        }
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct RowFilter {
        pub even_only: bool,
    }

    #[derive(Debug, Clone, Default, PartialEq)]
    pub struct RowDraft {
        pub label: String,
    }

    /// In-memory server for the generic list/edit screens. Records each
    /// call, can fail the next one, and can hold a page until released.
    #[derive(Default)]
    pub struct FakeRepository {
        rows: RefCell<Vec<Row>>,
        calls: RefCell<Vec<String>>,
        fail_next: RefCell<Option<ApiError>>,
        gates: RefCell<HashMap<u32, oneshot::Receiver<()>>>,
        ignore_page_size: Cell<bool>,
    }

    impl FakeRepository {
        pub fn with_rows(count: usize) -> Self {
            let repo = Self::default();
            *repo.rows.borrow_mut() = (1..=count as i64).map(Row::new).collect();
            repo
        }

        /// Answer every list call with all rows, whatever the page size.
        pub fn ignore_page_size(&self) {
            self.ignore_page_size.set(true);
        }

        pub fn fail_next(&self, error: ApiError) {
            *self.fail_next.borrow_mut() = Some(error);
        }

        pub fn gate_page(&self, page: u32, gate: oneshot::Receiver<()>) {
            self.gates.borrow_mut().insert(page, gate);
        }

        pub fn calls(&self) -> Vec<String> {
            self.calls.borrow().clone()
        }

        fn record(&self, call: String) -> Result<(), ApiError> {
            self.calls.borrow_mut().push(call);
            match self.fail_next.borrow_mut().take() {
                Some(error) => Err(error),
                None => Ok(()),
            }
        }
    }

    #[async_trait(?Send)]
    impl CrudRepository for FakeRepository {
        type Item = Row;
        type Filter = RowFilter;
        type Draft = RowDraft;

        const LIST_PATH: &'static str = "/rows";

        fn item_id(item: &Row) -> i64 {
            item.id
        }

        fn draft_from(item: &Row) -> RowDraft {
            RowDraft {
                label: item.label.clone(),
            }
        }

        fn validate(&self, draft: &RowDraft) -> Result<(), ApiError> {
            if draft.label.trim().is_empty() {
                return Err(ApiError::validation("Label is required"));
            }
            Ok(())
        }

        async fn list(
            &self,
            query: &PageQuery,
            filter: &RowFilter,
        ) -> Result<PagedCollection<Row>, ApiError> {
            self.record(format!("list {}", query.page))?;
            let gate = self.gates.borrow_mut().remove(&query.page);
            if let Some(gate) = gate {
                let _ = gate.await;
            }

            let matching: Vec<Row> = self
                .rows
                .borrow()
                .iter()
                .filter(|row| !filter.even_only || row.id % 2 == 0)
                .cloned()
                .collect();
            let total = matching.len() as u64;
            let items = if self.ignore_page_size.get() {
                matching
            } else {
                let size = query.page_size as usize;
                matching
                    .into_iter()
                    .skip((query.page as usize - 1) * size)
                    .take(size)
                    .collect()
            };
            Ok(PagedCollection {
                items,
                total,
                page: query.page,
                page_size: query.page_size,
            })
        }

        async fn get(&self, id: i64) -> Result<Row, ApiError> {
            self.record(format!("get {}", id))?;
            self.rows
                .borrow()
                .iter()
                .find(|row| row.id == id)
                .cloned()
                .ok_or_else(|| ApiError::application(404, "Record not found"))
        }

        async fn create(&self, draft: &RowDraft) -> Result<(), ApiError> {
            self.record(format!("create {}", draft.label))?;
            let mut rows = self.rows.borrow_mut();
            let id = rows.iter().map(|row| row.id).max().unwrap_or(0) + 1;
            rows.push(Row {
                id,
                label: draft.label.clone(),
            });
            Ok(())
        }

        async fn update(&self, id: i64, draft: &RowDraft) -> Result<(), ApiError> {
            self.record(format!("update {} {}", id, draft.label))?;
            if let Some(row) = self.rows.borrow_mut().iter_mut().find(|row| row.id == id) {
                row.label = draft.label.clone();
            }
            Ok(())
        }

        async fn delete(&self, id: i64) -> Result<(), ApiError> {
            self.record(format!("delete {}", id))?;
            self.rows.borrow_mut().retain(|row| row.id != id);
            Ok(())
        }
    }
}
