use super::{
    app_types::{
        CalendarDay, CalendarRequest, ChallengePageRequest, ChallengeRef, CheckInRecord,
        CheckInResult, SupplementRequest, TodayStats,
    },
    client::ApiClient,
    types::{ApiError, PageQuery, PagedCollection},
};

impl ApiClient {
    pub async fn check_in(&self, challenge_id: i64) -> Result<CheckInResult, ApiError> {
        self.request("/app/checkin/check-in", &ChallengeRef { challenge_id })
            .await
    }

    pub async fn checkin_today_stats(&self, challenge_id: i64) -> Result<TodayStats, ApiError> {
        self.request("/app/checkin/today-stats", &ChallengeRef { challenge_id })
            .await
    }

    pub async fn checkin_today_list(
        &self,
        challenge_id: i64,
        query: PageQuery,
    ) -> Result<PagedCollection<CheckInRecord>, ApiError> {
        let body = ChallengePageRequest {
            challenge_id,
            query,
        };
        self.request("/app/checkin/today-list", &body).await
    }

    pub async fn checkin_calendar(
        &self,
        challenge_id: i64,
        year: i32,
        month: u32,
    ) -> Result<Vec<CalendarDay>, ApiError> {
        if !(1..=12).contains(&month) {
            return Err(ApiError::validation("Month must be between 1 and 12"));
        }
        let body = CalendarRequest {
            challenge_id,
            year,
            month,
        };
        self.request("/app/checkin/calendar", &body).await
    }

    pub async fn checkin_history(
        &self,
        challenge_id: i64,
        query: PageQuery,
    ) -> Result<PagedCollection<CheckInRecord>, ApiError> {
        let body = ChallengePageRequest {
            challenge_id,
            query,
        };
        self.request("/app/checkin/history", &body).await
    }

    pub async fn supplement_checkin(&self, challenge_id: i64, date: &str) -> Result<(), ApiError> {
        let body = SupplementRequest {
            challenge_id,
            date: date.to_string(),
        };
        self.execute("/app/checkin/supplement", &body)
            .await
            .map(|_| ())
    }
}
