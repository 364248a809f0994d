use super::{
    app_types::{Challenge, ChallengePageRequest, ChallengeRef, ChallengeWithPayPassword, Participant},
    client::ApiClient,
    types::{ApiError, PageQuery, PagedCollection},
};
use crate::validation::rules;

impl ApiClient {
    pub async fn list_challenges(&self) -> Result<Vec<Challenge>, ApiError> {
        self.request_empty("/app/challenge/list").await
    }

    pub async fn challenge_detail(&self, challenge_id: i64) -> Result<Challenge, ApiError> {
        self.request("/app/challenge/detail", &ChallengeRef { challenge_id })
            .await
    }

    pub async fn join_challenge(&self, challenge_id: i64, pay_password: &str) -> Result<(), ApiError> {
        rules::validate_pay_password(pay_password)?;
        let body = ChallengeWithPayPassword {
            challenge_id,
            pay_password: pay_password.to_string(),
        };
        self.execute("/app/challenge/join", &body).await.map(|_| ())
    }

    pub async fn my_challenges(&self) -> Result<Vec<Challenge>, ApiError> {
        self.request_empty("/app/challenge/my-challenges").await
    }

    pub async fn quit_challenge(&self, challenge_id: i64, pay_password: &str) -> Result<(), ApiError> {
        rules::validate_pay_password(pay_password)?;
        let body = ChallengeWithPayPassword {
            challenge_id,
            pay_password: pay_password.to_string(),
        };
        self.execute("/app/challenge/quit", &body).await.map(|_| ())
    }

    pub async fn challenge_participants(
        &self,
        challenge_id: i64,
        query: PageQuery,
    ) -> Result<PagedCollection<Participant>, ApiError> {
        let body = ChallengePageRequest {
            challenge_id,
            query,
        };
        self.request("/app/challenge/participants", &body).await
    }
}
