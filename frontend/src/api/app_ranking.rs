use super::{
    app_types::RankingEntry,
    client::ApiClient,
    types::{ApiError, PageQuery, PagedCollection},
};

/// Boards served under `/app/ranking/<board>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingBoard {
    Invite,
    Wealth,
    Persistence,
}

impl RankingBoard {
    fn path(self) -> &'static str {
        match self {
            RankingBoard::Invite => "/app/ranking/invite",
            RankingBoard::Wealth => "/app/ranking/wealth",
            RankingBoard::Persistence => "/app/ranking/persistence",
        }
    }
}

impl ApiClient {
    pub async fn ranking(
        &self,
        board: RankingBoard,
        query: &PageQuery,
    ) -> Result<PagedCollection<RankingEntry>, ApiError> {
        self.request(board.path(), query).await
    }

    pub async fn invite_ranking(
        &self,
        query: &PageQuery,
    ) -> Result<PagedCollection<RankingEntry>, ApiError> {
        self.ranking(RankingBoard::Invite, query).await
    }

    pub async fn wealth_ranking(
        &self,
        query: &PageQuery,
    ) -> Result<PagedCollection<RankingEntry>, ApiError> {
        self.ranking(RankingBoard::Wealth, query).await
    }

    pub async fn persistence_ranking(
        &self,
        query: &PageQuery,
    ) -> Result<PagedCollection<RankingEntry>, ApiError> {
        self.ranking(RankingBoard::Persistence, query).await
    }
}
