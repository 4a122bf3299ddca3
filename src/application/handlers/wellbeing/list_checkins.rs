//! ListCheckins - Query handler for check-in history.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wellbeing::CheckinRecord;
use crate::ports::WellbeingRepository;

/// Default page size for the history.
const DEFAULT_LIMIT: usize = 30;

/// Query for a user's check-in history.
#[derive(Debug, Clone)]
pub struct ListCheckinsQuery {
    pub user_id: UserId,
    pub limit: Option<usize>,
}

/// Handler for listing check-ins.
pub struct ListCheckinsHandler {
    wellbeing: Arc<dyn WellbeingRepository>,
}

impl ListCheckinsHandler {
    pub fn new(wellbeing: Arc<dyn WellbeingRepository>) -> Self {
        Self { wellbeing }
    }

    pub async fn handle(&self, query: ListCheckinsQuery) -> Result<Vec<CheckinRecord>, DomainError> {
        self.wellbeing
            .history_for_user(&query.user_id, query.limit.unwrap_or(DEFAULT_LIMIT))
            .await
    }
}
