//! GetCouple - Query handler for the current couple link.

use std::sync::Arc;

use crate::domain::couple::CoupleLink;
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::CoupleRepository;

/// Query for a user's couple link.
#[derive(Debug, Clone)]
pub struct GetCoupleQuery {
    pub user_id: UserId,
}

/// Handler for reading the couple link.
pub struct GetCoupleHandler {
    couples: Arc<dyn CoupleRepository>,
}

impl GetCoupleHandler {
    pub fn new(couples: Arc<dyn CoupleRepository>) -> Self {
        Self { couples }
    }

    pub async fn handle(&self, query: GetCoupleQuery) -> Result<Option<CoupleLink>, DomainError> {
        self.couples.find_link_for_user(&query.user_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemoryCouples;

    #[tokio::test]
    async fn unlinked_user_has_no_couple() {
        let handler = GetCoupleHandler::new(Arc::new(InMemoryCouples::default()));
        let result = handler
            .handle(GetCoupleQuery {
                user_id: UserId::new("solo").unwrap(),
            })
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn both_partners_resolve_the_same_link() {
        let link = CoupleLink::new(
            UserId::new("a").unwrap(),
            UserId::new("b").unwrap(),
        )
        .unwrap();
        let id = link.id();
        let handler = GetCoupleHandler::new(Arc::new(InMemoryCouples::with_link(link)));

        for name in ["a", "b"] {
            let found = handler
                .handle(GetCoupleQuery {
                    user_id: UserId::new(name).unwrap(),
                })
                .await
                .unwrap()
                .unwrap();
            assert_eq!(found.id(), id);
        }
    }
}
