//! RecordConsent - Command handler for consent decisions.

use std::sync::Arc;

use crate::domain::consent::{ConsentKind, ConsentRecord};
use crate::domain::foundation::{DomainError, UserId};
use crate::ports::ConsentRepository;

/// Command to record one consent decision.
#[derive(Debug, Clone)]
pub struct RecordConsentCommand {
    pub user_id: UserId,
    pub kind: ConsentKind,
    pub granted: bool,
}

/// Handler for recording consents.
pub struct RecordConsentHandler {
    consents: Arc<dyn ConsentRepository>,
}

impl RecordConsentHandler {
    pub fn new(consents: Arc<dyn ConsentRepository>) -> Self {
        Self { consents }
    }

    pub async fn handle(&self, cmd: RecordConsentCommand) -> Result<ConsentRecord, DomainError> {
        let record = ConsentRecord::new(cmd.user_id, cmd.kind, cmd.granted);
        self.consents.append(&record).await?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemoryConsents;
    use crate::ports::ConsentRepository as _;

    #[tokio::test]
    async fn appends_consent_decision() {
        let consents = Arc::new(InMemoryConsents::default());
        let handler = RecordConsentHandler::new(consents.clone());
        let user_id = UserId::new("u1").unwrap();

        handler
            .handle(RecordConsentCommand {
                user_id: user_id.clone(),
                kind: ConsentKind::Terms,
                granted: true,
            })
            .await
            .unwrap();

        let history = consents.history_for_user(&user_id).await.unwrap();
        assert_eq!(history.len(), 1);
        assert!(history[0].granted);
    }
}
