//! RecordCheckin - Command handler for relationship check-ins.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::domain::wellbeing::{CheckinRecord, Mood};
use crate::ports::WellbeingRepository;

/// Command to record a check-in.
#[derive(Debug, Clone)]
pub struct RecordCheckinCommand {
    pub user_id: UserId,
    pub mood: Mood,
    pub connection: u8,
    pub note: Option<String>,
}

/// Handler for recording check-ins.
pub struct RecordCheckinHandler {
    wellbeing: Arc<dyn WellbeingRepository>,
}

impl RecordCheckinHandler {
    pub fn new(wellbeing: Arc<dyn WellbeingRepository>) -> Self {
        Self { wellbeing }
    }

    pub async fn handle(&self, cmd: RecordCheckinCommand) -> Result<CheckinRecord, DomainError> {
        let record = CheckinRecord::new(cmd.user_id, cmd.mood, cmd.connection, cmd.note)?;
        self.wellbeing.append(&record).await?;
        Ok(record)
    }
}
