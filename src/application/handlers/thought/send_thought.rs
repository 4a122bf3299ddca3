//! SendThought - Command handler for sending a partner a thought bubble.

use std::sync::Arc;

use crate::domain::couple::ThoughtBubble;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::notification::NotificationPreferences;
use crate::ports::{CoupleRepository, NotificationRepository, PushSender, ThoughtRepository};

/// Command to send a thought bubble to the linked partner.
#[derive(Debug, Clone)]
pub struct SendThoughtCommand {
    pub user_id: UserId,
    pub body: String,
}

/// Handler for sending thoughts.
///
/// After storing the thought, a best-effort push goes out to the
/// partner's devices when their partner-activity toggle is on. Push
/// failures are logged, never surfaced.
pub struct SendThoughtHandler {
    couples: Arc<dyn CoupleRepository>,
    thoughts: Arc<dyn ThoughtRepository>,
    notifications: Arc<dyn NotificationRepository>,
    push: Arc<dyn PushSender>,
}

impl SendThoughtHandler {
    pub fn new(
        couples: Arc<dyn CoupleRepository>,
        thoughts: Arc<dyn ThoughtRepository>,
        notifications: Arc<dyn NotificationRepository>,
        push: Arc<dyn PushSender>,
    ) -> Self {
        Self {
            couples,
            thoughts,
            notifications,
            push,
        }
    }

    pub async fn handle(&self, cmd: SendThoughtCommand) -> Result<ThoughtBubble, DomainError> {
        let link = self
            .couples
            .find_link_for_user(&cmd.user_id)
            .await?
            .ok_or_else(|| {
                DomainError::new(ErrorCode::CoupleNotFound, "No partner to send to")
            })?;
        let partner = link
            .partner_of(&cmd.user_id)
            .ok_or_else(|| DomainError::new(ErrorCode::Forbidden, "Not part of this couple"))?
            .clone();

        let thought = ThoughtBubble::new(cmd.user_id, partner.clone(), cmd.body)?;
        self.thoughts.append(&thought).await?;

        self.notify_partner(&partner).await;
        Ok(thought)
    }

    async fn notify_partner(&self, partner: &UserId) {
        let prefs = match self.notifications.get_preferences(partner).await {
            Ok(prefs) => prefs.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "could not load partner notification prefs");
                NotificationPreferences::default()
            }
        };
        if !prefs.partner_activity {
            return;
        }

        let devices = match self.notifications.devices_for_user(partner).await {
            Ok(devices) => devices,
            Err(e) => {
                tracing::warn!(error = %e, "could not load partner devices");
                return;
            }
        };
        for device in devices {
            if let Err(e) = self
                .push
                .send(&device.token, "A thought from your partner", "Tap to read it.")
                .await
            {
                tracing::warn!(error = %e, "push delivery failed");
            }
        }
    }
}
