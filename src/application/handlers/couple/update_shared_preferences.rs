//! UpdateSharedPreferences - Command handler for couple-level settings.

use std::sync::Arc;

use crate::domain::couple::CoupleLink;
use crate::domain::foundation::{DomainError, ErrorCode, UserId};
use crate::domain::suggestion::Intensity;
use crate::ports::CoupleRepository;

/// Command to change the shared couple preferences.
///
/// `share_access` toggles whether the calling user shares their own
/// subscription access with their partner.
#[derive(Debug, Clone)]
pub struct UpdateSharedPreferencesCommand {
    pub user_id: UserId,
    pub default_intensity: Option<Intensity>,
    pub share_access: Option<bool>,
}

/// Handler for shared preference updates.
pub struct UpdateSharedPreferencesHandler {
    couples: Arc<dyn CoupleRepository>,
}

impl UpdateSharedPreferencesHandler {
    pub fn new(couples: Arc<dyn CoupleRepository>) -> Self {
        Self { couples }
    }

    pub async fn handle(
        &self,
        cmd: UpdateSharedPreferencesCommand,
    ) -> Result<CoupleLink, DomainError> {
        let mut link = self
            .couples
            .find_link_for_user(&cmd.user_id)
            .await?
            .ok_or_else(|| DomainError::new(ErrorCode::CoupleNotFound, "Couple not found"))?;

        if let Some(intensity) = cmd.default_intensity {
            link.set_default_intensity(intensity);
        }
        if let Some(shares) = cmd.share_access {
            link.set_access_sharing(&cmd.user_id, shares)?;
        }

        self.couples.update_link(&link).await?;
        Ok(link)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::InMemoryCouples;

    fn user(n: &str) -> UserId {
        UserId::new(n).unwrap()
    }

    #[tokio::test]
    async fn updates_intensity_and_sharing() {
        let link = CoupleLink::new(user("a"), user("b")).unwrap();
        let handler =
            UpdateSharedPreferencesHandler::new(Arc::new(InMemoryCouples::with_link(link)));

        let updated = handler
            .handle(UpdateSharedPreferencesCommand {
                user_id: user("a"),
                default_intensity: Some(Intensity::Spicy),
                share_access: Some(true),
            })
            .await
            .unwrap();

        assert_eq!(updated.shared().default_intensity, Intensity::Spicy);
        assert!(updated.partner_shares_access_with(&user("b")));
    }

    #[tokio::test]
    async fn unlinked_user_gets_not_found() {
        let handler =
            UpdateSharedPreferencesHandler::new(Arc::new(InMemoryCouples::default()));
        let err = handler
            .handle(UpdateSharedPreferencesCommand {
                user_id: user("solo"),
                default_intensity: None,
                share_access: None,
            })
            .await
            .unwrap_err();
        assert_eq!(err.code(), ErrorCode::CoupleNotFound);
    }
}
