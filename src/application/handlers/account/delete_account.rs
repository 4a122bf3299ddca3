//! DeleteAccount - Command handler for full account deletion.
//!
//! Deletion walks every collection in sequence. There is no rollback:
//! if a later step fails, earlier deletions stand and the error is
//! reported so the client can retry the remainder.

use std::sync::Arc;

use crate::domain::foundation::{DomainError, UserId};
use crate::ports::{
    ChatRepository, ConsentRepository, CoupleRepository, FeedbackRepository,
    NotificationRepository, ProfileRepository, SubscriptionRepository, ThoughtRepository,
    WellbeingRepository,
};

/// Command to delete an account and all of its data.
#[derive(Debug, Clone)]
pub struct DeleteAccountCommand {
    pub user_id: UserId,
}

/// Handler for account deletion.
pub struct DeleteAccountHandler {
    profiles: Arc<dyn ProfileRepository>,
    couples: Arc<dyn CoupleRepository>,
    feedback: Arc<dyn FeedbackRepository>,
    consents: Arc<dyn ConsentRepository>,
    notifications: Arc<dyn NotificationRepository>,
    thoughts: Arc<dyn ThoughtRepository>,
    chat: Arc<dyn ChatRepository>,
    wellbeing: Arc<dyn WellbeingRepository>,
    subscriptions: Arc<dyn SubscriptionRepository>,
}

impl DeleteAccountHandler {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        profiles: Arc<dyn ProfileRepository>,
        couples: Arc<dyn CoupleRepository>,
        feedback: Arc<dyn FeedbackRepository>,
        consents: Arc<dyn ConsentRepository>,
        notifications: Arc<dyn NotificationRepository>,
        thoughts: Arc<dyn ThoughtRepository>,
        chat: Arc<dyn ChatRepository>,
        wellbeing: Arc<dyn WellbeingRepository>,
        subscriptions: Arc<dyn SubscriptionRepository>,
    ) -> Self {
        Self {
            profiles,
            couples,
            feedback,
            consents,
            notifications,
            thoughts,
            chat,
            wellbeing,
            subscriptions,
        }
    }

    pub async fn handle(&self, cmd: DeleteAccountCommand) -> Result<(), DomainError> {
        let user_id = &cmd.user_id;

        // Unlink the partner first so their profile doesn't point at a
        // deleted account.
        if let Some(link) = self.couples.find_link_for_user(user_id).await? {
            if let Some(partner_id) = link.partner_of(user_id) {
                if let Some(mut partner) = self.profiles.find_by_user(partner_id).await? {
                    partner.unlink_partner();
                    self.profiles.update(&partner).await?;
                }
            }
            self.couples.delete_link(link.id()).await?;
        }

        self.feedback.delete_for_user(user_id).await?;
        self.consents.delete_for_user(user_id).await?;
        self.notifications.delete_for_user(user_id).await?;
        self.thoughts.delete_for_user(user_id).await?;
        self.chat.delete_for_user(user_id).await?;
        self.wellbeing.delete_for_user(user_id).await?;
        self.subscriptions.delete_for_user(user_id).await?;
        self.profiles.delete(user_id).await?;

        tracing::info!(user = %user_id, "account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::handlers::test_support::*;
    use crate::domain::couple::CoupleLink;
    use crate::domain::foundation::CoupleId;
    use crate::domain::user::UserProfile;
    use crate::ports::{CoupleRepository as _, ProfileRepository as _};

    struct Fixture {
        profiles: Arc<InMemoryProfiles>,
        couples: Arc<InMemoryCouples>,
        handler: DeleteAccountHandler,
    }

    fn fixture(profiles: InMemoryProfiles, couples: InMemoryCouples) -> Fixture {
        let profiles = Arc::new(profiles);
        let couples = Arc::new(couples);
        let handler = DeleteAccountHandler::new(
            profiles.clone(),
            couples.clone(),
            Arc::new(InMemoryFeedback::default()),
            Arc::new(InMemoryConsents::default()),
            Arc::new(InMemoryNotifications::default()),
            Arc::new(InMemoryThoughts::default()),
            Arc::new(InMemoryChat::default()),
            Arc::new(InMemoryWellbeing::default()),
            Arc::new(InMemorySubscriptions::default()),
        );
        Fixture {
            profiles,
            couples,
            handler,
        }
    }

    fn user(n: &str) -> UserId {
        UserId::new(n).unwrap()
    }

    #[tokio::test]
    async fn deletes_profile() {
        let profile = UserProfile::new(user("a"), "a@b.c", "A").unwrap();
        let f = fixture(InMemoryProfiles::with(profile), InMemoryCouples::default());

        f.handler
            .handle(DeleteAccountCommand { user_id: user("a") })
            .await
            .unwrap();

        assert!(f.profiles.find_by_user(&user("a")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unlinks_surviving_partner() {
        let mut a = UserProfile::new(user("a"), "a@b.c", "A").unwrap();
        let mut b = UserProfile::new(user("b"), "b@b.c", "B").unwrap();
        let link = CoupleLink::new(user("a"), user("b")).unwrap();
        a.link_partner(user("b"), link.id()).unwrap();
        b.link_partner(user("a"), link.id()).unwrap();

        let profiles = InMemoryProfiles::default();
        profiles.create(&a).await.unwrap();
        profiles.create(&b).await.unwrap();
        let f = fixture(profiles, InMemoryCouples::with_link(link));

        f.handler
            .handle(DeleteAccountCommand { user_id: user("a") })
            .await
            .unwrap();

        let partner = f.profiles.find_by_user(&user("b")).await.unwrap().unwrap();
        assert!(!partner.has_partner());
        assert!(f
            .couples
            .find_link_for_user(&user("b"))
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn missing_account_deletes_cleanly() {
        let f = fixture(InMemoryProfiles::default(), InMemoryCouples::default());
        assert!(f
            .handler
            .handle(DeleteAccountCommand {
                user_id: user("ghost")
            })
            .await
            .is_ok());
    }
}
