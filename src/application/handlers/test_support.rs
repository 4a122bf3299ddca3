//! In-memory port implementations shared by handler unit tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::domain::blueprint::Blueprint;
use crate::domain::chat::ChatMessage;
use crate::domain::compatibility::CompatibilityAnalysis;
use crate::domain::consent::ConsentRecord;
use crate::domain::couple::{CoupleLink, PartnerInvite, ThoughtBubble};
use crate::domain::feedback::FeedbackRecord;
use crate::domain::foundation::{CoupleId, DomainError, ThoughtId, Timestamp, UserId};
use crate::domain::notification::{DeviceToken, NotificationPreferences};
use crate::domain::subscription::SubscriptionRecord;
use crate::domain::suggestion::{ActivityCategory, Intensity, SuggestionBatch};
use crate::domain::user::UserProfile;
use crate::domain::wellbeing::CheckinRecord;
use crate::ports::{
    AnalysisCache, ChatRepository, ConsentRepository, CoupleRepository, FeedbackRepository,
    NotificationRepository, ProfileRepository, SubscriptionRepository, SuggestionCache,
    ThoughtRepository, UsageEvent, UsageTracker, WellbeingRepository,
};

#[derive(Default)]
pub struct InMemoryProfiles {
    profiles: Mutex<Vec<UserProfile>>,
}

impl InMemoryProfiles {
    pub fn with(profile: UserProfile) -> Self {
        let store = Self::default();
        store.profiles.lock().unwrap().push(profile);
        store
    }
}

#[async_trait]
impl ProfileRepository for InMemoryProfiles {
    async fn create(&self, profile: &UserProfile) -> Result<(), DomainError> {
        self.profiles.lock().unwrap().push(profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &UserProfile) -> Result<(), DomainError> {
        let mut profiles = self.profiles.lock().unwrap();
        match profiles
            .iter_mut()
            .find(|p| p.user_id() == profile.user_id())
        {
            Some(slot) => {
                *slot = profile.clone();
                Ok(())
            }
            None => Err(DomainError::not_found("Profile")),
        }
    }

    async fn find_by_user(&self, user_id: &UserId) -> Result<Option<UserProfile>, DomainError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.user_id() == user_id)
            .cloned())
    }

    async fn delete(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.profiles
            .lock()
            .unwrap()
            .retain(|p| p.user_id() != user_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryCouples {
    invites: Mutex<Vec<PartnerInvite>>,
    links: Mutex<Vec<CoupleLink>>,
}

impl InMemoryCouples {
    pub fn with_link(link: CoupleLink) -> Self {
        let store = Self::default();
        store.links.lock().unwrap().push(link);
        store
    }

    pub fn with_invite(invite: PartnerInvite) -> Self {
        let store = Self::default();
        store.invites.lock().unwrap().push(invite);
        store
    }
}

#[async_trait]
impl CoupleRepository for InMemoryCouples {
    async fn create_invite(&self, invite: &PartnerInvite) -> Result<(), DomainError> {
        self.invites.lock().unwrap().push(invite.clone());
        Ok(())
    }

    async fn find_invite_by_code(
        &self,
        code: &str,
    ) -> Result<Option<PartnerInvite>, DomainError> {
        Ok(self
            .invites
            .lock()
            .unwrap()
            .iter()
            .find(|i| i.code() == code)
            .cloned())
    }

    async fn update_invite(&self, invite: &PartnerInvite) -> Result<(), DomainError> {
        let mut invites = self.invites.lock().unwrap();
        match invites.iter_mut().find(|i| i.id() == invite.id()) {
            Some(slot) => {
                *slot = invite.clone();
                Ok(())
            }
            None => Err(DomainError::not_found("Invite")),
        }
    }

    async fn create_link(&self, link: &CoupleLink) -> Result<(), DomainError> {
        self.links.lock().unwrap().push(link.clone());
        Ok(())
    }

    async fn find_link_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<CoupleLink>, DomainError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.includes(user_id))
            .cloned())
    }

    async fn update_link(&self, link: &CoupleLink) -> Result<(), DomainError> {
        let mut links = self.links.lock().unwrap();
        match links.iter_mut().find(|l| l.id() == link.id()) {
            Some(slot) => {
                *slot = link.clone();
                Ok(())
            }
            None => Err(DomainError::not_found("Couple")),
        }
    }

    async fn delete_link(&self, couple_id: CoupleId) -> Result<(), DomainError> {
        self.links.lock().unwrap().retain(|l| l.id() != couple_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryFeedback {
    records: Mutex<Vec<FeedbackRecord>>,
}

#[async_trait]
impl FeedbackRepository for InMemoryFeedback {
    async fn append(&self, record: &FeedbackRecord) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn history_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<FeedbackRecord>, DomainError> {
        let mut records: Vec<_> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id() == user_id)
            .cloned()
            .collect();
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.records
            .lock()
            .unwrap()
            .retain(|r| r.user_id() != user_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryConsents {
    records: Mutex<Vec<ConsentRecord>>,
}

#[async_trait]
impl ConsentRepository for InMemoryConsents {
    async fn append(&self, record: &ConsentRecord) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn history_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<ConsentRecord>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| &r.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.records
            .lock()
            .unwrap()
            .retain(|r| &r.user_id != user_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryNotifications {
    preferences: Mutex<HashMap<String, NotificationPreferences>>,
    devices: Mutex<Vec<DeviceToken>>,
}

#[async_trait]
impl NotificationRepository for InMemoryNotifications {
    async fn get_preferences(
        &self,
        user_id: &UserId,
    ) -> Result<Option<NotificationPreferences>, DomainError> {
        Ok(self
            .preferences
            .lock()
            .unwrap()
            .get(user_id.as_str())
            .copied())
    }

    async fn put_preferences(
        &self,
        user_id: &UserId,
        preferences: &NotificationPreferences,
    ) -> Result<(), DomainError> {
        self.preferences
            .lock()
            .unwrap()
            .insert(user_id.as_str().to_string(), *preferences);
        Ok(())
    }

    async fn register_device(&self, token: &DeviceToken) -> Result<(), DomainError> {
        let mut devices = self.devices.lock().unwrap();
        devices.retain(|d| d.token != token.token);
        devices.push(token.clone());
        Ok(())
    }

    async fn devices_for_user(&self, user_id: &UserId) -> Result<Vec<DeviceToken>, DomainError> {
        Ok(self
            .devices
            .lock()
            .unwrap()
            .iter()
            .filter(|d| &d.user_id == user_id)
            .cloned()
            .collect())
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.preferences.lock().unwrap().remove(user_id.as_str());
        self.devices
            .lock()
            .unwrap()
            .retain(|d| &d.user_id != user_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemorySubscriptions {
    records: Mutex<Vec<SubscriptionRecord>>,
    processed: Mutex<Vec<String>>,
}

impl InMemorySubscriptions {
    pub fn with(record: SubscriptionRecord) -> Self {
        let store = Self::default();
        store.records.lock().unwrap().push(record);
        store
    }
}

#[async_trait]
impl SubscriptionRepository for InMemorySubscriptions {
    async fn upsert(&self, record: &SubscriptionRecord) -> Result<(), DomainError> {
        let mut records = self.records.lock().unwrap();
        records.retain(|r| r.user_id() != record.user_id());
        records.push(record.clone());
        Ok(())
    }

    async fn find_by_user(
        &self,
        user_id: &UserId,
    ) -> Result<Option<SubscriptionRecord>, DomainError> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user_id() == user_id)
            .cloned())
    }

    async fn has_processed_event(&self, event_id: &str) -> Result<bool, DomainError> {
        Ok(self
            .processed
            .lock()
            .unwrap()
            .iter()
            .any(|id| id == event_id))
    }

    async fn mark_event_processed(&self, event_id: &str) -> Result<(), DomainError> {
        self.processed.lock().unwrap().push(event_id.to_string());
        Ok(())
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.records
            .lock()
            .unwrap()
            .retain(|r| r.user_id() != user_id);
        Ok(())
    }
}

type SuggestionKey = (ActivityCategory, Intensity, Blueprint, Blueprint);

#[derive(Default)]
pub struct InMemorySuggestionCache {
    entries: Mutex<HashMap<SuggestionKey, SuggestionBatch>>,
}

#[async_trait]
impl SuggestionCache for InMemorySuggestionCache {
    async fn get_fresh(
        &self,
        category: ActivityCategory,
        intensity: Intensity,
        user_blueprint: Blueprint,
        partner_blueprint: Blueprint,
        _now: Timestamp,
    ) -> Result<Option<SuggestionBatch>, DomainError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&(category, intensity, user_blueprint, partner_blueprint))
            .cloned())
    }

    async fn put(&self, batch: &SuggestionBatch, _now: Timestamp) -> Result<(), DomainError> {
        self.entries.lock().unwrap().insert(
            (
                batch.category,
                batch.intensity,
                batch.user_blueprint,
                batch.partner_blueprint,
            ),
            batch.clone(),
        );
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryAnalysisCache {
    entries: Mutex<HashMap<(Blueprint, Blueprint), CompatibilityAnalysis>>,
}

#[async_trait]
impl AnalysisCache for InMemoryAnalysisCache {
    async fn get_fresh(
        &self,
        user_blueprint: Blueprint,
        partner_blueprint: Blueprint,
        _now: Timestamp,
    ) -> Result<Option<CompatibilityAnalysis>, DomainError> {
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(&(user_blueprint, partner_blueprint))
            .cloned())
    }

    async fn put(
        &self,
        analysis: &CompatibilityAnalysis,
        _now: Timestamp,
    ) -> Result<(), DomainError> {
        self.entries.lock().unwrap().insert(
            (analysis.user_blueprint, analysis.partner_blueprint),
            analysis.clone(),
        );
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryThoughts {
    thoughts: Mutex<Vec<ThoughtBubble>>,
}

#[async_trait]
impl ThoughtRepository for InMemoryThoughts {
    async fn append(&self, thought: &ThoughtBubble) -> Result<(), DomainError> {
        self.thoughts.lock().unwrap().push(thought.clone());
        Ok(())
    }

    async fn find(&self, id: ThoughtId) -> Result<Option<ThoughtBubble>, DomainError> {
        Ok(self
            .thoughts
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn update(&self, thought: &ThoughtBubble) -> Result<(), DomainError> {
        let mut thoughts = self.thoughts.lock().unwrap();
        match thoughts.iter_mut().find(|t| t.id() == thought.id()) {
            Some(slot) => {
                *slot = thought.clone();
                Ok(())
            }
            None => Err(DomainError::not_found("Thought")),
        }
    }

    async fn received_by(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<ThoughtBubble>, DomainError> {
        let mut thoughts: Vec<_> = self
            .thoughts
            .lock()
            .unwrap()
            .iter()
            .filter(|t| t.to() == user_id)
            .cloned()
            .collect();
        thoughts.reverse();
        thoughts.truncate(limit);
        Ok(thoughts)
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.thoughts
            .lock()
            .unwrap()
            .retain(|t| t.from() != user_id && t.to() != user_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryChat {
    messages: Mutex<Vec<ChatMessage>>,
}

#[async_trait]
impl ChatRepository for InMemoryChat {
    async fn append(&self, message: &ChatMessage) -> Result<(), DomainError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn recent_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<ChatMessage>, DomainError> {
        let messages: Vec<_> = self
            .messages
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.user_id() == user_id)
            .cloned()
            .collect();
        let skip = messages.len().saturating_sub(limit);
        Ok(messages.into_iter().skip(skip).collect())
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.messages
            .lock()
            .unwrap()
            .retain(|m| m.user_id() != user_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryWellbeing {
    records: Mutex<Vec<CheckinRecord>>,
}

#[async_trait]
impl WellbeingRepository for InMemoryWellbeing {
    async fn append(&self, record: &CheckinRecord) -> Result<(), DomainError> {
        self.records.lock().unwrap().push(record.clone());
        Ok(())
    }

    async fn history_for_user(
        &self,
        user_id: &UserId,
        limit: usize,
    ) -> Result<Vec<CheckinRecord>, DomainError> {
        let mut records: Vec<_> = self
            .records
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.user_id() == user_id)
            .cloned()
            .collect();
        records.reverse();
        records.truncate(limit);
        Ok(records)
    }

    async fn delete_for_user(&self, user_id: &UserId) -> Result<(), DomainError> {
        self.records
            .lock()
            .unwrap()
            .retain(|r| r.user_id() != user_id);
        Ok(())
    }
}

#[derive(Default)]
pub struct InMemoryUsage {
    events: Mutex<Vec<UsageEvent>>,
}

impl InMemoryUsage {
    pub fn event_count(&self) -> usize {
        self.events.lock().unwrap().len()
    }
}

#[async_trait]
impl UsageTracker for InMemoryUsage {
    async fn record(&self, event: UsageEvent) -> Result<(), DomainError> {
        self.events.lock().unwrap().push(event);
        Ok(())
    }

    async fn total_tokens_for_user(&self, user_id: &UserId) -> Result<u64, DomainError> {
        Ok(self
            .events
            .lock()
            .unwrap()
            .iter()
            .filter(|e| &e.user_id == user_id)
            .map(|e| e.usage.total_tokens as u64)
            .sum())
    }
}
