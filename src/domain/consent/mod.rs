//! Consent module - Records of what the user has agreed to.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{Timestamp, UserId};

/// The kinds of consent the application tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConsentKind {
    /// Terms of service and privacy policy.
    Terms,
    /// Explicit-content access (age attestation).
    ExplicitContent,
    /// Sending profile context to the AI provider.
    AiPersonalization,
    /// Marketing email and push.
    Marketing,
}

impl ConsentKind {
    pub const ALL: [ConsentKind; 4] = [
        ConsentKind::Terms,
        ConsentKind::ExplicitContent,
        ConsentKind::AiPersonalization,
        ConsentKind::Marketing,
    ];
}

/// One consent decision. Later records supersede earlier ones of the
/// same kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentRecord {
    pub user_id: UserId,
    pub kind: ConsentKind,
    pub granted: bool,
    pub recorded_at: Timestamp,
}

impl ConsentRecord {
    pub fn new(user_id: UserId, kind: ConsentKind, granted: bool) -> Self {
        Self {
            user_id,
            kind,
            granted,
            recorded_at: Timestamp::now(),
        }
    }
}

/// Collapses a consent history into the latest decision per kind.
pub fn effective_consents(history: &[ConsentRecord]) -> Vec<ConsentRecord> {
    let mut latest: Vec<ConsentRecord> = Vec::new();
    for record in history {
        match latest.iter_mut().find(|r| r.kind == record.kind) {
            Some(existing) if record.recorded_at >= existing.recorded_at => {
                *existing = record.clone();
            }
            Some(_) => {}
            None => latest.push(record.clone()),
        }
    }
    latest
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user() -> UserId {
        UserId::new("u").unwrap()
    }

    #[test]
    fn latest_record_per_kind_wins() {
        let mut grant = ConsentRecord::new(user(), ConsentKind::Marketing, true);
        grant.recorded_at = Timestamp::from_unix_secs(1000);
        let mut revoke = ConsentRecord::new(user(), ConsentKind::Marketing, false);
        revoke.recorded_at = Timestamp::from_unix_secs(2000);

        let effective = effective_consents(&[grant, revoke]);
        assert_eq!(effective.len(), 1);
        assert!(!effective[0].granted);
    }

    #[test]
    fn kinds_are_independent() {
        let a = ConsentRecord::new(user(), ConsentKind::Terms, true);
        let b = ConsentRecord::new(user(), ConsentKind::Marketing, false);

        let effective = effective_consents(&[a, b]);
        assert_eq!(effective.len(), 2);
    }

    #[test]
    fn kind_serializes_snake_case() {
        let json = serde_json::to_string(&ConsentKind::AiPersonalization).unwrap();
        assert_eq!(json, "\"ai_personalization\"");
    }
}
