//! UserProfile aggregate.

use serde::{Deserialize, Serialize};

use crate::domain::blueprint::{score_answers, Blueprint, BlueprintScores, QuizAnswer};
use crate::domain::foundation::{
    CoupleId, DomainError, ErrorCode, Timestamp, UserId, ValidationError,
};

/// Length of the free trial in days.
pub const TRIAL_DAYS: i64 = 7;

/// A person's profile: identity, quiz results, partner linkage, and
/// trial timestamps.
///
/// Invariant: a profile has at most one partner; linking while linked is
/// rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    user_id: UserId,
    email: String,
    display_name: String,
    quiz_answers: Vec<QuizAnswer>,
    scores: Option<BlueprintScores>,
    partner_id: Option<UserId>,
    couple_id: Option<CoupleId>,
    trial_started_at: Option<Timestamp>,
    trial_ends_at: Option<Timestamp>,
    created_at: Timestamp,
    updated_at: Timestamp,
}

impl UserProfile {
    /// Creates a fresh profile at signup. No quiz results, no partner,
    /// no trial.
    pub fn new(
        user_id: UserId,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(ValidationError::empty_field("display_name"));
        }

        let now = Timestamp::now();
        Ok(Self {
            user_id,
            email: email.into(),
            display_name,
            quiz_answers: Vec::new(),
            scores: None,
            partner_id: None,
            couple_id: None,
            trial_started_at: None,
            trial_ends_at: None,
            created_at: now,
            updated_at: now,
        })
    }

    /// Reconstructs a profile from persisted state.
    #[allow(clippy::too_many_arguments)]
    pub fn restore(
        user_id: UserId,
        email: String,
        display_name: String,
        quiz_answers: Vec<QuizAnswer>,
        scores: Option<BlueprintScores>,
        partner_id: Option<UserId>,
        couple_id: Option<CoupleId>,
        trial_started_at: Option<Timestamp>,
        trial_ends_at: Option<Timestamp>,
        created_at: Timestamp,
        updated_at: Timestamp,
    ) -> Self {
        Self {
            user_id,
            email,
            display_name,
            quiz_answers,
            scores,
            partner_id,
            couple_id,
            trial_started_at,
            trial_ends_at,
            created_at,
            updated_at,
        }
    }

    // ── Accessors ──────────────────────────────────────────────────

    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn quiz_answers(&self) -> &[QuizAnswer] {
        &self.quiz_answers
    }

    pub fn scores(&self) -> Option<&BlueprintScores> {
        self.scores.as_ref()
    }

    pub fn partner_id(&self) -> Option<&UserId> {
        self.partner_id.as_ref()
    }

    pub fn couple_id(&self) -> Option<CoupleId> {
        self.couple_id
    }

    pub fn trial_started_at(&self) -> Option<Timestamp> {
        self.trial_started_at
    }

    pub fn trial_ends_at(&self) -> Option<Timestamp> {
        self.trial_ends_at
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn updated_at(&self) -> Timestamp {
        self.updated_at
    }

    /// The highest-ranked blueprint, if the quiz has been completed.
    pub fn primary_blueprint(&self) -> Option<Blueprint> {
        self.scores.as_ref().map(|s| s.primary())
    }

    /// The second-ranked blueprint, if the quiz has been completed.
    pub fn secondary_blueprint(&self) -> Option<Blueprint> {
        self.scores.as_ref().map(|s| s.secondary())
    }

    pub fn has_partner(&self) -> bool {
        self.partner_id.is_some()
    }

    // ── Mutations ──────────────────────────────────────────────────

    /// Records a quiz submission, replacing any earlier one.
    pub fn apply_quiz(&mut self, answers: Vec<QuizAnswer>) -> Result<(), DomainError> {
        let scores = score_answers(&answers)?;
        self.quiz_answers = answers;
        self.scores = Some(scores);
        self.touch();
        Ok(())
    }

    /// Updates the display name.
    pub fn rename(&mut self, display_name: impl Into<String>) -> Result<(), DomainError> {
        let display_name = display_name.into();
        if display_name.trim().is_empty() {
            return Err(ValidationError::empty_field("display_name").into());
        }
        self.display_name = display_name;
        self.touch();
        Ok(())
    }

    /// Links this profile to a partner.
    ///
    /// Rejected when already linked; a profile has at most one partner.
    pub fn link_partner(
        &mut self,
        partner_id: UserId,
        couple_id: CoupleId,
    ) -> Result<(), DomainError> {
        if self.partner_id.is_some() {
            return Err(DomainError::new(
                ErrorCode::AlreadyLinked,
                "Profile is already linked to a partner",
            ));
        }
        if partner_id == self.user_id {
            return Err(DomainError::validation(
                "partner_id",
                "Cannot link a profile to itself",
            ));
        }
        self.partner_id = Some(partner_id);
        self.couple_id = Some(couple_id);
        self.touch();
        Ok(())
    }

    /// Removes the partner linkage. Idempotent.
    pub fn unlink_partner(&mut self) {
        self.partner_id = None;
        self.couple_id = None;
        self.touch();
    }

    /// Starts the free trial. One trial per profile, ever.
    pub fn start_trial(&mut self, now: Timestamp) -> Result<(), DomainError> {
        if self.trial_started_at.is_some() {
            return Err(DomainError::new(
                ErrorCode::TrialAlreadyUsed,
                "Free trial has already been used",
            ));
        }
        self.trial_started_at = Some(now);
        self.trial_ends_at = Some(now.add_days(TRIAL_DAYS));
        self.touch();
        Ok(())
    }

    fn touch(&mut self) {
        self.updated_at = Timestamp::now();
    }
}
