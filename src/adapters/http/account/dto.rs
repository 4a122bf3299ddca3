//! Request/response DTOs for account endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::blueprint::{Agreement, Blueprint, BlueprintScores, QuizAnswer};
use crate::domain::foundation::Timestamp;
use crate::domain::user::UserProfile;

#[derive(Debug, Deserialize)]
pub struct CreateAccountRequest {
    pub email: String,
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAccountRequest {
    pub display_name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct QuizAnswerDto {
    pub category: Blueprint,
    pub agreement: Agreement,
}

#[derive(Debug, Deserialize)]
pub struct SubmitQuizRequest {
    pub answers: Vec<QuizAnswerDto>,
}

impl SubmitQuizRequest {
    pub fn into_answers(self) -> Vec<QuizAnswer> {
        self.answers
            .into_iter()
            .map(|a| QuizAnswer {
                category: a.category,
                agreement: a.agreement,
            })
            .collect()
    }
}

#[derive(Debug, Serialize)]
pub struct AccountResponse {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub primary_blueprint: Option<Blueprint>,
    pub secondary_blueprint: Option<Blueprint>,
    pub scores: Option<BlueprintScores>,
    pub partner_id: Option<String>,
    pub trial_started_at: Option<Timestamp>,
    pub trial_ends_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<UserProfile> for AccountResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            user_id: profile.user_id().to_string(),
            email: profile.email().to_string(),
            display_name: profile.display_name().to_string(),
            primary_blueprint: profile.primary_blueprint(),
            secondary_blueprint: profile.secondary_blueprint(),
            scores: profile.scores().copied(),
            partner_id: profile.partner_id().map(|p| p.to_string()),
            trial_started_at: profile.trial_started_at(),
            trial_ends_at: profile.trial_ends_at(),
            created_at: profile.created_at(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct QuizResultResponse {
    pub scores: BlueprintScores,
    pub primary_blueprint: Blueprint,
    pub secondary_blueprint: Blueprint,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;

    #[test]
    fn account_response_carries_blueprints() {
        let mut profile =
            UserProfile::new(UserId::new("u").unwrap(), "a@b.c", "Ada").unwrap();
        profile
            .apply_quiz(vec![QuizAnswer {
                category: Blueprint::Kinky,
                agreement: Agreement::StronglyAgree,
            }])
            .unwrap();

        let response = AccountResponse::from(profile);
        assert_eq!(response.primary_blueprint, Some(Blueprint::Kinky));
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["primary_blueprint"], "kinky");
    }

    #[test]
    fn quiz_request_deserializes() {
        let json = r#"{"answers":[{"category":"sensual","agreement":"strongly_agree"}]}"#;
        let request: SubmitQuizRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.answers.len(), 1);
        assert_eq!(request.answers[0].category, Blueprint::Sensual);
    }
}
