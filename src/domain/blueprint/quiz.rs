//! Quiz answer scoring.
//!
//! Each quiz question is tagged with the category it probes and answered
//! on a five-point agreement scale. A submission is scored by summing the
//! agreement weights per category.

use serde::{Deserialize, Serialize};

use super::{Blueprint, BlueprintScores};
use crate::domain::foundation::ValidationError;

/// Agreement level for a single quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Agreement {
    StronglyDisagree,
    Disagree,
    Neutral,
    Agree,
    StronglyAgree,
}

impl Agreement {
    /// Points this answer contributes to its question's category.
    pub fn points(&self) -> u32 {
        match self {
            Agreement::StronglyDisagree => 0,
            Agreement::Disagree => 1,
            Agreement::Neutral => 2,
            Agreement::Agree => 3,
            Agreement::StronglyAgree => 4,
        }
    }
}

/// A single answered quiz question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    /// The category this question probes.
    pub category: Blueprint,
    /// The user's agreement with the statement.
    pub agreement: Agreement,
}

/// Scores a full set of quiz answers.
///
/// Requires at least one answer; an empty submission would derive a
/// primary category from nothing but tie-break order.
pub fn score_answers(answers: &[QuizAnswer]) -> Result<BlueprintScores, ValidationError> {
    if answers.is_empty() {
        return Err(ValidationError::empty_field("answers"));
    }

    let mut scores = BlueprintScores::zero();
    for answer in answers {
        scores.add(answer.category, answer.agreement.points());
    }
    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn answer(category: Blueprint, agreement: Agreement) -> QuizAnswer {
        QuizAnswer { category, agreement }
    }

    #[test]
    fn empty_submission_is_rejected() {
        assert!(score_answers(&[]).is_err());
    }

    #[test]
    fn points_accumulate_per_category() {
        let answers = vec![
            answer(Blueprint::Sensual, Agreement::StronglyAgree),
            answer(Blueprint::Sensual, Agreement::Agree),
            answer(Blueprint::Kinky, Agreement::Neutral),
        ];

        let scores = score_answers(&answers).unwrap();
        assert_eq!(scores.get(Blueprint::Sensual), 7);
        assert_eq!(scores.get(Blueprint::Kinky), 2);
        assert_eq!(scores.get(Blueprint::Sexual), 0);
    }

    #[test]
    fn strong_agreement_drives_primary_category() {
        let answers = vec![
            answer(Blueprint::Energetic, Agreement::StronglyAgree),
            answer(Blueprint::Energetic, Agreement::StronglyAgree),
            answer(Blueprint::Sexual, Agreement::Agree),
        ];

        let scores = score_answers(&answers).unwrap();
        assert_eq!(scores.primary(), Blueprint::Energetic);
        assert_eq!(scores.secondary(), Blueprint::Sexual);
    }

    #[test]
    fn strongly_disagree_contributes_nothing() {
        let answers = vec![answer(Blueprint::Kinky, Agreement::StronglyDisagree)];
        let scores = score_answers(&answers).unwrap();
        assert_eq!(scores.total(), 0);
    }

    #[test]
    fn agreement_serializes_snake_case() {
        let json = serde_json::to_string(&Agreement::StronglyAgree).unwrap();
        assert_eq!(json, "\"strongly_agree\"");
    }
}
