//! Prompt construction for suggestion generation.

use super::{ActivityCategory, Intensity};
use crate::domain::blueprint::Blueprint;

/// System prompt framing the assistant's role for suggestion requests.
pub fn system_prompt() -> String {
    "You write intimacy suggestions for committed couples. You are warm, \
     tasteful, and specific. Always respond with a JSON array and nothing \
     else. Each element has the keys: title, body, estimated_time, emoji, \
     intensity."
        .to_string()
}

/// Builds the user-turn instruction for a suggestion request.
///
/// Embeds both partners' blueprints, the requested activity category,
/// and the desired heat level.
pub fn suggestion_prompt(
    user_blueprint: Blueprint,
    partner_blueprint: Blueprint,
    category: ActivityCategory,
    intensity: Intensity,
    count: usize,
) -> String {
    format!(
        "Generate {count} suggestions in the '{category}' category at the \
         '{intensity}' heat level for a couple where one partner's blueprint \
         is {user} and the other's is {partner}. Tailor each suggestion to \
         what both blueprints respond to. Keep each body under 60 words. \
         Respond with only the JSON array.",
        count = count,
        category = category.label(),
        intensity = intensity.label(),
        user = user_blueprint.display_name(),
        partner = partner_blueprint.display_name(),
    )
}

/// System prompt for the chat companion.
///
/// The companion knows the couple's blueprints when available so replies
/// stay personal.
pub fn companion_system_prompt(
    user_blueprint: Option<Blueprint>,
    partner_blueprint: Option<Blueprint>,
) -> String {
    let mut prompt = String::from(
        "You are a warm, discreet intimacy companion for one member of a \
         couple. Answer briefly and kindly. Never shame, never pressure, \
         and suggest talking to a professional for medical questions.",
    );
    if let Some(bp) = user_blueprint {
        prompt.push_str(&format!(" The user's blueprint is {}.", bp.display_name()));
    }
    if let Some(bp) = partner_blueprint {
        prompt.push_str(&format!(
            " Their partner's blueprint is {}.",
            bp.display_name()
        ));
    }
    prompt
}
