//! Best-effort parsing of model output into suggestions.
//!
//! The model is asked for a JSON array but is not guaranteed to comply.
//! Parsing tries structured JSON first (including JSON embedded in
//! surrounding prose), then falls back to line-splitting heuristics.
//! Total failure yields the hand-written static list, so callers always
//! receive at least one suggestion.

use serde::Deserialize;

use super::{ActivityCategory, Intensity, Suggestion};

/// Permissive wire shape for one model-emitted suggestion.
#[derive(Debug, Deserialize)]
struct RawSuggestion {
    title: Option<String>,
    body: Option<String>,
    estimated_time: Option<String>,
    emoji: Option<String>,
    intensity: Option<String>,
}

impl RawSuggestion {
    fn into_suggestion(self, default_intensity: Intensity) -> Option<Suggestion> {
        let title = self.title?.trim().to_string();
        if title.is_empty() {
            return None;
        }
        let body = self.body.unwrap_or_default().trim().to_string();
        Some(Suggestion {
            title,
            body,
            estimated_time: self
                .estimated_time
                .unwrap_or_else(|| "15 min".to_string()),
            emoji: self.emoji.unwrap_or_else(|| "✨".to_string()),
            intensity: self
                .intensity
                .as_deref()
                .and_then(Intensity::parse)
                .unwrap_or(default_intensity),
        })
    }
}

/// Parses model output into suggestions. May return an empty vec; use
/// [`parse_or_fallback`] when the non-empty contract is required.
pub fn parse_suggestions(raw: &str, default_intensity: Intensity) -> Vec<Suggestion> {
    if let Some(parsed) = parse_json(raw, default_intensity) {
        if !parsed.is_empty() {
            return parsed;
        }
    }
    parse_lines(raw, default_intensity)
}

/// Parses model output, substituting the static fallback list when
/// nothing usable could be extracted. Never returns an empty vec.
pub fn parse_or_fallback(
    raw: &str,
    category: ActivityCategory,
    default_intensity: Intensity,
) -> Vec<Suggestion> {
    let parsed = parse_suggestions(raw, default_intensity);
    if parsed.is_empty() {
        fallback_suggestions(category, default_intensity)
    } else {
        parsed
    }
}

fn parse_json(raw: &str, default_intensity: Intensity) -> Option<Vec<Suggestion>> {
    // The array may be wrapped in prose or a code fence; slice from the
    // first '[' to the last ']'.
    let start = raw.find('[')?;
    let end = raw.rfind(']')?;
    if end <= start {
        return None;
    }
    let slice = &raw[start..=end];

    let raws: Vec<RawSuggestion> = serde_json::from_str(slice).ok()?;
    Some(
        raws.into_iter()
            .filter_map(|r| r.into_suggestion(default_intensity))
            .collect(),
    )
}

fn parse_lines(raw: &str, default_intensity: Intensity) -> Vec<Suggestion> {
    raw.lines()
        .filter_map(|line| {
            let line = strip_list_marker(line.trim());
            if line.len() < 4 {
                return None;
            }
            let (title, body) = match line.split_once(':') {
                Some((t, b)) if !t.trim().is_empty() => {
                    (t.trim().to_string(), b.trim().to_string())
                }
                _ => (line.to_string(), String::new()),
            };
            Some(Suggestion {
                title,
                body,
                estimated_time: "15 min".to_string(),
                emoji: "✨".to_string(),
                intensity: default_intensity,
            })
        })
        .collect()
}

fn strip_list_marker(line: &str) -> &str {
    let line = line.trim_start_matches(['-', '*', '•']).trim_start();
    // Numbered markers like "1." or "12)"
    let digits = line.chars().take_while(|c| c.is_ascii_digit()).count();
    if digits > 0 {
        let rest = &line[digits..];
        if let Some(stripped) = rest.strip_prefix('.').or_else(|| rest.strip_prefix(')')) {
            return stripped.trim_start();
        }
    }
    line
}

/// The hand-written fallback list, one entry per category, adjusted to
/// the requested intensity tag.
pub fn fallback_suggestions(category: ActivityCategory, intensity: Intensity) -> Vec<Suggestion> {
    let (title, body, time, emoji) = match category {
        ActivityCategory::Anticipation => (
            "The countdown note",
            "Leave a note naming a time tonight. Say nothing more about it all day.",
            "All day",
            "⏳",
        ),
        ActivityCategory::Sensory => (
            "Three textures",
            "Pick three textures from around the house and take turns guessing them blindfolded.",
            "20 min",
            "🕯️",
        ),
        ActivityCategory::Touch => (
            "Six-minute trade",
            "Set a timer: three minutes of shoulder massage each way. No skipping turns.",
            "10 min",
            "💆",
        ),
        ActivityCategory::Play => (
            "Two truths, one dare",
            "Swap two honest answers about what you have been enjoying lately, then one dare each.",
            "15 min",
            "🎲",
        ),
        ActivityCategory::Fantasy => (
            "One-sentence scene",
            "Each of you writes one sentence of a scenario and passes it back. Stop at ten lines.",
            "15 min",
            "📜",
        ),
        ActivityCategory::Connection => (
            "Phone-free nightcap",
            "Make a drink, sit facing each other, and ask what the best part of the week was.",
            "20 min",
            "🌙",
        ),
    };

    vec![Suggestion {
        title: title.to_string(),
        body: body.to_string(),
        estimated_time: time.to_string(),
        emoji: emoji.to_string(),
        intensity,
    }]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_clean_json_array() {
        let raw = r#"[{"title":"Slow dance","body":"One song.","estimated_time":"5 min","emoji":"💃","intensity":"sweet"}]"#;
        let parsed = parse_suggestions(raw, Intensity::Flirty);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "Slow dance");
        assert_eq!(parsed[0].intensity, Intensity::Sweet);
    }

    #[test]
    fn parses_json_wrapped_in_prose() {
        let raw = "Here are your suggestions:\n```json\n[{\"title\":\"Tea ritual\"}]\n```\nEnjoy!";
        let parsed = parse_suggestions(raw, Intensity::Sweet);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "Tea ritual");
        assert_eq!(parsed[0].estimated_time, "15 min");
    }

    #[test]
    fn missing_intensity_defaults_to_request() {
        let raw = r#"[{"title":"A","body":"b"}]"#;
        let parsed = parse_suggestions(raw, Intensity::Wild);
        assert_eq!(parsed[0].intensity, Intensity::Wild);
    }

    #[test]
    fn falls_back_to_line_splitting() {
        let raw = "1. Candlelit bath: run it together\n2. Playlist swap: trade three songs";
        let parsed = parse_suggestions(raw, Intensity::Flirty);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].title, "Candlelit bath");
        assert_eq!(parsed[0].body, "run it together");
        assert_eq!(parsed[1].title, "Playlist swap");
    }

    #[test]
    fn line_splitting_strips_bullet_markers() {
        let raw = "- Morning coffee in bed\n• Walk at dusk";
        let parsed = parse_suggestions(raw, Intensity::Sweet);
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[0].title, "Morning coffee in bed");
    }

    #[test]
    fn garbage_input_yields_fallback() {
        let parsed = parse_or_fallback("", ActivityCategory::Touch, Intensity::Spicy);
        assert!(!parsed.is_empty());
        assert_eq!(parsed[0].intensity, Intensity::Spicy);
    }

    #[test]
    fn fallback_exists_for_every_category() {
        for category in ActivityCategory::ALL {
            for intensity in Intensity::ALL {
                let list = fallback_suggestions(category, intensity);
                assert!(!list.is_empty());
                assert_eq!(list[0].intensity, intensity);
            }
        }
    }

    #[test]
    fn untitled_json_entries_are_dropped() {
        let raw = r#"[{"body":"no title"},{"title":"Kept"}]"#;
        let parsed = parse_suggestions(raw, Intensity::Sweet);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].title, "Kept");
    }
}
