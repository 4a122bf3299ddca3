//! The fully-enumerated 5x5 compatibility matrix.
//!
//! Every ordered pair of blueprint categories has its own hand-authored
//! entry. The prose addresses the holder of the first category, which is
//! why (A, B) and (B, A) read differently even when their scores match.
//! Lookups are constant-time and never fail: a pair missing from the
//! table (there should be none) resolves to a low-information fallback.

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::{CompatibilityAnalysis, CompatibilityEntry};
use crate::domain::blueprint::Blueprint;
use crate::domain::suggestion::ActivityCategory;

fn entry(
    score: u8,
    what_works: &[&str],
    what_doesnt: &[&str],
    how_to_proceed: &str,
    recommended: &[ActivityCategory],
    conflict_areas: &[&str],
    strengths: &[&str],
) -> CompatibilityEntry {
    CompatibilityEntry {
        score,
        what_works: what_works.iter().map(|s| s.to_string()).collect(),
        what_doesnt: what_doesnt.iter().map(|s| s.to_string()).collect(),
        how_to_proceed: how_to_proceed.to_string(),
        recommended_categories: recommended.to_vec(),
        conflict_areas: conflict_areas.iter().map(|s| s.to_string()).collect(),
        strengths: strengths.iter().map(|s| s.to_string()).collect(),
    }
}

/// Fallback entry for pairs absent from the authored set.
static FALLBACK: Lazy<CompatibilityEntry> = Lazy::new(|| {
    entry(
        50,
        &["Curiosity about each other's preferences"],
        &["Assuming your partner wants what you want"],
        "We don't have authored guidance for this pairing yet. Start by comparing quiz results together.",
        &[ActivityCategory::Connection],
        &["Unexplored differences"],
        &["A fresh start with no assumptions"],
    )
});

static MATRIX: Lazy<HashMap<(Blueprint, Blueprint), CompatibilityEntry>> = Lazy::new(|| {
    use ActivityCategory::{Anticipation, Connection, Fantasy, Play, Sensory, Touch};
    use Blueprint::{Energetic, Kinky, Sensual, Sexual, Shapeshifter};

    let mut m = HashMap::new();

    // ── Energetic rows ──────────────────────────────────────────────

    m.insert(
        (Energetic, Energetic),
        entry(
            88,
            &[
                "Long build-ups where neither of you rushes the other",
                "Teasing messages through the day before you're together",
            ],
            &[
                "Skipping the anticipation phase when time is short",
                "Waiting each other out until the moment passes entirely",
            ],
            "Take turns being the one who initiates, and agree that slow is the point, not a delay.",
            &[Anticipation, Connection],
            &["Both of you can hold back so long that nothing happens"],
            &[
                "You both understand that the space before touch is the charge",
                "Neither of you will ever feel rushed",
            ],
        ),
    );

    m.insert(
        (Energetic, Sensual),
        entry(
            82,
            &[
                "Letting your anticipation build while they set the scene",
                "Slow evenings where tease and atmosphere reinforce each other",
            ],
            &[
                "Treating their need for comfort and ambiance as a detour",
                "Hovering at a distance when they want to be touched and held",
            ],
            "Bring your tease into their world: make the candles, music, and textures part of the build-up.",
            &[Anticipation, Sensory],
            &["Your distance can read as disinterest to a partner who connects through closeness"],
            &[
                "Both of you prefer the long way around to the shortcut",
                "Their groundedness steadies your charge",
            ],
        ),
    );

    m.insert(
        (Energetic, Sexual),
        entry(
            55,
            &[
                "Naming a day ahead of time so your build-up has a destination",
                "Letting them see the effect the tease has on you",
            ],
            &[
                "Expecting them to savor a slow burn they experience as stalling",
                "Withholding until frustration replaces interest",
            ],
            "Negotiate tempo openly. Trade off: some encounters fully slow, some fully direct.",
            &[Anticipation, Play],
            &[
                "Pace is the core mismatch: your charge builds where theirs discharges",
                "They may read your hovering as games",
            ],
            &[
                "Their directness tells you exactly where you stand",
                "When your build-up lands, it lands hard for both of you",
            ],
        ),
    );

    m.insert(
        (Energetic, Kinky),
        entry(
            70,
            &[
                "Rules and waiting games, which sit in both your wheelhouses",
                "Letting them structure the scene while you supply the charge",
            ],
            &[
                "Agreeing to taboo play you haven't actually warmed up to",
                "Being vague about limits because the tension feels productive",
            ],
            "Write the boundaries down first, then play inside them. Your anticipation is raw material for their scenarios.",
            &[Anticipation, Fantasy, Play],
            &["Their edge-seeking can overrun your need for slow consent"],
            &[
                "Denial and delay are native to both of your styles",
                "You make each other's favorite games possible",
            ],
        ),
    );

    m.insert(
        (Energetic, Shapeshifter),
        entry(
            85,
            &[
                "They meet your slow-burn mode without effort",
                "Variety in how the build-up resolves, night to night",
            ],
            &[
                "Assuming they are always content to wait just because they can",
                "Reading their flexibility as indifference",
            ],
            "Ask which mode they're in tonight rather than defaulting to yours.",
            &[Anticipation, Play, Connection],
            &["You can mistake their adaptability for not having needs of their own"],
            &[
                "They can match your charge and also break the stalemate",
                "Little risk of the mutual-waiting trap",
            ],
        ),
    );

    // ── Sensual rows ────────────────────────────────────────────────

    m.insert(
        (Sensual, Energetic),
        entry(
            82,
            &[
                "Setting a scene they can charge with anticipation",
                "Being teased while wrapped in textures and warmth you chose",
            ],
            &[
                "Expecting constant contact from a partner who thrives on space",
                "Rushing past their build-up to get to closeness",
            ],
            "Give their tease room to work. Treat the distance as part of the scene you're setting.",
            &[Sensory, Anticipation],
            &["Their deliberate distance can feel like coldness when you want holding"],
            &[
                "You both treat the evening as a whole, not a transaction",
                "Your atmosphere gives their charge somewhere to land",
            ],
        ),
    );

    m.insert(
        (Sensual, Sensual),
        entry(
            95,
            &[
                "Building evenings around taste, scent, and touch together",
                "Massage and bathing rituals where giving and receiving blur",
            ],
            &[
                "Letting comfort slide into routine without new textures",
                "Skipping the scene-setting when tired and wondering why nothing sparks",
            ],
            "Keep feeding the senses: trade responsibility for planning one fully-staged evening each week.",
            &[Sensory, Touch, Connection],
            &["Comfort-seeking can plateau into the same familiar evening on repeat"],
            &[
                "A shared sensory preference: the same candlelit details land for both of you",
                "Neither of you has to explain why the ambiance matters",
            ],
        ),
    );

    m.insert(
        (Sensual, Sexual),
        entry(
            65,
            &[
                "Warming up with the rituals you need, with a clear destination",
                "Teaching them how much further the evening goes when your senses are engaged first",
            ],
            &[
                "Being skipped past the atmosphere and expected to be ready",
                "Treating their directness as crudeness rather than appetite",
            ],
            "Agree on a minimum runway: the scene-setting happens, and it leads somewhere definite.",
            &[Sensory, Touch],
            &["They can experience your preparation as postponement"],
            &[
                "Their enthusiasm is unmistakable and warming",
                "You slow them down in ways they end up grateful for",
            ],
        ),
    );

    m.insert(
        (Sensual, Kinky),
        entry(
            60,
            &[
                "Sensation play that starts from your vocabulary: silk, wax, temperature",
                "Letting them structure an evening around your comfort edges",
            ],
            &[
                "Being pushed toward taboo before trust and atmosphere are established",
                "Dismissing their scenarios outright instead of finding the sensory door in",
            ],
            "Start with sensation, not scenario. Blindfolds and textures are a shared border country.",
            &[Sensory, Play],
            &[
                "Their taste for intensity can collide with your need for safety and comfort",
            ],
            &[
                "Sensation play genuinely excites both of you",
                "You teach them patience; they stretch your range",
            ],
        ),
    );

    m.insert(
        (Sensual, Shapeshifter),
        entry(
            90,
            &[
                "They happily live in your world of slow sensory evenings",
                "Letting them introduce variations you'd never plan yourself",
            ],
            &[
                "Always hosting: never asking what mode they'd pick tonight",
                "Assuming your ideal evening is automatically theirs",
            ],
            "Alternate who designs the evening. Theirs will look different from yours; go anyway.",
            &[Sensory, Connection, Play],
            &["Your consistency and their variety can drift apart unnoticed"],
            &[
                "They genuinely enjoy your depth in the senses",
                "Low friction: they flex to meet you where you are",
            ],
        ),
    );

    // ── Sexual rows ─────────────────────────────────────────────────

    m.insert(
        (Sexual, Energetic),
        entry(
            55,
            &[
                "Clear invitations so their build-up has a deadline",
                "Enjoying being wanted while the tease does its work",
            ],
            &[
                "Pushing for directness from a partner whose charge needs space",
                "Interpreting their delay as rejection",
            ],
            "Schedule the destination together, then let them own the runway to it.",
            &[Play, Anticipation],
            &["Your speed can collapse the anticipation they run on"],
            &[
                "Your certainty reassures them the wait will pay off",
                "Strong polarity when the timing lands",
            ],
        ),
    );

    m.insert(
        (Sexual, Sensual),
        entry(
            65,
            &[
                "Giving the scene-setting a real chance before the main event",
                "Bringing your enthusiasm into their rituals instead of around them",
            ],
            &[
                "Treating candles and music as obstacles",
                "Measuring the evening only by where it ends",
            ],
            "Adopt their runway as foreplay rather than delay; it ends where you want it to.",
            &[Touch, Sensory],
            &["You can make them feel like a step to be skipped"],
            &[
                "Your appetite is a compliment they feel",
                "They expand your definition of the act itself",
            ],
        ),
    );

    m.insert(
        (Sexual, Sexual),
        entry(
            92,
            &[
                "Straightforward invitations with no decoding required",
                "High frequency without elaborate staging",
            ],
            &[
                "Letting efficiency strip the encounters of variety",
                "Assuming appetite alone will carry the relationship's intimacy",
            ],
            "You never have to guess with each other. Spend the saved energy on novelty.",
            &[Touch, Play],
            &["Sameness: when both of you default to direct, encounters can become identical"],
            &[
                "Matched appetite and zero ambiguity",
                "Desire is expressed and received in the same currency",
            ],
        ),
    );

    m.insert(
        (Sexual, Kinky),
        entry(
            75,
            &[
                "Their scenarios giving your appetite new destinations",
                "Being the enthusiastic, willing center of their scene",
            ],
            &[
                "Dismissing negotiation as overhead",
                "Expecting every encounter to skip the script they need",
            ],
            "Learn the negotiation ritual; it's shorter than it looks and the payoff is real.",
            &[Play, Fantasy],
            &["Your straightforwardness can flatten the psychology they play in"],
            &[
                "Your enthusiasm gives them a generous canvas",
                "They keep your repertoire from going stale",
            ],
        ),
    );

    m.insert(
        (Sexual, Shapeshifter),
        entry(
            84,
            &[
                "They match your directness without friction",
                "Letting them steer some nights somewhere slower or stranger",
            ],
            &[
                "Treating every encounter as the same encounter",
                "Forgetting to ask what they're in the mood for",
            ],
            "Follow their lead one night in three; you'll find modes you didn't know you had.",
            &[Touch, Play, Fantasy],
            &["They may quietly miss variety while meeting you in direct mode"],
            &[
                "Easy daily compatibility",
                "They translate your appetite into new shapes",
            ],
        ),
    );

    // ── Kinky rows ──────────────────────────────────────────────────

    m.insert(
        (Kinky, Energetic),
        entry(
            70,
            &[
                "Denial, rules, and waiting built into scenes: their native language",
                "Using their charge as the engine of your scenario",
            ],
            &[
                "Escalating intensity faster than their slow consent develops",
                "Leaving limits implicit because the ambiguity feels exciting",
            ],
            "Negotiate explicitly and early. Their anticipation is an asset; don't spend it carelessly.",
            &[Fantasy, Anticipation, Play],
            &["Intensity versus their need for unhurried build-up"],
            &[
                "Anticipation games satisfy both of you by design",
                "They bring patience your scenes benefit from",
            ],
        ),
    );

    m.insert(
        (Kinky, Sensual),
        entry(
            60,
            &[
                "Sensation-first scenes: wax, ice, silk before anything taboo",
                "Building trust through their comfort rituals before escalating",
            ],
            &[
                "Leading with the most transgressive idea in your notebook",
                "Treating their comfort needs as vanilla resistance",
            ],
            "Enter through the senses. Escalate by agreement, never by surprise.",
            &[Sensory, Play],
            &["Your appetite for edges versus their need for safety"],
            &[
                "Sensation play is a genuine shared room",
                "Their groundedness makes your scenes safer and better",
            ],
        ),
    );

    m.insert(
        (Kinky, Sexual),
        entry(
            75,
            &[
                "An enthusiastic partner who shows up for the scene",
                "Scenarios that end where their appetite was pointed anyway",
            ],
            &[
                "Long psychological arcs they experience as preamble",
                "Skipping aftercare because they seem fine",
            ],
            "Keep scenes tight and embodied; save the slow-burn psychology for occasional nights.",
            &[Play, Fantasy, Touch],
            &["They may not value the ritual and framing that make it work for you"],
            &[
                "Their directness keeps your play honest",
                "High energy to work with",
            ],
        ),
    );

    m.insert(
        (Kinky, Kinky),
        entry(
            93,
            &[
                "Negotiating scenes you'd never propose to anyone else",
                "Trading roles and scripts with a partner who speaks the language",
            ],
            &[
                "Escalating on autopilot because consent feels assumed",
                "Letting the relationship live only inside scenes",
            ],
            "Keep the negotiation muscle strong even though you share the vocabulary. Plan non-scene intimacy too.",
            &[Fantasy, Play],
            &["Competing scripts: two directors, one stage"],
            &[
                "Nothing needs translating or apologizing for",
                "Trust compounds: each scene extends the map",
            ],
        ),
    );

    m.insert(
        (Kinky, Shapeshifter),
        entry(
            86,
            &[
                "A partner who can take either role in most scenarios",
                "Testing new scripts with someone who adapts mid-scene",
            ],
            &[
                "Casting them in the same role every time because it's convenient",
                "Mistaking their flexibility for absence of limits",
            ],
            "Ask what they want from the scene, not just what they'll agree to.",
            &[Fantasy, Play, Sensory],
            &["Their limits are real but quieter than yours; you have to ask"],
            &[
                "Extraordinary range between you",
                "They make your most ambitious scenarios castable",
            ],
        ),
    );

    // ── Shapeshifter rows ───────────────────────────────────────────

    m.insert(
        (Shapeshifter, Energetic),
        entry(
            85,
            &[
                "Slipping into slow-burn mode, which you genuinely enjoy",
                "Surprising them with a different resolution each time",
            ],
            &[
                "Shapeshifting so smoothly they never learn your own cravings",
                "Letting every evening run on their clock because you can adapt",
            ],
            "Name your own mode sometimes. They will wait for it gladly; waiting is their favorite part.",
            &[Anticipation, Connection],
            &["Your needs can vanish behind your flexibility"],
            &[
                "You can hold their pace without strain",
                "Their focus rewards whichever self you bring",
            ],
        ),
    );

    m.insert(
        (Shapeshifter, Sensual),
        entry(
            90,
            &[
                "Their staged evenings, which you can inhabit fully",
                "Offering variations that keep their rituals from going stale",
            ],
            &[
                "Only ever guesting in their world and never hosting yours",
                "Springing abrupt changes on a partner who runs on comfort",
            ],
            "Host on schedule: plan evenings in your other modes and walk them in gently.",
            &[Sensory, Play, Connection],
            &["Their sameness versus your appetite for change"],
            &[
                "You deepen their favorite register instead of fighting it",
                "Easy affection in both directions",
            ],
        ),
    );

    m.insert(
        (Shapeshifter, Sexual),
        entry(
            84,
            &[
                "Meeting their directness head-on when that's your mood",
                "Luring them into slower or stranger territory by example",
            ],
            &[
                "Suppressing your other modes to keep things simple",
                "Expecting them to guess which self showed up tonight",
            ],
            "Tell them the mode out loud; they respond brilliantly to the explicit.",
            &[Touch, Play, Fantasy],
            &["Their single-register style can starve your variety"],
            &[
                "Frictionless on their terms, expansive on yours",
                "You convert their appetite into range",
            ],
        ),
    );

    m.insert(
        (Shapeshifter, Kinky),
        entry(
            86,
            &[
                "Playing any role their scenario needs, credibly",
                "Scenes that exercise several of your modes at once",
            ],
            &[
                "Letting their scripts define all the play",
                "Agreeing from adaptability rather than appetite",
            ],
            "Distinguish 'I can' from 'I want'. Bring them a scenario of your own authorship sometimes.",
            &[Fantasy, Play, Sensory],
            &["Consent from flexibility instead of desire is a quiet failure mode"],
            &[
                "You are the partner their scenarios were written for",
                "Structure from them, range from you",
            ],
        ),
    );

    m.insert(
        (Shapeshifter, Shapeshifter),
        entry(
            80,
            &[
                "Unmatched variety: any evening can be any genre",
                "Renegotiating freely because neither of you is attached to one script",
            ],
            &[
                "Mirroring each other into indecision about what tonight is",
                "Assuming the other will eventually pick a direction",
            ],
            "Decide who leads before the evening starts. Rotate the role deliberately.",
            &[Play, Fantasy, Connection],
            &["Two mirrors: without a leader, nothing gets chosen"],
            &[
                "The widest possible shared repertoire",
                "Neither of you is ever boxed in",
            ],
        ),
    );

    m
});

/// Looks up the authored entry for an ordered blueprint pair.
///
/// Never fails: unknown pairs resolve to the fallback entry.
pub fn lookup(user: Blueprint, partner: Blueprint) -> &'static CompatibilityEntry {
    MATRIX.get(&(user, partner)).unwrap_or(&FALLBACK)
}

/// Returns the fallback entry directly.
pub fn fallback() -> &'static CompatibilityEntry {
    &FALLBACK
}

/// Looks up an entry from raw category labels.
///
/// Unknown labels resolve to the fallback entry rather than an error;
/// clients occasionally send stale labels after an app update.
pub fn lookup_labels(user: &str, partner: &str) -> &'static CompatibilityEntry {
    match (Blueprint::parse(user), Blueprint::parse(partner)) {
        (Some(a), Some(b)) => lookup(a, b),
        _ => &FALLBACK,
    }
}

/// Builds a full analysis for a pair, cloning the matched entry.
pub fn analyze(user: Blueprint, partner: Blueprint) -> CompatibilityAnalysis {
    CompatibilityAnalysis {
        user_blueprint: user,
        partner_blueprint: partner,
        entry: lookup(user, partner).clone(),
    }
}
