//! The ten insight cards, in display order.
//!
//! All copy here is fixed. Only the persona card (ICP value) and the confidence
//! card (input presence) read the form.

use crate::form::FormState;
use crate::panel::confidence::ConfidenceBreakdown;
use crate::panel::confidence::OVERALL_CONFIDENCE;
use crate::panel::tile::{
    badge, bars, field, muted_field, BadgeTone, Block, QuoteStyle, Stat, TileSpec,
};

pub const PERSONA_FALLBACK_BADGE: &str = "VP L&D";
pub const PERSONA_FALLBACK_ROLE: &str = "Vice President of Learning & Development";

pub static TILES: [TileSpec; 10] = [
    TileSpec {
        icon: "brain",
        image: "/assets/persona-icon.svg",
        title: "Persona Classification",
        description: "This identifies the stakeholder's role and strategic responsibilities to help tailor your messaging approach effectively.",
        confidence: None,
        body: persona_body,
    },
    TileSpec {
        icon: "trending-up",
        image: "/assets/disc-icon.svg",
        title: "DISC Personality Type",
        description: "Behavioral analysis based on communication patterns helps inform message tone, timing, and call-to-action format.",
        confidence: None,
        body: disc_body,
    },
    TileSpec {
        icon: "message-circle",
        image: "/assets/sentiment-icon.svg",
        title: "Sentiment Analysis",
        description: "Detected emotional tone helps prioritize deal stage and prepare for objection handling strategies.",
        confidence: None,
        body: sentiment_body,
    },
    TileSpec {
        icon: "settings",
        image: "/assets/modules-icon.svg",
        title: "Matching iMocha Modules",
        description: "Product modules aligned to prospect's context and pain points to connect their challenges with platform capabilities.",
        confidence: None,
        body: modules_body,
    },
    TileSpec {
        icon: "lightbulb",
        image: "/assets/message-icon.svg",
        title: "Personalized Value Message",
        description: "Sales-ready content crafted in prospect's language for immediate use in emails, calls, or presentations.",
        confidence: None,
        body: message_body,
    },
    TileSpec {
        icon: "target",
        image: "/assets/cta-icon.svg",
        title: "Suggested Call-to-Action",
        description: "Conversation-driving ask aligned to sentiment and personality type to move the engagement forward strategically.",
        confidence: None,
        body: cta_body,
    },
    TileSpec {
        icon: "star",
        image: "/assets/tone-icon.svg",
        title: "Recommended Pitch Tone",
        description: "Messaging style guidance helps sales reps frame their communication in a way that resonates with the prospect.",
        confidence: None,
        body: tone_body,
    },
    TileSpec {
        icon: "star",
        image: "/assets/confidence-icon.svg",
        title: "Weighted Confidence Score",
        description: "Output reliability indicator based on input variety signals whether the response requires human review.",
        confidence: Some(OVERALL_CONFIDENCE),
        body: confidence_body,
    },
    TileSpec {
        icon: "hash",
        image: "/assets/tags-icon.svg",
        title: "Contextual Tags",
        description: "Thematic categorization helps cluster prospects and trigger relevant playbooks for consistent sales processes.",
        confidence: None,
        body: tags_body,
    },
    TileSpec {
        icon: "file-text",
        image: "/assets/trace-icon.svg",
        title: "Prompt Trace",
        description: "Internal logic transparency for quality assurance and model tuning improves system reliability over time.",
        confidence: None,
        body: trace_body,
    },
];

// ────────────────────────────────────────────────────────────────────────────
// Body builders
// ────────────────────────────────────────────────────────────────────────────

fn persona_body(state: &FormState) -> Vec<Block> {
    let (badge_label, role) = match state.selected_icp() {
        Some(icp) => (
            icp.as_str().to_uppercase(),
            format!("{} Leader", capitalize_first(icp.as_str())),
        ),
        None => (
            PERSONA_FALLBACK_BADGE.to_string(),
            PERSONA_FALLBACK_ROLE.to_string(),
        ),
    };

    vec![
        Block::Badges {
            badges: vec![badge(badge_label, BadgeTone::Secondary)],
            caption: None,
        },
        muted_field("Role", role),
        muted_field(
            "Strategic Focus",
            "Driving organizational capability development and skills transformation initiatives.",
        ),
    ]
}

fn disc_body(_: &FormState) -> Vec<Block> {
    vec![
        Block::Badges {
            badges: vec![badge("Conscientiousness (C)", BadgeTone::Primary)],
            caption: Some("Primary Type"),
        },
        field(
            "Analysis",
            "Language patterns suggest detail-oriented, analytical approach. Values data-driven decisions and thorough information.",
        ),
        bars(&[("D", 25), ("I", 35), ("S", 30), ("C", 85)]),
    ]
}

fn sentiment_body(_: &FormState) -> Vec<Block> {
    vec![
        Block::Badges {
            badges: vec![badge("Positive", BadgeTone::Green)],
            caption: Some("Overall Sentiment"),
        },
        field(
            "Emotion Driver",
            "\"Optimistic about digital transformation and upskilling initiatives\"",
        ),
        bars(&[("Positive", 75), ("Neutral", 20), ("Negative", 5)]),
    ]
}

fn modules_body(_: &FormState) -> Vec<Block> {
    vec![
        Block::Badges {
            badges: [
                "Skills Inventory",
                "Career Pathing",
                "Adaptive Screening",
                "Learning Analytics",
            ]
            .into_iter()
            .map(|m| badge(m, BadgeTone::Outline))
            .collect(),
            caption: None,
        },
        field(
            "Primary Match",
            "Skills Inventory - addresses visibility into current workforce capabilities",
        ),
        field(
            "Secondary",
            "Career Pathing - supports talent mobility initiatives",
        ),
    ]
}

fn message_body(_: &FormState) -> Vec<Block> {
    vec![Block::Quote {
        text: "Based on your focus on data-driven L&D transformation, iMocha's Skills Inventory can provide the workforce visibility you need to make strategic upskilling decisions. Our analytics show organizations like yours achieve 40% faster capability development when they start with comprehensive skills mapping.",
        style: QuoteStyle::Message,
    }]
}

fn cta_body(_: &FormState) -> Vec<Block> {
    vec![
        Block::Quote {
            text: "Would you be interested in seeing a 15-minute skills dashboard demo focused on your L&D transformation goals?",
            style: QuoteStyle::Callout,
        },
        muted_field(
            "Why this works",
            "Respects analytical nature with time-bound, specific offer while connecting to stated objectives.",
        ),
    ]
}

fn tone_body(_: &FormState) -> Vec<Block> {
    vec![
        Block::Badges {
            badges: vec![badge("Data-led & Consultative", BadgeTone::Blue)],
            caption: None,
        },
        field("Approach", "Lead with metrics and case studies"),
        field("Language", "Professional, detailed, evidence-based"),
        field("Timing", "Allow processing time, avoid rushing decisions"),
    ]
}

fn confidence_body(state: &FormState) -> Vec<Block> {
    let breakdown = ConfidenceBreakdown::from_form(state);
    vec![
        Block::Stats {
            stats: vec![
                Stat {
                    label: "LinkedIn Profile",
                    percent: breakdown.linkedin,
                },
                Stat {
                    label: "Call Transcript",
                    percent: breakdown.transcript,
                },
                Stat {
                    label: "ICP Selection",
                    percent: breakdown.icp,
                },
                Stat {
                    label: "Context Info",
                    percent: breakdown.context,
                },
            ],
        },
        muted_field(
            "Recommendation",
            "High confidence - proceed with insights. Consider gathering additional context for even more precision.",
        ),
    ]
}

fn tags_body(_: &FormState) -> Vec<Block> {
    vec![
        Block::Badges {
            badges: vec![
                badge("Reskilling", BadgeTone::Purple),
                badge("Digital Transformation", BadgeTone::Green),
                badge("Skills Analytics", BadgeTone::Blue),
                badge("Workforce Planning", BadgeTone::Orange),
                badge("Career Development", BadgeTone::Pink),
            ],
            caption: None,
        },
        Block::Note {
            text: "These tags can be used to automatically trigger relevant case studies, content, and follow-up sequences.",
        },
    ]
}

fn trace_body(_: &FormState) -> Vec<Block> {
    vec![
        Block::Trace {
            lines: vec![
                "Input Processing: \u{2713} LinkedIn URL parsed",
                "Sentiment Analysis: \u{2713} Positive tone detected",
                "DISC Mapping: \u{2713} Conscientiousness profile identified",
                "Module Matching: \u{2713} Skills-focused recommendations",
                "Message Generation: \u{2713} Data-driven tone applied",
            ],
        },
        Block::Note {
            text: "This trace helps improve model accuracy and provides debugging information for continuous enhancement.",
        },
    ]
}

/// Uppercases the first character only; the rest is kept as typed.
fn capitalize_first(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
