use std::borrow::Cow;

use serde::Serialize;

use crate::form::FormState;

pub type Text = Cow<'static, str>;

// ────────────────────────────────────────────────────────────────────────────
// Rendered tile (one per card, rebuilt on every render pass)
// ────────────────────────────────────────────────────────────────────────────

/// A fully materialised insight card, ready for the template or the JSON API.
#[derive(Debug, Clone, Serialize)]
pub struct Tile {
    /// 1-based display position.
    pub position: usize,
    pub icon: &'static str,
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub body: Vec<Block>,
    /// Footer confidence bar, 0 – 100.
    pub confidence: Option<u8>,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Secondary,
    Outline,
    Primary,
    Green,
    Blue,
    Purple,
    Orange,
    Pink,
}

#[derive(Debug, Clone, Serialize)]
pub struct Badge {
    pub label: Text,
    pub tone: BadgeTone,
}

/// A labelled progress bar (DISC axes, sentiment split).
#[derive(Debug, Clone, Serialize)]
pub struct Bar {
    pub label: &'static str,
    pub value: u8,
}

/// A labelled percentage shown as text.
#[derive(Debug, Clone, Serialize)]
pub struct Stat {
    pub label: &'static str,
    pub percent: u8,
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStyle {
    /// Italic copy block.
    Message,
    /// Accent-bordered ask.
    Callout,
}

/// Content blocks a tile body is assembled from, in display order.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Block {
    Badges {
        badges: Vec<Badge>,
        caption: Option<&'static str>,
    },
    Field {
        label: &'static str,
        value: Text,
        muted: bool,
    },
    Quote {
        text: &'static str,
        style: QuoteStyle,
    },
    Bars {
        bars: Vec<Bar>,
    },
    Stats {
        stats: Vec<Stat>,
    },
    Trace {
        lines: Vec<&'static str>,
    },
    Note {
        text: &'static str,
    },
}

// ────────────────────────────────────────────────────────────────────────────
// Tile spec (static table entry + body builder)
// ────────────────────────────────────────────────────────────────────────────

/// Static description of one card. `body` is the only part that may read the form.
pub struct TileSpec {
    pub icon: &'static str,
    pub image: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub confidence: Option<u8>,
    pub body: fn(&FormState) -> Vec<Block>,
}

impl TileSpec {
    pub fn build(&self, position: usize, state: &FormState) -> Tile {
        Tile {
            position,
            icon: self.icon,
            image: self.image,
            title: self.title,
            description: self.description,
            body: (self.body)(state),
            confidence: self.confidence,
        }
    }
}

// Small constructors keep the catalog table readable.

pub fn badge(label: impl Into<Text>, tone: BadgeTone) -> Badge {
    Badge {
        label: label.into(),
        tone,
    }
}

pub fn field(label: &'static str, value: impl Into<Text>) -> Block {
    Block::Field {
        label,
        value: value.into(),
        muted: false,
    }
}

pub fn muted_field(label: &'static str, value: impl Into<Text>) -> Block {
    Block::Field {
        label,
        value: value.into(),
        muted: true,
    }
}

pub fn bars(values: &[(&'static str, u8)]) -> Block {
    Block::Bars {
        bars: values
            .iter()
            .map(|&(label, value)| Bar { label, value })
            .collect(),
    }
}
