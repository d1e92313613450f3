//! Result panel — materialises the insight cards for one render pass.
//!
//! Visibility invariant: the panel yields tiles iff `results_visible` is set.

pub mod catalog;
pub mod confidence;
pub mod tile;

use crate::form::FormState;

pub use tile::Tile;

/// Builds the panel for the current state. Empty when results are hidden.
pub fn render_panel(state: &FormState) -> Vec<Tile> {
    if !state.results_visible() {
        return Vec::new();
    }

    catalog::TILES
        .iter()
        .enumerate()
        .map(|(i, spec)| spec.build(i + 1, state))
        .collect()
}
