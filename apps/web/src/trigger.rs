//! Analyze trigger — the one validation gate between the form and the results panel.
//!
//! Gating fields: LinkedIn URL, call transcript, ICP. Customer name, rep name and
//! contextual info never unlock the panel on their own.

use thiserror::Error;
use tracing::{info, warn};

use crate::form::FormState;
use crate::notify::{Notification, Notifier, Severity};

pub const INPUT_REQUIRED_TITLE: &str = "Input Required";
pub const INPUT_REQUIRED_MESSAGE: &str =
    "Please provide at least one input (LinkedIn URL, Call Transcript, or ICP selection)";
pub const ANALYSIS_COMPLETE_TITLE: &str = "Analysis Complete";
pub const ANALYSIS_COMPLETE_MESSAGE: &str = "PersonaLens has generated insights for your prospect";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum AnalyzeError {
    #[error("Please provide at least one input (LinkedIn URL, Call Transcript, or ICP selection)")]
    MissingInput,
}

/// Runs the analyze action against one instance's state.
///
/// On `MissingInput` a destructive toast is emitted and `results_visible` is left
/// untouched (a panel that is already open stays open). On success the panel is
/// revealed and a success toast fires, every time, even if it was already visible.
pub fn analyze(state: &mut FormState, notifier: &mut dyn Notifier) -> Result<(), AnalyzeError> {
    let linkedin = state.has_linkedin_url();
    let transcript = state.has_call_transcript();
    let icp = state.has_selected_icp();

    if !(linkedin || transcript || icp) {
        warn!("analyze rejected: no gating input provided");
        notifier.notify(Notification::new(
            INPUT_REQUIRED_TITLE,
            INPUT_REQUIRED_MESSAGE,
            Severity::Destructive,
        ));
        return Err(AnalyzeError::MissingInput);
    }

    state.reveal_results();
    info!(linkedin, transcript, icp, "analysis complete, results revealed");
    notifier.notify(Notification::new(
        ANALYSIS_COMPLETE_TITLE,
        ANALYSIS_COMPLETE_MESSAGE,
        Severity::Normal,
    ));
    Ok(())
}
