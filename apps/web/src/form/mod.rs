//! Input form state — the single record owned by one page instance.
//!
//! Every mutator stores its value verbatim: no trimming, no URL checks, no
//! length limits. "Provided" means non-empty, so a lone space still counts.

pub mod icp;

use serde::Deserialize;

pub use icp::Icp;

/// Prospect inputs plus the results-visibility flag.
///
/// `results_visible` has no public setter: only the analyze trigger reveals
/// the panel, and nothing ever hides it again within an instance.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    linkedin_url: String,
    call_transcript: String,
    customer_name: String,
    rep_name: String,
    selected_icp: Option<Icp>,
    contextual_info: String,
    results_visible: bool,
}

/// Raw field values as posted by the browser (or the JSON API).
///
/// `results_visible` carries the instance's flag across requests, the page
/// round-trips it in a hidden input.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormSubmission {
    pub linkedin_url: String,
    pub call_transcript: String,
    pub customer_name: String,
    pub rep_name: String,
    pub selected_icp: String,
    pub contextual_info: String,
    pub results_visible: bool,
}

impl FormState {
    /// Rebuilds an instance from a submission, field by field through the mutators.
    pub fn rehydrate(submission: FormSubmission) -> Self {
        let mut state = FormState::default();
        state.set_linkedin_url(submission.linkedin_url);
        state.set_call_transcript(submission.call_transcript);
        state.set_customer_name(submission.customer_name);
        state.set_rep_name(submission.rep_name);
        state.select_icp_value(&submission.selected_icp);
        state.set_contextual_info(submission.contextual_info);
        state.results_visible = submission.results_visible;
        state
    }

    // ── Mutators ──────────────────────────────────────────────────────────────

    pub fn set_linkedin_url(&mut self, value: impl Into<String>) {
        self.linkedin_url = value.into();
    }

    pub fn set_call_transcript(&mut self, value: impl Into<String>) {
        self.call_transcript = value.into();
    }

    pub fn set_customer_name(&mut self, value: impl Into<String>) {
        self.customer_name = value.into();
    }

    pub fn set_rep_name(&mut self, value: impl Into<String>) {
        self.rep_name = value.into();
    }

    pub fn set_selected_icp(&mut self, icp: Option<Icp>) {
        self.selected_icp = icp;
    }

    /// Selector binding: unknown values clear the selection.
    pub fn select_icp_value(&mut self, value: &str) {
        self.set_selected_icp(Icp::from_value(value));
    }

    pub fn set_contextual_info(&mut self, value: impl Into<String>) {
        self.contextual_info = value.into();
    }

    pub(crate) fn reveal_results(&mut self) {
        self.results_visible = true;
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    pub fn linkedin_url(&self) -> &str {
        &self.linkedin_url
    }

    pub fn call_transcript(&self) -> &str {
        &self.call_transcript
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn rep_name(&self) -> &str {
        &self.rep_name
    }

    pub fn selected_icp(&self) -> Option<Icp> {
        self.selected_icp
    }

    pub fn contextual_info(&self) -> &str {
        &self.contextual_info
    }

    pub fn results_visible(&self) -> bool {
        self.results_visible
    }

    pub fn has_linkedin_url(&self) -> bool {
        !self.linkedin_url.is_empty()
    }

    pub fn has_call_transcript(&self) -> bool {
        !self.call_transcript.is_empty()
    }

    pub fn has_selected_icp(&self) -> bool {
        self.selected_icp.is_some()
    }

    pub fn has_contextual_info(&self) -> bool {
        !self.contextual_info.is_empty()
    }
}
