//! Weighted confidence display values.
//!
//! NOTE: these are presence gates, not scores. Each input contributes its fixed
//! weight when non-empty and 0 otherwise; content and length are never read.
//! The headline figure is a constant and does not move with the inputs.

use serde::Serialize;

use crate::form::FormState;

/// Headline confidence shown in the card footer.
pub const OVERALL_CONFIDENCE: u8 = 78;

pub const LINKEDIN_WEIGHT: u8 = 30;
pub const TRANSCRIPT_WEIGHT: u8 = 40;
pub const ICP_WEIGHT: u8 = 20;
pub const CONTEXT_WEIGHT: u8 = 10;

/// Per-input contributions as displayed, in percent.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ConfidenceBreakdown {
    pub linkedin: u8,
    pub transcript: u8,
    pub icp: u8,
    pub context: u8,
}

impl ConfidenceBreakdown {
    pub fn from_form(state: &FormState) -> Self {
        Self {
            linkedin: gate(state.has_linkedin_url(), LINKEDIN_WEIGHT),
            transcript: gate(state.has_call_transcript(), TRANSCRIPT_WEIGHT),
            icp: gate(state.has_selected_icp(), ICP_WEIGHT),
            context: gate(state.has_contextual_info(), CONTEXT_WEIGHT),
        }
    }
}

fn gate(present: bool, weight: u8) -> u8 {
    if present {
        weight
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::Icp;

    #[test]
    fn test_linkedin_and_icp_only() {
        let mut state = FormState::default();
        state.set_linkedin_url("https://x");
        state.set_selected_icp(Some(Icp::Chro));

        let b = ConfidenceBreakdown::from_form(&state);
        assert_eq!(
            b,
            ConfidenceBreakdown {
                linkedin: 30,
                transcript: 0,
                icp: 20,
                context: 0
            }
        );
    }

    #[test]
    fn test_all_inputs_present() {
        let mut state = FormState::default();
        state.set_linkedin_url("u");
        state.set_call_transcript("t");
        state.set_selected_icp(Some(Icp::Ld));
        state.set_contextual_info("c");

        let b = ConfidenceBreakdown::from_form(&state);
        assert_eq!((b.linkedin, b.transcript, b.icp, b.context), (30, 40, 20, 10));
    }

    #[test]
    fn test_content_length_is_ignored() {
        let mut short = FormState::default();
        short.set_call_transcript("x");
        let mut long = FormState::default();
        long.set_call_transcript("x".repeat(10_000));

        assert_eq!(
            ConfidenceBreakdown::from_form(&short),
            ConfidenceBreakdown::from_form(&long)
        );
    }

    #[test]
    fn test_empty_form_is_all_zero() {
        let b = ConfidenceBreakdown::from_form(&FormState::default());
        assert_eq!((b.linkedin, b.transcript, b.icp, b.context), (0, 0, 0, 0));
    }
}
