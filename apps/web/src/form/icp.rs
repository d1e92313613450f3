use serde::{Deserialize, Serialize};

/// Ideal Customer Profile roles offered by the ICP selector.
///
/// The wire value (`as_str`) is what the persona tile interpolates, NOT the
/// display label: `CeoCoo` renders as "CEO-COO", never "CEO/COO".
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Icp {
    Chro,
    Ld,
    Ta,
    Recruiter,
    Hrbp,
    Mobility,
    CeoCoo,
}

impl Icp {
    /// Selector order.
    pub const ALL: [Icp; 7] = [
        Icp::Chro,
        Icp::Ld,
        Icp::Ta,
        Icp::Recruiter,
        Icp::Hrbp,
        Icp::Mobility,
        Icp::CeoCoo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Icp::Chro => "chro",
            Icp::Ld => "ld",
            Icp::Ta => "ta",
            Icp::Recruiter => "recruiter",
            Icp::Hrbp => "hrbp",
            Icp::Mobility => "mobility",
            Icp::CeoCoo => "ceo-coo",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Icp::Chro => "CHRO",
            Icp::Ld => "L&D",
            Icp::Ta => "TA",
            Icp::Recruiter => "Recruiter",
            Icp::Hrbp => "HRBP",
            Icp::Mobility => "Internal Mobility/Talent Transformation Lead",
            Icp::CeoCoo => "CEO/COO",
        }
    }

    /// Parses a selector value. Empty or unrecognised values mean "no selection".
    pub fn from_value(value: &str) -> Option<Icp> {
        Icp::ALL.into_iter().find(|icp| icp.as_str() == value)
    }
}
