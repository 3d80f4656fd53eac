use std::fmt;

/// Stages of a purge run, in the only order they can occur.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PurgeStage {
    Start,
    Listing,
    Resolving,
    Deleting,
    Done,
}

impl fmt::Display for PurgeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurgeStage::Start => write!(f, "start"),
            PurgeStage::Listing => write!(f, "listing"),
            PurgeStage::Resolving => write!(f, "resolving"),
            PurgeStage::Deleting => write!(f, "deleting"),
            PurgeStage::Done => write!(f, "done"),
        }
    }
}

/// Outcome of one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeSummary {
    /// Overlay image name as given on the command line
    pub overlay: String,
    /// Substring searched for in transformation names
    pub marker: String,
    /// Used transformations whose name contains the marker
    pub transformations: Vec<String>,
    /// Derived resources found for those transformations
    pub resources_found: usize,
    /// Ids submitted for deletion. Counts requests sent, not deletions confirmed.
    pub total_submitted: usize,
}

impl PurgeSummary {
    pub fn new(overlay: &str, marker: &str) -> Self {
        Self {
            overlay: overlay.to_string(),
            marker: marker.to_string(),
            transformations: Vec::new(),
            resources_found: 0,
            total_submitted: 0,
        }
    }
}
