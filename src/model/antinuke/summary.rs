//! Human-facing review of recent anti-nuke activity.

use super::action::ActionRecord;

/// Recent actions grouped by executor.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivitySummary {
    /// All actions in the review period.
    pub total: usize,
    /// Actions considered for grouping.
    pub shown: usize,
    pub executors: Vec<ExecutorActivity>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExecutorActivity {
    pub executor_id: u64,
    /// Number of this executor's actions among the shown ones.
    pub action_count: usize,
    /// Newest first, truncated.
    pub actions: Vec<ActionRecord>,
}
