//! State transition history tracking.
//!
//! A machine can keep a bounded record of the transitions it performed. Only
//! state names are recorded; the payload never leaves the machine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// Record of a single state transition.
///
/// # Example
///
/// ```rust
/// use handoff::StateTransition;
///
/// let transition = StateTransition::new("Open", "Locked", false);
/// assert_eq!(transition.from, "Open");
/// assert!(!transition.chained);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateTransition {
    /// Name of the state being left
    pub from: String,
    /// Name of the state being entered
    pub to: String,
    /// When the transition occurred
    pub timestamp: DateTime<Utc>,
    /// Requested by an entry hook rather than by a reaction
    pub chained: bool,
}

impl StateTransition {
    /// Record a transition happening now.
    pub fn new(from: impl Into<String>, to: impl Into<String>, chained: bool) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
            timestamp: Utc::now(),
            chained,
        }
    }
}

/// Ordered history of state transitions.
///
/// A bounded history drops its oldest record once `limit` is reached.
///
/// # Example
///
/// ```rust
/// use handoff::{StateHistory, StateTransition};
///
/// let mut history = StateHistory::new();
/// history.record(StateTransition::new("Start", "Middle", false));
/// history.record(StateTransition::new("Middle", "End", true));
///
/// assert_eq!(history.get_path(), vec!["Start", "Middle", "End"]);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StateHistory {
    transitions: VecDeque<StateTransition>,
    limit: Option<usize>,
}

impl StateHistory {
    /// Create a new, unbounded, empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty history keeping at most `limit` transitions.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: VecDeque::with_capacity(limit),
            limit: Some(limit),
        }
    }

    /// Maximum number of records kept, if bounded.
    pub fn limit(&self) -> Option<usize> {
        self.limit
    }

    /// Append a transition, evicting the oldest one when full.
    pub fn record(&mut self, transition: StateTransition) {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return;
            }
            while self.transitions.len() >= limit {
                self.transitions.pop_front();
            }
        }
        self.transitions.push_back(transition);
    }

    /// Get the path of state names traversed.
    ///
    /// Returns the `from` of the oldest record, then the `to` of each record.
    pub fn get_path(&self) -> Vec<&str> {
        let mut path = Vec::with_capacity(self.transitions.len() + 1);
        if let Some(first) = self.transitions.front() {
            path.push(first.from.as_str());
        }
        path.extend(self.transitions.iter().map(|t| t.to.as_str()));
        path
    }

    /// Calculate total duration from first to last transition.
    ///
    /// Returns `None` if there are no transitions.
    pub fn duration(&self) -> Option<Duration> {
        let (first, last) = (self.transitions.front()?, self.transitions.back()?);
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    /// Iterate over the recorded transitions, oldest first.
    pub fn transitions(&self) -> impl ExactSizeIterator<Item = &StateTransition> + '_ {
        self.transitions.iter()
    }

    /// Most recent transition.
    pub fn last(&self) -> Option<&StateTransition> {
        self.transitions.back()
    }

    pub fn len(&self) -> usize {
        self.transitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transitions.is_empty()
    }

    pub fn clear(&mut self) {
        self.transitions.clear();
    }
}
