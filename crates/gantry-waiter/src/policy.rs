use std::collections::BTreeSet;

use serde::Deserialize;

use gantry_core::STATE_FINISHED;

/// Raw `wait` block as supplied by the caller, prior to normalization.
///
/// All fields default, so an empty block `{}` is valid and equivalent to an
/// omitted one. Unknown fields are a parse error; bad shapes are rejected
/// up front, not discovered mid-wait.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaitConfig {
    /// Skip waiting entirely; the run counts as accepted once triggered.
    pub disabled: bool,
    /// Terminal states treated as a successful outcome.
    pub continue_on_state: Vec<String>,
    /// Tolerate the wait budget running out.
    pub continue_on_timeout: bool,
}

impl WaitConfig {
    /// Parse a raw attribute block from the plugin's attribute model.
    ///
    /// `Null` means the block was omitted; the caller gets all-default
    /// behavior via `WaitPolicy::from_config(None)`.
    pub fn from_value(value: &serde_json::Value) -> Result<Option<Self>, serde_json::Error> {
        if value.is_null() {
            return Ok(None);
        }
        serde_json::from_value(value.clone()).map(Some)
    }
}

/// Validated wait policy, built once per wait invocation.
///
/// `accepted_states` is never empty: a missing or empty
/// `continue_on_state` list normalizes to `{"finished"}`. An empty set
/// would make every terminal state fail, which is never what a caller
/// means.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaitPolicy {
    pub disabled: bool,
    pub accepted_states: BTreeSet<String>,
    pub continue_on_timeout: bool,
}

impl WaitPolicy {
    pub fn from_config(config: Option<WaitConfig>) -> Self {
        let config = config.unwrap_or_default();
        let mut accepted_states: BTreeSet<String> =
            config.continue_on_state.into_iter().collect();
        if accepted_states.is_empty() {
            accepted_states.insert(STATE_FINISHED.to_string());
        }
        Self {
            disabled: config.disabled,
            accepted_states,
            continue_on_timeout: config.continue_on_timeout,
        }
    }

    pub fn accepts(&self, state: &str) -> bool {
        self.accepted_states.contains(state)
    }

    /// Accepted states joined for error messages, in sorted order.
    pub fn expected_list(&self) -> String {
        self.accepted_states
            .iter()
            .cloned()
            .collect::<Vec<_>>()
            .join(", ")
    }
}
