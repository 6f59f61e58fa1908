// Selection policy
// How many days of a grid may be selected at once

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionPolicy {
    /// Zero or one selected day. Clicking the selected day clears it.
    #[default]
    AllowNone,
    /// Once a day is chosen exactly one stays selected. Clicking the selected
    /// day keeps it.
    AlwaysOne,
}

impl SelectionPolicy {
    /// Whether clicking the already selected day clears the selection.
    pub fn toggles_off(self) -> bool {
        matches!(self, SelectionPolicy::AllowNone)
    }

    /// Whether a freshly built view starts with today selected.
    pub fn selects_today_initially(self) -> bool {
        matches!(self, SelectionPolicy::AlwaysOne)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SelectionPolicy::AllowNone => "allow_none",
            SelectionPolicy::AlwaysOne => "always_one",
        }
    }
}
