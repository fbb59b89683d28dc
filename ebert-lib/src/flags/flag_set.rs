use serde::{Deserialize, Serialize};

/// Human-readable findings, grouped by severity. Order within each list is rule order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    pub red_flags: Vec<String>,
    pub warnings: Vec<String>,
    pub positives: Vec<String>,
}

impl Flags {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.red_flags.is_empty() && self.warnings.is_empty() && self.positives.is_empty()
    }

    pub(super) fn red_flag(&mut self, message: String) {
        self.red_flags.push(message);
    }

    pub(super) fn warning(&mut self, message: String) {
        self.warnings.push(message);
    }

    pub(super) fn positive(&mut self, message: String) {
        self.positives.push(message);
    }
}
