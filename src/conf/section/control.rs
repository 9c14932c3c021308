use serde::Deserialize;

const DEFAULT_MAX_HISTORY: usize = 100;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct ControlConfigSection {
    pub max_history: Option<usize>,
}

impl ControlConfigSection {
    /// Number of action lines kept in the line editor's history.
    pub fn history_size(&self) -> usize {
        self.max_history.unwrap_or(DEFAULT_MAX_HISTORY)
    }
}
