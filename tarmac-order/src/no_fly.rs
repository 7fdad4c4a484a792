use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Names barred from booking, whether as the ordering customer or as a
/// named passenger. Passed explicitly to the booking path instead of
/// living in ambient process state.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NoFlyList {
    names: HashSet<String>,
}

impl NoFlyList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_names(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn add(&mut self, name: impl Into<String>) {
        self.names.insert(name.into());
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}
