// UI models module
// View modes the engine can lay out

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ViewType {
    #[default]
    Month,
    Week,
}

impl ViewType {
    pub fn label(&self) -> &'static str {
        match self {
            ViewType::Month => "Month",
            ViewType::Week => "Week",
        }
    }
}
