use serde::{Deserialize, Serialize};

/// Domain events emitted while an order is being prepared.
///
/// Preparation notices are distinct from ready notices: an item is
/// announced once when its construction starts and once when its status
/// is reported.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub enum KitchenEvent {
    PreparationStarted {
        item: String,
    },

    ItemReady {
        item: String,
        status: String,
    },

    OrderRejected {
        discriminator: i32,
    },
}

impl KitchenEvent {
    /// Human-readable line for console publishers.
    pub fn message(&self) -> String {
        match self {
            Self::PreparationStarted { item } => format!("{} getting ready", item),
            Self::ItemReady { status, .. } => status.clone(),
            Self::OrderRejected { .. } => "Invalid input, no object created".to_string(),
        }
    }
}
