use serde::{Deserialize, Serialize};
use std::fmt;

/// Flavor tag shared by every item of a meal family.
///
/// This is a pure value object with no business logic.
/// Family consistency is enforced by the meal factories.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flavor {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non_veg")]
    NonVeg,
}

impl fmt::Display for Flavor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Veg => write!(f, "Veg"),
            Self::NonVeg => write!(f, "Non Veg"),
        }
    }
}
