use crate::{Flavor, KitchenError};
use std::fmt;

/// Menu entry for the single-item factory.
///
/// The discriminator mapping is exhaustive: adding a variant here forces
/// every match over `MenuSelection` to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuSelection {
    Pizza,
    Burger,
}

impl MenuSelection {
    /// Maps a runtime discriminator to a menu entry.
    ///
    /// Returns `None` for anything outside the menu; callers are expected
    /// to check and branch rather than rely on a panic.
    pub fn from_discriminator(n: i32) -> Option<Self> {
        match n {
            1 => Some(Self::Pizza),
            2 => Some(Self::Burger),
            _ => None,
        }
    }
}

impl fmt::Display for MenuSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pizza => write!(f, "Pizza"),
            Self::Burger => write!(f, "Burger"),
        }
    }
}

impl TryFrom<i32> for MenuSelection {
    type Error = KitchenError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_discriminator(value).ok_or(KitchenError::InvalidSelection(value))
    }
}

/// Meal family choice for the family factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilySelection {
    NonVeg,
    Veg,
}

impl FamilySelection {
    /// Maps a runtime discriminator to a family. `1` is NonVeg, `2` is Veg.
    pub fn from_discriminator(n: i32) -> Option<Self> {
        match n {
            1 => Some(Self::NonVeg),
            2 => Some(Self::Veg),
            _ => None,
        }
    }

    /// Returns the flavor every item of this family carries.
    pub fn flavor(&self) -> Flavor {
        match self {
            Self::NonVeg => Flavor::NonVeg,
            Self::Veg => Flavor::Veg,
        }
    }
}

impl TryFrom<i32> for FamilySelection {
    type Error = KitchenError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::from_discriminator(value).ok_or(KitchenError::InvalidSelection(value))
    }
}
