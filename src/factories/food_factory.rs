use crate::{Burger, Food, MenuSelection, Pizza};

/// Factory for creating single menu items from a runtime discriminator.
///
/// Callers never learn which concrete product was built; they only get
/// the `Food` capability back. An unmapped discriminator yields `None`
/// and nothing is constructed.
#[derive(Debug, Clone)]
pub struct FoodFactory;

impl FoodFactory {
    /// Creates the menu item selected by `discriminator`.
    ///
    /// # Arguments
    /// * `discriminator` - `1` for a pizza, `2` for a burger
    ///
    /// # Returns
    /// * `Some(food)` - Fully constructed product
    /// * `None` - The discriminator matches no menu entry
    pub fn create(discriminator: i32) -> Option<Box<dyn Food>> {
        let selection = MenuSelection::from_discriminator(discriminator)?;
        tracing::debug!(%selection, "creating menu item");

        Some(match selection {
            MenuSelection::Pizza => Box::new(Pizza),
            MenuSelection::Burger => Box::new(Burger),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_pizza() {
        let food = FoodFactory::create(1).unwrap();
        assert_eq!(food.status(), "Pizza ready...");
    }

    #[test]
    fn test_create_burger() {
        let food = FoodFactory::create(2).unwrap();
        assert_eq!(food.status(), "Burger ready...");
    }

    #[test]
    fn test_unknown_discriminator_creates_nothing() {
        assert!(FoodFactory::create(3).is_none());
        assert!(FoodFactory::create(0).is_none());
        assert!(FoodFactory::create(-5).is_none());
    }
}
