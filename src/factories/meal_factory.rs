use crate::{FamilySelection, Flavor, FlavoredBurger, FlavoredPizza};

/// Factory for one family of matched meal items.
///
/// Both creation methods derive their product from the single `flavor`
/// the family declares, so a family cannot hand out a pizza of one
/// flavor and a burger of another. The trade-off is the usual one for
/// this shape: a new product category means touching this trait and
/// every family, while a new family is one more implementation of it.
pub trait MealFactory {
    /// The flavor every item of this family carries.
    fn flavor(&self) -> Flavor;

    fn create_pizza(&self) -> FlavoredPizza {
        FlavoredPizza::new(self.flavor())
    }

    fn create_burger(&self) -> FlavoredBurger {
        FlavoredBurger::new(self.flavor())
    }
}

/// Family producing only non-vegetarian items.
#[derive(Debug, Clone, Copy)]
pub struct NonVegMeals;

impl MealFactory for NonVegMeals {
    fn flavor(&self) -> Flavor {
        Flavor::NonVeg
    }
}

/// Family producing only vegetarian items.
#[derive(Debug, Clone, Copy)]
pub struct VegMeals;

impl MealFactory for VegMeals {
    fn flavor(&self) -> Flavor {
        Flavor::Veg
    }
}

/// Selects the meal family for a runtime discriminator.
///
/// # Arguments
/// * `discriminator` - `1` for the non-veg family, `2` for the veg family
///
/// # Returns
/// * `Some(factory)` - Factory producing the matched set for that family
/// * `None` - The discriminator matches no family
pub fn select_family(discriminator: i32) -> Option<Box<dyn MealFactory>> {
    let selection = FamilySelection::from_discriminator(discriminator)?;
    tracing::debug!(flavor = %selection.flavor(), "selecting meal family");

    Some(match selection {
        FamilySelection::NonVeg => Box::new(NonVegMeals),
        FamilySelection::Veg => Box::new(VegMeals),
    })
}
