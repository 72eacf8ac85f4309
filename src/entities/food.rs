use crate::Flavor;

/// Capability shared by everything the kitchen can produce.
///
/// Products are immutable values: `status` reports the same line no matter
/// how many times it is called, and nothing mutates after construction.
pub trait Food {
    /// Display name used in preparation notices.
    fn name(&self) -> String;

    /// Ready notice for this product.
    fn status(&self) -> String {
        format!("{} ready...", self.name())
    }
}

/// Plain pizza produced by the single-item factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pizza;

impl Food for Pizza {
    fn name(&self) -> String {
        "Pizza".to_string()
    }
}

/// Plain burger produced by the single-item factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Burger;

impl Food for Burger {
    fn name(&self) -> String {
        "Burger".to_string()
    }
}

/// Pizza carrying its family's flavor tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlavoredPizza {
    flavor: Flavor,
}

impl FlavoredPizza {
    pub fn new(flavor: Flavor) -> Self {
        Self { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }
}

impl Food for FlavoredPizza {
    fn name(&self) -> String {
        format!("{} Pizza", self.flavor)
    }
}

/// Burger carrying its family's flavor tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlavoredBurger {
    flavor: Flavor,
}

impl FlavoredBurger {
    pub fn new(flavor: Flavor) -> Self {
        Self { flavor }
    }

    pub fn flavor(&self) -> Flavor {
        self.flavor
    }
}

impl Food for FlavoredBurger {
    fn name(&self) -> String {
        format!("{} Burger", self.flavor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_statuses() {
        assert_eq!(Pizza.status(), "Pizza ready...");
        assert_eq!(Burger.status(), "Burger ready...");
    }

    #[test]
    fn test_flavored_statuses() {
        assert_eq!(
            FlavoredPizza::new(Flavor::NonVeg).status(),
            "Non Veg Pizza ready..."
        );
        assert_eq!(
            FlavoredBurger::new(Flavor::Veg).status(),
            "Veg Burger ready..."
        );
    }

    #[test]
    fn test_status_is_idempotent() {
        let pizza = FlavoredPizza::new(Flavor::Veg);
        let first = pizza.status();
        assert_eq!(pizza.status(), first);
        assert_eq!(pizza.status(), first);
    }
}
