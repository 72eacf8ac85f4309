mod food_factory;
mod meal_factory;

pub use food_factory::FoodFactory;
pub use meal_factory::{MealFactory, NonVegMeals, VegMeals, select_family};
