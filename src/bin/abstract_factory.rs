//! Abstract-factory demo: the discriminator selects a whole meal family,
//! and the family hands out a matched set of same-flavor items.

use kitchen_core::{ConsolePublisher, KitchenError, services::OrderService};
use std::io;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("You are going to create objects in run time:");
    println!("Enter 1 for NonVeg, 2 for Veg");

    let service = OrderService::new(ConsolePublisher::default());
    match read_selection().and_then(|n| service.order_family_meal(n)) {
        Ok(ticket) => {
            tracing::debug!(order = %ticket.id(), "family meal completed");
        }
        Err(error) => {
            tracing::debug!(%error, "no object created");
            println!("Invalid input");
        }
    }
}

fn read_selection() -> Result<i32, KitchenError> {
    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    input
        .trim()
        .parse()
        .map_err(|_| KitchenError::validation("selection must be an integer"))
}
