//! Factory-method demo: one discriminator in, one menu item out, without
//! the caller ever naming a concrete product type.

use kitchen_core::{ConsolePublisher, KitchenError, services::OrderService};
use std::io;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    println!("You are going to create objects in run time:");
    println!("Enter 1 for creating Pizza class 2 for creating Burger class");

    let service = OrderService::new(ConsolePublisher::default());
    match read_selection().and_then(|n| service.order_single(n)) {
        Ok(ticket) => {
            tracing::debug!(order = %ticket.id(), "order completed");
        }
        Err(error) => {
            tracing::debug!(%error, "no object created");
            println!("Invalid input, no object created");
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
