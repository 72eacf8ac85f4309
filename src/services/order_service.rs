use crate::{
    Food, KitchenError, KitchenEvent, OrderTicket, factories::FoodFactory,
    factories::select_family, ports::EventPublisher,
};

/// Orchestrates one order: resolve the discriminator, create the
/// product(s), publish the preparation and ready events, and hand back
/// a ticket with the status lines in creation order.
pub struct OrderService<P>
where
    P: EventPublisher,
{
    publisher: P,
}

impl<P> OrderService<P>
where
    P: EventPublisher,
{
    pub fn new(publisher: P) -> Self {
        Self { publisher }
    }

    pub fn publisher(&self) -> &P {
        &self.publisher
    }

    /// Orders one menu item by discriminator.
    ///
    /// An unmapped discriminator creates nothing and is reported as
    /// `InvalidSelection`.
    pub fn order_single(&self, discriminator: i32) -> Result<OrderTicket, KitchenError> {
        let food = FoodFactory::create(discriminator)
            .ok_or_else(|| self.reject(discriminator))?;

        let mut ticket = OrderTicket::new();
        self.serve(food.as_ref(), &mut ticket);
        Ok(ticket)
    }

    /// Orders the full matched set of the family selected by
    /// `discriminator`: one pizza, then one burger, same flavor.
    pub fn order_family_meal(&self, discriminator: i32) -> Result<OrderTicket, KitchenError> {
        let family = select_family(discriminator)
            .ok_or_else(|| self.reject(discriminator))?;

        let mut ticket = OrderTicket::new();
        self.serve(&family.create_pizza(), &mut ticket);
        self.serve(&family.create_burger(), &mut ticket);
        Ok(ticket)
    }

    fn serve(&self, food: &dyn Food, ticket: &mut OrderTicket) {
        self.publisher.publish(KitchenEvent::PreparationStarted {
            item: food.name(),
        });

        let status = food.status();
        self.publisher.publish(KitchenEvent::ItemReady {
            item: food.name(),
            status: status.clone(),
        });
        ticket.add_line(status);
    }

    fn reject(&self, discriminator: i32) -> KitchenError {
        self.publisher
            .publish(KitchenEvent::OrderRejected { discriminator });
        KitchenError::InvalidSelection(discriminator)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::MemoryPublisher;

    fn service() -> OrderService<MemoryPublisher> {
        OrderService::new(MemoryPublisher::new())
    }

    #[test]
    fn test_single_order_produces_one_status_line() {
        let service = service();
        let ticket = service.order_single(1).unwrap();
        assert_eq!(ticket.lines(), ["Pizza ready..."]);

        let ticket = service.order_single(2).unwrap();
        assert_eq!(ticket.lines(), ["Burger ready..."]);
    }

    #[test]
    fn test_family_order_keeps_pizza_before_burger() {
        let service = service();
        let ticket = service.order_family_meal(1).unwrap();
        assert_eq!(
            ticket.lines(),
            ["Non Veg Pizza ready...", "Non Veg Burger ready..."]
        );

        let ticket = service.order_family_meal(2).unwrap();
        assert_eq!(
            ticket.lines(),
            ["Veg Pizza ready...", "Veg Burger ready..."]
        );
    }

    #[test]
    fn test_invalid_selection_creates_nothing() {
        let service = service();
        let result = service.order_single(3);
        assert!(matches!(result, Err(KitchenError::InvalidSelection(3))));

        let result = service.order_family_meal(0);
        assert!(matches!(result, Err(KitchenError::InvalidSelection(0))));

        let events = service.publisher().events();
        assert_eq!(events.len(), 2);
        assert!(events
            .iter()
            .all(|e| matches!(e, KitchenEvent::OrderRejected { .. })));
    }

    #[test]
    fn test_preparation_precedes_ready_for_each_item() {
        let service = service();
        service.order_family_meal(2).unwrap();

        let events = service.publisher().events();
        let expected = [
            KitchenEvent::PreparationStarted {
                item: "Veg Pizza".to_string(),
            },
            KitchenEvent::ItemReady {
                item: "Veg Pizza".to_string(),
                status: "Veg Pizza ready...".to_string(),
            },
            KitchenEvent::PreparationStarted {
                item: "Veg Burger".to_string(),
            },
            KitchenEvent::ItemReady {
                item: "Veg Burger".to_string(),
                status: "Veg Burger ready...".to_string(),
            },
        ];
        assert_eq!(events, expected);
    }
}
