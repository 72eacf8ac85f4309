use crate::{KitchenConfig, KitchenEvent};
use std::sync::Mutex;

/// Outbound seam for kitchen events.
///
/// Construction notices reach the user through this port rather than
/// through product constructors, so products stay pure values.
pub trait EventPublisher: Send + Sync {
    fn publish(&self, event: KitchenEvent);
}

/// Publisher for the console programs.
///
/// Prints preparation and ready notices to standard output in publish
/// order; rejections are left to the driver and only traced here.
pub struct ConsolePublisher {
    config: KitchenConfig,
}

impl ConsolePublisher {
    pub fn new(config: KitchenConfig) -> Self {
        Self { config }
    }
}

impl Default for ConsolePublisher {
    fn default() -> Self {
        Self::new(KitchenConfig::default())
    }
}

impl EventPublisher for ConsolePublisher {
    fn publish(&self, event: KitchenEvent) {
        match &event {
            KitchenEvent::PreparationStarted { .. } => {
                if self.config.announce_preparation {
                    println!("{}", event.message());
                }
            }
            KitchenEvent::ItemReady { item, .. } => {
                tracing::debug!(item = %item, "item ready");
                println!("{}", event.message());
            }
            KitchenEvent::OrderRejected { discriminator } => {
                tracing::debug!(discriminator, "order rejected");
            }
        }
    }
}

/// In-memory publisher that records every event, in publish order.
pub struct MemoryPublisher {
    events: Mutex<Vec<KitchenEvent>>,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self {
            events: Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of the event history.
    pub fn events(&self) -> Vec<KitchenEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }
}

impl Default for MemoryPublisher {
    fn default() -> Self {
        Self::new()
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: KitchenEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_publisher_keeps_order() {
        let publisher = MemoryPublisher::new();
        publisher.publish(KitchenEvent::PreparationStarted {
            item: "Pizza".to_string(),
        });
        publisher.publish(KitchenEvent::ItemReady {
            item: "Pizza".to_string(),
            status: "Pizza ready...".to_string(),
        });

        let events = publisher.events();
        assert_eq!(events.len(), 2);
        assert!(matches!(events[0], KitchenEvent::PreparationStarted { .. }));
        assert!(matches!(events[1], KitchenEvent::ItemReady { .. }));
    }
}
