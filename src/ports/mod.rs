pub use event_publisher::{ConsolePublisher, EventPublisher, MemoryPublisher};

pub mod event_publisher;
