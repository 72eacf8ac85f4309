use std::sync::OnceLock;
use std::sync::atomic::{AtomicUsize, Ordering};

static INSTANCE: OnceLock<KitchenRegistry> = OnceLock::new();
static CONSTRUCTIONS: AtomicUsize = AtomicUsize::new(0);

/// Process-wide registry holding the kitchen's shared state.
///
/// Exactly one instance is ever constructed, lazily on first access; the
/// `OnceLock` makes that hold even when several threads race to be first.
/// The constructor is private and the type is neither `Clone` nor `Copy`,
/// so a second logical instance cannot be produced — callers only ever
/// hold the shared `'static` reference.
#[derive(Debug)]
pub struct KitchenRegistry {
    name: String,
    opened_at: chrono::DateTime<chrono::Utc>,
}

impl KitchenRegistry {
    fn new() -> Self {
        CONSTRUCTIONS.fetch_add(1, Ordering::SeqCst);
        tracing::info!("kitchen registry constructed");

        Self {
            name: crate::KitchenConfig::default().kitchen_name,
            opened_at: chrono::Utc::now(),
        }
    }

    /// Returns the sole registry instance, constructing it on first call.
    pub fn instance() -> &'static KitchenRegistry {
        INSTANCE.get_or_init(KitchenRegistry::new)
    }

    /// How many times the registry has been constructed in this process.
    /// Stays at 1 once `instance` has been called, no matter how often.
    pub fn constructions() -> usize {
        CONSTRUCTIONS.load(Ordering::SeqCst)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn opened_at(&self) -> chrono::DateTime<chrono::Utc> {
        self.opened_at
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instance_identity_is_stable() {
        let first = KitchenRegistry::instance();
        for _ in 0..10 {
            assert!(std::ptr::eq(first, KitchenRegistry::instance()));
        }
    }

    #[test]
    fn test_constructed_exactly_once() {
        let _ = KitchenRegistry::instance();
        let _ = KitchenRegistry::instance();
        assert_eq!(KitchenRegistry::constructions(), 1);
    }

    #[test]
    fn test_concurrent_first_access_constructs_once() {
        let handles: Vec<_> = (0..8)
            .map(|_| std::thread::spawn(KitchenRegistry::instance))
            .collect();

        let first = KitchenRegistry::instance();
        for handle in handles {
            assert!(std::ptr::eq(first, handle.join().unwrap()));
        }
        assert_eq!(KitchenRegistry::constructions(), 1);
    }
}
