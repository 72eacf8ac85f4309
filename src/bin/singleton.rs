//! Singleton demo: every request for the process-wide registry yields the
//! same handle, and construction happens exactly once.

use kitchen_core::KitchenRegistry;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let first = KitchenRegistry::instance();
    println!("{:p}", first);

    let second = KitchenRegistry::instance();
    println!("{:p}", second);

    tracing::debug!(
        same_handle = std::ptr::eq(first, second),
        constructions = KitchenRegistry::constructions(),
        "registry identity check"
    );
}
