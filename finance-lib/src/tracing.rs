use tracing::level_filters::LevelFilter;
use tracing_actix_web::{DefaultRootSpanBuilder, TracingLogger};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::util::SubscriberInitExt;

pub fn init_subscriber(level: LevelFilter) {
    registry::Registry::default()
        .with(level)
        .with(tracing_subscriber::fmt::Layer::default())
        .init();
}

/// Wraps every request in a span carrying method, route and status.
pub fn create_middleware() -> TracingLogger<DefaultRootSpanBuilder> {
    TracingLogger::<DefaultRootSpanBuilder>::new()
}
