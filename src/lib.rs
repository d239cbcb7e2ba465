pub mod catalog;
pub mod chat;
pub mod constants;
pub mod gateway;
pub mod map;
pub mod report;
pub mod resolver;

pub use catalog::{Catalog, CollectionPoint, Coordinate, LitterHotspot};
pub use gateway::{ChatGateway, ChatMessage, GatewayConfig, GatewayError, Role};
pub use map::{MapError, MapRenderer};
pub use resolver::{find_location, nearest_collection_points, NearbyPoint};

/// Installs the `RUST_LOG`-driven subscriber used by both binaries. Logs go to
/// stderr so they never interleave with chat output.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}
