//! HTTP request handlers, one module per resource.

pub mod offer_handler;
pub mod order_handler;
pub mod user_handler;

pub use offer_handler::offer_routes;
pub use order_handler::order_routes;
pub use user_handler::user_routes;
