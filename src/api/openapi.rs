//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::{offer_handler, order_handler, user_handler};
use crate::api::views::{OfferView, OrderView};
use crate::domain::{Offer, Order, User, UserRef};

/// OpenAPI documentation for the Taskboard API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Taskboard API",
        version = "0.1.0",
        description = "Users, orders and offers over a relational store",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::list_users,
        user_handler::create_user,
        user_handler::get_user,
        user_handler::update_user,
        user_handler::delete_user,
        order_handler::list_orders,
        order_handler::create_order,
        order_handler::get_order,
        order_handler::update_order,
        order_handler::delete_order,
        offer_handler::list_offers,
        offer_handler::create_offer,
        offer_handler::get_offer,
        offer_handler::update_offer,
        offer_handler::delete_offer,
    ),
    components(
        schemas(
            User,
            Order,
            Offer,
            UserRef,
            OrderView,
            OfferView,
        )
    ),
    tags(
        (name = "Users", description = "User records"),
        (name = "Orders", description = "Orders placed by customers"),
        (name = "Offers", description = "Executor offers on orders")
    )
)]
pub struct ApiDoc;
