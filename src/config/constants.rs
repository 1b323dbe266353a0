//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 3000;

// =============================================================================
// Database
// =============================================================================

/// Default database connection URL (process-lifetime in-memory SQLite)
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Load fixture data before the server starts accepting requests
pub const DEFAULT_SEED_ON_START: bool = true;

// =============================================================================
// Wire formats
// =============================================================================

/// Date format accepted on input for order dates (month/day/year)
pub const INPUT_DATE_FORMAT: &str = "%m/%d/%Y";

// =============================================================================
// Entity names (used in messages)
// =============================================================================

pub const ENTITY_USER: &str = "User";

pub const ENTITY_ORDER: &str = "Order";

pub const ENTITY_OFFER: &str = "Offer";
