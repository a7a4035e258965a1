// Request types and price formatting
pub mod types;

// Body coercion and field validation
pub mod validation;

pub use types::{FeatureVector, PriceQuote, round_to_cents};
pub use validation::parse_request;
