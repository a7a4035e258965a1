pub mod service;

pub use service::PricingService;
