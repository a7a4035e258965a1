//! HTTP surface of the price service.
//!
//! | Route          | Method | Handler               |
//! |----------------|--------|-----------------------|
//! | `/`            | GET    | [`routes::home`]      |
//! | `/api/predict` | POST   | [`routes::predict`]   |
//! | `/api/model`   | GET    | [`routes::model_info`]|
//! | `/metrics`     | GET    | [`routes::metrics`]   |

pub mod responses;
pub mod routes;

use crate::application::pricing::PricingService;
use crate::config::StatusCodePolicy;
use actix_cors::Cors;
use actix_web::web;

/// Per-server request handling knobs.
#[derive(Debug, Clone, Copy)]
pub struct HttpSettings {
    pub policy: StatusCodePolicy,
    /// Largest accepted `/api/predict` body, in bytes
    pub payload_limit: usize,
}

/// Shared handler state, cloned into every worker.
#[derive(Clone)]
pub struct HttpState {
    service: web::Data<PricingService>,
    settings: web::Data<HttpSettings>,
}

impl HttpState {
    pub fn new(service: PricingService, policy: StatusCodePolicy, payload_limit: usize) -> Self {
        Self {
            service: web::Data::new(service),
            settings: web::Data::new(HttpSettings {
                policy,
                payload_limit,
            }),
        }
    }

    /// Registers app data and every route on `cfg`.
    pub fn configure(&self, cfg: &mut web::ServiceConfig) {
        cfg.app_data(self.service.clone())
            .app_data(self.settings.clone())
            .service(routes::home)
            .service(routes::predict)
            .service(routes::model_info)
            .service(routes::metrics);
    }
}

/// Cross-origin requests are accepted from anywhere.
pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allow_any_method()
        .allow_any_header()
}
