use super::HttpSettings;
use super::responses::{ModelInfoResponse, PredictionResponse, Status, response_status};
use crate::application::pricing::PricingService;
use crate::domain::errors::PredictionError;
use crate::domain::pricing::PriceQuote;
use actix_web::{HttpResponse, Responder, get, post, web};
use futures_util::StreamExt;
use tracing::{error, info, info_span};
use uuid::Uuid;

pub const READY_MESSAGE: &str = "Backend AI Ready!";

#[get("/")]
pub async fn home() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(READY_MESSAGE)
}

#[post("/api/predict")]
pub async fn predict(
    service: web::Data<PricingService>,
    settings: web::Data<HttpSettings>,
    payload: web::Payload,
) -> HttpResponse {
    let request_id = Uuid::new_v4();

    let result = match read_body(payload, settings.payload_limit).await {
        Ok(body) => run_prediction(service.get_ref().clone(), body, request_id).await,
        Err(e) => service.reject(e),
    };

    if let Ok(quote) = &result {
        info!(%request_id, estimate = quote.estimate, "Prediction served");
    }

    HttpResponse::build(response_status(settings.policy, &result))
        .json(PredictionResponse::from_result(&result))
}

/// Collects the request body, refusing it once it grows past `limit` bytes.
async fn read_body(mut payload: web::Payload, limit: usize) -> Result<web::Bytes, PredictionError> {
    let mut body = web::BytesMut::new();
    while let Some(chunk) = payload.next().await {
        let chunk = chunk.map_err(|e| PredictionError::MalformedBody {
            reason: e.to_string(),
        })?;
        if body.len() + chunk.len() > limit {
            return Err(PredictionError::BodyTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }
    Ok(body.freeze())
}

async fn run_prediction(
    service: PricingService,
    body: web::Bytes,
    request_id: Uuid,
) -> Result<PriceQuote, PredictionError> {
    let span = info_span!("predict", %request_id);
    match web::block(move || span.in_scope(|| service.predict(&body))).await {
        Ok(result) => result,
        Err(e) => {
            error!(%request_id, "Blocking prediction task failed: {}", e);
            Err(PredictionError::Inference {
                reason: format!("prediction task aborted: {}", e),
            })
        }
    }
}

#[get("/api/model")]
pub async fn model_info(service: web::Data<PricingService>) -> HttpResponse {
    HttpResponse::Ok().json(ModelInfoResponse {
        status: Status::Sukses,
        model: service.model_info(),
    })
}

#[get("/metrics")]
pub async fn metrics(service: web::Data<PricingService>) -> HttpResponse {
    match service.metrics() {
        Some(metrics) => HttpResponse::Ok()
            .content_type("text/plain; version=0.0.4")
            .body(metrics.render()),
        None => HttpResponse::NotFound().finish(),
    }
}
