pub mod config;
mod error;

use actix_web::{get, post, web, Responder};
use healthcalc_engine::{scale_position, Calculate};
use healthcalc_model::bmi::{BmiReport, BmiRequest};
use healthcalc_model::body_fat::{BodyFatRequest, BodyFatResult};
use log::{info, warn};
use serde::Serialize;

pub use error::ApiError;

#[derive(Serialize)]
struct Status {
    status: &'static str,
}

#[get("/")]
async fn index() -> impl Responder {
    web::Json(Status { status: "ok" })
}

#[post("/bmi")]
async fn bmi(request: web::Json<BmiRequest>) -> Result<web::Json<BmiReport>, ApiError> {
    let result = request.calculate().inspect_err(|e| warn!("Rejected BMI request: {}", e))?;
    info!("Computed BMI {} ({})", result.value, result.category);
    Ok(web::Json(BmiReport::new(result, scale_position(result.value))))
}

#[post("/body-fat")]
async fn body_fat(
    request: web::Json<BodyFatRequest>,
) -> Result<web::Json<BodyFatResult>, ApiError> {
    let result = request
        .calculate()
        .inspect_err(|e| warn!("Rejected body fat request: {}", e))?;
    info!("Computed body fat {}% for {}", result.value, result.gender);
    Ok(web::Json(result))
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(bmi).service(body_fat);
}
