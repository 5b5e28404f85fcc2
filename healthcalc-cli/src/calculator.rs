use async_trait::async_trait;
use healthcalc_client::Client;
use healthcalc_engine::{scale_position, Calculate};
use healthcalc_model::bmi::{BmiReport, BmiRequest};
use healthcalc_model::body_fat::{BodyFatRequest, BodyFatResult};
use log::debug;

use crate::Error;

#[mockall::automock]
#[async_trait]
pub trait Calculator: Send + Sync {
    async fn bmi(&self, request: &BmiRequest) -> Result<BmiReport, Error>;
    async fn body_fat(&self, request: &BodyFatRequest) -> Result<BodyFatResult, Error>;
}

/// Computes in-process with the engine.
pub struct LocalCalculator;

#[async_trait]
impl Calculator for LocalCalculator {
    async fn bmi(&self, request: &BmiRequest) -> Result<BmiReport, Error> {
        let result = request.calculate()?;
        Ok(BmiReport::new(result, scale_position(result.value)))
    }

    async fn body_fat(&self, request: &BodyFatRequest) -> Result<BodyFatResult, Error> {
        Ok(request.calculate()?)
    }
}

/// Delegates to a running API server.
pub struct RemoteCalculator {
    client: Box<dyn Client>,
}

impl RemoteCalculator {
    pub fn new(client: Box<dyn Client>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Calculator for RemoteCalculator {
    async fn bmi(&self, request: &BmiRequest) -> Result<BmiReport, Error> {
        debug!("Sending {:?}", request);
        Ok(self.client.post_bmi(request).await?)
    }

    async fn body_fat(&self, request: &BodyFatRequest) -> Result<BodyFatResult, Error> {
        debug!("Sending {:?}", request);
        Ok(self.client.post_body_fat(request).await?)
    }
}
