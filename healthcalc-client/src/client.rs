use async_trait::async_trait;
use healthcalc_model::bmi::{BmiReport, BmiRequest};
use healthcalc_model::body_fat::{BodyFatRequest, BodyFatResult};
use log::debug;
use serde::{de::DeserializeOwned, Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("server unreachable")]
    CommunicationError,
    #[error("internal server error")]
    InternalServerError,
    #[error("invalid request: {0}")]
    RequestError(String),
    #[error("incorrect server response")]
    ResponseError,
}

pub type Result<T> = std::result::Result<T, Error>;

#[mockall::automock]
#[async_trait]
pub trait Client: Send + Sync {
    async fn post_bmi(&self, request: &BmiRequest) -> Result<BmiReport>;
    async fn post_body_fat(&self, request: &BodyFatRequest) -> Result<BodyFatResult>;
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
}

pub struct ClientImpl {
    url: String,
    client: reqwest::Client,
}

impl ClientImpl {
    fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.url.trim_end_matches('/'), path)
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        debug!("Posting to {}", url);
        let resp = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|_| Error::CommunicationError)?;

        let status = resp.status();
        if status.is_client_error() {
            let message = resp
                .json::<ErrorBody>()
                .await
                .map(|body| body.error)
                .unwrap_or_else(|_| status.to_string());
            Err(Error::RequestError(message))
        } else if status.is_server_error() {
            Err(Error::InternalServerError)
        } else {
            resp.json().await.map_err(|_| Error::ResponseError)
        }
    }
}

pub fn create(url: String) -> impl Client {
    ClientImpl::new(url)
}

#[async_trait]
impl Client for ClientImpl {
    async fn post_bmi(&self, request: &BmiRequest) -> Result<BmiReport> {
        self.post("bmi", request).await
    }

    async fn post_body_fat(&self, request: &BodyFatRequest) -> Result<BodyFatResult> {
        self.post("body-fat", request).await
    }
}
