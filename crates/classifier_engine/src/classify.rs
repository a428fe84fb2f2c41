use std::time::Duration;

use engine_logging::{engine_debug, engine_info};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use url::Url;

use crate::wire::{category_from_body, ClassifyBody};
use crate::{ClassifyError, ClassifyOutput, ClassifyRequest, FailureKind};

pub const DEFAULT_ENDPOINT: &str = "https://zuru.onrender.com/classify";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifySettings {
    pub endpoint: String,
    /// `None` leaves the transport's own behaviour in place.
    pub connect_timeout: Option<Duration>,
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
}

impl Default for ClassifySettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            connect_timeout: None,
            request_timeout: None,
            max_bytes: 1024 * 1024,
        }
    }
}

#[async_trait::async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, request: &ClassifyRequest) -> Result<ClassifyOutput, ClassifyError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestClassifier {
    client: reqwest::Client,
    endpoint: Url,
    max_bytes: u64,
}

impl ReqwestClassifier {
    pub fn new(settings: ClassifySettings) -> Result<Self, ClassifyError> {
        let endpoint = parse_endpoint(&settings.endpoint)?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = settings.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| ClassifyError::new(FailureKind::Network, err.to_string()))?;

        Ok(Self {
            client,
            endpoint,
            max_bytes: settings.max_bytes,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait::async_trait]
impl Classifier for ReqwestClassifier {
    async fn classify(&self, request: &ClassifyRequest) -> Result<ClassifyOutput, ClassifyError> {
        let body = ClassifyBody {
            descripcion: &request.description,
            lista: request.list.as_deref(),
        };
        let payload = serde_json::to_vec(&body)
            .map_err(|err| ClassifyError::new(FailureKind::InvalidBody, err.to_string()))?;

        engine_debug!(
            "POST {} description_len={} list={:?}",
            self.endpoint,
            request.description.len(),
            request.list
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(payload)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClassifyError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.max_bytes {
                return Err(ClassifyError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let bytes = response.bytes().await.map_err(map_reqwest_error)?;
        let byte_len = bytes.len() as u64;
        if byte_len > self.max_bytes {
            return Err(ClassifyError::new(
                FailureKind::TooLarge {
                    max_bytes: self.max_bytes,
                    actual: Some(byte_len),
                },
                "response too large",
            ));
        }

        let category = category_from_body(&bytes)?;
        engine_info!(
            "Classified status={} bytes={} category={:?}",
            status.as_u16(),
            byte_len,
            category
        );

        Ok(ClassifyOutput {
            category,
            status: status.as_u16(),
            byte_len,
        })
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ClassifyError> {
    let url = Url::parse(raw.trim())
        .map_err(|err| ClassifyError::new(FailureKind::InvalidEndpoint, err.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ClassifyError::new(
            FailureKind::InvalidEndpoint,
            format!("unsupported scheme {other}"),
        )),
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ClassifyError {
    if err.is_timeout() {
        return ClassifyError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_decode() {
        return ClassifyError::new(FailureKind::InvalidBody, err.to_string());
    }
    ClassifyError::new(FailureKind::Network, err.to_string())
}
