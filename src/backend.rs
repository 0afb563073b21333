//! Blocking client for the art backend.
//!
//! Every call is a single POST with no retries and no client timeout. Any
//! non-2xx status, non-JSON content type or unexpected body shape is an
//! error; the backend's own error payloads are not interpreted.

use log::{debug, info};
use reqwest::blocking::{Client, Response, multipart};
use reqwest::header::CONTENT_TYPE;
use serde::Serialize;
use serde_json::Value;

use crate::config::BackendConfig;
use crate::model::{ImageAnalysis, QuizContext, QuizQuestion};

const CLASSIFY_PATH: &str = "/classify-image";
const CRITIQUE_PATH: &str = "/critique-canvas";
const BODY_EXCERPT_CHARS: usize = 200;

#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("backend returned HTTP {status}{}", fmt_excerpt(.body))]
    Status { status: u16, body: String },

    #[error("expected a JSON response but got {0:?}")]
    ContentType(Option<String>),

    #[error("unexpected response: {0}")]
    Malformed(String),

    #[error("could not read image: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode drawing: {0}")]
    Encode(#[from] image::ImageError),
}

fn fmt_excerpt(body: &str) -> String {
    if body.is_empty() {
        String::new()
    } else {
        format!(". Body: {body}")
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct QuizRequest<'a> {
    image_style: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CritiqueRequest<'a> {
    image_data: &'a str,
}

#[derive(Clone, Debug)]
pub struct BackendClient {
    config: BackendConfig,
    http: Client,
}

impl BackendClient {
    pub fn new(config: BackendConfig) -> Self {
        Self {
            config,
            http: Client::new(),
        }
    }

    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// Uploads an image as multipart field `image`.
    pub fn classify_image(&self, file_name: &str, bytes: Vec<u8>) -> Result<ImageAnalysis, BackendError> {
        let url = self.config.endpoint(CLASSIFY_PATH);
        debug!("classifying {file_name} ({} bytes) via {url}", bytes.len());

        let part = multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = multipart::Form::new().part("image", part);
        let response = self.http.post(&url).multipart(form).send()?;
        let analysis = parse_analysis(read_json(response)?)?;

        info!("classified {file_name} as {:?}", analysis.image_style);
        Ok(analysis)
    }

    /// Asks for a quiz about `style`; the practice flow passes the category name.
    pub fn generate_quiz(&self, context: QuizContext, style: &str) -> Result<Vec<QuizQuestion>, BackendError> {
        let url = self.config.endpoint(context.path());
        debug!("generating {context} quiz for {style:?} via {url}");

        let response = self
            .http
            .post(&url)
            .json(&QuizRequest { image_style: style })
            .send()?;
        let questions = parse_questions(read_json(response)?)?;

        info!("received {} {context} questions for {style:?}", questions.len());
        Ok(questions)
    }

    /// Posts a `data:image/png;base64,...` URL and returns the critique text.
    pub fn critique_canvas(&self, image_data: &str) -> Result<String, BackendError> {
        let url = self.config.endpoint(CRITIQUE_PATH);
        debug!("requesting critique ({} chars of image data) via {url}", image_data.len());

        let response = self
            .http
            .post(&url)
            .json(&CritiqueRequest { image_data })
            .send()?;
        parse_critique(read_json(response)?)
    }
}

fn read_json(response: Response) -> Result<Value, BackendError> {
    let status = response.status().as_u16();
    let content_type = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.text()?;
    decode_body(status, content_type.as_deref(), &body)
}

/// Checks status and content type, then parses the body as JSON.
pub fn decode_body(status: u16, content_type: Option<&str>, body: &str) -> Result<Value, BackendError> {
    if !(200..300).contains(&status) {
        return Err(BackendError::Status {
            status,
            body: body.trim().chars().take(BODY_EXCERPT_CHARS).collect(),
        });
    }
    if !content_type.is_some_and(|ct| ct.contains("application/json")) {
        return Err(BackendError::ContentType(content_type.map(str::to_string)));
    }
    serde_json::from_str(body).map_err(|e| BackendError::Malformed(format!("invalid JSON: {e}")))
}

pub fn parse_analysis(value: Value) -> Result<ImageAnalysis, BackendError> {
    if !value.is_object() {
        return Err(BackendError::Malformed("classification is not an object".into()));
    }
    serde_json::from_value(value).map_err(|e| BackendError::Malformed(e.to_string()))
}

/// Extracts a non-empty, well-formed `questions` array.
pub fn parse_questions(mut value: Value) -> Result<Vec<QuizQuestion>, BackendError> {
    let raw = match value.get_mut("questions").map(Value::take) {
        Some(v @ Value::Array(_)) => v,
        Some(_) => return Err(BackendError::Malformed("`questions` is not an array".into())),
        None => return Err(BackendError::Malformed("missing `questions`".into())),
    };

    let questions: Vec<QuizQuestion> =
        serde_json::from_value(raw).map_err(|e| BackendError::Malformed(e.to_string()))?;

    if questions.is_empty() {
        return Err(BackendError::Malformed("empty question list".into()));
    }
    if let Some((i, _)) = questions.iter().enumerate().find(|(_, q)| !q.is_well_formed()) {
        return Err(BackendError::Malformed(format!(
            "question {} has no option matching its correct answer",
            i + 1
        )));
    }
    Ok(questions)
}

pub fn parse_critique(value: Value) -> Result<String, BackendError> {
    value
        .get("critique")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| BackendError::Malformed("missing `critique`".into()))
}
