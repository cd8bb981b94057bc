use serde::Serialize;
use serde_json::Value;
use log::{debug, trace, error};

// ===== Request Types =====

#[derive(Debug, Clone, Serialize)]
pub struct Part
{   pub text: String
}

#[derive(Debug, Clone, Serialize)]
pub struct Content
{   pub parts: Vec<Part>
}

#[derive(Debug, Clone, Serialize)]
pub struct GenerateContentRequest
{   pub contents: Vec<Content>
}

impl GenerateContentRequest
{   /// Single-turn request carrying one text part
    pub fn from_text(text: String) -> Self
    {   GenerateContentRequest
        {   contents: vec![
              Content
              {   parts: vec![Part { text }]
              }
            ]
        }
    }
}

// ===== Response Shape =====
// The success body is walked loosely: a field of the wrong type
// is a shape problem, not a decode failure.

/// Decoded `generateContent` success body
#[derive(Debug, Clone)]
pub struct GenerateContentResponse
{   pub body: Value
}

/// Falsy values: null, false, 0, NaN and ""
fn is_truthy(value: &Value) -> bool
{   match value
    {   Value::Null => false
      , Value::Bool(b) => *b
      , Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0)
      , Value::String(s) => !s.is_empty()
      , Value::Array(_) | Value::Object(_) => true
    }
}

/// Text form of a block reason; strings stay bare
fn reason_text(value: &Value) -> String
{   match value
    {   Value::String(s) => s.clone()
      , other => other.to_string()
    }
}

impl GenerateContentResponse
{   pub fn new(body: Value) -> Self
    {   GenerateContentResponse { body }
    }

    /// `content` of the first candidate, when there is one
    fn first_content(&self) -> Option<&Value>
    {   self.body.get("candidates")
          .and_then(Value::as_array)
          .and_then(|c| c.first())
          .and_then(|c| c.get("content"))
          .filter(|c| is_truthy(c))
    }

    fn block_reason(&self) -> Option<&Value>
    {   self.body.get("promptFeedback")
          .filter(|f| is_truthy(f))
          .and_then(|f| f.get("blockReason"))
          .filter(|r| is_truthy(r))
    }

    /// Text of the first candidate, or why there is none
    pub fn first_text(&self)
      -> Result<String, crate::error::Error>
    {   if self.body.is_null()
        {   error!("Response body is null");
            return Err(crate::error::Error::ParseError(
              "response body is null".to_string()
            ));
        }

        if let Some(content) = self.first_content()
        {   return content.get("parts")
              .and_then(Value::as_array)
              .and_then(|p| p.first())
              .and_then(|p| p.get("text"))
              .and_then(Value::as_str)
              .map(str::to_string)
              .ok_or_else(|| {
                error!("First candidate has no text part");
                crate::error::Error::ParseError(
                  "candidate content has no text part".to_string()
                )
              });
        }

        if let Some(reason) = self.block_reason()
        {   let reason = reason_text(reason);
            debug!("Prompt blocked: {}", reason);
            return Err(crate::error::Error::SafetyBlock(reason));
        }

        error!("Response has neither candidates nor block reason");
        Err(crate::error::Error::InvalidResponseStructure)
    }
}

// ===== Gemini Client =====

/// Client for the `generateContent` endpoint
#[derive(Debug, Clone)]
pub struct GeminiClient
{   http_client: reqwest::Client
  , api_base: String
  , model: String
}

impl GeminiClient
{   pub fn new(api_base: String, model: String) -> Self
    {   debug!("Creating GeminiClient for model: {}", model);
        GeminiClient
        {   http_client: reqwest::Client::new()
          , api_base: api_base.trim_end_matches('/').to_string()
          , model
        }
    }

    pub fn model(&self) -> &str
    {   &self.model
    }

    fn endpoint(&self) -> String
    {   format!(
          "{}/models/{}:generateContent",
          self.api_base, self.model
        )
    }

    /// Send one prompt, return the first candidate's text.
    /// Makes exactly one request; never retries.
    pub async fn generate_content(
      &self
    , api_key: &str
    , prompt: &str
    ) -> Result<String, crate::error::Error>
    {   debug!("Handling generate_content for: {}", self.model);

        let request
          = GenerateContentRequest::from_text(prompt.to_string());
        trace!("Gemini request: {:?}", request);

        let response = self.http_client
          .post(self.endpoint())
          .query(&[("key", api_key)])
          .header("Content-Type", "application/json")
          .json(&request)
          .send()
          .await
          .map_err(|e| {
            error!("HTTP error: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let status = response.status();
        trace!("Gemini response status: {}", status);

        if !status.is_success()
        {   let error_text = response.text().await
              .map_err(|e| {
                error!("Failed to read error body: {}", e);
                crate::error::Error::HttpError(e.to_string())
              })?;
            error!("Google AI API Error: {}", error_text);
            return Err(crate::error::Error::UpstreamStatus
            {   status: status.as_u16()
              , body: error_text
            });
        }

        let body = response.bytes().await
          .map_err(|e| {
            error!("Failed to read response body: {}", e);
            crate::error::Error::HttpError(e.to_string())
          })?;

        let parsed: Value
          = serde_json::from_slice(&body).map_err(|e| {
            error!("Parse error: {}", e);
            crate::error::Error::ParseError(e.to_string())
          })?;

        GenerateContentResponse::new(parsed).first_text()
    }
}
