use std::fmt;

pub const NO_PROMPT_MESSAGE: &str = "No prompt provided.";

pub const MISSING_API_KEY_MESSAGE: &str
  = "API key is not configured on the server. Please set the \
     GOOGLE_API_KEY environment variable in your Netlify site settings.";

pub const INVALID_STRUCTURE_MESSAGE: &str
  = "Invalid response structure from API.";

pub const INTERNAL_ERROR_MESSAGE: &str
  = "An internal server error occurred.";

/// Every way an idea request can fail.
/// Each variant knows its outward status and message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error
{   /// Inbound method was not POST
    MethodNotAllowed
  , /// Body had no usable prompt
    NoPrompt
  , /// Credential missing from server config
    MissingApiKey
  , /// Upstream answered with a non-success status
    UpstreamStatus
    {   status: u16
      , body: String
    }
  , /// Upstream refused the prompt on policy grounds
    SafetyBlock(String)
  , /// Upstream succeeded but the body had no usable shape
    InvalidResponseStructure
  , /// Network failure talking to upstream
    HttpError(String)
  , /// Upstream body could not be read or decoded
    ParseError(String)
}

impl Error
{   /// HTTP status reported to the caller
    pub fn status(&self) -> u16
    {   match self
        {   Error::MethodNotAllowed => 405
          , Error::NoPrompt => 400
          , Error::MissingApiKey => 500
          , Error::UpstreamStatus { status, .. } => *status
          , Error::SafetyBlock(_) => 400
          , Error::InvalidResponseStructure => 500
          , Error::HttpError(_) => 500
          , Error::ParseError(_) => 500
        }
    }

    /// Message the caller is allowed to see.
    /// Internal failures collapse to one generic line.
    pub fn public_message(&self) -> String
    {   match self
        {   Error::MethodNotAllowed => "Method Not Allowed".to_string()
          , Error::NoPrompt => NO_PROMPT_MESSAGE.to_string()
          , Error::MissingApiKey => MISSING_API_KEY_MESSAGE.to_string()
          , Error::UpstreamStatus { body, .. } => {
              format!("Google AI API error: {}", body)
            }
          , Error::SafetyBlock(reason) => {
              format!("Request blocked by safety settings: {}", reason)
            }
          , Error::InvalidResponseStructure => {
              INVALID_STRUCTURE_MESSAGE.to_string()
            }
          , Error::HttpError(_) | Error::ParseError(_) => {
              INTERNAL_ERROR_MESSAGE.to_string()
            }
        }
    }

    /// True for failures whose detail stays server-side
    pub fn is_internal(&self) -> bool
    {   matches!(self, Error::HttpError(_) | Error::ParseError(_))
    }
}

impl fmt::Display for Error
{   fn fmt(&self, f: &mut fmt::Formatter<'_>)
      -> fmt::Result
    {   match self
        {   Error::MethodNotAllowed => {
              write!(f, "Method not allowed")
            }
          , Error::NoPrompt => {
              write!(f, "No prompt in request body")
            }
          , Error::MissingApiKey => {
              write!(f, "Missing API key: GOOGLE_API_KEY")
            }
          , Error::UpstreamStatus { status, body } => {
              write!(f, "Upstream error ({}): {}", status, body)
            }
          , Error::SafetyBlock(reason) => {
              write!(f, "Prompt blocked: {}", reason)
            }
          , Error::InvalidResponseStructure => {
              write!(f, "Upstream response had no candidates")
            }
          , Error::HttpError(msg) => {
              write!(f, "HTTP error: {}", msg)
            }
          , Error::ParseError(msg) => {
              write!(f, "Parse error: {}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}
