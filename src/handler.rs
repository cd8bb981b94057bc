use log::{debug, error, info};
use crate::error::Error;
use crate::request::{ErrorResponse, IdeaResponse};

/// Body of a handler reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyBody
{   Ideas(IdeaResponse)
  , Error(ErrorResponse)
  , Text(String)
}

/// Framework-agnostic response: a status and a body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply
{   pub status: u16
  , pub body: ReplyBody
}

impl Reply
{   pub fn ideas(ideas: Vec<String>) -> Self
    {   Reply
        {   status: 200
          , body: ReplyBody::Ideas(IdeaResponse { ideas })
        }
    }

    pub fn from_error(err: &Error) -> Self
    {   if err.is_internal()
        {   error!("Function Error: {}", err);
        }
        let body = match err
        {   Error::MethodNotAllowed => {
              ReplyBody::Text(err.public_message())
            }
          , _ => ReplyBody::Error(ErrorResponse
            {   error: err.public_message()
            })
        };
        Reply
        {   status: err.status()
          , body
        }
    }

    /// `error` string, when this is an error reply
    pub fn error_message(&self) -> Option<&str>
    {   match &self.body
        {   ReplyBody::Error(e) => Some(&e.error)
          , _ => None
        }
    }
}

/// The idea endpoint: validate, forward upstream, translate.
/// Holds only immutable config; safe to share across requests.
#[derive(Debug, Clone)]
pub struct IdeaHandler
{   config: crate::config::Config
  , client: crate::providers::GeminiClient
}

impl IdeaHandler
{   pub fn new(config: crate::config::Config) -> Self
    {   debug!("Initializing IdeaHandler");
        let client = crate::providers::GeminiClient::new(
          config.api_base.clone(),
          config.model.clone()
        );
        IdeaHandler
        {   config
          , client
        }
    }

    pub fn config(&self) -> &crate::config::Config
    {   &self.config
    }

    /// Handle one inbound request; never fails
    pub async fn handle(&self, method: &str, body: &[u8]) -> Reply
    {   match self.generate_ideas(method, body).await
        {   Ok(ideas) => {
              info!("Returning {} ideas", ideas.len());
              Reply::ideas(ideas)
            }
          , Err(err) => {
              debug!("Request failed: {}", err);
              Reply::from_error(&err)
            }
        }
    }

    /// Each step short-circuits on its first failure
    pub async fn generate_ideas(
      &self
    , method: &str
    , body: &[u8]
    ) -> Result<Vec<String>, Error>
    {   check_method(method)?;
        let prompt = crate::request::parse_prompt(body)?;
        let api_key = self.config.api_key()
          .ok_or_else(|| {
            error!("{} is not set", crate::config::API_KEY_VAR);
            Error::MissingApiKey
          })?;

        let full_prompt = crate::request::build_prompt(&prompt);
        let text = self.client
          .generate_content(api_key, &full_prompt)
          .await?;

        Ok(crate::request::split_ideas(&text))
    }
}

fn check_method(method: &str) -> Result<(), Error>
{   if method == "POST"
    {   Ok(())
    } else
    {   debug!("Rejecting method: {}", method);
        Err(Error::MethodNotAllowed)
    }
}
