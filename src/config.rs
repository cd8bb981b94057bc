//! Configuration for the idea endpoint and its upstream

use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_API_BASE: &str
  = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const API_KEY_VAR: &str = "GOOGLE_API_KEY";

/// Listener configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig
{   /// Host address to bind to
    pub host: String
  , /// Port to bind to
    pub port: u16
}

impl Default for ServerConfig
{   fn default() -> Self
    {   ServerConfig
        {   host: "0.0.0.0".to_string()
          , port: 8888
        }
    }
}

/// Endpoint configuration, read once and never mutated
#[derive(Clone, Serialize, Deserialize)]
pub struct Config
{   /// Upstream credential
    #[serde(skip_serializing, default)]
    pub api_key: Option<String>
  , /// Upstream base URL
    pub api_base: String
  , /// Upstream model name
    pub model: String
  , /// Listener settings
    pub server: ServerConfig
}

impl Default for Config
{   fn default() -> Self
    {   Config
        {   api_key: None
          , api_base: DEFAULT_API_BASE.to_string()
          , model: DEFAULT_MODEL.to_string()
          , server: ServerConfig::default()
        }
    }
}

impl Config
{   /// Load from environment, falling back to defaults
    pub fn from_env() -> Self
    {   let defaults = Config::default();
        Config
        {   api_key: non_empty_var(API_KEY_VAR)
          , api_base: non_empty_var("IDEAGEN_API_BASE")
              .unwrap_or(defaults.api_base)
          , model: non_empty_var("IDEAGEN_MODEL")
              .unwrap_or(defaults.model)
          , server: ServerConfig
            {   host: non_empty_var("HOST")
                  .unwrap_or(defaults.server.host)
              , port: env::var("PORT")
                  .ok()
                  .and_then(|p| p.parse().ok())
                  .unwrap_or(defaults.server.port)
            }
        }
    }

    /// Same config with the given credential
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self
    {   let key = key.into();
        self.api_key = if key.is_empty() { None } else { Some(key) };
        self
    }

    /// Same config pointed at another upstream base URL
    pub fn with_api_base(mut self, base: impl Into<String>) -> Self
    {   self.api_base = base.into();
        self
    }

    pub fn api_key(&self) -> Option<&str>
    {   self.api_key.as_deref()
    }

    pub fn server_addr(&self) -> String
    {   format!("{}:{}", self.server.host, self.server.port)
    }
}

// Keeps the credential out of logs
impl std::fmt::Debug for Config
{   fn fmt(&self, f: &mut std::fmt::Formatter<'_>)
      -> std::fmt::Result
    {   f.debug_struct("Config")
          .field("api_key", &self.api_key.as_ref().map(|_| "<set>"))
          .field("api_base", &self.api_base)
          .field("model", &self.model)
          .field("server", &self.server)
          .finish()
    }
}

fn non_empty_var(name: &str) -> Option<String>
{   env::var(name).ok().filter(|v| !v.is_empty())
}
