//! Inbound request and outbound response types

use serde::{Deserialize, Serialize};
use log::{debug, trace};

/// Body a caller posts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdeaRequest
{   /// Topic to generate ideas for
    #[serde(default)]
    pub prompt: Option<String>
}

/// Successful reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaResponse
{   pub ideas: Vec<String>
}

/// Failure reply
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse
{   pub error: String
}

/// Pull a non-empty prompt out of a raw JSON body.
/// Anything unparsable counts as no prompt at all.
pub fn parse_prompt(body: &[u8])
  -> Result<String, crate::error::Error>
{   let request: IdeaRequest = serde_json::from_slice(body)
      .map_err(|e| {
        debug!("Unparsable request body: {}", e);
        crate::error::Error::NoPrompt
      })?;

    match request.prompt
    {   Some(prompt) if !prompt.is_empty() => Ok(prompt)
      , _ => Err(crate::error::Error::NoPrompt)
    }
}

/// Embed the prompt, untouched, in the instruction template
pub fn build_prompt(prompt: &str) -> String
{   format!(
      "Generate a numbered list of 5 creative and unique ideas \
       for the following topic: \"{}\". Return only the numbered \
       list, without any introductory text.",
      prompt
    )
}

/// Whitespace, byte-order marks included
fn is_blank(line: &str) -> bool
{   line.chars().all(|c| c.is_whitespace() || c == '\u{feff}')
}

/// One idea per non-blank line, in upstream order
pub fn split_ideas(text: &str) -> Vec<String>
{   let ideas: Vec<String> = text
      .split('\n')
      .filter(|line| !is_blank(line))
      .map(str::to_string)
      .collect();
    trace!("Split {} ideas", ideas.len());
    ideas
}
