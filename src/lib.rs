pub mod error;
pub mod config;
pub mod providers;
pub mod request;
pub mod handler;
pub mod server;

/*

ideagen: one endpoint that keeps the Google AI key on the server.
the caller posts { "prompt": "..." }, we wrap it in a fixed
instruction, ask gemini for five ideas and hand back
{ "ideas": [...] } or { "error": "..." }.

ideagen/
├── Cargo.toml
├── src/
│   ├── lib.rs          # Re-exports and this note
│   ├── main.rs         # Binary: logging, config, listener
│   ├── error.rs        # Failure taxonomy -> status + message
│   ├── config.rs       # Credential, upstream and listener config
│   ├── request.rs      # Inbound/outbound bodies, prompt template
│   ├── handler.rs      # IdeaHandler: validate, forward, translate
│   ├── server.rs       # axum routes onto IdeaHandler
│   └── providers/
│       ├── mod.rs
│       └── google.rs   # generateContent client
└── tests/

*/

pub use config::Config;
pub use error::Error;
pub use handler::{IdeaHandler, Reply, ReplyBody};
pub use request::{ErrorResponse, IdeaRequest, IdeaResponse};
