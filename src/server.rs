//! HTTP host: adapts axum requests onto `IdeaHandler`

use std::sync::Arc;
use axum::{
  body::Bytes,
  extract::State,
  http::{header, Method, StatusCode},
  response::{IntoResponse, Response},
  routing::{any, get},
  Json, Router,
};
use serde::Serialize;
use log::debug;
use crate::handler::{IdeaHandler, Reply, ReplyBody};

pub const FUNCTION_PATH: &str = "/.netlify/functions/generate-ideas";

#[derive(Serialize)]
struct HealthResponse
{   status: String
  , model: String
}

pub fn router(handler: Arc<IdeaHandler>) -> Router
{   Router::new()
      .route("/", any(generate_ideas))
      .route(FUNCTION_PATH, any(generate_ideas))
      .route("/health", get(health))
      .with_state(handler)
}

async fn generate_ideas(
  State(handler): State<Arc<IdeaHandler>>
, method: Method
, body: Bytes
) -> Response
{   debug!("{} idea request, {} bytes", method, body.len());
    let reply = handler.handle(method.as_str(), &body).await;
    into_response(reply)
}

async fn health(
  State(handler): State<Arc<IdeaHandler>>
) -> Json<HealthResponse>
{   Json(HealthResponse
    {   status: "ok".to_string()
      , model: handler.config().model.clone()
    })
}

fn into_response(reply: Reply) -> Response
{   if let Some(message) = reply.error_message()
    {   debug!("Replying {}: {}", reply.status, message);
    }
    let status = StatusCode::from_u16(reply.status)
      .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    match reply.body
    {   ReplyBody::Ideas(ideas) => (status, Json(ideas)).into_response()
      , ReplyBody::Error(e) => (status, Json(e)).into_response()
      , ReplyBody::Text(text) => (
          status,
          [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
          text
        ).into_response()
    }
}
