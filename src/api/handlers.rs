//! HTTP API handlers.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::catalog;
use crate::config::Config;
use crate::error::{ErrorResponse, UpstreamError};
use crate::upstream::UpstreamClient;
use crate::utils::resolve_hostname;

/// Application state shared with handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Pooled client for the cat and joke APIs.
    pub upstream: UpstreamClient,
    /// Host name reported by the probes.
    pub hostname: Arc<str>,
    /// Whether the service accepts traffic.
    pub ready: Arc<AtomicBool>,
}

impl AppState {
    /// Create new app state. Starts not ready.
    pub fn new(upstream: UpstreamClient, hostname: impl Into<Arc<str>>) -> Self {
        Self {
            upstream,
            hostname: hostname.into(),
            ready: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Build the upstream client from config and read the host name.
    pub fn from_config(config: &Config) -> crate::Result<Self> {
        let upstream = UpstreamClient::new(config)?;
        Ok(Self::new(upstream, resolve_hostname()))
    }

    /// Set ready state.
    pub fn set_ready(&self, ready: bool) {
        self.ready.store(ready, Ordering::SeqCst);
    }

    /// Check if ready.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }
}

/// `/color` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ColorResponse {
    /// Hex color, e.g. `#FF5733`.
    #[serde(rename = "cor")]
    pub color: String,
}

/// `/cat` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct CatResponse {
    /// Cat image URL, or a placeholder when none was found.
    pub cat_image_url: String,
}

/// `/random-photo` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct RandomPhotoResponse {
    /// `https://picsum.photos/{width}/{height}`.
    pub random_photo_url: String,
}

/// `/time` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct TimeResponse {
    /// Local time, `YYYY-MM-DD HH:MM:SS`.
    pub current_time: String,
}

/// `/joke` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct JokeResponse {
    /// `"{setup} - {punchline}"`.
    pub joke: String,
}

/// `/scare` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ScareResponse {
    /// GIF URL.
    pub scare_image_url: String,
}

/// `/lookalike` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct LookalikeResponse {
    /// Portrait URL.
    pub lookalike_image_url: String,
}

/// Liveness and readiness response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ProbeResponse {
    /// `UP`, `READY` or `NOT READY`.
    pub status: String,
    /// Host the process runs on.
    pub hostname: String,
}

/// `/` response.
#[derive(Debug, Serialize, ToSchema)]
pub struct WelcomeResponse {
    /// Welcome text.
    pub message: String,
}

/// Random color.
#[utoipa::path(get, path = "/color", tag = "novelty",
    responses((status = 200, description = "Random hex color", body = ColorResponse)))]
pub async fn color() -> Json<ColorResponse> {
    let color = catalog::random_color(&mut rand::rng());
    Json(ColorResponse {
        color: color.to_string(),
    })
}

/// Random cat image from the cat API.
#[utoipa::path(get, path = "/cat", tag = "novelty",
    responses(
        (status = 200, description = "Cat image URL", body = CatResponse),
        (status = "default", description = "Cat API failed; its status is forwarded", body = ErrorResponse),
    ))]
pub async fn cat(State(state): State<AppState>) -> Result<Json<CatResponse>, UpstreamError> {
    let cat_image_url = state.upstream.fetch_cat_image().await?;
    Ok(Json(CatResponse { cat_image_url }))
}

/// Random photo URL.
#[utoipa::path(get, path = "/random-photo", tag = "novelty",
    responses((status = 200, description = "Random photo URL", body = RandomPhotoResponse)))]
pub async fn random_photo() -> Json<RandomPhotoResponse> {
    let random_photo_url = catalog::random_photo_url(&mut rand::rng());
    Json(RandomPhotoResponse { random_photo_url })
}

/// Current local time.
#[utoipa::path(get, path = "/time", tag = "novelty",
    responses((status = 200, description = "Current local time", body = TimeResponse)))]
pub async fn time() -> Json<TimeResponse> {
    Json(TimeResponse {
        current_time: catalog::current_time(),
    })
}

/// Random joke from the joke API.
#[utoipa::path(get, path = "/joke", tag = "novelty",
    responses(
        (status = 200, description = "Joke text", body = JokeResponse),
        (status = "default", description = "Joke API failed; its status is forwarded", body = ErrorResponse),
    ))]
pub async fn joke(State(state): State<AppState>) -> Result<Json<JokeResponse>, UpstreamError> {
    let payload = state.upstream.fetch_joke().await?;
    Ok(Json(JokeResponse {
        joke: payload.render(),
    }))
}

/// Random scare GIF.
#[utoipa::path(get, path = "/scare", tag = "novelty",
    responses((status = 200, description = "Scare GIF URL", body = ScareResponse)))]
pub async fn scare() -> Json<ScareResponse> {
    let url = catalog::random_scare(&mut rand::rng());
    Json(ScareResponse {
        scare_image_url: url.to_string(),
    })
}

/// Random lookalike portrait.
#[utoipa::path(get, path = "/lookalike", tag = "novelty",
    responses((status = 200, description = "Portrait URL", body = LookalikeResponse)))]
pub async fn lookalike() -> Json<LookalikeResponse> {
    let url = catalog::random_lookalike(&mut rand::rng());
    Json(LookalikeResponse {
        lookalike_image_url: url.to_string(),
    })
}

/// Health check handler - always returns 200.
#[utoipa::path(get, path = "/health", tag = "probes",
    responses((status = 200, description = "Process is alive", body = ProbeResponse)))]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(ProbeResponse {
        status: "UP".to_string(),
        hostname: state.hostname.to_string(),
    })
}

/// Readiness check handler - returns 200 if ready, 503 otherwise.
#[utoipa::path(get, path = "/ready", tag = "probes",
    responses(
        (status = 200, description = "Ready for traffic", body = ProbeResponse),
        (status = 503, description = "Not ready", body = ProbeResponse),
    ))]
pub async fn ready(State(state): State<AppState>) -> impl IntoResponse {
    let hostname = state.hostname.to_string();

    if state.is_ready() {
        let response = ProbeResponse {
            status: "READY".to_string(),
            hostname,
        };
        (StatusCode::OK, Json(response))
    } else {
        let response = ProbeResponse {
            status: "NOT READY".to_string(),
            hostname,
        };
        (StatusCode::SERVICE_UNAVAILABLE, Json(response))
    }
}

/// Welcome message.
#[utoipa::path(get, path = "/", tag = "novelty",
    responses((status = 200, description = "Welcome message", body = WelcomeResponse)))]
pub async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: catalog::WELCOME_MESSAGE.to_string(),
    })
}
