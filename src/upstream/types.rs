//! Upstream identities and payload shapes.

use serde::Deserialize;
use serde_json::Value;
use strum::{Display, EnumString};

/// Returned by `/cat` when the search comes back empty.
pub const CAT_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/150/FF0000/FFFFFF?text=No+Cat+Found";

/// Third-party API a handler proxies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum Upstream {
    /// thecatapi.com image search.
    Cat,
    /// official-joke-api random joke.
    Joke,
}

impl Upstream {
    /// Message placed in the `error` field when this upstream fails.
    pub fn failure_message(&self) -> &'static str {
        match self {
            Upstream::Cat => "Failed to fetch cat image",
            Upstream::Joke => "Failed to fetch joke",
        }
    }
}

/// Random joke object. Either field may be absent; `null` counts as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JokePayload {
    /// Joke setup line.
    #[serde(default)]
    pub setup: Option<String>,
    /// Joke punchline.
    #[serde(default)]
    pub punchline: Option<String>,
}

impl JokePayload {
    /// Render as `"{setup} - {punchline}"`, missing parts as empty strings.
    pub fn render(&self) -> String {
        format!(
            "{} - {}",
            self.setup.as_deref().unwrap_or_default(),
            self.punchline.as_deref().unwrap_or_default()
        )
    }
}

/// `url` of the first search result, or the placeholder when the search is empty.
///
/// Only the first element is inspected. `None` when it has no string `url`.
pub fn first_cat_url(images: &[Value]) -> Option<String> {
    match images.first() {
        None => Some(CAT_PLACEHOLDER_URL.to_string()),
        Some(first) => first.get("url").and_then(Value::as_str).map(str::to_string),
    }
}
