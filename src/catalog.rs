//! Fixed enumerations and the locally computed routes.
//!
//! Selection helpers take the RNG as a parameter so tests can seed it.

use chrono::{DateTime, Local};
use rand::Rng;

/// Hex colors served by `/color`.
pub const COLORS: [&str; 7] = [
    "#FF5733", "#33FF57", "#3357FF", "#F333FF", "#33FFF3", "#FFDD33", "#33FFDD",
];

/// GIFs served by `/scare`.
pub const SCARE_IMAGES: [&str; 3] = [
    "https://media.giphy.com/media/l0MYt5jPR6QX5pnqM/giphy.gif",
    "https://media.giphy.com/media/26xBI73gWquCBBCDe/giphy.gif",
    "https://media.giphy.com/media/3o7TKr3nzgq5DlvmLt/giphy.gif",
];

/// Portraits served by `/lookalike`.
pub const LOOKALIKE_IMAGES: [&str; 4] = [
    "https://randomuser.me/api/portraits/men/1.jpg",
    "https://randomuser.me/api/portraits/women/1.jpg",
    "https://randomuser.me/api/portraits/lego/1.jpg",
    "https://randomuser.me/api/portraits/thumb/men/75.jpg",
];

/// Smallest photo side, inclusive.
pub const PHOTO_MIN_SIDE: u32 = 300;
/// Largest photo side, inclusive.
pub const PHOTO_MAX_SIDE: u32 = 800;

/// Placeholder photo service.
pub const PHOTO_BASE_URL: &str = "https://picsum.photos";

/// Format of `/time`.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Welcome text served at `/`.
pub const WELCOME_MESSAGE: &str = "Bem-vindo ao Desafio DevOps FastAPI + React!";

/// Uniform pick from a non-empty fixed list.
pub fn pick<R: Rng + ?Sized, const N: usize>(rng: &mut R, items: &[&'static str; N]) -> &'static str {
    items[rng.random_range(0..N)]
}

/// Random color from [`COLORS`].
pub fn random_color<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, &COLORS)
}

/// Random GIF from [`SCARE_IMAGES`].
pub fn random_scare<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, &SCARE_IMAGES)
}

/// Random portrait from [`LOOKALIKE_IMAGES`].
pub fn random_lookalike<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    pick(rng, &LOOKALIKE_IMAGES)
}

/// Photo URL with width and height drawn independently.
pub fn random_photo_url<R: Rng + ?Sized>(rng: &mut R) -> String {
    let width = rng.random_range(PHOTO_MIN_SIDE..=PHOTO_MAX_SIDE);
    let height = rng.random_range(PHOTO_MIN_SIDE..=PHOTO_MAX_SIDE);
    format!("{}/{}/{}", PHOTO_BASE_URL, width, height)
}

/// Format a local timestamp as `YYYY-MM-DD HH:MM:SS`.
pub fn format_time(now: DateTime<Local>) -> String {
    now.format(TIME_FORMAT).to_string()
}

/// Current local time as served by `/time`.
pub fn current_time() -> String {
    format_time(Local::now())
}
