//! Outbound posting for jpost.
//!
//! [`PlatformPoster`] forwards formatted content to per-platform webhooks and
//! reduces every outcome, including missing configuration and upstream
//! failures, to a [`jpost_core::PostResult`]. [`DirectApiClient`] is the
//! explicit bypass path to the native Twitter and LinkedIn APIs; unlike the
//! webhook path it returns an error when its credentials are absent.

pub mod client;
pub mod direct;
pub mod error;
pub mod webhook;

pub use direct::DirectApiClient;
pub use error::PosterError;
pub use webhook::{PlatformPoster, WEBHOOK_NOT_CONFIGURED};
