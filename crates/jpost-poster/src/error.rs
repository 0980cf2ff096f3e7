use jpost_core::Platform;
use thiserror::Error;

/// Errors raised by the posting layer.
///
/// The webhook path never returns these to its caller; they are folded into
/// a failed `PostResult`. The direct-API path surfaces `MissingCredentials`
/// and `DirectUnsupported`.
#[derive(Debug, Error)]
pub enum PosterError {
    /// Network failure, non-2xx status, or undecodable response body.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("{} API credentials not configured", .platform.display_name())]
    MissingCredentials { platform: Platform },

    #[error("Direct posting not implemented for {0}")]
    DirectUnsupported(Platform),
}
