//! Seam to the remote music service

use async_trait::async_trait;

/// Remote service client used by commands
///
/// The authentication flow itself (browser redirect, token exchange) lives
/// behind this trait and reports its own failures.
#[async_trait]
pub trait Api: Send + Sync {
    /// Run the authentication flow once
    async fn authenticate(&self);
}
