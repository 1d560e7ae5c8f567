//! Social posting port ("compose cast").

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A post to publish on behalf of the user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cast {
    pub text: String,
    /// Links attached to the post.
    pub embeds: Vec<String>,
}

impl Cast {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            embeds: Vec::new(),
        }
    }

    pub fn with_embed(mut self, url: impl Into<String>) -> Self {
        self.embeds.push(url.into());
        self
    }
}

#[derive(Debug, Error)]
pub enum PostError {
    #[error("post rejected: {0}")]
    Rejected(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Publishes casts through the host.
#[allow(async_fn_in_trait)]
pub trait SocialPoster {
    async fn compose_cast(&self, cast: &Cast) -> Result<(), PostError>;
}

impl<T: SocialPoster + ?Sized> SocialPoster for &T {
    async fn compose_cast(&self, cast: &Cast) -> Result<(), PostError> {
        (**self).compose_cast(cast).await
    }
}

/// Writes the cast to standard output instead of a social network.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutPoster;

impl SocialPoster for StdoutPoster {
    async fn compose_cast(&self, cast: &Cast) -> Result<(), PostError> {
        use std::io::Write;

        let mut out = std::io::stdout().lock();
        writeln!(out, "{}", cast.text)?;
        for embed in &cast.embeds {
            writeln!(out, "  {embed}")?;
        }
        tracing::info!(embeds = cast.embeds.len(), "cast composed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_collects_embeds() {
        let cast = Cast::new("hello")
            .with_embed("https://a.example")
            .with_embed("https://b.example");
        assert_eq!(cast.text, "hello");
        assert_eq!(cast.embeds, vec!["https://a.example", "https://b.example"]);
    }

    #[tokio::test]
    async fn stdout_poster_accepts_cast() {
        let cast = Cast::new("posted from a test").with_embed("https://example.com");
        StdoutPoster.compose_cast(&cast).await.unwrap();
    }
}
