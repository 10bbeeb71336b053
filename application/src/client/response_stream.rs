//! The stream of reply fragments returned to callers

use super::error::ChatError;
use futures::{Stream, StreamExt};
use std::pin::Pin;
use std::task::{Context, Poll};

/// Lazy, finite, single-pass stream of reply fragments.
///
/// Nothing runs until the first poll. Concatenating every fragment yields the
/// complete reply. A failure ends the stream with one `Err` item. Dropping the
/// stream cancels the remaining work.
pub struct ChatResponseStream {
    inner: Pin<Box<dyn Stream<Item = Result<String, ChatError>> + Send>>,
}

impl ChatResponseStream {
    pub fn new(inner: impl Stream<Item = Result<String, ChatError>> + Send + 'static) -> Self {
        Self {
            inner: Box::pin(inner),
        }
    }

    /// Consume the stream and join every fragment.
    pub async fn collect_text(mut self) -> Result<String, ChatError> {
        let mut text = String::new();
        while let Some(fragment) = self.next().await {
            text.push_str(&fragment?);
        }
        Ok(text)
    }
}

impl Stream for ChatResponseStream {
    type Item = Result<String, ChatError>;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Self::Item>> {
        self.inner.as_mut().poll_next(cx)
    }
}

impl std::fmt::Debug for ChatResponseStream {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatResponseStream").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;

    #[tokio::test]
    async fn test_collect_text_joins_fragments() {
        let stream = ChatResponseStream::new(futures::stream::iter(vec![
            Ok("Hel".to_string()),
            Ok("lo".to_string()),
        ]));
        assert_eq!(stream.collect_text().await.unwrap(), "Hello");
    }

    #[tokio::test]
    async fn test_collect_text_stops_at_error() {
        let stream = ChatResponseStream::new(futures::stream::iter(vec![
            Ok("partial".to_string()),
            Err(ChatError::Gateway(GatewayError::RequestFailed("boom".into()))),
        ]));
        assert!(matches!(
            stream.collect_text().await,
            Err(ChatError::Gateway(_))
        ));
    }
}
