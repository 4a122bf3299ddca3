//! Deterministic AI provider for tests and local development.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use crate::ports::{
    AiError, AiProvider, CompletionRequest, CompletionResponse, FinishReason, ProviderInfo,
    TokenUsage,
};

/// Scripted provider: returns canned responses in order, then repeats
/// the last one. Can be told to fail instead.
pub struct MockProvider {
    responses: Mutex<Vec<String>>,
    calls: AtomicUsize,
    fail: bool,
}

impl MockProvider {
    /// Creates a provider that answers every request with `content`.
    pub fn returning(content: impl Into<String>) -> Self {
        Self {
            responses: Mutex::new(vec![content.into()]),
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    /// Creates a provider with a script of responses.
    pub fn with_script(responses: Vec<String>) -> Self {
        Self {
            responses: Mutex::new(responses),
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    /// Creates a provider that fails every request.
    pub fn failing() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    /// Number of completions requested so far.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AiProvider for MockProvider {
    async fn complete(&self, _request: CompletionRequest) -> Result<CompletionResponse, AiError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(AiError::unavailable("mock provider set to fail"));
        }

        let responses = self.responses.lock().unwrap();
        let content = responses
            .get(call)
            .or_else(|| responses.last())
            .cloned()
            .unwrap_or_default();

        Ok(CompletionResponse {
            content,
            usage: TokenUsage::new(10, 20),
            model: "mock".to_string(),
            finish_reason: FinishReason::Stop,
        })
    }

    fn provider_info(&self) -> ProviderInfo {
        ProviderInfo::new("mock", "mock", 100_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::UserId;
    use crate::ports::{CompletionPurpose, RequestMetadata};

    fn request() -> CompletionRequest {
        CompletionRequest::new(RequestMetadata::new(
            UserId::new("u").unwrap(),
            CompletionPurpose::Companion,
        ))
    }

    #[tokio::test]
    async fn scripted_responses_come_in_order() {
        let provider =
            MockProvider::with_script(vec!["first".to_string(), "second".to_string()]);

        assert_eq!(provider.complete(request()).await.unwrap().content, "first");
        assert_eq!(provider.complete(request()).await.unwrap().content, "second");
        // Script exhausted: last response repeats.
        assert_eq!(provider.complete(request()).await.unwrap().content, "second");
    }

    #[tokio::test]
    async fn failing_provider_errors() {
        let provider = MockProvider::failing();
        assert!(provider.complete(request()).await.is_err());
        assert_eq!(provider.call_count(), 1);
    }
}
