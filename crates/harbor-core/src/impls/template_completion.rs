//! Deterministic completion implementation.

use async_trait::async_trait;

use crate::domain::HarborError;
use crate::ports::Completion;

/// Formats the summary from a fixed template instead of calling a model.
///
/// Stands in for the language-model capability in the demo and tests;
/// the output is a pure function of the context.
pub struct TemplateCompletion;

#[async_trait]
impl Completion for TemplateCompletion {
    async fn complete(&self, context: &str) -> Result<String, HarborError> {
        Ok(format!("Shipping coordinator: {context}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn output_is_deterministic() {
        let completion = TemplateCompletion;
        let a = completion.complete("Order approved").await.unwrap();
        let b = completion.complete("Order approved").await.unwrap();
        assert_eq!(a, b);
        assert!(a.contains("Order approved"));
    }
}
