//! Shared state for the API layer.

use std::sync::Arc;

use crate::pipeline::completion::AnswerGenerate;
use crate::pipeline::processor::HealthQueryProcessor;
use crate::pipeline::reference::ReferenceLookup;

/// Shared context for all API routes.
///
/// Generic over the two collaborator seams so tests can inject mocks;
/// clones share the same processor.
pub struct ApiContext<R: ReferenceLookup, G: AnswerGenerate> {
    pub processor: Arc<HealthQueryProcessor<R, G>>,
}

impl<R: ReferenceLookup, G: AnswerGenerate> ApiContext<R, G> {
    pub fn new(processor: HealthQueryProcessor<R, G>) -> Self {
        Self {
            processor: Arc::new(processor),
        }
    }
}

// Manual Clone: deriving would require R: Clone + G: Clone, which the
// Arc makes unnecessary.
impl<R: ReferenceLookup, G: AnswerGenerate> Clone for ApiContext<R, G> {
    fn clone(&self) -> Self {
        Self {
            processor: Arc::clone(&self.processor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::completion::MockAnswerGenerate;
    use crate::pipeline::reference::MockReferenceLookup;

    #[test]
    fn clones_share_the_processor() {
        let ctx = ApiContext::new(HealthQueryProcessor::new(
            MockReferenceLookup::empty(),
            MockAnswerGenerate::answering("ok"),
        ));
        let clone = ctx.clone();
        assert!(Arc::ptr_eq(&ctx.processor, &clone.processor));
    }
}
