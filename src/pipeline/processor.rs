//! Query-processing orchestrator.
//!
//! Coordinates: reference lookup → prompt → answer generation → envelope.
//! Every collaborator failure is absorbed here — missing reference data
//! only lowers the reported confidence, and a failed generation is
//! replaced by the fallback responder — so processing never fails.

use tracing::{debug, warn};

use super::completion::AnswerGenerate;
use super::prompt::{system_prompt, user_message};
use super::reference::ReferenceLookup;
use crate::fallback;

/// Reported when reference data backed the answer.
pub const CONFIDENCE_WITH_REFERENCE: f64 = 0.85;
/// Reported when the answer stands alone.
pub const CONFIDENCE_WITHOUT_REFERENCE: f64 = 0.60;

/// Outcome of processing one query.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessedAnswer {
    /// Localized answer text.
    pub text: String,
    /// Whether the reference collaborator produced usable data.
    pub reference_found: bool,
    /// Whether the fallback responder produced the text.
    pub fallback_used: bool,
}

impl ProcessedAnswer {
    /// Informational confidence, keyed on reference-data presence.
    pub fn confidence(&self) -> f64 {
        if self.reference_found {
            CONFIDENCE_WITH_REFERENCE
        } else {
            CONFIDENCE_WITHOUT_REFERENCE
        }
    }

    /// Labels for whatever actually produced the answer.
    pub fn sources(&self) -> Vec<&'static str> {
        if self.fallback_used {
            vec!["Fallback System"]
        } else if self.reference_found {
            vec!["MedlinePlus", "OpenAI GPT"]
        } else {
            vec!["OpenAI GPT"]
        }
    }
}

/// Health query orchestrator over the two collaborator seams.
pub struct HealthQueryProcessor<R: ReferenceLookup, G: AnswerGenerate> {
    reference: R,
    generator: G,
}

impl<R: ReferenceLookup, G: AnswerGenerate> HealthQueryProcessor<R, G> {
    pub fn new(reference: R, generator: G) -> Self {
        Self {
            reference,
            generator,
        }
    }

    /// Process one health query. Infallible: collaborator failures degrade
    /// to the fallback answer instead of propagating.
    pub async fn process(&self, query: &str, language: &str) -> ProcessedAnswer {
        // Step 1: Reference lookup — optional context, failure means none.
        let reference_data = match self.reference.lookup(query).await {
            Ok(data) => data,
            Err(e) => {
                warn!(error = %e, "Reference lookup failed");
                None
            }
        };
        let reference_found = reference_data.is_some();
        debug!(reference_found, "Reference lookup finished");

        // Step 2: Generate the localized answer.
        let system = system_prompt(language);
        let user = user_message(query, reference_data.as_ref());

        match self.generator.generate(&system, &user).await {
            Ok(answer) => ProcessedAnswer {
                text: answer.trim().to_string(),
                reference_found,
                fallback_used: false,
            },
            Err(e) => {
                warn!(error = %e, "Answer generation failed, using fallback");
                ProcessedAnswer {
                    text: fallback::respond(query),
                    reference_found,
                    fallback_used: true,
                }
            }
        }
    }
}
