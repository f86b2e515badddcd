use std::sync::{Arc, Mutex};

use rand::rngs::StdRng;
use tracing::instrument;

use crate::{
    error::{AppError, AppResult},
    models::{Recommendation, RecommendationQuery, NO_REASON, UNKNOWN_MOVIE},
    services::{fallback::offline_recommendation, prompt::build_prompt, providers::CompletionProvider},
};

/// What to do when the provider answered but the body could not be read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MalformedPolicy {
    /// Report the error to the caller
    #[default]
    Surface,
    /// Serve an offline pick, same as for transport failures
    Degrade,
}

/// Generates a movie recommendation for a mood, genre and region
///
/// Asks the configured chat model for a suggestion and splits its answer
/// positionally. When the model cannot be reached an offline pick is
/// returned instead; the caller never sees transport errors.
pub struct RecommendationService {
    provider: Arc<dyn CompletionProvider>,
    rng: Mutex<StdRng>,
    malformed_policy: MalformedPolicy,
}

impl RecommendationService {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        rng: StdRng,
        malformed_policy: MalformedPolicy,
    ) -> Self {
        Self {
            provider,
            rng: Mutex::new(rng),
            malformed_policy,
        }
    }

    #[instrument(skip(self), fields(provider = self.provider.name()))]
    pub async fn fetch(&self, query: &RecommendationQuery) -> AppResult<Recommendation> {
        let prompt = build_prompt(query);

        match self.provider.complete(&prompt).await {
            Ok(content) => {
                let recommendation = parse_content(&content);
                tracing::info!(
                    movie_name = %recommendation.movie_name(),
                    has_image = recommendation.image_url().is_some(),
                    "Recommendation generated"
                );
                Ok(recommendation)
            }
            Err(e) if self.should_degrade(&e) => {
                tracing::warn!(error = %e, "Recommendation service unavailable, serving offline pick");
                Ok(self.fallback())
            }
            Err(e) => {
                tracing::error!(error = %e, "Recommendation response unusable");
                Err(e)
            }
        }
    }

    /// An offline pick drawn from the service's own random source
    pub fn fallback(&self) -> Recommendation {
        let mut rng = self.rng.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        offline_recommendation(&mut *rng)
    }

    fn should_degrade(&self, e: &AppError) -> bool {
        e.is_transport()
            || (self.malformed_policy == MalformedPolicy::Degrade
                && matches!(e, AppError::MalformedResponse(_)))
    }
}

/// Splits model output on `|` into movie name, reason and image URL.
///
/// Empty pieces are skipped and the rest trimmed. No labels are stripped
/// and the requested layout is not checked.
pub fn parse_content(content: &str) -> Recommendation {
    let mut parts = content.split('|').filter(|s| !s.is_empty()).map(str::trim);

    let movie_name = parts.next().unwrap_or(UNKNOWN_MOVIE);
    let reason = parts.next().unwrap_or(NO_REASON);
    let image_url = parts.next().map(str::to_string);

    Recommendation::new(movie_name, reason, image_url)
}
