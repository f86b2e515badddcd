use serde::Serialize;

use super::Recommendation;
use crate::error::AppResult;

/// The single "current recommendation" slot shown to the user
///
/// Each fetch calls [`begin`](Self::begin) once and
/// [`resolve`](Self::resolve) once. Resolutions are not ordered against
/// each other: whichever fetch completes last is what the slot holds.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RecommendationState {
    #[default]
    Idle,
    Loading,
    Ready { recommendation: Recommendation },
    Failed { error: String },
}

impl RecommendationState {
    pub fn begin(&mut self) {
        *self = RecommendationState::Loading;
    }

    pub fn resolve(&mut self, outcome: &AppResult<Recommendation>) {
        *self = match outcome {
            Ok(recommendation) => RecommendationState::Ready {
                recommendation: recommendation.clone(),
            },
            Err(e) => RecommendationState::Failed {
                error: e.to_string(),
            },
        };
    }

    pub fn recommendation(&self) -> Option<&Recommendation> {
        match self {
            RecommendationState::Ready { recommendation } => Some(recommendation),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, RecommendationState::Loading)
    }
}
