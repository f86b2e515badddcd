use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{Favorites, RecommendationState};
use crate::services::RecommendationService;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub inner: Arc<RwLock<AppStateInner>>,
    pub recommender: Arc<RecommendationService>,
}

/// Session state owned by the front end's single user
#[derive(Default)]
pub struct AppStateInner {
    pub current: RecommendationState,
    pub favorites: Favorites,
}

impl AppState {
    /// Creates a fresh session: nothing recommended yet, no favorites
    pub fn new(recommender: Arc<RecommendationService>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(AppStateInner::default())),
            recommender,
        }
    }
}
