use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};

pub mod favorites;
pub mod recommendation_state;

pub use favorites::Favorites;
pub use recommendation_state::RecommendationState;

/// Movie name used when the model returns nothing usable
pub const UNKNOWN_MOVIE: &str = "未知电影";

/// Reason used when the model's answer has no second segment
pub const NO_REASON: &str = "暂无推荐理由";

/// A single movie suggestion
///
/// Two recommendations are equal when their movie name and reason match;
/// the identifier is not part of equality.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default = "Uuid::new_v4")]
    id: Uuid,
    movie_name: String,
    reason: String,
    #[serde(default)]
    image_url: Option<String>,
}

impl Recommendation {
    pub fn new(
        movie_name: impl Into<String>,
        reason: impl Into<String>,
        image_url: Option<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            movie_name: movie_name.into(),
            reason: reason.into(),
            image_url,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn movie_name(&self) -> &str {
        &self.movie_name
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }
}

impl PartialEq for Recommendation {
    fn eq(&self, other: &Self) -> bool {
        self.movie_name == other.movie_name && self.reason == other.reason
    }
}

impl Eq for Recommendation {}

/// Selections submitted by the front end
#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationRequest {
    pub mood: String,
    pub genres: Vec<String>,
    pub regions: Vec<String>,
}

/// The three strings embedded into the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecommendationQuery {
    pub mood: String,
    pub genre: String,
    pub region: String,
}

impl TryFrom<RecommendationRequest> for RecommendationQuery {
    type Error = AppError;

    fn try_from(request: RecommendationRequest) -> AppResult<Self> {
        let mood = request.mood.trim();
        if mood.is_empty() {
            return Err(AppError::InvalidInput("Mood cannot be empty".to_string()));
        }

        let genre = join_selection(&request.genres)
            .ok_or_else(|| AppError::InvalidInput("Select at least one genre".to_string()))?;
        let region = join_selection(&request.regions)
            .ok_or_else(|| AppError::InvalidInput("Select at least one region".to_string()))?;

        Ok(Self {
            mood: mood.to_string(),
            genre,
            region,
        })
    }
}

/// Joins non-blank selections with ", ", dropping repeats
fn join_selection(items: &[String]) -> Option<String> {
    let mut picked: Vec<&str> = Vec::with_capacity(items.len());
    for item in items.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        if !picked.contains(&item) {
            picked.push(item);
        }
    }

    if picked.is_empty() {
        None
    } else {
        Some(picked.join(", "))
    }
}

// ============================================================================
// Presets offered by the front end
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct MoodPreset {
    pub label: &'static str,
    pub emoji: &'static str,
}

pub const MOOD_PRESETS: [MoodPreset; 8] = [
    MoodPreset { label: "开心", emoji: "😊" },
    MoodPreset { label: "难过", emoji: "😢" },
    MoodPreset { label: "兴奋", emoji: "😄" },
    MoodPreset { label: "疲惫", emoji: "😩" },
    MoodPreset { label: "失恋", emoji: "💔" },
    MoodPreset { label: "焦虑", emoji: "😰" },
    MoodPreset { label: "愤怒", emoji: "😡" },
    MoodPreset { label: "无聊", emoji: "😐" },
];

pub const GENRES: [&str; 13] = [
    "随机",
    "细腻真实的生活",
    "夸张诙谐的",
    "浪漫感人的",
    "刺激冒险的",
    "科幻奇幻的",
    "悬疑惊悚的",
    "历史传记的",
    "动画梦幻的",
    "音乐剧",
    "纪录片",
    "战争片",
    "西部片",
];

pub const REGIONS: [&str; 7] = ["随机", "中国", "美国", "韩国", "日本", "欧洲", "其他"];

/// Everything the selection screens need to render
#[derive(Debug, Clone, Serialize)]
pub struct SelectionOptions {
    pub moods: Vec<MoodPreset>,
    pub genres: Vec<&'static str>,
    pub regions: Vec<&'static str>,
}

impl Default for SelectionOptions {
    fn default() -> Self {
        Self {
            moods: MOOD_PRESETS.to_vec(),
            genres: GENRES.to_vec(),
            regions: REGIONS.to_vec(),
        }
    }
}
