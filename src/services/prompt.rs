use crate::models::RecommendationQuery;

/// Builds the user message sent to the chat model.
///
/// The model is asked for a title line followed by three bulleted reasons.
/// Nothing downstream relies on that layout; the reply is split positionally.
pub fn build_prompt(query: &RecommendationQuery) -> String {
    format!(
        "请你根据我的心情：{mood}、电影类型：{genre} 和地区：{region}，推荐一部电影。请严格按照以下格式生成推荐内容：\n\
         电影:《电影名称》(年份)(国家|类型)\n\
         推荐理由:\n\
         - 🎬 理由1: 具体的剧情介绍。\n\
         - 🎥 理由2: 具体的剧情介绍。\n\
         - 🍿 理由3: 具体的剧情介绍。",
        mood = query.mood,
        genre = query.genre,
        region = query.region,
    )
}
