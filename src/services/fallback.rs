use rand::Rng;

use crate::models::Recommendation;

/// Picks served when the recommendation service cannot be reached
pub const OFFLINE_MOVIES: [(&str, &str); 5] = [
    ("肖申克的救赎", "一部关于希望和友谊的经典电影。"),
    ("阿甘正传", "讲述了一个简单而伟大的人生故事。"),
    ("盗梦空间", "一场关于梦境与现实的视觉盛宴。"),
    ("星际穿越", "探索宇宙与人类命运的科幻巨作。"),
    ("美丽人生", "在战争中寻找生活的美好。"),
];

/// Chooses one offline pick uniformly at random. Never carries an image.
pub fn offline_recommendation<R: Rng + ?Sized>(rng: &mut R) -> Recommendation {
    let (movie_name, reason) = OFFLINE_MOVIES[rng.random_range(0..OFFLINE_MOVIES.len())];
    Recommendation::new(movie_name, reason, None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn is_offline_pick(rec: &Recommendation) -> bool {
        OFFLINE_MOVIES
            .iter()
            .any(|(name, reason)| rec.movie_name() == *name && rec.reason() == *reason)
    }

    #[test]
    fn test_pick_is_from_table() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let rec = offline_recommendation(&mut rng);
            assert!(is_offline_pick(&rec));
            assert_eq!(rec.image_url(), None);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = StdRng::seed_from_u64(1234);
        let mut b = StdRng::seed_from_u64(1234);
        for _ in 0..20 {
            assert_eq!(offline_recommendation(&mut a), offline_recommendation(&mut b));
        }
    }

    #[test]
    fn test_selection_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(2025);
        let mut counts = [0usize; OFFLINE_MOVIES.len()];
        let samples = 10_000;

        for _ in 0..samples {
            let rec = offline_recommendation(&mut rng);
            let idx = OFFLINE_MOVIES
                .iter()
                .position(|(name, _)| rec.movie_name() == *name)
                .unwrap();
            counts[idx] += 1;
        }

        // Expected 2000 each; allow a generous band
        for count in counts {
            assert!((1700..=2300).contains(&count), "skewed counts: {:?}", counts);
        }
    }
}
