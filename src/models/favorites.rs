use serde::Serialize;

use super::Recommendation;

/// Session-lifetime list of recommendations the user chose to keep
///
/// Insertion order is preserved and no two entries share a movie name.
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
#[serde(transparent)]
pub struct Favorites {
    items: Vec<Recommendation>,
}

impl Favorites {
    /// Creates an empty favorites list
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a recommendation unless one with the same movie name is present.
    /// Returns whether it was inserted.
    pub fn add(&mut self, recommendation: Recommendation) -> bool {
        if self
            .items
            .iter()
            .any(|r| r.movie_name() == recommendation.movie_name())
        {
            return false;
        }
        self.items.push(recommendation);
        true
    }

    /// Removes every entry equal to `recommendation`, returning how many went.
    pub fn remove(&mut self, recommendation: &Recommendation) -> usize {
        let before = self.items.len();
        self.items.retain(|r| r != recommendation);
        before - self.items.len()
    }

    pub fn list(&self) -> &[Recommendation] {
        &self.items
    }

    pub fn contains(&self, recommendation: &Recommendation) -> bool {
        self.items.contains(recommendation)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(name: &str, reason: &str) -> Recommendation {
        Recommendation::new(name, reason, None)
    }

    #[test]
    fn test_new_favorites() {
        let favorites = Favorites::new();
        assert!(favorites.is_empty());
        assert!(favorites.list().is_empty());
    }

    #[test]
    fn test_add_is_idempotent_by_name() {
        let mut favorites = Favorites::new();
        assert!(favorites.add(rec("星际穿越", "科幻")));
        assert!(!favorites.add(rec("星际穿越", "科幻")));
        // Same name, different reason is still a duplicate
        assert!(!favorites.add(rec("星际穿越", "另一个理由")));
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_remove_leaves_others() {
        let mut favorites = Favorites::new();
        let a = rec("阿甘正传", "人生");
        let b = rec("美丽人生", "战争");
        favorites.add(a.clone());
        favorites.add(b.clone());

        assert_eq!(favorites.remove(&a), 1);
        assert_eq!(favorites.list(), &[b]);
    }

    #[test]
    fn test_remove_requires_matching_reason() {
        let mut favorites = Favorites::new();
        favorites.add(rec("盗梦空间", "梦境"));

        assert_eq!(favorites.remove(&rec("盗梦空间", "别的")), 0);
        assert_eq!(favorites.len(), 1);
    }

    #[test]
    fn test_preserves_insertion_order() {
        let mut favorites = Favorites::new();
        for name in ["c", "a", "b"] {
            favorites.add(rec(name, "r"));
        }
        let names: Vec<&str> = favorites.list().iter().map(|r| r.movie_name()).collect();
        assert_eq!(names, vec!["c", "a", "b"]);
    }
}
