use serde::{Deserialize, Serialize};

/// A card the live search can hide, with its searchable text prepared once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchCard {
    pub id: String,
    haystack: String,
}

impl SearchCard {
    pub fn new(id: &str, title: &str, trainer: &str, category: &str) -> Self {
        let haystack = [title, trainer, category]
            .iter()
            .filter(|part| !part.is_empty())
            .copied()
            .collect::<Vec<_>>()
            .join(" ")
            .to_lowercase();
        Self {
            id: id.to_string(),
            haystack,
        }
    }

    pub fn haystack(&self) -> &str {
        &self.haystack
    }

    pub fn matches(&self, needle: &str) -> bool {
        self.haystack.contains(needle)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LiveSearch {
    cards: Vec<SearchCard>,
    needle: String,
}

impl LiveSearch {
    pub fn new(cards: Vec<SearchCard>) -> Self {
        Self {
            cards,
            needle: String::new(),
        }
    }

    pub fn set_query(&mut self, query: &str) {
        self.needle = query.trim().to_lowercase();
    }

    pub fn query(&self) -> &str {
        &self.needle
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.cards
            .iter()
            .find(|card| card.id == id)
            .map_or(true, |card| card.matches(&self.needle))
    }

    pub fn visible_ids(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|card| card.matches(&self.needle))
            .map(|card| card.id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn python_card() -> SearchCard {
        SearchCard::new("py", "Python for Data Science", "Amit Sharma", "Data")
    }

    #[test]
    fn haystack_is_joined_and_lowercased() {
        assert_eq!(
            python_card().haystack(),
            "python for data science amit sharma data"
        );
        assert_eq!(SearchCard::new("x", "Title", "", "Cat").haystack(), "title cat");
    }

    #[test]
    fn substring_match_toggles_visibility() {
        let mut search = LiveSearch::new(vec![
            python_card(),
            SearchCard::new("js", "JavaScript Essentials", "A. Rao", "Programming"),
        ]);

        search.set_query("python");
        assert!(search.is_visible("py"));
        assert!(!search.is_visible("js"));

        search.set_query("  RAO ");
        assert_eq!(search.visible_ids(), vec!["js"]);

        search.set_query("zzz");
        assert!(!search.is_visible("py"));
        assert!(search.visible_ids().is_empty());

        search.set_query("");
        assert_eq!(search.visible_ids().len(), 2);
    }
}
