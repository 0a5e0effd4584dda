//! Workshop catalog, details popup payloads and the newsletter thank-you.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DetailsError;
use crate::search::{LiveSearch, SearchCard};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Workshop {
    pub title: &'static str,
    pub date: &'static str,
    pub category: &'static str,
    pub trainer: &'static str,
    pub image: &'static str,
    pub summary: &'static str,
}

impl Workshop {
    pub fn search_card(&self, id: &str) -> SearchCard {
        SearchCard::new(id, self.title, self.trainer, self.category)
    }

    /// JSON handed to the details popup.
    pub fn details_payload(&self) -> String {
        serde_json::json!({
            "title": self.title,
            "date": self.date,
            "desc": self.summary,
        })
        .to_string()
    }
}

pub static WORKSHOPS: [Workshop; 5] = [
    Workshop {
        title: "Python for Data Science",
        date: "Jun 15–16, 2023",
        category: "Data",
        trainer: "Amit Sharma",
        image: "https://images.unsplash.com/photo-1515879218367-8466d910aaa4?q=80&w=1200&auto=format&fit=crop",
        summary: "NumPy, pandas and plotting from first principles.",
    },
    Workshop {
        title: "Advanced MATLAB Programming",
        date: "Jun 20–21, 2023",
        category: "Programming",
        trainer: "Priya Patel",
        image: "https://images.unsplash.com/photo-1555421689-43cad7100751?q=80&w=1200&auto=format&fit=crop",
        summary: "Vectorised code, toolboxes and performance profiling.",
    },
    Workshop {
        title: "Introduction to Scilab",
        date: "Jun 25–26, 2023",
        category: "Computation",
        trainer: "Rajesh Kumar",
        image: "https://images.unsplash.com/photo-1504384308090-c894fdcc538d?q=80&w=1200&auto=format&fit=crop",
        summary: "Numerical computation with a free and open source toolkit.",
    },
    Workshop {
        title: "JavaScript Essentials",
        date: "Monthly",
        category: "Programming",
        trainer: "A. Rao",
        image: "https://images.unsplash.com/photo-1555066931-4365d14bab8c?q=80&w=1200&auto=format&fit=crop",
        summary: "The language core, the DOM and modern tooling.",
    },
    Workshop {
        title: "Data Visualization",
        date: "Monthly",
        category: "Data",
        trainer: "K. Singh",
        image: "https://images.unsplash.com/photo-1517148815978-75f6acaaf32c?q=80&w=1200&auto=format&fit=crop",
        summary: "Telling honest stories with charts.",
    },
];

/// Number of workshops shown in the featured grid above the catalog.
pub const FEATURED_COUNT: usize = 3;

pub fn featured() -> &'static [Workshop] {
    &WORKSHOPS[..FEATURED_COUNT]
}

/// DOM id of the `index`th workshop card.
pub fn card_id(index: usize) -> String {
    format!("workshop-{index}")
}

/// Live search over the cards the featured grid actually shows.
pub fn featured_search() -> LiveSearch {
    LiveSearch::new(
        featured()
            .iter()
            .enumerate()
            .map(|(index, workshop)| workshop.search_card(&card_id(index)))
            .collect(),
    )
}

pub const PULSE_STAGGER: Duration = Duration::from_millis(120);
pub const PULSE_DURATION: Duration = Duration::from_millis(1500);

/// When each featured card starts pulsing after a "browse" click.
pub fn pulse_schedule(count: usize) -> Vec<(usize, Duration)> {
    (0..count)
        .map(|index| (index, PULSE_STAGGER * index as u32))
        .collect()
}

/// The full catalog list, built the first time it is asked for.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    materialized: bool,
    visible: bool,
}

impl Catalog {
    /// Returns true when this call materialized the cards.
    pub fn show_all(&mut self) -> bool {
        let first = !self.materialized;
        self.materialized = true;
        self.visible = true;
        first
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn cards(&self) -> &'static [Workshop] {
        if self.materialized {
            &WORKSHOPS
        } else {
            &[]
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailsPayload {
    pub title: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub desc: Option<String>,
}

impl DetailsPayload {
    pub fn parse(raw: &str) -> Result<Self, DetailsError> {
        let payload: Self = serde_json::from_str(raw)?;
        if payload.title.trim().is_empty() {
            return Err(DetailsError::MissingTitle);
        }
        Ok(payload)
    }
}

/// Contents of the confirmation dialog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ModalBody {
    #[default]
    Empty,
    BookingConfirmed(Vec<(String, String)>),
    WorkshopDetails {
        title: String,
        date: String,
        desc: String,
    },
    Newsletter {
        email: String,
    },
}

impl ModalBody {
    /// Malformed payloads degrade to an empty body.
    pub fn from_details(raw: &str) -> Self {
        match DetailsPayload::parse(raw) {
            Ok(payload) => Self::WorkshopDetails {
                title: payload.title,
                date: payload.date.unwrap_or_default(),
                desc: payload.desc.unwrap_or_default(),
            },
            Err(err) => {
                tracing::warn!(error = %err, "details payload ignored");
                Self::Empty
            }
        }
    }

    pub fn booking<'a>(fields: impl IntoIterator<Item = (&'a String, &'a String)>) -> Self {
        Self::BookingConfirmed(
            fields
                .into_iter()
                .map(|(k, v)| (k.clone(), v.clone()))
                .collect(),
        )
    }

    /// `None` when the sign-up form was submitted without an address.
    pub fn newsletter(email: &str) -> Option<Self> {
        if email.is_empty() {
            return None;
        }
        Some(Self::Newsletter {
            email: email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_materializes_once() {
        let mut catalog = Catalog::default();
        assert!(catalog.cards().is_empty());
        assert!(!catalog.is_visible());

        assert!(catalog.show_all());
        assert_eq!(catalog.cards().len(), 5);
        assert!(!catalog.show_all());
        assert!(catalog.is_visible());
    }

    #[test]
    fn details_round_trip_from_a_workshop() {
        let body = ModalBody::from_details(&WORKSHOPS[0].details_payload());
        assert_eq!(
            body,
            ModalBody::WorkshopDetails {
                title: "Python for Data Science".to_string(),
                date: "Jun 15–16, 2023".to_string(),
                desc: "NumPy, pandas and plotting from first principles.".to_string(),
            }
        );
    }

    #[test]
    fn malformed_details_degrade_to_empty() {
        assert_eq!(ModalBody::from_details("{not json"), ModalBody::Empty);
        assert_eq!(ModalBody::from_details(r#"{"date":"Monthly"}"#), ModalBody::Empty);
        assert_eq!(ModalBody::from_details(r#"{"title":"  "}"#), ModalBody::Empty);
        assert!(matches!(
            DetailsPayload::parse(r#"{"title":""}"#),
            Err(DetailsError::MissingTitle)
        ));
    }

    #[test]
    fn optional_detail_fields_default_to_blank() {
        assert_eq!(
            ModalBody::from_details(r#"{"title":"Scilab"}"#),
            ModalBody::WorkshopDetails {
                title: "Scilab".to_string(),
                date: String::new(),
                desc: String::new(),
            }
        );
    }

    #[test]
    fn newsletter_needs_an_address() {
        assert_eq!(ModalBody::newsletter(""), None);
        assert!(matches!(
            ModalBody::newsletter("me@example.com"),
            Some(ModalBody::Newsletter { .. })
        ));
    }

    #[test]
    fn featured_cards_pulse_in_sequence() {
        let schedule = pulse_schedule(featured().len());
        assert_eq!(
            schedule,
            vec![
                (0, Duration::ZERO),
                (1, Duration::from_millis(120)),
                (2, Duration::from_millis(240)),
            ]
        );
    }

    #[test]
    fn search_cards_use_title_trainer_and_category() {
        assert_eq!(
            WORKSHOPS[0].search_card("w0").haystack(),
            "python for data science amit sharma data"
        );
    }

    #[test]
    fn search_ignores_workshops_outside_the_featured_grid() {
        let mut search = featured_search();
        // Only "JavaScript Essentials" (not featured) has this trainer.
        search.set_query("rao");
        assert!(search.visible_ids().is_empty());
        assert!((0..FEATURED_COUNT).all(|index| !search.is_visible(&card_id(index))));

        search.set_query("data");
        assert_eq!(search.visible_ids(), vec!["workshop-0"]);
    }
}
