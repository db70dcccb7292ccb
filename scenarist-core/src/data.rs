use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A selectable answer within a scenario
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub label: String,
    #[serde(alias = "outcomeText", alias = "result")]
    pub outcome: String,
    #[serde(default)]
    pub takeaway: Option<String>,
}

/// A practice exercise: a situation plus its choices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub id: u32,
    #[serde(default)]
    pub title: String,
    #[serde(alias = "body", alias = "prompt")]
    pub situation: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Scenario {
    /// Label used for headings and the recency list.
    ///
    /// Falls back to `"Scenario {id}"` when the title is blank.
    #[must_use]
    pub fn display_title(&self) -> String {
        let title = self.title.trim();
        if title.is_empty() {
            format!("Scenario {}", self.id)
        } else {
            title.to_string()
        }
    }

    /// First choice whose id equals `choice_id` exactly.
    #[must_use]
    pub fn find_choice(&self, choice_id: &str) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == choice_id)
    }
}

/// Grouping of packs shown on the category pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

/// Metadata for a bundle of scenarios
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pack {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Slug of the owning category
    #[serde(alias = "categorySlug", alias = "category_slug")]
    pub category: String,
    /// File name of the scenario collection inside the data directory
    #[serde(alias = "scenariosFile")]
    pub scenarios_file: String,
    #[serde(default)]
    pub premium: bool,
    #[serde(default)]
    pub price_label: Option<String>,
    /// External purchase link; payment never happens on this site
    #[serde(default)]
    pub buy_url: Option<String>,
}

/// A static article on the blog pages
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlogPost {
    pub slug: String,
    pub title: String,
    pub published: NaiveDate,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub body: Vec<String>,
}

impl BlogPost {
    /// Publication date formatted for display, e.g. `March 4, 2024`.
    #[must_use]
    pub fn published_label(&self) -> String {
        self.published.format("%B %-d, %Y").to_string()
    }
}

/// Parse a JSON array of records.
///
/// # Errors
///
/// Returns an error if the JSON is not an array of `T`.
pub fn records_from_json<T>(json: &str) -> Result<Vec<T>, serde_json::Error>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(json)
}
