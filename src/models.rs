use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// One entry in the store catalog: numeric app ID plus display name.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppId {
    /// The numeric identifier used in store URLs.
    #[serde(rename = "appid")]
    pub id: u32,
    /// The display name as returned by the catalog endpoint.
    pub name: String,
}

// Equality considers both fields, but ordering is by ID alone so a
// catalog dump can be sorted the way the store numbers its apps.
impl PartialOrd for AppId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for AppId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.id.cmp(&other.id)
    }
}

/// The top-level category a store page belongs to, taken from its breadcrumb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppCategory {
    Game,
    Dlc,
    Software,
    Hardware,
}

impl AppCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppCategory::Game => "game",
            AppCategory::Dlc => "dlc",
            AppCategory::Software => "software",
            AppCategory::Hardware => "hardware",
        }
    }
}

impl std::fmt::Display for AppCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Everything scraped from a single store page.
///
/// Category and price are always present: a page we cannot determine them
/// for fails the whole scrape. The remaining fields degrade to zero/absent
/// when the page legitimately omits them (unreleased apps, apps with no
/// community reviews, and so on).
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct AppRecord {
    /// Release date, or `None` when the page shows it in an unrecognized format.
    pub release_date: Option<NaiveDate>,
    /// Total number of user reviews.
    pub review_count: u32,
    /// Number of positive user reviews.
    pub positive_review_count: u32,
    /// Aggregated critic score, when the page carries one.
    pub meta_score: Option<i32>,
    /// Top-level store category.
    pub category: AppCategory,
    /// Current price in the store's default currency.
    pub price: f64,
    /// Developer name, when listed in the details block.
    pub developer: Option<String>,
    /// User tag name mapped to its accumulated vote count.
    pub tags: HashMap<String, u64>,
}

/// Wire shape of the catalog endpoint: `{"applist":{"apps":[...]}}`.
#[derive(Debug, Deserialize)]
pub(crate) struct AppListResponse {
    pub applist: AppList,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AppList {
    pub apps: Vec<AppId>,
}
