// Declare all our modules
mod client;
mod error;
mod models;
mod parsers;

// Publicly export the parts of our library that users will need
pub use client::SteamStoreClient;
pub use error::{Result, ScraperError};
pub use models::*; // Exposes AppId, AppRecord, AppCategory
pub use parsers::app_page::{
    category, developer, meta_score, parse_release_date, price, release_date, review_counts,
    scrape_app_page, tags,
};
