use crate::error::{Result, ScraperError};
use crate::models::{AppCategory, AppRecord};
use chrono::NaiveDate;
use regex::Regex;
use scraper::{ElementRef, Html, Selector};
use serde::Deserialize;
use std::collections::HashMap;

/// Date formats seen on store pages, tried in order; first match wins.
/// Formats without a day (or month) default the missing part to 1.
const RELEASE_DATE_FORMATS: &[&str] = &[
    "%b %d, %Y",
    "%B %d, %Y",
    "%b %d %Y",
    "%B %d %Y",
    "%b %Y",
    "%B %Y",
    "%b, %Y",
    "%B, %Y",
    "%Y",
];

/// Parses a raw release-date string against the known store formats.
/// Returns `None` when no format matches.
pub fn parse_release_date(raw: &str) -> Option<NaiveDate> {
    let token_count = raw.split_whitespace().count();
    for fmt in RELEASE_DATE_FORMATS {
        // A space in a chrono format string also matches empty input,
        // so "Jun 2019" would satisfy "%b %d %Y" as day 20 of year 19.
        // Only try formats with as many tokens as the input has.
        if fmt.split_whitespace().count() != token_count {
            continue;
        }
        let attempt = if fmt.contains("%d") {
            NaiveDate::parse_from_str(raw, fmt)
        } else if *fmt == "%Y" {
            // Bare year: January 1st of that year.
            NaiveDate::parse_from_str(&format!("1 1 {raw}"), &format!("%d %m {fmt}"))
        } else {
            // Month-and-year formats: parse as the first of the month.
            NaiveDate::parse_from_str(&format!("1 {raw}"), &format!("%d {fmt}"))
        };
        if let Ok(date) = attempt {
            return Some(date);
        }
    }
    None
}

/// Extracts the release date from the page.
///
/// The date container is mandatory; a page without it (or with an empty
/// date) is structurally unexpected. A date in an unrecognized format is
/// not an error, just an absent value.
pub fn release_date(doc: &Html) -> Result<Option<NaiveDate>> {
    let selector = Selector::parse("div.release_date > div.date").unwrap();

    let date_element = doc
        .select(&selector)
        .next()
        .ok_or_else(|| ScraperError::ElementNotFound("release date element".to_string()))?;

    let date_text = date_element.text().collect::<String>();
    let date_text = date_text.trim();
    if date_text.is_empty() {
        return Err(ScraperError::ElementNotFound(
            "release date text".to_string(),
        ));
    }

    Ok(parse_release_date(date_text))
}

fn review_input_value(container: ElementRef<'_>, id: &str) -> Result<u32> {
    let selector = Selector::parse(&format!("input#{id}")).unwrap();
    let Some(input) = container.select(&selector).next() else {
        // Pages without community reviews simply omit the input.
        return Ok(0);
    };

    let raw = input
        .value()
        .attr("value")
        .ok_or_else(|| ScraperError::ParsingError(format!("{id} has no value attribute")))?;
    raw.trim()
        .parse()
        .map_err(|_| ScraperError::ParsingError(format!("{id} is not an integer: {raw:?}")))
}

/// Extracts `(total_reviews, positive_reviews)` from the review summary.
///
/// The summary container is mandatory; either count defaults to 0 when
/// its input is missing from the page.
pub fn review_counts(doc: &Html) -> Result<(u32, u32)> {
    let container_selector = Selector::parse("#app_reviews_hash").unwrap();

    let container = doc
        .select(&container_selector)
        .next()
        .ok_or_else(|| ScraperError::ElementNotFound("app reviews container".to_string()))?;

    let total = review_input_value(container, "review_summary_num_reviews")?;
    let positive = review_input_value(container, "review_summary_num_positive_reviews")?;

    Ok((total, positive))
}

/// Extracts the aggregated critic score, if the page carries one.
///
/// The score sits in a div whose class contains "score" inside the
/// metascore area. Wrappers nest, so the last matching div that parses
/// as an integer wins.
pub fn meta_score(doc: &Html) -> Option<i32> {
    let selector = Selector::parse("#game_area_metascore > div").unwrap();

    let mut score = None;
    for div in doc.select(&selector) {
        let Some(class) = div.value().attr("class") else {
            continue;
        };
        if !class.contains("score") {
            continue;
        }
        if let Ok(parsed) = div.text().collect::<String>().trim().parse::<i32>() {
            score = Some(parsed);
        }
    }
    score
}

#[derive(Deserialize)]
struct TagEntry {
    name: String,
    count: u64,
}

/// Extracts user tags and their vote counts from the tag modal script.
///
/// The tag data lives in a JSON array passed to `InitAppTagModal` inside
/// one of the page's script elements. The first script carrying the
/// marker ends the scan; duplicate tag names have their votes summed.
/// Pages without the script yield an empty map.
pub fn tags(doc: &Html) -> HashMap<String, u64> {
    let selector = Selector::parse("script").unwrap();
    let marker = Regex::new(r"InitAppTagModal[^\[]+(\[[^\]]+\])").unwrap();

    let mut tags = HashMap::new();
    for script in doc.select(&selector) {
        let text = script.text().collect::<String>();
        let Some(captures) = marker.captures(&text) else {
            continue;
        };
        if let Ok(entries) = serde_json::from_str::<Vec<TagEntry>>(&captures[1]) {
            for entry in entries {
                *tags.entry(entry.name).or_insert(0) += entry.count;
            }
        }
        break;
    }
    tags
}

/// Determines the store category from the breadcrumb trail.
///
/// Games may be overridden to DLC by a later breadcrumb link; an
/// unrecognized top-level link is an error.
pub fn category(doc: &Html) -> Result<AppCategory> {
    let selector = Selector::parse("div.breadcrumbs > div.blockbg > a").unwrap();

    let links: Vec<String> = doc
        .select(&selector)
        .map(|a| a.text().collect::<String>().trim().to_string())
        .collect();

    let Some(first) = links.first() else {
        return Err(ScraperError::ElementNotFound(
            "breadcrumb links".to_string(),
        ));
    };

    match first.as_str() {
        "All Games" => {
            if links[1..].iter().any(|l| l == "Downloadable Content") {
                Ok(AppCategory::Dlc)
            } else {
                Ok(AppCategory::Game)
            }
        }
        "All Software" => Ok(AppCategory::Software),
        "All Hardware" => Ok(AppCategory::Hardware),
        other => Err(ScraperError::UnknownCategory(other.to_string())),
    }
}

/// Extracts the price from the page's itemprop meta tag. Mandatory.
pub fn price(doc: &Html) -> Result<f64> {
    let selector = Selector::parse(r#"meta[itemprop="price"]"#).unwrap();

    let meta = doc
        .select(&selector)
        .next()
        .ok_or_else(|| ScraperError::ElementNotFound("price meta tag".to_string()))?;

    let content = meta
        .value()
        .attr("content")
        .ok_or_else(|| ScraperError::ParsingError("price meta tag has no content".to_string()))?;

    content
        .parse()
        .map_err(|_| ScraperError::ParsingError(format!("price is not a number: {content:?}")))
}

/// Extracts the developer name from the details block, if listed.
///
/// The details block holds several labelled rows (developer, publisher,
/// release date); the one whose bold label reads "Developer:" links to
/// the developer's store page.
pub fn developer(doc: &Html) -> Option<String> {
    let row_selector = Selector::parse("div.details_block > div.dev_row").unwrap();
    let label_selector = Selector::parse("b").unwrap();
    let link_selector = Selector::parse("a").unwrap();

    for row in doc.select(&row_selector) {
        let Some(label) = row.select(&label_selector).next() else {
            continue;
        };
        if label.text().collect::<String>().trim() != "Developer:" {
            continue;
        }
        return row
            .select(&link_selector)
            .next()
            .map(|a| a.text().collect::<String>().trim().to_string());
    }
    None
}

/// Runs every field extractor against one parsed page and assembles the
/// result. Failures from the mandatory fields (release date container,
/// review container, breadcrumb, price) propagate unchanged; optional
/// fields degrade to zero/absent.
pub fn scrape_app_page(doc: &Html) -> Result<AppRecord> {
    let release_date = release_date(doc)?;
    let (review_count, positive_review_count) = review_counts(doc)?;
    let meta_score = meta_score(doc);
    let category = category(doc)?;
    let price = price(doc)?;
    let developer = developer(doc);
    let tags = tags(doc);

    Ok(AppRecord {
        release_date,
        review_count,
        positive_review_count,
        meta_score,
        category,
        price,
        developer,
        tags,
    })
}
