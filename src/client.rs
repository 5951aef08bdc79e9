use crate::error::{Result, ScraperError};
use crate::models::{AppId, AppListResponse, AppRecord};
use crate::parsers;
use reqwest::StatusCode;
use reqwest::header::{COOKIE, HeaderMap, USER_AGENT};
use scraper::Html;
use std::time::Duration;

const APP_LIST_URL: &str = "http://api.steampowered.com/ISteamApps/GetAppList/v2";

// Pretend the age check was already answered so the store serves the app
// page directly instead of the interstitial.
const AGE_GATE_COOKIE: &str = "lastagecheckage=1-January-2000; birthtime=946702801";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

pub struct SteamStoreClient {
    client: reqwest::Client,
    store_url: String,
}

impl SteamStoreClient {
    /// Builds a client carrying the age-gate cookie and a 10-second
    /// timeout on every request. Create it once and reuse it; dropping
    /// it releases the connection pool.
    pub fn new() -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(COOKIE, AGE_GATE_COOKIE.parse().unwrap());
        headers.insert(
            USER_AGENT,
            "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/100.0.0.0 Safari/537.36"
                .parse()
                .unwrap(),
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap();

        Self {
            client,
            store_url: "https://store.steampowered.com".to_string(),
        }
    }

    /// The store page URL for an app ID.
    pub fn app_url(&self, app_id: u32) -> String {
        format!("{}/app/{}", self.store_url, app_id)
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;

        if response.status() != StatusCode::OK {
            return Err(ScraperError::BadStatus(response.status()));
        }

        Ok(response.text().await?)
    }

    /// Fetches the full app catalog: every app ID and name the store
    /// knows about, in server-provided order.
    pub async fn get_app_list(&self) -> Result<Vec<AppId>> {
        let response = self.client.get(APP_LIST_URL).send().await?;

        if response.status() != StatusCode::OK {
            return Err(ScraperError::BadStatus(response.status()));
        }

        let decoded: AppListResponse = response.json().await?;
        Ok(decoded.applist.apps)
    }

    /// Fetches the raw HTML of an app's store page.
    pub async fn get_app_page(&self, app_id: u32) -> Result<String> {
        self.get_text(&self.app_url(app_id)).await
    }

    /// Fetches an app's store page and scrapes it into an [`AppRecord`].
    pub async fn get_app(&self, app_id: u32) -> Result<AppRecord> {
        let html = self.get_app_page(app_id).await?;
        let document = Html::parse_document(&html);
        parsers::app_page::scrape_app_page(&document)
    }
}
