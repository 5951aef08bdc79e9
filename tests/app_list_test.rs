// tests/app_list_test.rs

use steamstore_core::{AppId, Result, SteamStoreClient};

#[test]
fn app_id_decodes_from_catalog_json() {
    let app: AppId = serde_json::from_str(r#"{"appid":10,"name":"Counter-Strike"}"#).unwrap();
    assert_eq!(app.id, 10);
    assert_eq!(app.name, "Counter-Strike");
}

#[test]
fn app_id_equality_uses_both_fields() {
    let a = AppId {
        id: 10,
        name: "Counter-Strike".to_string(),
    };
    let b = AppId {
        id: 10,
        name: "Counter-Strike".to_string(),
    };
    let renamed = AppId {
        id: 10,
        name: "Something Else".to_string(),
    };

    assert_eq!(a, b);
    assert_ne!(a, renamed);
}

#[test]
fn app_id_orders_by_id_alone() {
    let mut apps = vec![
        AppId {
            id: 730,
            name: "Counter-Strike: Global Offensive".to_string(),
        },
        AppId {
            id: 10,
            name: "Counter-Strike".to_string(),
        },
        AppId {
            id: 440,
            name: "Team Fortress 2".to_string(),
        },
    ];

    apps.sort();

    let ids: Vec<u32> = apps.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![10, 440, 730]);
}

/// Hits the live catalog endpoint; needs a network connection.
/// Run with: cargo test -- --ignored
#[tokio::test]
#[ignore]
async fn live_app_list_is_not_empty() -> Result<()> {
    let client = SteamStoreClient::new();

    let apps = client.get_app_list().await?;
    assert!(!apps.is_empty(), "catalog should list thousands of apps");

    println!("Fetched {} catalog entries.", apps.len());
    Ok(())
}

/// Scrapes a long-lived store page end to end; needs a network connection.
/// Run with: cargo test -- --ignored
#[tokio::test]
#[ignore]
async fn live_scrape_counter_strike() -> Result<()> {
    let client = SteamStoreClient::new();

    let record = client.get_app(730).await?;
    println!("{record:#?}");

    assert!(record.review_count > 0);
    assert!(!record.tags.is_empty());
    Ok(())
}
