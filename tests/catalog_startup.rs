use std::sync::Arc;

use async_trait::async_trait;
use campfire::{
    catalog::{CatalogError, CatalogService, CatalogSource},
    config::AppConfig,
    model::{Artist, Track},
};

/// Serves a one-artist catalog, or fails every request when `online` is false.
struct ScenarioSource {
    online: bool,
}

impl ScenarioSource {
    fn check(&self) -> Result<(), CatalogError> {
        if self.online {
            Ok(())
        } else {
            Err(CatalogError::FetchFailed {
                status: None,
                reason: "connection refused".into(),
            })
        }
    }

    fn artist() -> Artist {
        Artist {
            id: "a1".into(),
            name: "X".into(),
            bio: None,
            image_url: None,
            links: vec![],
        }
    }

    fn track() -> Track {
        Track {
            id: "t1".into(),
            title: "First Light".into(),
            artist_id: "a1".into(),
            artist_name: "X".into(),
            genre: "Folk".into(),
            url: "https://cdn.example.com/t1.mp3".into(),
            file_type: "mp3".into(),
        }
    }
}

#[async_trait]
impl CatalogSource for ScenarioSource {
    async fn artists(&self) -> Result<Vec<Artist>, CatalogError> {
        self.check()?;
        Ok(vec![Self::artist()])
    }

    async fn artist(&self, id: &str) -> Result<Option<Artist>, CatalogError> {
        self.check()?;
        Ok(Some(Self::artist()).filter(|a| a.id == id))
    }

    async fn artist_tracks(&self, artist_id: &str) -> Result<Vec<Track>, CatalogError> {
        self.check()?;
        Ok(vec![Self::track()]
            .into_iter()
            .filter(|t| t.artist_id == artist_id)
            .collect())
    }

    async fn tracks(&self) -> Result<Vec<Track>, CatalogError> {
        self.check()?;
        Ok(vec![Self::track()])
    }

    async fn track(&self, id: &str) -> Result<Option<Track>, CatalogError> {
        self.check()?;
        Ok(Some(Self::track()).filter(|t| t.id == id))
    }
}

fn catalog(online: bool) -> CatalogService {
    CatalogService::new(&AppConfig::default(), Arc::new(ScenarioSource { online }))
}

#[tokio::test]
async fn catalog_is_populated_with_network_available() {
    let catalog = catalog(true);

    catalog.initialize().await;

    assert!(!catalog.read_artists_cached().is_empty());
    assert!(!catalog.read_tracks_cached().is_empty());
    assert_eq!(
        catalog.lookup_tracks_for_artist("a1").await.unwrap()[0].id,
        "t1"
    );
    assert!(
        catalog
            .lookup_tracks_for_artist("nonexistent")
            .await
            .unwrap()
            .is_empty()
    );
}

#[tokio::test]
async fn catalog_is_populated_with_network_unavailable() {
    let catalog = catalog(false);

    catalog.initialize().await;
    catalog.wait_until_ready().await;

    assert!(catalog.is_ready());
    assert!(!catalog.read_artists_cached().is_empty());
    assert!(!catalog.read_tracks_cached().is_empty());
}

#[tokio::test]
async fn royalty_report_balances_in_both_conditions() {
    for online in [true, false] {
        let catalog = catalog(online);
        catalog.initialize().await;

        let report = catalog.compute_royalty_report();
        let sum: f64 = report.breakdown.iter().map(|s| s.amount).sum();

        assert!((sum - report.total_amount).abs() < 1e-6);
    }
}
