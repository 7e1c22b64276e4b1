// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Loads the catalog and reports what a listener would see on the home page
//! and the royalties dashboard.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use campfire::{config, session::Session};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = config::load_config();

    let session = Session::connect(config).context("Failed to initialise session")?;
    session.initialize().await;

    report(&session);

    session.dispose();
    Ok(())
}

fn report(session: &Session) {
    let catalog = session.catalog();

    for stat in catalog.platform_stats() {
        info!("{}: {}", stat.label, stat.value);
    }

    for track in catalog.featured_tracks() {
        info!("Featured: {} by {} ({})", track.title, track.artist_name, track.genre);
    }

    let royalties = catalog.compute_royalty_report();
    info!(
        "{} minutes listened, ${:.2} contributed",
        royalties.total_minutes, royalties.total_amount
    );
    for share in &royalties.breakdown {
        info!(
            "  {}: ${:.2} ({:.0}%)",
            share.artist_name,
            share.amount,
            royalties.share_percent(share)
        );
    }
}
