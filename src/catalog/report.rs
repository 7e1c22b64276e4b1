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

//! Derived views over the cached catalog: royalty allocation and regional
//! communities.

use crate::model::{
    Artist, ArtistSummary, Community, RoyaltyReport, RoyaltyShare, RoyaltySplit,
};

const COMMUNITIES: &[(&str, &[&str])] = &[
    ("Twin Cities", &["SYM1", "Patrick Amunson", "Hans Larson Trio"]),
    ("DMV", &["Kiyan Saifi"]),
];

/// Applies the fixed split table to the artists currently known.
///
/// Splits naming an artist that is not in `artists` are left out, and the
/// total is the sum of what remains. Listening telemetry is not consulted.
pub(crate) fn royalty_report(
    artists: &[Artist],
    splits: &[RoyaltySplit],
    total_minutes: f64,
) -> RoyaltyReport {
    let breakdown = splits
        .iter()
        .filter(|split| artists.iter().any(|a| a.name == split.artist_name))
        .map(|split| RoyaltyShare {
            artist_name: split.artist_name.clone(),
            amount: split.amount,
        })
        .collect();

    RoyaltyReport::from_shares(total_minutes, breakdown)
}

pub(crate) fn communities(artists: &[Artist]) -> Vec<Community> {
    COMMUNITIES
        .iter()
        .map(|(name, members)| Community {
            name: name.to_string(),
            artists: artists
                .iter()
                .filter(|a| members.contains(&a.name.as_str()))
                .map(ArtistSummary::from)
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{catalog::fallback::fallback_artists, config::AppConfig};

    fn named(id: &str, name: &str) -> Artist {
        Artist {
            id: id.into(),
            name: name.into(),
            bio: None,
            image_url: None,
            links: vec![],
        }
    }

    #[test]
    fn fallback_report_totals_split() {
        let config = AppConfig::default();
        let report = royalty_report(
            &fallback_artists(),
            &config.royalty_splits,
            config.listening_minutes,
        );

        assert_eq!(report.breakdown.len(), 2);
        assert!((report.total_amount - 4.30).abs() < 1e-6);
        assert_eq!(report.total_minutes, 250.0);

        let sum: f64 = report.breakdown.iter().map(|s| s.amount).sum();
        assert!((sum - report.total_amount).abs() < 1e-6);
    }

    #[test]
    fn absent_artists_are_left_out() {
        let config = AppConfig::default();
        let report = royalty_report(
            &[named("9", "Bluesy Bob")],
            &config.royalty_splits,
            config.listening_minutes,
        );

        assert_eq!(report.breakdown.len(), 1);
        assert!((report.total_amount - 1.80).abs() < 1e-6);
    }

    #[test]
    fn empty_cache_yields_empty_report() {
        let report = royalty_report(&[], &AppConfig::default().royalty_splits, 250.0);

        assert!(report.breakdown.is_empty());
        assert_eq!(report.total_amount, 0.0);
    }

    #[test]
    fn communities_group_known_artists() {
        let artists = vec![
            named("1", "SYM1"),
            named("2", "Kiyan Saifi"),
            named("3", "Hans Larson Trio"),
            named("4", "Someone Else"),
        ];

        let groups = communities(&artists);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Twin Cities");
        assert_eq!(groups[0].artists.len(), 2);
        assert_eq!(groups[1].artists[0].id, "2");
    }
}
