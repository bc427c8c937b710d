//! Report assembly

use chrono::Utc;
use league_data::{LeagueLoader, LeagueSnapshot, LeagueSource, SnapshotSource};
use power_rankings::summaries::{headline_matchup, recap_context};
use power_rankings::RankingEngine;
use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::ServiceConfig;
use crate::error::{Result, ServiceError};
use crate::report::{DashboardReport, Pairing};

/// Loads league data and builds dashboard reports
pub struct DashboardService {
    config: ServiceConfig,
    loader: LeagueLoader,
    engine: RankingEngine,
}

impl DashboardService {
    /// Service reading the configured snapshot directory
    pub fn new(config: ServiceConfig) -> Result<Self> {
        let source = Arc::new(SnapshotSource::new(&config.source.snapshot_dir));
        Self::with_source(config, source)
    }

    pub fn with_source(config: ServiceConfig, source: Arc<dyn LeagueSource>) -> Result<Self> {
        let engine = RankingEngine::new(config.rankings.clone())?;
        let loader = LeagueLoader::new(source).with_schedule_weeks(config.rankings.schedule_weeks);
        Ok(Self { config, loader, engine })
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Load the league and build the report for `week`, or the league's
    /// latest scored week when none is given
    pub async fn build_report(&self, week: Option<u32>) -> Result<DashboardReport> {
        let snapshot = self.loader.load().await?;
        self.report_for(&snapshot, week)
    }

    /// Build the report from an already loaded snapshot
    pub fn report_for(&self, snapshot: &LeagueSnapshot, week: Option<u32>) -> Result<DashboardReport> {
        let schedule_weeks = self.config.rankings.schedule_weeks;
        let current_week = match week {
            Some(week) if week > schedule_weeks => {
                return Err(ServiceError::InvalidWeek { week, schedule_weeks });
            }
            Some(week) => week,
            None => snapshot.current_week().min(schedule_weeks),
        };
        info!("Building report for '{}' week {}", snapshot.league.name, current_week);

        let rankings = self.engine.rank_snapshot(snapshot, current_week);
        if rankings.is_empty() {
            warn!("No rankings for week {}; league data is incomplete or nothing is scored", current_week);
        }

        // Preseason still shows the week 1 slate
        let scoreboard_week = current_week.max(1);
        let scoreboard = self.engine.summarize_week(snapshot, scoreboard_week);
        let upcoming = if scoreboard_week < schedule_weeks {
            self.engine.summarize_week(snapshot, scoreboard_week + 1).iter().map(Pairing::from).collect()
        } else {
            Vec::new()
        };
        let headline = headline_matchup(&scoreboard).cloned();
        let recap_context = recap_context(&scoreboard);
        let top_performers = self.engine.top_performers(snapshot, scoreboard_week);
        let season_high = self.engine.season_high(snapshot);
        let playoffs = self.engine.forecast_playoffs(snapshot, &rankings);
        let draft = self.engine.draft_board(snapshot, &rankings);

        Ok(DashboardReport {
            league_name: snapshot.league.name.clone(),
            season: snapshot.league.season.clone(),
            current_week,
            scoreboard_week,
            generated_at: Utc::now(),
            trade_deadline_passed: snapshot.league.is_trade_deadline_passed(),
            rankings,
            scoreboard,
            upcoming,
            headline,
            recap_context,
            top_performers,
            season_high,
            playoffs,
            draft,
        })
    }
}

/// Write the report to `path`, or stdout when no path is given
pub async fn write_report(report: &DashboardReport, path: Option<&Path>, pretty: bool) -> anyhow::Result<()> {
    use anyhow::Context;
    use tokio::io::AsyncWriteExt;

    let json = report.to_json(pretty).context("Failed to serialize report")?;
    match path {
        Some(path) => {
            tokio::fs::write(path, json.as_bytes())
                .await
                .with_context(|| format!("Failed to write report to {:?}", path))?;
            info!("Report written to {:?}", path);
        }
        None => {
            let mut stdout = tokio::io::stdout();
            stdout.write_all(json.as_bytes()).await.context("Failed to write report")?;
            stdout.write_all(b"\n").await.context("Failed to write report")?;
            stdout.flush().await.context("Failed to write report")?;
        }
    }
    Ok(())
}
