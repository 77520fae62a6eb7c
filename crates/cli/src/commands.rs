use anyhow::Context;
use chrono::{DateTime, Utc};
use tracing::info;

use stockpilot_ai::{AiJob, ReorderInsightJob};
use stockpilot_core::ProductId;
use stockpilot_inventory::InventoryAnalytics;

use crate::cli::{Cli, Command};
use crate::config::AppConfig;
use crate::render;
use crate::store::SnapshotFile;

/// Run a parsed command and return what should be printed.
pub fn execute(cli: Cli, config: &AppConfig) -> anyhow::Result<String> {
    let store = SnapshotFile::new(cli.snapshot);
    match cli.command {
        Command::Dashboard { now, json } => {
            dashboard(&store, config, now.unwrap_or_else(Utc::now), json)
        }
        Command::Products => products(&store, config),
        Command::Sell { product_id, units } => sell(&store, &product_id, units, Utc::now()),
        Command::Ask { question } => ask(&store, config, &question.join(" ")),
    }
}

pub fn dashboard(
    store: &SnapshotFile,
    config: &AppConfig,
    now: DateTime<Utc>,
    json: bool,
) -> anyhow::Result<String> {
    let snapshot = store.load()?;

    if json {
        let insight = ReorderInsightJob::new(snapshot, now)
            .with_config(config.analytics)
            .run()?;
        return Ok(serde_json::to_string_pretty(&insight)?);
    }

    let analytics = InventoryAnalytics::new(config.analytics);
    let metrics = snapshot.dashboard_metrics(&analytics, now);
    let suggestions = snapshot.reorder_suggestions(&analytics, now);
    Ok(render::dashboard(&metrics, &suggestions))
}

pub fn products(store: &SnapshotFile, config: &AppConfig) -> anyhow::Result<String> {
    let snapshot = store.load()?;
    Ok(render::products(
        &snapshot.products,
        config.analytics.low_stock_threshold,
    ))
}

pub fn sell(
    store: &SnapshotFile,
    product_id: &str,
    units: u64,
    at: DateTime<Utc>,
) -> anyhow::Result<String> {
    let product_id: ProductId = product_id.parse()?;
    let mut snapshot = store.load()?;

    let sale = snapshot
        .record_sale(&product_id, units, at)
        .with_context(|| format!("could not record sale of {product_id}"))?
        .clone();
    let remaining = snapshot
        .product(&product_id)
        .map(|p| p.quantity())
        .unwrap_or_default();

    store.save(&snapshot)?;
    info!(product = %product_id, units, remaining, "sale recorded");

    Ok(render::sale(&sale, remaining))
}

#[cfg(feature = "gemini")]
pub fn ask(store: &SnapshotFile, config: &AppConfig, question: &str) -> anyhow::Result<String> {
    use stockpilot_ai::{AssistantSession, GeminiClient};

    let gemini = config
        .gemini
        .clone()
        .context("the assistant needs GEMINI_API_KEY to be set")?;
    let snapshot = store.load()?;

    let mut session = AssistantSession::new(GeminiClient::new(gemini)?);
    session
        .ask(question, &snapshot.products)
        .context("the assistant could not answer; please try again later")
}

#[cfg(not(feature = "gemini"))]
pub fn ask(_store: &SnapshotFile, _config: &AppConfig, _question: &str) -> anyhow::Result<String> {
    anyhow::bail!("the assistant is not available in this build (enable the `gemini` feature)")
}
