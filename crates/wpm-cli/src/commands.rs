use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result, bail};
use comfy_table::{Cell, CellAlignment, Table};
use tracing::{info, info_span};

use wpm_cli::config::{PreferenceOverrides, build_request, load_preference_file};
use wpm_core::{RankingOutcome, rank_flights};
use wpm_ingest::{IngestOptions, load_flights};
use wpm_model::{Criterion, PreferenceWeights};
use wpm_report::{ExportFormat, export_ranked};

use crate::cli::RankArgs;
use crate::summary::{align_column, apply_table_style, dim_cell, header_cell};

/// What a `rank` invocation produced.
pub struct RankResult {
    pub dataset: PathBuf,
    pub outcome: RankingOutcome,
    pub top: usize,
    pub show_all: bool,
    pub output: Option<PathBuf>,
}

pub fn run_criteria() -> Result<()> {
    let defaults = PreferenceWeights::default();
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Criterion"),
        header_cell("Kind"),
        header_cell("Default weight"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for criterion in Criterion::ALL {
        table.add_row(vec![
            Cell::new(criterion.name()),
            dim_cell(criterion.kind()),
            Cell::new(defaults.get(criterion)),
            Cell::new(criterion.description()),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_rank(args: &RankArgs) -> Result<RankResult> {
    let span = info_span!("rank_command", dataset = %args.dataset.display());
    let _guard = span.enter();
    let start = Instant::now();

    // =========================================================================
    // Stage 1: Preferences
    // =========================================================================
    let file = args
        .preferences
        .as_deref()
        .map(load_preference_file)
        .transpose()?;
    let overrides = PreferenceOverrides {
        weights: args.weights.clone(),
        departure: args.departure.clone(),
        arrival: args.arrival.clone(),
        rank_method: args.rank_method.map(Into::into),
    };

    // =========================================================================
    // Stage 2: Ingest
    // =========================================================================
    let delimiter = match args.delimiter.as_bytes() {
        [byte] => *byte,
        _ => bail!("delimiter must be a single byte, got '{}'", args.delimiter),
    };
    let dataset = info_span!("ingest")
        .in_scope(|| load_flights(&args.dataset, IngestOptions::default().with_delimiter(delimiter)))
        .with_context(|| format!("load {}", args.dataset.display()))?;

    // =========================================================================
    // Stage 3: Rank
    // =========================================================================
    let request = build_request(dataset.records.clone(), file.as_ref(), &overrides)?;
    let outcome = rank_flights(&request).context("rank flights")?;

    // =========================================================================
    // Stage 4: Export
    // =========================================================================
    if let Some(path) = &args.output {
        let format = args
            .format
            .map(ExportFormat::from)
            .or_else(|| ExportFormat::from_path(path))
            .unwrap_or_default();
        info_span!("export", format = format.as_str())
            .in_scope(|| export_ranked(path, format, &dataset, &outcome))
            .with_context(|| format!("write {}", path.display()))?;
    }

    info!(
        record_count = outcome.len(),
        duration_ms = start.elapsed().as_millis(),
        "rank command complete"
    );
    Ok(RankResult {
        dataset: args.dataset.clone(),
        outcome,
        top: args.top,
        show_all: args.all,
        output: args.output.clone(),
    })
}
