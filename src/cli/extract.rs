use std::{path::PathBuf, sync::Arc};

use chrono::NaiveDate;
use tokio_util::sync::CancellationToken;

use crate::{
    cli::load_lookup,
    config::Settings,
    error::Res,
    info,
    management::RecordFileManager,
    pipeline::Pipeline,
    region::{Region, RegionLookup},
    spotify::ReqwestTransport,
    success,
    types::ExtractionTableRow,
    warning,
};

#[derive(Debug, Clone)]
pub struct ExtractOptions {
    pub region: Region,
    pub date: NaiveDate,
    /// Restricts the run to these ISO codes of the region.
    pub countries: Vec<String>,
    pub output_dir: PathBuf,
    /// Skips countries already stored for the date.
    pub skip_existing: bool,
    pub markets_file: Option<PathBuf>,
    pub quiet: bool,
}

/// Runs one extraction per selected country and stores each result.
///
/// Every country is its own unit of work; the first fatal error stops the
/// command, files of countries finished before it stay in place.
pub async fn extract(
    opts: ExtractOptions,
    cancel: CancellationToken,
) -> Res<Vec<ExtractionTableRow>> {
    let lookup = load_lookup(opts.markets_file.as_deref()).await?;
    let settings = Settings::from_env(opts.region)?;
    let output = RecordFileManager::new(&opts.output_dir);

    let mut countries = select_countries(&lookup, opts.region, &opts.countries);
    if opts.skip_existing {
        let mut pending = Vec::with_capacity(countries.len());
        for iso in countries {
            if output.exists(&iso, opts.date).await {
                info!("{} already stored for {}, skipping", iso, opts.date);
            } else {
                pending.push(iso);
            }
        }
        countries = pending;
    }

    if countries.is_empty() {
        info!("Nothing to extract for region {} on {}", opts.region, opts.date);
        return Ok(Vec::new());
    }

    info!(
        "Extracting data from the following countries (ISO): {}",
        countries.join(", ")
    );

    let pipeline = Pipeline::from_settings(
        &settings,
        Arc::new(ReqwestTransport::new()),
        Arc::clone(&lookup),
        cancel,
    )
    .with_progress(!opts.quiet);

    let mut rows = Vec::with_capacity(countries.len());
    for iso in &countries {
        let assembly = pipeline.run(std::slice::from_ref(iso), opts.date).await?;
        let path = output.persist(iso, opts.date, &assembly.records).await?;
        success!(
            "Stored {} rows for {} in {}",
            assembly.records.len(),
            iso,
            path.display()
        );

        rows.push(ExtractionTableRow {
            iso: iso.clone(),
            rows: assembly.records.len(),
            dropped_samples: assembly.dropped_samples,
            dropped_tracks: assembly.dropped_tracks,
            file: path.display().to_string(),
        });
    }

    let stats = pipeline.extractor().api().requester().stats();
    info!(
        "{} requests sent, {} retries, {} token refreshes",
        stats.requests(),
        stats.retries(),
        stats.reauthentications()
    );

    Ok(rows)
}

/// The region's countries, narrowed to `requested` when it is not empty.
/// Requested codes outside the region are reported and ignored.
pub fn select_countries(
    lookup: &RegionLookup,
    region: Region,
    requested: &[String],
) -> Vec<String> {
    let all = lookup.country_codes(region);
    if requested.is_empty() {
        return all;
    }

    let requested: Vec<String> = requested.iter().map(|c| c.trim().to_uppercase()).collect();
    for iso in &requested {
        if !all.contains(iso) {
            warning!("{} is not a market of region {}, ignoring", iso, region);
        }
    }

    all.into_iter().filter(|iso| requested.contains(iso)).collect()
}
