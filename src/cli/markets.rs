use std::{path::Path, sync::Arc};

use tabled::Table;

use crate::{
    error::Res,
    info,
    region::{Region, RegionLookup},
    types::MarketTableRow,
};

/// Loads the market lookup from `path`, or the built-in tables when no path
/// is given.
pub async fn load_lookup(path: Option<&Path>) -> Res<Arc<RegionLookup>> {
    let lookup = match path {
        Some(path) => {
            let lookup = RegionLookup::from_json(path).await?;
            info!(
                "Loaded {} markets from {}",
                lookup.len(),
                path.display()
            );
            lookup
        }
        None => RegionLookup::spotify_markets(),
    };

    Ok(Arc::new(lookup))
}

/// Prints the markets of `region` as a table.
pub async fn markets(region: Region, markets_file: Option<&Path>) -> Res<()> {
    let lookup = load_lookup(markets_file).await?;

    let rows: Vec<MarketTableRow> = lookup
        .markets(region)
        .map(|m| MarketTableRow {
            iso: m.iso.clone(),
            country: m.country.clone(),
            region: m.region.clone(),
        })
        .collect();

    let count = rows.len();
    println!("{}", Table::new(rows));
    info!("{} markets in region {}", count, region);
    Ok(())
}
