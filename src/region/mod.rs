//! Market reference data.
//!
//! Maps ISO country codes to country names and sub-region names, and groups
//! them into the four extraction regions. Each region is served by its own
//! Spotify app because pulling every market through one app exceeds the
//! provider's rate limits.
//!
//! The lookup is plain data: built once (from the built-in tables or a JSON
//! file) and shared read-only, usually behind an `Arc`.

mod markets;

use std::{collections::HashMap, fmt, path::Path, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::error::{ExtractError, Res};

/// Extraction regions, each backed by one set of app credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Region {
    Af,
    As,
    Eu,
    Nasaoc,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Af, Region::As, Region::Eu, Region::Nasaoc];

    pub fn code(&self) -> &'static str {
        match self {
            Region::Af => "AF",
            Region::As => "AS",
            Region::Eu => "EU",
            Region::Nasaoc => "NASAOC",
        }
    }

    /// Sub-region names making up this region.
    pub fn sub_regions(&self) -> &'static [&'static str] {
        match self {
            Region::Af => &["Africa"],
            Region::As => &["Asia"],
            Region::Eu => &["Europe"],
            Region::Nasaoc => &["North America", "South America", "Oceania"],
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Region {
    type Err = ExtractError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "AF" => Ok(Region::Af),
            "AS" => Ok(Region::As),
            "EU" => Ok(Region::Eu),
            "NASAOC" => Ok(Region::Nasaoc),
            _ => Err(ExtractError::InvalidRegion(s.to_string())),
        }
    }
}

type Table = &'static [(&'static str, &'static str)];

const SUB_REGIONS: [(&str, Table, Region); 6] = [
    ("Africa", markets::AFRICA, Region::Af),
    ("Asia", markets::ASIA, Region::As),
    ("Europe", markets::EUROPE, Region::Eu),
    ("North America", markets::NORTH_AMERICA, Region::Nasaoc),
    ("South America", markets::SOUTH_AMERICA, Region::Nasaoc),
    ("Oceania", markets::OCEANIA, Region::Nasaoc),
];

/// ISO codes of a built-in sub-region table, `None` for unknown names.
pub fn sub_region_codes(name: &str) -> Option<Vec<&'static str>> {
    SUB_REGIONS
        .iter()
        .find(|(sub_region, _, _)| *sub_region == name)
        .map(|(_, table, _)| table.iter().map(|(iso, _)| *iso).collect())
}

/// A single market entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Market {
    pub iso: String,
    pub country: String,
    /// Sub-region name, e.g. "South America".
    pub region: String,
    /// Extraction region the market belongs to.
    pub group: Region,
}

#[derive(Debug, Clone, Default)]
pub struct RegionLookup {
    markets: Vec<Market>,
    by_iso: HashMap<String, usize>,
}

impl RegionLookup {
    /// Builds the lookup from the built-in Spotify market tables.
    pub fn spotify_markets() -> Self {
        let markets = SUB_REGIONS
            .iter()
            .flat_map(|(region, table, group)| {
                table.iter().map(move |(iso, country)| Market {
                    iso: iso.to_string(),
                    country: country.to_string(),
                    region: region.to_string(),
                    group: *group,
                })
            })
            .collect();

        Self::from_markets(markets)
    }

    /// Builds the lookup from arbitrary entries. The first entry of a
    /// duplicated ISO code wins.
    pub fn from_markets(markets: Vec<Market>) -> Self {
        let mut kept: Vec<Market> = Vec::with_capacity(markets.len());
        let mut by_iso = HashMap::new();
        for market in markets {
            if by_iso.contains_key(&market.iso) {
                continue;
            }
            by_iso.insert(market.iso.clone(), kept.len());
            kept.push(market);
        }

        Self {
            markets: kept,
            by_iso,
        }
    }

    /// Loads a JSON array of [`Market`] entries.
    pub async fn from_json(path: impl AsRef<Path>) -> Res<Self> {
        let path = path.as_ref();
        let content = async_fs::read_to_string(path)
            .await
            .map_err(|e| ExtractError::Lookup(format!("{}: {}", path.display(), e)))?;
        let markets: Vec<Market> = serde_json::from_str(&content)
            .map_err(|e| ExtractError::Lookup(format!("{}: {}", path.display(), e)))?;
        Ok(Self::from_markets(markets))
    }

    /// ISO codes of every market in the region, in table order.
    pub fn country_codes(&self, region: Region) -> Vec<String> {
        self.markets(region).map(|m| m.iso.clone()).collect()
    }

    pub fn markets(&self, region: Region) -> impl Iterator<Item = &Market> {
        self.markets.iter().filter(move |m| m.group == region)
    }

    pub fn get(&self, iso: &str) -> Option<&Market> {
        self.by_iso.get(iso).map(|&idx| &self.markets[idx])
    }

    pub fn country_name(&self, iso: &str) -> Option<&str> {
        self.get(iso).map(|m| m.country.as_str())
    }

    pub fn region_name(&self, iso: &str) -> Option<&str> {
        self.get(iso).map(|m| m.region.as_str())
    }

    pub fn len(&self) -> usize {
        self.markets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markets.is_empty()
    }
}
