mod common;

use std::collections::HashSet;

use featurd::{
    ExtractError,
    cli::select_countries,
    region::{Market, Region, RegionLookup, sub_region_codes},
};

#[test]
fn test_region_country_counts() {
    let lookup = RegionLookup::spotify_markets();
    assert_eq!(lookup.country_codes(Region::Af).len(), 49);
    assert_eq!(lookup.country_codes(Region::As).len(), 40);
    assert_eq!(lookup.country_codes(Region::Eu).len(), 46);
    assert_eq!(lookup.country_codes(Region::Nasaoc).len(), 49);
    assert_eq!(lookup.len(), 184);
}

#[test]
fn test_region_is_union_of_sub_regions() {
    let lookup = RegionLookup::spotify_markets();
    for region in Region::ALL {
        let mut expected = Vec::new();
        for sub_region in region.sub_regions() {
            expected.extend(
                sub_region_codes(sub_region)
                    .unwrap()
                    .into_iter()
                    .map(str::to_string),
            );
        }
        assert_eq!(lookup.country_codes(region), expected, "region {region}");
    }
}

#[test]
fn test_country_codes_are_unique_across_regions() {
    let lookup = RegionLookup::spotify_markets();
    let mut seen = HashSet::new();
    for region in Region::ALL {
        for iso in lookup.country_codes(region) {
            assert!(seen.insert(iso.clone()), "{iso} listed twice");
        }
    }
}

#[test]
fn test_lookup_names() {
    let lookup = RegionLookup::spotify_markets();
    assert_eq!(lookup.country_name("SE"), Some("Sweden"));
    assert_eq!(lookup.region_name("SE"), Some("Europe"));
    assert_eq!(lookup.region_name("BR"), Some("South America"));
    assert_eq!(lookup.get("BR").unwrap().group, Region::Nasaoc);
    assert_eq!(lookup.country_name("ZZ"), None);
    assert!(sub_region_codes("Antarctica").is_none());
}

#[test]
fn test_region_parse() {
    assert_eq!("eu".parse::<Region>().unwrap(), Region::Eu);
    assert_eq!(" NASAOC ".parse::<Region>().unwrap(), Region::Nasaoc);
    assert_eq!(Region::As.to_string(), "AS");
    assert!(matches!(
        "EUROPE".parse::<Region>(),
        Err(ExtractError::InvalidRegion(_))
    ));
}

#[test]
fn test_from_markets_keeps_first_duplicate() {
    let fixture = common::fixture_lookup();

    let lookup = RegionLookup::from_markets(vec![
        fixture.get("SE").unwrap().clone(),
        Market {
            iso: "SE".to_string(),
            country: "Sverige".to_string(),
            region: "Europe".to_string(),
            group: Region::Eu,
        },
    ]);
    assert_eq!(lookup.len(), 1);
    assert_eq!(lookup.country_name("SE"), Some("Sweden"));
}

#[tokio::test]
async fn test_lookup_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("markets.json");
    std::fs::write(
        &path,
        r#"[
            {"iso": "SE", "country": "Sweden", "region": "Europe", "group": "EU"},
            {"iso": "KE", "country": "Kenya", "region": "Africa", "group": "AF"}
        ]"#,
    )
    .unwrap();

    let lookup = RegionLookup::from_json(&path).await.unwrap();

    assert_eq!(lookup.country_codes(Region::Eu), vec!["SE"]);
    assert_eq!(lookup.country_codes(Region::Af), vec!["KE"]);
    assert!(lookup.country_codes(Region::As).is_empty());
}

#[tokio::test]
async fn test_lookup_from_invalid_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("markets.json");
    std::fs::write(&path, "{ not a list").unwrap();

    let result = RegionLookup::from_json(&path).await;
    assert!(matches!(result, Err(ExtractError::Lookup(_))));

    let missing = RegionLookup::from_json(dir.path().join("missing.json")).await;
    assert!(matches!(missing, Err(ExtractError::Lookup(_))));
}

#[test]
fn test_select_countries() {
    let lookup = common::fixture_lookup();

    assert_eq!(select_countries(&lookup, Region::Eu, &[]), vec!["SE", "NO"]);

    let requested = vec!["no".to_string(), "US".to_string()];
    assert_eq!(select_countries(&lookup, Region::Eu, &requested), vec!["NO"]);

    assert!(select_countries(&lookup, Region::Af, &[]).is_empty());
}
