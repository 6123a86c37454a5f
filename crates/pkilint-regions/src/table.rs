//! # Region Table
//!
//! A region knowledge base loaded from YAML:
//!
//! ```yaml
//! countries:
//!   US:
//!     verified: true
//!     regions:
//!       - name: California
//!         code: US-CA
//!         aliases: ["Calif"]
//!   XX:
//!     verified: false
//!     regions: []
//! ```
//!
//! `verified: true` declares the country's region list authoritative, so a
//! province that matches nothing is [`RegionCheck::InvalidRegion`]. For
//! unverified countries a miss is only [`RegionCheck::UnknownRegion`].
//!
//! ## Matching
//!
//! Provinces are compared after normalization (lower-case, punctuation
//! replaced by spaces, whitespace collapsed) against each region's name,
//! its aliases, its full subdivision code (`US-CA`) and the code suffix
//! (`CA`). Index keys are built once at load time.
//!
//! ## Validation
//!
//! The whole table is validated before it is usable. A malformed country
//! key, a country listed twice, an empty region name or alias, or a
//! subdivision code outside its country all reject the table.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use pkilint_core::CountryCode;

use crate::check::{RegionCheck, RegionLookup};
use crate::error::{RegionError, RegionResult};

/// One administrative region of a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    /// Official region name.
    pub name: String,
    /// ISO 3166-2 subdivision code, e.g. `US-CA`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Alternative spellings accepted as matches.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub aliases: Vec<String>,
}

/// Region list of one country as written in the table document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRegions {
    /// Whether `regions` is the complete, authoritative list.
    #[serde(default)]
    pub verified: bool,
    /// Known regions.
    #[serde(default)]
    pub regions: Vec<Region>,
}

/// On-disk document layout.
#[derive(Debug, Deserialize)]
struct TableDocument {
    #[serde(default)]
    countries: BTreeMap<String, CountryRegions>,
}

/// Indexed form of one country's regions.
#[derive(Debug, Clone)]
struct CountryIndex {
    verified: bool,
    region_count: usize,
    keys: HashSet<String>,
}

/// A validated, indexed region knowledge base.
#[derive(Debug, Clone, Default)]
pub struct RegionTable {
    countries: BTreeMap<CountryCode, CountryIndex>,
}

impl RegionTable {
    /// Build a table from per-country region lists keyed by country code.
    ///
    /// # Errors
    ///
    /// Returns [`RegionError::InvalidTable`] naming the first offending
    /// location.
    pub fn from_countries(countries: BTreeMap<String, CountryRegions>) -> RegionResult<Self> {
        let mut indexed = BTreeMap::new();

        for (key, country) in countries {
            let location = format!("countries.{key}");
            let code = CountryCode::new(&key).map_err(|e| RegionError::InvalidTable {
                location: location.clone(),
                detail: e.to_string(),
            })?;
            if indexed.contains_key(&code) {
                return Err(RegionError::InvalidTable {
                    location,
                    detail: format!("country {code} is listed more than once"),
                });
            }

            let index = index_country(&code, &country, &location)?;
            if index.verified && index.region_count == 0 {
                tracing::warn!(
                    country = %code,
                    "verified country has no regions; every province will be invalid"
                );
            }
            indexed.insert(code, index);
        }

        Ok(Self { countries: indexed })
    }

    /// Parse and validate a table from a YAML string.
    pub fn from_yaml_str(yaml: &str) -> RegionResult<Self> {
        let doc: TableDocument = serde_yaml::from_str(yaml)?;
        Self::from_countries(doc.countries)
    }

    /// Load and validate a table from a YAML file.
    pub fn load(path: &Path) -> RegionResult<Self> {
        if !path.exists() {
            return Err(RegionError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path)?;
        let doc: TableDocument =
            serde_yaml::from_str(&content).map_err(|source| RegionError::YamlParse {
                path: path.to_path_buf(),
                source,
            })?;
        let table = Self::from_countries(doc.countries)?;

        tracing::info!(
            path = %path.display(),
            countries = table.country_count(),
            regions = table.region_count(),
            "loaded region table"
        );

        Ok(table)
    }

    /// Number of countries in the table.
    pub fn country_count(&self) -> usize {
        self.countries.len()
    }

    /// Total number of regions across all countries.
    pub fn region_count(&self) -> usize {
        self.countries.values().map(|c| c.region_count).sum()
    }

    /// Whether the country is present and its region list authoritative.
    ///
    /// Returns `None` for countries absent from the table.
    pub fn is_verified(&self, country: &CountryCode) -> Option<bool> {
        self.countries.get(country).map(|c| c.verified)
    }

    /// Country codes in the table, in sorted order.
    pub fn countries(&self) -> impl Iterator<Item = &CountryCode> {
        self.countries.keys()
    }
}

impl RegionLookup for RegionTable {
    fn check_region(&self, country: &str, province: &str) -> Result<RegionCheck, RegionError> {
        // Malformed and unlisted countries are inconclusive, not errors.
        let Ok(code) = CountryCode::new(country) else {
            return Ok(RegionCheck::UnknownRegion);
        };
        let Some(index) = self.countries.get(&code) else {
            return Ok(RegionCheck::UnknownRegion);
        };

        if index.keys.contains(&normalize(province)) {
            Ok(RegionCheck::Valid)
        } else if index.verified {
            Ok(RegionCheck::InvalidRegion)
        } else {
            Ok(RegionCheck::UnknownRegion)
        }
    }
}

fn index_country(
    code: &CountryCode,
    country: &CountryRegions,
    location: &str,
) -> RegionResult<CountryIndex> {
    let mut keys = HashSet::new();
    let code_prefix = format!("{}-", code.as_str());

    for (i, region) in country.regions.iter().enumerate() {
        let at = format!("{location}.regions[{i}]");

        let name = normalize(&region.name);
        if name.is_empty() {
            return Err(RegionError::InvalidTable {
                location: at,
                detail: "region name is empty".to_string(),
            });
        }
        keys.insert(name);

        for alias in &region.aliases {
            let alias = normalize(alias);
            if alias.is_empty() {
                return Err(RegionError::InvalidTable {
                    location: at,
                    detail: "region alias is empty".to_string(),
                });
            }
            keys.insert(alias);
        }

        if let Some(subdivision) = &region.code {
            let upper = subdivision.trim().to_ascii_uppercase();
            let suffix = upper.strip_prefix(&code_prefix).unwrap_or_default();
            if suffix.is_empty() || !suffix.chars().all(|c| c.is_ascii_alphanumeric()) {
                return Err(RegionError::InvalidTable {
                    location: at,
                    detail: format!(
                        "subdivision code {subdivision:?} must look like {code_prefix}XX"
                    ),
                });
            }
            keys.insert(normalize(&upper));
            keys.insert(normalize(suffix));
        }
    }

    Ok(CountryIndex {
        verified: country.verified,
        region_count: country.regions.len(),
        keys,
    })
}

/// Normalize a region name for matching.
fn normalize(s: &str) -> String {
    let lower = s.to_lowercase();
    let cleaned: String = lower
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c.is_whitespace() {
                c
            } else {
                ' '
            }
        })
        .collect();
    cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
}
