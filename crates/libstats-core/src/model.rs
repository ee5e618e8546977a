//! Wire and result types.
//!
//! Catalog and country types decode the upstream JSON; stat and readership
//! records are what the service answers with.

use serde::{Deserialize, Deserializer, Serialize};

/// One page of catalog results, or the accumulation of several.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogPage {
    /// Total number of entries matching the filter, as reported upstream.
    #[serde(rename = "count", default)]
    pub total_count: u64,
    /// Entries on this page (or all accumulated entries).
    #[serde(rename = "results", default)]
    pub entries: Vec<CatalogEntry>,
    /// Absolute URL of the next page.
    #[serde(rename = "next", default, deserialize_with = "non_empty_cursor")]
    pub next_cursor: Option<String>,
    /// Absolute URL of the previous page.
    #[serde(rename = "previous", default, deserialize_with = "non_empty_cursor")]
    pub previous_cursor: Option<String>,
}

/// A book in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: u64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub authors: Vec<AuthorRef>,
    #[serde(default)]
    pub languages: Vec<String>,
}

/// An author as listed on a catalog entry.
///
/// Years are 0 when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthorRef {
    pub name: String,
    #[serde(default, deserialize_with = "year_or_zero")]
    pub birth_year: i32,
    #[serde(default, deserialize_with = "year_or_zero")]
    pub death_year: i32,
}

impl AuthorRef {
    /// Identity used for deduplication.
    ///
    /// Two distinct authors with the same name and no known years collide.
    pub fn identity(&self) -> (&str, i32, i32) {
        (&self.name, self.birth_year, self.death_year)
    }
}

/// Per-language catalog statistics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageStat {
    pub language: String,
    pub books: u64,
    pub authors: u64,
    /// Share of the whole catalog, truncated to 5 decimals.
    pub fraction: f64,
}

impl LanguageStat {
    /// A stat for a language that matched nothing.
    pub fn zero(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            books: 0,
            authors: 0,
            fraction: 0.0,
        }
    }

    /// Whether this stat carries no data and should be dropped from results.
    pub fn is_empty(&self) -> bool {
        self.books == 0 && self.authors == 0 && self.fraction == 0.0
    }
}

/// A country where a language is official, from the lookup service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryInfo {
    #[serde(rename = "ISO3166_1_Alpha_2", default)]
    pub alpha2: String,
    #[serde(rename = "ISO3166_1_Alpha_3")]
    pub alpha3: String,
    #[serde(rename = "Official_Name", default)]
    pub official_name: String,
    #[serde(rename = "Region_Name", default)]
    pub region: String,
    #[serde(rename = "Sub_Region_Name", default)]
    pub subregion: String,
    #[serde(rename = "Language", default)]
    pub language: String,
}

/// Population of one country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRecord {
    pub population: u64,
}

/// Potential readership of a language in one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadershipRecord {
    pub country: String,
    pub isocode: String,
    pub books: u64,
    pub authors: u64,
    pub readership: u64,
}

fn non_empty_cursor<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let cursor = Option::<String>::deserialize(deserializer)?;
    Ok(cursor.filter(|c| !c.is_empty()))
}

fn year_or_zero<'de, D>(deserializer: D) -> Result<i32, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i32>::deserialize(deserializer)?.unwrap_or(0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_catalog_page() {
        let page: CatalogPage = serde_json::from_value(json!({
            "count": 2,
            "next": "http://catalog.test/books/?languages=no&page=2",
            "previous": null,
            "results": [
                {
                    "id": 1,
                    "title": "Et dukkehjem",
                    "authors": [{"name": "Ibsen, Henrik", "birth_year": 1828, "death_year": 1906}],
                    "languages": ["no"],
                    "download_count": 100
                },
                {
                    "id": 2,
                    "title": "Anonymous",
                    "authors": [{"name": "Unknown", "birth_year": null, "death_year": null}],
                    "languages": ["no"]
                }
            ]
        }))
        .unwrap();

        assert_eq!(page.total_count, 2);
        assert_eq!(page.entries.len(), 2);
        assert_eq!(
            page.next_cursor.as_deref(),
            Some("http://catalog.test/books/?languages=no&page=2")
        );
        assert_eq!(page.previous_cursor, None);
        assert_eq!(page.entries[0].authors[0].identity(), ("Ibsen, Henrik", 1828, 1906));
        assert_eq!(page.entries[1].authors[0].birth_year, 0);
        assert_eq!(page.entries[1].authors[0].death_year, 0);
    }

    #[test]
    fn test_empty_cursor_is_absent() {
        let page: CatalogPage =
            serde_json::from_value(json!({"count": 0, "results": [], "next": ""})).unwrap();
        assert_eq!(page.next_cursor, None);
    }

    #[test]
    fn test_decode_country() {
        let countries: Vec<CountryInfo> = serde_json::from_value(json!([{
            "ISO3166_1_Alpha_3": "MHL",
            "ISO3166_1_Alpha_2": "MH",
            "Official_Name": "Marshall Islands",
            "Region_Name": "Oceania",
            "Sub_Region_Name": "Micronesia",
            "Language": "mh"
        }]))
        .unwrap();

        assert_eq!(countries[0].alpha3, "MHL");
        assert_eq!(countries[0].alpha2, "MH");
        assert_eq!(countries[0].official_name, "Marshall Islands");
        assert_eq!(countries[0].subregion, "Micronesia");
    }

    #[test]
    fn test_stat_serialization() {
        let stat = LanguageStat {
            language: "no".to_string(),
            books: 21,
            authors: 14,
            fraction: 0.00027,
        };
        assert_eq!(
            serde_json::to_value(&stat).unwrap(),
            json!({"language": "no", "books": 21, "authors": 14, "fraction": 0.00027})
        );
        assert!(!stat.is_empty());
        assert!(LanguageStat::zero("xx").is_empty());
    }
}
