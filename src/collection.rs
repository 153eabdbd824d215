//! Saved colors and palettes: the plain records a color tool keeps, and the operations its collection
//! view performs on them. Filtering, sorting, tagging, favorites and drag reordering work on slices
//! and vectors the caller owns; where and how they are stored is up to the caller. Export and import
//! go through JSON (the full collection) or CSV (colors only).
//!
//! Timestamps are Unix milliseconds and are always passed in, never read from the clock, so every
//! operation here is deterministic.

use std::collections::BTreeSet;
use std::error::Error;
use std::fmt;
use std::io;

use serde_json::Value;

use crate::color::{RGBColor, RGBParseError};

/// How far back [`CollectionFilter::Recent`] reaches, in milliseconds.
pub const RECENT_WINDOW_MS: u64 = 7 * 24 * 60 * 60 * 1000;

/// A single saved color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedColor {
    /// Unique within a collection.
    pub id: String,
    /// Lowercase `#rrggbb`.
    pub hex: String,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// When the color was saved.
    pub created_at: u64,
    /// When the color was last used or edited.
    #[serde(default)]
    pub last_used: u64,
    /// Free-form labels.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the color is starred.
    #[serde(default)]
    pub is_favorite: bool,
    /// How many times the color has been used.
    #[serde(default)]
    pub usage_count: u32,
}

impl SavedColor {
    /// A freshly saved color with no tags and no uses.
    pub fn new<S: Into<String>>(id: S, rgb: RGBColor, now_ms: u64) -> SavedColor {
        SavedColor {
            id: id.into(),
            hex: rgb.to_string(),
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
            created_at: now_ms,
            last_used: now_ms,
            tags: vec![],
            is_favorite: false,
            usage_count: 0,
        }
    }

    /// The color this record holds.
    pub fn rgb(&self) -> RGBColor {
        RGBColor {
            r: self.r,
            g: self.g,
            b: self.b,
        }
    }
}

/// A named, ordered set of colors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedPalette {
    /// Unique within a collection.
    pub id: String,
    /// Display name.
    pub name: String,
    /// The member colors, in order.
    pub colors: Vec<RGBColor>,
    /// When the palette was saved.
    pub created_at: u64,
    /// When the palette was last used or edited.
    #[serde(default)]
    pub last_used: u64,
    /// Free-form labels.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether the palette is starred.
    #[serde(default)]
    pub is_favorite: bool,
    /// How many times the palette has been used.
    #[serde(default)]
    pub usage_count: u32,
}

impl SavedPalette {
    /// A freshly saved palette with no tags and no uses.
    pub fn new<S: Into<String>, N: Into<String>>(
        id: S,
        name: N,
        colors: Vec<RGBColor>,
        now_ms: u64,
    ) -> SavedPalette {
        SavedPalette {
            id: id.into(),
            name: name.into(),
            colors,
            created_at: now_ms,
            last_used: now_ms,
            tags: vec![],
            is_favorite: false,
            usage_count: 0,
        }
    }
}

/// The bookkeeping that saved colors and palettes share, so one set of collection operations serves
/// both.
pub trait CollectionItem {
    /// The item's id.
    fn id(&self) -> &str;
    /// What alphabetical sorting compares: the HEX code of a color, the name of a palette.
    fn title(&self) -> &str;
    /// When the item was saved.
    fn created_at(&self) -> u64;
    /// How many times the item has been used.
    fn usage_count(&self) -> u32;
    /// Whether the item is starred.
    fn is_favorite(&self) -> bool;
    /// The item's tags.
    fn tags(&self) -> &[String];
    /// Replaces the tags and bumps the last-used time.
    fn set_tags(&mut self, tags: Vec<String>, now_ms: u64);
    /// Flips the favorite flag and bumps the last-used time, returning the new flag.
    fn toggle_favorite(&mut self, now_ms: u64) -> bool;
    /// Counts a use and bumps the last-used time.
    fn record_use(&mut self, now_ms: u64);

    /// Whether a lowercase search term occurs in the title or in any tag, ignoring case.
    fn matches_search(&self, needle: &str) -> bool {
        self.title().to_lowercase().contains(needle)
            || self.tags().iter().any(|t| t.to_lowercase().contains(needle))
    }
}

// the fields both records share are named the same, so the accessors are too
macro_rules! impl_collection_item {
    ($title:ident) => {
        fn id(&self) -> &str {
            &self.id
        }
        fn title(&self) -> &str {
            &self.$title
        }
        fn created_at(&self) -> u64 {
            self.created_at
        }
        fn usage_count(&self) -> u32 {
            self.usage_count
        }
        fn is_favorite(&self) -> bool {
            self.is_favorite
        }
        fn tags(&self) -> &[String] {
            &self.tags
        }
        fn set_tags(&mut self, tags: Vec<String>, now_ms: u64) {
            self.tags = tags;
            self.last_used = now_ms;
        }
        fn toggle_favorite(&mut self, now_ms: u64) -> bool {
            self.is_favorite = !self.is_favorite;
            self.last_used = now_ms;
            self.is_favorite
        }
        fn record_use(&mut self, now_ms: u64) {
            self.usage_count = self.usage_count.saturating_add(1);
            self.last_used = now_ms;
        }
    };
}

impl CollectionItem for SavedColor {
    impl_collection_item!(hex);
}

impl CollectionItem for SavedPalette {
    impl_collection_item!(name);

    fn matches_search(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(needle)
            || self.tags.iter().any(|t| t.to_lowercase().contains(needle))
            || self.colors.iter().any(|c| c.to_string().contains(needle))
    }
}

/// Which items a query keeps before searching and tag matching.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollectionFilter {
    /// Everything.
    All,
    /// Only starred items.
    Favorites,
    /// Only items saved within the last week.
    Recent,
}

impl Default for CollectionFilter {
    fn default() -> CollectionFilter {
        CollectionFilter::All
    }
}

/// The order query results come back in. Every order is stable: items that compare equal keep their
/// collection order.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Most recently saved first.
    Newest,
    /// Least recently saved first.
    Oldest,
    /// Highest usage count first.
    MostUsed,
    /// By HEX code for colors and by name for palettes, ignoring case.
    Alphabetical,
}

impl Default for SortOrder {
    fn default() -> SortOrder {
        SortOrder::Newest
    }
}

/// What the collection view is showing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionQuery {
    /// Case-insensitive search term; empty matches everything.
    pub search: String,
    /// The category filter.
    pub filter: CollectionFilter,
    /// Keep only items carrying exactly this tag.
    pub tag: Option<String>,
    /// The result order.
    pub sort: SortOrder,
}

/// Runs a query over any kind of collection item.
pub fn query<'a, T: CollectionItem>(
    items: &'a [T],
    query: &CollectionQuery,
    now_ms: u64,
) -> Vec<&'a T> {
    let needle = query.search.trim().to_lowercase();
    let recent_after = now_ms.saturating_sub(RECENT_WINDOW_MS);
    let mut found: Vec<&T> = items
        .iter()
        .filter(|item| needle.is_empty() || item.matches_search(&needle))
        .filter(|item| match query.filter {
            CollectionFilter::All => true,
            CollectionFilter::Favorites => item.is_favorite(),
            CollectionFilter::Recent => item.created_at() > recent_after,
        })
        .filter(|item| match query.tag {
            Some(ref tag) => item.tags().iter().any(|t| t == tag),
            None => true,
        })
        .collect();
    match query.sort {
        SortOrder::Newest => found.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
        SortOrder::Oldest => found.sort_by(|a, b| a.created_at().cmp(&b.created_at())),
        SortOrder::MostUsed => found.sort_by(|a, b| b.usage_count().cmp(&a.usage_count())),
        SortOrder::Alphabetical => found.sort_by_key(|item| item.title().to_lowercase()),
    }
    found
}

/// Runs a query over saved colors. Search matches the HEX code and the tags.
pub fn query_colors<'a>(
    colors: &'a [SavedColor],
    q: &CollectionQuery,
    now_ms: u64,
) -> Vec<&'a SavedColor> {
    query(colors, q, now_ms)
}

/// Runs a query over saved palettes. Search matches the name, the tags, and the member colors' HEX
/// codes.
pub fn query_palettes<'a>(
    palettes: &'a [SavedPalette],
    q: &CollectionQuery,
    now_ms: u64,
) -> Vec<&'a SavedPalette> {
    query(palettes, q, now_ms)
}

/// Splits comma-separated tag input, trimming each tag and dropping empty ones.
///
/// # Example
/// ```
/// # use huebox::collection::parse_tags;
/// assert_eq!(parse_tags("warm, brand ,, dark"), vec!["warm", "brand", "dark"]);
/// ```
pub fn parse_tags(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(String::from)
        .collect()
}

/// Every tag used anywhere in the collection, sorted and without duplicates.
pub fn all_tags(colors: &[SavedColor], palettes: &[SavedPalette]) -> Vec<String> {
    let tags: BTreeSet<&String> = colors
        .iter()
        .flat_map(|c| c.tags.iter())
        .chain(palettes.iter().flat_map(|p| p.tags.iter()))
        .collect();
    tags.into_iter().cloned().collect()
}

/// Flips the favorite flag of the item with this id. Returns the new flag, or `None` if there is no
/// such item.
pub fn toggle_favorite<T: CollectionItem>(
    items: &mut [T],
    id: &str,
    now_ms: u64,
) -> Option<bool> {
    items
        .iter_mut()
        .find(|item| item.id() == id)
        .map(|item| item.toggle_favorite(now_ms))
}

/// Counts a use of the item with this id. Returns `false` if there is no such item.
pub fn record_use<T: CollectionItem>(items: &mut [T], id: &str, now_ms: u64) -> bool {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            item.record_use(now_ms);
            true
        }
        None => false,
    }
}

/// Replaces the tags of the item with this id from comma-separated input. Returns `false` if there
/// is no such item.
pub fn edit_tags<T: CollectionItem>(items: &mut [T], id: &str, input: &str, now_ms: u64) -> bool {
    match items.iter_mut().find(|item| item.id() == id) {
        Some(item) => {
            item.set_tags(parse_tags(input), now_ms);
            true
        }
        None => false,
    }
}

/// Deletes the item with this id. Returns `false` if there is no such item.
pub fn remove<T: CollectionItem>(items: &mut Vec<T>, id: &str) -> bool {
    let before = items.len();
    items.retain(|item| item.id() != id);
    items.len() != before
}

/// Moves the item `from_id` to the position `to_id` occupies, shifting the items between them: the
/// effect of dropping one swatch onto another. Returns `false`, leaving the list alone, if either id
/// is missing or they are the same.
pub fn reorder<T: CollectionItem>(items: &mut Vec<T>, from_id: &str, to_id: &str) -> bool {
    if from_id == to_id {
        return false;
    }
    let from = items.iter().position(|item| item.id() == from_id);
    let to = items.iter().position(|item| item.id() == to_id);
    match (from, to) {
        (Some(from), Some(to)) => {
            let item = items.remove(from);
            items.insert(to, item);
            true
        }
        _ => false,
    }
}

/// A full export of a collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    /// Every saved color.
    pub colors: Vec<SavedColor>,
    /// Every saved palette.
    pub palettes: Vec<SavedPalette>,
    /// When the export was made.
    pub export_date: u64,
}

/// What an import added, and what it had to leave out.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    /// Colors appended.
    pub colors: usize,
    /// Palettes appended.
    pub palettes: usize,
    /// Records that were malformed and skipped.
    pub skipped: usize,
}

/// An error in exporting or importing a collection.
#[derive(Debug)]
pub enum CollectionError {
    /// The document was not valid JSON, or not a JSON object.
    Json(serde_json::Error),
    /// A CSV row could not be read or written.
    Csv(csv::Error),
    /// The output could not be written.
    Io(io::Error),
    /// A record carried a malformed HEX code.
    Color(RGBParseError),
}

impl fmt::Display for CollectionError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            CollectionError::Json(ref e) => write!(f, "invalid collection JSON: {}", e),
            CollectionError::Csv(ref e) => write!(f, "invalid collection CSV: {}", e),
            CollectionError::Io(ref e) => write!(f, "could not write collection: {}", e),
            CollectionError::Color(ref e) => write!(f, "invalid saved color: {}", e),
        }
    }
}

impl Error for CollectionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match *self {
            CollectionError::Json(ref e) => Some(e),
            CollectionError::Csv(ref e) => Some(e),
            CollectionError::Io(ref e) => Some(e),
            CollectionError::Color(ref e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for CollectionError {
    fn from(e: serde_json::Error) -> CollectionError {
        CollectionError::Json(e)
    }
}

impl From<csv::Error> for CollectionError {
    fn from(e: csv::Error) -> CollectionError {
        CollectionError::Csv(e)
    }
}

impl From<io::Error> for CollectionError {
    fn from(e: io::Error) -> CollectionError {
        CollectionError::Io(e)
    }
}

impl From<RGBParseError> for CollectionError {
    fn from(e: RGBParseError) -> CollectionError {
        CollectionError::Color(e)
    }
}

/// Serializes the whole collection as pretty-printed JSON.
pub fn export_document(
    colors: &[SavedColor],
    palettes: &[SavedPalette],
    now_ms: u64,
) -> Result<String, CollectionError> {
    let document = ExportDocument {
        colors: colors.to_vec(),
        palettes: palettes.to_vec(),
        export_date: now_ms,
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

// A saved color is only usable if its HEX code parses; the channels are rederived from it so the
// record can't disagree with itself.
fn validate_color(mut color: SavedColor) -> Result<SavedColor, RGBParseError> {
    let rgb = RGBColor::from_hex_code(&color.hex)?;
    color.hex = rgb.to_string();
    color.r = rgb.r;
    color.g = rgb.g;
    color.b = rgb.b;
    Ok(color)
}

/// Appends the colors and palettes of an exported document to the given collection. Either list may
/// be missing from the document. Individual records that do not parse are skipped with a warning
/// rather than failing the whole import.
///
/// # Errors
/// [`CollectionError::Json`] if the document is not a JSON object at all. Nothing is appended in
/// that case.
pub fn import_document(
    colors: &mut Vec<SavedColor>,
    palettes: &mut Vec<SavedPalette>,
    json: &str,
) -> Result<ImportSummary, CollectionError> {
    let document: serde_json::Map<String, Value> = serde_json::from_str(json)?;
    let mut summary = ImportSummary::default();

    if let Some(Value::Array(records)) = document.get("colors") {
        for (i, record) in records.iter().enumerate() {
            let parsed = serde_json::from_value::<SavedColor>(record.clone())
                .map_err(CollectionError::from)
                .and_then(|c| validate_color(c).map_err(CollectionError::from));
            match parsed {
                Ok(color) => {
                    colors.push(color);
                    summary.colors += 1;
                }
                Err(e) => {
                    warn!("skipping color record {}: {}", i, e);
                    summary.skipped += 1;
                }
            }
        }
    }
    if let Some(Value::Array(records)) = document.get("palettes") {
        for (i, record) in records.iter().enumerate() {
            match serde_json::from_value::<SavedPalette>(record.clone()) {
                Ok(palette) => {
                    palettes.push(palette);
                    summary.palettes += 1;
                }
                Err(e) => {
                    warn!("skipping palette record {}: {}", i, e);
                    summary.skipped += 1;
                }
            }
        }
    }
    debug!(
        "imported {} colors and {} palettes, skipped {}",
        summary.colors, summary.palettes, summary.skipped
    );
    Ok(summary)
}

// One CSV row. Tags are joined with semicolons so they survive inside a single field.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvRecord {
    hex: String,
    r: u8,
    g: u8,
    b: u8,
    tags: String,
    is_favorite: bool,
    usage_count: u32,
}

/// Writes saved colors as CSV with the header `hex,r,g,b,tags,isFavorite,usageCount`.
pub fn export_colors_csv<W: io::Write>(
    colors: &[SavedColor],
    out: W,
) -> Result<(), CollectionError> {
    let mut writer = csv::Writer::from_writer(out);
    for color in colors {
        writer.serialize(CsvRecord {
            hex: color.hex.clone(),
            r: color.r,
            g: color.g,
            b: color.b,
            tags: color.tags.join(";"),
            is_favorite: color.is_favorite,
            usage_count: color.usage_count,
        })?;
    }
    writer.flush()?;
    Ok(())
}

/// Reads colors written by [`export_colors_csv`]. CSV carries no ids or dates, so each color gets
/// the id `csv-<now_ms>-<row>` and is dated `now_ms`. Rows that do not parse are skipped with a
/// warning.
///
/// # Errors
/// [`CollectionError::Csv`] if the header itself cannot be read.
pub fn import_colors_csv<R: io::Read>(
    input: R,
    now_ms: u64,
) -> Result<Vec<SavedColor>, CollectionError> {
    let mut reader = csv::Reader::from_reader(input);
    reader.headers()?;
    let mut colors = Vec::new();
    for (row, result) in reader.deserialize::<CsvRecord>().enumerate() {
        let parsed = result
            .map_err(CollectionError::from)
            .and_then(|record| {
                let rgb = RGBColor::from_hex_code(&record.hex)?;
                let mut color = SavedColor::new(format!("csv-{}-{}", now_ms, row), rgb, now_ms);
                color.tags = record.tags.split(';').flat_map(parse_tags).collect();
                color.is_favorite = record.is_favorite;
                color.usage_count = record.usage_count;
                Ok(color)
            });
        match parsed {
            Ok(color) => colors.push(color),
            Err(e) => warn!("skipping CSV row {}: {}", row, e),
        }
    }
    Ok(colors)
}

#[cfg(test)]
mod tests {
    #[allow(unused_imports)]
    use super::*;

    const DAY_MS: u64 = 24 * 60 * 60 * 1000;
    const NOW: u64 = 1_700_000_000_000;

    fn color(id: &str, hex: &str, days_ago: u64) -> SavedColor {
        SavedColor::new(id, RGBColor::from_hex_code(hex).unwrap(), NOW - days_ago * DAY_MS)
    }

    fn sample_colors() -> Vec<SavedColor> {
        let mut colors = vec![
            color("a", "#ff0000", 10),
            color("b", "#3b82f6", 1),
            color("c", "#00ff00", 3),
            color("d", "#000000", 7),
        ];
        colors[0].tags = vec!["warm".to_string(), "Brand".to_string()];
        colors[0].usage_count = 5;
        colors[1].is_favorite = true;
        colors[1].tags = vec!["cool".to_string()];
        colors[2].usage_count = 5;
        colors[3].usage_count = 9;
        colors
    }

    fn ids<T: CollectionItem>(items: &[&T]) -> Vec<String> {
        items.iter().map(|i| i.id().to_string()).collect()
    }

    #[test]
    fn test_sorting() {
        let colors = sample_colors();
        let mut q = CollectionQuery::default();
        assert_eq!(ids(&query_colors(&colors, &q, NOW)), vec!["b", "c", "d", "a"]);
        q.sort = SortOrder::Oldest;
        assert_eq!(ids(&query_colors(&colors, &q, NOW)), vec!["a", "d", "c", "b"]);
        // a and c tie on usage and keep their collection order
        q.sort = SortOrder::MostUsed;
        assert_eq!(ids(&query_colors(&colors, &q, NOW)), vec!["d", "a", "c", "b"]);
        q.sort = SortOrder::Alphabetical;
        assert_eq!(ids(&query_colors(&colors, &q, NOW)), vec!["d", "c", "b", "a"]);
    }

    #[test]
    fn test_filters() {
        let colors = sample_colors();
        let mut q = CollectionQuery {
            filter: CollectionFilter::Favorites,
            ..CollectionQuery::default()
        };
        assert_eq!(ids(&query_colors(&colors, &q, NOW)), vec!["b"]);
        // exactly seven days old is no longer recent
        q.filter = CollectionFilter::Recent;
        assert_eq!(ids(&query_colors(&colors, &q, NOW)), vec!["b", "c"]);
        q.filter = CollectionFilter::All;
        q.tag = Some("warm".to_string());
        assert_eq!(ids(&query_colors(&colors, &q, NOW)), vec!["a"]);
        q.tag = Some("war".to_string());
        assert!(query_colors(&colors, &q, NOW).is_empty());
    }

    #[test]
    fn test_search() {
        let colors = sample_colors();
        let mut q = CollectionQuery {
            search: "3B82".to_string(),
            ..CollectionQuery::default()
        };
        assert_eq!(ids(&query_colors(&colors, &q, NOW)), vec!["b"]);
        q.search = "brand".to_string();
        assert_eq!(ids(&query_colors(&colors, &q, NOW)), vec!["a"]);
        q.search = "  ".to_string();
        assert_eq!(query_colors(&colors, &q, NOW).len(), 4);

        let palettes = vec![
            SavedPalette::new("p1", "Sunset", vec![RGBColor::from((255, 128, 0))], NOW),
            SavedPalette::new("p2", "Ocean", vec![RGBColor::from((0, 64, 128))], NOW - DAY_MS),
        ];
        q.search = "sun".to_string();
        assert_eq!(ids(&query_palettes(&palettes, &q, NOW)), vec!["p1"]);
        q.search = "#004080".to_string();
        assert_eq!(ids(&query_palettes(&palettes, &q, NOW)), vec!["p2"]);
        q.search = String::new();
        q.sort = SortOrder::Alphabetical;
        assert_eq!(ids(&query_palettes(&palettes, &q, NOW)), vec!["p2", "p1"]);
    }

    #[test]
    fn test_tags() {
        assert_eq!(parse_tags(" a, b ,,c ,"), vec!["a", "b", "c"]);
        assert!(parse_tags("").is_empty());
        let mut colors = sample_colors();
        let mut palettes = vec![SavedPalette::new("p", "P", vec![], NOW)];
        palettes[0].tags = vec!["cool".to_string(), "autumn".to_string()];
        assert_eq!(all_tags(&colors, &palettes), vec!["Brand", "autumn", "cool", "warm"]);

        assert!(edit_tags(&mut colors, "c", "fresh, green", NOW + 1));
        assert_eq!(colors[2].tags, vec!["fresh", "green"]);
        assert_eq!(colors[2].last_used, NOW + 1);
        assert!(!edit_tags(&mut colors, "zzz", "x", NOW));
    }

    #[test]
    fn test_favorites_and_usage() {
        let mut colors = sample_colors();
        assert_eq!(toggle_favorite(&mut colors, "a", NOW + 5), Some(true));
        assert_eq!(colors[0].last_used, NOW + 5);
        assert_eq!(toggle_favorite(&mut colors, "a", NOW + 6), Some(false));
        assert_eq!(toggle_favorite(&mut colors, "nope", NOW), None);

        assert!(record_use(&mut colors, "b", NOW + 7));
        assert_eq!(colors[1].usage_count, 1);
        assert_eq!(colors[1].last_used, NOW + 7);
        assert!(!record_use(&mut colors, "nope", NOW));
    }

    #[test]
    fn test_reorder_and_remove() {
        let mut colors = sample_colors();
        let order = |colors: &[SavedColor]| -> Vec<String> {
            colors.iter().map(|c| c.id.clone()).collect()
        };
        assert!(reorder(&mut colors, "a", "c"));
        assert_eq!(order(&colors), vec!["b", "c", "a", "d"]);
        assert!(reorder(&mut colors, "d", "b"));
        assert_eq!(order(&colors), vec!["d", "b", "c", "a"]);
        assert!(!reorder(&mut colors, "d", "d"));
        assert!(!reorder(&mut colors, "d", "zzz"));
        assert_eq!(order(&colors), vec!["d", "b", "c", "a"]);

        assert!(remove(&mut colors, "b"));
        assert!(!remove(&mut colors, "b"));
        assert_eq!(order(&colors), vec!["d", "c", "a"]);
    }

    #[test]
    fn test_json_export_and_import() {
        let colors = sample_colors();
        let palettes = vec![SavedPalette::new(
            "p",
            "Primary",
            vec![RGBColor::from((255, 0, 0)), RGBColor::from((0, 0, 255))],
            NOW,
        )];
        let json = export_document(&colors, &palettes, NOW).unwrap();
        assert!(json.contains("\"exportDate\": 1700000000000"));
        assert!(json.contains("\"isFavorite\": true"));

        let mut imported_colors = vec![color("z", "#ffffff", 0)];
        let mut imported_palettes = vec![];
        let summary = import_document(&mut imported_colors, &mut imported_palettes, &json).unwrap();
        assert_eq!(summary, ImportSummary { colors: 4, palettes: 1, skipped: 0 });
        assert_eq!(imported_colors[0].id, "z");
        assert_eq!(&imported_colors[1..], &colors[..]);
        assert_eq!(imported_palettes, palettes);
    }

    #[test]
    fn test_import_skips_bad_records() {
        let json = r##"{
            "colors": [
                {"id": "ok", "hex": "#ABCDEF", "r": 0, "g": 0, "b": 0, "createdAt": 5},
                {"id": "bad-hex", "hex": "#abc", "r": 0, "g": 0, "b": 0, "createdAt": 5},
                {"id": "missing-fields"}
            ]
        }"##;
        let mut colors = vec![];
        let mut palettes = vec![];
        let summary = import_document(&mut colors, &mut palettes, json).unwrap();
        assert_eq!(summary, ImportSummary { colors: 1, palettes: 0, skipped: 2 });
        assert_eq!(colors[0].hex, "#abcdef");
        assert_eq!(colors[0].rgb(), RGBColor::from((171, 205, 239)));
        assert!(colors[0].tags.is_empty());

        match import_document(&mut colors, &mut palettes, "[1, 2]") {
            Err(CollectionError::Json(_)) => {}
            other => panic!("expected a JSON error, got {:?}", other),
        }
        assert_eq!(colors.len(), 1);
    }

    #[test]
    fn test_csv_export_and_import() {
        let colors = sample_colors();
        let mut out = Vec::new();
        export_colors_csv(&colors, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("hex,r,g,b,tags,isFavorite,usageCount"));
        assert_eq!(lines.next(), Some("#ff0000,255,0,0,warm;Brand,false,5"));

        let back = import_colors_csv(text.as_bytes(), NOW).unwrap();
        assert_eq!(back.len(), 4);
        assert_eq!(back[0].tags, vec!["warm", "Brand"]);
        assert_eq!(back[1].hex, "#3b82f6");
        assert!(back[1].is_favorite);
        assert_eq!(back[3].usage_count, 9);
        assert_eq!(back[2].id, format!("csv-{}-2", NOW));
    }

    #[test]
    fn test_csv_import_skips_bad_rows() {
        let text = "hex,r,g,b,tags,isFavorite,usageCount\n\
                    #zzzzzz,0,0,0,,false,0\n\
                    #123456,18,52,86,,true,2\n";
        let colors = import_colors_csv(text.as_bytes(), NOW).unwrap();
        assert_eq!(colors.len(), 1);
        assert_eq!(colors[0].rgb(), RGBColor::from((18, 52, 86)));
        assert!(colors[0].tags.is_empty());
    }
}
