//! Project entry model: validation, ordering and featured selection.
//!
//! The data source is untrusted JSON, so nothing here assumes a clean
//! payload: a non-array document becomes an empty collection, and each
//! element is validated on its own so one malformed entry never takes the
//! rest of the gallery down with it.

use serde::Serialize;
use serde_json::Value;

/// One item in the gallery's data source.
///
/// Only `title` and `date` are required for an element to be accepted;
/// everything else defaults when absent or of the wrong type.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectEntry {
    /// Display title
    pub title: String,
    /// ISO-8601 date text; compared lexicographically for ordering
    pub date: String,
    /// Short description shown under the title
    pub caption: String,
    /// Preferred image URL
    pub thumb: Option<String>,
    /// Additional image URLs; the first is the fallback when `thumb` is unset
    pub images: Vec<String>,
    /// Optional video URL; rendered as a link on the featured card
    pub video: Option<String>,
    /// Whether the entry is eligible for the featured slot
    pub featured: bool,
}

impl ProjectEntry {
    /// Builds an entry from one element of the payload array.
    ///
    /// Returns `None` unless `title` and `date` are both present JSON
    /// strings. Optional fields of the wrong type fall back to their
    /// defaults instead of invalidating the element; `images` keeps only
    /// its string members.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let title = obj.get("title").and_then(Value::as_str)?.to_string();
        let date = obj.get("date").and_then(Value::as_str)?.to_string();

        let caption = obj
            .get("caption")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let thumb = obj
            .get("thumb")
            .and_then(Value::as_str)
            .map(str::to_string);
        let images = obj
            .get("images")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();
        let video = obj
            .get("video")
            .and_then(Value::as_str)
            .map(str::to_string);
        let featured = obj
            .get("featured")
            .and_then(Value::as_bool)
            .unwrap_or(false);

        Some(Self {
            title,
            date,
            caption,
            thumb,
            images,
            video,
            featured,
        })
    }

    /// The image URL to render: `thumb`, else the first of `images`.
    pub fn image_url(&self) -> Option<&str> {
        self.thumb
            .as_deref()
            .or_else(|| self.images.first().map(String::as_str))
    }
}

/// Extracts the valid entries from a parsed payload.
///
/// A payload that is not a JSON array yields an empty collection. Elements
/// failing validation are dropped with a debug log and do not abort the
/// rest.
pub fn collect_valid(payload: &Value) -> Vec<ProjectEntry> {
    let Some(items) = payload.as_array() else {
        log::debug!("Gallery payload is not an array; treating as empty");
        return Vec::new();
    };

    items
        .iter()
        .filter_map(|item| {
            let entry = ProjectEntry::from_value(item);
            if entry.is_none() {
                log::debug!("Dropping malformed gallery entry: {}", item);
            }
            entry
        })
        .collect()
}

/// Sorts entries newest first by their raw date strings.
///
/// The sort is stable, so entries with equal (or mutually unorderable)
/// dates keep their original relative position. The `featured` flag never
/// participates in the comparator.
pub fn order_newest_first(entries: &mut [ProjectEntry]) {
    entries.sort_by(|a, b| b.date.cmp(&a.date));
}

/// Splits a newest-first list into the featured entry and the rest.
///
/// The featured entry is the newest among those flagged `featured`, or the
/// newest overall when none are flagged. Removal is by position, so
/// duplicate entries are never dropped twice. Returns `None` for an empty
/// list.
pub fn select_featured(
    ordered: Vec<ProjectEntry>,
) -> Option<(ProjectEntry, Vec<ProjectEntry>)> {
    if ordered.is_empty() {
        return None;
    }
    let index = ordered
        .iter()
        .position(|entry| entry.featured)
        .unwrap_or(0);
    let mut rest = ordered;
    let featured = rest.remove(index);
    Some((featured, rest))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(title: &str, date: &str, featured: bool) -> ProjectEntry {
        ProjectEntry {
            title: title.to_string(),
            date: date.to_string(),
            caption: String::new(),
            thumb: None,
            images: Vec::new(),
            video: None,
            featured,
        }
    }

    #[test]
    fn test_valid_entry_from_value() {
        let value = json!({
            "title": "Mural",
            "date": "2024-03-02",
            "caption": "Community wall",
            "thumb": "mural.jpg",
            "images": ["a.jpg", "b.jpg"],
            "video": "https://example.com/v",
            "featured": true
        });
        let entry = ProjectEntry::from_value(&value).expect("entry should be valid");
        assert_eq!(entry.title, "Mural");
        assert_eq!(entry.image_url(), Some("mural.jpg"));
        assert!(entry.featured);
    }

    #[test]
    fn test_missing_required_fields_invalidate() {
        assert!(ProjectEntry::from_value(&json!({"title": "No date"})).is_none());
        assert!(ProjectEntry::from_value(&json!({"date": "2024-01-01"})).is_none());
        assert!(ProjectEntry::from_value(&json!({"title": 7, "date": "2024-01-01"})).is_none());
        assert!(ProjectEntry::from_value(&json!(null)).is_none());
        assert!(ProjectEntry::from_value(&json!("just a string")).is_none());
    }

    #[test]
    fn test_wrong_typed_optionals_fall_back() {
        let value = json!({
            "title": "X",
            "date": "2024-01-01",
            "caption": 42,
            "images": ["ok.jpg", 3, {"nested": true}],
            "featured": "yes"
        });
        let entry = ProjectEntry::from_value(&value).expect("still valid");
        assert_eq!(entry.caption, "");
        assert_eq!(entry.images, vec!["ok.jpg".to_string()]);
        assert!(!entry.featured);
    }

    #[test]
    fn test_collect_valid_drops_malformed() {
        let payload = json!([
            {"title": "A", "date": "2023-01-01"},
            {"title": "broken"},
            17,
            {"title": "B", "date": "2024-06-01"}
        ]);
        let entries = collect_valid(&payload);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].title, "A");
        assert_eq!(entries[1].title, "B");
    }

    #[test]
    fn test_collect_valid_non_array_is_empty() {
        assert!(collect_valid(&json!({"title": "A", "date": "2023"})).is_empty());
        assert!(collect_valid(&json!("nope")).is_empty());
        assert!(collect_valid(&json!(null)).is_empty());
    }

    #[test]
    fn test_order_newest_first_is_stable() {
        let mut entries = vec![
            entry("old", "2020-05-01", false),
            entry("tie-first", "2024-01-01", false),
            entry("tie-second", "2024-01-01", false),
            entry("newest", "2025-02-02", false),
        ];
        order_newest_first(&mut entries);
        let titles: Vec<&str> = entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["newest", "tie-first", "tie-second", "old"]);
    }

    #[test]
    fn test_featured_prefers_flagged_subset() {
        let mut entries = vec![
            entry("A", "2023-01-01", false),
            entry("B", "2024-06-01", true),
            entry("C", "2024-12-01", false),
        ];
        order_newest_first(&mut entries);
        let (featured, rest) = select_featured(entries).expect("non-empty");
        assert_eq!(featured.title, "B");
        let titles: Vec<&str> = rest.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["C", "A"]);
    }

    #[test]
    fn test_featured_falls_back_to_newest() {
        let mut entries = vec![
            entry("A", "2023-01-01", false),
            entry("C", "2024-12-01", false),
        ];
        order_newest_first(&mut entries);
        let (featured, rest) = select_featured(entries).expect("non-empty");
        assert_eq!(featured.title, "C");
        assert_eq!(rest.len(), 1);
        assert_eq!(rest[0].title, "A");
    }

    #[test]
    fn test_duplicate_entries_survive_partition() {
        let twins = vec![
            entry("twin", "2024-01-01", false),
            entry("twin", "2024-01-01", false),
        ];
        let (featured, rest) = select_featured(twins).expect("non-empty");
        assert_eq!(featured.title, "twin");
        assert_eq!(rest.len(), 1);
    }

    #[test]
    fn test_select_featured_empty() {
        assert!(select_featured(Vec::new()).is_none());
    }
}
