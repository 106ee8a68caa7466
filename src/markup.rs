//! Markup generation for gallery cards.
//!
//! Everything the data source supplies is untrusted text, so every
//! interpolation below goes through [`escape_html`] first. That is the one
//! safety-critical invariant of this crate: title, caption, date text and
//! URL attribute values must never reach the output unescaped.

use base64::Engine as Base64Engine;

use crate::model::ProjectEntry;

/// Label used when an entry has an empty title.
pub const UNTITLED_LABEL: &str = "Untitled project";

// Placeholder canvas geometry, fixed regardless of card size.
const PLACEHOLDER_WIDTH: u32 = 1200;
const PLACEHOLDER_HEIGHT: u32 = 675;
const PLACEHOLDER_LABEL_MAX: usize = 28;
const PLACEHOLDER_LABEL_KEEP: usize = 25;

/// Replaces the five HTML special characters with character references.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Formats a raw date string for display.
///
/// Recognized calendar dates come out as `YYYY-MM-DD`; anything that does
/// not parse is passed through unchanged so the reader still sees whatever
/// the data source said. Empty input stays empty.
pub fn format_date(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return dt.date_naive().format("%Y-%m-%d").to_string();
    }
    if let Ok(dt) = chrono::NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return dt.date().format("%Y-%m-%d").to_string();
    }
    if let Ok(d) = chrono::NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return d.format("%Y-%m-%d").to_string();
    }
    raw.to_string()
}

fn placeholder_label(title: &str) -> String {
    if title.chars().count() > PLACEHOLDER_LABEL_MAX {
        let kept: String = title.chars().take(PLACEHOLDER_LABEL_KEEP).collect();
        format!("{kept}…")
    } else {
        title.to_string()
    }
}

/// Synthesizes the fallback graphic for entries without any image.
///
/// A fixed-size, fixed-color SVG with the (truncated, escaped) title
/// centered on it.
pub fn placeholder_svg(title: &str) -> String {
    let label = escape_html(&placeholder_label(title));
    format!(
        "<svg xmlns='http://www.w3.org/2000/svg' width='{PLACEHOLDER_WIDTH}' height='{PLACEHOLDER_HEIGHT}'>\
<rect width='100%' height='100%' fill='#111418'/>\
<text x='50%' y='50%' dominant-baseline='middle' text-anchor='middle' \
font-family='system-ui,Segoe UI,Roboto,Arial' font-size='28' fill='#b2bdc7'>{label}</text></svg>"
    )
}

/// Encodes the placeholder SVG as a `data:` URI usable directly as an
/// image source, so a missing image never costs a network request.
pub fn placeholder_data_uri(title: &str) -> String {
    let encoded = base64::engine::general_purpose::STANDARD.encode(placeholder_svg(title));
    format!("data:image/svg+xml;base64,{encoded}")
}

fn display_title(entry: &ProjectEntry) -> &str {
    if entry.title.is_empty() {
        UNTITLED_LABEL
    } else {
        &entry.title
    }
}

fn img_tag(entry: &ProjectEntry) -> String {
    let title = display_title(entry);
    let alt = escape_html(title);
    let src = match entry.image_url() {
        Some(url) => escape_html(url),
        None => placeholder_data_uri(title),
    };
    format!(r#"<img src="{src}" alt="{alt}" loading="lazy" decoding="async">"#)
}

fn meta_block(entry: &ProjectEntry, video_button: &str) -> String {
    let date = escape_html(&format_date(&entry.date));
    let date_span = if date.is_empty() {
        String::new()
    } else {
        format!("<span>{date}</span>")
    };
    format!(r#"<div class="meta">{date_span}{video_button}</div>"#)
}

/// Renders the large highlighted card for the featured entry.
pub fn featured_card(entry: &ProjectEntry) -> String {
    let title = escape_html(display_title(entry));
    let caption = escape_html(&entry.caption);
    let video_button = match &entry.video {
        Some(url) => format!(
            r#"<a class="btn ghost" href="{}" target="_blank" rel="noopener">View video</a>"#,
            escape_html(url)
        ),
        None => String::new(),
    };
    format!(
        r#"<figure class="card big">{img}<figcaption><h4>{title}</h4><p>{caption}</p>{meta}</figcaption></figure>"#,
        img = img_tag(entry),
        meta = meta_block(entry, &video_button),
    )
}

/// Renders the standard grid card.
pub fn thumb_card(entry: &ProjectEntry) -> String {
    let title = escape_html(display_title(entry));
    let caption = escape_html(&entry.caption);
    format!(
        r#"<figure class="card thumb">{img}<figcaption><h4>{title}</h4><p>{caption}</p>{meta}</figcaption></figure>"#,
        img = img_tag(entry),
        meta = meta_block(entry, ""),
    )
}

/// Assembles the full gallery fragment: the featured block followed by the
/// thumbnail grid, as one string for a single atomic container replacement.
pub fn gallery_fragment(featured: &ProjectEntry, rest: &[ProjectEntry]) -> String {
    let thumbs: String = rest.iter().map(thumb_card).collect();
    format!(
        r#"<div class="gallery-featured-block">{featured}</div><div class="gallery-thumbs">{thumbs}</div>"#,
        featured = featured_card(featured),
    )
}
