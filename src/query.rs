//! Search query planning: stop-word filtering, variant strategies, and
//! photo selection.

use crate::compose::EventFields;
use crate::ports::photo_source::PhotoDescriptor;

/// Words too generic to narrow a photo search.
const STOP_WORDS: &[&str] =
    &["networking", "event", "professional", "the", "a", "an", "in", "at", "on", "with"];

/// One planned search: a query plus the result page to request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchAttempt {
    /// Free-text search query.
    pub query: String,
    /// 1-based result page.
    pub page: u32,
}

/// Distill an event name into search keywords.
///
/// Lowercases, drops stop words and duplicates, and keeps first-occurrence
/// order so the same name always yields the same query. Falls back to the
/// full name when nothing meaningful remains, and to `"event"` for blank
/// input.
#[must_use]
pub fn enhance_search_query(event_name: &str) -> String {
    let mut seen: Vec<String> = Vec::new();
    for word in event_name.split_whitespace() {
        let lower = word.to_lowercase();
        if STOP_WORDS.contains(&lower.as_str()) || seen.contains(&lower) {
            continue;
        }
        seen.push(lower);
    }

    if !seen.is_empty() {
        return seen.join(" ");
    }
    let full = event_name.trim();
    if full.is_empty() {
        "event".to_string()
    } else {
        full.to_string()
    }
}

/// Plan `count` search attempts for one generation run.
///
/// With explicit keywords the same query walks consecutive pages for
/// variety. Without, each variant tries a different angle on the event
/// name and venue.
#[must_use]
pub fn variant_plan(fields: &EventFields, keywords: Option<&str>, page: u32, count: u32) -> Vec<SearchAttempt> {
    if let Some(keywords) = keywords {
        let query = clean_query(keywords);
        return (0..count).map(|i| SearchAttempt { query: query.clone(), page: page + i }).collect();
    }

    let base = fields.event_name.lines().next().unwrap_or("").trim();
    let strategies = [
        enhance_search_query(base),
        format!("celebration {base}"),
        format!("event venue {}", fields.place),
        "event decoration".to_string(),
        format!("party {}", fields.place),
    ];

    strategies
        .into_iter()
        .take(count as usize)
        .map(|q| SearchAttempt { query: clean_query(&q), page })
        .collect()
}

/// Pick a photo the way a pager would: page N lands on index N-1 within
/// the returned window, clamped to what actually came back.
#[must_use]
pub fn select_photo(photos: &[PhotoDescriptor], page: u32, per_page: u32) -> Option<&PhotoDescriptor> {
    if photos.is_empty() {
        return None;
    }
    let window = per_page.max(1);
    let index = ((page.saturating_sub(1)) % window) as usize;
    Some(&photos[index.min(photos.len() - 1)])
}

fn clean_query(query: &str) -> String {
    let trimmed = query.trim();
    if trimmed.is_empty() {
        "event".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(name: &str, place: &str) -> EventFields {
        EventFields {
            event_name: name.to_string(),
            place: place.to_string(),
            ..EventFields::default()
        }
    }

    fn photos(n: usize) -> Vec<PhotoDescriptor> {
        (0..n)
            .map(|i| PhotoDescriptor { url: format!("https://p/{i}.jpg"), width: 100, height: 100 })
            .collect()
    }

    #[test]
    fn enhance_drops_stop_words() {
        assert_eq!(enhance_search_query("The Networking Event Berlin"), "berlin");
    }

    #[test]
    fn enhance_keeps_word_order() {
        assert_eq!(enhance_search_query("Summer Gala Rooftop"), "summer gala rooftop");
    }

    #[test]
    fn enhance_dedupes() {
        assert_eq!(enhance_search_query("Gala gala GALA night"), "gala night");
    }

    #[test]
    fn enhance_falls_back_to_full_name() {
        assert_eq!(enhance_search_query("The Event"), "The Event");
    }

    #[test]
    fn enhance_blank_falls_back_to_event() {
        assert_eq!(enhance_search_query(""), "event");
        assert_eq!(enhance_search_query("   "), "event");
    }

    #[test]
    fn keyword_plan_walks_pages() {
        let plan = variant_plan(&fields("Gala", "Park"), Some("sunset rooftop"), 2, 3);
        assert_eq!(
            plan,
            vec![
                SearchAttempt { query: "sunset rooftop".into(), page: 2 },
                SearchAttempt { query: "sunset rooftop".into(), page: 3 },
                SearchAttempt { query: "sunset rooftop".into(), page: 4 },
            ]
        );
    }

    #[test]
    fn default_plan_varies_queries() {
        let plan = variant_plan(&fields("Summer Gala\nBonn", "Central Park"), None, 1, 5);
        let queries: Vec<&str> = plan.iter().map(|a| a.query.as_str()).collect();
        assert_eq!(
            queries,
            vec![
                "summer gala",
                "celebration Summer Gala",
                "event venue Central Park",
                "event decoration",
                "party Central Park",
            ]
        );
        assert!(plan.iter().all(|a| a.page == 1));
    }

    #[test]
    fn default_plan_truncates_to_count() {
        let plan = variant_plan(&fields("Gala", "Park"), None, 1, 2);
        assert_eq!(plan.len(), 2);
    }

    #[test]
    fn default_plan_with_empty_fields_still_queries() {
        let plan = variant_plan(&EventFields::default(), None, 1, 5);
        assert!(plan.iter().all(|a| !a.query.is_empty()));
        assert_eq!(plan[0].query, "event");
        // "event venue " with no place trims down to something non-empty
        assert_eq!(plan[2].query, "event venue");
    }

    #[test]
    fn select_first_page_takes_first_photo() {
        let p = photos(15);
        assert_eq!(select_photo(&p, 1, 15).unwrap().url, "https://p/0.jpg");
    }

    #[test]
    fn select_later_pages_walk_the_window() {
        let p = photos(15);
        assert_eq!(select_photo(&p, 3, 15).unwrap().url, "https://p/2.jpg");
        // Page 16 wraps around the 15-wide window
        assert_eq!(select_photo(&p, 16, 15).unwrap().url, "https://p/0.jpg");
    }

    #[test]
    fn select_clamps_to_short_results() {
        let p = photos(2);
        assert_eq!(select_photo(&p, 9, 15).unwrap().url, "https://p/1.jpg");
    }

    #[test]
    fn select_empty_returns_none() {
        assert!(select_photo(&[], 1, 15).is_none());
    }
}
