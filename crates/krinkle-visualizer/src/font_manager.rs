//! System font lookup for overlay labels.

use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::Font;
use std::{
    collections::HashMap,
    fs,
    sync::{Mutex, OnceLock},
};
use tracing::{debug, warn};

/// Family used when none is configured.
pub const DEFAULT_FAMILY: &str = "Sans";

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        debug!("Loaded {} system font faces", db.len());
        db
    })
}

/// Regular-weight font for `family`, loaded once per family.
///
/// `"Sans"`, `"Serif"` and `"Monospace"` (and the empty string) select the
/// generic families. Returns `None` when no face matches; callers skip label
/// drawing in that case.
pub fn get_font_for(family: &str) -> Option<&'static Font<'static>> {
    static CACHE: OnceLock<Mutex<HashMap<String, Option<&'static Font<'static>>>>> =
        OnceLock::new();
    let cache = CACHE.get_or_init(|| Mutex::new(HashMap::new()));

    if let Some(font) = cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .get(family)
    {
        return *font;
    }

    let font_ref: Option<&'static Font<'static>> = match load_font_from_system(family) {
        Some(font) => Some(Box::leak(Box::new(font))),
        None => {
            warn!("No usable font for family '{}'; labels will be skipped", family);
            None
        }
    };

    cache
        .lock()
        .unwrap_or_else(|p| p.into_inner())
        .insert(family.to_string(), font_ref);
    font_ref
}

fn load_font_from_system(family: &str) -> Option<Font<'static>> {
    let families: Vec<Family<'_>> = match family.trim() {
        "" | "Sans" => vec![Family::SansSerif],
        "Serif" => vec![Family::Serif],
        "Monospace" => vec![Family::Monospace],
        other => vec![Family::Name(other), Family::SansSerif],
    };

    let query = Query {
        families: &families,
        weight: Weight::NORMAL,
        stretch: Stretch::Normal,
        style: Style::Normal,
    };

    let id = db().query(&query)?;
    let face = db().face(id)?;

    match &face.source {
        fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => {
            let bytes = fs::read(path).ok()?;
            Font::try_from_vec_and_index(bytes, face.index)
        }
        fontdb::Source::Binary(bytes) => {
            Font::try_from_vec_and_index(bytes.as_ref().as_ref().to_vec(), face.index)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_is_cached_per_family() {
        let first = get_font_for(DEFAULT_FAMILY);
        let second = get_font_for(DEFAULT_FAMILY);
        match (first, second) {
            (Some(a), Some(b)) => assert!(std::ptr::eq(a, b)),
            (None, None) => {}
            _ => panic!("cached lookup changed result"),
        }
    }
}
