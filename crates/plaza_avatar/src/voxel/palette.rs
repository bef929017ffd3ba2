//! Color-key palettes.
//!
//! A palette maps short keys (`"main"`, `"belly"`, `"beak"`) to literal
//! colors. Resolution order: palette entry, then the key itself as a hex
//! literal, then the fallback. Resolution never fails.

use std::collections::BTreeMap;

use tracing::warn;

use crate::color::Rgb;

/// Default primary color for the freestyle rig.
pub const FREESTYLE_DEFAULT_PRIMARY: &str = "#7B68EE";
/// Default secondary color for the freestyle rig.
pub const FREESTYLE_DEFAULT_SECONDARY: &str = "#FFD966";

/// Mapping from color keys to literal colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    entries: BTreeMap<String, String>,
}

impl Palette {
    /// An empty palette; only literal keys resolve.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a palette from static `(key, literal)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let mut palette = Self::new();
        for (key, value) in pairs {
            palette.set(key, value);
        }
        palette
    }

    /// Inserts or replaces an entry.
    pub fn set(&mut self, key: &str, literal: &str) {
        self.entries.insert(key.to_string(), literal.to_string());
    }

    /// Returns a copy with `other`'s entries layered on top.
    #[must_use]
    pub fn merged(&self, other: &Palette) -> Self {
        let mut out = self.clone();
        for (k, v) in &other.entries {
            out.entries.insert(k.clone(), v.clone());
        }
        out
    }

    /// Raw literal stored for `key`, if any.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Resolves `key` without logging. `None` means the fallback applies.
    #[must_use]
    pub fn try_resolve(&self, key: &str) -> Option<Rgb> {
        match self.entries.get(key) {
            Some(literal) => Rgb::parse_hex(literal),
            None => Rgb::parse_hex(key),
        }
    }

    /// Resolves `key` to a literal color, falling back to `fallback`.
    #[must_use]
    pub fn resolve(&self, key: &str, fallback: Rgb) -> Rgb {
        self.try_resolve(key).unwrap_or_else(|| {
            warn!(key, fallback = %fallback, "unresolvable color key, using fallback");
            fallback
        })
    }

    /// Generates the dual-tone freestyle palette.
    ///
    /// Missing or malformed inputs fall back to the freestyle defaults.
    #[must_use]
    pub fn freestyle(primary: Option<&str>, secondary: Option<&str>) -> Self {
        let pick = |input: Option<&str>, default: &str| {
            input
                .and_then(Rgb::parse_hex)
                .or_else(|| Rgb::parse_hex(default))
                .unwrap_or(Rgb::WHITE)
        };
        let primary = pick(primary, FREESTYLE_DEFAULT_PRIMARY);
        let secondary = pick(secondary, FREESTYLE_DEFAULT_SECONDARY);

        let mut palette = Self::new();
        palette.set("main", &primary.to_hex());
        palette.set("belly", &secondary.to_hex());
        palette.set("dark", &primary.scaled(0.7).to_hex());
        palette.set("light", &primary.lerp(Rgb::WHITE, 0.4).to_hex());
        palette.set("accent", &secondary.scaled(0.8).to_hex());
        palette.set("eye", "#FFFFFF");
        palette.set("pupil", "#111111");
        palette
    }
}
