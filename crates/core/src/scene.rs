//! Scene catalog - the ordered, read-only table of weather scenes.
//!
//! Each scene carries its standard-answer camera setting plus opaque asset
//! references that the rendering layer resolves. The catalog is built once
//! (built-in table or a JSON file) and never mutated afterwards.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::types::{Locale, ParameterSet};

/// Stable scene identifier (`"sunny"`, `"cloudy"`, ...).
///
/// Per-scene tables (hints, encouragement) are keyed by this, never by the
/// localized display name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SceneId(String);

impl SceneId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SceneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Player-facing text in every supported locale.
///
/// In JSON this is either a plain string (used for all locales) or an object
/// `{"zh-TW": "...", "en": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "LocalizedRepr")]
pub struct LocalizedText {
    #[serde(rename = "zh-TW")]
    pub zh_tw: String,
    pub en: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LocalizedRepr {
    Single(String),
    PerLocale {
        #[serde(rename = "zh-TW")]
        zh_tw: String,
        en: String,
    },
}

impl From<LocalizedRepr> for LocalizedText {
    fn from(value: LocalizedRepr) -> Self {
        match value {
            LocalizedRepr::Single(s) => Self {
                zh_tw: s.clone(),
                en: s,
            },
            LocalizedRepr::PerLocale { zh_tw, en } => Self { zh_tw, en },
        }
    }
}

impl LocalizedText {
    pub fn new(zh_tw: impl Into<String>, en: impl Into<String>) -> Self {
        Self {
            zh_tw: zh_tw.into(),
            en: en.into(),
        }
    }

    pub fn get(&self, locale: Locale) -> &str {
        match locale {
            Locale::ZhTw => &self.zh_tw,
            Locale::En => &self.en,
        }
    }
}

/// One weather scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub id: SceneId,
    pub name: LocalizedText,
    pub background: String,
    pub target_brightness: LocalizedText,
    pub target_depth: LocalizedText,
    /// The standard-answer camera setting.
    pub standard: ParameterSet,
    pub over_exposed: String,
    pub under_exposed: String,
}

/// Ordered, non-empty sequence of scenes with unique ids.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCatalog {
    scenes: Vec<Scene>,
}

impl SceneCatalog {
    pub fn new(scenes: Vec<Scene>) -> Result<Self> {
        if scenes.is_empty() {
            return Err(CoreError::EmptyCatalog);
        }
        let mut seen = HashSet::with_capacity(scenes.len());
        for scene in &scenes {
            if !seen.insert(scene.id.as_str()) {
                return Err(CoreError::DuplicateSceneId(scene.id.to_string()));
            }
        }
        Ok(Self { scenes })
    }

    /// The three built-in scenes: sunny, cloudy, rainy.
    pub fn builtin() -> Self {
        Self {
            scenes: vec![
                builtin_scene(
                    "sunny",
                    LocalizedText::new("晴空萬里的大太陽天", "Blazing sunny day"),
                    LocalizedText::new("景深較大", "Deep depth of field"),
                    (4, 9, 1),
                ),
                builtin_scene(
                    "cloudy",
                    LocalizedText::new("舒適的陰天", "Pleasant overcast day"),
                    LocalizedText::new("景深適中", "Moderate depth of field"),
                    (3, 7, 2),
                ),
                builtin_scene(
                    "rainy",
                    LocalizedText::new("綿綿細雨的雨天", "Drizzly rainy day"),
                    LocalizedText::new("景深較淺", "Shallow depth of field"),
                    (1, 6, 4),
                ),
            ],
        }
    }

    /// Parse a catalog from a JSON array of scenes.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let scenes: Vec<Scene> = serde_json::from_str(json)?;
        Self::new(scenes)
    }

    /// Read and parse a JSON catalog file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CoreError::CatalogIo {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            scenes = catalog.scene_count(),
            "loaded scene catalog"
        );
        Ok(catalog)
    }

    pub fn get_scene(&self, index: usize) -> Result<&Scene> {
        self.scenes.get(index).ok_or(CoreError::InvalidIndex {
            index,
            count: self.scenes.len(),
        })
    }

    pub fn scene_count(&self) -> usize {
        self.scenes.len()
    }

    /// Index of the scene with the given id.
    pub fn position(&self, id: &str) -> Option<usize> {
        self.scenes.iter().position(|s| s.id.as_str() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Scene> {
        self.scenes.iter()
    }
}

fn builtin_scene(
    id: &str,
    name: LocalizedText,
    target_depth: LocalizedText,
    (aperture, shutter, iso): (usize, usize, usize),
) -> Scene {
    let standard = ParameterSet::from_indices(aperture, shutter, iso)
        .expect("built-in standard answer within the stop tables");
    Scene {
        id: SceneId::new(id),
        name,
        background: format!("assets/{id}.jpg"),
        target_brightness: LocalizedText::new("適中", "Balanced"),
        target_depth,
        standard,
        over_exposed: format!("assets/{id}_over.jpg"),
        under_exposed: format!("assets/{id}_under.jpg"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_has_three_scenes_in_order() {
        let catalog = SceneCatalog::builtin();
        assert_eq!(catalog.scene_count(), 3);
        let ids: Vec<&str> = catalog.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["sunny", "cloudy", "rainy"]);
    }

    #[test]
    fn builtin_standard_answers() {
        let catalog = SceneCatalog::builtin();

        let sunny = &catalog.get_scene(0).unwrap().standard;
        assert_eq!(sunny.aperture.f_number(), 8.0);
        assert_eq!(sunny.shutter.denominator(), 500);
        assert_eq!(sunny.iso.value(), 100);

        let cloudy = &catalog.get_scene(1).unwrap().standard;
        assert_eq!(cloudy.aperture.f_number(), 5.6);
        assert_eq!(cloudy.shutter.denominator(), 125);
        assert_eq!(cloudy.iso.value(), 200);

        let rainy = &catalog.get_scene(2).unwrap().standard;
        assert_eq!(rainy.aperture.f_number(), 2.8);
        assert_eq!(rainy.shutter.denominator(), 60);
        assert_eq!(rainy.iso.value(), 800);
    }

    #[test]
    fn builtin_asset_references() {
        let scene = SceneCatalog::builtin().get_scene(2).unwrap().clone();
        assert_eq!(scene.background, "assets/rainy.jpg");
        assert_eq!(scene.over_exposed, "assets/rainy_over.jpg");
        assert_eq!(scene.under_exposed, "assets/rainy_under.jpg");
    }

    #[test]
    fn get_scene_out_of_range() {
        let catalog = SceneCatalog::builtin();
        match catalog.get_scene(3) {
            Err(CoreError::InvalidIndex { index: 3, count: 3 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn empty_and_duplicate_catalogs_are_rejected() {
        assert!(matches!(
            SceneCatalog::new(Vec::new()),
            Err(CoreError::EmptyCatalog)
        ));

        let sunny = SceneCatalog::builtin().get_scene(0).unwrap().clone();
        assert!(matches!(
            SceneCatalog::new(vec![sunny.clone(), sunny]),
            Err(CoreError::DuplicateSceneId(id)) if id == "sunny"
        ));
    }

    #[test]
    fn json_catalog_accepts_plain_and_localized_text() {
        let json = r#"[
            {
                "id": "snowy",
                "name": {"zh-TW": "雪天", "en": "Snowy day"},
                "background": "assets/snowy.jpg",
                "target_brightness": "Bright",
                "target_depth": "Deep",
                "standard": {"aperture": 11, "shutter": 250, "iso": 100},
                "over_exposed": "assets/snowy_over.jpg",
                "under_exposed": "assets/snowy_under.jpg"
            }
        ]"#;
        let catalog = SceneCatalog::from_json_str(json).unwrap();
        let scene = catalog.get_scene(0).unwrap();
        assert_eq!(scene.name.get(Locale::ZhTw), "雪天");
        assert_eq!(scene.name.get(Locale::En), "Snowy day");
        assert_eq!(scene.target_brightness.get(Locale::ZhTw), "Bright");
        assert_eq!(scene.standard.aperture.f_number(), 11.0);
        assert_eq!(catalog.position("snowy"), Some(0));
        assert_eq!(catalog.position("sunny"), None);
    }

    #[test]
    fn json_catalog_rejects_off_table_stops() {
        let json = r#"[{
            "id": "odd", "name": "Odd", "background": "b", "target_brightness": "x",
            "target_depth": "y", "standard": {"aperture": 8, "shutter": 100, "iso": 100},
            "over_exposed": "o", "under_exposed": "u"
        }]"#;
        assert!(matches!(
            SceneCatalog::from_json_str(json),
            Err(CoreError::CatalogParse(_))
        ));
    }

    #[test]
    fn loading_a_missing_file_reports_the_path() {
        let err = SceneCatalog::load("/nonexistent/scenes.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/scenes.json"));
    }
}
