//! Feedback text for the result screen.
//!
//! Pure table lookup: the classification picks a title and body template, the
//! scene id picks the adjustment hint (over/under) or the closing encouragement
//! (perfect). Scenes without an entry fall back to a generic hint.

use crate::scene::Scene;
use crate::types::{Classification, Locale};

/// Title and body shown after a shot.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub title: String,
    pub body: String,
    /// Signed EV difference rounded to a tenth of a stop, for display.
    pub stops_off: f64,
}

#[derive(Debug, Clone, Copy)]
struct Text {
    zh_tw: &'static str,
    en: &'static str,
}

impl Text {
    const fn new(zh_tw: &'static str, en: &'static str) -> Self {
        Self { zh_tw, en }
    }

    fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::ZhTw => self.zh_tw,
            Locale::En => self.en,
        }
    }
}

struct SceneHints {
    id: &'static str,
    over: Text,
    under: Text,
    encouragement: Text,
}

static SCENE_HINTS: [SceneHints; 3] = [
    SceneHints {
        id: "sunny",
        over: Text::new(
            "縮小光圈 (讓F值變大) 或 加快快門速度",
            "stop down the aperture (a larger f-number) or use a faster shutter speed",
        ),
        under: Text::new(
            "稍微開大光圈 (讓F值變小) 或 放慢快門速度",
            "open the aperture a little (a smaller f-number) or slow the shutter speed",
        ),
        encouragement: Text::new(
            "大太陽下光線充足，縮小光圈或加快快門是很好的選擇。",
            " Bright sun gives plenty of light, so stopping down or using a faster shutter is a good choice.",
        ),
    },
    SceneHints {
        id: "cloudy",
        over: Text::new(
            "稍微縮小光圈 或 加快快門速度",
            "stop down slightly or use a faster shutter speed",
        ),
        under: Text::new(
            "開大光圈 或 放慢快門速度，也可以提高 ISO",
            "open the aperture or slow the shutter speed, or raise the ISO",
        ),
        encouragement: Text::new(
            "陰天光線柔和，適度開大光圈或放慢快門是關鍵。",
            " Overcast light is soft, so opening up a little or slowing the shutter is the key.",
        ),
    },
    SceneHints {
        id: "rainy",
        over: Text::new(
            "檢查是不是 ISO 開得太高了，或是 光圈太大，快門太慢了，雨天光線雖弱，但組合不對仍會過曝喔",
            "check whether the ISO is too high, the aperture too wide or the shutter too slow; rain is dim, but the wrong combination still overexposes",
        ),
        under: Text::new(
            "大幅開大光圈，放慢快門，並勇敢提高 ISO 感光度",
            "open the aperture wide, slow the shutter and boldly raise the ISO",
        ),
        encouragement: Text::new(
            "雨天光線昏暗，大幅提高 ISO 和開大光圈是低光攝影的挑戰！",
            " Rainy light is dim, and raising the ISO while opening up wide is the low-light challenge!",
        ),
    },
];

const GENERIC_HINT: Text = Text::new(
    "調整你的光圈、快門或ISO",
    "adjust your aperture, shutter or ISO",
);

fn scene_hints(scene: &Scene) -> Option<&'static SceneHints> {
    SCENE_HINTS.iter().find(|h| h.id == scene.id.as_str())
}

/// Hint used when the shot came out too bright.
pub fn over_exposure_hint(scene: &Scene, locale: Locale) -> &'static str {
    scene_hints(scene).map_or(GENERIC_HINT, |h| h.over).get(locale)
}

/// Hint used when the shot came out too dark.
pub fn under_exposure_hint(scene: &Scene, locale: Locale) -> &'static str {
    scene_hints(scene).map_or(GENERIC_HINT, |h| h.under).get(locale)
}

fn title(classification: Classification, locale: Locale) -> &'static str {
    let text = match classification {
        Classification::Perfect => Text::new("完美曝光！", "Perfect exposure!"),
        Classification::Over => Text::new("有點過曝！", "A bit overexposed!"),
        Classification::Under => Text::new("照片太暗了！", "Too dark!"),
        Classification::SlightOver => Text::new("稍亮了一些！", "Slightly bright!"),
        Classification::SlightUnder => Text::new("稍暗了一些！", "Slightly dark!"),
    };
    text.get(locale)
}

/// Build the result-screen text for a shot.
pub fn generate_feedback(
    scene: &Scene,
    classification: Classification,
    diff: f64,
    locale: Locale,
) -> Feedback {
    let name = scene.name.get(locale);

    let body = match (classification, locale) {
        (Classification::Perfect, _) => {
            let mut body = match locale {
                Locale::ZhTw => {
                    "你做得太棒了！你的設定與理想曝光非常接近，精準捕捉了光線。繼續保持！".to_string()
                }
                Locale::En => "Great work! Your settings are very close to the ideal exposure and captured the light precisely. Keep it up!".to_string(),
            };
            if let Some(hints) = scene_hints(scene) {
                body.push_str(hints.encouragement.get(locale));
            }
            body
        }
        (Classification::Over, Locale::ZhTw) => format!(
            "你的照片比理想亮度亮了一些。在{}這種光線條件下，下次可以嘗試{}，讓光線更適中。",
            name,
            over_exposure_hint(scene, locale)
        ),
        (Classification::Over, Locale::En) => format!(
            "Your photo is brighter than the ideal. For a scene like \"{}\", next time try to {} to bring the light down.",
            name,
            over_exposure_hint(scene, locale)
        ),
        (Classification::Under, Locale::ZhTw) => format!(
            "你的照片比理想亮度暗了一些。在{}這種光線條件下，下次可以嘗試{}，讓光線更充足。",
            name,
            under_exposure_hint(scene, locale)
        ),
        (Classification::Under, Locale::En) => format!(
            "Your photo is darker than the ideal. For a scene like \"{}\", next time try to {} to let in more light.",
            name,
            under_exposure_hint(scene, locale)
        ),
        (Classification::SlightOver, Locale::ZhTw) => format!(
            "你的照片稍微亮了一點點。在{}這種條件下，可以微調光圈或快門，讓光線更完美。",
            name
        ),
        (Classification::SlightOver, Locale::En) => format!(
            "Your photo is just a touch too bright. For a scene like \"{}\", fine-tune the aperture or shutter to make the light perfect.",
            name
        ),
        (Classification::SlightUnder, Locale::ZhTw) => format!(
            "你的照片稍微暗了一點點。在{}這種條件下，可以微調光圈或快門，讓光線更完美。",
            name
        ),
        (Classification::SlightUnder, Locale::En) => format!(
            "Your photo is just a touch too dark. For a scene like \"{}\", fine-tune the aperture or shutter to make the light perfect.",
            name
        ),
    };

    Feedback {
        title: title(classification, locale).to_string(),
        body,
        stops_off: (diff * 10.0).round() / 10.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{SceneCatalog, SceneId};

    fn scene(index: usize) -> Scene {
        SceneCatalog::builtin().get_scene(index).unwrap().clone()
    }

    #[test]
    fn over_feedback_interpolates_scene_hint() {
        let sunny = scene(0);
        let fb = generate_feedback(&sunny, Classification::Over, 2.4, Locale::ZhTw);
        assert_eq!(fb.title, "有點過曝！");
        assert!(fb.body.contains("晴空萬里的大太陽天"));
        assert!(fb.body.contains("縮小光圈 (讓F值變大) 或 加快快門速度"));
        assert!(fb.body.ends_with("讓光線更適中。"));
        assert_eq!(fb.stops_off, 2.4);
    }

    #[test]
    fn under_feedback_uses_direction_specific_hint() {
        let rainy = scene(2);
        let fb = generate_feedback(&rainy, Classification::Under, -3.0, Locale::En);
        assert_eq!(fb.title, "Too dark!");
        assert!(fb.body.contains("Drizzly rainy day"));
        assert!(fb.body.contains("boldly raise the ISO"));
        assert!(!fb.body.contains("overexposes"));
    }

    #[test]
    fn perfect_feedback_appends_scene_encouragement() {
        let cloudy = scene(1);
        let fb = generate_feedback(&cloudy, Classification::Perfect, 0.0, Locale::ZhTw);
        assert_eq!(fb.title, "完美曝光！");
        assert!(fb.body.starts_with("你做得太棒了！"));
        assert!(fb.body.ends_with("陰天光線柔和，適度開大光圈或放慢快門是關鍵。"));
    }

    #[test]
    fn encouragement_is_keyed_by_id_not_display_name() {
        let mut renamed = scene(0);
        renamed.name.zh_tw = "夏日".to_string();
        renamed.name.en = "Summer".to_string();
        let fb = generate_feedback(&renamed, Classification::Perfect, 0.2, Locale::En);
        assert!(fb.body.contains("Bright sun gives plenty of light"));
    }

    #[test]
    fn unknown_scene_falls_back_to_generic_hint() {
        let mut unknown = scene(0);
        unknown.id = SceneId::new("foggy");

        let fb = generate_feedback(&unknown, Classification::Over, 2.0, Locale::ZhTw);
        assert!(fb.body.contains("調整你的光圈、快門或ISO"));
        let fb = generate_feedback(&unknown, Classification::Under, -2.0, Locale::En);
        assert!(fb.body.contains("adjust your aperture, shutter or ISO"));

        let fb = generate_feedback(&unknown, Classification::Perfect, 0.0, Locale::En);
        assert!(fb.body.ends_with("Keep it up!"));
    }

    #[test]
    fn slight_feedback_has_no_hint() {
        let sunny = scene(0);
        let fb = generate_feedback(&sunny, Classification::SlightUnder, -1.04, Locale::En);
        assert_eq!(fb.title, "Slightly dark!");
        assert!(fb.body.contains("fine-tune the aperture or shutter"));
        assert_eq!(fb.stops_off, -1.0);

        let fb = generate_feedback(&sunny, Classification::SlightOver, 1.26, Locale::ZhTw);
        assert_eq!(fb.title, "稍亮了一些！");
        assert!(fb.body.starts_with("你的照片稍微亮了一點點。"));
        assert_eq!(fb.stops_off, 1.3);
    }

    #[test]
    fn feedback_is_deterministic() {
        let rainy = scene(2);
        let a = generate_feedback(&rainy, Classification::Over, 1.8, Locale::En);
        let b = generate_feedback(&rainy, Classification::Over, 1.8, Locale::En);
        assert_eq!(a, b);
    }
}
