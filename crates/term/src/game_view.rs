//! GameView: maps a `core::GameSession` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::core::GameSession;
use crate::fb::{str_width, char_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{Classification, GamePhase, Locale, OutcomeImage};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// Player-facing strings for one locale.
struct Labels {
    title: &'static str,
    subtitle: &'static str,
    start_hint: &'static str,
    level: &'static str,
    aperture: &'static str,
    shutter: &'static str,
    iso: &'static str,
    brightness: &'static str,
    depth: &'static str,
    preview: &'static str,
    preview_over: &'static str,
    preview_under: &'static str,
    preview_balanced: &'static str,
    keys: [&'static str; 4],
    rounds: &'static str,
    total: &'static str,
    score: &'static str,
    score_suffix: &'static str,
    stops_off: &'static str,
    photo: &'static str,
    next_hint: &'static str,
}

const ZH_TW: Labels = Labels {
    title: "《光影捕手：天氣挑戰》",
    subtitle: "請操控相機設定，拍出正確曝光！",
    start_hint: "按 Enter 開始...",
    level: "關卡",
    aperture: "光圈",
    shutter: "快門",
    iso: "ISO",
    brightness: "目標亮度",
    depth: "目標景深",
    preview: "預覽",
    preview_over: "太亮了",
    preview_under: "太暗了",
    preview_balanced: "亮度適中",
    keys: [
        "W/S 或 ↑/↓  調整光圈",
        "A/D 或 ←/→  調整快門",
        "+/-  調整 ISO",
        "空白鍵 拍照    Q 離開",
    ],
    rounds: "回合",
    total: "總分",
    score: "分數: ",
    score_suffix: " 分",
    stops_off: "偏差",
    photo: "照片",
    next_hint: "按 N 進入下一關",
};

const EN: Labels = Labels {
    title: "Light Catcher: Weather Challenge",
    subtitle: "Dial in the camera settings and nail the exposure!",
    start_hint: "Press Enter to start...",
    level: "Level",
    aperture: "Aperture",
    shutter: "Shutter",
    iso: "ISO",
    brightness: "Target brightness",
    depth: "Target depth of field",
    preview: "Preview",
    preview_over: "too bright",
    preview_under: "too dark",
    preview_balanced: "balanced",
    keys: [
        "W/S or Up/Down     aperture",
        "A/D or Left/Right  shutter",
        "+/-                ISO",
        "Space take photo   Q quit",
    ],
    rounds: "Rounds",
    total: "Total",
    score: "Score: ",
    score_suffix: "",
    stops_off: "Off by",
    photo: "Photo",
    next_hint: "Press N for the next level",
};

fn labels(locale: Locale) -> &'static Labels {
    match locale {
        Locale::ZhTw => &ZH_TW,
        Locale::En => &EN,
    }
}

const TEXT: CellStyle = CellStyle::fg(Rgb::new(220, 220, 220));
const HEADING: CellStyle = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
const LABEL: CellStyle = CellStyle::fg(Rgb::new(150, 170, 200));
const HINT: CellStyle = CellStyle::fg(Rgb::new(160, 160, 160)).dim();
const BORDER: CellStyle = CellStyle::fg(Rgb::new(200, 200, 200));

const BRIGHT: Rgb = Rgb::new(255, 190, 90);
const DARK: Rgb = Rgb::new(120, 150, 255);
const GOOD: Rgb = Rgb::new(110, 220, 130);
const CLOSE: Rgb = Rgb::new(240, 220, 80);

/// A lightweight terminal renderer for the exposure game.
pub struct GameView {
    /// Card width cap in columns.
    max_width: u16,
    /// Card height cap in rows.
    max_height: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        Self {
            max_width: 64,
            max_height: 22,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Card geometry inside the viewport.
#[derive(Debug, Clone, Copy)]
struct Card {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

impl Card {
    /// First text column.
    fn text_x(&self) -> u16 {
        self.x.saturating_add(2)
    }

    fn text_width(&self) -> u16 {
        self.w.saturating_sub(4)
    }

    /// Column after the last text column; writes stop here.
    fn text_end(&self) -> u16 {
        self.text_x().saturating_add(self.text_width())
    }

    /// Text row `row` (0-based inside the border), if it fits.
    fn row(&self, row: u16) -> Option<u16> {
        let inner = self.h.saturating_sub(2);
        (row < inner).then(|| self.y + 1 + row)
    }

    fn last_row(&self) -> u16 {
        self.h.saturating_sub(3)
    }
}

impl GameView {
    pub fn new(max_width: u16, max_height: u16) -> Self {
        Self {
            max_width,
            max_height,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render the current session into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, session: &GameSession<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let w = self.max_width.min(viewport.width);
        let h = self.max_height.min(viewport.height);
        let card = Card {
            x: viewport.width.saturating_sub(w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(h) / 2,
                AnchorY::Top => 0,
            },
            w,
            h,
        };
        self.draw_border(fb, card.x, card.y, card.w, card.h, BORDER);

        let text = labels(session.locale());
        match session.phase() {
            GamePhase::Start => self.draw_start(fb, card, text),
            GamePhase::Playing => self.draw_playing(fb, card, text, session),
            GamePhase::Result => self.draw_result(fb, card, text, session),
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, session: &GameSession<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(session, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_start(&self, fb: &mut FrameBuffer, card: Card, text: &Labels) {
        let mid = card.last_row() / 2;
        self.put_centered(fb, card, mid.saturating_sub(4), text.title, HEADING);
        let mut row = mid.saturating_sub(2);
        for line in wrap_lines(text.subtitle, card.text_width()) {
            self.put_centered(fb, card, row, line, TEXT);
            row += 1;
        }
        for (i, keys) in text.keys.iter().enumerate() {
            self.put_centered(fb, card, mid + 1 + i as u16, keys, HINT);
        }
        self.put_centered(fb, card, card.last_row(), text.start_hint, HEADING);
    }

    fn draw_playing(&self, fb: &mut FrameBuffer, card: Card, text: &Labels, session: &GameSession<'_>) {
        let locale = session.locale();
        let scene = session.scene();
        let params = session.params();
        let x = card.text_x();
        let end = card.text_end();

        if let Some(y) = card.row(0) {
            let cx = fb.put_str_clipped(x, y, text.level, end, HEADING);
            let cx = fb.put_u32_clipped(cx + 1, y, session.scene_index() as u32 + 1, end, HEADING);
            let cx = fb.put_str_clipped(cx, y, "/", end, HEADING);
            let cx = fb.put_u32_clipped(cx, y, session.scene_count() as u32, end, HEADING);
            let cx = fb.put_str_clipped(cx, y, ": ", end, HEADING);
            fb.put_str_clipped(cx, y, scene.name.get(locale), end, HEADING);
        }

        let aperture = params.aperture.to_string();
        let shutter = params.shutter.to_string();
        self.put_field(fb, card, 2, text.aperture, &aperture);
        self.put_field(fb, card, 3, text.shutter, &shutter);
        if let Some(y) = card.row(4) {
            let cx = self.put_label(fb, card, y, text.iso);
            fb.put_u32_clipped(cx, y, params.iso.value(), end, TEXT);
        }

        self.put_field(fb, card, 6, text.brightness, scene.target_brightness.get(locale));
        self.put_field(fb, card, 7, text.depth, scene.target_depth.get(locale));

        if let Some(y) = card.row(9) {
            let (verdict, color) = match session.preview() {
                OutcomeImage::OverExposed => (text.preview_over, BRIGHT),
                OutcomeImage::UnderExposed => (text.preview_under, DARK),
                OutcomeImage::Balanced => (text.preview_balanced, GOOD),
            };
            let cx = self.put_label(fb, card, y, text.preview);
            fb.put_str_clipped(cx, y, verdict, end, CellStyle::fg(color).bold());
        }

        for (i, keys) in text.keys.iter().enumerate() {
            if let Some(y) = card.row(11 + i as u16) {
                fb.put_str_clipped(x, y, keys, end, HINT);
            }
        }

        if let Some(y) = card.row(card.last_row()) {
            let cx = fb.put_str_clipped(x, y, text.rounds, end, HINT);
            let cx = fb.put_u32_clipped(cx + 1, y, session.rounds_played(), end, HINT);
            let cx = fb.put_str_clipped(cx + 3, y, text.total, end, HINT);
            fb.put_u32_clipped(cx + 1, y, session.total_score(), end, HINT);
        }
    }

    fn draw_result(&self, fb: &mut FrameBuffer, card: Card, text: &Labels, session: &GameSession<'_>) {
        let Some(result) = session.last_result() else {
            return;
        };
        let x = card.text_x();
        let end = card.text_end();

        let score = format!("{}{}{}", text.score, result.score, text.score_suffix);
        self.put_centered(fb, card, 0, &score, HEADING);

        let color = match result.classification {
            Classification::Perfect => GOOD,
            Classification::SlightOver | Classification::SlightUnder => CLOSE,
            Classification::Over => BRIGHT,
            Classification::Under => DARK,
        };
        self.put_centered(fb, card, 2, &result.feedback.title, CellStyle::fg(color).bold());

        // Body fills the space above the three footer rows.
        let body_end = card.last_row().saturating_sub(4);
        let mut row = 4;
        for line in wrap_lines(&result.feedback.body, card.text_width()) {
            if row > body_end {
                break;
            }
            if let Some(y) = card.row(row) {
                fb.put_str_clipped(x, y, line, end, TEXT);
            }
            row += 1;
        }

        // Normalize -0.0 so an exact hit reads "+0.0".
        let stops = if result.feedback.stops_off == 0.0 {
            0.0
        } else {
            result.feedback.stops_off
        };
        let stops = format!("{stops:+.1} EV");
        self.put_field(fb, card, card.last_row().saturating_sub(3), text.stops_off, &stops);
        self.put_field(
            fb,
            card,
            card.last_row().saturating_sub(2),
            text.photo,
            &result.outcome_image_ref,
        );
        self.put_centered(fb, card, card.last_row(), text.next_hint, HEADING);
    }

    /// `label: ` in the label style; returns the column after it.
    fn put_label(&self, fb: &mut FrameBuffer, card: Card, y: u16, label: &str) -> u16 {
        let end = card.text_end();
        let cx = fb.put_str_clipped(card.text_x(), y, label, end, LABEL);
        fb.put_str_clipped(cx, y, ": ", end, LABEL)
    }

    fn put_field(&self, fb: &mut FrameBuffer, card: Card, row: u16, label: &str, value: &str) {
        if let Some(y) = card.row(row) {
            let cx = self.put_label(fb, card, y, label);
            fb.put_str_clipped(cx, y, value, card.text_end(), TEXT);
        }
    }

    fn put_centered(&self, fb: &mut FrameBuffer, card: Card, row: u16, s: &str, style: CellStyle) {
        if let Some(y) = card.row(row) {
            let text_w = str_width(s);
            let x = card.x + card.w.saturating_sub(text_w) / 2;
            fb.put_str_clipped(x.max(card.text_x()), y, s, card.text_end(), style);
        }
    }
}

/// Greedy word wrap by display width.
///
/// Breaks at the last space that fits; text without spaces (CJK) breaks at
/// any glyph.
pub fn wrap_lines(text: &str, width: u16) -> Vec<&str> {
    let mut lines = Vec::new();
    if width == 0 {
        return lines;
    }

    let mut rest = text.trim_start();
    while !rest.is_empty() {
        let mut used = 0u16;
        let mut end = rest.len();
        let mut last_space = None;
        for (i, ch) in rest.char_indices() {
            let w = char_width(ch);
            if used + w > width {
                if ch == ' ' {
                    last_space = Some(i);
                }
                end = i;
                break;
            }
            if ch == ' ' {
                last_space = Some(i);
            }
            used += w;
        }
        if end < rest.len() {
            if let Some(space) = last_space.filter(|&s| s > 0) {
                end = space;
            }
        }
        if end == 0 {
            // A single glyph wider than the line.
            end = rest.chars().next().map_or(rest.len(), char::len_utf8);
        }
        lines.push(rest[..end].trim_end());
        rest = rest[end..].trim_start();
    }
    lines
}

/// Hash of everything the view shows, for redraw gating.
pub fn view_fingerprint(session: &GameSession<'_>, viewport: Viewport) -> u64 {
    let mut hasher = DefaultHasher::new();
    session.phase().hash(&mut hasher);
    session.scene_index().hash(&mut hasher);
    session.params().hash(&mut hasher);
    session.locale().hash(&mut hasher);
    session.rounds_played().hash(&mut hasher);
    session.total_score().hash(&mut hasher);
    viewport.width.hash(&mut hasher);
    viewport.height.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_english_at_spaces() {
        let lines = wrap_lines("Your photo is just a touch too bright.", 16);
        assert_eq!(lines, vec!["Your photo is", "just a touch too", "bright."]);
    }

    #[test]
    fn wraps_cjk_by_display_width() {
        let lines = wrap_lines("你的照片稍微亮了一點點。", 8);
        assert_eq!(lines, vec!["你的照片", "稍微亮了", "一點點。"]);
        assert!(lines.iter().all(|l| str_width(l) <= 8));
    }

    #[test]
    fn wrap_handles_long_words_and_zero_width() {
        assert_eq!(wrap_lines("abcdefgh", 3), vec!["abc", "def", "gh"]);
        assert!(wrap_lines("anything", 0).is_empty());
        assert_eq!(wrap_lines("光", 1), vec!["光"]);
    }

    #[test]
    fn card_rows_are_clipped() {
        let card = Card {
            x: 0,
            y: 0,
            w: 10,
            h: 5,
        };
        assert_eq!(card.row(0), Some(1));
        assert_eq!(card.row(2), Some(3));
        assert_eq!(card.row(3), None);
        assert_eq!(card.last_row(), 2);
        assert_eq!(card.text_end(), 8);
    }

    /// Narrow glyphs allowed in zh-TW text besides ASCII.
    const NARROW_SYMBOLS: [char; 4] = ['←', '↑', '→', '↓'];

    #[test]
    fn zh_tw_labels_have_known_widths() {
        let t = &ZH_TW;
        let mut all = vec![
            t.title,
            t.subtitle,
            t.start_hint,
            t.level,
            t.aperture,
            t.shutter,
            t.iso,
            t.brightness,
            t.depth,
            t.preview,
            t.preview_over,
            t.preview_under,
            t.preview_balanced,
            t.rounds,
            t.total,
            t.score,
            t.score_suffix,
            t.stops_off,
            t.photo,
            t.next_hint,
        ];
        all.extend(t.keys);

        for s in all {
            for ch in s.chars() {
                let expected = if ch.is_ascii() || NARROW_SYMBOLS.contains(&ch) {
                    1
                } else {
                    2
                };
                assert_eq!(char_width(ch), expected, "{ch:?} (U+{:04X}) in {s:?}", ch as u32);
            }
        }
    }
}
