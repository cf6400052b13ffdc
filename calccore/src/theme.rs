//! Calculator theme
//!
//! Black keys on a black frame, a gray display, white digits and a single
//! blue equals key. Everything is flat: no rounding, no outlines, no shadows.

use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

/// The calculator palette.
pub struct CalcColors;

impl CalcColors {
    pub const OUTSIDE: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);
    pub const BLACK: Color32 = Color32::from_rgb(0x00, 0x00, 0x00);
    pub const BLUE: Color32 = Color32::from_rgb(0x33, 0x65, 0xff);
    pub const GRAY: Color32 = Color32::from_rgb(0x3b, 0x3b, 0x3b);
    pub const DIGIT: Color32 = Color32::from_rgb(0xff, 0xff, 0xff);
}

/// Style configuration, built once at start-up and handed to the app.
#[derive(Debug, Clone, PartialEq)]
pub struct CalcTheme {
    pub font_size_digits: f32,
    pub font_size_default: f32,
    pub font_size_small: f32,
    pub font_size_large: f32,
    /// Fixed inner window size in logical points.
    pub window_size: [f32; 2],
    /// Height of the gray display frame above the key grid.
    pub display_height: f32,
    /// Horizontal padding of the display labels.
    pub label_padding: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self {
            font_size_digits: 19.0,
            font_size_default: 20.0,
            font_size_small: 16.0,
            font_size_large: 40.0,
            window_size: [325.0, 475.0],
            display_height: 221.0,
            label_padding: 24.0,
        }
    }
}

impl CalcTheme {
    /// Font of the digit keys.
    pub fn digits_font(&self) -> FontId {
        FontId::new(self.font_size_digits, FontFamily::Proportional)
    }

    /// Font of operator and special keys.
    pub fn default_font(&self) -> FontId {
        FontId::new(self.font_size_default, FontFamily::Proportional)
    }

    /// Font of the running-total label.
    pub fn small_font(&self) -> FontId {
        FontId::new(self.font_size_small, FontFamily::Proportional)
    }

    /// Font of the current-term label.
    pub fn large_font(&self) -> FontId {
        FontId::new(self.font_size_large, FontFamily::Proportional)
    }

    /// Apply the calculator theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, self.small_font()),
            (TextStyle::Body, self.default_font()),
            (TextStyle::Button, self.default_font()),
            (TextStyle::Heading, self.large_font()),
            (TextStyle::Monospace, FontId::new(self.font_size_small, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::dark();

        visuals.window_fill = CalcColors::OUTSIDE;
        visuals.panel_fill = CalcColors::OUTSIDE;
        visuals.extreme_bg_color = CalcColors::OUTSIDE;
        visuals.override_text_color = Some(CalcColors::DIGIT);

        visuals.window_rounding = Rounding::ZERO;
        visuals.menu_rounding = Rounding::ZERO;
        visuals.window_stroke = Stroke::NONE;
        visuals.window_shadow = egui::epaint::Shadow::NONE;
        visuals.popup_shadow = egui::epaint::Shadow::NONE;

        let flat = |ws: &mut egui::style::WidgetVisuals, fill: Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.bg_stroke = Stroke::NONE;
            ws.fg_stroke = Stroke::new(1.0, CalcColors::DIGIT);
            ws.rounding = Rounding::ZERO;
            ws.expansion = 0.0;
        };
        flat(&mut visuals.widgets.noninteractive, CalcColors::BLACK);
        flat(&mut visuals.widgets.inactive, CalcColors::BLACK);
        flat(&mut visuals.widgets.hovered, CalcColors::BLACK);
        // pressed keys flash gray
        flat(&mut visuals.widgets.active, CalcColors::GRAY);
        flat(&mut visuals.widgets.open, CalcColors::BLACK);

        style.visuals = visuals;

        style.spacing.window_margin = egui::Margin::ZERO;
        style.spacing.item_spacing = egui::Vec2::ZERO;
        style.spacing.button_padding = egui::Vec2::ZERO;

        ctx.set_style(style);
    }
}

/// Strip key events that would break the fixed layout:
/// - Tab: focus cycling between keys
/// - Cmd/Ctrl with `+`, `-` or `=`: zoom scaling
///
/// Call this at the start of the app's `update()`, before reading keys.
pub fn consume_special_keys(ctx: &egui::Context) {
    ctx.input_mut(|i| {
        i.events.retain(|event| match event {
            egui::Event::Key { key: egui::Key::Tab, .. } => false,
            egui::Event::Key { key, modifiers, .. } => !(modifiers.command
                && matches!(key, egui::Key::Plus | egui::Key::Minus | egui::Key::Equals)),
            _ => true,
        });
    });
}
