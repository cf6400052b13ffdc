//! Calculator application

use calccore::repaint::RepaintController;
use calccore::theme::{consume_special_keys, CalcColors, CalcTheme};
use egui::{pos2, Align2, Context, Rect, RichText, Rounding, Stroke};
use tracing::debug;

use crate::expression::{Action, Expression};
use crate::keys::actions_from_events;
use crate::layout::{cell_rect, BUTTONS};

pub struct CalculatorApp {
    expression: Expression,
    theme: CalcTheme,
    repaint: RepaintController,
}

impl CalculatorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, theme: CalcTheme) -> Self {
        Self::with_theme(theme)
    }

    fn with_theme(theme: CalcTheme) -> Self {
        Self {
            expression: Expression::new(),
            theme,
            repaint: RepaintController::new(),
        }
    }

    fn apply(&mut self, action: Action) {
        self.expression.apply(action);
        debug!(
            total = self.expression.total(),
            current = self.expression.current(),
            "expression updated"
        );
        // the display was drawn before this change
        self.repaint.mark_needs_repaint();
    }

    fn handle_keys(&mut self, ctx: &Context) {
        consume_special_keys(ctx);
        let actions = ctx.input(|i| actions_from_events(&i.events));
        for action in actions {
            self.apply(action);
        }
    }

    /// Gray frame with the total label on the upper half and the current
    /// label on the lower half, both right-aligned.
    fn render_display(&self, ui: &egui::Ui, rect: Rect) {
        let painter = ui.painter_at(rect);
        painter.rect_filled(rect, Rounding::ZERO, CalcColors::GRAY);

        let right = rect.right() - self.theme.label_padding;
        let upper_y = rect.top() + rect.height() * 0.25;
        let lower_y = rect.top() + rect.height() * 0.75;
        let display = self.expression.display();

        painter.text(
            pos2(right, upper_y),
            Align2::RIGHT_CENTER,
            &display.total,
            self.theme.small_font(),
            CalcColors::DIGIT,
        );
        painter.text(
            pos2(right, lower_y),
            Align2::RIGHT_CENTER,
            &display.current,
            self.theme.large_font(),
            CalcColors::DIGIT,
        );
    }

    /// Draw the key grid and return the actions of clicked keys.
    fn render_keys(&self, ui: &mut egui::Ui, area: Rect) -> Vec<Action> {
        let mut clicked = Vec::new();
        for spec in BUTTONS.iter() {
            let label = RichText::new(spec.label)
                .font(spec.style.font(&self.theme))
                .color(CalcColors::DIGIT);
            let button = egui::Button::new(label)
                .fill(spec.style.fill())
                .stroke(Stroke::NONE)
                .rounding(Rounding::ZERO);
            if ui.put(cell_rect(area, spec), button).clicked() {
                clicked.push(spec.action);
            }
        }
        clicked
    }

    fn ui(&mut self, ctx: &Context) {
        self.handle_keys(ctx);

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(CalcColors::OUTSIDE))
            .show(ctx, |ui| {
                let full = ui.max_rect();
                let split = (full.top() + self.theme.display_height).min(full.bottom());
                let display_rect = Rect::from_min_max(full.min, pos2(full.right(), split));
                let keys_rect = Rect::from_min_max(pos2(full.left(), split), full.max);

                self.render_display(ui, display_rect);
                for action in self.render_keys(ui, keys_rect) {
                    self.apply(action);
                }
            });
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.repaint.begin_frame(ctx);
        self.ui(ctx);
        self.repaint.end_frame(ctx);
    }
}
