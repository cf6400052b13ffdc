//! Calculator - a fixed-size desktop calculator
//!
//! Digits, the four basic operators, square, square root, clear and equals.

mod app;
mod eval;
mod expression;
mod keys;
mod layout;

use app::CalculatorApp;
use calccore::CalcTheme;
use eframe::NativeOptions;
use tracing::info;

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_target(false)
        .init();

    let theme = CalcTheme::default();
    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(theme.window_size)
            .with_resizable(false)
            .with_title("Calculator"),
        ..Default::default()
    };

    info!(size = ?theme.window_size, "starting calculator");
    eframe::run_native(
        "Calculator",
        options,
        Box::new(move |cc| {
            theme.apply(&cc.egui_ctx);
            Box::new(CalculatorApp::new(cc, theme))
        }),
    )
}
