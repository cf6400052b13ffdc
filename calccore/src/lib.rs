//! calccore — style, repaint and text helpers shared by the calculator

pub mod repaint;
pub mod text;
pub mod theme;

pub use repaint::RepaintController;
pub use theme::CalcTheme;
