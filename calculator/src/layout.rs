//! Key grid
//!
//! Five rows by four columns sharing the area below the display evenly.
//! Columns are numbered from 1, rows from 0.

use calccore::theme::{CalcColors, CalcTheme};
use egui::{Color32, FontId, Rect};

use crate::expression::{Action, Operator};

pub const ROWS: usize = 5;
pub const COLUMNS: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStyle {
    Digit,
    Function,
    Equals,
}

impl KeyStyle {
    pub fn fill(self) -> Color32 {
        match self {
            KeyStyle::Digit => CalcColors::BLACK,
            KeyStyle::Function => CalcColors::OUTSIDE,
            KeyStyle::Equals => CalcColors::BLUE,
        }
    }

    pub fn font(self, theme: &CalcTheme) -> FontId {
        match self {
            KeyStyle::Digit => theme.digits_font(),
            KeyStyle::Function | KeyStyle::Equals => theme.default_font(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonSpec {
    pub label: &'static str,
    pub action: Action,
    pub row: usize,
    pub col: usize,
    pub col_span: usize,
    pub style: KeyStyle,
}

const fn key(label: &'static str, action: Action, row: usize, col: usize, style: KeyStyle) -> ButtonSpec {
    ButtonSpec { label, action, row, col, col_span: 1, style }
}

const fn digit(label: &'static str, ch: char, row: usize, col: usize) -> ButtonSpec {
    key(label, Action::Digit(ch), row, col, KeyStyle::Digit)
}

const fn operator(label: &'static str, op: Operator, row: usize) -> ButtonSpec {
    key(label, Action::Operator(op), row, COLUMNS, KeyStyle::Function)
}

pub static BUTTONS: [ButtonSpec; 19] = [
    key("C", Action::Clear, 0, 1, KeyStyle::Function),
    key("x\u{00B2}", Action::Square, 0, 2, KeyStyle::Function),
    key("\u{221A}x", Action::Sqrt, 0, 3, KeyStyle::Function),
    operator("\u{00F7}", Operator::Divide, 0),
    digit("7", '7', 1, 1),
    digit("8", '8', 1, 2),
    digit("9", '9', 1, 3),
    operator("\u{00D7}", Operator::Multiply, 1),
    digit("4", '4', 2, 1),
    digit("5", '5', 2, 2),
    digit("6", '6', 2, 3),
    operator("-", Operator::Subtract, 2),
    digit("1", '1', 3, 1),
    digit("2", '2', 3, 2),
    digit("3", '3', 3, 3),
    operator("+", Operator::Add, 3),
    digit(".", '.', 4, 1),
    digit("0", '0', 4, 2),
    ButtonSpec {
        label: "=",
        action: Action::Evaluate,
        row: 4,
        col: 3,
        col_span: 2,
        style: KeyStyle::Equals,
    },
];

/// Screen rectangle of a key inside the grid `area`.
pub fn cell_rect(area: Rect, spec: &ButtonSpec) -> Rect {
    let cell_w = area.width() / COLUMNS as f32;
    let cell_h = area.height() / ROWS as f32;
    let min = area.min + egui::vec2((spec.col - 1) as f32 * cell_w, spec.row as f32 * cell_h);
    Rect::from_min_size(min, egui::vec2(cell_w * spec.col_span as f32, cell_h))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn area() -> Rect {
        Rect::from_min_size(egui::pos2(0.0, 221.0), egui::vec2(324.0, 250.0))
    }

    fn find(label: &str) -> &'static ButtonSpec {
        BUTTONS.iter().find(|b| b.label == label).unwrap()
    }

    #[test]
    fn test_every_cell_covered_once() {
        let mut covered = [[0u8; COLUMNS]; ROWS];
        for spec in &BUTTONS {
            for col in spec.col..spec.col + spec.col_span {
                covered[spec.row][col - 1] += 1;
            }
        }
        assert!(covered.iter().flatten().all(|&n| n == 1));
    }

    #[test]
    fn test_every_digit_has_a_key() {
        for ch in "0123456789.".chars() {
            assert!(BUTTONS.iter().any(|b| b.action == Action::Digit(ch)), "missing {ch}");
        }
    }

    #[test]
    fn test_operators_fill_last_column() {
        for (row, op) in Operator::ALL.into_iter().enumerate() {
            let spec = BUTTONS.iter().find(|b| b.action == Action::Operator(op)).unwrap();
            assert_eq!((spec.row, spec.col), (row, COLUMNS));
            assert!(spec.label.starts_with(op.glyph()));
        }
    }

    #[test]
    fn test_cell_rect_geometry() {
        let seven = cell_rect(area(), find("7"));
        assert_eq!(seven.min, egui::pos2(0.0, 271.0));
        assert_eq!(seven.size(), egui::vec2(81.0, 50.0));

        let clear = cell_rect(area(), find("C"));
        assert_eq!(clear.min, area().min);
    }

    #[test]
    fn test_equals_spans_two_columns() {
        let equals = cell_rect(area(), find("="));
        assert_eq!(equals.min, egui::pos2(162.0, 421.0));
        assert_eq!(equals.max, area().max);
        assert_eq!(find("=").style.fill(), CalcColors::BLUE);
    }
}
