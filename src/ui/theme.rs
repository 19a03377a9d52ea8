//! Theme constants for the Othello GUI

use egui::Color32;

// Board colors - classic felt green
pub const BOARD_BG: Color32 = Color32::from_rgb(34, 120, 60);
pub const BOARD_BORDER: Color32 = Color32::from_rgb(20, 70, 35);
pub const GRID_LINE: Color32 = Color32::from_rgb(15, 55, 28);
pub const LABEL_TEXT: Color32 = Color32::from_rgb(200, 225, 205);

// Piece colors
pub const BLACK_PIECE: Color32 = Color32::from_rgb(25, 25, 30);
pub const BLACK_PIECE_HIGHLIGHT: Color32 = Color32::from_rgb(70, 70, 80);
pub const WHITE_PIECE: Color32 = Color32::from_rgb(250, 250, 252);
pub const WHITE_PIECE_SHADOW: Color32 = Color32::from_rgb(190, 190, 195);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const FLIP_RING: Color32 = Color32::from_rgb(255, 200, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

pub fn legal_dot() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 70)
}

pub fn hover_preview(color: crate::Color) -> Color32 {
    match color {
        crate::Color::Black => Color32::from_rgba_unmultiplied(20, 20, 20, 110),
        crate::Color::White => Color32::from_rgba_unmultiplied(240, 240, 240, 110),
    }
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Timer colors
pub const TIMER_NORMAL: Color32 = Color32::from_rgb(80, 200, 120);
pub const TIMER_WARNING: Color32 = Color32::from_rgb(255, 180, 50);
pub const TIMER_CRITICAL: Color32 = Color32::from_rgb(255, 70, 70);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const PIECE_RADIUS_RATIO: f32 = 0.42;
pub const GRID_LINE_WIDTH: f32 = 1.5;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
pub const LEGAL_DOT_RATIO: f32 = 0.12;
