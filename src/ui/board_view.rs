//! Board rendering for the Othello GUI

use crate::{Board, Color, Pos, BOARD_SIZE};
use egui::{Align2, CornerRadius, FontId, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Square label in `a1` form, columns left to right and rows top to bottom
pub fn square_name(pos: Pos) -> String {
    format!("{}{}", (b'a' + pos.col) as char, pos.row + 1)
}

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 60.0,
            board_rect: Rect::NOTHING,
        }
    }
}

/// What the board should mark besides the pieces themselves
pub struct Overlay<'a> {
    pub current_turn: Color,
    /// Legal moves to dot; empty when the human cannot move
    pub legal: &'a [Pos],
    pub last_move: Option<Pos>,
    pub last_flips: &'a [Pos],
    pub suggested_move: Option<Pos>,
}

impl BoardView {
    /// Render the board and return the clicked legal square if any
    pub fn show(&mut self, ui: &mut egui::Ui, board: &Board, overlay: &Overlay<'_>) -> Option<Pos> {
        let available_size = ui.available_size();

        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / BOARD_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BORDER);
        painter.rect_filled(self.play_area(), CornerRadius::ZERO, BOARD_BG);

        self.draw_grid(&painter);
        self.draw_coordinates(&painter);
        self.draw_pieces(&painter, board);

        for &pos in overlay.last_flips {
            self.draw_flip_ring(&painter, pos);
        }

        if let Some(pos) = overlay.last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        for &pos in overlay.legal {
            self.draw_legal_dot(&painter, pos);
        }

        if let Some(pos) = overlay.suggested_move {
            self.draw_suggestion(&painter, pos, overlay.current_turn);
        }

        // Only legal squares react to the pointer
        let hovered = response
            .hover_pos()
            .and_then(|p| self.screen_to_board(p))
            .filter(|pos| overlay.legal.contains(pos))?;

        self.draw_hover_preview(&painter, hovered, overlay.current_turn);
        response.clicked().then_some(hovered)
    }

    fn play_area(&self) -> Rect {
        Rect::from_min_size(
            self.board_rect.min + Vec2::splat(BOARD_MARGIN),
            Vec2::splat(self.cell_size * BOARD_SIZE as f32),
        )
    }

    /// Draw the 9 + 9 lines bounding the 8x8 squares
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let area = self.play_area();

        for i in 0..=BOARD_SIZE {
            let offset = i as f32 * self.cell_size;

            let x = area.min.x + offset;
            painter.line_segment([Pos2::new(x, area.min.y), Pos2::new(x, area.max.y)], stroke);

            let y = area.min.y + offset;
            painter.line_segment([Pos2::new(area.min.x, y), Pos2::new(area.max.x, y)], stroke);
        }
    }

    /// Draw coordinate labels (a-h across, 1-8 down)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = FontId::proportional(13.0);
        let half = BOARD_MARGIN * 0.5;

        for i in 0..BOARD_SIZE {
            let center = self.board_to_screen(Pos::new(i as u8, i as u8));
            let letter = ((b'a' + i as u8) as char).to_string();
            let number = (i + 1).to_string();

            let top = Pos2::new(center.x, self.board_rect.min.y + half);
            painter.text(top, Align2::CENTER_CENTER, &letter, font.clone(), LABEL_TEXT);
            let bottom = Pos2::new(center.x, self.board_rect.max.y - half);
            painter.text(bottom, Align2::CENTER_CENTER, &letter, font.clone(), LABEL_TEXT);

            let left = Pos2::new(self.board_rect.min.x + half, center.y);
            painter.text(left, Align2::CENTER_CENTER, &number, font.clone(), LABEL_TEXT);
            let right = Pos2::new(self.board_rect.max.x - half, center.y);
            painter.text(right, Align2::CENTER_CENTER, &number, font.clone(), LABEL_TEXT);
        }
    }

    fn draw_pieces(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            if let Some(color) = board.get(pos).color() {
                self.draw_piece(painter, pos, color);
            }
        }
    }

    /// Draw a single piece with a drop shadow
    fn draw_piece(&self, painter: &Painter, pos: Pos, color: Color) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        painter.circle_filled(
            center + Vec2::new(2.0, 2.0),
            radius,
            egui::Color32::from_rgba_unmultiplied(0, 0, 0, 60),
        );

        match color {
            Color::Black => {
                painter.circle_filled(center, radius, BLACK_PIECE);
                painter.circle_filled(
                    center + Vec2::splat(-radius * 0.3),
                    radius * 0.2,
                    BLACK_PIECE_HIGHLIGHT,
                );
            }
            Color::White => {
                painter.circle_filled(center, radius, WHITE_PIECE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_PIECE_SHADOW),
                );
            }
        }
    }

    fn draw_flip_ring(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO + 2.0;
        painter.circle_stroke(center, radius, Stroke::new(2.0, FLIP_RING));
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_legal_dot(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, self.cell_size * LEGAL_DOT_RATIO, legal_dot());
    }

    /// Draw move suggestion
    fn draw_suggestion(&self, painter: &Painter, pos: Pos, turn: Color) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;

        painter.circle_filled(center, radius, hover_preview(turn));
        painter.text(
            center,
            Align2::CENTER_CENTER,
            "?",
            FontId::proportional(18.0),
            match turn {
                Color::Black => WHITE_PIECE,
                Color::White => BLACK_PIECE,
            },
        );
    }

    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Color) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * PIECE_RADIUS_RATIO;
        painter.circle_filled(center, radius, hover_preview(turn));
    }

    /// Convert screen coordinates to board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.play_area().min;
        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        let range = 0..BOARD_SIZE as i32;
        if range.contains(&col) && range.contains(&row) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to the screen center of its square
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let area = self.play_area();
        let x = area.min.x + (pos.col as f32 + 0.5) * self.cell_size;
        let y = area.min.y + (pos.row as f32 + 0.5) * self.cell_size;
        Pos2::new(x, y)
    }
}
