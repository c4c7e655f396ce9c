//! Board rendering and pointer mapping for the Gomoku GUI

use crate::{GameState, Player, Pos, Stone, BOARD_SIZE};
use egui::{CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// What the board view should draw besides the stones
#[derive(Debug, Clone, Copy)]
pub struct BoardOptions {
    pub show_coordinates: bool,
    pub show_last_move: bool,
}

/// Board view handles rendering and input for the game board.
///
/// Layout is recomputed every frame from the space egui gives it, so a
/// window resize never touches the game itself.
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 30.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked intersection, if any
    pub fn show(&mut self, ui: &mut egui::Ui, state: &GameState, options: BoardOptions) -> Option<(usize, usize)> {
        let available_size = ui.available_size();

        // Calculate board size to fit available space
        let board_size = (available_size.x.min(available_size.y) - 20.0).max(2.0 * BOARD_MARGIN + 10.0);
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / (BOARD_SIZE as f32 - 1.0);

        let (response, painter) = ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);

        if options.show_coordinates {
            self.draw_coordinates(&painter);
        }

        self.draw_stones(&painter, state);

        if options.show_last_move {
            if let Some(mv) = state.last_move() {
                self.draw_last_move_marker(&painter, mv.pos);
            }
        }

        if let Some(line) = state.winning_line() {
            self.draw_winning_line(&painter, line);
        }

        if state.is_game_over() {
            return None;
        }

        let board_pos = response.hover_pos().and_then(|p| self.screen_to_board(p))?;
        let is_valid = state
            .check_move(board_pos.row as usize, board_pos.col as usize)
            .is_ok();
        self.draw_hover_preview(&painter, board_pos, state.current_player(), is_valid);

        if response.clicked() {
            Some((board_pos.row as usize, board_pos.col as usize))
        } else {
            None
        }
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let span = (BOARD_SIZE as f32 - 1.0) * self.cell_size;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN);
            let end = self.board_rect.min + Vec2::new(offset, BOARD_MARGIN + span);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(BOARD_MARGIN, offset);
            let end = self.board_rect.min + Vec2::new(BOARD_MARGIN + span, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw the centre point and the four star points
    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw coordinate labels (A-O, 15-1)
    fn draw_coordinates(&self, painter: &Painter) {
        let font = egui::FontId::proportional(11.0);
        let edge = BOARD_MARGIN * 0.45;

        for i in 0..BOARD_SIZE {
            let offset = BOARD_MARGIN + i as f32 * self.cell_size;

            let letter = (b'A' + i as u8) as char;
            let x = self.board_rect.min.x + offset;
            for y in [self.board_rect.min.y + edge, self.board_rect.max.y - edge] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, letter, font.clone(), GRID_LINE);
            }

            let num = format!("{}", BOARD_SIZE - i);
            let y = self.board_rect.min.y + offset;
            for x in [self.board_rect.min.x + edge, self.board_rect.max.x - edge] {
                painter.text(Pos2::new(x, y), egui::Align2::CENTER_CENTER, &num, font.clone(), GRID_LINE);
            }
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, state: &GameState) {
        for (pos, stone) in state.board().stones() {
            self.draw_stone(painter, pos, stone);
        }
    }

    /// Draw a single stone with a shadow and shading
    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        painter.circle_filled(center + Vec2::new(1.5, 1.5), radius, stone_shadow());

        match stone {
            Stone::Black => {
                painter.circle_filled(center, radius, BLACK_STONE);
                let highlight_offset = Vec2::new(-radius * 0.33, -radius * 0.33);
                painter.circle_filled(center + highlight_offset, radius * 0.25, BLACK_STONE_HIGHLIGHT);
            }
            Stone::White => {
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(center, radius * 0.85, Stroke::new(radius * 0.1, WHITE_STONE_SHADOW));
                painter.circle_stroke(center, radius, Stroke::new(1.0, WHITE_STONE_OUTLINE));
            }
            Stone::Empty => {}
        }
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw winning line highlight
    fn draw_winning_line(&self, painter: &Painter, line: &[Pos]) {
        let stroke = Stroke::new(3.0, WIN_HIGHLIGHT);

        if let (Some(first), Some(last)) = (line.first(), line.last()) {
            painter.line_segment([self.board_to_screen(*first), self.board_to_screen(*last)], stroke);
        }

        let radius = self.cell_size * STONE_RADIUS_RATIO + 2.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    /// Draw hover preview
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Player, is_valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = self.cell_size * STONE_RADIUS_RATIO;

        let color = if is_valid {
            hover_stone(turn == Player::Black)
        } else {
            hover_invalid()
        };

        painter.circle_filled(center, radius, color);
    }

    /// Convert screen coordinates to the nearest intersection
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min;
        let col = ((relative.x - BOARD_MARGIN) / self.cell_size).round() as i32;
        let row = ((relative.y - BOARD_MARGIN) / self.cell_size).round() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Convert board position to screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let x = self.board_rect.min.x + BOARD_MARGIN + pos.col as f32 * self.cell_size;
        let y = self.board_rect.min.y + BOARD_MARGIN + pos.row as f32 * self.cell_size;
        Pos2::new(x, y)
    }
}
