//! Theme constants for the Gomoku GUI

use egui::Color32;

// Board colors - warm wood tones
pub const BOARD_BG: Color32 = Color32::from_rgb(220, 179, 92);
pub const GRID_LINE: Color32 = Color32::from_rgb(51, 51, 51);
pub const STAR_POINT: Color32 = Color32::from_rgb(51, 51, 51);

// Stones
pub const BLACK_STONE: Color32 = Color32::from_rgb(10, 10, 10);
pub const BLACK_STONE_HIGHLIGHT: Color32 = Color32::from_rgb(102, 102, 102);
pub const WHITE_STONE: Color32 = Color32::from_rgb(255, 255, 255);
pub const WHITE_STONE_SHADOW: Color32 = Color32::from_rgb(204, 204, 204);
pub const WHITE_STONE_OUTLINE: Color32 = Color32::from_rgb(51, 51, 51);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(230, 60, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Functions for colors that can't be const
pub fn hover_stone(stone_is_black: bool) -> Color32 {
    if stone_is_black {
        Color32::from_rgba_unmultiplied(20, 20, 20, 80)
    } else {
        Color32::from_rgba_unmultiplied(240, 240, 240, 80)
    }
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 100)
}

pub fn stone_shadow() -> Color32 {
    Color32::from_rgba_unmultiplied(0, 0, 0, 50)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BUTTON_BG: Color32 = Color32::from_rgb(50, 53, 58);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);
pub const STATUS_ACTIVE: Color32 = Color32::from_rgb(80, 200, 120);

// Sizes
pub const BOARD_MARGIN: f32 = 32.0;
pub const STONE_RADIUS_RATIO: f32 = 0.4;
pub const STAR_POINT_RADIUS: f32 = 3.0;
pub const GRID_LINE_WIDTH: f32 = 1.0;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;

// Centre point plus the four corner star points (0-indexed)
pub const STAR_POINTS: [(u8, u8); 5] = [(7, 7), (3, 3), (3, 11), (11, 3), (11, 11)];
