//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use tracing::info;

use super::board_view::{BoardOptions, BoardView};
use super::theme::*;
use crate::config::AppConfig;
use crate::{GameState, MoveOutcome, Player};

/// Moves listed in the history card
const RECENT_MOVES: usize = 8;

/// Hotseat Gomoku application.
///
/// Owns the one `GameState` for the session and forwards clicks, buttons
/// and keys to it. Rules live in the core; this only draws.
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    options: BoardOptions,
    message: Option<String>,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::with_config(config)
    }

    pub fn with_config(config: &AppConfig) -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
            options: BoardOptions {
                show_coordinates: config.show_coordinates,
                show_last_move: config.show_last_move,
            },
            message: None,
        }
    }

    /// Click handler: pre-filter, then apply
    fn place_stone(&mut self, row: usize, col: usize) {
        if let Err(err) = self.state.check_move(row, col) {
            self.message = Some(err.to_string());
            return;
        }

        match self.state.apply_move(row, col) {
            Some(MoveOutcome::Won { winner, line }) => {
                info!(%winner, row, col, run = line.len(), "game won");
                self.message = None;
            }
            Some(MoveOutcome::Continue { next }) => {
                info!(row, col, %next, "stone placed");
                self.message = None;
            }
            None => {}
        }
    }

    fn undo(&mut self) {
        match self.state.try_undo() {
            Ok(mv) => {
                info!(pos = %mv.pos, player = %mv.player, "move undone");
                self.message = None;
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    fn restart(&mut self) {
        self.state.reset();
        self.message = None;
        info!("game reset");
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.restart();
                        ui.close_menu();
                    }
                    if ui.button("Undo (U)").clicked() {
                        self.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.options.show_coordinates, "Coordinates");
                    ui.checkbox(&mut self.options.show_last_move, "Last move marker");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("Hotseat - 15x15");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);
                ui.add_space(10.0);

                self.render_history_card(ui);

                if let Some(winner) = self.state.winner() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, winner);
                }

                if let Some(msg) = &self.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Current player, or the winner once the game is over
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let player = self.state.current_player();
            let (fill, outline) = match player {
                Player::Black => (BLACK_STONE, BLACK_STONE_HIGHLIGHT),
                Player::White => (WHITE_STONE, WHITE_STONE_OUTLINE),
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(40.0, 40.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 16.0, fill);
                ui.painter().circle_stroke(rect.center(), 16.0, egui::Stroke::new(1.0, outline));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(2.0);
                    ui.label(RichText::new(player.name().to_uppercase()).size(18.0).strong().color(TEXT_PRIMARY));

                    let (status, color) = if self.state.is_game_over() {
                        (format!("{player} wins!"), WIN_HIGHLIGHT)
                    } else {
                        ("To move".to_string(), STATUS_ACTIVE)
                    };
                    ui.label(RichText::new(status).size(12.0).color(color));
                });
            });
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                let btn_frame = Frame::new()
                    .fill(BUTTON_BG)
                    .corner_radius(CornerRadius::same(6))
                    .inner_margin(8.0);

                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("Undo").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.undo();
                    }
                });

                ui.add_space(4.0);

                btn_frame.show(ui, |ui| {
                    let label = egui::Label::new(RichText::new("Restart").size(12.0).color(TEXT_PRIMARY));
                    if ui.add(label.sense(egui::Sense::click())).clicked() {
                        self.restart();
                    }
                });
            });

            ui.add_space(8.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_count()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Most recent moves, newest first
    fn render_history_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("MOVES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let history = self.state.history();
            if history.is_empty() {
                ui.label(RichText::new("No moves yet").size(11.0).color(TEXT_SECONDARY));
                return;
            }

            for (idx, mv) in history.iter().enumerate().rev().take(RECENT_MOVES) {
                ui.label(
                    RichText::new(format!("{:>3}. {} {}", idx + 1, mv.player, mv.pos))
                        .monospace()
                        .size(11.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_game_over_card(&mut self, ui: &mut egui::Ui, winner: Player) {
        Frame::new()
            .fill(GAME_OVER_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(TEXT_SECONDARY));
                    ui.add_space(6.0);
                    ui.label(
                        RichText::new(format!("{} WINS!", winner.name().to_uppercase()))
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );
                    ui.add_space(10.0);

                    if ui.button("New Game").clicked() {
                        self.restart();
                    }
                });
            });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let clicked = self.board_view.show(ui, &self.state, self.options);

            if let Some((row, col)) = clicked {
                self.place_stone(row, col);
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (undo, restart) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N) || i.key_pressed(egui::Key::R),
            )
        });

        if undo {
            self.undo();
        }
        if restart {
            self.restart();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
    }
}
