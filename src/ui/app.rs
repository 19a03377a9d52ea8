//! Main application for the Othello GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use super::board_view::{square_name, BoardView, Overlay};
use super::game_state::{color_name, GameMode, GameState};
use super::theme::*;
use crate::rules::Outcome;
use crate::{Color, Difficulty, EngineConfig};

/// Main Othello application
pub struct OthelloApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for OthelloApp {
    fn default() -> Self {
        Self::with_config(&EngineConfig::default())
    }
}

impl OthelloApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &EngineConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: &EngineConfig) -> Self {
        Self {
            state: GameState::with_config(GameMode::default(), config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    /// Start over in `mode`, keeping the engine settings
    fn new_game(&mut self, mode: GameMode) {
        self.state.mode = mode;
        self.state.reset();
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (play Black)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Color::Black });
                        ui.close_menu();
                    }
                    if ui.button("New Game (play White)").clicked() {
                        self.new_game(GameMode::PvE { human_color: Color::White });
                        ui.close_menu();
                    }
                    if ui.button("New Game (two players)").clicked() {
                        self.new_game(GameMode::PvP);
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Undo").clicked() {
                        self.state.undo();
                        ui.close_menu();
                    }
                });

                ui.menu_button("AI", |ui| {
                    for difficulty in Difficulty::ALL {
                        let label = match difficulty {
                            Difficulty::Easy => "Easy (depth 3)",
                            Difficulty::Medium => "Medium (depth 4)",
                            Difficulty::Hard => "Hard (to the end)",
                        };
                        ui.radio_value(&mut self.state.difficulty, difficulty, label);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mode_text = match self.state.mode {
                        GameMode::PvE { human_color } => format!(
                            "vs AI ({}) - You: {}",
                            self.state.difficulty,
                            color_name(human_color)
                        ),
                        GameMode::PvP => "Two players".to_string(),
                    };
                    ui.label(mode_text);
                });
            });
        });
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(240.0)
            .max_width(280.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_timer_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    if self.render_game_over_card(ui, &result) {
                        self.state.reset();
                    }
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Clickable label styled as a button
    fn action_button(ui: &mut egui::Ui, text: &str) -> bool {
        Frame::new()
            .fill(egui::Color32::from_rgb(50, 53, 58))
            .corner_radius(CornerRadius::same(6))
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.add(
                    egui::Label::new(RichText::new(text).size(12.0).color(TEXT_PRIMARY))
                        .sense(egui::Sense::click()),
                )
                .clicked()
            })
            .inner
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("●○").size(20.0).color(egui::Color32::from_rgb(180, 180, 185)));
            ui.add_space(4.0);
            ui.label(RichText::new("OTHELLO").size(22.0).strong().color(TEXT_PRIMARY));
        });
    }

    /// Disc icon on a round badge
    fn piece_badge(ui: &mut egui::Ui, color: Color, size: f32) {
        let (rect, _) = ui.allocate_exact_size(Vec2::splat(size), egui::Sense::hover());
        let (fill, rim) = match color {
            Color::Black => (BLACK_PIECE, BLACK_PIECE_HIGHLIGHT),
            Color::White => (WHITE_PIECE, WHITE_PIECE_SHADOW),
        };
        ui.painter().circle_filled(rect.center(), size * 0.45, fill);
        ui.painter().circle_stroke(rect.center(), size * 0.45, egui::Stroke::new(1.5, rim));
    }

    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;

            ui.horizontal(|ui| {
                Self::piece_badge(ui, turn, 48.0);
                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(color_name(turn).to_uppercase())
                            .size(18.0)
                            .strong()
                            .color(TEXT_PRIMARY),
                    );

                    let status = if self.state.game_over.is_some() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_thinking() {
                        ("AI thinking...", TIMER_WARNING)
                    } else if self.state.is_human_turn() {
                        ("Your turn", TIMER_NORMAL)
                    } else {
                        ("Waiting", TEXT_SECONDARY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Piece counts for both sides
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            for color in [Color::Black, Color::White] {
                let count = self.state.board.count(color);
                let leading = count > self.state.board.count(color.opponent());

                ui.horizontal(|ui| {
                    Self::piece_badge(ui, color, 22.0);
                    ui.label(RichText::new(color_name(color)).size(13.0).color(TEXT_SECONDARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let text = RichText::new(count.to_string()).size(18.0).strong();
                        ui.label(if leading {
                            text.color(WIN_HIGHLIGHT)
                        } else {
                            text.color(TEXT_PRIMARY)
                        });
                    });
                });
                ui.add_space(4.0);
            }
        });
    }

    fn render_timer_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TIMER").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some(elapsed) = self.state.ai_thinking_elapsed() {
                let secs = elapsed.as_secs_f32();
                let color = if secs < 1.0 {
                    TIMER_NORMAL
                } else if secs < 5.0 {
                    TIMER_WARNING
                } else {
                    TIMER_CRITICAL
                };
                ui.label(RichText::new(format!("{:.2}s", secs)).size(28.0).strong().color(color));
            } else {
                let elapsed = self.state.move_timer.elapsed();
                ui.label(
                    RichText::new(format!("{:.1}s", elapsed.as_secs_f32()))
                        .size(24.0)
                        .color(TEXT_PRIMARY),
                );
            }

            if let Some(last) = self.state.move_timer.last_move_duration {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last move: {:.1}s", last.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }

            if let Some(ai_time) = self.state.move_timer.ai_thinking_time {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("Last AI: {:.3}s", ai_time.as_secs_f32()))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
            }
        });
    }

    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if Self::action_button(ui, "Undo (U)") {
                    self.state.undo();
                }
                ui.add_space(4.0);
                if Self::action_button(ui, "Hint (H)") {
                    self.state.request_suggestion();
                }
            });

            ui.add_space(8.0);
            let moves = self.state.history.iter().filter(|t| t.pos.is_some()).count();
            ui.label(RichText::new(format!("Move #{}", moves)).size(11.0).color(TEXT_SECONDARY));
        });
    }

    /// Statistics of the last engine search
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(egui::Color32::from_rgb(30, 33, 38))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                let Some(result) = &self.state.last_ai_result else {
                    ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
                    return;
                };

                ui.horizontal(|ui| {
                    ui.vertical(|ui| {
                        ui.label(
                            RichText::new(format!("Depth {}", result.depth))
                                .size(11.0)
                                .strong()
                                .color(TIMER_NORMAL),
                        );
                        ui.label(
                            RichText::new(format!("Score: {:+}", result.score))
                                .size(10.0)
                                .color(TEXT_SECONDARY),
                        );
                    });
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::TOP), |ui| {
                        ui.vertical(|ui| {
                            ui.label(
                                RichText::new(format!("{}ms", result.time_ms))
                                    .size(10.0)
                                    .color(TEXT_SECONDARY),
                            );
                            ui.label(
                                RichText::new(format!("{} nodes", result.nodes))
                                    .size(10.0)
                                    .color(TEXT_MUTED),
                            );
                        });
                    });
                });

                ui.add_space(4.0);
                match result.best_move {
                    Some(pos) => {
                        let suffix = if result.fallback { " (fallback)" } else { "" };
                        ui.label(
                            RichText::new(format!("-> {}{}", square_name(pos), suffix))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                    None => {
                        ui.label(RichText::new("pass").size(12.0).color(TEXT_SECONDARY));
                    }
                }
            });
    }

    /// Render game over card; returns true when New Game was clicked
    fn render_game_over_card(&self, ui: &mut egui::Ui, result: &Outcome) -> bool {
        let mut new_game = false;

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new("GAME OVER")
                            .size(12.0)
                            .color(egui::Color32::from_rgb(180, 255, 180)),
                    );
                    ui.add_space(8.0);

                    let headline = match result.winner {
                        Some(color) => format!("{} WINS!", color_name(color).to_uppercase()),
                        None => "DRAW".to_string(),
                    };
                    ui.label(RichText::new(headline).size(18.0).strong().color(TEXT_PRIMARY));

                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("{} - {}", result.black, result.white))
                            .size(14.0)
                            .color(TEXT_SECONDARY),
                    );

                    ui.add_space(12.0);
                    new_game = Self::action_button(ui, "New Game (N)");
                });
            });

        new_game
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            ui.style_mut().visuals.panel_fill = egui::Color32::from_rgb(40, 42, 46);

            let legal = self.state.highlighted_moves();
            let overlay = Overlay {
                current_turn: self.state.current_turn,
                legal: &legal,
                last_move: self.state.last_move,
                last_flips: &self.state.last_flips,
                suggested_move: self.state.suggested_move,
            };

            let clicked = self.board_view.show(ui, &self.state.board, &overlay);

            if let Some(pos) = clicked {
                if let Err(msg) = self.state.try_place_piece(pos) {
                    self.state.message = Some(msg);
                }
            }
        });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (debug, hint, undo, new_game) = ctx.input(|i| {
            (
                i.key_pressed(egui::Key::D),
                i.key_pressed(egui::Key::H),
                i.key_pressed(egui::Key::U),
                i.key_pressed(egui::Key::N),
            )
        });

        if debug {
            self.show_debug = !self.show_debug;
        }
        if hint {
            self.state.request_suggestion();
        }
        if undo {
            self.state.undo();
        }
        if new_game {
            self.state.reset();
        }
    }
}

impl eframe::App for OthelloApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        self.state.check_ai_result();

        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none() {
            self.state.start_ai_thinking();
        }

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep polling the worker and ticking the timer
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        } else if self.state.game_over.is_none() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}
