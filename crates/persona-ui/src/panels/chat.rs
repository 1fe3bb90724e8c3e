//! Chat panel: message input and conversation history.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};
use persona_types::message::{Role, Turn};
use crate::state::{UiState, UiStatus};
use crate::theme::*;

/// Read-only view of the session for one frame
pub struct ChatView<'a> {
    pub username: &'a str,
    pub transcript: &'a [Turn],
}

/// Render the chat panel. Returns Some(message) when Send is clicked.
/// The text is returned as typed; the controller decides whether it is empty.
pub fn chat_panel(ui: &mut egui::Ui, state: &mut UiState, view: &ChatView<'_>) -> Option<String> {
    let mut submitted = None;

    egui::Frame::default()
        .fill(BG_PRIMARY)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                ui.horizontal(|ui| {
                    ui.heading(
                        RichText::new("LLM-Powered Chatbot")
                            .color(TEXT_PRIMARY)
                            .strong(),
                    );
                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        let status_color = match state.status {
                            UiStatus::Ready => SUCCESS,
                            UiStatus::Thinking => WARNING,
                            UiStatus::Error(_) => ERROR,
                        };
                        ui.label(
                            RichText::new(state.status_text())
                                .color(status_color)
                                .small(),
                        );
                    });
                });

                ui.horizontal(|ui| {
                    ui.label(RichText::new("Chatting as:").color(TEXT_SECONDARY));
                    ui.label(RichText::new(view.username).color(TEXT_PRIMARY).strong());
                });

                ui.separator();

                if let Some(error) = &state.error_banner {
                    banner(BG_ERROR).show(ui, |ui| {
                        ui.label(RichText::new(error).color(ERROR));
                    });
                    ui.add_space(4.0);
                }

                ui.label(RichText::new("Your message:").color(TEXT_SECONDARY).small());
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));
                    ui.add(input);

                    let enabled = !state.is_busy();
                    let send_btn = ui.add_enabled(
                        enabled,
                        egui::Button::new(RichText::new("Send").color(TEXT_PRIMARY))
                            .fill(if enabled { ACCENT } else { BG_SURFACE })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );
                    if send_btn.clicked() {
                        submitted = Some(state.input_text.clone());
                    }
                });

                ui.add_space(8.0);

                if !view.transcript.is_empty() {
                    ui.label(
                        RichText::new("Conversation History")
                            .color(TEXT_PRIMARY)
                            .strong()
                            .size(16.0),
                    );
                    ScrollArea::vertical()
                        .auto_shrink([false, false])
                        .stick_to_bottom(true)
                        .show(ui, |ui| {
                            for turn in view.transcript {
                                render_turn(ui, turn);
                                ui.add_space(4.0);
                            }
                        });
                }
            });
        });

    submitted
}

/// Shown in place of the chat panel until a username is entered
pub fn blocked_panel(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            RichText::new("Enter a username in the sidebar to start chatting.")
                .color(TEXT_SECONDARY),
        );
    });
}

fn render_turn(ui: &mut egui::Ui, turn: &Turn) {
    let label_color = match turn.role {
        Role::User => ACCENT,
        Role::Assistant => SUCCESS,
    };

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .corner_radius(PANEL_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("{}:", turn.role.label()))
                    .color(label_color)
                    .strong()
                    .small(),
            );
            ui.label(RichText::new(&turn.content).color(TEXT_PRIMARY));
        });
}
