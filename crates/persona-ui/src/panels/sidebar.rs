//! Sidebar: username, persona picker and reset.

use egui::{self, RichText, Vec2};
use persona_core::controller::MISSING_USERNAME_WARNING;
use persona_types::persona::PersonaId;
use crate::theme::*;

/// What the caller should do after rendering the sidebar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SidebarAction {
    None,
    UsernameChanged,
    PersonaSelected(PersonaId),
    ResetClicked,
}

/// Render the sidebar. `username` is edited in place; the persona change is
/// reported so the controller applies it.
pub fn sidebar_panel(
    ui: &mut egui::Ui,
    username: &mut String,
    current: PersonaId,
) -> SidebarAction {
    let mut action = SidebarAction::None;

    egui::Frame::default()
        .fill(BG_SECONDARY)
        .inner_margin(PANEL_PADDING)
        .corner_radius(PANEL_ROUNDING)
        .show(ui, |ui| {
            ui.heading(RichText::new("Chat Settings").color(TEXT_PRIMARY));
            ui.separator();

            ui.label(
                RichText::new("Enter your unique username:")
                    .color(TEXT_SECONDARY)
                    .small(),
            );
            if ui.text_edit_singleline(username).changed() {
                action = SidebarAction::UsernameChanged;
            }

            ui.add_space(8.0);

            ui.label(RichText::new("Select Persona:").color(TEXT_SECONDARY).small());
            let mut selected = current;
            egui::ComboBox::from_id_salt("persona")
                .selected_text(current.persona().name)
                .show_ui(ui, |ui| {
                    for id in PersonaId::all() {
                        ui.selectable_value(&mut selected, id, id.persona().name);
                    }
                });
            if selected != current {
                log::debug!("Persona picked in sidebar: {}", selected.persona().name);
                action = SidebarAction::PersonaSelected(selected);
            }

            ui.add_space(4.0);
            ui.horizontal(|ui| {
                ui.label(RichText::new("Current Persona:").color(TEXT_SECONDARY));
                ui.label(RichText::new(selected.persona().name).color(TEXT_PRIMARY).strong());
            });

            if username.is_empty() {
                ui.add_space(8.0);
                banner(BG_WARNING).show(ui, |ui| {
                    ui.label(RichText::new(MISSING_USERNAME_WARNING).color(WARNING));
                });
            }

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(8.0);

            let reset = ui.add(
                egui::Button::new(RichText::new("Reset session").color(TEXT_PRIMARY))
                    .fill(BG_SURFACE)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(120.0, 28.0)),
            );
            if reset.clicked() {
                log::debug!("Reset requested from sidebar");
                action = SidebarAction::ResetClicked;
            }
        });

    action
}
