//! Main egui application. Composes the panels and owns the session.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, SidePanel, TopBottomPanel};

use persona_core::controller::{ChatSessionController, SendDecision};
use persona_core::event_bus::EventBus;
use persona_core::ports::ChatCollaborator;
use persona_platform::collaborator::collaborator_from_config;
use persona_types::config::ChatConfig;
use persona_ui::panels::chat::{self, ChatView};
use persona_ui::panels::sidebar::{self, SidebarAction};
use persona_ui::state::UiState;
use persona_ui::theme;

pub struct PersonaChatApp {
    ui_state: UiState,
    event_bus: EventBus,
    controller: Rc<RefCell<ChatSessionController>>,
    collaborator: Rc<dyn ChatCollaborator>,
    first_frame: bool,
}

impl PersonaChatApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ChatConfig) -> Self {
        let event_bus = EventBus::new();
        let collaborator = collaborator_from_config(&config);
        let controller = ChatSessionController::new(Rc::new(config), event_bus.clone());

        Self {
            ui_state: UiState::new(),
            event_bus,
            controller: Rc::new(RefCell::new(controller)),
            collaborator,
            first_frame: true,
        }
    }

    fn apply_sidebar_action(&mut self, action: SidebarAction) {
        let mut controller = self.controller.borrow_mut();
        match action {
            SidebarAction::None => {}
            SidebarAction::UsernameChanged => {
                controller.set_username(self.ui_state.username_input.clone());
            }
            SidebarAction::PersonaSelected(id) => controller.set_persona(id),
            SidebarAction::ResetClicked => controller.reset(),
        }
    }

    /// Run the gate synchronously, then await the collaborator off-frame.
    fn dispatch_message(&mut self, text: String, ctx: &egui::Context) {
        let decision = self.controller.borrow_mut().begin_send(&text);
        let pending = match decision {
            SendDecision::Dispatch(p) => p,
            SendDecision::MissingUsername | SendDecision::EmptyQuery => return,
            SendDecision::Busy => {
                log::debug!("Send ignored: a reply is still pending");
                return;
            }
        };
        self.ui_state.input_text.clear();

        let controller = self.controller.clone();
        let collaborator = self.collaborator.clone();
        let ctx = ctx.clone();

        wasm_bindgen_futures::spawn_local(async move {
            let result = collaborator.chat(pending.request).await;
            // Failures are logged and surfaced as an event by the controller
            let _ = controller.borrow_mut().complete_send(pending.ticket, result);
            ctx.request_repaint();
        });
    }
}

impl eframe::App for PersonaChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx);
            self.first_frame = false;
        }

        if self.event_bus.has_pending() {
            self.ui_state.process_events(self.event_bus.drain());
            ctx.request_repaint();
        }

        if self.ui_state.is_busy() {
            ctx.request_repaint();
        }

        // ── Top bar ──────────────────────────────────────────
        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            let controller = self.controller.borrow();
            let llm = &controller.config().llm;
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new("Persona Chat")
                        .strong()
                        .color(theme::ACCENT)
                        .size(16.0),
                );
                ui.separator();
                ui.label(
                    RichText::new(format!(
                        "Provider: {} | Model: {} | Collaborator: {}",
                        llm.provider,
                        llm.model.as_deref().unwrap_or("<unset>"),
                        self.collaborator.name()
                    ))
                    .color(theme::TEXT_SECONDARY)
                    .small(),
                );
            });
        });

        // ── Sidebar ──────────────────────────────────────────
        let current_persona = self.controller.borrow().persona_id();
        let mut action = SidebarAction::None;
        SidePanel::left("sidebar")
            .min_width(240.0)
            .max_width(320.0)
            .show(ctx, |ui| {
                action = sidebar::sidebar_panel(
                    ui,
                    &mut self.ui_state.username_input,
                    current_persona,
                );
            });
        self.apply_sidebar_action(action);

        // ── Main content ─────────────────────────────────────
        let mut submitted = None;
        CentralPanel::default().show(ctx, |ui| {
            let controller = self.controller.borrow();
            if !controller.has_username() {
                chat::blocked_panel(ui);
                return;
            }
            let view = ChatView {
                username: controller.username(),
                transcript: controller.transcript(),
            };
            submitted = chat::chat_panel(ui, &mut self.ui_state, &view);
        });

        if let Some(text) = submitted {
            self.dispatch_message(text, ctx);
        }
    }
}
