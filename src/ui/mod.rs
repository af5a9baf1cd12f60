mod helpers;
pub mod layout;
pub mod views;

use crate::app::MedQuizApp;
use crate::model::AppState;
use eframe::{App, Frame};
use egui::{Context, Visuals};
use layout::{bottom_panel, top_panel};

impl App for MedQuizApp {
    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        ctx.set_visuals(if self.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        let now = ctx.input(|i| i.time);

        // Se entra al quiz de práctica sin sesión: consumir el portador
        if self.state == AppState::Quiz && self.active.is_none() {
            self.open_practice_quiz();
        }

        // Reloj del quiz y respuesta pendiente del asistente
        if let Some(after) = self.tick_active(now) {
            ctx.request_repaint_after(after);
        }
        if let Some(after) = self.poll_assistant(now) {
            ctx.request_repaint_after(after);
        }

        top_panel(self, ctx);
        bottom_panel(self, ctx);

        // Dispatch por estado a las vistas
        match self.state {
            AppState::Home => views::home::ui_home(self, ctx),
            AppState::Systems => views::systems::ui_systems(self, ctx),
            AppState::SystemDetail => views::system_detail::ui_system_detail(self, ctx),
            AppState::PracticeSetup => views::practice_setup::ui_practice_setup(self, ctx),
            AppState::Quiz => views::quiz::ui_quiz(self, ctx),
            AppState::Summary => views::summary::ui_summary(self, ctx),
            AppState::Sources => views::sources::ui_sources(self, ctx),
            AppState::Contact => views::contact::ui_contact(self, ctx),
            AppState::NotFound => views::not_found::ui_not_found(self, ctx),
        }

        views::assistant::ui_assistant(self, ctx, now);
    }
}
