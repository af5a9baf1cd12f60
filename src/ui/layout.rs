use crate::app::MedQuizApp;
use crate::model::AppState;
use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui};

/// Barra superior de navegación. Salir de un quiz en curso lo abandona.
pub fn top_panel(app: &mut MedQuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.strong("🩺 MedQuiz");
            ui.separator();

            let on = |state: AppState| app.state == state;
            let home = ui.selectable_label(on(AppState::Home), "Home").clicked();
            let systems = ui
                .selectable_label(
                    on(AppState::Systems) || on(AppState::SystemDetail),
                    "Systems",
                )
                .clicked();
            let practice = ui
                .selectable_label(on(AppState::PracticeSetup), "Practice Tests")
                .clicked();
            let sources = ui.selectable_label(on(AppState::Sources), "Sources").clicked();
            let contact = ui.selectable_label(on(AppState::Contact), "Contact").clicked();

            if home {
                app.go_home();
            } else if systems {
                app.open_systems();
            } else if practice {
                app.open_practice_setup();
            } else if sources {
                app.open_sources();
            } else if contact {
                app.open_contact();
            }
        });
    });
}

pub fn bottom_panel(app: &mut MedQuizApp, ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if app.dark_mode {
                "☀ Light mode"
            } else {
                "🌙 Dark mode"
            };
            if ui.button(label).clicked() {
                app.toggle_theme();
            }
            if !app.assistant.open && ui.button("💬 AI Assistant").clicked() {
                app.assistant.open = true;
                app.assistant.minimized = false;
            }
            ui.with_layout(egui::Layout::left_to_right(egui::Align::Center), |ui| {
                ui.weak("For educational purposes only.");
            });
        });
    });
}

/// Panel central con scroll y anchura de contenido limitada.
pub fn scroll_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        ScrollArea::vertical()
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    let w = ui.available_width().min(max_width);
                    Frame::default()
                        .fill(ui.visuals().window_fill())
                        .inner_margin(egui::Margin::symmetric(16, 16))
                        .show(ui, |ui| {
                            ui.set_width(w);
                            ui.with_layout(egui::Layout::top_down(egui::Align::Min), inner);
                        });
                });
            });
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        ui.vertical_centered(|ui| {
            Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 16))
                .show(ui, |ui| {
                    let w = ui.available_width().min(max_width);
                    ui.set_width(w);
                    inner(ui);
                });
        });
    });
}

/// Dos botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve (clic izquierdo, clic derecho).
pub fn two_button_row(
    ui: &mut Ui,
    panel_width: f32,
    left_label: &str,
    right_label: &str,
) -> (bool, bool) {
    let btn_w = (panel_width - 8.0) / 2.0;
    let mut clicked_left = false;
    let mut clicked_right = false;
    ui.horizontal(|ui| {
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        clicked_left = ui
            .add_sized([btn_w, 36.0], Button::new(left_label))
            .clicked();
        clicked_right = ui
            .add_sized([btn_w, 36.0], Button::new(right_label))
            .clicked();
    });
    (clicked_left, clicked_right)
}
