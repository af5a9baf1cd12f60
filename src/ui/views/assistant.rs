use crate::app::MedQuizApp;
use crate::assistant::Sender;
use egui::{Align, Context, Key, Layout, RichText, ScrollArea, TextEdit};

/// Ventana flotante del asistente. Se dibuja encima de cualquier vista.
pub fn ui_assistant(app: &mut MedQuizApp, ctx: &Context, now: f64) {
    if !app.assistant.open {
        return;
    }

    let mut open = true;
    egui::Window::new("💬 AI Study Assistant")
        .open(&mut open)
        .collapsible(false)
        .resizable(true)
        .default_size([340.0, 420.0])
        .anchor(egui::Align2::RIGHT_BOTTOM, [-12.0, -48.0])
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.weak("Answers are canned study tips, not medical advice.");
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    let label = if app.assistant.minimized { "▢" } else { "_" };
                    if ui.small_button(label).clicked() {
                        app.assistant.minimized = !app.assistant.minimized;
                    }
                });
            });
            if app.assistant.minimized {
                return;
            }
            ui.separator();

            ScrollArea::vertical()
                .max_height(300.0)
                .stick_to_bottom(true)
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    for msg in app.assistant.messages() {
                        match msg.sender {
                            Sender::User => {
                                ui.with_layout(Layout::top_down(Align::Max), |ui| {
                                    ui.label(RichText::new(&msg.text).strong());
                                });
                            }
                            Sender::Assistant => {
                                ui.label(&msg.text);
                            }
                        }
                        ui.add_space(6.0);
                    }
                    if app.assistant.is_typing() {
                        ui.weak("Assistant is typing…");
                    }
                });

            ui.separator();
            ui.horizontal(|ui| {
                let input = ui.add(
                    TextEdit::singleline(&mut app.assistant.input)
                        .hint_text("Ask about a system, exams, study tips…")
                        .desired_width(ui.available_width() - 60.0),
                );
                let enter = input.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
                let send = ui
                    .add_enabled(!app.assistant.is_typing(), egui::Button::new("Send"))
                    .clicked();
                if enter || send {
                    app.send_assistant_message(now);
                    input.request_focus();
                    ctx.request_repaint();
                }
            });
        });

    if !open {
        app.assistant.open = false;
    }
}
