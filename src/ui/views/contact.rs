use crate::app::MedQuizApp;
use crate::contact::Subject;
use crate::ui::helpers::CORRECT;
use crate::ui::layout::scroll_panel;
use egui::{Color32, ComboBox, Context, TextEdit};

pub fn ui_contact(app: &mut MedQuizApp, ctx: &Context) {
    scroll_panel(ctx, 560.0, |ui| {
        ui.heading("Contact Us");
        ui.label("Questions, corrections or ideas? Send us a message.");
        ui.add_space(10.0);

        let w = ui.available_width();
        egui::Grid::new("contact_form")
            .num_columns(2)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                ui.label("Name *");
                ui.add(TextEdit::singleline(&mut app.contact.name).desired_width(w * 0.7));
                ui.end_row();

                ui.label("Email *");
                ui.add(
                    TextEdit::singleline(&mut app.contact.email)
                        .hint_text("you@example.com")
                        .desired_width(w * 0.7),
                );
                ui.end_row();

                ui.label("Subject *");
                ComboBox::from_id_salt("contact_subject")
                    .selected_text(app.contact.subject.map_or("Select a subject", |s| s.label()))
                    .width(w * 0.7)
                    .show_ui(ui, |ui| {
                        for subject in Subject::ALL {
                            ui.selectable_value(&mut app.contact.subject, Some(subject), subject.label());
                        }
                    });
                ui.end_row();

                ui.label("Message *");
                ui.add(
                    TextEdit::multiline(&mut app.contact.message)
                        .desired_rows(6)
                        .desired_width(w * 0.7),
                );
                ui.end_row();
            });

        ui.add_space(10.0);
        if ui.button("📨 Send message").clicked() {
            app.submit_contact();
        }
        if !app.message.is_empty() {
            ui.add_space(8.0);
            let color = if app.message.starts_with("Thank you") {
                CORRECT
            } else {
                Color32::RED
            };
            ui.colored_label(color, &app.message);
        }
    });
}
