// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Stroke, Ui, Vec2};

pub const CORRECT: Color32 = Color32::from_rgb(34, 160, 90);
pub const INCORRECT: Color32 = Color32::from_rgb(210, 60, 60);

/// Color de acento de un sistema; gris si el hex no es válido.
pub fn accent_color(hex: &str) -> Color32 {
    Color32::from_hex(hex).unwrap_or(Color32::GRAY)
}

pub fn big_list_button(ui: &mut Ui, label: String, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Botón de una opción de respuesta. Con la pregunta respondida se colorea:
/// verde la correcta, rojo la elegida si falla.
pub fn option_button(
    ui: &mut Ui,
    label: String,
    width: f32,
    is_correct: bool,
    chosen: bool,
    revealed: bool,
    enabled: bool,
) -> bool {
    let mut button = Button::new(RichText::new(label)).min_size(Vec2::new(width, 36.0));
    if revealed && is_correct {
        button = button.fill(CORRECT.gamma_multiply(0.35)).stroke(Stroke::new(1.5, CORRECT));
    } else if revealed && chosen {
        button = button.fill(INCORRECT.gamma_multiply(0.35)).stroke(Stroke::new(1.5, INCORRECT));
    } else if chosen {
        button = button.stroke(Stroke::new(1.5, ui.visuals().selection.stroke.color));
    }
    ui.add_enabled(enabled, button).clicked()
}

/// Tarjeta con borde del color de acento.
pub fn card<R>(ui: &mut Ui, accent: Color32, inner: impl FnOnce(&mut Ui) -> R) -> R {
    egui::Frame::group(ui.style())
        .stroke(Stroke::new(1.0, accent))
        .inner_margin(egui::Margin::symmetric(12, 10))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            inner(ui)
        })
        .inner
}
