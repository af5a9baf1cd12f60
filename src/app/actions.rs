use super::*;
use crate::scoring::score;
use crate::session::FinishReason;

impl MedQuizApp {
    /// Clic en una opción: se registra al momento. Una pregunta ya respondida
    /// sólo acepta cambios tras pulsar "Change answer".
    pub fn choose_option(&mut self, option: usize) {
        let Some(active) = self.active.as_mut() else {
            return;
        };
        if active.is_locked() {
            return;
        }
        match active.session.select_answer(option) {
            Ok(()) => active.editing = false,
            Err(e) => log::warn!("respuesta rechazada: {e}"),
        }
    }

    pub fn unlock_answer(&mut self) {
        if let Some(active) = self.active.as_mut() {
            if !active.session.is_completed() {
                active.editing = true;
            }
        }
    }

    /// "Next" / "Finish" al final de la lista.
    pub fn next_question(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.session.advance();
            active.editing = false;
        }
        self.check_finished();
    }

    pub fn previous_question(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.session.retreat();
            active.editing = false;
        }
    }

    pub fn jump_to(&mut self, index: usize) {
        if let Some(active) = self.active.as_mut() {
            match active.session.go_to(index) {
                Ok(()) => active.editing = false,
                Err(e) => log::warn!("salto rechazado: {e}"),
            }
        }
    }

    /// Terminar ya, con preguntas sin responder si las hay.
    pub fn finish_now(&mut self) {
        if let Some(active) = self.active.as_mut() {
            active.session.finish();
        }
        self.check_finished();
    }

    /// Si la sesión ha terminado (por el usuario o por tiempo) pasa al resumen.
    pub fn check_finished(&mut self) {
        let Some(active) = self.active.as_ref() else {
            return;
        };
        if !active.session.is_completed() || self.state == AppState::Summary {
            return;
        }
        let report = score(&active.session);
        let reason = active.session.finish_reason().unwrap_or(FinishReason::Manual);
        log::info!(
            "sesión terminada ({reason:?}): {}/{} correctas, {}%, {} respondidas, {}s",
            report.correct,
            report.total,
            report.percentage,
            report.answered,
            report.elapsed_secs
        );
        self.state = AppState::Summary;
    }

    /// Envía el formulario de contacto; el resultado queda en `message`.
    pub fn submit_contact(&mut self) {
        match crate::contact::submit(&self.contact) {
            Ok(sent) => {
                self.message = format!(
                    "Thank you, {}! Your message has been sent. We'll get back to you soon.",
                    sent.name
                );
                self.contact.clear();
            }
            Err(e) => self.message = crate::view_models::capitalize(&e.to_string()),
        }
    }
}
