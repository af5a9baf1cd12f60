use super::*;

impl MedQuizApp {
    pub fn go_home(&mut self) {
        self.leave_quiz();
        self.state = AppState::Home;
    }

    pub fn open_systems(&mut self) {
        self.leave_quiz();
        self.state = AppState::Systems;
    }

    /// Ficha de un sistema; si el id no existe, vista de "no encontrado".
    pub fn open_system(&mut self, system_id: &str) {
        self.leave_quiz();
        if self.corpus.system(system_id).is_none() {
            self.show_not_found(format!("System \"{system_id}\" does not exist."));
            return;
        }
        self.selected_system = Some(system_id.to_string());
        self.state = AppState::SystemDetail;
    }

    pub fn open_practice_setup(&mut self) {
        self.leave_quiz();
        self.state = AppState::PracticeSetup;
    }

    pub fn open_sources(&mut self) {
        self.leave_quiz();
        self.state = AppState::Sources;
    }

    pub fn open_contact(&mut self) {
        self.leave_quiz();
        self.state = AppState::Contact;
    }

    pub fn show_not_found(&mut self, message: String) {
        log::warn!("{message}");
        self.message = message;
        self.state = AppState::NotFound;
    }

    /// Vuelve a la ficha del sistema del quiz por categoría, o a ajustes si
    /// era un test de práctica.
    pub fn back_from_quiz(&mut self) {
        let system = match self.active.as_ref().map(|a| &a.kind) {
            Some(QuizKind::Category { system_id, .. }) => Some(system_id.clone()),
            _ => None,
        };
        match system {
            Some(id) => self.open_system(&id),
            None => self.open_practice_setup(),
        }
    }

    /// Abandona el quiz activo. Con él se va su reloj.
    pub fn leave_quiz(&mut self) {
        if let Some(active) = self.active.take() {
            if !active.session.is_completed() {
                log::info!(
                    "quiz abandonado en la pregunta {}/{}",
                    active.session.current_index() + 1,
                    active.session.len()
                );
            }
        }
        self.message.clear();
    }

    pub fn toggle_theme(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::app;
    use crate::model::AppState;

    #[test]
    fn unknown_system_shows_not_found() {
        let mut app = app();
        app.open_system("ghost");
        assert_eq!(app.state, AppState::NotFound);
        assert!(app.message.contains("ghost"));

        app.open_systems();
        assert_eq!(app.state, AppState::Systems);
        assert!(app.message.is_empty());
    }

    #[test]
    fn leaving_drops_the_active_quiz() {
        let mut app = app();
        app.start_category_quiz("cardiovascular", "anatomy");
        assert!(app.active.is_some());
        app.go_home();
        assert!(app.active.is_none());
        assert_eq!(app.state, AppState::Home);
    }
}
