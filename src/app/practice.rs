use super::*;
use crate::selector::{select, select_category, validate_config};

impl MedQuizApp {
    /// Botón "Start Practice Test": valida el borrador, lo deja en el
    /// portador y abre el quiz, que lo consume.
    pub fn start_practice(&mut self) {
        let Some(config) = self.setup.to_config() else {
            self.message = "Choose a practice mode first.".into();
            return;
        };
        if let Err(e) = validate_config(&config) {
            log::warn!("configuración rechazada: {e}");
            self.message = capitalized(&e.to_string());
            return;
        }
        if let Err(e) = self.carrier.put(&config) {
            log::warn!("no se pudo guardar la configuración: {e}");
            self.message = capitalized(&e.to_string());
            return;
        }
        self.open_practice_quiz();
    }

    /// Pantalla del test de práctica: consume la configuración del portador.
    /// Sin configuración válida se vuelve a ajustes en vez de arrancar.
    pub fn open_practice_quiz(&mut self) {
        self.leave_quiz();
        let config = match self.carrier.take() {
            Ok(Some(config)) => config,
            Ok(None) => {
                log::info!("no hay configuración de práctica, vuelta a ajustes");
                self.redirect_to_setup("Set up a practice test first.".into());
                return;
            }
            Err(e) => {
                log::warn!("{e}");
                self.redirect_to_setup(capitalized(&e.to_string()));
                return;
            }
        };
        self.launch_practice(config);
    }

    fn launch_practice(&mut self, config: PracticeConfig) {
        match select(&config, &self.corpus, &mut self.rng) {
            Ok(questions) => {
                log::info!(
                    "práctica {:?}: {} preguntas (pedidas {})",
                    config.mode,
                    questions.len(),
                    config.question_count
                );
                let session = SessionState::new(questions, config.effective_time_limit());
                self.active = Some(ActiveQuiz::new(QuizKind::Practice(config), session));
                self.message.clear();
                self.state = AppState::Quiz;
            }
            Err(e) => {
                log::warn!("no se pudo generar el test: {e}");
                self.redirect_to_setup(capitalized(&e.to_string()));
            }
        }
    }

    fn redirect_to_setup(&mut self, message: String) {
        self.active = None;
        self.state = AppState::PracticeSetup;
        self.message = message;
    }

    /// Quiz de una categoría concreta: todas sus preguntas, en orden, sin límite.
    pub fn start_category_quiz(&mut self, system_id: &str, category_id: &str) {
        self.leave_quiz();
        match select_category(&self.corpus, system_id, category_id) {
            Ok(questions) => {
                log::info!(
                    "quiz {system_id}/{category_id}: {} preguntas",
                    questions.len()
                );
                let kind = QuizKind::Category {
                    system_id: system_id.to_string(),
                    category_id: category_id.to_string(),
                };
                self.selected_system = Some(system_id.to_string());
                self.active = Some(ActiveQuiz::new(kind, SessionState::new(questions, None)));
                self.state = AppState::Quiz;
            }
            Err(e) => self.show_not_found(capitalized(&e.to_string())),
        }
    }

    /// Repetir: sesión nueva con los mismos ajustes. En práctica se vuelven
    /// a sortear las preguntas; por categoría se repiten las mismas.
    pub fn retake(&mut self) {
        let Some(active) = self.active.take() else {
            return;
        };
        match active.kind {
            QuizKind::Practice(config) => self.launch_practice(config),
            QuizKind::Category { .. } => {
                let questions = active.session.questions().to_vec();
                self.active = Some(ActiveQuiz::new(active.kind, SessionState::new(questions, None)));
                self.state = AppState::Quiz;
            }
        }
    }
}

fn capitalized(text: &str) -> String {
    let mut out = crate::view_models::capitalize(text);
    if !out.ends_with('.') {
        out.push('.');
    }
    out
}
