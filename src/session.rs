//! Estado de un intento de quiz: posición, respuestas, tiempo y fin.
//!
//! `Completed` es terminal. Repetir un quiz crea una sesión nueva.

use crate::errors::SessionError;
use crate::model::SampledQuestion;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Completed,
}

/// Motivo por el que terminó la sesión (sólo informativo, para logs y resumen).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinishReason {
    Manual,
    LastQuestion,
    TimeUp,
    Empty,
}

#[derive(Debug, Clone)]
pub struct SessionState {
    questions: Vec<SampledQuestion>,
    current: usize,
    answers: Vec<Option<usize>>,
    elapsed_secs: u64,
    remaining_secs: Option<u64>,
    finish_reason: Option<FinishReason>,
}

impl SessionState {
    /// Arranca la sesión. Con `time_limit_secs` la sesión es cronometrada.
    /// Una muestra vacía produce una sesión ya terminada.
    pub fn new(questions: Vec<SampledQuestion>, time_limit_secs: Option<u64>) -> Self {
        let answers = vec![None; questions.len()];
        let mut session = Self {
            questions,
            current: 0,
            answers,
            elapsed_secs: 0,
            remaining_secs: time_limit_secs,
            finish_reason: None,
        };
        if session.questions.is_empty() {
            session.finish_with(FinishReason::Empty);
        }
        session
    }

    pub fn status(&self) -> SessionStatus {
        if self.finish_reason.is_some() {
            SessionStatus::Completed
        } else {
            SessionStatus::InProgress
        }
    }

    pub fn is_completed(&self) -> bool {
        self.finish_reason.is_some()
    }

    pub fn finish_reason(&self) -> Option<FinishReason> {
        self.finish_reason
    }

    pub fn questions(&self) -> &[SampledQuestion] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&SampledQuestion> {
        self.questions.get(self.current)
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn answer_at(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied().flatten()
    }

    pub fn current_answer(&self) -> Option<usize> {
        self.answer_at(self.current)
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.questions.len()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_secs
    }

    pub fn remaining_secs(&self) -> Option<u64> {
        self.remaining_secs
    }

    pub fn is_timed(&self) -> bool {
        self.remaining_secs.is_some()
    }

    /// Un segundo de reloj. Sin efecto una vez terminada.
    pub fn tick(&mut self) {
        if self.is_completed() {
            return;
        }
        self.elapsed_secs += 1;
        if let Some(remaining) = self.remaining_secs.as_mut() {
            *remaining = remaining.saturating_sub(1);
            if *remaining == 0 {
                self.finish_with(FinishReason::TimeUp);
            }
        }
    }

    /// Registra (o sobrescribe) la respuesta de la pregunta actual.
    pub fn select_answer(&mut self, option: usize) -> Result<(), SessionError> {
        if self.is_completed() {
            return Err(SessionError::Completed);
        }
        let available = self
            .current_question()
            .map(|q| q.question.options.len())
            .unwrap_or(0);
        if option >= available {
            return Err(SessionError::OptionOutOfRange { option, available });
        }
        self.answers[self.current] = Some(option);
        Ok(())
    }

    pub fn go_to(&mut self, index: usize) -> Result<(), SessionError> {
        if self.is_completed() {
            return Err(SessionError::Completed);
        }
        if index >= self.questions.len() {
            return Err(SessionError::IndexOutOfRange {
                index,
                len: self.questions.len(),
            });
        }
        self.current = index;
        Ok(())
    }

    /// Siguiente pregunta; en la última, termina la sesión.
    pub fn advance(&mut self) {
        if self.is_completed() {
            return;
        }
        if self.is_last() {
            self.finish_with(FinishReason::LastQuestion);
        } else {
            self.current += 1;
        }
    }

    pub fn retreat(&mut self) {
        if self.is_completed() {
            return;
        }
        self.current = self.current.saturating_sub(1);
    }

    /// Termina ya, queden o no preguntas sin responder. Idempotente.
    pub fn finish(&mut self) {
        self.finish_with(FinishReason::Manual);
    }

    fn finish_with(&mut self, reason: FinishReason) {
        if self.finish_reason.is_none() {
            self.finish_reason = Some(reason);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::sampled;

    #[test]
    fn new_session_starts_at_zero_with_nothing_answered() {
        let s = SessionState::new(sampled(3), None);
        assert_eq!(s.status(), SessionStatus::InProgress);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.answers(), &[None, None, None]);
        assert_eq!(s.elapsed_secs(), 0);
        assert_eq!(s.remaining_secs(), None);
    }

    #[test]
    fn one_second_limit_finishes_after_one_tick() {
        let mut s = SessionState::new(sampled(4), Some(1));
        s.go_to(2).unwrap();
        s.tick();
        assert_eq!(s.remaining_secs(), Some(0));
        assert!(s.is_completed());
        assert_eq!(s.finish_reason(), Some(FinishReason::TimeUp));
        assert_eq!(s.elapsed_secs(), 1);
    }

    #[test]
    fn countdown_forces_completion_with_unanswered_questions() {
        let mut s = SessionState::new(sampled(5), Some(30));
        s.select_answer(1).unwrap();
        for _ in 0..29 {
            s.tick();
        }
        assert!(!s.is_completed());
        s.tick();
        assert!(s.is_completed());

        s.tick();
        assert_eq!(s.elapsed_secs(), 30, "tick after completion is a no-op");
    }

    #[test]
    fn completed_session_is_frozen() {
        let mut s = SessionState::new(sampled(3), None);
        s.select_answer(2).unwrap();
        s.advance();
        s.finish();
        let answers = s.answers().to_vec();
        let current = s.current_index();

        assert_eq!(s.select_answer(0), Err(SessionError::Completed));
        assert_eq!(s.go_to(0), Err(SessionError::Completed));
        s.advance();
        s.retreat();
        s.tick();
        s.finish();

        assert_eq!(s.answers(), answers.as_slice());
        assert_eq!(s.current_index(), current);
        assert_eq!(s.elapsed_secs(), 0);
        assert_eq!(s.finish_reason(), Some(FinishReason::Manual));
    }

    #[test]
    fn out_of_range_inputs_do_not_mutate() {
        let mut s = SessionState::new(sampled(2), None);
        assert_eq!(
            s.select_answer(4),
            Err(SessionError::OptionOutOfRange { option: 4, available: 4 })
        );
        assert_eq!(s.go_to(2), Err(SessionError::IndexOutOfRange { index: 2, len: 2 }));
        assert_eq!(s.answers(), &[None, None]);
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn revisiting_keeps_answers_and_allows_overwrite() {
        let mut s = SessionState::new(sampled(3), None);
        s.select_answer(3).unwrap();
        s.advance();
        s.select_answer(1).unwrap();

        for _ in 0..5 {
            s.go_to(0).unwrap();
            s.go_to(1).unwrap();
        }
        assert_eq!(s.answers(), &[Some(3), Some(1), None]);

        s.go_to(0).unwrap();
        assert_eq!(s.current_answer(), Some(3));
        s.select_answer(0).unwrap();
        assert_eq!(s.answers(), &[Some(0), Some(1), None]);
    }

    #[test]
    fn navigation_bounds() {
        let mut s = SessionState::new(sampled(2), None);
        s.retreat();
        assert_eq!(s.current_index(), 0);
        s.advance();
        assert_eq!(s.current_index(), 1);
        assert!(!s.is_completed());
        s.advance();
        assert!(s.is_completed());
        assert_eq!(s.finish_reason(), Some(FinishReason::LastQuestion));
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn empty_sample_is_already_completed() {
        let s = SessionState::new(Vec::new(), Some(60));
        assert!(s.is_completed());
        assert_eq!(s.finish_reason(), Some(FinishReason::Empty));
        assert!(s.current_question().is_none());
    }
}
