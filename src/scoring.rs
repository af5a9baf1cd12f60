use crate::session::SessionState;

/// Estadísticas agregadas de una sesión.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreReport {
    pub correct: usize,
    pub total: usize,
    pub percentage: u32,
    pub answered: usize,
    pub elapsed_secs: u64,
}

/// Se puede llamar en cualquier momento (la cabecera del quiz lo usa para la
/// nota en curso), pero sólo es definitivo con la sesión terminada.
pub fn score(session: &SessionState) -> ScoreReport {
    let correct = session
        .questions()
        .iter()
        .zip(session.answers())
        .filter(|(q, a)| a.is_some_and(|opt| q.question.is_correct(opt)))
        .count();
    let answered = session.answers().iter().filter(|a| a.is_some()).count();
    let total = session.len();

    ScoreReport {
        correct,
        total,
        percentage: percentage(correct, total),
        answered,
        elapsed_secs: session.elapsed_secs(),
    }
}

/// `round(100 * correct / total)`, 0 si no hay preguntas.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * correct as f64 / total as f64).round() as u32
}

/// Formato `m:ss` de los contadores de tiempo.
pub fn format_clock(secs: u64) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::sampled;

    #[test]
    fn one_of_three_after_early_finish() {
        let mut s = SessionState::new(sampled(3), None);
        // sampled(i) tiene correct = i % 4, así que la pregunta 0 acierta con 0
        s.select_answer(0).unwrap();
        s.finish();

        let report = score(&s);
        assert_eq!(report.correct, 1);
        assert_eq!(report.answered, 1);
        assert_eq!(report.total, 3);
        assert_eq!(report.percentage, 33);
    }

    #[test]
    fn wrong_answers_count_as_answered_only() {
        let mut s = SessionState::new(sampled(2), None);
        s.select_answer(3).unwrap();
        s.advance();
        s.select_answer(1).unwrap();
        s.tick();
        s.tick();

        let report = score(&s);
        assert_eq!(report.correct, 1);
        assert_eq!(report.answered, 2);
        assert_eq!(report.percentage, 50);
        assert_eq!(report.elapsed_secs, 2);
    }

    #[test]
    fn percentage_rounds_and_handles_empty() {
        assert_eq!(percentage(0, 0), 0);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13);
        assert_eq!(percentage(5, 5), 100);
        assert_eq!(score(&SessionState::new(Vec::new(), None)).percentage, 0);
    }

    #[test]
    fn clock_format() {
        assert_eq!(format_clock(0), "0:00");
        assert_eq!(format_clock(65), "1:05");
        assert_eq!(format_clock(3600), "60:00");
    }
}
