use super::*;
use std::time::Duration;

impl MedQuizApp {
    /// Avanza el reloj del quiz con el tiempo de frame `now` (segundos).
    /// Devuelve cuándo conviene repintar para el siguiente tick.
    pub fn tick_active(&mut self, now: f64) -> Option<Duration> {
        let active = self.active.as_mut()?;
        if active.session.is_completed() {
            return None;
        }
        for _ in 0..active.clock.due_ticks(now) {
            active.session.tick();
        }
        let next = Duration::from_secs_f64(active.clock.until_next_tick().max(0.05));
        let finished = active.session.is_completed();
        self.check_finished();
        if finished { None } else { Some(next) }
    }

    /// Publica la respuesta pendiente del asistente si ya toca.
    pub fn poll_assistant(&mut self, now: f64) -> Option<Duration> {
        self.assistant.poll(now);
        self.assistant
            .time_to_reply(now)
            .map(|s| Duration::from_secs_f64(s.max(0.05)))
    }

    pub fn send_assistant_message(&mut self, now: f64) {
        let delay = self.config.assistant_delay;
        if self.assistant.send(now, delay, &mut self.rng) {
            log::debug!("mensaje enviado al asistente");
        }
    }
}
