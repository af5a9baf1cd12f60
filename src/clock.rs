/// Convierte el tiempo de frame de egui (segundos, monotónico) en ticks de
/// un segundo exacto. Se arrastra la fracción sobrante entre frames.
#[derive(Debug, Clone, Default)]
pub struct SessionClock {
    last: Option<f64>,
    carry: f64,
}

impl SessionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticks enteros transcurridos desde la última llamada.
    /// La primera llamada sólo fija el origen.
    pub fn due_ticks(&mut self, now: f64) -> u32 {
        let Some(last) = self.last.replace(now) else {
            return 0;
        };
        // Relojes que van hacia atrás (cambio de pestaña en web) se ignoran
        let delta = (now - last).max(0.0);
        self.carry += delta;
        let ticks = self.carry.floor();
        self.carry -= ticks;
        ticks as u32
    }

    /// Segundos que faltan para el próximo tick, para programar el repintado.
    pub fn until_next_tick(&self) -> f64 {
        (1.0 - self.carry).clamp(0.0, 1.0)
    }
}
