use super::*;

/// Atajos de teclado globales.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shortcut {
    /// Esc
    GoHome,
    /// Ctrl/Cmd + K
    FocusSearch,
}

impl CourseApp {
    pub fn go_to(&mut self, view: View) {
        if self.view != view {
            log::debug!("View {:?} -> {view:?}", self.view);
        }
        self.view = view;
    }

    /// Pestaña anterior (-1) o siguiente (+1), con vuelta en los extremos.
    pub fn step_view(&mut self, delta: isize) {
        self.go_to(self.view.step(delta));
    }

    /// Aplica un atajo; el de búsqueda sólo vale en la vista de lecciones.
    pub fn on_shortcut(&mut self, shortcut: Shortcut) {
        match shortcut {
            Shortcut::GoHome => self.go_to(View::Home),
            Shortcut::FocusSearch => {
                if self.view == View::Lessons {
                    self.focus_search = true;
                }
            }
        }
    }

    /// Avanza el reloj de la app: temporizadores del motor, avisos y chispas.
    pub fn advance(&mut self, now: f64) {
        self.now = now;
        self.engine.tick(now);
        self.pump_events();
        self.sparkles.retain(|s| now - s.born < SPARKLE_SECONDS);
        if self.toast.as_ref().is_some_and(|t| now >= t.until) {
            self.toast = None;
        }
    }

    /// Recoge lo que el motor pidió desde el último frame.
    pub fn pump_events(&mut self) {
        let drained = self.engine.ui_mut().drain();
        if let Some(message) = drained.toast {
            self.show_toast(message);
        }
        if let Some(view) = drained.view {
            self.go_to(view);
        }
        if drained.tone.is_some() {
            self.tone = drained.tone;
        }
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            until: self.now + TOAST_SECONDS,
        });
    }

    pub fn visible_toast(&self) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|t| self.now < t.until)
            .map(|t| t.message.as_str())
    }

    /// Próximo instante en que hay que repintar aunque no haya entrada.
    pub fn next_wake(&self) -> Option<f64> {
        let toast = self.toast.as_ref().map(|t| t.until);
        let timer = self.engine.next_timer_due();
        let sparkle = (!self.sparkles.is_empty()).then_some(self.now);
        [toast, timer, sparkle].into_iter().flatten().reduce(f64::min)
    }
}
