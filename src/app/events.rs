use crate::engine::UiCollaborator;
use crate::model::View;
use crate::sound::Tone;

/// Buzón donde el motor deja sus avisos; la app lo vacía una vez por frame.
#[derive(Debug, Default)]
pub struct UiEvents {
    toasts: Vec<String>,
    view: Option<View>,
    stats_dirty: bool,
    tone: Option<Tone>,
}

#[derive(Debug, Default, PartialEq)]
pub struct Drained {
    /// Sólo el último aviso llega a verse.
    pub toast: Option<String>,
    pub view: Option<View>,
    pub stats_dirty: bool,
    pub tone: Option<Tone>,
}

impl UiEvents {
    pub fn drain(&mut self) -> Drained {
        let toast = self.toasts.pop();
        self.toasts.clear();
        Drained {
            toast,
            view: self.view.take(),
            stats_dirty: std::mem::take(&mut self.stats_dirty),
            tone: self.tone.take(),
        }
    }
}

impl UiCollaborator for UiEvents {
    fn on_toast(&mut self, message: &str) {
        self.toasts.push(message.to_string());
    }

    fn on_stats_changed(&mut self) {
        self.stats_dirty = true;
    }

    fn on_view_requested(&mut self, view: View) {
        self.view = Some(view);
    }

    fn on_feedback(&mut self, tone: Tone) {
        self.tone = Some(tone);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drain_keeps_latest_toast_and_view() {
        let mut events = UiEvents::default();
        events.on_toast("first");
        events.on_toast("second");
        events.on_view_requested(View::Quiz);
        events.on_view_requested(View::Game);
        events.on_stats_changed();
        events.on_feedback(Tone::game(true));

        let drained = events.drain();
        assert_eq!(drained.toast.as_deref(), Some("second"));
        assert_eq!(drained.view, Some(View::Game));
        assert!(drained.stats_dirty);
        assert_eq!(drained.tone, Some(Tone::game(true)));
        assert_eq!(events.drain(), Drained::default());
    }
}
