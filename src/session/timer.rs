//! Temporizadores explícitos ligados a una sesión.
//!
//! Cada temporizador lleva el `SessionId` con el que se programó. Empezar,
//! parar o reiniciar una sesión crea un id nuevo y anula todo lo pendiente, y
//! lo que dispare con un id viejo se descarta.

/// Identificador de una sesión concreta. Nunca se reutiliza.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SessionId(u64);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerKind {
    /// Tick de un segundo de la cuenta atrás del juego.
    GameCountdown,
    /// Fin de la pausa de feedback tras un acierto en el juego.
    GameNextRound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Fired {
    pub session: SessionId,
    pub kind: TimerKind,
}

#[derive(Debug)]
struct Interval {
    session: SessionId,
    kind: TimerKind,
    period: f64,
    next_due: f64,
}

#[derive(Debug)]
struct Deferred {
    session: SessionId,
    kind: TimerKind,
    due: f64,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    last_id: u64,
    current: Option<SessionId>,
    interval: Option<Interval>,
    deferred: Vec<Deferred>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abre una sesión nueva y cancela todo lo anterior.
    pub fn begin_session(&mut self) -> SessionId {
        self.cancel_all();
        self.last_id += 1;
        let id = SessionId(self.last_id);
        self.current = Some(id);
        id
    }

    /// Cierra la sesión actual; nada de lo programado llegará a disparar.
    pub fn end_session(&mut self) {
        self.cancel_all();
        self.current = None;
    }

    pub fn current(&self) -> Option<SessionId> {
        self.current
    }

    pub fn cancel_all(&mut self) {
        self.interval = None;
        self.deferred.clear();
    }

    /// Sólo hay un intervalo a la vez: programar otro sustituye al anterior.
    pub fn set_interval(&mut self, session: SessionId, kind: TimerKind, period: f64, now: f64) {
        self.interval = Some(Interval {
            session,
            kind,
            period,
            next_due: now + period,
        });
    }

    pub fn clear_interval(&mut self) {
        self.interval = None;
    }

    pub fn has_interval(&self) -> bool {
        self.interval.is_some()
    }

    pub fn defer(&mut self, session: SessionId, kind: TimerKind, delay: f64, now: f64) {
        self.deferred.push(Deferred {
            session,
            kind,
            due: now + delay,
        });
    }

    pub fn pending_deferred(&self) -> usize {
        self.deferred.len()
    }

    /// Próximo instante en que algo vence (para pedir repintado).
    pub fn next_due(&self) -> Option<f64> {
        let interval = self.interval.as_ref().map(|i| i.next_due);
        let deferred = self.deferred.iter().map(|d| d.due).reduce(f64::min);
        match (interval, deferred) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    /// Devuelve lo vencido hasta `now`, en orden de vencimiento. Si el frame
    /// llegó tarde, un intervalo dispara una vez por periodo perdido.
    pub fn poll(&mut self, now: f64) -> Vec<Fired> {
        let mut due: Vec<(f64, Fired)> = Vec::new();

        if let Some(interval) = self.interval.as_mut() {
            while interval.next_due <= now {
                due.push((
                    interval.next_due,
                    Fired {
                        session: interval.session,
                        kind: interval.kind,
                    },
                ));
                interval.next_due += interval.period;
            }
        }

        let mut i = 0;
        while i < self.deferred.len() {
            if self.deferred[i].due <= now {
                let d = self.deferred.remove(i);
                due.push((
                    d.due,
                    Fired {
                        session: d.session,
                        kind: d.kind,
                    },
                ));
            } else {
                i += 1;
            }
        }

        due.sort_by(|a, b| a.0.total_cmp(&b.0));
        let current = self.current;
        due.into_iter()
            .map(|(_, fired)| fired)
            .filter(|fired| {
                let live = current == Some(fired.session);
                if !live {
                    log::debug!("Dropping stale {:?} timer", fired.kind);
                }
                live
            })
            .collect()
    }
}
