//! Pitidos cortos de acierto y fallo.
//!
//! `Tone` describe el sonido y sabe sintetizarlo; cada plataforma tiene su
//! `Beeper` con `play(tone)`.

use std::f32::consts::TAU;

#[cfg(all(not(target_arch = "wasm32"), feature = "sound"))]
mod native;
#[cfg(all(not(target_arch = "wasm32"), feature = "sound"))]
pub use native::Beeper;

#[cfg(target_arch = "wasm32")]
mod web;
#[cfg(target_arch = "wasm32")]
pub use web::Beeper;

const GAIN: f32 = 0.06;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wave {
    Sine,
    Triangle,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tone {
    pub wave: Wave,
    pub frequency: f32,
    pub gain: f32,
    pub seconds: f32,
}

impl Tone {
    pub fn quiz(good: bool) -> Self {
        Self {
            wave: Wave::Sine,
            frequency: if good { 740.0 } else { 220.0 },
            gain: GAIN,
            seconds: 0.09,
        }
    }

    pub fn game(good: bool) -> Self {
        Self {
            wave: Wave::Triangle,
            frequency: if good { 660.0 } else { 180.0 },
            gain: GAIN,
            seconds: 0.07,
        }
    }

    /// Muestra en el instante `t` (segundos desde el inicio); silencio fuera del pitido.
    pub fn level_at(&self, t: f32) -> f32 {
        if !(0.0..self.seconds).contains(&t) {
            return 0.0;
        }
        let phase = (t * self.frequency).fract();
        let wave = match self.wave {
            Wave::Sine => (phase * TAU).sin(),
            Wave::Triangle => 1.0 - 4.0 * (phase - 0.5).abs(),
        };
        wave * self.gain
    }
}

/// Sin salida de audio: compilado sin la feature `sound`.
#[cfg(all(not(target_arch = "wasm32"), not(feature = "sound")))]
#[derive(Default)]
pub struct Beeper;

#[cfg(all(not(target_arch = "wasm32"), not(feature = "sound")))]
impl Beeper {
    pub fn play(&mut self, tone: Tone) {
        log::debug!("Tone {tone:?} skipped (built without the `sound` feature)");
    }
}
