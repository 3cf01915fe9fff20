use super::{Tone, Wave};
use wasm_bindgen::JsValue;
use web_sys::{AudioContext, OscillatorType};

/// Pitidos con Web Audio. Un solo `AudioContext`, creado en el primer pitido
/// (ya tras un gesto del usuario).
#[derive(Default)]
pub struct Beeper {
    context: Option<AudioContext>,
}

impl Beeper {
    pub fn play(&mut self, tone: Tone) {
        if let Err(e) = self.try_play(tone) {
            log::warn!("Could not play tone: {e:?}");
        }
    }

    fn try_play(&mut self, tone: Tone) -> Result<(), JsValue> {
        if self.context.is_none() {
            self.context = Some(AudioContext::new()?);
        }
        let Some(context) = &self.context else { return Ok(()) };

        let oscillator = context.create_oscillator()?;
        let gain = context.create_gain()?;
        oscillator.set_type(match tone.wave {
            Wave::Sine => OscillatorType::Sine,
            Wave::Triangle => OscillatorType::Triangle,
        });
        oscillator.frequency().set_value(tone.frequency);
        gain.gain().set_value(tone.gain);
        oscillator.connect_with_audio_node(&gain)?;
        gain.connect_with_audio_node(&context.destination())?;
        oscillator.start()?;
        oscillator.stop_with_when(context.current_time() + f64::from(tone.seconds))?;
        Ok(())
    }
}
