//! Sound effects and other client capabilities the game notifies but never
//! depends on.

pub mod wake_lock;

use once_cell::sync::{Lazy, OnceCell};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};
use tokio::sync::mpsc;

use crate::websocket::messages::ServerMessage;

pub use wake_lock::{WakeLock, WakeLockState};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum EffectKind {
    WordFound,
    PuzzleComplete,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Waveform {
    Sine,
    Triangle,
}

/// One oscillator note, scheduled `delay_ms` after the effect starts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub duration_ms: u32,
    pub waveform: Waveform,
    pub delay_ms: u32,
}

/// Tones for each effect: a short blip for a word, a C major arpeggio for
/// the finished puzzle.
static TONE_BANK: Lazy<HashMap<EffectKind, Vec<Tone>>> = Lazy::new(|| {
    let mut map = HashMap::new();

    map.insert(
        EffectKind::WordFound,
        vec![Tone {
            frequency_hz: 600.0,
            duration_ms: 100,
            waveform: Waveform::Triangle,
            delay_ms: 0,
        }],
    );

    let arpeggio: [(f32, u32, u32); 3] = [(523.25, 150, 0), (659.25, 150, 150), (783.99, 200, 300)];
    map.insert(
        EffectKind::PuzzleComplete,
        arpeggio
            .into_iter()
            .map(|(frequency_hz, duration_ms, delay_ms)| Tone {
                frequency_hz,
                duration_ms,
                waveform: Waveform::Sine,
                delay_ms,
            })
            .collect(),
    );

    map
});

/// Process-wide audio state shared by every session.
#[derive(Debug)]
pub struct AudioContext {
    /// Peak gain applied by the client to every tone.
    pub gain: f32,
}

impl AudioContext {
    pub fn tones(&self, kind: EffectKind) -> &'static [Tone] {
        TONE_BANK.get(&kind).map(Vec::as_slice).unwrap_or_default()
    }
}

static AUDIO_CONTEXT: OnceCell<AudioContext> = OnceCell::new();

/// The shared audio context, created on first use.
pub fn audio_context() -> &'static AudioContext {
    AUDIO_CONTEXT.get_or_init(|| {
        tracing::debug!("Audio context initialized");
        AudioContext { gain: 0.3 }
    })
}

/// Fire-and-forget effect playback. Implementations must not block and must
/// swallow their own failures.
pub trait EffectSink: Send + Sync {
    fn play_effect(&self, kind: EffectKind);
}

/// Discards every effect.
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl EffectSink for Silent {
    fn play_effect(&self, _kind: EffectKind) {}
}

/// Forwards effects to a WebSocket connection for the client to synthesize.
///
/// Effects are queued until [`ChannelEffects::flush`], so they reach the
/// client after the replies to the message that triggered them.
#[derive(Debug)]
pub struct ChannelEffects {
    tx: mpsc::Sender<ServerMessage>,
    pending: Mutex<Vec<EffectKind>>,
}

impl ChannelEffects {
    pub fn new(tx: mpsc::Sender<ServerMessage>) -> Self {
        Self {
            tx,
            pending: Mutex::new(Vec::new()),
        }
    }

    /// Send every queued effect, oldest first.
    pub fn flush(&self) {
        let pending = std::mem::take(
            &mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner),
        );
        let context = audio_context();

        for kind in pending {
            let message = ServerMessage::PlayEffect {
                kind,
                gain: context.gain,
                tones: context.tones(kind).to_vec(),
            };

            if let Err(e) = self.tx.try_send(message) {
                tracing::warn!("Dropped {:?} effect: {}", kind, e);
            }
        }
    }
}

impl EffectSink for ChannelEffects {
    fn play_effect(&self, kind: EffectKind) {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(kind);
    }
}
