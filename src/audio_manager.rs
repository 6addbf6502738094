//! Short synthesized cues for pickups and the end of a session.
use std::time::Duration;

use anyhow::Context;
use rand::Rng;
use rodio::source::SineWave;
use rodio::{OutputStream, OutputStreamHandle, Sink, Source};
use tracing::warn;

use crate::core::game::GameEvent;

/// A cue is a run of `(frequency Hz, duration ms)` notes.
type Cue = &'static [(f32, u64)];

const PICKUP: Cue = &[(880.0, 70), (1320.0, 110)];
const WIN: Cue = &[(523.0, 120), (659.0, 120), (784.0, 120), (1047.0, 260)];
const LOSE: Cue = &[(392.0, 180), (330.0, 180), (262.0, 360)];

/// Cue and pitch factor for an event. Each pickup sounds a little higher.
pub fn cue_for(event: &GameEvent) -> Option<(Cue, f32)> {
    match *event {
        GameEvent::GoalCollected { collected, total } => {
            Some((PICKUP, 1.0 + 0.25 * collected as f32 / total.max(1) as f32))
        }
        GameEvent::Won | GameEvent::TimeUp { win: true } => Some((WIN, 1.0)),
        GameEvent::TimeUp { win: false } => Some((LOSE, 1.0)),
        GameEvent::Collided(_) => None,
    }
}

pub struct AudioManager {
    _stream: OutputStream,
    handle: OutputStreamHandle,
    volume: f32,
}

impl AudioManager {
    pub fn new() -> anyhow::Result<Self> {
        let (_stream, handle) =
            OutputStream::try_default().context("open default audio output")?;
        Ok(Self { _stream, handle, volume: 0.2 })
    }

    /// Plays a cue on its own sink so overlapping cues all sound.
    fn play(&self, cue: Cue, pitch: f32) {
        let sink = match Sink::try_new(&self.handle) {
            Ok(sink) => sink,
            Err(err) => {
                warn!(%err, "could not create audio sink");
                return;
            }
        };
        // slight detune so repeated pickups don't sound identical
        let detune: f32 = rand::thread_rng().gen_range(0.97..1.03);
        for &(freq, ms) in cue {
            sink.append(
                SineWave::new(freq * pitch * detune)
                    .take_duration(Duration::from_millis(ms))
                    .amplify(self.volume),
            );
        }
        sink.detach();
    }

    pub fn handle_events(&self, events: &[GameEvent]) {
        for (cue, pitch) in events.iter().filter_map(cue_for) {
            self.play(cue, pitch);
        }
    }
}
