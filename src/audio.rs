//! Audio contract. The simulation only raises cues; whatever plays them
//! implements [`AudioSink`].

use log::trace;

use crate::entities::AudioCue;

pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);

    /// Play every cue raised during one tick, in order.
    fn play_all(&mut self, cues: &[AudioCue]) {
        for &cue in cues {
            self.play(cue);
        }
    }
}

/// Sink that only records cues in the log.
#[derive(Debug, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, cue: AudioCue) {
        trace!("audio cue {cue:?}");
    }
}

/// Terminal sink: rings the bell for the loud cues, ignores the rest.
#[derive(Debug)]
pub struct BellSink<W: std::io::Write> {
    out: W,
}

impl<W: std::io::Write> BellSink<W> {
    pub fn new(out: W) -> Self {
        BellSink { out }
    }
}

impl<W: std::io::Write> AudioSink for BellSink<W> {
    fn play(&mut self, cue: AudioCue) {
        trace!("audio cue {cue:?}");
        if matches!(cue, AudioCue::BossExplosion | AudioCue::PhaseChange) {
            // A failed bell is not worth interrupting the game for.
            let _ = self.out.write_all(b"\x07").and_then(|_| self.out.flush());
        }
    }
}

/// Sink that keeps every cue, for tests and replays.
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub played: Vec<AudioCue>,
}

impl AudioSink for RecordingSink {
    fn play(&mut self, cue: AudioCue) {
        self.played.push(cue);
    }
}
