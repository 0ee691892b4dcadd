//! The audio side of the simulation boundary. The core only emits `Cue`s;
//! `dispatch` hands them to whatever `AudioSink` the frontend owns.

use crate::entities::{Cue, Music, Sound};

/// Fire-and-forget playback. Implementations handle (and log) their own
/// failures; the simulation never waits on them.
pub trait AudioSink {
    fn play_sound(&mut self, sound: Sound);
    fn play_music(&mut self, music: Music);
    fn stop_all_music(&mut self);
    fn set_mute(&mut self, mute: bool);
}

pub fn dispatch<S: AudioSink + ?Sized>(cues: &[Cue], sink: &mut S) {
    for cue in cues {
        match *cue {
            Cue::Sound(sound) => sink.play_sound(sound),
            Cue::Music(music) => sink.play_music(music),
            Cue::StopAllMusic => sink.stop_all_music(),
            Cue::SetMute(mute) => sink.set_mute(mute),
        }
    }
}

/// A sink with no speakers: it tracks what would be playing and traces every
/// request. Used by the terminal frontend.
#[derive(Debug, Default)]
pub struct LogAudio {
    pub muted: bool,
    pub current_music: Option<Music>,
    pub sounds_played: u64,
}

impl AudioSink for LogAudio {
    fn play_sound(&mut self, sound: Sound) {
        if self.muted {
            return;
        }
        self.sounds_played += 1;
        tracing::trace!(?sound, "Playing sound");
    }

    fn play_music(&mut self, music: Music) {
        tracing::trace!(?music, muted = self.muted, "Playing music");
        self.current_music = Some(music);
    }

    fn stop_all_music(&mut self) {
        if let Some(music) = self.current_music.take() {
            tracing::trace!(?music, "Stopped music");
        }
    }

    fn set_mute(&mut self, mute: bool) {
        tracing::debug!(mute, "Audio mute toggled");
        self.muted = mute;
    }
}
