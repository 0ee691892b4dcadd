use tile_shooter::audio::{dispatch, AudioSink, LogAudio};
use tile_shooter::entities::{Cue, Music, Sound};

// ── dispatch ──────────────────────────────────────────────────────────────────

#[test]
fn dispatch_routes_every_cue() {
    let mut audio = LogAudio::default();
    dispatch(
        &[
            Cue::Music(Music::Level(0)),
            Cue::Sound(Sound::PlayerShoot),
            Cue::Sound(Sound::EnemyDeath),
        ],
        &mut audio,
    );
    assert_eq!(audio.current_music, Some(Music::Level(0)));
    assert_eq!(audio.sounds_played, 2);

    dispatch(&[Cue::StopAllMusic, Cue::SetMute(true), Cue::Sound(Sound::PlayerDamage)], &mut audio);
    assert_eq!(audio.current_music, None);
    assert!(audio.muted);
    assert_eq!(audio.sounds_played, 2);
}

#[derive(Default)]
struct Recorder(Vec<String>);

impl AudioSink for Recorder {
    fn play_sound(&mut self, sound: Sound) {
        self.0.push(format!("sound {sound:?}"));
    }
    fn play_music(&mut self, music: Music) {
        self.0.push(format!("music {music:?}"));
    }
    fn stop_all_music(&mut self) {
        self.0.push("stop".to_string());
    }
    fn set_mute(&mut self, mute: bool) {
        self.0.push(format!("mute {mute}"));
    }
}

#[test]
fn dispatch_preserves_order() {
    let mut rec = Recorder::default();
    dispatch(&[Cue::StopAllMusic, Cue::Music(Music::GameOver), Cue::SetMute(false)], &mut rec);
    assert_eq!(rec.0, vec!["stop", "music GameOver", "mute false"]);
}
