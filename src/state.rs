//! State: an audio player whose buttons behave differently per state.

use std::fmt;

use log::info;
#[cfg(test)]
use mockall::automock;

/// Third-party playback library the player drives.
#[cfg_attr(test, automock)]
pub trait AudioLib {
    fn play(&mut self);
    fn pause(&mut self);
    fn stop(&mut self);
}

#[derive(Debug, Default)]
pub struct ConsoleAudioLib;

impl AudioLib for ConsoleAudioLib {
    fn play(&mut self) {
        info!("Playing audio...");
    }

    fn pause(&mut self) {
        info!("Pausing audio...");
    }

    fn stop(&mut self) {
        info!("Stopping audio...");
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerState {
    Playing,
    Paused,
    Stopped,
}

impl PlayerState {
    pub fn name(self) -> &'static str {
        match self {
            PlayerState::Playing => "Playing",
            PlayerState::Paused => "Paused",
            PlayerState::Stopped => "Stopped",
        }
    }
}

impl fmt::Display for PlayerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

pub struct AudioPlayer<L> {
    lib: L,
    state: PlayerState,
}

impl<L: AudioLib> AudioPlayer<L> {
    pub fn new(lib: L, initial: PlayerState) -> Self {
        Self {
            lib,
            state: initial,
        }
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn play_audio(&mut self) {
        match self.state {
            PlayerState::Playing => info!("Already playing ... nothing to do"),
            PlayerState::Paused | PlayerState::Stopped => {
                self.lib.play();
                self.transition(PlayerState::Playing);
            }
        }
    }

    pub fn pause_audio(&mut self) {
        match self.state {
            PlayerState::Playing => {
                self.lib.pause();
                self.transition(PlayerState::Paused);
            }
            PlayerState::Paused => info!("Already paused ... nothing to do"),
            PlayerState::Stopped => info!("Can't pause when stopped"),
        }
    }

    pub fn stop_audio(&mut self) {
        match self.state {
            PlayerState::Playing | PlayerState::Paused => {
                self.lib.stop();
                self.transition(PlayerState::Stopped);
            }
            PlayerState::Stopped => info!("Already stopped ... nothing to do"),
        }
    }

    fn transition(&mut self, next: PlayerState) {
        info!("{} -> {}", self.state, next);
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lib_expecting(play: usize, pause: usize, stop: usize) -> MockAudioLib {
        let mut lib = MockAudioLib::new();
        lib.expect_play().times(play).return_const(());
        lib.expect_pause().times(pause).return_const(());
        lib.expect_stop().times(stop).return_const(());
        lib
    }

    // Paused

    #[test]
    fn test_paused_to_playing() {
        let mut player = AudioPlayer::new(lib_expecting(1, 0, 0), PlayerState::Paused);
        player.play_audio();
        assert_eq!(player.state(), PlayerState::Playing);
    }

    #[test]
    fn test_paused_to_stopped() {
        let mut player = AudioPlayer::new(lib_expecting(0, 0, 1), PlayerState::Paused);
        player.stop_audio();
        assert_eq!(player.state(), PlayerState::Stopped);
    }

    #[test]
    fn test_does_not_pause_if_already_paused() {
        let mut player = AudioPlayer::new(lib_expecting(0, 0, 0), PlayerState::Paused);
        player.pause_audio();
        assert_eq!(player.state(), PlayerState::Paused);
    }

    // Playing

    #[test]
    fn test_playing_to_paused() {
        let mut player = AudioPlayer::new(lib_expecting(0, 1, 0), PlayerState::Playing);
        player.pause_audio();
        assert_eq!(player.state(), PlayerState::Paused);
    }

    #[test]
    fn test_playing_to_stopped() {
        let mut player = AudioPlayer::new(lib_expecting(0, 0, 1), PlayerState::Playing);
        player.stop_audio();
        assert_eq!(player.state(), PlayerState::Stopped);
    }

    #[test]
    fn test_does_not_play_if_already_playing() {
        let mut player = AudioPlayer::new(lib_expecting(0, 0, 0), PlayerState::Playing);
        player.play_audio();
        assert_eq!(player.state(), PlayerState::Playing);
    }

    // Stopped

    #[test]
    fn test_stopped_to_playing() {
        let mut player = AudioPlayer::new(lib_expecting(1, 0, 0), PlayerState::Stopped);
        player.play_audio();
        assert_eq!(player.state(), PlayerState::Playing);
    }

    #[test]
    fn test_does_not_pause_if_stopped() {
        let mut player = AudioPlayer::new(lib_expecting(0, 0, 0), PlayerState::Stopped);
        player.pause_audio();
        assert_eq!(player.state(), PlayerState::Stopped);
    }

    #[test]
    fn test_does_not_stop_if_already_stopped() {
        let mut player = AudioPlayer::new(lib_expecting(0, 0, 0), PlayerState::Stopped);
        player.stop_audio();
        assert_eq!(player.state(), PlayerState::Stopped);
    }

    #[test]
    fn test_full_cycle_with_console_lib() {
        let mut player = AudioPlayer::new(ConsoleAudioLib, PlayerState::Stopped);
        player.play_audio();
        player.pause_audio();
        player.play_audio();
        player.stop_audio();
        assert_eq!(player.state().to_string(), "Stopped");
    }
}
