//! Strategy: the player forwards to whichever audio backend it was given.

use log::info;
#[cfg(test)]
use mockall::automock;

#[cfg_attr(test, automock)]
pub trait AudioStrategy {
    fn play(&mut self);
    fn pause(&mut self);
    fn name(&self) -> &'static str;
}

pub struct Html5AudioPlayer;
impl AudioStrategy for Html5AudioPlayer {
    fn play(&mut self) {
        info!("Playing HTML5 audio...");
    }

    fn pause(&mut self) {
        info!("Pausing HTML5 audio...");
    }

    fn name(&self) -> &'static str {
        "HTML5"
    }
}

pub struct SwfAudioPlayer;
impl AudioStrategy for SwfAudioPlayer {
    fn play(&mut self) {
        info!("Playing SWF audio...");
    }

    fn pause(&mut self) {
        info!("Pausing SWF audio...");
    }

    fn name(&self) -> &'static str {
        "SWF"
    }
}

pub struct AudioPlayer {
    strategy: Box<dyn AudioStrategy>,
}

impl AudioPlayer {
    pub fn new(strategy: Box<dyn AudioStrategy>) -> Self {
        Self { strategy }
    }

    pub fn set_strategy(&mut self, strategy: Box<dyn AudioStrategy>) {
        self.strategy = strategy;
    }

    pub fn strategy_name(&self) -> &'static str {
        self.strategy.name()
    }

    pub fn play_audio(&mut self) {
        self.strategy.play();
    }

    pub fn pause_audio(&mut self) {
        self.strategy.pause();
    }
}
