//! Opacity transitions between screens.
//!
//! A [`Fade`] steps opacity by 0.01 once every `speed` milliseconds. A
//! [`Transition`] chains a fade-out of one screen with a fade-in of another
//! and hands back its completion payload once both are done. Both are driven
//! by the engine tick; nothing here touches game state.

use std::time::Duration;

use crate::core::config::{MAX_FADE_SPEED, MIN_FADE_SPEED};

/// Opacity is tracked in hundredths so repeated steps never drift.
const FULL: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FadeDirection {
    Out,
    In,
}

/// Clamps a requested speed into the supported 1..=10 range.
pub fn clamp_speed(speed: u32) -> u32 {
    speed.clamp(MIN_FADE_SPEED, MAX_FADE_SPEED)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fade {
    direction: FadeDirection,
    level: u8,
    step: Duration,
    carry: Duration,
}

impl Fade {
    pub fn out(speed: u32) -> Self {
        Self::new(FadeDirection::Out, speed)
    }

    pub fn fade_in(speed: u32) -> Self {
        Self::new(FadeDirection::In, speed)
    }

    fn new(direction: FadeDirection, speed: u32) -> Self {
        let level = match direction {
            FadeDirection::Out => FULL,
            FadeDirection::In => 0,
        };
        Self {
            direction,
            level,
            step: Duration::from_millis(u64::from(clamp_speed(speed))),
            carry: Duration::ZERO,
        }
    }

    pub fn opacity(&self) -> f32 {
        f32::from(self.level) / f32::from(FULL)
    }

    pub fn is_finished(&self) -> bool {
        match self.direction {
            FadeDirection::Out => self.level == 0,
            FadeDirection::In => self.level == FULL,
        }
    }

    /// Applies every step that fits into `elapsed` (plus leftover time from
    /// earlier calls). Returns `true` once the fade is complete.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        if self.is_finished() {
            return true;
        }
        self.carry += elapsed;
        let steps = (self.carry.as_nanos() / self.step.as_nanos()).min(u128::from(FULL)) as u8;
        self.carry = Duration::from_nanos((self.carry.as_nanos() % self.step.as_nanos()) as u64);

        self.level = match self.direction {
            FadeDirection::Out => self.level.saturating_sub(steps),
            FadeDirection::In => self.level.saturating_add(steps).min(FULL),
        };
        self.is_finished()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Stage {
    FadingOut(Fade),
    FadingIn(Fade),
    Done,
}

/// Fades `from` out, then `to` in, then yields `on_complete` exactly once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition<S, T> {
    from: S,
    to: S,
    speed: u32,
    stage: Stage,
    on_complete: Option<T>,
}

impl<S: Copy, T> Transition<S, T> {
    pub fn new(from: S, to: S, speed: u32, on_complete: T) -> Self {
        Self {
            from,
            to,
            speed,
            stage: Stage::FadingOut(Fade::out(speed)),
            on_complete: Some(on_complete),
        }
    }

    pub fn target(&self) -> S {
        self.to
    }

    pub fn is_done(&self) -> bool {
        self.stage == Stage::Done
    }

    /// The screen to draw right now and the opacity to draw it with.
    pub fn visible(&self) -> (S, f32) {
        match &self.stage {
            Stage::FadingOut(fade) => (self.from, fade.opacity()),
            Stage::FadingIn(fade) => (self.to, fade.opacity()),
            Stage::Done => (self.to, 1.0),
        }
    }

    /// Advances the running fade. Returns the completion payload on the
    /// call that finishes the fade-in, `None` otherwise.
    pub fn advance(&mut self, elapsed: Duration) -> Option<T> {
        match &mut self.stage {
            Stage::FadingOut(fade) => {
                if fade.advance(elapsed) {
                    self.stage = Stage::FadingIn(Fade::fade_in(self.speed));
                }
                None
            }
            Stage::FadingIn(fade) => {
                if fade.advance(elapsed) {
                    self.stage = Stage::Done;
                    self.on_complete.take()
                } else {
                    None
                }
            }
            Stage::Done => None,
        }
    }
}
