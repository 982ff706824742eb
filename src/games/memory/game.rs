use crossterm::event::{KeyCode, KeyEvent};
use rand::rngs::StdRng;
use rand::Rng;
use std::time::Duration;
use tracing::{info, warn};

use super::fade::{clamp_speed, Transition};
use super::renderer;
use super::state::{Choice, MemoryGame, MoveOutcome};
use crate::core::error::GameError;
use crate::{Context, Game};

const TICK: Duration = Duration::from_millis(16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Start,
    Main,
    End,
}

/// What to do once a screen transition has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AfterFade {
    BeginRound,
    ShowResult,
    BackToStart,
}

/// Result of the last move, shown under the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Correct,
    Wrong,
}

/// Screens, keys and transitions around a [`MemoryGame`].
pub struct MemoryWordGame<R = StdRng> {
    state: MemoryGame<R>,
    screen: Screen,
    transition: Option<Transition<Screen, AfterFade>>,
    fade_speed: u32,
    final_score: Option<u32>,
    best_score: u32,
    feedback: Option<Feedback>,
    last_error: Option<String>,
}

impl<R: Rng> MemoryWordGame<R> {
    pub fn new(state: MemoryGame<R>, fade_speed: u32) -> Self {
        Self {
            state,
            screen: Screen::Start,
            transition: None,
            fade_speed: clamp_speed(fade_speed),
            final_score: None,
            best_score: 0,
            feedback: None,
            last_error: None,
        }
    }

    pub fn state(&self) -> &MemoryGame<R> {
        &self.state
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    pub fn is_transitioning(&self) -> bool {
        self.transition.is_some()
    }

    /// The screen being drawn and its opacity.
    pub fn visible(&self) -> (Screen, f32) {
        match &self.transition {
            Some(t) => t.visible(),
            None => (self.screen, 1.0),
        }
    }

    pub fn final_score(&self) -> Option<u32> {
        self.final_score
    }

    pub fn best_score(&self) -> u32 {
        self.best_score
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn fade_to(&mut self, to: Screen, then: AfterFade) {
        self.transition = Some(Transition::new(self.screen, to, self.fade_speed, then));
    }

    fn choose(&mut self, choice: Choice) {
        match self.state.play(choice) {
            Ok(MoveOutcome::Continue { correct, .. }) => {
                self.last_error = None;
                self.feedback = Some(if correct { Feedback::Correct } else { Feedback::Wrong });
            }
            Ok(MoveOutcome::RoundOver(summary)) => {
                // The Main screen fades out on the final numbers; the round
                // is reset once the End screen is in.
                self.final_score = Some(summary.final_score);
                self.best_score = self.best_score.max(summary.final_score);
                self.feedback = Some(Feedback::Wrong);
                self.fade_to(Screen::End, AfterFade::ShowResult);
            }
            Err(e) => self.record_error(e),
        }
    }

    fn finish(&mut self, action: AfterFade) {
        match action {
            AfterFade::BeginRound => {
                if let Err(e) = self.state.init(true) {
                    self.record_error(e);
                }
            }
            AfterFade::ShowResult => {
                info!(final_score = ?self.final_score, "showing result");
                self.feedback = None;
                if let Err(e) = self.state.reset_game() {
                    self.record_error(e);
                }
            }
            AfterFade::BackToStart => {
                self.final_score = None;
            }
        }
    }

    fn record_error(&mut self, e: GameError) {
        warn!(error = %e, "game state rejected operation");
        self.last_error = Some(e.to_string());
    }
}

impl<R: Rng> Game for MemoryWordGame<R> {
    fn tick_rate(&self) -> Option<Duration> {
        Some(TICK)
    }

    fn on_tick(&mut self, dt: Duration, _ctx: &Context) {
        let Some(mut transition) = self.transition.take() else {
            return;
        };
        let action = transition.advance(dt);
        if transition.is_done() {
            self.screen = transition.target();
        } else {
            self.transition = Some(transition);
        }
        if let Some(action) = action {
            self.finish(action);
        }
    }

    fn handle_input(&mut self, event: KeyEvent, ctx: &Context) {
        if let KeyCode::Char('q') = event.code {
            ctx.quit();
            return;
        }
        if self.transition.is_some() {
            return;
        }

        match (self.screen, event.code) {
            (Screen::Start, KeyCode::Enter | KeyCode::Char(' ')) => {
                self.last_error = None;
                self.fade_to(Screen::Main, AfterFade::BeginRound);
            }
            (Screen::Main, KeyCode::Left) => self.choose(Choice::New),
            (Screen::Main, KeyCode::Right) => self.choose(Choice::Old),
            (Screen::Main, KeyCode::Char(c)) => {
                if let Some(choice) = Choice::parse(c.encode_utf8(&mut [0; 4])) {
                    self.choose(choice);
                }
            }
            (Screen::End, KeyCode::Char('r') | KeyCode::Enter) => {
                self.fade_to(Screen::Start, AfterFade::BackToStart);
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        renderer::render(frame, self);
    }
}
