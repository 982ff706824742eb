/// Core game interface driven by the engine loop
use crossterm::event::KeyEvent;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

/// Requests a game can make of the engine while handling an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    Quit,
}

/// Handle passed to every game callback.
#[derive(Clone)]
pub struct Context {
    pub tx: UnboundedSender<EngineCommand>,
}

impl Context {
    /// Asks the engine to leave its loop after the current event.
    pub fn quit(&self) {
        let _ = self.tx.send(EngineCommand::Quit);
    }
}

/// Main game trait. The engine owns the terminal and the clock; a game only
/// reacts to keys and ticks and draws itself.
pub trait Game {
    /// How often `on_tick` should run. `None` for games that only react to keys.
    fn tick_rate(&self) -> Option<Duration>;

    fn on_tick(&mut self, dt: Duration, ctx: &Context);

    fn handle_input(&mut self, event: KeyEvent, ctx: &Context);

    fn render(&self, frame: &mut ratatui::Frame);
}
