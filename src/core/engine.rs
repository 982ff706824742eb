use crate::core::game::{Context, EngineCommand, Game};
use anyhow::Result;
use crossterm::event::{Event, EventStream, KeyCode, KeyEventKind};
use futures_util::StreamExt;
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Redraw cadence for games without their own tick.
const IDLE_FRAME: Duration = Duration::from_millis(50);

pub struct Engine<G: Game> {
    game: G,
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Runs until the game asks to quit, Esc is pressed, or the event stream ends.
    /// Restores the terminal before returning.
    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<G> {
        let result = self.event_loop(&mut terminal).await;
        ratatui::restore();
        result.map(|()| self.game)
    }

    async fn event_loop(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let (cmd_tx, mut cmd_rx) = tokio::sync::mpsc::unbounded_channel::<EngineCommand>();
        let ctx = Context { tx: cmd_tx };

        let mut events = EventStream::new();
        let tick_rate = self.game.tick_rate();
        let mut ticker = tokio::time::interval(tick_rate.unwrap_or(IDLE_FRAME));
        let mut last_tick = Instant::now();

        info!(?tick_rate, "engine started");

        loop {
            terminal.draw(|f| self.game.render(f))?;

            tokio::select! {
                Some(cmd) = cmd_rx.recv() => {
                    match cmd {
                        EngineCommand::Quit => {
                            info!("game requested quit");
                            break;
                        }
                    }
                }

                maybe_event = events.next() => {
                    match maybe_event {
                        Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                            if key.code == KeyCode::Esc {
                                debug!("escape pressed");
                                break;
                            }
                            self.game.handle_input(key, &ctx);
                        }
                        Some(Ok(_)) => {}
                        Some(Err(e)) => return Err(e.into()),
                        None => break,
                    }
                }

                _ = ticker.tick() => {
                    if tick_rate.is_some() {
                        let dt = last_tick.elapsed();
                        last_tick = Instant::now();
                        self.game.on_tick(dt, &ctx);
                    }
                }
            }
        }

        info!("engine stopped");
        Ok(())
    }
}
