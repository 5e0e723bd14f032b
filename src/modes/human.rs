use anyhow::{Context, Result};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::stderr;
use tokio::time::{interval, MissedTickBehavior};
use tracing::info;

use crate::game::{Action, Direction, GameConfig, GameEngine, GameState};
use crate::input::{InputEvent, InputSource, TerminalInput};
use crate::metrics::GameMetrics;
use crate::render::{draw_scene, Palette, Renderer, Status, TerminalGuard, TerminalRenderer};

/// Whether the loop should run another tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Stop,
}

/// Keyboard-driven play in the terminal
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    palette: Palette,
    /// Turn requests seen since the last tick, oldest first
    pending_directions: Vec<Direction>,
}

impl HumanMode {
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;
        let mut engine = GameEngine::new(config);
        let state = engine.reset()?;

        Ok(Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            palette: Palette::default(),
            pending_directions: Vec::new(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Take over the terminal and play until the player quits
    pub async fn run(&mut self) -> Result<()> {
        let _guard = TerminalGuard::acquire("Snake")?;

        let backend = CrosstermBackend::new(stderr());
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.clear().context("Failed to clear terminal")?;

        let config = self.engine.config();
        let mut renderer = TerminalRenderer::new(terminal, config.grid_width, config.grid_height);
        let mut input = TerminalInput::new();

        self.run_loop(&mut renderer, &mut input).await
    }

    /// Drive ticks at the configured rate until input asks to stop
    pub async fn run_loop<R, I>(&mut self, renderer: &mut R, input: &mut I) -> Result<()>
    where
        R: Renderer + ?Sized,
        I: InputSource + ?Sized,
    {
        let mut tick_timer = interval(self.engine.config().tick_interval());
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        info!(
            tick_rate = self.engine.config().tick_rate,
            "game loop started"
        );

        loop {
            tick_timer.tick().await;

            let events = input.drain()?;
            if self.handle_events(&events) == LoopControl::Stop {
                break;
            }

            self.update_game()?;
            self.draw(renderer)?;
        }

        info!(
            score = self.state.score,
            record = self.state.record,
            ticks = self.metrics.ticks,
            "quit"
        );

        Ok(())
    }

    /// Buffer turns; a quit anywhere in the batch stops the loop
    pub fn handle_events(&mut self, events: &[InputEvent]) -> LoopControl {
        for event in events {
            match *event {
                InputEvent::Turn(direction) => self.pending_directions.push(direction),
                InputEvent::Quit => return LoopControl::Stop,
                InputEvent::Ignored => {}
            }
        }

        LoopControl::Continue
    }

    pub fn update_game(&mut self) -> Result<()> {
        let action = Action::from_requests(self.state.snake.heading(), &self.pending_directions);
        self.pending_directions.clear();

        let result = self.engine.tick(&mut self.state, action)?;
        self.metrics.on_tick(&result);

        Ok(())
    }

    pub fn draw<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> Result<()> {
        self.metrics.update();
        renderer.set_status(&Status {
            score: self.state.score,
            record: self.state.record,
            resets: self.metrics.resets,
            elapsed: self.metrics.format_time(),
        });

        draw_scene(
            renderer,
            &self.state,
            &self.palette,
            self.engine.config().cell_width,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Food, Position};
    use crate::render::renderer::testing::RecordingRenderer;
    use std::collections::VecDeque;

    /// Hands out one pre-recorded batch per tick, then nothing
    struct ScriptedInput {
        batches: VecDeque<Vec<InputEvent>>,
    }

    impl ScriptedInput {
        fn new(batches: Vec<Vec<InputEvent>>) -> Self {
            Self {
                batches: batches.into(),
            }
        }
    }

    impl InputSource for ScriptedInput {
        fn drain(&mut self) -> Result<Vec<InputEvent>> {
            Ok(self.batches.pop_front().unwrap_or_default())
        }
    }

    fn mode() -> HumanMode {
        let mut config = GameConfig::default();
        config.seed = Some(11);
        config.tick_rate = 1000;
        HumanMode::new(config).unwrap()
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert_eq!(mode.state().score, 0);
        assert_eq!(mode.state().snake.head(), Position::new(16, 12));
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert!(HumanMode::new(GameConfig::new(0, 5)).is_err());
    }

    #[test]
    fn test_quit_stops() {
        let mut mode = mode();
        let events = [InputEvent::Turn(Direction::Up), InputEvent::Quit];
        assert_eq!(mode.handle_events(&events), LoopControl::Stop);
        assert_eq!(
            mode.handle_events(&[InputEvent::Ignored]),
            LoopControl::Continue
        );
    }

    #[test]
    fn test_one_turn_per_tick() {
        let mut mode = mode();
        mode.state.food = Food::at(Position::new(0, 0));

        // Heading right: Up then Left. Left would reverse, Up is kept.
        mode.handle_events(&[
            InputEvent::Turn(Direction::Up),
            InputEvent::Turn(Direction::Left),
        ]);
        mode.update_game().unwrap();

        assert_eq!(mode.state.snake.heading(), Direction::Up);
        assert_eq!(mode.state.snake.head(), Position::new(16, 11));

        // The buffer is spent
        mode.update_game().unwrap();
        assert_eq!(mode.state.snake.head(), Position::new(16, 10));
    }

    #[test]
    fn test_draw_reports_status() {
        let mut mode = mode();
        mode.state.score = 2;
        mode.state.record = 5;

        let mut renderer = RecordingRenderer::default();
        mode.draw(&mut renderer).unwrap();

        assert_eq!(renderer.status.score, 2);
        assert_eq!(renderer.status.record, 5);
        assert_eq!(renderer.frames, 1);
        assert_eq!(renderer.cells.len(), 2);
    }

    #[tokio::test]
    async fn test_run_loop_until_quit() {
        let mut mode = mode();
        mode.state.food = Food::at(Position::new(0, 0));

        let mut input = ScriptedInput::new(vec![
            vec![],
            vec![InputEvent::Turn(Direction::Down)],
            vec![InputEvent::Ignored],
            vec![InputEvent::Quit],
        ]);
        let mut renderer = RecordingRenderer::default();

        mode.run_loop(&mut renderer, &mut input).await.unwrap();

        // Three ticks ran before the quit batch
        assert_eq!(renderer.frames, 3);
        assert_eq!(mode.metrics.ticks, 3);
        assert_eq!(mode.state.snake.head(), Position::new(17, 14));
        assert_eq!(mode.state.snake.heading(), Direction::Down);
    }
}
