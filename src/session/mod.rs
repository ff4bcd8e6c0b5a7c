mod direction;
mod food;
mod grid;
mod snake;
mod surface;
use self::direction::Direction;
use self::grid::{Board, Cell, Velocity};
use self::snake::Snake;
use self::surface::{BufferSurface, Surface};
use crate::app::Screen;
use crate::command::Command;
use crate::consts;
use crate::options::Options;
use crate::util::{center_rect, get_display_area};
use crossterm::event::{poll, read, Event};
use log::{debug, info};
use rand::Rng;
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Margin, Rect, Size},
    text::Line,
    widgets::{Block, Widget},
    Frame,
};
use std::io;
use std::time::Instant;

/// Lifecycle of a play session
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum RunState {
    /// Waiting for the first start command
    Idle,
    /// Ticks are being scheduled
    Running,
    /// A collision ended the session; waiting for a reset command
    GameOver,
}

/// The full mutable state of one play session.  Everything the simulation
/// reads or writes lives here; rendering only ever borrows it.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct SessionState {
    board: Board,
    snake: Snake,
    food: Cell,
    velocity: Velocity,
    score: u32,
    run: RunState,
}

impl SessionState {
    fn new<R: Rng>(rng: &mut R, options: Options) -> SessionState {
        let board = Board::new(options.size.unit());
        let snake = Snake::new(board.unit());
        let food = food::place(rng, &snake, board);
        SessionState {
            board,
            snake,
            food,
            velocity: Direction::Right.velocity(board.unit()),
            score: 0,
            run: RunState::Idle,
        }
    }

    /// One simulation step: advance the snake using the last written
    /// velocity, handle food consumption, then check wall and self
    /// collisions.  A no-op unless the session is running.
    fn tick<R: Rng>(&mut self, rng: &mut R) {
        if self.run != RunState::Running {
            return;
        }
        if self.snake.advance(self.velocity, self.food) {
            self.score += 1;
            self.food = food::place(rng, &self.snake, self.board);
            debug!("food eaten; score is now {}", self.score);
        }
        if !self.board.in_bounds(self.snake.head()) || self.snake.self_collision() {
            self.run = RunState::GameOver;
            info!("game over with score {}", self.score);
        }
    }

    /// Write the shared velocity from a directional input.  The tick step
    /// reads it exactly once, so the last write before that read wins.
    fn steer(&mut self, input: Direction) {
        self.velocity = direction::steer(self.velocity, input, self.board.unit());
    }
}

/// Controller for the play screen: owns the session state, the RNG, and the
/// tick deadline, and arbitrates between timer-driven ticks and key events.
#[derive(Clone, Debug)]
pub(crate) struct Session<R = rand::rngs::ThreadRng> {
    rng: R,
    options: Options,
    state: SessionState,
    /// Deadline of the one pending tick; `None` means no tick is scheduled.
    /// Cleared on reset so that a stale tick chain cannot survive into a new
    /// session.
    next_tick: Option<Instant>,
}

impl Session<rand::rngs::ThreadRng> {
    pub(crate) fn new(options: Options) -> Session {
        Session::new_with_rng(options, rand::rng())
    }
}

impl<R: Rng> Session<R> {
    pub(crate) fn new_with_rng(options: Options, mut rng: R) -> Session<R> {
        let state = SessionState::new(&mut rng, options);
        Session {
            rng,
            options,
            state,
            next_tick: None,
        }
    }

    /// Wait for the next tick deadline or the next input event, whichever
    /// comes first.  The deadline is armed here, after the previous tick's
    /// work has completed, so the schedule is fixed-delay: drift accumulates
    /// by the cost of each tick rather than being corrected away.
    pub(crate) fn process_input(&mut self) -> io::Result<Option<Screen>> {
        if self.state.run == RunState::Running {
            if self.next_tick.is_none() {
                self.next_tick = Some(Instant::now() + self.options.speed.tick_interval());
            }
            let when = self.next_tick.expect("next_tick should be Some");
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.state.tick(&mut self.rng);
                self.next_tick = None;
                Ok(None)
            } else {
                Ok(self.handle_event(read()?))
            }
        } else {
            Ok(self.handle_event(read()?))
        }
    }

    fn handle_event(&mut self, event: Event) -> Option<Screen> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Q => return Some(Screen::Quit),
            Command::Space => self.start(),
            Command::Up => self.state.steer(Direction::Up),
            Command::Down => self.state.steer(Direction::Down),
            Command::Left => self.state.steer(Direction::Left),
            Command::Right => self.state.steer(Direction::Right),
            Command::Speed(speed) => {
                let mut options = self.options;
                options.speed = speed;
                self.apply_config(options);
            }
            Command::Size(size) => {
                let mut options = self.options;
                options.size = size;
                self.apply_config(options);
            }
        }
        None
    }

    /// Start or reset: cancel any pending tick, rebuild the session state
    /// from the current presets, and begin running.
    fn start(&mut self) {
        self.next_tick = None;
        self.state = SessionState::new(&mut self.rng, self.options);
        self.state.run = RunState::Running;
        info!(
            "session started: speed {} / size {}",
            self.options.speed, self.options.size
        );
    }

    /// Adopt a new preset pair.  A running session resets immediately with
    /// the new configuration; an idle one rebuilds its board for display;
    /// after a game over the presets take effect at the next start.
    fn apply_config(&mut self, options: Options) {
        self.options = options;
        info!(
            "config change: speed {} / size {}",
            options.speed, options.size
        );
        match self.state.run {
            RunState::Running => self.start(),
            RunState::Idle => self.state = SessionState::new(&mut self.rng, self.options),
            RunState::GameOver => (),
        }
    }
}

impl<R> Session<R> {
    pub(crate) fn draw(&self, frame: &mut Frame<'_>) {
        frame.render_widget(self, frame.area());
    }
}

/// Render pass over the session state, in a fixed order per frame: clear,
/// food, snake, then the game-over text.
fn paint<S: Surface>(state: &SessionState, surface: &mut S) {
    surface.clear();
    surface.fill_cell(state.food, consts::FOOD_SYMBOL, consts::FOOD_STYLE);
    for cell in state.snake.cells() {
        surface.fill_cell(cell, consts::SNAKE_BODY_SYMBOL, consts::SNAKE_STYLE);
        surface.stroke_cell(cell, consts::SNAKE_BORDER_STYLE);
    }
    if state.run == RunState::GameOver {
        surface.draw_text(
            consts::GAME_OVER_TEXT,
            Cell::new(Board::WIDTH / 2, Board::HEIGHT / 2),
        );
    }
}

impl<R> Widget for &Session<R> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let display = get_display_area(area);
        let [score_area, board_area, msg_area, preset_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .areas(display);
        Line::styled(
            format!("score: {}", self.state.score),
            consts::SCORE_BAR_STYLE,
        )
        .render(score_area, buf);

        let board = self.state.board;
        let block_size = Size {
            width: grid_dim(board.columns()).saturating_add(2),
            height: grid_dim(board.rows()).saturating_add(2),
        };
        let block_area = center_rect(board_area, block_size);
        Block::bordered().render(block_area, buf);
        let mut surface = BufferSurface::new(block_area.inner(Margin::new(1, 1)), board, buf);
        paint(&self.state, &mut surface);

        match self.state.run {
            RunState::Idle => Line::from("Press Space to start").render(msg_area, buf),
            RunState::Running => (),
            RunState::GameOver => Line::from("Press Space to restart").render(msg_area, buf),
        }
        Line::from(format!(
            "speed: {} [1/2/3]   size: {} [4/5/6]",
            self.options.speed, self.options.size
        ))
        .render(preset_area, buf);
    }
}

fn grid_dim(cells: i32) -> u16 {
    u16::try_from(cells).unwrap_or(u16::MAX)
}
