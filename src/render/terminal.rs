use anyhow::{Context, Result};
use crossterm::{
    cursor, execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Terminal,
};
use std::io::stderr;
use tracing::error;

use super::renderer::{Renderer, Status};
use crate::game::Position;

/// Raw mode and the alternate screen, held for as long as the guard lives.
///
/// Dropping the guard puts the terminal back, on the error path too.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn acquire(title: &str) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        let guard = Self { _private: () };

        execute!(stderr(), EnterAlternateScreen, SetTitle(title), cursor::Hide)
            .context("Failed to enter alternate screen")?;

        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = disable_raw_mode() {
            error!(?err, "failed to disable raw mode");
        }
        if let Err(err) = execute!(stderr(), LeaveAlternateScreen, cursor::Show) {
            error!(?err, "failed to leave alternate screen");
        }
    }
}

/// Draws the board with ratatui, one coloured block per cell
pub struct TerminalRenderer<B: Backend> {
    terminal: Terminal<B>,
    width: usize,
    height: usize,
    cells: Vec<Color>,
    cell_width: u16,
    status: Status,
}

impl<B: Backend> TerminalRenderer<B> {
    pub fn new(terminal: Terminal<B>, width: usize, height: usize) -> Self {
        Self {
            terminal,
            width,
            height,
            cells: vec![Color::Reset; width * height],
            cell_width: 1,
            status: Status::default(),
        }
    }

    pub fn terminal(&self) -> &Terminal<B> {
        &self.terminal
    }

    fn index(&self, position: Position) -> Option<usize> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    fn board(&self) -> Paragraph<'static> {
        let blank = " ".repeat(self.cell_width as usize);
        let lines: Vec<Line> = self
            .cells
            .chunks(self.width.max(1))
            .map(|row| {
                Line::from(
                    row.iter()
                        .map(|&color| Span::styled(blank.clone(), Style::default().bg(color)))
                        .collect::<Vec<_>>(),
                )
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    fn header(&self) -> Paragraph<'static> {
        let label = Style::default().fg(Color::Yellow);
        let value = Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD);

        let line = Line::from(vec![
            Span::styled("Score: ", label),
            Span::styled(self.status.score.to_string(), value),
            Span::raw("    "),
            Span::styled("Record: ", label),
            Span::styled(self.status.record.to_string(), value),
            Span::raw("    "),
            Span::styled("Resets: ", label),
            Span::styled(self.status.resets.to_string(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Time: ", label),
            Span::styled(self.status.elapsed.clone(), Style::default().fg(Color::White)),
        ]);

        Paragraph::new(line).alignment(Alignment::Center)
    }

    /// Columns and rows the bordered board needs
    fn board_size(&self) -> (u16, u16) {
        let columns = u16::try_from(self.width)
            .unwrap_or(u16::MAX)
            .saturating_mul(self.cell_width)
            .saturating_add(2);
        let rows = u16::try_from(self.height)
            .unwrap_or(u16::MAX)
            .saturating_add(2);
        (columns, rows)
    }
}

/// A `width` x `height` rect centred in `area`, clipped to it
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);

    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn controls() -> Paragraph<'static> {
    let line = Line::from(vec![
        Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
        Span::raw(" or "),
        Span::styled("WASD", Style::default().fg(Color::Cyan)),
        Span::raw(" to move | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" or "),
        Span::styled("Q", Style::default().fg(Color::Red)),
        Span::raw(" to quit"),
    ]);

    Paragraph::new(line).alignment(Alignment::Center)
}

impl<B: Backend> Renderer for TerminalRenderer<B> {
    fn clear(&mut self, color: Color) {
        self.cells.fill(color);
    }

    fn draw_cell(&mut self, position: Position, color: Color, size: u16) {
        self.cell_width = size.max(1);
        if let Some(index) = self.index(position) {
            self.cells[index] = color;
        }
    }

    fn set_status(&mut self, status: &Status) {
        self.status = status.clone();
    }

    fn present(&mut self) -> Result<()> {
        let header = self.header();
        let board = self.board();
        let (columns, rows) = self.board_size();

        self.terminal
            .draw(|frame| {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(1), // Status
                        Constraint::Min(0),    // Board
                        Constraint::Length(1), // Controls
                    ])
                    .split(frame.area());

                frame.render_widget(header, chunks[0]);
                frame.render_widget(board, centered(chunks[1], columns, rows));
                frame.render_widget(controls(), chunks[2]);
            })
            .context("Failed to draw frame")?;

        Ok(())
    }
}
