use std::io::{self, Stdout, stdout};
use std::thread;
use std::time::{Duration, Instant};

use crossterm::ExecutableCommand;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::console::{Console, DONE, INVALID_INPUT, PROMPT, Screen, TITLE, VAlign};

/// Real [`Console`] on top of crossterm raw mode and ratatui frames.
///
/// Every frame redraws the full-perimeter border and recomputes centering
/// from the current terminal size, so resizes are picked up on the next
/// render. The cursor is only shown while the prompt is being edited.
pub struct TuiConsole {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    epoch: Instant,
}

impl TuiConsole {
    pub fn new() -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

        Ok(Self {
            terminal,
            epoch: Instant::now(),
        })
    }

    pub fn open(&mut self) -> io::Result<()> {
        enable_raw_mode()?;
        stdout().execute(EnterAlternateScreen)?;
        self.terminal.clear()?;

        Ok(())
    }

    pub fn close(&mut self) -> io::Result<()> {
        disable_raw_mode()?;
        stdout().execute(LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;

        Ok(())
    }

    fn draw(&mut self, screen: &Screen) -> io::Result<()> {
        self.terminal.draw(|frame| {
            let area = frame.area();

            let mut style = Style::default();
            if let Screen::Countdown { flash: true, .. } = screen {
                style = style.add_modifier(Modifier::REVERSED);
            }

            frame.render_widget(Block::default().borders(Borders::ALL).style(style), area);

            let title = match screen {
                Screen::Prompt { .. } => Some(PROMPT),
                Screen::Countdown { .. } => Some(TITLE),
                Screen::Done => None,
            };
            if let Some(title) = title {
                frame.render_widget(
                    Paragraph::new(title).alignment(Alignment::Center),
                    text_row(area, VAlign::Top),
                );
            }

            let body_row = text_row(area, VAlign::Middle);
            match screen {
                Screen::Prompt { input, invalid } => {
                    let field = Paragraph::new(input.as_str()).alignment(Alignment::Center);
                    frame.render_widget(field, body_row);

                    if *invalid {
                        let error_row = Rect {
                            y: area.height.saturating_sub(1),
                            ..body_row
                        };
                        frame.render_widget(Paragraph::new(INVALID_INPUT), error_row);
                    } else {
                        let column = area.width.saturating_sub(input.len() as u16) / 2;
                        let cursor =
                            (column + input.len() as u16).min(area.width.saturating_sub(1));
                        frame.set_cursor_position((cursor, body_row.y));
                    }
                }
                Screen::Countdown { remaining, .. } => {
                    let body = Paragraph::new(remaining.as_str()).alignment(Alignment::Center);
                    frame.render_widget(body, body_row);
                }
                Screen::Done => {
                    let body = Paragraph::new(DONE).alignment(Alignment::Center);
                    frame.render_widget(body, body_row);
                }
            }
        })?;

        Ok(())
    }
}

/// One-row rect for centered text, anchored at the top border row or the
/// vertical middle of `area`.
fn text_row(area: Rect, valign: VAlign) -> Rect {
    let y = match valign {
        VAlign::Top => area.y,
        VAlign::Middle => area.y + area.height.saturating_sub(1) / 2,
    };

    Rect {
        x: area.x,
        y,
        width: area.width,
        height: area.height.min(1),
    }
}

impl Console for TuiConsole {
    fn render(&mut self, screen: &Screen) -> io::Result<()> {
        self.draw(screen)
    }

    fn read_line(&mut self) -> io::Result<String> {
        let mut input = String::new();

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Enter => return Ok(input),
                    KeyCode::Backspace => {
                        input.pop();
                    }
                    KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                        input.push(c);
                    }
                    _ => {}
                },
                _ => {}
            }

            self.draw(&Screen::Prompt {
                input: input.clone(),
                invalid: false,
            })?;
        }
    }

    fn poll_key(&mut self) -> io::Result<bool> {
        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }

    fn read_key(&mut self) -> io::Result<()> {
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }

    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }
}
