use std::io;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::backend::{Countdown, Remaining, parse_hms};

use super::console::{Console, FINISHED, Screen};

const FRAME_DELAY: Duration = Duration::from_secs(1);
const INVALID_INPUT_DELAY: Duration = Duration::from_secs(2);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    AwaitingInput,
    Counting,
    Finished,
    AwaitingAck,
    Exited,
}

/// Drives the prompt/countdown/flash/acknowledge loop over any [`Console`].
///
/// The interrupt flag is written by the signal handler and checked once per
/// loop iteration, so an external termination request still winds the session
/// down through `Exited` and lets the terminal be restored.
pub struct Session {
    state: State,
    interrupted: Arc<AtomicBool>,
}

impl Session {
    pub fn new(interrupted: Arc<AtomicBool>) -> Self {
        Self {
            state: State::AwaitingInput,
            interrupted,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn run<C: Console>(&mut self, console: &mut C) -> io::Result<()> {
        let mut countdown = Countdown::new(0);
        let mut started = Duration::ZERO;
        let mut flash = false;

        while self.state != State::Exited {
            if self.interrupted.load(Ordering::Relaxed) {
                self.state = State::Exited;
                break;
            }

            match self.state {
                State::AwaitingInput => {
                    console.render(&Screen::Prompt {
                        input: String::new(),
                        invalid: false,
                    })?;

                    let line = console.read_line()?;
                    match parse_hms(&line) {
                        Ok(total_secs) => {
                            countdown = Countdown::new(total_secs);
                            started = console.now();
                            self.state = State::Counting;
                        }
                        Err(_) => {
                            console.render(&Screen::Prompt {
                                input: line,
                                invalid: true,
                            })?;
                            console.sleep(INVALID_INPUT_DELAY);
                        }
                    }
                }
                State::Counting => {
                    let elapsed_secs = (console.now() - started).as_secs();

                    match countdown.remaining(elapsed_secs) {
                        Remaining::Time(remaining) => {
                            console.render(&Screen::Countdown {
                                remaining,
                                flash: false,
                            })?;
                            console.sleep(FRAME_DELAY);
                        }
                        Remaining::Finished => self.state = State::Finished,
                    }
                }
                State::Finished => {
                    flash = !flash;
                    console.render(&Screen::Countdown {
                        remaining: String::from(FINISHED),
                        flash,
                    })?;
                    console.sleep(FRAME_DELAY);

                    if console.poll_key()? {
                        self.state = State::AwaitingAck;
                    }
                }
                State::AwaitingAck => {
                    console.render(&Screen::Done)?;
                    console.read_key()?;
                    self.state = State::Exited;
                }
                State::Exited => {}
            }
        }

        Ok(())
    }
}
