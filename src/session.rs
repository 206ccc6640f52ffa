//! The read-eval-print loop: check for loss, read a line, step the game, print.

use std::io::{self, BufRead, Write};
use std::time::{Duration, Instant};

use log::info;

use crate::engine::{Output, OutputBlock};
use crate::world::ClockMode;
use crate::{GameState, LossReason, Status};

/// Source of elapsed play time between input cycles.
pub trait Clock {
    /// Time passed since the previous call.
    fn lap(&mut self) -> Duration;
}

/// Time never passes; the budget is only ever checked.
pub struct FrozenClock;

impl Clock for FrozenClock {
    fn lap(&mut self) -> Duration {
        Duration::ZERO
    }
}

pub struct WallClock {
    last: Instant,
}

impl WallClock {
    pub fn start() -> Self {
        WallClock {
            last: Instant::now(),
        }
    }
}

impl Clock for WallClock {
    fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed
    }
}

pub fn clock_for(mode: ClockMode) -> Box<dyn Clock> {
    match mode {
        ClockMode::Frozen => Box::new(FrozenClock),
        ClockMode::Wall => Box::new(WallClock::start()),
    }
}

pub fn write_output<W: Write>(w: &mut W, out: &Output) -> io::Result<()> {
    let mut printed_anything = false;
    let mut started_events = false;

    for block in &out.blocks {
        match block {
            OutputBlock::Title(t) => {
                writeln!(w, "\n== {} ==", t)?;
                printed_anything = true;
            }
            OutputBlock::Text(line) => {
                writeln!(w, "{}", line)?;
                printed_anything = true;
            }
            OutputBlock::Event(ev) => {
                if !started_events {
                    if printed_anything {
                        writeln!(w)?; // visual separation before first event
                    }
                    started_events = true;
                }
                writeln!(w, "{}", ev)?;
                printed_anything = true;
            }
            OutputBlock::Exits(exits) => {
                writeln!(w, "\n{}", exits)?;
                printed_anything = true;
            }
        }
    }
    Ok(())
}

fn loss_message(reason: LossReason) -> Output {
    let mut out = Output::new();
    match reason {
        LossReason::TimeUp => {
            out.event("TIME'S UP! You failed to escape in time!");
            out.event("The facility's security systems have locked you in permanently!");
        }
        LossReason::EnergyDepleted => {
            out.event("ENERGY DEPLETED! You collapsed from exhaustion!");
        }
    }
    out
}

/// Drive a game to a terminal status. End of input counts as quitting.
pub fn run<R: BufRead, W: Write>(
    state: &mut GameState,
    mut input: R,
    output: &mut W,
    clock: &mut dyn Clock,
) -> io::Result<Status> {
    write_output(output, &state.initialize())?;

    let status = loop {
        state.tick(clock.lap());
        if let Status::Lost(reason) = state.check_depletion() {
            write_output(output, &loss_message(reason))?;
            break state.status;
        }

        let prompt = if state.pending_answer.is_some() { "answer> " } else { "> " };
        write!(output, "\n{}", prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            writeln!(output, "\nGoodbye.")?;
            state.status = Status::Quit;
            break state.status;
        }

        let (out, status) = state.step(&line);
        write_output(output, &out)?;
        if status.is_over() {
            break status;
        }
    };

    info!("session ended: {:?}", status);
    output.flush()?;
    Ok(status)
}
