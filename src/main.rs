use {
  crate::{
    action::Action,
    app::App,
    arguments::Arguments,
    clock::{Clock, SystemClock},
    controller::Controller,
    difficulty::Difficulty,
    mode::Mode,
    passages::Passages,
    results::Results,
    state::State,
    statistics::Statistics,
  },
  anyhow::bail,
  clap::{Parser, ValueEnum},
  crossterm::{
    cursor::MoveTo,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    style::{Color, ResetColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
  },
  log::{debug, info, trace},
  rand::{Rng, rngs::ThreadRng, seq::SliceRandom},
  std::{
    cmp::Ordering,
    fmt::{self, Display, Formatter},
    io::{Write, stdout},
    process,
    time::{Duration, Instant},
  },
};

macro_rules! command {
  ($($cmd:expr),+ $(,)?) => {
    { execute!(stdout(), $($cmd),+) }
  };
}

mod action;
mod app;
mod arguments;
mod clock;
mod controller;
mod difficulty;
mod mode;
mod passages;
mod results;
mod state;
mod statistics;

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn main() {
  env_logger::init();

  if let Err(error) = Arguments::parse().run() {
    eprintln!("error: {error}");
    process::exit(1);
  }
}
