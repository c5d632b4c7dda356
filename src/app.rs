use super::*;

const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Flow {
  Completed,
  Continuing,
  Quit,
}

#[derive(Debug)]
pub(crate) struct App<C = SystemClock> {
  controller: Controller<C>,
  input: String,
}

impl App {
  pub(crate) fn new(mode: Mode, time_limit: Duration, text: &str) -> Self {
    Self::with_controller(Controller::new(), mode, time_limit, text)
  }
}

impl<C: Clock> App<C> {
  pub(crate) fn with_controller(
    mut controller: Controller<C>,
    mode: Mode,
    time_limit: Duration,
    text: &str,
  ) -> Self {
    controller.start(mode, time_limit, text);

    Self {
      controller,
      input: String::new(),
    }
  }

  fn display(&self) -> Result {
    command!(Clear(ClearType::All), MoveTo(0, 0))?;

    match self.controller.mode() {
      Mode::FixedTime => print!(
        "{} ({}s)\r\n\r\n",
        Mode::FixedTime,
        self.controller.time_limit().as_secs()
      ),
      Mode::FixedText => print!("{}\r\n\r\n", Mode::FixedText),
    }

    let input_characters = self.controller.input().chars().collect::<Vec<char>>();

    let position = input_characters.len();

    for (i, expected_character) in self.controller.reference_text().chars().enumerate() {
      command!(SetForegroundColor(match i.cmp(&position) {
        Ordering::Less => match input_characters.get(i) {
          Some(&typed_character) if typed_character == expected_character => Color::Green,
          _ => Color::Red,
        },
        Ordering::Equal => Color::Yellow,
        Ordering::Greater => Color::White,
      }))?;

      print!("{}", expected_character);
    }

    command!(ResetColor)?;

    print!("\r\n\r\n{}", Statistics::from_controller(&self.controller));

    if self.controller.state() == State::Paused {
      print!("\r\n\r\nPaused, press tab to resume");
    } else {
      print!("\r\n\r\ntab to pause, ctrl-r to restart, esc to quit");
    }

    stdout().flush()?;

    Ok(())
  }

  fn handle_action(&mut self, action: Action) -> Flow {
    match action {
      Action::Delete => {
        if self.controller.is_running() && self.input.pop().is_some() {
          self.controller.update_input(&self.input);
        }

        Flow::Continuing
      }
      Action::Escape => Flow::Quit,
      Action::Insert(c) => {
        if !self.controller.is_running() {
          return Flow::Continuing;
        }

        self.input.push(c);

        if self.controller.update_input(&self.input) {
          Flow::Completed
        } else {
          Flow::Continuing
        }
      }
      Action::Restart => {
        let (mode, time_limit, text) = (
          self.controller.mode(),
          self.controller.time_limit(),
          self.controller.reference_text().to_owned(),
        );

        self.controller.reset();
        self.input.clear();
        self.controller.start(mode, time_limit, &text);

        Flow::Continuing
      }
      Action::TogglePause => {
        match self.controller.state() {
          State::Running => self.controller.pause(),
          State::Paused => self.controller.resume(),
          State::Idle | State::Completed => {}
        }

        Flow::Continuing
      }
    }
  }

  fn tick(&mut self) -> Flow {
    if self.controller.update_time() {
      Flow::Completed
    } else {
      Flow::Continuing
    }
  }

  fn event_loop(&mut self) -> Result<Flow> {
    loop {
      self.display()?;

      if event::poll(TICK)? {
        if let Some(action) = Action::from_event(event::read()?) {
          match self.handle_action(action) {
            Flow::Continuing => {}
            flow => return Ok(flow),
          }
        }
      }

      if self.tick() == Flow::Completed {
        return Ok(Flow::Completed);
      }
    }
  }

  /// Runs the test in the terminal. Returns the results unless the user quit.
  pub(crate) fn run(&mut self) -> Result<Option<Results>> {
    terminal::enable_raw_mode()?;

    let flow = self.event_loop();

    terminal::disable_raw_mode()?;

    command!(Clear(ClearType::All), MoveTo(0, 0))?;

    flow?;

    Ok(self.finish())
  }

  fn finish(&self) -> Option<Results> {
    self
      .controller
      .is_completed()
      .then(|| self.controller.results())
  }
}
