use super::*;

const CHARACTERS_PER_WORD: f64 = 5.0;

const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(60);

#[derive(Clone, Debug, PartialEq)]
struct Session {
  correct_chars: usize,
  elapsed: Duration,
  final_accuracy: f64,
  final_wpm: f64,
  incorrect_chars: usize,
  input: String,
  mode: Mode,
  reference: String,
  started_at: Option<Instant>,
  state: State,
  time_limit: Duration,
  total_chars: usize,
  words_completed: usize,
}

impl Default for Session {
  fn default() -> Self {
    Self {
      correct_chars: 0,
      elapsed: Duration::ZERO,
      final_accuracy: 0.0,
      final_wpm: 0.0,
      incorrect_chars: 0,
      input: String::new(),
      mode: Mode::default(),
      reference: String::new(),
      started_at: None,
      state: State::Idle,
      time_limit: DEFAULT_TIME_LIMIT,
      total_chars: 0,
      words_completed: 0,
    }
  }
}

/// Tracks the lifecycle of a single typing test and derives its speed and
/// accuracy from the typed input.
///
/// Calls that don't apply to the current state are ignored.
#[derive(Debug)]
pub(crate) struct Controller<C = SystemClock> {
  clock: C,
  session: Session,
}

impl Controller {
  pub(crate) fn new() -> Self {
    Self::with_clock(SystemClock)
  }
}

impl<C: Clock> Controller<C> {
  pub(crate) fn with_clock(clock: C) -> Self {
    Self {
      clock,
      session: Session::default(),
    }
  }

  /// Begins a new session, discarding whatever came before it.
  pub(crate) fn start(&mut self, mode: Mode, time_limit: Duration, reference: &str) {
    if self.session.state != State::Idle {
      debug!("restarting from {:?}, previous session discarded", self.session.state);
    }

    self.session = Session {
      mode,
      reference: reference.to_owned(),
      started_at: Some(self.clock.now()),
      state: State::Running,
      time_limit,
      ..Session::default()
    };

    debug!(
      "started {mode:?} test, limit {}s, {} reference chars",
      time_limit.as_secs_f64(),
      reference.chars().count()
    );
  }

  pub(crate) fn pause(&mut self) {
    if self.session.state != State::Running {
      trace!("pause ignored in {:?}", self.session.state);
      return;
    }

    self.tick();
    self.session.state = State::Paused;

    debug!("paused at {:.2}s", self.elapsed_seconds());
  }

  pub(crate) fn resume(&mut self) {
    if self.session.state != State::Paused {
      trace!("resume ignored in {:?}", self.session.state);
      return;
    }

    let now = self.clock.now();

    // Shift the start forward so the paused gap is never counted.
    self.session.started_at = Some(now.checked_sub(self.session.elapsed).unwrap_or(now));
    self.session.state = State::Running;

    debug!("resumed at {:.2}s", self.elapsed_seconds());
  }

  pub(crate) fn stop(&mut self) {
    match self.session.state {
      State::Running => self.tick(),
      State::Paused => {}
      State::Idle | State::Completed => {
        trace!("stop ignored in {:?}", self.session.state);
        return;
      }
    }

    self.session.final_wpm = self.wpm();
    self.session.final_accuracy = self.accuracy();
    self.session.words_completed = self.words_completed();
    self.session.state = State::Completed;

    info!(
      "completed {:?} test: {:.1} wpm, {:.1}% accuracy in {:.2}s",
      self.session.mode,
      self.session.final_wpm,
      self.session.final_accuracy,
      self.elapsed_seconds()
    );
  }

  pub(crate) fn reset(&mut self) {
    debug!("reset from {:?}", self.session.state);
    self.session = Session::default();
  }

  /// Replaces the typed text with `input` and recounts it against the
  /// reference. Returns true when this call finished the test.
  pub(crate) fn update_input(&mut self, input: &str) -> bool {
    if self.session.state != State::Running {
      trace!("input ignored in {:?}", self.session.state);
      return false;
    }

    let (mut correct, mut incorrect) = (0, 0);

    for (typed, expected) in input.chars().zip(self.session.reference.chars()) {
      if typed == expected {
        correct += 1;
      } else {
        incorrect += 1;
      }
    }

    self.session.input = input.to_owned();
    self.session.total_chars = input.chars().count();
    self.session.correct_chars = correct;
    self.session.incorrect_chars = incorrect;

    if self.session.mode == Mode::FixedText
      && self.session.total_chars >= self.session.reference.chars().count()
    {
      self.stop();
      return true;
    }

    false
  }

  /// Advances the elapsed time. Returns true when this call hit the time limit.
  pub(crate) fn update_time(&mut self) -> bool {
    if self.session.state != State::Running {
      return false;
    }

    self.tick();

    if self.session.mode == Mode::FixedTime && self.session.elapsed >= self.session.time_limit {
      self.stop();
      return true;
    }

    false
  }

  fn tick(&mut self) {
    if let Some(started_at) = self.session.started_at {
      self.session.elapsed = self.clock.now().saturating_duration_since(started_at);
    }
  }

  /// Raw typing speed over every typed character, errors included.
  pub(crate) fn wpm(&self) -> f64 {
    let elapsed = self.elapsed_seconds();

    if elapsed <= 0.0 {
      return 0.0;
    }

    let words = self.session.total_chars as f64 / CHARACTERS_PER_WORD;

    (words / (elapsed / 60.0)).max(0.0)
  }

  pub(crate) fn accuracy(&self) -> f64 {
    if self.session.total_chars == 0 {
      return 0.0;
    }

    self.session.correct_chars as f64 / self.session.total_chars as f64 * 100.0
  }

  /// Percentage of the reference typed so far. Always zero outside fixed text mode.
  pub(crate) fn progress(&self) -> f64 {
    if self.session.mode != Mode::FixedText {
      return 0.0;
    }

    let length = self.session.reference.chars().count();

    if length == 0 {
      return 0.0;
    }

    (self.session.input.chars().count() as f64 / length as f64 * 100.0).min(100.0)
  }

  /// Whitespace separated tokens typed, right or wrong.
  pub(crate) fn words_completed(&self) -> usize {
    self.session.input.split_whitespace().count()
  }

  pub(crate) fn remaining(&self) -> Option<Duration> {
    match self.session.mode {
      Mode::FixedTime => Some(self.session.time_limit.saturating_sub(self.session.elapsed)),
      Mode::FixedText => None,
    }
  }

  /// Snapshot frozen at completion. Before that, speed, accuracy and words are zero.
  pub(crate) fn results(&self) -> Results {
    Results {
      accuracy: round(self.session.final_accuracy, 1),
      correct_chars: self.session.correct_chars,
      incorrect_chars: self.session.incorrect_chars,
      mode: self.session.mode,
      time_taken: round(self.elapsed_seconds(), 2),
      total_chars: self.session.total_chars,
      words_completed: self.session.words_completed,
      wpm: round(self.session.final_wpm, 1),
    }
  }

  pub(crate) fn is_running(&self) -> bool {
    self.session.state == State::Running
  }

  pub(crate) fn is_completed(&self) -> bool {
    self.session.state == State::Completed
  }

  pub(crate) fn state(&self) -> State {
    self.session.state
  }

  pub(crate) fn mode(&self) -> Mode {
    self.session.mode
  }

  pub(crate) fn time_limit(&self) -> Duration {
    self.session.time_limit
  }

  pub(crate) fn reference_text(&self) -> &str {
    &self.session.reference
  }

  pub(crate) fn input(&self) -> &str {
    &self.session.input
  }

  pub(crate) fn total_chars(&self) -> usize {
    self.session.total_chars
  }

  pub(crate) fn correct_chars(&self) -> usize {
    self.session.correct_chars
  }

  pub(crate) fn incorrect_chars(&self) -> usize {
    self.session.incorrect_chars
  }

  pub(crate) fn elapsed(&self) -> Duration {
    self.session.elapsed
  }

  pub(crate) fn elapsed_seconds(&self) -> f64 {
    self.session.elapsed.as_secs_f64()
  }
}

fn round(value: f64, places: i32) -> f64 {
  let factor = 10f64.powi(places);
  (value * factor).round() / factor
}
