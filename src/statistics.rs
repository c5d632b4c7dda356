use super::*;

/// Live status line shown while a test is in progress.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Statistics {
  pub(crate) accuracy: f64,
  pub(crate) correct: usize,
  pub(crate) elapsed_time: f64,
  pub(crate) errors: usize,
  pub(crate) goal: Goal,
  pub(crate) typed: usize,
  pub(crate) wpm: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Goal {
  Progress(f64),
  Remaining(f64),
}

impl Statistics {
  pub(crate) fn from_controller<C: Clock>(controller: &Controller<C>) -> Self {
    Self {
      accuracy: controller.accuracy(),
      correct: controller.correct_chars(),
      elapsed_time: controller.elapsed().as_secs_f64(),
      errors: controller.incorrect_chars(),
      goal: match controller.remaining() {
        Some(remaining) => Goal::Remaining(remaining.as_secs_f64()),
        None => Goal::Progress(controller.progress()),
      },
      typed: controller.total_chars(),
      wpm: controller.wpm(),
    }
  }
}

impl Display for Statistics {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    write!(
      f,
      "WPM: {:.1} | Errors: {} | Correct: {}/{} | Accuracy: {:.1}% | Elapsed Time: {:.2}s",
      self.wpm, self.errors, self.correct, self.typed, self.accuracy, self.elapsed_time
    )?;

    match self.goal {
      Goal::Progress(progress) => write!(f, " | Progress: {progress:.0}%"),
      Goal::Remaining(remaining) => write!(f, " | Remaining: {remaining:.1}s"),
    }
  }
}
