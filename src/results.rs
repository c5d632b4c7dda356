use super::*;

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Results {
  pub(crate) accuracy: f64,
  pub(crate) correct_chars: usize,
  pub(crate) incorrect_chars: usize,
  pub(crate) mode: Mode,
  pub(crate) time_taken: f64,
  pub(crate) total_chars: usize,
  pub(crate) words_completed: usize,
  pub(crate) wpm: f64,
}

impl Display for Results {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    writeln!(f, "Test Results")?;
    writeln!(f)?;
    writeln!(f, "Words Per Minute:     {:.1}", self.wpm)?;
    writeln!(f, "Accuracy:             {:.1}%", self.accuracy)?;
    writeln!(f, "Time Taken:           {:.2} seconds", self.time_taken)?;
    writeln!(f)?;
    writeln!(f, "Total Characters:     {}", self.total_chars)?;
    writeln!(f, "Correct Characters:   {}", self.correct_chars)?;
    writeln!(f, "Incorrect Characters: {}", self.incorrect_chars)?;
    writeln!(f, "Words Completed:      {}", self.words_completed)?;
    write!(f, "Test Mode:            {}", self.mode)
  }
}
