use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Mode {
  /// Ends when the time limit runs out
  #[default]
  FixedTime,
  /// Ends when the whole passage has been typed
  FixedText,
}

impl Display for Mode {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    match self {
      Self::FixedTime => write!(f, "Fixed Time"),
      Self::FixedText => write!(f, "Fixed Text"),
    }
  }
}
