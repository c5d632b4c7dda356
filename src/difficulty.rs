use super::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Difficulty {
  Easy,
  #[default]
  Medium,
  Hard,
}
