#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum State {
  Completed,
  #[default]
  Idle,
  Paused,
  Running,
}
