use super::*;

#[derive(Debug, PartialEq)]
pub(crate) enum Action {
  Delete,
  Escape,
  Insert(char),
  Restart,
  TogglePause,
}

impl Action {
  pub(crate) fn from_event(event: Event) -> Option<Self> {
    match event {
      Event::Key(key) if key.kind != KeyEventKind::Release => match key.code {
        KeyCode::Backspace => Some(Self::Delete),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Escape),
        KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Self::Restart),
        KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => None,
        KeyCode::Char(c) => Some(Self::Insert(c)),
        KeyCode::Esc => Some(Self::Escape),
        KeyCode::Tab => Some(Self::TogglePause),
        _ => None,
      },
      _ => None,
    }
  }
}
