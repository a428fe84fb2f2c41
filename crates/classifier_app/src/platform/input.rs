use classifier_core::{FormViewModel, Msg, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What the event loop should do with a terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum KeyAction {
    Dispatch(Msg),
    /// UI-local change (picker cursor) that needs a redraw.
    Redraw,
    Quit,
    Ignore,
}

/// Highlighted row of the list picker. Purely presentational.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct ListCursor {
    pub index: usize,
}

impl ListCursor {
    fn step(&mut self, len: usize, forward: bool) {
        if len == 0 {
            return;
        }
        self.index = if forward {
            (self.index + 1) % len
        } else {
            (self.index + len - 1) % len
        };
    }
}

pub(crate) fn map_key(view: &FormViewModel, cursor: &mut ListCursor, key: KeyEvent) -> KeyAction {
    if key.kind == KeyEventKind::Release {
        return KeyAction::Ignore;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return KeyAction::Quit;
    }

    match view.screen {
        Screen::ChooseList => map_choose_list(view, cursor, key),
        Screen::Describe { .. } => map_describe(view, key),
    }
}

/// Pasted text is appended to the description, flattened to one line.
pub(crate) fn map_paste(view: &FormViewModel, text: &str) -> KeyAction {
    if view.screen == Screen::ChooseList {
        return KeyAction::Ignore;
    }
    let pasted: String = text
        .chars()
        .map(|ch| if ch == '\n' || ch == '\r' { ' ' } else { ch })
        .collect();
    KeyAction::Dispatch(Msg::DescriptionChanged(format!(
        "{}{}",
        view.description, pasted
    )))
}

fn map_choose_list(view: &FormViewModel, cursor: &mut ListCursor, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Up => {
            cursor.step(view.lists.len(), false);
            KeyAction::Redraw
        }
        KeyCode::Down | KeyCode::Tab => {
            cursor.step(view.lists.len(), true);
            KeyAction::Redraw
        }
        KeyCode::Enter => match view.lists.get(cursor.index) {
            Some(list) => KeyAction::Dispatch(Msg::ListSelected(*list)),
            None => KeyAction::Ignore,
        },
        KeyCode::Char(digit @ '1'..='9') => {
            let index = digit as usize - '1' as usize;
            match view.lists.get(index) {
                Some(list) => {
                    cursor.index = index;
                    KeyAction::Dispatch(Msg::ListSelected(*list))
                }
                None => KeyAction::Ignore,
            }
        }
        KeyCode::Esc | KeyCode::Char('q') => KeyAction::Quit,
        _ => KeyAction::Ignore,
    }
}

fn map_describe(view: &FormViewModel, key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Dispatch(Msg::ResetClicked),
        // The submit affordance is disabled while a request is in flight.
        KeyCode::Enter if view.submitting => KeyAction::Ignore,
        KeyCode::Enter => KeyAction::Dispatch(Msg::SubmitClicked),
        KeyCode::Backspace => {
            let mut text = view.description.clone();
            if text.pop().is_none() {
                return KeyAction::Ignore;
            }
            KeyAction::Dispatch(Msg::DescriptionChanged(text))
        }
        KeyCode::Char(ch)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            let mut text = view.description.clone();
            text.push(ch);
            KeyAction::Dispatch(Msg::DescriptionChanged(text))
        }
        _ => KeyAction::Ignore,
    }
}
