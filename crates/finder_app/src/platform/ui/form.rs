use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use finder_core::{AppViewModel, Msg};

use super::picker::AlgorithmPicker;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    TargetItem,
    Algorithm,
    StartIndex,
    EndIndex,
    GenerateGraph,
    Search,
}

impl Field {
    const ORDER: [Field; 6] = [
        Field::TargetItem,
        Field::Algorithm,
        Field::StartIndex,
        Field::EndIndex,
        Field::GenerateGraph,
        Field::Search,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        Self::ORDER[(self.position() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Dispatch(Msg),
    /// Only UI-local state (focus, picker, scroll) changed.
    Redraw,
    Quit,
    Ignored,
}

/// Presentation-only state: which field has focus, the picker search and result scroll.
#[derive(Debug, Clone, Default)]
pub struct FormUi {
    focus: Field,
    picker: AlgorithmPicker,
    results_scroll: u16,
}

impl FormUi {
    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn picker(&self) -> &AlgorithmPicker {
        &self.picker
    }

    pub fn results_scroll(&self) -> u16 {
        self.results_scroll
    }

    pub fn reset_scroll(&mut self) {
        self.results_scroll = 0;
    }

    pub fn handle_key(&mut self, key: KeyEvent, view: &AppViewModel) -> KeyAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            KeyCode::Esc => return KeyAction::Quit,
            KeyCode::Tab => return self.move_focus(self.focus.next(), view),
            KeyCode::BackTab => return self.move_focus(self.focus.prev(), view),
            KeyCode::PageDown => {
                self.results_scroll = self.results_scroll.saturating_add(5);
                return KeyAction::Redraw;
            }
            KeyCode::PageUp => {
                self.results_scroll = self.results_scroll.saturating_sub(5);
                return KeyAction::Redraw;
            }
            _ => {}
        }

        match self.focus {
            Field::TargetItem => edit_text(key.code, &view.target_item, Msg::TargetItemChanged),
            Field::StartIndex => edit_text(key.code, &view.start_index, Msg::StartIndexChanged),
            Field::EndIndex => edit_text(key.code, &view.end_index, Msg::EndIndexChanged),
            Field::Algorithm => self.handle_picker_key(key.code),
            Field::GenerateGraph => match key.code {
                KeyCode::Char(' ') => KeyAction::Dispatch(Msg::GenerateGraphToggled(!view.generate_graph)),
                KeyCode::Enter => KeyAction::Dispatch(Msg::SubmitClicked),
                _ => KeyAction::Ignored,
            },
            Field::Search => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => KeyAction::Dispatch(Msg::SubmitClicked),
                _ => KeyAction::Ignored,
            },
        }
    }

    fn move_focus(&mut self, next: Field, view: &AppViewModel) -> KeyAction {
        if self.focus == Field::Algorithm {
            self.picker.reset();
        }
        if next == Field::Algorithm {
            self.picker.open_at(view.algorithm);
        }
        self.focus = next;
        KeyAction::Redraw
    }

    fn handle_picker_key(&mut self, code: KeyCode) -> KeyAction {
        match code {
            KeyCode::Up => self.picker.move_up(),
            KeyCode::Down => self.picker.move_down(),
            KeyCode::Backspace => self.picker.backspace(),
            KeyCode::Char(ch) => self.picker.push_char(ch),
            KeyCode::Delete => {
                self.picker.reset();
                return KeyAction::Dispatch(Msg::AlgorithmSelected(None));
            }
            KeyCode::Enter => {
                return match self.picker.choose() {
                    Some(algorithm) => {
                        self.focus = self.focus.next();
                        KeyAction::Dispatch(Msg::AlgorithmSelected(Some(algorithm)))
                    }
                    None => KeyAction::Ignored,
                };
            }
            _ => return KeyAction::Ignored,
        }
        KeyAction::Redraw
    }
}

fn edit_text(code: KeyCode, current: &str, to_msg: fn(String) -> Msg) -> KeyAction {
    match code {
        KeyCode::Char(ch) => {
            let mut text = current.to_string();
            text.push(ch);
            KeyAction::Dispatch(to_msg(text))
        }
        KeyCode::Backspace => {
            let mut text = current.to_string();
            if text.pop().is_none() {
                return KeyAction::Ignored;
            }
            KeyAction::Dispatch(to_msg(text))
        }
        KeyCode::Enter => KeyAction::Dispatch(Msg::SubmitClicked),
        _ => KeyAction::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use finder_core::Algorithm;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_in_target_appends_to_current_text() {
        let mut form = FormUi::default();
        let view = AppViewModel {
            target_item: "Pum".to_string(),
            ..AppViewModel::default()
        };
        assert_eq!(
            form.handle_key(press(KeyCode::Char('p')), &view),
            KeyAction::Dispatch(Msg::TargetItemChanged("Pump".to_string()))
        );
        assert_eq!(
            form.handle_key(press(KeyCode::Backspace), &view),
            KeyAction::Dispatch(Msg::TargetItemChanged("Pu".to_string()))
        );
    }

    #[test]
    fn index_fields_accept_any_text() {
        let mut form = FormUi::default();
        let view = AppViewModel::default();
        form.handle_key(press(KeyCode::Tab), &view);
        form.handle_key(press(KeyCode::Tab), &view);
        assert_eq!(form.focus(), Field::StartIndex);
        assert_eq!(
            form.handle_key(press(KeyCode::Char('x')), &view),
            KeyAction::Dispatch(Msg::StartIndexChanged("x".to_string()))
        );
    }

    #[test]
    fn picker_selection_emits_algorithm_and_advances_focus() {
        let mut form = FormUi::default();
        let view = AppViewModel::default();
        form.handle_key(press(KeyCode::Tab), &view);
        for ch in "wl".chars() {
            assert_eq!(form.handle_key(press(KeyCode::Char(ch)), &view), KeyAction::Redraw);
        }

        assert_eq!(
            form.handle_key(press(KeyCode::Enter), &view),
            KeyAction::Dispatch(Msg::AlgorithmSelected(Some(Algorithm::Wl)))
        );
        assert_eq!(form.focus(), Field::StartIndex);
        assert_eq!(form.picker().query(), "");
    }

    #[test]
    fn returning_to_picker_keeps_the_chosen_algorithm() {
        let mut form = FormUi::default();
        let view = AppViewModel {
            algorithm: Some(Algorithm::Wl),
            ..AppViewModel::default()
        };
        form.handle_key(press(KeyCode::Tab), &view);
        assert_eq!(form.focus(), Field::Algorithm);
        assert_eq!(
            form.handle_key(press(KeyCode::Enter), &view),
            KeyAction::Dispatch(Msg::AlgorithmSelected(Some(Algorithm::Wl)))
        );

        // Leave the picker and come back from below.
        form.handle_key(press(KeyCode::BackTab), &view);
        assert_eq!(form.focus(), Field::Algorithm);
        form.handle_key(press(KeyCode::Down), &view);
        assert_eq!(
            form.handle_key(press(KeyCode::Enter), &view),
            KeyAction::Dispatch(Msg::AlgorithmSelected(Some(Algorithm::Hybrid)))
        );
    }

    #[test]
    fn enter_submits_and_space_toggles_graph() {
        let mut form = FormUi::default();
        let view = AppViewModel::default();
        assert_eq!(
            form.handle_key(press(KeyCode::Enter), &view),
            KeyAction::Dispatch(Msg::SubmitClicked)
        );

        form.handle_key(press(KeyCode::BackTab), &view);
        form.handle_key(press(KeyCode::BackTab), &view);
        assert_eq!(form.focus(), Field::GenerateGraph);
        assert_eq!(
            form.handle_key(press(KeyCode::Char(' ')), &view),
            KeyAction::Dispatch(Msg::GenerateGraphToggled(true))
        );
    }

    #[test]
    fn escape_and_ctrl_c_quit() {
        let mut form = FormUi::default();
        let view = AppViewModel::default();
        assert_eq!(form.handle_key(press(KeyCode::Esc), &view), KeyAction::Quit);
        assert_eq!(
            form.handle_key(
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
                &view
            ),
            KeyAction::Quit
        );
    }
}
