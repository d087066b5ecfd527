//! Keyboard input handling for the dashboard.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::runtime::App;

/// Maps a key event to an application action.
///
/// Guards on [`KeyEventKind::Press`] to avoid double-fire on some terminals.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit = true,
        KeyCode::Down | KeyCode::Tab => app.select_next(),
        KeyCode::Up | KeyCode::BackTab => app.select_prev(),
        KeyCode::Char('+' | '=') | KeyCode::Right => app.adjust(true),
        KeyCode::Char('-') | KeyCode::Left => app.adjust(false),
        KeyCode::Char('m') => app.cycle_model(),
        KeyCode::Char('1') => app.switch_preset("baseline"),
        KeyCode::Char('2') => app.switch_preset("dim_night"),
        KeyCode::Char('3') => app.switch_preset("large_array"),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScenarioConfig;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn q_quits() {
        let mut app = App::new(&ScenarioConfig::baseline());
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.quit);
    }

    #[test]
    fn arrows_select_and_adjust() {
        let mut app = App::new(&ScenarioConfig::baseline());
        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(app.selected, 1);
        // Distance slider: step 1 from 10
        handle_key(&mut app, press(KeyCode::Right));
        assert_eq!(app.inputs.distance_m, 11.0);
    }

    #[test]
    fn number_keys_switch_presets() {
        let mut app = App::new(&ScenarioConfig::baseline());
        handle_key(&mut app, press(KeyCode::Char('3')));
        assert_eq!(app.preset_name, "large_array");
        handle_key(&mut app, press(KeyCode::Char('1')));
        assert_eq!(app.preset_name, "baseline");
    }

    #[test]
    fn release_events_are_ignored() {
        let mut app = App::new(&ScenarioConfig::baseline());
        let mut release = press(KeyCode::Char('q'));
        release.kind = KeyEventKind::Release;
        handle_key(&mut app, release);
        assert!(!app.quit);
    }
}
