/*
 * This file is part of Easeguess.
 *
 * Copyright (C) 2025 Easeguess contributors
 *
 * Easeguess is free software: you can redistribute it and/or modify
 * it under the terms of the GNU General Public License as published by
 * the Free Software Foundation, either version 3 of the License, or
 * (at your option) any later version.
 *
 * Easeguess is distributed in the hope that it will be useful,
 * but WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
 * GNU General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with Easeguess. If not, see <https://www.gnu.org/licenses/>.
 */

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::App;

/// Fine adjustment divides the step by this when Shift is held
const FINE_DIVISOR: f64 = 5.0;

/// Main event handler. Returns `Ok(true)` when the app should exit.
pub fn handle_key_event(app: &mut App, key_event: KeyEvent) -> anyhow::Result<bool> {
    let KeyEvent { code, modifiers, kind, .. } = key_event;

    // Windows terminals report releases too
    if kind == KeyEventKind::Release {
        return Ok(false);
    }

    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        return Ok(true);
    }

    // Result popup swallows everything except its own keys
    if app.show_result_popup {
        return handle_result_popup_events(app, code);
    }

    handle_game_events(app, code, modifiers)
}

fn handle_result_popup_events(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    match code {
        KeyCode::Esc | KeyCode::Enter => app.show_result_popup = false,
        KeyCode::Char('a') => {
            app.show_result_popup = false;
            app.toggle_answer();
        }
        KeyCode::Char('n') => {
            app.show_result_popup = false;
            app.next_level();
        }
        KeyCode::Char('q') => return Ok(true),
        _ => {}
    }
    Ok(false)
}

fn handle_game_events(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> anyhow::Result<bool> {
    let step = if modifiers.contains(KeyModifiers::SHIFT) {
        app.step / FINE_DIVISOR
    } else {
        app.step
    };

    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Ok(true),
        KeyCode::Left | KeyCode::Char('h') => app.select_prev_component(),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Tab => app.select_next_component(),
        KeyCode::Up | KeyCode::Char('k') => app.adjust_selected(step),
        KeyCode::Down | KeyCode::Char('j') => app.adjust_selected(-step),
        KeyCode::Enter | KeyCode::Char(' ') => {
            if let Err(e) = app.submit() {
                app.status = format!("Scoring failed: {}", e);
            }
        }
        KeyCode::Char('r') => app.reset_guess(),
        KeyCode::Char('a') => app.toggle_answer(),
        KeyCode::Char('n') => { app.next_level(); }
        KeyCode::Char('p') => { app.prev_level(); }
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crate::levels::Edition;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::from_settings(&Settings { edition: Edition::Classic, ..Settings::default() })
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert!(handle_key_event(&mut app, key(KeyCode::Char('q'))).unwrap());
        assert!(handle_key_event(&mut app, key(KeyCode::Esc)).unwrap());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key_event(&mut app, ctrl_c).unwrap());
    }

    #[test]
    fn test_arrows_edit_guess() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Right)).unwrap();
        assert_eq!(app.selected, 1);
        handle_key_event(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.guess.y1, 0.05);
        handle_key_event(&mut app, key(KeyCode::Down)).unwrap();
        handle_key_event(&mut app, key(KeyCode::Down)).unwrap();
        assert_eq!(app.guess.y1, -0.05);
    }

    #[test]
    fn test_shift_is_fine_step() {
        let mut app = app();
        let shift_up = KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT);
        handle_key_event(&mut app, shift_up).unwrap();
        assert_eq!(app.guess.x1, 0.01);
    }

    #[test]
    fn test_enter_submits_and_popup_closes() {
        let mut app = app();
        assert!(!handle_key_event(&mut app, key(KeyCode::Enter)).unwrap());
        assert!(app.show_result_popup);
        assert!(app.last_score.is_some());

        // popup blocks editing
        handle_key_event(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.guess.x1, 0.0);

        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        assert!(!app.show_result_popup);
    }

    #[test]
    fn test_popup_reveal_and_next() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        handle_key_event(&mut app, key(KeyCode::Char('a'))).unwrap();
        assert!(app.reveal_answer);
        assert!(!app.show_result_popup);

        handle_key_event(&mut app, key(KeyCode::Enter)).unwrap();
        handle_key_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.current_level().id, 2);
    }

    #[test]
    fn test_level_keys() {
        let mut app = app();
        handle_key_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        handle_key_event(&mut app, key(KeyCode::Char('n'))).unwrap();
        assert_eq!(app.current_level().id, 3);
        handle_key_event(&mut app, key(KeyCode::Char('p'))).unwrap();
        assert_eq!(app.current_level().id, 2);
    }

    #[test]
    fn test_small_steps_still_move_the_guess() {
        let settings = Settings { step: crate::config::MIN_STEP, ..Settings::default() };
        let mut app = App::from_settings(&settings);
        let shift_up = KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT);
        for _ in 0..50 {
            handle_key_event(&mut app, shift_up).unwrap();
        }
        assert_eq!(app.guess.x1, 0.05);

        app.selected = 1;
        handle_key_event(&mut app, key(KeyCode::Up)).unwrap();
        assert_eq!(app.guess.y1, 0.005);
    }

    #[test]
    fn test_step_below_minimum_is_raised() {
        // unvalidated settings can carry a step too small to survive rounding
        let settings = Settings { step: 0.0004, ..Settings::default() };
        let mut app = App::from_settings(&settings);
        for _ in 0..50 {
            handle_key_event(&mut app, key(KeyCode::Up)).unwrap();
        }
        assert!(app.guess.x1 > 0.0);

        let settings = Settings { step: 0.002, ..Settings::default() };
        let mut app = App::from_settings(&settings);
        let shift_up = KeyEvent::new(KeyCode::Up, KeyModifiers::SHIFT);
        for _ in 0..50 {
            handle_key_event(&mut app, shift_up).unwrap();
        }
        assert!(app.guess.x1 > 0.0);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let mut release = key(KeyCode::Up);
        release.kind = KeyEventKind::Release;
        assert!(!handle_key_event(&mut app, release).unwrap());
        assert_eq!(app.guess.x1, 0.0);
    }
}
