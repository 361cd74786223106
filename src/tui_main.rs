use anyhow::Result;
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use codewizard_rating::tui::{app::InputMode, ui, App, Event as TuiEvent, EventHandler};

pub fn run_tui(tick_rate_ms: u64) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new();
    let events = EventHandler::new(tick_rate_ms);
    let res = run_app(&mut terminal, &mut app, &events);

    // Always restore terminal state, even if there was an error
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    while !app.should_quit {
        terminal.draw(|f| ui::draw(f, app))?;

        match events.next()? {
            TuiEvent::Key(key) => handle_key(app, key.code, key.modifiers),
            TuiEvent::Resize(_, _) | TuiEvent::Tick => {}
        }
    }

    Ok(())
}

fn handle_key(app: &mut App, code: KeyCode, modifiers: KeyModifiers) {
    if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match code {
        KeyCode::Up => app.step_up(),
        KeyCode::Down => app.step_down(),
        _ => match app.input_mode {
            InputMode::Normal => match code {
                KeyCode::Char('q') => app.should_quit = true,
                KeyCode::Char('e') | KeyCode::Char('i') => app.start_editing(),
                KeyCode::Char('c') => app.clear_input(),
                KeyCode::Enter => app.commit(),
                _ => {}
            },
            InputMode::Editing => match code {
                KeyCode::Esc => app.stop_editing(),
                KeyCode::Enter => app.commit(),
                KeyCode::Backspace => app.pop_char(),
                KeyCode::Char(c) => app.push_char(c),
                _ => {}
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use codewizard_rating::models::TierName;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, code, KeyModifiers::NONE);
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_ctrl_c_quits_in_both_modes() {
        let mut app = App::new();
        handle_key(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);

        let mut app = App::new();
        app.stop_editing();
        handle_key(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_command_letters_do_not_fire_while_editing() {
        let mut app = App::new();
        type_str(&mut app, "12q");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.current_input, "12");

        press(&mut app, KeyCode::Char('e'));
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.current_input, "12e2");
        assert_eq!(app.input_mode, InputMode::Editing);
        assert_eq!(app.tier().name, TierName::Expert);
    }

    #[test]
    fn test_backspace_and_escape_while_editing() {
        let mut app = App::new();
        type_str(&mut app, "1450");
        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.current_input, "145");

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_normal_mode_commands() {
        let mut app = App::new();
        type_str(&mut app, "900");
        press(&mut app, KeyCode::Esc);

        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.current_input, "900");

        press(&mut app, KeyCode::Char('c'));
        assert!(app.current_input.is_empty());

        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.input_mode, InputMode::Editing);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_arrows_step_in_both_modes() {
        let mut app = App::new();
        type_str(&mut app, "1350");
        press(&mut app, KeyCode::Up);
        assert_eq!(app.current_input, "1450");
        assert_eq!(app.tier().name, TierName::CandidateMaster);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        assert_eq!(app.current_input, "1250");
        assert_eq!(app.input_mode, InputMode::Normal);
    }

    #[test]
    fn test_enter_commits_in_both_modes() {
        let mut app = App::new();
        type_str(&mut app, "2300");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history, vec!["2300".to_string()]);

        press(&mut app, KeyCode::Esc);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.history, vec!["2400".to_string(), "2300".to_string()]);
    }
}
