//! Application state and core logic

use crate::config::TuiConfig;
use crate::schema::{self, registration_schema, FormSchema};
use crate::state::{AppState, Form};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance, rendering the configured schema file or
    /// the built-in registration schema. Needs no terminal: schema and
    /// config errors surface before raw mode is entered.
    pub fn new() -> Result<Self> {
        let config = TuiConfig::load().unwrap_or_else(|err| {
            tracing::warn!("failed to load config, using defaults: {err:#}");
            TuiConfig::default()
        });
        Self::from_config(&config)
    }

    /// Create an App from an already-loaded configuration
    pub fn from_config(config: &TuiConfig) -> Result<Self> {
        let schema = match config.schema_path.as_deref() {
            Some(path) => schema::load_schema(path)?,
            None => registration_schema(),
        };
        tracing::info!(
            title = %schema.form_title,
            fields = schema.fields.len(),
            "rendering form"
        );

        let mut app = Self::with_schema(&schema);
        app.state.show_help_bar = config.show_help_bar.unwrap_or(true);
        Ok(app)
    }

    /// Create an App rendering the given schema
    pub fn with_schema(schema: &FormSchema) -> Self {
        Self {
            state: AppState::new(schema),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Backspace => self.state.form.get_active_field_mut().pop_char(),
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.form.get_active_field_mut().clear();
            }
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.state.form.get_active_field_mut().push_char(c);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::registration_schema;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        App::with_schema(&registration_schema())
    }

    mod quitting {
        use super::*;

        #[test]
        fn test_does_not_quit_by_default() {
            let app = test_app();
            assert!(!app.should_quit());
        }

        #[test]
        fn test_esc_quits() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Esc));
            assert!(app.should_quit());
        }
    }

    mod navigation {
        use super::*;

        #[test]
        fn test_tab_moves_to_next_field() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Tab));
            assert_eq!(app.state.form.active_field(), 1);
        }

        #[test]
        fn test_down_moves_to_next_field() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Down));
            assert_eq!(app.state.form.active_field(), 1);
        }

        #[test]
        fn test_back_tab_wraps_to_last_field() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::BackTab));
            assert_eq!(app.state.form.active_field(), 2);
        }

        #[test]
        fn test_tab_wraps_around() {
            let mut app = test_app();
            for _ in 0..3 {
                app.handle_key(key(KeyCode::Tab));
            }
            assert_eq!(app.state.form.active_field(), 0);
        }
    }

    mod editing {
        use super::*;

        #[test]
        fn test_chars_append_to_active_field() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('J')));
            app.handle_key(key(KeyCode::Char('o')));
            assert_eq!(app.state.form.get_field(0).unwrap().value(), "Jo");
        }

        #[test]
        fn test_chars_follow_focus() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Tab));
            app.handle_key(key(KeyCode::Char('a')));
            assert_eq!(app.state.form.get_field(0).unwrap().value(), "");
            assert_eq!(app.state.form.get_field(1).unwrap().value(), "a");
        }

        #[test]
        fn test_backspace_removes_last_char() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('a')));
            app.handle_key(key(KeyCode::Char('b')));
            app.handle_key(key(KeyCode::Backspace));
            assert_eq!(app.state.form.get_field(0).unwrap().value(), "a");
        }

        #[test]
        fn test_ctrl_u_clears_active_field() {
            let mut app = test_app();
            app.handle_key(key(KeyCode::Char('a')));
            app.handle_key(key(KeyCode::Char('b')));
            app.handle_key(KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL));
            assert_eq!(app.state.form.get_field(0).unwrap().value(), "");
        }

        #[test]
        fn test_ctrl_chars_are_not_inserted() {
            let mut app = test_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL));
            assert_eq!(app.state.form.get_field(0).unwrap().value(), "");
        }

        #[test]
        fn test_alt_chars_are_not_inserted() {
            let mut app = test_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT));
            assert_eq!(app.state.form.get_field(0).unwrap().value(), "");
        }

        #[test]
        fn test_shifted_chars_are_inserted() {
            let mut app = test_app();
            app.handle_key(KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT));
            assert_eq!(app.state.form.get_field(0).unwrap().value(), "X");
        }
    }

    mod construction {
        use super::*;
        use std::fs;

        #[test]
        fn test_from_config_with_missing_schema_file_is_an_error() {
            let config = TuiConfig {
                schema_path: Some("/nonexistent/thinkalike-schema.json".to_string()),
                ..Default::default()
            };
            assert!(App::from_config(&config).is_err());
        }

        #[test]
        fn test_from_config_without_schema_path_uses_builtin() {
            let app = App::from_config(&TuiConfig::default()).unwrap();
            assert_eq!(app.state.form.title(), "User Registration");
            assert!(app.state.show_help_bar);
        }

        #[test]
        fn test_from_config_loads_schema_file_and_options() {
            let json = serde_json::to_string(&registration_schema()).unwrap();
            let path = std::env::temp_dir()
                .join(format!("thinkalike-{}-app-config.json", std::process::id()));
            fs::write(&path, json).unwrap();

            let config = TuiConfig {
                schema_path: Some(path.to_string_lossy().into_owned()),
                show_help_bar: Some(false),
            };
            let app = App::from_config(&config).unwrap();
            assert_eq!(app.state.form.title(), "User Registration");
            assert!(!app.state.show_help_bar);

            fs::remove_file(path).unwrap();
        }
    }
}
