//! Presentation adapter - turns evaluation results into display state.
//!
//! Nothing here draws anything. A GUI layer owns an [`AppState`], forwards
//! user actions to it and paints whatever it returns.

use secrecy::{ExposeSecret, SecretString};

use crate::criteria::{CRITERIA, Criterion};
use crate::evaluator::{EvaluationResult, evaluate_secret};
use crate::palette::{Color, Palette};

pub const CHECK_GLYPH: char = '\u{2713}';
pub const MASK_GLYPH: char = '*';
pub const LOCK_ICON: &str = "\u{1F512}";
pub const EYE_ICON: &str = "\u{1F441}";

pub const NOTIFICATION_TITLE: &str = "Password Strength Result";
pub const NOTIFICATION_MESSAGE: &str = "Strong password! All conditions met.";

/// Whether the password field shows its characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldVisibility {
    #[default]
    Masked,
    Revealed,
}

impl FieldVisibility {
    pub fn toggled(self) -> Self {
        match self {
            FieldVisibility::Masked => FieldVisibility::Revealed,
            FieldVisibility::Revealed => FieldVisibility::Masked,
        }
    }

    /// Mask character for the text field, `None` when revealed.
    pub fn mask_char(self) -> Option<char> {
        match self {
            FieldVisibility::Masked => Some(MASK_GLYPH),
            FieldVisibility::Revealed => None,
        }
    }
}

/// Glyph and color of the show/hide button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToggleIcon {
    pub glyph: &'static str,
    pub color: Color,
}

impl ToggleIcon {
    pub fn for_state(visibility: FieldVisibility, palette: &Palette) -> Self {
        match visibility {
            FieldVisibility::Masked => Self {
                glyph: LOCK_ICON,
                color: palette.foreground,
            },
            FieldVisibility::Revealed => Self {
                glyph: EYE_ICON,
                color: palette.accent,
            },
        }
    }
}

/// One row of the checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChecklistLine {
    pub criterion: &'static Criterion,
    pub checked: bool,
    pub color: Color,
}

impl ChecklistLine {
    /// Label text, e.g. `[✓] 10 characters long`.
    pub fn text(&self) -> String {
        let mark = if self.checked { CHECK_GLYPH } else { ' ' };
        format!("[{}] {}", mark, self.criterion.description)
    }
}

/// All checklist rows, in criterion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checklist {
    pub lines: Vec<ChecklistLine>,
}

impl Checklist {
    /// Unchecked rows in the neutral foreground color, shown before any check.
    pub fn initial(palette: &Palette) -> Self {
        Self {
            lines: CRITERIA
                .iter()
                .map(|criterion| ChecklistLine {
                    criterion,
                    checked: false,
                    color: palette.foreground,
                })
                .collect(),
        }
    }

    pub fn all_checked(&self) -> bool {
        self.lines.iter().all(|line| line.checked)
    }
}

/// Confirmation shown when every criterion is met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification {
    pub title: &'static str,
    pub message: &'static str,
}

impl Notification {
    pub fn strong_password() -> Self {
        Self {
            title: NOTIFICATION_TITLE,
            message: NOTIFICATION_MESSAGE,
        }
    }
}

/// Everything a GUI needs to repaint after a check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Render {
    pub checklist: Checklist,
    pub notification: Option<Notification>,
}

/// Maps an evaluation result to checklist rows.
pub fn render(result: &EvaluationResult, palette: &Palette) -> Checklist {
    Checklist {
        lines: CRITERIA
            .iter()
            .map(|criterion| {
                let checked = result.get(criterion.id);
                ChecklistLine {
                    criterion,
                    checked,
                    color: if checked { palette.success } else { palette.failure },
                }
            })
            .collect(),
    }
}

/// Application state of the checklist window.
///
/// Built once at startup and handed to event handlers by `&mut`.
pub struct AppState {
    input: SecretString,
    visibility: FieldVisibility,
    palette: Palette,
    checklist: Checklist,
}

impl AppState {
    pub fn new(palette: Palette) -> Self {
        Self {
            input: SecretString::new(String::new().into()),
            visibility: FieldVisibility::default(),
            checklist: Checklist::initial(&palette),
            palette,
        }
    }

    /// Replaces the password field contents.
    pub fn set_input(&mut self, text: impl Into<String>) {
        let text: String = text.into();
        self.input = SecretString::new(text.into());
    }

    pub fn input(&self) -> &SecretString {
        &self.input
    }

    /// The field contents as drawn on screen.
    pub fn displayed_text(&self) -> String {
        let text = self.input.expose_secret();
        match self.visibility.mask_char() {
            Some(mask) => text.chars().map(|_| mask).collect(),
            None => text.to_string(),
        }
    }

    /// Handles the "Check Strength" action.
    pub fn check(&mut self) -> Render {
        let result = evaluate_secret(&self.input);
        self.apply(&result)
    }

    /// Updates the checklist from a result computed elsewhere.
    pub fn apply(&mut self, result: &EvaluationResult) -> Render {
        self.checklist = render(result, &self.palette);

        let notification = if result.is_success() {
            #[cfg(feature = "tracing")]
            tracing::info!("All password criteria met, raising notification");
            Some(Notification::strong_password())
        } else {
            None
        };

        Render {
            checklist: self.checklist.clone(),
            notification,
        }
    }

    /// Handles the show/hide button. Returns the new icon.
    pub fn toggle_visibility(&mut self) -> ToggleIcon {
        self.visibility = self.visibility.toggled();

        #[cfg(feature = "tracing")]
        tracing::debug!("Password field visibility: {:?}", self.visibility);

        self.toggle_icon()
    }

    pub fn visibility(&self) -> FieldVisibility {
        self.visibility
    }

    pub fn toggle_icon(&self) -> ToggleIcon {
        ToggleIcon::for_state(self.visibility, &self.palette)
    }

    pub fn checklist(&self) -> &Checklist {
        &self.checklist
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Palette::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::criteria::CriterionId;
    use crate::evaluator::evaluate;

    fn texts(checklist: &Checklist) -> Vec<String> {
        checklist.lines.iter().map(ChecklistLine::text).collect()
    }

    #[test]
    fn test_visibility_default_masked() {
        assert_eq!(FieldVisibility::default(), FieldVisibility::Masked);
        assert_eq!(FieldVisibility::Masked.mask_char(), Some('*'));
        assert_eq!(FieldVisibility::Revealed.mask_char(), None);
    }

    #[test]
    fn test_visibility_toggled_twice_is_identity() {
        let state = FieldVisibility::Masked;
        assert_eq!(state.toggled(), FieldVisibility::Revealed);
        assert_eq!(state.toggled().toggled(), state);
    }

    #[test]
    fn test_render_mixed_result() {
        let palette = Palette::default();
        let checklist = render(&evaluate("short1A!"), &palette);

        assert_eq!(
            texts(&checklist),
            vec![
                "[ ] 10 characters long",
                "[✓] Minimum one uppercase letter",
                "[✓] Include numbers (digits)",
                "[✓] Include symbols (special characters)",
            ]
        );
        assert_eq!(checklist.lines[0].color, palette.failure);
        assert!(checklist.lines[1..].iter().all(|l| l.color == palette.success));
        assert!(!checklist.all_checked());
    }

    #[test]
    fn test_render_follows_criterion_order() {
        let checklist = render(&evaluate(""), &Palette::default());
        let ids: Vec<_> = checklist.lines.iter().map(|l| l.criterion.id).collect();
        assert_eq!(ids, CriterionId::ALL.to_vec());
    }

    #[test]
    fn test_initial_state() {
        let app = AppState::default();
        let palette = Palette::default();

        assert_eq!(app.visibility(), FieldVisibility::Masked);
        assert_eq!(app.toggle_icon().glyph, LOCK_ICON);
        assert_eq!(app.displayed_text(), "");
        assert!(app.checklist().lines.iter().all(|l| !l.checked));
        assert!(app.checklist().lines.iter().all(|l| l.color == palette.foreground));
    }

    #[test]
    fn test_check_weak_password_no_notification() {
        let mut app = AppState::default();
        app.set_input("longenoughpass");

        let render = app.check();
        assert!(render.notification.is_none());
        assert_eq!(&render.checklist, app.checklist());
        assert!(render.checklist.lines[0].checked);
        assert!(!render.checklist.all_checked());
    }

    #[test]
    fn test_check_strong_password_notifies() {
        let mut app = AppState::default();
        app.set_input("StrongPass1!");

        let render = app.check();
        assert_eq!(render.notification, Some(Notification::strong_password()));
        assert!(render.checklist.all_checked());
        assert_eq!(
            render.notification.map(|n| n.message),
            Some("Strong password! All conditions met.")
        );
    }

    #[test]
    fn test_check_after_edit_clears_checks() {
        let mut app = AppState::default();
        app.set_input("StrongPass1!");
        app.check();

        app.set_input("");
        let render = app.check();
        assert!(render.notification.is_none());
        assert!(render.checklist.lines.iter().all(|l| !l.checked));
        assert!(render.checklist.lines.iter().all(|l| l.color == app.palette().failure));
    }

    #[test]
    fn test_toggle_visibility_updates_icon_and_text() {
        let mut app = AppState::default();
        let palette = Palette::default();
        app.set_input("pässwörd");

        assert_eq!(app.displayed_text(), "********");

        let icon = app.toggle_visibility();
        assert_eq!(app.visibility(), FieldVisibility::Revealed);
        assert_eq!(
            icon,
            ToggleIcon {
                glyph: EYE_ICON,
                color: palette.accent,
            }
        );
        assert_eq!(app.displayed_text(), "pässwörd");

        let icon = app.toggle_visibility();
        assert_eq!(app.visibility(), FieldVisibility::Masked);
        assert_eq!(
            icon,
            ToggleIcon {
                glyph: LOCK_ICON,
                color: palette.foreground,
            }
        );
        assert_eq!(app.displayed_text(), "********");
    }

    #[test]
    fn test_toggle_does_not_change_checklist() {
        let mut app = AppState::default();
        app.set_input("short1A!");
        app.check();
        let before = app.checklist().clone();

        app.toggle_visibility();
        assert_eq!(app.checklist(), &before);
    }

    #[test]
    fn test_set_input_stores_secret() {
        let mut app = AppState::default();
        app.set_input("StrongPass1!");
        assert_eq!(app.input().expose_secret(), "StrongPass1!");
        // Storing input does not evaluate it
        assert!(app.checklist().lines.iter().all(|l| !l.checked));
    }

    #[test]
    fn test_check_evaluates_in_place() {
        let mut app = AppState::default();
        app.set_input("short1A!");
        let first = app.check();
        app.set_input("StrongPass1!");
        let second = app.check();

        assert_eq!(first.checklist, render(&evaluate("short1A!"), app.palette()));
        assert_eq!(&second.checklist, app.checklist());
        assert!(second.notification.is_some());
    }

    #[test]
    fn test_apply_external_result() {
        let mut app = AppState::default();
        let render = app.apply(&evaluate("StrongPass1!"));
        assert!(render.notification.is_some());
        assert!(app.checklist().all_checked());
    }

    #[test]
    fn test_custom_palette_used() {
        let palette = Palette {
            success: Color::rgb(1, 2, 3),
            ..Palette::default()
        };
        let mut app = AppState::new(palette);
        app.set_input("StrongPass1!");
        let render = app.check();
        assert!(render.checklist.lines.iter().all(|l| l.color == Color::rgb(1, 2, 3)));
    }
}
