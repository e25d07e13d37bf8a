//! Password criteria checklist library
//!
//! This library checks a password against four fixed criteria (length,
//! uppercase letter, digit, symbol) and turns the outcome into display
//! state for a checklist window, without depending on any GUI toolkit.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_CHECKLIST_SUCCESS_COLOR`, `PWD_CHECKLIST_FAILURE_COLOR`,
//!   `PWD_CHECKLIST_FOREGROUND_COLOR`, `PWD_CHECKLIST_ACCENT_COLOR`,
//!   `PWD_CHECKLIST_BACKGROUND_COLOR`: `#RRGGBB` overrides read by
//!   [`Palette::from_env`]
//!
//! # Example
//!
//! ```rust
//! use pwd_checklist::{evaluate, AppState, Palette};
//!
//! let result = evaluate("StrongPass1!");
//! assert!(result.is_success());
//!
//! let mut app = AppState::new(Palette::default());
//! app.set_input("short1A!");
//! let render = app.check();
//! for line in &render.checklist.lines {
//!     println!("{} ({})", line.text(), line.color);
//! }
//! assert!(render.notification.is_none());
//! ```

// Internal modules
mod criteria;
mod evaluator;
mod palette;
mod presentation;

// Public API
pub use criteria::{CRITERIA, Criterion, CriterionId, MIN_LENGTH, ParseCriterionError};
pub use evaluator::{EvaluationResult, evaluate, evaluate_secret};
pub use palette::{Color, Palette, PaletteError};
pub use presentation::{
    AppState, Checklist, ChecklistLine, FieldVisibility, Notification, Render, ToggleIcon, render,
};
