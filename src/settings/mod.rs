//! Interval duration settings.
//!
//! This module provides:
//! - Range validation for minute values
//! - The committed settings store with an all-or-nothing apply
//! - The editable draft backing the settings dialog

mod error;

pub use error::{ErrorKind, SettingsError};

use crate::types::{Durations, MAX_MINUTES};

// ============================================================================
// Validation
// ============================================================================

/// Validates a minute value.
///
/// Accepts `1..=120` inclusive and returns it as `u32`.
///
/// # Errors
///
/// Returns [`SettingsError::NotPositive`] for values `<= 0` and
/// [`SettingsError::ExceedsMaximum`] for values above 120.
pub fn validate(minutes: i64) -> Result<u32, SettingsError> {
    if minutes <= 0 {
        return Err(SettingsError::NotPositive);
    }
    if minutes > i64::from(MAX_MINUTES) {
        return Err(SettingsError::ExceedsMaximum);
    }
    // In range, so the narrowing cannot fail.
    u32::try_from(minutes).map_err(|_| SettingsError::ExceedsMaximum)
}

/// Parses and validates user-entered minutes.
///
/// Input that is not an integer is rejected as not positive.
pub fn parse_minutes(input: &str) -> Result<u32, SettingsError> {
    let value = input
        .trim()
        .parse::<i64>()
        .map_err(|_| SettingsError::NotPositive)?;
    validate(value)
}

// ============================================================================
// SettingsStore
// ============================================================================

/// Holds the committed work and break durations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsStore {
    committed: Durations,
}

impl SettingsStore {
    /// Creates a store with the given committed durations.
    pub fn new(committed: Durations) -> Self {
        Self { committed }
    }

    /// Returns the committed durations.
    pub fn durations(&self) -> Durations {
        self.committed
    }

    /// Validates and commits both durations together.
    ///
    /// The work value is checked before the break value; the first failure
    /// is returned and nothing is committed.
    pub fn apply(
        &mut self,
        work_minutes: i64,
        break_minutes: i64,
    ) -> Result<Durations, SettingsError> {
        let work = validate(work_minutes)?;
        let brk = validate(break_minutes)?;

        self.committed = Durations::new(work, brk);
        tracing::debug!(
            work_minutes = work,
            break_minutes = brk,
            "settings committed"
        );
        Ok(self.committed)
    }
}

// ============================================================================
// SettingsDraft
// ============================================================================

/// Which input of the settings dialog has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsField {
    /// Work minutes input
    #[default]
    Work,
    /// Break minutes input
    Break,
}

impl SettingsField {
    /// Returns the other field.
    pub fn other(&self) -> Self {
        match self {
            SettingsField::Work => SettingsField::Break,
            SettingsField::Break => SettingsField::Work,
        }
    }

    /// Returns the label shown next to the input.
    pub fn label(&self) -> &'static str {
        match self {
            SettingsField::Work => "Work Time (minutes):",
            SettingsField::Break => "Break Time (minutes):",
        }
    }
}

/// Maximum characters accepted in a minutes input.
const MAX_INPUT_LEN: usize = 6;

/// An in-progress edit of the settings.
///
/// Fields hold raw text so that invalid values can be shown while typing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SettingsDraft {
    work_input: String,
    break_input: String,
    focused: SettingsField,
    error: Option<SettingsError>,
}

impl SettingsDraft {
    /// Seeds a draft from committed durations.
    pub fn seeded(durations: Durations) -> Self {
        Self {
            work_input: durations.work_minutes.to_string(),
            break_input: durations.break_minutes.to_string(),
            focused: SettingsField::Work,
            error: None,
        }
    }

    /// Returns the raw text of a field.
    pub fn input(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::Work => &self.work_input,
            SettingsField::Break => &self.break_input,
        }
    }

    /// Returns the focused field.
    pub fn focused(&self) -> SettingsField {
        self.focused
    }

    /// Returns the inline validation error, if any.
    pub fn error(&self) -> Option<&SettingsError> {
        self.error.as_ref()
    }

    /// Moves focus to the other field.
    pub fn focus_next(&mut self) {
        self.focused = self.focused.other();
    }

    /// Appends a character to the focused field and re-validates it.
    pub fn push_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let input = self.focused_input_mut();
        if input.chars().count() >= MAX_INPUT_LEN {
            return;
        }
        input.push(c);
        self.revalidate_focused();
    }

    /// Removes the last character of the focused field and re-validates it.
    pub fn pop_char(&mut self) {
        self.focused_input_mut().pop();
        self.revalidate_focused();
    }

    /// Replaces the text of a field and re-validates it.
    pub fn set_input(&mut self, field: SettingsField, value: impl Into<String>) {
        match field {
            SettingsField::Work => self.work_input = value.into(),
            SettingsField::Break => self.break_input = value.into(),
        }
        self.error = parse_minutes(self.input(field)).err();
    }

    /// Parses both fields into raw minute values for [`SettingsStore::apply`].
    ///
    /// Non-numeric text maps to 0, which fails validation.
    pub fn values(&self) -> (i64, i64) {
        (parse_raw(&self.work_input), parse_raw(&self.break_input))
    }

    /// Records an error from a rejected apply.
    pub fn set_error(&mut self, error: SettingsError) {
        self.error = Some(error);
    }

    fn focused_input_mut(&mut self) -> &mut String {
        match self.focused {
            SettingsField::Work => &mut self.work_input,
            SettingsField::Break => &mut self.break_input,
        }
    }

    fn revalidate_focused(&mut self) {
        self.error = parse_minutes(self.input(self.focused)).err();
    }
}

fn parse_raw(input: &str) -> i64 {
    input.trim().parse::<i64>().unwrap_or(0)
}

// ============================================================================
// Tests
// ============================================================================
