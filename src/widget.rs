//! A presentation-agnostic date input.
//!
//! [`DateInput`] holds everything one text field needs: the current text, its
//! options and whether it is valid. A UI layer forwards input, keypress and
//! blur events to it and renders whatever the [`DateInputObserver`] is told.

use chrono::NaiveDate;

use crate::{
    DateInputOptions, DateTextValidator, FormatError, KeyDecision, NormalizedDate, filter_key,
    prelude::*, reformat_keystrokes,
};

/// What a success/error indicator next to the input should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display)]
pub enum ValidationStatus {
    /// Nothing to show: the input is empty or messages are disabled
    #[default]
    #[display(fmt = "neutral")]
    Neutral,
    /// The input holds a valid date
    #[display(fmt = "success")]
    Valid,
    /// The input holds something that is not a valid date
    #[display(fmt = "error")]
    Invalid,
}

/// Receives state changes from a [`DateInput`].
///
/// All methods default to doing nothing.
pub trait DateInputObserver {
    /// Called after every input event with the (formatted) text
    fn on_change(&mut self, _value: &str, _is_valid: bool) {}

    /// Called when an input event turns the value valid
    fn on_valid(&mut self, _value: &str) {}

    /// Called when an input event turns the value invalid
    fn on_invalid(&mut self, _value: &str) {}

    /// Called whenever validation runs, with the indicator state to render
    fn on_status(&mut self, _status: ValidationStatus) {}
}

impl DateInputObserver for () {}

impl<T: DateInputObserver + ?Sized> DateInputObserver for Box<T> {
    fn on_change(&mut self, value: &str, is_valid: bool) {
        (**self).on_change(value, is_valid);
    }

    fn on_valid(&mut self, value: &str) {
        (**self).on_valid(value);
    }

    fn on_invalid(&mut self, value: &str) {
        (**self).on_invalid(value);
    }

    fn on_status(&mut self, status: ValidationStatus) {
        (**self).on_status(status);
    }
}

/// State of one date text field.
#[derive(Debug, Clone)]
pub struct DateInput<O = ()> {
    value: String,
    options: DateInputOptions,
    validator: DateTextValidator,
    is_valid: bool,
    status: ValidationStatus,
    observer: O,
}

impl DateInput {
    /// Creates an input without an observer
    pub fn with_options(options: DateInputOptions) -> Self {
        Self::new(options, ())
    }
}

impl Default for DateInput {
    fn default() -> Self {
        Self::with_options(DateInputOptions::default())
    }
}

impl<O: DateInputObserver> DateInput<O> {
    /// Creates an empty input reporting to `observer`.
    ///
    /// Runs an initial validation when `validate_on_init` is set.
    pub fn new(options: DateInputOptions, observer: O) -> Self {
        let validator = DateTextValidator::new(options.range());
        let mut input = Self {
            value: String::new(),
            options,
            validator,
            is_valid: false,
            status: ValidationStatus::Neutral,
            observer,
        };
        if input.options.validate_on_init {
            input.validate();
        }
        input
    }

    /// Handles an input event carrying the field's full raw text.
    ///
    /// Formats (if enabled) and validates the text, then notifies
    /// `on_change`, followed by `on_valid`/`on_invalid` if validity flipped.
    pub fn handle_input(&mut self, raw: &str) {
        self.value = raw.to_owned();
        if self.options.auto_format {
            self.value = reformat_keystrokes(&self.value);
        }

        let was_valid = self.is_valid;
        self.validate();

        self.observer.on_change(&self.value, self.is_valid);
        if was_valid != self.is_valid {
            if self.is_valid {
                self.observer.on_valid(&self.value);
            } else {
                self.observer.on_invalid(&self.value);
            }
        }
    }

    /// Decides whether a keypress may reach the field.
    pub fn handle_key_press(&self, code: u32) -> KeyDecision {
        filter_key(code)
    }

    /// Handles the field losing focus by re-validating.
    pub fn handle_blur(&mut self) -> bool {
        self.validate()
    }

    /// Re-validates the current text and publishes the indicator status.
    pub fn validate(&mut self) -> bool {
        let is_valid = self.validator.validate(&self.value);
        if is_valid != self.is_valid {
            tracing::debug!(value = %self.value, is_valid, "date input validity changed");
        }
        self.is_valid = is_valid;
        self.publish_status();
        is_valid
    }

    /// Converts the current text into `YYYY-MM-DD`.
    ///
    /// # Errors
    /// Returns `FormatError` if the text does not validate.
    pub fn to_normalized(&mut self) -> Result<NormalizedDate, FormatError> {
        self.validate();
        self.validator.to_normalized(&self.value)
    }

    /// Converts the current text into a calendar date.
    ///
    /// # Errors
    /// Returns `FormatError` if the text does not validate.
    pub fn to_naive_date(&mut self) -> Result<NaiveDate, FormatError> {
        self.validate();
        self.validator.to_naive_date(&self.value)
    }

    /// Returns the current text
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replaces the text programmatically.
    ///
    /// Formats and validates like an input event, but does not call the
    /// change callbacks.
    pub fn set_value(&mut self, value: &str) {
        self.value = if self.options.auto_format {
            reformat_keystrokes(value)
        } else {
            value.to_owned()
        };
        self.validate();
    }

    /// Empties the field and resets it to invalid.
    pub fn clear(&mut self) {
        self.value.clear();
        self.is_valid = false;
        self.publish_status();
    }

    /// Returns the result of the last validation
    pub const fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// Returns the indicator status from the last validation
    pub const fn status(&self) -> ValidationStatus {
        self.status
    }

    /// Returns the hint to show while the field is empty
    pub fn placeholder(&self) -> Option<&str> {
        self.options.placeholder.as_deref()
    }

    /// Returns the options this input was created with
    pub const fn options(&self) -> &DateInputOptions {
        &self.options
    }

    /// Returns the observer
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the observer mutably
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Tears the input down, returning its last text.
    pub fn into_value(self) -> String {
        self.value
    }

    fn publish_status(&mut self) {
        self.status = if !self.options.show_validation_messages || self.value.is_empty() {
            ValidationStatus::Neutral
        } else if self.is_valid {
            ValidationStatus::Valid
        } else {
            ValidationStatus::Invalid
        };
        self.observer.on_status(self.status);
    }
}
