/// A single reason a field value was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldFailure {
    Required,
    MinLength {
        required_length: usize,
        actual_length: usize,
    },
    MaxLength {
        required_length: usize,
        actual_length: usize,
    },
    /// Any other rejection, rendered with the generic message
    Invalid,
}

/// The set of failures currently active on a field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<FieldFailure>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, failure: FieldFailure) {
        if !self.0.contains(&failure) {
            self.0.push(failure);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldFailure> {
        self.0.iter()
    }

    fn required(&self) -> bool {
        self.0.iter().any(|f| matches!(f, FieldFailure::Required))
    }

    fn min_length(&self) -> Option<usize> {
        self.0.iter().find_map(|f| match f {
            FieldFailure::MinLength {
                required_length, ..
            } => Some(*required_length),
            _ => None,
        })
    }

    fn max_length(&self) -> Option<usize> {
        self.0.iter().find_map(|f| match f {
            FieldFailure::MaxLength {
                required_length, ..
            } => Some(*required_length),
            _ => None,
        })
    }
}

impl From<Vec<FieldFailure>> for FieldErrors {
    fn from(failures: Vec<FieldFailure>) -> Self {
        let mut errors = Self::new();
        for failure in failures {
            errors.insert(failure);
        }
        errors
    }
}

/// Constraints on a text field. Values are checked after trimming and
/// lengths are counted in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
}

/// `firstname` and `lastname`
pub const NAME_RULES: FieldRules = FieldRules {
    required: true,
    min_length: Some(2),
    max_length: Some(64),
};

/// `address` and `telephone`
pub const CONTACT_RULES: FieldRules = FieldRules {
    required: false,
    min_length: None,
    max_length: Some(128),
};

impl FieldRules {
    pub fn check(&self, value: &str) -> FieldErrors {
        let mut errors = FieldErrors::new();
        let value = value.trim();
        if value.is_empty() {
            if self.required {
                errors.insert(FieldFailure::Required);
            }
            return errors;
        }

        let actual_length = value.chars().count();
        if let Some(required_length) = self.min_length {
            if actual_length < required_length {
                errors.insert(FieldFailure::MinLength {
                    required_length,
                    actual_length,
                });
            }
        }
        if let Some(required_length) = self.max_length {
            if actual_length > required_length {
                errors.insert(FieldFailure::MaxLength {
                    required_length,
                    actual_length,
                });
            }
        }
        errors
    }
}

/// Maps the failures of a field to the one message shown to the user.
///
/// Nothing is shown before the field has been touched. When several failures
/// are active the most basic one wins: required, then minimum length, then
/// maximum length, then the generic message.
pub fn error_message(errors: &FieldErrors, touched: bool) -> String {
    if !touched || errors.is_empty() {
        return String::new();
    }
    if errors.required() {
        return "This field is required".into();
    }
    if let Some(length) = errors.min_length() {
        return format!("Minimum {} characters required", length);
    }
    if let Some(length) = errors.max_length() {
        return format!("Maximum {} characters allowed", length);
    }
    "Invalid value".into()
}
