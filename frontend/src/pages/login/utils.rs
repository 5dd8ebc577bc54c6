use std::fmt;

/// Tri-state validity of a single field. `Unknown` until the first edit or blur.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Validity {
    #[default]
    Unknown,
    Valid,
    Invalid,
}

impl Validity {
    pub fn from_bool(valid: bool) -> Self {
        if valid {
            Validity::Valid
        } else {
            Validity::Invalid
        }
    }

    pub fn is_valid(self) -> bool {
        self == Validity::Valid
    }

    /// Only a definitive `Invalid` is rendered with error styling.
    pub fn is_invalid(self) -> bool {
        self == Validity::Invalid
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AggregateValidity {
    #[default]
    Unknown,
    ValidForm,
    InvalidForm,
}

impl AggregateValidity {
    /// `Unknown` field validity counts as not valid.
    pub fn combine(email: Validity, password: Validity) -> Self {
        if email.is_valid() && password.is_valid() {
            AggregateValidity::ValidForm
        } else {
            AggregateValidity::InvalidForm
        }
    }

    pub fn is_valid(self) -> bool {
        self == AggregateValidity::ValidForm
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
    Email,
    Password,
}

impl FieldId {
    pub fn dom_id(self) -> &'static str {
        match self {
            FieldId::Email => "email",
            FieldId::Password => "password",
        }
    }

    pub fn is_value_valid(self, value: &str) -> bool {
        match self {
            FieldId::Email => email_is_valid(value),
            FieldId::Password => password_is_valid(value),
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dom_id())
    }
}

pub const PASSWORD_MIN_EXCLUSIVE: usize = 6;

pub fn email_is_valid(value: &str) -> bool {
    value.contains('@')
}

/// Browser `trim()` strips U+FEFF but not U+0085, and `length` counts UTF-16 units.
fn is_trimmed(c: char) -> bool {
    c == '\u{FEFF}' || (c.is_whitespace() && c != '\u{0085}')
}

pub fn password_is_valid(value: &str) -> bool {
    value.trim_matches(is_trimmed).encode_utf16().count() > PASSWORD_MIN_EXCLUSIVE
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldAction {
    UserInput(String),
    InputBlur,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    pub value: String,
    pub validity: Validity,
}

impl FieldState {
    /// Applies one transition for the given field. Both transitions leave the
    /// validity definitive.
    pub fn apply(&mut self, field: FieldId, action: FieldAction) {
        if let FieldAction::UserInput(value) = action {
            self.value = value;
        }
        self.validity = Validity::from_bool(field.is_value_valid(&self.value));
    }
}
