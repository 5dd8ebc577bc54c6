use super::utils::FieldId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("{0} input is not mounted")]
    FocusUnavailable(FieldId),
    #[error("browser refused to focus the {0} input")]
    FocusRejected(FieldId),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_field() {
        assert_eq!(
            FormError::FocusUnavailable(FieldId::Email).to_string(),
            "email input is not mounted"
        );
        assert_eq!(
            FormError::FocusRejected(FieldId::Password).to_string(),
            "browser refused to focus the password input"
        );
    }
}
