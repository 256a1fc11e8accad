use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::errors::{AppError, Result};
use crate::models::engine::NewEngine;

pub const EMAIL_SHAPE_MESSAGE: &str = "Email must contain @ and .";
pub const PASSWORD_LENGTH_MESSAGE: &str = "Password too short";

#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(custom(function = "validate_email_shape"))]
    pub email: String,

    #[validate(length(min = 5, message = "Password too short"))]
    pub password: String,
}

fn validate_email_shape(email: &str) -> std::result::Result<(), ValidationError> {
    if email.contains('@') && email.contains('.') {
        Ok(())
    } else {
        Err(ValidationError::new("email_shape").with_message(EMAIL_SHAPE_MESSAGE.into()))
    }
}

impl LoginForm {
    /// First failing rule, email before password.
    pub fn check(&self) -> Result<()> {
        let Err(errors) = self.validate() else {
            return Ok(());
        };
        let fields = errors.field_errors();
        let message = if fields.contains_key("email") {
            EMAIL_SHAPE_MESSAGE
        } else {
            PASSWORD_LENGTH_MESSAGE
        };
        Err(AppError::invalid_data(message))
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateEngineForm {
    pub name: String,
    pub rating: String,
    pub author: String,
}

impl CreateEngineForm {
    /// Rejects ratings that are not finite numbers instead of storing NaN.
    pub fn into_new_engine(self) -> Result<NewEngine> {
        let rating: f64 = self
            .rating
            .trim()
            .parse()
            .ok()
            .filter(|value: &f64| value.is_finite())
            .ok_or_else(|| {
                AppError::invalid_data(format!("Rating must be a number, got \"{}\"", self.rating))
            })?;

        Ok(NewEngine {
            name: self.name,
            rating,
            author: self.author,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(email: &str, password: &str) -> LoginForm {
        LoginForm {
            email: email.into(),
            password: password.into(),
        }
    }

    fn message(result: Result<()>) -> Option<String> {
        match result {
            Err(AppError::ValidationError(msg)) => Some(msg),
            Err(other) => panic!("unexpected error: {other:?}"),
            Ok(()) => None,
        }
    }

    #[test]
    fn email_needs_at_sign_and_dot() {
        assert_eq!(message(login("bob", "secret").check()).as_deref(), Some(EMAIL_SHAPE_MESSAGE));
        assert_eq!(
            message(login("bob@example", "secret").check()).as_deref(),
            Some(EMAIL_SHAPE_MESSAGE)
        );
        assert_eq!(message(login("a@b.c", "secret").check()), None);
        assert_eq!(message(login(".bob@", "secret").check()), None);
    }

    #[test]
    fn password_needs_five_characters() {
        assert_eq!(
            message(login("a@b.c", "abcd").check()).as_deref(),
            Some(PASSWORD_LENGTH_MESSAGE)
        );
        assert_eq!(message(login("a@b.c", "abcde").check()), None);
    }

    #[test]
    fn email_is_reported_before_password() {
        assert_eq!(message(login("bob", "x").check()).as_deref(), Some(EMAIL_SHAPE_MESSAGE));
    }

    fn form(rating: &str) -> CreateEngineForm {
        CreateEngineForm {
            name: "Pawnstorm".into(),
            rating: rating.into(),
            author: "lee".into(),
        }
    }

    #[test]
    fn rating_text_is_parsed() {
        let engine = form(" 1875.5 ").into_new_engine().unwrap();
        assert_eq!(engine.rating, 1875.5);
        assert_eq!(engine.name, "Pawnstorm");
    }

    #[test]
    fn non_numeric_rating_is_rejected() {
        for bad in ["abc", "", "NaN", "inf"] {
            let err = form(bad).into_new_engine().unwrap_err();
            assert!(matches!(err, AppError::ValidationError(_)), "{bad} accepted");
        }
    }
}
