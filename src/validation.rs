use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::model::{Registration, Role};

pub const MIN_PASSWORD_LEN: usize = 6;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginForm {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistrationForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub password: String,
    #[serde(default)]
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

fn all_filled(fields: &[&str]) -> Result<(), ValidationError> {
    if fields.iter().any(|f| f.is_empty()) {
        Err(ValidationError::MissingFields)
    } else {
        Ok(())
    }
}

impl LoginForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        all_filled(&[self.email.as_str(), self.password.as_str()])
    }
}

impl RegistrationForm {
    /// Checks run in order: required fields, confirmation, length.
    pub fn validate(&self) -> Result<(), ValidationError> {
        all_filled(&[
            self.name.as_str(),
            self.email.as_str(),
            self.phone.as_str(),
            self.password.as_str(),
        ])?;
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
        }
        Ok(())
    }

    /// Validated profile for the auth provider. Self-service sign-ups are always players.
    pub fn into_registration(self) -> Result<Registration, ValidationError> {
        self.validate()?;
        Ok(Registration {
            name: self.name,
            email: self.email,
            phone: self.phone,
            role: Role::Player,
            password: self.password,
        })
    }
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ValidationError> {
        all_filled(&[self.name.as_str(), self.email.as_str(), self.message.as_str()])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registration() -> RegistrationForm {
        RegistrationForm {
            name: "Ayesha".into(),
            email: "ayesha@example.com".into(),
            phone: "0300-1234567".into(),
            password: "secret1".into(),
            confirm_password: "secret1".into(),
        }
    }

    #[test]
    fn registration_checks_run_in_order() {
        let mut form = registration();
        form.phone.clear();
        form.confirm_password = "other".into();
        assert_eq!(form.validate(), Err(ValidationError::MissingFields));

        let mut form = registration();
        form.confirm_password = "secret2".into();
        assert_eq!(form.validate(), Err(ValidationError::PasswordMismatch));

        let mut form = registration();
        form.password = "abc".into();
        form.confirm_password = "abc".into();
        assert_eq!(form.validate(), Err(ValidationError::PasswordTooShort { min: 6 }));
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Password must be at least 6 characters"
        );

        assert!(registration().validate().is_ok());
    }

    #[test]
    fn registration_yields_player_profile() {
        let profile = registration().into_registration().unwrap();
        assert_eq!(profile.role, Role::Player);
        assert_eq!(profile.email, "ayesha@example.com");
    }

    #[test]
    fn request_fields_are_snake_case() {
        let form: RegistrationForm = serde_json::from_value(serde_json::json!({
            "name": "Ayesha",
            "email": "ayesha@example.com",
            "phone": "0300-1234567",
            "password": "secret1",
            "confirm_password": "secret1"
        }))
        .unwrap();
        assert_eq!(form.confirm_password, "secret1");
        assert!(form.validate().is_ok());
    }

    #[test]
    fn login_and_contact_require_every_field() {
        assert!(LoginForm { email: "a@b.c".into(), password: String::new() }.validate().is_err());
        assert!(LoginForm { email: "a@b.c".into(), password: "x".into() }.validate().is_ok());

        let contact = ContactForm { name: "A".into(), email: "a@b.c".into(), message: String::new() };
        assert_eq!(contact.validate(), Err(ValidationError::MissingFields));
    }
}
