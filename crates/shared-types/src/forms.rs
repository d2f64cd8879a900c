use serde::{Deserialize, Serialize};

#[cfg(feature = "validation")]
use validator::Validate;

#[cfg(feature = "validation")]
use crate::AppError;

/// Sign-in form values.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct LoginForm {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, max = 100, message = "Password must be 8 to 100 characters"))
    )]
    pub password: String,
}

/// Account creation form values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(Validate))]
pub struct SignupForm {
    #[cfg_attr(
        feature = "validation",
        validate(email(message = "Enter a valid email address"))
    )]
    pub email: String,
    #[serde(default)]
    pub role_id: String,
    #[serde(default = "default_role_name")]
    pub role_name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 3, max = 100, message = "Name must be 3 to 100 characters"))
    )]
    pub name: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, max = 100, message = "Password must be 8 to 100 characters"))
    )]
    pub password: String,
}

fn default_role_name() -> String {
    "admin".to_string()
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            role_id: String::new(),
            role_name: default_role_name(),
            name: String::new(),
            password: String::new(),
        }
    }
}

#[cfg(feature = "validation")]
impl LoginForm {
    /// Validate the form, mapping failures to per-field messages.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}

#[cfg(feature = "validation")]
impl SignupForm {
    /// Validate the form, mapping failures to per-field messages.
    pub fn check(&self) -> Result<(), AppError> {
        self.validate().map_err(AppError::from)
    }
}
