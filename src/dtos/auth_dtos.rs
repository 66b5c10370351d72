use serde::Deserialize;
use validator::Validate;

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,

    #[validate(email(message = "Email must be valid"))]
    pub email: String,

    #[validate(length(min = 6, max = 20, message = "Mobile number must be 6-20 characters"))]
    pub mobile: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,

    pub confirm_password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Email or mobile number
    #[validate(length(min = 1, message = "Email or mobile is required"))]
    pub identifier: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_payload_validates_fields() {
        let ok: RegisterRequest = serde_json::from_value(serde_json::json!({
            "name": "Rahim",
            "email": "rahim@example.com",
            "mobile": "01711111111",
            "password": "secret1",
            "confirm_password": "secret1"
        }))
        .unwrap();
        assert!(ok.validate().is_ok());

        let bad = RegisterRequest {
            email: "not-an-email".to_string(),
            password: "123".to_string(),
            ..ok
        };
        let errors = bad.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }
}
