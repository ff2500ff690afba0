use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Tokens issued by `auth/signin`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignUpRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpRequest {
    pub otp: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateProfileRequest {
    pub name: String,
    pub email: String,
}

/// Generic `{success, message}` body returned by most account endpoints
#[derive(Debug, Clone, Deserialize)]
pub struct MessageResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserData {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProfileResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub user: UserData,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GetUserResponse {
    #[serde(default)]
    pub success: bool,
    pub user: UserData,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_response_from_camel_case() {
        let response: LoginResponse = serde_json::from_str(
            r#"{"accessToken": "a", "refreshToken": "r", "userId": "u1"}"#,
        )
        .expect("Failed to decode login response");

        assert_eq!(response.access_token, "a");
        assert_eq!(response.refresh_token, "r");
        assert_eq!(response.user_id, "u1");
    }

    #[test]
    fn test_sign_up_request_uses_camel_case() {
        let request = SignUpRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: "secret".to_string(),
            confirm_password: "secret".to_string(),
        };

        let json = serde_json::to_value(&request).expect("Failed to encode sign up request");

        assert_eq!(json["confirmPassword"], "secret");
    }

    #[test]
    fn test_user_data_reads_mongo_id() {
        let response: GetUserResponse = serde_json::from_str(
            r#"{"success": true, "user": {"_id": "42", "name": "Ada", "email": "ada@example.com"}}"#,
        )
        .expect("Failed to decode user response");

        assert!(response.success);
        assert_eq!(response.user.id, "42");
        assert_eq!(response.user.name, "Ada");
    }
}
