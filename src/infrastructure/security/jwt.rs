// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::config::settings::JwtSettings;
use crate::domain::models::user::User;
use crate::domain::services::token_service::{AuthClaims, TokenError, TokenPair, TokenService};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

/// 基于 HS256 的令牌服务
pub struct JwtTokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    access_token_ttl_secs: Option<i64>,
    refresh_token_ttl_secs: i64,
}

impl JwtTokenService {
    /// 根据 JWT 配置创建令牌服务
    pub fn new(settings: &JwtSettings) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // 访问令牌默认不带 exp，存在时仍会校验
        validation.set_required_spec_claims::<&str>(&[]);

        Self {
            encoding_key: EncodingKey::from_secret(settings.secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(settings.secret.as_bytes()),
            validation,
            access_token_ttl_secs: settings.access_token_ttl_secs,
            refresh_token_ttl_secs: settings.refresh_token_ttl_secs,
        }
    }

    fn sign(&self, user: &User, ttl_secs: Option<i64>) -> Result<String, TokenError> {
        let now = Utc::now().timestamp();
        let claims = AuthClaims {
            id: user.id,
            role_name: user.role_name,
            email: user.email.clone(),
            iat: now,
            exp: ttl_secs.map(|ttl| now + ttl),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }
}

impl TokenService for JwtTokenService {
    fn issue(&self, user: &User) -> Result<TokenPair, TokenError> {
        Ok(TokenPair {
            access_token: self.sign(user, self.access_token_ttl_secs)?,
            refresh_token: self.sign(user, Some(self.refresh_token_ttl_secs))?,
        })
    }

    fn verify(&self, token: &str) -> Result<AuthClaims, TokenError> {
        decode::<AuthClaims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| TokenError::Invalid(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::user::RoleName;
    use uuid::Uuid;

    fn create_test_settings() -> JwtSettings {
        JwtSettings {
            secret: "test-secret-key-for-jwt-validation".to_string(),
            access_token_ttl_secs: None,
            refresh_token_ttl_secs: 7 * 24 * 60 * 60,
        }
    }

    fn create_test_user() -> User {
        let now = Utc::now().fixed_offset();
        User {
            id: Uuid::new_v4(),
            email: "employer@example.com".to_string(),
            password: String::new(),
            full_name: "Test Employer".to_string(),
            role_name: RoleName::Employer,
            is_active: true,
            is_verify_email: true,
            avatar_url: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn test_issue_and_verify_round_trip() {
        let service = JwtTokenService::new(&create_test_settings());
        let user = create_test_user();

        let pair = service.issue(&user).unwrap();
        let access = service.verify(&pair.access_token).unwrap();
        assert_eq!(access.id, user.id);
        assert_eq!(access.role_name, RoleName::Employer);
        assert_eq!(access.email, user.email);
        assert!(access.exp.is_none());

        let refresh = service.verify(&pair.refresh_token).unwrap();
        assert_eq!(refresh.exp, Some(refresh.iat + 7 * 24 * 60 * 60));
    }

    #[test]
    fn test_claims_use_camel_case() {
        let service = JwtTokenService::new(&create_test_settings());
        let pair = service.issue(&create_test_user()).unwrap();

        let claims = decode::<serde_json::Value>(
            &pair.access_token,
            &DecodingKey::from_secret(b"test-secret-key-for-jwt-validation"),
            &service.validation,
        )
        .unwrap()
        .claims;
        assert!(claims.get("id").is_some());
        assert_eq!(claims["roleName"], "EMPLOYER");
        assert!(claims.get("exp").is_none());
    }

    #[test]
    fn test_rejects_tampered_and_foreign_tokens() {
        let service = JwtTokenService::new(&create_test_settings());
        let mut other_settings = create_test_settings();
        other_settings.secret = "another-secret".to_string();
        let other = JwtTokenService::new(&other_settings);

        let pair = other.issue(&create_test_user()).unwrap();
        assert!(matches!(
            service.verify(&pair.access_token),
            Err(TokenError::Invalid(_))
        ));
        assert!(service.verify("malformed.token.format").is_err());
    }

    #[test]
    fn test_rejects_expired_token() {
        let mut settings = create_test_settings();
        settings.access_token_ttl_secs = Some(-300);
        let service = JwtTokenService::new(&settings);

        let pair = service.issue(&create_test_user()).unwrap();
        assert!(service.verify(&pair.access_token).is_err());
    }
}
