// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::config::settings::PasswordSettings;
use crate::domain::services::password_service::{PasswordHashError, PasswordService};
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};

/// Argon2id 密码服务
pub struct Argon2PasswordService {
    params: Params,
}

impl Argon2PasswordService {
    /// 根据配置的内存、迭代次数与并行度创建密码服务
    pub fn new(settings: &PasswordSettings) -> Result<Self, PasswordHashError> {
        let params = Params::new(
            settings.memory_kib,
            settings.iterations,
            settings.parallelism,
            None,
        )
        .map_err(|e| PasswordHashError(e.to_string()))?;

        Ok(Self { params })
    }

    fn hasher(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, PasswordHashError> {
        let salt = SaltString::encode_b64(&rand::random::<[u8; 16]>())
            .map_err(|e| PasswordHashError(e.to_string()))?;

        self.hasher()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| PasswordHashError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self
                .hasher()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(e) => {
                tracing::warn!("Stored password hash is malformed: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> Argon2PasswordService {
        Argon2PasswordService::new(&PasswordSettings {
            memory_kib: 8,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let service = create_test_service();
        let hash = service.hash("An@01022002").unwrap();

        assert!(hash.starts_with("$argon2id$"));
        assert!(service.verify("An@01022002", &hash));
        assert!(!service.verify("wrong-password", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let service = create_test_service();
        assert_ne!(service.hash("secret").unwrap(), service.hash("secret").unwrap());
    }

    #[test]
    fn test_malformed_hash_does_not_verify() {
        let service = create_test_service();
        assert!(!service.verify("secret", "plaintext-secret"));
    }

    #[test]
    fn test_rejects_invalid_params() {
        let result = Argon2PasswordService::new(&PasswordSettings {
            memory_kib: 1,
            iterations: 0,
            parallelism: 1,
        });
        assert!(result.is_err());
    }
}
