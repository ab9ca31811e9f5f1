use crate::config::Argon2Config;
use crate::errors::RecordsError;
use argon2::password_hash::{SaltString, rand_core::OsRng};
use argon2::{Algorithm, Argon2, Params, PasswordHasher, Version};

/// 哈希密码（Argon2id，PHC 字符串格式）
pub fn hash_password(password: &str, config: &Argon2Config) -> Result<String, RecordsError> {
    let params = Params::new(
        config.memory_cost,
        config.time_cost,
        config.parallelism,
        None,
    )
    .map_err(|e| RecordsError::password_hash(format!("Argon2 参数错误: {e}")))?;

    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);
    let hash = argon2
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| RecordsError::password_hash(format!("密码哈希失败: {e}")))?;
    Ok(hash.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::{PasswordHash, PasswordVerifier};

    fn verify(password: &str, hash: &str) -> bool {
        PasswordHash::new(hash)
            .map(|parsed| {
                Argon2::default()
                    .verify_password(password.as_bytes(), &parsed)
                    .is_ok()
            })
            .unwrap_or(false)
    }

    fn test_config() -> Argon2Config {
        Argon2Config {
            memory_cost: 8 * 1024,
            time_cost: 1,
            parallelism: 1,
        }
    }

    #[test]
    fn test_hash_and_verify() {
        let hash = hash_password("password", &test_config()).unwrap();
        assert!(hash.starts_with("$argon2id$"));
        assert!(verify("password", &hash));
        assert!(!verify("Password", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let a = hash_password("password", &test_config()).unwrap();
        let b = hash_password("password", &test_config()).unwrap();
        assert_ne!(a, b);
    }
}
