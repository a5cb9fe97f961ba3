use actix_web::web;

use crate::app::AppError;

/// bcrypt with a fixed work factor. Both operations are slow on purpose
/// and run on the blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    pub async fn hash(&self, pass: String) -> Result<String, AppError> {
        let cost = self.cost;

        Ok(web::block(move || bcrypt::hash(pass, cost)).await??)
    }

    pub async fn verify(&self, pass: String, hash: String) -> Result<bool, AppError> {
        Ok(web::block(move || bcrypt::verify(pass, &hash)).await??)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn test_hash_and_verify() {
        let hasher = PasswordHasher::new(4);

        let hash = hasher.hash("hunter22".to_string()).await.unwrap();
        assert_ne!(hash, "hunter22");

        assert!(hasher.verify("hunter22".to_string(), hash.clone()).await.unwrap());
        assert!(!hasher.verify("hunter23".to_string(), hash).await.unwrap());
    }

    #[actix_rt::test]
    async fn test_invalid_hash() {
        let hasher = PasswordHasher::new(4);

        let result = hasher.verify("pass".to_string(), "not a hash".to_string()).await;
        assert!(matches!(result, Err(AppError::Hashing(_))));
    }
}
