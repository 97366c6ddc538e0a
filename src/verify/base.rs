use crate::session::Identity;

/// A credential verifier must return a full Identity or an error. The
/// error string is a diagnostic only; callers log it and report a generic
/// unauthorized response, they never retry.
#[async_trait::async_trait]
pub trait Verifier: Send + Sync {
    fn get_name(&self) -> &str;
    async fn verify(&self, email: &str, password: &str) -> Result<Identity, String>;
}
