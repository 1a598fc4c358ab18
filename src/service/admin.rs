use crate::{
    config::Config,
    error::{auth::AuthError, AppError},
};

/// Validates submitted admin credentials against the configured secrets.
///
/// The secrets are compared as plain configured text; there is no lockout,
/// hashing, or rate limiting on this path.
pub struct AdminAuthService<'a> {
    config: &'a Config,
}

impl<'a> AdminAuthService<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Checks a submitted credential against the primary secret and, when
    /// configured, the secondary secret.
    ///
    /// # Returns
    /// - `Ok(())` - Credential matched one of the configured secrets
    /// - `Err(AuthError::InvalidAdminCredential)` - No match
    pub fn verify(&self, submitted: &str) -> Result<(), AppError> {
        if credential_matches(
            submitted,
            &self.config.admin_secret,
            self.config.admin_secret_secondary.as_deref(),
        ) {
            return Ok(());
        }

        Err(AuthError::InvalidAdminCredential.into())
    }
}

pub(crate) fn credential_matches(
    submitted: &str,
    primary: &str,
    secondary: Option<&str>,
) -> bool {
    if submitted.is_empty() {
        return false;
    }

    submitted == primary || secondary == Some(submitted)
}
