use thiserror::Error;
use tracing::warn;

use crate::config::SiteConfig;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AdminError {
    #[error("Credenciais inválidas.")]
    InvalidCredentials,
    #[error("Acesso administrativo não configurado.")]
    NotConfigured,
}

/// Login gate for the admin panel.
///
/// Credentials are baked into the bundle, so this keeps casual visitors out of
/// the panel; the remote store's own access rules protect the data.
#[derive(Clone, PartialEq, Eq)]
pub struct AdminCredentials {
    expected: Option<(String, String)>,
}

impl std::fmt::Debug for AdminCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdminCredentials")
            .field("configured", &self.expected.is_some())
            .finish()
    }
}

impl AdminCredentials {
    pub fn new(username: Option<String>, password: Option<String>) -> Self {
        Self {
            expected: username.zip(password),
        }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        Self::new(config.admin_username.clone(), config.admin_password.clone())
    }

    pub fn is_configured(&self) -> bool {
        self.expected.is_some()
    }

    pub fn verify(&self, username: &str, password: &str) -> Result<(), AdminError> {
        let Some((expected_user, expected_pass)) = &self.expected else {
            warn!("Admin login attempted but no credentials are configured");
            return Err(AdminError::NotConfigured);
        };

        if username == expected_user && password == expected_pass {
            Ok(())
        } else {
            warn!("Admin login rejected");
            Err(AdminError::InvalidCredentials)
        }
    }
}
