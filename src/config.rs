use crate::{
    auth::{CredentialValidator, basic::BasicValidator, bearer::BearerValidator},
    error::{BadEnvVarSnafu, RollcallResult, UnknownAuthModeSnafu},
};
use dotenvy::var;
use secrecy::SecretString;
use snafu::ResultExt;
use std::sync::Arc;

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    auth_config: Arc<AuthConfig>,
    db_config: Arc<DbConfig>,
}

impl RuntimeConfiguration {
    pub fn new() -> RollcallResult<Self> {
        Ok(Self {
            auth_config: Arc::new(AuthConfig::new()?),
            db_config: Arc::new(DbConfig::new()?),
        })
    }

    #[cfg(test)]
    pub fn from_parts(auth_config: AuthConfig, db_config: DbConfig) -> Self {
        Self {
            auth_config: Arc::new(auth_config),
            db_config: Arc::new(db_config),
        }
    }

    pub fn auth_config(&self) -> Arc<AuthConfig> {
        self.auth_config.clone()
    }

    pub fn db_config(&self) -> Arc<DbConfig> {
        self.db_config.clone()
    }
}

/// Which credential scheme guards the whole app, picked once at startup.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum AuthMode {
    Bearer,
    Basic,
}

#[derive(Debug)]
pub enum AuthConfig {
    Bearer {
        token: SecretString,
    },
    Basic {
        username: String,
        password: SecretString,
    },
}

impl AuthConfig {
    pub fn new() -> RollcallResult<Self> {
        let get_env_var = |name| var(name).context(BadEnvVarSnafu { name });

        match get_env_var("AUTH_MODE")?.as_str() {
            "bearer" => Ok(Self::Bearer {
                token: SecretString::from(get_env_var("AUTH_TOKEN")?),
            }),
            "basic" => Ok(Self::Basic {
                username: get_env_var("AUTH_USERNAME")?,
                password: SecretString::from(get_env_var("AUTH_PASSWORD")?),
            }),
            other => UnknownAuthModeSnafu { mode: other }.fail(),
        }
    }

    pub const fn mode(&self) -> AuthMode {
        match self {
            Self::Bearer { .. } => AuthMode::Bearer,
            Self::Basic { .. } => AuthMode::Basic,
        }
    }

    pub fn validator(&self) -> Arc<dyn CredentialValidator> {
        match self {
            Self::Bearer { token } => Arc::new(BearerValidator::new(token.clone())),
            Self::Basic { username, password } => {
                Arc::new(BasicValidator::new(username.clone(), password.clone()))
            }
        }
    }
}

#[derive(Debug)]
pub struct DbConfig {
    filename: String,
}

impl DbConfig {
    pub fn new() -> RollcallResult<Self> {
        Ok(Self {
            filename: var("DB_PATH").context(BadEnvVarSnafu { name: "DB_PATH" })?,
        })
    }

    #[cfg(test)]
    pub fn in_memory() -> Self {
        Self {
            filename: ":memory:".to_string(),
        }
    }

    pub fn get_db_path(&self) -> String {
        if self.filename == ":memory:" {
            "sqlite::memory:".to_string()
        } else {
            //mode=rwc creates the file on first run
            format!("sqlite://{}?mode=rwc", self.filename)
        }
    }
}
