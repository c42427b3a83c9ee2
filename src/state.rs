use crate::{
    auth::CredentialValidator,
    config::{AuthMode, RuntimeConfiguration},
    error::{GetDatabaseConnectionSnafu, MigrateSnafu, OpenDatabaseSnafu, RollcallResult},
    maud_conveniences::render_nav,
};
use maud::{DOCTYPE, Markup, html};
use snafu::ResultExt;
use sqlx::{Pool, Sqlite, pool::PoolConnection, sqlite::SqlitePoolOptions};
use std::{ops::Deref, sync::Arc};

#[derive(Clone, Debug)]
pub struct RollcallState {
    pool: Pool<Sqlite>,
    config: RuntimeConfiguration,
    validator: Arc<dyn CredentialValidator>,
}

impl RollcallState {
    pub async fn new(options: SqlitePoolOptions, config: RuntimeConfiguration) -> RollcallResult<Self> {
        let pool = options
            .connect(&config.db_config().get_db_path())
            .await
            .context(OpenDatabaseSnafu)?;

        sqlx::migrate!().run(&pool).await.context(MigrateSnafu)?;

        let validator = config.auth_config().validator();

        Ok(Self {
            pool,
            config,
            validator,
        })
    }

    #[allow(clippy::unused_self, clippy::needless_pass_by_value)] //in case self is ever needed :), and to allow direct html! usage
    pub fn render(&self, markup: Markup) -> Markup {
        html! {
            (DOCTYPE)
            html {
                head {
                    meta charset="UTF-8" {}
                    meta name="viewport" content="width=device-width, initial-scale=1.0" {}
                    script src="https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4" {}
                    title { "Rollcall" }
                }
                body class="bg-gray-900 min-h-screen flex flex-col items-center text-white" {
                    (render_nav())
                    (markup)
                }
            }
        }
    }

    pub async fn get_connection(&self) -> RollcallResult<PoolConnection<Sqlite>> {
        self.pool
            .acquire()
            .await
            .context(GetDatabaseConnectionSnafu)
    }

    pub fn auth_mode(&self) -> AuthMode {
        self.config.auth_config().mode()
    }

    pub fn validator(&self) -> Arc<dyn CredentialValidator> {
        self.validator.clone()
    }
}

impl Deref for RollcallState {
    type Target = Pool<Sqlite>;

    fn deref(&self) -> &Self::Target {
        &self.pool
    }
}
