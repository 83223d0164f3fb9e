use core_server::ServerConfig;
use org_core::config::core_config::{AppConfig, CoreConfig, MembersConfig};
use sql_data_provider::DbConn;
use uuid::Uuid;

pub const MAX_PAGE_SIZE: u32 = 50;

pub fn create_config(max_page_size: u32) -> AppConfig<ServerConfig> {
    AppConfig {
        core: CoreConfig {
            members: MembersConfig { max_page_size },
        },
        app: ServerConfig {
            database_url: "sqlite::memory:".to_string(),
            trace_level: Some("debug,hyper=error,sea_orm=info,sqlx::query=error".to_string()),
            hide_error_response_cause: false,
            enable_metrics: true,
            enable_server_info: true,
            enable_open_api: true,
            ..Default::default()
        },
    }
}

pub async fn create_db(config: &AppConfig<ServerConfig>) -> DbConn {
    sql_data_provider::db_conn(&config.app.database_url)
        .await
        .unwrap()
}

pub fn unique_email(prefix: &str) -> String {
    format!("{prefix}-{}@orgdesk.test", Uuid::new_v4().simple())
}
