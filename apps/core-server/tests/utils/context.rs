use core_server::router::start_server;
use shared_types::{OrganisationId, UserId};
use tokio::task::JoinHandle;

use super::api_clients::Client;
use super::db_clients::DbClient;
use crate::fixtures;

pub struct TestContext {
    pub db: DbClient,
    pub api: Client,
    _handle: JoinHandle<()>,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::new_with_max_page_size(fixtures::MAX_PAGE_SIZE).await
    }

    pub async fn new_with_max_page_size(max_page_size: u32) -> Self {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let config = fixtures::create_config(max_page_size);
        let db = fixtures::create_db(&config).await;
        let _handle = tokio::spawn({
            let db = db.clone();
            async move { start_server(listener, config, db).await }
        });

        Self {
            db: DbClient::new(db),
            api: Client::new(base_url),
            _handle,
        }
    }

    pub async fn new_with_user() -> (Self, UserId) {
        let context = Self::new().await;
        let user_id = context.db.users.create().await;
        (context, user_id)
    }

    pub async fn new_with_organisation() -> (Self, UserId, OrganisationId) {
        let (context, user_id) = Self::new_with_user().await;
        let organisation_id = context.db.organisations.create(user_id).await;
        (context, user_id, organisation_id)
    }
}
