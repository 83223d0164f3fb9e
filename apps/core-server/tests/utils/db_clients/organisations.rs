use std::sync::Arc;

use org_core::model::organisation::{Organisation, OrganisationRelations};
use org_core::repository::organisation_repository::OrganisationRepository;
use shared_types::{OrganisationId, UserId};
use sql_data_provider::DbConn;
use sql_data_provider::test_utilities::{insert_member, insert_organisation};

use crate::fixtures::unique_email;

pub struct OrganisationsDB {
    db: DbConn,
    repository: Arc<dyn OrganisationRepository>,
}

impl OrganisationsDB {
    pub fn new(db: DbConn, repository: Arc<dyn OrganisationRepository>) -> Self {
        Self { db, repository }
    }

    /// Organisation owned by `owner_id`, with the owner as its first member
    pub async fn create(&self, owner_id: UserId) -> OrganisationId {
        let id = insert_organisation(&self.db, &unique_email("organisation"), owner_id, false)
            .await
            .unwrap();
        insert_member(&self.db, owner_id, id, None, 0).await.unwrap();
        id
    }

    pub async fn create_deleted(&self, owner_id: UserId) -> OrganisationId {
        insert_organisation(&self.db, &unique_email("deleted"), owner_id, true)
            .await
            .unwrap()
    }

    pub async fn get(&self, id: &OrganisationId) -> Organisation {
        self.repository
            .get_organisation(id, &OrganisationRelations::default())
            .await
            .unwrap()
            .unwrap()
    }
}
