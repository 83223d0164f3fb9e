use std::sync::Arc;

use org_core::model::organisation_member::{OrganisationMember, OrganisationMemberRelations};
use org_core::repository::organisation_member_repository::OrganisationMemberRepository;
use shared_types::{OrganisationId, RoleId, UserId};
use sql_data_provider::DbConn;
use sql_data_provider::test_utilities::insert_member;

pub struct MembersDB {
    db: DbConn,
    repository: Arc<dyn OrganisationMemberRepository>,
}

impl MembersDB {
    pub fn new(db: DbConn, repository: Arc<dyn OrganisationMemberRepository>) -> Self {
        Self { db, repository }
    }

    pub async fn add(
        &self,
        user_id: UserId,
        organisation_id: OrganisationId,
        role_id: Option<RoleId>,
        order: i64,
    ) {
        insert_member(&self.db, user_id, organisation_id, role_id, order)
            .await
            .unwrap();
    }

    pub async fn list(&self, organisation_id: &OrganisationId) -> Vec<OrganisationMember> {
        self.repository
            .get_organisation_members(organisation_id, &OrganisationMemberRelations::default())
            .await
            .unwrap()
    }
}
