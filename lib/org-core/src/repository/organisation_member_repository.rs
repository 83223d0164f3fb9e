use shared_types::{OrganisationId, OrganisationMemberId, UserId};

use super::error::DataLayerError;
use crate::model::organisation_member::{OrganisationMember, OrganisationMemberRelations};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait OrganisationMemberRepository: Send + Sync {
    async fn create_member(
        &self,
        request: OrganisationMember,
    ) -> Result<OrganisationMemberId, DataLayerError>;

    /// Members ordered by creation date
    async fn get_organisation_members(
        &self,
        organisation_id: &OrganisationId,
        relations: &OrganisationMemberRelations,
    ) -> Result<Vec<OrganisationMember>, DataLayerError>;

    async fn get_user_memberships(
        &self,
        user_id: &UserId,
        relations: &OrganisationMemberRelations,
    ) -> Result<Vec<OrganisationMember>, DataLayerError>;
}
