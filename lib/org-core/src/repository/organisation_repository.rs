use shared_types::{OrganisationId, UserId};

use super::error::DataLayerError;
use crate::model::organisation::{
    Organisation, OrganisationRelations, OrganisationUserLink, UpdateOrganisationRequest,
};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait OrganisationRepository: Send + Sync {
    async fn create_organisation(
        &self,
        request: Organisation,
    ) -> Result<OrganisationId, DataLayerError>;

    /// Returns the organisation regardless of its `is_deleted` flag
    async fn get_organisation(
        &self,
        id: &OrganisationId,
        relations: &OrganisationRelations,
    ) -> Result<Option<Organisation>, DataLayerError>;

    async fn get_organisation_list_by_email(
        &self,
        email: &str,
    ) -> Result<Vec<Organisation>, DataLayerError>;

    async fn get_organisation_list_by_user(
        &self,
        user_id: &UserId,
        link: OrganisationUserLink,
        relations: &OrganisationRelations,
    ) -> Result<Vec<Organisation>, DataLayerError>;

    async fn update_organisation(
        &self,
        request: UpdateOrganisationRequest,
    ) -> Result<(), DataLayerError>;
}
