use shared_types::{OrganisationId, RoleId};

use super::error::DataLayerError;
use crate::model::role::{Role, RoleRelations};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait RoleRepository: Send + Sync {
    /// Looks up a role only within the given organisation
    async fn get_organisation_role(
        &self,
        id: &RoleId,
        organisation_id: &OrganisationId,
        relations: &RoleRelations,
    ) -> Result<Option<Role>, DataLayerError>;

    async fn get_organisation_role_list(
        &self,
        organisation_id: &OrganisationId,
        relations: &RoleRelations,
    ) -> Result<Vec<Role>, DataLayerError>;
}
