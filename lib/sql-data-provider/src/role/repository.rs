use autometrics::autometrics;
use org_core::model::role::{Role, RoleRelations};
use org_core::repository::error::DataLayerError;
use org_core::repository::role_repository::RoleRepository;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::{OrganisationId, RoleId};

use super::RoleProvider;
use crate::entity::role;
use crate::mapper::to_data_layer_error;

impl RoleProvider {
    async fn resolve_relations(
        &self,
        model: role::Model,
        relations: &RoleRelations,
    ) -> Result<Role, DataLayerError> {
        let mut role = Role::from(model);

        if let Some(permission_relations) = &relations.permissions {
            role.permissions = Some(
                self.permission_repository
                    .get_role_permission_list(&role.id, permission_relations)
                    .await?,
            );
        }

        Ok(role)
    }
}

#[autometrics]
#[async_trait::async_trait]
impl RoleRepository for RoleProvider {
    async fn get_organisation_role(
        &self,
        id: &RoleId,
        organisation_id: &OrganisationId,
        relations: &RoleRelations,
    ) -> Result<Option<Role>, DataLayerError> {
        let role = role::Entity::find_by_id(id)
            .filter(role::Column::OrganisationId.eq(organisation_id))
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        match role {
            Some(model) => Ok(Some(self.resolve_relations(model, relations).await?)),
            None => Ok(None),
        }
    }

    async fn get_organisation_role_list(
        &self,
        organisation_id: &OrganisationId,
        relations: &RoleRelations,
    ) -> Result<Vec<Role>, DataLayerError> {
        let roles = role::Entity::find()
            .filter(role::Column::OrganisationId.eq(organisation_id))
            .order_by_asc(role::Column::CreatedDate)
            .order_by_asc(role::Column::Name)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let mut result = Vec::with_capacity(roles.len());
        for model in roles {
            result.push(self.resolve_relations(model, relations).await?);
        }
        Ok(result)
    }
}
