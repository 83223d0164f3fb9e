use autometrics::autometrics;
use org_core::model::organisation::{
    Organisation, OrganisationRelations, OrganisationUserLink, UpdateOrganisationRequest,
};
use org_core::repository::error::DataLayerError;
use org_core::repository::organisation_repository::OrganisationRepository;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use shared_types::{OrganisationId, UserId};

use super::OrganisationProvider;
use crate::entity::organisation;
use crate::mapper::{to_data_layer_error, to_update_data_layer_error};

impl OrganisationProvider {
    async fn resolve_relations(
        &self,
        model: organisation::Model,
        relations: &OrganisationRelations,
    ) -> Result<Organisation, DataLayerError> {
        let mut organisation = Organisation::from(model);

        if let Some(role_relations) = &relations.roles {
            organisation.roles = Some(
                self.role_repository
                    .get_organisation_role_list(&organisation.id, role_relations)
                    .await?,
            );
        }

        Ok(organisation)
    }

    async fn resolve_relations_list(
        &self,
        models: Vec<organisation::Model>,
        relations: &OrganisationRelations,
    ) -> Result<Vec<Organisation>, DataLayerError> {
        let mut result = Vec::with_capacity(models.len());
        for model in models {
            result.push(self.resolve_relations(model, relations).await?);
        }
        Ok(result)
    }
}

#[autometrics]
#[async_trait::async_trait]
impl OrganisationRepository for OrganisationProvider {
    async fn create_organisation(
        &self,
        request: Organisation,
    ) -> Result<OrganisationId, DataLayerError> {
        let organisation = organisation::Entity::insert(organisation::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(organisation.last_insert_id)
    }

    async fn get_organisation(
        &self,
        id: &OrganisationId,
        relations: &OrganisationRelations,
    ) -> Result<Option<Organisation>, DataLayerError> {
        let organisation = organisation::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        match organisation {
            Some(model) => Ok(Some(self.resolve_relations(model, relations).await?)),
            None => Ok(None),
        }
    }

    async fn get_organisation_list_by_email(
        &self,
        email: &str,
    ) -> Result<Vec<Organisation>, DataLayerError> {
        let organisations = organisation::Entity::find()
            .filter(organisation::Column::Email.eq(email))
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        Ok(organisations.into_iter().map(Into::into).collect())
    }

    async fn get_organisation_list_by_user(
        &self,
        user_id: &UserId,
        link: OrganisationUserLink,
        relations: &OrganisationRelations,
    ) -> Result<Vec<Organisation>, DataLayerError> {
        let column = match link {
            OrganisationUserLink::Creator => organisation::Column::CreatorId,
            OrganisationUserLink::Owner => organisation::Column::OwnerId,
        };

        let organisations = organisation::Entity::find()
            .filter(column.eq(user_id))
            .order_by_asc(organisation::Column::CreatedDate)
            .order_by_asc(organisation::Column::Id)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        self.resolve_relations_list(organisations, relations).await
    }

    async fn update_organisation(
        &self,
        request: UpdateOrganisationRequest,
    ) -> Result<(), DataLayerError> {
        organisation::Entity::update(organisation::ActiveModel::from(request))
            .exec(&self.db)
            .await
            .map_err(to_update_data_layer_error)?;

        Ok(())
    }
}
