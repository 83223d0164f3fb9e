use autometrics::autometrics;
use org_core::model::organisation::OrganisationUserLink;
use org_core::model::user::{User, UserRelations};
use org_core::repository::error::DataLayerError;
use org_core::repository::user_repository::UserRepository;
use sea_orm::EntityTrait;
use shared_types::UserId;

use super::UserProvider;
use crate::entity::user;
use crate::mapper::to_data_layer_error;

#[autometrics]
#[async_trait::async_trait]
impl UserRepository for UserProvider {
    async fn get_user(
        &self,
        id: &UserId,
        relations: &UserRelations,
    ) -> Result<Option<User>, DataLayerError> {
        let Some(model) = user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(to_data_layer_error)?
        else {
            return Ok(None);
        };

        let mut user = User::from(model);

        if let Some(organisation_relations) = &relations.created_organisations {
            user.created_organisations = Some(
                self.organisation_repository
                    .get_organisation_list_by_user(
                        id,
                        OrganisationUserLink::Creator,
                        organisation_relations,
                    )
                    .await?,
            );
        }

        if let Some(organisation_relations) = &relations.owned_organisations {
            user.owned_organisations = Some(
                self.organisation_repository
                    .get_organisation_list_by_user(
                        id,
                        OrganisationUserLink::Owner,
                        organisation_relations,
                    )
                    .await?,
            );
        }

        Ok(Some(user))
    }
}
