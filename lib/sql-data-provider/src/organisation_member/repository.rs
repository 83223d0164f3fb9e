use autometrics::autometrics;
use org_core::model::organisation_member::{OrganisationMember, OrganisationMemberRelations};
use org_core::repository::error::DataLayerError;
use org_core::repository::organisation_member_repository::OrganisationMemberRepository;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Select};
use shared_types::{OrganisationId, OrganisationMemberId, UserId};

use super::OrganisationMemberProvider;
use crate::entity::organisation_member;
use crate::mapper::to_data_layer_error;

impl OrganisationMemberProvider {
    async fn get_member_list(
        &self,
        query: Select<organisation_member::Entity>,
        relations: &OrganisationMemberRelations,
    ) -> Result<Vec<OrganisationMember>, DataLayerError> {
        let models = query
            .order_by_asc(organisation_member::Column::CreatedDate)
            .order_by_asc(organisation_member::Column::Id)
            .all(&self.db)
            .await
            .map_err(to_data_layer_error)?;

        let mut result = Vec::with_capacity(models.len());
        for model in models {
            result.push(self.resolve_relations(model, relations).await?);
        }
        Ok(result)
    }

    async fn resolve_relations(
        &self,
        model: organisation_member::Model,
        relations: &OrganisationMemberRelations,
    ) -> Result<OrganisationMember, DataLayerError> {
        let mut member = OrganisationMember::from(model);

        if let Some(user_relations) = &relations.user {
            let user = self
                .user_repository
                .get_user(&member.user_id, user_relations)
                .await?
                .ok_or(DataLayerError::MissingRequiredRelation {
                    relation: "organisation_member-user",
                    id: member.id.to_string(),
                })?;
            member.user = Some(user);
        }

        if let Some(organisation_relations) = &relations.organisation {
            let organisation = self
                .organisation_repository
                .get_organisation(&member.organisation_id, organisation_relations)
                .await?
                .ok_or(DataLayerError::MissingRequiredRelation {
                    relation: "organisation_member-organisation",
                    id: member.id.to_string(),
                })?;
            member.organisation = Some(organisation);
        }

        if let (Some(role_relations), Some(role_id)) = (&relations.role, &member.role_id) {
            let role = self
                .role_repository
                .get_organisation_role(role_id, &member.organisation_id, role_relations)
                .await?
                .ok_or(DataLayerError::MissingRequiredRelation {
                    relation: "organisation_member-role",
                    id: member.id.to_string(),
                })?;
            member.role = Some(role);
        }

        Ok(member)
    }
}

#[autometrics]
#[async_trait::async_trait]
impl OrganisationMemberRepository for OrganisationMemberProvider {
    async fn create_member(
        &self,
        request: OrganisationMember,
    ) -> Result<OrganisationMemberId, DataLayerError> {
        let member =
            organisation_member::Entity::insert(organisation_member::ActiveModel::from(request))
                .exec(&self.db)
                .await
                .map_err(to_data_layer_error)?;

        Ok(member.last_insert_id)
    }

    async fn get_organisation_members(
        &self,
        organisation_id: &OrganisationId,
        relations: &OrganisationMemberRelations,
    ) -> Result<Vec<OrganisationMember>, DataLayerError> {
        let query = organisation_member::Entity::find()
            .filter(organisation_member::Column::OrganisationId.eq(organisation_id));

        self.get_member_list(query, relations).await
    }

    async fn get_user_memberships(
        &self,
        user_id: &UserId,
        relations: &OrganisationMemberRelations,
    ) -> Result<Vec<OrganisationMember>, DataLayerError> {
        let query = organisation_member::Entity::find()
            .filter(organisation_member::Column::UserId.eq(user_id));

        self.get_member_list(query, relations).await
    }
}
