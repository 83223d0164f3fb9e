use shared_types::{OrganisationId, UserId};
use time::OffsetDateTime;

use super::OrganisationService;
use super::dto::{
    CreateOrganisationRequestDTO, CreateOrganisationResponseDTO,
    GetOrganisationMembersResponseDTO, GetUserOrganisationsResponseDTO,
    OrganisationMemberResponseDTO, UpdateOrganisationRequestDTO, UpdateOrganisationResponseDTO,
};
use super::mapper::{
    active_organisations, email_conflict_error, member_organisations,
    organisation_from_create_request, owner_membership, update_request_from_dto,
};
use super::validator::{
    get_active_organisation, validate_create_request, validate_pagination,
    validate_update_request,
};
use crate::model::organisation::{OrganisationRelations, UpdateOrganisationRequest};
use crate::model::organisation_member::OrganisationMemberRelations;
use crate::model::role::RoleRelations;
use crate::model::user::UserRelations;
use crate::service::error::{BusinessLogicError, EntityNotFoundError, ServiceError};

impl OrganisationService {
    /// Creates an organisation owned by `user_id` and registers the owner as its first member
    ///
    /// # Arguments
    ///
    /// * `request` - organisation details, the e-mail must not be used by any other organisation
    /// * `user_id` - acting user, becomes both owner and creator
    pub async fn create_organisation(
        &self,
        request: CreateOrganisationRequestDTO,
        user_id: &UserId,
    ) -> Result<CreateOrganisationResponseDTO, ServiceError> {
        validate_create_request(&request)?;

        if self.email_exists(&request.email).await? {
            return Err(BusinessLogicError::OrganisationEmailAlreadyExists.into());
        }

        let owner = self
            .user_repository
            .get_user(user_id, &UserRelations::default())
            .await?
            .ok_or(EntityNotFoundError::User(*user_id))?;

        let now = OffsetDateTime::now_utc();
        let organisation = organisation_from_create_request(request, owner.id, now);

        let organisation_id = self
            .organisation_repository
            .create_organisation(organisation.clone())
            .await
            .map_err(email_conflict_error)?;

        self.organisation_member_repository
            .create_member(owner_membership(organisation_id, owner.id, now))
            .await?;

        tracing::info!(%organisation_id, owner_id = %owner.id, "Created organisation");

        Ok(CreateOrganisationResponseDTO {
            message: "organisation created successfully".to_string(),
            organisation: organisation.into(),
        })
    }

    /// Checks whether any organisation, deleted ones included, uses the e-mail
    pub async fn email_exists(&self, email: &str) -> Result<bool, ServiceError> {
        let organisations = self
            .organisation_repository
            .get_organisation_list_by_email(email)
            .await?;

        Ok(!organisations.is_empty())
    }

    /// Applies a partial update and returns the re-fetched organisation
    pub async fn update_organisation(
        &self,
        id: &OrganisationId,
        request: UpdateOrganisationRequestDTO,
    ) -> Result<UpdateOrganisationResponseDTO, ServiceError> {
        validate_update_request(&request)?;
        get_active_organisation(&*self.organisation_repository, id).await?;

        self.organisation_repository
            .update_organisation(update_request_from_dto(*id, request))
            .await
            .map_err(email_conflict_error)?;

        let organisation = self
            .organisation_repository
            .get_organisation(id, &OrganisationRelations::default())
            .await?
            .ok_or(EntityNotFoundError::Organisation(*id))?;

        tracing::info!(organisation_id = %id, "Updated organisation");

        Ok(UpdateOrganisationResponseDTO {
            message: "Organisation successfully updated".to_string(),
            organisation: organisation.into(),
        })
    }

    /// Soft-deletes the organisation, it stays in storage with `is_deleted` set
    pub async fn delete_organisation(&self, id: &OrganisationId) -> Result<(), ServiceError> {
        get_active_organisation(&*self.organisation_repository, id).await?;

        self.organisation_repository
            .update_organisation(UpdateOrganisationRequest::soft_delete(*id))
            .await?;

        tracing::info!(organisation_id = %id, "Deleted organisation");
        Ok(())
    }

    /// Returns one page of organisation members, visible only to members of the organisation
    ///
    /// # Arguments
    ///
    /// * `organisation_id` - organisation to list
    /// * `page` - 1-based page number, a page past the end is empty
    /// * `page_size` - between 1 and the configured maximum
    /// * `user_id` - acting user, must be a member
    pub async fn get_organisation_members(
        &self,
        organisation_id: &OrganisationId,
        page: u32,
        page_size: u32,
        user_id: &UserId,
    ) -> Result<GetOrganisationMembersResponseDTO, ServiceError> {
        validate_pagination(page, page_size, self.config.members.max_page_size)?;
        get_active_organisation(&*self.organisation_repository, organisation_id).await?;

        let members = self
            .organisation_member_repository
            .get_organisation_members(
                organisation_id,
                &OrganisationMemberRelations {
                    user: Some(UserRelations::default()),
                    ..Default::default()
                },
            )
            .await?;

        if !members.iter().any(|member| member.user_id == *user_id) {
            return Err(BusinessLogicError::NotOrganisationMember {
                organisation_id: *organisation_id,
                user_id: *user_id,
            }
            .into());
        }

        let total_items = members.len() as u64;
        let skip = (page as usize - 1) * page_size as usize;

        let members = members
            .into_iter()
            .skip(skip)
            .take(page_size as usize)
            .map(|member| {
                member
                    .user
                    .map(OrganisationMemberResponseDTO::from)
                    .ok_or(ServiceError::MappingError("user is None".to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(GetOrganisationMembersResponseDTO {
            message: "members retrieved successfully".to_string(),
            total_items,
            members,
        })
    }

    /// Lists organisations the user created, owns or is a member of, deleted ones excluded
    pub async fn get_user_organisations(
        &self,
        user_id: &UserId,
    ) -> Result<GetUserOrganisationsResponseDTO, ServiceError> {
        let user = self
            .user_repository
            .get_user(
                user_id,
                &UserRelations {
                    created_organisations: Some(OrganisationRelations::default()),
                    owned_organisations: Some(OrganisationRelations::default()),
                },
            )
            .await?
            .ok_or(EntityNotFoundError::User(*user_id))?;

        let created_organisations =
            active_organisations(user.created_organisations, "created_organisations")?;
        let owned_organisations =
            active_organisations(user.owned_organisations, "owned_organisations")?;

        let memberships = self
            .organisation_member_repository
            .get_user_memberships(
                user_id,
                &OrganisationMemberRelations {
                    organisation: Some(OrganisationRelations::default()),
                    role: Some(RoleRelations::default()),
                    ..Default::default()
                },
            )
            .await?;
        let member_organisations = member_organisations(memberships)?;

        if created_organisations.is_empty()
            && owned_organisations.is_empty()
            && member_organisations.is_empty()
        {
            return Err(BusinessLogicError::NoUserOrganisations(*user_id).into());
        }

        Ok(GetUserOrganisationsResponseDTO {
            message: "Organisations retrieved successfully".to_string(),
            created_organisations,
            owned_organisations,
            member_organisations,
        })
    }
}
