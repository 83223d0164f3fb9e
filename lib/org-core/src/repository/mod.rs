use std::sync::Arc;

pub mod error;

pub mod organisation_member_repository;
pub mod organisation_repository;
pub mod permission_repository;
pub mod role_repository;
pub mod user_repository;

use organisation_member_repository::OrganisationMemberRepository;
use organisation_repository::OrganisationRepository;
use permission_repository::PermissionRepository;
use role_repository::RoleRepository;
use user_repository::UserRepository;

pub trait DataRepository: Send + Sync {
    fn get_organisation_repository(&self) -> Arc<dyn OrganisationRepository>;
    fn get_role_repository(&self) -> Arc<dyn RoleRepository>;
    fn get_permission_repository(&self) -> Arc<dyn PermissionRepository>;
    fn get_user_repository(&self) -> Arc<dyn UserRepository>;
    fn get_organisation_member_repository(&self) -> Arc<dyn OrganisationMemberRepository>;
}
