use shared_types::UserId;
use time::OffsetDateTime;

use super::organisation::{Organisation, OrganisationRelations};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct User {
    pub id: UserId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub created_date: OffsetDateTime,
    pub last_modified: OffsetDateTime,

    // Relations
    pub created_organisations: Option<Vec<Organisation>>,
    pub owned_organisations: Option<Vec<Organisation>>,
}

#[derive(Clone, Debug, Eq, PartialEq, Default)]
pub struct UserRelations {
    pub created_organisations: Option<OrganisationRelations>,
    pub owned_organisations: Option<OrganisationRelations>,
}
