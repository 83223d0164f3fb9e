use org_core::repository::DataRepository;
use sql_data_provider::{DataLayer, DbConn};

use self::members::MembersDB;
use self::organisations::OrganisationsDB;
use self::roles::RolesDB;
use self::users::UsersDB;

pub mod members;
pub mod organisations;
pub mod roles;

pub struct DbClient {
    pub users: UsersDB,
    pub organisations: OrganisationsDB,
    pub roles: RolesDB,
    pub members: MembersDB,
}

impl DbClient {
    pub fn new(db: DbConn) -> Self {
        let layer = DataLayer::build(db.clone());
        Self {
            users: UsersDB::new(db.clone()),
            organisations: OrganisationsDB::new(db.clone(), layer.get_organisation_repository()),
            roles: RolesDB::new(db.clone(), layer.get_permission_repository()),
            members: MembersDB::new(db, layer.get_organisation_member_repository()),
        }
    }
}
