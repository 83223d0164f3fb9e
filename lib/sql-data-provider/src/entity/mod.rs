pub mod organisation;
pub mod organisation_member;
pub mod permission;
pub mod role;
pub mod user;
