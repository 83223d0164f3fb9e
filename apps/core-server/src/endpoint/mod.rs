pub mod misc;
pub mod organisation;
pub mod organisation_permission;
