pub mod error;
pub mod organisation;
pub mod organisation_permission;

#[cfg(test)]
pub(crate) mod test_utilities;
