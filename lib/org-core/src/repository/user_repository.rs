use shared_types::UserId;

use super::error::DataLayerError;
use crate::model::user::{User, UserRelations};

#[cfg_attr(any(test, feature = "mock"), mockall::automock)]
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user(
        &self,
        id: &UserId,
        relations: &UserRelations,
    ) -> Result<Option<User>, DataLayerError>;
}
