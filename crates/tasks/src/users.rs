//! User directory lookups.

use std::sync::Arc;

use xtrawrkx_client::{Collection, Query, SortDir};
use xtrawrkx_core::DbId;

use crate::error::ServiceResult;
use crate::models::User;
use crate::transform::{decode, decode_list};

const PATH: &str = "xtrawrkx-users";

pub struct UserService<C> {
    client: Arc<C>,
}

impl<C: Collection> UserService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Active users, for assignee and mention pickers.
    pub async fn active(&self) -> ServiceResult<Vec<User>> {
        let query = Query::new()
            .filter("isActive", true)
            .sort("firstName", SortDir::Asc);
        decode_list(self.client.list(PATH, &query).await?)
    }

    pub async fn get(&self, id: DbId) -> ServiceResult<User> {
        decode(self.client.get(PATH, id, &Query::new()).await?)
    }
}
