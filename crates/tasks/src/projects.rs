//! Project lookups.

use std::sync::Arc;

use xtrawrkx_client::{Collection, Query, SortDir};
use xtrawrkx_core::DbId;

use crate::error::ServiceResult;
use crate::models::Project;
use crate::transform::{decode, decode_list};

const PATH: &str = "projects";

pub struct ProjectService<C> {
    client: Arc<C>,
}

impl<C: Collection> ProjectService<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn list(&self) -> ServiceResult<Vec<Project>> {
        let query = Query::new().sort("name", SortDir::Asc);
        decode_list(self.client.list(PATH, &query).await?)
    }

    pub async fn get(&self, id: DbId) -> ServiceResult<Project> {
        decode(self.client.get(PATH, id, &Query::new()).await?)
    }
}
