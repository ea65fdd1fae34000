//! `/v1/blogs` moderation endpoints

use super::http::{ApiClient, ApiRequest, ApiResult};
use crate::model::blog::{Blog, BlogStatus};
use crate::model::envelope::{Ack, Envelope, ListQuery, Page};
use serde::Serialize;

const PREFIX: &str = "/v1/blogs";

#[derive(Serialize)]
struct StatusBody {
    status: BlogStatus,
}

#[derive(Clone)]
pub struct BlogService {
    api: ApiClient,
}

impl BlogService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn list(&self, query: &ListQuery) -> ApiResult<Envelope<Page<Blog>>> {
        self.api.call(
            ApiRequest::get(format!("{}/by-admin", PREFIX)).query(query.to_params()),
        )
    }

    pub fn detail(&self, blog_id: &str) -> ApiResult<Envelope<Blog>> {
        self.api
            .call(ApiRequest::get(format!("{}/{}", PREFIX, blog_id)))
    }

    pub fn update_status(&self, blog_id: &str, status: BlogStatus) -> ApiResult<Ack> {
        self.api.call(
            ApiRequest::put(format!("{}/status-blog/{}", PREFIX, blog_id))
                .json(&StatusBody { status })?,
        )
    }

    pub fn delete(&self, blog_id: &str) -> ApiResult<Ack> {
        self.api
            .call(ApiRequest::delete(format!("{}/{}", PREFIX, blog_id)))
    }
}
