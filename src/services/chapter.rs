//! `/v1/chapter` endpoints

use super::http::{ApiClient, ApiRequest, ApiResult};
use crate::model::course::{Chapter, ChapterInput};
use crate::model::envelope::{Ack, Envelope, ListQuery, Page};

const PREFIX: &str = "/v1/chapter";

/// Filter key scoping a chapter list to one course
pub const COURSE_FILTER: &str = "courseId";

#[derive(Clone)]
pub struct ChapterService {
    api: ApiClient,
}

impl ChapterService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Chapters of a course; the query is expected to carry `courseId`
    pub fn list(&self, query: &ListQuery) -> ApiResult<Envelope<Page<Chapter>>> {
        self.api
            .call(ApiRequest::get(PREFIX).query(query.to_params()))
    }

    pub fn detail(&self, chapter_id: &str) -> ApiResult<Envelope<Chapter>> {
        self.api
            .call(ApiRequest::get(format!("{}/{}", PREFIX, chapter_id)))
    }

    pub fn create(&self, input: &ChapterInput) -> ApiResult<Ack> {
        self.api.call(ApiRequest::post(PREFIX).json(input)?)
    }

    pub fn update(&self, chapter_id: &str, input: &ChapterInput) -> ApiResult<Ack> {
        self.api
            .call(ApiRequest::put(format!("{}/{}", PREFIX, chapter_id)).json(input)?)
    }

    pub fn delete(&self, chapter_id: &str) -> ApiResult<Ack> {
        self.api
            .call(ApiRequest::delete(format!("{}/{}", PREFIX, chapter_id)))
    }
}
