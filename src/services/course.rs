//! `/v1/courses` endpoints

use super::http::{ApiClient, ApiRequest, ApiResult};
use crate::model::course::{Course, CourseInput};
use crate::model::envelope::{Ack, Envelope, ListQuery, Page};

const PREFIX: &str = "/v1/courses";

#[derive(Clone)]
pub struct CourseService {
    api: ApiClient,
}

impl CourseService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn list(&self, query: &ListQuery) -> ApiResult<Envelope<Page<Course>>> {
        self.api
            .call(ApiRequest::get(PREFIX).query(query.to_params()))
    }

    pub fn detail(&self, course_id: &str) -> ApiResult<Envelope<Course>> {
        self.api
            .call(ApiRequest::get(format!("{}/{}", PREFIX, course_id)))
    }

    pub fn create(&self, input: &CourseInput) -> ApiResult<Ack> {
        self.api.call(ApiRequest::post(PREFIX).json(input)?)
    }

    pub fn update(&self, course_id: &str, input: &CourseInput) -> ApiResult<Ack> {
        self.api
            .call(ApiRequest::put(format!("{}/{}", PREFIX, course_id)).json(input)?)
    }
}
