//! `/v1/exams` endpoints

use super::http::{ApiClient, ApiRequest, ApiResult};
use crate::model::envelope::{Ack, Envelope, ListQuery, Page};
use crate::model::exam::{Exam, ExamDetail, ExamRequest};

const PREFIX: &str = "/v1/exams";

#[derive(Clone)]
pub struct ExamService {
    api: ApiClient,
}

impl ExamService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn list_in_course(&self, course_id: &str, query: &ListQuery) -> ApiResult<Envelope<Page<Exam>>> {
        self.api.call(
            ApiRequest::get(format!("{}/list-exam-in-course/{}", PREFIX, course_id))
                .query(query.to_params()),
        )
    }

    pub fn detail(&self, exam_id: &str) -> ApiResult<Envelope<ExamDetail>> {
        self.api
            .call(ApiRequest::get(format!("{}/{}", PREFIX, exam_id)))
    }

    pub fn create(&self, request: &ExamRequest) -> ApiResult<Ack> {
        self.api.call(ApiRequest::post(PREFIX).json(request)?)
    }

    pub fn update(&self, exam_id: &str, request: &ExamRequest) -> ApiResult<Ack> {
        self.api
            .call(ApiRequest::put(format!("{}/{}", PREFIX, exam_id)).json(request)?)
    }

    pub fn delete(&self, exam_id: &str) -> ApiResult<Ack> {
        self.api
            .call(ApiRequest::delete(format!("{}/{}", PREFIX, exam_id)))
    }
}
