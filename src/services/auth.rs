//! `/v1/auth` endpoints: login, accounts and payment statistics

use super::http::{ApiClient, ApiRequest, ApiResult};
use crate::model::envelope::{Ack, Envelope, ListQuery, Page};
use crate::model::payment::{PaymentStatistic, StatPeriod};
use crate::model::user::{AccountType, Credentials, LoginResponse, User};
use serde::Serialize;

const PREFIX: &str = "/v1/auth";

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AccountTypeBody {
    account_type: AccountType,
}

#[derive(Clone)]
pub struct AuthService {
    api: ApiClient,
}

impl AuthService {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn login(&self, credentials: &Credentials) -> ApiResult<Envelope<LoginResponse>> {
        self.api
            .call(ApiRequest::post(format!("{}/login", PREFIX)).json(credentials)?)
    }

    pub fn list_users(&self, query: &ListQuery) -> ApiResult<Envelope<Page<User>>> {
        self.api
            .call(ApiRequest::get(format!("{}/list-user", PREFIX)).query(query.to_params()))
    }

    pub fn update_account_type(&self, user_id: &str, account_type: AccountType) -> ApiResult<Ack> {
        self.api.call(
            ApiRequest::put(format!("{}/update-account-type/{}", PREFIX, user_id))
                .json(&AccountTypeBody { account_type })?,
        )
    }

    pub fn payment_statistic(&self, period: StatPeriod) -> ApiResult<Envelope<PaymentStatistic>> {
        self.api.call(ApiRequest::get(format!(
            "{}/statistic-payment/{}",
            PREFIX,
            period.as_path()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::http::fake::client;
    use crate::services::http::Method;
    use serde_json::json;

    #[test]
    fn test_login_posts_credentials() {
        let (api, transport, _) = client();
        transport.respond(
            200,
            json!({
                "data": {
                    "user": {"_id": "u1", "email": "a@b.c", "role": "ADMIN"},
                    "accessToken": "tok"
                },
                "message": "Login success"
            }),
        );

        let service = AuthService::new(api);
        let response = service
            .login(&Credentials {
                email: "a@b.c".to_string(),
                password: "secret".to_string(),
            })
            .unwrap();

        assert_eq!(response.data.access_token, "tok");
        assert!(response.data.user.is_admin());

        let request = transport.last_request();
        assert_eq!(request.method, Method::Post);
        assert_eq!(request.path, "/v1/auth/login");
        assert_eq!(
            request.body,
            Some(json!({"email": "a@b.c", "password": "secret"}))
        );
    }

    #[test]
    fn test_list_users_sends_exact_pagination() {
        let (api, transport, _) = client();
        transport.respond(200, json!({"data": {"data": [], "total": 57}, "message": ""}));

        let mut query = ListQuery::new(10);
        query.page = 3;
        query.set_filter("isRequestChangeToPremium", "true");
        let page = AuthService::new(api).list_users(&query).unwrap();

        assert_eq!(page.data.total, 57);
        let request = transport.last_request();
        assert_eq!(request.path, "/v1/auth/list-user");
        assert_eq!(
            request.query,
            vec![
                ("page".to_string(), "3".to_string()),
                ("limit".to_string(), "10".to_string()),
                ("isRequestChangeToPremium".to_string(), "true".to_string()),
            ]
        );
    }

    #[test]
    fn test_update_account_type_body() {
        let (api, transport, _) = client();
        transport.respond(200, json!({"data": {}, "message": "Updated"}));

        let ack = AuthService::new(api)
            .update_account_type("u9", AccountType::Premium)
            .unwrap();

        assert_eq!(ack.message, "Updated");
        let request = transport.last_request();
        assert_eq!(request.method, Method::Put);
        assert_eq!(request.path, "/v1/auth/update-account-type/u9");
        assert_eq!(request.body, Some(json!({"accountType": "PREMIUM"})));
    }

    #[test]
    fn test_payment_statistic_path() {
        let (api, transport, _) = client();
        transport.respond(
            200,
            json!({"data": {"type": "year", "totalAmount": 10, "stats": []}, "message": ""}),
        );

        AuthService::new(api)
            .payment_statistic(StatPeriod::Year)
            .unwrap();
        assert_eq!(transport.last_request().path, "/v1/auth/statistic-payment/year");
    }
}
