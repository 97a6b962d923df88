//! Auth Endpoints
//!
//! Login and registration; both answer with the new session.

use super::{decode_json, with_json, ApiClient, ApiResult, ClientHooks, HttpMethod, Transport};
use crate::models::{Credentials, Registration, UserInfo};
use crate::notice::Operation;

impl<T: Transport, H: ClientHooks> ApiClient<T, H> {
    pub async fn login(&self, credentials: &Credentials) -> ApiResult<UserInfo> {
        let request = with_json(self.request(HttpMethod::Post, &self.login_path, None), credentials);
        self.call(Operation::Login, request, decode_json).await
    }

    pub async fn register(&self, registration: &Registration) -> ApiResult<UserInfo> {
        let request = with_json(self.request(HttpMethod::Post, &self.register_path, None), registration);
        self.call(Operation::Register, request, decode_json).await
    }
}
