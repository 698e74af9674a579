//! Scripted in-process [`CatalogApi`] used by state-flow tests.

use std::cell::RefCell;

use super::api::{ApiError, CatalogApi, bearer_header};
use super::types::{Credentials, LoginResponse, ProductListResponse, RegisterResponse};

/// One recorded call against the fake.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Call {
    Register(Credentials),
    Login(Credentials),
    ListProducts { authorization: String },
}

pub(crate) struct FakeCatalogApi {
    pub register: Result<RegisterResponse, ApiError>,
    pub login: Result<LoginResponse, ApiError>,
    pub products: Result<ProductListResponse, ApiError>,
    pub calls: RefCell<Vec<Call>>,
}

impl Default for FakeCatalogApi {
    fn default() -> Self {
        let down = || ApiError::Transport("connection refused".to_owned());
        Self {
            register: Err(down()),
            login: Err(down()),
            products: Err(down()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl FakeCatalogApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }
}

impl CatalogApi for FakeCatalogApi {
    async fn register(&self, credentials: &Credentials) -> Result<RegisterResponse, ApiError> {
        self.calls.borrow_mut().push(Call::Register(credentials.clone()));
        self.register.clone()
    }

    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.calls.borrow_mut().push(Call::Login(credentials.clone()));
        self.login.clone()
    }

    async fn list_products(&self, token: &str) -> Result<ProductListResponse, ApiError> {
        self.calls
            .borrow_mut()
            .push(Call::ListProducts { authorization: bearer_header(token) });
        self.products.clone()
    }
}
