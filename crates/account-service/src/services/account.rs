//! Account service
//!
//! Handles registration, login, and profile retrieval.
//!
//! Login failures are deliberately indistinguishable: an unknown email, a
//! missing credential record, and a wrong password all surface as the same
//! generic credentials error, so the endpoint cannot be used to discover
//! which emails are registered.

use account_common::auth::PasswordService;
use account_common::AppError;
use account_core::entities::Account;
use account_core::{DomainError, Snowflake};
use tracing::{info, instrument, warn};

use crate::dto::{AccountResponse, LoginRequest, LoginResponse, RegisterRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Account service
pub struct AccountService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AccountService<'a> {
    /// Create a new AccountService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new account
    ///
    /// The email uniqueness pre-check is advisory: two concurrent
    /// registrations can both pass it, and the loser is caught by the
    /// unique constraint at insert time. Both paths surface the same
    /// conflict error.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AccountResponse> {
        if self.ctx.account_repo().email_exists(&request.email).await? {
            return Err(ServiceError::Domain(DomainError::EmailAlreadyExists));
        }

        let credential_hash = PasswordService::new()
            .hash(&request.password)
            .map_err(ServiceError::from)?;

        let account_id = self.ctx.generate_id();
        let account = Account::new(account_id, request.name, request.email);

        self.ctx
            .account_repo()
            .insert(&account, &credential_hash)
            .await?;

        info!(account_id = %account_id, "Account registered successfully");

        Ok(AccountResponse::from(&account))
    }

    /// Login with email and password, returning a signed assertion
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<LoginResponse> {
        let account = self
            .ctx
            .account_repo()
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: account not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        let credential_hash = self
            .ctx
            .account_repo()
            .get_credential_hash(account.id)
            .await?
            .ok_or_else(|| {
                warn!(account_id = %account.id, "Login failed: no credential record");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Hasher misuse (an empty password) must look exactly like a failed
        // match here; anything else would tell a caller the email exists.
        let is_valid = match PasswordService::new().verify(&request.password, &credential_hash) {
            Ok(valid) => valid,
            Err(AppError::InvalidInput(_)) => false,
            Err(e) => return Err(ServiceError::from(e)),
        };

        if !is_valid {
            warn!(account_id = %account.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        info!(account_id = %account.id, "Account logged in successfully");

        let token = self
            .ctx
            .token_service()
            .issue(account.id, &account.email)
            .map_err(ServiceError::from)?;

        Ok(LoginResponse::new(
            token,
            self.ctx.token_service().ttl_secs(),
            AccountResponse::from(&account),
        ))
    }

    /// Get the profile for an authenticated account
    #[instrument(skip(self))]
    pub async fn get_profile(&self, account_id: Snowflake) -> ServiceResult<AccountResponse> {
        let account = self
            .ctx
            .account_repo()
            .find_by_id(account_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Account", account_id.to_string()))?;

        Ok(AccountResponse::from(&account))
    }
}
