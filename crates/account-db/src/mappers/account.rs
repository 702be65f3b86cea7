//! Account entity <-> model mapper

use account_core::entities::Account;
use account_core::value_objects::Snowflake;

use crate::models::AccountModel;

/// Convert AccountModel to Account entity
///
/// The credential hash is intentionally dropped here; it never travels on
/// the entity.
impl From<AccountModel> for Account {
    fn from(model: AccountModel) -> Self {
        Account {
            id: Snowflake::new(model.id),
            name: model.name,
            email: model.email,
            created_at: model.created_at,
        }
    }
}

/// Account entity reference plus hash, prepared for database insertion
pub struct AccountInsert<'a> {
    pub id: i64,
    pub name: &'a str,
    pub email: &'a str,
    pub credential_hash: &'a str,
}

impl<'a> AccountInsert<'a> {
    pub fn new(account: &'a Account, credential_hash: &'a str) -> Self {
        Self {
            id: account.id.into_inner(),
            name: &account.name,
            email: &account.email,
            credential_hash,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_model_to_entity_drops_credential_hash() {
        let model = AccountModel {
            id: 42,
            name: "Ana".to_string(),
            email: "ana@x.com".to_string(),
            credential_hash: "$argon2id$...".to_string(),
            created_at: Utc::now(),
        };

        let account = Account::from(model);
        assert_eq!(account.id, Snowflake::new(42));
        assert_eq!(account.name, "Ana");
        assert_eq!(account.email, "ana@x.com");
    }
}
