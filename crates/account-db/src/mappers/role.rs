//! Role entity <-> model mapper

use account_core::entities::Role;
use account_core::value_objects::Snowflake;

use crate::models::RoleModel;

impl From<RoleModel> for Role {
    fn from(model: RoleModel) -> Self {
        Role {
            id: Snowflake::new(model.id),
            name: model.name,
            created_at: model.created_at,
        }
    }
}
