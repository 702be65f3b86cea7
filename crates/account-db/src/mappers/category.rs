//! Category entity <-> model mapper

use account_core::entities::Category;
use account_core::value_objects::Snowflake;

use crate::models::CategoryModel;

impl From<CategoryModel> for Category {
    fn from(model: CategoryModel) -> Self {
        Category {
            id: Snowflake::new(model.id),
            name: model.name,
            description: model.description,
            created_at: model.created_at,
        }
    }
}
