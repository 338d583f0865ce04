use sea_orm::Set;

use crate::contract::model::User;
use crate::infra::storage::entity::{ActiveModel, Model};

impl From<Model> for User {
    fn from(m: Model) -> Self {
        Self {
            id: m.id,
            name: m.name,
            email: m.email,
            phone: m.phone,
            birth_date: m.birth_date,
            gender: m.gender,
            tax_id: m.tax_id,
            created_at: m.created_at,
            updated_at: m.updated_at,
        }
    }
}

/// Fully-set active model: every column is written on insert and on update.
pub fn to_active_model(u: User) -> ActiveModel {
    ActiveModel {
        id: Set(u.id),
        name: Set(u.name),
        email: Set(u.email),
        phone: Set(u.phone),
        birth_date: Set(u.birth_date),
        gender: Set(u.gender),
        tax_id: Set(u.tax_id),
        created_at: Set(u.created_at),
        updated_at: Set(u.updated_at),
    }
}
