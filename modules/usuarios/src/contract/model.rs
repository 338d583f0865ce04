use chrono::{DateTime, NaiveDate, Utc};
use uuid::Uuid;

/// Pure user model for in-process consumers (no serde/utoipa).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    /// RFC (Mexican tax identifier), at most 13 characters.
    pub tax_id: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Data for creating a new user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
    pub gender: String,
    pub tax_id: String,
}

/// Partial update data for a user; `None` leaves the stored value untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<String>,
    pub tax_id: Option<String>,
}

impl UserPatch {
    /// Apply every present field onto `user`.
    pub fn apply_to(self, user: &mut User) {
        if let Some(name) = self.name {
            user.name = name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
        if let Some(birth_date) = self.birth_date {
            user.birth_date = birth_date;
        }
        if let Some(gender) = self.gender {
            user.gender = gender;
        }
        if let Some(tax_id) = self.tax_id {
            user.tax_id = tax_id;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> User {
        let now = Utc::now();
        User {
            id: Uuid::new_v4(),
            name: "Ana".into(),
            email: "ana@example.com".into(),
            phone: "5551234567".into(),
            birth_date: NaiveDate::from_ymd_opt(1990, 5, 10).unwrap(),
            gender: "F".into(),
            tax_id: "AAAA900510XX1".into(),
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut user = sample();
        let before = user.clone();
        UserPatch::default().apply_to(&mut user);
        assert_eq!(user, before);
    }

    #[test]
    fn patch_overwrites_only_present_fields() {
        let mut user = sample();
        let patch = UserPatch {
            phone: Some("5550000000".into()),
            tax_id: Some("BBBB900510YY2".into()),
            ..Default::default()
        };
        patch.apply_to(&mut user);
        assert_eq!(user.phone, "5550000000");
        assert_eq!(user.tax_id, "BBBB900510YY2");
        assert_eq!(user.name, "Ana");
        assert_eq!(user.email, "ana@example.com");
    }
}
