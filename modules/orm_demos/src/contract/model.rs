//! Draft models for inserts and updates

use chrono::{DateTime, Utc};

/// Product to insert
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub code: String,
    pub price: i64,
}

impl NewProduct {
    pub fn new(code: impl Into<String>, price: i64) -> Self {
        Self {
            code: code.into(),
            price,
        }
    }
}

/// Partial product update; `None` leaves the column untouched
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductChanges {
    pub code: Option<String>,
    pub price: Option<i64>,
}

impl ProductChanges {
    pub fn is_empty(&self) -> bool {
        self.code.is_none() && self.price.is_none()
    }
}

/// User to insert into `users`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: Option<String>,
    pub age: i32,
    pub role: String,
    pub birthday: Option<DateTime<Utc>>,
    pub member_number: Option<String>,
    pub activated_at: Option<DateTime<Utc>>,
}

impl NewUser {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_age(mut self, age: i32) -> Self {
        self.age = age;
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_birthday(mut self, birthday: DateTime<Utc>) -> Self {
        self.birthday = Some(birthday);
        self
    }

    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = role.into();
        self
    }
}

/// Cardholder created together with their single credit card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCardholder {
    pub name: String,
    pub card_number: String,
}

/// User created together with the languages they speak
///
/// Languages are referenced by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewPolyglot {
    pub name: String,
    pub email: String,
    pub location: String,
    pub languages: Vec<String>,
}

impl NewPolyglot {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Self::default()
        }
    }

    pub fn speaking<I, S>(mut self, languages: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.languages = languages.into_iter().map(Into::into).collect();
        self
    }
}
