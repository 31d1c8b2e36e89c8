//! Draft to active model mappers
//!
//! Bookkeeping columns (`id`, timestamps, `uuid`) stay `NotSet`; the database
//! or the entity's `before_save` fills them in.

use super::entity::{ass_credit_card, ass_user, mm_language, mm_user, mmbr_language, mmbr_user, product, user};
use crate::contract::{NewPolyglot, NewProduct, NewUser, ProductChanges};
use sea_orm::ActiveValue::{NotSet, Set};

impl From<&NewProduct> for product::ActiveModel {
    fn from(draft: &NewProduct) -> Self {
        Self {
            code: Set(draft.code.clone()),
            price: Set(draft.price),
            ..Default::default()
        }
    }
}

impl ProductChanges {
    /// Overlay the present fields onto an existing row.
    pub(crate) fn apply_to(&self, row: product::Model) -> product::ActiveModel {
        let mut active: product::ActiveModel = row.into();
        if let Some(code) = &self.code {
            active.code = Set(code.clone());
        }
        if let Some(price) = self.price {
            active.price = Set(price);
        }
        active
    }
}

impl From<&NewUser> for user::ActiveModel {
    fn from(draft: &NewUser) -> Self {
        Self {
            id: NotSet,
            uuid: NotSet,
            name: Set(draft.name.clone()),
            email: Set(draft.email.clone()),
            age: Set(draft.age),
            role: Set(draft.role.clone()),
            birthday: Set(draft.birthday),
            member_number: Set(draft.member_number.clone()),
            activated_at: Set(draft.activated_at),
            created_at: NotSet,
            updated_at: NotSet,
        }
    }
}

pub(crate) fn cardholder(name: &str) -> ass_user::ActiveModel {
    ass_user::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
}

pub(crate) fn credit_card(number: &str, ass_user_id: i32) -> ass_credit_card::ActiveModel {
    ass_credit_card::ActiveModel {
        number: Set(number.to_string()),
        ass_user_id: Set(ass_user_id),
        ..Default::default()
    }
}

impl From<&NewPolyglot> for mm_user::ActiveModel {
    fn from(draft: &NewPolyglot) -> Self {
        Self {
            name: Set(draft.name.clone()),
            email: Set(draft.email.clone()),
            location: Set(draft.location.clone()),
            ..Default::default()
        }
    }
}

impl From<&NewPolyglot> for mmbr_user::ActiveModel {
    fn from(draft: &NewPolyglot) -> Self {
        Self {
            name: Set(draft.name.clone()),
            email: Set(draft.email.clone()),
            location: Set(draft.location.clone()),
            ..Default::default()
        }
    }
}

pub(crate) fn language(name: &str) -> mm_language::ActiveModel {
    mm_language::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
}

pub(crate) fn shared_language(name: &str) -> mmbr_language::ActiveModel {
    mmbr_language::ActiveModel {
        name: Set(name.to_string()),
        ..Default::default()
    }
}
