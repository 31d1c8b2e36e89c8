//! SeaORM entities for the demo tables
//!
//! Entities with `created_at`/`updated_at`/`deleted_at` follow the same
//! bookkeeping convention: timestamps are stamped in `before_save`, and a
//! non-null `deleted_at` hides the row from scoped reads.

pub mod ass_credit_card;
pub mod ass_user;
pub mod mm_language;
pub mod mm_user;
pub mod mmbr_language;
pub mod mmbr_user;
pub mod mmbr_user_language;
pub mod product;
pub mod sql_express_user;
pub mod user;
pub mod user_language;

use sea_orm::entity::prelude::DateTimeUtc;
use sea_orm::ActiveValue;

/// Stamp `created_at` on first insert and `updated_at` on every save.
pub(crate) fn stamp_timestamps(
    created_at: &mut ActiveValue<DateTimeUtc>,
    updated_at: &mut ActiveValue<DateTimeUtc>,
    insert: bool,
) {
    let now = chrono::Utc::now();
    if insert && matches!(created_at, ActiveValue::NotSet) {
        *created_at = ActiveValue::Set(now);
    }
    *updated_at = ActiveValue::Set(now);
}
