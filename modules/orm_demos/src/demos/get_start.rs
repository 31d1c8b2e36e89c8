//! Migrate a product table and walk one product through create, read,
//! update and soft delete.

use super::DemoContext;
use crate::contract::{NewProduct, ProductChanges};
use crate::error::DemoError;
use crate::infra::storage::entity::product;
use crate::infra::storage::repositories::ProductRepository;
use crate::infra::storage::schema::{auto_migrate, MigrationReport};

/// Primary key the demo deletes and looks up blindly
pub const STRAY_PRODUCT_ID: i32 = 3;

#[derive(Debug, Clone)]
pub struct GetStartReport {
    pub migration: MigrationReport,
    pub created: product::Model,
    pub found_by_id: product::Model,
    pub found_by_code: product::Model,
    pub after_price_update: product::Model,
    pub after_changes: product::Model,
    /// Rows soft-deleted by the blind delete of `STRAY_PRODUCT_ID`
    pub stray_deleted: u64,
    pub stray_lookup: Option<product::Model>,
    pub soft_deleted: u64,
    /// Whether scoped reads still see the product after its soft delete
    pub visible_after_delete: bool,
    pub unscoped_after_delete: Option<product::Model>,
}

pub async fn run(ctx: &DemoContext) -> Result<GetStartReport, DemoError> {
    let migration = auto_migrate(ctx.db(), product::Entity, &ctx.schema).await?;
    let repo = ProductRepository::new(ctx.shared_db());

    let created = repo.create(&NewProduct::new("E42", 100)).await?;

    let found_by_id = repo
        .find_by_id(created.id)
        .await?
        .ok_or_else(|| DemoError::not_found("product", created.id))?;
    let found_by_code = repo
        .find_by_code("E42")
        .await?
        .ok_or_else(|| DemoError::not_found("product", "code=E42"))?;
    tracing::info!(product = ?found_by_code, "find E42");

    let after_price_update = repo.update_price(found_by_code.clone(), 200).await?;
    tracing::info!(product = ?after_price_update, "update E42");

    let changes = ProductChanges {
        code: Some("F42".to_string()),
        price: Some(200),
    };
    let after_changes = repo.apply_changes(after_price_update.clone(), &changes).await?;

    let stray_deleted = repo.soft_delete(STRAY_PRODUCT_ID).await?;
    let stray_lookup = repo.find_by_id(STRAY_PRODUCT_ID).await?;
    tracing::info!(
        id = STRAY_PRODUCT_ID,
        deleted = stray_deleted,
        found = stray_lookup.is_some(),
        "blind delete"
    );

    let soft_deleted = repo.soft_delete(created.id).await?;
    let visible_after_delete = repo.find_by_id(created.id).await?.is_some();
    let unscoped_after_delete = repo.find_unscoped(created.id).await?;

    Ok(GetStartReport {
        migration,
        created,
        found_by_id,
        found_by_code,
        after_price_update,
        after_changes,
        stray_deleted,
        stray_lookup,
        soft_deleted,
        visible_after_delete,
        unscoped_after_delete,
    })
}
