//! Has-one: a user created together with its credit card

use super::DemoContext;
use crate::contract::NewCardholder;
use crate::error::DemoError;
use crate::infra::storage::entity::{ass_credit_card, ass_user};
use crate::infra::storage::repositories::CardholderRepository;
use crate::infra::storage::schema::{auto_migrate, MigrationReport};

#[derive(Debug, Clone)]
pub struct AssociateReport {
    pub migrations: Vec<MigrationReport>,
    pub holder: ass_user::Model,
    /// Card as loaded back through the relation
    pub card: ass_credit_card::Model,
}

pub async fn run(ctx: &DemoContext) -> Result<AssociateReport, DemoError> {
    let migrations = vec![
        auto_migrate(ctx.db(), ass_user::Entity, &ctx.schema).await?,
        auto_migrate(ctx.db(), ass_credit_card::Entity, &ctx.schema).await?,
    ];
    let repo = CardholderRepository::new(ctx.shared_db());

    let draft = NewCardholder {
        name: "jinzhu".to_string(),
        card_number: "411111111111".to_string(),
    };
    let (created, _) = repo.create_with_card(&draft).await?;

    let (holder, card) = repo
        .find_with_card(created.id)
        .await?
        .ok_or_else(|| DemoError::not_found("ass_user", created.id))?;
    let card = card.ok_or_else(|| {
        DemoError::not_found("ass_credit_card", format!("ass_user_id={}", holder.id))
    })?;
    tracing::info!(holder = holder.id, card = card.id, "cardholder created");

    Ok(AssociateReport {
        migrations,
        holder,
        card,
    })
}
