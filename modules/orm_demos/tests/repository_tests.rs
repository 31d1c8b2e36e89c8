//! Repository behavior beyond what the demos exercise

mod common;

use common::memory_db;
use orm_demos::entity::{
    ass_credit_card, ass_user, mm_language, mm_user, mmbr_language, mmbr_user, mmbr_user_language,
    product, sql_express_user, user, user_language,
};
use orm_demos::repositories::{
    CardholderRepository, FieldValue, LanguageDirectoryRepository, ProductRepository,
    SharedLanguageRepository, SqlExpressionRepository, UserRepository,
};
use orm_demos::{
    auto_migrate, DemoError, NewCardholder, NewPolyglot, NewProduct, NewUser, ProductChanges,
    SchemaOptions,
};
use sea_orm::sea_query::Expr;
use sea_orm::{ColumnTrait, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

fn opts() -> SchemaOptions {
    SchemaOptions::default()
}

// ===== Products =====

#[tokio::test]
async fn product_timestamps_are_stamped_by_hook() {
    let db = memory_db().await;
    auto_migrate(&db, product::Entity, &opts()).await.unwrap();
    let repo = ProductRepository::new(db.clone());

    let created = repo.create(&NewProduct::new("A1", 5)).await.unwrap();
    assert!(created.deleted_at.is_none());
    assert!(created.updated_at >= created.created_at);

    let updated = repo.update_price(created.clone(), 6).await.unwrap();
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
}

#[tokio::test]
async fn empty_changes_leave_row_untouched() {
    let db = memory_db().await;
    auto_migrate(&db, product::Entity, &opts()).await.unwrap();
    let repo = ProductRepository::new(db.clone());

    let created = repo.create(&NewProduct::new("A1", 5)).await.unwrap();
    let same = repo
        .apply_changes(created.clone(), &ProductChanges::default())
        .await
        .unwrap();
    assert_eq!(same, created);

    let price_only = ProductChanges {
        price: Some(9),
        ..ProductChanges::default()
    };
    let changed = repo.apply_changes(created, &price_only).await.unwrap();
    assert_eq!(changed.code, "A1");
    assert_eq!(changed.price, 9);
}

#[tokio::test]
async fn soft_delete_hides_row_and_is_not_repeated() {
    let db = memory_db().await;
    auto_migrate(&db, product::Entity, &opts()).await.unwrap();
    let repo = ProductRepository::new(db.clone());

    let created = repo.create(&NewProduct::new("A1", 5)).await.unwrap();
    assert_eq!(repo.soft_delete(created.id).await.unwrap(), 1);
    assert_eq!(repo.soft_delete(created.id).await.unwrap(), 0);

    assert!(repo.find_by_id(created.id).await.unwrap().is_none());
    assert!(repo.find_by_code("A1").await.unwrap().is_none());
    assert!(repo.find_unscoped(created.id).await.unwrap().is_some());

    assert_eq!(repo.purge(created.id).await.unwrap(), 1);
    assert!(repo.find_unscoped(created.id).await.unwrap().is_none());
}

// ===== Users and the insert hook =====

#[tokio::test]
async fn every_insert_gets_a_distinct_uuid() {
    let db = memory_db().await;
    auto_migrate(&db, user::Entity, &opts()).await.unwrap();
    let repo = UserRepository::new(db.clone());

    let a = repo.create(&NewUser::named("a")).await.unwrap();
    let b = repo.create(&NewUser::named("b")).await.unwrap();
    assert!(a.uuid.is_some());
    assert_ne!(a.uuid, b.uuid);
    assert_eq!(a.role, "");
}

#[tokio::test]
async fn admin_role_is_rejected_before_anything_is_written() {
    let db = memory_db().await;
    auto_migrate(&db, user::Entity, &opts()).await.unwrap();
    let repo = UserRepository::new(db.clone());

    let err = repo
        .create(&NewUser::named("root").with_role("admin"))
        .await
        .unwrap_err();
    assert!(matches!(err, DemoError::Db(DbErr::Custom(ref m)) if m == "invalid role"));
    assert_eq!(repo.count().await.unwrap(), 0);

    let ok = repo
        .create(&NewUser::named("ops").with_role("operator"))
        .await
        .unwrap();
    assert_eq!(ok.role, "operator");
}

#[tokio::test]
async fn batch_with_a_rejected_row_rolls_back() {
    let db = memory_db().await;
    auto_migrate(&db, user::Entity, &opts()).await.unwrap();
    let repo = UserRepository::new(db.clone());

    let batch = vec![
        NewUser::named("jinzhu1"),
        NewUser::named("root").with_role("admin"),
        NewUser::named("jinzhu3"),
    ];
    assert!(repo.create_batch(&batch).await.is_err());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn selected_insert_falls_back_to_column_defaults() {
    let db = memory_db().await;
    auto_migrate(&db, user::Entity, &opts()).await.unwrap();
    let repo = UserRepository::new(db.clone());

    let draft = NewUser::named("Jinzhu")
        .with_age(30)
        .with_role("operator")
        .with_email("jz@example.com");
    let row = repo
        .create_selected(&draft, &[user::Column::Name, user::Column::Age])
        .await
        .unwrap();

    assert_eq!(row.name, "Jinzhu");
    assert_eq!(row.age, 30);
    assert_eq!(row.role, "");
    assert!(row.email.is_none());
    assert!(row.uuid.is_some());
}

#[tokio::test]
async fn selecting_only_the_name_leaves_age_to_its_default() {
    let db = memory_db().await;
    auto_migrate(&db, user::Entity, &opts()).await.unwrap();
    let repo = UserRepository::new(db.clone());

    let row = repo
        .create_selected(&NewUser::named("Jinzhu").with_age(18), &[user::Column::Name])
        .await
        .unwrap();

    assert_eq!(row.name, "Jinzhu");
    assert_eq!(row.age, 0);
    assert!(row.uuid.is_some());
}

#[tokio::test]
async fn delete_missing_user_affects_nothing() {
    let db = memory_db().await;
    auto_migrate(&db, user::Entity, &opts()).await.unwrap();
    let repo = UserRepository::new(db.clone());

    assert_eq!(repo.delete(42).await.unwrap(), 0);
    assert!(repo.find_by_id(42).await.unwrap().is_none());
}

// ===== SQL expressions =====

#[tokio::test]
async fn plain_values_and_expressions_mix_in_one_insert() {
    let db = memory_db().await;
    auto_migrate(&db, sql_express_user::Entity, &opts()).await.unwrap();
    let repo = SqlExpressionRepository::new(db.clone());

    let id = repo
        .insert(vec![
            (
                sql_express_user::Column::Name,
                FieldValue::expr("LOWER(?) || ?", ["AB", "c"]),
            ),
            (sql_express_user::Column::Location, FieldValue::value("Paris")),
        ])
        .await
        .unwrap();

    let row = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(row.name, "abc");
    assert_eq!(row.location, "Paris");
}

#[tokio::test]
async fn empty_insert_is_an_error() {
    let db = memory_db().await;
    auto_migrate(&db, sql_express_user::Entity, &opts()).await.unwrap();
    let repo = SqlExpressionRepository::new(db.clone());

    assert!(repo.insert(Vec::new()).await.is_err());
}

// ===== Associations =====

#[tokio::test]
async fn card_requires_an_existing_holder() {
    let db = memory_db().await;
    auto_migrate(&db, ass_user::Entity, &opts()).await.unwrap();
    auto_migrate(&db, ass_credit_card::Entity, &opts()).await.unwrap();
    let repo = CardholderRepository::new(db.clone());

    let (holder, card) = repo
        .create_with_card(&NewCardholder {
            name: "jinzhu".to_string(),
            card_number: "4111".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(card.ass_user_id, holder.id);

    let orphan = orm_demos::entity::ass_credit_card::ActiveModel {
        number: sea_orm::ActiveValue::Set("5555".to_string()),
        ass_user_id: sea_orm::ActiveValue::Set(holder.id + 100),
        ..Default::default()
    };
    assert!(sea_orm::ActiveModelTrait::insert(orphan, &*db).await.is_err());
    assert!(repo.find_with_card(holder.id + 100).await.unwrap().is_none());
}

#[tokio::test]
async fn languages_of_unknown_user_is_not_found() {
    let db = memory_db().await;
    auto_migrate(&db, mm_user::Entity, &opts()).await.unwrap();
    auto_migrate(&db, mm_language::Entity, &opts()).await.unwrap();
    auto_migrate(&db, user_language::Entity, &opts()).await.unwrap();
    let repo = LanguageDirectoryRepository::new(db.clone());

    let err = repo.languages_of(7).await.unwrap_err();
    assert!(matches!(err, DemoError::NotFound { entity: "mm_user", .. }));
}

#[tokio::test]
async fn languages_of_soft_deleted_user_is_not_found() {
    let db = memory_db().await;
    auto_migrate(&db, mm_user::Entity, &opts()).await.unwrap();
    auto_migrate(&db, mm_language::Entity, &opts()).await.unwrap();
    auto_migrate(&db, user_language::Entity, &opts()).await.unwrap();
    let repo = LanguageDirectoryRepository::new(db.clone());

    let (user, _) = repo
        .create_user_with_languages(
            &NewPolyglot::new("Yangwawa", "yww@example.com").speaking(["English"]),
        )
        .await
        .unwrap();
    mm_user::Entity::update_many()
        .col_expr(mm_user::Column::DeletedAt, Expr::value(chrono::Utc::now()))
        .filter(mm_user::Column::Id.eq(user.id))
        .exec(&*db)
        .await
        .unwrap();

    let err = repo.languages_of(user.id).await.unwrap_err();
    assert!(matches!(err, DemoError::NotFound { entity: "mm_user", .. }));
}

#[tokio::test]
async fn forward_many_to_many_inserts_a_row_per_listed_language() {
    let db = memory_db().await;
    auto_migrate(&db, mm_user::Entity, &opts()).await.unwrap();
    auto_migrate(&db, mm_language::Entity, &opts()).await.unwrap();
    auto_migrate(&db, user_language::Entity, &opts()).await.unwrap();
    let repo = LanguageDirectoryRepository::new(db.clone());

    let draft = NewPolyglot::new("a", "a@example.com").speaking(["English"]);
    repo.create_user_with_languages(&draft).await.unwrap();
    repo.create_user_with_languages(&draft).await.unwrap();

    assert_eq!(mm_language::Entity::find().count(&*db).await.unwrap(), 2);
    assert_eq!(user_language::Entity::find().count(&*db).await.unwrap(), 2);

    let (silent, languages) = repo
        .create_user_with_languages(&NewPolyglot::new("b", "b@example.com"))
        .await
        .unwrap();
    assert!(languages.is_empty());
    assert!(repo.languages_of(silent.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn back_reference_dedupes_languages_within_a_batch() {
    let db = memory_db().await;
    auto_migrate(&db, mmbr_user::Entity, &opts()).await.unwrap();
    auto_migrate(&db, mmbr_language::Entity, &opts()).await.unwrap();
    auto_migrate(&db, mmbr_user_language::Entity, &opts()).await.unwrap();
    let repo = SharedLanguageRepository::new(db.clone());

    let drafts = vec![
        NewPolyglot::new("x", "x@example.com").speaking(["Go", "Rust", "Go"]),
        NewPolyglot::new("y", "y@example.com").speaking(["Rust"]),
    ];
    let created = repo.create_users(&drafts).await.unwrap();

    assert_eq!(created[0].1.len(), 2);
    assert_eq!(repo.find_languages_by_name("Rust").await.unwrap().len(), 1);
    assert_eq!(mmbr_user_language::Entity::find().count(&*db).await.unwrap(), 3);

    let rust = &created[1].1[0];
    let speakers = repo.speakers_of(rust.id).await.unwrap();
    assert_eq!(speakers.len(), 2);

    let y_languages = repo.languages_of(created[1].0.id).await.unwrap();
    assert_eq!(y_languages.len(), 1);
    assert_eq!(y_languages[0].name, "Rust");

    // A later batch gets its own rows
    repo.create_users(&[NewPolyglot::new("z", "z@example.com").speaking(["Rust"])])
        .await
        .unwrap();
    assert_eq!(repo.find_languages_by_name("Rust").await.unwrap().len(), 2);
}
