//! Each demo run end to end against a fresh in-memory database

mod common;

use common::memory_context;
use orm_demos::demos::back_reference::SHARED_LANGUAGE;
use orm_demos::demos::{
    associate, back_reference, get_start, hook, many_to_many, query, record_lifecycle, sql_express,
};
use orm_demos::{Demo, DemoReport};

#[tokio::test]
async fn get_start_walks_a_product_through_its_lifecycle() {
    let ctx = memory_context().await;
    let report = get_start::run(&ctx).await.unwrap();

    assert!(report.migration.created);
    assert_eq!(report.created.code, "E42");
    assert_eq!(report.created.price, 100);
    assert_eq!(report.found_by_id.id, report.created.id);
    assert_eq!(report.found_by_code.id, report.created.id);

    assert_eq!(report.after_price_update.price, 200);
    assert_eq!(report.after_price_update.code, "E42");
    assert_eq!(report.after_changes.code, "F42");
    assert_eq!(report.after_changes.price, 200);

    // Only one product exists, so the blind delete of id 3 is a no-op
    assert_eq!(report.stray_deleted, 0);
    assert!(report.stray_lookup.is_none());

    assert_eq!(report.soft_deleted, 1);
    assert!(!report.visible_after_delete);
    let trashed = report.unscoped_after_delete.unwrap();
    assert!(trashed.deleted_at.is_some());
    assert_eq!(trashed.code, "F42");
}

#[tokio::test]
async fn get_start_twice_reuses_the_table() {
    let ctx = memory_context().await;
    let first = get_start::run(&ctx).await.unwrap();
    let second = get_start::run(&ctx).await.unwrap();

    assert!(second.migration.is_noop());
    assert_ne!(first.created.id, second.created.id);
    assert_eq!(second.found_by_code.id, second.created.id);
}

#[tokio::test]
async fn struct_demo_deletes_the_row_it_created() {
    let ctx = memory_context().await;
    let report = record_lifecycle::run(&ctx).await.unwrap();

    assert_eq!(report.created.name, "Jinzhu");
    assert_eq!(report.created.age, 18);
    assert!(report.created.birthday.is_some());
    assert!(report.held_for.is_zero());
    assert_eq!(report.deleted, 1);
}

#[tokio::test]
async fn query_demo_writes_only_selected_columns_and_numbers_the_batch() {
    let ctx = memory_context().await;
    let report = query::run(&ctx).await.unwrap();

    assert_eq!(report.selected.name, "Jinzhu");
    assert_eq!(report.selected.age, 18);
    assert_eq!(report.selected.email.as_deref(), Some("JinZhu@github.com"));
    assert!(report.selected.birthday.is_none());
    assert!(report.selected.uuid.is_some());

    assert_eq!(report.batch_ids, vec![2, 3, 4]);
}

#[tokio::test]
async fn hook_demo_assigns_uuid_and_refuses_admin() {
    let ctx = memory_context().await;
    let report = hook::run(&ctx).await.unwrap();

    assert!(report.created.uuid.is_some());
    assert_eq!(report.rejection.as_deref(), Some("invalid role"));
}

#[tokio::test]
async fn sql_express_demo_lets_the_database_compute_the_value() {
    let ctx = memory_context().await;
    let report = sql_express::run(&ctx).await.unwrap();

    assert_eq!(report.inserted.name, "JinZhu");
    assert_eq!(report.inserted.location, "HUNAN CHANGSHA");
}

#[tokio::test]
async fn associate_demo_links_card_to_holder() {
    let ctx = memory_context().await;
    let report = associate::run(&ctx).await.unwrap();

    assert_eq!(report.migrations.len(), 2);
    assert!(report.migrations.iter().all(|m| m.created));
    assert_eq!(report.holder.name, "jinzhu");
    assert_eq!(report.card.number, "411111111111");
    assert_eq!(report.card.ass_user_id, report.holder.id);
}

#[tokio::test]
async fn many_to_many_demo_reads_languages_through_join_table() {
    let ctx = memory_context().await;
    let report = many_to_many::run(&ctx).await.unwrap();

    assert_eq!(report.user.name, "Yangwawa");
    let names: Vec<&str> = report.languages.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, vec!["汉语", "English"]);
}

#[tokio::test]
async fn back_reference_demo_shares_one_language_row() {
    let ctx = memory_context().await;
    let report = back_reference::run(&ctx).await.unwrap();

    assert_eq!(report.speakers.len(), 2);
    assert_eq!(report.shared.name, SHARED_LANGUAGE);

    let first_shared = &report.speakers[0].1[0];
    let second_shared = &report.speakers[1].1[0];
    assert_eq!(first_shared.id, second_shared.id);

    let names: Vec<&str> = report.shared_speakers.iter().map(|u| u.name.as_str()).collect();
    assert_eq!(names, vec!["Yangwawa", "jinzhu"]);
}

#[tokio::test]
async fn whole_catalog_runs_against_one_database() {
    let ctx = memory_context().await;

    for demo in Demo::all() {
        let report = demo.run(&ctx).await.unwrap();
        assert!(!report.to_string().is_empty());
    }
}

#[tokio::test]
async fn users_table_is_shared_by_user_demos() {
    let ctx = memory_context().await;

    let DemoReport::Struct(first) = Demo::Struct.run(&ctx).await.unwrap() else {
        panic!("unexpected report");
    };
    assert!(first.migration.created);

    let DemoReport::Hook(second) = Demo::Hook.run(&ctx).await.unwrap() else {
        panic!("unexpected report");
    };
    assert!(second.migration.is_noop());
}
