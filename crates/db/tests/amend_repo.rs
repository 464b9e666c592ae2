//! Integration tests for the amend repositories.
//!
//! These run against a real database provisioned by `#[sqlx::test]`, which
//! reads `DATABASE_URL`.

use portal_core::amend::AmendStatus;
use portal_db::models::amend::CreateAmend;
use portal_db::models::annotation::CreateAnnotation;
use portal_db::repositories::{AmendRepo, AnnotationRepo, DeliverableRepo, OrderRepo};
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Insert a property and an order for `portal_id`, returning the order ID.
async fn seed_order(pool: &PgPool, portal_id: Uuid, number: &str, street: &str) -> Uuid {
    let (property_id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO properties (portal_id, name, street, city)
         VALUES ($1, NULL, $2, 'Springfield') RETURNING id",
    )
    .bind(portal_id)
    .bind(street)
    .fetch_one(pool)
    .await
    .unwrap();

    let (order_id,): (Uuid,) = sqlx::query_as(
        "INSERT INTO orders (portal_id, property_id, order_number, order_type)
         VALUES ($1, $2, $3, 'residential') RETURNING id",
    )
    .bind(portal_id)
    .bind(property_id)
    .bind(number)
    .fetch_one(pool)
    .await
    .unwrap();

    order_id
}

fn new_amend(order_id: Uuid, service_id: &str, portal_id: Uuid) -> CreateAmend {
    CreateAmend {
        order_id,
        service_id: service_id.to_string(),
        notes: Some("Swap the kitchen photos".to_string()),
        agent_id: Uuid::new_v4(),
        portal_id,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_amend_starts_pending(pool: PgPool) {
    let portal = Uuid::new_v4();
    let order_id = seed_order(&pool, portal, "ORD-1", "1 Main St").await;

    let amend = AmendRepo::create(&pool, &new_amend(order_id, "floor-plan", portal))
        .await
        .unwrap();

    assert_eq!(amend.order_id, order_id);
    assert_eq!(amend.service_id, "floor-plan");
    assert_eq!(amend.status().unwrap(), AmendStatus::Pending);

    let found = AmendRepo::find_by_id(&pool, amend.id).await.unwrap();
    assert!(found.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_amends_is_portal_scoped_and_newest_first(pool: PgPool) {
    let portal = Uuid::new_v4();
    let other_portal = Uuid::new_v4();
    let order_id = seed_order(&pool, portal, "ORD-2", "2 Main St").await;
    let other_order = seed_order(&pool, other_portal, "ORD-X", "9 Elm St").await;

    let first = AmendRepo::create(&pool, &new_amend(order_id, "floor-plan", portal))
        .await
        .unwrap();
    let second = AmendRepo::create(&pool, &new_amend(order_id, "photo-editing", portal))
        .await
        .unwrap();
    AmendRepo::create(&pool, &new_amend(other_order, "floor-plan", other_portal))
        .await
        .unwrap();

    let listed = AmendRepo::list_by_portal(&pool, portal, None).await.unwrap();
    let ids: Vec<Uuid> = listed.iter().map(|l| l.amend.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
    assert_eq!(listed[0].order.order_number.as_deref(), Some("ORD-2"));
    assert_eq!(listed[0].order.property.street.as_deref(), Some("2 Main St"));

    let completed = AmendRepo::list_by_portal(&pool, portal, Some(AmendStatus::Completed))
        .await
        .unwrap();
    assert!(completed.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn order_search_matches_number_and_street(pool: PgPool) {
    let portal = Uuid::new_v4();
    seed_order(&pool, portal, "ORD-100", "12 Harbour Rd").await;
    seed_order(&pool, portal, "ORD-200", "7 Hill Ave").await;

    let all = OrderRepo::list_for_amend(&pool, portal, None).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].order_number.as_deref(), Some("ORD-200"));

    let by_street = OrderRepo::list_for_amend(&pool, portal, Some("harbour"))
        .await
        .unwrap();
    assert_eq!(by_street.len(), 1);
    assert_eq!(by_street[0].order_number.as_deref(), Some("ORD-100"));

    let by_number = OrderRepo::list_for_amend(&pool, portal, Some("ord-2"))
        .await
        .unwrap();
    assert_eq!(by_number.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn original_deliverables_exclude_amend_output(pool: PgPool) {
    let portal = Uuid::new_v4();
    let order_id = seed_order(&pool, portal, "ORD-3", "3 Main St").await;
    let amend = AmendRepo::create(&pool, &new_amend(order_id, "floor-plan", portal))
        .await
        .unwrap();

    sqlx::query(
        "INSERT INTO order_deliverables (order_id, service_id, file_path, file_type, amend_id)
         VALUES ($1, 'floor-plan', 'plan-v1.png', 'image/png', NULL),
                ($1, 'floor-plan', 'plan-v2.png', 'image/png', $2)",
    )
    .bind(order_id)
    .bind(amend.id)
    .execute(&pool)
    .await
    .unwrap();

    let originals = DeliverableRepo::list_original_by_order(&pool, order_id)
        .await
        .unwrap();
    assert_eq!(originals.len(), 1);
    assert_eq!(originals[0].file_path.as_deref(), Some("plan-v1.png"));
    assert!(originals[0].is_image());

    let produced = DeliverableRepo::list_by_amend(&pool, amend.id).await.unwrap();
    assert_eq!(produced.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn annotation_requires_existing_amend(pool: PgPool) {
    let portal = Uuid::new_v4();
    let order_id = seed_order(&pool, portal, "ORD-4", "4 Main St").await;
    let amend = AmendRepo::create(&pool, &new_amend(order_id, "floor-plan", portal))
        .await
        .unwrap();

    let input = CreateAnnotation {
        amend_id: amend.id,
        image_url: "https://cdn.example.com/a.jpg".to_string(),
        service_id: "floor-plan".to_string(),
        annotation_data: serde_json::json!({ "source": "mobile_app" }),
        annotated_image_url: None,
    };
    let annotation = AnnotationRepo::create(&pool, &input).await.unwrap();
    assert_eq!(annotation.amend_id, amend.id);
    assert!(annotation.annotated_image_url.is_none());

    let orphan = CreateAnnotation {
        amend_id: Uuid::new_v4(),
        ..input
    };
    let err = AnnotationRepo::create(&pool, &orphan).await.unwrap_err();
    assert!(matches!(err, sqlx::Error::Database(_)));

    let listed = AnnotationRepo::list_by_amend(&pool, amend.id).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleting_amend_removes_its_deliverables(pool: PgPool) {
    let portal = Uuid::new_v4();
    let order_id = seed_order(&pool, portal, "ORD-5", "5 Main St").await;
    let amend = AmendRepo::create(&pool, &new_amend(order_id, "floor-plan", portal))
        .await
        .unwrap();

    sqlx::query(
        "INSERT INTO order_deliverables (order_id, service_id, file_path, file_type, amend_id)
         VALUES ($1, 'floor-plan', 'plan-v1.png', 'image/png', NULL),
                ($1, 'floor-plan', 'plan-v2.png', 'image/png', $2)",
    )
    .bind(order_id)
    .bind(amend.id)
    .execute(&pool)
    .await
    .unwrap();

    sqlx::query("DELETE FROM amends WHERE id = $1")
        .bind(amend.id)
        .execute(&pool)
        .await
        .unwrap();

    // Files an amend produced must not resurface as originals.
    let originals = DeliverableRepo::list_original_by_order(&pool, order_id)
        .await
        .unwrap();
    assert_eq!(originals.len(), 1);
    assert_eq!(originals[0].file_path.as_deref(), Some("plan-v1.png"));
    assert!(DeliverableRepo::list_by_amend(&pool, amend.id)
        .await
        .unwrap()
        .is_empty());
}
