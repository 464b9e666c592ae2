//! Repository for the `amend_annotations` table.

use portal_core::types::DbId;
use sqlx::PgPool;

use crate::models::annotation::{Annotation, CreateAnnotation};

/// Column list for amend_annotations queries.
const COLUMNS: &str = "id, amend_id, image_url, service_id, annotation_data, \
    annotated_image_url, created_at";

/// Provides create and read operations for amend annotations.
pub struct AnnotationRepo;

impl AnnotationRepo {
    /// Attach a new annotation to an amend request, returning the row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAnnotation,
    ) -> Result<Annotation, sqlx::Error> {
        let query = format!(
            "INSERT INTO amend_annotations
                (amend_id, image_url, service_id, annotation_data, annotated_image_url)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Annotation>(&query)
            .bind(input.amend_id)
            .bind(&input.image_url)
            .bind(&input.service_id)
            .bind(&input.annotation_data)
            .bind(&input.annotated_image_url)
            .fetch_one(pool)
            .await
    }

    /// List the annotations of an amend request in creation order.
    pub async fn list_by_amend(
        pool: &PgPool,
        amend_id: DbId,
    ) -> Result<Vec<Annotation>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM amend_annotations
             WHERE amend_id = $1
             ORDER BY created_at ASC, id ASC"
        );
        sqlx::query_as::<_, Annotation>(&query)
            .bind(amend_id)
            .fetch_all(pool)
            .await
    }
}
