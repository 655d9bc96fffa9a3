use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use rihla_core::records::TestimonialInput;
use rihla_core::{CompanyTestimonial, RepoError, TestimonialRepository};

use crate::error::map_sqlx_err;

const TESTIMONIAL_COLUMNS: &str =
    "id, customer_name, customer_location, rating, testimonial, avatar_url, is_featured, created_at";

pub struct PgTestimonialRepository {
    pool: PgPool,
}

impl PgTestimonialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TestimonialRepository for PgTestimonialRepository {
    async fn list(&self) -> Result<Vec<CompanyTestimonial>, RepoError> {
        sqlx::query_as::<_, CompanyTestimonial>(&format!(
            "SELECT {TESTIMONIAL_COLUMNS} FROM company_testimonials ORDER BY created_at DESC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn list_featured(&self, limit: i64) -> Result<Vec<CompanyTestimonial>, RepoError> {
        sqlx::query_as::<_, CompanyTestimonial>(&format!(
            "SELECT {TESTIMONIAL_COLUMNS} FROM company_testimonials
             WHERE is_featured = TRUE ORDER BY created_at DESC LIMIT $1"
        ))
        .bind(limit)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn insert(&self, input: &TestimonialInput) -> Result<CompanyTestimonial, RepoError> {
        sqlx::query_as::<_, CompanyTestimonial>(&format!(
            r#"
            INSERT INTO company_testimonials
                (id, customer_name, customer_location, rating, testimonial, avatar_url, is_featured)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING {TESTIMONIAL_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&input.customer_name)
        .bind(&input.customer_location)
        .bind(input.rating)
        .bind(&input.testimonial)
        .bind(&input.avatar_url)
        .bind(input.is_featured)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn update(&self, id: Uuid, input: &TestimonialInput) -> Result<(), RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE company_testimonials
            SET customer_name = $1, customer_location = $2, rating = $3,
                testimonial = $4, avatar_url = $5, is_featured = $6
            WHERE id = $7
            "#,
        )
        .bind(&input.customer_name)
        .bind(&input.customer_location)
        .bind(input.rating)
        .bind(&input.testimonial)
        .bind(&input.avatar_url)
        .bind(input.is_featured)
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn set_featured(&self, id: Uuid, is_featured: bool) -> Result<(), RepoError> {
        let result = sqlx::query("UPDATE company_testimonials SET is_featured = $1 WHERE id = $2")
            .bind(is_featured)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM company_testimonials WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}
