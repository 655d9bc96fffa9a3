use async_trait::async_trait;
use sqlx::PgPool;
use uuid::Uuid;

use rihla_core::records::PartnerInput;
use rihla_core::{Partner, PartnerRepository, RepoError};

use crate::error::map_sqlx_err;

const PARTNER_COLUMNS: &str = "id, name, logo_url, display_order, created_at";

pub struct PgPartnerRepository {
    pool: PgPool,
}

impl PgPartnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PartnerRepository for PgPartnerRepository {
    async fn list(&self) -> Result<Vec<Partner>, RepoError> {
        sqlx::query_as::<_, Partner>(&format!(
            "SELECT {PARTNER_COLUMNS} FROM partners ORDER BY display_order ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn insert(&self, input: &PartnerInput) -> Result<Partner, RepoError> {
        sqlx::query_as::<_, Partner>(&format!(
            r#"
            INSERT INTO partners (id, name, logo_url, display_order)
            VALUES ($1, $2, $3, $4)
            RETURNING {PARTNER_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&input.name)
        .bind(&input.logo_url)
        .bind(input.display_order)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn update(&self, id: Uuid, input: &PartnerInput) -> Result<(), RepoError> {
        let result =
            sqlx::query("UPDATE partners SET name = $1, logo_url = $2, display_order = $3 WHERE id = $4")
                .bind(&input.name)
                .bind(&input.logo_url)
                .bind(input.display_order)
                .bind(id)
                .execute(&self.pool)
                .await
                .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }

    async fn swap_display_order(
        &self,
        first: (Uuid, i32),
        second: (Uuid, i32),
    ) -> Result<(), RepoError> {
        // Both writes commit together; the displayed order can never be
        // observed half-swapped.
        let mut tx = self.pool.begin().await.map_err(map_sqlx_err)?;

        for (id, display_order) in [first, second] {
            sqlx::query("UPDATE partners SET display_order = $1 WHERE id = $2")
                .bind(display_order)
                .bind(id)
                .execute(&mut *tx)
                .await
                .map_err(map_sqlx_err)?;
        }

        tx.commit().await.map_err(map_sqlx_err)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        // No renumbering of survivors: gaps in display_order are fine.
        let result = sqlx::query("DELETE FROM partners WHERE id = $1")
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
