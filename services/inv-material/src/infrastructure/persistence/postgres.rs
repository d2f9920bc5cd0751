//! PostgreSQL repository implementation

use std::time::Duration;

use async_trait::async_trait;
use mill_errors::{AppError, AppResult};
use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::domain::entities::{Material, MaterialFilter, Supplier};
use crate::domain::repositories::{MaterialRepository, SupplierRepository};
use crate::domain::value_objects::{MaterialId, SupplierId};

use super::converters::{material_from_row, supplier_from_row};
use super::rows::{MaterialRow, SupplierRow};

/// 创建 PostgreSQL 连接池
pub async fn connect(url: &str, max_connections: u32) -> AppResult<PgPool> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .min_connections(1)
        .acquire_timeout(Duration::from_secs(30))
        .idle_timeout(Duration::from_secs(600))
        .connect(url)
        .await
        .map_err(|e| AppError::database(format!("Failed to create pool: {}", e)))
}

// ============================================================================
// MaterialRepository 实现
// ============================================================================

pub struct PostgresMaterialRepository {
    pool: PgPool,
}

impl PostgresMaterialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl MaterialRepository for PostgresMaterialRepository {
    async fn find_by_id(&self, id: &MaterialId) -> AppResult<Option<Material>> {
        let row = sqlx::query_as::<_, MaterialRow>(
            r#"
            SELECT id, material_code, material_name, material_type, material_buy_price,
                   supplier_id, created_at, updated_at
            FROM materials
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("查询物料失败: {}", e)))?;

        row.map(material_from_row).transpose()
    }

    async fn save(&self, material: &Material) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO materials (
                id, material_code, material_name, material_type, material_buy_price,
                supplier_id, created_at, updated_at
            ) VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(material.id().0)
        .bind(material.material_code())
        .bind(material.material_name())
        .bind(material.material_type().as_str())
        .bind(material.material_buy_price())
        .bind(material.supplier_id().map(|s| s.0))
        .bind(material.audit_info().created_at)
        .bind(material.audit_info().updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("保存物料失败: {}", e)))?;

        Ok(())
    }

    async fn update(&self, material: &Material) -> AppResult<()> {
        let result = sqlx::query(
            r#"
            UPDATE materials SET
                material_code = $1,
                material_name = $2,
                material_type = $3,
                material_buy_price = $4,
                supplier_id = $5,
                updated_at = $6
            WHERE id = $7
            "#,
        )
        .bind(material.material_code())
        .bind(material.material_name())
        .bind(material.material_type().as_str())
        .bind(material.material_buy_price())
        .bind(material.supplier_id().map(|s| s.0))
        .bind(material.audit_info().updated_at)
        .bind(material.id().0)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("更新物料失败: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Material not found"));
        }

        Ok(())
    }

    async fn delete(&self, id: &MaterialId) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM materials WHERE id = $1")
            .bind(id.0)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("删除物料失败: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Material not found"));
        }

        Ok(())
    }

    async fn list(&self, filter: MaterialFilter) -> AppResult<Vec<Material>> {
        let rows = match filter.material_type {
            Some(material_type) => {
                sqlx::query_as::<_, MaterialRow>(
                    r#"
                    SELECT id, material_code, material_name, material_type, material_buy_price,
                           supplier_id, created_at, updated_at
                    FROM materials
                    WHERE material_type = $1
                    ORDER BY created_at
                    "#,
                )
                .bind(material_type)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, MaterialRow>(
                    r#"
                    SELECT id, material_code, material_name, material_type, material_buy_price,
                           supplier_id, created_at, updated_at
                    FROM materials
                    ORDER BY created_at
                    "#,
                )
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|e| AppError::database(format!("查询物料列表失败: {}", e)))?;

        rows.into_iter().map(material_from_row).collect()
    }

    async fn ping(&self) -> AppResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::database(format!("Database health check failed: {}", e)))?;
        Ok(())
    }
}

// ============================================================================
// SupplierRepository 实现
// ============================================================================

pub struct PostgresSupplierRepository {
    pool: PgPool,
}

impl PostgresSupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SupplierRepository for PostgresSupplierRepository {
    async fn find_by_id(&self, id: &SupplierId) -> AppResult<Option<Supplier>> {
        let row = sqlx::query_as::<_, SupplierRow>(
            r#"
            SELECT id, name, display_name, created_at, lang, website, job_title,
                   partner_type, street, street2, city, zip, latitude, longitude,
                   email, phone, is_company, commercial_parent_id, commercial_company_name
            FROM suppliers
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("查询供应商失败: {}", e)))?;

        Ok(row.map(supplier_from_row))
    }
}
