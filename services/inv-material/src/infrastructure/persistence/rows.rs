//! 数据库行结构

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

/// materials 表行
#[derive(Debug, sqlx::FromRow)]
pub struct MaterialRow {
    pub id: Uuid,
    pub material_code: String,
    pub material_name: String,
    pub material_type: String,
    pub material_buy_price: Decimal,
    pub supplier_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// suppliers 表行
#[derive(Debug, sqlx::FromRow)]
pub struct SupplierRow {
    pub id: Uuid,
    pub name: String,
    pub display_name: String,
    pub created_at: DateTime<Utc>,
    pub lang: Option<String>,
    pub website: Option<String>,
    pub job_title: Option<String>,
    pub partner_type: Option<String>,
    pub street: Option<String>,
    pub street2: Option<String>,
    pub city: Option<String>,
    pub zip: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub is_company: bool,
    pub commercial_parent_id: Option<Uuid>,
    pub commercial_company_name: Option<String>,
}
