//! API 响应对象
//!
//! 物料序列化只有一份映射逻辑，两种命名预设：
//! minimal 把 supplier_id 渲染成供应商显示名，full 内嵌完整供应商

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{Material, Supplier};
use crate::domain::enums::MaterialType;

/// 物料序列化形态
#[derive(Debug, Serialize)]
pub struct MaterialResponse {
    pub id: Uuid,
    pub material_code: String,
    pub material_name: String,
    pub material_type: MaterialType,
    pub material_buy_price: Decimal,
    /// minimal 预设：供应商显示名或 null
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier_id: Option<Option<String>>,
    /// full 预设：完整供应商或 null
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supplier: Option<Option<SupplierResponse>>,
}

impl MaterialResponse {
    /// minimal 预设
    pub fn minimal(material: &Material, supplier: Option<&Supplier>) -> Self {
        Self::build(material, supplier, false)
    }

    /// full 预设
    pub fn with_supplier(material: &Material, supplier: Option<&Supplier>) -> Self {
        Self::build(material, supplier, true)
    }

    fn build(material: &Material, supplier: Option<&Supplier>, include_full_supplier: bool) -> Self {
        let (supplier_id, supplier_detail) = if include_full_supplier {
            (None, Some(supplier.map(SupplierResponse::from)))
        } else {
            (Some(supplier.map(|s| s.display_name.clone())), None)
        };

        Self {
            id: material.id().0,
            material_code: material.material_code().to_string(),
            material_name: material.material_name().to_string(),
            material_type: material.material_type(),
            material_buy_price: material.material_buy_price(),
            supplier_id,
            supplier: supplier_detail,
        }
    }
}

/// 完整供应商字段集
#[derive(Debug, Serialize)]
pub struct SupplierResponse {
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

impl From<&Supplier> for SupplierResponse {
    fn from(supplier: &Supplier) -> Self {
        Self {
            id: supplier.id.0,
            name: supplier.name.clone(),
            display_name: supplier.display_name.clone(),
            created_at: supplier.created_at,
            lang: supplier.lang.clone(),
            website: supplier.website.clone(),
            job_title: supplier.job_title.clone(),
            partner_type: supplier.partner_type.clone(),
            street: supplier.street.clone(),
            street2: supplier.street2.clone(),
            city: supplier.city.clone(),
            zip: supplier.zip.clone(),
            latitude: supplier.latitude,
            longitude: supplier.longitude,
            email: supplier.email.clone(),
            phone: supplier.phone.clone(),
            is_company: supplier.is_company,
            commercial_parent_id: supplier.commercial_parent_id.as_ref().map(|s| s.0),
            commercial_company_name: supplier.commercial_company_name.clone(),
        }
    }
}

/// 创建成功响应
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
    pub message: String,
}

/// 操作成功响应
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// 就绪检查响应
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: Vec<ServiceCheck>,
}

#[derive(Debug, Serialize)]
pub struct ServiceCheck {
    pub name: String,
    pub healthy: bool,
}
