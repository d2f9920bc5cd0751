//! 行与实体转换

use mill_common::AuditInfo;
use mill_errors::{AppError, AppResult};

use crate::domain::entities::{Material, Supplier};
use crate::domain::enums::MaterialType;
use crate::domain::value_objects::{MaterialId, SupplierId};

use super::rows::{MaterialRow, SupplierRow};

/// materials 行 → 实体
pub fn material_from_row(row: MaterialRow) -> AppResult<Material> {
    // 存储中的类型取值不合法说明数据被绕过服务写入过
    let material_type = row
        .material_type
        .parse::<MaterialType>()
        .map_err(|_| AppError::database(format!("非法的物料类型: {}", row.material_type)))?;

    Ok(Material::from_parts(
        MaterialId::from_uuid(row.id),
        row.material_code,
        row.material_name,
        material_type,
        row.material_buy_price,
        row.supplier_id.map(SupplierId::from_uuid),
        AuditInfo::from_parts(row.created_at, row.updated_at),
    ))
}

/// suppliers 行 → 只读模型
pub fn supplier_from_row(row: SupplierRow) -> Supplier {
    Supplier {
        id: SupplierId::from_uuid(row.id),
        name: row.name,
        display_name: row.display_name,
        created_at: row.created_at,
        lang: row.lang,
        website: row.website,
        job_title: row.job_title,
        partner_type: row.partner_type,
        street: row.street,
        street2: row.street2,
        city: row.city,
        zip: row.zip,
        latitude: row.latitude,
        longitude: row.longitude,
        email: row.email,
        phone: row.phone,
        is_company: row.is_company,
        commercial_parent_id: row.commercial_parent_id.map(SupplierId::from_uuid),
        commercial_company_name: row.commercial_company_name,
    }
}
