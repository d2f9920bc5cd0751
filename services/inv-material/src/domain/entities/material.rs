//! 物料实体

use mill_common::AuditInfo;
use mill_errors::{AppError, AppResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::enums::MaterialType;
use crate::domain::value_objects::{MaterialId, SupplierId};

/// 采购价下限
pub const MIN_BUY_PRICE: i64 = 100;

/// 物料实体
///
/// 库存管理的核心记录。对供应商只持有弱引用：
/// 序列化时联查，删除物料不影响供应商
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Material {
    /// 物料 ID
    id: MaterialId,
    /// 物料编码（业务标识，约定唯一但不强制）
    material_code: String,
    /// 物料名称
    material_name: String,
    /// 物料类型
    material_type: MaterialType,
    /// 采购价
    material_buy_price: Decimal,
    /// 供应商 ID
    supplier_id: Option<SupplierId>,
    /// 审计信息
    audit_info: AuditInfo,
}

impl Material {
    /// 创建新物料
    ///
    /// 采购价未通过校验时不产生实体
    pub fn new(
        material_code: impl Into<String>,
        material_name: impl Into<String>,
        material_type: MaterialType,
        material_buy_price: Decimal,
        supplier_id: Option<SupplierId>,
    ) -> AppResult<Self> {
        ensure_buy_price(material_buy_price)?;

        Ok(Self {
            id: MaterialId::new(),
            material_code: material_code.into(),
            material_name: material_name.into(),
            material_type,
            material_buy_price,
            supplier_id,
            audit_info: AuditInfo::new(),
        })
    }

    /// 从各部分构建物料（用于从数据库加载）
    pub fn from_parts(
        id: MaterialId,
        material_code: String,
        material_name: String,
        material_type: MaterialType,
        material_buy_price: Decimal,
        supplier_id: Option<SupplierId>,
        audit_info: AuditInfo,
    ) -> Self {
        Self {
            id,
            material_code,
            material_name,
            material_type,
            material_buy_price,
            supplier_id,
            audit_info,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> &MaterialId {
        &self.id
    }

    pub fn material_code(&self) -> &str {
        &self.material_code
    }

    pub fn material_name(&self) -> &str {
        &self.material_name
    }

    pub fn material_type(&self) -> MaterialType {
        self.material_type
    }

    pub fn material_buy_price(&self) -> Decimal {
        self.material_buy_price
    }

    pub fn supplier_id(&self) -> Option<&SupplierId> {
        self.supplier_id.as_ref()
    }

    pub fn audit_info(&self) -> &AuditInfo {
        &self.audit_info
    }

    // ========== 字段更新 ==========

    /// 更新物料编码
    pub fn update_code(&mut self, material_code: impl Into<String>) {
        self.material_code = material_code.into();
        self.audit_info.update();
    }

    /// 更新物料名称
    pub fn update_name(&mut self, material_name: impl Into<String>) {
        self.material_name = material_name.into();
        self.audit_info.update();
    }

    /// 更新物料类型
    pub fn update_type(&mut self, material_type: MaterialType) {
        self.material_type = material_type;
        self.audit_info.update();
    }

    /// 更新采购价
    ///
    /// 低于下限时拒绝，实体保持原值
    pub fn update_buy_price(&mut self, material_buy_price: Decimal) -> AppResult<()> {
        ensure_buy_price(material_buy_price)?;
        self.material_buy_price = material_buy_price;
        self.audit_info.update();
        Ok(())
    }

    /// 设置供应商引用
    pub fn set_supplier(&mut self, supplier_id: Option<SupplierId>) {
        self.supplier_id = supplier_id;
        self.audit_info.update();
    }
}

/// 采购价约束，创建与更新路径共用
pub fn ensure_buy_price(material_buy_price: Decimal) -> AppResult<()> {
    if material_buy_price < Decimal::from(MIN_BUY_PRICE) {
        return Err(AppError::validation("material_buy_price below minimum"));
    }
    Ok(())
}

/// 物料过滤条件
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MaterialFilter {
    /// 物料类型（精确匹配，未知取值命中空集）
    pub material_type: Option<String>,
}
