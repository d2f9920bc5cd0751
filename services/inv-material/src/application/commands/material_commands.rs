//! Material commands

use mill_errors::{AppError, AppResult};
use rust_decimal::Decimal;

use crate::domain::entities::ensure_buy_price;
use crate::domain::enums::MaterialType;
use crate::domain::value_objects::{MaterialId, SupplierId};

/// 创建物料命令
#[derive(Debug, Clone)]
pub struct CreateMaterialCommand {
    pub material_code: String,
    pub material_name: String,
    pub material_type: MaterialType,
    pub material_buy_price: Decimal,
    pub supplier_id: Option<SupplierId>,
}

impl CreateMaterialCommand {
    /// 持久化之前的候选字段校验
    pub fn validate(&self) -> AppResult<()> {
        // 验证物料编码
        if self.material_code.is_empty() {
            return Err(AppError::validation("material_code must not be empty"));
        }

        // 验证物料名称
        if self.material_name.is_empty() {
            return Err(AppError::validation("material_name must not be empty"));
        }

        // 验证采购价下限
        ensure_buy_price(self.material_buy_price)?;

        Ok(())
    }
}

/// 更新物料命令（部分字段）
#[derive(Debug, Clone)]
pub struct UpdateMaterialCommand {
    pub material_id: MaterialId,
    pub material_code: Option<String>,
    pub material_name: Option<String>,
    pub material_type: Option<MaterialType>,
    pub material_buy_price: Option<Decimal>,
    pub supplier_id: Option<SupplierId>,
}

impl UpdateMaterialCommand {
    /// 持久化之前的候选字段校验
    pub fn validate(&self) -> AppResult<()> {
        // 验证物料编码
        if let Some(code) = &self.material_code {
            if code.is_empty() {
                return Err(AppError::validation("material_code must not be empty"));
            }
        }

        // 验证物料名称
        if let Some(name) = &self.material_name {
            if name.is_empty() {
                return Err(AppError::validation("material_name must not be empty"));
            }
        }

        // 验证采购价下限
        if let Some(price) = self.material_buy_price {
            ensure_buy_price(price)?;
        }

        Ok(())
    }
}

/// 删除物料命令
#[derive(Debug, Clone)]
pub struct DeleteMaterialCommand {
    pub material_id: MaterialId,
}
