//! API 请求对象

use mill_errors::AppResult;
use rust_decimal::Decimal;
use serde::Deserialize;
use uuid::Uuid;

use crate::application::commands::{CreateMaterialCommand, UpdateMaterialCommand};
use crate::domain::enums::MaterialType;
use crate::domain::value_objects::{MaterialId, SupplierId};

/// 创建物料请求
#[derive(Debug, Deserialize)]
pub struct CreateMaterialRequest {
    pub material_code: String,
    pub material_name: String,
    pub material_type: String,
    pub material_buy_price: Decimal,
    pub supplier_id: Option<Uuid>,
}

impl CreateMaterialRequest {
    /// 转换为命令，类型取值在这里解析
    pub fn into_command(self) -> AppResult<CreateMaterialCommand> {
        Ok(CreateMaterialCommand {
            material_code: self.material_code,
            material_name: self.material_name,
            material_type: self.material_type.parse::<MaterialType>()?,
            material_buy_price: self.material_buy_price,
            supplier_id: self.supplier_id.map(SupplierId::from_uuid),
        })
    }
}

/// 更新物料请求（部分字段）
#[derive(Debug, Deserialize)]
pub struct UpdateMaterialRequest {
    pub material_code: Option<String>,
    pub material_name: Option<String>,
    pub material_type: Option<String>,
    pub material_buy_price: Option<Decimal>,
    pub supplier_id: Option<Uuid>,
}

impl UpdateMaterialRequest {
    /// 转换为命令，类型取值在这里解析
    pub fn into_command(self, id: Uuid) -> AppResult<UpdateMaterialCommand> {
        let material_type = self
            .material_type
            .map(|t| t.parse::<MaterialType>())
            .transpose()?;

        Ok(UpdateMaterialCommand {
            material_id: MaterialId::from_uuid(id),
            material_code: self.material_code,
            material_name: self.material_name,
            material_type,
            material_buy_price: self.material_buy_price,
            supplier_id: self.supplier_id.map(SupplierId::from_uuid),
        })
    }
}

/// 按类型过滤请求
#[derive(Debug, Deserialize)]
pub struct FilterMaterialsRequest {
    pub material_type: Option<String>,
}

/// 列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    /// `expand=supplier` 时返回完整供应商形态
    pub expand: Option<String>,
}
