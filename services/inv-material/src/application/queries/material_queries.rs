//! Material queries

use crate::domain::entities::MaterialFilter;
use crate::domain::value_objects::MaterialId;

/// 获取物料查询
#[derive(Debug, Clone)]
pub struct GetMaterialQuery {
    pub material_id: MaterialId,
}

/// 列表物料查询
///
/// 不带过滤条件时返回全部物料
#[derive(Debug, Clone, Default)]
pub struct ListMaterialsQuery {
    pub filter: MaterialFilter,
}
