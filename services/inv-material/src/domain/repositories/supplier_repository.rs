//! 供应商仓储接口

use async_trait::async_trait;
use mill_errors::AppResult;

use crate::domain::entities::Supplier;
use crate::domain::value_objects::SupplierId;

/// 供应商仓储接口
///
/// 只读：供应商由外部系统维护
#[async_trait]
pub trait SupplierRepository: Send + Sync {
    /// 根据 ID 查找供应商
    async fn find_by_id(&self, id: &SupplierId) -> AppResult<Option<Supplier>>;
}
