//! 物料仓储接口

use async_trait::async_trait;
use mill_errors::AppResult;

use crate::domain::entities::{Material, MaterialFilter};
use crate::domain::value_objects::MaterialId;

/// 物料仓储接口
///
/// 窄存储接口：事务边界与并发控制由底层存储负责，
/// 每个方法对应一次完整提交或完整回滚的操作
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    /// 根据 ID 查找物料
    async fn find_by_id(&self, id: &MaterialId) -> AppResult<Option<Material>>;

    /// 保存物料（新建）
    async fn save(&self, material: &Material) -> AppResult<()>;

    /// 更新物料，记录不存在时返回 NotFound
    async fn update(&self, material: &Material) -> AppResult<()>;

    /// 删除物料，记录不存在时返回 NotFound
    async fn delete(&self, id: &MaterialId) -> AppResult<()>;

    /// 列表查询，按存储的稳定顺序返回
    async fn list(&self, filter: MaterialFilter) -> AppResult<Vec<Material>>;

    /// 存储连通性检查（就绪探针用）
    async fn ping(&self) -> AppResult<()>;
}
