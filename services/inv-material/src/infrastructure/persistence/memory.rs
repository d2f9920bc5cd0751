//! In-memory repository implementation
//!
//! 测试与本地开发用，契约语义与 PostgreSQL 实现一致

use std::collections::HashMap;

use async_trait::async_trait;
use mill_errors::{AppError, AppResult};
use tokio::sync::RwLock;

use crate::domain::entities::{Material, MaterialFilter, Supplier};
use crate::domain::repositories::{MaterialRepository, SupplierRepository};
use crate::domain::value_objects::{MaterialId, SupplierId};

/// 内存物料仓储
///
/// Vec 保持插入顺序，对应列表查询的稳定顺序
#[derive(Default)]
pub struct InMemoryMaterialRepository {
    store: RwLock<Vec<Material>>,
}

impl InMemoryMaterialRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl MaterialRepository for InMemoryMaterialRepository {
    async fn find_by_id(&self, id: &MaterialId) -> AppResult<Option<Material>> {
        let store = self.store.read().await;
        Ok(store.iter().find(|m| m.id() == id).cloned())
    }

    async fn save(&self, material: &Material) -> AppResult<()> {
        self.store.write().await.push(material.clone());
        Ok(())
    }

    async fn update(&self, material: &Material) -> AppResult<()> {
        let mut store = self.store.write().await;
        let pos = store
            .iter()
            .position(|m| m.id() == material.id())
            .ok_or_else(|| AppError::not_found("Material not found"))?;
        store[pos] = material.clone();
        Ok(())
    }

    async fn delete(&self, id: &MaterialId) -> AppResult<()> {
        let mut store = self.store.write().await;
        let pos = store
            .iter()
            .position(|m| m.id() == id)
            .ok_or_else(|| AppError::not_found("Material not found"))?;
        store.remove(pos);
        Ok(())
    }

    async fn list(&self, filter: MaterialFilter) -> AppResult<Vec<Material>> {
        let store = self.store.read().await;
        let items = store
            .iter()
            .filter(|m| match &filter.material_type {
                Some(material_type) => m.material_type().as_str() == material_type,
                None => true,
            })
            .cloned()
            .collect();
        Ok(items)
    }

    async fn ping(&self) -> AppResult<()> {
        Ok(())
    }
}

/// 内存供应商仓储
///
/// 供应商生命周期在服务之外，这里只提供预置数据的查询
#[derive(Default)]
pub struct InMemorySupplierRepository {
    suppliers: RwLock<HashMap<SupplierId, Supplier>>,
}

impl InMemorySupplierRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 预置供应商
    pub async fn seed(&self, supplier: Supplier) {
        self.suppliers
            .write()
            .await
            .insert(supplier.id.clone(), supplier);
    }
}

#[async_trait]
impl SupplierRepository for InMemorySupplierRepository {
    async fn find_by_id(&self, id: &SupplierId) -> AppResult<Option<Supplier>> {
        Ok(self.suppliers.read().await.get(id).cloned())
    }
}
