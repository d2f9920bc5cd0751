//! Business logic handler

use std::sync::Arc;

use mill_errors::{AppError, AppResult};
use tracing::info;

use crate::domain::entities::{Material, Supplier};
use crate::domain::repositories::{MaterialRepository, SupplierRepository};
use crate::domain::value_objects::{MaterialId, SupplierId};

use super::commands::{CreateMaterialCommand, DeleteMaterialCommand, UpdateMaterialCommand};
use super::queries::{GetMaterialQuery, ListMaterialsQuery};

pub struct ServiceHandler {
    material_repo: Arc<dyn MaterialRepository>,
    supplier_repo: Arc<dyn SupplierRepository>,
}

impl ServiceHandler {
    pub fn new(
        material_repo: Arc<dyn MaterialRepository>,
        supplier_repo: Arc<dyn SupplierRepository>,
    ) -> Self {
        Self {
            material_repo,
            supplier_repo,
        }
    }

    /// 创建物料
    pub async fn create_material(&self, cmd: CreateMaterialCommand) -> AppResult<MaterialId> {
        info!("Creating material: {}", cmd.material_code);

        // 1. 验证命令（未通过时不触达存储）
        cmd.validate()?;

        // 2. 构建实体
        let material = Material::new(
            cmd.material_code,
            cmd.material_name,
            cmd.material_type,
            cmd.material_buy_price,
            cmd.supplier_id,
        )?;

        let material_id = material.id().clone();

        // 3. 保存
        self.material_repo.save(&material).await?;

        info!("Material created successfully: {}", material_id);
        Ok(material_id)
    }

    /// 获取物料
    pub async fn get_material(&self, query: GetMaterialQuery) -> AppResult<Material> {
        let material = self
            .material_repo
            .find_by_id(&query.material_id)
            .await?
            .ok_or_else(|| AppError::not_found("Material not found"))?;

        Ok(material)
    }

    /// 列表物料（可按类型过滤）
    pub async fn list_materials(&self, query: ListMaterialsQuery) -> AppResult<Vec<Material>> {
        self.material_repo.list(query.filter).await
    }

    /// 更新物料（部分字段）
    pub async fn update_material(&self, cmd: UpdateMaterialCommand) -> AppResult<()> {
        info!("Updating material: {}", cmd.material_id);

        // 1. 验证命令（未通过时不触达存储）
        cmd.validate()?;

        // 2. 获取现有物料
        let mut material = self
            .material_repo
            .find_by_id(&cmd.material_id)
            .await?
            .ok_or_else(|| AppError::not_found("Material not found"))?;

        // 3. 应用变更字段
        if let Some(code) = cmd.material_code {
            material.update_code(code);
        }
        if let Some(name) = cmd.material_name {
            material.update_name(name);
        }
        if let Some(material_type) = cmd.material_type {
            material.update_type(material_type);
        }
        if let Some(price) = cmd.material_buy_price {
            material.update_buy_price(price)?;
        }
        if let Some(supplier_id) = cmd.supplier_id {
            material.set_supplier(Some(supplier_id));
        }

        // 4. 持久化
        self.material_repo.update(&material).await?;

        info!("Material updated successfully: {}", cmd.material_id);
        Ok(())
    }

    /// 删除物料（立即、永久，不级联供应商）
    pub async fn delete_material(&self, cmd: DeleteMaterialCommand) -> AppResult<()> {
        info!("Deleting material: {}", cmd.material_id);

        self.material_repo.delete(&cmd.material_id).await?;

        info!("Material deleted successfully: {}", cmd.material_id);
        Ok(())
    }

    /// 联查供应商（序列化用，只读）
    pub async fn find_supplier(&self, id: &SupplierId) -> AppResult<Option<Supplier>> {
        self.supplier_repo.find_by_id(id).await
    }

    /// 存储连通性检查
    pub async fn ping_store(&self) -> AppResult<()> {
        self.material_repo.ping().await
    }
}
