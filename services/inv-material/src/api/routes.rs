//! API 路由

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::get;
use axum::{Json, Router};
use uuid::Uuid;

use crate::application::commands::DeleteMaterialCommand;
use crate::application::handler::ServiceHandler;
use crate::application::queries::{GetMaterialQuery, ListMaterialsQuery};
use crate::domain::entities::{Material, MaterialFilter};
use crate::domain::value_objects::MaterialId;

use super::error::ApiError;
use super::requests::{
    CreateMaterialRequest, FilterMaterialsRequest, ListParams, UpdateMaterialRequest,
};
use super::responses::{
    CreatedResponse, HealthResponse, MaterialResponse, MessageResponse, ReadinessResponse,
    ServiceCheck,
};

pub type AppState = Arc<ServiceHandler>;

pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/materials", get(list_materials).post(create_material))
        .route("/api/materials/filter", get(filter_materials))
        .route(
            "/api/materials/{id}",
            get(get_material)
                .put(update_material)
                .delete(delete_material),
        )
        .route("/health", get(health_check))
        .route("/ready", get(readiness_check))
        .with_state(state)
}

/// GET /api/materials
async fn list_materials(
    State(handler): State<AppState>,
    Query(params): Query<ListParams>,
) -> Result<Json<Vec<MaterialResponse>>, ApiError> {
    let materials = handler
        .list_materials(ListMaterialsQuery::default())
        .await?;

    let include_full_supplier = params.expand.as_deref() == Some("supplier");
    let body = render_materials(&handler, &materials, include_full_supplier).await?;
    Ok(Json(body))
}

/// GET /api/materials/filter
async fn filter_materials(
    State(handler): State<AppState>,
    Json(request): Json<FilterMaterialsRequest>,
) -> Result<Json<Vec<MaterialResponse>>, ApiError> {
    let query = ListMaterialsQuery {
        filter: MaterialFilter {
            material_type: request.material_type,
        },
    };
    let materials = handler.list_materials(query).await?;

    let body = render_materials(&handler, &materials, false).await?;
    Ok(Json(body))
}

/// GET /api/materials/{id}
async fn get_material(
    State(handler): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MaterialResponse>, ApiError> {
    let material = handler
        .get_material(GetMaterialQuery {
            material_id: MaterialId::from_uuid(id),
        })
        .await?;

    let supplier = match material.supplier_id() {
        Some(supplier_id) => handler.find_supplier(supplier_id).await?,
        None => None,
    };

    Ok(Json(MaterialResponse::with_supplier(
        &material,
        supplier.as_ref(),
    )))
}

/// POST /api/materials
async fn create_material(
    State(handler): State<AppState>,
    Json(request): Json<CreateMaterialRequest>,
) -> Result<Json<CreatedResponse>, ApiError> {
    let material_id = handler.create_material(request.into_command()?).await?;

    Ok(Json(CreatedResponse {
        id: material_id.0,
        message: "Material created successfully".to_string(),
    }))
}

/// PUT /api/materials/{id}
async fn update_material(
    State(handler): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateMaterialRequest>,
) -> Result<Json<MessageResponse>, ApiError> {
    handler.update_material(request.into_command(id)?).await?;

    Ok(Json(MessageResponse {
        message: "Material updated successfully".to_string(),
    }))
}

/// DELETE /api/materials/{id}
async fn delete_material(
    State(handler): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    handler
        .delete_material(DeleteMaterialCommand {
            material_id: MaterialId::from_uuid(id),
        })
        .await?;

    Ok(Json(MessageResponse {
        message: "Material deleted successfully".to_string(),
    }))
}

/// 供应商联查在响应渲染时进行，物料本身只持有弱引用
async fn render_materials(
    handler: &ServiceHandler,
    materials: &[Material],
    include_full_supplier: bool,
) -> Result<Vec<MaterialResponse>, ApiError> {
    let mut body = Vec::with_capacity(materials.len());

    for material in materials {
        let supplier = match material.supplier_id() {
            Some(supplier_id) => handler.find_supplier(supplier_id).await?,
            None => None,
        };

        body.push(if include_full_supplier {
            MaterialResponse::with_supplier(material, supplier.as_ref())
        } else {
            MaterialResponse::minimal(material, supplier.as_ref())
        });
    }

    Ok(body)
}

/// GET /health
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// GET /ready
async fn readiness_check(State(handler): State<AppState>) -> Json<ReadinessResponse> {
    let database_healthy = handler.ping_store().await.is_ok();

    Json(ReadinessResponse {
        ready: database_healthy,
        checks: vec![ServiceCheck {
            name: "database".to_string(),
            healthy: database_healthy,
        }],
    })
}
