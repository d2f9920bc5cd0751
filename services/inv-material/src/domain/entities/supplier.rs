//! 供应商只读模型

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::SupplierId;

/// 供应商
///
/// 外部主数据，生命周期独立于本服务。
/// 本服务只在序列化时联查，从不创建、修改或删除
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Supplier {
    /// 供应商 ID
    pub id: SupplierId,
    /// 名称
    pub name: String,
    /// 显示名
    pub display_name: String,
    /// 创建时间
    pub created_at: DateTime<Utc>,
    /// 语言
    pub lang: Option<String>,
    /// 网站
    pub website: Option<String>,
    /// 职务
    pub job_title: Option<String>,
    /// 伙伴类型
    pub partner_type: Option<String>,
    /// 街道
    pub street: Option<String>,
    /// 街道 2
    pub street2: Option<String>,
    /// 城市
    pub city: Option<String>,
    /// 邮编
    pub zip: Option<String>,
    /// 纬度
    pub latitude: Option<f64>,
    /// 经度
    pub longitude: Option<f64>,
    /// 邮箱
    pub email: Option<String>,
    /// 电话
    pub phone: Option<String>,
    /// 是否公司
    pub is_company: bool,
    /// 商业母体 ID
    pub commercial_parent_id: Option<SupplierId>,
    /// 商业公司名
    pub commercial_company_name: Option<String>,
}
