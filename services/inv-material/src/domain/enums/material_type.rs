//! 物料类型枚举

use mill_errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// 物料类型
///
/// 封闭选择集，过滤时按字符串精确匹配
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialType {
    /// 面料
    Fabric,
    /// 牛仔
    Jeans,
    /// 棉
    Cotton,
}

impl MaterialType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialType::Fabric => "fabric",
            MaterialType::Jeans => "jeans",
            MaterialType::Cotton => "cotton",
        }
    }
}

impl fmt::Display for MaterialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MaterialType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fabric" => Ok(MaterialType::Fabric),
            "jeans" => Ok(MaterialType::Jeans),
            "cotton" => Ok(MaterialType::Cotton),
            other => Err(AppError::validation(format!(
                "unknown material_type: {}",
                other
            ))),
        }
    }
}
