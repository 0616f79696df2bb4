// ==========================================
// GLP 储罐计算系统 - 收货策略定义
// ==========================================
// 用途：
// - 两种收货规则互斥, 由配置或请求选择其一;
// - 计算流程中只在槽车引擎入口分派一次, 不在其他位置判断策略。

use serde::{Deserialize, Serialize};

/// 槽车收货策略
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AdmissionPolicy {
    /// 充满至 100%, 不足时按比例分配
    FillToFull,
    /// 不超过安全上限, 单次判定
    SafeCeiling,
}

impl AdmissionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdmissionPolicy::FillToFull => "fill_to_full",
            AdmissionPolicy::SafeCeiling => "safe_ceiling",
        }
    }

    pub fn title_cn(&self) -> &'static str {
        match self {
            AdmissionPolicy::FillToFull => "充满至100%",
            AdmissionPolicy::SafeCeiling => "安全上限",
        }
    }

    pub fn title_es(&self) -> &'static str {
        match self {
            AdmissionPolicy::FillToFull => "Llenado al 100%",
            AdmissionPolicy::SafeCeiling => "Techo de seguridad",
        }
    }
}

impl Default for AdmissionPolicy {
    fn default() -> Self {
        AdmissionPolicy::FillToFull
    }
}

impl std::fmt::Display for AdmissionPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for AdmissionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "fill_to_full" | "fill-to-full" | "full" => Ok(AdmissionPolicy::FillToFull),
            "safe_ceiling" | "safe-ceiling" | "ceiling" => Ok(AdmissionPolicy::SafeCeiling),
            other => Err(format!("未知收货策略: {}", other)),
        }
    }
}
