// ==========================================
// GLP 储罐计算系统 - 领域类型定义
// ==========================================
// 单位约定: 体积 m³ / 质量 kg / 格式消耗 g/件 / 速率 kg/min / 时间 min
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 生产线 (Line Id)
// ==========================================
// LineA 对应 C3 线 (速度可编辑), LineB 对应 C2 线 (速度固定)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LineId {
    LineA, // C3
    LineB, // C2
}

impl fmt::Display for LineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineId::LineA => write!(f, "LINE_A"),
            LineId::LineB => write!(f, "LINE_B"),
        }
    }
}

// ==========================================
// 生产线组合 (Line Selection)
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSelection {
    LineAOnly,
    LineBOnly,
    Both,
}

impl LineSelection {
    /// 当前组合下处于运行状态的生产线
    pub fn active_lines(&self) -> &'static [LineId] {
        match self {
            LineSelection::LineAOnly => &[LineId::LineA],
            LineSelection::LineBOnly => &[LineId::LineB],
            LineSelection::Both => &[LineId::LineA, LineId::LineB],
        }
    }

    pub fn is_active(&self, line: LineId) -> bool {
        self.active_lines().contains(&line)
    }
}

impl Default for LineSelection {
    fn default() -> Self {
        LineSelection::LineAOnly
    }
}

impl fmt::Display for LineSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineSelection::LineAOnly => write!(f, "line_a_only"),
            LineSelection::LineBOnly => write!(f, "line_b_only"),
            LineSelection::Both => write!(f, "both"),
        }
    }
}

impl std::str::FromStr for LineSelection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "line_a_only" | "line_a" | "a" | "c3" => Ok(LineSelection::LineAOnly),
            "line_b_only" | "line_b" | "b" | "c2" => Ok(LineSelection::LineBOnly),
            "both" | "c3 y c2" | "c3+c2" => Ok(LineSelection::Both),
            other => Err(format!("未知生产线组合: {}", other)),
        }
    }
}

// ==========================================
// 剩余时间状态 (Remaining Time Status)
// ==========================================
// 红线: "无可用库存" 与 "未配置消耗" 是两种不同的零值状态, 不可合并
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RemainingTimeStatus {
    Available,               // 可计算剩余时间
    NoUsableInventory,       // 可用库存为 0 (已触及储备下限)
    NoConsumptionConfigured, // 消耗速率为 0 (未选格式/未选线)
}

impl fmt::Display for RemainingTimeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemainingTimeStatus::Available => write!(f, "AVAILABLE"),
            RemainingTimeStatus::NoUsableInventory => write!(f, "NO_USABLE_INVENTORY"),
            RemainingTimeStatus::NoConsumptionConfigured => {
                write!(f, "NO_CONSUMPTION_CONFIGURED")
            }
        }
    }
}
