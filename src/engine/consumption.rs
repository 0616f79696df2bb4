// ==========================================
// GLP 储罐计算系统 - 消耗速率引擎
// ==========================================
// 职责: 按生产线组合计算 GLP 消耗速率 (kg/min)
// 规则: rate = g/件 × 件/min × 效率 / 1000
// 红线: 激活线未选格式时贡献为 0, 不是错误
// ==========================================

use crate::domain::line::{LineConfiguration, LineSetup};
use crate::domain::result::{ConsumptionSummary, LineConsumption};
use crate::domain::types::LineId;
use crate::engine::conversion::GRAMS_PER_KG;

// ==========================================
// ConsumptionEngine - 消耗速率引擎
// ==========================================
pub struct ConsumptionEngine {
    // 无状态引擎
}

impl ConsumptionEngine {
    pub fn new() -> Self {
        Self {}
    }

    /// 单条生产线消耗速率 (kg/min)
    pub fn line_rate(&self, setup: &LineSetup) -> f64 {
        match &setup.format {
            Some(format) => {
                format.grams_per_unit * setup.throughput_per_min * setup.efficiency / GRAMS_PER_KG
            }
            None => 0.0,
        }
    }

    /// 单条生产线消耗明细, 未选格式时返回 None
    pub fn line_consumption(&self, line: LineId, setup: &LineSetup) -> Option<LineConsumption> {
        let format = setup.format.as_ref()?;
        Some(LineConsumption {
            line,
            format_name: format.name.clone(),
            grams_per_unit: format.grams_per_unit,
            throughput_per_min: setup.throughput_per_min,
            efficiency: setup.efficiency,
            rate_kg_per_min: self.line_rate(setup),
        })
    }

    /// 汇总激活生产线的消耗速率
    ///
    /// 双线组合时各线独立计算后求和
    pub fn summarize(&self, lines: &LineConfiguration) -> ConsumptionSummary {
        let details: Vec<LineConsumption> = lines
            .active_setups()
            .filter_map(|(line, setup)| self.line_consumption(line, setup))
            .collect();

        let total_rate_kg_per_min = details.iter().map(|d| d.rate_kg_per_min).sum();

        tracing::debug!(
            selection = %lines.selection,
            configured_lines = details.len(),
            total_rate_kg_per_min,
            "消耗速率计算完成"
        );

        ConsumptionSummary {
            lines: details,
            total_rate_kg_per_min,
        }
    }
}

impl Default for ConsumptionEngine {
    fn default() -> Self {
        Self::new()
    }
}
