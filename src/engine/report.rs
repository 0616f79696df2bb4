// ==========================================
// GLP 储罐计算系统 - 文本报告
// ==========================================
// 职责: 将计算结果渲染为可读文本行 (供命令行输出)
// 不含业务逻辑, 只做格式化
// ==========================================

use crate::domain::result::{
    CalculationResult, DeliveryDistribution, LineConsumption, RemainingTime,
    SafeCeilingOutcome, TruckAssessment, WaitEstimate,
};
use crate::domain::types::RemainingTimeStatus;
use crate::engine::strategy::AdmissionPolicy;

/// 千分位 + 两位小数, 例如 36657.576 → "36,657.58"
pub fn format_num(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted != "0.00" {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// "33 h 42 min (2022.56 min)"
pub fn format_remaining(remaining: &RemainingTime) -> String {
    match remaining.status {
        RemainingTimeStatus::Available => format!(
            "{} h {} min ({} min)",
            remaining.hours, remaining.remainder_minutes, remaining.rounded_minutes
        ),
        RemainingTimeStatus::NoUsableInventory => "储备下限以上无可用 GLP".to_string(),
        RemainingTimeStatus::NoConsumptionConfigured => "未配置消耗或消耗为 0".to_string(),
    }
}

/// "LINE_A (Ambiental): 87.6 g/件 × 195 件/min → 17.0820 kg/min"
pub fn format_line(line: &LineConsumption) -> String {
    let efficiency = if line.efficiency < 1.0 {
        format!(" × {:.0}%", line.efficiency * 100.0)
    } else {
        String::new()
    };
    format!(
        "{} ({}): {} g/件 × {} 件/min{} → {:.4} kg/min",
        line.line,
        line.format_name,
        line.grams_per_unit,
        line.throughput_per_min,
        efficiency,
        line.rate_kg_per_min
    )
}

pub fn render_text(result: &CalculationResult) -> Vec<String> {
    let mut lines = Vec::new();
    let inv = &result.inventory;

    lines.push("== 库存 (kg) ==".to_string());
    for tank in &inv.tanks {
        lines.push(format!(
            "- {}: {:.1}% | {} m³ | {} kg / 容量 {} kg",
            tank.name,
            tank.fill_percent,
            format_num(tank.current_volume_m3),
            format_num(tank.current_mass_kg),
            format_num(tank.capacity_mass_kg)
        ));
    }
    lines.push(format!("- 当前总量: {} kg", format_num(inv.total_current_mass_kg)));
    lines.push(format!("- 储备下限: {} kg", format_num(inv.minimum_required_mass_kg)));
    lines.push(format!("- 可用量: {} kg", format_num(inv.usable_mass_kg)));

    lines.push("== 消耗 ==".to_string());
    if result.consumption.lines.is_empty() {
        lines.push("- 未配置消耗 (缺少生产线/格式选择)".to_string());
    }
    for line in &result.consumption.lines {
        lines.push(format!("- {}", format_line(line)));
    }
    lines.push(format!(
        "- 总消耗: {:.4} kg/min",
        result.consumption.total_rate_kg_per_min
    ));
    lines.push(format!("- 剩余运行时间: {}", format_remaining(&result.remaining)));

    let policy = match &result.truck {
        TruckAssessment::FillToFull(_) => AdmissionPolicy::FillToFull,
        TruckAssessment::SafeCeiling(_) => AdmissionPolicy::SafeCeiling,
    };
    lines.push(format!("== 槽车: {} / {} ==", policy.title_cn(), policy.title_es()));
    match &result.truck {
        TruckAssessment::FillToFull(outcome) => {
            lines.push(format!(
                "- 系统总容量: {} kg, 充满所需: {} kg, 槽车: {} kg",
                format_num(outcome.physical_capacity_mass_kg),
                format_num(outcome.needed_to_full_kg),
                format_num(outcome.truck_capacity_kg)
            ));
            lines.push(match outcome.distribution {
                DeliveryDistribution::FillsCompletely => "- 槽车足以将储罐充满至 100%".to_string(),
                DeliveryDistribution::Proportional => {
                    "- 槽车不足以充满, 按缺口比例分配".to_string()
                }
                DeliveryDistribution::NotApplicable => "- 储罐均已满, 无需分配".to_string(),
            });
            for tank in &outcome.tanks {
                lines.push(format!("- 收货后 {}: {:.1}%", tank.name, tank.percent));
            }
        }
        TruckAssessment::SafeCeiling(assessment) => {
            lines.push(format!(
                "- 安全上限: {} kg, 可收空间: {} kg, 槽车: {} kg",
                format_num(assessment.safe_ceiling_mass_kg),
                format_num(assessment.space_for_truck_kg),
                format_num(assessment.truck_capacity_kg)
            ));
            lines.push(match &assessment.outcome {
                SafeCeilingOutcome::Overfill { excess_kg } => {
                    format!("- 已超出安全上限 {} kg, 禁止卸车", format_num(*excess_kg))
                }
                SafeCeilingOutcome::Shortfall { shortfall_kg, wait } => match wait {
                    WaitEstimate::Minutes(minutes) => format!(
                        "- 空间不足 {} kg, 预计等待 {:.1} min",
                        format_num(*shortfall_kg),
                        minutes
                    ),
                    WaitEstimate::Unbounded => format!(
                        "- 空间不足 {} kg, 当前无消耗, 等待时间无法估算",
                        format_num(*shortfall_kg)
                    ),
                },
                SafeCeilingOutcome::Admit { headroom_kg } => {
                    format!("- 可以卸车, 卸后余量 {} kg", format_num(*headroom_kg))
                }
            });
        }
    }

    if !result.alerts.is_empty() {
        lines.push("== 告警 ==".to_string());
        for alert in &result.alerts {
            lines.push(format!(
                "- {} 液位 {:.1}% 处于或低于储备下限 {:.1}%",
                alert.name, alert.fill_percent, alert.reserve_percent
            ));
        }
    }

    lines
}
