// ==========================================
// GLP 储罐计算系统 - 工厂配置
// ==========================================
// 职责: 储罐容积、密度、格式表、产速、槽车载量等常量的显式配置
// 红线: 配置对象不可变, 显式传入每次计算, 无进程级可变状态
// ==========================================
// 每个可调字段标注来源:
// - Fixed: 固定默认值, 忽略调用方传入
// - CallerSupplied: 调用方可传入, 缺省时使用默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::line::Format;
use crate::domain::types::LineId;
use crate::engine::strategy::AdmissionPolicy;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt::Debug;

/// 密度允许范围 (kg/m³), 0 为合法的退化值
pub const DENSITY_MIN: f64 = 0.0;
pub const DENSITY_MAX: f64 = 1000.0;

// ==========================================
// FieldSource / Tunable - 字段来源
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldSource {
    Fixed,
    CallerSupplied,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tunable<T> {
    pub default: T,
    pub source: FieldSource,
}

impl<T: Copy + PartialEq + Debug> Tunable<T> {
    pub fn fixed(default: T) -> Self {
        Self {
            default,
            source: FieldSource::Fixed,
        }
    }

    pub fn caller_supplied(default: T) -> Self {
        Self {
            default,
            source: FieldSource::CallerSupplied,
        }
    }

    pub fn is_fixed(&self) -> bool {
        self.source == FieldSource::Fixed
    }

    /// 解析最终取值
    ///
    /// 固定字段忽略调用方传入值 (不同于默认值时记录 warn)
    pub fn resolve(&self, field: &str, caller: Option<T>) -> T {
        match (self.source, caller) {
            (FieldSource::CallerSupplied, Some(value)) => value,
            (FieldSource::Fixed, Some(value)) if value != self.default => {
                tracing::warn!(
                    config_field = field,
                    offered = ?value,
                    fixed = ?self.default,
                    "固定字段忽略调用方传入值"
                );
                self.default
            }
            _ => self.default,
        }
    }
}

// ==========================================
// TankSpec - 储罐规格
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankSpec {
    pub name: String,
    pub capacity_m3: f64,
}

impl TankSpec {
    pub fn new(name: impl Into<String>, capacity_m3: f64) -> Self {
        Self {
            name: name.into(),
            capacity_m3,
        }
    }
}

// ==========================================
// LineSpec - 生产线规格
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineSpec {
    pub line: LineId,
    /// 显示名称 (C3 / C2)
    pub label: String,
    pub formats: Vec<Format>,
    /// 产速 (件/min)
    pub speed: Tunable<f64>,
    pub speed_min: f64,
    pub speed_max: f64,
    /// 效率系数 (0, 1]
    pub efficiency: Tunable<f64>,
}

impl LineSpec {
    /// 按名称查找格式 (忽略首尾空白与大小写)
    pub fn find_format(&self, name: &str) -> Option<&Format> {
        let wanted = name.trim();
        self.formats
            .iter()
            .find(|f| f.name.eq_ignore_ascii_case(wanted))
    }

    pub fn default_format(&self) -> Option<&Format> {
        self.formats.first()
    }

    pub fn format_names(&self) -> Vec<String> {
        self.formats.iter().map(|f| f.name.clone()).collect()
    }
}

// ==========================================
// PlantConfig - 工厂配置
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlantConfig {
    pub tanks: Vec<TankSpec>,
    pub density_kg_per_m3: Tunable<f64>,
    /// 储备下限比例默认值 (请求可覆盖)
    pub reserve_min_fraction: f64,
    pub safe_ceiling_fraction: Tunable<f64>,
    pub truck_capacity_kg: Tunable<f64>,
    pub line_a: LineSpec,
    pub line_b: LineSpec,
    #[serde(default)]
    pub admission_policy: AdmissionPolicy,
}

impl Default for PlantConfig {
    fn default() -> Self {
        Self {
            tanks: vec![
                TankSpec::new("Tanque Grande", 49170.0),
                TankSpec::new("Tanque Chico", 30694.0),
            ],
            density_kg_per_m3: Tunable::fixed(0.54),
            reserve_min_fraction: 0.05,
            safe_ceiling_fraction: Tunable::fixed(0.85),
            truck_capacity_kg: Tunable::fixed(24000.0),
            line_a: LineSpec {
                line: LineId::LineA,
                label: "C3".to_string(),
                formats: vec![
                    Format::new("Ambiental", 87.6),
                    Format::new("Desinfectante", 69.5),
                    Format::new("Selton", 93.6),
                ],
                speed: Tunable::caller_supplied(195.0),
                speed_min: 1.0,
                speed_max: 5000.0,
                efficiency: Tunable::fixed(1.0),
            },
            line_b: LineSpec {
                line: LineId::LineB,
                label: "C2".to_string(),
                formats: vec![Format::new("Jirafa", 100.7), Format::new("360g", 69.5)],
                speed: Tunable::fixed(52.0),
                speed_min: 1.0,
                speed_max: 5000.0,
                efficiency: Tunable::fixed(1.0),
            },
            admission_policy: AdmissionPolicy::FillToFull,
        }
    }
}

impl PlantConfig {
    pub fn total_capacity_m3(&self) -> f64 {
        self.tanks.iter().map(|t| t.capacity_m3).sum()
    }

    /// 配置校验
    ///
    /// 负容积、比例越界、密度越界、格式重名 均为配置错误
    pub fn validate(&self) -> ConfigResult<()> {
        if self.tanks.is_empty() {
            return Err(ConfigError::Invalid("至少需要配置一个储罐".to_string()));
        }
        for tank in &self.tanks {
            if !tank.capacity_m3.is_finite() || tank.capacity_m3 < 0.0 {
                return Err(ConfigError::Invalid(format!(
                    "储罐容积不能为负: {}={}",
                    tank.name, tank.capacity_m3
                )));
            }
        }

        let density = self.density_kg_per_m3.default;
        if !(DENSITY_MIN..=DENSITY_MAX).contains(&density) {
            return Err(ConfigError::Invalid(format!(
                "密度超出范围 [{}, {}]: {}",
                DENSITY_MIN, DENSITY_MAX, density
            )));
        }

        Self::check_fraction("reserve_min_fraction", self.reserve_min_fraction)?;
        Self::check_fraction("safe_ceiling_fraction", self.safe_ceiling_fraction.default)?;

        if !(self.truck_capacity_kg.default >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "槽车载量不能为负: {}",
                self.truck_capacity_kg.default
            )));
        }

        for spec in [&self.line_a, &self.line_b] {
            Self::check_line(spec)?;
        }

        Ok(())
    }

    fn check_fraction(field: &str, value: f64) -> ConfigResult<()> {
        if (0.0..=1.0).contains(&value) {
            Ok(())
        } else {
            Err(ConfigError::Invalid(format!(
                "{} 超出范围 [0, 1]: {}",
                field, value
            )))
        }
    }

    fn check_line(spec: &LineSpec) -> ConfigResult<()> {
        if spec.speed_min > spec.speed_max || spec.speed_min < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "{} 产速范围无效: [{}, {}]",
                spec.label, spec.speed_min, spec.speed_max
            )));
        }
        if !(spec.speed_min..=spec.speed_max).contains(&spec.speed.default) {
            return Err(ConfigError::Invalid(format!(
                "{} 默认产速 {} 不在范围 [{}, {}] 内",
                spec.label, spec.speed.default, spec.speed_min, spec.speed_max
            )));
        }
        let efficiency = spec.efficiency.default;
        if !(efficiency > 0.0 && efficiency <= 1.0) {
            return Err(ConfigError::Invalid(format!(
                "{} 效率系数超出范围 (0, 1]: {}",
                spec.label, efficiency
            )));
        }

        let mut seen = HashSet::new();
        for format in &spec.formats {
            if !seen.insert(format.name.to_lowercase()) {
                return Err(ConfigError::Invalid(format!(
                    "{} 格式重名: {}",
                    spec.label, format.name
                )));
            }
            if !(format.grams_per_unit >= 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{} 格式 {} 单耗不能为负: {}",
                    spec.label, format.name, format.grams_per_unit
                )));
            }
        }
        Ok(())
    }
}
