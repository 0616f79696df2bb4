// ==========================================
// GLP 储罐计算系统 - 计算 API
// ==========================================
// 职责: 请求校验 → 解析可调字段 → 构造计算输入 → 调用编排器
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::api::request::CalculationRequest;
use crate::api::validator::{RequestValidator, ValidationMode};
use crate::config::plant_config::{LineSpec, PlantConfig};
use crate::domain::line::{LineConfiguration, LineSetup};
use crate::domain::result::CalculationResult;
use crate::domain::tank::Tank;
use crate::engine::orchestrator::{CalculationInput, LpgCalculator};

// ==========================================
// CalculatorApi - 计算 API
// ==========================================
pub struct CalculatorApi {
    config: PlantConfig,
    calculator: LpgCalculator,
    mode: ValidationMode,
}

impl CalculatorApi {
    /// 创建 CalculatorApi (Strict 校验模式)
    pub fn new(config: PlantConfig) -> ApiResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            calculator: LpgCalculator::new(),
            mode: ValidationMode::Strict,
        })
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config(&self) -> &PlantConfig {
        &self.config
    }

    /// 执行计算
    pub fn calculate(&self, request: &CalculationRequest) -> ApiResult<CalculationResult> {
        let input = self.build_input(request)?;
        Ok(self.calculator.compute(&input))
    }

    /// 将原始请求转换为已校验的计算输入
    pub fn build_input(&self, request: &CalculationRequest) -> ApiResult<CalculationInput> {
        let request = RequestValidator::new(&self.config).validate(request, self.mode)?;
        let config = &self.config;

        let tanks = config
            .tanks
            .iter()
            .zip(request.tank_fill_pct.iter())
            .map(|(spec, pct)| Tank::from_percent(spec.name.clone(), spec.capacity_m3, *pct))
            .collect();

        let reserve_threshold = request
            .reserve_min_pct
            .map(|pct| pct / 100.0)
            .unwrap_or(config.reserve_min_fraction);

        let lines = LineConfiguration::new(
            request.line_selection,
            Self::line_setup(
                &config.line_a,
                request.line_a_format.as_deref(),
                request.line_a_speed,
                request.line_a_efficiency_pct,
            )?,
            Self::line_setup(
                &config.line_b,
                request.line_b_format.as_deref(),
                request.line_b_speed,
                request.line_b_efficiency_pct,
            )?,
        );

        Ok(CalculationInput {
            tanks,
            density_kg_per_m3: config
                .density_kg_per_m3
                .resolve("density_kg_per_m3", request.density_kg_per_m3),
            reserve_threshold,
            safe_ceiling_fraction: config
                .safe_ceiling_fraction
                .resolve("safe_ceiling_fraction", request.safe_ceiling_pct.map(|p| p / 100.0)),
            lines,
            truck_capacity_kg: config
                .truck_capacity_kg
                .resolve("truck_capacity_kg", request.truck_capacity_kg),
            admission_policy: request.admission_policy.unwrap_or(config.admission_policy),
        })
    }

    fn line_setup(
        spec: &LineSpec,
        format_name: Option<&str>,
        speed: Option<f64>,
        efficiency_pct: Option<f64>,
    ) -> ApiResult<LineSetup> {
        let format = match format_name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => Some(spec.find_format(name).cloned().ok_or_else(|| {
                ApiError::UnknownFormat {
                    line: spec.line,
                    name: name.to_string(),
                }
            })?),
            None => None,
        };

        let throughput = spec.speed.resolve(&format!("{}_speed", spec.label), speed);
        let efficiency = spec
            .efficiency
            .resolve(&format!("{}_efficiency", spec.label), efficiency_pct.map(|p| p / 100.0));

        Ok(LineSetup::new(format, throughput).with_efficiency(efficiency))
    }
}
