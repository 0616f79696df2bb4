// ==========================================
// GLP 储罐计算系统 - 请求校验器
// ==========================================
// 职责: 计算前的输入校验, 引擎本身不做输入清洗
// 校验项: 储罐数量、充装率、储备下限、安全上限、密度、槽车载量、产速、效率
// ==========================================

use serde::{Deserialize, Serialize};

use crate::api::error::{ApiError, ApiResult, ValidationViolation};
use crate::api::request::CalculationRequest;
use crate::config::plant_config::{LineSpec, PlantConfig, DENSITY_MAX, DENSITY_MIN};

// ==========================================
// ValidationMode - 校验模式
// ==========================================

/// 校验模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationMode {
    /// 严格模式：任何违规都返回错误
    Strict,
    /// 自动修复模式：越界数值截断到允许范围 (非有限值、非正效率仍报错)
    AutoFix,
}

impl Default for ValidationMode {
    fn default() -> Self {
        ValidationMode::Strict
    }
}

// ==========================================
// RequestValidator - 请求校验器
// ==========================================
pub struct RequestValidator<'a> {
    config: &'a PlantConfig,
}

impl<'a> RequestValidator<'a> {
    pub fn new(config: &'a PlantConfig) -> Self {
        Self { config }
    }

    /// 校验请求
    ///
    /// # 返回
    /// - Ok(CalculationRequest): 校验通过 (AutoFix 模式下为修正后的请求)
    /// - Err(ApiError::TankCountMismatch): 储罐数量与配置不一致
    /// - Err(ApiError::RequestValidation): 存在违规 (Strict) 或存在不可修正的违规 (AutoFix)
    pub fn validate(
        &self,
        request: &CalculationRequest,
        mode: ValidationMode,
    ) -> ApiResult<CalculationRequest> {
        if request.tank_fill_pct.len() != self.config.tanks.len() {
            return Err(ApiError::TankCountMismatch {
                expected: self.config.tanks.len(),
                actual: request.tank_fill_pct.len(),
            });
        }

        let mut fixed = request.clone();
        let mut violations = Vec::new();

        // 1. 充装率
        for (i, pct) in fixed.tank_fill_pct.iter_mut().enumerate() {
            let field = format!("tank_fill_pct[{}]", i);
            *pct = check_range(&field, "FILL_PCT_OUT_OF_RANGE", *pct, 0.0, 100.0, &mut violations);
        }

        // 2. 储备下限
        if let Some(pct) = fixed.reserve_min_pct {
            fixed.reserve_min_pct = Some(check_range(
                "reserve_min_pct",
                "RESERVE_PCT_OUT_OF_RANGE",
                pct,
                0.0,
                100.0,
                &mut violations,
            ));
        }

        // 3. 可调字段 (固定字段的传入值会被忽略, 不做校验)
        if let (Some(pct), false) = (
            fixed.safe_ceiling_pct,
            self.config.safe_ceiling_fraction.is_fixed(),
        ) {
            fixed.safe_ceiling_pct = Some(check_range(
                "safe_ceiling_pct",
                "SAFE_CEILING_PCT_OUT_OF_RANGE",
                pct,
                0.0,
                100.0,
                &mut violations,
            ));
        }
        if let (Some(density), false) = (
            fixed.density_kg_per_m3,
            self.config.density_kg_per_m3.is_fixed(),
        ) {
            fixed.density_kg_per_m3 = Some(check_range(
                "density_kg_per_m3",
                "DENSITY_OUT_OF_RANGE",
                density,
                DENSITY_MIN,
                DENSITY_MAX,
                &mut violations,
            ));
        }
        if let (Some(truck), false) = (
            fixed.truck_capacity_kg,
            self.config.truck_capacity_kg.is_fixed(),
        ) {
            fixed.truck_capacity_kg = Some(check_range(
                "truck_capacity_kg",
                "TRUCK_CAPACITY_NEGATIVE",
                truck,
                0.0,
                f64::INFINITY,
                &mut violations,
            ));
        }

        // 4. 产速与效率
        fixed.line_a_speed = check_speed(
            "line_a_speed",
            &self.config.line_a,
            fixed.line_a_speed,
            &mut violations,
        );
        fixed.line_b_speed = check_speed(
            "line_b_speed",
            &self.config.line_b,
            fixed.line_b_speed,
            &mut violations,
        );
        fixed.line_a_efficiency_pct = check_efficiency(
            "line_a_efficiency_pct",
            &self.config.line_a,
            fixed.line_a_efficiency_pct,
            &mut violations,
        );
        fixed.line_b_efficiency_pct = check_efficiency(
            "line_b_efficiency_pct",
            &self.config.line_b,
            fixed.line_b_efficiency_pct,
            &mut violations,
        );

        if violations.is_empty() {
            return Ok(fixed);
        }

        // 根据模式决定是否返回错误
        let unfixable = violations.iter().filter(|v| !v.fixable).count();
        match mode {
            ValidationMode::Strict => Err(ApiError::RequestValidation {
                reason: format!("{}项输入越界", violations.len()),
                violations,
            }),
            ValidationMode::AutoFix if unfixable > 0 => Err(ApiError::RequestValidation {
                reason: format!("{}项输入无法自动修正", unfixable),
                violations,
            }),
            ValidationMode::AutoFix => {
                for v in &violations {
                    tracing::warn!(
                        field = %v.field,
                        violation_type = %v.violation_type,
                        value = ?v.value,
                        "AutoFix模式: 输入已截断到允许范围"
                    );
                }
                Ok(fixed)
            }
        }
    }
}

// ==========================================
// 辅助函数
// ==========================================

/// 范围检查, 越界时记录违规并返回截断值 (非有限值原样返回)
fn check_range(
    field: &str,
    violation_type: &str,
    value: f64,
    min: f64,
    max: f64,
    violations: &mut Vec<ValidationViolation>,
) -> f64 {
    if value.is_finite() && (min..=max).contains(&value) {
        return value;
    }

    let fixable = value.is_finite();
    violations.push(ValidationViolation {
        violation_type: violation_type.to_string(),
        field: field.to_string(),
        reason: format!("{}={} 超出范围 [{}, {}]", field, value, min, max),
        value: Some(value),
        fixable,
    });

    if fixable {
        value.clamp(min, max)
    } else {
        value
    }
}

fn check_speed(
    field: &str,
    spec: &LineSpec,
    speed: Option<f64>,
    violations: &mut Vec<ValidationViolation>,
) -> Option<f64> {
    match speed {
        Some(value) if !spec.speed.is_fixed() => Some(check_range(
            field,
            "SPEED_OUT_OF_RANGE",
            value,
            spec.speed_min,
            spec.speed_max,
            violations,
        )),
        other => other,
    }
}

/// 效率百分比 (0, 100]; 非正值不可修正, 超过 100 截断为 100
fn check_efficiency(
    field: &str,
    spec: &LineSpec,
    efficiency_pct: Option<f64>,
    violations: &mut Vec<ValidationViolation>,
) -> Option<f64> {
    let value = match efficiency_pct {
        Some(value) if !spec.efficiency.is_fixed() => value,
        other => return other,
    };

    if value > 0.0 && value <= 100.0 {
        return Some(value);
    }

    let fixable = value.is_finite() && value > 100.0;
    violations.push(ValidationViolation {
        violation_type: "EFFICIENCY_OUT_OF_RANGE".to_string(),
        field: field.to_string(),
        reason: format!("{}={} 超出范围 (0, 100]", field, value),
        value: Some(value),
        fixable,
    });
    Some(if fixable { 100.0 } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::plant_config::Tunable;

    fn request(config: &PlantConfig) -> CalculationRequest {
        CalculationRequest::default_for(config)
    }

    #[test]
    fn test_valid_request_passes() {
        let config = PlantConfig::default();
        let validator = RequestValidator::new(&config);
        let req = request(&config);
        let validated = validator.validate(&req, ValidationMode::Strict).unwrap();
        assert_eq!(validated, req);
    }

    #[test]
    fn test_strict_rejects_fill_out_of_range() {
        let config = PlantConfig::default();
        let validator = RequestValidator::new(&config);
        let mut req = request(&config);
        req.tank_fill_pct[1] = 120.0;

        match validator.validate(&req, ValidationMode::Strict) {
            Err(ApiError::RequestValidation { violations, .. }) => {
                assert_eq!(violations.len(), 1);
                assert_eq!(violations[0].violation_type, "FILL_PCT_OUT_OF_RANGE");
                assert_eq!(violations[0].field, "tank_fill_pct[1]");
            }
            other => panic!("Expected RequestValidation, got {:?}", other),
        }
    }

    #[test]
    fn test_autofix_clamps() {
        let config = PlantConfig::default();
        let validator = RequestValidator::new(&config);
        let mut req = request(&config);
        req.tank_fill_pct = vec![-3.0, 104.0];
        req.reserve_min_pct = Some(150.0);
        req.line_a_speed = Some(9000.0);

        let fixed = validator.validate(&req, ValidationMode::AutoFix).unwrap();
        assert_eq!(fixed.tank_fill_pct, vec![0.0, 100.0]);
        assert_eq!(fixed.reserve_min_pct, Some(100.0));
        assert_eq!(fixed.line_a_speed, Some(5000.0));
    }

    #[test]
    fn test_autofix_rejects_non_finite() {
        let config = PlantConfig::default();
        let validator = RequestValidator::new(&config);
        let mut req = request(&config);
        req.tank_fill_pct[0] = f64::NAN;
        assert!(matches!(
            validator.validate(&req, ValidationMode::AutoFix),
            Err(ApiError::RequestValidation { .. })
        ));
    }

    #[test]
    fn test_tank_count_mismatch() {
        let config = PlantConfig::default();
        let validator = RequestValidator::new(&config);
        let mut req = request(&config);
        req.tank_fill_pct.push(50.0);
        assert!(matches!(
            validator.validate(&req, ValidationMode::AutoFix),
            Err(ApiError::TankCountMismatch { expected: 2, actual: 3 })
        ));
    }

    #[test]
    fn test_fixed_fields_not_validated() {
        let config = PlantConfig::default();
        let validator = RequestValidator::new(&config);
        let mut req = request(&config);
        // LineB 产速与密度为固定字段, 传入值会被忽略
        req.line_b_speed = Some(-1.0);
        req.density_kg_per_m3 = Some(-5.0);
        assert!(validator.validate(&req, ValidationMode::Strict).is_ok());
    }

    #[test]
    fn test_efficiency_rules() {
        let mut config = PlantConfig::default();
        config.line_a.efficiency = Tunable::caller_supplied(1.0);
        let validator = RequestValidator::new(&config);

        let mut req = request(&config);
        req.line_a_efficiency_pct = Some(0.0);
        assert!(validator.validate(&req, ValidationMode::AutoFix).is_err());

        req.line_a_efficiency_pct = Some(130.0);
        let fixed = validator.validate(&req, ValidationMode::AutoFix).unwrap();
        assert_eq!(fixed.line_a_efficiency_pct, Some(100.0));
    }
}
