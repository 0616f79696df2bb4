// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

#![allow(dead_code)]

use lpg_tank_calc::api::CalculationRequest;
use lpg_tank_calc::domain::{Format, LineConfiguration, LineSelection, LineSetup, Tank};
use lpg_tank_calc::engine::{AdmissionPolicy, CalculationInput};

pub const DENSITY: f64 = 0.54;
pub const TANK1_CAP_M3: f64 = 49170.0;
pub const TANK2_CAP_M3: f64 = 30694.0;

// ==========================================
// Tank 构建器
// ==========================================

pub struct TankBuilder {
    name: String,
    capacity_m3: f64,
    fill_pct: f64,
}

impl TankBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            capacity_m3: TANK1_CAP_M3,
            fill_pct: 85.0,
        }
    }

    pub fn capacity(mut self, capacity_m3: f64) -> Self {
        self.capacity_m3 = capacity_m3;
        self
    }

    pub fn fill_pct(mut self, pct: f64) -> Self {
        self.fill_pct = pct;
        self
    }

    pub fn build(self) -> Tank {
        Tank::from_percent(self.name, self.capacity_m3, self.fill_pct)
    }
}

/// 工厂两罐 (大罐 / 小罐)
pub fn plant_tanks(pct1: f64, pct2: f64) -> Vec<Tank> {
    vec![
        TankBuilder::new("Tanque Grande").capacity(TANK1_CAP_M3).fill_pct(pct1).build(),
        TankBuilder::new("Tanque Chico").capacity(TANK2_CAP_M3).fill_pct(pct2).build(),
    ]
}

pub fn line_a(format: Option<(&str, f64)>, speed: f64) -> LineSetup {
    LineSetup::new(format.map(|(name, g)| Format::new(name, g)), speed)
}

/// 计算输入: C3 Ambiental 195 件/min, C2 Jirafa 52 件/min
pub fn plant_input(
    pct1: f64,
    pct2: f64,
    selection: LineSelection,
    policy: AdmissionPolicy,
) -> CalculationInput {
    CalculationInput {
        tanks: plant_tanks(pct1, pct2),
        density_kg_per_m3: DENSITY,
        reserve_threshold: 0.05,
        safe_ceiling_fraction: 0.85,
        lines: LineConfiguration::new(
            selection,
            line_a(Some(("Ambiental", 87.6)), 195.0),
            LineSetup::new(Some(Format::new("Jirafa", 100.7)), 52.0),
        ),
        truck_capacity_kg: 24000.0,
        admission_policy: policy,
    }
}

// ==========================================
// CalculationRequest 构建器
// ==========================================

pub struct RequestBuilder {
    request: CalculationRequest,
}

impl RequestBuilder {
    pub fn new(pct1: f64, pct2: f64) -> Self {
        Self {
            request: CalculationRequest {
                tank_fill_pct: vec![pct1, pct2],
                reserve_min_pct: Some(5.0),
                line_selection: LineSelection::LineAOnly,
                line_a_format: Some("Ambiental".to_string()),
                line_b_format: Some("Jirafa".to_string()),
                ..CalculationRequest::default()
            },
        }
    }

    pub fn reserve_pct(mut self, pct: f64) -> Self {
        self.request.reserve_min_pct = Some(pct);
        self
    }

    pub fn lines(mut self, selection: LineSelection) -> Self {
        self.request.line_selection = selection;
        self
    }

    pub fn line_a_format(mut self, name: Option<&str>) -> Self {
        self.request.line_a_format = name.map(str::to_string);
        self
    }

    pub fn line_b_format(mut self, name: Option<&str>) -> Self {
        self.request.line_b_format = name.map(str::to_string);
        self
    }

    pub fn line_a_speed(mut self, speed: f64) -> Self {
        self.request.line_a_speed = Some(speed);
        self
    }

    pub fn line_b_speed(mut self, speed: f64) -> Self {
        self.request.line_b_speed = Some(speed);
        self
    }

    pub fn truck(mut self, kg: f64) -> Self {
        self.request.truck_capacity_kg = Some(kg);
        self
    }

    pub fn policy(mut self, policy: AdmissionPolicy) -> Self {
        self.request.admission_policy = Some(policy);
        self
    }

    pub fn build(self) -> CalculationRequest {
        self.request
    }
}
