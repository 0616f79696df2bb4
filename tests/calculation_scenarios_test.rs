// ==========================================
// LpgCalculator 场景测试
// ==========================================
// 测试目标: 工厂两罐的典型场景, 端到端验证计算结果
// 覆盖范围: 库存汇总、消耗速率、剩余时间、两种收货策略、幂等性
// ==========================================

mod helpers;

use helpers::test_data_builder::{plant_input, DENSITY, TANK1_CAP_M3, TANK2_CAP_M3};
use lpg_tank_calc::domain::{
    DeliveryDistribution, LineSelection, RemainingTimeStatus, SafeCeilingOutcome,
    TruckAssessment, WaitEstimate,
};
use lpg_tank_calc::engine::{AdmissionPolicy, LpgCalculator};
use lpg_tank_calc::logging;

fn assert_close(actual: f64, expected: f64, tol: f64) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {} ± {}, got {}",
        expected,
        tol,
        actual
    );
}

// ==========================================
// 场景 1: 两罐 85%, 储备 5%
// ==========================================

#[test]
fn test_scenario_inventory_at_85_percent() {
    // 初始化日志系统
    logging::init_test();

    let calculator = LpgCalculator::new();
    let input = plant_input(85.0, 85.0, LineSelection::LineAOnly, AdmissionPolicy::FillToFull);
    let result = calculator.compute(&input);

    let inv = &result.inventory;
    assert_close(inv.total_current_mass_kg, 36657.576, 1e-6);
    assert_close(inv.minimum_required_mass_kg, 2156.328, 1e-6);
    assert_close(inv.usable_mass_kg, 34501.248, 1e-6);
    assert_close(inv.physical_capacity_mass_kg, (TANK1_CAP_M3 + TANK2_CAP_M3) * DENSITY, 1e-9);

    assert_eq!(inv.tanks.len(), 2);
    assert_close(inv.tanks[0].current_mass_kg, TANK1_CAP_M3 * 0.85 * DENSITY, 1e-9);
    assert_close(inv.tanks[1].current_mass_kg, TANK2_CAP_M3 * 0.85 * DENSITY, 1e-9);
}

// ==========================================
// 场景 2: 单线 87.6 g/件 × 195 件/min
// ==========================================

#[test]
fn test_scenario_single_line_remaining_time() {
    let calculator = LpgCalculator::new();
    let input = plant_input(85.0, 85.0, LineSelection::LineAOnly, AdmissionPolicy::FillToFull);
    let result = calculator.compute(&input);

    assert_close(result.consumption.total_rate_kg_per_min, 17.082, 1e-9);
    assert_eq!(result.remaining.status, RemainingTimeStatus::Available);
    assert_close(
        result.remaining.minutes,
        result.inventory.usable_mass_kg / 17.082,
        1e-9,
    );
    // 34501.248 / 17.082 ≈ 2019.74 min = 33 h 39 min
    assert_eq!(result.remaining.hours, 33);
    assert_eq!(result.remaining.remainder_minutes, 39);
    assert_close(result.remaining.rounded_minutes, 2019.74, 1e-9);
}

#[test]
fn test_both_lines_rate_is_sum_of_single_lines() {
    let calculator = LpgCalculator::new();
    let at = |selection| plant_input(85.0, 85.0, selection, AdmissionPolicy::FillToFull);
    let a = calculator.compute(&at(LineSelection::LineAOnly));
    let b = calculator.compute(&at(LineSelection::LineBOnly));
    let both = calculator.compute(&at(LineSelection::Both));

    assert_close(b.consumption.total_rate_kg_per_min, 5.2364, 1e-9);
    assert_eq!(
        both.consumption.total_rate_kg_per_min,
        a.consumption.total_rate_kg_per_min + b.consumption.total_rate_kg_per_min
    );
    assert!(both.remaining.minutes < a.remaining.minutes);
}

// ==========================================
// 场景 3: 策略 A, 24000 kg 槽车
// ==========================================

#[test]
fn test_scenario_fill_to_full_admits_truck() {
    let calculator = LpgCalculator::new();
    let input = plant_input(85.0, 85.0, LineSelection::LineAOnly, AdmissionPolicy::FillToFull);
    let result = calculator.compute(&input);

    match &result.truck {
        TruckAssessment::FillToFull(outcome) => {
            assert_close(outcome.physical_capacity_mass_kg, 43126.56, 1e-6);
            assert_close(outcome.needed_to_full_kg, 6468.984, 1e-6);
            assert!(outcome.can_fill_fully);
            assert_eq!(outcome.distribution, DeliveryDistribution::FillsCompletely);
            assert!(outcome.tanks.iter().all(|t| t.percent == 100.0));
        }
        other => panic!("Expected FillToFull, got {:?}", other),
    }
    assert!(result.truck.is_admitted());
}

#[test]
fn test_fill_to_full_proportional_split_is_not_admitted() {
    let calculator = LpgCalculator::new();
    let input = plant_input(10.0, 60.0, LineSelection::LineAOnly, AdmissionPolicy::FillToFull);
    let result = calculator.compute(&input);

    match &result.truck {
        TruckAssessment::FillToFull(outcome) => {
            assert!(!outcome.can_fill_fully);
            assert_eq!(outcome.distribution, DeliveryDistribution::Proportional);
        }
        other => panic!("Expected FillToFull, got {:?}", other),
    }
    assert!(!result.truck.is_admitted());
}

// ==========================================
// 场景 4: 策略 B, 安全上限 85%
// ==========================================

#[test]
fn test_scenario_safe_ceiling_at_exact_boundary() {
    // 两罐恰为 85% 时当前总量等于安全上限
    // 可收空间为 0 → 空间不足 (非超限)
    let calculator = LpgCalculator::new();
    let input = plant_input(85.0, 85.0, LineSelection::LineAOnly, AdmissionPolicy::SafeCeiling);
    let result = calculator.compute(&input);

    match &result.truck {
        TruckAssessment::SafeCeiling(assessment) => {
            assert_close(assessment.safe_ceiling_mass_kg, 36657.576, 1e-6);
            assert_close(assessment.space_for_truck_kg, 0.0, 1e-6);
            assert!(!assessment.can_offload);
            match assessment.outcome {
                SafeCeilingOutcome::Shortfall { shortfall_kg, wait } => {
                    assert_close(shortfall_kg, 24000.0, 1e-6);
                    match wait {
                        WaitEstimate::Minutes(m) => assert_close(m, 24000.0 / 17.082, 1e-3),
                        WaitEstimate::Unbounded => panic!("consumption is active"),
                    }
                }
                ref other => panic!("Expected Shortfall, got {:?}", other),
            }
        }
        other => panic!("Expected SafeCeiling, got {:?}", other),
    }
}

#[test]
fn test_fill_level_at_configured_ceiling_is_never_overfill() {
    // 初始化日志系统
    logging::init_test();

    let calculator = LpgCalculator::new();
    for pct in 0..=100 {
        let level = pct as f64;
        let mut input =
            plant_input(level, level, LineSelection::LineAOnly, AdmissionPolicy::SafeCeiling);
        input.safe_ceiling_fraction = level / 100.0;
        let result = calculator.compute(&input);

        match &result.truck {
            TruckAssessment::SafeCeiling(assessment) => {
                assert_eq!(assessment.space_for_truck_kg, 0.0, "pct={}", pct);
                assert!(
                    matches!(assessment.outcome, SafeCeilingOutcome::Shortfall { .. }),
                    "pct={} outcome={:?}",
                    pct,
                    assessment.outcome
                );
            }
            other => panic!("Expected SafeCeiling, got {:?}", other),
        }
    }
}

#[test]
fn test_scenario_safe_ceiling_overfill() {
    let calculator = LpgCalculator::new();
    let input = plant_input(90.0, 88.0, LineSelection::LineAOnly, AdmissionPolicy::SafeCeiling);
    let result = calculator.compute(&input);

    match &result.truck {
        TruckAssessment::SafeCeiling(assessment) => {
            assert!(assessment.space_for_truck_kg < 0.0);
            match assessment.outcome {
                SafeCeilingOutcome::Overfill { excess_kg } => {
                    assert_close(excess_kg, -assessment.space_for_truck_kg, 1e-9);
                }
                ref other => panic!("Expected Overfill, got {:?}", other),
            }
        }
        other => panic!("Expected SafeCeiling, got {:?}", other),
    }
    assert!(!result.truck.is_admitted());
}

#[test]
fn test_scenario_safe_ceiling_admit() {
    let calculator = LpgCalculator::new();
    let input = plant_input(20.0, 20.0, LineSelection::LineAOnly, AdmissionPolicy::SafeCeiling);
    let result = calculator.compute(&input);

    match &result.truck {
        TruckAssessment::SafeCeiling(assessment) => match assessment.outcome {
            SafeCeilingOutcome::Admit { headroom_kg } => {
                assert_close(headroom_kg, assessment.space_for_truck_kg - 24000.0, 1e-9);
                assert!(headroom_kg >= 0.0);
            }
            ref other => panic!("Expected Admit, got {:?}", other),
        },
        other => panic!("Expected SafeCeiling, got {:?}", other),
    }
    assert!(result.truck.is_admitted());
}

// ==========================================
// 零值状态区分
// ==========================================

#[test]
fn test_no_usable_inventory_vs_no_consumption() {
    let calculator = LpgCalculator::new();

    let empty = calculator.compute(&plant_input(
        3.0,
        4.0,
        LineSelection::LineAOnly,
        AdmissionPolicy::FillToFull,
    ));
    assert_eq!(empty.inventory.usable_mass_kg, 0.0);
    assert_eq!(empty.remaining.status, RemainingTimeStatus::NoUsableInventory);
    assert_eq!(empty.alerts.len(), 2);

    let mut idle = plant_input(60.0, 60.0, LineSelection::LineAOnly, AdmissionPolicy::FillToFull);
    idle.lines.line_a.format = None;
    let idle = calculator.compute(&idle);
    assert!(idle.inventory.usable_mass_kg > 0.0);
    assert_eq!(idle.remaining.status, RemainingTimeStatus::NoConsumptionConfigured);
    assert_eq!(idle.remaining.minutes, empty.remaining.minutes);
}

#[test]
fn test_safe_ceiling_shortfall_without_consumption_is_unbounded() {
    let calculator = LpgCalculator::new();
    let mut input = plant_input(80.0, 80.0, LineSelection::LineAOnly, AdmissionPolicy::SafeCeiling);
    input.lines.line_a.format = None;
    let result = calculator.compute(&input);

    match &result.truck {
        TruckAssessment::SafeCeiling(assessment) => match assessment.outcome {
            SafeCeilingOutcome::Shortfall { wait, .. } => assert_eq!(wait, WaitEstimate::Unbounded),
            ref other => panic!("Expected Shortfall, got {:?}", other),
        },
        other => panic!("Expected SafeCeiling, got {:?}", other),
    }
}

// ==========================================
// 幂等性
// ==========================================

#[test]
fn test_compute_is_idempotent() {
    let calculator = LpgCalculator::new();
    for policy in [AdmissionPolicy::FillToFull, AdmissionPolicy::SafeCeiling] {
        let input = plant_input(47.0, 63.0, LineSelection::Both, policy);
        let first = calculator.compute(&input);
        let second = calculator.compute(&input);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}
