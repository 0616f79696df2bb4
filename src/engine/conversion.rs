// ==========================================
// GLP 储罐计算系统 - 体积/质量换算
// ==========================================
// 同一次计算中所有储罐使用同一个密度系数
// ==========================================

/// 格式消耗单位 (g) 到质量单位 (kg) 的换算系数, 全系统仅此一处
pub const GRAMS_PER_KG: f64 = 1000.0;

/// 体积 (m³) → 质量 (kg)
///
/// 不做边界检查; 密度为 0 时任意体积均得到 0 质量
pub fn to_mass(volume_m3: f64, density_kg_per_m3: f64) -> f64 {
    volume_m3 * density_kg_per_m3
}

/// 质量 (kg) → 体积 (m³)
///
/// 密度恰为 0 时返回 0, 不向调用方传播除零
pub fn to_volume(mass_kg: f64, density_kg_per_m3: f64) -> f64 {
    if density_kg_per_m3 == 0.0 {
        return 0.0;
    }
    mass_kg / density_kg_per_m3
}
