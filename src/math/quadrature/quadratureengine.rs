use crate::math::quadrature::quadraturerule::QuadratureRule;

// ─────────────────────────────────────────────────────────────────────────────
// compute_area - 等寬切割 + 逐段累加
// ─────────────────────────────────────────────────────────────────────────────
//
// 將 [left, right] 切成 count 段，寬度 w = (right - left) / count：
//
//   area = Σ rule(x_i, x_{i+1}),   x_0 = left,  x_{i+1} = x_i + w
//
// 注意：
//   - 邊界以累加方式產生（上一段的右界即下一段的左界），
//     不以 left + i·w 重新計算，以保留相同的浮點誤差累積。
//   - left == right 時每段寬度為 0，結果恆為 0。

/// 以 `rule` 估計 sin(x) 在 [left, right] 上的定積分。
///
/// 前置條件：`count >= 1` 且 `left <= right`。
pub fn compute_area(left: f64, right: f64, count: usize, rule: QuadratureRule) -> f64 {
    debug_assert!(count > 0, "subdivision count must be positive");

    let width = (right - left) / count as f64;
    let mut current_left = left;
    let mut area = 0.0;
    for _ in 0..count {
        let current_right = current_left + width;
        area += rule.contribution(current_left, current_right);
        current_left = current_right;
    }
    area
}
