use std::fmt;

/// 單一子區間 [l, r] 上 sin(x) 的求積公式。
///
/// | 規則       | 貢獻                                          |
/// |------------|-----------------------------------------------|
/// | `Midpoint` | sin((l+r)/2)·(r−l)                            |
/// | `Simpson`  | (sin(l) + 4·sin((l+r)/2) + sin(r))·(r−l) / 6  |
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadratureRule {
    Midpoint,
    Simpson
}

impl QuadratureRule {
    pub const ALL: [QuadratureRule; 2] = [QuadratureRule::Midpoint, QuadratureRule::Simpson];

    pub fn contribution(&self, left: f64, right: f64) -> f64 {
        match self {
            QuadratureRule::Midpoint => ((left + right) / 2.0).sin() * (right - left),
            QuadratureRule::Simpson => {
                (left.sin() + 4.0 * ((left + right) / 2.0).sin() + right.sin()) * (right - left) / 6.0
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            QuadratureRule::Midpoint => "midpoint",
            QuadratureRule::Simpson => "simpson"
        }
    }
}

impl fmt::Display for QuadratureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
