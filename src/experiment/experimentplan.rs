/// 依序執行的切割數清單，每個元素皆為正整數。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperimentPlan {
    counts: &'static [usize]
}

impl ExperimentPlan {
    pub const DEFAULT: ExperimentPlan = ExperimentPlan::new(&[6, 10, 20, 100, 500, 1000]);

    /// 編譯期建構；零切割數會在常數求值時失敗。
    pub const fn new(counts: &'static [usize]) -> ExperimentPlan {
        let mut i = 0;
        while i < counts.len() {
            assert!(counts[i] > 0, "subdivision counts must be positive");
            i += 1;
        }
        ExperimentPlan { counts }
    }

    pub fn counts(&self) -> &'static [usize] {
        self.counts
    }
}

impl Default for ExperimentPlan {
    fn default() -> Self {
        ExperimentPlan::DEFAULT
    }
}
