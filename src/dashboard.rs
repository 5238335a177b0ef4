/// A dashboard card: current value against a target.
#[derive(Debug, Clone, PartialEq)]
pub struct QuickStat {
    pub title: &'static str,
    pub value: &'static str,
    pub target: &'static str,
    /// Percent towards the target, 0..=100.
    pub progress: f64,
}

/// Placeholder progress cards until real tracking exists.
pub fn quick_stats() -> Vec<QuickStat> {
    vec![
        QuickStat {
            title: "Daily calories",
            value: "1,850",
            target: "2,000",
            progress: 92.5,
        },
        QuickStat {
            title: "Hydration",
            value: "6",
            target: "8 glasses",
            progress: 75.0,
        },
        QuickStat {
            title: "Weight goal",
            value: "72kg",
            target: "70kg",
            progress: 60.0,
        },
        QuickStat {
            title: "Completed plans",
            value: "12",
            target: "15 this month",
            progress: 80.0,
        },
    ]
}

/// Text progress bar, e.g. `[#######---]`.
pub fn progress_bar(progress: f64, width: usize) -> String {
    let filled = ((progress.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
