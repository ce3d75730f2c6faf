use serde::Serialize;

/// Wall-clock duration of a single pipeline stage.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub name: &'static str,
    pub ms: f64,
}

/// Per-stage timings plus the end-to-end total.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub stages: Vec<StageTiming>,
    pub total_ms: f64,
}

impl TimingBreakdown {
    pub fn record(&mut self, name: &'static str, ms: f64) {
        self.stages.push(StageTiming { name, ms });
    }
}
