/// How much of the history the chart shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
pub enum ChartSpan {
    #[default]
    All,
    LastMinute,
    LastFiveMinutes,
    LastFifteenMinutes,
}

impl ChartSpan {
    pub const ALL: [ChartSpan; 4] = [
        ChartSpan::All,
        ChartSpan::LastMinute,
        ChartSpan::LastFiveMinutes,
        ChartSpan::LastFifteenMinutes,
    ];

    /// Width of the visible window in seconds, `None` for the whole history.
    pub fn seconds(self) -> Option<f64> {
        match self {
            ChartSpan::All => None,
            ChartSpan::LastMinute => Some(60.0),
            ChartSpan::LastFiveMinutes => Some(300.0),
            ChartSpan::LastFifteenMinutes => Some(900.0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ChartSpan::All => "Whole session",
            ChartSpan::LastMinute => "Last minute",
            ChartSpan::LastFiveMinutes => "Last 5 minutes",
            ChartSpan::LastFifteenMinutes => "Last 15 minutes",
        }
    }
}

/// Presentation of the meters and the chart. Persisted across runs.
#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct DisplayOptions {
    pub bar_width: f32,
    pub line_width: f32,
    pub chart_span: ChartSpan,
}

impl DisplayOptions {
    pub const BAR_WIDTH_RANGE: std::ops::RangeInclusive<f32> = 150.0..=800.0;
    pub const LINE_WIDTH_RANGE: std::ops::RangeInclusive<f32> = 0.5..=4.0;
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            bar_width: 400.0,
            line_width: 1.5,
            chart_span: ChartSpan::All,
        }
    }
}
