//! Common types for metrics definitions.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricType {
    Counter,
    Gauge,
    Histogram,
}

impl MetricType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            MetricType::Counter => "Counter",
            MetricType::Gauge => "Gauge",
            MetricType::Histogram => "Histogram",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct MetricDef {
    pub name: &'static str,
    pub metric_type: MetricType,
    pub description: &'static str,
}

#[macro_export]
macro_rules! counter {
    ($def:expr) => {
        metrics::counter!($def.name)
    };
}

#[macro_export]
macro_rules! histogram {
    ($def:expr) => {
        metrics::histogram!($def.name)
    };
}

pub const DISPATCHES: MetricDef = MetricDef {
    name: "webhook.dispatches",
    metric_type: MetricType::Counter,
    description: "Outbound webhook POST attempts",
};

pub const DISPATCH_FAILURES: MetricDef = MetricDef {
    name: "webhook.dispatch_failures",
    metric_type: MetricType::Counter,
    description: "Dispatches that failed at the transport level",
};

pub const DISPATCH_DURATION: MetricDef = MetricDef {
    name: "webhook.dispatch.duration",
    metric_type: MetricType::Histogram,
    description: "Wall-clock duration of one dispatch in seconds",
};

pub const ALL_METRICS: &[MetricDef] = &[DISPATCHES, DISPATCH_FAILURES, DISPATCH_DURATION];
