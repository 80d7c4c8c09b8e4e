use metrics::{register_counter, register_gauge, Counter, Gauge};

pub struct Metrics {
    replacements_total: Counter,
    marks_total: Counter,
    peek_empty_total: Counter,
    endpoints: Gauge,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            replacements_total: register_counter!("serverlist_replacements_total"),
            marks_total: register_counter!("serverlist_marks_total"),
            peek_empty_total: register_counter!("serverlist_peek_empty_total"),
            endpoints: register_gauge!("serverlist_endpoints"),
        }
    }

    pub fn record_replacement(&self, count: usize) {
        self.replacements_total.increment(1);
        self.endpoints.set(count as f64);
    }

    pub fn increment_marks(&self) {
        self.marks_total.increment(1);
    }

    pub fn increment_peek_empty(&self) {
        self.peek_empty_total.increment(1);
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
