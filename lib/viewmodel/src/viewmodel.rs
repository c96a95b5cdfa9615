use crate::input::{parse_coordinate, parse_order, Field, FieldSnapshot};
use crate::messages;
use crate::status::{derive_status, Status};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error, info};
use vecdist_core::{distance, Error, LogSink, MemorySink, Metric, Point2, Result};

/// Configuration for a view-model session
#[derive(Debug, Clone)]
pub struct ViewModelConfig {
    /// Minkowski order used while the dim field is empty
    pub default_order: u32,
}

impl Default for ViewModelConfig {
    fn default() -> Self {
        Self { default_order: 1 }
    }
}

/// Everything a front end displays, in one serializable value
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ViewState {
    pub fields: FieldSnapshot,
    pub metric: Metric,
    pub result: String,
    pub status: Status,
    pub calculation_disabled: bool,
    pub log_len: usize,
}

/// State behind the distance calculator form
///
/// Field setters revalidate synchronously. Log lines are produced only by
/// [`calculate`](Self::calculate), [`on_focus_changed`](Self::on_focus_changed)
/// and [`on_metric_changed`](Self::on_metric_changed); each one is pushed to
/// the in-memory log and handed to the sink once.
pub struct DistanceViewModel {
    config: ViewModelConfig,
    fields: FieldSnapshot,
    metric: Metric,
    result: String,
    status: Status,
    log: Vec<String>,
    /// Inputs as of the last calculation or logged focus loss
    last_logged: FieldSnapshot,
    /// Inputs and metric the current `result` was computed for
    last_success: Option<(FieldSnapshot, Metric)>,
    sink: Arc<dyn LogSink>,
}

impl DistanceViewModel {
    pub fn new(sink: Option<Arc<dyn LogSink>>) -> Result<Self> {
        Self::with_config(sink, ViewModelConfig::default())
    }

    pub fn with_config(sink: Option<Arc<dyn LogSink>>, config: ViewModelConfig) -> Result<Self> {
        let sink = sink.ok_or(Error::MissingLogSink)?;
        if config.default_order == 0 {
            return Err(Error::InvalidConfig(
                "default_order must be at least 1".to_string(),
            ));
        }

        Ok(Self::from_parts(sink, config))
    }

    /// A view-model whose log lives only in memory
    pub fn in_memory() -> Self {
        Self::from_parts(Arc::new(MemorySink::new()), ViewModelConfig::default())
    }

    fn from_parts(sink: Arc<dyn LogSink>, config: ViewModelConfig) -> Self {
        Self {
            config,
            fields: FieldSnapshot::default(),
            metric: Metric::default(),
            result: String::new(),
            status: Status::Waiting,
            log: Vec::new(),
            last_logged: FieldSnapshot::default(),
            last_success: None,
            sink,
        }
    }

    /// Start a session whose log continues what the sink already holds
    pub fn resume(sink: Option<Arc<dyn LogSink>>, config: ViewModelConfig) -> Result<Self> {
        let mut vm = Self::with_config(sink, config)?;
        vm.log = vm.sink.read_all();
        debug!("Resumed session with {} log entries", vm.log.len());
        Ok(vm)
    }

    // Fields

    pub fn field(&self, field: Field) -> &str {
        self.fields.get(field)
    }

    pub fn set_field(&mut self, field: Field, text: impl Into<String>) {
        let text = text.into();
        let previous = self.fields.set(field, text);
        if previous != self.fields.get(field) {
            debug!("{} changed from {:?} to {:?}", field, previous, self.fields.get(field));
        }
        self.revalidate();
    }

    pub fn vec1_x(&self) -> &str {
        &self.fields.vec1_x
    }

    pub fn vec1_y(&self) -> &str {
        &self.fields.vec1_y
    }

    pub fn vec2_x(&self) -> &str {
        &self.fields.vec2_x
    }

    pub fn vec2_y(&self) -> &str {
        &self.fields.vec2_y
    }

    pub fn dim(&self) -> &str {
        &self.fields.dim
    }

    pub fn set_vec1_x(&mut self, text: impl Into<String>) {
        self.set_field(Field::Vec1X, text);
    }

    pub fn set_vec1_y(&mut self, text: impl Into<String>) {
        self.set_field(Field::Vec1Y, text);
    }

    pub fn set_vec2_x(&mut self, text: impl Into<String>) {
        self.set_field(Field::Vec2X, text);
    }

    pub fn set_vec2_y(&mut self, text: impl Into<String>) {
        self.set_field(Field::Vec2Y, text);
    }

    pub fn set_dim(&mut self, text: impl Into<String>) {
        self.set_field(Field::Dim, text);
    }

    pub fn fields(&self) -> &FieldSnapshot {
        &self.fields
    }

    // Metric

    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Select a metric; logging is left to [`on_metric_changed`](Self::on_metric_changed)
    pub fn set_metric(&mut self, metric: Metric) {
        self.metric = metric;
        self.revalidate();
    }

    pub fn on_metric_changed(&mut self, old: Metric, new: Metric) {
        if old != new {
            self.append_log(messages::metric_changed_message(new));
        }
    }

    // Derived state

    pub fn result(&self) -> &str {
        &self.result
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_calculation_disabled(&self) -> bool {
        !matches!(self.status, Status::Ready | Status::Success)
    }

    pub fn state(&self) -> ViewState {
        ViewState {
            fields: self.fields.clone(),
            metric: self.metric,
            result: self.result.clone(),
            status: self.status,
            calculation_disabled: self.is_calculation_disabled(),
            log_len: self.log.len(),
        }
    }

    fn revalidate(&mut self) {
        let derived = derive_status(&self.fields, self.metric);
        let still_current = self.status == Status::Success
            && matches!(&self.last_success, Some((fields, metric))
                if *fields == self.fields && *metric == self.metric);
        let status = if derived == Status::Ready && still_current {
            Status::Success
        } else {
            derived
        };

        // Only calculate() re-enters SUCCESS once it has been left
        if status != Status::Success {
            self.last_success = None;
        }
        if status != self.status {
            debug!("Status {} -> {}", self.status, status);
            self.status = status;
        }
    }

    // Events

    /// Compute the distance for the current inputs if they are complete and well-formed
    pub fn calculate(&mut self) {
        if self.is_calculation_disabled() {
            debug!("Calculate ignored while {}", self.status);
            return;
        }

        let Some((a, b, order)) = self.parsed_inputs() else {
            return;
        };

        match distance(self.metric, &a, &b, order) {
            Ok(value) => {
                self.result = messages::format_result(value);
                self.status = Status::Success;
                self.last_success = Some((self.fields.clone(), self.metric));
                self.last_logged = self.fields.clone();
                info!("{} distance = {}", self.metric, self.result);
                self.append_log(messages::calculate_message(&self.fields, self.metric, &self.result));
            }
            Err(e) => {
                error!("Metric engine rejected validated input: {}", e);
                if cfg!(debug_assertions) {
                    panic!("validated input rejected by metric engine: {e}");
                }
            }
        }
    }

    /// Log the inputs when focus leaves a field and they differ from the last logged ones
    pub fn on_focus_changed(&mut self, had_focus: bool, has_focus: bool) {
        if !had_focus || has_focus {
            return;
        }
        if self.fields == self.last_logged {
            debug!("Inputs unchanged since last log entry");
            return;
        }

        self.last_logged = self.fields.clone();
        self.append_log(messages::editing_finished_message(&self.fields));
    }

    fn parsed_inputs(&self) -> Option<(Point2, Point2, i64)> {
        let a = Point2::new(
            parse_coordinate(&self.fields.vec1_x)?,
            parse_coordinate(&self.fields.vec1_y)?,
        );
        let b = Point2::new(
            parse_coordinate(&self.fields.vec2_x)?,
            parse_coordinate(&self.fields.vec2_y)?,
        );
        let order = if self.metric.uses_order() && !self.fields.dim.is_empty() {
            parse_order(&self.fields.dim)?
        } else {
            self.config.default_order
        };
        Some((a, b, i64::from(order)))
    }

    // Log

    fn append_log(&mut self, line: String) {
        self.sink.append(&line);
        self.log.push(line);
    }

    pub fn log(&self) -> &[String] {
        &self.log
    }

    /// All entries, each followed by a newline
    pub fn logs(&self) -> String {
        self.log.iter().map(|line| format!("{}\n", line)).collect()
    }

    /// Entries as the sink currently holds them
    pub fn persisted_log(&self) -> Vec<String> {
        self.sink.read_all()
    }
}
