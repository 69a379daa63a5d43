use serde::{Deserialize, Serialize};

/// Kind of an explore control sitting next to the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ControlKind {
    /// Datasource picker
    Datasource,
    /// Drop target holding columns; filter controls hide their columns
    /// from the panel
    ColumnSelect { is_filter: bool },
    /// Drop target holding saved or ad-hoc metrics
    MetricSelect,
}

/// Aggregate applied to a column turned into an ad-hoc metric
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AggregateFunction {
    Sum,
    CountDistinct,
}

impl AggregateFunction {
    /// Get SQL function name
    pub fn to_sql(&self) -> &'static str {
        match self {
            AggregateFunction::Sum => "SUM",
            AggregateFunction::CountDistinct => "COUNT_DISTINCT",
        }
    }
}

/// Metric defined inside a control from a column and an aggregate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdhocMetric {
    /// Random identifier, unique per control entry
    pub option_name: String,
    pub column_name: String,
    pub aggregate: AggregateFunction,
}

impl AdhocMetric {
    pub fn new(column_name: impl Into<String>, aggregate: AggregateFunction) -> Self {
        Self {
            option_name: format!("metric_{}", uuid::Uuid::new_v4().simple()),
            column_name: column_name.into(),
            aggregate,
        }
    }

    /// Display label, e.g. "SUM(num_boys)"
    pub fn label(&self) -> String {
        format!("{}({})", self.aggregate.to_sql(), self.column_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum MetricValue {
    /// Reference to a saved metric by name
    Saved(String),
    Adhoc(AdhocMetric),
}

impl MetricValue {
    pub fn label(&self) -> String {
        match self {
            MetricValue::Saved(name) => name.clone(),
            MetricValue::Adhoc(adhoc) => adhoc.label(),
        }
    }
}

/// Current value of a control
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum ControlValue {
    #[default]
    Empty,
    Columns(Vec<String>),
    Metrics(Vec<MetricValue>),
    /// Datasource uid
    Datasource(String),
}

impl ControlValue {
    /// Column names held by a column control
    pub fn column_names(&self) -> &[String] {
        match self {
            ControlValue::Columns(names) => names,
            _ => &[],
        }
    }

    /// Labels of the entries, in order
    pub fn labels(&self) -> Vec<String> {
        match self {
            ControlValue::Empty => Vec::new(),
            ControlValue::Columns(names) => names.clone(),
            ControlValue::Metrics(metrics) => metrics.iter().map(|m| m.label()).collect(),
            ControlValue::Datasource(uid) => vec![uid.clone()],
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ControlValue::Empty => 0,
            ControlValue::Columns(names) => names.len(),
            ControlValue::Metrics(metrics) => metrics.len(),
            ControlValue::Datasource(_) => 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Value with the entry at `index` removed. Out-of-range indexes leave
    /// the value unchanged; removing the last entry yields `Empty`.
    pub fn without(&self, index: usize) -> ControlValue {
        let value = match self {
            ControlValue::Columns(names) if index < names.len() => {
                let mut names = names.clone();
                names.remove(index);
                ControlValue::Columns(names)
            }
            ControlValue::Metrics(metrics) if index < metrics.len() => {
                let mut metrics = metrics.clone();
                metrics.remove(index);
                ControlValue::Metrics(metrics)
            }
            ControlValue::Datasource(_) if index == 0 => ControlValue::Empty,
            other => other.clone(),
        };
        if value.is_empty() {
            ControlValue::Empty
        } else {
            value
        }
    }
}

/// A single control with its current value
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlState {
    /// Control name (e.g., "adhoc_filters")
    pub name: String,
    /// Label shown above the control
    pub label: String,
    pub kind: ControlKind,
    #[serde(default)]
    pub value: ControlValue,
}

impl ControlState {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: ControlKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
            value: ControlValue::Empty,
        }
    }

    pub fn with_value(mut self, value: ControlValue) -> Self {
        self.value = value;
        self
    }
}

/// Read-only snapshot of the controls on the page.
/// Updates produce a new snapshot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlsSnapshot {
    controls: Vec<ControlState>,
}

impl ControlsSnapshot {
    pub fn new(controls: Vec<ControlState>) -> Self {
        Self { controls }
    }

    pub fn get(&self, name: &str) -> Option<&ControlState> {
        self.controls.iter().find(|c| c.name == name)
    }

    pub fn value_of(&self, name: &str) -> ControlValue {
        self.get(name).map(|c| c.value.clone()).unwrap_or_default()
    }

    /// Label of the named control, the name itself for unknown controls
    pub fn label_of<'a>(&'a self, name: &'a str) -> &'a str {
        self.get(name).map(|c| c.label.as_str()).unwrap_or(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ControlState> {
        self.controls.iter()
    }

    /// Snapshot with `name` set to `value`. Unknown names leave it unchanged.
    pub fn with_value(&self, name: &str, value: ControlValue) -> ControlsSnapshot {
        let controls = self
            .controls
            .iter()
            .map(|c| {
                if c.name == name {
                    c.clone().with_value(value.clone())
                } else {
                    c.clone()
                }
            })
            .collect();
        ControlsSnapshot { controls }
    }
}
