use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::core::{Category, RawCategory, default_data_set, filter_data};
use crate::error::{ChartError, ChartResult};

/// Accessibility description used when the host supplies none.
pub const DEFAULT_FIGURE_DEFINITION: &str = "Chart";

/// Chart kind resolved once from `graphMode`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    Pie,
    Bar,
    ExtendedBar,
    Line,
}

impl ChartKind {
    pub const ALL: [Self; 4] = [Self::Pie, Self::Bar, Self::ExtendedBar, Self::Line];

    /// Maps a host `graphMode` to a kind; anything unrecognized is `Pie`.
    #[must_use]
    pub fn from_graph_mode(graph_mode: Option<&str>) -> Self {
        match graph_mode {
            Some("pieChart") => Self::Pie,
            Some("barChart") => Self::Bar,
            Some("extendedBarChart") => Self::ExtendedBar,
            Some("lineChart") => Self::Line,
            _ => Self::Pie,
        }
    }

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Pie => "Pie",
            Self::Bar => "Bar",
            Self::ExtendedBar => "ExtendedBar",
            Self::Line => "Line",
        }
    }

    #[must_use]
    pub const fn graph_mode(self) -> &'static str {
        match self {
            Self::Pie => "pieChart",
            Self::Bar => "barChart",
            Self::ExtendedBar => "extendedBarChart",
            Self::Line => "lineChart",
        }
    }

    /// Styling class placed on the chart wrapper, e.g. `chart-extendedbar`.
    #[must_use]
    pub fn css_class(self) -> String {
        format!("chart-{}", self.name().to_ascii_lowercase())
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Chart parameters exactly as the host supplied them.
///
/// Every field is an arbitrary JSON value; JSON `null` counts as absent.
/// Normalization into [`ChartConfiguration`] never fails.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawChartParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub graph_mode: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub list_of_types: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub figure_definition: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart_text: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis_text: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis_text: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<Value>,
}

impl RawChartParams {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads params from any JSON value; non-objects become empty params.
    #[must_use]
    pub fn from_value(value: Value) -> Self {
        if !value.is_object() {
            debug!("chart params are not an object; using empty params");
            return Self::default();
        }
        serde_json::from_value(value).unwrap_or_default()
    }

    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let value: Value = serde_json::from_str(input).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to parse chart params json: {e}"))
        })?;
        Ok(Self::from_value(value))
    }

    #[must_use]
    pub fn with_graph_mode(mut self, graph_mode: impl Into<Value>) -> Self {
        self.graph_mode = Some(graph_mode.into());
        self
    }

    /// Appends one entry to `listOfTypes`, creating the list if needed.
    #[must_use]
    pub fn with_category(mut self, category: RawCategory) -> Self {
        let entry = serde_json::to_value(category).unwrap_or(Value::Null);
        match &mut self.list_of_types {
            Some(Value::Array(entries)) => entries.push(entry),
            _ => self.list_of_types = Some(Value::Array(vec![entry])),
        }
        self
    }

    #[must_use]
    pub fn with_list_of_types(mut self, list_of_types: impl Into<Value>) -> Self {
        self.list_of_types = Some(list_of_types.into());
        self
    }

    #[must_use]
    pub fn with_figure_definition(mut self, figure_definition: impl Into<Value>) -> Self {
        self.figure_definition = Some(figure_definition.into());
        self
    }

    #[must_use]
    pub fn with_chart_text(mut self, chart_text: impl Into<Value>) -> Self {
        self.chart_text = Some(chart_text.into());
        self
    }

    #[must_use]
    pub fn with_axis_texts(
        mut self,
        x_axis_text: impl Into<Value>,
        y_axis_text: impl Into<Value>,
    ) -> Self {
        self.x_axis_text = Some(x_axis_text.into());
        self.y_axis_text = Some(y_axis_text.into());
        self
    }

    #[must_use]
    pub fn with_line_color(mut self, line_color: impl Into<Value>) -> Self {
        self.line_color = Some(line_color.into());
        self
    }
}

/// Normalized configuration every renderer receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartConfiguration {
    /// Host value, kept verbatim when it is a string.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub graph_mode: Option<String>,
    pub list_of_types: Vec<Category>,
    pub figure_definition: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x_axis_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_axis_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
}

impl ChartConfiguration {
    /// Sanitizes host params. Invalid categories are dropped, an empty data
    /// set is replaced by the example set, and a missing figure definition
    /// becomes [`DEFAULT_FIGURE_DEFINITION`].
    #[must_use]
    pub fn normalize(params: RawChartParams) -> Self {
        let raw_entries = params
            .list_of_types
            .as_ref()
            .and_then(RawCategory::list_from_value)
            .unwrap_or_default();
        let mut list_of_types = filter_data(&raw_entries);
        if list_of_types.is_empty() {
            debug!("no usable categories; substituting example data set");
            list_of_types = default_data_set();
        }

        let figure_definition = non_empty_string(params.figure_definition.as_ref())
            .unwrap_or_else(|| DEFAULT_FIGURE_DEFINITION.to_owned());

        Self {
            graph_mode: params
                .graph_mode
                .as_ref()
                .and_then(Value::as_str)
                .map(str::to_owned),
            list_of_types,
            figure_definition,
            chart_text: non_empty_string(params.chart_text.as_ref()),
            x_axis_text: non_empty_string(params.x_axis_text.as_ref()),
            y_axis_text: non_empty_string(params.y_axis_text.as_ref()),
            line_color: non_empty_string(params.line_color.as_ref()),
        }
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        ChartKind::from_graph_mode(self.graph_mode.as_deref())
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ChartError::InvalidConfig(format!("failed to serialize chart configuration: {e}"))
        })
    }
}

impl Default for ChartConfiguration {
    fn default() -> Self {
        Self::normalize(RawChartParams::default())
    }
}

fn non_empty_string(value: Option<&Value>) -> Option<String> {
    value
        .and_then(Value::as_str)
        .filter(|text| !text.is_empty())
        .map(str::to_owned)
}
