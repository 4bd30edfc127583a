//! Presentation options for each chart kind.
//!
//! Field names follow the camelCase keys callers already send
//! (`xLabel`, `showLegend`, ...), so an options file written for the web
//! front end can be loaded directly.

use serde::{Deserialize, Serialize};

use super::descriptor::DisplayMode;

/// Default series color shared by the histogram and trend charts.
pub const DEFAULT_COLOR: &str = "#06b6d4";

/// Default histogram bin count.
pub const DEFAULT_BINS: u32 = 30;

/// Options for the distribution (histogram) chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DistributionOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Requested bin count, passed through to the plot surface.
    pub bins: u32,
    pub color: String,
}

impl Default for DistributionOptions {
    fn default() -> Self {
        Self {
            title: "Distribution".to_string(),
            x_label: "Valeur".to_string(),
            y_label: "Fréquence".to_string(),
            bins: DEFAULT_BINS,
            color: DEFAULT_COLOR.to_string(),
        }
    }
}

/// Options for the time-trend chart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrendOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color: String,
    pub mode: DisplayMode,
    pub show_legend: bool,
    pub series_name: String,
}

impl Default for TrendOptions {
    fn default() -> Self {
        Self {
            title: "Série Temporelle".to_string(),
            x_label: "Date".to_string(),
            y_label: "Valeur".to_string(),
            color: DEFAULT_COLOR.to_string(),
            mode: DisplayMode::LinesMarkers,
            show_legend: false,
            series_name: "Série".to_string(),
        }
    }
}

/// Options for the co-occurrence heatmap.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeatmapOptions {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub colorscale: String,
    /// Column labels used verbatim instead of the inferred ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_labels: Option<Vec<String>>,
    /// Row labels used verbatim instead of the inferred ones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_labels: Option<Vec<String>>,
}

impl Default for HeatmapOptions {
    fn default() -> Self {
        Self {
            title: "Matrice de Co-occurrence".to_string(),
            x_label: "Test 1".to_string(),
            y_label: "Test 2".to_string(),
            colorscale: "Blues".to_string(),
            x_labels: None,
            y_labels: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_options_keep_defaults() {
        let opts: TrendOptions =
            serde_json::from_str(r#"{"title": "Visits", "showLegend": true}"#).unwrap();
        assert_eq!(opts.title, "Visits");
        assert!(opts.show_legend);
        assert_eq!(opts.series_name, "Série");
        assert_eq!(opts.mode, DisplayMode::LinesMarkers);
    }

    #[test]
    fn heatmap_label_overrides_from_yaml() {
        let yaml = "xLabels: [a, b]\ncolorscale: Viridis\n";
        let opts: HeatmapOptions = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(opts.x_labels, Some(vec!["a".to_string(), "b".to_string()]));
        assert_eq!(opts.y_labels, None);
        assert_eq!(opts.colorscale, "Viridis");
        assert_eq!(opts.title, "Matrice de Co-occurrence");
    }

    #[test]
    fn distribution_defaults() {
        let opts = DistributionOptions::default();
        assert_eq!(opts.bins, 30);
        assert_eq!(opts.color, "#06b6d4");
    }
}
