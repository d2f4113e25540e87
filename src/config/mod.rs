use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub title: String,
    /// Minutes represented by one character cell in the terminal preview.
    pub preview_cell_minutes: u32,
    pub chart: ChartConfig,
}

/// Presentation constants of the chart.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    /// Ticks on the hour axis; together they cover 24 hours.
    pub ticks: u32,
    pub tick_width: f32,
    pub bar_height: f32,
    /// Vertical space above and below an on-duty bar.
    pub padding: f32,
    pub hour_axis_height: f32,
    pub week_axis_width: f32,
    pub right_margin: f32,
    /// Gap between idle/full bars and the row borders.
    pub idle_inset: f32,
    pub idle_marker_radius: f32,
    /// A range ending this close to midnight counts as ending at midnight.
    pub day_end_tolerance_minutes: i64,
    pub week_labels: Vec<String>,
    pub colors: Palette,
}

/// Colours as "#RRGGBB" or "#RRGGBBAA".
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Palette {
    pub on_duty: String,
    pub idle: String,
    pub full: String,
    pub axis_line: String,
    pub axis_text: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            title: "Shift coverage".to_string(),
            preview_cell_minutes: 30,
            chart: ChartConfig::default(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ticks: 12,
            tick_width: 32.0,
            bar_height: 32.0,
            padding: 10.0,
            hour_axis_height: 32.0,
            week_axis_width: 60.0,
            right_margin: 40.0,
            idle_inset: 1.0,
            idle_marker_radius: 7.0,
            day_end_tolerance_minutes: 1,
            week_labels: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            colors: Palette::default(),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            on_duty: "#FCFAE3".to_string(),
            idle: "#FF302F80".to_string(),
            full: "#00EFF1".to_string(),
            axis_line: "#D7DADB".to_string(),
            axis_text: "#2E424D".to_string(),
        }
    }
}

impl ChartConfig {
    pub fn row_height(&self) -> f32 {
        self.bar_height + self.padding * 2.0
    }

    pub fn hours_per_tick(&self) -> f32 {
        24.0 / self.ticks as f32
    }

    pub fn plot_width(&self) -> f32 {
        self.ticks as f32 * self.tick_width
    }

    /// Rejects values the layout math cannot work with.
    pub fn validate(&self) -> AppResult<()> {
        if self.ticks == 0 || 24 % self.ticks != 0 {
            return Err(AppError::Config(format!(
                "ticks must divide 24 evenly, got {}",
                self.ticks
            )));
        }
        if self.tick_width <= 0.0 || self.bar_height <= 0.0 {
            return Err(AppError::Config(
                "tick_width and bar_height must be positive".into(),
            ));
        }
        if self.padding < 0.0 || self.idle_inset < 0.0 || self.idle_inset * 2.0 >= self.row_height()
        {
            return Err(AppError::Config(
                "padding/idle_inset out of range for the row height".into(),
            ));
        }
        let tick_minutes = (24 * 60 / self.ticks) as i64;
        if self.day_end_tolerance_minutes < 0 || self.day_end_tolerance_minutes >= tick_minutes {
            return Err(AppError::Config(format!(
                "day_end_tolerance_minutes must be in 0..{tick_minutes}, got {}",
                self.day_end_tolerance_minutes
            )));
        }
        if self.week_labels.len() != 7 {
            return Err(AppError::Config(format!(
                "week_labels needs 7 entries, got {}",
                self.week_labels.len()
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("shiftchart")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".shiftchart")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("shiftchart.conf")
    }

    /// Load configuration from `path` (or the default location).
    /// A missing file yields the defaults; missing keys fall back individually.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.chart.validate()?;
        Ok(cfg)
    }

    /// Write the default configuration to `path` (or the default location).
    /// An existing file is left untouched unless `overwrite` is set.
    pub fn init(path: Option<&Path>, overwrite: bool) -> AppResult<PathBuf> {
        let path = path
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_file);

        if path.exists() && !overwrite {
            return Err(AppError::Config(format!(
                "config file already exists: {}",
                path.display()
            )));
        }

        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(&Config::default())?;
        fs::write(&path, yaml)?;
        Ok(path)
    }

    /// Lists the keys (dotted for nested ones) absent from a YAML config text.
    pub fn missing_keys(content: &str) -> AppResult<Vec<String>> {
        let actual: Value = serde_yaml::from_str(content)?;
        let expected = serde_yaml::to_value(Config::default())?;

        let mut missing = Vec::new();
        collect_missing(&expected, &actual, "", &mut missing);
        Ok(missing)
    }
}

fn collect_missing(expected: &Value, actual: &Value, prefix: &str, out: &mut Vec<String>) {
    let Some(exp_map) = expected.as_mapping() else {
        return;
    };

    for (key, exp_val) in exp_map {
        let Some(name) = key.as_str() else { continue };
        let dotted = if prefix.is_empty() {
            name.to_string()
        } else {
            format!("{prefix}.{name}")
        };

        match actual.as_mapping().and_then(|m| m.get(key)) {
            None => out.push(dotted),
            Some(act_val) => collect_missing(exp_val, act_val, &dotted, out),
        }
    }
}
