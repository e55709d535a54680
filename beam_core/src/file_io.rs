//! # File I/O Module
//!
//! Handles session and curve files with safety features:
//! - **Atomic saves**: Write to .tmp, sync, rename to prevent corruption
//! - **Version validation**: Ensure schema compatibility on load
//!
//! ## File Formats
//!
//! Sessions are JSON documents holding one [`BeamConfiguration`]. Curve
//! exports hold the sampled points plus enough context to reproduce them,
//! as JSON or as a two-column CSV.
//!
//! ## Example
//!
//! ```rust,no_run
//! use beam_core::calculations::BeamConfiguration;
//! use beam_core::file_io::{load_session, save_session};
//! use std::path::Path;
//!
//! let path = Path::new("beam.json");
//! save_session(&BeamConfiguration::default(), path)?;
//!
//! let session = load_session(path)?;
//! println!("Saved at {}", session.saved_at);
//! # Ok::<(), beam_core::errors::CalcError>(())
//! ```

use std::fs::{self, File};
use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calculations::{BeamConfiguration, ResponseCurve};
use crate::equations::Quantity;
use crate::errors::{CalcError, CalcResult};
use crate::supports::Stability;

/// Schema version written into every session and export
pub const SCHEMA_VERSION: &str = "0.1.0";

/// A saved beam configuration.
///
/// ## JSON Example
///
/// ```json
/// {
///   "version": "0.1.0",
///   "saved_at": "2026-03-02T14:05:00Z",
///   "configuration": { "length": 12.0, "left_support": "Fixed", "right_support": "Free" }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFile {
    /// Schema version of the file
    pub version: String,
    /// When the file was written
    pub saved_at: DateTime<Utc>,
    /// The configuration; missing fields fall back to defaults
    pub configuration: BeamConfiguration,
}

impl SessionFile {
    /// Wrap a configuration, stamped with the current schema version and time
    pub fn new(configuration: BeamConfiguration) -> Self {
        SessionFile {
            version: SCHEMA_VERSION.to_string(),
            saved_at: Utc::now(),
            configuration,
        }
    }
}

/// A sampled curve with the inputs that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveExport {
    pub version: String,
    pub generated_at: DateTime<Utc>,
    pub configuration: BeamConfiguration,
    pub stability: Stability,
    pub quantity: Quantity,
    /// Plain-text formula the points were sampled from
    pub formula: String,
    /// (x, y) pairs; non-finite values are written as "NaN", "inf" or "-inf"
    #[serde(with = "sample_points")]
    pub points: Vec<(f64, f64)>,
}

/// JSON has no NaN or infinity. Degenerate inputs produce them as samples,
/// so they are carried as strings.
mod sample_points {
    use super::*;

    #[derive(Serialize, Deserialize)]
    #[serde(untagged)]
    enum JsonFloat {
        Number(f64),
        Special(String),
    }

    impl From<f64> for JsonFloat {
        fn from(value: f64) -> Self {
            if value.is_finite() {
                JsonFloat::Number(value)
            } else if value.is_nan() {
                JsonFloat::Special("NaN".to_string())
            } else if value > 0.0 {
                JsonFloat::Special("inf".to_string())
            } else {
                JsonFloat::Special("-inf".to_string())
            }
        }
    }

    impl JsonFloat {
        fn into_f64<E: serde::de::Error>(self) -> Result<f64, E> {
            match self {
                JsonFloat::Number(value) => Ok(value),
                JsonFloat::Special(text) => match text.as_str() {
                    "NaN" => Ok(f64::NAN),
                    "inf" => Ok(f64::INFINITY),
                    "-inf" => Ok(f64::NEG_INFINITY),
                    other => Err(E::custom(format!("invalid sample value '{}'", other))),
                },
            }
        }
    }

    pub fn serialize<S: Serializer>(points: &[(f64, f64)], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(
            points
                .iter()
                .map(|&(x, y)| (JsonFloat::from(x), JsonFloat::from(y))),
        )
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<(f64, f64)>, D::Error> {
        let raw: Vec<(JsonFloat, JsonFloat)> = Vec::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(x, y)| Ok((x.into_f64()?, y.into_f64()?)))
            .collect()
    }
}

/// Configuration values must be finite to survive a JSON round trip.
fn require_finite_configuration(configuration: &BeamConfiguration) -> CalcResult<()> {
    let fields = [
        ("length", configuration.length),
        ("load", configuration.load),
        ("youngs_modulus", configuration.youngs_modulus),
        ("moment_of_inertia", configuration.moment_of_inertia),
    ];
    for (field, value) in fields {
        if !value.is_finite() {
            return Err(CalcError::invalid_input(
                field,
                value.to_string(),
                "Value must be finite to be saved",
            ));
        }
    }
    Ok(())
}

impl CurveExport {
    pub fn new(configuration: &BeamConfiguration, curve: &ResponseCurve) -> Self {
        CurveExport {
            version: SCHEMA_VERSION.to_string(),
            generated_at: Utc::now(),
            configuration: *configuration,
            stability: configuration.stability(),
            quantity: curve.quantity,
            formula: configuration.formula().formula_plain.to_string(),
            points: curve.points.clone(),
        }
    }

    /// Render as CSV: an `x,y` header, then one row per sample
    pub fn to_csv(&self) -> String {
        let mut output = String::with_capacity(32 * (self.points.len() + 1));
        output.push_str("x,y\n");
        for (x, y) in &self.points {
            output.push_str(&format!("{},{}\n", x, y));
        }
        output
    }

    /// Render as pretty-printed JSON
    pub fn to_json(&self) -> CalcResult<String> {
        require_finite_configuration(&self.configuration)?;
        serde_json::to_string_pretty(self).map_err(|e| CalcError::SerializationError {
            reason: e.to_string(),
        })
    }
}

/// Output format for [`export_curve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    /// Guess the format from a file extension, defaulting to JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => ExportFormat::Csv,
            _ => ExportFormat::Json,
        }
    }
}

impl FromStr for ExportFormat {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "csv" => Ok(ExportFormat::Csv),
            other => Err(CalcError::invalid_input(
                "format",
                other,
                "Expected one of: json, csv",
            )),
        }
    }
}

/// Temp file next to `path`: `name.ext` becomes `name.ext.tmp`
fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Write `contents` to `path` with atomic write semantics.
///
/// 1. Write to a temporary file (.tmp)
/// 2. Sync to disk (fsync)
/// 3. Rename over the target (atomic on most filesystems)
fn write_atomic(path: &Path, contents: &str) -> CalcResult<()> {
    let tmp_path = tmp_path_for(path);

    let mut tmp_file = File::create(&tmp_path).map_err(|e| {
        CalcError::file_error("create temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.write_all(contents.as_bytes()).map_err(|e| {
        CalcError::file_error("write temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    tmp_file.sync_all().map_err(|e| {
        CalcError::file_error("sync temp file", tmp_path.display().to_string(), e.to_string())
    })?;

    fs::rename(&tmp_path, path).map_err(|e| {
        // Clean up temp file if rename fails
        let _ = fs::remove_file(&tmp_path);
        CalcError::file_error("rename to final", path.display().to_string(), e.to_string())
    })?;

    log::debug!("wrote {} bytes to {}", contents.len(), path.display());
    Ok(())
}

fn read_to_string(path: &Path) -> CalcResult<String> {
    let mut file = File::open(path)
        .map_err(|e| CalcError::file_error("open", path.display().to_string(), e.to_string()))?;

    let mut contents = String::new();
    file.read_to_string(&mut contents)
        .map_err(|e| CalcError::file_error("read", path.display().to_string(), e.to_string()))?;
    Ok(contents)
}

/// Save a configuration as a session file.
///
/// # Example
///
/// ```rust,no_run
/// use beam_core::calculations::BeamConfiguration;
/// use beam_core::file_io::save_session;
/// use std::path::Path;
///
/// save_session(&BeamConfiguration::default(), Path::new("beam.json"))?;
/// # Ok::<(), beam_core::errors::CalcError>(())
/// ```
pub fn save_session(configuration: &BeamConfiguration, path: &Path) -> CalcResult<()> {
    require_finite_configuration(configuration)?;
    let session = SessionFile::new(*configuration);
    let json = serde_json::to_string_pretty(&session).map_err(|e| CalcError::SerializationError {
        reason: e.to_string(),
    })?;
    write_atomic(path, &json)
}

/// Load a session file.
///
/// # Returns
///
/// * `Ok(SessionFile)` - Successfully loaded session
/// * `Err(CalcError::VersionMismatch)` - File version is incompatible
/// * `Err(CalcError::SerializationError)` - Invalid JSON
/// * `Err(CalcError::FileError)` - I/O error
pub fn load_session(path: &Path) -> CalcResult<SessionFile> {
    let contents = read_to_string(path)?;

    let session: SessionFile =
        serde_json::from_str(&contents).map_err(|e| CalcError::SerializationError {
            reason: format!("Invalid JSON in {}: {}", path.display(), e),
        })?;

    validate_version(&session.version)?;

    log::debug!(
        "loaded session {} (version {}, saved {})",
        path.display(),
        session.version,
        session.saved_at
    );
    Ok(session)
}

/// Write a sampled curve to `path` in the given format.
pub fn export_curve(export: &CurveExport, path: &Path, format: ExportFormat) -> CalcResult<()> {
    let contents = match format {
        ExportFormat::Json => export.to_json()?,
        ExportFormat::Csv => export.to_csv(),
    };
    write_atomic(path, &contents)
}

/// Validate that a file version is compatible with the current schema.
fn validate_version(file_version: &str) -> CalcResult<()> {
    let mismatch = || CalcError::VersionMismatch {
        file_version: file_version.to_string(),
        expected_version: SCHEMA_VERSION.to_string(),
    };

    let file_parts: Vec<u32> = file_version
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();
    let current_parts: Vec<u32> = SCHEMA_VERSION
        .split('.')
        .filter_map(|p| p.parse().ok())
        .collect();

    if file_parts.is_empty() || current_parts.is_empty() {
        return Err(mismatch());
    }

    // Major version must match
    if file_parts[0] != current_parts[0] {
        return Err(mismatch());
    }

    // For 0.x versions a newer minor may carry breaking changes
    if current_parts[0] == 0
        && file_parts.len() > 1
        && current_parts.len() > 1
        && file_parts[1] > current_parts[1]
    {
        return Err(mismatch());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculations::evaluate;
    use crate::supports::Support;
    use std::env::temp_dir;

    fn temp_path(name: &str, ext: &str) -> PathBuf {
        temp_dir().join(format!("beamview_test_{}_{}.{}", name, std::process::id(), ext))
    }

    #[test]
    fn test_tmp_path_generation() {
        let tmp = tmp_path_for(Path::new("/path/to/beam.json"));
        assert_eq!(tmp, Path::new("/path/to/beam.json.tmp"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let path = temp_path("roundtrip", "json");
        let config = BeamConfiguration {
            length: 144.0,
            load: 0.25,
            ..BeamConfiguration::default()
        }
        .with_supports(Support::Fixed, Support::Pinned);

        save_session(&config, &path).unwrap();
        let loaded = load_session(&path).unwrap();

        assert_eq!(loaded.version, SCHEMA_VERSION);
        assert_eq!(loaded.configuration, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_session_roundtrip_is_bit_exact() {
        let path = temp_path("bit_exact", "json");
        let config = BeamConfiguration {
            length: 0.1 + 0.2,
            load: 1.0 / 3.0,
            youngs_modulus: 29_000.0 / 7.0,
            moment_of_inertia: 64.0 / 3.0,
            ..BeamConfiguration::default()
        };

        save_session(&config, &path).unwrap();
        let loaded = load_session(&path).unwrap().configuration;
        assert_eq!(loaded.length.to_bits(), config.length.to_bits());
        assert_eq!(loaded.load.to_bits(), config.load.to_bits());
        assert_eq!(loaded.youngs_modulus.to_bits(), config.youngs_modulus.to_bits());
        assert_eq!(loaded, config);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_save_rejects_non_finite_configuration() {
        let path = temp_path("infinite", "json");
        let config = BeamConfiguration {
            length: f64::INFINITY,
            ..BeamConfiguration::default()
        };

        match save_session(&config, &path) {
            Err(CalcError::InvalidInput { field, .. }) => assert_eq!(field, "length"),
            other => panic!("expected InvalidInput, got {:?}", other),
        }
        assert!(!path.exists());

        let export = CurveExport::new(&config, &evaluate(&config));
        assert_eq!(export.to_json().unwrap_err().error_code(), "INVALID_INPUT");
    }

    #[test]
    fn test_non_finite_samples_survive_json() {
        let config = BeamConfiguration {
            moment_of_inertia: 0.0,
            ..BeamConfiguration::default()
        };
        let export = CurveExport::new(&config, &evaluate(&config));
        assert!(export.points.iter().any(|(_, y)| y.is_nan()));
        assert!(export.points.iter().any(|(_, y)| y.is_infinite()));

        let json = export.to_json().unwrap();
        assert!(!json.contains("null"), "json = {}", json);

        let parsed: CurveExport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.points.len(), export.points.len());
        for (&(x, y), &(px, py)) in export.points.iter().zip(&parsed.points) {
            assert_eq!(x.to_bits(), px.to_bits());
            if y.is_nan() {
                assert!(py.is_nan(), "x = {}: {} read back as {}", x, y, py);
            } else {
                assert_eq!(y, py, "x = {}", x);
            }
        }
    }

    #[test]
    fn test_unknown_special_sample_is_rejected() {
        let config = BeamConfiguration::default();
        let mut value = serde_json::to_value(CurveExport::new(&config, &evaluate(&config))).unwrap();
        value["points"][0][1] = serde_json::Value::String("huge".to_string());
        assert!(serde_json::from_value::<CurveExport>(value).is_err());
    }

    #[test]
    fn test_atomic_save_creates_no_tmp_file() {
        let path = temp_path("atomic", "json");
        save_session(&BeamConfiguration::default(), &path).unwrap();

        assert!(!tmp_path_for(&path).exists());
        assert!(path.exists());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_partial_session_uses_defaults() {
        let path = temp_path("partial", "json");
        fs::write(
            &path,
            r#"{"version":"0.1.0","saved_at":"2026-01-01T00:00:00Z","configuration":{"load":3.0}}"#,
        )
        .unwrap();

        let session = load_session(&path).unwrap();
        assert_eq!(session.configuration.load, 3.0);
        assert_eq!(session.configuration.length, 10.0);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_rejects_newer_schema() {
        let path = temp_path("newer", "json");
        fs::write(
            &path,
            r#"{"version":"0.9.0","saved_at":"2026-01-01T00:00:00Z","configuration":{}}"#,
        )
        .unwrap();

        let err = load_session(&path).unwrap_err();
        assert_eq!(err.error_code(), "VERSION_MISMATCH");

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_load_errors() {
        let missing = temp_path("missing", "json");
        assert_eq!(load_session(&missing).unwrap_err().error_code(), "FILE_ERROR");

        let garbage = temp_path("garbage", "json");
        fs::write(&garbage, "not json").unwrap();
        assert_eq!(load_session(&garbage).unwrap_err().error_code(), "SERIALIZATION_ERROR");
        let _ = fs::remove_file(&garbage);
    }

    #[test]
    fn test_version_validation() {
        assert!(validate_version(SCHEMA_VERSION).is_ok());
        assert!(validate_version("0.1.7").is_ok());
        assert!(validate_version("0.0.3").is_ok());
        assert!(validate_version("1.0.0").is_err());
        assert!(validate_version("0.2.0").is_err());
        assert!(validate_version("banana").is_err());
    }

    #[test]
    fn test_csv_export() {
        let config = BeamConfiguration::default();
        let export = CurveExport::new(&config, &evaluate(&config));
        let csv = export.to_csv();

        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "x,y");
        assert_eq!(lines.len(), 51);
        assert!(lines[1].starts_with("0,"));
        assert!(lines[50].starts_with("10,"));

        let path = temp_path("curve", "csv");
        export_curve(&export, &path, ExportFormat::from_path(&path)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), csv);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_json_export_carries_context() {
        let config = BeamConfiguration::default().with_supports(Support::Free, Support::Free);
        let export = CurveExport::new(&config, &evaluate(&config));
        assert_eq!(export.stability, Stability::Unstable);
        assert_eq!(export.formula, "0");

        let path = temp_path("curve", "json");
        export_curve(&export, &path, ExportFormat::Json).unwrap();
        let parsed: CurveExport = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(parsed.points, export.points);
        assert_eq!(parsed.configuration, config);
        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_export_format_parse() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("png".parse::<ExportFormat>().is_err());
        assert_eq!(ExportFormat::from_path(Path::new("out.txt")), ExportFormat::Json);
    }
}
