//! Target file discovery, parsing, and upload.
//!
//! Two on-disk formats feed the same upload path:
//!
//! - the 2017 Object File Format: a directory of per-target JSON files, each
//!   with a sibling thumbnail image sharing the file stem;
//! - the legacy 2016 format: one tab-delimited file, one target per line,
//!   image paths relative to the target directory.
//!
//! Neither routine deduplicates. Running the tool twice uploads every target
//! twice, as distinct server-side records.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use tracing::{debug, info};

use crate::client::Client;
use crate::error::{Error, Result};
use crate::target::{Color, Orientation, Shape, Target, TargetType};

/// Image extensions accepted as target thumbnails, in lookup order.
const IMAGE_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Column count of a legacy 2016 target record.
const LEGACY_COLUMNS: usize = 10;

/// Outcome of a target upload run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    /// Server-assigned target ids, in upload order.
    pub target_ids: Vec<u32>,
}

impl UploadReport {
    pub fn uploaded(&self) -> usize {
        self.target_ids.len()
    }
}

/// Upload every 2017 Object File Format target found in `target_dir`.
///
/// The directory is scanned (non-recursively) for `*.json` files; each must
/// have a sibling thumbnail with the same stem and a jpg/jpeg/png extension.
/// Targets upload in file-name order. Discovery runs before the first
/// request, so a missing thumbnail fails the run with nothing uploaded.
pub fn upload_targets(client: &Client, target_dir: &Path) -> Result<UploadReport> {
    let entries = discover_targets(target_dir)?;
    debug!(
        targets = entries.len(),
        dir = %target_dir.display(),
        "discovered object-format targets"
    );

    let mut report = UploadReport::default();
    for entry in entries {
        let contents = fs::read_to_string(&entry.json)?;
        let target: Target =
            serde_json::from_str(&contents).map_err(|source| Error::MalformedTargetFile {
                path: entry.json.clone(),
                source,
            })?;
        let id = upload_one(client, &target, &entry.image)?;
        report.target_ids.push(id);
    }
    Ok(report)
}

/// Upload every record of a legacy 2016 tab-delimited target file.
///
/// Image paths in the file resolve relative to `target_dir`. The whole file
/// parses before the first request, so a malformed record fails the run with
/// nothing uploaded.
pub fn upload_legacy_targets(
    client: &Client,
    legacy_path: &Path,
    target_dir: &Path,
) -> Result<UploadReport> {
    let contents = fs::read_to_string(legacy_path)?;
    let records = parse_legacy_targets(&contents, target_dir)?;
    debug!(
        records = records.len(),
        file = %legacy_path.display(),
        "parsed legacy target file"
    );

    let mut report = UploadReport::default();
    for record in records {
        let id = upload_one(client, &record.target, &record.image)?;
        report.target_ids.push(id);
    }
    Ok(report)
}

fn upload_one(client: &Client, target: &Target, image: &Path) -> Result<u32> {
    let created = client.post_target(target)?;
    let id = created.id.ok_or(Error::TargetIdMissing)?;

    let bytes = fs::read(image)?;
    let content_type = image_content_type(image)?;
    client.post_target_image(id, bytes, content_type)?;

    info!(id, image = %image.display(), "uploaded target");
    Ok(id)
}

/// One discovered JSON/thumbnail pair.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TargetEntry {
    json: PathBuf,
    image: PathBuf,
}

fn discover_targets(target_dir: &Path) -> Result<Vec<TargetEntry>> {
    let mut json_files: Vec<PathBuf> = fs::read_dir(target_dir)?
        .collect::<std::io::Result<Vec<_>>>()?
        .into_iter()
        .map(|entry| entry.path())
        .filter(|path| has_extension(path, "json"))
        .collect();
    json_files.sort();

    let mut entries = Vec::with_capacity(json_files.len());
    for json in json_files {
        let image = find_sibling_image(&json).ok_or_else(|| Error::MissingTargetImage {
            path: json.clone(),
        })?;
        entries.push(TargetEntry { json, image });
    }
    Ok(entries)
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

fn find_sibling_image(json: &Path) -> Option<PathBuf> {
    IMAGE_EXTENSIONS
        .iter()
        .map(|ext| json.with_extension(ext))
        .find(|candidate| candidate.is_file())
}

fn image_content_type(path: &Path) -> Result<&'static str> {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        _ => Err(Error::UnsupportedImageFormat {
            path: path.to_path_buf(),
        }),
    }
}

/// One record parsed from the legacy file.
#[derive(Debug, Clone, PartialEq)]
struct LegacyRecord {
    target: Target,
    image: PathBuf,
}

/// Parse the legacy 2016 tab-delimited format: one record per line, ten
/// columns: id, type, latitude, longitude, orientation, shape, background
/// color, alphanumeric, alphanumeric color, image file name.
fn parse_legacy_targets(contents: &str, target_dir: &Path) -> Result<Vec<LegacyRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .from_reader(contents.as_bytes());

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let line = row.position().map(|pos| pos.line() as usize).unwrap_or(0);

        if row.len() == 1 && row[0].trim().is_empty() {
            continue;
        }
        if row.len() != LEGACY_COLUMNS {
            return Err(Error::MalformedLegacyRecord {
                line,
                message: format!(
                    "expected {} tab-delimited fields, found {}",
                    LEGACY_COLUMNS,
                    row.len()
                ),
            });
        }

        records.push(parse_legacy_record(&row, line, target_dir)?);
    }
    Ok(records)
}

fn parse_legacy_record(
    row: &csv::StringRecord,
    line: usize,
    target_dir: &Path,
) -> Result<LegacyRecord> {
    // Column 0 is the file-local target number. The server assigns its own
    // ids, so the value is validated and then dropped.
    parse_field::<u32>(row, 0, "id", line)?;

    let target_type = parse_field::<TargetType>(row, 1, "type", line)?;
    let latitude = parse_field::<f64>(row, 2, "latitude", line)?;
    let longitude = parse_field::<f64>(row, 3, "longitude", line)?;
    let orientation = parse_field::<Orientation>(row, 4, "orientation", line)?;
    let shape = parse_field::<Shape>(row, 5, "shape", line)?;
    let background_color = parse_field::<Color>(row, 6, "background color", line)?;
    let alphanumeric = row[7].trim().to_string();
    let alphanumeric_color = parse_field::<Color>(row, 8, "alphanumeric color", line)?;

    let image_name = row[9].trim();
    if image_name.is_empty() {
        return Err(Error::MalformedLegacyRecord {
            line,
            message: "empty image file name".to_string(),
        });
    }

    let target = Target {
        id: None,
        target_type,
        latitude: Some(latitude),
        longitude: Some(longitude),
        orientation: Some(orientation),
        shape: Some(shape),
        background_color: Some(background_color),
        alphanumeric: Some(alphanumeric),
        alphanumeric_color: Some(alphanumeric_color),
        description: None,
        autonomous: false,
    };

    Ok(LegacyRecord {
        target,
        image: target_dir.join(image_name),
    })
}

fn parse_field<T>(row: &csv::StringRecord, column: usize, name: &str, line: usize) -> Result<T>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    row[column].trim().parse().map_err(|err: T::Err| {
        Error::MalformedLegacyRecord {
            line,
            message: format!("bad {}: {}", name, err),
        }
    })
}
