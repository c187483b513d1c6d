use std::fs::File;
use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Reader, Sheets};
use csv::ReaderBuilder;
use ndarray::{Array1, Array2};

use super::{Dataset, ID_COLUMN, TARGET_COLUMNS};
use crate::error::{ScoringError, ScoringResult};
use crate::logic::features::{FEATURE_COUNT, FEATURE_LAYOUT};

/// One table row with its 1-based line (or sheet row) number
pub(super) type Row = (u64, Vec<String>);

/// Load from a local path or an http(s) URL.
/// `.xls`/`.xlsx` sources are read as spreadsheets, anything else as CSV.
pub fn load_source(source: &str) -> ScoringResult<Dataset> {
    let spreadsheet = is_spreadsheet(source);

    if source.starts_with("http://") || source.starts_with("https://") {
        log::info!("Downloading dataset from {}", source);
        let response = ureq::get(source)
            .call()
            .map_err(|e| ScoringError::Dataset(format!("download failed: {}", e)))?;

        if spreadsheet {
            let mut bytes = Vec::new();
            response.into_reader().read_to_end(&mut bytes)?;
            load_spreadsheet(bytes)
        } else {
            load_csv(response.into_reader())
        }
    } else {
        log::info!("Reading dataset from {}", source);
        let path = Path::new(source);

        if spreadsheet {
            let workbook = open_workbook_auto(path)
                .map_err(|e| ScoringError::Dataset(format!("cannot open {}: {}", source, e)))?;
            read_first_sheet(workbook)
        } else {
            let file = File::open(path)
                .map_err(|e| ScoringError::Dataset(format!("cannot open {}: {}", source, e)))?;
            load_csv(file)
        }
    }
}

pub fn is_spreadsheet(source: &str) -> bool {
    let lower = source.to_ascii_lowercase();
    lower.ends_with(".xls") || lower.ends_with(".xlsx")
}

/// Parse an in-memory workbook (first sheet)
pub fn load_spreadsheet(bytes: Vec<u8>) -> ScoringResult<Dataset> {
    let workbook = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| ScoringError::Dataset(format!("unreadable workbook: {}", e)))?;
    read_first_sheet(workbook)
}

fn read_first_sheet<RS: Read + Seek>(mut workbook: Sheets<RS>) -> ScoringResult<Dataset> {
    let range = workbook
        .worksheet_range_at(0)
        .ok_or_else(|| ScoringError::Dataset("workbook has no sheets".to_string()))?
        .map_err(|e| ScoringError::Dataset(format!("cannot read first sheet: {}", e)))?;

    let rows = range
        .rows()
        .enumerate()
        .map(|(i, cells)| -> ScoringResult<Row> {
            Ok((i as u64 + 1, cells.iter().map(cell_text).collect()))
        });
    parse_table(rows)
}

pub(super) fn cell_text(cell: &Data) -> String {
    match cell {
        Data::Int(v) => v.to_string(),
        Data::Float(v) => v.to_string(),
        Data::String(s) => s.clone(),
        Data::Bool(b) => u8::from(*b).to_string(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Parse a CSV table
pub fn load_csv<R: Read>(reader: R) -> ScoringResult<Dataset> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let rows = csv_reader.records().map(|result| -> ScoringResult<Row> {
        let record = result?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);
        Ok((line, record.iter().map(str::to_string).collect()))
    });
    parse_table(rows)
}

struct ColumnMap {
    features: [usize; FEATURE_COUNT],
    target: usize,
}

impl ColumnMap {
    fn from_header(header: &[String]) -> ScoringResult<Self> {
        let position = |name: &str| header.iter().position(|h| h.trim() == name);

        let mut features = [0usize; FEATURE_COUNT];
        for (slot, name) in features.iter_mut().zip(FEATURE_LAYOUT) {
            *slot = position(name)
                .ok_or_else(|| ScoringError::Dataset(format!("missing column {}", name)))?;
        }

        let target = TARGET_COLUMNS
            .iter()
            .find_map(|name| position(name))
            .ok_or_else(|| ScoringError::Dataset("missing target column".to_string()))?;

        if position(ID_COLUMN).is_some() {
            log::debug!("Dropping {} column", ID_COLUMN);
        }

        Ok(Self { features, target })
    }
}

fn parse_field(row: &[String], index: usize, line: u64) -> ScoringResult<f64> {
    let raw = row.get(index).map(|s| s.trim()).unwrap_or("");
    raw.parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| {
            ScoringError::Dataset(format!("line {}: invalid number {:?} in column {}", line, raw, index))
        })
}

/// Build the dataset from raw rows. Title rows above the real header
/// are skipped: the header is the first row holding a `LIMIT_BAL` cell.
pub(super) fn parse_table<I>(rows: I) -> ScoringResult<Dataset>
where
    I: IntoIterator<Item = ScoringResult<Row>>,
{
    let mut columns: Option<ColumnMap> = None;
    let mut values: Vec<f64> = Vec::new();
    let mut target: Vec<f64> = Vec::new();

    for result in rows {
        let (line, row) = result?;

        let Some(map) = columns.as_ref() else {
            if row.iter().any(|field| field.trim() == FEATURE_LAYOUT[0]) {
                columns = Some(ColumnMap::from_header(&row)?);
            }
            continue;
        };

        if row.iter().all(|field| field.trim().is_empty()) {
            continue;
        }

        for &index in &map.features {
            values.push(parse_field(&row, index, line)?);
        }

        let label = parse_field(&row, map.target, line)?;
        if label != 0.0 && label != 1.0 {
            return Err(ScoringError::Dataset(format!(
                "line {}: target must be 0 or 1, got {}",
                line, label
            )));
        }
        target.push(label);
    }

    if columns.is_none() {
        return Err(ScoringError::Dataset(format!(
            "no header row containing {}",
            FEATURE_LAYOUT[0]
        )));
    }
    if target.is_empty() {
        return Err(ScoringError::Dataset("dataset has no rows".to_string()));
    }

    let rows = target.len();
    let features = Array2::from_shape_vec((rows, FEATURE_COUNT), values)
        .map_err(|e| ScoringError::Dataset(e.to_string()))?;

    log::info!("Loaded {} rows", rows);

    Ok(Dataset {
        features,
        target: Array1::from(target),
    })
}
