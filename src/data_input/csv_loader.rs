// src/data_input/csv_loader.rs

use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::data_input::measurement_data::{ExperimentalTrace, MeasurementTable, REQUIRED_COLUMNS};
use crate::error::RenderError;

/// Strips leading and trailing whitespace from every column label.
pub fn normalize_column_names<I, S>(headers: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    headers
        .into_iter()
        .map(|header| header.as_ref().trim().to_string())
        .collect()
}

/// Reads the measurement CSV at `input_file_path`.
///
/// The whole file is read before returning; the handle is released on exit.
pub fn load_measurements(input_file_path: &Path) -> Result<MeasurementTable, RenderError> {
    let file = File::open(input_file_path)?;
    let table = parse_measurements(BufReader::new(file))?;
    log::info!(
        "Read {} data rows from '{}'.",
        table.row_count(),
        input_file_path.display()
    );
    Ok(table)
}

/// Parses measurement CSV content from any reader.
///
/// Rules:
/// - header names are matched after whitespace normalization; the first
///   occurrence wins when two names collide, extra columns are ignored
/// - empty cells and cells missing from short rows become `NaN`
/// - any other unparseable cell aborts the load
pub fn parse_measurements<R: Read>(reader: R) -> Result<MeasurementTable, RenderError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header_record = rdr.headers()?.clone();
    if header_record.is_empty() {
        return Err(RenderError::EmptyInput);
    }
    log::debug!("Headers found in CSV: {:?}", header_record);

    let headers = normalize_column_names(header_record.iter());

    let mut column_indices: HashMap<&str, usize> = HashMap::new();
    for (i, header) in headers.iter().enumerate() {
        column_indices.entry(header.as_str()).or_insert(i);
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| !column_indices.contains_key(*name))
        .map(|name| name.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(RenderError::MissingColumns {
            missing,
            found: headers.clone(),
        });
    }
    let csv_indices: Vec<usize> = REQUIRED_COLUMNS
        .iter()
        .filter_map(|name| column_indices.get(name).copied())
        .collect();

    let mut columns: [Vec<f64>; 7] = Default::default();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result?;
        for (slot, (&csv_idx, &name)) in csv_indices.iter().zip(REQUIRED_COLUMNS.iter()).enumerate() {
            let value = parse_cell(record.get(csv_idx), name, row_index + 1)?;
            columns[slot].push(value);
        }
    }

    let [time, real_voltage, simulated_voltage, c1c, c0c, c1a, c2a] = columns;
    Ok(MeasurementTable {
        time,
        real_voltage,
        simulated_voltage,
        concentrations: [c1c, c0c, c1a, c2a],
    })
}

/// Reads the experimental trace CSV at `input_file_path` (time and voltage in the
/// first two columns).
pub fn load_experimental_trace(input_file_path: &Path) -> Result<ExperimentalTrace, RenderError> {
    let file = File::open(input_file_path)?;
    let trace = parse_experimental_trace(BufReader::new(file))?;
    log::info!(
        "Read {} experimental samples from '{}'.",
        trace.len(),
        input_file_path.display()
    );
    Ok(trace)
}

/// Parses an experimental trace: columns are taken by position, any further
/// columns (e.g. current) are ignored. Cell rules match [`parse_measurements`].
pub fn parse_experimental_trace<R: Read>(reader: R) -> Result<ExperimentalTrace, RenderError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let header_record = rdr.headers()?.clone();
    if header_record.is_empty() {
        return Err(RenderError::EmptyInput);
    }
    if header_record.len() < 2 {
        return Err(RenderError::TooFewTraceColumns(header_record.len()));
    }
    let headers = normalize_column_names(header_record.iter());
    log::debug!("Experimental trace columns: {:?}", &headers[..2]);

    let mut trace = ExperimentalTrace::default();
    for (row_index, result) in rdr.records().enumerate() {
        let record = result?;
        trace.time.push(parse_cell(record.get(0), &headers[0], row_index + 1)?);
        trace.voltage.push(parse_cell(record.get(1), &headers[1], row_index + 1)?);
    }
    Ok(trace)
}

fn parse_cell(field: Option<&str>, column: &str, row: usize) -> Result<f64, RenderError> {
    match field.map(str::trim) {
        None | Some("") => Ok(f64::NAN),
        Some(text) => text.parse::<f64>().map_err(|_| RenderError::NonNumeric {
            column: column.to_string(),
            row,
            value: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "Time,Real Voltage,Simulated Voltage,c1c,c0c,c1a,c2a\n";

    #[test]
    fn test_normalize_strips_surrounding_whitespace() {
        let names = normalize_column_names([" Time", "Real Voltage ", "\tc1c\t", "c0c"]);
        assert_eq!(names, vec!["Time", "Real Voltage", "c1c", "c0c"]);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let once = normalize_column_names(["  Simulated Voltage ", " c2a", "Time"]);
        let twice = normalize_column_names(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_parse_with_padded_headers_and_extra_columns() {
        let csv = " Time , Real Voltage,Simulated Voltage ,c1c,c0c,c1a,c2a, Extra\n\
                   0.0,3.9,4.0,1.0,2.0,3.0,4.0,99\n\
                   0.5,3.8,3.9,1.5,2.5,3.5,4.5,99\n";
        let table = parse_measurements(csv.as_bytes()).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.time, vec![0.0, 0.5]);
        assert_eq!(table.real_voltage, vec![3.9, 3.8]);
        assert_eq!(table.simulated_voltage, vec![4.0, 3.9]);
        assert_eq!(table.concentrations[0], vec![1.0, 1.5]);
        assert_eq!(table.concentrations[3], vec![4.0, 4.5]);
    }

    #[test]
    fn test_parse_columns_in_any_order() {
        let csv = "c2a,c1a,c0c,c1c,Simulated Voltage,Real Voltage,Time\n7,6,5,4,3,2,1\n";
        let table = parse_measurements(csv.as_bytes()).unwrap();
        assert_eq!(table.time, vec![1.0]);
        assert_eq!(table.real_voltage, vec![2.0]);
        assert_eq!(table.concentrations, [vec![4.0], vec![5.0], vec![6.0], vec![7.0]]);
    }

    #[test]
    fn test_parse_missing_columns_lists_all() {
        let csv = "Time,Real Voltage,c1c,c0c,c1a\n1,2,3,4,5\n";
        match parse_measurements(csv.as_bytes()) {
            Err(RenderError::MissingColumns { missing, found }) => {
                assert_eq!(missing, vec!["Simulated Voltage", "c2a"]);
                assert_eq!(found, vec!["Time", "Real Voltage", "c1c", "c0c", "c1a"]);
            }
            other => panic!("expected MissingColumns, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_cells_become_nan() {
        let csv = format!("{HEADER}1,,3,4,5,6,7\n2,2,3\n");
        let table = parse_measurements(csv.as_bytes()).unwrap();
        assert_eq!(table.row_count(), 2);
        assert!(table.real_voltage[0].is_nan());
        assert_eq!(table.simulated_voltage, vec![3.0, 3.0]);
        assert!(table.concentrations[0][1].is_nan());
    }

    #[test]
    fn test_parse_non_numeric_cell_is_fatal() {
        let csv = format!("{HEADER}1,2,3,4,5,6,7\n2,2,3,oops,5,6,7\n");
        match parse_measurements(csv.as_bytes()) {
            Err(RenderError::NonNumeric { column, row, value }) => {
                assert_eq!(column, "c1c");
                assert_eq!(row, 2);
                assert_eq!(value, "oops");
            }
            other => panic!("expected NonNumeric, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_empty_input_is_error() {
        assert!(matches!(
            parse_measurements("".as_bytes()),
            Err(RenderError::EmptyInput)
        ));
    }

    #[test]
    fn test_parse_header_only_gives_empty_table() {
        let table = parse_measurements(HEADER.as_bytes()).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_missing_columns_message_shows_normalized_headers() {
        let csv = " Time ,Voltage, c1c\n1,2,3\n";
        let err = parse_measurements(csv.as_bytes()).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Real Voltage, Simulated Voltage, c0c, c1a, c2a"));
        assert!(message.ends_with("(found: Time, Voltage, c1c)"), "{message}");
    }

    #[test]
    fn test_parse_experimental_trace_by_position() {
        let csv = "Time (s),Voltage,Current\n0,3.95,1.2\n60, 3.90 ,1.2\n120,,1.1\n";
        let trace = parse_experimental_trace(csv.as_bytes()).unwrap();
        assert_eq!(trace.len(), 3);
        assert_eq!(trace.time, vec![0.0, 60.0, 120.0]);
        assert_eq!(trace.voltage[..2], [3.95, 3.90]);
        assert!(trace.voltage[2].is_nan());
    }

    #[test]
    fn test_parse_experimental_trace_rejects_single_column() {
        assert!(matches!(
            parse_experimental_trace("Time\n1\n".as_bytes()),
            Err(RenderError::TooFewTraceColumns(1))
        ));
    }

    #[test]
    fn test_parse_experimental_trace_names_bad_cell() {
        match parse_experimental_trace(" t , v \n1,2\n2,n/a\n".as_bytes()) {
            Err(RenderError::NonNumeric { column, row, value }) => {
                assert_eq!(column, "v");
                assert_eq!(row, 2);
                assert_eq!(value, "n/a");
            }
            other => panic!("expected NonNumeric, got {other:?}"),
        }
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let result = load_measurements(Path::new("definitely/not/here/output.csv"));
        assert!(matches!(result, Err(RenderError::Io(_))));
    }
}

// src/data_input/csv_loader.rs
