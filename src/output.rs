// src/output.rs
use ndarray::Array2;
use std::fs::File;
use std::io::{self, Write};

/// Write a path (or variance) matrix as CSV, one line per path row.
pub fn write_matrix_to_csv(filename: &str, matrix: &Array2<f64>) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for row in matrix.rows() {
        let line: Vec<String> = row.iter().map(|v| v.to_string()).collect();
        writeln!(file, "{}", line.join(","))?;
    }
    Ok(())
}

pub fn write_summary_to_csv(filename: &str, summary_data: &[(&str, &str)]) -> io::Result<()> {
    let mut file = File::create(filename)?;
    for (key, value) in summary_data {
        writeln!(file, "{},{}", key, value)?;
    }
    Ok(())
}
