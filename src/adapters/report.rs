use crate::domain::model::{EnrichedLead, ReportRowSet};
use crate::utils::error::{LeadError, Result};

/// Serialize a report as CSV with a fixed header row, even when there are no rows.
pub fn render_csv(report: &ReportRowSet) -> Result<Vec<u8>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(EnrichedLead::COLUMNS)?;
    for row in report {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| LeadError::IoError(e.into_error()))
}

/// Fixed-width text table for terminal output.
pub fn render_table(report: &ReportRowSet) -> String {
    let cells: Vec<[String; 4]> = report
        .iter()
        .map(|row| {
            [
                row.company.clone().unwrap_or_default(),
                row.domain.to_string(),
                if row.domain_valid { "True" } else { "False" }.to_string(),
                row.ai_score.to_string(),
            ]
        })
        .collect();

    let mut widths = EnrichedLead::COLUMNS.map(str::len);
    for row in &cells {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_line = |values: [&str; 4]| {
        values
            .iter()
            .zip(widths)
            .map(|(value, width)| format!("{:<width$}", value, width = width))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = vec![format_line(EnrichedLead::COLUMNS)];
    for row in &cells {
        lines.push(format_line([
            row[0].as_str(),
            row[1].as_str(),
            row[2].as_str(),
            row[3].as_str(),
        ]));
    }
    lines.join("\n")
}
