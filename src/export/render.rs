use crate::domain::StatsTable;
use anyhow::{Context, Result};
use colored::Colorize;

/// Print a stats table to stdout with a bold title and padded columns
pub fn print_table(title: &str, table: &StatsTable) {
    println!("\n{}", title.bold());

    let widths = column_widths(table);
    println!("{}", format_row(&table.headers, &widths).bold());
    for row in &table.rows {
        println!("{}", format_row(row, &widths));
    }
}

/// Print a stats table to stdout as pretty JSON
pub fn print_json(title: &str, table: &StatsTable) -> Result<()> {
    println!("\n{}", title.bold());

    let json = serde_json::to_string_pretty(table).context("Failed to serialize stats table")?;
    println!("{}", json);
    Ok(())
}

fn column_widths(table: &StatsTable) -> Vec<usize> {
    let mut widths: Vec<usize> = table.headers.iter().map(|h| h.len()).collect();

    for row in &table.rows {
        for (i, cell) in row.iter().enumerate() {
            if i >= widths.len() {
                widths.push(cell.len());
            } else if cell.len() > widths[i] {
                widths[i] = cell.len();
            }
        }
    }

    widths
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let width = widths.get(i).copied().unwrap_or(cell.len());
            format!("{:<width$}", cell)
        })
        .collect::<Vec<_>>()
        .join("  ")
}
