use crate::config::TOURNAMENT;
use crate::domain::{StatsTable, StatsType};
use anyhow::{Context, Result, anyhow};
use csv::Writer;
use log::info;
use std::fs;
use std::path::{Path, PathBuf};

/// Encode a stats table as UTF-8 CSV bytes, headers first
pub fn table_to_csv(table: &StatsTable) -> Result<Vec<u8>> {
    let mut writer = Writer::from_writer(Vec::new());

    writer
        .write_record(&table.headers)
        .context("Failed to write CSV header")?;
    for row in &table.rows {
        writer.write_record(row).context("Failed to write CSV row")?;
    }

    writer
        .into_inner()
        .map_err(|e| anyhow!("Failed to flush CSV writer: {}", e))
}

/// Export file name contract: `{player_name}_ipl_{batting|bowling}_stats.csv`
pub fn export_file_name(player_name: &str, stats_type: StatsType) -> String {
    format!(
        "{}_{}_{}_stats.csv",
        player_name,
        TOURNAMENT,
        stats_type.as_str()
    )
}

/// Write a table to the output directory and return the file path
pub fn write_csv(
    table: &StatsTable,
    out_dir: &Path,
    player_name: &str,
    stats_type: StatsType,
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).context("Failed to create output directory")?;

    let path = out_dir.join(export_file_name(player_name, stats_type));
    let bytes = table_to_csv(table)?;
    fs::write(&path, bytes)
        .with_context(|| format!("Failed to write CSV file: {}", path.display()))?;

    info!("Exported {} rows to {}", table.row_count(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> StatsTable {
        StatsTable {
            headers: vec!["Runs".to_string(), "Avg".to_string()],
            rows: vec![vec!["741".to_string(), "61.75".to_string()]],
        }
    }

    #[test]
    fn file_name_follows_the_export_contract() {
        assert_eq!(
            export_file_name("Virat Kohli", StatsType::Batting),
            "Virat Kohli_ipl_batting_stats.csv"
        );
        assert_eq!(
            export_file_name("Virat Kohli", StatsType::Bowling),
            "Virat Kohli_ipl_bowling_stats.csv"
        );
    }

    #[test]
    fn csv_bytes_contain_headers_then_rows() {
        let bytes = table_to_csv(&sample_table()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text, "Runs,Avg\n741,61.75\n");
    }

    #[test]
    fn cells_with_commas_are_quoted() {
        let table = StatsTable {
            headers: vec!["Ground".to_string()],
            rows: vec![vec!["Chepauk, Chennai".to_string()]],
        };
        let text = String::from_utf8(table_to_csv(&table).unwrap()).unwrap();
        assert_eq!(text, "Ground\n\"Chepauk, Chennai\"\n");
    }
}
