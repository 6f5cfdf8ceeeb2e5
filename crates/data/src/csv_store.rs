use anyhow::{Context, Result};
use carbon_portfolio_core::Position;
use csv::Writer;
use rust_decimal::Decimal;
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

pub struct CsvPositionStore;

impl CsvPositionStore {
    /// Reads positions from a CSV file.
    ///
    /// Format: `id,project_name,tonnes,price_per_tonne,status,vintage`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The CSV file cannot be opened
    /// - The CSV file has invalid format
    /// - Decimal parsing fails for tonnes or price
    /// - A status value is outside the recognized set
    pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<Vec<Position>> {
        let path = path.as_ref();
        let mut reader = csv::Reader::from_path(path)
            .with_context(|| format!("Failed to open CSV file: {}", path.display()))?;
        let mut positions = Vec::new();

        for result in reader.records() {
            let record = result?;
            let id = record[0].to_string();
            let project_name = record[1].to_string();
            let tonnes = Decimal::from_str(&record[2])
                .with_context(|| format!("Invalid tonnes for position {id}"))?;
            let price_per_tonne = Decimal::from_str(&record[3])
                .with_context(|| format!("Invalid price for position {id}"))?;
            let status = record[4]
                .parse()
                .with_context(|| format!("Invalid status for position {id}"))?;
            let vintage: i32 = record[5]
                .parse()
                .with_context(|| format!("Invalid vintage for position {id}"))?;

            positions.push(Position {
                id,
                project_name,
                tonnes,
                price_per_tonne,
                status,
                vintage,
            });
        }

        Ok(positions)
    }

    /// Writes positions to a CSV file.
    ///
    /// # Errors
    /// Returns error if file cannot be created or writing fails
    pub fn write_csv<P: AsRef<Path>>(path: P, positions: &[Position]) -> Result<()> {
        let path = path.as_ref();
        let file = File::create(path)
            .with_context(|| format!("Failed to create CSV file: {}", path.display()))?;
        let mut writer = Writer::from_writer(file);

        writer.write_record([
            "id",
            "project_name",
            "tonnes",
            "price_per_tonne",
            "status",
            "vintage",
        ])?;

        for position in positions {
            writer.write_record(&[
                position.id.clone(),
                position.project_name.clone(),
                position.tonnes.to_string(),
                position.price_per_tonne.to_string(),
                position.status.to_string(),
                position.vintage.to_string(),
            ])?;
        }

        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::seed_positions;
    use carbon_portfolio_core::PositionStatus;
    use rust_decimal_macros::dec;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("carbon-portfolio-{name}-{}.csv", std::process::id()))
    }

    #[test]
    fn write_then_load_preserves_positions() {
        let path = temp_path("roundtrip");
        let positions = seed_positions();

        CsvPositionStore::write_csv(&path, &positions).unwrap();
        let loaded = CsvPositionStore::load_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded, positions);
    }

    #[test]
    fn load_parses_decimal_fields() {
        let path = temp_path("decimals");
        std::fs::write(
            &path,
            "id,project_name,tonnes,price_per_tonne,status,vintage\n\
             1,Test Project,100.5,25.75,available,2023\n",
        )
        .unwrap();

        let loaded = CsvPositionStore::load_csv(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].tonnes, dec!(100.5));
        assert_eq!(loaded[0].price_per_tonne, dec!(25.75));
        assert_eq!(loaded[0].status, PositionStatus::Available);
    }

    #[test]
    fn load_rejects_unknown_status() {
        let path = temp_path("bad-status");
        std::fs::write(
            &path,
            "id,project_name,tonnes,price_per_tonne,status,vintage\n\
             1,Test Project,100,25,pending,2023\n",
        )
        .unwrap();

        let result = CsvPositionStore::load_csv(&path);
        std::fs::remove_file(&path).ok();

        assert!(result.is_err());
    }

    #[test]
    fn load_fails_on_missing_file() {
        assert!(CsvPositionStore::load_csv("does/not/exist.csv").is_err());
    }
}
