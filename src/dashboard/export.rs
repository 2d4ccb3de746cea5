//! Dataset export
//!
//! Writes one dataset of a bundle as JSON, newline-delimited JSON or CSV.
//! The whole bundle (`all`) is only available as JSON.

use serde::Serialize;
use std::str::FromStr;

use super::error::{ExportError, ExportResult};
use crate::data::DataBundle;

/// Which part of the bundle to export
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Monthly,
    Categories,
    Regions,
    Segments,
    Churn,
    Products,
    All,
}

impl Dataset {
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Monthly => "monthly",
            Dataset::Categories => "categories",
            Dataset::Regions => "regions",
            Dataset::Segments => "segments",
            Dataset::Churn => "churn",
            Dataset::Products => "products",
            Dataset::All => "all",
        }
    }
}

impl FromStr for Dataset {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "monthly" | "sales" => Ok(Dataset::Monthly),
            "categories" => Ok(Dataset::Categories),
            "regions" => Ok(Dataset::Regions),
            "segments" => Ok(Dataset::Segments),
            "churn" => Ok(Dataset::Churn),
            "products" => Ok(Dataset::Products),
            "all" => Ok(Dataset::All),
            _ => Err(ExportError::UnknownDataset(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Json,
    Ndjson,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Ndjson => "ndjson",
            ExportFormat::Csv => "csv",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(ExportFormat::Json),
            "ndjson" => Ok(ExportFormat::Ndjson),
            "csv" => Ok(ExportFormat::Csv),
            _ => Err(ExportError::UnknownFormat(s.to_string())),
        }
    }
}

/// Export a dataset of the bundle in the given format
pub fn export(bundle: &DataBundle, dataset: Dataset, format: ExportFormat) -> ExportResult<String> {
    let body = match dataset {
        Dataset::Monthly => format_rows(&bundle.monthly_sales, format)?,
        Dataset::Categories => format_rows(&bundle.categories, format)?,
        Dataset::Regions => format_rows(&bundle.regions, format)?,
        Dataset::Segments => format_rows(&bundle.segments, format)?,
        Dataset::Churn => format_rows(&bundle.churn, format)?,
        Dataset::Products => format_rows(&bundle.top_products, format)?,
        Dataset::All => match format {
            ExportFormat::Json => serde_json::to_string_pretty(bundle)?,
            other => {
                return Err(ExportError::UnsupportedFormat {
                    dataset: dataset.name().to_string(),
                    format: other.extension().to_string(),
                })
            }
        },
    };

    tracing::debug!(
        dataset = dataset.name(),
        format = format.extension(),
        bytes = body.len(),
        "Exported dataset"
    );

    Ok(body)
}

fn format_rows<T: Serialize>(rows: &[T], format: ExportFormat) -> ExportResult<String> {
    match format {
        ExportFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        ExportFormat::Ndjson => format_ndjson(rows),
        ExportFormat::Csv => format_csv(rows),
    }
}

fn format_ndjson<T: Serialize>(rows: &[T]) -> ExportResult<String> {
    let mut ndjson = String::new();
    for row in rows {
        ndjson.push_str(&serde_json::to_string(row)?);
        ndjson.push('\n');
    }
    Ok(ndjson)
}

fn format_csv<T: Serialize>(rows: &[T]) -> ExportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in rows {
        writer.serialize(row)?;
    }

    let bytes = writer.into_inner().map_err(|e| {
        let source = e.error();
        ExportError::Io(std::io::Error::new(source.kind(), source.to_string()))
    })?;
    String::from_utf8(bytes)
        .map_err(|e| ExportError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{generate_seeded, MonthlyPoint, ProductRecord};

    #[test]
    fn test_csv_has_header_and_one_row_per_record() {
        let bundle = generate_seeded(3);
        let csv = export(&bundle, Dataset::Monthly, ExportFormat::Csv).unwrap();
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], "month,revenue,orders");
        assert_eq!(lines.len(), 13);
        assert!(lines[1].starts_with("Jan,"));
    }

    #[test]
    fn test_csv_quotes_fields_with_commas() {
        let bundle = generate_seeded(3);
        let csv = export(&bundle, Dataset::Segments, ExportFormat::Csv).unwrap();

        assert!(csv.starts_with("name,value,color,description\n"));
        assert!(csv.contains("Champions,23,#10b981,\"High value, frequent buyers\""));
    }

    #[test]
    fn test_regions_csv_uses_region_names() {
        let bundle = generate_seeded(3);
        let csv = export(&bundle, Dataset::Regions, ExportFormat::Csv).unwrap();
        let first = csv.lines().nth(1).unwrap();
        assert!(first.starts_with("North,"));
    }

    #[test]
    fn test_json_round_trip() {
        let bundle = generate_seeded(3);

        let json = export(&bundle, Dataset::Products, ExportFormat::Json).unwrap();
        let products: Vec<ProductRecord> = serde_json::from_str(&json).unwrap();
        assert_eq!(products, bundle.top_products);

        let json = export(&bundle, Dataset::All, ExportFormat::Json).unwrap();
        let restored: DataBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.segments, bundle.segments);
        assert_eq!(restored.churn, bundle.churn);
        assert_eq!(restored.monthly_sales.len(), 12);
        for (a, b) in restored.categories.iter().zip(&bundle.categories) {
            assert_eq!(a.category, b.category);
            assert!((a.sales - b.sales).abs() < 1e-6);
        }
    }

    #[test]
    fn test_ndjson_one_line_per_record() {
        let bundle = generate_seeded(3);
        let ndjson = export(&bundle, Dataset::Monthly, ExportFormat::Ndjson).unwrap();

        let points: Vec<MonthlyPoint> = ndjson
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(points.len(), bundle.monthly_sales.len());
        for (a, b) in points.iter().zip(&bundle.monthly_sales) {
            assert_eq!(a.month, b.month);
            assert_eq!(a.orders, b.orders);
            assert!((a.revenue - b.revenue).abs() < 1e-6);
        }
    }

    #[test]
    fn test_all_rejects_flat_formats() {
        let bundle = generate_seeded(3);
        let err = export(&bundle, Dataset::All, ExportFormat::Csv).unwrap_err();
        assert!(matches!(err, ExportError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_parse_dataset_and_format() {
        assert_eq!("Churn".parse::<Dataset>().unwrap(), Dataset::Churn);
        assert_eq!("sales".parse::<Dataset>().unwrap(), Dataset::Monthly);
        assert!(matches!(
            "orders".parse::<Dataset>(),
            Err(ExportError::UnknownDataset(_))
        ));

        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert!("xml".parse::<ExportFormat>().is_err());
    }
}
