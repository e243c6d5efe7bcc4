use std::path::Path;

use serde::Deserialize;

use crate::analysis::parse_value;
use crate::error::Result;
use crate::models::{BatchFailure, ProductInput};

/// One CSV row of the `import` command.
///
/// Numbers are kept as text so a bad cell is reported like any other
/// non-numeric input instead of as a CSV error.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductRow {
    pub name: String,
    pub fixed_cost: String,
    pub variable_cost: String,
    pub price: String,
}

impl ProductRow {
    pub fn into_product(
        self,
        profit_margin_percent: f64,
    ) -> std::result::Result<ProductInput, BatchFailure> {
        Ok(ProductInput::new(
            self.name.trim(),
            parse_value(&self.fixed_cost)?,
            parse_value(&self.variable_cost)?,
            parse_value(&self.price)?,
            profit_margin_percent,
        ))
    }
}

/// Read product rows from a CSV file with a `name,fixed_cost,variable_cost,price` header.
pub fn load_product_rows<P: AsRef<Path>>(path: P) -> Result<Vec<ProductRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut rows = Vec::new();
    for record in reader.deserialize() {
        rows.push(record?);
    }
    Ok(rows)
}

/// Convert rows into products sharing one margin. Any bad number fails all rows.
pub fn rows_to_products(
    rows: Vec<ProductRow>,
    profit_margin_percent: f64,
) -> std::result::Result<Vec<ProductInput>, BatchFailure> {
    rows.into_iter()
        .map(|row| row.into_product(profit_margin_percent))
        .collect()
}
