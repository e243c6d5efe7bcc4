pub mod products;
pub mod report;

pub use products::{ProductRow, load_product_rows, rows_to_products};
pub use report::write_json_report;
