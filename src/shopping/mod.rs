pub mod aggregate;
pub mod export;
pub mod list;

pub use aggregate::{aggregate_ingredients, try_aggregate, validate_quantities};
pub use export::{write_csv, write_csv_to};
pub use list::ShoppingList;
