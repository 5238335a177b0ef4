use std::io::Write;
use std::path::Path;

use crate::error::Result;
use crate::shopping::ShoppingList;

const HEADER: [&str; 5] = ["name", "quantity", "unit", "department", "checked"];

/// Write the shopping list as CSV to any writer.
///
/// Quantities are written unrounded.
pub fn write_csv_to<W: Write>(list: &ShoppingList, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for item in list.items() {
        let quantity = item.quantity.to_string();
        wtr.write_record([
            item.name.as_str(),
            quantity.as_str(),
            item.unit.as_str(),
            item.department.as_deref().unwrap_or(""),
            if item.checked { "true" } else { "false" },
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the shopping list to a CSV file.
pub fn write_csv(list: &ShoppingList, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_csv_to(list, file)?;
    tracing::info!(path = %path.display(), items = list.len(), "exported shopping list");
    Ok(())
}
