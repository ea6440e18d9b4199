use std::path::Path;

use espm_core::master::ListFilter;

use crate::cli::SortColumn;
use crate::commands::common::{
    format_supplier_lines, open_master, sort_key, supplier_to_item, CliController,
    SupplierListItem,
};
use crate::error::CliError;

pub fn run_suppliers(
    catalog: &Path,
    search: Option<&str>,
    country: Option<&str>,
    sort: SortColumn,
    as_json: bool,
) -> Result<(), CliError> {
    let mut master = open_master(catalog)?;
    apply_view(&mut master, search, country, sort);

    let suppliers = master.list().items();
    if as_json {
        let items = suppliers
            .iter()
            .map(|supplier| supplier_to_item(supplier))
            .collect::<Vec<SupplierListItem>>();
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    println!("{}", master.view().title);
    if master.view().is_filter_bar_visible {
        println!("{}", master.view().filter_bar_label);
    }
    if suppliers.is_empty() {
        println!("{}", master.view().no_data_text);
    } else {
        for line in format_supplier_lines(&suppliers) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Apply search, filter, and sort the way the master page does.
pub fn apply_view(
    master: &mut CliController,
    search: Option<&str>,
    country: Option<&str>,
    sort: SortColumn,
) {
    master.on_sort(sort_key(sort));
    if let Some(country) = country.map(str::trim).filter(|value| !value.is_empty()) {
        master.on_filter(Some(ListFilter::CountryEquals(country.to_string())), country);
    }
    master.on_search(search, false);
    let visible = master.list().len();
    master.on_update_finished(visible);
}
