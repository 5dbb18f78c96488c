//! Subcommand implementations.

use comfy_table::Table;
use intake_core::{build, Catalog, CatalogBundle, SeedSpec};
use std::path::Path;

type CommandResult = Result<(), Box<dyn std::error::Error>>;

/// Run the full drop-and-recreate catalog rebuild.
pub fn rebuild(db_path: &Path, seed_path: &Path) -> CommandResult {
    let seed = SeedSpec::from_path(seed_path)?;
    let (bundle, report) = build(&seed)?;

    for diagnostic in report.diagnostics() {
        eprintln!("warning: {diagnostic}");
    }

    let db = sled::open(db_path)?;
    let catalog = Catalog::open(&db)?;
    let counts = (
        bundle.fields.len(),
        bundle.choices.len(),
        bundle.values.len(),
        bundle.ranges.len(),
        bundle.places.len(),
        bundle.sub_places.len(),
    );
    let version = catalog.apply(bundle)?;
    catalog.flush()?;

    println!(
        "catalog v{version}: {} fields, {} choices, {} values, {} ranges, {} places, {} sub-places ({} warnings)",
        counts.0,
        counts.1,
        counts.2,
        counts.3,
        counts.4,
        counts.5,
        report.diagnostics().len(),
    );
    Ok(())
}

/// Show field metadata from the current catalog.
pub fn show(db_path: &Path, entity: &str, position: Option<u32>) -> CommandResult {
    let db = sled::open(db_path)?;
    let catalog = Catalog::open(&db)?;
    let bundle = catalog
        .current_bundle()?
        .ok_or("catalog is empty; run 'intake rebuild' first")?;

    match position {
        Some(position) => show_field(&bundle, entity, position),
        None => show_entity(&bundle, entity),
    }
}

fn show_entity(bundle: &CatalogBundle, entity: &str) -> CommandResult {
    let fields = bundle.fields_of(entity);
    if fields.is_empty() {
        return Err(format!("no fields for entity '{entity}'").into());
    }

    let mut table = Table::new();
    table.set_header(vec!["Pos", "Label", "Kind", "Group", "Group pos", "Required"]);
    for field in fields {
        table.add_row(vec![
            field.position.to_string(),
            field.label.clone(),
            field.kind.to_string(),
            field.group.clone().unwrap_or_default(),
            field.group_position.to_string(),
            field.required.to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn show_field(bundle: &CatalogBundle, entity: &str, position: u32) -> CommandResult {
    let field = bundle
        .field(entity, position)
        .ok_or_else(|| format!("no field at {entity}:{position}"))?;

    println!(
        "{}.{} ({}), months {}-{}, group {}",
        field.entity,
        field.label,
        field.kind,
        field.valid_from_month,
        field.valid_to_month,
        field.group.as_deref().unwrap_or("-"),
    );

    if let Some(range) = bundle.range_for(entity, position) {
        println!("range: {} ..= {}", range.min, range.max);
    }

    let choices = bundle.choices_for(entity, position);
    if !choices.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Order", "Code", "Label"]);
        for choice in choices {
            table.add_row(vec![
                choice.display_order.to_string(),
                choice.code.clone(),
                choice.label.clone(),
            ]);
        }
        println!("{table}");
    }

    let values = bundle.values_for(entity, position);
    if !values.is_empty() {
        let mut table = Table::new();
        table.set_header(vec!["Seq", "Value"]);
        for value in values {
            table.add_row(vec![value.seq.to_string(), value.label.clone()]);
        }
        println!("{table}");
    }

    Ok(())
}
