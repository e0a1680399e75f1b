use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use zone_model::StructureSchema;

use crate::cli::ModelArgs;
use crate::pipeline::{ModelConfig, StateResult, run_model};
use crate::summary::apply_table_style;

/// Run the conversion pipeline for one model.
pub fn run_model_command(args: &ModelArgs) -> Result<Vec<StateResult>> {
    let model_span = info_span!("model", structure = %args.structure.display());
    let _model_guard = model_span.enter();

    let output_dir = args.output_dir.clone().unwrap_or_else(|| {
        args.structure
            .parent()
            .map(|dir| dir.join("output"))
            .unwrap_or_else(|| "output".into())
    });
    let config = ModelConfig {
        structure: args.structure.clone(),
        nuclides: args.nuclides.clone(),
        pre_composition: args.pre_composition.clone(),
        post_composition: args.post_composition.clone(),
        output_dir,
        embed_nuclides: args.embed_nuclides,
        creation_timestamp: !args.no_timestamp,
    };
    run_model(&config)
}

/// Print the declared structure-file column schema.
pub fn run_schema() -> Result<()> {
    let schema = StructureSchema::default();
    let mut table = Table::new();
    table.set_header(vec!["Column", "Property"]);
    apply_table_style(&mut table);
    for (index, name) in schema.properties.iter().enumerate() {
        table.add_row(vec![index.to_string(), name.clone()]);
    }
    println!("{table}");
    println!(
        "{} columns, {} leading metadata lines",
        schema.column_count(),
        schema.skip_lines
    );
    Ok(())
}
