//! Model conversion pipeline with explicit stages.
//!
//! The pipeline follows these stages in order, once per configured model
//! state (pre-collapse, post-explosion):
//! 1. **Ingest**: Load the nuclide reference table, parse the structure file
//! 2. **Merge**: Attach composition mass fractions and prune empty zones
//! 3. **Output**: Write the zone-data XML document
//!
//! Every state starts from a fresh structure parse; a zone map that already
//! had a different composition merged into it must not be reused.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result, bail};
use tracing::{info, info_span};

use zone_ingest::{MergeStats, load_nuclides, read_composition_file, read_structure_file};
use zone_model::{CompositionSchema, NuclideTable, StructureSchema};
use zone_output::{ZoneDataOptions, write_zone_data};

/// Which model state a composition file describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    PreCollapse,
    PostExplosion,
}

impl ModelState {
    pub fn as_str(self) -> &'static str {
        match self {
            ModelState::PreCollapse => "pre-collapse",
            ModelState::PostExplosion => "post-explosion",
        }
    }

    /// File stem of the output document for this state.
    pub fn file_stem(self) -> &'static str {
        match self {
            ModelState::PreCollapse => "presn",
            ModelState::PostExplosion => "expl",
        }
    }
}

/// Explicit configuration for one model conversion. File selection lives
/// here, passed into the pipeline, never in module-level state.
#[derive(Debug, Clone)]
pub struct ModelConfig {
    pub structure: PathBuf,
    pub nuclides: PathBuf,
    pub pre_composition: Option<PathBuf>,
    pub post_composition: Option<PathBuf>,
    pub output_dir: PathBuf,
    /// Embed the full nuclide reference table in each output document.
    pub embed_nuclides: bool,
    /// Stamp outputs with the creation time.
    pub creation_timestamp: bool,
}

/// Result of converting one model state.
#[derive(Debug)]
pub struct StateResult {
    pub state: ModelState,
    pub composition: PathBuf,
    pub output: PathBuf,
    /// Zones surviving the post-merge prune.
    pub zone_count: usize,
    /// Distinct isotopes across all surviving zones.
    pub isotope_count: usize,
    pub stats: MergeStats,
}

/// Convert every configured state of one model.
pub fn run_model(config: &ModelConfig) -> Result<Vec<StateResult>> {
    let mut states: Vec<(ModelState, &PathBuf)> = Vec::new();
    if let Some(path) = &config.pre_composition {
        states.push((ModelState::PreCollapse, path));
    }
    if let Some(path) = &config.post_composition {
        states.push((ModelState::PostExplosion, path));
    }
    if states.is_empty() {
        bail!("at least one composition file (--pre or --post) is required");
    }

    let nuclides = load_nuclides(&config.nuclides)
        .with_context(|| format!("load nuclide table {}", config.nuclides.display()))?;

    let mut results = Vec::with_capacity(states.len());
    for (state, composition) in states {
        results.push(convert_state(config, state, composition, &nuclides)?);
    }
    Ok(results)
}

fn convert_state(
    config: &ModelConfig,
    state: ModelState,
    composition: &Path,
    nuclides: &NuclideTable,
) -> Result<StateResult> {
    let state_span = info_span!("convert", state = state.as_str());
    let _state_guard = state_span.enter();
    let state_start = Instant::now();

    let structure_schema = StructureSchema::default();
    let mut zones = read_structure_file(&config.structure, &structure_schema)
        .with_context(|| format!("parse structure {}", config.structure.display()))?;
    let structure_zones = zones.len();

    let stats = read_composition_file(
        &mut zones,
        composition,
        nuclides,
        &CompositionSchema::default(),
    )
    .with_context(|| format!("merge composition {}", composition.display()))?;

    if zones.is_empty() {
        bail!(
            "{}: no zones with composition data after merge; structure and \
             composition files likely do not match",
            composition.display()
        );
    }

    let isotope_count = zones
        .values()
        .flat_map(|record| record.mass_fractions.keys())
        .collect::<BTreeSet<_>>()
        .len();

    let output = config
        .output_dir
        .join(format!("{}.xml", state.file_stem()));
    let options = ZoneDataOptions {
        creation_timestamp: config.creation_timestamp,
    };
    let nuclide_data = config.embed_nuclides.then_some(nuclides);
    write_zone_data(&output, &zones, nuclide_data, &options)
        .with_context(|| format!("write {}", output.display()))?;

    info!(
        state = state.as_str(),
        structure_zones,
        zone_count = zones.len(),
        zones_pruned = stats.zones_pruned,
        isotope_count,
        output = %output.display(),
        duration_ms = state_start.elapsed().as_millis(),
        "state converted"
    );

    Ok(StateResult {
        state,
        composition: composition.to_path_buf(),
        output,
        zone_count: zones.len(),
        isotope_count,
        stats,
    })
}
