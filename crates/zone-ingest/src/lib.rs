pub mod composition;
pub mod error;
pub mod nuclides;
pub mod structure;

pub use composition::{
    MASS_BELOW_PROPERTY, MASS_PROPERTY, MergeStats, merge_composition, read_composition_file,
};
pub use error::{ParseError, Result};
pub use nuclides::{load_nuclides, parse_nuclides};
pub use structure::{parse_structure, read_structure_file};
