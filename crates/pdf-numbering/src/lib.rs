pub mod compose;
pub mod constants;
pub mod fonts;
pub mod generate;
pub mod layout;
pub mod marks;
mod options;
pub mod render;
pub mod sequence;
mod stats;
mod types;
pub mod units;

pub use compose::{DrawOp, PageDrawOps, compose_pages};
pub use generate::{
    GeneratedDocument, GenerationPlan, ImageAsset, SavedDocument, decode_image, generate,
    generate_to_dir, generate_to_path, load_image, plan, save_pdf,
};
pub use layout::{GridDescriptor, compute_grid};
pub use options::*;
pub use render::{emit_document, output_file_name};
pub use sequence::{NumberingSequence, generate_sequence};
pub use stats::{NumberingStatistics, calculate_statistics};
pub use types::*;
