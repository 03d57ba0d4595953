pub mod axes;
pub mod detection;
pub mod projection;

// Re-export key types
pub use axes::{candidate_axes, filter_unique_normals};
pub use detection::*;
pub use projection::{intervals_overlap, project_shape, project_vertices, Projection};
