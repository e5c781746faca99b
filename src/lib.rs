//! Watchface - A Rust library for inspecting and editing Apple Watch face archives
//!
//! A `.watchface` archive bundles everything describing one watch face: the
//! customization record, complication metadata with sample-text templates,
//! preview snapshots, and the embedded media resources (photos and short
//! looping videos) the face displays.
//!
//! # Features
//!
//! - **Archive codec**: Decode and re-encode the ZIP container with its
//!   JSON and binary-plist members, preserving the format's multi-word wire
//!   keys exactly
//! - **Typed document model**: Closed tagged unions for face types, text
//!   providers, and sample templates, so unknown format extensions fail
//!   loudly instead of decoding wrong
//! - **Resource consistency engine**: Transactional add/replace/remove
//!   operations that keep the image manifest and the payload map coherent
//! - **Sample-text rendering**: Pure rendering of complication sample
//!   strings from text-provider trees
//!
//! # Example - Inspecting a watchface
//!
//! ```no_run
//! use watchface::Watchface;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("MyFace.watchface")?;
//! let watchface = Watchface::from_bytes(&data)?;
//!
//! println!("face type: {}", watchface.face.face_type.as_str());
//! println!("images: {}", watchface.resources.len());
//! if let Some(template) = &watchface.metadata.complication_sample_templates.top {
//!     println!("top sample: {}", template.sample_text());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Editing resources
//!
//! ```no_run
//! use watchface::Watchface;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = std::fs::read("MyFace.watchface")?;
//! let mut watchface = Watchface::from_bytes(&data)?;
//!
//! // Swap the first picture and give it a video overlay.
//! let jpeg = std::fs::read("photo.jpg")?;
//! let movie = std::fs::read("loop.mov")?;
//! watchface.resources.set_image(0, Some(jpeg))?;
//! watchface.resources.set_video(0, Some(movie))?;
//!
//! std::fs::write("MyFace.watchface", watchface.to_bytes()?)?;
//! # Ok(())
//! # }
//! ```

/// The aggregate document and the archive decode/encode boundary
pub mod document;

/// Unified error types
pub mod error;

/// The face customization record (`face.json`)
pub mod face;

/// Complication names and sample templates (`metadata.json`)
pub mod metadata;

/// The embedded-media store and its consistency engine (`Resources/`)
pub mod resources;

/// Sample-text provider primitives
pub mod text_provider;

// Re-export commonly used types for convenience
pub use document::Watchface;
pub use error::{DecodeError, Error, ResourceError, Result};
pub use face::{ComplicationItem, Complications, Customization, Face, FaceType};
pub use metadata::{ComplicationSampleTemplate, Metadata};
pub use resources::{ImageEntry, Resources};
pub use text_provider::TextProvider;
