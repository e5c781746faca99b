//! Resource Store
//!
//! Embedded media lives under `Resources/` in the archive: a binary-plist
//! manifest (`Images.plist`) listing the image entries, plus one member per
//! resource key holding raw payload bytes. Both places reference payloads
//! indirectly through string keys, and every mutation has to keep the two
//! sides coherent:
//!
//! - a key that denotes present media always resolves in the payload map
//!   (absence means "no media for that slot", never an error);
//! - `isIris` mirrors whether the entry's video key has payload, and is
//!   updated in the same operation as the payload itself;
//! - keys are minted once per entry and never reused within a document.
//!
//! All mutations give the strong guarantee: a failing call leaves the store
//! exactly as it was.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ResourceError;

/// One row of the `Images.plist` manifest.
///
/// The `isIris` flag is denormalized stored state, not a derived value: it
/// is decoded and re-encoded verbatim so a document round-trips exactly,
/// and only the mutation API keeps it synchronized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageEntry {
    #[serde(rename = "imageURL")]
    pub image_url: String,
    #[serde(rename = "irisVideoURL")]
    pub iris_video_url: String,
    #[serde(rename = "isIris")]
    pub is_iris: bool,
}

/// Manifest wrapper matching the on-disk plist shape.
#[derive(Debug, Serialize, Deserialize)]
struct ImageList {
    #[serde(rename = "imageList")]
    image_list: Vec<ImageEntry>,
}

/// The media bucket of a watchface document.
#[derive(Debug, Clone)]
pub struct Resources {
    images: Vec<ImageEntry>,
    files: HashMap<String, Vec<u8>>,
    max_images: usize,
}

/// Equality covers document state only. The image ceiling is session
/// configuration that never reaches the archive, so a decoded store
/// compares equal to the one it was encoded from regardless of ceiling.
impl PartialEq for Resources {
    fn eq(&self, other: &Self) -> bool {
        self.images == other.images && self.files == other.files
    }
}

impl Default for Resources {
    fn default() -> Self {
        Resources::new()
    }
}

impl Resources {
    /// Device-model image ceiling used unless overridden; the photos face
    /// stores at most ten pictures.
    pub const DEFAULT_MAX_IMAGES: usize = 10;

    /// Create an empty store with the default image ceiling.
    pub fn new() -> Self {
        Resources::with_max_images(Resources::DEFAULT_MAX_IMAGES)
    }

    /// Create an empty store with a custom image ceiling.
    pub fn with_max_images(max_images: usize) -> Self {
        Resources {
            images: Vec::new(),
            files: HashMap::new(),
            max_images,
        }
    }

    /// Rebuild a store from decoded archive state, preserving entry order
    /// and the stored `isIris` flags as written.
    pub(crate) fn from_parts(images: Vec<ImageEntry>, files: HashMap<String, Vec<u8>>) -> Self {
        Resources {
            images,
            files,
            max_images: Resources::DEFAULT_MAX_IMAGES,
        }
    }

    /// The image entries, in manifest order.
    pub fn images(&self) -> &[ImageEntry] {
        &self.images
    }

    /// Number of image entries.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Whether the store has no image entries.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// The configured image ceiling.
    pub fn max_images(&self) -> usize {
        self.max_images
    }

    /// Look up the payload stored under a resource key.
    pub fn resolve(&self, key: &str) -> Option<&[u8]> {
        self.files.get(key).map(Vec::as_slice)
    }

    /// Payload of the still image at `index`, if any.
    pub fn image_bytes(&self, index: usize) -> Option<&[u8]> {
        self.resolve(&self.images.get(index)?.image_url)
    }

    /// Payload of the video overlay at `index`, if any.
    pub fn video_bytes(&self, index: usize) -> Option<&[u8]> {
        self.resolve(&self.images.get(index)?.iris_video_url)
    }

    /// Append a new image entry with freshly minted keys and return its
    /// image key. `image` is stored under that key when present.
    pub fn add_image(&mut self, image: Option<Vec<u8>>) -> Result<String, ResourceError> {
        if self.images.len() >= self.max_images {
            return Err(ResourceError::CapacityExceeded {
                max: self.max_images,
            });
        }
        let entry = ImageEntry {
            image_url: fresh_key("jpg"),
            iris_video_url: fresh_key("mov"),
            is_iris: false,
        };
        let key = entry.image_url.clone();
        if let Some(bytes) = image {
            self.files.insert(key.clone(), bytes);
        }
        self.images.push(entry);
        Ok(key)
    }

    /// Replace or clear the still-image payload of the entry at `index`.
    ///
    /// `None` removes the payload outright rather than leaving a stale
    /// empty member in the archive.
    pub fn set_image(&mut self, index: usize, image: Option<Vec<u8>>) -> Result<(), ResourceError> {
        let entry = self.entry(index)?;
        let key = entry.image_url.clone();
        match image {
            Some(bytes) => {
                self.files.insert(key, bytes);
            }
            None => {
                self.files.remove(&key);
            }
        }
        Ok(())
    }

    /// Replace or clear the video payload of the entry at `index`, keeping
    /// `isIris` in lockstep within the same operation.
    pub fn set_video(&mut self, index: usize, video: Option<Vec<u8>>) -> Result<(), ResourceError> {
        self.entry(index)?;
        let has_video = video.is_some();
        if let Some(bytes) = video {
            // Entries decoded from older documents can carry an empty video
            // key; mint one before the first payload lands on it.
            if self.images[index].iris_video_url.is_empty() {
                self.images[index].iris_video_url = fresh_key("mov");
            }
            self.files
                .insert(self.images[index].iris_video_url.clone(), bytes);
        } else {
            let key = self.images[index].iris_video_url.clone();
            if !key.is_empty() {
                self.files.remove(&key);
            }
        }
        self.images[index].is_iris = has_video;
        Ok(())
    }

    /// Remove the entry at `index` together with both of its payloads.
    ///
    /// The removal is transactional: after a successful call neither key
    /// remains in the payload map, and a failing call changes nothing. An
    /// orphaned payload would silently bloat the archive.
    pub fn remove_image(&mut self, index: usize) -> Result<ImageEntry, ResourceError> {
        self.entry(index)?;
        let removed = self.images.remove(index);
        self.files.remove(&removed.image_url);
        self.files.remove(&removed.iris_video_url);
        Ok(removed)
    }

    /// Parse the `Images.plist` manifest bytes.
    pub(crate) fn decode_manifest(bytes: &[u8]) -> Result<Vec<ImageEntry>, plist::Error> {
        plist::from_bytes::<ImageList>(bytes).map(|list| list.image_list)
    }

    /// Serialize the manifest back to binary plist bytes.
    pub(crate) fn encode_manifest(&self) -> Result<Vec<u8>, plist::Error> {
        let list = ImageList {
            image_list: self.images.clone(),
        };
        let mut bytes = Vec::new();
        plist::to_writer_binary(&mut bytes, &list)?;
        Ok(bytes)
    }

    /// Resource keys with payload, in sorted order for deterministic output.
    pub(crate) fn payload_keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.files.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    fn entry(&self, index: usize) -> Result<&ImageEntry, ResourceError> {
        self.images.get(index).ok_or(ResourceError::IndexOutOfRange {
            index,
            len: self.images.len(),
        })
    }
}

/// Mint a never-before-used resource key.
fn fresh_key(extension: &str) -> String {
    format!("{}.{}", Uuid::new_v4().to_string().to_uppercase(), extension)
}
