//! Watchface Archive Document
//!
//! A `.watchface` file is a ZIP archive with a fixed member layout:
//!
//! - `face.json`: customization record
//! - `metadata.json`: complication names and sample templates
//! - `snapshot.png` / `no_borders_snapshot.png`: preview images
//! - `Resources/Images.plist`: binary-plist manifest of image entries
//! - `Resources/<key>`: one member per resource payload
//!
//! Decoding composes the member decodes into one [`Watchface`] value; any
//! member failure fails the whole decode, so a partial document is never
//! observable. Encoding is the structural inverse.

use std::collections::HashMap;
use std::io::{Cursor, Read, Write};

use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::error::{DecodeError, Error, Result};
use crate::face::Face;
use crate::metadata::Metadata;
use crate::resources::Resources;

const FACE_MEMBER: &str = "face.json";
const METADATA_MEMBER: &str = "metadata.json";
const SNAPSHOT_MEMBER: &str = "snapshot.png";
const NO_BORDERS_SNAPSHOT_MEMBER: &str = "no_borders_snapshot.png";
const IMAGE_MANIFEST_MEMBER: &str = "Resources/Images.plist";
const RESOURCES_PREFIX: &str = "Resources/";

/// An in-memory watchface document.
///
/// Constructed by [`Watchface::from_bytes`] and mutated in place through
/// the field APIs; the archive on storage is the only durable state. The
/// model holds owned data only and does no locking of its own — a caller
/// sharing one value across threads serializes access around it.
#[derive(Debug, Clone, PartialEq)]
pub struct Watchface {
    /// Bordered preview image bytes
    pub snapshot: Vec<u8>,
    /// Borderless preview image bytes
    pub no_borders_snapshot: Vec<u8>,
    pub resources: Resources,
    pub metadata: Metadata,
    pub face: Face,
}

impl Watchface {
    /// Decode a watchface document from archive bytes.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// use watchface::Watchface;
    /// use std::fs;
    ///
    /// let data = fs::read("MyFace.watchface")?;
    /// let watchface = Watchface::from_bytes(&data)?;
    /// println!("face type: {}", watchface.face.face_type.as_str());
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let mut members = read_members(bytes)?;

        let face_bytes = take_member(&mut members, FACE_MEMBER)?;
        let face: Face = serde_json::from_slice(&face_bytes)
            .map_err(|e| DecodeError::classify(FACE_MEMBER, e))?;

        let metadata_bytes = take_member(&mut members, METADATA_MEMBER)?;
        let metadata: Metadata = serde_json::from_slice(&metadata_bytes)
            .map_err(|e| DecodeError::classify(METADATA_MEMBER, e))?;

        let snapshot = take_member(&mut members, SNAPSHOT_MEMBER)?;
        let no_borders_snapshot = take_member(&mut members, NO_BORDERS_SNAPSHOT_MEMBER)?;

        let manifest_bytes = take_member(&mut members, IMAGE_MANIFEST_MEMBER)?;
        let images = Resources::decode_manifest(&manifest_bytes).map_err(|e| {
            DecodeError::MalformedField {
                member: IMAGE_MANIFEST_MEMBER.to_string(),
                detail: e.to_string(),
            }
        })?;

        let files: HashMap<String, Vec<u8>> = members
            .into_iter()
            .filter_map(|(name, data)| {
                name.strip_prefix(RESOURCES_PREFIX)
                    .map(|key| (key.to_string(), data))
            })
            .collect();

        Ok(Watchface {
            snapshot,
            no_borders_snapshot,
            resources: Resources::from_parts(images, files),
            metadata,
            face,
        })
    }

    /// Encode the document back to archive bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        let mut writer = ZipWriter::new(&mut buffer);
        let options = SimpleFileOptions::default();

        let face_json = serde_json::to_vec(&self.face)
            .map_err(|e| Error::Encode(format!("{}: {}", FACE_MEMBER, e)))?;
        write_member(&mut writer, FACE_MEMBER, &face_json, options)?;

        let metadata_json = serde_json::to_vec(&self.metadata)
            .map_err(|e| Error::Encode(format!("{}: {}", METADATA_MEMBER, e)))?;
        write_member(&mut writer, METADATA_MEMBER, &metadata_json, options)?;

        write_member(&mut writer, SNAPSHOT_MEMBER, &self.snapshot, options)?;
        write_member(
            &mut writer,
            NO_BORDERS_SNAPSHOT_MEMBER,
            &self.no_borders_snapshot,
            options,
        )?;

        let manifest = self
            .resources
            .encode_manifest()
            .map_err(|e| Error::Encode(format!("{}: {}", IMAGE_MANIFEST_MEMBER, e)))?;
        write_member(&mut writer, IMAGE_MANIFEST_MEMBER, &manifest, options)?;

        for key in self.resources.payload_keys() {
            let name = format!("{}{}", RESOURCES_PREFIX, key);
            // payload_keys only yields keys present in the store
            if let Some(data) = self.resources.resolve(key) {
                write_member(&mut writer, &name, data, options)?;
            }
        }

        writer
            .finish()
            .map_err(|e| Error::Zip(format!("Failed to finalize archive: {}", e)))?;
        Ok(buffer.into_inner())
    }
}

/// Read every file member of the archive into memory.
fn read_members(bytes: &[u8]) -> Result<HashMap<String, Vec<u8>>> {
    let cursor = Cursor::new(bytes);
    let mut archive = ZipArchive::new(cursor)
        .map_err(|e| Error::Zip(format!("Not a watchface archive: {}", e)))?;

    let mut members = HashMap::new();
    for i in 0..archive.len() {
        let mut file = archive
            .by_index(i)
            .map_err(|e| Error::Zip(format!("Failed to read archive entry: {}", e)))?;
        if file.is_dir() {
            continue;
        }
        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data).map_err(Error::Io)?;
        members.insert(file.name().to_string(), data);
    }
    Ok(members)
}

fn take_member(members: &mut HashMap<String, Vec<u8>>, name: &str) -> Result<Vec<u8>> {
    members
        .remove(name)
        .ok_or_else(|| DecodeError::MissingRequiredField(name.to_string()).into())
}

fn write_member<W: Write + std::io::Seek>(
    writer: &mut ZipWriter<W>,
    name: &str,
    data: &[u8],
    options: SimpleFileOptions,
) -> Result<()> {
    writer
        .start_file(name, options)
        .map_err(|e| Error::Zip(format!("Failed to start member {}: {}", name, e)))?;
    writer.write_all(data).map_err(Error::Io)?;
    Ok(())
}
