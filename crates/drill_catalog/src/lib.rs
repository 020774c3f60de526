//! Drill Catalog Library
//!
//! 코퍼스 → 드릴 카탈로그 (JSON) → MessagePack → LZ4 압축 → SHA256 체크섬
//!
//! - `corpus`: pre-extracted session-plan text on disk
//! - `report`: text rendering of a catalog summary

pub mod corpus;
pub mod report;

use anyhow::{Context, Result};
use drill_core::{ensure_unique_ids, sort_catalog, DrillRecord, DEFAULT_AGE_ORDER};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

pub use corpus::{load_corpus, load_document};
pub use report::render_report;

/// Catalog output settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub output: PathBuf,
    /// Sort order of age groups; unlisted groups go last
    pub age_order: Vec<String>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("drills.json"),
            age_order: DEFAULT_AGE_ORDER.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Sort and make identities unique; returns the number of renamed records
pub fn finalize_catalog(records: &mut [DrillRecord], config: &CatalogConfig) -> usize {
    sort_catalog(records, &config.age_order);
    ensure_unique_ids(records)
}

/// Summary of a written pack, saved next to it by the `pack` command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PackMetadata {
    /// e.g. "v1"
    pub schema_version: String,
    /// SHA256 of the compressed bytes (hex)
    pub checksum: String,
    /// RFC3339, UTC
    pub created_at: String,
    pub drill_count: usize,
    /// Catalog JSON size (bytes)
    pub original_size: u64,
    /// Pack file size (bytes)
    pub compressed_size: u64,
    /// compressed / original
    pub compression_ratio: f64,
}

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// MessagePack, then LZ4 with the uncompressed length in front
fn encode_pack(catalog: &serde_json::Value) -> Result<Vec<u8>> {
    let msgpack = rmp_serde::to_vec(catalog).context("Failed to serialize to MessagePack")?;
    Ok(lz4_flex::compress_prepend_size(&msgpack))
}

fn decode_pack(bytes: &[u8]) -> Result<serde_json::Value> {
    let msgpack = lz4_flex::decompress_size_prepended(bytes).context("Failed to decompress LZ4")?;
    rmp_serde::from_slice(&msgpack).context("Failed to deserialize MessagePack")
}

/// 카탈로그 JSON 파일을 팩으로 저장하고 메타데이터를 돌려준다.
///
/// The input must deserialize as a list of drill records; any other JSON is
/// rejected before anything is written.
pub fn pack_catalog(input_json: &Path, output_pack: &Path, schema_version: &str) -> Result<PackMetadata> {
    let json_str = fs::read_to_string(input_json)
        .with_context(|| format!("Failed to read catalog file: {}", input_json.display()))?;
    let catalog: serde_json::Value = serde_json::from_str(&json_str).context("Failed to parse JSON")?;
    let drill_count = serde_json::from_value::<Vec<DrillRecord>>(catalog.clone())
        .with_context(|| format!("Not a drill catalog: {}", input_json.display()))?
        .len();

    let packed = encode_pack(&catalog)?;

    if let Some(dir) = output_pack.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;
    }
    fs::write(output_pack, &packed)
        .with_context(|| format!("Failed to write pack file: {}", output_pack.display()))?;

    let original_size = json_str.len() as u64;
    let compressed_size = packed.len() as u64;
    info!(drills = drill_count, bytes = compressed_size, path = %output_pack.display(), "catalog packed");

    Ok(PackMetadata {
        schema_version: schema_version.to_string(),
        checksum: sha256_hex(&packed),
        created_at: chrono::Utc::now().to_rfc3339(),
        drill_count,
        original_size,
        compressed_size,
        compression_ratio: compressed_size as f64 / original_size.max(1) as f64,
    })
}

/// Does the pack on disk still hash to `expected_checksum`?
pub fn verify_pack(pack_file: &Path, expected_checksum: &str) -> Result<bool> {
    let bytes = fs::read(pack_file)
        .with_context(|| format!("Failed to read pack file: {}", pack_file.display()))?;
    Ok(sha256_hex(&bytes) == expected_checksum)
}

/// 팩 파일에서 드릴 레코드 복원
pub fn load_pack(pack_file: &Path) -> Result<Vec<DrillRecord>> {
    let bytes = fs::read(pack_file)
        .with_context(|| format!("Failed to read pack file: {}", pack_file.display()))?;
    let catalog = decode_pack(&bytes)?;
    serde_json::from_value(catalog).context("Pack does not contain a drill catalog")
}
