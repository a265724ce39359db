//! Mansion file loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{DetectiveError, DetectiveResult};

use super::types::MansionConfig;

/// Environment variable naming a mansion file
pub const MANSION_ENV: &str = "DETECTIVE_MANSION";

/// Where the mansion comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MansionSource {
    Builtin,
    File(PathBuf),
}

impl MansionSource {
    pub fn load_with_warnings(&self) -> DetectiveResult<(MansionConfig, Vec<ConfigWarning>)> {
        match self {
            MansionSource::Builtin => MansionConfig::builtin().map(|config| (config, Vec::new())),
            MansionSource::File(path) => load_with_warnings(path),
        }
    }

    pub fn describe(&self) -> String {
        match self {
            MansionSource::Builtin => "built-in mansion".to_string(),
            MansionSource::File(path) => path.display().to_string(),
        }
    }
}

/// Non-fatal configuration warning surfaced to players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Pick the mansion source: flag, then `DETECTIVE_MANSION`, then built-in.
pub fn resolve_source(flag: Option<PathBuf>) -> MansionSource {
    resolve_source_with(flag, |key| std::env::var(key).ok())
}

pub fn resolve_source_with(
    flag: Option<PathBuf>,
    get_env: impl Fn(&str) -> Option<String>,
) -> MansionSource {
    if let Some(path) = flag {
        return MansionSource::File(path);
    }
    match get_env(MANSION_ENV) {
        Some(path) if !path.trim().is_empty() => MansionSource::File(PathBuf::from(path.trim())),
        _ => MansionSource::Builtin,
    }
}

/// Load a mansion file and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> DetectiveResult<(MansionConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(&content, path)
}

/// Parse mansion TOML; `file` is only used in messages.
pub fn parse_with_warnings(
    content: &str,
    file: &Path,
) -> DetectiveResult<(MansionConfig, Vec<ConfigWarning>)> {
    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(content);

    let config: MansionConfig = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| DetectiveError::InvalidMansionFile {
        file: file.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: file.to_path_buf(),
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "title", "buckets", "rooms", "name", "clue", "parent", "side", "suspects", "suspect",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        match best {
            Some((_, best_dist)) if best_dist <= dist => {}
            _ => best = Some((candidate, dist)),
        }
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
