//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::{TreeSelectError, TreeSelectResult};

use super::types::Config;

/// Project-level config file name
pub const PROJECT_CONFIG_FILE: &str = "treeselect.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> TreeSelectResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| TreeSelectError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    config
        .widget
        .validate()
        .map_err(|e| TreeSelectError::InvalidConfig {
            file: path.to_path_buf(),
            message: match e {
                TreeSelectError::InvalidConfig { message, .. } => message,
                other => other.to_string(),
            },
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
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Load from project config, user config, or defaults
pub fn load_or_default(project_root: Option<&Path>) -> Config {
    let candidates = project_root
        .map(|root| root.join(PROJECT_CONFIG_FILE))
        .into_iter()
        .chain(dirs::config_dir().map(|dir| dir.join("treeselect/config.toml")));

    for path in candidates {
        if !path.exists() {
            continue;
        }
        match Config::load(&path) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                return with_env_overrides(config);
            }
            Err(e) => warn!(path = %path.display(), error = %e, "ignoring unreadable config"),
        }
    }

    with_env_overrides(Config::default())
}

/// Apply environment variable overrides (TREESELECT_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_env_overrides_from(config, |key| std::env::var(key).ok())
}

pub(crate) fn with_env_overrides_from(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // TREESELECT_SECTION_DELIMITER
    if let Some(delimiter) = get_env("TREESELECT_SECTION_DELIMITER") {
        if !delimiter.is_empty() {
            config.widget.section_delimiter = delimiter;
        }
    }

    if let Some(val) = get_env("TREESELECT_FREEZE") {
        config.widget.freeze = parse_flag(&val);
    }

    if let Some(val) = get_env("TREESELECT_ALLOW_BATCH_SELECTION") {
        config.widget.allow_batch_selection = parse_flag(&val);
    }

    if let Some(val) = get_env("TREESELECT_START_COLLAPSED") {
        config.widget.start_collapsed = parse_flag(&val);
    }

    config
}

pub(super) fn parse_flag(val: &str) -> bool {
    let val = val.trim().to_lowercase();
    val != "false" && val != "0" && val != "no" && !val.is_empty()
}

pub(super) fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "widget",
        "allow_batch_selection",
        "collapsible",
        "freeze",
        "hide_side_panel",
        "section_delimiter",
        "show_section_on_selected",
        "start_collapsed",
        "output",
        "ascii",
        "unicode",
    ];

    let mut best: Option<(&str, usize)> = None;
    for &candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
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
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
