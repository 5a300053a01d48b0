use std::collections::{BTreeMap, BTreeSet};
use std::env;
use std::path::{Path, PathBuf};

use url::Url;

// Parsed with dotenv rules: `$NAME` in an unquoted value is expanded, so a
// page URL containing `$` must be single-quoted (`pages='https://a/$x'`).
pub const DEFAULT_CONFIG_PATH: &str = "pagewatch.properties";
pub const DEFAULT_MIN_PAGES: usize = 0;
pub const DEFAULT_MAX_PAGES: usize = 3;

const KEY_PAGES: &str = "pages";
const KEY_MIN_PAGES: &str = "min_pages";
const KEY_MAX_PAGES: &str = "max_pages";

/// Settings for one run, merged from the properties file and the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchConfig {
    pub path: PathBuf,
    pub pages: BTreeSet<String>,
    pub min_pages: usize,
    pub max_pages: usize,
}

#[derive(Debug)]
pub enum ConfigError {
    NotFound(PathBuf),
    Read { path: PathBuf, source: dotenvy::Error },
    MissingKey(&'static str),
    InvalidUrl { url: String, source: url::ParseError },
    InvalidNumber { key: &'static str, value: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NotFound(path) => write!(f, "unable to find {}", path.display()),
            ConfigError::Read { path, source } => write!(f, "error loading {}: {source}", path.display()),
            ConfigError::MissingKey(key) => write!(f, "missing required property `{key}`"),
            ConfigError::InvalidUrl { url, source } => write!(f, "invalid page URL {url:?}: {source}"),
            ConfigError::InvalidNumber { key, value } => {
                write!(f, "property `{key}` must be a non-negative integer, got {value:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read { source, .. } => Some(source),
            ConfigError::InvalidUrl { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Resolve the properties file: explicit flag, then `PAGEWATCH_CONFIG`, then the default.
pub fn resolve_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| env::var("PAGEWATCH_CONFIG").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

/// Load `path` and apply `PAGEWATCH_*` environment overrides.
pub fn load(path: &Path) -> Result<WatchConfig, ConfigError> {
    let lookup = |key: &str| env::var(key).ok();
    let props = match read_properties(path) {
        Ok(props) => props,
        // the page list can come entirely from the environment
        Err(ConfigError::NotFound(_)) if lookup("PAGEWATCH_PAGES").is_some() => BTreeMap::new(),
        Err(e) => return Err(e),
    };
    from_properties(path, &props, lookup)
}

fn read_properties(path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let iter = dotenvy::from_path_iter(path).map_err(|e| {
        if e.not_found() { ConfigError::NotFound(path.to_path_buf()) }
        else { ConfigError::Read { path: path.to_path_buf(), source: e } }
    })?;
    let mut props = BTreeMap::new();
    for item in iter {
        let (key, value) = item.map_err(|e| ConfigError::Read { path: path.to_path_buf(), source: e })?;
        props.insert(key, value);
    }
    Ok(props)
}

fn from_properties<F>(path: &Path, props: &BTreeMap<String, String>, lookup: F) -> Result<WatchConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &'static str, env_key: &str| lookup(env_key).or_else(|| props.get(key).cloned());

    let raw_pages = get(KEY_PAGES, "PAGEWATCH_PAGES").ok_or(ConfigError::MissingKey(KEY_PAGES))?;
    let pages = parse_pages(&raw_pages)?;
    let min_pages = parse_count(KEY_MIN_PAGES, get(KEY_MIN_PAGES, "PAGEWATCH_MIN_PAGES"), DEFAULT_MIN_PAGES)?;
    let max_pages = parse_count(KEY_MAX_PAGES, get(KEY_MAX_PAGES, "PAGEWATCH_MAX_PAGES"), DEFAULT_MAX_PAGES)?;

    Ok(WatchConfig { path: path.to_path_buf(), pages, min_pages, max_pages })
}

/// Split a comma-separated page list. Blank entries are skipped and
/// duplicates collapse into one.
pub fn parse_pages(raw: &str) -> Result<BTreeSet<String>, ConfigError> {
    let mut pages = BTreeSet::new();
    for entry in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        Url::parse(entry).map_err(|source| ConfigError::InvalidUrl { url: entry.to_string(), source })?;
        pages.insert(entry.to_string());
    }
    Ok(pages)
}

fn parse_count(key: &'static str, value: Option<String>, default: usize) -> Result<usize, ConfigError> {
    match value {
        None => Ok(default),
        Some(v) => v.trim().parse::<usize>().map_err(|_| ConfigError::InvalidNumber { key, value: v }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    fn no_env(_: &str) -> Option<String> { None }

    #[test]
    fn pages_are_trimmed_and_deduplicated() {
        let pages = parse_pages(" https://h3hota.com/ ,https://stalkerportaal.ru/,,https://h3hota.com/").unwrap();
        assert_eq!(pages.len(), 2);
        assert!(pages.contains("https://h3hota.com/"));
        assert!(pages.contains("https://stalkerportaal.ru/"));
    }

    #[test]
    fn invalid_url_is_rejected() {
        let err = parse_pages("https://h3hota.com/,not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidUrl { ref url, .. } if url == "not a url"));
    }

    #[test]
    fn empty_list_is_allowed() {
        assert!(parse_pages(" , ").unwrap().is_empty());
    }

    #[test]
    fn defaults_apply_when_bounds_absent() {
        let cfg = from_properties(Path::new("x"), &props(&[("pages", "https://h3hota.com/")]), no_env).unwrap();
        assert_eq!(cfg.min_pages, DEFAULT_MIN_PAGES);
        assert_eq!(cfg.max_pages, DEFAULT_MAX_PAGES);
        assert_eq!(cfg.pages.len(), 1);
    }

    #[test]
    fn environment_overrides_file() {
        let file = props(&[("pages", "https://h3hota.com/"), ("max_pages", "5")]);
        let env = |key: &str| match key {
            "PAGEWATCH_PAGES" => Some("https://stalkerportaal.ru/".to_string()),
            "PAGEWATCH_MIN_PAGES" => Some("1".to_string()),
            _ => None,
        };
        let cfg = from_properties(Path::new("x"), &file, env).unwrap();
        assert!(cfg.pages.contains("https://stalkerportaal.ru/"));
        assert!(!cfg.pages.contains("https://h3hota.com/"));
        assert_eq!(cfg.min_pages, 1);
        assert_eq!(cfg.max_pages, 5);
    }

    #[test]
    fn missing_pages_key_is_an_error() {
        let err = from_properties(Path::new("x"), &props(&[("max_pages", "2")]), no_env).unwrap_err();
        assert!(matches!(err, ConfigError::MissingKey("pages")));
    }

    #[test]
    fn non_numeric_bound_is_an_error() {
        let file = props(&[("pages", "https://h3hota.com/"), ("min_pages", "few")]);
        let err = from_properties(Path::new("x"), &file, no_env).unwrap_err();
        assert!(err.to_string().contains("min_pages"));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = read_properties(Path::new("definitely/not/here.properties")).unwrap_err();
        assert!(matches!(err, ConfigError::NotFound(_)));
        assert!(err.to_string().contains("here.properties"));
    }

    #[test]
    fn reads_properties_file() {
        let path = env::temp_dir().join(format!("pagewatch-{}.properties", std::process::id()));
        std::fs::write(&path, "# monitored pages\npages=https://h3hota.com/,https://www.moddb.com/games/dawn-of-war/\nmax_pages=2\n").unwrap();
        let props = read_properties(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        let cfg = from_properties(&path, &props, no_env).unwrap();
        assert_eq!(cfg.pages.len(), 2);
        assert_eq!(cfg.max_pages, 2);
    }

    #[test]
    fn single_quoted_dollar_is_kept_literally() {
        let path = env::temp_dir().join(format!("pagewatch-dollar-{}.properties", std::process::id()));
        std::fs::write(&path, "pages='https://h3hota.com/?q=$HOME'\n").unwrap();
        let props = read_properties(&path).unwrap();
        let _ = std::fs::remove_file(&path);

        assert_eq!(props.get("pages").map(String::as_str), Some("https://h3hota.com/?q=$HOME"));
    }
}
