use regex::Regex;
use std::path::Path;
use tracing::{debug, instrument};

/// Translates a shell-style glob (`*`, `?`) into an anchored regex.
pub fn glob_to_regex(pattern: &str) -> String {
    let mut regex = String::with_capacity(pattern.len() + 2);
    regex.push('^');
    for ch in pattern.chars() {
        match ch {
            '*' => regex.push_str(".*"),
            '?' => regex.push('.'),
            _ => regex.push_str(&regex::escape(&ch.to_string())),
        }
    }
    regex.push('$');
    regex
}

#[instrument]
pub fn advanced_pattern_match(path: &str, pattern: &str) -> bool {
    match Regex::new(&glob_to_regex(pattern)) {
        Ok(re) => re.is_match(path),
        Err(e) => {
            debug!("Invalid pattern '{}': {}", pattern, e);
            false
        }
    }
}

#[derive(Debug, Clone)]
pub struct PatternMatcher {
    patterns: Vec<Regex>,
}

impl PatternMatcher {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        let patterns = patterns
            .iter()
            .filter_map(|p| match Regex::new(&glob_to_regex(p.as_ref())) {
                Ok(re) => Some(re),
                Err(e) => {
                    debug!("Skipping invalid pattern '{}': {}", p.as_ref(), e);
                    None
                }
            })
            .collect();
        Self { patterns }
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Matches each path component on its own and every trailing run of
    /// components, so `target` and `target/*` both hit
    /// `/work/app/target/debug/app.d`.
    pub fn matches_path(&self, path: &Path) -> bool {
        let components: Vec<String> = path
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();

        let matches = (0..components.len()).any(|i| {
            let suffix = components[i..].join("/");
            self.patterns
                .iter()
                .any(|re| re.is_match(&components[i]) || re.is_match(&suffix))
        });

        if matches {
            debug!("Path '{}' matched a pattern", path.display());
        }
        matches
    }
}
