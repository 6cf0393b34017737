//! Naming rules and location resolution.
//!
//! The shipped binary only ever uses [`NamingRules::default`]. Alternate rule
//! sets exist so library callers and tests can substitute their own pattern
//! and exemption list without touching the scan loop.

use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidatorError;
use crate::report::Classification;

/// Name of the documentation directory, relative to the anchor directory.
pub const DOCS_DIR_NAME: &str = "docs";

/// Required shape of every non-exempt documentation file name.
pub const DEFAULT_PATTERN: &str = r"^(META|ARCH|SPEC|IMPL|QA)-[A-Za-z]+-[A-Za-z]+\.md$";

/// File names that bypass the pattern check (exact match, in declaration order).
///
/// These are legacy documents that predate the tagged naming scheme.
pub const EXEMPT_FILES: &[&str] = &[
    "00-document-meta.md",
    "01-core-principles.md",
    "02-system-architecture.md",
    "02b-state-machine-specification.md",
    "03-contracts.md",
    "04-testing-architecture.md",
    "05-implementation-plan.md",
    "06-json-example.md",
    // "文档导航.md"
    "\u{6587}\u{6863}\u{5bfc}\u{822a}.md",
    // "模块化说明方案.md"
    "\u{6a21}\u{5757}\u{5316}\u{8bf4}\u{660e}\u{65b9}\u{6848}.md",
];

// DEFAULT_PATTERN is a compile-time constant covered by tests.
#[allow(clippy::expect_used)]
static DEFAULT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(DEFAULT_PATTERN).expect("DEFAULT_PATTERN is a valid regex"));

/// Check a file name against the default naming pattern.
///
/// The whole name must match; exemptions are not consulted.
#[must_use]
pub fn validate_filename(name: &str) -> bool {
    DEFAULT_REGEX.is_match(name)
}

/// A naming pattern plus the exemption list that bypasses it.
#[derive(Debug, Clone)]
pub struct NamingRules {
    pattern: Regex,
    exempt: Vec<String>,
}

impl NamingRules {
    /// Build a custom rule set.
    ///
    /// The pattern is used as given, so callers wanting whole-name matching
    /// must anchor it themselves.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::InvalidPattern`] if `pattern` does not compile.
    pub fn new<I, S>(pattern: &str, exempt: I) -> Result<Self, ValidatorError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let pattern = Regex::new(pattern).map_err(|source| ValidatorError::InvalidPattern {
            pattern: pattern.to_owned(),
            source,
        })?;
        Ok(Self {
            pattern,
            exempt: exempt.into_iter().map(Into::into).collect(),
        })
    }

    /// The pattern source string.
    #[must_use]
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Exempt file names, in declaration order.
    #[must_use]
    pub fn exempt(&self) -> &[String] {
        &self.exempt
    }

    #[must_use]
    pub fn is_exempt(&self, name: &str) -> bool {
        self.exempt.iter().any(|e| e == name)
    }

    #[must_use]
    pub fn matches(&self, name: &str) -> bool {
        self.pattern.is_match(name)
    }

    /// Classify a file name. Exemption is checked before the pattern.
    #[must_use]
    pub fn classify(&self, name: &str) -> Classification {
        if self.is_exempt(name) {
            Classification::Exempt
        } else if self.matches(name) {
            Classification::Valid
        } else {
            Classification::Invalid
        }
    }
}

impl Default for NamingRules {
    fn default() -> Self {
        Self {
            pattern: DEFAULT_REGEX.clone(),
            exempt: EXEMPT_FILES.iter().map(|s| (*s).to_owned()).collect(),
        }
    }
}

/// Resolve the documentation directory for a tool living in `tool_dir`.
///
/// The anchor is the parent of `tool_dir` (or `tool_dir` itself when it has
/// no parent), so a tool at `<repo>/scripts` checks `<repo>/docs`.
#[must_use]
pub fn resolve_docs_dir(tool_dir: &Path) -> PathBuf {
    docs_dir_in(tool_dir.parent().unwrap_or(tool_dir))
}

/// The documentation directory directly under `root`.
#[must_use]
pub fn docs_dir_in(root: &Path) -> PathBuf {
    root.join(DOCS_DIR_NAME)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, clippy::non_ascii_literal)]

    use super::*;

    #[test]
    fn test_validate_filename_accepts_each_tag() {
        for tag in ["META", "ARCH", "SPEC", "IMPL", "QA"] {
            let name = format!("{tag}-Foo-Bar.md");
            assert!(validate_filename(&name), "expected valid: {name}");
        }
        assert!(validate_filename("ARCH-a-b.md"));
        assert!(validate_filename("QA-Regression-SUITE.md"));
    }

    #[test]
    fn test_validate_filename_rejects_single_deviations() {
        let rejected = [
            "spec-a-b.md",       // lowercase tag
            "DOCS-Foo-Bar.md",   // unknown tag
            "ARCHFoo-Bar.md",    // missing first hyphen
            "ARCH-FooBar.md",    // missing second hyphen
            "ARCH-Foo2-Bar.md",  // digit in segment
            "ARCH-Foo-Bar_.md",  // punctuation in segment
            "ARCH--Bar.md",      // empty segment
            "ARCH-Foo-Bar.txt",  // wrong extension
            "ARCH-Foo-Bar.MD",   // extension is case-sensitive
            "ARCH-Foo-Bar-Baz.md",
            "xARCH-Foo-Bar.md",  // leading characters
            "ARCH-Foo-Bar.md~",  // trailing characters
            "ARCH-Foo-Bar.md\n", // trailing newline
            "ARCH-Föö-Bar.md",   // non-ASCII letters
            "README.md",
            "",
        ];
        for name in rejected {
            assert!(!validate_filename(name), "expected invalid: {}", name.escape_debug());
        }
    }

    #[test]
    fn test_default_rules_match_free_function() {
        let rules = NamingRules::default();
        assert_eq!(rules.pattern(), DEFAULT_PATTERN);
        assert_eq!(rules.exempt().len(), EXEMPT_FILES.len());
        for name in ["IMPL-Scan-Loop.md", "readme.md", "QA-x-y.md"] {
            assert_eq!(rules.matches(name), validate_filename(name));
        }
    }

    #[test]
    fn test_exempt_names_bypass_pattern() {
        let rules = NamingRules::default();
        assert_eq!(rules.classify("文档导航.md"), Classification::Exempt);
        assert_eq!(rules.classify("模块化说明方案.md"), Classification::Exempt);
        assert_eq!(rules.classify("03-contracts.md"), Classification::Exempt);
        // exact equality only
        assert_eq!(rules.classify("03-contracts.MD"), Classification::Invalid);
        assert_eq!(rules.classify("x03-contracts.md"), Classification::Invalid);
    }

    #[test]
    fn test_exempt_wins_over_pattern() {
        let rules = NamingRules::new(r"^[a-z]+\.md$", ["readme.md"]).unwrap();
        assert_eq!(rules.classify("readme.md"), Classification::Exempt);
        assert_eq!(rules.classify("guide.md"), Classification::Valid);
        assert_eq!(rules.classify("Guide.md"), Classification::Invalid);
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let err = NamingRules::new("(unclosed", Vec::<String>::new()).unwrap_err();
        assert!(matches!(err, ValidatorError::InvalidPattern { .. }));
        assert!(err.to_string().contains("(unclosed"), "got: {err}");
    }

    #[test]
    fn test_resolve_docs_dir_uses_parent_of_tool_dir() {
        let resolved = resolve_docs_dir(Path::new("/repo/scripts"));
        assert_eq!(resolved, PathBuf::from("/repo/docs"));
        assert_eq!(docs_dir_in(Path::new("/repo")), PathBuf::from("/repo/docs"));
    }

    #[test]
    fn test_resolve_docs_dir_without_parent() {
        assert_eq!(resolve_docs_dir(Path::new("/")), PathBuf::from("/docs"));
    }
}
