//! Icon styles and size-variant selection

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;

/// A named icon rendering variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Regular,
    Filled,
}

impl Style {
    /// Every style, in index order.
    pub const ALL: [Style; 2] = [Style::Regular, Style::Filled];

    /// Lowercase token used in SVG filenames.
    pub fn token(self) -> &'static str {
        match self {
            Style::Regular => "regular",
            Style::Filled => "filled",
        }
    }
}

/// Matches `<icon>_<size>_<style>.svg` filenames for one style.
#[derive(Debug, Clone)]
pub struct StyleMatcher {
    style: Style,
    pattern: Regex,
}

impl StyleMatcher {
    pub fn new(style: Style) -> Result<Self> {
        let raw = format!(r"_([0-9]+)_{}\.svg$", regex::escape(style.token()));
        let pattern = Regex::new(&raw).with_context(|| format!("invalid style pattern: {raw}"))?;
        Ok(Self { style, pattern })
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// Size token of a matching filename, as written.
    pub fn size_of<'a>(&self, file_name: &'a str) -> Option<&'a str> {
        self.pattern
            .captures(file_name)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }

    /// Smallest-size match. The first of several equal sizes wins.
    pub fn smallest<'a, I, S>(&self, file_names: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<str> + 'a + ?Sized,
    {
        let mut best: Option<(&'a str, &'a str)> = None;

        for name in file_names {
            let name = name.as_ref();
            let Some(size) = self.size_of(name) else {
                continue;
            };
            let smaller = match best {
                Some((best_size, _)) => cmp_decimal(size, best_size) == Ordering::Less,
                None => true,
            };
            if smaller {
                best = Some((size, name));
            }
        }

        best.map(|(_, name)| name)
    }
}

/// Compare two ASCII digit strings numerically, whatever their length.
fn cmp_decimal(a: &str, b: &str) -> Ordering {
    let a = a.trim_start_matches('0');
    let b = b.trim_start_matches('0');
    a.len().cmp(&b.len()).then_with(|| a.cmp(b))
}

/// Names of `.svg` files directly under `dir`, sorted.
pub fn list_svg_files(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("listing {}", dir.display()))?;
        let Some(name) = entry.file_name().to_str().map(str::to_owned) else {
            continue;
        };
        if !name.ends_with(".svg") {
            continue;
        }
        if entry.path().is_file() {
            names.push(name);
        }
    }

    names.sort();
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cmp::Ordering;
    use tempfile::tempdir;

    fn matcher(style: Style) -> StyleMatcher {
        StyleMatcher::new(style).expect("pattern")
    }

    #[test]
    fn tokens_are_lowercase() {
        assert_eq!(Style::Regular.token(), "regular");
        assert_eq!(Style::Filled.token(), "filled");
        assert_eq!(Style::ALL, [Style::Regular, Style::Filled]);
    }

    #[test]
    fn extracts_size_for_matching_style_only() {
        let regular = matcher(Style::Regular);
        assert_eq!(regular.size_of("arrow-up_24_regular.svg"), Some("24"));
        assert_eq!(regular.size_of("arrow-up_24_filled.svg"), None);
        assert_eq!(regular.size_of("arrow-up_24_Regular.svg"), None);
        assert_eq!(regular.size_of("arrow-up_regular.svg"), None);
        assert_eq!(regular.size_of("arrow-up_24_regular.svg.bak"), None);
    }

    #[test]
    fn picks_numerically_smallest() {
        let names = ["a_24_regular.svg", "a_100_regular.svg", "a_9_regular.svg"];
        assert_eq!(
            matcher(Style::Regular).smallest(names.iter().copied()),
            Some("a_9_regular.svg")
        );
    }

    #[test]
    fn ties_go_to_the_first_name() {
        let names = ["a_016_regular.svg", "b_16_regular.svg"];
        assert_eq!(
            matcher(Style::Regular).smallest(names.iter().copied()),
            Some("a_016_regular.svg")
        );
    }

    #[test]
    fn no_match_yields_none() {
        let names = ["a_16_filled.svg"];
        assert_eq!(matcher(Style::Regular).smallest(names.iter().copied()), None);
    }

    #[test]
    fn decimal_comparison_ignores_width() {
        assert_eq!(cmp_decimal("9", "10"), Ordering::Less);
        assert_eq!(cmp_decimal("0010", "10"), Ordering::Equal);
        assert_eq!(
            cmp_decimal("99999999999999999999999", "100000000000000000000000"),
            Ordering::Less
        );
    }

    #[test]
    fn lists_svg_files_sorted() {
        let tmp = tempdir().expect("tempdir");
        for name in ["b_16_regular.svg", "a_16_regular.svg", ".a_12_regular.svg", "notes.txt"] {
            fs::write(tmp.path().join(name), b"<svg/>").expect("touch");
        }
        fs::create_dir(tmp.path().join("nested.svg")).expect("mkdir");

        let names = list_svg_files(tmp.path()).expect("list");
        assert_eq!(names, [".a_12_regular.svg", "a_16_regular.svg", "b_16_regular.svg"]);
    }
}
