use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// Error when a tool, format or algorithm name cannot be resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownNameError {
    /// What kind of name was being parsed ("escape type", "hash algorithm", ...)
    pub kind: &'static str,
    pub name: String,
    pub suggestion: Option<String>,
}

impl UnknownNameError {
    pub fn new(kind: &'static str, name: impl Into<String>, suggestion: Option<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            suggestion,
        }
    }

    /// Build the error and look up a suggestion among `candidates`.
    pub fn with_candidates(kind: &'static str, name: &str, candidates: &[&str]) -> Self {
        let available: Vec<String> = candidates.iter().map(|c| c.to_string()).collect();
        Self::new(kind, name, find_closest_name(name, &available))
    }
}

impl fmt::Display for UnknownNameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            write!(
                f,
                "\x1b[1;31merror:\x1b[0m unknown {} '{}'",
                self.kind, self.name
            )?;
        } else {
            write!(f, "error: unknown {} '{}'", self.kind, self.name)?;
        }

        if let Some(suggestion) = &self.suggestion {
            writeln!(f)?;
            writeln!(f)?;
            if use_color {
                write!(f, "\x1b[1;36mhint:\x1b[0m did you mean '{}'?", suggestion)?;
            } else {
                write!(f, "hint: did you mean '{}'?", suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for UnknownNameError {}

/// Error raised at the CLI boundary when a codec returns its failure sentinel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidInputError {
    pub tool: &'static str,
    pub input: String,
    pub hint: String,
}

impl InvalidInputError {
    pub fn new(tool: &'static str, input: &str, hint: impl Into<String>) -> Self {
        // Truncate long inputs
        let display_input = if input.chars().count() > 60 {
            format!("{}...", input.chars().take(60).collect::<String>())
        } else {
            input.to_string()
        };

        Self {
            tool,
            input: display_input,
            hint: hint.into(),
        }
    }
}

impl fmt::Display for InvalidInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let use_color = should_use_color();

        if use_color {
            writeln!(
                f,
                "\x1b[1;31merror:\x1b[0m {} could not process input",
                self.tool
            )?;
        } else {
            writeln!(f, "error: {} could not process input", self.tool)?;
        }
        writeln!(f)?;
        writeln!(f, "  {}", self.input)?;
        writeln!(f)?;

        if use_color {
            write!(f, "\x1b[1;36mhint:\x1b[0m {}", self.hint)
        } else {
            write!(f, "hint: {}", self.hint)
        }
    }
}

impl std::error::Error for InvalidInputError {}

static COLOR_DISABLED: AtomicBool = AtomicBool::new(false);

/// Turn off ANSI colors in error output for the rest of the process.
pub fn disable_color() {
    COLOR_DISABLED.store(true, Ordering::Relaxed);
}

/// Check if colored output should be used
pub(crate) fn should_use_color() -> bool {
    // Respect --no-color and the NO_COLOR environment variable
    if COLOR_DISABLED.load(Ordering::Relaxed) || std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}

/// Calculate Levenshtein distance between two strings
fn levenshtein_distance(s1: &str, s2: &str) -> usize {
    let len1 = s1.chars().count();
    let len2 = s2.chars().count();

    if len1 == 0 {
        return len2;
    }
    if len2 == 0 {
        return len1;
    }

    let mut prev_row: Vec<usize> = (0..=len2).collect();
    let mut curr_row = vec![0; len2 + 1];

    for (i, c1) in s1.chars().enumerate() {
        curr_row[0] = i + 1;

        for (j, c2) in s2.chars().enumerate() {
            let cost = if c1 == c2 { 0 } else { 1 };
            curr_row[j + 1] = (curr_row[j] + 1)
                .min(prev_row[j + 1] + 1)
                .min(prev_row[j] + cost);
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[len2]
}

/// Find the closest matching name, if any is within typo distance.
pub fn find_closest_name(name: &str, available: &[String]) -> Option<String> {
    let name = name.to_lowercase();
    let threshold = if name.len() < 5 { 2 } else { 3 };

    let mut best_match = None;
    let mut best_distance = usize::MAX;

    for candidate in available {
        let distance = levenshtein_distance(&name, &candidate.to_lowercase());
        if distance < best_distance && distance <= threshold {
            best_distance = distance;
            best_match = Some(candidate.clone());
        }
    }

    best_match
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein_distance() {
        assert_eq!(levenshtein_distance("sha256", "sha256"), 0);
        assert_eq!(levenshtein_distance("sha256", "sha224"), 2);
        assert_eq!(levenshtein_distance("sh256", "sha256"), 1);
        assert_eq!(levenshtein_distance("", "rfc3339"), 7);
    }

    #[test]
    fn test_find_closest_name() {
        let names = vec![
            "hex".to_string(),
            "rgb".to_string(),
            "hsl".to_string(),
            "cmyk".to_string(),
        ];

        assert_eq!(find_closest_name("cmky", &names), Some("cmyk".to_string()));
        assert_eq!(find_closest_name("RGB", &names), Some("rgb".to_string()));
        assert_eq!(find_closest_name("oklab-extended", &names), None);
    }

    #[test]
    fn test_unknown_name_display() {
        // Unsafe: environment variable access (not thread-safe)
        unsafe {
            std::env::set_var("NO_COLOR", "1");
        }

        let err = UnknownNameError::with_candidates("hash algorithm", "sha265", &["sha256", "md5"]);
        let display = format!("{}", err);

        assert!(display.contains("unknown hash algorithm 'sha265'"));
        assert!(display.contains("did you mean 'sha256'?"));
    }

    #[test]
    fn test_invalid_input_truncates() {
        let long = "x".repeat(100);
        let err = InvalidInputError::new("escape", &long, "check the notation");
        assert_eq!(err.input.chars().count(), 63);
        assert!(err.input.ends_with("..."));
    }
}
