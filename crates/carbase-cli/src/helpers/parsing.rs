//! Parsing helpers for menu tokens, output format and search criteria.

use carbase_core::{Criterion, MAX_FIELD_LEN};

use crate::cli::SearchArgs;

/// First whitespace-delimited word of a line, capped at `MAX_FIELD_LEN`
/// characters. Words after the first are ignored.
pub fn first_token(line: &str) -> Option<String> {
    line.split_whitespace()
        .next()
        .map(|word| word.chars().take(MAX_FIELD_LEN).collect())
}

/// Parse the first word of a line as an integer.
pub fn parse_int(line: &str) -> Option<i32> {
    line.split_whitespace().next()?.parse().ok()
}

/// Reject unknown `--format` values.
pub fn validate_output_format(value: Option<&str>) -> anyhow::Result<()> {
    match value {
        None | Some("table") | Some("plain") => Ok(()),
        Some(other) => Err(anyhow::anyhow!(
            "Unsupported format: {} (use table or plain)",
            other
        )),
    }
}

/// Build a criterion from the mutually exclusive search flags.
pub fn criterion_from_args(args: &SearchArgs) -> anyhow::Result<Criterion> {
    if let Some(term) = &args.exact {
        return Ok(Criterion::Exact(term.clone()));
    }
    if let Some(term) = &args.contains {
        return Ok(Criterion::Contains(term.clone()));
    }
    if let Some(value) = args.equals {
        return Ok(Criterion::Equals(value));
    }
    match args.range.as_deref() {
        Some([min, max]) => Ok(Criterion::Range {
            min: *min,
            max: *max,
        }),
        Some(_) => Err(anyhow::anyhow!("--range takes exactly two values: MIN MAX")),
        None => Err(anyhow::anyhow!(
            "One of --exact, --contains, --equals or --range is required"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> SearchArgs {
        SearchArgs {
            field: "brand".to_string(),
            exact: None,
            contains: None,
            equals: None,
            range: None,
            json: false,
            format: None,
        }
    }

    #[test]
    fn test_first_token_takes_one_word() {
        assert_eq!(first_token("  Alfa Romeo\n"), Some("Alfa".to_string()));
        assert_eq!(first_token("   \n"), None);
    }

    #[test]
    fn test_first_token_is_capped() {
        let long = "x".repeat(150);
        assert_eq!(first_token(&long).map(|t| t.len()), Some(MAX_FIELD_LEN));
    }

    #[test]
    fn test_parse_int() {
        assert_eq!(parse_int(" 2020 \n"), Some(2020));
        assert_eq!(parse_int("-5"), Some(-5));
        assert_eq!(parse_int("twenty"), None);
        assert_eq!(parse_int(""), None);
    }

    #[test]
    fn test_validate_output_format() {
        assert!(validate_output_format(None).is_ok());
        assert!(validate_output_format(Some("plain")).is_ok());
        assert!(validate_output_format(Some("csv")).is_err());
    }

    #[test]
    fn test_criterion_from_args() {
        let mut a = args();
        a.contains = Some("oy".to_string());
        assert_eq!(
            criterion_from_args(&a).unwrap(),
            Criterion::Contains("oy".to_string())
        );

        let mut a = args();
        a.range = Some(vec![2000, 2010]);
        assert_eq!(
            criterion_from_args(&a).unwrap(),
            Criterion::Range {
                min: 2000,
                max: 2010
            }
        );

        assert!(criterion_from_args(&args()).is_err());
    }
}
