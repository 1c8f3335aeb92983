//! Parser for collapsed stack lines.
//!
//! Collapsed stacks are the usual flamegraph input format:
//! "outer;middle;inner count"
//!
//! Example: "main;foo;bar 3" is the stack bar <- foo <- main, sampled 3 times.
//! Frames are listed outermost-first, so each line is reversed into the
//! leaf-first order the trie expects.

use super::StackSample;
use crate::utils::config::{COLLAPSED_COMMENT_PREFIX, COLLAPSED_FRAME_SEPARATOR, MAX_SAMPLE_COUNT};
use crate::utils::error::ParseError;
use log::debug;

/// Parse collapsed text into leaf-first samples
///
/// **Public** - main entry point for collapsed input
///
/// Each line yields one sample carrying its count; stacks are never
/// duplicated here.
///
/// # Errors
/// * `ParseError::InvalidLine` - empty frame, zero count or count above `MAX_SAMPLE_COUNT`
pub fn parse_collapsed(input: &str) -> Result<Vec<StackSample>, ParseError> {
    let mut samples = Vec::new();

    for (line_idx, line) in input.lines().enumerate() {
        if let Some(sample) = parse_collapsed_line(line, line_idx + 1)? {
            samples.push(sample);
        }
    }

    debug!("Parsed {} collapsed lines", samples.len());
    Ok(samples)
}

/// Parse a single line
///
/// Returns `None` for blank and comment lines. A trailing all-digit token
/// separated by whitespace is the sample count; without one the count is 1,
/// so frame names may contain spaces.
///
/// # Arguments
/// * `line` - Raw line text
/// * `line_number` - 1-based line number for error reporting
pub fn parse_collapsed_line(
    line: &str,
    line_number: usize,
) -> Result<Option<StackSample>, ParseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COLLAPSED_COMMENT_PREFIX) {
        return Ok(None);
    }

    let (stack_part, count) = match line.rsplit_once(char::is_whitespace) {
        Some((stack, token)) if is_count_token(token) => {
            (stack.trim_end(), parse_count(token, line_number)?)
        }
        _ => (line, 1),
    };

    let mut frames = Vec::new();
    for frame in stack_part.split(COLLAPSED_FRAME_SEPARATOR) {
        let frame = frame.trim();
        if frame.is_empty() {
            return Err(ParseError::InvalidLine {
                line: line_number,
                reason: "empty frame".to_string(),
            });
        }
        frames.push(frame.to_string());
    }
    frames.reverse();

    Ok(Some(StackSample { frames, count }))
}

fn parse_count(token: &str, line_number: usize) -> Result<usize, ParseError> {
    let invalid = |reason: String| ParseError::InvalidLine {
        line: line_number,
        reason,
    };

    let count = token
        .parse::<usize>()
        .map_err(|e| invalid(format!("invalid count '{}': {}", token, e)))?;

    if count == 0 {
        return Err(invalid("sample count must be positive".to_string()));
    }
    if count > MAX_SAMPLE_COUNT {
        return Err(invalid(format!(
            "sample count {} exceeds the maximum of {}",
            count, MAX_SAMPLE_COUNT
        )));
    }

    Ok(count)
}

fn is_count_token(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_line_reverses_frames() {
        let parsed = parse_collapsed_line("main;foo;bar 3", 1).unwrap().unwrap();
        assert_eq!(parsed.frames, vec!["bar", "foo", "main"]);
        assert_eq!(parsed.count, 3);
    }

    #[test]
    fn test_parse_line_without_count() {
        let parsed = parse_collapsed_line("main;foo", 1).unwrap().unwrap();
        assert_eq!(parsed.frames, vec!["foo", "main"]);
        assert_eq!(parsed.count, 1);
    }

    #[test]
    fn test_parse_line_frame_with_spaces() {
        let parsed = parse_collapsed_line("main;<Vec<T> as Drop>::drop 2", 1)
            .unwrap()
            .unwrap();
        assert_eq!(parsed.frames, vec!["<Vec<T> as Drop>::drop", "main"]);
        assert_eq!(parsed.count, 2);
    }

    #[test]
    fn test_parse_line_skips_blank_and_comments() {
        assert_eq!(parse_collapsed_line("   ", 1).unwrap(), None);
        assert_eq!(parse_collapsed_line("# header", 2).unwrap(), None);
    }

    #[test]
    fn test_parse_line_zero_count() {
        let err = parse_collapsed_line("main;foo 0", 4).unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 4, .. }));
    }

    #[test]
    fn test_parse_line_count_above_maximum() {
        let line = format!("main;foo {}", MAX_SAMPLE_COUNT + 1);
        let err = parse_collapsed_line(&line, 2).unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 2, .. }));

        let parsed = parse_collapsed_line(&format!("main;foo {}", MAX_SAMPLE_COUNT), 2)
            .unwrap()
            .unwrap();
        assert_eq!(parsed.count, MAX_SAMPLE_COUNT);
    }

    #[test]
    fn test_parse_collapsed_huge_count() {
        let result = parse_collapsed("main;foo 1\nmain;foo 18446744073709551615\n");
        assert!(matches!(result, Err(ParseError::InvalidLine { line: 2, .. })));

        let result = parse_collapsed("main;foo 99999999999999999999999\n");
        assert!(matches!(result, Err(ParseError::InvalidLine { line: 1, .. })));
    }

    #[test]
    fn test_parse_line_empty_frame() {
        let err = parse_collapsed_line("main;;foo 1", 7).unwrap_err();
        assert!(matches!(err, ParseError::InvalidLine { line: 7, .. }));
    }

    #[test]
    fn test_parse_collapsed_keeps_counts() {
        let samples = parse_collapsed("main;foo;bar 2\n\nmain;foo;baz\n").unwrap();
        assert_eq!(
            samples,
            vec![
                StackSample::new(vec!["bar".into(), "foo".into(), "main".into()], 2),
                StackSample::new(vec!["baz".into(), "foo".into(), "main".into()], 1),
            ]
        );
    }
}
