//! Text rendering of encoded arrays and rebuilt stacks.

use super::prepare_path;
use crate::trie::StackArrays;
use crate::utils::config::{COLLAPSED_COMMENT_PREFIX, COLLAPSED_FRAME_SEPARATOR};
use crate::utils::error::OutputError;
use log::{info, warn};
use std::collections::HashMap;
use std::fmt::{self, Display};
use std::path::Path;

/// Render the four arrays followed by every rebuilt stack
///
/// **Public** - used by the demo command
///
/// Stacks are printed one per stack index entry, leaf-first and
/// space-separated, so duplicates appear as repeated lines.
pub fn render_arrays<L: Display + Clone>(arrays: &StackArrays<L>) -> String {
    let mut out = String::new();

    out.push_str(&format!("location_table:   [{}]\n", join(&arrays.location_table, ", ")));
    out.push_str(&format!("parents:          [{}]\n", join(&arrays.parents, ", ")));
    out.push_str(&format!("location_indices: [{}]\n", join(&arrays.location_indices, ", ")));
    out.push_str(&format!("stack_indices:    [{}]\n", join(&arrays.stack_indices, ", ")));

    for stack in arrays.rebuild() {
        out.push_str(&format!("{}\n", StackDisplay(&stack[..])));
    }

    out
}

/// Render stacks as collapsed lines ("outer;inner count")
///
/// Identical stacks are merged into one line with their total count,
/// ordered by first appearance. Empty stacks have no collapsed form and are
/// skipped.
///
/// # Errors
/// * `OutputError::UnrepresentableFrame` - a frame would parse back as a
///   different stack (see `check_collapsed_frame`)
pub fn to_collapsed_lines<L: Display>(stacks: &[Vec<L>]) -> Result<Vec<String>, OutputError> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut skipped = 0;
    let separator = COLLAPSED_FRAME_SEPARATOR.to_string();

    for stack in stacks {
        if stack.is_empty() {
            skipped += 1;
            continue;
        }

        let mut frames = Vec::with_capacity(stack.len());
        for (depth, frame) in stack.iter().rev().enumerate() {
            let frame = frame.to_string();
            check_collapsed_frame(&frame, depth == 0)?;
            frames.push(frame);
        }
        let key = frames.join(separator.as_str());

        match positions.get(&key) {
            Some(&pos) => order[pos].1 += 1,
            None => {
                positions.insert(key.clone(), order.len());
                order.push((key, 1));
            }
        }
    }

    if skipped > 0 {
        warn!("Skipped {} empty stacks with no collapsed form", skipped);
    }

    Ok(order
        .into_iter()
        .map(|(stack, count)| format!("{} {}", stack, count))
        .collect())
}

/// Reject frames that would not parse back unchanged from a collapsed line
///
/// `outermost` marks the first frame on the line, which must not look like
/// a comment.
pub fn check_collapsed_frame(frame: &str, outermost: bool) -> Result<(), OutputError> {
    let reason = if frame.is_empty() {
        Some("frame is empty")
    } else if frame.contains(COLLAPSED_FRAME_SEPARATOR) {
        Some("frame contains the frame separator")
    } else if frame.contains(['\n', '\r']) {
        Some("frame contains a line break")
    } else if frame.trim() != frame {
        Some("frame has leading or trailing whitespace")
    } else if outermost && frame.starts_with(COLLAPSED_COMMENT_PREFIX) {
        Some("outermost frame would start a comment line")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(OutputError::UnrepresentableFrame {
            frame: frame.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

/// Write text content to a file
pub fn write_text(content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    prepare_path(output_path)?;
    std::fs::write(output_path, content).map_err(OutputError::WriteFailed)?;

    info!("Wrote {} bytes to: {}", content.len(), output_path.display());
    Ok(())
}

fn join<T: Display>(items: &[T], separator: &str) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(separator)
}

/// Display adapter printing a stack leaf-first, space-separated
pub struct StackDisplay<'a, L>(pub &'a [L]);

impl<L: Display> Display for StackDisplay<'_, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, frame) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", frame)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trie::StackTrie;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_arrays() {
        let trie = StackTrie::from_stacks(vec![
            vec!["bar", "foo", "main"],
            vec!["bar", "foo", "main"],
        ]);
        let rendered = render_arrays(&trie.export());

        assert_eq!(
            rendered,
            "location_table:   [, main, foo, bar]\n\
             parents:          [0, 0, 1, 2]\n\
             location_indices: [0, 1, 2, 3]\n\
             stack_indices:    [3, 3]\n\
             bar foo main\n\
             bar foo main\n"
        );
    }

    #[test]
    fn test_to_collapsed_lines_merges_duplicates() {
        let stacks = vec![
            vec!["bar", "foo", "main"],
            vec!["baz", "main"],
            vec!["bar", "foo", "main"],
            vec![],
        ];

        assert_eq!(
            to_collapsed_lines(&stacks).unwrap(),
            vec!["main;foo;bar 2", "main;baz 1"]
        );
    }

    #[test]
    fn test_to_collapsed_lines_rejects_separator_in_frame() {
        let stacks = vec![vec!["a;b", "main"]];
        let err = to_collapsed_lines(&stacks).unwrap_err();
        assert!(matches!(
            err,
            OutputError::UnrepresentableFrame { ref frame, .. } if frame == "a;b"
        ));
    }

    #[test]
    fn test_to_collapsed_lines_rejects_padded_frame() {
        let stacks = vec![vec![" x "]];
        assert!(to_collapsed_lines(&stacks).is_err());
    }

    #[test]
    fn test_check_collapsed_frame() {
        assert!(check_collapsed_frame("<Vec<T> as Drop>::drop", false).is_ok());
        assert!(check_collapsed_frame("#frame", false).is_ok());
        assert!(check_collapsed_frame("#frame", true).is_err());
        assert!(check_collapsed_frame("line\nbreak", false).is_err());
        assert!(check_collapsed_frame("", false).is_err());
        assert!(check_collapsed_frame("tail ", false).is_err());
    }

    #[test]
    fn test_stack_display() {
        let stack = ["bar", "foo", "main"];
        assert_eq!(StackDisplay(&stack[..]).to_string(), "bar foo main");
    }
}
