//! Output record framing.
//!
//! Every accepted file becomes one record in the artifact:
//!
//! ```text
//! ###[<full-path>]###
//!
//! <file content>
//!
//! ###EOF###
//!
//! ```
//!
//! Records are concatenated back to back with no separators beyond the
//! framing itself. Consumers rely on this byte-for-byte, so the markers and
//! blank lines here must not change.

use std::io::{self, Write};
use std::path::Path;

/// Literal prefix of the opening marker line.
pub const OPEN_PREFIX: &str = "###[";
/// Literal suffix of the opening marker line.
pub const OPEN_SUFFIX: &str = "]###";
/// Literal closing marker line.
pub const CLOSE_MARKER: &str = "###EOF###";

/// Append one framed record for `path` with `content` to `out`.
pub fn write_record<W: Write>(out: &mut W, path: &Path, content: &str) -> io::Result<()> {
    write!(out, "{}{}{}\n\n", OPEN_PREFIX, path.display(), OPEN_SUFFIX)?;
    out.write_all(content.as_bytes())?;
    write!(out, "\n\n{}\n\n", CLOSE_MARKER)?;
    Ok(())
}

/// Extract the paths embedded in the opening markers of an artifact, in
/// order. Used by consumers (and tests) to index a dump.
pub fn record_paths(artifact: &str) -> Vec<&str> {
    artifact
        .lines()
        .filter_map(|line| {
            line.strip_prefix(OPEN_PREFIX)
                .and_then(|rest| rest.strip_suffix(OPEN_SUFFIX))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;

    #[test]
    fn record_framing_is_byte_exact() {
        let mut out = Vec::new();
        write_record(&mut out, &PathBuf::from("./js/app.js"), "x=1").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "###[./js/app.js]###\n\nx=1\n\n###EOF###\n\n"
        );
    }

    #[test]
    fn empty_content_still_produces_full_frame() {
        let mut out = Vec::new();
        write_record(&mut out, &PathBuf::from("a.css"), "").unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "###[a.css]###\n\n\n\n###EOF###\n\n"
        );
    }

    #[test]
    fn record_paths_round_trips_markers() {
        let mut out = Vec::new();
        write_record(&mut out, &PathBuf::from("a.js"), "one").unwrap();
        write_record(&mut out, &PathBuf::from("sub/b.html"), "two").unwrap();

        let artifact = String::from_utf8(out).unwrap();
        assert_eq!(record_paths(&artifact), vec!["a.js", "sub/b.html"]);
    }

    #[test]
    fn record_paths_ignores_marker_like_content() {
        // A content line that merely contains the tokens is not a marker.
        let artifact = "###[a.js]###\n\nsee ###EOF### and ###[ elsewhere\n\n###EOF###\n\n";
        assert_eq!(record_paths(artifact), vec!["a.js"]);
    }
}
