//! Text output: the report layout on stdout and progress lines on stderr.

use std::io::{self, Write};

use dirstats_core::analysis::{RankedEntry, Report};
use dirstats_core::model::size::{format_count, format_size};
use dirstats_core::scanner::progress::ScanProgress;

/// Write the report in the plain-text layout.
///
/// The ranking headings always say "Ten", whatever `--count` was.
pub fn write_text(out: &mut impl Write, report: &Report) -> io::Result<()> {
    writeln!(out, "Total size: {}", format_size(report.total_size))?;

    writeln!(out)?;
    writeln!(out, "Ten largest subfolders:")?;
    write_ranking(out, &report.largest_subfolders)?;

    writeln!(out)?;
    writeln!(out, "Ten largest files:")?;
    write_ranking(out, &report.largest_files)?;

    Ok(())
}

fn write_ranking(out: &mut impl Write, entries: &[RankedEntry]) -> io::Result<()> {
    for entry in entries {
        writeln!(out, "{}: {}", entry.label, format_size(entry.size))?;
    }
    Ok(())
}

/// Print one progress event.
///
/// On a terminal the per-directory line is rewritten in place; otherwise
/// only level summaries are printed so logs stay short. Write errors are
/// ignored: progress is best effort.
pub fn write_progress(err: &mut impl Write, event: &ScanProgress, interactive: bool) {
    let _ = match event {
        ScanProgress::Enumerating { path } if interactive => {
            write!(err, "\r\x1b[KPopulating {}", path.display())
        }
        ScanProgress::Enumerating { .. } => Ok(()),
        ScanProgress::Level { depth, directories } if !interactive => {
            writeln!(err, "Level {depth}: {directories} directories to populate")
        }
        ScanProgress::Level { .. } => Ok(()),
        // Denials are already logged by the scanner.
        ScanProgress::Denied { .. } => Ok(()),
        ScanProgress::Complete {
            duration,
            files,
            directories,
            denied,
        } => {
            if interactive {
                let _ = write!(err, "\r\x1b[K");
            }
            writeln!(
                err,
                "Scanned {} files in {} directories ({} denied) in {:.2?}",
                format_count(*files),
                format_count(*directories),
                format_count(*denied),
                duration
            )
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use dirstats_core::Node;
    use std::path::PathBuf;
    use std::time::Duration;

    /// R(44) -> A(4) -> x: 500
    ///       -> B(4) -> y: 1500
    fn report() -> Report {
        let mut a = Node::directory("A", "R", 4);
        a.children_mut().unwrap().push(Node::file("x", "R/A", 500));
        let mut b = Node::directory("B", "R", 4);
        b.children_mut().unwrap().push(Node::file("y", "R/B", 1_500));
        let mut root = Node::directory("R", "", 44);
        root.children_mut().unwrap().extend([a, b]);
        Report::from_tree(&root, 10)
    }

    #[test]
    fn test_text_layout() {
        let mut out = Vec::new();
        write_text(&mut out, &report()).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Total size: 2.0K\n\
             \n\
             Ten largest subfolders:\n\
             B: 1.5K\n\
             A: 504.0B\n\
             \n\
             Ten largest files:\n\
             R/B/y: 1.5K\n\
             R/A/x: 500.0B\n"
        );
    }

    #[test]
    fn test_progress_non_interactive_prints_levels_only() {
        let mut err = Vec::new();
        write_progress(
            &mut err,
            &ScanProgress::Enumerating {
                path: PathBuf::from("/r"),
            },
            false,
        );
        write_progress(
            &mut err,
            &ScanProgress::Level {
                depth: 0,
                directories: 3,
            },
            false,
        );
        write_progress(
            &mut err,
            &ScanProgress::Complete {
                duration: Duration::from_millis(5),
                files: 1_200,
                directories: 3,
                denied: 0,
            },
            false,
        );
        let text = String::from_utf8(err).unwrap();
        assert!(text.starts_with("Level 0: 3 directories to populate\n"));
        assert!(text.contains("Scanned 1,200 files in 3 directories (0 denied)"));
        assert!(!text.contains("Populating"));
    }
}
