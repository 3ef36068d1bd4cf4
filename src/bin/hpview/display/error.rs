use std::io::{self, Write};

use anyhow::Error;

use crate::util::text::wrap;

#[rustfmt::skip]
pub fn print_error(err: &Error) {
    let mut stderr = io::stderr().lock();

    let _ = writeln!(stderr);
    let _ = writeln!(stderr, "   ╔══════════════════════════════════════════════════════════════╗");
    let _ = writeln!(stderr, "   ║  ✗ Error                                                     ║");
    let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");

    let msg = err.to_string();
    for line in wrap(&msg, 59) {
        let _ = writeln!(stderr, "   ║  {:<59} ║", line);
    }

    let mut source = err.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Caused by:                                                  ║");
        for line in wrap(&cause.to_string(), 57) {
            let _ = writeln!(stderr, "   ║    {:<57} ║", line);
        }
        source = cause.source();
    }

    if let Some(hints) = collect_hints(err) {
        let _ = writeln!(stderr, "   ╟──────────────────────────────────────────────────────────────╢");
        let _ = writeln!(stderr, "   ║  Hints:                                                      ║");
        for hint in hints {
            let wrapped = wrap(&hint, 55);
            if let Some((first, rest)) = wrapped.split_first() {
                let _ = writeln!(stderr, "   ║    • {:<55} ║", first);
                for line in rest {
                    let _ = writeln!(stderr, "   ║      {:<55} ║", line);
                }
            }
        }
    }

    let _ = writeln!(stderr, "   ╚══════════════════════════════════════════════════════════════╝");
    let _ = writeln!(stderr);
}

fn collect_hints(err: &Error) -> Option<Vec<String>> {
    let mut hints = Vec::new();

    if let Some(model_err) = err.downcast_ref::<hpview::Error>() {
        collect_model_hints(&mut hints, model_err);
    } else {
        collect_fallback_hints(&mut hints, err);
    }

    if hints.is_empty() {
        None
    } else {
        Some(hints)
    }
}

fn collect_model_hints(hints: &mut Vec<String>, err: &hpview::Error) {
    use hpview::Error;

    match err {
        Error::Io { source } => collect_std_io_hints(hints, source),

        Error::MalformedCoordinate { line, .. } => {
            hints.push(format!("Check line {} of the input file", line));
            hints.push("Each coordinate line must be three comma-separated integers (x,y,z)".into());
            hints.push("The label section starts only after a fully blank line".into());
        }

        Error::InvalidLabel { line, .. } => {
            hints.push(format!("Check the label line (line {})", line));
            hints.push("Labels may only contain 'H' (hydrophobic) and 'P' (polar)".into());
            hints.push("Use --no-color to render the model without labels".into());
        }

        Error::MissingLabelLine { .. } => {
            hints.push("A blank line announces a label line, but none followed".into());
            hints.push("Remove the trailing blank line for an uncolored model".into());
            hints.push("Or add a label line with one H/P character per residue".into());
        }

        Error::LengthMismatch { points, labels } => {
            hints.push(format!(
                "The label line must hold {} character(s) for {} point(s)",
                points / 2,
                points
            ));
            hints.push(format!("Found {} label(s) instead", labels));
            hints.push("Use --no-color to render the model without labels".into());
        }
    }
}

fn collect_std_io_hints(hints: &mut Vec<String>, source: &std::io::Error) {
    use std::io::ErrorKind;

    match source.kind() {
        ErrorKind::NotFound => {
            hints.push("File or directory not found".into());
            hints.push("Check the path spelling and ensure the file exists".into());
        }
        ErrorKind::PermissionDenied => {
            hints.push("Permission denied accessing the file".into());
            hints.push("Check file permissions with `ls -la`".into());
        }
        ErrorKind::InvalidData => {
            hints.push("File contains invalid or corrupt data".into());
            hints.push("The input must be plain text".into());
        }
        _ => {
            hints.push("I/O operation failed".into());
            hints.push("Check file path, permissions, and disk space".into());
        }
    }
}

fn collect_fallback_hints(hints: &mut Vec<String>, err: &Error) {
    let msg = error_chain_text(err);

    if msg.contains("no such file") || msg.contains("not found") {
        hints.push("Check that the file path is correct".into());
        hints.push("Verify the file exists and is readable".into());
    } else if msg.contains("permission denied") {
        hints.push("Check file permissions with `ls -la`".into());
        hints.push("Ensure you have the required access rights".into());
    }
}

fn error_chain_text(err: &Error) -> String {
    let mut text = String::new();

    text.push_str(&err.to_string());

    let mut source = err.source();
    while let Some(cause) = source {
        text.push('\n');
        text.push_str(&cause.to_string());
        source = cause.source();
    }

    text.to_lowercase()
}
