//! Generate command handler
//!
//! Resolves the three course inputs from flags and config, builds the
//! outline, and prints it or writes it to a file.

use crate::args::{GenerateArgs, MAX_WEEKS};
use curricu_forge::config::Config;
use curricu_forge::core::{
    build_request,
    models::{CourseRequest, CurriculumDocument},
    render::{duration_label, renderer_for, OutputFormat},
};
use curricu_forge::logger::is_verbose_enabled;
use curricu_forge::{error, info};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Where the rendered outline goes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// Print to stdout
    Stdout,
    /// Write to this file
    File(PathBuf),
}

/// Fully resolved inputs for one generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolved {
    /// Course request handed to the builder
    pub request: CourseRequest,
    /// Output format
    pub format: OutputFormat,
}

/// Run the generate command, exiting with status 1 on failure.
pub fn run(args: &GenerateArgs, config: &Config) {
    let result = execute(args, config, &mut io::stdout().lock(), &mut io::stderr().lock());
    if let Err(err) = result {
        error!("Generate failed: {err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

/// Build and emit one outline.
///
/// Only the outline itself is written to `out`; status lines and the verbose
/// summary go to `status`.
///
/// # Errors
/// Returns a user-facing message if resolving, building, rendering or writing fails.
pub fn execute(
    args: &GenerateArgs,
    config: &Config,
    out: &mut impl Write,
    status: &mut impl Write,
) -> Result<(), String> {
    let resolved = resolve(args, config)?;
    let request = &resolved.request;
    info!(
        "Generating {} outline: subject='{}', level={}, weeks={}",
        resolved.format, request.subject, request.level, request.duration_weeks
    );

    let doc = build_request(request).map_err(|e| format!("✗ {e}"))?;
    let renderer = renderer_for(resolved.format);
    let write_failed = |e: io::Error| format!("✗ Failed to write output: {e}");

    match destination(args, config, &doc, resolved.format) {
        Destination::Stdout => {
            let content = renderer.render(&doc).map_err(|e| format!("✗ {e}"))?;
            if resolved.format == OutputFormat::Markdown {
                writeln!(out, "# Generated Curriculum\n").map_err(write_failed)?;
            }
            out.write_all(content.as_bytes()).map_err(write_failed)?;
            out.flush().map_err(write_failed)?;
            writeln!(status, "✓ Curriculum generated successfully").map_err(write_failed)?;
        }
        Destination::File(path) => {
            renderer.generate(&doc, &path).map_err(|e| {
                format!("✗ Failed to write outline to {}: {e}", path.display())
            })?;
            writeln!(status, "✓ Curriculum written to: {}", path.display())
                .map_err(write_failed)?;
            info!("Wrote outline to {}", path.display());
        }
    }

    if is_verbose_enabled() {
        writeln!(status, "{}", verbose_summary(&doc)).map_err(write_failed)?;
    }
    Ok(())
}

/// One-line summary printed in verbose mode, e.g. `2 weeks, topics: A → B`
pub fn verbose_summary(doc: &CurriculumDocument) -> String {
    format!(
        "{}, topics: {}",
        duration_label(doc.duration_weeks),
        doc.topics().join(" → ")
    )
}

/// Merge flags with configured defaults and validate them.
///
/// # Errors
/// Returns a user-facing message if the level or format is unknown, or if
/// the configured week count is outside 1..=`MAX_WEEKS`.
pub fn resolve(args: &GenerateArgs, config: &Config) -> Result<Resolved, String> {
    let subject = args
        .subject
        .clone()
        .unwrap_or_else(|| config.generator.subject.clone());
    let level = args.level.as_deref().unwrap_or(&config.generator.course_level);
    let weeks = args.weeks.unwrap_or(config.generator.weeks);
    let format_name = args.format.as_deref().unwrap_or(&config.generator.format);

    if !(1..=MAX_WEEKS).contains(&weeks) {
        return Err(format!(
            "✗ Course duration must be between 1 and {MAX_WEEKS} weeks (got {weeks})"
        ));
    }

    let request = CourseRequest::parse(subject, level, weeks).map_err(|e| format!("✗ {e}"))?;
    let format = format_name
        .parse::<OutputFormat>()
        .map_err(|e| format!("✗ {e}"))?;

    Ok(Resolved { request, format })
}

/// Pick where the outline goes based on `--output` / `--save`
pub fn destination(
    args: &GenerateArgs,
    config: &Config,
    doc: &CurriculumDocument,
    format: OutputFormat,
) -> Destination {
    if let Some(path) = &args.output {
        Destination::File(path.clone())
    } else if args.save {
        Destination::File(Path::new(&config.paths.out_dir).join(outline_file_name(doc, format)))
    } else {
        Destination::Stdout
    }
}

/// File name for a saved outline, e.g. `python-programming_beginner_4w.md`
pub fn outline_file_name(doc: &CurriculumDocument, format: OutputFormat) -> String {
    format!(
        "{}_{}_{}w.{}",
        slugify(&doc.subject),
        doc.level.name().to_ascii_lowercase(),
        doc.duration_weeks,
        format.extension()
    )
}

/// Lowercase ASCII alphanumerics joined by single dashes; "curriculum" if nothing remains
fn slugify(text: &str) -> String {
    let slug = text
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-");
    if slug.is_empty() {
        "curriculum".to_string()
    } else {
        slug
    }
}
