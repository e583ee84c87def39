use std::{
    path::{Component, Path},
    sync::OnceLock,
};

use log::{debug, warn};
use regex::bytes::{Regex, RegexBuilder};

use crate::{
    config::Config,
    error::ParseError,
    metadata::Metadata,
    naming::{classify, deduce_title, FileKind},
};

fn separator_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        RegexBuilder::new(r"^---\r?$")
            .multi_line(true)
            .build()
            .expect("separator pattern is valid")
    })
}

/// Read `relative_path` (relative to `config.content_root`) and build its
/// metadata record, deducing output path, title and date where the header
/// leaves them out.
///
/// Only the read can fail. A missing template is left for the caller to
/// notice through [`Metadata::missing_required`].
pub fn parse_source_file(config: &Config, relative_path: &Path) -> Result<Metadata, ParseError> {
    let path = config.content_root.join(relative_path);
    let content = std::fs::read(&path).map_err(|e| ParseError::from_io(path, e))?;

    let relative_path = if relative_path.is_absolute() {
        relative_path
            .strip_prefix(&config.content_root)
            .unwrap_or(relative_path)
    } else {
        relative_path
    };
    Ok(parse_source(config, relative_path, content))
}

/// Build a record from already-read `content`; `relative_path` only feeds
/// the basename and the deductions.
///
/// The header is decoded as UTF-8 (lossily). The body is kept as raw bytes.
pub fn parse_source(
    config: &Config,
    relative_path: &Path,
    content: impl AsRef<[u8]>,
) -> Metadata {
    let content = content.as_ref();
    let (header, body) = split_header(content).unwrap_or_else(|| {
        debug!("{relative_path:?}: no `---` separator, treating whole file as body");
        (&content[..0], content)
    });

    let location = SourceLocation::new(relative_path);
    let mut metadata = Metadata::new(location.basename(), body);
    for line in String::from_utf8_lossy(header).lines() {
        if line.trim().is_empty() {
            continue;
        }
        match line.split_once(':') {
            Some((name, value)) if !name.trim().is_empty() => {
                metadata.set(name.trim(), value.trim());
            }
            _ => warn!("{relative_path:?}: ignoring header line {line:?}"),
        }
    }

    deduce(config, &location, &mut metadata);
    metadata
}

/// Header before the first `---` line, body after it (verbatim).
fn split_header(content: &[u8]) -> Option<(&[u8], &[u8])> {
    let m = separator_pattern().find(content)?;
    let rest = &content[m.end()..];
    Some((&content[..m.start()], rest.strip_prefix(b"\n").unwrap_or(rest)))
}

fn deduce(config: &Config, location: &SourceLocation, metadata: &mut Metadata) {
    let kind = classify(&location.stem);
    let extension = if config.output_extension.is_empty() {
        String::new()
    } else {
        format!(".{}", config.output_extension)
    };

    if !metadata.contains_key(&config.output_key) {
        let output = match &kind {
            FileKind::Blog(entry) => {
                let dated = format!("{}{extension}", entry.dated_path());
                if location.directory.is_empty() {
                    dated
                } else {
                    format!("{}/{dated}", location.directory)
                }
            }
            FileKind::Page => format!("{}{extension}", metadata.basename()),
        };
        debug!("{}: deduced {} = {output:?}", metadata.basename(), config.output_key);
        metadata.set(config.output_key.as_str(), output);
    }

    if !metadata.contains_key(&config.title_key) {
        let title = match &kind {
            FileKind::Blog(entry) => deduce_title(&entry.slug),
            FileKind::Page => deduce_title(&location.stem),
        };
        debug!("{}: deduced {} = {title:?}", metadata.basename(), config.title_key);
        metadata.set(config.title_key.as_str(), title);
    }

    if let FileKind::Blog(entry) = &kind {
        if !metadata.contains_key(&config.date_key) {
            metadata.set(config.date_key.as_str(), entry.date_string());
        }
    }
}

/// Forward-slash directory and extension-less stem of a relative path.
struct SourceLocation {
    directory: String,
    stem: String,
}

impl SourceLocation {
    fn new(relative_path: &Path) -> Self {
        // `..` pops the previous part; anything escaping the root is clamped.
        let mut parts: Vec<String> = vec![];
        for c in relative_path.components() {
            match c {
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                Component::ParentDir => {
                    parts.pop();
                }
                _ => {}
            }
        }
        let file_name = parts.pop().unwrap_or_default();
        let stem = Path::new(&file_name)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or(file_name);
        Self {
            directory: parts.join("/"),
            stem,
        }
    }

    fn basename(&self) -> String {
        if self.directory.is_empty() {
            self.stem.clone()
        } else {
            format!("{}/{}", self.directory, self.stem)
        }
    }
}
