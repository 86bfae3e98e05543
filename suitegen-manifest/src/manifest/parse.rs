//! Line-oriented manifest parsing.

use miette::SourceSpan;
use suitegen_core::to_pascal_case;

use super::{Entry, Manifest, Occurrences, Polarity};
use crate::{Result, SourceContext};

/// Extension stripped from fixture filenames before deriving identifiers.
const FIXTURE_EXTENSION: &str = ".json";

/// A raw manifest line with its position in the source.
#[derive(Debug, Clone, Copy)]
struct Line<'a> {
    /// 1-based line number.
    number: usize,
    /// Byte offset of the line start.
    offset: usize,
    /// Line text without its terminator.
    text: &'a str,
}

impl Line<'_> {
    fn span(&self) -> SourceSpan {
        (self.offset, self.text.len()).into()
    }

    /// Blank lines and `#` comments carry no entry.
    fn is_skipped(&self) -> bool {
        let trimmed = self.text.trim();
        trimmed.is_empty() || trimmed.starts_with('#')
    }
}

fn lines(content: &str) -> impl Iterator<Item = Line<'_>> {
    let mut offset = 0;
    content
        .split_inclusive('\n')
        .enumerate()
        .map(move |(i, raw)| {
            let line = Line {
                number: i + 1,
                offset,
                text: raw.trim_end_matches(['\n', '\r']),
            };
            offset += raw.len();
            line
        })
}

/// The subject of a fixture filename: the two-character polarity prefix and
/// the extension removed.
///
/// `y_array_empty.json` -> `array_empty`. A `.json` suffix is matched
/// explicitly; other extensions are removed from the last dot.
pub(crate) fn base_name(filename: &str) -> &str {
    let rest = match filename.char_indices().nth(2) {
        Some((i, _)) => &filename[i..],
        None => "",
    };

    if let Some(stem) = rest.strip_suffix(FIXTURE_EXTENSION) {
        stem
    } else if let Some((stem, _)) = rest.rsplit_once('.') {
        stem
    } else {
        rest
    }
}

fn parse_line(
    ctx: &SourceContext,
    line: Line<'_>,
    occurrences: &mut Occurrences,
) -> Result<Option<Entry>> {
    if line.is_skipped() {
        return Ok(None);
    }

    // Status is a plain containment check over the whole line.
    let supported = line.text.contains("PASS");

    let Some((_, after)) = line.text.split_once(':') else {
        return Err(ctx.missing_filename_error(line.number, line.span()));
    };
    let field = after.split_once(':').map_or(after, |(field, _)| field);
    let filename = field.trim();

    let Some(first) = filename.chars().next() else {
        return Err(ctx.missing_filename_error(line.number, line.span()));
    };

    let Some(polarity) = Polarity::from_prefix(first) else {
        let offset = line.offset
            + (line.text.len() - after.len())
            + (field.len() - field.trim_start().len());
        return Err(ctx.invalid_polarity_error(
            line.number,
            filename,
            first,
            (offset, first.len_utf8()),
        ));
    };

    let base_name = base_name(filename);
    let identifier = to_pascal_case(base_name);
    let occurrence = occurrences.record(&identifier);

    Ok(Some(Entry {
        supported,
        polarity,
        filename: filename.to_string(),
        base_name: base_name.to_string(),
        identifier,
        occurrence,
        line: line.number,
    }))
}

impl Manifest {
    /// Parse manifest text, naming it `filename` in error reports.
    ///
    /// Fails on the first malformed data line; no entries are returned in
    /// that case.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        let ctx = SourceContext::new(content, filename);
        let mut occurrences = Occurrences::new();
        let mut entries = Vec::new();

        for line in lines(ctx.src()) {
            if let Some(entry) = parse_line(&ctx, line, &mut occurrences)? {
                entries.push(entry);
            }
        }

        Ok(Self {
            entries,
            occurrences,
        })
    }
}
