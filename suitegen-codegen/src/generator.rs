//! Whole-suite rendering.

use suitegen_manifest::{Entry, Manifest, SortOrder};

use crate::{
    builder::CodeBuilder,
    sort::Sections,
    targets::{TestCase, TestTarget},
};

/// Width of the section banner lines.
const BANNER_WIDTH: usize = 98;

/// A `//` comment line naming a section, padded with slashes.
///
/// ```
/// assert_eq!(
///     suitegen_codegen::banner("SUPPORTED TESTS").len(),
///     98,
/// );
/// ```
pub fn banner(title: &str) -> String {
    let head = format!("// {} ", title);
    let pad = BANNER_WIDTH.saturating_sub(head.len());
    format!("{}{}", head, "/".repeat(pad))
}

/// Options shared by every target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Directory prefix for fixture paths, used verbatim.
    pub fixtures: String,
    /// Ordering inside each section.
    pub order: SortOrder,
}

impl GenerateOptions {
    pub fn new(fixtures: impl Into<String>) -> Self {
        Self {
            fixtures: fixtures.into(),
            order: SortOrder::default(),
        }
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }
}

/// Renders a parsed manifest into test source text.
#[derive(Debug, Clone)]
pub struct Generator<'a> {
    manifest: &'a Manifest,
    options: GenerateOptions,
}

impl<'a> Generator<'a> {
    pub fn new(manifest: &'a Manifest, options: GenerateOptions) -> Self {
        Self { manifest, options }
    }

    /// Entries grouped and ordered as they will be rendered.
    pub fn sections(&self) -> Sections<'a> {
        Sections::new(self.manifest, self.options.order)
    }

    /// Render both sections for `target`.
    ///
    /// The supported banner and tests come first, then the unsupported
    /// banner and tests. Banners are emitted even for empty sections.
    pub fn render(&self, target: &dyn TestTarget) -> String {
        let sections = self.sections();
        let mut builder = CodeBuilder::new(target.indent());

        builder.push_line(&banner("SUPPORTED TESTS"));
        self.render_section(&mut builder, target, &sections.supported);

        builder.push_line(&banner("UNSUPPORTED TESTS"));
        self.render_section(&mut builder, target, &sections.unsupported);

        builder.build()
    }

    fn render_section(&self, builder: &mut CodeBuilder, target: &dyn TestTarget, entries: &[&Entry]) {
        for entry in entries {
            let case = TestCase::new(entry, &self.options.fixtures);
            builder.extend(target.render_case(&case));
        }
    }
}
