mod breakpoint;
mod error;
mod parser;
mod resolver;
mod rule;

pub use breakpoint::{Breakpoint, BreakpointRegistry, WidthRange};
pub use error::ConfigurationError;
pub use resolver::{ResolvedStyle, Resolver};
pub use rule::{Property, RuleSet, StyleRule};

/// A loaded stylesheet: breakpoints plus the rules gated by them.
///
/// Loading is the only fallible step. Once built, the sheet is read-only and
/// resolving never fails; unknown selectors or widths simply resolve to fewer
/// (or no) properties.
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    breakpoints: BreakpointRegistry,
    rules: RuleSet,
}

impl StyleSheet {
    pub fn new(breakpoints: BreakpointRegistry) -> StyleSheet {
        StyleSheet {
            breakpoints,
            rules: RuleSet::new(),
        }
    }

    /// Parses `stylesheet` starting from an empty breakpoint registry.
    pub fn parse(stylesheet: &str) -> Result<StyleSheet, ConfigurationError> {
        StyleSheet::parse_with(BreakpointRegistry::new(), stylesheet)
    }

    /// Parses `stylesheet` on top of already registered breakpoints, e.g.
    /// [`BreakpointRegistry::standard`].
    pub fn parse_with(
        breakpoints: BreakpointRegistry,
        stylesheet: &str,
    ) -> Result<StyleSheet, ConfigurationError> {
        let mut style_sheet = StyleSheet::new(breakpoints);

        parser::parse_stylesheet(
            stylesheet,
            &mut style_sheet.breakpoints,
            &mut style_sheet.rules,
        )?;

        log::info!(
            "Loaded {} rules for {} selectors across {} breakpoints",
            style_sheet.rules.len(),
            style_sheet.rules.selectors().len(),
            style_sheet.breakpoints.len()
        );

        Ok(style_sheet)
    }

    pub fn register_breakpoint(
        &mut self,
        name: impl Into<String>,
        min_width: u32,
        max_width: Option<u32>,
    ) -> Result<(), ConfigurationError> {
        self.breakpoints.register(name, min_width, max_width)
    }

    /// Appends a rule; `breakpoint` must already be registered.
    pub fn add_rule<S, N, V>(
        &mut self,
        selector: S,
        breakpoint: Option<&str>,
        properties: impl IntoIterator<Item = (N, V)>,
    ) -> Result<&StyleRule, ConfigurationError>
    where
        S: Into<String>,
        N: Into<String>,
        V: Into<String>,
    {
        self.rules
            .push(&self.breakpoints, selector, breakpoint, properties)
    }

    pub fn breakpoints(&self) -> &BreakpointRegistry {
        &self.breakpoints
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    pub fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.breakpoints, &self.rules)
    }

    pub fn resolve(&self, selector: &str, width: u32) -> ResolvedStyle {
        self.resolver().resolve(selector, width)
    }

    pub fn resolve_all(&self, width: u32) -> Vec<(&str, ResolvedStyle)> {
        self.resolver().resolve_all(width)
    }
}
