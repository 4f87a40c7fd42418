use super::breakpoint::BreakpointRegistry;
use super::rule::{RuleSet, StyleRule};
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::fmt;

/// Final property values of one selector at one viewport width.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedStyle {
    properties: BTreeMap<String, String>,
}

impl ResolvedStyle {
    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.properties.iter()
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.properties
    }
}

impl fmt::Display for ResolvedStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.properties {
            writeln!(f, "{}: {};", name, value)?;
        }

        Ok(())
    }
}

/// Folds rules into resolved styles. Holds only shared references, so any
/// number of resolvers can read the same rule set.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'s> {
    breakpoints: &'s BreakpointRegistry,
    rules: &'s RuleSet,
}

impl<'s> Resolver<'s> {
    pub fn new(breakpoints: &'s BreakpointRegistry, rules: &'s RuleSet) -> Resolver<'s> {
        Resolver { breakpoints, rules }
    }

    /// Applies every rule for `selector` whose breakpoint contains `width`
    /// (or that has no breakpoint) in declaration order, last write wins.
    pub fn resolve(&self, selector: &str, width: u32) -> ResolvedStyle {
        let active_breakpoints = self.breakpoints.matching(width);

        self.fold(
            self.rules
                .iter()
                .filter(|rule| rule.selector() == selector),
            &active_breakpoints,
            width,
        )
    }

    /// Resolves every declared selector, skipping those with nothing to apply
    /// at `width`.
    pub fn resolve_all(&self, width: u32) -> Vec<(&'s str, ResolvedStyle)> {
        let active_breakpoints = self.breakpoints.matching(width);

        self.rules
            .selectors()
            .into_iter()
            .map(|selector| {
                let style = self.fold(
                    self.rules
                        .iter()
                        .filter(|rule| rule.selector() == selector),
                    &active_breakpoints,
                    width,
                );
                (selector, style)
            })
            .filter(|(_, style)| !style.is_empty())
            .collect()
    }

    fn fold<'r>(
        &self,
        rules: impl Iterator<Item = &'r StyleRule>,
        active_breakpoints: &[&str],
        width: u32,
    ) -> ResolvedStyle {
        let mut properties = BTreeMap::new();

        for rule in rules.filter(|rule| {
            rule.breakpoint()
                .map_or(true, |name| active_breakpoints.contains(&name))
        }) {
            log::trace!(
                "{}px: applying rule #{} for {}",
                width,
                rule.source_order(),
                rule.selector()
            );

            for (name, value) in rule.properties() {
                properties.insert(name.clone(), value.clone());
            }
        }

        ResolvedStyle { properties }
    }
}
