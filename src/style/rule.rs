use super::breakpoint::BreakpointRegistry;
use super::error::ConfigurationError;

pub type Property = (String, String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRule {
    source_order: usize,
    selector: String,
    breakpoint: Option<String>,
    properties: Vec<Property>,
}

impl StyleRule {
    pub fn source_order(&self) -> usize {
        self.source_order
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// `None` for rules that apply at every width.
    pub fn breakpoint(&self) -> Option<&str> {
        self.breakpoint.as_deref()
    }

    pub fn properties(&self) -> &[Property] {
        &self.properties
    }
}

/// Append-only list of rules. Declaration order is override order.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: Vec<StyleRule>,
}

impl RuleSet {
    pub fn new() -> RuleSet {
        RuleSet::default()
    }

    /// Validates the rule against `registry` and appends it.
    pub fn push<S, N, V>(
        &mut self,
        registry: &BreakpointRegistry,
        selector: S,
        breakpoint: Option<&str>,
        properties: impl IntoIterator<Item = (N, V)>,
    ) -> Result<&StyleRule, ConfigurationError>
    where
        S: Into<String>,
        N: Into<String>,
        V: Into<String>,
    {
        let selector = selector.into();

        if selector.trim().is_empty() {
            return Err(ConfigurationError::EmptySelector);
        }

        if let Some(breakpoint_name) = breakpoint {
            if !registry.contains(breakpoint_name) {
                return Err(ConfigurationError::UnknownBreakpoint {
                    selector,
                    breakpoint_name: breakpoint_name.to_owned(),
                });
            }
        }

        let properties = properties
            .into_iter()
            .map(|(name, value)| (name.into(), value.into()))
            .collect::<Vec<Property>>();

        if properties.iter().any(|(name, _)| name.trim().is_empty()) {
            return Err(ConfigurationError::EmptyPropertyName { selector });
        }

        let source_order = self.rules.len();
        self.rules.push(StyleRule {
            source_order,
            selector,
            breakpoint: breakpoint.map(str::to_owned),
            properties,
        });

        Ok(&self.rules[source_order])
    }

    pub fn iter(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter()
    }

    /// Distinct selectors, in order of their first declaration.
    pub fn selectors(&self) -> Vec<&str> {
        let mut selectors: Vec<&str> = Vec::new();

        for rule in &self.rules {
            if !selectors.contains(&rule.selector()) {
                selectors.push(rule.selector());
            }
        }

        selectors
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {

    use super::RuleSet;
    use crate::style::{BreakpointRegistry, ConfigurationError};

    #[test]
    pub fn test_source_order() {
        let registry = BreakpointRegistry::standard();
        let mut rules = RuleSet::new();

        rules
            .push(&registry, ".media", None, vec![("display", "flex")])
            .unwrap();
        let rule = rules
            .push(
                &registry,
                ".media__offset",
                Some("tablet-up"),
                vec![("margin-top", "60px")],
            )
            .unwrap();

        assert_eq!(1, rule.source_order());
        assert_eq!(Some("tablet-up"), rule.breakpoint());
        assert_eq!(
            &[("margin-top".to_owned(), "60px".to_owned())],
            rule.properties()
        );
        assert_eq!(2, rules.len());
    }

    #[test]
    pub fn test_rejects_malformed_rules() {
        let registry = BreakpointRegistry::standard();
        let mut rules = RuleSet::new();

        assert_eq!(
            Err(ConfigurationError::UnknownBreakpoint {
                selector: ".media".to_owned(),
                breakpoint_name: "watch".to_owned(),
            }),
            rules.push(&registry, ".media", Some("watch"), vec![("color", "red")])
        );
        assert_eq!(
            Err(ConfigurationError::EmptySelector),
            rules.push(&registry, "  ", None, vec![("color", "red")])
        );
        assert_eq!(
            Err(ConfigurationError::EmptyPropertyName {
                selector: ".media".to_owned()
            }),
            rules.push(&registry, ".media", None, vec![("", "red")])
        );

        assert!(rules.is_empty());
    }

    #[test]
    pub fn test_selectors_are_distinct() {
        let registry = BreakpointRegistry::standard();
        let mut rules = RuleSet::new();

        for (selector, breakpoint) in &[
            (".media", None),
            (".media__img", Some("mobile")),
            (".media", Some("desktop-up")),
        ] {
            rules
                .push(&registry, *selector, *breakpoint, vec![("float", "left")])
                .unwrap();
        }

        assert_eq!(vec![".media", ".media__img"], rules.selectors());
    }
}
