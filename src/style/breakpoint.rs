use super::error::ConfigurationError;
use once_cell::sync::Lazy;
use std::fmt;

/// The breakpoints every media-object stylesheet was written against.
static STANDARD_BREAKPOINTS: Lazy<BreakpointRegistry> = Lazy::new(|| {
    macro_rules! breakpoint {
        ($name: expr, $min: expr, $max: expr) => {
            Breakpoint {
                name: $name.to_owned(),
                range: WidthRange {
                    min_width: $min,
                    max_width: $max,
                },
            }
        };
    }

    BreakpointRegistry {
        breakpoints: vec![
            breakpoint!("mobile", 0, Some(599)),
            breakpoint!("tablet-only", 600, Some(1023)),
            breakpoint!("tablet-up", 600, None),
            breakpoint!("desktop-up", 1024, None),
        ],
    }
});

/// Inclusive viewport width range in CSS pixels. A missing maximum means the
/// range is open to the right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthRange {
    min_width: u32,
    max_width: Option<u32>,
}

impl WidthRange {
    pub fn min_width(&self) -> u32 {
        self.min_width
    }

    pub fn max_width(&self) -> Option<u32> {
        self.max_width
    }

    #[inline]
    pub fn contains(&self, width: u32) -> bool {
        width >= self.min_width && self.max_width.map_or(true, |max| width <= max)
    }
}

impl fmt::Display for WidthRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.max_width {
            Some(max_width) => write!(f, "[{}px, {}px]", self.min_width, max_width),
            None => write!(f, "[{}px, ∞)", self.min_width),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakpoint {
    name: String,
    range: WidthRange,
}

impl Breakpoint {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn range(&self) -> WidthRange {
        self.range
    }

    pub fn matches(&self, width: u32) -> bool {
        self.range.contains(width)
    }
}

/// Named viewport ranges, kept in registration order.
#[derive(Debug, Clone, Default)]
pub struct BreakpointRegistry {
    breakpoints: Vec<Breakpoint>,
}

impl BreakpointRegistry {
    pub fn new() -> BreakpointRegistry {
        BreakpointRegistry::default()
    }

    /// `mobile`, `tablet-only`, `tablet-up` and `desktop-up`.
    pub fn standard() -> BreakpointRegistry {
        STANDARD_BREAKPOINTS.clone()
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        min_width: u32,
        max_width: Option<u32>,
    ) -> Result<(), ConfigurationError> {
        let name = name.into();

        if name.is_empty() {
            return Err(ConfigurationError::EmptyBreakpointName);
        }

        if self.contains(&name) {
            return Err(ConfigurationError::DuplicateBreakpoint(name));
        }

        if let Some(max_width) = max_width {
            if min_width > max_width {
                return Err(ConfigurationError::InvalidWidthRange {
                    breakpoint_name: name,
                    min_width,
                    max_width,
                });
            }
        }

        let range = WidthRange {
            min_width,
            max_width,
        };
        log::debug!("Registered breakpoint \"{}\" {}", name, range);

        self.breakpoints.push(Breakpoint { name, range });

        Ok(())
    }

    /// Names of all breakpoints containing `width`. Overlapping breakpoints
    /// all match.
    pub fn matching(&self, width: u32) -> Vec<&str> {
        self.breakpoints
            .iter()
            .filter(|breakpoint| breakpoint.matches(width))
            .map(Breakpoint::name)
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<&Breakpoint> {
        self.breakpoints
            .iter()
            .find(|breakpoint| breakpoint.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Breakpoint> {
        self.breakpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.breakpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.breakpoints.is_empty()
    }
}

#[cfg(test)]
mod tests {

    use super::BreakpointRegistry;
    use crate::style::ConfigurationError;

    #[test]
    pub fn test_register_and_match() {
        let mut registry = BreakpointRegistry::new();
        registry.register("mobile", 0, Some(599)).unwrap();
        registry.register("tablet-up", 600, None).unwrap();

        assert_eq!(vec!["mobile"], registry.matching(0));
        assert_eq!(vec!["mobile"], registry.matching(599));
        assert_eq!(vec!["tablet-up"], registry.matching(600));
        assert_eq!(vec!["tablet-up"], registry.matching(u32::max_value()));
    }

    #[test]
    pub fn test_duplicate_name() {
        let mut registry = BreakpointRegistry::new();
        registry.register("mobile", 0, Some(599)).unwrap();

        assert_eq!(
            Err(ConfigurationError::DuplicateBreakpoint("mobile".to_owned())),
            registry.register("mobile", 0, Some(320))
        );
        assert_eq!(1, registry.len());
    }

    #[test]
    pub fn test_invalid_definitions() {
        let mut registry = BreakpointRegistry::new();

        assert_eq!(
            Err(ConfigurationError::EmptyBreakpointName),
            registry.register("", 0, None)
        );
        assert_eq!(
            Err(ConfigurationError::InvalidWidthRange {
                breakpoint_name: "upside-down".to_owned(),
                min_width: 800,
                max_width: 600,
            }),
            registry.register("upside-down", 800, Some(600))
        );
        assert!(registry.is_empty());

        // a single pixel is fine
        registry.register("exact", 768, Some(768)).unwrap();
        assert_eq!(vec!["exact"], registry.matching(768));
        assert!(registry.matching(767).is_empty());
    }

    #[test]
    pub fn test_overlapping_breakpoints() {
        let registry = BreakpointRegistry::standard();

        assert_eq!(vec!["mobile"], registry.matching(320));
        assert_eq!(vec!["tablet-only", "tablet-up"], registry.matching(800));
        assert_eq!(vec!["tablet-up", "desktop-up"], registry.matching(1024));
    }

    #[test]
    pub fn test_standard_is_independent_copy() {
        let mut registry = BreakpointRegistry::standard();
        registry.register("wide", 1440, None).unwrap();

        assert_eq!(5, registry.len());
        assert_eq!(4, BreakpointRegistry::standard().len());
        assert_eq!(
            Some(599),
            registry.get("mobile").and_then(|b| b.range().max_width())
        );
    }
}
