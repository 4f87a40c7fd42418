use super::breakpoint::BreakpointRegistry;
use super::error::ConfigurationError;
use super::rule::{Property, RuleSet};
use pest::iterators::{Pair, Pairs};
use pest::Parser;

#[derive(pest_derive::Parser)]
#[grammar = "grammar/stylesheet.pest"]
struct StyleSheetParser;

/// Reads stylesheet text into `breakpoints` and `rules`. Definitions are
/// processed top to bottom, so a breakpoint has to be defined before an
/// `@include` block uses it.
pub fn parse_stylesheet(
    stylesheet: &str,
    breakpoints: &mut BreakpointRegistry,
    rules: &mut RuleSet,
) -> Result<(), ConfigurationError> {
    let pairs = StyleSheetParser::parse(Rule::stylesheet, stylesheet)
        .map_err(|e| ConfigurationError::Syntax(e.to_string()))?;

    for pair in pairs.flat_map(|stylesheet| stylesheet.into_inner()) {
        match pair.as_rule() {
            Rule::breakpoint_definition => handle_breakpoint_definition(pair, breakpoints)?,
            Rule::include_block => handle_include_block(pair, breakpoints, rules)?,
            Rule::style_rule => handle_style_rule(pair, None, breakpoints, rules)?,
            Rule::EOI => break,
            _ => unreachable!(),
        }
    }

    Ok(())
}

fn handle_breakpoint_definition(
    definition: Pair<'_, Rule>,
    breakpoints: &mut BreakpointRegistry,
) -> Result<(), ConfigurationError> {
    let mut parts = definition.into_inner();

    next_part(&mut parts, Rule::breakpoint_keyword);
    let name = next_part(&mut parts, Rule::identifier).as_str();
    let min_width = parse_width(next_part(&mut parts, Rule::min_width))?;
    let max_width = match parts.next() {
        Some(max_width) => {
            debug_assert_eq!(max_width.as_rule(), Rule::max_width);
            Some(parse_width(max_width)?)
        }
        None => None,
    };

    breakpoints.register(name, min_width, max_width)
}

fn handle_include_block(
    block: Pair<'_, Rule>,
    breakpoints: &BreakpointRegistry,
    rules: &mut RuleSet,
) -> Result<(), ConfigurationError> {
    let mut parts = block.into_inner();

    next_part(&mut parts, Rule::include_keyword);
    let breakpoint_name = next_part(&mut parts, Rule::identifier).as_str();

    for style_rule in parts {
        debug_assert_eq!(style_rule.as_rule(), Rule::style_rule);
        handle_style_rule(style_rule, Some(breakpoint_name), breakpoints, rules)?;
    }

    Ok(())
}

fn handle_style_rule(
    style_rule: Pair<'_, Rule>,
    breakpoint_name: Option<&str>,
    breakpoints: &BreakpointRegistry,
    rules: &mut RuleSet,
) -> Result<(), ConfigurationError> {
    let mut selectors = Vec::new();
    let mut properties: Vec<Property> = Vec::new();

    for part in style_rule.into_inner() {
        match part.as_rule() {
            Rule::selector_list => {
                selectors.extend(part.into_inner().map(|selector| selector.as_str()))
            }
            Rule::declaration_block => {
                for declaration in part.into_inner() {
                    properties.push(handle_declaration(declaration));
                }
            }
            _ => unreachable!(),
        }
    }

    // `.a, .b { .. }` is shorthand for one rule per selector
    for selector in selectors {
        let rule = rules.push(breakpoints, selector, breakpoint_name, properties.clone())?;

        log::trace!(
            "Rule #{} {} @ {:?}: {} declarations",
            rule.source_order(),
            rule.selector(),
            rule.breakpoint(),
            rule.properties().len()
        );
    }

    Ok(())
}

fn handle_declaration(declaration: Pair<'_, Rule>) -> Property {
    let mut parts = declaration.into_inner();

    let name = next_part(&mut parts, Rule::property_name).as_str();
    // the value runs up to `;`, `}` or a comment, so it may carry trailing spaces
    let value = next_part(&mut parts, Rule::property_value).as_str().trim();

    (name.to_owned(), value.to_owned())
}

// The grammar fixes the order of the inner pairs of every rule handled here.
fn next_part<'i>(parts: &mut Pairs<'i, Rule>, expected: Rule) -> Pair<'i, Rule> {
    match parts.next() {
        Some(part) => {
            debug_assert_eq!(part.as_rule(), expected);
            part
        }
        None => unreachable!("grammar guarantees a {:?}", expected),
    }
}

fn parse_width(width: Pair<'_, Rule>) -> Result<u32, ConfigurationError> {
    let number = width.as_str().trim_end_matches("px");

    number
        .parse::<u32>()
        .map_err(|_| ConfigurationError::InvalidWidth(width.as_str().to_owned()))
}
