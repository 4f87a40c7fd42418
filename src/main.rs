use mediastyle::{BreakpointRegistry, ResolvedStyle, StyleSheet};
use std::env;
use std::error::Error;
use std::fs;

const USAGE: &str = "Usage: mediastyle <stylesheet> <width> [selector]";

fn print_style(selector: &str, style: &ResolvedStyle) {
    println!("{} {{", selector);
    for (name, value) in style.iter() {
        println!("    {}: {};", name, value);
    }
    println!("}}");
}

fn main() -> Result<(), Box<dyn Error>> {
    flexi_logger::Logger::with_env_or_str("info").start()?;

    let mut args = env::args().skip(1);
    let (path, width) = match (args.next(), args.next()) {
        (Some(path), Some(width)) => (path, width),
        _ => return Err(USAGE.into()),
    };
    let selector = args.next();

    let width = width
        .trim_end_matches("px")
        .parse::<u32>()
        .map_err(|e| format!("Invalid width \"{}\": {}", width, e))?;

    let stylesheet = fs::read_to_string(&path)?;
    let style_sheet = StyleSheet::parse_with(BreakpointRegistry::standard(), &stylesheet)?;

    log::info!(
        "Active breakpoints at {}px: {:?}",
        width,
        style_sheet.breakpoints().matching(width)
    );

    match selector {
        Some(selector) => print_style(&selector, &style_sheet.resolve(&selector, width)),
        None => {
            for (selector, style) in style_sheet.resolve_all(width) {
                print_style(selector, &style);
            }
        }
    }

    Ok(())
}
