//! Turns template patterns into concrete names and descriptions.

use rand::Rng;

use crate::{
    error::{CatalogError, Result},
    spec_table::SpecKind,
    templates::{PLACEHOLDER, Template, placeholder_count},
};

/// Above this many placeholders a description with no declared fills is
/// passed through as written.
const MAX_UNDECLARED_PLACEHOLDERS: usize = 3;

/// Substitutes `values` into the placeholders of `pattern`, left to right.
pub fn fill(pattern: &str, values: &[&str]) -> Result<String> {
    let placeholders = placeholder_count(pattern);
    if placeholders != values.len() {
        return Err(CatalogError::PlaceholderMismatch {
            pattern: pattern.to_string(),
            placeholders,
            values: values.len(),
        });
    }

    let mut filled = String::with_capacity(pattern.len());
    let mut rest = pattern;
    for value in values {
        // counted above, so every value has a placeholder to land in
        let Some((head, tail)) = rest.split_once(PLACEHOLDER) else {
            break;
        };
        filled.push_str(head);
        filled.push_str(value);
        rest = tail;
    }
    filled.push_str(rest);
    Ok(filled)
}

/// Draws a value for `kind`; adjective slots reuse the item's adjective.
fn resolve<'a, R: Rng + ?Sized>(kind: SpecKind, adjective: &'a str, random: &mut R) -> &'a str {
    match kind {
        SpecKind::Adjective => adjective,
        other => other.sample(random),
    }
}

/// Fills or prefixes the template name and appends the 1-based model suffix
/// that keeps generated names unique.
pub fn fill_name<R: Rng + ?Sized>(
    template: &Template,
    adjective: &str,
    index: usize,
    random: &mut R,
) -> Result<String> {
    let base = if placeholder_count(template.name) == 0 {
        format!("{adjective} {}", template.name)
    } else {
        let value = resolve(template.name_fill, adjective, random);
        fill(template.name, &[value])?
    };
    Ok(format!("{base} - Model {:04}", index + 1))
}

pub fn fill_description<R: Rng + ?Sized>(
    template: &Template,
    adjective: &str,
    random: &mut R,
) -> Result<String> {
    let placeholders = template.description_placeholders();
    if template.description_fill.is_empty() && placeholders > MAX_UNDECLARED_PLACEHOLDERS {
        log::warn!(
            "leaving {placeholders} placeholders unfilled in {:?}",
            template.description
        );
        return Ok(template.description.to_string());
    }

    let values: Vec<&str> = template
        .description_fill
        .iter()
        .map(|kind| resolve(*kind, adjective, random))
        .collect();
    fill(template.description, &values)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    fn template(name: &'static str, description: &'static str, fill: &'static [SpecKind]) -> Template {
        Template {
            name,
            description,
            min_price: 1.0,
            max_price: 2.0,
            name_fill: SpecKind::ScreenSize,
            description_fill: fill,
        }
    }

    #[test]
    fn fill_substitutes_in_order() {
        assert_eq!(fill("{}GB and {}TB", &["16", "2"]).unwrap(), "16GB and 2TB");
        assert_eq!(fill("no slots", &[]).unwrap(), "no slots");
        assert_eq!(fill("{}{}", &["a", "b"]).unwrap(), "ab");
    }

    #[test]
    fn fill_rejects_mismatched_values() {
        let err = fill("{} and {}", &["one"]).unwrap_err();
        assert!(matches!(
            err,
            CatalogError::PlaceholderMismatch {
                placeholders: 2,
                values: 1,
                ..
            }
        ));
        assert!(fill("plain", &["extra"]).is_err());
    }

    #[test]
    fn name_without_placeholder_gets_adjective_prefix() {
        let mut random = SmallRng::seed_from_u64(1);
        let plain = template("Stapler", "Stapler", &[]);
        let name = fill_name(&plain, "Compact", 0, &mut random).unwrap();
        assert_eq!(name, "Compact Stapler - Model 0001");
    }

    #[test]
    fn name_placeholder_uses_declared_kind() {
        let mut random = SmallRng::seed_from_u64(1);
        let monitor = template("Monitor {}", "x", &[]);
        let name = fill_name(&monitor, "Compact", 41, &mut random).unwrap();
        let size = name
            .strip_prefix("Monitor ")
            .and_then(|rest| rest.strip_suffix(" - Model 0042"))
            .unwrap();
        assert!(SpecKind::ScreenSize.values().contains(&size));
    }

    #[test]
    fn model_suffix_widens_past_four_digits() {
        let mut random = SmallRng::seed_from_u64(1);
        let plain = template("Ruler", "Ruler", &[]);
        let name = fill_name(&plain, "Basic", 12_344, &mut random).unwrap();
        assert_eq!(name, "Basic Ruler - Model 12345");
    }

    #[test]
    fn adjective_slots_reuse_the_item_adjective() {
        let mut random = SmallRng::seed_from_u64(9);
        let t = template("Desk Pad", "{} desk pad in {}", &[SpecKind::Adjective, SpecKind::Color]);
        let description = fill_description(&t, "Elite", &mut random).unwrap();
        let color = description.strip_prefix("Elite desk pad in ").unwrap();
        assert!(SpecKind::Color.values().contains(&color));
    }

    #[test]
    fn display_description_gets_size_panel_and_refresh() {
        let mut random = SmallRng::seed_from_u64(5);
        let t = template(
            "Monitor {}",
            "{}-inch {} monitor with {}Hz refresh rate",
            &[SpecKind::ScreenSize, SpecKind::PanelType, SpecKind::RefreshRate],
        );
        let description = fill_description(&t, "Pro", &mut random).unwrap();
        assert!(!description.contains(PLACEHOLDER));
        let (size, rest) = description.split_once("-inch ").unwrap();
        let (panel, rest) = rest.split_once(" monitor with ").unwrap();
        let refresh = rest.strip_suffix("Hz refresh rate").unwrap();
        assert!(SpecKind::ScreenSize.values().contains(&size));
        assert!(SpecKind::PanelType.values().contains(&panel));
        assert!(SpecKind::RefreshRate.values().contains(&refresh));
    }

    #[test]
    fn four_undeclared_placeholders_pass_through() {
        let mut random = SmallRng::seed_from_u64(5);
        let t = template("Kit", "{} {} {} {} kit", &[]);
        assert_eq!(fill_description(&t, "Pro", &mut random).unwrap(), "{} {} {} {} kit");
    }

    #[test]
    fn undeclared_fill_below_the_gap_is_an_error() {
        let mut random = SmallRng::seed_from_u64(5);
        let t = template("Kit", "{} kit", &[]);
        assert!(fill_description(&t, "Pro", &mut random).is_err());
    }

    #[test]
    fn description_without_placeholders_is_verbatim() {
        let mut random = SmallRng::seed_from_u64(5);
        let t = template("Kit", "A complete kit", &[]);
        assert_eq!(fill_description(&t, "Pro", &mut random).unwrap(), "A complete kit");
    }
}
