use std::ops::RangeInclusive;

use rand::{Rng, SeedableRng};

use crate::{
    error::Result,
    item::{Category, Item},
    placeholder::{fill_description, fill_name},
    spec_table::SpecKind,
    templates::{self, Template},
};

pub const QUANTITY_RANGE: RangeInclusive<u32> = 5..=500;

/// Produces synthetic items from one seeded random source.
#[derive(Clone)]
pub struct ItemGenerator {
    random: rand::rngs::SmallRng,
}
impl ItemGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            random: rand::rngs::SmallRng::seed_from_u64(seed),
        }
    }

    /// Builds the item for generation step `index` from a random template of
    /// `category`.
    pub fn generate(&mut self, category: Category, index: usize) -> Result<Item> {
        let template = templates::select(category, &mut self.random)?;
        build_item(template, category, index, &mut self.random)
    }
}

pub fn build_item<R: Rng + ?Sized>(
    template: &Template,
    category: Category,
    index: usize,
    random: &mut R,
) -> Result<Item> {
    let adjective = SpecKind::Adjective.sample(random);
    let name = fill_name(template, adjective, index, random)?;
    let description = fill_description(template, adjective, random)?;
    let price = draw_price(template, random);
    let quantity = draw_quantity(random);
    log::debug!("generated {name:?} ({category}) x{quantity} @ {price}");

    Ok(Item {
        name,
        description,
        category,
        quantity,
        price,
    })
}

/// Uniform price in the template's range, rounded to cents.
pub fn draw_price<R: Rng + ?Sized>(template: &Template, random: &mut R) -> f64 {
    round_to_cents(random.random_range(template.min_price..=template.max_price))
}

pub fn draw_quantity<R: Rng + ?Sized>(random: &mut R) -> u32 {
    random.random_range(QUANTITY_RANGE)
}

pub fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use rand::rngs::SmallRng;

    use super::*;
    use crate::templates::{PLACEHOLDER, templates_for};

    fn is_cents(price: f64) -> bool {
        round_to_cents(price) == price
    }

    #[test]
    fn every_template_builds_a_well_formed_item() {
        let mut random = SmallRng::seed_from_u64(11);
        let mut index = 0;
        for category in Category::ALL {
            for template in templates_for(category) {
                for _ in 0..10 {
                    let item = build_item(template, category, index, &mut random).unwrap();
                    assert!(item.check_shape().is_ok());
                    assert!(!item.name.contains(PLACEHOLDER), "{}", item.name);
                    assert!(!item.description.contains(PLACEHOLDER), "{}", item.description);
                    assert_eq!(item.category, category);
                    assert!(QUANTITY_RANGE.contains(&item.quantity));
                    assert!(is_cents(item.price));
                    assert!(item.price >= template.min_price && item.price <= template.max_price);
                    index += 1;
                }
            }
        }
    }

    #[test]
    fn same_seed_reproduces_items() {
        let mut first = ItemGenerator::new(42);
        let mut second = ItemGenerator::new(42);
        for index in 0..100 {
            let category = Category::round_robin(index);
            assert_eq!(
                first.generate(category, index).unwrap(),
                second.generate(category, index).unwrap()
            );
        }
    }

    #[test]
    fn single_electronics_item_is_reproducible() {
        let item = ItemGenerator::new(2024).generate(Category::Electronics, 0).unwrap();
        let again = ItemGenerator::new(2024).generate(Category::Electronics, 0).unwrap();
        assert_eq!(item, again);

        assert_eq!(item.category, Category::Electronics);
        assert!(item.name.ends_with(" - Model 0001"), "{}", item.name);
        assert!(!item.description.contains(PLACEHOLDER));
        assert!(QUANTITY_RANGE.contains(&item.quantity));
        assert!(is_cents(item.price));

        let base = item.name.trim_end_matches(" - Model 0001");
        assert!(
            templates_for(Category::Electronics)
                .iter()
                .filter(|template| {
                    template.name.split(PLACEHOLDER).all(|part| base.contains(part.trim()))
                })
                .any(|template| item.price >= template.min_price && item.price <= template.max_price)
        );
    }

    #[test]
    fn rounding_keeps_two_decimals() {
        assert_eq!(round_to_cents(12.345_6), 12.35);
        assert_eq!(round_to_cents(7.0), 7.0);
        assert_eq!(round_to_cents(0.004), 0.0);
    }

    #[test]
    fn degenerate_price_range_yields_the_bound() {
        let mut random = SmallRng::seed_from_u64(0);
        let fixed = Template {
            name: "Token",
            description: "Token",
            min_price: 9.99,
            max_price: 9.99,
            name_fill: SpecKind::Adjective,
            description_fill: &[],
        };
        assert_eq!(draw_price(&fixed, &mut random), 9.99);
    }
}
