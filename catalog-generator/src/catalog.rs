use std::{collections::BTreeMap, fmt};

use crate::{
    error::Result,
    item::{Category, Item},
    item_generator::ItemGenerator,
};

/// Seed items followed by the generated items, in generation order.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    items: Vec<Item>,
    seed_count: usize,
}

impl Catalog {
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn seed_items(&self) -> &[Item] {
        &self.items[..self.seed_count]
    }

    pub fn generated_items(&self) -> &[Item] {
        &self.items[self.seed_count..]
    }

    pub fn summary(&self) -> CatalogSummary {
        let mut per_category = BTreeMap::new();
        for item in &self.items {
            *per_category.entry(item.category.as_str()).or_insert(0) += 1;
        }
        CatalogSummary {
            generated: self.generated_items().len(),
            total: self.items.len(),
            categories: Category::ALL.len(),
            per_category,
        }
    }
}

/// Generates `count` items, assigning categories round-robin, and appends
/// them after `seed_items`.
pub fn assemble(
    seed_items: Vec<Item>,
    count: usize,
    item_generator: &mut ItemGenerator,
) -> Result<Catalog> {
    let seed_count = seed_items.len();
    let mut items = seed_items;
    items.reserve(count);
    for index in 0..count {
        items.push(item_generator.generate(Category::round_robin(index), index)?);
    }
    log::info!("generated {count} items after {seed_count} seed items");

    Ok(Catalog { items, seed_count })
}

/// Counts for the console report, keyed by category name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub generated: usize,
    pub total: usize,
    pub categories: usize,
    pub per_category: BTreeMap<&'static str, usize>,
}

impl fmt::Display for CatalogSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Generated {} new items", self.generated)?;
        writeln!(f, "Total items: {}", self.total)?;
        writeln!(f, "Categories covered: {}", self.categories)?;
        writeln!(f)?;
        write!(f, "Category distribution:")?;
        for (category, count) in &self.per_category {
            write!(f, "\n  {category}: {count}")?;
        }
        Ok(())
    }
}
