//! The hand-written items that lead every catalog, unchanged by generation.

use crate::{
    error::Result,
    item::{Category, Item},
};

struct SeedItem {
    name: &'static str,
    description: &'static str,
    category: Category,
    quantity: u32,
    price: f64,
}

const fn seed(
    name: &'static str,
    description: &'static str,
    category: Category,
    quantity: u32,
    price: f64,
) -> SeedItem {
    SeedItem {
        name,
        description,
        category,
        quantity,
        price,
    }
}

const SEED_ITEMS: &[SeedItem] = &[
    seed(
        "MacBook Pro 16\"",
        "Apple MacBook Pro with M3 Max chip, 36GB RAM, 1TB SSD",
        Category::Electronics,
        15,
        3499.99,
    ),
    seed(
        "Dell UltraSharp 27\" Monitor",
        "4K UHD USB-C monitor with HDR400 and 99% sRGB coverage",
        Category::Electronics,
        30,
        629.99,
    ),
    seed(
        "Ergonomic Office Chair",
        "Mesh back office chair with lumbar support and adjustable armrests",
        Category::Furniture,
        50,
        349.0,
    ),
    seed(
        "Standing Desk",
        "Electric height-adjustable standing desk, 60x30 inches",
        Category::Furniture,
        25,
        549.99,
    ),
    seed(
        "Mechanical Keyboard",
        "Wireless mechanical keyboard with Cherry MX Brown switches and RGB backlight",
        Category::Accessories,
        100,
        149.99,
    ),
    seed(
        "Wireless Mouse",
        "Ergonomic wireless mouse with 4000 DPI sensor and USB-C charging",
        Category::Accessories,
        200,
        79.99,
    ),
    seed(
        "USB-C Hub",
        "7-in-1 USB-C hub with HDMI, ethernet, SD card reader, and USB-A ports",
        Category::Accessories,
        75,
        59.99,
    ),
    seed(
        "Noise Cancelling Headphones",
        "Over-ear wireless headphones with active noise cancellation and 30hr battery",
        Category::Electronics,
        40,
        299.99,
    ),
    seed(
        "Webcam HD 1080p",
        "Full HD webcam with auto-focus, built-in microphone, and privacy shutter",
        Category::Electronics,
        60,
        89.99,
    ),
    seed(
        "Desk Lamp LED",
        "Adjustable LED desk lamp with 5 brightness levels and USB charging port",
        Category::Furniture,
        80,
        39.99,
    ),
    seed(
        "Laptop Backpack",
        "Water-resistant backpack fits up to 17\" laptops with anti-theft pocket",
        Category::Accessories,
        120,
        69.99,
    ),
    seed(
        "External SSD 1TB",
        "Portable NVMe SSD with 1050MB/s read speed and USB-C connection",
        Category::Electronics,
        45,
        109.99,
    ),
    seed(
        "Whiteboard 48x36",
        "Magnetic dry-erase whiteboard with aluminum frame and marker tray",
        Category::OfficeSupplies,
        20,
        89.0,
    ),
    seed(
        "Notebook Pack (5-pk)",
        "Premium ruled notebooks, 100 pages each, A5 size, assorted colors",
        Category::OfficeSupplies,
        300,
        24.99,
    ),
    seed(
        "Cable Management Kit",
        "Under-desk cable tray with velcro ties, clips, and adhesive cord holders",
        Category::Accessories,
        150,
        29.99,
    ),
    seed(
        "Monitor Arm",
        "Single monitor arm mount, supports 17-34\" screens up to 20 lbs, VESA compatible",
        Category::Furniture,
        35,
        119.99,
    ),
    seed(
        "Wireless Charger Pad",
        "15W fast wireless charging pad compatible with Qi-enabled devices",
        Category::Accessories,
        90,
        24.99,
    ),
    seed(
        "Portable Projector",
        "Mini LED projector with 1080p resolution, HDMI, and built-in speaker",
        Category::Electronics,
        10,
        449.99,
    ),
    seed(
        "Printer Ink Cartridge Set",
        "Compatible ink cartridge set (Black, Cyan, Magenta, Yellow) for office printers",
        Category::OfficeSupplies,
        200,
        44.99,
    ),
    seed(
        "Surge Protector Power Strip",
        "12-outlet surge protector with 2 USB-A and 1 USB-C port, 6ft cord",
        Category::Electronics,
        70,
        34.99,
    ),
];

/// Owned copies of the seed items in their literal order, shape-checked.
pub fn seed_items() -> Result<Vec<Item>> {
    SEED_ITEMS
        .iter()
        .map(|seed| {
            let item = Item {
                name: seed.name.to_string(),
                description: seed.description.to_string(),
                category: seed.category,
                quantity: seed.quantity,
                price: seed.price,
            };
            item.check_shape()?;
            Ok(item)
        })
        .collect()
}
