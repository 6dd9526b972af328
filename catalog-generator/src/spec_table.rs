//! Candidate values for filling template placeholders.

use rand::{Rng, seq::IndexedRandom};

/// Names one candidate list. Templates declare which list feeds each of
/// their placeholders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecKind {
    Adjective,
    Ram,
    Storage,
    ScreenSize,
    Capacity,
    Watts,
    Users,
    Ports,
    Speed,
    Length,
    Count,
    Months,
    Resolution,
    RefreshRate,
    Color,
    PanelType,
    MediaType,
    Tier,
    PhoneType,
    ChairStyle,
    DeskStyle,
}

const ADJECTIVES: &[&str] = &[
    "Professional",
    "Premium",
    "Standard",
    "Compact",
    "Portable",
    "Wireless",
    "Wired",
    "Digital",
    "Analog",
    "Smart",
    "Industrial",
    "Commercial",
    "Home",
    "Office",
    "Ergonomic",
    "Adjustable",
    "Folding",
    "Modular",
    "Heavy-Duty",
    "Lightweight",
    "Rechargeable",
    "Battery-Powered",
    "USB",
    "Bluetooth",
    "WiFi",
    "High-Speed",
    "Ultra",
    "Pro",
    "Elite",
    "Basic",
    "Advanced",
    "Multi-Function",
    "Universal",
    "Waterproof",
    "Dustproof",
    "Shockproof",
    "Fire-Resistant",
    "Anti-Static",
    "Eco-Friendly",
    "Recyclable",
    "Biodegradable",
    "Non-Toxic",
    "Hypoallergenic",
];

impl SpecKind {
    pub const ALL: [SpecKind; 21] = [
        SpecKind::Adjective,
        SpecKind::Ram,
        SpecKind::Storage,
        SpecKind::ScreenSize,
        SpecKind::Capacity,
        SpecKind::Watts,
        SpecKind::Users,
        SpecKind::Ports,
        SpecKind::Speed,
        SpecKind::Length,
        SpecKind::Count,
        SpecKind::Months,
        SpecKind::Resolution,
        SpecKind::RefreshRate,
        SpecKind::Color,
        SpecKind::PanelType,
        SpecKind::MediaType,
        SpecKind::Tier,
        SpecKind::PhoneType,
        SpecKind::ChairStyle,
        SpecKind::DeskStyle,
    ];

    pub fn values(&self) -> &'static [&'static str] {
        match self {
            SpecKind::Adjective => ADJECTIVES,
            SpecKind::Ram => &["8", "16", "32", "64", "128"],
            SpecKind::Storage => &["256", "512", "1024", "2048"],
            SpecKind::ScreenSize => &["13", "15", "17", "21", "24", "27", "32", "34", "43", "55", "65"],
            SpecKind::Capacity => &["1", "2", "4", "8", "16", "32", "64"],
            SpecKind::Watts => &["10", "20", "50", "100", "200", "500", "1000"],
            SpecKind::Users => &["1", "5", "10", "25", "50", "100", "250", "500"],
            SpecKind::Ports => &["4", "8", "16", "24", "48"],
            SpecKind::Speed => &["100", "300", "600", "1000", "2000", "3000"],
            SpecKind::Length => &["3", "6", "10", "15", "25", "50", "100"],
            SpecKind::Count => &["10", "25", "50", "100", "250", "500", "1000"],
            SpecKind::Months => &["12", "24", "36"],
            SpecKind::Resolution => &["720p", "1080p", "2K", "4K", "8K"],
            SpecKind::RefreshRate => &["60", "75", "120", "144", "240"],
            SpecKind::Color => &["Black", "White", "Silver", "Gray", "Blue", "Red", "Green"],
            SpecKind::PanelType => &["IPS", "VA", "TN", "OLED"],
            SpecKind::MediaType => &["SSD", "HDD", "NVMe"],
            SpecKind::Tier => &["Standard", "Premium", "Professional"],
            SpecKind::PhoneType => &["Desk", "Conference", "Wireless", "VoIP"],
            SpecKind::ChairStyle => &["Executive", "Mesh", "Leather", "Task"],
            SpecKind::DeskStyle => &["Standing", "Executive", "Corner", "Computer"],
        }
    }

    /// Uniformly picks one candidate value.
    pub fn sample<R: Rng + ?Sized>(&self, random: &mut R) -> &'static str {
        // every list above is non-empty
        self.values().choose(random).copied().unwrap_or_default()
    }
}
