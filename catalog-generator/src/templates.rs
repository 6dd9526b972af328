//! Per-category product templates.
//!
//! Each template carries the price range for its product type and names the
//! candidate list behind every placeholder (`{}`) in its name and
//! description patterns.

use rand::{Rng, seq::IndexedRandom};

use crate::{
    error::{CatalogError, Result},
    item::Category,
    spec_table::SpecKind,
};

pub const PLACEHOLDER: &str = "{}";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Template {
    pub name: &'static str,
    pub description: &'static str,
    pub min_price: f64,
    pub max_price: f64,
    /// Fills the name placeholder, or prefixes the name when it has none.
    pub name_fill: SpecKind,
    /// One entry per description placeholder, in order.
    pub description_fill: &'static [SpecKind],
}

impl Template {
    pub fn description_placeholders(&self) -> usize {
        placeholder_count(self.description)
    }
}

pub fn placeholder_count(pattern: &str) -> usize {
    pattern.matches(PLACEHOLDER).count()
}

macro_rules! template {
    ($name:literal, $description:literal, $min:literal..=$max:literal, $name_fill:ident, [$($slot:ident),*]) => {
        Template {
            name: $name,
            description: $description,
            min_price: $min as f64,
            max_price: $max as f64,
            name_fill: SpecKind::$name_fill,
            description_fill: &[$(SpecKind::$slot),*],
        }
    };
}

/// All templates registered for `category`.
pub fn templates_for(category: Category) -> &'static [Template] {
    match category {
        Category::Electronics => ELECTRONICS,
        Category::Furniture => FURNITURE,
        Category::Accessories => ACCESSORIES,
        Category::OfficeSupplies => OFFICE_SUPPLIES,
        Category::Software => SOFTWARE,
        Category::Networking => NETWORKING,
        Category::Storage => STORAGE,
        Category::Audio => AUDIO,
        Category::Video => VIDEO,
        Category::Security => SECURITY,
        Category::Cleaning => CLEANING,
        Category::Kitchen => KITCHEN,
        Category::Stationery => STATIONERY,
        Category::HealthAndSafety => HEALTH_AND_SAFETY,
    }
}

/// Picks one of the category's templates uniformly at random.
pub fn select<R: Rng + ?Sized>(category: Category, random: &mut R) -> Result<&'static Template> {
    templates_for(category)
        .choose(random)
        .ok_or(CatalogError::NoTemplates(category))
}

const ELECTRONICS: &[Template] = &[
    template!("Laptop Computer", "Professional laptop with {}GB RAM and {}GB SSD storage", 800..=2500, Adjective, [Ram, Storage]),
    template!("Desktop Computer", "All-in-one desktop with {}\" display and wireless keyboard/mouse", 600..=1800, Adjective, [Adjective]),
    template!("Tablet Device", "{}-inch tablet with {}GB storage and stylus support", 300..=1200, Adjective, [Capacity, MediaType]),
    template!("Smartphone", "5G smartphone with {}GB RAM and {}MP camera", 400..=1400, Adjective, [Ram, Storage]),
    template!("Monitor {}", "{}-inch {} monitor with {}Hz refresh rate", 200..=900, ScreenSize, [ScreenSize, PanelType, RefreshRate]),
    template!("Graphics Card", "{} graphics card with {}GB GDDR memory", 400..=1600, Adjective, [Ram, Storage]),
    template!("CPU Processor", "{} core processor with {}GHz clock speed", 200..=800, Adjective, [Adjective, Color]),
    template!("Power Supply", "{}W {} power supply with {} efficiency rating", 60..=300, Adjective, [Adjective, Color, Tier]),
    template!("Motherboard", "{} motherboard with {} slots and {} ports", 100..=500, Adjective, [Adjective, Color, Tier]),
    template!("RAM Module", "{}GB {} RAM module, {}MHz speed", 40..=400, Adjective, [Adjective, Color, Tier]),
    template!("Hard Drive", "{}TB {} hard drive with {} cache", 50..=300, Adjective, [Adjective, Color, Tier]),
    template!("Router", "{} band Wi-Fi {} router with {} antennas", 60..=350, Adjective, [Adjective, Color, Tier]),
    template!("Switch", "{}-port {} gigabit switch with {} management", 80..=600, Adjective, [Adjective, Color, Tier]),
    template!("Access Point", "Wireless access point supporting {} devices", 100..=450, Adjective, [Ports]),
    template!("UPS Battery", "{}VA UPS battery backup with {} outlets", 120..=800, Adjective, [Adjective, Color]),
    template!("Printer", "{} printer with {} connectivity", 80..=600, Adjective, [Adjective, Color]),
    template!("Scanner", "{} scanner with {} DPI resolution", 100..=500, Adjective, [Adjective, Color]),
    template!("Microphone", "{} microphone with {} pattern", 50..=400, Adjective, [Adjective, Color]),
    template!("Speaker System", "{} speaker system with {} subwoofer", 40..=350, Adjective, [Adjective, Color]),
    template!("Webcam {}", "{} webcam with {} resolution", 30..=200, Adjective, [Adjective, Color]),
];

const FURNITURE: &[Template] = &[
    template!("Office Chair {}", "{} office chair with {} adjustment", 150..=800, ChairStyle, [Adjective, Color]),
    template!("Desk {}", "{} desk with {} drawers", 200..=1200, DeskStyle, [Adjective, Color]),
    template!("Conference Table", "{} conference table seating {}", 400..=2500, Adjective, [Adjective, Color]),
    template!("Filing Cabinet", "{} drawer filing cabinet with {} lock", 80..=350, Adjective, [Adjective, Color]),
    template!("Bookshelf", "{} bookshelf with {} shelves", 60..=400, Adjective, [Adjective, Color]),
    template!("Storage Cabinet", "{} storage cabinet with {} doors", 100..=600, Adjective, [Capacity, MediaType]),
    template!("Reception Desk", "{} reception desk with {} countertop", 300..=1500, Adjective, [Adjective, Color]),
    template!("Break Room Table", "{} break room table for {}", 150..=700, Adjective, [Adjective, Color]),
    template!("Lounge Chair", "{} lounge chair with {} upholstery", 200..=900, Adjective, [Adjective, Color]),
    template!("Sofa Couch", "{} sofa with {} seating", 300..=1500, Adjective, [Adjective, Color]),
    template!("Coffee Table", "{} coffee table with {} finish", 80..=400, Adjective, [Adjective, Color]),
    template!("Side Table", "{} side table with {} storage", 40..=200, Adjective, [Capacity, MediaType]),
    template!("Wardrobe Cabinet", "{} wardrobe with {} hanging space", 150..=700, Adjective, [Adjective, Color]),
    template!("Locker Unit", "{} locker unit with {} compartments", 120..=600, Adjective, [Adjective, Color]),
    template!("Room Divider", "{} room divider with {} panels", 50..=300, Adjective, [Adjective, Color]),
    template!("Whiteboard Stand", "{} whiteboard stand with {} wheels", 80..=350, Adjective, [Adjective, Color]),
    template!("Presentation Board", "{} presentation board with {} surface", 60..=300, Adjective, [Adjective, Color]),
    template!("Coat Rack", "{} coat rack with {} hooks", 30..=150, Adjective, [Adjective, Color]),
    template!("Umbrella Stand", "{} umbrella stand with {} capacity", 20..=80, Adjective, [Adjective, Color]),
    template!("Waste Bin", "{} waste bin with {} lid", 15..=100, Adjective, [Adjective, Color]),
];

const ACCESSORIES: &[Template] = &[
    template!("Laptop Stand", "{} laptop stand with {} adjustment", 25..=120, Adjective, [Adjective, Color]),
    template!("Monitor Stand", "{} monitor stand with {} storage", 20..=100, Adjective, [Capacity, MediaType]),
    template!("Phone Stand", "{} phone stand with {} angle", 10..=50, Adjective, [Adjective, Color]),
    template!("Tablet Stand", "{} tablet stand with {} rotation", 15..=80, Adjective, [Adjective, Color]),
    template!("Cable Organizer", "{} cable organizer for {} cables", 8..=40, Adjective, [Adjective, Color]),
    template!("Desk Pad", "{} desk pad with {} surface", 15..=60, Adjective, [Adjective, Color]),
    template!("Mouse Pad", "{} mouse pad with {} material", 5..=35, Adjective, [Adjective, Color]),
    template!("Wrist Rest", "{} wrist rest with {} support", 10..=40, Adjective, [Adjective, Color]),
    template!("Foot Rest", "{} foot rest with {} adjustment", 20..=80, Adjective, [Adjective, Color]),
    template!("Document Holder", "{} document holder with {} angle", 15..=60, Adjective, [Adjective, Color]),
    template!("Drawer Organizer", "{} drawer organizer with {} compartments", 10..=45, Adjective, [Adjective, Color]),
    template!("Pen Holder", "{} pen holder with {} slots", 5..=25, Adjective, [Adjective, Color]),
    template!("Business Card Holder", "{} business card holder with {} capacity", 8..=30, Adjective, [Adjective, Color]),
    template!("Desk Clock", "{} desk clock with {} display", 12..=50, Adjective, [Adjective, Color]),
    template!("Memo Pad Holder", "{} memo pad holder with {} design", 6..=25, Adjective, [Adjective, Color]),
    template!("Stapler", "{} stapler with {} capacity", 8..=35, Adjective, [Adjective, Color]),
    template!("Tape Dispenser", "{} tape dispenser with {} base", 5..=25, Adjective, [Adjective, Color]),
    template!("Paper Cutter", "{} paper cutter with {} blade", 15..=80, Adjective, [Adjective, Color]),
    template!("Hole Punch", "{} hole punch for {} sheets", 8..=35, Adjective, [Adjective, Color]),
    template!("Binder Clip Set", "{} binder clips in {} sizes", 4..=20, Adjective, [Adjective, Color]),
];

const OFFICE_SUPPLIES: &[Template] = &[
    template!("Copy Paper (Ream)", "{} copy paper, {} weight, {} sheets", 5..=15, Adjective, [Adjective, Color, Tier]),
    template!("Envelopes (Box)", "{} envelopes, {} size, {} count", 8..=25, Adjective, [Adjective, Color, Tier]),
    template!("Sticky Notes", "{} sticky notes, {} colors, {} pads", 3..=15, Adjective, [Adjective, Color, Tier]),
    template!("Highlighters (Set)", "{} highlighters in {} colors", 4..=18, Adjective, [Adjective, Color]),
    template!("Ballpoint Pens (Dozen)", "{} ballpoint pens with {} ink", 5..=20, Adjective, [Adjective, Color]),
    template!("Gel Pens (Set)", "{} gel pens in {} colors", 6..=25, Adjective, [Adjective, Color]),
    template!("Permanent Markers (Set)", "{} permanent markers, {} tip", 7..=22, Adjective, [Adjective, Color]),
    template!("Whiteboard Markers (Set)", "{} whiteboard markers in {} colors", 6..=20, Adjective, [Adjective, Color]),
    template!("Correction Tape", "{} correction tape with {} length", 3..=12, Adjective, [Adjective, Color]),
    template!("Glue Stick", "{} glue stick with {} adhesion", 2..=8, Adjective, [Adjective, Color]),
    template!("Scissors", "{} scissors with {} blade", 4..=18, Adjective, [Adjective, Color]),
    template!("Ruler", "{} ruler with {} marking", 2..=10, Adjective, [Adjective, Color]),
    template!("Calculator", "{} calculator with {} display", 10..=60, Adjective, [Adjective, Color]),
    template!("Staples (Box)", "{} staples for {} stapler", 3..=12, Adjective, [Adjective, Color]),
    template!("Paper Clips (Box)", "{} paper clips, {} size, {} count", 2..=8, Adjective, [Adjective, Color, Tier]),
    template!("Rubber Bands (Bag)", "{} rubber bands in {} sizes", 3..=10, Adjective, [Adjective, Color]),
    template!("Push Pins (Box)", "{} push pins in {} colors", 3..=10, Adjective, [Adjective, Color]),
    template!("Binder Rings (Set)", "{} binder rings, {} size", 4..=15, Adjective, [Adjective, Color]),
    template!("Index Cards (Pack)", "{} index cards, {} size, {} count", 3..=12, Adjective, [Adjective, Color, Tier]),
    template!("Labels (Roll)", "{} labels, {} size, {} per roll", 5..=20, Adjective, [Adjective, Color, Tier]),
];

const SOFTWARE: &[Template] = &[
    template!("Antivirus License", "{} antivirus software license for {} users", 30..=150, Adjective, [Adjective, Color]),
    template!("Office Suite", "{} office suite license for {} devices", 100..=400, Adjective, [Adjective, Color]),
    template!("Project Management", "{} project management tool subscription, {} users", 50..=300, Adjective, [Adjective, Color]),
    template!("Design Software", "{} design software license, {} months", 200..=800, Adjective, [Adjective, Color]),
    template!("Video Editing", "{} video editing software license", 150..=600, Adjective, [Users]),
    template!("Accounting Software", "{} accounting software for {} users", 100..=500, Adjective, [Adjective, Color]),
    template!("Cloud Storage", "{} cloud storage subscription, {}TB", 50..=300, Adjective, [Capacity, MediaType]),
    template!("VPN Service", "{} VPN service subscription, {} devices", 40..=200, Adjective, [Adjective, Color]),
    template!("Backup Software", "{} backup software license, {}TB", 60..=300, Adjective, [Adjective, Color]),
    template!("Communication Tool", "{} communication platform license, {} users", 30..=200, Adjective, [Adjective, Color]),
    template!("CRM Software", "{} CRM software subscription, {} users", 80..=500, Adjective, [Adjective, Color]),
    template!("HR Management", "{} HR management system, {} employees", 100..=600, Adjective, [Adjective, Color]),
    template!("Security Suite", "{} security suite license, {} endpoints", 120..=700, Adjective, [Adjective, Color]),
    template!("Development IDE", "{} IDE license for {} developers", 100..=500, Adjective, [Adjective, Color]),
    template!("Database Software", "{} database software license", 200..=1000, Adjective, [Users]),
    template!("Virtualization", "{} virtualization software license", 300..=1500, Adjective, [Users]),
    template!("Monitoring Tool", "{} monitoring software subscription", 150..=800, Adjective, [Length]),
    template!("E-signature", "{} e-signature service, {} documents", 20..=150, Adjective, [Adjective, Color]),
    template!("Webinar Platform", "{} webinar platform subscription", 50..=300, Adjective, [Adjective]),
    template!("Survey Tool", "{} survey tool subscription, {} responses", 30..=200, Adjective, [Adjective, Color]),
];

const NETWORKING: &[Template] = &[
    template!("Ethernet Cable", "Cat{} ethernet cable, {}ft length", 5..=50, Adjective, [Adjective, Color]),
    template!("Fiber Cable", "{} fiber optic cable, {} meters", 20..=200, Adjective, [Adjective, Color]),
    template!("Patch Panel", "{} patch panel with {} ports", 50..=250, Adjective, [Adjective, Color]),
    template!("Server Rack", "{}U server rack with {} shelves", 200..=1500, Adjective, [Adjective, Color]),
    template!("Patch Cable (Pack)", "{} patch cables, {}ft, {} pack", 15..=80, Adjective, [Adjective, Color, Tier]),
    template!("Keystone Jack", "{} keystone jack, {} category", 3..=20, Adjective, [Adjective, Color]),
    template!("Cable Tester", "{} cable tester for {} cables", 30..=200, Adjective, [Adjective, Color]),
    template!("Crimping Tool", "{} crimping tool for {} connectors", 15..=80, Adjective, [Adjective, Color]),
    template!("Punch Down Tool", "{} punch down tool with {} blade", 20..=100, Adjective, [Adjective, Color]),
    template!("Cable Stripper", "{} cable stripper for {} cables", 10..=50, Adjective, [Adjective, Color]),
    template!("Network Tester", "{} network tester with {} features", 100..=600, Adjective, [Adjective, Color]),
    template!("Tone Generator", "{} tone generator and probe kit", 40..=200, Adjective, [Adjective]),
    template!("Cable Ties (Bag)", "{} cable ties, {} length, {} count", 5..=25, Adjective, [Adjective, Color, Tier]),
    template!("Cable Labels (Roll)", "{} cable labels, {} per roll", 8..=35, Adjective, [Adjective, Color]),
    template!("Rack Mount Kit", "{} rack mount kit for {} equipment", 30..=150, Adjective, [Adjective, Color]),
    template!("Blanking Panel", "{}U blanking panel for server rack", 10..=50, Adjective, [Adjective]),
    template!("Cable Manager", "{} cable manager for {} rack", 15..=80, Adjective, [Adjective, Color]),
    template!("PDU Power Strip", "{} PDU with {} outlets", 60..=350, Adjective, [Adjective, Color]),
    template!("KVM Switch", "{} port KVM switch for {} monitors", 80..=500, Adjective, [Adjective, Color]),
    template!("Console Server", "{} console server with {} ports", 200..=1200, Adjective, [Adjective, Color]),
];

const STORAGE: &[Template] = &[
    template!("NAS Device", "{} bay NAS with {}TB capacity", 300..=1500, Adjective, [Adjective, Color]),
    template!("SAN Storage", "{} SAN storage array with {}TB", 2000..=10000, Adjective, [Capacity, MediaType]),
    template!("Tape Drive", "{} tape drive with {}TB capacity", 500..=3000, Adjective, [Adjective, Color]),
    template!("Backup Tape", "{} backup tape cartridge, {}TB", 30..=150, Adjective, [Adjective, Color]),
    template!("DVD-R Spindle", "{} DVD-R discs, {} pack", 15..=50, Adjective, [Adjective, Color]),
    template!("Blu-Ray Discs", "{} Blu-Ray discs, {} pack", 20..=80, Adjective, [Adjective, Color]),
    template!("USB Flash Drive", "{}GB USB {} flash drive", 8..=80, Adjective, [Adjective, Color]),
    template!("Memory Card", "{}GB {} memory card", 10..=100, Adjective, [Ram, Storage]),
    template!("Hard Drive Enclosure", "{} hard drive enclosure for {} drives", 20..=100, Adjective, [Adjective, Color]),
    template!("Drive Dock", "{} drive dock with {} bays", 40..=200, Adjective, [Adjective, Color]),
    template!("Disk Array", "{} disk array controller", 300..=2000, Adjective, [Adjective]),
    template!("Storage Shelf", "{} storage shelf for {} drives", 50..=300, Adjective, [Capacity, MediaType]),
    template!("Media Safe", "{} media safe with {} capacity", 100..=600, Adjective, [Adjective, Color]),
    template!("Fireproof Box", "{} fireproof document box", 40..=250, Adjective, [Adjective]),
    template!("File Box (Pack)", "{} file boxes, {} pack", 20..=100, Adjective, [Adjective, Color]),
    template!("Plastic Bin", "{} plastic storage bin with {} lid", 10..=50, Adjective, [Capacity, MediaType]),
    template!("Archive Box", "{} archive boxes, {} pack", 15..=80, Adjective, [Adjective, Color]),
    template!("CD Wallet", "{} CD wallet holding {} discs", 8..=35, Adjective, [Adjective, Color]),
    template!("Media Cabinet", "{} media cabinet with {} drawers", 60..=400, Adjective, [Adjective, Color]),
    template!("Safe Deposit Box", "{} safe deposit box with {} key", 80..=500, Adjective, [Adjective, Color]),
];

const AUDIO: &[Template] = &[
    template!("Conference Phone", "{} conference phone with {} mics", 200..=800, Adjective, [Adjective, Color]),
    template!("Desk Phone", "{} desk phone with {} lines", 60..=300, Adjective, [Adjective, Color]),
    template!("Headset", "{} headset with {} microphone", 30..=200, Adjective, [Adjective, Color]),
    template!("Earbuds", "{} wireless earbuds with {} case", 40..=250, Adjective, [Adjective, Color]),
    template!("Bluetooth Speaker", "{} Bluetooth speaker with {} watts", 30..=200, Adjective, [Adjective, Color]),
    template!("Soundbar", "{} soundbar with {} subwoofer", 80..=500, Adjective, [Adjective, Color]),
    template!("PA System", "{} PA system with {} speakers", 200..=1000, Adjective, [Adjective, Color]),
    template!("Microphone Boom", "{} microphone boom arm with {} mount", 40..=200, Adjective, [Adjective, Color]),
    template!("Audio Mixer", "{} channel audio mixer", 150..=800, Adjective, [Adjective]),
    template!("Audio Interface", "{} audio interface with {} inputs", 100..=600, Adjective, [Adjective, Color]),
    template!("Studio Monitors (Pair)", "{} studio monitors, {} inch", 150..=700, Adjective, [Adjective, Color]),
    template!("Subwoofer", "{} subwoofer with {} watts", 100..=500, Adjective, [Adjective, Color]),
    template!("Audio Cable", "{} audio cable, {}ft length", 8..=40, Adjective, [Adjective, Color]),
    template!("XLR Cable", "{} XLR cable, {}ft length", 12..=60, Adjective, [Adjective, Color]),
    template!("Speaker Stand", "{} speaker stand with {} base", 25..=120, Adjective, [Adjective, Color]),
    template!("Pop Filter", "{} pop filter for {} microphone", 10..=40, Adjective, [Adjective, Color]),
    template!("Shock Mount", "{} shock mount for {} mic", 30..=150, Adjective, [Adjective, Color]),
    template!("Acoustic Panels (Set)", "{} acoustic panels, {} pack", 40..=250, Adjective, [Adjective, Color]),
    template!("Headphone Amp", "{} headphone amplifier, {} channels", 50..=300, Adjective, [Adjective, Color]),
    template!("Audio Recorder", "{} audio recorder with {} storage", 100..=500, Adjective, [Capacity, MediaType]),
];

const VIDEO: &[Template] = &[
    template!("Video Conference Camera", "{} video conference camera with {} zoom", 300..=1500, Adjective, [Adjective, Color]),
    template!("Document Camera", "{} document camera with {} resolution", 150..=800, Adjective, [Adjective, Color]),
    template!("Digital Signage", "{} digital signage display, {} inch", 400..=2500, Adjective, [Adjective, Color]),
    template!("Video Switcher", "{} input video switcher", 200..=1200, Adjective, [Adjective]),
    template!("Video Extender", "{} video extender over {} cable", 80..=400, Adjective, [Adjective, Color]),
    template!("HDMI Splitter", "{} way HDMI splitter", 30..=200, Adjective, [Adjective]),
    template!("HDMI Switch", "{} input HDMI switch", 25..=150, Adjective, [Adjective]),
    template!("Capture Card", "{} capture card with {} input", 100..=600, Adjective, [Adjective, Color]),
    template!("Video Encoder", "{} video encoder for {} streams", 300..=1500, Adjective, [Adjective, Color]),
    template!("Streaming Device", "{} streaming device with {} resolution", 80..=400, Adjective, [Adjective, Color]),
    template!("Teleprompter", "{} teleprompter for {} camera", 150..=800, Adjective, [Adjective, Color]),
    template!("Green Screen", "{} green screen with {} stand", 40..=250, Adjective, [Adjective, Color]),
    template!("Light Kit", "{} light kit with {} lights", 80..=500, Adjective, [Adjective, Color]),
    template!("Ring Light", "{} ring light with {} tripod", 30..=200, Adjective, [Adjective, Color]),
    template!("Tripod", "{} tripod with {} head", 40..=250, Adjective, [Adjective, Color]),
    template!("Gimbal Stabilizer", "{} gimbal for {} camera", 150..=800, Adjective, [Adjective, Color]),
    template!("Video Monitor", "{} video monitor, {} inch", 200..=1000, Adjective, [Adjective, Color]),
    template!("Media Player", "{} media player with {} storage", 60..=400, Adjective, [Capacity, MediaType]),
    template!("KVM Extender", "{} KVM extender over {} cable", 150..=900, Adjective, [Adjective, Color]),
    template!("Video Wall Controller", "{} video wall controller for {} screens", 500..=3000, Adjective, [Adjective, Color]),
];

const SECURITY: &[Template] = &[
    template!("IP Camera", "{} IP camera with {} resolution", 80..=500, Adjective, [Adjective, Color]),
    template!("NVR System", "{} channel NVR with {}TB", 300..=1500, Adjective, [Adjective, Color]),
    template!("Access Card", "{} access cards, {} pack", 50..=300, Adjective, [Adjective, Color]),
    template!("Card Reader", "{} card reader with {} interface", 100..=600, Adjective, [Adjective, Color]),
    template!("Door Lock", "{} electronic door lock with {} access", 150..=800, Adjective, [Adjective, Color]),
    template!("Intercom System", "{} intercom system with {} stations", 200..=1200, Adjective, [Adjective, Color]),
    template!("Alarm System", "{} alarm system with {} sensors", 150..=1000, Adjective, [Adjective, Color]),
    template!("Motion Sensor", "{} motion sensor with {} range", 30..=200, Adjective, [Adjective, Color]),
    template!("Smoke Detector", "{} smoke detector with {} sensor", 20..=150, Adjective, [Adjective, Color]),
    template!("CO Detector", "{} carbon monoxide detector", 25..=180, Adjective, [Adjective]),
    template!("Security Keypad", "{} security keypad with {} zones", 60..=400, Adjective, [Adjective, Color]),
    template!("Panic Button", "{} panic button with {} alert", 40..=250, Adjective, [Adjective, Color]),
    template!("Key Safe", "{} key safe with {} capacity", 30..=200, Adjective, [Adjective, Color]),
    template!("Security Gate", "{} security gate with {} width", 500..=3000, Adjective, [Adjective, Color]),
    template!("Turnstile", "{} turnstile with {} direction", 800..=5000, Adjective, [Adjective, Color]),
    template!("Badge Holder", "{} badge holders, {} pack", 10..=60, Adjective, [Adjective, Color]),
    template!("Lanyard", "{} lanyards, {} pack", 8..=50, Adjective, [Adjective, Color]),
    template!("Visitor Badge", "{} visitor badges, {} pack", 15..=80, Adjective, [Adjective, Color]),
    template!("Security Sign", "{} security sign with {} message", 12..=60, Adjective, [Adjective, Color]),
    template!("Cable Lock", "{} cable lock for {} devices", 15..=80, Adjective, [Adjective, Color]),
];

const CLEANING: &[Template] = &[
    template!("Disinfectant Wipes", "{} disinfectant wipes, {} count", 5..=25, Adjective, [Adjective, Color]),
    template!("Hand Sanitizer", "{} hand sanitizer, {} oz", 4..=20, Adjective, [Adjective, Color]),
    template!("Paper Towels (Case)", "{} paper towels, {} rolls", 20..=80, Adjective, [Adjective, Color]),
    template!("Toilet Paper (Case)", "{} toilet paper, {} rolls", 15..=60, Adjective, [Adjective, Color]),
    template!("Trash Bags (Box)", "{} trash bags, {} count", 8..=40, Adjective, [Adjective, Color]),
    template!("All-Purpose Cleaner", "{} all-purpose cleaner, {} gallon", 10..=50, Adjective, [Adjective, Color]),
    template!("Glass Cleaner", "{} glass cleaner, {} oz", 5..=25, Adjective, [Adjective, Color]),
    template!("Floor Cleaner", "{} floor cleaner, {} gallon", 12..=60, Adjective, [Adjective, Color]),
    template!("Carpet Cleaner", "{} carpet cleaner, {} oz", 8..=40, Adjective, [Adjective, Color]),
    template!("Air Freshener", "{} air freshener, {} pack", 6..=30, Adjective, [Adjective, Color]),
    template!("Mop Bucket", "{} mop bucket with {} wringer", 25..=120, Adjective, [Adjective, Color]),
    template!("Wet Floor Sign", "{} wet floor sign, {} pack", 10..=50, Adjective, [Adjective, Color]),
    template!("Microfiber Cloths", "{} microfiber cloths, {} pack", 8..=40, Adjective, [Adjective, Color]),
    template!("Dust Mop", "{} dust mop with {} handle", 15..=80, Adjective, [Adjective, Color]),
    template!("Broom", "{} broom with {} bristles", 12..=60, Adjective, [Adjective, Color]),
    template!("Dustpan", "{} dustpan with {} handle", 8..=40, Adjective, [Adjective, Color]),
    template!("Vacuum Cleaner", "{} vacuum cleaner with {} filter", 80..=400, Adjective, [Adjective, Color]),
    template!("Steam Cleaner", "{} steam cleaner with {} attachments", 150..=800, Adjective, [Adjective, Color]),
    template!("Pressure Washer", "{} pressure washer, {} PSI", 200..=1000, Adjective, [Adjective, Color]),
    template!("Window Squeegee", "{} window squeegee with {} handle", 10..=50, Adjective, [Adjective, Color]),
];

const KITCHEN: &[Template] = &[
    template!("Coffee Maker", "{} coffee maker with {} capacity", 50..=300, Adjective, [Adjective, Color]),
    template!("Water Cooler", "{} water cooler with {} temperatures", 100..=600, Adjective, [Adjective, Color]),
    template!("Microwave Oven", "{} microwave with {} watts", 60..=300, Adjective, [Adjective, Color]),
    template!("Mini Fridge", "{} mini fridge with {} capacity", 100..=500, Adjective, [Adjective, Color]),
    template!("Dishwasher", "{} dishwasher with {} place settings", 300..=1500, Adjective, [Adjective, Color]),
    template!("Paper Plates (Pack)", "{} paper plates, {} count", 8..=35, Adjective, [Adjective, Color]),
    template!("Plastic Cups (Pack)", "{} plastic cups, {} count", 6..=30, Adjective, [Adjective, Color]),
    template!("Plastic Cutlery (Pack)", "{} plastic cutlery, {} count", 5..=25, Adjective, [Adjective, Color]),
    template!("Napkins (Pack)", "{} napkins, {} count", 4..=20, Adjective, [Adjective, Color]),
    template!("Coffee (Box)", "{} coffee pods, {} count", 15..=80, Adjective, [Adjective, Color]),
    template!("Tea Box", "{} tea bags, {} assorted", 8..=40, Adjective, [Adjective, Color]),
    template!("Sugar Packets (Box)", "{} sugar packets, {} count", 5..=25, Adjective, [Adjective, Color]),
    template!("Creamer (Box)", "{} creamer portions, {} count", 6..=30, Adjective, [Adjective, Color]),
    template!("Water Bottles (Case)", "{} water bottles, {} case", 10..=50, Adjective, [Adjective, Color]),
    template!("Soda Cans (Case)", "{} soda cans, {} case", 12..=60, Adjective, [Adjective, Color]),
    template!("Snack Box", "{} assorted snacks, {} count", 20..=100, Adjective, [Adjective, Color]),
    template!("Utensil Tray", "{} utensil tray with {} compartments", 15..=80, Adjective, [Adjective, Color]),
    template!("Paper Towel Holder", "{} paper towel holder with {} mount", 12..=60, Adjective, [Adjective, Color]),
    template!("Trash Can", "{} trash can with {} lid", 20..=100, Adjective, [Adjective, Color]),
    template!("Recycling Bin", "{} recycling bin with {} compartments", 25..=120, Adjective, [Adjective, Color]),
];

const STATIONERY: &[Template] = &[
    template!("Business Cards (Box)", "{} business cards, {} count", 30..=150, Adjective, [Adjective, Color]),
    template!("Letterhead (Ream)", "{} letterhead paper, {} sheets", 15..=80, Adjective, [Adjective, Color]),
    template!("Envelope Seals", "{} envelope seals, {} count", 5..=25, Adjective, [Adjective, Color]),
    template!("Rubber Stamp", "{} rubber stamp with {} text", 10..=50, Adjective, [Adjective, Color]),
    template!("Ink Pad", "{} ink pad in {} color", 4..=20, Adjective, [Adjective, Color]),
    template!("Calligraphy Set", "{} calligraphy set with {} nibs", 20..=100, Adjective, [Adjective, Color]),
    template!("Fountain Pen", "{} fountain pen with {} nib", 30..=200, Adjective, [Adjective, Color]),
    template!("Pen Refills (Pack)", "{} pen refills, {} pack", 8..=40, Adjective, [Adjective, Color]),
    template!("Ink Cartridges", "{} ink cartridges, {} color", 15..=80, Adjective, [Adjective, Color]),
    template!("Toner Cartridge", "{} toner cartridge, {} pages", 40..=250, Adjective, [Adjective, Color]),
    template!("Label Maker", "{} label maker with {} tape", 30..=180, Adjective, [Adjective, Color]),
    template!("Label Tape", "{} label tape, {} meters", 10..=50, Adjective, [Adjective, Color]),
    template!("Laminator", "{} laminator with {} width", 50..=300, Adjective, [Adjective, Color]),
    template!("Lamination Pouches", "{} laminating pouches, {} pack", 15..=80, Adjective, [Adjective, Color]),
    template!("Binding Machine", "{} binding machine for {} sheets", 80..=500, Adjective, [Adjective, Color]),
    template!("Binding Combs", "{} binding combs, {} pack", 10..=60, Adjective, [Adjective, Color]),
    template!("Report Covers", "{} report covers, {} pack", 8..=40, Adjective, [Adjective, Color]),
    template!("Presentation Folders", "{} presentation folders, {} pack", 12..=70, Adjective, [Adjective, Color]),
    template!("Certificate Paper", "{} certificate paper, {} sheets", 10..=60, Adjective, [Adjective, Color]),
    template!("Desk Nameplate", "{} desk nameplate with {} holder", 8..=45, Adjective, [Adjective, Color]),
];

const HEALTH_AND_SAFETY: &[Template] = &[
    template!("First Aid Kit", "{} first aid kit with {} items", 25..=150, Adjective, [Adjective, Color]),
    template!("AED Defibrillator", "{} AED with {} pads", 800..=3000, Adjective, [Adjective, Color]),
    template!("Fire Extinguisher", "{} fire extinguisher, {} type", 40..=250, Adjective, [Adjective, Color]),
    template!("Emergency Light", "{} emergency light with {} battery", 30..=200, Adjective, [Adjective, Color]),
    template!("Exit Sign", "{} exit sign with {} illumination", 25..=180, Adjective, [Adjective, Color]),
    template!("Safety Glasses", "{} safety glasses, {} pack", 10..=60, Adjective, [Adjective, Color]),
    template!("Ear Plugs (Box)", "{} ear plugs, {} pairs", 15..=80, Adjective, [Adjective, Color]),
    template!("Dust Masks (Box)", "{} dust masks, {} count", 12..=60, Adjective, [Adjective, Color]),
    template!("Gloves (Box)", "{} gloves, {} pairs", 10..=50, Adjective, [Adjective, Color]),
    template!("Hard Hat", "{} hard hat with {} suspension", 15..=80, Adjective, [Adjective, Color]),
    template!("Safety Vest", "{} safety vest with {} reflectors", 10..=60, Adjective, [Adjective, Color]),
    template!("Fall Protection", "{} fall protection harness", 80..=500, Adjective, [Adjective]),
    template!("Eye Wash Station", "{} eye wash station with {} solution", 60..=400, Adjective, [Adjective, Color]),
    template!("Safety Shower", "{} safety shower with {} curtain", 200..=1200, Adjective, [Adjective, Color]),
    template!("Spill Kit", "{} spill kit for {} materials", 50..=300, Adjective, [Adjective, Color]),
    template!("Biohazard Bags", "{} biohazard bags, {} pack", 12..=70, Adjective, [Adjective, Color]),
    template!("Sharps Container", "{} sharps container with {} capacity", 15..=90, Adjective, [Adjective, Color]),
    template!("Thermometer", "{} thermometer with {} accuracy", 20..=120, Adjective, [Adjective, Color]),
    template!("Blood Pressure Monitor", "{} BP monitor with {} cuff", 30..=200, Adjective, [Adjective, Color]),
    template!("Pulse Oximeter", "{} pulse oximeter with {} display", 25..=150, Adjective, [Adjective, Color]),
];

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::SmallRng};

    use super::*;

    #[test]
    fn every_category_has_twenty_templates() {
        for category in Category::ALL {
            assert_eq!(templates_for(category).len(), 20, "{category}");
        }
    }

    #[test]
    fn declared_fills_match_placeholders() {
        for category in Category::ALL {
            for template in templates_for(category) {
                assert_eq!(
                    template.description_fill.len(),
                    template.description_placeholders(),
                    "{}",
                    template.description
                );
                assert!(placeholder_count(template.name) <= 1, "{}", template.name);
                assert!(template.min_price <= template.max_price, "{}", template.name);
                assert!(template.min_price >= 0.0);
            }
        }
    }

    #[test]
    fn names_are_unique_within_a_category() {
        for category in Category::ALL {
            let templates = templates_for(category);
            for (i, template) in templates.iter().enumerate() {
                assert!(
                    templates[i + 1..].iter().all(|other| other.name != template.name),
                    "{} repeats in {category}",
                    template.name
                );
            }
        }
    }

    #[test]
    fn select_stays_within_the_category() {
        let mut random = SmallRng::seed_from_u64(3);
        for category in Category::ALL {
            for _ in 0..40 {
                let template = select(category, &mut random).unwrap();
                assert!(templates_for(category).contains(template));
            }
        }
    }

    #[test]
    fn monitor_template_takes_display_specs() {
        let monitor = ELECTRONICS
            .iter()
            .find(|template| template.name == "Monitor {}")
            .unwrap();
        assert_eq!(monitor.name_fill, SpecKind::ScreenSize);
        assert_eq!(
            monitor.description_fill,
            &[SpecKind::ScreenSize, SpecKind::PanelType, SpecKind::RefreshRate]
        );
    }
}
