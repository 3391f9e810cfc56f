//! Combinatorial catalog of realistic product names.
//!
//! Every category is the cartesian product of a few attribute lists, walked in
//! nested-loop order with the last list varying fastest. Categories are
//! concatenated in a fixed order, so the sequence is fully deterministic.
//! Names are produced lazily; the whole catalog is never held in memory.

/// One product category, e.g. item x material x size.
pub struct Category {
    pub name: &'static str,
    lists: &'static [&'static [&'static str]],
}

impl Category {
    /// Number of names this category yields.
    pub fn len(&self) -> usize {
        if self.lists.is_empty() {
            return 0;
        }
        self.lists.iter().map(|list| list.len()).product()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn names(&self) -> Combinations {
        Combinations::new(self.lists)
    }
}

/// Lazy cartesian product over string lists, joined with single spaces.
pub struct Combinations {
    lists: &'static [&'static [&'static str]],
    indices: Vec<usize>,
    done: bool,
}

impl Combinations {
    fn new(lists: &'static [&'static [&'static str]]) -> Combinations {
        Combinations {
            lists,
            indices: vec![0; lists.len()],
            done: lists.is_empty() || lists.iter().any(|list| list.is_empty()),
        }
    }

    fn advance(&mut self) {
        for position in (0..self.lists.len()).rev() {
            self.indices[position] += 1;
            if self.indices[position] < self.lists[position].len() {
                return;
            }
            self.indices[position] = 0;
        }
        //every position wrapped around: the odometer is exhausted
        self.done = true;
    }
}

impl Iterator for Combinations {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        let name = self
            .indices
            .iter()
            .zip(self.lists)
            .map(|(&i, list)| list[i])
            .collect::<Vec<_>>()
            .join(" ");
        self.advance();
        Some(name)
    }
}

pub static CATEGORIES: [Category; 10] = [
    Category {
        name: "fasteners",
        lists: &[FASTENER_ITEMS, FASTENER_MATERIALS, FASTENER_SIZES],
    },
    Category {
        name: "pipes",
        lists: &[PIPE_ITEMS, PIPE_MATERIALS, PIPE_SIZES],
    },
    Category {
        name: "paint supplies",
        lists: &[PAINT_ITEMS, PAINT_MATERIALS, PAINT_SIZES],
    },
    Category {
        name: "inks",
        lists: &[INK_TYPES, INK_COLORS, INK_VOLUMES],
    },
    Category {
        name: "building materials",
        lists: &[BUILDING_ITEMS, BUILDING_MATERIALS, BUILDING_SIZES],
    },
    Category {
        name: "automotive parts",
        lists: &[AUTOMOTIVE_ITEMS, AUTOMOTIVE_MATERIALS, AUTOMOTIVE_SIZES],
    },
    Category {
        name: "topwear",
        lists: &[TOPWEAR_ITEMS, TOPWEAR_MATERIALS, TOPWEAR_COLORS, TOPWEAR_SIZES],
    },
    Category {
        name: "shoes",
        lists: &[SHOE_ITEMS, SHOE_MATERIALS, SHOE_COLORS, SHOE_SIZES],
    },
    Category {
        name: "pants",
        lists: &[PANTS_ITEMS, PANTS_MATERIALS, PANTS_FITS, PANTS_COLORS, PANTS_SIZES],
    },
    Category {
        name: "gemstones",
        lists: &[GEMSTONE_ITEMS, GEMSTONE_CUTS, GEMSTONE_COLORS, GEMSTONE_SIZES],
    },];

/// The complete catalog, front to back.
pub fn catalog() -> impl Iterator<Item = String> + Send {
    CATEGORIES.iter().flat_map(|category| category.names())
}

/// Total number of names in the catalog.
pub fn catalog_len() -> usize {
    CATEGORIES.iter().map(Category::len).sum()
}

///Hands out catalog names in order, then falls back to numbered placeholder names.
pub struct ProductNames {
    names: Box<dyn Iterator<Item = String> + Send>,
    fallback_count: u64,
}

impl ProductNames {
    pub fn new() -> ProductNames {
        ProductNames::from_names(catalog())
    }

    pub fn from_names<I>(names: I) -> ProductNames
    where
        I: IntoIterator<Item = String>,
        I::IntoIter: Send + 'static,
    {
        ProductNames {
            names: Box::new(names.into_iter()),
            fallback_count: 0,
        }
    }

    pub fn next_name(&mut self) -> String {
        match self.names.next() {
            Some(name) => name,
            None => {
                self.fallback_count += 1;
                format!("Fictional Product Name {}", self.fallback_count)
            }
        }
    }
}

impl Default for ProductNames {
    fn default() -> Self {
        ProductNames::new()
    }
}

const FASTENER_ITEMS: &[&str] = &[
    "Drywall screw", "Eye screw", "Wood screw", "Machine screw", "Sheet metal screw",
    "Lag screw", "Deck screw", "Self-tapping screw", "Concrete screw", "Set screw",
    "Thumb screw", "Security screw", "Socket head cap screw", "Pan head screw",
    "Flat head screw", "Truss head screw", "Hex head screw", "Shoulder screw",
    "Chipboard screw", "Twinfast screw", "Hex bolt", "Carriage bolt", "Eye bolt", "U-bolt",
    "Anchor bolt", "J-bolt", "Flange bolt", "Lag bolt", "T-bolt", "Elevator bolt", "Plow bolt",
    "Step bolt", "Hex nut", "Lock nut", "Wing nut", "Cap nut", "Flange nut", "T-nut",
    "Coupling nut", "Square nut", "Acorn nut", "Jam nut", "Slotted nut", "Castle nut",
    "Keps nut", "Flat washer", "Lock washer", "Fender washer", "Sealing washer",
    "Spring washer", "Blind rivet", "Solid rivet", "Drive rivet", "Split rivet",
    "Tubular rivet", "Cotter pin", "Dowel pin", "Spring pin", "Taper pin", "Groove pin",
];

const FASTENER_MATERIALS: &[&str] = &[
    "Steel", "Stainless steel", "Brass", "Aluminum", "Bronze", "Titanium", "Copper", "Nickel",
    "Zinc", "Alloy steel",
];

const FASTENER_SIZES: &[&str] = &[
    "55mm x 8g", "60mm x 10g", "80mm x 12g", "100mm x 18g", "4.2x40 (8x1.1/2)", "4.2x50 (8x2)",
    "4.2x55 (8x2.1/4)", "4.5x60 (9x2.1/2)", "4.5x70 (9x3)", "5.5x50 (12x2)", "5.5x19 (12x3/4)",
    "5.5x25 (12x1)", "5.5x32 (12x1.1/4)", "5.5x38 (12x1.1/2)", "5.5x70 (12x2.3/4)",
    "3mm x 10mm", "3mm x 15mm", "3mm x 20mm", "4mm x 10mm", "4mm x 15mm", "4mm x 20mm",
    "6mm x 20mm", "6mm x 30mm", "8mm x 40mm", "10mm x 50mm", "1/4in x 1in", "1/4in x 2in",
    "3/8in x 1in", "3/8in x 2in", "1/2in x 2in", "1/2in x 4in",
];

const PIPE_ITEMS: &[&str] = &[
    "Pipe", "Flexible hose", "Hydraulic hose", "Garden hose", "Electrical conduit",
    "PVC conduit", "Metal duct", "Flex duct", "Cable channel", "Drainage channel",
    "Cable trunking", "Protective sleeve", "Threaded rod", "Steel rod", "Flat bar", "Round bar",
    "Handrail", "Guard rail",
];

const PIPE_MATERIALS: &[&str] = &[
    "PVC", "Copper", "PEX", "Galvanized steel", "Black steel", "Stainless steel", "Brass",
    "CPVC", "ABS", "Cast iron", "Polyethylene", "Ductile iron", "Concrete",
];

const PIPE_SIZES: &[&str] = &[
    "1/2 in x 10 ft", "3/4 in x 10 ft", "1 in x 10 ft", "1-1/4 in x 10 ft", "1-1/2 in x 10 ft",
    "2 in x 10 ft", "3 in x 10 ft", "4 in x 10 ft", "6 in x 10 ft", "8 in x 10 ft", "15mm x 3m",
    "22mm x 3m", "28mm x 3m", "32mm x 6m", "40mm x 6m", "50mm x 6m", "63mm x 6m",
];

const PAINT_ITEMS: &[&str] = &[
    "Paint brush", "Paint roller", "Paint tray", "Paint tray liner", "Paint can opener",
    "Paint stir stick", "Drop cloth", "Painter's tape", "Putty knife", "Scraper",
    "Sanding sponge", "Sandpaper", "Paint edger", "Paint shield", "Extension pole",
    "Paint sprayer", "Paint bucket", "Paint grid", "Paint cup", "Mixing paddle", "Caulking gun",
    "Spackle knife", "Dust mask", "Gloves", "Coveralls",
];

const PAINT_MATERIALS: &[&str] = &[
    "Nylon", "Polyester", "Foam", "Microfiber", "Lambswool", "Plastic", "Metal", "Steel",
    "Aluminum", "Wood", "Paper", "Cotton", "Canvas", "Rubber",
];

const PAINT_SIZES: &[&str] = &[
    "1 in", "2 in", "3 in", "4 in", "6 in", "9 in", "12 in", "18 in", "Quart", "Gallon",
    "5-gallon", "Small", "Medium", "Large", "Extra large", "25 ft", "50 ft", "100 ft",
];

const INK_TYPES: &[&str] = &[
    "Dye-based", "Pigment-based", "Solvent-based", "UV-curable", "Gel", "Ballpoint", "Fountain",
    "Acrylic", "Watercolor", "India ink", "Calligraphy ink", "Iron gall ink", "Sepia ink",
    "Textile ink", "Screen printing ink", "Marker ink", "Stamp pad ink", "Tattoo ink",
    "Printer ink", "Plotter ink", "Whiteboard ink", "Highlighter ink", "Permanent ink",
    "Washable ink", "UV-reactive ink", "Thermochromic ink", "Invisible ink", "Metallic ink",
    "Fluorescent ink",
];

const INK_COLORS: &[&str] = &[
    "Black", "White", "Gray", "Silver", "Charcoal", "Ivory", "Beige", "Tan", "Brown",
    "Chocolate", "Espresso", "Taupe", "Camel", "Copper", "Bronze", "Gold", "Red", "Crimson",
    "Scarlet", "Burgundy", "Maroon", "Ruby", "Cherry", "Rose", "Coral", "Salmon", "Vermilion",
    "Magenta", "Pink", "Fuchsia", "Blush", "Peach", "Orange", "Tangerine", "Apricot", "Amber",
    "Rust", "Pumpkin", "Copper", "Ochre", "Yellow", "Lemon", "Canary", "Gold", "Mustard",
    "Daffodil", "Butter", "Cream", "Green", "Emerald", "Olive", "Lime", "Mint", "Jade",
    "Chartreuse", "Moss", "Forest", "Pine", "Seafoam", "Teal", "Turquoise", "Aqua", "Cyan",
    "Blue", "Navy", "Azure", "Cobalt", "Sapphire", "Sky Blue", "Cerulean", "Indigo", "Denim",
    "Prussian Blue", "Turquoise Blue", "Purple", "Violet", "Lavender", "Lilac", "Mauve", "Plum",
    "Orchid", "Amethyst", "Eggplant", "Bordeaux", "Wine", "Mahogany", "Sand", "Sienna", "Umber",
    "Slate", "Steel Blue", "Periwinkle", "Powder Blue", "Ice Blue", "Mint Green", "Sea Green",
    "Kelly Green", "Hunter Green", "Apple Green", "Spring Green", "Fern Green", "Jungle Green",
    "Sunflower", "Banana", "Honey", "Sandstone", "Desert", "Khaki", "Army Green", "Copper Red",
    "Firebrick", "Brick Red", "Blood Red", "Rosewood", "Mulberry", "Raspberry", "Strawberry",
    "Pumpkin Orange", "Carrot Orange", "Amber Yellow", "Sunset Orange", "Burnt Orange",
    "Lime Green", "Pistachio", "Shamrock", "Clover", "Basil", "Moss Green", "Royal Blue",
    "Baby Blue", "Electric Blue", "Midnight Blue", "Ocean Blue", "Pacific Blue", "Eggshell",
    "Alabaster", "Snow", "Pearl", "Opal", "Onyx", "Graphite", "Jet Black", "Neon Green",
    "Neon Pink", "Neon Yellow", "Neon Orange", "Neon Blue", "Neon Purple", "Gold Metallic",
    "Silver Metallic", "Bronze Metallic", "Copper Metallic", "Pearlescent White",
    "Iridescent Blue", "Glitter Silver", "Glitter Gold",
];

const INK_VOLUMES: &[&str] = &[
    "5ml", "8ml", "10ml", "15ml", "20ml", "30ml", "50ml", "60ml", "100ml", "120ml", "200ml",
    "250ml", "300ml", "400ml", "500ml", "750ml", "1L", "2L", "5L", "Cartridge", "Refill pack",
    "Bottle", "Tube", "Drum",
];

const BUILDING_ITEMS: &[&str] = &[
    "Brick", "Cinder block", "Concrete block", "Clay block", "AAC block", "Stone block",
    "Drywall panel", "Gypsum board", "Cement board", "Fiber cement board", "Plasterboard",
    "Plywood sheet", "OSB board", "MDF panel", "Particle board", "Hardboard",
    "Insulation board", "Foam board", "Mineral wool board", "Fiberglass board", "Lumber",
    "Stud", "Joist", "Beam", "Rafter", "Sill plate", "Subfloor panel", "Roofing shingle",
    "Roofing tile", "Roof panel", "Siding panel", "Wall panel", "Floor tile", "Wall tile",
    "Ceiling tile", "Acoustic panel", "Glass pane", "Rebar", "Mesh", "Wire lath",
    "Vapor barrier", "House wrap", "Underlayment", "Flashing", "Gutter", "Downspout",
    "Corner bead", "Expansion joint", "Sealant", "Mortar", "Grout", "Adhesive", "Caulk",
];

const BUILDING_MATERIALS: &[&str] = &[
    "Clay", "Concrete", "Cement", "Gypsum", "Lime", "Sandstone", "Granite", "Marble", "Slate",
    "Pine", "Spruce", "Fir", "Cedar", "Oak", "Maple", "Bamboo", "Engineered wood", "Steel",
    "Galvanized steel", "Stainless steel", "Aluminum", "Copper", "PVC", "Vinyl", "Fiberglass",
    "Foam", "Mineral wool", "Glass", "Ceramic", "Porcelain", "Bitumen", "Asphalt", "Rubber",
];

const BUILDING_SIZES: &[&str] = &[
    "8x4x2 in", "16x8x8 in", "12x8x8 in", "24x8x8 in", "4x8 ft", "4x10 ft", "4x12 ft", "2x4 ft",
    "2x2 ft", "1/2 in thick", "5/8 in thick", "3/4 in thick", "1 in thick", "2x4 in", "2x6 in",
    "2x8 in", "2x10 in", "2x12 in", "4x4 in", "6x6 in", "8x8 in", "10x10 in", "12x12 in",
    "18x18 in", "24x24 in", "6x24 in", "6x36 in", "8x48 in", "36x12 in", "36x36 in", "48x16 in",
    "#3 (3/8 in)", "#4 (1/2 in)", "#5 (5/8 in)", "6x6 in mesh", "100 ft roll", "50 ft roll",
    "25 ft roll", "10 ft length",
];

const AUTOMOTIVE_ITEMS: &[&str] = &[
    "Air filter", "Oil filter", "Fuel filter", "Cabin filter", "Spark plug", "Ignition coil",
    "Alternator", "Starter motor", "Battery", "Radiator", "Water pump", "Thermostat",
    "Timing belt", "Serpentine belt", "Brake pad", "Brake rotor", "Brake caliper", "Brake drum",
    "Brake shoe", "Wheel bearing", "Hub assembly", "Axle shaft", "CV joint", "Drive shaft",
    "Shock absorber", "Strut", "Control arm", "Ball joint", "Tie rod end", "Steering rack",
    "Power steering pump", "Fuel pump", "Fuel injector", "Oxygen sensor", "MAP sensor",
    "MAF sensor", "Throttle body", "Exhaust manifold", "Catalytic converter", "Muffler",
    "Tailpipe", "Headlight", "Taillight", "Turn signal", "Fog light", "Wiper blade",
    "Door handle", "Window regulator", "Mirror", "Grille", "Bumper",
];

const AUTOMOTIVE_MATERIALS: &[&str] = &[
    "Steel", "Aluminum", "Cast iron", "Plastic", "Rubber", "Copper", "Brass", "Ceramic",
    "Glass", "Composite",
];

const AUTOMOTIVE_SIZES: &[&str] = &[
    "Standard", "Heavy duty", "Compact", "Extended", "High performance", "12V", "24V", "5mm",
    "10mm", "15mm", "20mm", "1/2 in", "3/4 in", "1 in", "Small", "Medium", "Large",
];

const TOPWEAR_ITEMS: &[&str] = &[
    "T-shirt", "Polo shirt", "Dress shirt", "Button-down shirt", "Blouse", "Tank top",
    "Camisole", "Crop top", "Long-sleeve shirt", "Short-sleeve shirt", "Henley shirt",
    "Baseball shirt", "Rugby shirt", "Sweatshirt", "Hoodie", "Pullover", "Cardigan", "Sweater",
    "V-neck sweater", "Crewneck sweater", "Turtleneck", "Mock neck", "Poncho", "Kimono top",
    "Peplum top", "Wrap top", "Tube top", "Bodysuit", "Tunic", "Peasant top", "Jacket",
    "Bomber jacket", "Denim jacket", "Leather jacket", "Blazer", "Suit jacket", "Windbreaker",
    "Track jacket", "Varsity jacket", "Parka", "Rain jacket", "Anorak", "Fleece jacket",
    "Quilted jacket", "Down jacket", "Vest", "Gilet", "Shrug", "Cape", "Bolero",
];

const TOPWEAR_MATERIALS: &[&str] = &[
    "Cotton", "Linen", "Polyester", "Rayon", "Silk", "Wool", "Cashmere", "Acrylic", "Nylon",
    "Spandex", "Modal", "Viscose", "Bamboo", "Denim", "Leather", "Faux leather", "Fleece",
    "Velvet", "Jersey", "Satin", "Chiffon", "Lace", "Tweed", "Corduroy", "Suede", "Mesh",
    "Microfiber", "Canvas", "Terrycloth", "Hemp",
];

const TOPWEAR_COLORS: &[&str] = &[
    "Black", "White", "Gray", "Charcoal", "Navy", "Blue", "Light blue", "Brown", "Tan", "Beige",
    "Cream", "Red", "Burgundy", "Maroon", "Pink", "Purple", "Lavender", "Green", "Olive",
    "Dark green", "Yellow", "Mustard", "Orange", "Coral", "Gold", "Silver", "Teal", "Turquoise",
    "Mint", "Ivory", "Copper",
];

const TOPWEAR_SIZES: &[&str] = &[
    "XS", "S", "M", "L", "XL", "XXL", "3XL", "4XL", "5XL", "US 0", "US 2", "US 4", "US 6",
    "US 8", "US 10", "US 12", "US 14", "US 16", "US 18", "US 20", "EU 32", "EU 34", "EU 36",
    "EU 38", "EU 40", "EU 42", "EU 44", "EU 46", "EU 48", "EU 50",
];

const SHOE_ITEMS: &[&str] = &[
    "Sneaker", "Running shoe", "Dress shoe", "Loafer", "Oxford", "Derby", "Boot",
    "Chelsea boot", "Chukka boot", "Hiking boot", "Sandals", "Flip-flop", "Slipper", "Moccasin",
    "Espadrille", "Ballet flat", "Pump", "Wedge", "Clog", "Monk strap", "High heel",
    "Platform shoe", "Skate shoe", "Soccer cleat", "Basketball shoe", "Tennis shoe",
    "Golf shoe", "Work boot", "Rain boot", "Snow boot",
];

const SHOE_MATERIALS: &[&str] = &[
    "Leather", "Synthetic leather", "Canvas", "Mesh", "Suede", "Rubber", "Textile", "Nubuck",
    "Patent leather", "Denim", "PVC", "PU", "EVA", "Foam", "Wool", "Cotton", "Polyester",
    "Microfiber", "Faux fur", "Neoprene",
];

const SHOE_COLORS: &[&str] = &[
    "Black", "White", "Gray", "Charcoal", "Navy", "Blue", "Light blue", "Brown", "Tan", "Beige",
    "Cream", "Red", "Burgundy", "Maroon", "Pink", "Purple", "Lavender", "Green", "Olive",
    "Dark green", "Yellow", "Mustard", "Orange", "Coral", "Gold", "Silver", "Teal", "Turquoise",
    "Mint", "Ivory", "Copper",
];

const SHOE_SIZES: &[&str] = &[
    "US 5", "US 6", "US 7", "US 8", "US 9", "US 10", "US 11", "US 12", "US 13", "EU 36",
    "EU 37", "EU 38", "EU 39", "EU 40", "EU 41", "EU 42", "EU 43", "EU 44", "EU 45", "UK 3",
    "UK 4", "UK 5", "UK 6", "UK 7", "UK 8", "UK 9", "UK 10", "UK 11", "Small", "Medium",
    "Large", "Extra large",
];

const PANTS_ITEMS: &[&str] = &[
    "Jeans", "Chinos", "Dress pants", "Cargo pants", "Joggers", "Sweatpants", "Track pants",
    "Corduroy pants", "Khakis", "Work pants", "Overalls", "Shorts", "Capri pants",
    "Cropped pants", "Palazzo pants", "Culottes", "Leggings", "Trousers", "Slim pants",
    "Wide-leg pants", "Bootcut pants", "Straight-leg pants", "Pleated pants",
    "Flat-front pants", "High-waisted pants", "Low-rise pants", "Paperbag pants", "Harem pants",
    "Carpenter pants", "Painter pants",
];

const PANTS_MATERIALS: &[&str] = &[
    "Denim", "Cotton", "Polyester", "Linen", "Wool", "Corduroy", "Twill", "Rayon", "Spandex",
    "Nylon", "Leather", "Faux leather", "Viscose", "Modal", "Silk", "Canvas", "Fleece",
    "Velvet", "Jersey", "Microfiber",
];

const PANTS_FITS: &[&str] = &[
    "Slim fit", "Regular fit", "Relaxed fit", "Loose fit", "Skinny fit", "Tapered fit",
    "Straight fit", "Bootcut fit", "Wide fit", "Athletic fit",
];

const PANTS_COLORS: &[&str] = &[
    "Black", "Navy", "Charcoal", "Gray", "Light gray", "White", "Beige", "Khaki", "Brown",
    "Olive", "Green", "Dark green", "Blue", "Light blue", "Red", "Burgundy", "Maroon", "Yellow",
    "Mustard", "Tan", "Cream", "Purple", "Lavender", "Pink", "Coral", "Orange", "Rust", "Teal",
    "Turquoise", "Mint", "Gold", "Silver",
];

const PANTS_SIZES: &[&str] = &[
    "28x30", "28x32", "30x30", "30x32", "30x34", "32x30", "32x32", "32x34", "34x30", "34x32",
    "34x34", "36x30", "36x32", "36x34", "38x30", "38x32", "38x34", "S", "M", "L", "XL", "XXL",
    "3XL", "4XL", "XS", "XXS", "5XL",
];

const GEMSTONE_ITEMS: &[&str] = &[
    "Diamond", "Ruby", "Sapphire", "Emerald", "Amethyst", "Topaz", "Aquamarine", "Garnet",
    "Opal", "Peridot", "Citrine", "Spinel", "Tanzanite", "Tourmaline", "Alexandrite",
    "Morganite", "Jade", "Onyx", "Zircon", "Quartz", "Agate", "Lapis Lazuli", "Moonstone",
    "Sunstone", "Turquoise", "Malachite", "Chalcedony", "Bloodstone", "Jasper", "Obsidian",
    "Amber", "Coral", "Pearl", "Hematite", "Labradorite", "Rhodolite", "Kunzite", "Iolite",
    "Sodalite", "Amazonite", "Apatite", "Carnelian", "Chrysoprase", "Fluorite", "Howlite",
    "Larimar", "Prehnite", "Serpentine", "Smithsonite", "Sugilite",
];

const GEMSTONE_CUTS: &[&str] = &[
    "Round", "Oval", "Cushion", "Princess", "Emerald", "Asscher", "Marquise", "Pear", "Heart",
    "Radiant", "Trillion", "Baguette", "Cabochon", "Briolette", "Rose cut", "Old mine cut",
    "Step cut", "Mixed cut", "Fancy cut",
];

const GEMSTONE_COLORS: &[&str] = &[
    "Colorless", "White", "Black", "Gray", "Brown", "Yellow", "Orange", "Red", "Pink", "Purple",
    "Violet", "Blue", "Green", "Teal", "Turquoise", "Indigo", "Champagne", "Cognac", "Peach",
    "Lavender", "Lilac", "Magenta", "Fuchsia", "Olive", "Lime", "Mint", "Aqua", "Sky blue",
    "Royal blue", "Navy", "Emerald green", "Forest green",
];

const GEMSTONE_SIZES: &[&str] = &[
    "1mm", "2mm", "3mm", "4mm", "5mm", "6mm", "7mm", "8mm", "9mm", "10mm", "12mm", "14mm",
    "16mm", "18mm", "20mm", "0.25ct", "0.5ct", "0.75ct", "1ct", "1.5ct", "2ct", "3ct", "5ct",
    "10ct",
];
