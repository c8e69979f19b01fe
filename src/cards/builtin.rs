//! The shipped car catalog.

use super::definition::{CardTemplate, Category, Rarity};

/// `(name, [speed, power, grip, weight], image, category, rarity)`
const CARS: &[(&str, [i32; 4], &str, Category, Rarity)] = &[
    ("Speedster", [90, 60, 70, 1200], "car00", Category::Speed, Rarity::Common),
    ("Rocket", [95, 80, 50, 1150], "car04", Category::Speed, Rarity::Rare),
    ("Tank", [40, 95, 80, 2100], "car01", Category::Power, Rarity::Common),
    ("Bulldozer", [45, 85, 75, 2300], "car05", Category::Power, Rarity::Rare),
    ("Drifter", [70, 65, 90, 1350], "car02", Category::Balanced, Rarity::Common),
    ("Panther", [78, 60, 82, 1380], "car07", Category::Balanced, Rarity::Rare),
    ("Blazer", [85, 70, 60, 1400], "car03", Category::Speed, Rarity::Common),
    ("Falcon", [80, 75, 55, 1250], "car06", Category::Balanced, Rarity::Common),
    ("Ghost", [88, 62, 65, 1280], "car08", Category::Speed, Rarity::Rare),
    ("Crusher", [50, 90, 60, 2200], "car09", Category::Power, Rarity::Rare),
    ("Nitro", [92, 72, 58, 1180], "car10", Category::Speed, Rarity::Epic),
    ("Goliath", [55, 88, 77, 2400], "car11", Category::Power, Rarity::Epic),
    ("Venom", [87, 64, 69, 1320], "car12", Category::Speed, Rarity::Rare),
    ("Opel", [87, 64, 69, 1320], "car13", Category::Speed, Rarity::Rare),
    ("Ferrari", [87, 64, 69, 1320], "car14", Category::Speed, Rarity::Rare),
    ("Mercedes", [87, 64, 69, 1320], "car15", Category::Speed, Rarity::Rare),
    // Second Mercedes livery. Name lookups resolve to the first entry.
    ("Mercedes", [87, 64, 69, 1320], "car16", Category::Speed, Rarity::Rare),
    ("Subaru", [87, 64, 69, 1320], "car17", Category::Speed, Rarity::Rare),
    ("Quicksilver", [87, 64, 69, 1320], "car18", Category::Speed, Rarity::Rare),
    ("Supra", [87, 64, 69, 1320], "car19", Category::Speed, Rarity::Rare),
    ("Porsche", [87, 64, 69, 1320], "car20", Category::Speed, Rarity::Rare),
    ("Lamborghini", [87, 64, 69, 1320], "car21", Category::Speed, Rarity::Rare),
    ("Maserati", [87, 64, 69, 1320], "car22", Category::Speed, Rarity::Rare),
];

pub(crate) fn templates() -> Vec<CardTemplate> {
    CARS.iter()
        .map(|&(name, stats, image, category, rarity)| {
            CardTemplate::new(name, stats)
                .with_image(image)
                .with_category(category)
                .with_rarity(rarity)
        })
        .collect()
}
