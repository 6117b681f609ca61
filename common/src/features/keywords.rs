//! Keyword classification of material and color.
//!
//! Both extractors lowercase the title and return the first keyword of their
//! priority list contained anywhere in it. Containment is plain substring
//! matching, so "woodworking bench" is wood. The priority is the list order
//! below, not the position of the word in the title.

use crate::model::listing::{Color, Material, Vocabulary};

pub const MATERIAL_PRIORITY: [Material; 8] = [
    Material::Wood,
    Material::Metal,
    Material::Fabric,
    Material::Leather,
    Material::Plastic,
    Material::Glass,
    Material::Velvet,
    Material::Boucle,
];

pub const COLOR_PRIORITY: [Color; 10] = [
    Color::White,
    Color::Black,
    Color::Grey,
    Color::Gray,
    Color::Brown,
    Color::Blue,
    Color::Green,
    Color::Red,
    Color::Pink,
    Color::Yellow,
];

pub fn extract_material(title: &str) -> Material {
    first_keyword(title, &MATERIAL_PRIORITY).unwrap_or(Material::Other)
}

pub fn extract_color(title: &str) -> Color {
    first_keyword(title, &COLOR_PRIORITY).unwrap_or(Color::Other)
}

fn first_keyword<T: Vocabulary>(title: &str, keywords: &[T]) -> Option<T> {
    let lowered = title.to_lowercase();
    keywords
        .iter()
        .copied()
        .find(|keyword| lowered.contains(keyword.as_str()))
}
