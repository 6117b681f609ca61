//! Feature extraction and assembly.
//!
//! `assemble` is the only entry point the backend needs; the extractors are
//! public so the form can preview what will be detected.

mod keywords;
mod size;

pub use keywords::{extract_color, extract_material, COLOR_PRIORITY, MATERIAL_PRIORITY};
pub use size::{find_size, size_feature, SizeMatch, Unit};

use crate::model::feature_record::FeatureRecord;
use crate::model::listing::{Choice, ListingInput};

/// Builds the model input for a listing. Never fails.
pub fn assemble(input: &ListingInput) -> FeatureRecord {
    let material = match input.material_choice {
        Choice::Auto => extract_material(&input.title),
        Choice::Explicit(material) => material,
    };
    let color = match input.color_choice {
        Choice::Auto => extract_color(&input.title),
        Choice::Explicit(color) => color,
    };

    FeatureRecord {
        product_title: input.title.clone(),
        sold: input.units_sold,
        size_feat: size_feature(&input.title),
        material,
        color,
        discount_fraction: input.discount_pct / 100.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::feature_record::SizeFeature;
    use crate::model::listing::{Color, FurnitureType, Material};

    fn sofa_listing() -> ListingInput {
        ListingInput {
            title: "72 inch wood sofa".to_string(),
            furniture_type: FurnitureType::Sofa,
            units_sold: 5,
            material_choice: Choice::Auto,
            color_choice: Choice::Auto,
            original_price: 500.0,
            discount_pct: 10.0,
            delivery_fee: 20.0,
        }
    }

    #[test]
    fn assembles_auto_detected_record() {
        let record = assemble(&sofa_listing());
        assert_eq!(record.product_title, "72 inch wood sofa");
        assert_eq!(record.sold, 5);
        assert_eq!(record.size_feat, SizeFeature::Inches(72.0));
        assert_eq!(record.material, Material::Wood);
        assert_eq!(record.color, Color::Other);
        assert!((record.discount_fraction - 0.10).abs() < 1e-12);
    }

    #[test]
    fn explicit_choices_override_the_title() {
        let input = ListingInput {
            material_choice: Choice::Explicit(Material::Leather),
            color_choice: Choice::Explicit(Color::Black),
            ..sofa_listing()
        };
        let record = assemble(&input);
        assert_eq!(record.material, Material::Leather);
        assert_eq!(record.color, Color::Black);
    }

    #[test]
    fn discount_becomes_a_fraction() {
        for (pct, fraction) in [(0.0, 0.0), (25.0, 0.25), (100.0, 1.0)] {
            let input = ListingInput {
                discount_pct: pct,
                ..sofa_listing()
            };
            assert_eq!(assemble(&input).discount_fraction, fraction);
        }
    }

    #[test]
    fn title_without_size_gives_missing() {
        let input = ListingInput {
            title: "leather armchair".to_string(),
            ..sofa_listing()
        };
        assert!(assemble(&input).size_feat.is_missing());
    }
}
