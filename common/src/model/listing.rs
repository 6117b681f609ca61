//! Listing attributes collected by the form.
//!
//! `ListingInput` is what the user typed and selected. It is rebuilt on every
//! form change and sent as-is to `POST /api/predict`; the backend turns it into
//! a `FeatureRecord` with `features::assemble`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A closed set of values offered by a select input.
///
/// `as_str` is the lowercase name used on the wire and by the model,
/// `label` is what the form shows.
pub trait Vocabulary: Copy + PartialEq + Sized + 'static {
    const ALL: &'static [Self];

    fn as_str(self) -> &'static str;

    fn label(self) -> &'static str;

    /// Looks a value up by its wire name or label, ignoring ASCII case.
    fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str().eq_ignore_ascii_case(value) || v.label().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FurnitureType {
    Chair,
    Table,
    Dresser,
    Sofa,
    Bed,
    Other,
}

impl Vocabulary for FurnitureType {
    const ALL: &'static [Self] = &[
        FurnitureType::Chair,
        FurnitureType::Table,
        FurnitureType::Dresser,
        FurnitureType::Sofa,
        FurnitureType::Bed,
        FurnitureType::Other,
    ];

    fn as_str(self) -> &'static str {
        match self {
            FurnitureType::Chair => "chair",
            FurnitureType::Table => "table",
            FurnitureType::Dresser => "dresser",
            FurnitureType::Sofa => "sofa",
            FurnitureType::Bed => "bed",
            FurnitureType::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            FurnitureType::Chair => "Chair",
            FurnitureType::Table => "Table",
            FurnitureType::Dresser => "Dresser",
            FurnitureType::Sofa => "Sofa",
            FurnitureType::Bed => "Bed",
            FurnitureType::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Material {
    Wood,
    Metal,
    Fabric,
    Leather,
    Plastic,
    Glass,
    Velvet,
    Boucle,
    Other,
}

impl Vocabulary for Material {
    const ALL: &'static [Self] = &[
        Material::Wood,
        Material::Metal,
        Material::Fabric,
        Material::Leather,
        Material::Plastic,
        Material::Glass,
        Material::Velvet,
        Material::Boucle,
        Material::Other,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Material::Wood => "wood",
            Material::Metal => "metal",
            Material::Fabric => "fabric",
            Material::Leather => "leather",
            Material::Plastic => "plastic",
            Material::Glass => "glass",
            Material::Velvet => "velvet",
            Material::Boucle => "boucle",
            Material::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Material::Wood => "Wood",
            Material::Metal => "Metal",
            Material::Fabric => "Fabric",
            Material::Leather => "Leather",
            Material::Plastic => "Plastic",
            Material::Glass => "Glass",
            Material::Velvet => "Velvet",
            Material::Boucle => "Boucle",
            Material::Other => "Other",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
    Grey,
    Gray,
    Brown,
    Blue,
    Green,
    Red,
    Pink,
    Yellow,
    Other,
}

impl Color {
    /// Colors offered by the form. `Gray` is only ever produced by extraction.
    pub const FORM_OPTIONS: &'static [Color] = &[
        Color::White,
        Color::Black,
        Color::Grey,
        Color::Brown,
        Color::Blue,
        Color::Green,
        Color::Red,
        Color::Pink,
        Color::Yellow,
        Color::Other,
    ];
}

impl Vocabulary for Color {
    const ALL: &'static [Self] = &[
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
        Color::Other,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Grey => "grey",
            Color::Gray => "gray",
            Color::Brown => "brown",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Pink => "pink",
            Color::Yellow => "yellow",
            Color::Other => "other",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Color::White => "White",
            Color::Black => "Black",
            Color::Grey => "Grey",
            Color::Gray => "Gray",
            Color::Brown => "Brown",
            Color::Blue => "Blue",
            Color::Green => "Green",
            Color::Red => "Red",
            Color::Pink => "Pink",
            Color::Yellow => "Yellow",
            Color::Other => "Other",
        }
    }
}

/// Either detect the value from the title or use the one the user picked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Choice<T> {
    Auto,
    Explicit(T),
}

/// Select value used for the "Auto Detect" option.
pub const AUTO_DETECT_VALUE: &str = "auto";

impl<T: Vocabulary> Choice<T> {
    /// Parses a select value: `"auto"` or one of the vocabulary names.
    pub fn from_form_value(value: &str) -> Option<Self> {
        if value.trim().eq_ignore_ascii_case(AUTO_DETECT_VALUE) {
            return Some(Choice::Auto);
        }
        T::parse(value).map(Choice::Explicit)
    }

    pub fn form_value(self) -> &'static str {
        match self {
            Choice::Auto => AUTO_DETECT_VALUE,
            Choice::Explicit(v) => v.as_str(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number, got {value}")]
    NotFinite { field: &'static str, value: f64 },
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },
    #[error("discount percentage must be between 0 and 100, got {0}")]
    DiscountOutOfRange(f64),
}

/// Everything the user entered for one listing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingInput {
    pub title: String,
    pub furniture_type: FurnitureType,
    pub units_sold: u32,
    pub material_choice: Choice<Material>,
    pub color_choice: Choice<Color>,
    /// Collected for the record; the model does not use it.
    pub original_price: f64,
    /// Percentage in `[0, 100]`.
    pub discount_pct: f64,
    pub delivery_fee: f64,
}

impl Default for ListingInput {
    fn default() -> Self {
        Self {
            title: String::new(),
            furniture_type: FurnitureType::Chair,
            units_sold: 0,
            material_choice: Choice::Auto,
            color_choice: Choice::Auto,
            original_price: 0.0,
            discount_pct: 0.0,
            delivery_fee: 0.0,
        }
    }
}

impl ListingInput {
    /// Checks the numeric bounds the form enforces.
    pub fn validate(&self) -> Result<(), InputError> {
        non_negative("originalPrice", self.original_price)?;
        non_negative("deliveryFee", self.delivery_fee)?;
        if !self.discount_pct.is_finite() {
            return Err(InputError::NotFinite {
                field: "discountPct",
                value: self.discount_pct,
            });
        }
        if !(0.0..=100.0).contains(&self.discount_pct) {
            return Err(InputError::DiscountOutOfRange(self.discount_pct));
        }
        Ok(())
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), InputError> {
    if !value.is_finite() {
        return Err(InputError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(InputError::Negative { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_the_empty_form() {
        let input = ListingInput::default();
        assert_eq!(input.furniture_type, FurnitureType::Chair);
        assert_eq!(input.material_choice, Choice::Auto);
        assert_eq!(input.color_choice, Choice::Auto);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn choice_parses_form_values() {
        assert_eq!(Choice::<Material>::from_form_value("auto"), Some(Choice::Auto));
        assert_eq!(
            Choice::<Material>::from_form_value("Velvet"),
            Some(Choice::Explicit(Material::Velvet))
        );
        assert_eq!(
            Choice::<Color>::from_form_value("gray"),
            Some(Choice::Explicit(Color::Gray))
        );
        assert_eq!(Choice::<Color>::from_form_value("teal"), None);
        assert_eq!(Choice::Explicit(Color::Pink).form_value(), "pink");
    }

    #[test]
    fn form_colors_leave_out_gray() {
        assert!(!Color::FORM_OPTIONS.contains(&Color::Gray));
        assert!(Color::FORM_OPTIONS.contains(&Color::Grey));
    }

    #[test]
    fn validate_rejects_out_of_range_values() {
        let input = ListingInput {
            discount_pct: 100.5,
            ..ListingInput::default()
        };
        assert_eq!(input.validate(), Err(InputError::DiscountOutOfRange(100.5)));

        let input = ListingInput {
            delivery_fee: -1.0,
            ..ListingInput::default()
        };
        assert!(matches!(
            input.validate(),
            Err(InputError::Negative { field: "deliveryFee", .. })
        ));

        let input = ListingInput {
            original_price: f64::NAN,
            ..ListingInput::default()
        };
        assert!(matches!(
            input.validate(),
            Err(InputError::NotFinite { field: "originalPrice", .. })
        ));
    }

    #[test]
    fn boundary_discounts_are_accepted() {
        for pct in [0.0, 100.0] {
            let input = ListingInput {
                discount_pct: pct,
                ..ListingInput::default()
            };
            assert!(input.validate().is_ok());
        }
    }

    #[test]
    fn wire_format_uses_camel_case() {
        let json = serde_json::to_value(ListingInput::default()).unwrap();
        assert_eq!(json["furnitureType"], "chair");
        assert_eq!(json["materialChoice"], "Auto");
        assert_eq!(json["unitsSold"], 0);

        let explicit = ListingInput {
            material_choice: Choice::Explicit(Material::Wood),
            ..ListingInput::default()
        };
        let json = serde_json::to_value(explicit).unwrap();
        assert_eq!(json["materialChoice"]["Explicit"], "wood");
    }
}
