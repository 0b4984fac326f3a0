//! Material definitions - the four cell contents and their fixed palette
//!
//! Every cell holds exactly one `Material`. Behavior is chosen by category,
//! color is assigned once at paint time from the palette below.

use serde::{Deserialize, Serialize};

/// Numeric material id as seen by JS and by the render buffer.
pub type MaterialId = u8;

pub const MAT_EMPTY: MaterialId = 0;
pub const MAT_SAND: MaterialId = 1;
pub const MAT_WATER: MaterialId = 2;
pub const MAT_WOOD: MaterialId = 3;

pub const MATERIAL_COUNT: usize = 4;

#[repr(u8)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Material {
    #[default]
    Empty = 0,
    Sand = 1,
    Water = 2,
    Wood = 3,
}

/// Movement category. Each category maps to one behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    None,
    Powder,
    Liquid,
    Solid,
}

/// Normalized RGB color (each channel in 0.0..=1.0)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb { r: 0.0, g: 0.0, b: 0.0 };

    pub fn from_u8(r: u8, g: u8, b: u8) -> Self {
        Rgb {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Pack into ABGR (little-endian bytes [R,G,B,A]) with full alpha,
    /// ready for a direct ImageData copy.
    pub fn to_abgr(self) -> u32 {
        let r = channel_to_u8(self.r) as u32;
        let g = channel_to_u8(self.g) as u32;
        let b = channel_to_u8(self.b) as u32;
        (0xFF << 24) | (b << 16) | (g << 8) | r
    }
}

#[inline]
fn channel_to_u8(c: f32) -> u8 {
    (c.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Static per-material properties
#[derive(Clone, Copy, Debug)]
pub struct MaterialProps {
    pub key: &'static str,
    pub category: Category,
    /// Palette entry in 0..=255 channels
    pub rgb8: [u8; 3],
}

pub const MATERIAL_DATA: [MaterialProps; MATERIAL_COUNT] = [
    MaterialProps { key: "empty", category: Category::None, rgb8: [0, 0, 0] },
    MaterialProps { key: "sand", category: Category::Powder, rgb8: [76, 70, 50] },
    MaterialProps { key: "water", category: Category::Liquid, rgb8: [2, 68, 89] },
    MaterialProps { key: "wood", category: Category::Solid, rgb8: [93, 67, 44] },
];

pub const ALL_MATERIALS: [Material; MATERIAL_COUNT] =
    [Material::Empty, Material::Sand, Material::Water, Material::Wood];

/// Materials a brush can place (everything but Empty)
pub const PAINTABLE_MATERIALS: [Material; 3] = [Material::Sand, Material::Water, Material::Wood];

impl Material {
    #[inline]
    pub fn id(self) -> MaterialId {
        self as MaterialId
    }

    #[inline]
    pub fn from_id(id: MaterialId) -> Option<Material> {
        ALL_MATERIALS.get(id as usize).copied()
    }

    #[inline]
    pub fn props(self) -> &'static MaterialProps {
        &MATERIAL_DATA[self as usize]
    }

    #[inline]
    pub fn category(self) -> Category {
        self.props().category
    }

    #[inline]
    pub fn color(self) -> Rgb {
        let [r, g, b] = self.props().rgb8;
        Rgb::from_u8(r, g, b)
    }

    #[inline]
    pub fn key(self) -> &'static str {
        self.props().key
    }

    #[inline]
    pub fn is_empty(self) -> bool {
        self == Material::Empty
    }

    pub fn from_key(key: &str) -> Option<Material> {
        ALL_MATERIALS.iter().copied().find(|m| m.key() == key)
    }

    /// Brush hotkeys: s = sand, w = water, d = wood. Case-insensitive.
    pub fn from_brush_key(key: char) -> Option<Material> {
        match key.to_ascii_lowercase() {
            's' => Some(Material::Sand),
            'w' => Some(Material::Water),
            'd' => Some(Material::Wood),
            _ => None,
        }
    }
}

impl std::fmt::Display for Material {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_match_table_order() {
        for (idx, m) in ALL_MATERIALS.iter().enumerate() {
            assert_eq!(m.id() as usize, idx);
            assert_eq!(Material::from_id(idx as u8), Some(*m));
        }
        assert_eq!(Material::from_id(MATERIAL_COUNT as u8), None);
    }

    #[test]
    fn palette_matches_reference_rgb() {
        let sand = Material::Sand.color();
        assert!((sand.r - 76.0 / 255.0).abs() < 1e-6);
        assert!((sand.g - 70.0 / 255.0).abs() < 1e-6);
        assert!((sand.b - 50.0 / 255.0).abs() < 1e-6);
        assert_eq!(Material::Water.color().to_abgr(), 0xFF59_4402);
        assert_eq!(Material::Empty.color(), Rgb::BLACK);
    }

    #[test]
    fn categories_drive_behavior_kind() {
        assert_eq!(Material::Sand.category(), Category::Powder);
        assert_eq!(Material::Water.category(), Category::Liquid);
        assert_eq!(Material::Wood.category(), Category::Solid);
        assert_eq!(Material::Empty.category(), Category::None);
    }

    #[test]
    fn brush_keys_and_names_resolve() {
        assert_eq!(Material::from_brush_key('S'), Some(Material::Sand));
        assert_eq!(Material::from_brush_key('w'), Some(Material::Water));
        assert_eq!(Material::from_brush_key('D'), Some(Material::Wood));
        assert_eq!(Material::from_brush_key('x'), None);
        assert_eq!(Material::from_key("wood"), Some(Material::Wood));
        assert_eq!(Material::Water.to_string(), "water");
    }
}
