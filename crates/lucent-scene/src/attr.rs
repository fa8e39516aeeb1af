//! Inheritable surface attributes.
//!
//! Attributes are named values set on individual nodes and resolved by
//! walking towards the root, so a material set on a sub-assembly
//! applies to every solid below it unless a descendant overrides it.
//! Texture lists are the exception: they accumulate along the walk
//! instead of shadowing, see `Scene::textures`.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Attribute name under which a node's color is stored.
pub const COLOR: &str = "color";

/// Attribute name under which textures are stored.
///
/// The value may be a single texture or an ordered sequence.
pub const TEXTURE: &str = "texture";

/// Attribute name of the global reflectance-model identifier.
pub const REFLECTANCE: &str = "reflectance";

/// Attribute name of the model-specific material descriptor.
pub const MATERIAL: &str = "material";

/// An RGB color with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    /// Red component.
    pub r: f64,
    /// Green component.
    pub g: f64,
    /// Blue component.
    pub b: f64,
}

impl Color {
    /// Create a color from components.
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

/// Model-specific material descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    /// Reflectance model these parameters belong to.
    pub model: String,
    /// Named scalar parameters of the model.
    pub params: HashMap<String, f64>,
}

/// Value stored under an attribute name.
///
/// A closed union rather than an opaque any-value, so consumers match
/// exhaustively instead of type-checking at runtime. Applications may
/// store any variant under their own attribute names; the well-known
/// names above conventionally carry the matching variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AttrValue {
    /// An RGB color.
    Color(Color),
    /// A single named texture.
    Texture(String),
    /// An ordered sequence of named textures.
    Textures(Vec<String>),
    /// Identifier of the global reflectance model.
    Reflectance(String),
    /// Model-specific material parameters.
    Material(Material),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attr_value_serde_roundtrip() {
        let mut params = HashMap::new();
        params.insert("diffuse".to_string(), 0.8);
        params.insert("specular".to_string(), 0.2);
        let values = [
            AttrValue::Color(Color::new(0.1, 0.5, 0.9)),
            AttrValue::Texture("marble".to_string()),
            AttrValue::Textures(vec!["wood".to_string(), "rings".to_string()]),
            AttrValue::Reflectance("phong".to_string()),
            AttrValue::Material(Material {
                model: "phong".to_string(),
                params,
            }),
        ];
        for value in values {
            let json = serde_json::to_string(&value).unwrap();
            let back: AttrValue = serde_json::from_str(&json).unwrap();
            assert_eq!(back, value);
        }
    }
}
