use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;

/// A catalog material with its purchase cost per unit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Material {
    pub id: i64,
    pub name: String,
    pub unit_cost: Decimal,
}

impl Material {
    pub fn new(id: i64, name: impl Into<String>, unit_cost: Decimal) -> Self {
        Self {
            id,
            name: name.into(),
            unit_cost,
        }
    }
}

/// Material positions in a furniture bill of materials
///
/// Priced in the order of [`MaterialSlot::ALL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaterialSlot {
    /// Carcass board (huacal)
    StructuralBoard,
    /// Visible-face board (vista)
    VisibleFaceBoard,
    /// Edge banding for the carcass board
    StructuralEdgeBanding,
    /// Edge banding for the visible-face board
    VisibleEdgeBanding,
    Handle,
    Slide,
    Hinge,
    ExtensionTrim,
}

impl MaterialSlot {
    pub const ALL: [MaterialSlot; 8] = [
        MaterialSlot::StructuralBoard,
        MaterialSlot::VisibleFaceBoard,
        MaterialSlot::StructuralEdgeBanding,
        MaterialSlot::VisibleEdgeBanding,
        MaterialSlot::Handle,
        MaterialSlot::Slide,
        MaterialSlot::Hinge,
        MaterialSlot::ExtensionTrim,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MaterialSlot::StructuralBoard => "huacal",
            MaterialSlot::VisibleFaceBoard => "vista",
            MaterialSlot::StructuralEdgeBanding => "cubrecanto_huacal",
            MaterialSlot::VisibleEdgeBanding => "cubrecanto_vista",
            MaterialSlot::Handle => "jaladera",
            MaterialSlot::Slide => "corredera",
            MaterialSlot::Hinge => "bisagra",
            MaterialSlot::ExtensionTrim => "extension",
        }
    }
}

impl fmt::Display for MaterialSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
