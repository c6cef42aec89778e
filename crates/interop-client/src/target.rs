//! Target (detected object) records and their characteristic enums.
//!
//! Wire names follow the 2017 protocol: lowercase snake_case strings, with
//! the record's classification under the JSON key `type`. The enums also
//! implement `FromStr` over the same strings because the legacy 2016
//! tab-delimited file spells characteristics identically.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A detected-object record submitted for scoring.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Target {
    /// Server-assigned identifier; absent until the target has been created.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u32>,
    #[serde(rename = "type")]
    pub target_type: TargetType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shape: Option<Shape>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<Color>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphanumeric: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alphanumeric_color: Option<Color>,
    /// Free-form description, used by emergent targets.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Whether the detection was produced autonomously.
    #[serde(default)]
    pub autonomous: bool,
}

/// Target classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    Standard,
    OffAxis,
    Emergent,
}

/// Cardinal or intercardinal orientation of the target's alphanumeric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    N,
    Ne,
    E,
    Se,
    S,
    Sw,
    W,
    Nw,
}

/// Target shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Shape {
    Circle,
    Semicircle,
    QuarterCircle,
    Triangle,
    Square,
    Rectangle,
    Trapezoid,
    Pentagon,
    Hexagon,
    Heptagon,
    Octagon,
    Star,
    Cross,
}

/// Target or alphanumeric color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    White,
    Black,
    Gray,
    Red,
    Blue,
    Green,
    Yellow,
    Purple,
    Brown,
    Orange,
}

impl TargetType {
    fn as_str(self) -> &'static str {
        match self {
            TargetType::Standard => "standard",
            TargetType::OffAxis => "off_axis",
            TargetType::Emergent => "emergent",
        }
    }
}

impl Orientation {
    fn as_str(self) -> &'static str {
        match self {
            Orientation::N => "n",
            Orientation::Ne => "ne",
            Orientation::E => "e",
            Orientation::Se => "se",
            Orientation::S => "s",
            Orientation::Sw => "sw",
            Orientation::W => "w",
            Orientation::Nw => "nw",
        }
    }
}

impl Shape {
    fn as_str(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::Semicircle => "semicircle",
            Shape::QuarterCircle => "quarter_circle",
            Shape::Triangle => "triangle",
            Shape::Square => "square",
            Shape::Rectangle => "rectangle",
            Shape::Trapezoid => "trapezoid",
            Shape::Pentagon => "pentagon",
            Shape::Hexagon => "hexagon",
            Shape::Heptagon => "heptagon",
            Shape::Octagon => "octagon",
            Shape::Star => "star",
            Shape::Cross => "cross",
        }
    }
}

impl Color {
    fn as_str(self) -> &'static str {
        match self {
            Color::White => "white",
            Color::Black => "black",
            Color::Gray => "gray",
            Color::Red => "red",
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Purple => "purple",
            Color::Brown => "brown",
            Color::Orange => "orange",
        }
    }
}

impl fmt::Display for TargetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(TargetType::Standard),
            "off_axis" => Ok(TargetType::OffAxis),
            "emergent" => Ok(TargetType::Emergent),
            other => Err(format!("unknown target type: {}", other)),
        }
    }
}

impl FromStr for Orientation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "n" => Ok(Orientation::N),
            "ne" => Ok(Orientation::Ne),
            "e" => Ok(Orientation::E),
            "se" => Ok(Orientation::Se),
            "s" => Ok(Orientation::S),
            "sw" => Ok(Orientation::Sw),
            "w" => Ok(Orientation::W),
            "nw" => Ok(Orientation::Nw),
            other => Err(format!("unknown orientation: {}", other)),
        }
    }
}

impl FromStr for Shape {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "circle" => Ok(Shape::Circle),
            "semicircle" => Ok(Shape::Semicircle),
            "quarter_circle" => Ok(Shape::QuarterCircle),
            "triangle" => Ok(Shape::Triangle),
            "square" => Ok(Shape::Square),
            "rectangle" => Ok(Shape::Rectangle),
            "trapezoid" => Ok(Shape::Trapezoid),
            "pentagon" => Ok(Shape::Pentagon),
            "hexagon" => Ok(Shape::Hexagon),
            "heptagon" => Ok(Shape::Heptagon),
            "octagon" => Ok(Shape::Octagon),
            "star" => Ok(Shape::Star),
            "cross" => Ok(Shape::Cross),
            other => Err(format!("unknown shape: {}", other)),
        }
    }
}

impl FromStr for Color {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "white" => Ok(Color::White),
            "black" => Ok(Color::Black),
            "gray" => Ok(Color::Gray),
            "red" => Ok(Color::Red),
            "blue" => Ok(Color::Blue),
            "green" => Ok(Color::Green),
            "yellow" => Ok(Color::Yellow),
            "purple" => Ok(Color::Purple),
            "brown" => Ok(Color::Brown),
            "orange" => Ok(Color::Orange),
            other => Err(format!("unknown color: {}", other)),
        }
    }
}
