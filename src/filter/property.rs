//! Named properties of the testshape filter
//!
//! Properties are the string/int/bool surface a pipeline description or a
//! controller uses to configure the filter. Every property maps onto one
//! field of [`ShapeSettings`]; strings are parsed into enums here, so bad
//! values are rejected before they reach the drawing code.

use std::fmt;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::shape::ShapeSettings;

/// Type of a property value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
    String,
    Int,
    Bool,
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyType::String => write!(f, "String"),
            PropertyType::Int => write!(f, "Integer"),
            PropertyType::Bool => write!(f, "Boolean"),
        }
    }
}

/// A property value
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Str(String),
    Int(i32),
    Bool(bool),
}

impl PropertyValue {
    /// Type of this value
    pub fn value_type(&self) -> PropertyType {
        match self {
            PropertyValue::Str(_) => PropertyType::String,
            PropertyValue::Int(_) => PropertyType::Int,
            PropertyValue::Bool(_) => PropertyType::Bool,
        }
    }

    /// Parse a textual value (as given on a command line) for a property type
    pub fn parse(value_type: PropertyType, text: &str) -> Result<Self> {
        match value_type {
            PropertyType::String => Ok(PropertyValue::Str(text.to_string())),
            PropertyType::Int => text
                .trim()
                .parse::<i32>()
                .map(PropertyValue::Int)
                .map_err(|e| Error::property(format!("'{}' is not an integer: {}", text, e))),
            PropertyType::Bool => match text.trim().to_ascii_lowercase().as_str() {
                "true" | "1" | "yes" => Ok(PropertyValue::Bool(true)),
                "false" | "0" | "no" => Ok(PropertyValue::Bool(false)),
                _ => Err(Error::property(format!("'{}' is not a boolean", text))),
            },
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropertyValue::Str(s) => write!(f, "\"{}\"", s),
            PropertyValue::Int(v) => write!(f, "{}", v),
            PropertyValue::Bool(v) => write!(f, "{}", v),
        }
    }
}

impl From<&str> for PropertyValue {
    fn from(s: &str) -> Self {
        PropertyValue::Str(s.to_string())
    }
}

impl From<i32> for PropertyValue {
    fn from(v: i32) -> Self {
        PropertyValue::Int(v)
    }
}

impl From<bool> for PropertyValue {
    fn from(v: bool) -> Self {
        PropertyValue::Bool(v)
    }
}

/// Static description of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PropertySpec {
    pub name: &'static str,
    pub nick: &'static str,
    pub blurb: &'static str,
    pub value_type: PropertyType,
}

/// Every property, in declaration order
pub const PROPERTIES: &[PropertySpec] = &[
    PropertySpec {
        name: "shape",
        nick: "Shape",
        blurb: "Shape to draw: rectangle, square, triangle or circle",
        value_type: PropertyType::String,
    },
    PropertySpec {
        name: "color",
        nick: "Color",
        blurb: "Outline color: red, green or blue",
        value_type: PropertyType::String,
    },
    PropertySpec {
        name: "x",
        nick: "X",
        blurb: "Center x coordinate, used when coordinate is set",
        value_type: PropertyType::Int,
    },
    PropertySpec {
        name: "y",
        nick: "Y",
        blurb: "Center y coordinate, used when coordinate is set",
        value_type: PropertyType::Int,
    },
    PropertySpec {
        name: "coordinate",
        nick: "Coordinate",
        blurb: "Place the shape at x/y with its own size instead of centering it on the frame",
        value_type: PropertyType::Bool,
    },
    PropertySpec {
        name: "rect_l",
        nick: "Rectangle length",
        blurb: "Width of the rectangle",
        value_type: PropertyType::Int,
    },
    PropertySpec {
        name: "rect_h",
        nick: "Rectangle height",
        blurb: "Height of the rectangle",
        value_type: PropertyType::Int,
    },
    PropertySpec {
        name: "triangle_size",
        nick: "Triangle size",
        blurb: "Height of the triangle; the base is twice as wide",
        value_type: PropertyType::Int,
    },
    PropertySpec {
        name: "square_size",
        nick: "Square size",
        blurb: "Side length of the square",
        value_type: PropertyType::Int,
    },
    PropertySpec {
        name: "circle_radius",
        nick: "Circle radius",
        blurb: "Radius of the circle",
        value_type: PropertyType::Int,
    },
];

/// Look up a property by name
pub fn find_property(name: &str) -> Result<&'static PropertySpec> {
    PROPERTIES
        .iter()
        .find(|spec| spec.name == name)
        .ok_or_else(|| unknown_property(name))
}

fn unknown_property(name: &str) -> Error {
    Error::property(format!("no property named '{}'", name))
}

fn expect_str(name: &str, value: &PropertyValue) -> Result<String> {
    match value {
        PropertyValue::Str(s) => Ok(s.clone()),
        other => Err(type_mismatch(name, PropertyType::String, other)),
    }
}

fn expect_int(name: &str, value: &PropertyValue) -> Result<i32> {
    match value {
        PropertyValue::Int(v) => Ok(*v),
        other => Err(type_mismatch(name, PropertyType::Int, other)),
    }
}

fn expect_bool(name: &str, value: &PropertyValue) -> Result<bool> {
    match value {
        PropertyValue::Bool(v) => Ok(*v),
        other => Err(type_mismatch(name, PropertyType::Bool, other)),
    }
}

fn type_mismatch(name: &str, expected: PropertyType, got: &PropertyValue) -> Error {
    Error::property(format!(
        "property '{}' takes a {} value, got {} {}",
        name,
        expected,
        got.value_type(),
        got
    ))
}

impl ShapeSettings {
    /// Set one property by name.
    ///
    /// On error the settings are left unchanged.
    pub fn set_property(&mut self, name: &str, value: PropertyValue) -> Result<()> {
        match name {
            "shape" => self.shape = expect_str(name, &value)?.parse()?,
            "color" => self.color = expect_str(name, &value)?.parse()?,
            "x" => self.x = expect_int(name, &value)?,
            "y" => self.y = expect_int(name, &value)?,
            "coordinate" => self.coordinate = expect_bool(name, &value)?,
            "rect_l" => self.rect_l = expect_int(name, &value)?,
            "rect_h" => self.rect_h = expect_int(name, &value)?,
            "triangle_size" => self.triangle_size = expect_int(name, &value)?,
            "square_size" => self.square_size = expect_int(name, &value)?,
            "circle_radius" => self.circle_radius = expect_int(name, &value)?,
            _ => return Err(unknown_property(name)),
        }
        Ok(())
    }

    /// Read one property by name
    pub fn property(&self, name: &str) -> Result<PropertyValue> {
        let value = match name {
            "shape" => PropertyValue::from(self.shape.name()),
            "color" => PropertyValue::from(self.color.name()),
            "x" => PropertyValue::Int(self.x),
            "y" => PropertyValue::Int(self.y),
            "coordinate" => PropertyValue::Bool(self.coordinate),
            "rect_l" => PropertyValue::Int(self.rect_l),
            "rect_h" => PropertyValue::Int(self.rect_h),
            "triangle_size" => PropertyValue::Int(self.triangle_size),
            "square_size" => PropertyValue::Int(self.square_size),
            "circle_radius" => PropertyValue::Int(self.circle_radius),
            _ => return Err(unknown_property(name)),
        };
        Ok(value)
    }

    /// Apply a `name=value` assignment, parsing the value for the property's type
    pub fn apply_assignment(&mut self, assignment: &str) -> Result<()> {
        let (name, text) = assignment.split_once('=').ok_or_else(|| {
            Error::property(format!("expected name=value, got '{}'", assignment))
        })?;
        let spec = find_property(name.trim())?;
        let value = PropertyValue::parse(spec.value_type, text)?;
        self.set_property(spec.name, value)
    }
}
