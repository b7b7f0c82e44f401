//! Optika Core Types and Definitions
//!
//! This crate provides the foundational types shared by the Optika diagram
//! engine. It includes:
//!
//! - **Geometry**: Points, bounds, arcs and affine placement ([`geometry`] module)
//! - **Colors**: CSS color handling and the wavelength color table ([`color::Color`])
//! - **Identifiers**: Efficient string-interned identifiers ([`identifier::Id`])
//! - **Draw**: Stroke, render layer and text definitions ([`draw`] module)

pub mod color;
pub mod draw;
pub mod geometry;
pub mod identifier;
