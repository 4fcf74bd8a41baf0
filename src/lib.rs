//! # hue_lights_rs
//!
//! An async Rust client for Hue-style lighting bridges, built around exact
//! conversion from RGB and hex colors to CIE 1931 xy chromaticity.
//!
//! The bridge expects color as an `xy` point: hue and saturation with no
//! brightness. This crate turns the colors people actually type (`#FF8000`,
//! `255,128,0`) into that point, and sends it along with the rest of a state
//! update over the bridge's REST API.
//!
//! ## Quick Start
//!
//! Color conversion is pure and needs no runtime:
//!
//! ```
//! use hue_lights_rs::{ColorConverter, RgbColor};
//!
//! let converter = ColorConverter::default();
//! let point = converter.xy_from_hex("#FF8000")?;
//! assert!(point.is_normalized());
//!
//! let same = converter.xy_from_rgb(&RgbColor::rgb(255, 128, 0));
//! assert_eq!(point, same);
//! # Ok::<(), hue_lights_rs::Error>(())
//! ```
//!
//! Talking to a bridge:
//!
//! ```ignore
//! use hue_lights_rs::{Bridge, BridgeConfig, Brightness, ColorConverter, LightState};
//!
//! async fn evening() -> Result<(), hue_lights_rs::Error> {
//!     let bridge = Bridge::new(BridgeConfig::new("192.168.1.2", "newdeveloper"));
//!
//!     let mut state = LightState::new();
//!     state.brightness(&Brightness::create(120).unwrap());
//!     state.hex("#FF8000", &bridge.converter())?;
//!     bridge.set_group_action("1", &state).await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Gamma
//!
//! Two gamma curves are available through [`GammaMode`]: textbook sRGB (the
//! default) and a bug-compatible legacy curve for setups tuned against older
//! clients. Pick one per bridge with [`BridgeConfig::gamma`].
//!
//! ## Feature Flags
//!
//! - `runtime-tokio` (default): tokio runtime plus the reqwest [`HttpTransport`]
//! - `runtime-async-std`: async-std runtime, bring your own [`Transport`]
//! - `runtime-smol`: smol runtime, bring your own [`Transport`]

mod bridge;
mod color;
mod config;
mod errors;
mod group;
mod history;
mod light;
mod payload;
mod response;
pub mod runtime;
mod status;
mod transport;
mod types;
mod version;

// Re-export public API
pub use bridge::{Bridge, GROUP_TYPES_SINCE, Resource};
pub use color::{ColorConverter, gamma_correct, hex_to_rgb, xy_from_hex, xy_from_rgb};
pub use config::BridgeConfig;
pub use errors::Error;
pub use group::{Group, GroupAttributes};
pub use history::{HistoryEntry, HistorySummary, MessageHistory, MessageType};
pub use light::Light;
pub use payload::LightState;
pub use response::{LightingResponse, Target};
pub use status::{ColorMode, LightStatus};
#[cfg(feature = "runtime-tokio")]
pub use transport::HttpTransport;
pub use transport::{HttpMethod, Transport};
pub use types::{
    Alert, Brightness, ChromaticityPoint, Effect, GammaMode, GroupKind, HexColor, HueSaturation,
    PowerMode, RgbColor, RoomClass,
};
pub use version::ApiVersion;
