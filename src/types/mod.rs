//! Value types for color conversion and light control parameters.

mod alert;
mod brightness;
mod chromaticity;
mod gamma;
mod hex;
mod hue_saturation;
mod power;
mod rgb;
mod room;

pub use alert::{Alert, Effect};
pub use brightness::Brightness;
pub use chromaticity::ChromaticityPoint;
pub use gamma::GammaMode;
pub use hex::HexColor;
pub use hue_saturation::HueSaturation;
pub use power::PowerMode;
pub use rgb::RgbColor;
pub use room::{GroupKind, RoomClass};
