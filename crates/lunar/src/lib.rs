//! # nongli-lunar
//!
//! Conversion between the Gregorian calendar and the traditional Chinese
//! lunisolar calendar, with sexagenary year names, zodiac animals, and
//! traditional numeral rendering.
//!
//! The engine is a pure computation over a static 210-year dataset
//! (1891..=2100): each lunar year's entry records its leap-month position,
//! the Gregorian date of its New Year's Day, and a packed bitfield of
//! month lengths. All conversions are timezone-naive day arithmetic; the
//! shared table is read-only, so every function is safe to call from any
//! number of threads.
//!
//! ## Quick Start
//!
//! ```
//! use nongli_lunar::{solar_to_lunar, lunar_to_solar, LunarDate, SolarDate};
//!
//! let info = solar_to_lunar(SolarDate::new(2011, 12, 31)?)?;
//! assert_eq!((info.month, info.day), (12, 7));
//! assert_eq!(info.label(), "二〇一一(辛卯年) 腊月初七");
//!
//! let date = LunarDate::new(2011, 12, 7, false)?;
//! assert_eq!(lunar_to_solar(date)?.to_string(), "2011-12-31");
//! # Ok::<(), nongli_lunar::LunarError>(())
//! ```
//!
//! ## Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | `table` | Static per-year dataset and accessors |
//! | `months` | Packed-bitfield month decoder |
//! | `convert` | Solar-to-lunar and lunar-to-solar converters |
//! | `solar` | Proleptic Gregorian date and day arithmetic |
//! | `lunar` | Lunar date value types and rendered result |
//! | `cycle` | Sexagenary stem-branch and zodiac tables |
//! | `fmt` | Traditional numeral rendering |
//! | `error` | Error types |

mod convert;
mod error;
mod lunar;
mod solar;

pub mod cycle;
pub mod fmt;
pub mod months;
pub mod table;

pub use convert::{lunar_to_solar, solar_to_lunar};
pub use error::LunarError;
pub use lunar::{LunarDate, LunarInfo};
pub use solar::{days_in_month, is_leap_year, SolarDate};
pub use table::{YearEntry, MAX_YEAR, MIN_YEAR};
