//! Engine settings loading.
//!
//! Settings come from a small YAML file and carry the defaults applied
//! when a rate-config upsert omits optional fields, plus the server
//! listen port.
//!
//! # Example
//!
//! ```no_run
//! use timeclock_engine::config::EngineSettings;
//!
//! let settings = EngineSettings::load("./config/engine.yaml").unwrap();
//! println!("daily threshold: {}", settings.default_daily_hours_threshold);
//! ```

mod settings;

pub use settings::EngineSettings;
