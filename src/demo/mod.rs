//! Demo content and a minimal host for exercising the extender.
//!
//! - `SimpleHost` boots a small card catalog through a ten-step plan laid
//!   out like the real host's, so the default splice boundaries apply.
//! - `DemoUnit` registers one deck, one card and one metadata overwrite.
//! - `SimpleHost::load_locale` merges registered card names into the
//!   host's own string table.
//!
//! ## Example
//!
//! ```
//! use ccg_splice::content::ContentUnit;
//! use ccg_splice::core::ExtenderConfig;
//! use ccg_splice::demo::{DemoUnit, SimpleHost};
//! use ccg_splice::extender::DbExtender;
//! use ccg_splice::host::{HostDb, SpriteCatalog};
//!
//! let host = SimpleHost::new();
//! let mut extender = DbExtender::new(ExtenderConfig::default(), host.symbols(), SpriteCatalog::new());
//!
//! let mut units: Vec<Box<dyn ContentUnit>> = vec![Box::new(DemoUnit::new())];
//! assert!(extender.boot_units(&mut units).is_success());
//!
//! let mut db = HostDb::new();
//! extender.run_boot(host.boot_plan(), &mut db).unwrap();
//! assert!(db.card_classes.contains_key("EWandererDemoCard"));
//! ```

mod host;
mod unit;

pub use host::{SimpleHost, SimpleHostBuilder};
pub use unit::DemoUnit;
