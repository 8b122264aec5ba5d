//! RoomFE library root. The session core and ops modules live here so
//! they can be exercised without the GUI; the binary wires them into the
//! eframe shell.

#[macro_use]
pub mod i18n;
#[macro_use]
pub mod logger;

pub mod app;
pub mod components;
pub mod design;
pub mod ops;
pub mod session;
pub mod settings;
pub mod theme;
