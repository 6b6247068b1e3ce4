//! Shell orchestration: the three reactive managers, the controller that
//! wires them to the store, the surface traits they drive, and a headless
//! surface implementation for running without a UI toolkit.

pub mod audio;
pub mod controller;
pub mod headless;
pub mod notify;
pub mod overlay;
pub mod surface;

pub use audio::AudioErrorDialogManager;
pub use controller::{ShellController, ShellSurfaces};
pub use headless::HeadlessSurface;
pub use notify::ErrorNotificationManager;
pub use overlay::LoadingOverlayManager;
pub use surface::{DialogHost, Notification, NotificationHost, OverlayHandle, OverlayOptions};
