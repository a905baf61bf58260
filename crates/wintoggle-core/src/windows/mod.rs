//! Window discovery and control across window-manager backends.
//!
//! Two backends are supported: KWin's D-Bus interface (driven through
//! `qdbus`) and X11 automation through `xdotool`/`xprop`. [`detect_backends`]
//! decides once per invocation which of them are usable, and
//! [`BackendChain`] runs every operation against them in priority order.

pub mod backends;
pub mod chain;
pub mod detection;
pub mod errors;
pub mod resolver;
pub mod tool;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod mock;

pub use chain::BackendChain;
pub use detection::detect_backends;
pub use errors::BackendError;
pub use resolver::{enumerate, resolve};
pub use traits::WindowBackend;
pub use types::{Visibility, WindowHandle};
