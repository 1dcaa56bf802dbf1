//! Swerve - CSS transforms and transitions with vendor-prefix detection
//!
//! ```ignore
//! let doc = swerve::document()?;
//! let caps = Rc::new(Capabilities::detect_in(&doc)?);
//! Swerve::select(caps, &doc, ".card")?
//!     .duration(".5s")
//!     .translate_x(10)
//!     .rotate(45)
//!     .run();
//! ```

pub mod args;
pub mod capability;
pub mod completion;
pub mod dom;
pub mod error;
pub mod request;
pub mod transform;
pub mod vendor;

pub use args::{Arg, ArgKind};
pub use capability::{Capabilities, Feature, Property, StyleProbe};
pub use completion::PendingTransitions;
pub use dom::{TransitionListener, document};
pub use error::{Result, SwerveError};
pub use request::{Defaults, StyleNode, Swerve, TransitionWatch};
pub use transform::{Dimension, TransformFn};
pub use vendor::Vendor;
