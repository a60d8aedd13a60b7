//! gtk-rs code block generation.

pub mod parents;
pub mod properties;
pub mod signals;
pub mod template;

pub use parents::ParentImplGenerator;
pub use properties::PropertyGenerator;
pub use signals::SignalGenerator;
pub use template::TemplateGenerator;
