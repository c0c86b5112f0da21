//! Small UI kit shared by the landing page sections.

mod button;
mod separator;
mod skeleton;

pub use button::{Button, ButtonVariant};
pub use separator::Separator;
pub use skeleton::Skeleton;
