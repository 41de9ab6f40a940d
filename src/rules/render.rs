//! Value rendering for equality messages.
//!
//! Equality rules must print absent values as well as present ones, which a
//! plain `Display` bound cannot express for `Option`. `Render` is implemented
//! for the common scalar and string types, forwards through references and
//! boxes, and prints `None` for an absent `Option`.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Text form of a value inside a failure message.
///
/// # Example
///
/// ```rust
/// use assurance::rules::{Render, Rendered};
/// use std::fmt;
///
/// #[derive(PartialEq)]
/// struct Sku(u32);
///
/// impl Render for Sku {
///     fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         write!(f, "SKU-{:05}", self.0)
///     }
/// }
///
/// assert_eq!(Rendered(&Some(Sku(42))).to_string(), "SKU-00042");
/// assert_eq!(Rendered(&None::<Sku>).to_string(), "None");
/// ```
pub trait Render {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

/// `Display` adapter for any [`Render`] value.
pub struct Rendered<'a, T: ?Sized>(pub &'a T);

impl<T: Render + ?Sized> fmt::Display for Rendered<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.render(f)
    }
}

macro_rules! render_with_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Render for $ty {
                fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    fmt::Display::fmt(self, f)
                }
            }
        )*
    };
}

render_with_display!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char, str,
    String,
);

impl<T: Render> Render for Option<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.render(f),
            None => f.write_str("None"),
        }
    }
}

impl<T: Render + ?Sized> Render for &T {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Box<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Rc<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ?Sized> Render for Arc<T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}

impl<T: Render + ToOwned + ?Sized> Render for Cow<'_, T> {
    fn render(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).render(f)
    }
}
