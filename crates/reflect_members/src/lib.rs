//! Member-wise reflection over plain structs.
//!
//! A type opts in with [`reflect!`], which implements [`Reflect`] from its
//! field list. [`visit_members`] then hands every member, in declaration
//! order, to a [`MemberVisitor`] together with the member's name.
//!
//! ```
//! use reflect_members::{MemberVisitor, reflect, visit_members};
//!
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! reflect!(Point { x: i32, y: i32 });
//!
//! struct Names(Vec<&'static str>);
//!
//! impl MemberVisitor for Names {
//!     fn visit<M>(&mut self, _member: &M, name: &'static str)
//!     where
//!         M: ?Sized + core::fmt::Debug,
//!     {
//!         self.0.push(name);
//!     }
//! }
//!
//! let mut names = Names(Vec::new());
//! visit_members(&Point { x: 1, y: 2 }, &mut names);
//! assert_eq!(names.0, ["x", "y"]);
//! ```
//!
//! Aggregates with more than [`MAX_ARITY`] members are rejected at compile
//! time (64 unless `REFLECT_MAX_ARITY` says otherwise):
//!
//! ```compile_fail,E0277
//! use reflect_members::{MemberVisitor, reflect, visit_members};
//!
//! struct Big(
//!     u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
//!     u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
//!     u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
//!     u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
//!     u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8, u8,
//! );
//!
//! reflect!(Big(
//!     0: u8, 1: u8, 2: u8, 3: u8, 4: u8, 5: u8, 6: u8, 7: u8, 8: u8,
//!     9: u8, 10: u8, 11: u8, 12: u8, 13: u8, 14: u8, 15: u8, 16: u8, 17: u8,
//!     18: u8, 19: u8, 20: u8, 21: u8, 22: u8, 23: u8, 24: u8, 25: u8, 26: u8,
//!     27: u8, 28: u8, 29: u8, 30: u8, 31: u8, 32: u8, 33: u8, 34: u8, 35: u8,
//!     36: u8, 37: u8, 38: u8, 39: u8, 40: u8, 41: u8, 42: u8, 43: u8, 44: u8,
//!     45: u8, 46: u8, 47: u8, 48: u8, 49: u8, 50: u8, 51: u8, 52: u8, 53: u8,
//!     54: u8, 55: u8, 56: u8, 57: u8, 58: u8, 59: u8, 60: u8, 61: u8, 62: u8,
//!     63: u8, 64: u8,
//! ));
//!
//! struct Skip;
//!
//! impl MemberVisitor for Skip {
//!     fn visit<M>(&mut self, _member: &M, _name: &'static str)
//!     where
//!         M: ?Sized + core::fmt::Debug,
//!     {
//!     }
//! }
//!
//! let big = Big(
//!     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
//!     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
//!     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
//!     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
//!     0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0,
//! );
//! visit_members(&big, &mut Skip);
//! ```
//!
//! The visitor construct itself is generated by `reflectgen` at build time;
//! set `REFLECT_MAX_ARITY` to change how many members it supports.

/// Name reported for members that have no name of their own, such as the
/// fields of tuple structs.
pub const DEFAULT_MEMBER_NAME: &str = "Member";

/// Compile-time description of an aggregate's members.
///
/// `MEMBER_COUNT`, `MEMBER_NAMES` and the arity of `Members` must agree.
/// [`visit_members`] checks this when it is instantiated, so a mismatched
/// hand-written impl does not compile:
///
/// ```compile_fail,E0080
/// use reflect_members::{MemberVisitor, Reflect, visit_members};
///
/// struct Two {
///     a: u8,
///     b: u8,
/// }
///
/// impl Reflect for Two {
///     const MEMBER_COUNT: usize = 1;
///     const MEMBER_NAMES: &'static [&'static str] = &["a"];
///
///     type Members<'a>
///         = (&'a u8, &'a u8)
///     where
///         Self: 'a;
///
///     fn members(&self) -> Self::Members<'_> {
///         (&self.a, &self.b)
///     }
/// }
///
/// struct Skip;
///
/// impl MemberVisitor for Skip {
///     fn visit<M>(&mut self, _member: &M, _name: &'static str)
///     where
///         M: ?Sized + core::fmt::Debug,
///     {
///     }
/// }
///
/// visit_members(&Two { a: 1, b: 2 }, &mut Skip);
/// ```
pub trait Reflect {
    /// Number of members, in declaration order.
    const MEMBER_COUNT: usize;
    /// One name per member, indexed by member position.
    const MEMBER_NAMES: &'static [&'static str];

    /// A tuple borrowing every member, e.g. `(&'a i32, &'a String)`.
    type Members<'a>
    where
        Self: 'a;

    fn members(&self) -> Self::Members<'_>;
}

include!(concat!(env!("OUT_DIR"), "/visit_members.rs"));

/// Implements [`Reflect`] for a struct.
///
/// Named fields report their identifiers; tuple struct fields report
/// [`DEFAULT_MEMBER_NAME`].
///
/// ```ignore
/// reflect!(Point { x: i32, y: i32 });
/// reflect!(Meters(0: f64));
/// reflect!(Marker {});
/// ```
#[macro_export]
macro_rules! reflect {
    (@default $index:tt) => {
        $crate::DEFAULT_MEMBER_NAME
    };
    ($ty:ident { $($field:ident : $field_ty:ty),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            const MEMBER_COUNT: usize = <Self as $crate::Reflect>::MEMBER_NAMES.len();
            const MEMBER_NAMES: &'static [&'static str] = &[$(stringify!($field)),*];

            type Members<'a> = ($(&'a $field_ty,)*)
            where
                Self: 'a;

            fn members(&self) -> Self::Members<'_> {
                ($(&self.$field,)*)
            }
        }
    };
    ($ty:ident ( $($index:tt : $field_ty:ty),* $(,)? )) => {
        impl $crate::Reflect for $ty {
            const MEMBER_COUNT: usize = <Self as $crate::Reflect>::MEMBER_NAMES.len();
            const MEMBER_NAMES: &'static [&'static str] =
                &[$($crate::reflect!(@default $index)),*];

            type Members<'a> = ($(&'a $field_ty,)*)
            where
                Self: 'a;

            fn members(&self) -> Self::Members<'_> {
                ($(&self.$index,)*)
            }
        }
    };
}
