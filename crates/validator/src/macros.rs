//! Macros for declaring constraint kinds with minimal boilerplate.
//!
//! # Available Macros
//!
//! - [`constraint!`]: declares a complete kind (struct + `ConstraintKind` +
//!   `Constraint` impls + factory fn)
//!
//! # Examples
//!
//! ```rust
//! use sift_validator::constraint;
//! use sift_validator::foundation::{CharSequence, Constraint, Measure};
//!
//! // Unit kind over a capability
//! constraint! {
//!     pub Ascii for impl CharSequence;
//!     check(value) { value.all_chars(|c| c.is_ascii()) }
//!     message { "must be ASCII" }
//!     fn ascii();
//! }
//!
//! // Kind with parameters
//! constraint! {
//!     #[derive(PartialEq, Eq)]
//!     pub ShorterThan { limit: usize } for impl Measure;
//!     check(self, value) { value.measure(Default::default()) < self.limit }
//!     message(self) { format!("length must be < {}", self.limit) }
//!     fn shorter_than(limit: usize);
//! }
//!
//! assert!(ascii().check("plain"));
//! assert!(!shorter_than(3).check("long"));
//! ```

// ============================================================================
// CONSTRAINT MACRO
// ============================================================================

/// Declares a constraint kind: struct definition, `ConstraintKind` and
/// `Constraint` implementations, constructor and factory function.
///
/// `#[derive(Debug, Clone, Copy)]` is always applied. Add extra derives via
/// `#[derive(...)]`.
///
/// # Variants
///
/// **Unit kind** over every type with a capability (zero-sized, no fields):
/// ```rust,ignore
/// constraint! {
///     pub Alphabetic for impl CharSequence;
///     check(value) { value.all_chars(char::is_alphabetic) }
///     message { "must be alphabetic" }
///     fn alphabetic();
/// }
/// ```
///
/// **Kind with fields** (auto `new` from all fields, or a custom one):
/// ```rust,ignore
/// constraint! {
///     pub MinLength { min: usize, mode: LengthMode } for impl Measure;
///     check(self, value) { value.measure(self.mode) >= self.min }
///     message(self) { format!("length must be >= {}", self.min) }
///     new(min: usize) { Self { min, mode: LengthMode::Chars } }
///     fn min_length(min: usize);
/// }
/// ```
///
/// **Generic kind** over a concrete input type:
/// ```rust,ignore
/// constraint! {
///     pub GreaterThan<N: PartialOrd + Display> { bound: N } for N;
///     check(self, value) { *value > self.bound }
///     message(self) { format!("must be > {}", self.bound) }
///     fn greater_than(bound: N);
/// }
/// ```
#[macro_export]
macro_rules! constraint {
    // ── Internal: trait impls for kinds with fields ──────────────────────
    (@impls $name:ident for impl $cap:path;
        check($self_:ident, $value:ident) $check:block
        message($self2:ident) $message:block
    ) => {
        impl $crate::foundation::ConstraintKind for $name {
            fn error_message(&$self2) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::from($message)
            }
        }

        impl<V: $cap + ?Sized> $crate::foundation::Constraint<V> for $name {
            #[inline]
            fn check(&$self_, $value: &V) -> bool $check
        }
    };

    // ── Variant 1a: Unit kind + factory fn ───────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for impl $cap:path;
        check($value:ident) $check:block
        message $message:block
        fn $factory:ident();
    ) => {
        $crate::constraint! {
            $(#[$meta])*
            $vis $name for impl $cap;
            check($value) $check
            message $message
        }

        #[must_use]
        $vis const fn $factory() -> $name { $name }
    };

    // ── Variant 1b: Unit kind, no factory ────────────────────────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident for impl $cap:path;
        check($value:ident) $check:block
        message $message:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
        $vis struct $name;

        impl $crate::foundation::ConstraintKind for $name {
            fn error_message(&self) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::from($message)
            }
        }

        impl<V: $cap + ?Sized> $crate::foundation::Constraint<V> for $name {
            #[inline]
            fn check(&self, $value: &V) -> bool $check
        }
    };

    // ── Variant 2a: Kind with fields + custom new + factory fn ───────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for impl $cap:path;
        check($self_:ident, $value:ident) $check:block
        message($self2:ident) $message:block
        new($($narg:ident: $naty:ty),* $(,)?) $new_body:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        $vis struct $name {
            $(pub $field: $fty,)+
        }

        impl $name {
            #[must_use]
            pub const fn new($($narg: $naty),*) -> Self $new_body
        }

        $crate::constraint!(@impls $name for impl $cap;
            check($self_, $value) $check
            message($self2) $message);

        #[must_use]
        $vis const fn $factory($($farg: $faty),*) -> $name {
            $name::new($($farg),*)
        }
    };

    // ── Variant 2b: Kind with fields + auto new + factory fn ─────────────
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),+ $(,)? } for impl $cap:path;
        check($self_:ident, $value:ident) $check:block
        message($self2:ident) $message:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $crate::constraint! {
            $(#[$meta])*
            $vis $name { $($field: $fty),+ } for impl $cap;
            check($self_, $value) $check
            message($self2) $message
            new($($field: $fty),+) { Self { $($field),+ } }
            fn $factory($($farg: $faty),*);
        }
    };

    // ── Variant 3: Generic kind + auto new + factory fn ──────────────────
    //
    // Supports a single generic type parameter with one or more trait bounds.
    // Bounds must be simple identifiers (use imports for paths).
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident<$gen:ident: $first_bound:ident $(+ $rest_bound:ident)*>
            { $($field:ident: $fty:ty),+ $(,)? } for $input:ty;
        check($self_:ident, $value:ident) $check:block
        message($self2:ident) $message:block
        fn $factory:ident($($farg:ident: $faty:ty),* $(,)?);
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        $vis struct $name<$gen> {
            $(pub $field: $fty,)+
        }

        impl<$gen> $name<$gen> {
            #[must_use]
            pub const fn new($($field: $fty),+) -> Self {
                Self { $($field),+ }
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::ConstraintKind
            for $name<$gen>
        {
            fn error_message(&$self2) -> ::std::borrow::Cow<'static, str> {
                ::std::borrow::Cow::from($message)
            }
        }

        impl<$gen: $first_bound $(+ $rest_bound)*> $crate::foundation::Constraint<$input>
            for $name<$gen>
        {
            #[inline]
            fn check(&$self_, $value: &$input) -> bool $check
        }

        #[must_use]
        $vis const fn $factory<$gen>($($farg: $faty),*) -> $name<$gen> {
            $name::new($($farg),*)
        }
    };

}
