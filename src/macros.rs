//! Macros for declaring phase enums.

/// Declare an enum and implement [`State`](crate::core::State) for it.
///
/// Variant names double as state names. `final:` and `error:` list the
/// variants for which `is_final` / `is_error` return `true`.
///
/// # Example
///
/// ```
/// use formflow::core::State;
/// use formflow::state_enum;
///
/// state_enum! {
///     pub enum ReviewPhase {
///         Draft,
///         Flagged,
///         Published,
///     }
///     final: [Published]
///     error: [Flagged]
/// }
///
/// assert_eq!(ReviewPhase::Flagged.name(), "Flagged");
/// assert!(ReviewPhase::Flagged.is_error());
/// assert!(ReviewPhase::Published.is_final());
/// ```
#[macro_export]
macro_rules! state_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident
            ),* $(,)?
        }

        $(final: [$($final:ident),* $(,)?])?
        $(error: [$($error:ident),* $(,)?])?
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize, serde::Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant
            ),*
        }

        impl $crate::core::State for $name {
            fn name(&self) -> &str {
                match self {
                    $(Self::$variant => stringify!($variant)),*
                }
            }

            fn is_final(&self) -> bool {
                match self {
                    $($(Self::$final => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }

            fn is_error(&self) -> bool {
                match self {
                    $($(Self::$error => true,)*)?
                    #[allow(unreachable_patterns)]
                    _ => false,
                }
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::core::State::name(self))
            }
        }
    };
}
