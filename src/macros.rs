/// Declares an enumeration type together with its constant table.
///
/// The generated type is a transparent newtype over the underlying integral
/// type, with one associated constant per declared name. Constants keep the
/// exact spelling they are declared with, since names are looked up
/// case-sensitively. An optional `#[description = "..."]` attribute gives a
/// constant its human-readable description; without it the description is the
/// constant's own name.
///
/// ```
/// dnum::enumeration! {
///     /// Pets a household may keep.
///     pub struct Pet: u8 {
///         None = 0,
///         Dog = 1,
///         Cat = 2,
///         #[description = "Komodo Dragon"]
///         KomodoDragon = 16,
///     }
/// }
///
/// use dnum::{Dnum, EnumerationExt};
/// assert_eq!(Pet::KomodoDragon.description(), Some("Komodo Dragon"));
/// assert_eq!((Pet::Dog | Pet::Cat).to_string(), "Dog, Cat");
/// assert_eq!("Cat".parse::<Pet>().unwrap(), Pet::Cat);
/// assert!(!Dnum::<Pet>::is_defined(3).unwrap());
/// ```
///
/// Besides the [`Enumeration`](crate::Enumeration) implementation the macro
/// derives `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord` and
/// `Default`, and implements `Display` (general format), `Debug`, `FromStr`
/// (case-sensitive `parse`), `BitOr`, `BitAnd`, `BitOrAssign` and conversion
/// into the underlying type.
#[macro_export]
macro_rules! enumeration {
    (@description $description:literal) => {
        ::core::option::Option::Some($description)
    };
    (@description) => {
        ::core::option::Option::None
    };
    (
        $(#[$outer:meta])*
        $vis:vis struct $Name:ident : $repr:ident {
            $(
                $(#[doc = $doc:literal])*
                $(#[description = $description:literal])?
                $constant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        $(#[$outer])*
        #[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        #[repr(transparent)]
        $vis struct $Name($repr);

        #[allow(non_upper_case_globals)]
        impl $Name {
            $(
                $(#[doc = $doc])*
                pub const $constant: Self = Self($value);
            )*
        }

        impl $crate::Enumeration for $Name {
            const NAME: &'static str = ::core::stringify!($Name);
            type Underlying = $repr;
            fn declarations() -> ::std::vec::Vec<$crate::Declaration<$repr>> {
                ::std::vec![
                    $(
                        $crate::Declaration::new(
                            ::core::stringify!($constant),
                            Self::$constant.0,
                            $crate::enumeration!(@description $($description)?),
                        ),
                    )*
                ]
            }
            fn from_underlying(value: $repr) -> Self {
                Self(value)
            }
            fn underlying(self) -> $repr {
                self.0
            }
        }

        impl ::core::fmt::Display for $Name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&$crate::Dnum::<Self>::index().render(self.0))
            }
        }

        impl ::core::fmt::Debug for $Name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::write!(f, "{}({})", ::core::stringify!($Name), self)
            }
        }

        impl ::core::str::FromStr for $Name {
            type Err = $crate::DnumError;
            fn from_str(s: &str) -> ::core::result::Result<Self, Self::Err> {
                $crate::Dnum::<Self>::parse(s, false)
            }
        }

        impl ::core::ops::BitOr for $Name {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Self(self.0 | rhs.0)
            }
        }

        impl ::core::ops::BitAnd for $Name {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                Self(self.0 & rhs.0)
            }
        }

        impl ::core::ops::BitOrAssign for $Name {
            fn bitor_assign(&mut self, rhs: Self) {
                self.0 |= rhs.0;
            }
        }

        impl ::core::convert::From<$Name> for $repr {
            fn from(constant: $Name) -> $repr {
                constant.0
            }
        }
    };
}
