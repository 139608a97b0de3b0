//! Macros for defining kind enums.

/// Macro for defining a kind enum.
///
/// The `case` is applied to both string and wire representations of the
/// variants.
///
/// # Example
///
/// ```rust
/// use common::define_kind;
///
/// define_kind! {
///     #[doc = "Shape kind."]
///     #[case = "lowercase"]
///     enum Kind {
///         #[doc = "A cube"]
///         Cube = 1,
///
///         #[doc = "A sphere"]
///         Sphere = 2,
///     }
/// }
///
/// assert_eq!(Kind::Cube.to_string(), "cube");
/// assert_eq!("sphere".parse::<Kind>().unwrap(), Kind::Sphere);
/// ```
#[expect(clippy::module_name_repetitions, reason = "more readable")]
#[macro_export]
macro_rules! define_kind {
    (
        #[doc = $doc:literal]
        #[case = $case:literal]
        enum $name:ident {
            $(
                #[doc = $variant_doc:literal]
                $variant:ident = $value:expr
            ),* $(,)?
        }
    ) => {
        #[derive(
            Clone,
            Copy,
            Debug,
            $crate::private::serde::Deserialize,
            $crate::private::strum::Display,
            $crate::private::strum::EnumString,
            Eq,
            Hash,
            PartialEq,
            $crate::private::serde::Serialize,
        )]
        #[doc = $doc]
        #[repr(u8)]
        #[serde(crate = "::common::private::serde", rename_all = $case)]
        #[strum(
            crate = "::common::private::strum",
            serialize_all = $case,
        )]
        pub enum $name {
            $(
                 #[doc = $variant_doc]
                 $variant = $value,
            )*
        }

        impl $name {
            /// Converts this into its [`u8`] representation.
            #[must_use]
            pub const fn u8(self) -> u8 {
                self as u8
            }
        }
    };
}

#[cfg(test)]
mod spec {
    crate::define_kind! {
        #[doc = "Test kind."]
        #[case = "lowercase"]
        enum Color {
            #[doc = "Red."]
            Red = 1,

            #[doc = "Dark blue."]
            DarkBlue = 2,
        }
    }

    #[test]
    fn uses_case_for_strings_and_wire() {
        assert_eq!(Color::DarkBlue.to_string(), "darkblue");
        assert_eq!("red".parse::<Color>().unwrap(), Color::Red);
        assert!("Red".parse::<Color>().is_err());

        assert_eq!(serde_json::to_string(&Color::Red).unwrap(), r#""red""#);
        assert_eq!(
            serde_json::from_str::<Color>(r#""darkblue""#).unwrap(),
            Color::DarkBlue,
        );
    }

    #[test]
    fn converts_to_declared_value() {
        assert_eq!(Color::Red.u8(), 1);
        assert_eq!(Color::DarkBlue.u8(), 2);
    }
}
