//! Macro for closed vocabularies used in extraction records.

/// Define an enum whose variants serialize to fixed labels.
///
/// Generates `ALL`, `as_str()`, `labels()`, `Display` and a `Default` that
/// returns the named "not mentioned" variant, so a record missing the field
/// still deserializes.
macro_rules! schema_enum {
    (
        $(#[$meta:meta])*
        pub enum $Name:ident {
            $( $Variant:ident => $label:literal ),+ $(,)?
        }
        default = $Default:ident;
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $Name {
            $(
                #[serde(rename = $label)]
                $Variant,
            )+
        }

        impl $Name {
            /// Every variant, in declaration order.
            pub const ALL: &'static [$Name] = &[$($Name::$Variant),+];

            /// Serialized label.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($Name::$Variant => $label,)+
                }
            }

            /// Serialized labels of every variant.
            pub fn labels() -> Vec<&'static str> {
                Self::ALL.iter().map(|v| v.as_str()).collect()
            }
        }

        impl Default for $Name {
            fn default() -> Self {
                $Name::$Default
            }
        }

        impl std::fmt::Display for $Name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use schema_enum;
