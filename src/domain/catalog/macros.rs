//! DRY macro for catalog enumerations.
//!
//! Every catalog list (AI targets, categories, tones, ...) is a closed enum
//! with a stable id, a display label, and lookup by either. `catalog_enum!`
//! generates that surface once:
//!
//! ```ignore
//! catalog_enum! {
//!     /// Tone of voice.
//!     Tone, "tone" {
//!         Serio => ("serio", "Sério"),
//!         Divertido => ("divertido", "Divertido"),
//!     }
//! }
//!
//! assert_eq!(Tone::Serio.label(), "Sério");
//! assert_eq!("sério".parse::<Tone>()?, Tone::Serio);
//! ```

/// Generates a catalog enum with `all()`, `id()`, `label()`, `Display`,
/// `FromStr` (id or label, case-insensitive) and serde by id.
macro_rules! catalog_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $catalog:literal {
            $( $(#[$vmeta:meta])* $variant:ident => ($id:literal, $label:literal) ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $( $(#[$vmeta])* #[serde(rename = $id)] $variant, )+
        }

        impl $name {
            /// Returns every entry in catalog order.
            pub fn all() -> &'static [$name] {
                &[ $( $name::$variant, )+ ]
            }

            /// Returns the stable identifier.
            pub fn id(&self) -> &'static str {
                match self {
                    $( $name::$variant => $id, )+
                }
            }

            /// Returns the user-facing label.
            pub fn label(&self) -> &'static str {
                match self {
                    $( $name::$variant => $label, )+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.label())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::domain::foundation::ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let needle = s.trim().to_lowercase();
                $name::all()
                    .iter()
                    .copied()
                    .find(|entry| {
                        entry.id().to_lowercase() == needle
                            || entry.label().to_lowercase() == needle
                    })
                    .ok_or_else(|| {
                        $crate::domain::foundation::ValidationError::unknown_entry($catalog, s)
                    })
            }
        }
    };
}

pub(crate) use catalog_enum;
