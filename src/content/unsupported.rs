//! Content categories the registry accepts in its contract but cannot
//! register yet.
//!
//! Each descriptor names the item and the host class behind it. Registering
//! one always fails with `RegisterError::Unsupported`.

use serde::{Deserialize, Serialize};

use crate::core::ContentKind;
use crate::host::CardClass;

macro_rules! unsupported_descriptor {
    ($(#[$meta:meta])* $name:ident => $kind:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            /// Unique name across all content units.
            pub global_name: String,

            /// Host class implementing the item.
            pub class: CardClass,
        }

        impl $name {
            /// Content category of this descriptor.
            pub const KIND: ContentKind = ContentKind::$kind;

            /// Create a descriptor.
            pub fn new(global_name: impl Into<String>, class: CardClass) -> Self {
                Self {
                    global_name: global_name.into(),
                    class,
                }
            }
        }
    };
}

unsupported_descriptor!(
    /// A playable character.
    ExternalCharacter => Character
);
unsupported_descriptor!(
    /// An enemy AI.
    ExternalEnemy => Enemy
);
unsupported_descriptor!(
    /// An artifact.
    ExternalArtifact => Artifact
);
unsupported_descriptor!(
    /// A fight modifier.
    ExternalModifier => Modifier
);
unsupported_descriptor!(
    /// A midrow object (drones, mines, asteroids).
    ExternalMidrowItem => MidrowItem
);
unsupported_descriptor!(
    /// A status effect.
    ExternalStatus => Status
);
unsupported_descriptor!(
    /// A map space thing.
    ExternalSpaceThing => SpaceThing
);
