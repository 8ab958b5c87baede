/// Type identifier stamped on every item this engine writes to the clipboard.
pub const PIPELINE_MARKER_TYPE: &str = "dev.clipstash.marker";

const INTERNAL_TYPES: &[&str] = &[
    PIPELINE_MARKER_TYPE,
    "Pasteboard generator type",
    "org.nspasteboard.AutoGeneratedType",
];

// 1Password, KeeWeb, Maccy, TypeIt4Me
const APP_MARKER_TYPES: &[&str] = &[
    "com.agilebits.onepassword",
    "net.antelle.keeweb",
    "org.p0deje.Maccy",
    "com.typeit4me.clipping",
];

const TRANSIENT_TYPES: &[&str] = &[
    "org.nspasteboard.TransientType",
    "de.petermaurer.TransientPasteboardType",
];

const CONFIDENTIAL_TYPES: &[&str] = &["org.nspasteboard.ConcealedType"];

const FORMATTED_TYPES: &[&str] = &["public.rtf", "com.apple.flat-rtfd", "public.html"];

/// Closed set of identifier categories the engine reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeCategory {
    /// Always ignored: the engine's own marker and clipboard bookkeeping.
    Internal,
    /// Written by other clipboard managers and password managers.
    AppMarker,
    Transient,
    Confidential,
    /// Rich-text payloads dropped when copying as plain text.
    Formatted,
}

impl TypeCategory {
    pub const ALL: [TypeCategory; 5] = [
        TypeCategory::Internal,
        TypeCategory::AppMarker,
        TypeCategory::Transient,
        TypeCategory::Confidential,
        TypeCategory::Formatted,
    ];

    pub fn identifiers(self) -> &'static [&'static str] {
        match self {
            TypeCategory::Internal => INTERNAL_TYPES,
            TypeCategory::AppMarker => APP_MARKER_TYPES,
            TypeCategory::Transient => TRANSIENT_TYPES,
            TypeCategory::Confidential => CONFIDENTIAL_TYPES,
            TypeCategory::Formatted => FORMATTED_TYPES,
        }
    }

    pub fn contains(self, type_id: &str) -> bool {
        self.identifiers().contains(&type_id)
    }

    /// Category of `type_id`, if it belongs to one of the tables.
    pub fn of(type_id: &str) -> Option<TypeCategory> {
        Self::ALL.into_iter().find(|category| category.contains(type_id))
    }
}
