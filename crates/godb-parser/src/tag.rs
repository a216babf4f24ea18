//! The fixed set of OBO tags kept from a `[Term]` stanza.
//!
//! Single-valued tags keep the last value seen; multi-valued tags keep every
//! value in file order. Any other tag is dropped during parsing.

/// Tags holding at most one value per stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarTag {
    Id,
    Name,
    Namespace,
    Def,
    Comment,
    IsObsolete,
}

impl ScalarTag {
    pub const COUNT: usize = 6;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Name => "name",
            Self::Namespace => "namespace",
            Self::Def => "def",
            Self::Comment => "comment",
            Self::IsObsolete => "is_obsolete",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Tags that may repeat within a stanza.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiTag {
    Synonym,
    IsA,
    Relationship,
    AltId,
    Consider,
    ReplacedBy,
    Subset,
    Xref,
    PropertyValue,
}

impl MultiTag {
    pub const COUNT: usize = 9;

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Synonym => "synonym",
            Self::IsA => "is_a",
            Self::Relationship => "relationship",
            Self::AltId => "alt_id",
            Self::Consider => "consider",
            Self::ReplacedBy => "replaced_by",
            Self::Subset => "subset",
            Self::Xref => "xref",
            Self::PropertyValue => "property_value",
        }
    }

    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// A recognized stanza tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Scalar(ScalarTag),
    Multi(MultiTag),
}

impl Tag {
    /// Look up a tag by its OBO name. Unknown names return `None`.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let tag = match name {
            "id" => Self::Scalar(ScalarTag::Id),
            "name" => Self::Scalar(ScalarTag::Name),
            "namespace" => Self::Scalar(ScalarTag::Namespace),
            "def" => Self::Scalar(ScalarTag::Def),
            "comment" => Self::Scalar(ScalarTag::Comment),
            "is_obsolete" => Self::Scalar(ScalarTag::IsObsolete),
            "synonym" => Self::Multi(MultiTag::Synonym),
            "is_a" => Self::Multi(MultiTag::IsA),
            "relationship" => Self::Multi(MultiTag::Relationship),
            "alt_id" => Self::Multi(MultiTag::AltId),
            "consider" => Self::Multi(MultiTag::Consider),
            "replaced_by" => Self::Multi(MultiTag::ReplacedBy),
            "subset" => Self::Multi(MultiTag::Subset),
            "xref" => Self::Multi(MultiTag::Xref),
            "property_value" => Self::Multi(MultiTag::PropertyValue),
            _ => return None,
        };
        Some(tag)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Scalar(tag) => tag.as_str(),
            Self::Multi(tag) => tag.as_str(),
        }
    }
}
