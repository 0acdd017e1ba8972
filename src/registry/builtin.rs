//! Built-in registries for the two deployed variants
//!
//! The partitions differ on purpose: `fetch` registers the plain-value
//! properties but excludes them, while `fedutil` supports them. Each list is
//! independent configuration and is kept exactly as curated.

/// Supported iterator types of the `fetch` variant
pub const FETCH_SUPPORTED: &[&str] = &[
    "ActivityStreamsActorPropertyIterator",
    "ActivityStreamsAnyOfPropertyIterator",
    "ActivityStreamsAttachmentPropertyIterator",
    "ActivityStreamsAttributedToPropertyIterator",
    "ActivityStreamsAudiencePropertyIterator",
    "ActivityStreamsBccPropertyIterator",
    "ActivityStreamsBtoPropertyIterator",
    "ActivityStreamsCcPropertyIterator",
    "ActivityStreamsClosedPropertyIterator",
    "ActivityStreamsContextPropertyIterator",
    "ActivityStreamsFormerTypePropertyIterator",
    "ActivityStreamsGeneratorPropertyIterator",
    "ActivityStreamsIconPropertyIterator",
    "ActivityStreamsImagePropertyIterator",
    "ActivityStreamsInReplyToPropertyIterator",
    "ActivityStreamsInstrumentPropertyIterator",
    "ActivityStreamsItemsPropertyIterator",
    "ActivityStreamsLocationPropertyIterator",
    "ActivityStreamsObjectPropertyIterator",
    "ActivityStreamsOneOfPropertyIterator",
    "ActivityStreamsOrderedItemsPropertyIterator",
    "ActivityStreamsOriginPropertyIterator",
    "ActivityStreamsPreviewPropertyIterator",
    "ActivityStreamsRelationshipPropertyIterator",
    "ActivityStreamsResultPropertyIterator",
    "ActivityStreamsStreamsPropertyIterator",
    "ActivityStreamsTagPropertyIterator",
    "ActivityStreamsTargetPropertyIterator",
    "ActivityStreamsToPropertyIterator",
    "ActivityStreamsUrlPropertyIterator",
    "W3IDSecurityV1PublicKeyPropertyIterator",
];

/// Registered but unsupported iterator types of the `fetch` variant.
///
/// These iterate plain values (strings, language maps, JSON-LD types) rather
/// than objects or IRIs.
pub const FETCH_UNSUPPORTED: &[&str] = &[
    "ActivityStreamsContentPropertyIterator",
    "ActivityStreamsNamePropertyIterator",
    "ActivityStreamsRelPropertyIterator",
    "ActivityStreamsSummaryPropertyIterator",
    "JSONLDTypePropertyIterator",
];

/// Supported iterator types of the `fedutil` variant
pub const FEDUTIL_SUPPORTED: &[&str] = &[
    "ActivityStreamsActorPropertyIterator",
    "ActivityStreamsAnyOfPropertyIterator",
    "ActivityStreamsAttachmentPropertyIterator",
    "ActivityStreamsAttributedToPropertyIterator",
    "ActivityStreamsAudiencePropertyIterator",
    "ActivityStreamsBccPropertyIterator",
    "ActivityStreamsBtoPropertyIterator",
    "ActivityStreamsCcPropertyIterator",
    "ActivityStreamsClosedPropertyIterator",
    "ActivityStreamsContentPropertyIterator",
    "ActivityStreamsContextPropertyIterator",
    "ActivityStreamsFormerTypePropertyIterator",
    "ActivityStreamsGeneratorPropertyIterator",
    "ActivityStreamsIconPropertyIterator",
    "ActivityStreamsImagePropertyIterator",
    "ActivityStreamsInReplyToPropertyIterator",
    "ActivityStreamsInstrumentPropertyIterator",
    "ActivityStreamsItemsPropertyIterator",
    "ActivityStreamsLocationPropertyIterator",
    "ActivityStreamsNamePropertyIterator",
    "ActivityStreamsObjectPropertyIterator",
    "ActivityStreamsOneOfPropertyIterator",
    "ActivityStreamsOrderedItemsPropertyIterator",
    "ActivityStreamsOriginPropertyIterator",
    "ActivityStreamsPreviewPropertyIterator",
    "ActivityStreamsRelPropertyIterator",
    "ActivityStreamsRelationshipPropertyIterator",
    "ActivityStreamsResultPropertyIterator",
    "ActivityStreamsStreamsPropertyIterator",
    "ActivityStreamsSummaryPropertyIterator",
    "ActivityStreamsTagPropertyIterator",
    "ActivityStreamsTargetPropertyIterator",
    "ActivityStreamsToPropertyIterator",
    "ActivityStreamsUrlPropertyIterator",
    "JSONLDTypePropertyIterator",
    "W3IDSecurityV1PublicKeyPropertyIterator",
];

/// Registered but unsupported iterator types of the `fedutil` variant
pub const FEDUTIL_UNSUPPORTED: &[&str] = &[];
