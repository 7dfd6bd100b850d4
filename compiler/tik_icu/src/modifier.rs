//! Per-placeholder gender/plural overlays.
//!
//! Syntax alone cannot tell whether a free-form value such as `{text}` will
//! need gender or count agreement in some target locale. The call site that
//! knows the runtime value supplies a [`Modifiers`] map keyed by positional
//! index, and the translator wraps the matching placeholders accordingly.

use rustc_hash::FxHashMap;

/// Extra grammatical axes requested for one positional argument.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct IcuModifier {
    /// Wrap in `{argN_gender, select, other {...}}`.
    pub gender: bool,
    /// Wrap in `{argN_plural, plural, other {...}}`.
    pub plural: bool,
}

impl IcuModifier {
    /// No overlay.
    pub const NONE: Self = IcuModifier {
        gender: false,
        plural: false,
    };

    /// Number of ICU blocks this overlay opens.
    #[inline]
    pub(crate) fn depth(self) -> usize {
        usize::from(self.gender) + usize::from(self.plural)
    }
}

/// Modifier overlays keyed by positional argument index.
///
/// Indices that match no placeholder are ignored. Entries with both flags
/// unset behave exactly like absent entries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    map: FxHashMap<usize, IcuModifier>,
}

impl Modifiers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Request gender agreement for `index`.
    #[must_use]
    pub fn with_gender(mut self, index: usize) -> Self {
        self.map.entry(index).or_default().gender = true;
        self
    }

    /// Request plural agreement for `index`.
    #[must_use]
    pub fn with_plural(mut self, index: usize) -> Self {
        self.map.entry(index).or_default().plural = true;
        self
    }

    /// Overlay for `index`; [`IcuModifier::NONE`] if absent.
    #[inline]
    pub fn get(&self, index: usize) -> IcuModifier {
        self.map.get(&index).copied().unwrap_or(IcuModifier::NONE)
    }

    /// True when the map holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

impl FromIterator<(usize, IcuModifier)> for Modifiers {
    fn from_iter<I: IntoIterator<Item = (usize, IcuModifier)>>(iter: I) -> Self {
        Modifiers {
            map: iter.into_iter().collect(),
        }
    }
}

impl Extend<(usize, IcuModifier)> for Modifiers {
    fn extend<I: IntoIterator<Item = (usize, IcuModifier)>>(&mut self, iter: I) {
        self.map.extend(iter);
    }
}
