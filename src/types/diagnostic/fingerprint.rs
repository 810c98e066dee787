use crate::types::diagnostic::Diagnostic;
use crate::types::ErrorContext;
use core::fmt::{self, Write};

/// Chooses which parts of a [`Diagnostic`] feed its fingerprint.
///
/// Kind, fault message and tags are hashed by default. The origin is left out,
/// so the same fault raised from a line that later moves keeps its fingerprint.
pub struct FingerprintConfig<'a> {
    pub(crate) diagnostic: &'a Diagnostic,
    pub(crate) include_kind: bool,
    pub(crate) include_tags: bool,
    pub(crate) include_message: bool,
    pub(crate) include_origin: bool,
}

impl<'a> FingerprintConfig<'a> {
    pub(crate) fn new(diagnostic: &'a Diagnostic) -> Self {
        Self {
            diagnostic,
            include_kind: true,
            include_tags: true,
            include_message: true,
            include_origin: false,
        }
    }

    #[must_use]
    pub fn include_kind(mut self, include: bool) -> Self {
        self.include_kind = include;
        self
    }

    #[must_use]
    pub fn include_tags(mut self, include: bool) -> Self {
        self.include_tags = include;
        self
    }

    #[must_use]
    pub fn include_message(mut self, include: bool) -> Self {
        self.include_message = include;
        self
    }

    /// Also hash the origin's file, line and column.
    #[must_use]
    pub fn include_origin(mut self, include: bool) -> Self {
        self.include_origin = include;
        self
    }

    /// Hashes the selected parts with 64-bit FNV-1a.
    ///
    /// Every part is prefixed with a label so that, for example, a tag and a
    /// message with the same text hash differently. Tags are sorted first, so
    /// their push order does not matter.
    #[must_use]
    pub fn compute(&self) -> u64 {
        let diagnostic = self.diagnostic;
        let mut hasher = Fnv1a::default();

        if self.include_kind {
            hasher.field("kind", diagnostic.kind().as_str());
        }

        if self.include_tags {
            let mut tags: Vec<&str> = diagnostic
                .context
                .iter()
                .filter_map(|ctx| match ctx {
                    ErrorContext::Tag(tag) => Some(tag.as_str()),
                    ErrorContext::Message(_) => None,
                })
                .collect();
            tags.sort_unstable();
            tags.into_iter().for_each(|tag| hasher.field("tag", tag));
        }

        if self.include_message {
            hasher.update(b"msg:");
            // Writing into the hasher never fails.
            let _ = write!(hasher, "{}", diagnostic.fault);
        }

        if self.include_origin {
            let origin = diagnostic.origin;
            hasher.field("origin", origin.file);
            hasher.update(&origin.line.to_le_bytes());
            hasher.update(&origin.column.to_le_bytes());
        }

        hasher.state
    }

    /// [`compute`](Self::compute) as sixteen lowercase hex digits.
    #[must_use]
    pub fn compute_hex(&self) -> String {
        format!("{:016x}", self.compute())
    }
}

struct Fnv1a {
    state: u64,
}

impl Default for Fnv1a {
    fn default() -> Self {
        Self { state: 0xcbf2_9ce4_8422_2325 }
    }
}

impl Fnv1a {
    const PRIME: u64 = 0x0000_0100_0000_01b3;

    #[inline]
    fn update(&mut self, bytes: &[u8]) {
        self.state = bytes
            .iter()
            .fold(self.state, |state, &byte| (state ^ u64::from(byte)).wrapping_mul(Self::PRIME));
    }

    fn field(&mut self, label: &str, value: &str) {
        self.update(label.as_bytes());
        self.update(b":");
        self.update(value.as_bytes());
    }
}

impl Write for Fnv1a {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.update(s.as_bytes());
        Ok(())
    }
}
