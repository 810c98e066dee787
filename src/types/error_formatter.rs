//! Diagnostic formatting utilities.
//!
//! A rendered diagnostic is a chain of items: the context frames (outermost
//! first), optionally the origin, and finally the root line `Kind: message`.
//! [`ErrorFormatConfig`] decides how that chain is laid out; presets cover the
//! single-line default, `compact`, `cascaded`, `pretty` and the `traceback`
//! layout the driver prints.

use crate::types::{Diagnostic, Origin};
use core::fmt::Display;

/// Trait for customizing chain formatting.
pub trait ErrorFormatter {
    fn format_item(&self, item: &dyn Display) -> String {
        item.to_string()
    }

    fn separator(&self) -> &str {
        " -> "
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = &'a dyn Display>) -> String {
        chain
            .map(|item| self.format_item(item))
            .collect::<Vec<_>>()
            .join(self.separator())
    }
}

/// Configuration-based formatter.
///
/// Items other than the last get `context_prefix`/`context_suffix`; the last
/// item (the root line) gets `root_prefix`/`root_suffix`, falling back to the
/// context affixes when unset. With `cascade`, item `i` is instead indented by
/// `i` copies of `indent` and no affixes apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorFormatConfig {
    pub separator: String,
    pub context_prefix: Option<String>,
    pub context_suffix: Option<String>,
    pub root_prefix: Option<String>,
    pub root_suffix: Option<String>,
    pub indent: String,
    pub cascade: bool,
    /// Line printed before the chain.
    pub header: Option<String>,
    /// Whether the origin appears as its own `at file:line:column` item.
    pub show_origin: bool,
    /// Whether the root line is prefixed with the error kind.
    pub show_kind: bool,
}

impl Default for ErrorFormatConfig {
    fn default() -> Self {
        Self {
            separator: " -> ".into(),
            context_prefix: None,
            context_suffix: None,
            root_prefix: None,
            root_suffix: None,
            indent: "  ".into(),
            cascade: false,
            header: None,
            show_origin: false,
            show_kind: true,
        }
    }
}

impl ErrorFormatConfig {
    /// One item per line, drawn as a tree, origin included.
    #[inline]
    pub fn pretty() -> Self {
        Self {
            separator: "\n".into(),
            context_prefix: Some("├─ ".into()),
            root_prefix: Some("└─ ".into()),
            show_origin: true,
            ..Default::default()
        }
    }

    #[inline]
    pub fn cascaded() -> Self {
        Self { separator: "\n".into(), cascade: true, ..Default::default() }
    }

    #[inline]
    pub fn compact() -> Self {
        Self { separator: " | ".into(), ..Default::default() }
    }

    #[inline]
    pub fn no_kind() -> Self {
        Self { show_kind: false, ..Default::default() }
    }

    /// Frames indented under a header, root line flush left:
    ///
    /// ```text
    /// Trace (most recent call last):
    ///   case `trigger_missing_key`
    ///   at src/catalog.rs:91:9
    /// MissingKey: key "port" not found in mapping
    /// ```
    #[inline]
    pub fn traceback() -> Self {
        Self {
            separator: "\n".into(),
            context_prefix: Some("  ".into()),
            root_prefix: Some(String::new()),
            header: Some("Trace (most recent call last):".into()),
            show_origin: true,
            ..Default::default()
        }
    }

    fn affixes(&self, is_root: bool) -> (Option<&str>, Option<&str>) {
        let context = (self.context_prefix.as_deref(), self.context_suffix.as_deref());
        if !is_root {
            return context;
        }
        (self.root_prefix.as_deref().or(context.0), self.root_suffix.as_deref().or(context.1))
    }
}

impl ErrorFormatter for ErrorFormatConfig {
    fn format_item(&self, item: &dyn Display) -> String {
        let (prefix, suffix) = self.affixes(false);
        format!("{}{item}{}", prefix.unwrap_or_default(), suffix.unwrap_or_default())
    }

    fn separator(&self) -> &str {
        &self.separator
    }

    fn format_chain<'a>(&self, chain: impl Iterator<Item = &'a dyn Display>) -> String {
        let items: Vec<_> = chain.collect();
        let last = items.len().saturating_sub(1);
        let mut result = String::with_capacity(items.len() * 32);

        for (depth, item) in items.iter().enumerate() {
            if depth > 0 {
                result.push_str(&self.separator);
            }
            if self.cascade {
                result.push_str(&self.indent.repeat(depth));
                result.push_str(&item.to_string());
                continue;
            }
            let (prefix, suffix) = self.affixes(depth == last);
            result.push_str(prefix.unwrap_or_default());
            result.push_str(&item.to_string());
            result.push_str(suffix.unwrap_or_default());
        }
        result
    }
}

/// The last item of a chain: `Kind: message`, or just the message.
pub struct RootLine<'a> {
    diagnostic: &'a Diagnostic,
    show_kind: bool,
}

impl Display for RootLine<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        if self.show_kind {
            write!(f, "{}: ", self.diagnostic.kind())?;
        }
        write!(f, "{}", self.diagnostic.fault())
    }
}

struct OriginFrame(Origin);

impl Display for OriginFrame {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "at {}", self.0)
    }
}

/// Builder for customizing diagnostic display output.
pub struct ErrorFormatBuilder<'a> {
    pub(crate) diagnostic: &'a Diagnostic,
    pub(crate) config: ErrorFormatConfig,
    pub(crate) reverse_context: bool,
}

impl<'a> ErrorFormatBuilder<'a> {
    pub fn new(diagnostic: &'a Diagnostic) -> Self {
        Self { diagnostic, config: ErrorFormatConfig::default(), reverse_context: false }
    }

    /// Replaces the whole configuration.
    pub fn with_config(mut self, config: ErrorFormatConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = separator.into();
        self
    }

    /// Lists frames innermost first instead of outermost first.
    pub fn reverse_context(mut self, reverse: bool) -> Self {
        self.reverse_context = reverse;
        self
    }

    pub fn show_origin(mut self, show: bool) -> Self {
        self.config.show_origin = show;
        self
    }

    pub fn show_kind(mut self, show: bool) -> Self {
        self.config.show_kind = show;
        self
    }

    pub fn pretty(mut self) -> Self {
        self.config = ErrorFormatConfig::pretty();
        self
    }

    pub fn compact(mut self) -> Self {
        self.config = ErrorFormatConfig::compact();
        self
    }

    pub fn cascade(mut self, enabled: bool) -> Self {
        self.config.cascade = enabled;
        if enabled && self.config.separator == " -> " {
            self.config.separator = "\n".into();
        }
        self
    }

    pub fn cascaded(mut self) -> Self {
        self.config = ErrorFormatConfig::cascaded();
        self
    }

    pub fn traceback(mut self) -> Self {
        self.config = ErrorFormatConfig::traceback();
        self
    }

    /// Returns the root line as the current configuration renders it.
    pub fn root(&self) -> RootLine<'a> {
        RootLine { diagnostic: self.diagnostic, show_kind: self.config.show_kind }
    }
}

impl Display for ErrorFormatBuilder<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let origin = OriginFrame(self.diagnostic.origin());
        let root = self.root();

        let mut items: Vec<&dyn Display> = Vec::with_capacity(self.diagnostic.context.len() + 2);

        if self.reverse_context {
            for ctx in self.diagnostic.context_iter().rev() {
                items.push(ctx as &dyn Display);
            }
        } else {
            for ctx in self.diagnostic.context_iter() {
                items.push(ctx as &dyn Display);
            }
        }

        if self.config.show_origin {
            items.push(&origin);
        }
        items.push(&root);

        if let Some(header) = &self.config.header {
            write!(f, "{}{}", header, self.config.separator)?;
        }

        let s = self.config.format_chain(items.iter().copied());
        write!(f, "{}", s)
    }
}
