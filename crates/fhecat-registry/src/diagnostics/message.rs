use super::Location;

/// Diagnostic kinds.
///
/// Declaration order only separates structural kinds, which come first,
/// from the rest. Structural kinds stop validation: once one is reported,
/// later checks would run against ambiguous id or name maps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Structural - validation halts here
    EmptyName,
    UnknownFamily,
    IdOutOfRange,
    DuplicateId,
    DuplicateName,
    DuplicateWidth,
    ReservedWidth,
    VariableWidthRequired,

    // Independent - accumulated across descriptors
    UnknownOperator,

    // Data irregularities
    DuplicateOperator,
    NumericClearType,
    UnmappedClearType,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::DuplicateOperator | Self::NumericClearType | Self::UnmappedClearType => {
                Severity::Warning
            }
            _ => Severity::Error,
        }
    }

    /// Whether validation stops after reporting this kind.
    pub fn is_structural(&self) -> bool {
        *self < Self::UnknownOperator
    }

    /// Short stable code shown in brackets after the severity.
    pub fn code(&self) -> &'static str {
        match self {
            Self::EmptyName => "empty-name",
            Self::UnknownFamily => "unknown-family",
            Self::IdOutOfRange => "id-out-of-range",
            Self::DuplicateId => "duplicate-id",
            Self::DuplicateName => "duplicate-name",
            Self::DuplicateWidth => "duplicate-width",
            Self::ReservedWidth => "reserved-width",
            Self::VariableWidthRequired => "variable-width-required",
            Self::UnknownOperator => "unknown-operator",
            Self::DuplicateOperator => "duplicate-operator",
            Self::NumericClearType => "numeric-clear-type",
            Self::UnmappedClearType => "unmapped-clear-type",
        }
    }

    /// Default hint for this kind, automatically included in diagnostics.
    pub fn default_hint(&self) -> Option<&'static str> {
        match self {
            Self::UnknownFamily => {
                Some("base type names are `Bool`, `Uint<N>`, `Int<N>` or `<Name>String`")
            }
            Self::IdOutOfRange => Some("ids are stored in a single handle byte (0..=255)"),
            Self::ReservedWidth => Some("bit length 0 is reserved for variable-length text"),
            _ => None,
        }
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::EmptyName => "type name is empty",
            Self::UnknownFamily => "type name belongs to no type family",
            Self::IdOutOfRange => "id does not fit the handle type byte",
            Self::DuplicateId => "duplicate id",
            Self::DuplicateName => "duplicate type name",
            Self::DuplicateWidth => "bit length already claimed in this family",
            Self::ReservedWidth => "bit length 0 on a fixed-width type",
            Self::VariableWidthRequired => "variable-length type must have bit length 0",
            Self::UnknownOperator => "unknown operator",
            Self::DuplicateOperator => "operator listed twice",
            Self::NumericClearType => "clear type is a bare number",
            Self::UnmappedClearType => "clear type is empty",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::UnknownFamily => "`{}` belongs to no type family".to_string(),
            Self::DuplicateId => "duplicate id: {}".to_string(),
            Self::DuplicateName => "`{}` is already declared".to_string(),
            Self::UnknownOperator => "`{}` is not an operator".to_string(),
            Self::DuplicateOperator => "operator `{}` listed twice".to_string(),
            Self::UnmappedClearType => "`{}` has no clear type".to_string(),
            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) location: Location,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(location: Location, message: impl Into<String>) -> Self {
        Self {
            location,
            message: message.into(),
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) location: Location,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
    pub(crate) hints: Vec<String>,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(kind: DiagnosticKind, location: Location) -> Self {
        Self {
            kind,
            location,
            message: kind.fallback_message().to_string(),
            related: Vec::new(),
            hints: kind
                .default_hint()
                .map(str::to_string)
                .into_iter()
                .collect(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn related(&self) -> &[RelatedInfo] {
        &self.related
    }

    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}[{}]: {} at {}",
            self.severity(),
            self.kind.code(),
            self.message,
            self.location
        )
    }
}
