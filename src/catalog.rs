//! The preset catalog.
//!
//! A preset is a named, schema-defined template for a guided multi-field
//! interaction, reachable via a slash command. The catalog is immutable and
//! compiled in; consumers receive it by value at construction time rather
//! than through a global.

/// Grouping used by the preset browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Recents,
    Native,
    Community,
}

impl Category {
    pub fn all() -> &'static [Category] {
        &[Category::Recents, Category::Native, Category::Community]
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Recents => "Recents",
            Category::Native => "Native",
            Category::Community => "Community",
        }
    }
}

/// What kind of answer a form field collects.
///
/// A closed set: rendering and formatting match on this exhaustively, so a new
/// kind fails to compile until every surface handles it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    /// Arbitrary free text.
    Text,
    /// One of a fixed set of choices. The choices are offered, not enforced.
    Options(Vec<String>),
    /// A file reference; only the file name is recorded.
    Document,
    /// A file attachment; only the file name is recorded.
    DocumentAttachment,
}

impl FieldKind {
    pub fn options(choices: &[&str]) -> Self {
        FieldKind::Options(choices.iter().map(ToString::to_string).collect())
    }

    /// Whether answering this field goes through the file picker.
    pub fn wants_file(&self) -> bool {
        matches!(self, FieldKind::Document | FieldKind::DocumentAttachment)
    }
}

/// One typed input in a preset's form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    name: String,
    question: String,
    kind: FieldKind,
}

impl FieldSpec {
    pub fn new(name: impl Into<String>, question: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            question: question.into(),
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn kind(&self) -> &FieldKind {
        &self.kind
    }
}

/// A slash-command preset and its form schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    id: String,
    name: String,
    category: Category,
    slash_command: String,
    fields: Vec<FieldSpec>,
}

impl Preset {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: Category,
        slash_command: impl Into<String>,
        fields: Vec<FieldSpec>,
    ) -> Self {
        let slash_command = slash_command.into();
        debug_assert!(slash_command.starts_with('/'));
        Self {
            id: id.into(),
            name: name.into(),
            category,
            slash_command,
            fields,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn slash_command(&self) -> &str {
        &self.slash_command
    }

    pub fn fields(&self) -> &[FieldSpec] {
        &self.fields
    }
}

/// Ordered, read-only collection of presets.
///
/// Slash-command uniqueness is the catalog author's responsibility; the
/// matcher takes the first hit in catalog order.
#[derive(Debug, Clone, Default)]
pub struct PresetCatalog {
    presets: Vec<Preset>,
}

impl PresetCatalog {
    pub fn new(presets: Vec<Preset>) -> Self {
        Self { presets }
    }

    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Presets in a category, preserving catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &Preset> {
        self.presets.iter().filter(move |p| p.category() == category)
    }

    /// The built-in catalog shipped with the binary.
    pub fn builtin() -> Self {
        Self::new(vec![
            Preset::new(
                "1",
                "Presenter Notes",
                Category::Native,
                "/presenter",
                vec![FieldSpec::new(
                    "presentation",
                    "Could you please upload your presentation?",
                    FieldKind::DocumentAttachment,
                )],
            ),
            Preset::new(
                "2",
                "Document Comparison",
                Category::Native,
                "/compare",
                vec![
                    FieldSpec::new(
                        "first_document",
                        "Please upload your first document",
                        FieldKind::Document,
                    ),
                    FieldSpec::new(
                        "second_document",
                        "Please upload your second document",
                        FieldKind::Document,
                    ),
                ],
            ),
            Preset::new(
                "3",
                "Translation",
                Category::Community,
                "/translate",
                vec![
                    FieldSpec::new(
                        "document",
                        "Please upload your document",
                        FieldKind::Document,
                    ),
                    FieldSpec::new(
                        "language",
                        "Please enter the target language",
                        FieldKind::options(&["Spanish", "German", "French", "Italian", "Chinese"]),
                    ),
                ],
            ),
            Preset::new(
                "4",
                "Release Notes",
                Category::Recents,
                "/release",
                vec![FieldSpec::new(
                    "description",
                    "Could you please provide a short description of what is in the release?",
                    FieldKind::Text,
                )],
            ),
            Preset::new(
                "5",
                "Code Review",
                Category::Native,
                "/review",
                vec![
                    FieldSpec::new("code", "Please paste your code here", FieldKind::Text),
                    FieldSpec::new(
                        "language",
                        "What programming language is this?",
                        FieldKind::Text,
                    ),
                ],
            ),
            Preset::new(
                "6",
                "Meeting Minutes",
                Category::Community,
                "/minutes",
                vec![
                    FieldSpec::new(
                        "audio",
                        "Please upload the meeting audio file",
                        FieldKind::DocumentAttachment,
                    ),
                    FieldSpec::new(
                        "participants",
                        "List the names of the participants",
                        FieldKind::Text,
                    ),
                ],
            ),
            Preset::new(
                "7",
                "Blog Post",
                Category::Recents,
                "/blog",
                vec![
                    FieldSpec::new(
                        "topic",
                        "What is the main topic of your blog post?",
                        FieldKind::Text,
                    ),
                    FieldSpec::new(
                        "keywords",
                        "Enter some keywords related to your topic",
                        FieldKind::Text,
                    ),
                ],
            ),
            Preset::new(
                "8",
                "Data Analysis",
                Category::Native,
                "/analyze",
                vec![
                    FieldSpec::new(
                        "dataset",
                        "Please upload your dataset (CSV format)",
                        FieldKind::DocumentAttachment,
                    ),
                    FieldSpec::new(
                        "analysis_type",
                        "What type of analysis do you need?",
                        FieldKind::options(&["Descriptive", "Predictive", "Inferential"]),
                    ),
                ],
            ),
        ])
    }
}
