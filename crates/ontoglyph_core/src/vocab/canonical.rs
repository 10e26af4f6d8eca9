//! The canonical vocabulary.
//!
//! This module is the single source of truth for the shipped symbols: one const table per category
//! ([`STRUCTURE`], [`LEGAL_POLICY`], ...) recording grapheme, meaning, allowed contexts, usage level, conflicts, and an
//! example. [`canonical`] materializes the tables into a [`Vocabulary`] once per process.
//!
//! ## Notes
//! - Table order is the documented order and the traversal order. Keep related symbols together.
//! - Removing or redefining a symbol is a breaking change (bump [`VOCABULARY_VERSION`] major); adding one is not.
//! - No grapheme may be a substring of another grapheme, or text extraction will report both.
//!
//! ## Examples
//! ```rust
//! use ontoglyph_core::vocab::{canonical, CategoryId};
//!
//! let vocab = canonical::canonical();
//! assert_eq!(vocab.category(CategoryId::Structure)["pin"].grapheme, "📌");
//! ```

use std::sync::OnceLock;

use super::model::{CategoryId, Context, SymbolDefinition, UsageLevel, Vocabulary};
use UsageLevel::{Conditional, Optional, Required};

/// Version of the canonical vocabulary content (not the crate version).
pub const VOCABULARY_VERSION: &str = "1.2.0";

/// Const metadata for one canonical symbol.
///
/// ## Notes
/// - `key` is the short identifier inside the category table (`pin` in `structure.pin`).
/// - This type is `Copy` so tables can live in `const` items.
#[derive(Debug, Clone, Copy)]
pub struct SymbolSpec {
    pub key: &'static str,
    pub grapheme: &'static str,
    pub meaning: &'static str,
    pub contexts: &'static [Context],
    pub usage: UsageLevel,
    pub conflicts_with: &'static [&'static str],
    pub example: &'static str,
}

impl SymbolSpec {
    /// Build the owned definition for this entry, tagged with its category.
    pub fn to_definition(&self, category: CategoryId) -> SymbolDefinition {
        SymbolDefinition {
            grapheme: self.grapheme.to_string(),
            category,
            meaning: self.meaning.to_string(),
            allowed_contexts: self.contexts.to_vec(),
            usage_level: self.usage,
            conflicts_with: self.conflicts_with.iter().map(|g| g.to_string()).collect(),
            example: self.example.to_string(),
        }
    }
}

const ANY: &[Context] = &[Context::Human, Context::Llm, Context::Tool];
const HUMAN: &[Context] = &[Context::Human];
const HUMAN_LLM: &[Context] = &[Context::Human, Context::Llm];
const HUMAN_TOOL: &[Context] = &[Context::Human, Context::Tool];
const LLM_TOOL: &[Context] = &[Context::Llm, Context::Tool];
const TOOL: &[Context] = &[Context::Tool];

/// Document structure: anchors, sections, notes.
pub const STRUCTURE: &[SymbolSpec] = &[
    spec(
        "pin",
        "📌",
        "Anchors a key fact that later reasoning depends on.",
        ANY,
        Required,
        &[],
        "📌 First report was on 2024-11-06.",
    ),
    spec(
        "section",
        "📑",
        "Opens a new section of the document.",
        ANY,
        Optional,
        &[],
        "📑 Background",
    ),
    spec(
        "summary",
        "🧾",
        "Introduces a summary of the preceding material.",
        ANY,
        Optional,
        &[],
        "🧾 Two reports, one open investigation.",
    ),
    spec(
        "note",
        "📝",
        "Marks a side note that does not change the record.",
        ANY,
        Optional,
        &[],
        "📝 Caller asked to remain anonymous.",
    ),
    spec(
        "reference",
        "🔗",
        "Points to a related document, record or source.",
        ANY,
        Conditional,
        &[],
        "🔗 See intake form 4471.",
    ),
    spec(
        "quote",
        "💬",
        "Marks verbatim speech or a quoted statement.",
        HUMAN_LLM,
        Conditional,
        &[],
        "💬 \"I don't want to go home.\"",
    ),
];

/// Legal and policy references: statutes, procedures, consent, deadlines.
pub const LEGAL_POLICY: &[SymbolSpec] = &[
    spec(
        "law",
        "⚖️",
        "Cites a statute, regulation or other binding legal requirement.",
        ANY,
        Conditional,
        &[],
        "⚖️ Mandatory reporting applies under section 12.",
    ),
    spec(
        "policy",
        "📜",
        "Cites an internal policy or procedure.",
        ANY,
        Conditional,
        &[],
        "📜 Follow the two-visit rule for home checks.",
    ),
    spec(
        "authority",
        "🏛️",
        "Names a court, agency or other body with decision power.",
        ANY,
        Optional,
        &[],
        "🏛️ Family court hearing set for March.",
    ),
    spec(
        "consent",
        "✍️",
        "Records that consent was given, and by whom.",
        HUMAN_TOOL,
        Conditional,
        &["🙅"],
        "✍️ Mother signed the information-sharing form.",
    ),
    spec(
        "refusal",
        "🙅",
        "Records that consent was refused or withdrawn.",
        HUMAN_TOOL,
        Conditional,
        &["✍️"],
        "🙅 Father declined the home visit.",
    ),
    spec(
        "deadline",
        "📅",
        "States a legal or procedural deadline.",
        ANY,
        Conditional,
        &[],
        "📅 Assessment due within 45 days.",
    ),
    spec(
        "evidence",
        "📎",
        "Marks material that may serve as evidence.",
        HUMAN_TOOL,
        Optional,
        &[],
        "📎 Photos attached to the case file.",
    ),
];

/// Reasoning steps: analysis, inference, hypotheses, conclusions.
pub const REASONING: &[SymbolSpec] = &[
    spec(
        "analyze",
        "🔍",
        "Marks analysis or close examination of the available facts.",
        ANY,
        Optional,
        &[],
        "🔍 Reports differ on the date of the incident.",
    ),
    spec(
        "infer",
        "🧠",
        "Marks an inference drawn from stated facts.",
        HUMAN_LLM,
        Optional,
        &[],
        "🧠 The gap in school attendance suggests the family moved.",
    ),
    spec(
        "hypothesis",
        "💡",
        "Proposes an explanation that still needs checking.",
        HUMAN_LLM,
        Optional,
        &["🎯"],
        "💡 The school may hold an older address.",
    ),
    spec(
        "assumption",
        "🤔",
        "Flags an assumption made without direct evidence.",
        ANY,
        Conditional,
        &[],
        "🤔 Assuming the neighbour is the same caller as in March.",
    ),
    spec(
        "conclusion",
        "🎯",
        "States a conclusion the author stands behind.",
        HUMAN_LLM,
        Optional,
        &["💡", "❓"],
        "🎯 Threshold for a formal assessment is met.",
    ),
    spec(
        "question",
        "❓",
        "Marks an open question or unresolved point.",
        ANY,
        Optional,
        &["🎯"],
        "❓ Who else lives at the address?",
    ),
];

/// Work items and their progress.
pub const TASKS: &[SymbolSpec] = &[
    spec(
        "todo",
        "🔲",
        "An action that still has to be done.",
        ANY,
        Optional,
        &["🔄", "✅"],
        "🔲 Request health visitor records.",
    ),
    spec(
        "inProgress",
        "🔄",
        "An action currently being worked on.",
        ANY,
        Optional,
        &["🔲", "✅"],
        "🔄 Contacting the school safeguarding lead.",
    ),
    spec(
        "done",
        "✅",
        "An action that has been completed.",
        ANY,
        Optional,
        &["🔲", "🔄"],
        "✅ Home visit completed.",
    ),
    spec(
        "blocked",
        "🚧",
        "An action that cannot proceed until something else happens.",
        ANY,
        Optional,
        &[],
        "🚧 Waiting for court order before records can be shared.",
    ),
    spec(
        "assign",
        "👉",
        "Assigns an action to a named person or team.",
        HUMAN_TOOL,
        Conditional,
        &[],
        "👉 Duty team to call the GP.",
    ),
    spec(
        "followUp",
        "🔁",
        "A recurring or follow-up action.",
        ANY,
        Optional,
        &[],
        "🔁 Check in with the family weekly.",
    ),
];

/// Confidentiality and handling of personal data.
pub const PRIVACY: &[SymbolSpec] = &[
    spec(
        "confidential",
        "🔒",
        "Content that must not leave the authorised audience.",
        ANY,
        Conditional,
        &["🔓"],
        "🔒 Informant details held separately.",
    ),
    spec(
        "public",
        "🔓",
        "Content cleared for sharing outside the case team.",
        HUMAN,
        Conditional,
        &["🔒"],
        "🔓 Meeting outcome may be shared with the school.",
    ),
    spec(
        "redacted",
        "⬛",
        "Marks where content has been removed.",
        HUMAN_TOOL,
        Conditional,
        &[],
        "Address: ⬛",
    ),
    spec(
        "identity",
        "🪪",
        "Marks personally identifying information.",
        ANY,
        Conditional,
        &[],
        "🪪 Date of birth confirmed against passport.",
    ),
    spec(
        "sensitive",
        "🙈",
        "Content that needs care when displayed or summarised.",
        ANY,
        Optional,
        &[],
        "🙈 Details of the disclosure are in the restricted note.",
    ),
];

/// Participants referred to in the record.
pub const ACTORS: &[SymbolSpec] = &[
    spec(
        "person",
        "👤",
        "Refers to an individual person.",
        ANY,
        Optional,
        &[],
        "👤 Neighbour made the second call.",
    ),
    spec(
        "group",
        "👥",
        "Refers to a family, household or other group.",
        ANY,
        Optional,
        &[],
        "👥 Household of four adults.",
    ),
    spec(
        "child",
        "🧒",
        "Refers to a child involved in the case.",
        ANY,
        Optional,
        &[],
        "🧒 Child A, aged 7.",
    ),
    spec(
        "professional",
        "💼",
        "Refers to a professional acting in an official role.",
        ANY,
        Optional,
        &[],
        "💼 School nurse attended the meeting.",
    ),
    spec(
        "assistant",
        "🤖",
        "Refers to an AI model contributing to the record.",
        LLM_TOOL,
        Optional,
        &[],
        "🤖 Summary drafted by the assistant, reviewed by duty manager.",
    ),
    spec(
        "tool",
        "🛠️",
        "Refers to an automated tool or system.",
        TOOL,
        Optional,
        &[],
        "🛠️ Imported from the referral portal.",
    ),
    spec(
        "agency",
        "🏢",
        "Refers to an organisation or agency.",
        ANY,
        Optional,
        &[],
        "🏢 Police child protection unit notified.",
    ),
];

/// Status of facts, risks and outcomes.
pub const STATE: &[SymbolSpec] = &[
    spec(
        "pending",
        "⏳",
        "Something is waiting on an outcome.",
        ANY,
        Optional,
        &["🟢"],
        "⏳ Investigation is still pending.",
    ),
    spec(
        "warning",
        "⚠️",
        "A risk or concern that needs attention.",
        ANY,
        Conditional,
        &[],
        "⚠️ Parent has raised safety concerns.",
    ),
    spec(
        "critical",
        "🚨",
        "An urgent risk that needs immediate action.",
        ANY,
        Conditional,
        &[],
        "🚨 Child reported missing overnight.",
    ),
    spec(
        "resolved",
        "🟢",
        "Something has reached a final, settled outcome.",
        ANY,
        Optional,
        &["⏳", "🔺"],
        "🟢 Housing issue resolved.",
    ),
    spec(
        "escalated",
        "🔺",
        "Something has been passed to a higher level of authority.",
        ANY,
        Optional,
        &["🟢"],
        "🔺 Escalated to the team manager.",
    ),
    spec(
        "stale",
        "🧊",
        "Information that may be out of date.",
        LLM_TOOL,
        Optional,
        &[],
        "🧊 Contact number last verified in 2022.",
    ),
];

/// Flow control for whoever processes the record next.
pub const CONTROL: &[SymbolSpec] = &[
    spec(
        "stop",
        "🛑",
        "Halt: do not continue processing past this point.",
        HUMAN,
        Required,
        &["▶️"],
        "🛑 Do not contact the father directly.",
    ),
    spec(
        "resume",
        "▶️",
        "Processing may continue.",
        HUMAN,
        Conditional,
        &["🛑"],
        "▶️ Cleared to resume contact after strategy meeting.",
    ),
    spec(
        "approve",
        "👍",
        "Approves the preceding proposal or action.",
        HUMAN,
        Conditional,
        &["👎"],
        "👍 Plan approved by duty manager.",
    ),
    spec(
        "reject",
        "👎",
        "Rejects the preceding proposal or action.",
        HUMAN,
        Conditional,
        &["👍"],
        "👎 Closure request declined.",
    ),
    spec(
        "review",
        "👀",
        "Needs review before anyone acts on it.",
        ANY,
        Conditional,
        &[],
        "👀 Check the summary against the original referral.",
    ),
    spec(
        "handoff",
        "🤝",
        "Hands responsibility to another participant.",
        ANY,
        Optional,
        &[],
        "🤝 Case passed to the long-term team.",
    ),
];

/// Return the const table for a category.
pub fn table(id: CategoryId) -> &'static [SymbolSpec] {
    match id {
        CategoryId::Structure => STRUCTURE,
        CategoryId::LegalPolicy => LEGAL_POLICY,
        CategoryId::Reasoning => REASONING,
        CategoryId::Tasks => TASKS,
        CategoryId::Privacy => PRIVACY,
        CategoryId::Actors => ACTORS,
        CategoryId::State => STATE,
        CategoryId::Control => CONTROL,
    }
}

/// Return the canonical vocabulary, building it on first use.
pub fn canonical() -> &'static Vocabulary {
    static CANONICAL: OnceLock<Vocabulary> = OnceLock::new();
    CANONICAL.get_or_init(build_canonical)
}

fn build_canonical() -> Vocabulary {
    let mut vocab = Vocabulary::default();
    for id in CategoryId::ALL {
        let category = vocab.category_mut(id);
        for s in table(id) {
            category.insert(s.key.to_string(), s.to_definition(id));
        }
    }
    vocab
}

const fn spec(
    key: &'static str,
    grapheme: &'static str,
    meaning: &'static str,
    contexts: &'static [Context],
    usage: UsageLevel,
    conflicts_with: &'static [&'static str],
    example: &'static str,
) -> SymbolSpec {
    SymbolSpec {
        key,
        grapheme,
        meaning,
        contexts,
        usage,
        conflicts_with,
        example,
    }
}
