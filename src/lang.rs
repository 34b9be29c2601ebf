//! Language table: extension detection plus the per-language knobs every
//! analyzer needs (comment markers, constant keywords, function boundary
//! style, fix-snippet syntax).
//!
//! Adding a language means adding one `LanguageSpec` entry and, when fix
//! synthesis should support it, extending the snippet methods below.

use std::path::Path;

/// How function bodies are delimited in a language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionSyntax {
    /// Body runs from the header to the matching closing brace.
    Braces,
    /// Body runs while lines stay indented deeper than the header.
    Indent,
}

#[derive(Debug)]
pub struct LanguageSpec {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    /// Line comment markers, used for comment-ratio and comment-skip checks.
    pub line_comments: &'static [&'static str],
    /// Keywords that open a constant declaration; such lines are assumed
    /// already named and never contribute magic numbers.
    pub const_keywords: &'static [&'static str],
    /// Markers that open a function header. Empty means the C-family
    /// heuristic applies (brace-scoped languages only).
    pub function_markers: &'static [&'static str],
    pub function_syntax: FunctionSyntax,
}

pub fn languages() -> &'static [LanguageSpec] {
    use FunctionSyntax::{Braces, Indent};
    static LANGUAGES: &[LanguageSpec] = &[
        LanguageSpec {
            name: "Rust",
            extensions: &["rs"],
            line_comments: &["//"],
            const_keywords: &["const", "static"],
            function_markers: &["fn "],
            function_syntax: Braces,
        },
        LanguageSpec {
            name: "TypeScript",
            extensions: &["ts", "tsx", "mts", "cts"],
            line_comments: &["//"],
            const_keywords: &["const", "readonly"],
            function_markers: &["function "],
            function_syntax: Braces,
        },
        LanguageSpec {
            name: "JavaScript",
            extensions: &["js", "jsx", "mjs", "cjs"],
            line_comments: &["//"],
            const_keywords: &["const"],
            function_markers: &["function "],
            function_syntax: Braces,
        },
        LanguageSpec {
            name: "Python",
            extensions: &["py", "pyi"],
            line_comments: &["#"],
            const_keywords: &[],
            function_markers: &["def "],
            function_syntax: Indent,
        },
        LanguageSpec {
            name: "Go",
            extensions: &["go"],
            line_comments: &["//"],
            const_keywords: &["const"],
            function_markers: &["func "],
            function_syntax: Braces,
        },
        LanguageSpec {
            name: "Java",
            extensions: &["java"],
            line_comments: &["//"],
            const_keywords: &["final", "static"],
            function_markers: &[],
            function_syntax: Braces,
        },
        LanguageSpec {
            name: "C",
            extensions: &["c", "h"],
            line_comments: &["//"],
            const_keywords: &["const", "#define"],
            function_markers: &[],
            function_syntax: Braces,
        },
        LanguageSpec {
            name: "C++",
            extensions: &["cpp", "cxx", "cc", "hpp", "hxx"],
            line_comments: &["//"],
            const_keywords: &["const", "constexpr", "#define"],
            function_markers: &[],
            function_syntax: Braces,
        },
        LanguageSpec {
            name: "C#",
            extensions: &["cs"],
            line_comments: &["//"],
            const_keywords: &["const", "readonly"],
            function_markers: &[],
            function_syntax: Braces,
        },
        LanguageSpec {
            name: "Ruby",
            extensions: &["rb"],
            line_comments: &["#"],
            const_keywords: &[],
            function_markers: &["def "],
            function_syntax: Indent,
        },
        LanguageSpec {
            name: "Kotlin",
            extensions: &["kt", "kts"],
            line_comments: &["//"],
            const_keywords: &["const", "val"],
            function_markers: &["fun "],
            function_syntax: Braces,
        },
        LanguageSpec {
            name: "Swift",
            extensions: &["swift"],
            line_comments: &["//"],
            const_keywords: &["let"],
            function_markers: &["func "],
            function_syntax: Braces,
        },
        LanguageSpec {
            name: "Scala",
            extensions: &["scala", "sc"],
            line_comments: &["//"],
            const_keywords: &["val", "final"],
            function_markers: &["def "],
            function_syntax: Braces,
        },
        LanguageSpec {
            name: "PHP",
            extensions: &["php"],
            line_comments: &["//", "#"],
            const_keywords: &["const", "define"],
            function_markers: &["function "],
            function_syntax: Braces,
        },
        LanguageSpec {
            name: "Shell",
            extensions: &["sh", "bash", "zsh"],
            line_comments: &["#"],
            const_keywords: &["readonly"],
            function_markers: &[],
            function_syntax: Braces,
        },
    ];
    LANGUAGES
}

/// Detect a language by file extension. Returns `None` for files this tool
/// does not analyze; the scanner skips them entirely.
pub fn detect(path: &Path) -> Option<&'static LanguageSpec> {
    let ext = path.extension()?.to_str()?;
    languages().iter().find(|spec| spec.extensions.contains(&ext))
}

impl LanguageSpec {
    /// Whether a trimmed line is comment-only for this language.
    pub fn is_comment_line(&self, trimmed: &str) -> bool {
        self.line_comments.iter().any(|m| trimmed.starts_with(m))
    }

    /// The helper name used in synthesized extraction skeletons, following
    /// the language's naming convention.
    pub fn helper_name(&self) -> &'static str {
        match self.name {
            "Rust" | "Python" | "Ruby" | "C" | "C++" => "extracted_block",
            _ => "extractedBlock",
        }
    }

    /// A no-argument, void-returning function skeleton wrapping `body`,
    /// or `None` when fix synthesis does not cover this language.
    pub fn function_skeleton(&self, name: &str, body: &[String]) -> Option<String> {
        let indented: String = body
            .iter()
            .map(|l| format!("    {}", l.trim()))
            .collect::<Vec<_>>()
            .join("\n");
        match self.name {
            "JavaScript" | "TypeScript" | "PHP" => {
                Some(format!("function {name}() {{\n{indented}\n}}"))
            }
            "Rust" => Some(format!("fn {name}() {{\n{indented}\n}}")),
            "Go" => Some(format!("func {name}() {{\n{indented}\n}}")),
            "Kotlin" => Some(format!("fun {name}() {{\n{indented}\n}}")),
            "Swift" => Some(format!("func {name}() {{\n{indented}\n}}")),
            "Scala" => Some(format!("def {name}(): Unit = {{\n{indented}\n}}")),
            "Java" | "C#" => Some(format!("private static void {name}() {{\n{indented}\n}}")),
            "C" | "C++" => Some(format!("static void {name}(void) {{\n{indented}\n}}")),
            "Python" => Some(format!("def {name}():\n{indented}")),
            "Ruby" => Some(format!("def {name}\n{indented}\nend")),
            _ => None,
        }
    }

    /// The statement that replaces a duplicate site with a call to the
    /// extracted helper.
    pub fn call_statement(&self, name: &str) -> Option<String> {
        match self.name {
            "Python" | "Ruby" | "Go" | "Kotlin" | "Swift" | "Scala" => Some(format!("{name}()")),
            "JavaScript" | "TypeScript" | "PHP" | "Rust" | "Java" | "C#" | "C" | "C++" => {
                Some(format!("{name}();"))
            }
            _ => None,
        }
    }

    /// A named-constant declaration for an extracted magic number,
    /// or `None` when fix synthesis does not cover this language.
    pub fn const_decl(&self, name: &str, value: &str) -> Option<String> {
        match self.name {
            "JavaScript" | "TypeScript" | "PHP" => Some(format!("const {name} = {value};")),
            "Rust" => Some(format!("const {name}: i64 = {value};")),
            "Go" => Some(format!("const {name} = {value}")),
            "Java" => Some(format!("static final long {name} = {value};")),
            "C" | "C++" | "C#" => Some(format!("const long {name} = {value};")),
            "Kotlin" => Some(format!("const val {name} = {value}")),
            "Swift" => Some(format!("let {name} = {value}")),
            "Scala" => Some(format!("val {name} = {value}")),
            "Python" | "Ruby" => Some(format!("{name} = {value}")),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "lang_test.rs"]
mod tests;
