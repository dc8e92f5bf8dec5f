use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const LAST_SESSION_KEY: &str = "notepad-last-session";
pub const SAVED_FILES_KEY: &str = "notepad-saved-files";
pub const AUTOSAVE_DELAY_MS: f64 = 2000.0;
pub const DEFAULT_FILE_NAME: &str = "untitled";
pub const WELCOME_CODE: &str =
    "// Welcome to Code Notepad\n// Start typing your code here...\n\nconsole.log(\"Hello, World!\");";

/// Language tag of the notepad buffer. Only used to pick file extensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    JavaScript,
    TypeScript,
    Python,
    Java,
    Cpp,
    CSharp,
    Php,
    Go,
    Rust,
    Html,
    Css,
    Json,
    Xml,
    Markdown,
    Yaml,
    Sql,
    /// Anything else, including tags written by other versions of the site.
    #[serde(other)]
    PlainText,
}

impl Language {
    pub const ALL: [Language; 16] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Python,
        Language::Java,
        Language::Cpp,
        Language::CSharp,
        Language::Php,
        Language::Go,
        Language::Rust,
        Language::Html,
        Language::Css,
        Language::Json,
        Language::Xml,
        Language::Markdown,
        Language::Yaml,
        Language::Sql,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            Language::JavaScript => "javascript",
            Language::TypeScript => "typescript",
            Language::Python => "python",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::CSharp => "csharp",
            Language::Php => "php",
            Language::Go => "go",
            Language::Rust => "rust",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Xml => "xml",
            Language::Markdown => "markdown",
            Language::Yaml => "yaml",
            Language::Sql => "sql",
            Language::PlainText => "plaintext",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
            Language::Python => "Python",
            Language::Java => "Java",
            Language::Cpp => "C++",
            Language::CSharp => "C#",
            Language::Php => "PHP",
            Language::Go => "Go",
            Language::Rust => "Rust",
            Language::Html => "HTML",
            Language::Css => "CSS",
            Language::Json => "JSON",
            Language::Xml => "XML",
            Language::Markdown => "Markdown",
            Language::Yaml => "YAML",
            Language::Sql => "SQL",
            Language::PlainText => "Plain Text",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            Language::JavaScript => "js",
            Language::TypeScript => "ts",
            Language::Python => "py",
            Language::Java => "java",
            Language::Cpp => "cpp",
            Language::CSharp => "cs",
            Language::Php => "php",
            Language::Go => "go",
            Language::Rust => "rs",
            Language::Html => "html",
            Language::Css => "css",
            Language::Json => "json",
            Language::Xml => "xml",
            Language::Markdown => "md",
            Language::Yaml => "yml",
            Language::Sql => "sql",
            Language::PlainText => "txt",
        }
    }

    /// Case-insensitive; `None` for extensions the notepad doesn't recognise.
    pub fn from_extension(ext: &str) -> Option<Language> {
        let lang = match ext.to_ascii_lowercase().as_str() {
            "js" => Language::JavaScript,
            "ts" => Language::TypeScript,
            "py" => Language::Python,
            "java" => Language::Java,
            "cpp" => Language::Cpp,
            "cs" => Language::CSharp,
            "php" => Language::Php,
            "go" => Language::Go,
            "rs" => Language::Rust,
            "html" => Language::Html,
            "css" => Language::Css,
            "json" => Language::Json,
            "xml" => Language::Xml,
            "md" => Language::Markdown,
            "yml" | "yaml" => Language::Yaml,
            "sql" => Language::Sql,
            _ => return None,
        };
        Some(lang)
    }
}

impl From<&str> for Language {
    fn from(value: &str) -> Self {
        Language::ALL
            .into_iter()
            .find(|l| l.tag() == value)
            .unwrap_or(Language::PlainText)
    }
}

/// `accept` attribute for the upload picker.
pub fn upload_accept() -> String {
    let mut exts = vec![".txt".to_string()];
    exts.extend(Language::ALL.iter().map(|l| format!(".{}", l.extension())));
    // `yml` is the canonical extension, but both spellings are recognised
    exts.push(".yaml".to_string());
    exts.join(",")
}

/// The buffer as it was when autosave last fired.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditorSession {
    pub code: String,
    pub language: Language,
    pub file_name: String,
    pub timestamp: DateTime<Utc>,
}

impl EditorSession {
    pub fn capture(code: &str, language: Language, file_name: &str, now: DateTime<Utc>) -> Self {
        Self {
            code: code.to_string(),
            language,
            file_name: file_name.to_string(),
            timestamp: now,
        }
    }

    /// The `(code, language, file_name)` to load into an editor currently
    /// holding `code` and `file_name`. Empty stored text keeps what's there;
    /// the language always comes from the session.
    pub fn restore(&self, code: &str, file_name: &str) -> (String, Language, String) {
        let pick = |stored: &str, current: &str| {
            let kept = if stored.is_empty() { current } else { stored };
            kept.to_string()
        };
        (
            pick(&self.code, code),
            self.language,
            pick(&self.file_name, file_name),
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedFile {
    pub id: String,
    pub name: String,
    pub language: Language,
    pub code: String,
    pub timestamp: DateTime<Utc>,
}

/// Named saves, oldest first. At most one entry per name.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SavedFiles(Vec<SavedFile>);

impl SavedFiles {
    /// Replaces any entry with the same (defaulted) name and appends the new one.
    pub fn upsert(
        &mut self,
        name: &str,
        language: Language,
        code: &str,
        now: DateTime<Utc>,
    ) -> &SavedFile {
        let name = file_name_or_default(name).to_string();
        self.0.retain(|f| f.name != name);

        let base_id = now.timestamp_millis().to_string();
        let mut id = base_id.clone();
        let mut n = 1;
        while self.0.iter().any(|f| f.id == id) {
            id = format!("{base_id}-{n}");
            n += 1;
        }

        self.0.push(SavedFile {
            id,
            name,
            language,
            code: code.to_string(),
            timestamp: now,
        });
        &self.0[self.0.len() - 1]
    }

    pub fn remove(&mut self, id: &str) -> Option<SavedFile> {
        let pos = self.0.iter().position(|f| f.id == id)?;
        Some(self.0.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&SavedFile> {
        self.0.iter().find(|f| f.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SavedFile> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

pub fn file_name_or_default(name: &str) -> &str {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        DEFAULT_FILE_NAME
    } else {
        trimmed
    }
}

pub fn download_name(file_name: &str, language: Language) -> String {
    format!(
        "{}.{}",
        file_name_or_default(file_name),
        language.extension()
    )
}

/// Splits an uploaded file name into the editor's file name (everything
/// before the first `.`) and the language its last extension implies.
pub fn parse_upload_name(upload: &str) -> (String, Option<Language>) {
    let stem = upload.split('.').next().unwrap_or_default().to_string();
    let language = upload
        .rsplit_once('.')
        .and_then(|(_, ext)| Language::from_extension(ext));
    (stem, language)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferStats {
    pub lines: usize,
    pub chars: usize,
}

impl BufferStats {
    pub fn of(code: &str) -> Self {
        Self {
            lines: code.split('\n').count(),
            chars: code.encode_utf16().count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(millis: i64) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(millis).unwrap()
    }

    #[test]
    fn test_save_same_name_twice_keeps_one_entry() {
        let mut files = SavedFiles::default();
        files.upsert("x", Language::Rust, "first", at(1_000));
        files.upsert("other", Language::Go, "unrelated", at(1_500));
        files.upsert("x", Language::Python, "second", at(2_000));

        let named_x = files.iter().filter(|f| f.name == "x").collect::<Vec<_>>();
        assert_eq!(named_x.len(), 1);
        assert_eq!(named_x[0].code, "second");
        assert_eq!(named_x[0].language, Language::Python);
        assert_eq!(files.len(), 2);
        // replaced entry moves to the end
        assert_eq!(files.iter().last().map(|f| f.name.as_str()), Some("x"));
    }

    #[test]
    fn test_blank_name_saves_as_untitled() {
        let mut files = SavedFiles::default();
        let saved = files.upsert("   ", Language::Json, "{}", at(10));
        assert_eq!(saved.name, "untitled");
    }

    #[test]
    fn test_ids_stay_unique_within_a_millisecond() {
        let mut files = SavedFiles::default();
        let a = files.upsert("a", Language::Rust, "", at(42)).id.clone();
        let b = files.upsert("b", Language::Rust, "", at(42)).id.clone();
        assert_ne!(a, b);
        assert_eq!(a, "42");
    }

    #[test]
    fn test_remove_by_id() {
        let mut files = SavedFiles::default();
        let id = files.upsert("a", Language::Rust, "fn main() {}", at(1)).id.clone();
        files.upsert("b", Language::Go, "package main", at(2));

        let removed = files.remove(&id).expect("entry should exist");
        assert_eq!(removed.name, "a");
        assert!(files.get(&id).is_none());
        assert_eq!(files.len(), 1);
        assert!(files.remove("missing").is_none());
    }

    #[test]
    fn test_saved_files_round_trip_json() {
        let mut files = SavedFiles::default();
        files.upsert("notes", Language::Markdown, "# hi", at(5));
        let json = serde_json::to_string(&files).unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"language\":\"markdown\""));
        let back: SavedFiles = serde_json::from_str(&json).unwrap();
        assert_eq!(back, files);
    }

    #[test]
    fn test_session_uses_camel_case_keys() {
        let session = EditorSession {
            code: "x".into(),
            language: Language::CSharp,
            file_name: "Program".into(),
            timestamp: at(0),
        };
        let json = serde_json::to_string(&session).unwrap();
        assert!(json.contains("\"fileName\":\"Program\""));
        assert!(json.contains("\"language\":\"csharp\""));
    }

    #[test]
    fn test_unknown_stored_tag_falls_back_to_plain_text() {
        let lang: Language = serde_json::from_str("\"cobol\"").unwrap();
        assert_eq!(lang, Language::PlainText);
        assert_eq!(lang.extension(), "txt");
        assert_eq!(Language::from("cobol"), Language::PlainText);
        assert_eq!(Language::from("rust"), Language::Rust);
    }

    #[test]
    fn test_extension_mapping_round_trips() {
        for lang in Language::ALL {
            assert_eq!(Language::from_extension(lang.extension()), Some(lang));
            assert_eq!(Language::from(lang.tag()), lang);
        }
        assert_eq!(Language::from_extension("yaml"), Some(Language::Yaml));
        assert_eq!(Language::from_extension("PY"), Some(Language::Python));
        assert_eq!(Language::from_extension("exe"), None);
    }

    #[test]
    fn test_download_name() {
        assert_eq!(download_name("main", Language::Rust), "main.rs");
        assert_eq!(download_name("", Language::Yaml), "untitled.yml");
        assert_eq!(download_name("notes", Language::PlainText), "notes.txt");
    }

    #[test]
    fn test_parse_upload_name() {
        assert_eq!(
            parse_upload_name("script.py"),
            ("script".to_string(), Some(Language::Python))
        );
        assert_eq!(
            parse_upload_name("config.prod.YAML"),
            ("config".to_string(), Some(Language::Yaml))
        );
        assert_eq!(parse_upload_name("Makefile"), ("Makefile".to_string(), None));
        assert_eq!(parse_upload_name("notes.txt"), ("notes".to_string(), None));
    }

    #[test]
    fn test_upload_accept_lists_every_extension() {
        let accept = upload_accept();
        let exts = accept.split(',').collect::<Vec<_>>();
        assert!(exts.contains(&".txt"));
        assert!(exts.contains(&".yaml"));
        for lang in Language::ALL {
            let ext = format!(".{}", lang.extension());
            assert!(exts.contains(&ext.as_str()), "missing {ext}");
        }
        assert_eq!(exts.len(), 18);
    }

    #[test]
    fn test_buffer_stats() {
        assert_eq!(BufferStats::of(""), BufferStats { lines: 1, chars: 0 });
        assert_eq!(BufferStats::of("a\nbc\n"), BufferStats { lines: 3, chars: 5 });
    }

    #[test]
    fn test_restore_keeps_defaults_for_empty_fields() {
        let session = EditorSession::capture("", Language::Go, "", at(0));
        assert_eq!(
            session.restore(WELCOME_CODE, DEFAULT_FILE_NAME),
            (
                WELCOME_CODE.to_string(),
                Language::Go,
                DEFAULT_FILE_NAME.to_string()
            )
        );
    }

    #[test]
    fn test_autosaved_session_restores_into_fresh_editor() {
        let session = EditorSession::capture("fn main() {}", Language::Rust, "main", at(7));
        let stored = serde_json::to_string(&Some(session)).unwrap();

        // next visit: the editor starts from its defaults
        let reloaded: Option<EditorSession> = serde_json::from_str(&stored).unwrap();
        let restored = reloaded
            .map(|s| s.restore(WELCOME_CODE, DEFAULT_FILE_NAME))
            .unwrap();
        assert_eq!(
            restored,
            ("fn main() {}".to_string(), Language::Rust, "main".to_string())
        );
    }
}
